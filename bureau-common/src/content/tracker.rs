//! Modification tracking and editor sessions
//!
//! Change detection is a raw string comparison against the snapshot taken at
//! load time. List values are compared as stored JSON text, so re-encoding a
//! semantically identical list with different key order or whitespace still
//! reads as modified.

use super::codec::ListValue;
use super::key::{ContentKey, Page};
use super::list_edit::ListEdit;
use super::map::{ContentMap, OriginalSnapshot};
use super::resolver::DefaultResolver;
use crate::{Error, Result};
use tracing::debug;
use uuid::Uuid;

/// True when `content` and `original` disagree on `key`
///
/// Absent on both sides is unmodified; absent in the original but present in
/// the content is modified.
pub fn is_modified(key: &str, content: &ContentMap, original: &OriginalSnapshot) -> bool {
    content.get(key) != original.get(key)
}

/// One editor's in-memory working copy of a page's content
#[derive(Debug, Clone)]
pub struct ContentSession {
    id: Uuid,
    page: Page,
    content: ContentMap,
    original: OriginalSnapshot,
}

impl ContentSession {
    /// Start a session from content loaded from the store
    pub fn new(page: Page, loaded: ContentMap) -> Self {
        let original = OriginalSnapshot::capture(&loaded);
        Self {
            id: Uuid::new_v4(),
            page,
            content: loaded,
            original,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn page(&self) -> Page {
        self.page
    }

    pub fn content(&self) -> &ContentMap {
        &self.content
    }

    pub fn original(&self) -> &OriginalSnapshot {
        &self.original
    }

    /// Single-key write path used by every field editor
    ///
    /// Only the working copy changes; the snapshot is never touched.
    pub fn on_content_change(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        debug!(session = %self.id, "Content change: {}", key);
        self.content.insert(key, value);
    }

    /// Validated variant of [`on_content_change`](Self::on_content_change)
    ///
    /// Rejects malformed keys and keys outside this session's page.
    pub fn set_field(&mut self, key: &str, value: impl Into<String>) -> Result<()> {
        let parsed = ContentKey::parse(key)?;
        if parsed.page() != self.page {
            return Err(Error::InvalidInput(format!(
                "Key {} does not belong to page {}",
                key, self.page
            )));
        }
        self.on_content_change(parsed.as_str(), value);
        Ok(())
    }

    /// Decode a list field, apply one edit, re-encode it under the same key
    ///
    /// Returns the list as stored after the edit. A stored empty list still
    /// renders its default, see [`ListValue::decode_or`].
    pub fn apply_list_edit(
        &mut self,
        resolver: &DefaultResolver<'_>,
        key: &str,
        edit: ListEdit,
    ) -> Result<ListValue> {
        let parsed = ContentKey::parse(key)?;
        if parsed.page() != self.page {
            return Err(Error::InvalidInput(format!(
                "Key {} does not belong to page {}",
                key, self.page
            )));
        }

        let default = resolver
            .default_list(key)
            .ok_or_else(|| Error::InvalidInput(format!("{} is not a list field", key)))?;

        // Absent or malformed starts from the default; an emptied list stays empty
        let mut list = default.decode_stored_or(self.content.get(key));
        list.apply(edit)?;
        self.on_content_change(key, list.encode());
        Ok(list)
    }

    pub fn is_modified(&self, key: &str) -> bool {
        is_modified(key, &self.content, &self.original)
    }

    /// Keys whose value differs from the snapshot, sorted
    pub fn modified_keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .content
            .keys()
            .chain(self.original.as_map().keys())
            .filter(|k| self.is_modified(k))
            .map(str::to_string)
            .collect();
        keys.sort();
        keys.dedup();
        keys
    }

    pub fn has_changes(&self) -> bool {
        self.content.keys().any(|k| self.is_modified(k))
            || self.original.as_map().keys().any(|k| self.is_modified(k))
    }

    /// Changed entries only, ready for a partial save
    pub fn changed_content(&self) -> ContentMap {
        self.content
            .iter()
            .filter(|(k, _)| self.is_modified(k))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}
