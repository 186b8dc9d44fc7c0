//! Content map and original snapshot
//!
//! A `ContentMap` is the flat key → string override store owned by one editor
//! session. Structured lists are stored as JSON-encoded strings under a single
//! key. The `OriginalSnapshot` is the map as loaded, frozen for diffing.

use super::key::Page;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// Flat key → value content overrides
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContentMap(HashMap<String, String>);

impl ContentMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Insert or replace one override, returning the previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Entries under one page's namespace
    pub fn for_page(&self, page: Page) -> ContentMap {
        self.iter()
            .filter(|(k, _)| page.owns_key(k))
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl FromIterator<(String, String)> for ContentMap {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[(&str, &str); N]> for ContentMap {
    fn from(entries: [(&str, &str); N]) -> Self {
        entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }
}

impl From<HashMap<String, String>> for ContentMap {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

/// Content as loaded at session start
///
/// Read-only for the whole session. Cloning shares the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct OriginalSnapshot(Arc<ContentMap>);

impl OriginalSnapshot {
    pub fn capture(content: &ContentMap) -> Self {
        Self(Arc::new(content.clone()))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_map(&self) -> &ContentMap {
        &self.0
    }
}

impl From<ContentMap> for OriginalSnapshot {
    fn from(content: ContentMap) -> Self {
        Self(Arc::new(content))
    }
}
