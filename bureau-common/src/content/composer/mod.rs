//! Page preview composer
//!
//! Each page is an explicit, ordered list of section descriptors. Sections
//! are independent: each resolves only keys under its own
//! `<page>.<section>.` namespace, so a bad override is contained to the
//! section that owns it.

mod sections;

use super::codec::ContentValue;
use super::defaults::FieldKind;
use super::key::Page;
use super::map::{ContentMap, OriginalSnapshot};
use super::resolver::DefaultResolver;
use super::tracker::is_modified;
use serde::Serialize;

/// Renders one section from the shared context
pub type SectionRenderFn = fn(&SectionContext<'_>) -> RenderedSection;

/// Named, ordered entry in a page layout
#[derive(Clone, Copy)]
pub struct SectionDescriptor {
    pub id: &'static str,
    pub render: SectionRenderFn,
}

impl std::fmt::Debug for SectionDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SectionDescriptor").field("id", &self.id).finish()
    }
}

impl Page {
    /// Section layout for this page, in render order
    pub fn sections(&self) -> &'static [SectionDescriptor] {
        sections::layout(*self)
    }
}

/// Whether a field renders as an editor control or as static content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldControl {
    Static,
    Editable,
}

/// Everything a section needs to render
pub struct SectionContext<'a> {
    pub page: Page,
    pub resolver: DefaultResolver<'a>,
    pub content: &'a ContentMap,
    pub original: &'a OriginalSnapshot,
    pub editor_mode: bool,
}

impl SectionContext<'_> {
    /// Render `fields` of `section`, all resolved under this page
    pub fn section(&self, section: &'static str, fields: &[&str]) -> RenderedSection {
        let fields = fields
            .iter()
            .map(|field| self.field(&format!("{}.{}.{}", self.page.as_str(), section, field)))
            .collect();

        RenderedSection { id: section, fields }
    }

    fn field(&self, key: &str) -> RenderedField {
        let kind = self
            .resolver
            .catalog()
            .get(key)
            .map(|entry| entry.kind)
            .unwrap_or(FieldKind::Text);

        let value = self
            .resolver
            .value(key, self.content)
            .unwrap_or_else(|| ContentValue::Scalar(String::new()));

        RenderedField {
            key: key.to_string(),
            kind,
            value: value.to_json(),
            modified: is_modified(key, self.content, self.original),
            control: if self.editor_mode {
                FieldControl::Editable
            } else {
                FieldControl::Static
            },
        }
    }
}

/// One resolved field ready for display
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedField {
    pub key: String,
    pub kind: FieldKind,
    /// String for text/image fields, decoded array for list fields
    pub value: serde_json::Value,
    pub modified: bool,
    pub control: FieldControl,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSection {
    pub id: &'static str,
    pub fields: Vec<RenderedField>,
}

impl RenderedSection {
    pub fn field(&self, key: &str) -> Option<&RenderedField> {
        self.fields.iter().find(|f| f.key == key)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedPage {
    pub page: Page,
    pub editor_mode: bool,
    pub sections: Vec<RenderedSection>,
}

impl RenderedPage {
    pub fn section(&self, id: &str) -> Option<&RenderedSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn field(&self, key: &str) -> Option<&RenderedField> {
        self.sections.iter().find_map(|s| s.field(key))
    }

    pub fn fields(&self) -> impl Iterator<Item = &RenderedField> {
        self.sections.iter().flat_map(|s| s.fields.iter())
    }

    pub fn modified_keys(&self) -> Vec<&str> {
        self.fields()
            .filter(|f| f.modified)
            .map(|f| f.key.as_str())
            .collect()
    }
}

/// Assemble a page from its section layout
pub fn compose(
    page: Page,
    resolver: DefaultResolver<'_>,
    content: &ContentMap,
    original: &OriginalSnapshot,
    editor_mode: bool,
) -> RenderedPage {
    let ctx = SectionContext {
        page,
        resolver,
        content,
        original,
        editor_mode,
    };

    let sections = page
        .sections()
        .iter()
        .map(|descriptor| (descriptor.render)(&ctx))
        .collect();

    RenderedPage {
        page,
        editor_mode,
        sections,
    }
}
