//! Editable page content model
//!
//! Keyed content overrides with default fallback and modification tracking,
//! used by the CMS page editor and the public page renderer.

pub mod codec;
pub mod composer;
pub mod defaults;
pub mod entities;
pub mod key;
pub mod list_edit;
pub mod map;
pub mod resolver;
pub mod tracker;

pub use codec::{ContentValue, ListKind, ListValue};
pub use composer::{compose, RenderedField, RenderedPage, RenderedSection, SectionDescriptor};
pub use defaults::{DefaultCatalog, FieldDefault, FieldKind, DEFAULTS};
pub use key::{ContentKey, Page};
pub use list_edit::ListEdit;
pub use map::{ContentMap, OriginalSnapshot};
pub use resolver::DefaultResolver;
pub use tracker::{is_modified, ContentSession};
