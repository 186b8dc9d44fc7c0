//! Page layouts, defaults and published rendering

use axum::{
    extract::{Path, State},
    Json,
};
use bureau_common::content::{compose, FieldKind, RenderedPage};
use bureau_common::db::load_page_content;
use bureau_common::{OriginalSnapshot, Page};
use serde::Serialize;

use super::ApiError;
use crate::AppState;

/// One page and its section ids in render order
#[derive(Debug, Serialize)]
pub struct PageLayout {
    pub page: Page,
    pub sections: Vec<&'static str>,
    /// Editable fields across all sections
    pub field_count: usize,
}

#[derive(Debug, Serialize)]
pub struct PagesResponse {
    pub pages: Vec<PageLayout>,
}

/// Catalog entry as exposed to editors
#[derive(Debug, Serialize)]
pub struct DefaultEntry {
    pub key: &'static str,
    pub kind: FieldKind,
    /// Storage form (list defaults JSON-encoded)
    pub default: String,
    pub description: &'static str,
}

/// Catalog entries of one section, in catalog order
#[derive(Debug, Serialize)]
pub struct SectionDefaults {
    pub id: &'static str,
    pub defaults: Vec<DefaultEntry>,
}

#[derive(Debug, Serialize)]
pub struct DefaultsResponse {
    pub page: Page,
    /// Sections in render order
    pub sections: Vec<SectionDefaults>,
}

/// Parse a `:page` path segment
pub(crate) fn parse_page(raw: &str) -> Result<Page, ApiError> {
    raw.parse::<Page>().map_err(ApiError::from)
}

/// GET /api/pages
pub async fn list_pages(State(state): State<AppState>) -> Json<PagesResponse> {
    let catalog = state.resolver.catalog();
    let pages = Page::ALL
        .iter()
        .map(|page| PageLayout {
            page: *page,
            sections: page.sections().iter().map(|s| s.id).collect(),
            field_count: catalog.keys_for_page(*page).len(),
        })
        .collect();

    Json(PagesResponse { pages })
}

/// GET /api/defaults/:page
pub async fn get_defaults(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Result<Json<DefaultsResponse>, ApiError> {
    let page = parse_page(&page)?;
    let catalog = state.resolver.catalog();

    let sections = page
        .sections()
        .iter()
        .map(|section| SectionDefaults {
            id: section.id,
            defaults: catalog
                .keys_for_section(page, section.id)
                .into_iter()
                .filter_map(|key| catalog.get(key))
                .map(|entry| DefaultEntry {
                    key: entry.key,
                    kind: entry.kind,
                    default: entry.encoded_default(),
                    description: entry.description,
                })
                .collect(),
        })
        .collect();

    Ok(Json(DefaultsResponse { page, sections }))
}

/// GET /api/pages/:page/render
///
/// Published view: stored overrides over defaults, static controls, nothing
/// flagged as modified.
pub async fn render_page(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Result<Json<RenderedPage>, ApiError> {
    let page = parse_page(&page)?;
    let content = load_page_content(&state.db, page).await?;
    let original = OriginalSnapshot::capture(&content);

    Ok(Json(compose(page, state.resolver, &content, &original, false)))
}
