//! Stored content overrides
//!
//! Raw per-page override maps, without defaults merged in.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use bureau_common::db::{
    delete_content_key, load_all_content, load_page_content, page_updated_at, save_page_content,
};
use bureau_common::{ContentKey, ContentMap, Page};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::info;

use super::pages::parse_page;
use super::ApiError;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct PageContentResponse {
    pub page: Page,
    pub content: ContentMap,
    /// Latest write time across the page's overrides
    pub updated_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SaveResponse {
    pub page: Page,
    pub saved: usize,
}

/// Every stored override, grouped by page
#[derive(Debug, Serialize)]
pub struct AllContentResponse {
    pub pages: BTreeMap<Page, ContentMap>,
}

/// GET /api/content
pub async fn get_all_content(
    State(state): State<AppState>,
) -> Result<Json<AllContentResponse>, ApiError> {
    let all = load_all_content(&state.db).await?;
    let pages = Page::ALL
        .iter()
        .map(|page| (*page, all.for_page(*page)))
        .collect();

    Ok(Json(AllContentResponse { pages }))
}

/// GET /api/content/:page
pub async fn get_page_content(
    State(state): State<AppState>,
    Path(page): Path<String>,
) -> Result<Json<PageContentResponse>, ApiError> {
    let page = parse_page(&page)?;
    let content = load_page_content(&state.db, page).await?;
    let updated_at = page_updated_at(&state.db, page).await?;

    Ok(Json(PageContentResponse {
        page,
        content,
        updated_at,
    }))
}

/// PUT /api/content/:page
///
/// Upserts every entry in the body. Keys not in the body are left alone.
pub async fn put_page_content(
    State(state): State<AppState>,
    Path(page): Path<String>,
    Json(content): Json<ContentMap>,
) -> Result<Json<SaveResponse>, ApiError> {
    let page = parse_page(&page)?;
    let saved = save_page_content(&state.db, page, &content).await?;

    Ok(Json(SaveResponse { page, saved }))
}

/// DELETE /api/content/:page/:key
///
/// Drops one override so the key falls back to its default.
pub async fn delete_override(
    State(state): State<AppState>,
    Path((page, key)): Path<(String, String)>,
) -> Result<StatusCode, ApiError> {
    let page = parse_page(&page)?;
    let key = ContentKey::parse(&key)?;
    if key.page() != page {
        return Err(ApiError::BadRequest(format!(
            "Key {} does not belong to page {}",
            key.as_str(),
            page
        )));
    }

    if !delete_content_key(&state.db, &key).await? {
        return Err(ApiError::NotFound(format!("No override stored for {}", key.as_str())));
    }

    info!("Removed override {}", key.as_str());
    Ok(StatusCode::NO_CONTENT)
}
