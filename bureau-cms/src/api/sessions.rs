//! Editor sessions
//!
//! Each session owns a working copy of one page's content and the snapshot
//! taken when it was opened. Edits stay in memory until the session is saved;
//! a successful save or a discard ends the session.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use bureau_common::content::{compose, ContentSession, ListEdit, RenderedPage};
use bureau_common::db::{load_page_content, save_page_content};
use bureau_common::Page;
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use super::pages::parse_page;
use super::ApiError;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub page: String,
}

#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub id: Uuid,
    pub page: Page,
    pub has_changes: bool,
    pub modified_keys: Vec<String>,
}

impl From<&ContentSession> for SessionSummary {
    fn from(session: &ContentSession) -> Self {
        Self {
            id: session.id(),
            page: session.page(),
            has_changes: session.has_changes(),
            modified_keys: session.modified_keys(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ContentChangeRequest {
    pub key: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub struct ContentChangeResponse {
    pub key: String,
    pub modified: bool,
    pub has_changes: bool,
}

#[derive(Debug, Serialize)]
pub struct ListEditResponse {
    pub key: String,
    pub items: serde_json::Value,
    pub modified: bool,
}

#[derive(Debug, Deserialize)]
pub struct PreviewQuery {
    /// Render editor controls (default true)
    #[serde(default = "default_editor")]
    pub editor: bool,
}

fn default_editor() -> bool {
    true
}

#[derive(Debug, Serialize)]
pub struct SaveSessionResponse {
    pub id: Uuid,
    pub page: Page,
    pub saved: usize,
}

fn session_not_found(id: Uuid) -> ApiError {
    ApiError::NotFound(format!("Session not found: {}", id))
}

/// POST /api/sessions
pub async fn create_session(
    State(state): State<AppState>,
    Json(request): Json<CreateSessionRequest>,
) -> Result<(StatusCode, Json<SessionSummary>), ApiError> {
    let page = parse_page(&request.page)?;
    let loaded = load_page_content(&state.db, page).await?;
    let session = ContentSession::new(page, loaded);
    let summary = SessionSummary::from(&session);

    info!("Opened editor session {} for page {}", session.id(), page);
    state.sessions.insert(session).await;

    Ok((StatusCode::CREATED, Json(summary)))
}

/// GET /api/sessions/:id
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SessionSummary>, ApiError> {
    state
        .sessions
        .with_session(id, |session| Json(SessionSummary::from(&*session)))
        .await
        .ok_or_else(|| session_not_found(id))
}

/// DELETE /api/sessions/:id
///
/// Drops the working copy without saving.
pub async fn discard_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let session = state
        .sessions
        .remove(id)
        .await
        .ok_or_else(|| session_not_found(id))?;

    if session.has_changes() {
        info!(
            "Discarded session {} with {} unsaved changes",
            id,
            session.modified_keys().len()
        );
    }
    Ok(StatusCode::NO_CONTENT)
}

/// PATCH /api/sessions/:id/content
pub async fn change_content(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ContentChangeRequest>,
) -> Result<Json<ContentChangeResponse>, ApiError> {
    let response = state
        .sessions
        .with_session(id, |session| {
            session.set_field(&request.key, request.value)?;
            Ok::<_, bureau_common::Error>(ContentChangeResponse {
                modified: session.is_modified(&request.key),
                has_changes: session.has_changes(),
                key: request.key,
            })
        })
        .await
        .ok_or_else(|| session_not_found(id))??;

    Ok(Json(response))
}

/// POST /api/sessions/:id/lists/:key
pub async fn edit_list(
    State(state): State<AppState>,
    Path((id, key)): Path<(Uuid, String)>,
    Json(edit): Json<ListEdit>,
) -> Result<Json<ListEditResponse>, ApiError> {
    let resolver = state.resolver;
    let response = state
        .sessions
        .with_session(id, |session| {
            let list = session.apply_list_edit(&resolver, &key, edit)?;
            Ok::<_, bureau_common::Error>(ListEditResponse {
                items: list.items_json(),
                modified: session.is_modified(&key),
                key,
            })
        })
        .await
        .ok_or_else(|| session_not_found(id))??;

    Ok(Json(response))
}

/// GET /api/sessions/:id/preview
pub async fn preview_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Query(query): Query<PreviewQuery>,
) -> Result<Json<RenderedPage>, ApiError> {
    let resolver = state.resolver;
    state
        .sessions
        .with_session(id, |session| {
            Json(compose(
                session.page(),
                resolver,
                session.content(),
                session.original(),
                query.editor,
            ))
        })
        .await
        .ok_or_else(|| session_not_found(id))
}

/// POST /api/sessions/:id/save
///
/// Persists changed keys only and ends the session. On failure the session is
/// put back with every edit intact so the save can be retried.
pub async fn save_session(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<SaveSessionResponse>, ApiError> {
    let session = state
        .sessions
        .remove(id)
        .await
        .ok_or_else(|| session_not_found(id))?;

    let page = session.page();
    let changed = session.changed_content();

    let saved = if changed.is_empty() {
        0
    } else {
        match save_page_content(&state.db, page, &changed).await {
            Ok(saved) => saved,
            Err(e) => {
                state.sessions.restore(session).await;
                return Err(e.into());
            }
        }
    };

    info!("Saved session {} ({} changes to page {})", id, saved, page);
    Ok(Json(SaveSessionResponse { id, page, saved }))
}
