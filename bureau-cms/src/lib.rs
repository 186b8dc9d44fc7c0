//! bureau-cms library - page content service
//!
//! Serves stored page content, composed page previews and in-memory editor
//! sessions for the marketing site CMS.

use axum::Router;
use bureau_common::config::DEFAULT_SESSION_IDLE_SECS;
use bureau_common::content::DefaultResolver;
use sqlx::SqlitePool;
use std::time::Duration;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod session_store;

pub use session_store::SessionStore;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Content store connection pool
    pub db: SqlitePool,
    /// Editor sessions, each owning its own working copy
    pub sessions: SessionStore,
    pub resolver: DefaultResolver<'static>,
}

impl AppState {
    /// Create new application state with the default session idle timeout
    pub fn new(db: SqlitePool) -> Self {
        Self::with_session_timeout(db, Duration::from_secs(DEFAULT_SESSION_IDLE_SECS))
    }

    pub fn with_session_timeout(db: SqlitePool, idle_timeout: Duration) -> Self {
        Self {
            db,
            sessions: SessionStore::new(idle_timeout),
            resolver: DefaultResolver::global(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, patch, post};

    let content = Router::new()
        .route("/api/pages", get(api::list_pages))
        .route("/api/pages/:page/render", get(api::render_page))
        .route("/api/defaults/:page", get(api::get_defaults))
        .route("/api/content", get(api::get_all_content))
        .route(
            "/api/content/:page",
            get(api::get_page_content).put(api::put_page_content),
        )
        .route("/api/content/:page/:key", axum::routing::delete(api::delete_override));

    let sessions = Router::new()
        .route("/api/sessions", post(api::create_session))
        .route(
            "/api/sessions/:id",
            get(api::get_session).delete(api::discard_session),
        )
        .route("/api/sessions/:id/content", patch(api::change_content))
        .route("/api/sessions/:id/lists/:key", post(api::edit_list))
        .route("/api/sessions/:id/preview", get(api::preview_session))
        .route("/api/sessions/:id/save", post(api::save_session));

    Router::new()
        .merge(content)
        .merge(sessions)
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
