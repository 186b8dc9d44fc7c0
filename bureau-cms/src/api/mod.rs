//! HTTP API handlers for bureau-cms

pub mod content;
pub mod error;
pub mod health;
pub mod pages;
pub mod sessions;

pub use content::{delete_override, get_all_content, get_page_content, put_page_content};
pub use error::ApiError;
pub use health::health_routes;
pub use pages::{get_defaults, list_pages, render_page};
pub use sessions::{
    change_content, create_session, discard_session, edit_list, get_session, preview_session,
    save_session,
};
