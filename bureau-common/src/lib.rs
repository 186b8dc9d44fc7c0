//! # Bureau Common Library
//!
//! Shared code for the speaker bureau CMS services including:
//! - Page content model (keys, content maps, defaults, list codec)
//! - Modification tracking for editor sessions
//! - Page preview composition
//! - Configuration loading
//! - SQLite content store

pub mod config;
pub mod content;
#[cfg(feature = "sqlx")]
pub mod db;
pub mod error;

pub use content::{ContentKey, ContentMap, OriginalSnapshot, Page};
pub use error::{Error, Result};
