//! Content store: SQLite persistence for page content overrides

pub mod content;
pub mod init;

pub use content::*;
pub use init::*;
