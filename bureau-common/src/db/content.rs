//! Page content persistence
//!
//! Whole-map reads per page and upsert writes. Concurrent saves are not
//! detected: the later save overwrites the earlier one key by key.

use crate::content::{ContentKey, ContentMap, Page};
use crate::{Error, Result};
use sqlx::SqlitePool;
use tracing::{debug, info};

/// Fetch every stored override for one page
pub async fn load_page_content(pool: &SqlitePool, page: Page) -> Result<ContentMap> {
    let rows: Vec<(String, String)> =
        sqlx::query_as("SELECT key, value FROM page_content WHERE page = ?")
            .bind(page.as_str())
            .fetch_all(pool)
            .await?;

    debug!("Loaded {} content overrides for page {}", rows.len(), page);
    Ok(rows.into_iter().collect())
}

/// Fetch every stored override across all pages
pub async fn load_all_content(pool: &SqlitePool) -> Result<ContentMap> {
    let rows: Vec<(String, String)> = sqlx::query_as("SELECT key, value FROM page_content")
        .fetch_all(pool)
        .await?;

    Ok(rows.into_iter().collect())
}

/// Persist a full or partial content map for one page
///
/// Every key is validated before anything is written; one bad key rejects the
/// whole save. Returns the number of rows written.
pub async fn save_page_content(pool: &SqlitePool, page: Page, content: &ContentMap) -> Result<usize> {
    for key in content.keys() {
        let parsed = ContentKey::parse(key)?;
        if parsed.page() != page {
            return Err(Error::InvalidInput(format!(
                "Key {} does not belong to page {}",
                key, page
            )));
        }
    }

    let updated_at = chrono::Utc::now().to_rfc3339();
    let mut tx = pool.begin().await?;

    for (key, value) in content.iter() {
        sqlx::query(
            r#"
            INSERT INTO page_content (key, page, value, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(page.as_str())
        .bind(value)
        .bind(&updated_at)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;

    info!("Saved {} content overrides for page {}", content.len(), page);
    Ok(content.len())
}

/// Remove one override so the key renders its default again
pub async fn delete_content_key(pool: &SqlitePool, key: &ContentKey) -> Result<bool> {
    let result = sqlx::query("DELETE FROM page_content WHERE key = ?")
        .bind(key.as_str())
        .execute(pool)
        .await?;

    Ok(result.rows_affected() > 0)
}

/// Last write time for a page, if it has any overrides
pub async fn page_updated_at(pool: &SqlitePool, page: Page) -> Result<Option<String>> {
    let updated_at: Option<String> =
        sqlx::query_scalar("SELECT MAX(updated_at) FROM page_content WHERE page = ?")
            .bind(page.as_str())
            .fetch_one(pool)
            .await?;

    Ok(updated_at)
}
