//! # Slot Repository
//!
//! Durable key-value slots, each holding one serialized collection.
//!
//! ## Slot Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  get("cholis")                                                          │
//! │     ├── row missing   → Ok(None)        (caller seeds)                  │
//! │     └── row present   → Ok(Some(json))  (caller parses; may be corrupt) │
//! │                                                                         │
//! │  put("cholis", json)  → INSERT ... ON CONFLICT(key) DO UPDATE           │
//! │                         (whole value replaced, updated_at bumped)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The repository stores text verbatim and never parses it, so a corrupt
//! value can still be read back and reported.

use chrono::Utc;
use serde::Serialize;
use sqlx::SqlitePool;
use tracing::debug;

use crate::error::DbResult;

/// Repository for the `kv_store` table.
#[derive(Debug, Clone)]
pub struct SlotRepository {
    pool: SqlitePool,
}

impl SlotRepository {
    /// Creates a new SlotRepository.
    pub fn new(pool: SqlitePool) -> Self {
        SlotRepository { pool }
    }

    /// Reads the raw value of a slot.
    pub async fn get(&self, key: &str) -> DbResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM kv_store WHERE key = ?1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;

        debug!(key = %key, found = value.is_some(), "Read slot");
        Ok(value)
    }

    /// Writes the raw value of a slot, replacing any previous value.
    pub async fn put(&self, key: &str, value: &str) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO kv_store (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        debug!(key = %key, bytes = value.len(), "Wrote slot");
        Ok(())
    }

    /// Serializes `value` as JSON and writes it to a slot.
    pub async fn put_json<T>(&self, key: &str, value: &T) -> DbResult<()>
    where
        T: Serialize + ?Sized,
    {
        let json = serde_json::to_string(value)?;
        self.put(key, &json).await
    }

    /// All slot keys, sorted.
    pub async fn keys(&self) -> DbResult<Vec<String>> {
        let keys = sqlx::query_scalar::<_, String>("SELECT key FROM kv_store ORDER BY key")
            .fetch_all(&self.pool)
            .await?;

        Ok(keys)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
