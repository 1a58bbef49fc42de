//! SQLite-backed document store.

use async_trait::async_trait;
use sqlx::{Row, SqlitePool};
use std::sync::Arc;

use crate::infrastructure::ports::{
    ClockPort, Document, DocumentData, DocumentStore, StoreError,
};

/// SQLite implementation of the document store.
///
/// One row per document; the payload is stored as JSON text.
pub struct SqliteDocumentStore {
    pool: SqlitePool,
    clock: Arc<dyn ClockPort>,
}

impl SqliteDocumentStore {
    pub async fn new(db_path: &str, clock: Arc<dyn ClockPort>) -> Result<Self, StoreError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| StoreError::unavailable("connect", e))?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS documents (
                collection TEXT NOT NULL,
                id TEXT NOT NULL,
                data_json TEXT NOT NULL,
                updated_at TEXT NOT NULL,
                PRIMARY KEY (collection, id)
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| StoreError::database("migrate", e))?;

        Ok(Self { pool, clock })
    }
}

fn decode_payload(json: &str) -> Result<DocumentData, StoreError> {
    serde_json::from_str(json).map_err(StoreError::serialization)
}

#[async_trait]
impl DocumentStore for SqliteDocumentStore {
    async fn get(&self, collection: &str, id: &str) -> Result<Option<DocumentData>, StoreError> {
        let row = sqlx::query("SELECT data_json FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| StoreError::database("get", e))?;

        match row {
            Some(row) => {
                let json: String = row.get("data_json");
                Ok(Some(decode_payload(&json)?))
            }
            None => Ok(None),
        }
    }

    async fn set(&self, collection: &str, id: &str, data: DocumentData) -> Result<(), StoreError> {
        let json = serde_json::to_string(&data).map_err(StoreError::serialization)?;
        let now = self.clock.now().to_rfc3339();

        sqlx::query(
            r#"
            INSERT INTO documents (collection, id, data_json, updated_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT(collection, id) DO UPDATE SET
                data_json = excluded.data_json,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(collection)
        .bind(id)
        .bind(json)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::database("set", e))?;

        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM documents WHERE collection = ? AND id = ?")
            .bind(collection)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| StoreError::database("delete", e))?;
        Ok(())
    }

    async fn list_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let rows = sqlx::query("SELECT id, data_json FROM documents WHERE collection = ? ORDER BY id")
            .bind(collection)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::database("list_all", e))?;

        rows.iter()
            .map(|row| {
                let id: String = row.get("id");
                let json: String = row.get("data_json");
                Ok(Document::new(id, decode_payload(&json)?))
            })
            .collect()
    }
}
