//! Item and collection repository
//!
//! Both tables share one column layout, so one repository serves both:
//! - create/update: write, then re-read through the same SELECT
//! - delete: collections also drop their membership rows in one transaction

use sqlx::MySqlPool;

use crate::db::store::{Record, RecordKind, StoreError};
use crate::models::RecordName;

/// Per-table SQL. Timestamps are cast to text so they come back verbatim.
struct Statements {
    insert: &'static str,
    select_one: &'static str,
    select_all: &'static str,
    update: &'static str,
    delete: &'static str,
}

const ITEMS: Statements = Statements {
    insert: "INSERT INTO items (name, description) VALUES (?, ?)",
    select_one: r#"
        SELECT id, name, COALESCE(description, '') AS description,
               CAST(created_at AS CHAR) AS created_at
        FROM items
        WHERE id = ?
    "#,
    select_all: r#"
        SELECT id, name, COALESCE(description, '') AS description,
               CAST(created_at AS CHAR) AS created_at
        FROM items
    "#,
    update: "UPDATE items SET name = ?, description = ? WHERE id = ?",
    delete: "DELETE FROM items WHERE id = ?",
};

const COLLECTIONS: Statements = Statements {
    insert: "INSERT INTO collections (name, description) VALUES (?, ?)",
    select_one: r#"
        SELECT id, name, COALESCE(description, '') AS description,
               CAST(created_at AS CHAR) AS created_at
        FROM collections
        WHERE id = ?
    "#,
    select_all: r#"
        SELECT id, name, COALESCE(description, '') AS description,
               CAST(created_at AS CHAR) AS created_at
        FROM collections
    "#,
    update: "UPDATE collections SET name = ?, description = ? WHERE id = ?",
    delete: "DELETE FROM collections WHERE id = ?",
};

fn statements(kind: RecordKind) -> &'static Statements {
    match kind {
        RecordKind::Item => &ITEMS,
        RecordKind::Collection => &COLLECTIONS,
    }
}

/// Record repository
pub struct RecordRepo<'a> {
    pool: &'a MySqlPool,
    kind: RecordKind,
}

impl<'a> RecordRepo<'a> {
    pub fn new(pool: &'a MySqlPool, kind: RecordKind) -> Self {
        Self { pool, kind }
    }

    pub fn items(pool: &'a MySqlPool) -> Self {
        Self::new(pool, RecordKind::Item)
    }

    pub fn collections(pool: &'a MySqlPool) -> Self {
        Self::new(pool, RecordKind::Collection)
    }

    /// Insert a row and return it as stored.
    ///
    /// A failed re-read is reported as `Inconsistent`, never `NotFound`:
    /// the row was inserted by this call.
    pub async fn create(&self, name: &RecordName, description: &str) -> Result<Record, StoreError> {
        let result = sqlx::query(statements(self.kind).insert)
            .bind(name.as_str())
            .bind(description)
            .execute(self.pool)
            .await?;

        // BIGINT AUTO_INCREMENT never exceeds i64::MAX
        let id = result.last_insert_id() as i64;

        self.fetch(id).await?.ok_or(StoreError::Inconsistent {
            resource: self.kind.resource(),
            id,
        })
    }

    /// Get a single row by id.
    pub async fn get(&self, id: i64) -> Result<Record, StoreError> {
        self.fetch(id)
            .await?
            .ok_or_else(|| StoreError::not_found(self.kind, id))
    }

    /// List all rows, unordered.
    pub async fn list(&self) -> Result<Vec<Record>, StoreError> {
        let records: Vec<Record> = sqlx::query_as(statements(self.kind).select_all)
            .fetch_all(self.pool)
            .await?;

        Ok(records)
    }

    /// Update name/description, then re-read.
    pub async fn update(
        &self,
        id: i64,
        name: &RecordName,
        description: &str,
    ) -> Result<Record, StoreError> {
        let result = sqlx::query(statements(self.kind).update)
            .bind(name.as_str())
            .bind(description)
            .bind(id)
            .execute(self.pool)
            .await?;

        tracing::debug!(
            resource = self.kind.resource(),
            id,
            rows = result.rows_affected(),
            "record updated"
        );

        self.get(id).await
    }

    /// Delete by id (idempotent).
    ///
    /// For collections the membership rows go first, inside the same
    /// transaction; the transaction rolls back if either statement fails.
    pub async fn delete(&self, id: i64) -> Result<(), StoreError> {
        let sql = statements(self.kind).delete;

        match self.kind {
            RecordKind::Item => {
                sqlx::query(sql).bind(id).execute(self.pool).await?;
            }
            RecordKind::Collection => {
                let mut tx = self.pool.begin().await?;

                let memberships = sqlx::query("DELETE FROM collection_items WHERE collection_id = ?")
                    .bind(id)
                    .execute(&mut *tx)
                    .await?;

                sqlx::query(sql).bind(id).execute(&mut *tx).await?;

                tx.commit().await?;

                tracing::debug!(
                    collection_id = id,
                    memberships = memberships.rows_affected(),
                    "collection deleted"
                );
            }
        }

        Ok(())
    }

    async fn fetch(&self, id: i64) -> Result<Option<Record>, StoreError> {
        let record: Option<Record> = sqlx::query_as(statements(self.kind).select_one)
            .bind(id)
            .fetch_optional(self.pool)
            .await?;

        Ok(record)
    }
}
