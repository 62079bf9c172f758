//! Collection membership repository
//!
//! - add: INSERT with ON DUPLICATE KEY (idempotent, no check-then-insert)
//! - list: INNER JOIN against items, so memberships of deleted items vanish

use sqlx::MySqlPool;

use crate::db::store::{Record, StoreError};

/// Membership repository
pub struct MembershipRepo<'a> {
    pool: &'a MySqlPool,
}

impl<'a> MembershipRepo<'a> {
    pub fn new(pool: &'a MySqlPool) -> Self {
        Self { pool }
    }

    /// Add an item to a collection. Re-adding an existing pair is a no-op.
    pub async fn add(&self, collection_id: i64, item_id: i64) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO collection_items (collection_id, item_id)
            VALUES (?, ?)
            ON DUPLICATE KEY UPDATE item_id = item_id
            "#,
        )
        .bind(collection_id)
        .bind(item_id)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// List the items that belong to a collection.
    pub async fn list_items(&self, collection_id: i64) -> Result<Vec<Record>, StoreError> {
        let items: Vec<Record> = sqlx::query_as(
            r#"
            SELECT i.id, i.name, COALESCE(i.description, '') AS description,
                   CAST(i.created_at AS CHAR) AS created_at
            FROM items i
            INNER JOIN collection_items ci ON ci.item_id = i.id
            WHERE ci.collection_id = ?
            "#,
        )
        .bind(collection_id)
        .fetch_all(self.pool)
        .await?;

        Ok(items)
    }

    /// Remove an item from a collection (idempotent).
    pub async fn remove(&self, collection_id: i64, item_id: i64) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM collection_items WHERE collection_id = ? AND item_id = ?")
            .bind(collection_id)
            .bind(item_id)
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
