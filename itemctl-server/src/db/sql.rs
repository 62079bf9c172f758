//! MariaDB-backed store

use async_trait::async_trait;
use sqlx::MySqlPool;

use super::repos::{MembershipRepo, RecordRepo};
use super::store::{CatalogStore, Record, RecordKind, StoreError};
use crate::models::RecordName;

/// [`CatalogStore`] over a shared `MySqlPool`.
#[derive(Clone)]
pub struct SqlStore {
    pool: MySqlPool,
}

impl SqlStore {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }
}

#[async_trait]
impl CatalogStore for SqlStore {
    async fn create(
        &self,
        kind: RecordKind,
        name: &RecordName,
        description: &str,
    ) -> Result<Record, StoreError> {
        RecordRepo::new(&self.pool, kind).create(name, description).await
    }

    async fn get(&self, kind: RecordKind, id: i64) -> Result<Record, StoreError> {
        RecordRepo::new(&self.pool, kind).get(id).await
    }

    async fn list(&self, kind: RecordKind) -> Result<Vec<Record>, StoreError> {
        RecordRepo::new(&self.pool, kind).list().await
    }

    async fn update(
        &self,
        kind: RecordKind,
        id: i64,
        name: &RecordName,
        description: &str,
    ) -> Result<Record, StoreError> {
        RecordRepo::new(&self.pool, kind)
            .update(id, name, description)
            .await
    }

    async fn delete(&self, kind: RecordKind, id: i64) -> Result<(), StoreError> {
        RecordRepo::new(&self.pool, kind).delete(id).await
    }

    async fn add_item_to_collection(
        &self,
        collection_id: i64,
        item_id: i64,
    ) -> Result<(), StoreError> {
        MembershipRepo::new(&self.pool).add(collection_id, item_id).await
    }

    async fn list_items_in_collection(
        &self,
        collection_id: i64,
    ) -> Result<Vec<Record>, StoreError> {
        MembershipRepo::new(&self.pool).list_items(collection_id).await
    }

    async fn remove_item_from_collection(
        &self,
        collection_id: i64,
        item_id: i64,
    ) -> Result<(), StoreError> {
        MembershipRepo::new(&self.pool)
            .remove(collection_id, item_id)
            .await
    }
}
