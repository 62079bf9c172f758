//! Store abstraction shared by the MariaDB and in-memory backends

use async_trait::async_trait;
use sqlx::FromRow;

use crate::models::RecordName;

/// Item or collection row.
///
/// `created_at` is the store's own textual rendering of the timestamp and
/// is passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, FromRow)]
pub struct Record {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub created_at: String,
}

/// The two record tables. Both have identical columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Item,
    Collection,
}

impl RecordKind {
    /// Resource name used in errors and logs
    pub fn resource(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Collection => "collection",
        }
    }
}

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: i64 },

    /// A row written by this call could not be read back.
    #[error("{resource} '{id}' missing immediately after insert")]
    Inconsistent { resource: &'static str, id: i64 },
}

impl StoreError {
    pub fn not_found(kind: RecordKind, id: i64) -> Self {
        Self::NotFound {
            resource: kind.resource(),
            id,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

/// Persistence operations for items, collections and memberships.
///
/// The record methods take a [`RecordKind`]; the `*_item` / `*_collection`
/// helpers are thin wrappers that fix the kind.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Insert a row, then read it back by its new id.
    async fn create(
        &self,
        kind: RecordKind,
        name: &RecordName,
        description: &str,
    ) -> Result<Record, StoreError>;

    /// Fetch one row. Zero matches is [`StoreError::NotFound`].
    async fn get(&self, kind: RecordKind, id: i64) -> Result<Record, StoreError>;

    /// All rows in the store's natural order.
    async fn list(&self, kind: RecordKind) -> Result<Vec<Record>, StoreError>;

    /// Unconditional update-by-id followed by a re-read.
    ///
    /// Updating a missing id writes nothing and then fails with `NotFound`.
    async fn update(
        &self,
        kind: RecordKind,
        id: i64,
        name: &RecordName,
        description: &str,
    ) -> Result<Record, StoreError>;

    /// Delete-by-id. Missing ids are not an error.
    ///
    /// Deleting a collection also deletes its membership rows, atomically.
    /// Deleting an item leaves its membership rows in place.
    async fn delete(&self, kind: RecordKind, id: i64) -> Result<(), StoreError>;

    /// Idempotent: adding an existing pair leaves one membership row.
    /// Neither id is checked for existence.
    async fn add_item_to_collection(
        &self,
        collection_id: i64,
        item_id: i64,
    ) -> Result<(), StoreError>;

    /// Items currently in the collection (inner join against items).
    async fn list_items_in_collection(&self, collection_id: i64)
        -> Result<Vec<Record>, StoreError>;

    /// Delete-by-pair. Missing pairs are not an error.
    async fn remove_item_from_collection(
        &self,
        collection_id: i64,
        item_id: i64,
    ) -> Result<(), StoreError>;

    async fn create_item(&self, name: &RecordName, description: &str) -> Result<Record, StoreError> {
        self.create(RecordKind::Item, name, description).await
    }

    async fn get_item(&self, id: i64) -> Result<Record, StoreError> {
        self.get(RecordKind::Item, id).await
    }

    async fn list_items(&self) -> Result<Vec<Record>, StoreError> {
        self.list(RecordKind::Item).await
    }

    async fn update_item(
        &self,
        id: i64,
        name: &RecordName,
        description: &str,
    ) -> Result<Record, StoreError> {
        self.update(RecordKind::Item, id, name, description).await
    }

    async fn delete_item(&self, id: i64) -> Result<(), StoreError> {
        self.delete(RecordKind::Item, id).await
    }

    async fn create_collection(
        &self,
        name: &RecordName,
        description: &str,
    ) -> Result<Record, StoreError> {
        self.create(RecordKind::Collection, name, description).await
    }

    async fn get_collection(&self, id: i64) -> Result<Record, StoreError> {
        self.get(RecordKind::Collection, id).await
    }

    async fn list_collections(&self) -> Result<Vec<Record>, StoreError> {
        self.list(RecordKind::Collection).await
    }

    async fn update_collection(
        &self,
        id: i64,
        name: &RecordName,
        description: &str,
    ) -> Result<Record, StoreError> {
        self.update(RecordKind::Collection, id, name, description).await
    }

    async fn delete_collection(&self, id: i64) -> Result<(), StoreError> {
        self.delete(RecordKind::Collection, id).await
    }
}
