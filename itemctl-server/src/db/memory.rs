//! In-process store with the same semantics as the MariaDB backend.
//!
//! Used by `itemctl serve --in-memory` and by the router tests.

use std::collections::{BTreeMap, BTreeSet};

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::store::{CatalogStore, Record, RecordKind, StoreError};
use crate::models::RecordName;

/// Matches the text MariaDB renders for a `DATETIME` column.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Default)]
struct Table {
    rows: BTreeMap<i64, Record>,
    last_id: i64,
}

impl Table {
    fn insert(&mut self, name: &RecordName, description: &str) -> Record {
        self.last_id += 1;
        let record = Record {
            id: self.last_id,
            name: name.as_str().to_owned(),
            description: description.to_owned(),
            created_at: Utc::now().format(TIMESTAMP_FORMAT).to_string(),
        };
        self.rows.insert(record.id, record.clone());
        record
    }
}

#[derive(Default)]
struct Tables {
    items: Table,
    collections: Table,
    /// (collection_id, item_id)
    memberships: BTreeSet<(i64, i64)>,
}

impl Tables {
    fn table(&self, kind: RecordKind) -> &Table {
        match kind {
            RecordKind::Item => &self.items,
            RecordKind::Collection => &self.collections,
        }
    }

    fn table_mut(&mut self, kind: RecordKind) -> &mut Table {
        match kind {
            RecordKind::Item => &mut self.items,
            RecordKind::Collection => &mut self.collections,
        }
    }
}

/// [`CatalogStore`] kept entirely in memory. Contents are lost on drop.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of membership rows, including ones pointing at deleted items.
    pub async fn membership_count(&self) -> usize {
        self.tables.read().await.memberships.len()
    }
}

#[async_trait]
impl CatalogStore for MemoryStore {
    async fn create(
        &self,
        kind: RecordKind,
        name: &RecordName,
        description: &str,
    ) -> Result<Record, StoreError> {
        let mut tables = self.tables.write().await;
        Ok(tables.table_mut(kind).insert(name, description))
    }

    async fn get(&self, kind: RecordKind, id: i64) -> Result<Record, StoreError> {
        self.tables
            .read()
            .await
            .table(kind)
            .rows
            .get(&id)
            .cloned()
            .ok_or_else(|| StoreError::not_found(kind, id))
    }

    async fn list(&self, kind: RecordKind) -> Result<Vec<Record>, StoreError> {
        let tables = self.tables.read().await;
        Ok(tables.table(kind).rows.values().cloned().collect())
    }

    async fn update(
        &self,
        kind: RecordKind,
        id: i64,
        name: &RecordName,
        description: &str,
    ) -> Result<Record, StoreError> {
        {
            let mut tables = self.tables.write().await;
            if let Some(row) = tables.table_mut(kind).rows.get_mut(&id) {
                row.name = name.as_str().to_owned();
                row.description = description.to_owned();
            }
        }

        self.get(kind, id).await
    }

    async fn delete(&self, kind: RecordKind, id: i64) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;

        if kind == RecordKind::Collection {
            tables.memberships.retain(|&(collection_id, _)| collection_id != id);
        }
        tables.table_mut(kind).rows.remove(&id);

        Ok(())
    }

    async fn add_item_to_collection(
        &self,
        collection_id: i64,
        item_id: i64,
    ) -> Result<(), StoreError> {
        self.tables
            .write()
            .await
            .memberships
            .insert((collection_id, item_id));
        Ok(())
    }

    async fn list_items_in_collection(
        &self,
        collection_id: i64,
    ) -> Result<Vec<Record>, StoreError> {
        let tables = self.tables.read().await;

        Ok(tables
            .memberships
            .range((collection_id, i64::MIN)..=(collection_id, i64::MAX))
            .filter_map(|(_, item_id)| tables.items.rows.get(item_id).cloned())
            .collect())
    }

    async fn remove_item_from_collection(
        &self,
        collection_id: i64,
        item_id: i64,
    ) -> Result<(), StoreError> {
        self.tables
            .write()
            .await
            .memberships
            .remove(&(collection_id, item_id));
        Ok(())
    }
}
