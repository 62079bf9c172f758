//! Behavioural checks every `CatalogStore` backend must pass.
//!
//! Each check creates its own rows and never assumes an empty store, so the
//! same checks run against the in-memory store and a shared MariaDB.

use std::collections::BTreeSet;

use super::store::{CatalogStore, RecordKind};
use crate::models::RecordName;

fn name(s: &str) -> RecordName {
    RecordName::new(s).expect("valid test name")
}

/// An id no backend will have handed out.
const MISSING_ID: i64 = i64::MAX - 7;

pub async fn create_then_get_round_trips(store: &dyn CatalogStore) {
    let created = store.create_item(&name("widget"), "a small widget").await.unwrap();
    assert!(created.id > 0);
    assert!(!created.created_at.is_empty());

    let fetched = store.get_item(created.id).await.unwrap();
    assert_eq!(fetched, created);
    assert_eq!(fetched.name, "widget");
    assert_eq!(fetched.description, "a small widget");

    let collection = store.create_collection(&name("shelf"), "").await.unwrap();
    assert_eq!(store.get_collection(collection.id).await.unwrap(), collection);
    assert_eq!(collection.description, "");

    store.delete_item(created.id).await.unwrap();
    store.delete_collection(collection.id).await.unwrap();
}

pub async fn missing_item_is_not_found(store: &dyn CatalogStore) {
    let err = store.get_item(MISSING_ID).await.unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err}");

    let err = store.get_collection(MISSING_ID).await.unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err}");
}

pub async fn delete_missing_item_succeeds(store: &dyn CatalogStore) {
    store.delete_item(MISSING_ID).await.unwrap();
    store.delete_collection(MISSING_ID).await.unwrap();
}

pub async fn update_rewrites_and_rereads(store: &dyn CatalogStore) {
    let created = store.create_item(&name("before"), "old").await.unwrap();

    let updated = store
        .update_item(created.id, &name("after"), "new")
        .await
        .unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.name, "after");
    assert_eq!(updated.description, "new");
    assert_eq!(updated.created_at, created.created_at);

    assert_eq!(store.get_item(created.id).await.unwrap(), updated);
    store.delete_item(created.id).await.unwrap();
}

pub async fn update_missing_is_not_found(store: &dyn CatalogStore) {
    let err = store
        .update_item(MISSING_ID, &name("ghost"), "")
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err}");

    let err = store
        .update_collection(MISSING_ID, &name("ghost"), "")
        .await
        .unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err}");
}

pub async fn list_includes_created(store: &dyn CatalogStore) {
    let item = store.create_item(&name("listed item"), "").await.unwrap();
    let collection = store.create_collection(&name("listed collection"), "").await.unwrap();

    let items = store.list(RecordKind::Item).await.unwrap();
    assert!(items.contains(&item));

    let collections = store.list_collections().await.unwrap();
    assert!(collections.contains(&collection));

    store.delete_item(item.id).await.unwrap();
    store.delete_collection(collection.id).await.unwrap();

    assert!(!store.list_items().await.unwrap().contains(&item));
}

pub async fn duplicate_membership_is_idempotent(store: &dyn CatalogStore) {
    let collection = store.create_collection(&name("dupes"), "").await.unwrap();
    let item = store.create_item(&name("dupe item"), "").await.unwrap();

    store.add_item_to_collection(collection.id, item.id).await.unwrap();
    store.add_item_to_collection(collection.id, item.id).await.unwrap();

    let members = store.list_items_in_collection(collection.id).await.unwrap();
    assert_eq!(members, vec![item.clone()]);

    store.delete_collection(collection.id).await.unwrap();
    store.delete_item(item.id).await.unwrap();
}

pub async fn collection_lists_exactly_its_items(store: &dyn CatalogStore) {
    let collection = store.create_collection(&name("col with items"), "").await.unwrap();
    let other = store.create_collection(&name("other"), "").await.unwrap();
    let item1 = store.create_item(&name("item1"), "").await.unwrap();
    let item2 = store.create_item(&name("item2"), "").await.unwrap();
    let outsider = store.create_item(&name("outsider"), "").await.unwrap();

    store.add_item_to_collection(collection.id, item1.id).await.unwrap();
    store.add_item_to_collection(collection.id, item2.id).await.unwrap();
    store.add_item_to_collection(other.id, outsider.id).await.unwrap();

    let ids: BTreeSet<i64> = store
        .list_items_in_collection(collection.id)
        .await
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, BTreeSet::from([item1.id, item2.id]));

    for id in [item1.id, item2.id, outsider.id] {
        store.delete_item(id).await.unwrap();
    }
    store.delete_collection(collection.id).await.unwrap();
    store.delete_collection(other.id).await.unwrap();
}

pub async fn delete_collection_clears_memberships(store: &dyn CatalogStore) {
    let collection = store.create_collection(&name("to delete"), "").await.unwrap();
    let item = store.create_item(&name("member"), "").await.unwrap();
    store.add_item_to_collection(collection.id, item.id).await.unwrap();

    store.delete_collection(collection.id).await.unwrap();

    let err = store.get_collection(collection.id).await.unwrap_err();
    assert!(err.is_not_found(), "unexpected error: {err}");
    assert!(store
        .list_items_in_collection(collection.id)
        .await
        .unwrap()
        .is_empty());

    // The item itself survives.
    assert_eq!(store.get_item(item.id).await.unwrap(), item);
    store.delete_item(item.id).await.unwrap();
}

pub async fn remove_membership_is_idempotent(store: &dyn CatalogStore) {
    let collection = store.create_collection(&name("removals"), "").await.unwrap();
    let item = store.create_item(&name("removable"), "").await.unwrap();

    // Never added
    store
        .remove_item_from_collection(collection.id, item.id)
        .await
        .unwrap();

    store.add_item_to_collection(collection.id, item.id).await.unwrap();
    store
        .remove_item_from_collection(collection.id, item.id)
        .await
        .unwrap();
    store
        .remove_item_from_collection(collection.id, item.id)
        .await
        .unwrap();

    assert!(store
        .list_items_in_collection(collection.id)
        .await
        .unwrap()
        .is_empty());

    store.delete_collection(collection.id).await.unwrap();
    store.delete_item(item.id).await.unwrap();
}

pub async fn deleted_item_drops_out_of_collection(store: &dyn CatalogStore) {
    let collection = store.create_collection(&name("loses an item"), "").await.unwrap();
    let item = store.create_item(&name("short lived"), "").await.unwrap();
    store.add_item_to_collection(collection.id, item.id).await.unwrap();

    store.delete_item(item.id).await.unwrap();

    assert!(store
        .list_items_in_collection(collection.id)
        .await
        .unwrap()
        .is_empty());

    store.delete_collection(collection.id).await.unwrap();
}
