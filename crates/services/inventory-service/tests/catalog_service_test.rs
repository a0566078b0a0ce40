//! Catalog service integration tests against in-memory SQLite.

mod support;

use std::collections::BTreeSet;

use common::AppError;
use domain::{CatalogItemDraft, CatalogItemInput};
use inventory_service_lib::repository::{CatalogRepository, CatalogStore};

use crate::support::{test_database, test_services};

fn input(code: &str, name: &str) -> CatalogItemInput {
    CatalogItemInput::new(code, name, true)
}

fn ids<T>(items: &[T], id: impl Fn(&T) -> i32) -> BTreeSet<i32> {
    items.iter().map(id).collect()
}

#[tokio::test]
async fn test_register_normalizes_code() {
    let (_db, services) = test_services().await;
    let catalog = services.catalog();

    let item = catalog.register(input("rf1", "  Tornillo ")).await.unwrap();

    assert!(item.id > 0);
    assert_eq!(item.code, "RF1");
    assert_eq!(item.name, "Tornillo");
    assert!(item.active);

    let fetched = catalog.get_by_code("RF1").await.unwrap();
    assert_eq!(fetched.id, item.id);
}

#[tokio::test]
async fn test_register_same_normalized_code_twice() {
    let (_db, services) = test_services().await;
    let catalog = services.catalog();

    catalog.register(input("RF1", "Tornillo")).await.unwrap();
    let err = catalog.register(input(" rf1", "Tuerca")).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(ref m) if m == "Code is already registered."));
    assert_eq!(catalog.list_all().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_uniqueness_ignores_active_flag() {
    let (_db, services) = test_services().await;
    let catalog = services.catalog();

    let item = catalog.register(input("RF1", "Tornillo")).await.unwrap();
    catalog.delete(item.id).await.unwrap();

    let err = catalog.register(input("RF2", "Tornillo")).await.unwrap_err();
    assert!(matches!(err, AppError::Conflict(ref m) if m == "Name is already registered."));
}

#[tokio::test]
async fn test_get_by_code_does_not_normalize() {
    let (_db, services) = test_services().await;
    let catalog = services.catalog();

    catalog.register(input("RF7", "Clavo")).await.unwrap();

    let err = catalog.get_by_code("rf7").await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(_)));
}

#[tokio::test]
async fn test_delete_twice() {
    let (_db, services) = test_services().await;
    let catalog = services.catalog();

    let item = catalog.register(input("RF1", "Tornillo")).await.unwrap();

    catalog.delete(item.id).await.unwrap();
    let err = catalog.delete(item.id).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(ref m) if m == "Catalog item is already deleted."));
    assert!(!catalog.get_by_id(item.id).await.unwrap().active);
}

#[tokio::test]
async fn test_delete_unknown_id() {
    let (_db, services) = test_services().await;

    let err = services.catalog().delete(99).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound(ref m) if m == "Catalog item does not exist."));
}

#[tokio::test]
async fn test_update_collisions() {
    let (_db, services) = test_services().await;
    let catalog = services.catalog();

    let first = catalog.register(input("RF1", "Tornillo")).await.unwrap();
    catalog.register(input("RF2", "Tuerca")).await.unwrap();

    let err = catalog
        .update(first.id, input("RF2", "Tornillo"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Conflict(ref m) if m == "Code already exists on another catalog item."
    ));

    let err = catalog
        .update(first.id, input("RF1", "Tuerca"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        AppError::Conflict(ref m) if m == "Name already exists on another catalog item."
    ));

    let updated = catalog
        .update(first.id, CatalogItemInput::new("rf1", "Tornillo largo", false))
        .await
        .unwrap();
    assert_eq!(updated.id, first.id);
    assert_eq!(updated.code, "RF1");
    assert_eq!(updated.name, "Tornillo largo");
    assert!(!updated.active);
    assert_eq!(updated.created_at, first.created_at);
}

#[tokio::test]
async fn test_update_can_reactivate() {
    let (_db, services) = test_services().await;
    let catalog = services.catalog();

    let item = catalog.register(input("RF1", "Tornillo")).await.unwrap();
    catalog.delete(item.id).await.unwrap();

    let restored = catalog.update(item.id, input("RF1", "Tornillo")).await.unwrap();
    assert!(restored.active);
}

#[tokio::test]
async fn test_active_and_inactive_partition_all() {
    let (_db, services) = test_services().await;
    let catalog = services.catalog();

    let mut created = Vec::new();
    for n in 1..=6 {
        let item = catalog
            .register(input(&format!("RF{n}"), &format!("Pieza {n}")))
            .await
            .unwrap();
        created.push(item);
    }
    catalog.delete(created[1].id).await.unwrap();
    catalog.delete(created[4].id).await.unwrap();
    catalog
        .update(created[4].id, input("RF5", "Pieza cinco"))
        .await
        .unwrap();
    catalog
        .update(
            created[0].id,
            CatalogItemInput::new("RF1", "Pieza uno", false),
        )
        .await
        .unwrap();

    let all = catalog.list_all().await.unwrap();
    let active = catalog.list_active().await.unwrap();
    let inactive = catalog.list_inactive().await.unwrap();

    let all_ids = ids(&all, |i| i.id);
    let active_ids = ids(&active, |i| i.id);
    let inactive_ids = ids(&inactive, |i| i.id);

    assert!(active_ids.is_disjoint(&inactive_ids));
    assert_eq!(
        active_ids.union(&inactive_ids).copied().collect::<BTreeSet<_>>(),
        all_ids
    );
    assert_eq!(inactive_ids, BTreeSet::from([created[0].id, created[1].id]));

    assert_eq!(catalog.list_by_state(true).await.unwrap(), active);
    assert_eq!(catalog.list_by_state(false).await.unwrap(), inactive);

    let ordered: Vec<i32> = all.iter().map(|i| i.id).collect();
    let mut sorted = ordered.clone();
    sorted.sort_unstable();
    assert_eq!(ordered, sorted);
}

#[tokio::test]
async fn test_lists_empty_store() {
    let (_db, services) = test_services().await;
    let catalog = services.catalog();

    assert!(catalog.list_all().await.unwrap().is_empty());
    assert!(catalog.list_active().await.unwrap().is_empty());
    assert!(catalog.list_inactive().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_store_constraint_rejects_duplicate_code() {
    let db = test_database().await;
    let store = CatalogStore::new(db.get_connection());

    let draft = CatalogItemDraft {
        code: "RF1".to_string(),
        name: "Tornillo".to_string(),
        active: true,
    };
    store.create(draft.clone()).await.unwrap();

    let err = store
        .create(CatalogItemDraft {
            name: "Tuerca".to_string(),
            ..draft
        })
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict(ref m) if m == "Code is already registered."));
}

#[tokio::test]
async fn test_store_constraint_rejects_duplicate_name_on_update() {
    let db = test_database().await;
    let store = CatalogStore::new(db.get_connection());

    store
        .create(CatalogItemDraft {
            code: "RF1".to_string(),
            name: "Tornillo".to_string(),
            active: true,
        })
        .await
        .unwrap();
    let mut second = store
        .create(CatalogItemDraft {
            code: "RF2".to_string(),
            name: "Tuerca".to_string(),
            active: true,
        })
        .await
        .unwrap();

    second.name = "Tornillo".to_string();
    let err = store.update(second).await.unwrap_err();

    assert!(matches!(err, AppError::Conflict(ref m) if m == "Name is already registered."));
}
