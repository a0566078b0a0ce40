//! Schema management against in-memory SQLite.

mod support;

use inventory_service_lib::infra::MigrationState;

use crate::support::test_database;

#[tokio::test]
async fn test_connect_applies_every_migration() {
    let db = test_database().await;

    let migrations = db.migrations().await.unwrap();

    assert_eq!(migrations.len(), 2);
    assert!(migrations.iter().all(|m| m.applied));
    assert!(migrations[0].name.contains("create_users_table"));
    assert!(migrations[1].name.contains("create_catalog_items_table"));
}

#[tokio::test]
async fn test_rollback_last_then_upgrade() {
    let db = test_database().await;

    db.rollback_last().await.unwrap();
    let applied: Vec<bool> = db.migrations().await.unwrap().iter().map(|m| m.applied).collect();
    assert_eq!(applied, vec![true, false]);

    db.upgrade().await.unwrap();
    assert!(db.migrations().await.unwrap().iter().all(|m| m.applied));
}

#[tokio::test]
async fn test_ping() {
    let db = test_database().await;
    assert!(db.ping().await.is_ok());
}

#[test]
fn test_migration_state_display() {
    let pending = MigrationState {
        name: "m20240101_000002_create_catalog_items_table".to_string(),
        applied: false,
    };
    assert_eq!(pending.to_string(), "[ ] m20240101_000002_create_catalog_items_table");

    let applied = MigrationState { applied: true, ..pending };
    assert_eq!(applied.to_string(), "[x] m20240101_000002_create_catalog_items_table");
}
