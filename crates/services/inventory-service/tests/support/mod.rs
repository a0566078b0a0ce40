//! Shared fixtures: an in-memory SQLite database with the schema applied.

use sea_orm::ConnectOptions;

use domain::RoleSet;
use inventory_service_lib::infra::Database;
use inventory_service_lib::service::Services;

/// One pooled connection so every query sees the same in-memory database.
pub async fn test_database() -> Database {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    Database::connect(options)
        .await
        .expect("in-memory database should start")
}

pub async fn test_services() -> (Database, Services) {
    let db = test_database().await;
    let roles = RoleSet::new("TECNICO").expect("valid role");
    let services = Services::from_connection(db.get_connection(), roles);
    (db, services)
}
