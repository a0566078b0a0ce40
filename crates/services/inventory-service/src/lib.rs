//! Inventory Service Library
//!
//! Persistence, migrations and the catalog/auth use cases. The HTTP gateway
//! embeds this crate in-process.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use tracing::info;

use crate::config::InventoryServiceConfig;
use crate::infra::Database;
use crate::service::Services;

/// Connect to the configured database, apply migrations and wire services.
pub async fn bootstrap(
    config: &InventoryServiceConfig,
) -> Result<(Database, Services), Box<dyn std::error::Error>> {
    let db = Database::connect(config.connect_options()).await?;
    let services = Services::from_connection(db.get_connection(), config.roles.clone());

    info!(secondary_role = %config.roles.secondary(), "Inventory services ready");
    Ok((db, services))
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    database_url: &str,
    action: MigrateAction,
) -> Result<(), Box<dyn std::error::Error>> {
    let db = Database::open(database_url).await?;

    match action {
        MigrateAction::Up => {
            db.upgrade().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_last().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            for migration in db.migrations().await? {
                println!("{}", migration);
            }
        }
        MigrateAction::Fresh => {
            db.reset().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
