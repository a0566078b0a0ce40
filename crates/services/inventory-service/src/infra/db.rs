//! Inventory store handle: pooled connection plus schema management.

use std::collections::HashSet;
use std::fmt;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database as SeaDatabase, DatabaseConnection, DbErr,
    EntityTrait,
};
use sea_orm_migration::{seaql_migrations, MigratorTrait};

use super::migrations::Migrator;

/// One schema migration and whether the store has applied it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

impl fmt::Display for MigrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.applied { "[x]" } else { "[ ]" };
        write!(f, "{} {}", marker, self.name)
    }
}

/// Shared handle to the inventory database.
#[derive(Clone)]
pub struct Database {
    connection: DatabaseConnection,
}

impl Database {
    /// Open the pool and bring the `users` / `catalog_items` schema up to date.
    pub async fn connect(options: impl Into<ConnectOptions>) -> Result<Self, DbErr> {
        let db = Self::open(options).await?;
        db.upgrade().await?;

        tracing::info!(
            backend = ?db.connection.get_database_backend(),
            "Inventory store ready"
        );
        Ok(db)
    }

    /// Open the pool and leave the schema untouched. Used by `migrate`.
    pub async fn open(options: impl Into<ConnectOptions>) -> Result<Self, DbErr> {
        let connection = SeaDatabase::connect(options).await?;
        Ok(Self { connection })
    }

    pub fn get_connection(&self) -> DatabaseConnection {
        self.connection.clone()
    }

    /// Apply every pending migration.
    pub async fn upgrade(&self) -> Result<(), DbErr> {
        Migrator::up(&self.connection, None).await
    }

    /// Revert the most recent migration.
    pub async fn rollback_last(&self) -> Result<(), DbErr> {
        Migrator::down(&self.connection, Some(1)).await
    }

    /// Drop every table and rebuild the schema from scratch.
    pub async fn reset(&self) -> Result<(), DbErr> {
        Migrator::fresh(&self.connection).await
    }

    /// Known migrations in declaration order, each with its applied flag.
    pub async fn migrations(&self) -> Result<Vec<MigrationState>, DbErr> {
        let applied: HashSet<String> = seaql_migrations::Entity::find()
            .all(&self.connection)
            .await?
            .into_iter()
            .map(|row| row.version)
            .collect();

        Ok(Migrator::migrations()
            .iter()
            .map(|migration| {
                let name = migration.name().to_string();
                MigrationState {
                    applied: applied.contains(&name),
                    name,
                }
            })
            .collect())
    }

    /// Liveness check for `/health`.
    pub async fn ping(&self) -> Result<(), DbErr> {
        self.connection.ping().await
    }
}
