//! Inventory service configuration.

use std::env;

use common::{AppResult, DatabaseConfig};
use domain::RoleSet;
use sea_orm::ConnectOptions;

/// Role label assumed for the non-admin role in debug builds.
#[cfg(debug_assertions)]
const DEV_SECONDARY_ROLE: &str = "TECNICO";

/// Inventory service configuration.
#[derive(Debug, Clone)]
pub struct InventoryServiceConfig {
    pub database: DatabaseConfig,
    /// Accepted user roles (`ADMIN` plus the configured secondary label)
    pub roles: RoleSet,
}

impl InventoryServiceConfig {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    /// Fails when `SECONDARY_ROLE` is invalid, or missing in a release build.
    pub fn from_env() -> AppResult<Self> {
        Ok(Self {
            database: database_from_env(),
            roles: resolve_roles(env::var("SECONDARY_ROLE").ok())?,
        })
    }

    /// Pool options for the configured database.
    pub fn connect_options(&self) -> ConnectOptions {
        let mut options = ConnectOptions::new(self.database.url.clone());
        options
            .max_connections(self.database.max_connections)
            .min_connections(self.database.min_connections);
        options
    }
}

/// Read `DATABASE_URL` and the pool bounds, falling back to defaults.
pub fn database_from_env() -> DatabaseConfig {
    let defaults = DatabaseConfig::default();

    DatabaseConfig {
        url: env::var("DATABASE_URL").unwrap_or(defaults.url),
        max_connections: env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.max_connections),
        min_connections: env::var("DATABASE_MIN_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.min_connections),
    }
}

/// Build the role set from the raw `SECONDARY_ROLE` value.
fn resolve_roles(secondary: Option<String>) -> AppResult<RoleSet> {
    match secondary {
        Some(label) => Ok(RoleSet::new(label)?),
        None => missing_secondary_role(),
    }
}

#[cfg(debug_assertions)]
fn missing_secondary_role() -> AppResult<RoleSet> {
    tracing::warn!(
        "SECONDARY_ROLE is not set, defaulting to {} (debug build only)",
        DEV_SECONDARY_ROLE
    );
    Ok(RoleSet::new(DEV_SECONDARY_ROLE)?)
}

#[cfg(not(debug_assertions))]
fn missing_secondary_role() -> AppResult<RoleSet> {
    Err(common::AppError::internal("SECONDARY_ROLE must be set"))
}
