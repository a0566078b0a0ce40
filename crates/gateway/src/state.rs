//! Application state for dependency injection.

use std::sync::Arc;

use inventory_service_lib::infra::Database;
use inventory_service_lib::service::{AuthService, CatalogService, Services};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub catalog_service: Arc<dyn CatalogService>,
    pub auth_service: Arc<dyn AuthService>,
    pub database: Database,
}

impl AppState {
    /// Create new app state.
    pub fn new(services: &Services, database: Database) -> Self {
        Self {
            catalog_service: services.catalog(),
            auth_service: services.auth(),
            database,
        }
    }
}
