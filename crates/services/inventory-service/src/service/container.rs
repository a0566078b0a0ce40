//! Service container - wires repositories into services.

use std::sync::Arc;

use domain::RoleSet;
use sea_orm::DatabaseConnection;

use super::{AuthService, Authenticator, CatalogManager, CatalogService};
use crate::repository::{CatalogStore, UserStore};

/// Shared handles to every application service.
#[derive(Clone)]
pub struct Services {
    catalog_service: Arc<dyn CatalogService>,
    auth_service: Arc<dyn AuthService>,
}

impl Services {
    /// Create a container from already-built services
    pub fn new(catalog_service: Arc<dyn CatalogService>, auth_service: Arc<dyn AuthService>) -> Self {
        Self {
            catalog_service,
            auth_service,
        }
    }

    /// Build the SeaORM-backed services on top of one connection
    pub fn from_connection(db: DatabaseConnection, roles: RoleSet) -> Self {
        let catalog_repo = Arc::new(CatalogStore::new(db.clone()));
        let user_repo = Arc::new(UserStore::new(db));

        Self::new(
            Arc::new(CatalogManager::new(catalog_repo)),
            Arc::new(Authenticator::new(user_repo, roles)),
        )
    }

    pub fn catalog(&self) -> Arc<dyn CatalogService> {
        Arc::clone(&self.catalog_service)
    }

    pub fn auth(&self) -> Arc<dyn AuthService> {
        Arc::clone(&self.auth_service)
    }
}
