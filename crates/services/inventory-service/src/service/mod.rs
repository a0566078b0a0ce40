//! Service layer - business use cases.

mod auth_service;
mod catalog_service;
mod container;

pub use auth_service::{AuthService, Authenticator};
pub use catalog_service::{
    CatalogManager, CatalogService, DOES_NOT_EXIST as ITEM_DOES_NOT_EXIST,
    NOT_FOUND as ITEM_NOT_FOUND,
};
pub use container::Services;
