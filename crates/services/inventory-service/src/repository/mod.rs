//! Repository layer for data access.

mod catalog_repository;
pub mod entities;
mod user_repository;

pub use catalog_repository::{CatalogRepository, CatalogStore};
pub use user_repository::{UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use catalog_repository::MockCatalogRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use user_repository::MockUserRepository;
