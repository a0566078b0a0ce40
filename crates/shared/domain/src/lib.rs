//! Domain layer - Core business entities, value objects and validation.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.

pub mod catalog;
pub mod constants;
pub mod error;
pub mod password;
pub mod user;
pub mod validation;

pub use catalog::{CatalogItem, CatalogItemDraft, CatalogItemInput, CatalogItemResponse};
pub use constants::*;
pub use error::{DomainError, DomainResult};
pub use password::Password;
pub use user::{CreateUser, RoleSet, User, UserResponse};
