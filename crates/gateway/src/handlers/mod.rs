//! HTTP request handlers.

pub mod auth_handler;
pub mod catalog_handler;
pub mod health_handler;

pub use auth_handler::auth_routes;
pub use catalog_handler::catalog_routes;
pub use health_handler::health_routes;
