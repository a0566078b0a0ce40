//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::auth_handler::{LoginRequest, RegisterRequest};
use crate::handlers::catalog_handler::{CatalogItemRequest, MessageResponse};
use crate::handlers::health_handler::{HealthResponse, ServiceHealth, ServiceStatus};
use domain::{CatalogItemResponse, UserResponse};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth_handler::register,
        crate::handlers::auth_handler::login,
        crate::handlers::catalog_handler::register,
        crate::handlers::catalog_handler::list_all,
        crate::handlers::catalog_handler::list_active,
        crate::handlers::catalog_handler::list_inactive,
        crate::handlers::catalog_handler::list_by_state,
        crate::handlers::catalog_handler::get_by_id,
        crate::handlers::catalog_handler::get_by_code,
        crate::handlers::catalog_handler::update,
        crate::handlers::catalog_handler::delete_item,
        crate::handlers::health_handler::health_check,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            UserResponse,
            CatalogItemRequest,
            CatalogItemResponse,
            MessageResponse,
            HealthResponse,
            ServiceStatus,
            ServiceHealth,
        )
    ),
    tags(
        (name = "Authentication", description = "Login and user registration"),
        (name = "Catalog", description = "Catalog item management with soft delete"),
        (name = "Health", description = "Dependency health"),
    )
)]
pub struct ApiDoc;
