//! Catalog item ("referencia") handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use common::{AppError, AppResult};
use domain::{CatalogItemInput, CatalogItemResponse};
use inventory_service_lib::service::{ITEM_DOES_NOT_EXIST, ITEM_NOT_FOUND};

use crate::extractors::{ParsedPath, ValidatedJson};
use crate::state::AppState;

/// Catalog item payload for register and update
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CatalogItemRequest {
    /// `RF` followed by digits; case and surrounding blanks are normalized
    #[serde(rename = "codigo")]
    #[validate(length(max = 255, message = "Code is too long."))]
    #[schema(example = "RF1")]
    pub code: Option<String>,
    /// Unique item name
    #[serde(rename = "nombre")]
    #[validate(length(max = 255, message = "Name is too long."))]
    #[schema(example = "Tornillo hexagonal")]
    pub name: Option<String>,
    /// Defaults to `true` when omitted
    #[serde(rename = "activo")]
    #[schema(example = true)]
    pub active: Option<bool>,
}

impl From<CatalogItemRequest> for CatalogItemInput {
    fn from(request: CatalogItemRequest) -> Self {
        CatalogItemInput {
            code: request.code,
            name: request.name,
            active: request.active.unwrap_or(true),
        }
    }
}

/// Confirmation returned by soft delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    #[schema(example = "Catalog item deleted successfully.")]
    pub message: String,
}

/// Ids outside the key range cannot name a stored item.
fn item_key(id: i64, missing: &str) -> AppResult<i32> {
    i32::try_from(id).map_err(|_| AppError::not_found(missing))
}

fn to_responses(items: Vec<domain::CatalogItem>) -> Json<Vec<CatalogItemResponse>> {
    Json(items.into_iter().map(CatalogItemResponse::from).collect())
}

/// Create catalog routes
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_all))
        .route("/registrar", post(register))
        .route("/activas", get(list_active))
        .route("/inactivas", get(list_inactive))
        .route("/estado/:activo", get(list_by_state))
        .route("/codigo/:codigo", get(get_by_code))
        .route("/eliminar/:id", delete(delete_item))
        .route("/:id", get(get_by_id).put(update))
}

/// Register a new catalog item
#[utoipa::path(
    post,
    path = "/api/referencias/registrar",
    tag = "Catalog",
    request_body = CatalogItemRequest,
    responses(
        (status = 200, description = "Catalog item registered", body = CatalogItemResponse),
        (status = 400, description = "Invalid code format or missing field"),
        (status = 409, description = "Code or name already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CatalogItemRequest>,
) -> AppResult<Json<CatalogItemResponse>> {
    let item = state.catalog_service.register(payload.into()).await?;
    Ok(Json(item.into()))
}

/// List every catalog item, active or not
#[utoipa::path(
    get,
    path = "/api/referencias",
    tag = "Catalog",
    responses(
        (status = 200, description = "All catalog items ordered by id", body = Vec<CatalogItemResponse>)
    )
)]
pub async fn list_all(State(state): State<AppState>) -> AppResult<Json<Vec<CatalogItemResponse>>> {
    Ok(to_responses(state.catalog_service.list_all().await?))
}

/// List active catalog items
#[utoipa::path(
    get,
    path = "/api/referencias/activas",
    tag = "Catalog",
    responses(
        (status = 200, description = "Active catalog items", body = Vec<CatalogItemResponse>)
    )
)]
pub async fn list_active(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CatalogItemResponse>>> {
    Ok(to_responses(state.catalog_service.list_active().await?))
}

/// List logically deleted catalog items
#[utoipa::path(
    get,
    path = "/api/referencias/inactivas",
    tag = "Catalog",
    responses(
        (status = 200, description = "Inactive catalog items", body = Vec<CatalogItemResponse>)
    )
)]
pub async fn list_inactive(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CatalogItemResponse>>> {
    Ok(to_responses(state.catalog_service.list_inactive().await?))
}

/// List catalog items by active flag
#[utoipa::path(
    get,
    path = "/api/referencias/estado/{activo}",
    tag = "Catalog",
    params(
        ("activo" = bool, Path, description = "Active flag to filter on")
    ),
    responses(
        (status = 200, description = "Matching catalog items", body = Vec<CatalogItemResponse>),
        (status = 400, description = "Flag is not a boolean")
    )
)]
pub async fn list_by_state(
    State(state): State<AppState>,
    ParsedPath(active): ParsedPath<bool>,
) -> AppResult<Json<Vec<CatalogItemResponse>>> {
    Ok(to_responses(state.catalog_service.list_by_state(active).await?))
}

/// Get catalog item by id
#[utoipa::path(
    get,
    path = "/api/referencias/{id}",
    tag = "Catalog",
    params(
        ("id" = i64, Path, description = "Catalog item id")
    ),
    responses(
        (status = 200, description = "Catalog item", body = CatalogItemResponse),
        (status = 404, description = "Catalog item not found")
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    ParsedPath(id): ParsedPath<i64>,
) -> AppResult<Json<CatalogItemResponse>> {
    let id = item_key(id, ITEM_NOT_FOUND)?;
    let item = state.catalog_service.get_by_id(id).await?;
    Ok(Json(item.into()))
}

/// Get catalog item by exact code
#[utoipa::path(
    get,
    path = "/api/referencias/codigo/{codigo}",
    tag = "Catalog",
    params(
        ("codigo" = String, Path, description = "Exact code, not normalized")
    ),
    responses(
        (status = 200, description = "Catalog item", body = CatalogItemResponse),
        (status = 404, description = "Catalog item not found")
    )
)]
pub async fn get_by_code(
    State(state): State<AppState>,
    ParsedPath(code): ParsedPath<String>,
) -> AppResult<Json<CatalogItemResponse>> {
    let item = state.catalog_service.get_by_code(&code).await?;
    Ok(Json(item.into()))
}

/// Update a catalog item
#[utoipa::path(
    put,
    path = "/api/referencias/{id}",
    tag = "Catalog",
    params(
        ("id" = i64, Path, description = "Catalog item id")
    ),
    request_body = CatalogItemRequest,
    responses(
        (status = 200, description = "Catalog item updated", body = CatalogItemResponse),
        (status = 400, description = "Invalid code format or missing field"),
        (status = 404, description = "Catalog item does not exist"),
        (status = 409, description = "Code or name held by another item")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ParsedPath(id): ParsedPath<i64>,
    ValidatedJson(payload): ValidatedJson<CatalogItemRequest>,
) -> AppResult<Json<CatalogItemResponse>> {
    let id = item_key(id, ITEM_DOES_NOT_EXIST)?;
    let item = state.catalog_service.update(id, payload.into()).await?;
    Ok(Json(item.into()))
}

/// Soft delete a catalog item
#[utoipa::path(
    delete,
    path = "/api/referencias/eliminar/{id}",
    tag = "Catalog",
    params(
        ("id" = i64, Path, description = "Catalog item id")
    ),
    responses(
        (status = 200, description = "Catalog item deactivated", body = MessageResponse),
        (status = 404, description = "Catalog item does not exist"),
        (status = 409, description = "Catalog item is already deleted")
    )
)]
pub async fn delete_item(
    State(state): State<AppState>,
    ParsedPath(id): ParsedPath<i64>,
) -> AppResult<Json<MessageResponse>> {
    let id = item_key(id, ITEM_DOES_NOT_EXIST)?;
    state.catalog_service.delete(id).await?;

    Ok(Json(MessageResponse {
        message: "Catalog item deleted successfully.".to_string(),
    }))
}
