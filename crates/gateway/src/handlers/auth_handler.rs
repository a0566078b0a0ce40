//! Authentication handlers.

use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use common::AppResult;
use domain::{CreateUser, UserResponse};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// User registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    /// National ID, 6 to 10 digits
    #[serde(rename = "cedula")]
    #[schema(example = "1023456789")]
    pub national_id: Option<String>,
    /// Full name
    #[serde(rename = "nombre")]
    #[validate(length(max = 255, message = "Name is too long."))]
    #[schema(example = "Laura Gómez")]
    pub name: Option<String>,
    /// Email address
    #[serde(rename = "correo")]
    #[validate(length(max = 255, message = "Email is too long."))]
    #[schema(example = "laura.gomez@empresa.co")]
    pub email: Option<String>,
    /// Password (minimum 6 characters)
    #[serde(rename = "contrasena")]
    #[schema(example = "clave123", min_length = 6)]
    pub password: Option<String>,
    /// `ADMIN` or the deployment's secondary role, case-insensitive
    #[serde(rename = "rol")]
    #[schema(example = "TECNICO")]
    pub role: Option<String>,
}

impl From<RegisterRequest> for CreateUser {
    fn from(request: RegisterRequest) -> Self {
        CreateUser {
            national_id: request.national_id,
            name: request.name,
            email: request.email,
            password: request.password,
            role: request.role,
        }
    }
}

/// User login request
///
/// Missing fields read as empty; the credential check answers them with 401.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginRequest {
    /// National ID used as login key
    #[serde(rename = "cedula", default)]
    #[schema(example = "1023456789")]
    pub national_id: String,
    /// Plain text password
    #[serde(rename = "contrasena", default)]
    #[schema(example = "clave123")]
    pub password: String,
}

/// Create authentication routes
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered successfully", body = UserResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "National ID or email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, Json<UserResponse>)> {
    let user = state.auth_service.register_user(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Check credentials and return the user record
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "Authentication",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = UserResponse),
        (status = 400, description = "Malformed body"),
        (status = 401, description = "Unknown national ID or incorrect password")
    )
)]
pub async fn login(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> AppResult<Json<UserResponse>> {
    let user = state
        .auth_service
        .login(&payload.national_id, &payload.password)
        .await?;

    Ok(Json(user))
}
