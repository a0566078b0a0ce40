//! Authentication service - credential checks and user registration.
//!
//! A successful login returns the user record with password material
//! stripped; no token or session is issued.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult};
use domain::validation::{validate_credentials, validate_user};
use domain::{CreateUser, Password, RoleSet, UserResponse};

use crate::repository::UserRepository;

/// Authentication service trait for dependency injection.
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Check a national ID / password pair against the stored hash
    async fn login(&self, national_id: &str, password: &str) -> AppResult<UserResponse>;

    /// Validate, hash and persist a new user
    async fn register_user(&self, input: CreateUser) -> AppResult<UserResponse>;
}

/// Concrete implementation of AuthService using the credential store.
pub struct Authenticator {
    users: Arc<dyn UserRepository>,
    roles: RoleSet,
}

impl Authenticator {
    /// Create new auth service instance
    pub fn new(users: Arc<dyn UserRepository>, roles: RoleSet) -> Self {
        Self { users, roles }
    }
}

#[async_trait]
impl AuthService for Authenticator {
    async fn login(&self, national_id: &str, password: &str) -> AppResult<UserResponse> {
        let user = self
            .users
            .find_by_national_id(national_id)
            .await?
            .ok_or_else(|| AppError::unauthorized("National ID not found"))?;

        if let Err(reason) = validate_credentials(Some(&user), Some(password)) {
            tracing::debug!(user_id = user.id, %reason, "Login rejected");
            return Err(AppError::unauthorized("Incorrect password"));
        }

        tracing::info!(user_id = user.id, "User logged in");
        Ok(UserResponse::from(user))
    }

    async fn register_user(&self, input: CreateUser) -> AppResult<UserResponse> {
        validate_user(&input, &self.roles)?;

        let CreateUser {
            national_id: Some(national_id),
            name: Some(name),
            email: Some(email),
            password: Some(password),
            role: Some(role),
        } = input
        else {
            return Err(AppError::internal("validated user lost a field"));
        };

        let role = self
            .roles
            .normalize(&role)
            .ok_or_else(|| AppError::validation(format!("Role must be {}.", self.roles.describe())))?
            .to_string();

        if self.users.find_by_national_id(&national_id).await?.is_some() {
            return Err(AppError::conflict("National ID is already registered."));
        }
        if self.users.find_by_email(&email).await?.is_some() {
            return Err(AppError::conflict("Email is already registered."));
        }

        let password_hash = Password::new(&password)?.into_string();

        let user = self
            .users
            .create(national_id, name.trim().to_string(), email, password_hash, role)
            .await?;

        tracing::info!(user_id = user.id, role = %user.role, "User registered");
        Ok(UserResponse::from(user))
    }
}
