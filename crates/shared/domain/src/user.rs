//! User domain entity and related types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::ROLE_ADMIN;
use crate::error::{DomainError, DomainResult};

/// The two role labels a deployment accepts.
///
/// `ADMIN` is fixed; the second label is deployment configuration because
/// installations disagree on its name (`TECNICO`, `USER`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleSet {
    secondary: String,
}

impl RoleSet {
    /// Build a role set from the configured secondary label.
    ///
    /// # Errors
    /// Fails when the label is blank or duplicates the admin role.
    pub fn new(secondary: impl AsRef<str>) -> DomainResult<Self> {
        let secondary = secondary.as_ref().trim().to_uppercase();
        if secondary.is_empty() {
            return Err(DomainError::validation("Secondary role label cannot be empty."));
        }
        if secondary == ROLE_ADMIN {
            return Err(DomainError::validation(format!(
                "Secondary role label must differ from {}.",
                ROLE_ADMIN
            )));
        }
        Ok(Self { secondary })
    }

    /// Canonical (upper-case) label for `role`, if it is recognised.
    pub fn normalize(&self, role: &str) -> Option<&str> {
        let upper = role.to_uppercase();
        if upper == ROLE_ADMIN {
            Some(ROLE_ADMIN)
        } else if upper == self.secondary {
            Some(&self.secondary)
        } else {
            None
        }
    }

    /// Check whether `role` is accepted (case-insensitive)
    pub fn contains(&self, role: &str) -> bool {
        self.normalize(role).is_some()
    }

    /// The configured non-admin label
    pub fn secondary(&self) -> &str {
        &self.secondary
    }

    /// Human-readable list used in error messages
    pub fn describe(&self) -> String {
        format!("{} or {}", ROLE_ADMIN, self.secondary)
    }
}

/// User domain entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i32,
    pub national_id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// User registration payload.
///
/// Fields are optional so that missing values surface as validation errors
/// with a precise message instead of a generic deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct CreateUser {
    /// National ID, 6 to 10 digits
    #[serde(rename = "cedula")]
    pub national_id: Option<String>,
    /// Full name
    #[serde(rename = "nombre")]
    pub name: Option<String>,
    /// Email address
    #[serde(rename = "correo")]
    pub email: Option<String>,
    /// Plain text password (minimum 6 characters)
    #[serde(rename = "contrasena")]
    pub password: Option<String>,
    /// Role label, case-insensitive
    #[serde(rename = "rol")]
    pub role: Option<String>,
}

/// User representation returned to callers. Never carries password material.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct UserResponse {
    #[serde(rename = "idUsuario")]
    pub id: i32,
    #[serde(rename = "cedula")]
    pub national_id: String,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "correo")]
    pub email: String,
    #[serde(rename = "rol")]
    pub role: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            national_id: user.national_id,
            name: user.name,
            email: user.email,
            role: user.role,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            national_id: user.national_id.clone(),
            name: user.name.clone(),
            email: user.email.clone(),
            role: user.role.clone(),
        }
    }
}
