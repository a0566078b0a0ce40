//! Field validation run before anything is persisted or compared.
//!
//! All checks are pure functions; the only injected input is the
//! deployment's [`RoleSet`].

use once_cell::sync::Lazy;
use regex::Regex;

use crate::catalog::{CatalogItemDraft, CatalogItemInput};
use crate::constants::{
    CATALOG_CODE_EXAMPLES, CATALOG_CODE_PREFIX, MAX_NATIONAL_ID_DIGITS, MIN_NATIONAL_ID_DIGITS,
    MIN_PASSWORD_LENGTH,
};
use crate::error::{DomainError, DomainResult};
use crate::password::Password;
use crate::user::{CreateUser, RoleSet, User};

static CATALOG_CODE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!("^{}[0-9]+$", CATALOG_CODE_PREFIX)).expect("valid regex")
});

static NATIONAL_ID_RE: Lazy<Regex> = Lazy::new(|| {
    let pattern = format!("^[0-9]{{{MIN_NATIONAL_ID_DIGITS},{MAX_NATIONAL_ID_DIGITS}}}$");
    Regex::new(&pattern).expect("valid regex")
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.\-]+@[A-Za-z0-9_\-]+\.[A-Za-z]{2,}$").expect("valid regex")
});

fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |v| v.trim().is_empty())
}

// =============================================================================
// Catalog items
// =============================================================================

/// Check a catalog code against `RF` + digits.
///
/// Case-sensitive: callers upper-case before calling.
pub fn validate_catalog_code(code: Option<&str>) -> DomainResult<()> {
    match code {
        Some(code) if CATALOG_CODE_RE.is_match(code) => Ok(()),
        _ => Err(DomainError::invalid_format(format!(
            "Code must start with '{}' followed only by digits. Valid examples: {}.",
            CATALOG_CODE_PREFIX, CATALOG_CODE_EXAMPLES
        ))),
    }
}

/// Check that code and name are present. The active flag is unconstrained.
pub fn validate_catalog_item(item: &CatalogItemInput) -> DomainResult<()> {
    if is_blank(item.code.as_deref()) {
        return Err(DomainError::validation("Catalog item code cannot be empty."));
    }

    if is_blank(item.name.as_deref()) {
        return Err(DomainError::validation("Catalog item name cannot be empty."));
    }

    Ok(())
}

/// Normalize a submitted item and run both catalog checks, in order.
pub fn prepare_catalog_item(input: CatalogItemInput) -> DomainResult<CatalogItemDraft> {
    let input = input.normalized();

    validate_catalog_code(input.code.as_deref())?;
    validate_catalog_item(&input)?;

    match (input.code, input.name) {
        (Some(code), Some(name)) => Ok(CatalogItemDraft {
            code,
            name,
            active: input.active,
        }),
        _ => Err(DomainError::internal("validated catalog item lost a field")),
    }
}

// =============================================================================
// Users
// =============================================================================

/// Check a national ID: 6 to 10 ASCII digits, nothing else
pub fn is_valid_national_id(national_id: &str) -> bool {
    NATIONAL_ID_RE.is_match(national_id)
}

/// Check an email against a simple `local@domain.tld` shape
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Validate a registration payload against the deployment's role set.
pub fn validate_user(user: &CreateUser, roles: &RoleSet) -> DomainResult<()> {
    if is_blank(user.name.as_deref()) {
        return Err(DomainError::validation("Name cannot be empty."));
    }

    if !user.national_id.as_deref().is_some_and(is_valid_national_id) {
        return Err(DomainError::validation(format!(
            "National ID must contain between {} and {} digits.",
            MIN_NATIONAL_ID_DIGITS, MAX_NATIONAL_ID_DIGITS
        )));
    }

    if !user.email.as_deref().is_some_and(is_valid_email) {
        return Err(DomainError::validation("Email address is not valid."));
    }

    let long_enough = user
        .password
        .as_deref()
        .is_some_and(|p| p.chars().count() >= MIN_PASSWORD_LENGTH);
    if !long_enough {
        return Err(DomainError::validation(format!(
            "Password must be at least {} characters.",
            MIN_PASSWORD_LENGTH
        )));
    }

    let role = match user.role.as_deref() {
        Some(role) if !role.trim().is_empty() => role,
        _ => return Err(DomainError::validation("Role is required.")),
    };

    if !roles.contains(role) {
        return Err(DomainError::validation(format!(
            "Role must be {}.",
            roles.describe()
        )));
    }

    Ok(())
}

/// Compare a submitted password with the stored salted hash.
///
/// `user` is the result of the caller's lookup.
pub fn validate_credentials(user: Option<&User>, submitted_password: Option<&str>) -> DomainResult<()> {
    let user = user.ok_or_else(|| DomainError::validation("User does not exist."))?;

    let submitted = match submitted_password {
        Some(p) if !p.trim().is_empty() => p,
        _ => return Err(DomainError::validation("Password cannot be empty.")),
    };

    if !Password::from_hash(user.password_hash.as_str()).verify(submitted) {
        return Err(DomainError::validation("Incorrect password."));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    fn valid_user() -> CreateUser {
        CreateUser {
            national_id: Some("1023456789".to_string()),
            name: Some("Laura Gómez".to_string()),
            email: Some("laura.gomez@empresa.co".to_string()),
            password: Some("clave123".to_string()),
            role: Some("tecnico".to_string()),
        }
    }

    fn roles() -> RoleSet {
        RoleSet::new("TECNICO").unwrap()
    }

    fn stored_user(plain: &str) -> User {
        let now = Utc::now();
        User {
            id: 1,
            national_id: "1023456789".to_string(),
            name: "Laura".to_string(),
            email: "laura@empresa.co".to_string(),
            password_hash: Password::new(plain).unwrap().into_string(),
            role: "ADMIN".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_catalog_code_accepts_rf_digits() {
        for code in ["RF1", "RF05", "RF100", "RF0000123"] {
            assert!(validate_catalog_code(Some(code)).is_ok(), "{code}");
        }
    }

    #[test]
    fn test_catalog_code_rejects_everything_else() {
        let rejected = [
            "", "RF", "rf1", "Rf1", "RF1A", " RF1", "RF1 ", "RF-1", "XRF1", "FR1", "RF١",
            "RF1\n",
        ];
        for code in rejected {
            let err = validate_catalog_code(Some(code)).unwrap_err();
            assert!(matches!(err, DomainError::InvalidFormat(_)), "{code:?}");
        }
        assert!(validate_catalog_code(None).is_err());
    }

    #[test]
    fn test_catalog_code_message_lists_examples() {
        let err = validate_catalog_code(Some("X1")).unwrap_err();
        assert!(err.to_string().contains("RF1, RF05, RF100"));
    }

    #[test]
    fn test_catalog_item_requires_code_and_name() {
        let mut item = CatalogItemInput::new("RF1", "   ", true);
        assert_eq!(
            validate_catalog_item(&item),
            Err(DomainError::validation("Catalog item name cannot be empty."))
        );

        item.name = Some("Perno".to_string());
        item.code = None;
        assert_eq!(
            validate_catalog_item(&item),
            Err(DomainError::validation("Catalog item code cannot be empty."))
        );
    }

    #[test]
    fn test_catalog_item_ignores_active_flag() {
        assert!(validate_catalog_item(&CatalogItemInput::new("RF1", "Perno", false)).is_ok());
    }

    #[test]
    fn test_prepare_normalizes_before_checking() {
        let draft = prepare_catalog_item(CatalogItemInput::new(" rf1 ", " Perno ", true)).unwrap();
        assert_eq!(draft.code, "RF1");
        assert_eq!(draft.name, "Perno");
        assert!(draft.active);
    }

    #[test]
    fn test_prepare_checks_format_first() {
        let err = prepare_catalog_item(CatalogItemInput::new("", "", true)).unwrap_err();
        assert!(matches!(err, DomainError::InvalidFormat(_)));

        let err = prepare_catalog_item(CatalogItemInput::new("RF2", " ", true)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_valid_user_passes() {
        assert!(validate_user(&valid_user(), &roles()).is_ok());
    }

    #[test]
    fn test_user_password_shorter_than_six_fails() {
        for password in ["", "a", "12345", "ñandú"] {
            let user = CreateUser {
                password: Some(password.to_string()),
                ..valid_user()
            };
            assert!(validate_user(&user, &roles()).is_err(), "{password:?}");
        }
    }

    #[test]
    fn test_user_national_id_shape() {
        for id in ["12345", "12345678901", "12345a7", " 123456"] {
            let user = CreateUser {
                national_id: Some(id.to_string()),
                ..valid_user()
            };
            assert!(validate_user(&user, &roles()).is_err(), "{id:?}");
        }
        assert!(is_valid_national_id("123456"));
        assert!(is_valid_national_id("1234567890"));
    }

    #[test]
    fn test_user_email_shape() {
        assert!(is_valid_email("a.b-c_d@dominio.com"));
        assert!(!is_valid_email("sin-arroba.com"));
        assert!(!is_valid_email("a@b.c"));
        assert!(!is_valid_email("a@sub.dominio.com"));
    }

    #[test]
    fn test_user_role_must_be_in_role_set() {
        let user = CreateUser {
            role: Some("USER".to_string()),
            ..valid_user()
        };
        let err = validate_user(&user, &roles()).unwrap_err();
        assert_eq!(err.to_string(), "Role must be ADMIN or TECNICO.");

        let user = CreateUser {
            role: Some("Admin".to_string()),
            ..valid_user()
        };
        assert!(validate_user(&user, &roles()).is_ok());

        let user = CreateUser {
            role: Some("  ".to_string()),
            ..valid_user()
        };
        assert_eq!(
            validate_user(&user, &roles()),
            Err(DomainError::validation("Role is required."))
        );
    }

    #[test]
    fn test_user_blank_name() {
        let user = CreateUser {
            name: None,
            ..valid_user()
        };
        assert_eq!(
            validate_user(&user, &roles()),
            Err(DomainError::validation("Name cannot be empty."))
        );
    }

    #[test]
    fn test_credentials() {
        let user = stored_user("clave123");

        assert!(validate_credentials(Some(&user), Some("clave123")).is_ok());
        assert_eq!(
            validate_credentials(Some(&user), Some("otra-clave")),
            Err(DomainError::validation("Incorrect password."))
        );
        assert_eq!(
            validate_credentials(Some(&user), Some("   ")),
            Err(DomainError::validation("Password cannot be empty."))
        );
        assert_eq!(
            validate_credentials(None, Some("clave123")),
            Err(DomainError::validation("User does not exist."))
        );
    }

    #[test]
    fn test_credentials_never_compare_plain_text() {
        let mut user = stored_user("clave123");
        user.password_hash = "clave123".to_string();

        assert!(validate_credentials(Some(&user), Some("clave123")).is_err());
    }
}
