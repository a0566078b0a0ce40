//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// User Roles
// =============================================================================

/// Administrator role, always accepted regardless of deployment
pub const ROLE_ADMIN: &str = "ADMIN";

// =============================================================================
// Validation
// =============================================================================

/// Minimum password length requirement (characters, before hashing)
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Minimum number of digits in a national ID
pub const MIN_NATIONAL_ID_DIGITS: usize = 6;

/// Maximum number of digits in a national ID
pub const MAX_NATIONAL_ID_DIGITS: usize = 10;

/// Mandatory prefix of every catalog item code
pub const CATALOG_CODE_PREFIX: &str = "RF";

/// Examples quoted back to callers when a code is malformed
pub const CATALOG_CODE_EXAMPLES: &str = "RF1, RF05, RF100";
