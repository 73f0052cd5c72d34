//! Unified error interface for Depot crates.
//!
//! Every error type in the workspace implements [`ErrorCode`] so the
//! embedding application can log and branch on errors without matching
//! each crate's enum.
//!
//! # Example
//!
//! ```
//! use depot_types::ErrorCode;
//!
//! #[derive(Debug)]
//! enum ProfileError {
//!     FetchFailed,
//!     MalformedRow(String),
//! }
//!
//! impl ErrorCode for ProfileError {
//!     fn code(&self) -> &'static str {
//!         match self {
//!             Self::FetchFailed => "PROFILE_FETCH_FAILED",
//!             Self::MalformedRow(_) => "PROFILE_MALFORMED_ROW",
//!         }
//!     }
//!
//!     fn is_recoverable(&self) -> bool {
//!         matches!(self, Self::FetchFailed)
//!     }
//! }
//!
//! let err = ProfileError::FetchFailed;
//! assert_eq!(err.code(), "PROFILE_FETCH_FAILED");
//! assert!(err.is_recoverable());
//! ```

/// Unified error code interface.
///
/// # Code Format
///
/// - **UPPER_SNAKE_CASE**: e.g. `"AUTH_UNKNOWN_ROLE"`
/// - **Domain-prefixed**: `"AUTH_"`, `"CONSOLE_"`, ...
/// - **Stable**: codes are an API contract and must not change once
///   published
///
/// # Recoverability
///
/// An error is recoverable when retrying may succeed or the user can fix
/// it (transient fetch failure). It is not recoverable when retrying
/// cannot help (an unknown role name stays unknown until the catalog
/// itself changes).
pub trait ErrorCode {
    /// Returns a machine-readable error code.
    fn code(&self) -> &'static str;

    /// Returns whether retrying or user action may resolve the error.
    fn is_recoverable(&self) -> bool;
}

/// Validates that an error code follows Depot conventions.
///
/// # Checks
///
/// 1. Code is non-empty
/// 2. Code starts with the expected domain prefix
/// 3. Code is UPPER_SNAKE_CASE
///
/// # Panics
///
/// Panics with a descriptive message if validation fails. Intended for
/// use inside tests.
///
/// # Example
///
/// ```
/// use depot_types::{assert_error_code, ErrorCode};
///
/// #[derive(Debug)]
/// struct Closed;
///
/// impl ErrorCode for Closed {
///     fn code(&self) -> &'static str { "CONSOLE_STORE_CLOSED" }
///     fn is_recoverable(&self) -> bool { false }
/// }
///
/// assert_error_code(&Closed, "CONSOLE_");
/// ```
pub fn assert_error_code<E: ErrorCode>(err: &E, expected_prefix: &str) {
    let code = err.code();

    assert!(!code.is_empty(), "Error code must not be empty");

    assert!(
        code.starts_with(expected_prefix),
        "Error code '{}' must start with prefix '{}'",
        code,
        expected_prefix
    );

    assert!(
        is_upper_snake_case(code),
        "Error code '{}' must be UPPER_SNAKE_CASE",
        code
    );
}

/// Validates every variant of an error enum at once.
pub fn assert_error_codes<E: ErrorCode>(errors: &[E], expected_prefix: &str) {
    for err in errors {
        assert_error_code(err, expected_prefix);
    }
}

/// Checks if a string is UPPER_SNAKE_CASE.
fn is_upper_snake_case(s: &str) -> bool {
    if s.is_empty() || s.starts_with('_') || s.ends_with('_') || s.contains("__") {
        return false;
    }

    s.chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    enum TestError {
        Transient,
        Permanent,
    }

    impl ErrorCode for TestError {
        fn code(&self) -> &'static str {
            match self {
                Self::Transient => "TEST_TRANSIENT",
                Self::Permanent => "TEST_PERMANENT",
            }
        }

        fn is_recoverable(&self) -> bool {
            matches!(self, Self::Transient)
        }
    }

    #[test]
    fn error_code_trait() {
        assert_eq!(TestError::Transient.code(), "TEST_TRANSIENT");
        assert!(TestError::Transient.is_recoverable());
        assert!(!TestError::Permanent.is_recoverable());
    }

    #[test]
    fn assert_error_codes_all_variants() {
        assert_error_codes(&[TestError::Transient, TestError::Permanent], "TEST_");
    }

    #[test]
    #[should_panic(expected = "must start with prefix")]
    fn assert_error_code_wrong_prefix() {
        assert_error_code(&TestError::Transient, "WRONG_");
    }

    #[test]
    fn is_upper_snake_case_valid() {
        assert!(is_upper_snake_case("AUTH_UNKNOWN_ROLE"));
        assert!(is_upper_snake_case("X_1"));
    }

    #[test]
    fn is_upper_snake_case_invalid() {
        assert!(!is_upper_snake_case(""));
        assert!(!is_upper_snake_case("auth_unknown_role"));
        assert!(!is_upper_snake_case("_AUTH"));
        assert!(!is_upper_snake_case("AUTH_"));
        assert!(!is_upper_snake_case("AUTH__ROLE"));
    }
}
