//! Error types for the permission model.
//!
//! Two families, deliberately separate:
//!
//! - [`AuthError`] — boundary parsing: a role name or capability name
//!   from a profile row or a config file that is not in the closed
//!   enumeration.
//! - [`AccessDenied`] — the imperative guard's refusal, returned by
//!   `require`-style call sites that front backend RPC delegation.
//!
//! "Capability not granted" on the *rendering* path is not an error at
//! all: gates and `can`-style queries answer `false` and the caller
//! shows a fallback.

use crate::Capability;
use depot_types::{ErrorCode, Role};
use thiserror::Error;

/// Boundary parsing and configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A role name outside the closed enumeration.
    #[error("unknown role: '{0}'")]
    UnknownRole(String),

    /// A capability name outside the catalog.
    #[error("unknown capability: '{0}'")]
    UnknownCapability(String),

    /// Grants config that is not valid TOML of the expected shape.
    #[error("invalid grants config: {0}")]
    InvalidGrants(String),
}

impl ErrorCode for AuthError {
    fn code(&self) -> &'static str {
        match self {
            Self::UnknownRole(_) => "AUTH_UNKNOWN_ROLE",
            Self::UnknownCapability(_) => "AUTH_UNKNOWN_CAPABILITY",
            Self::InvalidGrants(_) => "AUTH_INVALID_GRANTS",
        }
    }

    fn is_recoverable(&self) -> bool {
        // Retrying the same input cannot help; the catalog or the
        // input itself has to change.
        false
    }
}

/// Refusal from an imperative permission guard.
///
/// Carries enough to log a useful audit line: what was required, what
/// the evaluated role actually held, and whether there was a role at
/// all.
///
/// # Example
///
/// ```
/// use depot_auth::{AccessDenied, Capability, Role};
///
/// let err = AccessDenied::MissingCapability {
///     role: Role::Admin,
///     required: Capability::MANAGE_USERS,
///     held: Capability::MANAGE_ORDERS,
/// };
///
/// assert!(err.to_string().contains("manage_users"));
/// assert_eq!(err.required(), Capability::MANAGE_USERS);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessDenied {
    /// The role exists but does not hold the required capability.
    #[error("access denied: requires {required}, role '{role}' holds {held}")]
    MissingCapability {
        /// The role that was evaluated.
        role: Role,
        /// The capability the operation requires.
        required: Capability,
        /// What the role actually holds.
        held: Capability,
    },

    /// No authenticated role: session resolving or anonymous.
    #[error("access denied: requires {required}, no authenticated role")]
    NoRole {
        /// The capability the operation requires.
        required: Capability,
    },
}

impl AccessDenied {
    /// Returns the capability the denied operation required.
    #[must_use]
    pub fn required(&self) -> Capability {
        match self {
            Self::MissingCapability { required, .. } | Self::NoRole { required } => *required,
        }
    }

    /// Returns the evaluated role, if there was one.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::MissingCapability { role, .. } => Some(*role),
            Self::NoRole { .. } => None,
        }
    }
}

impl ErrorCode for AccessDenied {
    fn code(&self) -> &'static str {
        match self {
            Self::MissingCapability { .. } => "AUTH_CAPABILITY_DENIED",
            Self::NoRole { .. } => "AUTH_NO_ROLE",
        }
    }

    fn is_recoverable(&self) -> bool {
        // Needs a different role or a grants change, not a retry.
        false
    }
}
