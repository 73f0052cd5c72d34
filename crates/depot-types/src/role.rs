//! Role (account classification) types.
//!
//! A [`Role`] names the class a user profile belongs to. The backend
//! assigns it; the console only reads it. Which capabilities each role
//! unlocks is decided by the grants table in `depot-auth`, never here.

use serde::{Deserialize, Serialize};

/// The class of user an account belongs to.
///
/// The enumeration is closed: the backend's profile table only ever
/// stores these four values, and a profile row carrying anything else is
/// treated as having no role at all (the console denies everything
/// rather than guessing).
///
/// # Ordering
///
/// Variants are declared from least to most privileged, but nothing in
/// the console derives privilege from that order. Capability grants come
/// from the grants table alone, so `Ord` is deliberately not derived.
///
/// # Example
///
/// ```
/// use depot_types::Role;
///
/// let role = Role::parse("admin").unwrap();
/// assert_eq!(role, Role::Admin);
/// assert_eq!(role.as_str(), "admin");
///
/// // Unrecognized values never panic, they just parse to None.
/// assert_eq!(Role::parse("owner"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Storefront customer. Can shop, but never enters the console.
    Customer,

    /// Courier working the delivery queue.
    DeliveryAgent,

    /// Back-office operator for day-to-day catalog and order work.
    Admin,

    /// Operator with every capability, including account administration.
    SuperAdmin,
}

impl Role {
    /// All roles, in declaration order.
    ///
    /// # Example
    ///
    /// ```
    /// use depot_types::Role;
    ///
    /// assert_eq!(Role::ALL.len(), 4);
    /// assert!(Role::ALL.contains(&Role::Customer));
    /// ```
    pub const ALL: [Role; 4] = [
        Role::Customer,
        Role::DeliveryAgent,
        Role::Admin,
        Role::SuperAdmin,
    ];

    /// Returns the canonical snake_case name, as stored in profile rows.
    ///
    /// # Example
    ///
    /// ```
    /// use depot_types::Role;
    ///
    /// assert_eq!(Role::DeliveryAgent.as_str(), "delivery_agent");
    /// assert_eq!(Role::SuperAdmin.as_str(), "super_admin");
    /// ```
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::DeliveryAgent => "delivery_agent",
            Self::Admin => "admin",
            Self::SuperAdmin => "super_admin",
        }
    }

    /// Parses a role name (case-insensitive).
    ///
    /// Returns `None` for anything outside the closed enumeration.
    /// Callers at the profile boundary decide what to do with `None`;
    /// the evaluator treats a missing role as "no capabilities".
    ///
    /// # Example
    ///
    /// ```
    /// use depot_types::Role;
    ///
    /// assert_eq!(Role::parse("customer"), Some(Role::Customer));
    /// assert_eq!(Role::parse("SUPER_ADMIN"), Some(Role::SuperAdmin));
    /// assert_eq!(Role::parse("root"), None);
    /// assert_eq!(Role::parse(""), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "customer" => Some(Self::Customer),
            "delivery_agent" => Some(Self::DeliveryAgent),
            "admin" => Some(Self::Admin),
            "super_admin" => Some(Self::SuperAdmin),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
