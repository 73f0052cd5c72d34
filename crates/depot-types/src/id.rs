//! Identifier types for Depot.
//!
//! Identifiers are UUID-based so that values coming back from the hosted
//! backend (profile rows are keyed by UUID) can be carried without
//! translation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifier for an authenticated account.
///
/// An account is the *who* of a console session, separate from the
/// [`Role`](crate::Role) that decides what the session may do. The
/// authentication provider owns account creation; this type only carries
/// the identity it hands us.
///
/// # Example
///
/// ```
/// use depot_types::AccountId;
///
/// let a = AccountId::new();
/// let b = AccountId::new();
///
/// assert_ne!(a, b);  // Each account is unique
/// println!("Account: {}", a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AccountId(pub Uuid);

impl AccountId {
    /// Creates a new [`AccountId`] with a random UUID v4.
    ///
    /// In production the UUID comes from the authentication provider;
    /// random generation is for tests and fixtures.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wraps an existing UUID, typically one read from a profile row.
    ///
    /// # Example
    ///
    /// ```
    /// use depot_types::AccountId;
    /// use uuid::uuid;
    ///
    /// let id = AccountId::from_uuid(uuid!("9f2c1a34-7b61-4c0e-8f3a-2d5b6c7d8e9f"));
    /// assert_eq!(id.uuid().to_string(), "9f2c1a34-7b61-4c0e-8f3a-2d5b6c7d8e9f");
    /// ```
    #[must_use]
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    #[must_use]
    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for AccountId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AccountId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "account:{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_unique() {
        let a = AccountId::new();
        let b = AccountId::new();
        assert_ne!(a, b);
    }

    #[test]
    fn from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        let id = AccountId::from_uuid(uuid);
        assert_eq!(id.uuid(), uuid);
    }

    #[test]
    fn display_is_prefixed() {
        let id = AccountId::new();
        let shown = format!("{id}");
        assert!(shown.starts_with("account:"));
        assert!(shown.contains(&id.uuid().to_string()));
    }

    #[test]
    fn serde_roundtrip() {
        let id = AccountId::new();
        let json = serde_json::to_string(&id).expect("serialize");
        let parsed: AccountId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, id);
    }
}
