//! Session types (account identity + resolved role).
//!
//! A [`Session`] is what the authentication provider gives us once a
//! sign-in completes and the profile row has been read: the account and
//! the role that row carries. [`SessionState`] wraps the moments where
//! there is no session yet.

use depot_types::{AccountId, Role};
use serde::{Deserialize, Serialize};

/// A signed-in account and its resolved role.
///
/// # Immutability
///
/// Sessions are immutable value types. A role change (profile refresh,
/// promotion) produces a *new* session written to the store; nothing
/// mutates an existing one. This keeps evaluators free to hold clones
/// without coordination.
///
/// # Why No Default?
///
/// **DO NOT implement `Default` for Session.**
///
/// A session requires a real account and a real role; there is no
/// sensible default identity. "Not signed in" is a
/// [`SessionState`] variant, not a placeholder session.
///
/// # Example
///
/// ```
/// use depot_auth::{Session, Role, AccountId};
///
/// let session = Session::new(AccountId::new(), Role::Admin);
/// assert_eq!(session.role(), Role::Admin);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The signed-in account.
    account: AccountId,
    /// The role the account's profile row carries.
    role: Role,
}

impl Session {
    /// Creates a session from a resolved profile.
    #[must_use]
    pub fn new(account: AccountId, role: Role) -> Self {
        Self { account, role }
    }

    /// Returns the signed-in account.
    #[must_use]
    pub fn account(&self) -> AccountId {
        self.account
    }

    /// Returns the resolved role.
    #[must_use]
    pub fn role(&self) -> Role {
        self.role
    }

    /// Returns a new session for the same account with a different
    /// role, as after a profile refresh.
    ///
    /// # Example
    ///
    /// ```
    /// use depot_auth::{Session, Role, AccountId};
    ///
    /// let session = Session::new(AccountId::new(), Role::Admin);
    /// let promoted = session.with_role(Role::SuperAdmin);
    ///
    /// assert_eq!(promoted.account(), session.account());
    /// assert_eq!(promoted.role(), Role::SuperAdmin);
    /// assert_eq!(session.role(), Role::Admin);  // original unchanged
    /// ```
    #[must_use]
    pub fn with_role(&self, role: Role) -> Self {
        Self {
            account: self.account,
            role,
        }
    }
}

impl std::fmt::Display for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.account, self.role)
    }
}

/// Where the console currently stands with the authentication provider.
///
/// The evaluator only ever asks [`role()`](Self::role): `Resolving` and
/// `Anonymous` both answer `None` and therefore deny everything. The
/// two are distinct so a UI shell can tell a spinner from a sign-in
/// prompt; permission decisions never branch on the difference.
///
/// # Example
///
/// ```
/// use depot_auth::{Session, SessionState, Role, AccountId};
///
/// let state = SessionState::default();
/// assert!(state.is_resolving());
/// assert_eq!(state.role(), None);
///
/// let state = SessionState::SignedIn(Session::new(AccountId::new(), Role::Admin));
/// assert_eq!(state.role(), Some(Role::Admin));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// The initial profile fetch has not completed yet.
    #[default]
    Resolving,

    /// Signed out, or the upstream fetch failed and the caller degraded
    /// here. Denies everything.
    Anonymous,

    /// Signed in with a resolved role.
    SignedIn(Session),
}

impl SessionState {
    /// Returns the current role, if any.
    ///
    /// This is the only accessor permission evaluation uses. `None`
    /// means "deny everything".
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        match self {
            Self::SignedIn(session) => Some(session.role()),
            Self::Resolving | Self::Anonymous => None,
        }
    }

    /// Returns the session, if signed in.
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::SignedIn(session) => Some(session),
            Self::Resolving | Self::Anonymous => None,
        }
    }

    /// Returns `true` if signed in.
    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        matches!(self, Self::SignedIn(_))
    }

    /// Returns `true` while the initial profile fetch is outstanding.
    #[must_use]
    pub fn is_resolving(&self) -> bool {
        matches!(self, Self::Resolving)
    }
}

impl std::fmt::Display for SessionState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Resolving => f.write_str("resolving"),
            Self::Anonymous => f.write_str("anonymous"),
            Self::SignedIn(session) => write!(f, "signed-in:{session}"),
        }
    }
}
