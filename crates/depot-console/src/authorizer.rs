//! The live authorization evaluator.
//!
//! [`Authorizer`] answers "may the current user do this" by combining
//! the latest [`SessionState`](depot_auth::SessionState) from a
//! [`SessionWatch`] with an injected [`RolePolicy`] table. Every query
//! re-reads the watch, so answers flip the moment a sign-in, sign-out,
//! or role refresh lands in the store; nothing is cached at
//! construction.
//!
//! # Fail Closed
//!
//! No authenticated role (session still resolving, or anonymous) means
//! every query answers `false`. That is an answer, not an error: the
//! evaluator itself never fails and never blocks.

use crate::store::SessionWatch;
use depot_auth::{AccessDenied, Capability, RoleGrants, RolePolicy};
use depot_types::Role;
use std::sync::Arc;
use tracing::debug;

/// Live permission evaluator for the current session.
///
/// Cheap to clone; clones share the policy table and track the same
/// store.
///
/// # Example
///
/// ```
/// use depot_auth::{AccountId, Capability, Role, Session};
/// use depot_console::{Authorizer, SessionStore};
///
/// let store = SessionStore::new();
/// let authz = Authorizer::with_standard_grants(store.watch());
///
/// store.sign_in(Session::new(AccountId::new(), Role::DeliveryAgent));
///
/// assert!(authz.can(Capability::MANAGE_DELIVERIES));
/// assert!(!authz.can(Capability::MANAGE_PAYMENTS));
/// assert!(authz.can_any(&[Capability::MANAGE_PAYMENTS, Capability::MANAGE_DELIVERIES]));
/// ```
#[derive(Debug)]
pub struct Authorizer<P = RoleGrants> {
    watch: SessionWatch,
    policy: Arc<P>,
}

impl Authorizer<RoleGrants> {
    /// Creates an evaluator over the built-in
    /// [standard](RoleGrants::standard) grants table.
    #[must_use]
    pub fn with_standard_grants(watch: SessionWatch) -> Self {
        Self::new(watch, Arc::new(RoleGrants::standard()))
    }
}

impl<P: RolePolicy> Authorizer<P> {
    /// Creates an evaluator over an injected policy table.
    ///
    /// The table is shared, not copied; build it once at process start
    /// and hand the same `Arc` to every evaluator.
    #[must_use]
    pub fn new(watch: SessionWatch, policy: Arc<P>) -> Self {
        Self { watch, policy }
    }

    /// Returns `true` iff the current role holds `required`.
    ///
    /// No authenticated role answers `false`. Synchronous, never
    /// blocks, never errors.
    #[must_use]
    pub fn can(&self, required: Capability) -> bool {
        match self.watch.role() {
            Some(role) => self.policy.allows(role, required),
            None => false,
        }
    }

    /// Returns `true` iff the current role satisfies at least one
    /// entry. An empty slice is `false`.
    ///
    /// # Example
    ///
    /// ```
    /// use depot_auth::{AccountId, Capability, Role, Session};
    /// use depot_console::{Authorizer, SessionStore};
    ///
    /// let store = SessionStore::new();
    /// let authz = Authorizer::with_standard_grants(store.watch());
    /// store.sign_in(Session::new(AccountId::new(), Role::Admin));
    ///
    /// assert!(authz.can_any(&[Capability::MANAGE_USERS, Capability::MANAGE_ORDERS]));
    /// assert!(!authz.can_any(&[]));
    /// ```
    #[must_use]
    pub fn can_any(&self, any_of: &[Capability]) -> bool {
        match self.watch.role() {
            Some(role) => self.policy.allows_any(role, any_of),
            None => false,
        }
    }

    /// Imperative guard for call sites that delegate to backend
    /// procedures, e.g. submitting an inventory adjustment.
    ///
    /// View rendering should use [`can`](Self::can) or a
    /// [`Gate`](crate::Gate) instead; on the rendering path denial is
    /// a fallback view, not an error.
    ///
    /// # Errors
    ///
    /// - [`AccessDenied::NoRole`] when no authenticated role is
    ///   available.
    /// - [`AccessDenied::MissingCapability`] when the role lacks
    ///   `required`.
    pub fn require(&self, required: Capability) -> Result<(), AccessDenied> {
        match self.watch.role() {
            None => {
                debug!(%required, "require denied: no authenticated role");
                Err(AccessDenied::NoRole { required })
            }
            Some(role) => {
                let held = self.policy.capabilities_for(role);
                if held.contains(required) {
                    Ok(())
                } else {
                    debug!(%role, %required, %held, "require denied: capability missing");
                    Err(AccessDenied::MissingCapability {
                        role,
                        required,
                        held,
                    })
                }
            }
        }
    }

    /// Returns the current role, if any.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.watch.role()
    }

    /// Returns the capability set of the current role, empty when no
    /// role is authenticated.
    #[must_use]
    pub fn capabilities(&self) -> Capability {
        match self.watch.role() {
            Some(role) => self.policy.capabilities_for(role),
            None => Capability::empty(),
        }
    }

    /// Returns `true` if the current user may enter the console at
    /// all. Derived from the grants table, like every other check.
    #[must_use]
    pub fn is_staff(&self) -> bool {
        self.can(Capability::VIEW_DASHBOARD)
    }
}

impl<P> Clone for Authorizer<P> {
    fn clone(&self) -> Self {
        Self {
            watch: self.watch.clone(),
            policy: Arc::clone(&self.policy),
        }
    }
}
