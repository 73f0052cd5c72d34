//! Protected-view gating.
//!
//! A [`Gate`] wraps one unit of UI behind a capability requirement.
//! The decision is re-derived from the live [`Authorizer`] on every
//! call; a gate constructed at startup keeps answering correctly
//! across sign-ins, sign-outs, and role changes.

use crate::Authorizer;
use depot_auth::{Capability, RolePolicy};

/// Outcome of evaluating a gate: the produced view, or the default
/// denied indicator.
///
/// `Denied` deliberately carries nothing: which capability was missing
/// is the gate's business, and surfacing it to an unauthorized viewer
/// would leak the console's structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gated<V> {
    /// The requirement held; here is the view.
    Granted(V),
    /// The requirement did not hold; render a fallback.
    Denied,
}

impl<V> Gated<V> {
    /// Returns `true` if the view was produced.
    #[must_use]
    pub fn is_granted(&self) -> bool {
        matches!(self, Self::Granted(_))
    }

    /// Returns `true` if the gate denied.
    #[must_use]
    pub fn is_denied(&self) -> bool {
        matches!(self, Self::Denied)
    }

    /// Returns the view, if granted.
    #[must_use]
    pub fn into_inner(self) -> Option<V> {
        match self {
            Self::Granted(view) => Some(view),
            Self::Denied => None,
        }
    }

    /// Returns the view, or builds the fallback.
    #[must_use]
    pub fn unwrap_or_else(self, fallback: impl FnOnce() -> V) -> V {
        match self {
            Self::Granted(view) => view,
            Self::Denied => fallback(),
        }
    }
}

/// Capability requirement in front of a unit of UI.
///
/// Stateless: the gate holds only its requirement, never a cached
/// decision.
///
/// # Example
///
/// ```
/// use depot_auth::{AccountId, Capability, Role, Session};
/// use depot_console::{Authorizer, Gate, SessionStore};
///
/// let store = SessionStore::new();
/// let authz = Authorizer::with_standard_grants(store.watch());
/// let gate = Gate::new(Capability::MANAGE_PAYMENTS);
///
/// // Before sign-in: fallback.
/// assert_eq!(gate.view_or(&authz, || "payments", || "denied"), "denied");
///
/// // After sign-in as admin: content. Same gate, no rebuild.
/// store.sign_in(Session::new(AccountId::new(), Role::Admin));
/// assert_eq!(gate.view_or(&authz, || "payments", || "denied"), "payments");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate {
    required: Capability,
    any: bool,
}

impl Gate {
    /// Gate requiring every listed capability.
    #[must_use]
    pub fn new(required: Capability) -> Self {
        Self {
            required,
            any: false,
        }
    }

    /// Gate requiring at least one of the listed capabilities.
    ///
    /// # Example
    ///
    /// ```
    /// use depot_auth::{AccountId, Capability, Role, Session};
    /// use depot_console::{Authorizer, Gate, SessionStore};
    ///
    /// let store = SessionStore::new();
    /// let authz = Authorizer::with_standard_grants(store.watch());
    /// store.sign_in(Session::new(AccountId::new(), Role::DeliveryAgent));
    ///
    /// let fulfilment = Gate::any_of(Capability::MANAGE_ORDERS | Capability::MANAGE_DELIVERIES);
    /// assert!(fulfilment.is_open(&authz));
    /// ```
    #[must_use]
    pub fn any_of(required: Capability) -> Self {
        Self {
            required,
            any: true,
        }
    }

    /// Returns the gate's capability requirement.
    #[must_use]
    pub fn required(&self) -> Capability {
        self.required
    }

    /// Evaluates the requirement against the live session.
    ///
    /// An empty requirement is closed in both modes: requiring nothing
    /// grants nothing.
    #[must_use]
    pub fn is_open<P: RolePolicy>(&self, authz: &Authorizer<P>) -> bool {
        if self.required.is_empty() {
            return false;
        }
        if self.any {
            authz.capabilities().intersects(self.required)
        } else {
            authz.can(self.required)
        }
    }

    /// Produces the view, or [`Gated::Denied`].
    #[must_use]
    pub fn view<P: RolePolicy, V>(
        &self,
        authz: &Authorizer<P>,
        content: impl FnOnce() -> V,
    ) -> Gated<V> {
        if self.is_open(authz) {
            Gated::Granted(content())
        } else {
            Gated::Denied
        }
    }

    /// Produces the view, or the caller's fallback.
    #[must_use]
    pub fn view_or<P: RolePolicy, V>(
        &self,
        authz: &Authorizer<P>,
        content: impl FnOnce() -> V,
        fallback: impl FnOnce() -> V,
    ) -> V {
        self.view(authz, content).unwrap_or_else(fallback)
    }
}
