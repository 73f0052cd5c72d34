//! Role policy trait.
//!
//! Defines [`RolePolicy`], the evaluation seam between the grants table
//! and its consumers. The trait lives here so `depot-console` can
//! evaluate against any table without knowing how it was built, and so
//! tests can inject a bespoke one.
//!
//! # Architecture
//!
//! ```text
//! RolePolicy trait (depot-auth)       ← abstract, no runtime deps
//!          │
//!          ├── RoleGrants (depot-auth)  ← standard table impl
//!          │
//!          └── test doubles in consumers
//! ```

use crate::Capability;
use depot_types::Role;

/// Abstract role → capability policy.
///
/// The two provided methods carry the whole query surface; implementors
/// only supply [`capabilities_for`](Self::capabilities_for). The
/// contract is total and side-effect free: every role answers with a
/// set, possibly empty, and asking never fails.
///
/// # Example
///
/// ```
/// use depot_auth::{Capability, Role, RolePolicy};
///
/// // Grants the whole catalog to any role.
/// struct AllowAll;
///
/// impl RolePolicy for AllowAll {
///     fn capabilities_for(&self, _role: Role) -> Capability {
///         Capability::ALL
///     }
/// }
///
/// let policy = AllowAll;
/// assert!(policy.allows(Role::Customer, Capability::MANAGE_USERS));
/// assert!(policy.allows_any(Role::Customer, &[Capability::VIEW_REPORTS]));
/// ```
pub trait RolePolicy: Send + Sync {
    /// Returns the capability set the role holds.
    ///
    /// Must be total: roles the implementation does not know yield the
    /// empty set, never an error.
    fn capabilities_for(&self, role: Role) -> Capability;

    /// Returns `true` if the role holds every bit of `required`.
    fn allows(&self, role: Role, required: Capability) -> bool {
        self.capabilities_for(role).contains(required)
    }

    /// Returns `true` if the role satisfies at least one entry.
    ///
    /// An empty slice is `false`: requiring nothing grants nothing.
    fn allows_any(&self, role: Role, any_of: &[Capability]) -> bool {
        any_of.iter().any(|cap| self.allows(role, *cap))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DenyAll;

    impl RolePolicy for DenyAll {
        fn capabilities_for(&self, _role: Role) -> Capability {
            Capability::empty()
        }
    }

    struct AgentOnly;

    impl RolePolicy for AgentOnly {
        fn capabilities_for(&self, role: Role) -> Capability {
            match role {
                Role::DeliveryAgent => Capability::MANAGE_DELIVERIES,
                _ => Capability::empty(),
            }
        }
    }

    #[test]
    fn deny_all_denies_everything() {
        let policy = DenyAll;
        for role in Role::ALL {
            assert!(!policy.allows(role, Capability::VIEW_DASHBOARD));
            assert!(!policy.allows_any(role, &[Capability::VIEW_DASHBOARD, Capability::ALL]));
        }
    }

    #[test]
    fn allows_requires_all_bits() {
        let policy = AgentOnly;
        assert!(policy.allows(Role::DeliveryAgent, Capability::MANAGE_DELIVERIES));
        assert!(!policy.allows(
            Role::DeliveryAgent,
            Capability::MANAGE_DELIVERIES | Capability::VIEW_DASHBOARD
        ));
    }

    #[test]
    fn allows_any_is_an_or_over_entries() {
        let policy = AgentOnly;

        let one_hit = [Capability::VIEW_DASHBOARD, Capability::MANAGE_DELIVERIES];
        assert!(policy.allows_any(Role::DeliveryAgent, &one_hit));

        let no_hit = [Capability::VIEW_DASHBOARD, Capability::MANAGE_USERS];
        assert!(!policy.allows_any(Role::DeliveryAgent, &no_hit));
    }

    #[test]
    fn allows_any_empty_slice_is_false() {
        let policy = AgentOnly;
        for role in Role::ALL {
            assert!(!policy.allows_any(role, &[]));
        }
    }

    #[test]
    fn allows_any_equals_or_of_allows() {
        let policy = AgentOnly;
        let c1 = Capability::MANAGE_DELIVERIES;
        let c2 = Capability::MANAGE_USERS;

        for role in Role::ALL {
            assert_eq!(
                policy.allows_any(role, &[c1, c2]),
                policy.allows(role, c1) || policy.allows(role, c2)
            );
        }
    }

    #[test]
    fn trait_object_works() {
        let policy: Box<dyn RolePolicy> = Box::new(DenyAll);
        assert!(!policy.allows(Role::SuperAdmin, Capability::VIEW_DASHBOARD));
    }
}
