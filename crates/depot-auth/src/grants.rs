//! The role → capability grants table.
//!
//! [`RoleGrants`] is the one place a role's reach is decided. It is
//! built once at process start (the built-in [`standard`](RoleGrants::standard)
//! table, a bespoke table from the [builder](RoleGrants::grant), or a
//! [TOML config](RoleGrants::from_toml)) and never mutated afterwards.
//!
//! # Fail Closed
//!
//! A role without an entry yields the empty set. There is no error path
//! for "role not in table": absence means denial, and denial is a normal
//! answer.
//!
//! # Example
//!
//! ```
//! use depot_auth::{Capability, RoleGrants, Role, RolePolicy};
//!
//! let grants = RoleGrants::standard();
//!
//! assert!(grants.allows(Role::Admin, Capability::MANAGE_ORDERS));
//! assert!(!grants.allows(Role::Admin, Capability::MANAGE_USERS));
//! assert!(grants.capabilities_for(Role::Customer).is_empty());
//! ```

use crate::{AuthError, Capability, RolePolicy};
use depot_types::Role;
use std::collections::HashMap;
use tracing::debug;

/// Immutable mapping from [`Role`] to the capability set it holds.
///
/// # Standard Table
///
/// | Role | Capabilities |
/// |------|--------------|
/// | `customer` | (none) |
/// | `delivery_agent` | view_dashboard, manage_deliveries |
/// | `admin` | everything except manage_users and manage_settings |
/// | `super_admin` | the whole catalog |
///
/// # Immutability
///
/// The table offers no mutation after construction. The consuming
/// builder ([`grant`](Self::grant)) exists for tests and restricted
/// deployments; once the table is handed to an evaluator it never
/// changes for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGrants {
    grants: HashMap<Role, Capability>,
}

impl RoleGrants {
    /// Creates the built-in production table.
    ///
    /// # Example
    ///
    /// ```
    /// use depot_auth::{Capability, RoleGrants, Role};
    ///
    /// let grants = RoleGrants::standard();
    /// assert_eq!(grants.capabilities_for(Role::SuperAdmin), Capability::ALL);
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        Self::empty()
            .grant(Role::Customer, Capability::empty())
            .grant(
                Role::DeliveryAgent,
                Capability::VIEW_DASHBOARD | Capability::MANAGE_DELIVERIES,
            )
            .grant(
                Role::Admin,
                Capability::VIEW_DASHBOARD
                    | Capability::MANAGE_ORDERS
                    | Capability::MANAGE_PRODUCTS
                    | Capability::MANAGE_INVENTORY
                    | Capability::MANAGE_PAYMENTS
                    | Capability::MANAGE_DELIVERIES
                    | Capability::VIEW_REPORTS,
            )
            .grant(Role::SuperAdmin, Capability::ALL)
    }

    /// Creates a table with no entries: every role gets the empty set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            grants: HashMap::new(),
        }
    }

    /// Sets a role's capability set, replacing any previous entry.
    ///
    /// Consuming builder, used at construction time only.
    ///
    /// # Example
    ///
    /// ```
    /// use depot_auth::{Capability, RoleGrants, Role};
    ///
    /// let grants = RoleGrants::empty()
    ///     .grant(Role::Admin, Capability::MANAGE_ORDERS);
    ///
    /// assert_eq!(grants.capabilities_for(Role::Admin), Capability::MANAGE_ORDERS);
    /// assert!(grants.capabilities_for(Role::SuperAdmin).is_empty());
    /// ```
    #[must_use]
    pub fn grant(mut self, role: Role, capabilities: Capability) -> Self {
        self.grants.insert(role, capabilities);
        self
    }

    /// Returns the capability set a role holds.
    ///
    /// Total: a role without an entry yields [`Capability::empty`],
    /// never an error.
    #[must_use]
    pub fn capabilities_for(&self, role: Role) -> Capability {
        self.grants
            .get(&role)
            .copied()
            .unwrap_or_else(Capability::empty)
    }

    /// Returns `true` if the role can enter the console at all.
    ///
    /// Staff status is derived from this table, nothing else: a role is
    /// staff iff it holds [`Capability::VIEW_DASHBOARD`]. There is no
    /// parallel list of staff role names to drift out of sync.
    ///
    /// # Example
    ///
    /// ```
    /// use depot_auth::{RoleGrants, Role};
    ///
    /// let grants = RoleGrants::standard();
    /// assert!(grants.is_staff(Role::DeliveryAgent));
    /// assert!(grants.is_staff(Role::Admin));
    /// assert!(!grants.is_staff(Role::Customer));
    /// ```
    #[must_use]
    pub fn is_staff(&self, role: Role) -> bool {
        self.capabilities_for(role).contains(Capability::VIEW_DASHBOARD)
    }

    /// Builds a table from declarative TOML, once, at process start.
    ///
    /// Each key is a role name, each value a list of capability names
    /// (`"all"` expands to the whole catalog). Unknown role or
    /// capability names are rejected: a typo must never silently widen
    /// or narrow a live table.
    ///
    /// Roles absent from the config get no entry and therefore the
    /// empty set.
    ///
    /// # Errors
    ///
    /// - [`AuthError::InvalidGrants`] if the input is not valid TOML of
    ///   the expected shape.
    /// - [`AuthError::UnknownRole`] for a key outside the role
    ///   enumeration.
    /// - [`AuthError::UnknownCapability`] for a list entry outside the
    ///   catalog.
    ///
    /// # Example
    ///
    /// ```
    /// use depot_auth::{Capability, RoleGrants, Role};
    ///
    /// let grants = RoleGrants::from_toml(r#"
    ///     customer = []
    ///     delivery_agent = ["view_dashboard", "manage_deliveries"]
    ///     super_admin = ["all"]
    /// "#).unwrap();
    ///
    /// assert_eq!(grants.capabilities_for(Role::SuperAdmin), Capability::ALL);
    /// assert!(grants.capabilities_for(Role::Admin).is_empty());
    /// ```
    pub fn from_toml(input: &str) -> Result<Self, AuthError> {
        let raw: HashMap<String, Vec<String>> =
            toml::from_str(input).map_err(|e| AuthError::InvalidGrants(e.to_string()))?;

        let mut table = Self::empty();
        for (role_name, cap_names) in &raw {
            let role = Role::parse(role_name)
                .ok_or_else(|| AuthError::UnknownRole(role_name.clone()))?;

            let names: Vec<&str> = cap_names.iter().map(String::as_str).collect();
            let (caps, unknown) = Capability::parse_list(&names);
            if let Some(first) = unknown.first() {
                return Err(AuthError::UnknownCapability((*first).to_string()));
            }

            table = table.grant(role, caps);
        }

        debug!(roles = raw.len(), "loaded role grants from config");
        Ok(table)
    }
}

impl Default for RoleGrants {
    /// The built-in [`standard`](Self::standard) table.
    fn default() -> Self {
        Self::standard()
    }
}

impl RolePolicy for RoleGrants {
    fn capabilities_for(&self, role: Role) -> Capability {
        RoleGrants::capabilities_for(self, role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_customer_is_empty() {
        let grants = RoleGrants::standard();
        assert!(grants.capabilities_for(Role::Customer).is_empty());
    }

    #[test]
    fn standard_delivery_agent_pair() {
        let grants = RoleGrants::standard();
        assert_eq!(
            grants.capabilities_for(Role::DeliveryAgent),
            Capability::VIEW_DASHBOARD | Capability::MANAGE_DELIVERIES
        );
    }

    #[test]
    fn standard_admin_lacks_user_and_settings_admin() {
        let grants = RoleGrants::standard();
        let admin = grants.capabilities_for(Role::Admin);

        assert!(admin.contains(Capability::MANAGE_ORDERS));
        assert!(admin.contains(Capability::VIEW_REPORTS));
        assert!(!admin.contains(Capability::MANAGE_USERS));
        assert!(!admin.contains(Capability::MANAGE_SETTINGS));
    }

    #[test]
    fn standard_super_admin_holds_whole_catalog() {
        let grants = RoleGrants::standard();
        assert_eq!(grants.capabilities_for(Role::SuperAdmin), Capability::ALL);
    }

    #[test]
    fn missing_entry_yields_empty_set() {
        let grants = RoleGrants::empty();
        for role in Role::ALL {
            assert!(grants.capabilities_for(role).is_empty());
        }
    }

    #[test]
    fn grant_replaces_previous_entry() {
        let grants = RoleGrants::empty()
            .grant(Role::Admin, Capability::ALL)
            .grant(Role::Admin, Capability::MANAGE_ORDERS);

        assert_eq!(
            grants.capabilities_for(Role::Admin),
            Capability::MANAGE_ORDERS
        );
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(RoleGrants::default(), RoleGrants::standard());
    }

    #[test]
    fn staff_follows_dashboard_capability() {
        let grants = RoleGrants::standard();
        assert!(!grants.is_staff(Role::Customer));
        assert!(grants.is_staff(Role::DeliveryAgent));
        assert!(grants.is_staff(Role::Admin));
        assert!(grants.is_staff(Role::SuperAdmin));
    }

    #[test]
    fn staff_is_derived_not_hardcoded() {
        // A table that strips the dashboard from admin demotes it from
        // staff with no other change.
        let grants = RoleGrants::empty().grant(Role::Admin, Capability::MANAGE_ORDERS);
        assert!(!grants.is_staff(Role::Admin));
    }

    #[test]
    fn allows_via_policy_trait() {
        let grants = RoleGrants::standard();
        assert!(grants.allows(Role::Admin, Capability::MANAGE_ORDERS));
        assert!(!grants.allows(Role::Customer, Capability::MANAGE_ORDERS));
    }

    #[test]
    fn from_toml_builds_table() {
        let grants = RoleGrants::from_toml(
            r#"
            customer = []
            delivery_agent = ["view_dashboard", "manage_deliveries"]
            admin = ["view_dashboard", "manage_orders"]
            super_admin = ["all"]
            "#,
        )
        .expect("valid grants config");

        assert!(grants.capabilities_for(Role::Customer).is_empty());
        assert_eq!(
            grants.capabilities_for(Role::DeliveryAgent),
            Capability::VIEW_DASHBOARD | Capability::MANAGE_DELIVERIES
        );
        assert_eq!(grants.capabilities_for(Role::SuperAdmin), Capability::ALL);
    }

    #[test]
    fn from_toml_missing_role_fails_closed() {
        let grants = RoleGrants::from_toml("admin = [\"view_dashboard\"]")
            .expect("valid grants config");
        assert!(grants.capabilities_for(Role::Customer).is_empty());
        assert!(grants.capabilities_for(Role::SuperAdmin).is_empty());
    }

    #[test]
    fn from_toml_rejects_unknown_role() {
        let err = RoleGrants::from_toml("owner = [\"view_dashboard\"]")
            .expect_err("unknown role must be rejected");
        assert!(matches!(err, AuthError::UnknownRole(name) if name == "owner"));
    }

    #[test]
    fn from_toml_rejects_unknown_capability() {
        let err = RoleGrants::from_toml("admin = [\"manage_refunds\"]")
            .expect_err("unknown capability must be rejected");
        assert!(matches!(err, AuthError::UnknownCapability(name) if name == "manage_refunds"));
    }

    #[test]
    fn from_toml_rejects_malformed_input() {
        let err = RoleGrants::from_toml("admin = 3").expect_err("wrong value shape");
        assert!(matches!(err, AuthError::InvalidGrants(_)));
    }
}
