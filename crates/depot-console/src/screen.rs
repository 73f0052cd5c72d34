//! Console screen registry.
//!
//! Every screen in the console declares the capability it requires,
//! here, next to all the others. The grants table says what a role
//! holds; this registry says what a screen needs. A screen whose
//! capability no role grants is simply unreachable for everyone, which
//! is the safe direction for a half-registered feature.

use crate::{Authorizer, Gate};
use depot_auth::{Capability, RolePolicy};
use serde::{Deserialize, Serialize};

/// The console's screens, in navigation order.
///
/// # Example
///
/// ```
/// use depot_auth::Capability;
/// use depot_console::Screen;
///
/// assert_eq!(Screen::Orders.required(), Capability::MANAGE_ORDERS);
/// assert_eq!(Screen::Orders.slug(), "orders");
/// assert_eq!(Screen::ALL.len(), 9);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Screen {
    /// Operations overview: today's orders, pending deliveries.
    Dashboard,
    /// Order list and detail.
    Orders,
    /// Product catalog.
    Products,
    /// Stock levels and adjustments.
    Inventory,
    /// Payment records.
    Payments,
    /// Delivery queue and assignment.
    Deliveries,
    /// Account and role administration.
    Users,
    /// Sales and operations reports.
    Reports,
    /// Store-wide configuration.
    Settings,
}

impl Screen {
    /// All screens, in navigation order.
    pub const ALL: [Screen; 9] = [
        Screen::Dashboard,
        Screen::Orders,
        Screen::Products,
        Screen::Inventory,
        Screen::Payments,
        Screen::Deliveries,
        Screen::Users,
        Screen::Reports,
        Screen::Settings,
    ];

    /// The capability this screen requires.
    #[must_use]
    pub fn required(&self) -> Capability {
        match self {
            Self::Dashboard => Capability::VIEW_DASHBOARD,
            Self::Orders => Capability::MANAGE_ORDERS,
            Self::Products => Capability::MANAGE_PRODUCTS,
            Self::Inventory => Capability::MANAGE_INVENTORY,
            Self::Payments => Capability::MANAGE_PAYMENTS,
            Self::Deliveries => Capability::MANAGE_DELIVERIES,
            Self::Users => Capability::MANAGE_USERS,
            Self::Reports => Capability::VIEW_REPORTS,
            Self::Settings => Capability::MANAGE_SETTINGS,
        }
    }

    /// Human-readable navigation title.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Orders => "Orders",
            Self::Products => "Products",
            Self::Inventory => "Inventory",
            Self::Payments => "Payments",
            Self::Deliveries => "Deliveries",
            Self::Users => "Users",
            Self::Reports => "Reports",
            Self::Settings => "Settings",
        }
    }

    /// URL path segment.
    #[must_use]
    pub fn slug(&self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Orders => "orders",
            Self::Products => "products",
            Self::Inventory => "inventory",
            Self::Payments => "payments",
            Self::Deliveries => "deliveries",
            Self::Users => "users",
            Self::Reports => "reports",
            Self::Settings => "settings",
        }
    }

    /// Builds the gate protecting this screen.
    ///
    /// # Example
    ///
    /// ```
    /// use depot_auth::{AccountId, Role, Session};
    /// use depot_console::{Authorizer, Screen, SessionStore};
    ///
    /// let store = SessionStore::new();
    /// let authz = Authorizer::with_standard_grants(store.watch());
    /// store.sign_in(Session::new(AccountId::new(), Role::Admin));
    ///
    /// let page = Screen::Users.gate().view_or(&authz, || "user admin", || "denied");
    /// assert_eq!(page, "denied");
    /// ```
    #[must_use]
    pub fn gate(&self) -> Gate {
        Gate::new(self.required())
    }

    /// Returns the screens the current session may open, in
    /// navigation order. This is what the sidebar renders.
    #[must_use]
    pub fn visible<P: RolePolicy>(authz: &Authorizer<P>) -> Vec<Screen> {
        Self::ALL
            .iter()
            .copied()
            .filter(|screen| authz.can(screen.required()))
            .collect()
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SessionStore;
    use depot_auth::{AccountId, Session};
    use depot_types::Role;

    fn signed_in(role: Role) -> (SessionStore, Authorizer) {
        let store = SessionStore::new();
        let authz = Authorizer::with_standard_grants(store.watch());
        store.sign_in(Session::new(AccountId::new(), role));
        (store, authz)
    }

    #[test]
    fn every_screen_has_a_distinct_capability() {
        let mut seen = Capability::empty();
        for screen in Screen::ALL {
            let required = screen.required();
            assert!(!seen.intersects(required), "{screen} shares a capability");
            seen |= required;
        }
    }

    #[test]
    fn every_catalog_capability_has_a_screen() {
        let mut covered = Capability::empty();
        for screen in Screen::ALL {
            covered |= screen.required();
        }
        assert_eq!(covered, Capability::ALL);
    }

    #[test]
    fn customer_sees_no_screens() {
        let (_store, authz) = signed_in(Role::Customer);
        assert!(Screen::visible(&authz).is_empty());
    }

    #[test]
    fn delivery_agent_sees_dashboard_and_deliveries() {
        let (_store, authz) = signed_in(Role::DeliveryAgent);
        assert_eq!(
            Screen::visible(&authz),
            vec![Screen::Dashboard, Screen::Deliveries]
        );
    }

    #[test]
    fn admin_sees_everything_but_users_and_settings() {
        let (_store, authz) = signed_in(Role::Admin);
        let visible = Screen::visible(&authz);

        assert!(visible.contains(&Screen::Orders));
        assert!(visible.contains(&Screen::Reports));
        assert!(!visible.contains(&Screen::Users));
        assert!(!visible.contains(&Screen::Settings));
    }

    #[test]
    fn super_admin_sees_all_screens() {
        let (_store, authz) = signed_in(Role::SuperAdmin);
        assert_eq!(Screen::visible(&authz), Screen::ALL.to_vec());
    }

    #[test]
    fn nothing_visible_before_sign_in() {
        let store = SessionStore::new();
        let authz = Authorizer::with_standard_grants(store.watch());
        assert!(Screen::visible(&authz).is_empty());
    }

    #[test]
    fn visible_preserves_navigation_order() {
        let (_store, authz) = signed_in(Role::Admin);
        let visible = Screen::visible(&authz);

        let indices: Vec<usize> = visible
            .iter()
            .map(|s| Screen::ALL.iter().position(|x| x == s).unwrap())
            .collect();
        let mut sorted = indices.clone();
        sorted.sort_unstable();
        assert_eq!(indices, sorted);
    }

    #[test]
    fn gate_matches_required_capability() {
        for screen in Screen::ALL {
            assert_eq!(screen.gate().required(), screen.required());
        }
    }

    #[test]
    fn slug_and_display_agree() {
        for screen in Screen::ALL {
            assert_eq!(format!("{screen}"), screen.slug());
        }
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Screen::Deliveries).expect("serialize");
        assert_eq!(json, "\"deliveries\"");
    }
}
