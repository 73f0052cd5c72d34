//! The capability catalog.
//!
//! A capability names one console feature that can be unlocked for a
//! role. The catalog is closed and defined at build time: screens
//! declare which capability they require, the grants table declares
//! which capabilities each role holds, and both sides must name an entry
//! here. A feature registered on only one side is inaccessible to
//! everyone.
//!
//! # Example
//!
//! ```
//! use depot_auth::Capability;
//!
//! // The full catalog
//! let all = Capability::ALL;
//! assert!(all.contains(Capability::MANAGE_USERS));
//!
//! // A delivery agent's slice of it
//! let agent = Capability::VIEW_DASHBOARD | Capability::MANAGE_DELIVERIES;
//! assert!(agent.contains(Capability::VIEW_DASHBOARD));
//! assert!(!agent.contains(Capability::MANAGE_ORDERS));
//! ```

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

bitflags! {
    /// Console features a role can be granted.
    ///
    /// Canonical names are lowercase snake_case, matching what the
    /// backend stores and what grants config files use.
    ///
    /// | Capability | Unlocks |
    /// |------------|---------|
    /// | [`VIEW_DASHBOARD`](Self::VIEW_DASHBOARD) | The console shell and overview screen |
    /// | [`MANAGE_ORDERS`](Self::MANAGE_ORDERS) | Order list, detail, status changes |
    /// | [`MANAGE_PRODUCTS`](Self::MANAGE_PRODUCTS) | Product catalog editing |
    /// | [`MANAGE_INVENTORY`](Self::MANAGE_INVENTORY) | Stock levels and adjustments |
    /// | [`MANAGE_PAYMENTS`](Self::MANAGE_PAYMENTS) | Payment records and reconciliation views |
    /// | [`MANAGE_DELIVERIES`](Self::MANAGE_DELIVERIES) | Delivery queue and assignment |
    /// | [`MANAGE_USERS`](Self::MANAGE_USERS) | Account and role administration |
    /// | [`VIEW_REPORTS`](Self::VIEW_REPORTS) | Sales and operations reports |
    /// | [`MANAGE_SETTINGS`](Self::MANAGE_SETTINGS) | Store-wide configuration |
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct Capability: u16 {
        /// Enter the console and see the overview screen.
        const VIEW_DASHBOARD    = 0b0_0000_0001;
        /// Work the order list: status changes, cancellations.
        const MANAGE_ORDERS     = 0b0_0000_0010;
        /// Edit the product catalog.
        const MANAGE_PRODUCTS   = 0b0_0000_0100;
        /// Adjust stock levels.
        const MANAGE_INVENTORY  = 0b0_0000_1000;
        /// View and reconcile payment records.
        const MANAGE_PAYMENTS   = 0b0_0001_0000;
        /// Work the delivery queue.
        const MANAGE_DELIVERIES = 0b0_0010_0000;
        /// Administer accounts and roles.
        const MANAGE_USERS      = 0b0_0100_0000;
        /// View sales and operations reports.
        const VIEW_REPORTS      = 0b0_1000_0000;
        /// Change store-wide configuration.
        const MANAGE_SETTINGS   = 0b1_0000_0000;
    }
}

impl Capability {
    /// Every capability in the catalog.
    pub const ALL: Self = Self::VIEW_DASHBOARD
        .union(Self::MANAGE_ORDERS)
        .union(Self::MANAGE_PRODUCTS)
        .union(Self::MANAGE_INVENTORY)
        .union(Self::MANAGE_PAYMENTS)
        .union(Self::MANAGE_DELIVERIES)
        .union(Self::MANAGE_USERS)
        .union(Self::VIEW_REPORTS)
        .union(Self::MANAGE_SETTINGS);

    /// Returns the canonical names of the set capabilities.
    ///
    /// # Example
    ///
    /// ```
    /// use depot_auth::Capability;
    ///
    /// let caps = Capability::VIEW_DASHBOARD | Capability::MANAGE_ORDERS;
    /// let names = caps.names();
    /// assert!(names.contains(&"view_dashboard"));
    /// assert!(names.contains(&"manage_orders"));
    /// ```
    #[must_use]
    pub fn names(self) -> Vec<&'static str> {
        let mut names = Vec::new();
        if self.contains(Self::VIEW_DASHBOARD) {
            names.push("view_dashboard");
        }
        if self.contains(Self::MANAGE_ORDERS) {
            names.push("manage_orders");
        }
        if self.contains(Self::MANAGE_PRODUCTS) {
            names.push("manage_products");
        }
        if self.contains(Self::MANAGE_INVENTORY) {
            names.push("manage_inventory");
        }
        if self.contains(Self::MANAGE_PAYMENTS) {
            names.push("manage_payments");
        }
        if self.contains(Self::MANAGE_DELIVERIES) {
            names.push("manage_deliveries");
        }
        if self.contains(Self::MANAGE_USERS) {
            names.push("manage_users");
        }
        if self.contains(Self::VIEW_REPORTS) {
            names.push("view_reports");
        }
        if self.contains(Self::MANAGE_SETTINGS) {
            names.push("manage_settings");
        }
        names
    }

    /// Parses a capability name (case-insensitive).
    ///
    /// Accepts the canonical names plus `"all"` for the whole catalog.
    ///
    /// # Example
    ///
    /// ```
    /// use depot_auth::Capability;
    ///
    /// assert_eq!(Capability::parse("manage_orders"), Some(Capability::MANAGE_ORDERS));
    /// assert_eq!(Capability::parse("MANAGE_ORDERS"), Some(Capability::MANAGE_ORDERS));
    /// assert_eq!(Capability::parse("all"), Some(Capability::ALL));
    /// assert_eq!(Capability::parse("manage_refunds"), None);
    /// ```
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "view_dashboard" => Some(Self::VIEW_DASHBOARD),
            "manage_orders" => Some(Self::MANAGE_ORDERS),
            "manage_products" => Some(Self::MANAGE_PRODUCTS),
            "manage_inventory" => Some(Self::MANAGE_INVENTORY),
            "manage_payments" => Some(Self::MANAGE_PAYMENTS),
            "manage_deliveries" => Some(Self::MANAGE_DELIVERIES),
            "manage_users" => Some(Self::MANAGE_USERS),
            "view_reports" => Some(Self::VIEW_REPORTS),
            "manage_settings" => Some(Self::MANAGE_SETTINGS),
            "all" => Some(Self::ALL),
            _ => None,
        }
    }

    /// Parses a list of capability names into a combined set.
    ///
    /// Returns the combined capabilities and the names that did not
    /// parse. Callers decide how to treat unknown names; the grants
    /// config loader rejects them outright.
    ///
    /// # Example
    ///
    /// ```
    /// use depot_auth::Capability;
    ///
    /// let (caps, unknown) = Capability::parse_list(&["view_dashboard", "manage_orders"]);
    /// assert_eq!(caps, Capability::VIEW_DASHBOARD | Capability::MANAGE_ORDERS);
    /// assert!(unknown.is_empty());
    ///
    /// let (caps, unknown) = Capability::parse_list(&["view_dashboard", "bad"]);
    /// assert_eq!(caps, Capability::VIEW_DASHBOARD);
    /// assert_eq!(unknown, vec!["bad"]);
    /// ```
    #[must_use]
    pub fn parse_list<'a>(names: &[&'a str]) -> (Self, Vec<&'a str>) {
        let mut caps = Self::empty();
        let mut unknown = Vec::new();
        for name in names {
            match Self::parse(name) {
                Some(c) => caps |= c,
                None => unknown.push(*name),
            }
        }
        (caps, unknown)
    }
}

impl std::fmt::Display for Capability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names = self.names();
        if names.is_empty() {
            write!(f, "(none)")
        } else {
            write!(f, "{}", names.join(" | "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_contains_every_capability() {
        assert!(Capability::ALL.contains(Capability::VIEW_DASHBOARD));
        assert!(Capability::ALL.contains(Capability::MANAGE_ORDERS));
        assert!(Capability::ALL.contains(Capability::MANAGE_PRODUCTS));
        assert!(Capability::ALL.contains(Capability::MANAGE_INVENTORY));
        assert!(Capability::ALL.contains(Capability::MANAGE_PAYMENTS));
        assert!(Capability::ALL.contains(Capability::MANAGE_DELIVERIES));
        assert!(Capability::ALL.contains(Capability::MANAGE_USERS));
        assert!(Capability::ALL.contains(Capability::VIEW_REPORTS));
        assert!(Capability::ALL.contains(Capability::MANAGE_SETTINGS));
    }

    #[test]
    fn catalog_has_nine_entries() {
        assert_eq!(Capability::ALL.names().len(), 9);
    }

    #[test]
    fn empty_capability() {
        let empty = Capability::empty();
        assert!(!empty.contains(Capability::VIEW_DASHBOARD));
        assert_eq!(empty.names(), Vec::<&str>::new());
        assert_eq!(empty.to_string(), "(none)");
    }

    #[test]
    fn names_match_set_flags() {
        let caps = Capability::MANAGE_ORDERS | Capability::VIEW_REPORTS;
        assert_eq!(caps.names(), vec!["manage_orders", "view_reports"]);
    }

    #[test]
    fn parse_roundtrips_every_name() {
        for name in Capability::ALL.names() {
            let parsed = Capability::parse(name).expect("catalog name should parse");
            assert_eq!(parsed.names(), vec![name]);
        }
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(
            Capability::parse("Manage_Inventory"),
            Some(Capability::MANAGE_INVENTORY)
        );
        assert_eq!(
            Capability::parse("VIEW_DASHBOARD"),
            Some(Capability::VIEW_DASHBOARD)
        );
    }

    #[test]
    fn parse_unknown_returns_none() {
        assert_eq!(Capability::parse("manage_refunds"), None);
        assert_eq!(Capability::parse(""), None);
    }

    #[test]
    fn parse_list_combines() {
        let (caps, unknown) = Capability::parse_list(&["manage_orders", "manage_payments"]);
        assert_eq!(caps, Capability::MANAGE_ORDERS | Capability::MANAGE_PAYMENTS);
        assert!(unknown.is_empty());
    }

    #[test]
    fn parse_list_reports_unknown() {
        let (caps, unknown) = Capability::parse_list(&["manage_orders", "bad", "nope"]);
        assert_eq!(caps, Capability::MANAGE_ORDERS);
        assert_eq!(unknown, vec!["bad", "nope"]);
    }

    #[test]
    fn display_formatting() {
        assert_eq!(Capability::MANAGE_USERS.to_string(), "manage_users");
        assert_eq!(
            (Capability::VIEW_DASHBOARD | Capability::MANAGE_ORDERS).to_string(),
            "view_dashboard | manage_orders"
        );
    }

    #[test]
    fn serde_roundtrip() {
        let caps = Capability::VIEW_DASHBOARD | Capability::MANAGE_DELIVERIES;
        let json = serde_json::to_string(&caps).expect("serialize");
        let parsed: Capability = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(parsed, caps);
    }

    #[test]
    fn bitwise_operations() {
        let a = Capability::MANAGE_ORDERS | Capability::MANAGE_PRODUCTS;
        let b = Capability::MANAGE_PRODUCTS | Capability::MANAGE_INVENTORY;

        assert_eq!(
            a | b,
            Capability::MANAGE_ORDERS | Capability::MANAGE_PRODUCTS | Capability::MANAGE_INVENTORY
        );
        assert_eq!(a & b, Capability::MANAGE_PRODUCTS);
        assert_eq!(a - b, Capability::MANAGE_ORDERS);
    }
}
