//! Core types for the Depot operations console.
//!
//! This crate provides the foundational identity types shared by every
//! layer of the Depot workspace.
//!
//! # Crate Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Foundation Layer                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  depot-types   : AccountId, Role, ErrorCode  ◄── HERE        │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Permission Layer                          │
//! ├─────────────────────────────────────────────────────────────┤
//! │  depot-auth    : Capability, RoleGrants, Session            │
//! └─────────────────────────────────────────────────────────────┘
//!                               ↓
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Console Layer                             │
//! ├─────────────────────────────────────────────────────────────┤
//! │  depot-console : SessionStore, Authorizer, Gate, Screen     │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Identity vs Permission
//!
//! [`Role`] lives here, not in `depot-auth`, because a role is pure
//! classification: *which class of user is this account*. What a role is
//! allowed to do is decided one layer up, by the grants table. Keeping
//! identity below permission avoids a circular dependency and lets any
//! future crate (audit trails, profile sync) name roles without pulling
//! in the permission model.
//!
//! # Example
//!
//! ```
//! use depot_types::{AccountId, Role};
//!
//! let account = AccountId::new();
//! let role = Role::parse("delivery_agent").unwrap();
//!
//! assert_eq!(role, Role::DeliveryAgent);
//! assert_eq!(role.as_str(), "delivery_agent");
//! println!("{account} signed in as {role}");
//! ```

mod error;
mod id;
mod role;

pub use error::{assert_error_code, assert_error_codes, ErrorCode};
pub use id::AccountId;
pub use role::Role;
