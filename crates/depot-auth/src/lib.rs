//! Permission primitives for the Depot operations console.
//!
//! This crate is the single source of truth for *what a role may do*.
//! Every protected view and navigation element in the console asks the
//! same question through the same table.
//!
//! # Permission Model
//!
//! ```text
//! Effective Permission = RoleGrants(current role) ∋ Capability
//! ```
//!
//! | Piece | Type | Answers |
//! |-------|------|---------|
//! | [`Capability`] | Bitflags | Which console features exist to be unlocked |
//! | [`RoleGrants`] | Table | Which capabilities each [`Role`] holds |
//! | [`RolePolicy`] | Trait | The evaluation seam consumers program against |
//! | [`Session`] / [`SessionState`] | Values | Who is signed in, if anyone |
//!
//! # Crate Architecture
//!
//! ```text
//! depot-types  (AccountId, Role, ErrorCode)
//!      ↑
//! depot-auth   (Capability, RoleGrants, RolePolicy, Session)  ◄── THIS CRATE
//!      ↑
//! depot-console (SessionStore, Authorizer, Gate, Screen)
//! ```
//!
//! # Design Principles
//!
//! - **Fail closed** — a role with no table entry, an unknown role
//!   string, or an unresolved session all evaluate to the empty
//!   capability set. Denial is an answer, not an error.
//! - **One table** — staff checks, navigation filtering, and view gates
//!   all go through [`RoleGrants`]; there is no second place where a
//!   role name is compared against a string.
//! - **Trait at the seam** — [`RolePolicy`] is defined here and
//!   implemented by [`RoleGrants`]; `depot-console` evaluates through
//!   the trait so tests can inject bespoke tables.

pub mod capability;
pub mod error;
pub mod grants;
pub mod policy;
pub mod session;

pub use capability::Capability;
pub use error::{AccessDenied, AuthError};
pub use grants::RoleGrants;
pub use policy::RolePolicy;
pub use session::{Session, SessionState};

// Re-export identity types from depot_types for convenience
pub use depot_types::{AccountId, Role};
