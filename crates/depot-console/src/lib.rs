//! Console-facing authorization for Depot.
//!
//! This crate wires the permission model from `depot-auth` to a live
//! session: one writer updates the current [`SessionState`], many
//! readers ask "may the current user do this" and get an answer that
//! tracks sign-in, sign-out, and profile refreshes with no stale
//! results.
//!
//! # Pieces
//!
//! | Piece | Role |
//! |-------|------|
//! | [`SessionStore`] | The single writer of the current session |
//! | [`SessionWatch`] | Read handle: synchronous reads, async change signal |
//! | [`Authorizer`] | Live evaluator: [`can`](Authorizer::can), [`can_any`](Authorizer::can_any), [`require`](Authorizer::require) |
//! | [`Gate`] / [`Gated`] | Protected-view wrapper with caller fallback |
//! | [`Screen`] | Which capability each console screen requires |
//!
//! # Data Flow
//!
//! ```text
//! auth provider ──► SessionStore (one writer)
//!                        │ watch
//!        ┌───────────────┼───────────────┐
//!        ▼               ▼               ▼
//!   Authorizer      Authorizer      Authorizer     (many readers)
//!        │               │               │
//!      Gate            Screen::visible  require()
//! ```
//!
//! # Example
//!
//! ```
//! use depot_auth::{Capability, Role, Session, AccountId};
//! use depot_console::{Authorizer, Gate, SessionStore};
//!
//! let store = SessionStore::new();
//! let authz = Authorizer::with_standard_grants(store.watch());
//!
//! // Nothing resolved yet: everything denied.
//! assert!(!authz.can(Capability::VIEW_DASHBOARD));
//!
//! store.sign_in(Session::new(AccountId::new(), Role::Admin));
//! assert!(authz.can(Capability::MANAGE_ORDERS));
//! assert!(!authz.can(Capability::MANAGE_USERS));
//!
//! let gate = Gate::new(Capability::MANAGE_ORDERS);
//! let view = gate.view_or(&authz, || "order list", || "access denied");
//! assert_eq!(view, "order list");
//! ```

pub mod authorizer;
pub mod error;
pub mod gate;
pub mod screen;
pub mod store;

pub use authorizer::Authorizer;
pub use error::ConsoleError;
pub use gate::{Gate, Gated};
pub use screen::Screen;
pub use store::{SessionStore, SessionWatch};

// Re-export the model types consumers always need alongside these
pub use depot_auth::{Capability, RoleGrants, RolePolicy, Session, SessionState};
pub use depot_types::Role;
