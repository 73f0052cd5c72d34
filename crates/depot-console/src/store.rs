//! The current-session cell.
//!
//! [`SessionStore`] is the single writer of the console's session
//! state; [`SessionWatch`] is the read handle everything else holds.
//! The cell is a `tokio::sync::watch` channel: readers always see the
//! latest value synchronously, and can additionally await change
//! notifications without polling.
//!
//! # Ownership
//!
//! Exactly one component owns the store: the piece that talks to the
//! authentication provider. It writes on sign-in, sign-out, and profile
//! refresh, and degrades to [`SessionState::Anonymous`] when an
//! upstream fetch fails. Everything else holds a watch and only reads.

use crate::ConsoleError;
use depot_auth::{Session, SessionState};
use depot_types::Role;
use tokio::sync::watch;
use tracing::info;

/// Single writer of the current [`SessionState`].
///
/// Starts in [`SessionState::Resolving`], which denies everything until
/// the first real state is written.
///
/// # Example
///
/// ```
/// use depot_auth::{AccountId, Role, Session, SessionState};
/// use depot_console::SessionStore;
///
/// let store = SessionStore::new();
/// let watch = store.watch();
/// assert!(watch.current().is_resolving());
///
/// store.sign_in(Session::new(AccountId::new(), Role::Admin));
/// assert_eq!(watch.role(), Some(Role::Admin));
///
/// store.sign_out();
/// assert_eq!(watch.role(), None);
/// ```
#[derive(Debug)]
pub struct SessionStore {
    tx: watch::Sender<SessionState>,
}

impl SessionStore {
    /// Creates a store in the [`SessionState::Resolving`] state.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(SessionState::Resolving);
        Self { tx }
    }

    /// Returns a new read handle.
    ///
    /// Watches are cheap to clone and safe to hand to every gate and
    /// navigation element.
    #[must_use]
    pub fn watch(&self) -> SessionWatch {
        SessionWatch {
            rx: self.tx.subscribe(),
        }
    }

    /// Records a completed sign-in.
    pub fn sign_in(&self, session: Session) {
        let account = session.account();
        let role = session.role();
        let prev = self.tx.send_replace(SessionState::SignedIn(session));
        info!(%account, %role, from = %prev, "session signed in");
    }

    /// Records a sign-out.
    ///
    /// Also the right transition when an upstream profile fetch fails:
    /// no role, deny everything.
    pub fn sign_out(&self) {
        let prev = self.tx.send_replace(SessionState::Anonymous);
        info!(from = %prev, "session signed out");
    }

    /// Writes an arbitrary state.
    ///
    /// Covers transitions the named methods do not, such as moving back
    /// to `Resolving` while a token refresh re-fetches the profile.
    pub fn set(&self, state: SessionState) {
        let prev = self.tx.send_replace(state);
        let now = self.tx.borrow().clone();
        info!(from = %prev, to = %now, "session state set");
    }

    /// Returns a snapshot of the current state.
    #[must_use]
    pub fn current(&self) -> SessionState {
        self.tx.borrow().clone()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Read handle to the current [`SessionState`].
///
/// Reads are synchronous and never block; [`changed`](Self::changed)
/// is the async signal for consumers that react to sign-in/sign-out.
/// Each clone tracks its own notification cursor, so two watchers can
/// await the same transition independently.
#[derive(Debug, Clone)]
pub struct SessionWatch {
    rx: watch::Receiver<SessionState>,
}

impl SessionWatch {
    /// Returns a snapshot of the latest state.
    #[must_use]
    pub fn current(&self) -> SessionState {
        self.rx.borrow().clone()
    }

    /// Returns the latest role, if any.
    ///
    /// This is the accessor the evaluator uses on every query; it
    /// always reflects the most recent write.
    #[must_use]
    pub fn role(&self) -> Option<Role> {
        self.rx.borrow().role()
    }

    /// Waits for the next state change.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::StoreClosed`] once the [`SessionStore`] has been
    /// dropped (application shutdown); no further changes will come.
    pub async fn changed(&mut self) -> Result<(), ConsoleError> {
        self.rx
            .changed()
            .await
            .map_err(|_| ConsoleError::StoreClosed)
    }
}
