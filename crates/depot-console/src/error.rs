//! Console-layer errors.

use depot_types::ErrorCode;
use thiserror::Error;

/// Errors from the console's session plumbing.
///
/// Note what is *not* here: "capability not granted" is never an error
/// on this layer. Gates and `can`-style queries answer `false` and the
/// caller renders a fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConsoleError {
    /// The [`SessionStore`](crate::SessionStore) was dropped; no
    /// further session changes will be observed.
    #[error("session store closed")]
    StoreClosed,
}

impl ErrorCode for ConsoleError {
    fn code(&self) -> &'static str {
        match self {
            Self::StoreClosed => "CONSOLE_STORE_CLOSED",
        }
    }

    fn is_recoverable(&self) -> bool {
        // Only happens at application shutdown.
        false
    }
}
