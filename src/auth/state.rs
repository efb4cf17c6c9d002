#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use serde::{Deserialize, Serialize};

/// Session state delivered by the identity layer.
///
/// Owned and mutated outside the guard; the guard only reads it and
/// re-evaluates its gating rule on every change of the backing signal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthState {
    /// A session is established and usable.
    pub is_authenticated: bool,
    /// A sign-in or token exchange has started but not settled yet.
    pub is_pending: bool,
}

impl AuthState {
    /// An established session.
    pub fn authenticated() -> Self {
        Self {
            is_authenticated: true,
            is_pending: false,
        }
    }

    /// A sign-in still settling.
    pub fn pending() -> Self {
        Self {
            is_authenticated: false,
            is_pending: true,
        }
    }

    /// No session and nothing in progress.
    pub fn unauthenticated() -> Self {
        Self {
            is_authenticated: false,
            is_pending: false,
        }
    }
}
