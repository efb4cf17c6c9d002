#[cfg(test)]
#[path = "decision_test.rs"]
mod decision_test;

use crate::auth::state::AuthState;

/// Outcome of one evaluation of the gating rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardAction {
    /// The location does not match the guarded route; neither render nor
    /// trigger anything.
    Skip,
    /// The session is authenticated; clear the flight flag and render the
    /// protected children.
    Render,
    /// Unauthenticated, settled, and no attempt in flight; start a login.
    TriggerLogin,
    /// A sign-in is pending or an attempt is already in flight; render
    /// nothing and take no other action.
    Wait,
}

/// The gating rule, checked in order.
///
/// Pure so the host framework can replay it on every state transition:
/// re-running with unchanged inputs yields the same action, and the
/// caller's flight flag keeps repeated `TriggerLogin` windows from
/// producing duplicate attempts.
pub fn evaluate(matched: bool, auth: AuthState, in_flight: bool) -> GuardAction {
    if !matched {
        return GuardAction::Skip;
    }
    if auth.is_authenticated {
        return GuardAction::Render;
    }
    if !auth.is_pending && !in_flight {
        return GuardAction::TriggerLogin;
    }
    GuardAction::Wait
}
