//! Identity-provider contract driven by the guard.
//!
//! ERROR HANDLING
//! ==============
//! A login attempt is fire-and-forget: the guard dispatches the returned
//! future without awaiting it for recovery. Failures are logged and
//! otherwise dropped, so implementations should carry their own context
//! in [`AuthError`].

use std::rc::Rc;

use futures::future::LocalBoxFuture;
use thiserror::Error;

/// Errors surfaced by the identity layer during a login attempt.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The provider's sign-in redirect could not be started.
    #[error("sign-in redirect failed: {0}")]
    Redirect(String),
    /// A caller-supplied auth-required handler failed.
    #[error("auth-required handler failed: {0}")]
    Handler(String),
}

/// The slice of an identity SDK the guard needs.
///
/// Implementations wrap the actual protocol client. Futures are local
/// because everything runs cooperatively on the browser event loop; the
/// redirect may also navigate away, ending the guard's lifetime before
/// the future resolves.
pub trait AuthClient {
    /// Record the location to restore after a successful login. Called
    /// immediately before the auth-required handler on every attempt.
    fn set_original_uri(&self, uri: &str);

    /// Begin the provider's sign-in redirect. Handler of last resort when
    /// neither the guard instance nor the context supplies one.
    fn sign_in_with_redirect(&self) -> LocalBoxFuture<'static, Result<(), AuthError>>;
}

/// Hook invoked when an unauthenticated user hits a protected route.
///
/// Receives the shared client so it can start whatever flow the
/// application prefers (custom login page, popup, redirect).
pub type OnAuthRequired =
    Rc<dyn Fn(Rc<dyn AuthClient>) -> LocalBoxFuture<'static, Result<(), AuthError>>>;
