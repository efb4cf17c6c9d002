#[cfg(test)]
#[path = "handler_test.rs"]
mod handler_test;

use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::auth::client::{AuthClient, AuthError, OnAuthRequired};

/// The auth-required handler a login attempt will invoke.
///
/// Resolution is a fixed precedence, decided once per attempt: the
/// per-instance override, then the context default, then the client's own
/// redirect.
pub enum ResolvedHandler {
    /// Override supplied on the guard instance.
    Override(OnAuthRequired),
    /// Application-wide default from the auth context.
    ContextDefault(OnAuthRequired),
    /// The client's built-in sign-in redirect.
    BuiltinRedirect,
}

/// Pick the handler by fixed precedence.
pub fn resolve(
    override_handler: Option<&OnAuthRequired>,
    context_default: Option<&OnAuthRequired>,
) -> ResolvedHandler {
    if let Some(handler) = override_handler {
        return ResolvedHandler::Override(Rc::clone(handler));
    }
    if let Some(handler) = context_default {
        return ResolvedHandler::ContextDefault(Rc::clone(handler));
    }
    ResolvedHandler::BuiltinRedirect
}

impl ResolvedHandler {
    /// Start the chosen flow against the shared client, returning its
    /// future unawaited.
    pub fn invoke(self, client: Rc<dyn AuthClient>) -> LocalBoxFuture<'static, Result<(), AuthError>> {
        match self {
            Self::Override(handler) | Self::ContextDefault(handler) => handler(client),
            Self::BuiltinRedirect => client.sign_in_with_redirect(),
        }
    }
}
