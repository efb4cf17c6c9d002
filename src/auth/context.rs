//! Ambient auth context: the client, the session signal, and the
//! application-wide auth-required handler.

use std::rc::Rc;

use leptos::prelude::*;

use crate::auth::client::{AuthClient, OnAuthRequired};
use crate::auth::state::AuthState;

/// Everything a guard needs from the identity layer, provided once near
/// the root of the application.
#[derive(Clone)]
pub struct AuthContext {
    /// Shared identity-provider client.
    pub client: Rc<dyn AuthClient>,
    /// Reactive session state, mutated by the identity layer.
    pub state: RwSignal<AuthState>,
    /// Application-wide fallback invoked when an unauthenticated user hits
    /// a protected route and the guard instance has no override.
    pub on_auth_required: Option<OnAuthRequired>,
}

impl AuthContext {
    /// Context with no application-wide handler; guards fall back to the
    /// client's own redirect.
    pub fn new(client: Rc<dyn AuthClient>, state: RwSignal<AuthState>) -> Self {
        Self {
            client,
            state,
            on_auth_required: None,
        }
    }

    /// Attach an application-wide auth-required handler.
    #[must_use]
    pub fn with_on_auth_required(mut self, handler: OnAuthRequired) -> Self {
        self.on_auth_required = Some(handler);
        self
    }
}

/// Provide the auth context to all descendants without the component
/// wrapper. Useful when the identity layer is wired up imperatively.
pub fn provide_auth_context(context: AuthContext) {
    provide_context(context);
}

/// Read the ambient auth context.
///
/// # Panics
///
/// Panics when called outside an [`AuthProvider`] (or
/// [`provide_auth_context`]) subtree, matching the framework's own
/// `expect_context` behavior.
pub fn use_auth() -> AuthContext {
    expect_context::<AuthContext>()
}

/// Context provider wiring the identity client and session signal into
/// the reactive tree.
#[component]
pub fn AuthProvider(
    /// Shared identity-provider client.
    client: Rc<dyn AuthClient>,
    /// Session state signal, created and mutated by the identity layer.
    state: RwSignal<AuthState>,
    /// Optional application-wide auth-required handler.
    #[prop(optional)]
    on_auth_required: Option<OnAuthRequired>,
    children: Children,
) -> impl IntoView {
    provide_context(AuthContext {
        client,
        state,
        on_auth_required,
    });
    children()
}
