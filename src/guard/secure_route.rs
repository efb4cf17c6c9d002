//! The `SecureRoute` component.
//!
//! Thin reactive glue over the pure guard pieces: a memoized route match,
//! an effect replaying the gating rule on every auth or location
//! transition, and a render closure that shows the protected children
//! only for a matching, authenticated location.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::auth::client::OnAuthRequired;
use crate::auth::context::use_auth;
use crate::guard::decision::{self, GuardAction};
use crate::guard::flow;
use crate::guard::login::LoginTrigger;
use crate::guard::original_uri;
use crate::route::matcher::{RouteMatcher, SegmentMatcher};

/// Route guard for protected views.
///
/// Renders its children only while the ambient session is authenticated
/// and the current location matches `path`. Otherwise, once the session
/// has settled as unauthenticated, it records the originally requested
/// location with the identity client and invokes the auth-required
/// handler: the per-instance `on_auth_required` if given, else the
/// context default, else the client's own redirect. At most one attempt
/// is in flight per instance; the flight flag clears only when an
/// authenticated session is observed.
///
/// The handler's future is dispatched fire-and-forget: a failure is
/// logged, not retried, and does not release the flight flag.
#[component]
pub fn SecureRoute(
    /// Path pattern this guard protects (static and `:param` segments).
    #[prop(into)]
    path: String,
    /// Require the full pathname to match the pattern instead of treating
    /// it as a prefix.
    #[prop(optional)]
    exact: bool,
    /// Per-instance override for the auth-required handler. Fixed at
    /// construction, like the context default.
    #[prop(optional)]
    on_auth_required: Option<OnAuthRequired>,
    /// The protected view.
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let location = use_location();
    let trigger = LoginTrigger::new();
    let matcher = SegmentMatcher::new(&path, exact);

    let pathname = location.pathname;
    let matched = Memo::new(move |_| matcher.match_path(&pathname.get()));

    // Replay the gating rule on every auth or location transition.
    Effect::new({
        let auth = auth.clone();
        let trigger = trigger.clone();
        move || {
            let state = auth.state.get();
            let route_match = matched.get();

            match decision::evaluate(route_match.is_some(), state, trigger.in_flight()) {
                GuardAction::Render => trigger.clear(),
                GuardAction::TriggerLogin => {
                    let Some(route_match) = route_match else {
                        return;
                    };
                    let uri = original_uri::current(&route_match.url);
                    let Some(attempt) = flow::begin_login(
                        &trigger,
                        &auth.client,
                        &uri,
                        on_auth_required.as_ref(),
                        auth.on_auth_required.as_ref(),
                    ) else {
                        return;
                    };
                    leptos::logging::log!("unauthenticated access to {uri}, starting sign-in");
                    leptos::task::spawn_local(async move {
                        if let Err(err) = attempt.await {
                            leptos::logging::error!("sign-in attempt failed: {err}");
                        }
                    });
                }
                GuardAction::Skip | GuardAction::Wait => {}
            }
        }
    });

    let state = auth.state;
    move || (matched.get().is_some() && state.get().is_authenticated).then(|| children())
}
