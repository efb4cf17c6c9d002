#[cfg(test)]
#[path = "flow_test.rs"]
mod flow_test;

use std::rc::Rc;

use futures::future::LocalBoxFuture;

use crate::auth::client::{AuthClient, AuthError, OnAuthRequired};
use crate::guard::handler;
use crate::guard::login::LoginTrigger;

/// One login attempt: claim the flight slot, hand the original URI to the
/// client, then resolve and invoke the auth-required handler.
///
/// Returns `None` when an attempt is already in flight, otherwise the
/// handler's future for fire-and-forget dispatch. `set_original_uri` is
/// always called before the handler is invoked, so the provider knows
/// where to send the user back regardless of which handler runs.
pub fn begin_login(
    trigger: &LoginTrigger,
    client: &Rc<dyn AuthClient>,
    original_uri: &str,
    override_handler: Option<&OnAuthRequired>,
    context_default: Option<&OnAuthRequired>,
) -> Option<LocalBoxFuture<'static, Result<(), AuthError>>> {
    if !trigger.try_begin() {
        return None;
    }

    client.set_original_uri(original_uri);
    let resolved = handler::resolve(override_handler, context_default);
    Some(resolved.invoke(Rc::clone(client)))
}
