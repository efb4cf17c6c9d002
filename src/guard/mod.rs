//! The route guard: gating rule, single-flight login trigger, and the
//! `SecureRoute` component.
//!
//! DESIGN
//! ======
//! The decision logic is split out of the component so every piece is a
//! pure function or a tiny cell: [`decision::evaluate`] is the gating
//! rule, [`handler::resolve`] picks the auth-required handler by fixed
//! precedence, [`login::LoginTrigger`] enforces the single-flight
//! invariant, and [`flow::begin_login`] strings them together for one
//! attempt. [`secure_route::SecureRoute`] is thin reactive glue on top.

pub mod decision;
pub mod flow;
pub mod handler;
pub mod login;
pub mod original_uri;
pub mod secure_route;
