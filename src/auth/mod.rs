//! Authentication contracts and ambient context.
//!
//! DESIGN
//! ======
//! The guard never talks to an identity provider directly. It reads
//! session state from a reactive signal, and drives sign-in through the
//! [`client::AuthClient`] trait. Both are delivered through Leptos
//! context so any guard below an [`context::AuthProvider`] finds them.

pub mod client;
pub mod context;
pub mod state;
