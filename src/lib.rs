//! # secure-route
//!
//! Authentication route guard for Leptos applications.
//!
//! [`SecureRoute`](guard::secure_route::SecureRoute) wraps a protected view:
//! it renders its children only while the ambient session is authenticated,
//! and otherwise starts the identity provider's sign-in flow exactly once
//! per unauthenticated window, after recording the originally requested
//! location so it can be restored after login.
//!
//! The identity protocol lives behind the [`auth::client::AuthClient`]
//! trait, session state arrives through a reactive
//! [`auth::context::AuthContext`] provided by
//! [`auth::context::AuthProvider`], and route matching is a small gate
//! behind [`route::matcher::RouteMatcher`]. Declaring routes and talking
//! the provider protocol stay with the application and its identity SDK.
//!
//! ```rust,ignore
//! use std::rc::Rc;
//! use leptos::prelude::*;
//! use leptos_router::{StaticSegment, components::{Route, Router, Routes}};
//! use secure_route::auth::context::AuthProvider;
//! use secure_route::auth::state::AuthState;
//! use secure_route::guard::secure_route::SecureRoute;
//!
//! #[component]
//! fn App() -> impl IntoView {
//!     let state = RwSignal::new(AuthState::default());
//!     let client = Rc::new(MyIdentityClient::new());
//!
//!     view! {
//!         <AuthProvider client=client state=state>
//!             <Router>
//!                 <Routes fallback=|| "Page not found.".into_view()>
//!                     <Route path=StaticSegment("dashboard") view=|| view! {
//!                         <SecureRoute path="/dashboard">
//!                             <DashboardPage/>
//!                         </SecureRoute>
//!                     }/>
//!                 </Routes>
//!             </Router>
//!         </AuthProvider>
//!     }
//! }
//! ```

pub mod auth;
pub mod guard;
pub mod route;
