//! Original-URI computation for post-login restoration.
//!
//! The original URI is `origin + matched path + query + fragment`: the
//! location the user intended to visit before the redirect to the
//! identity provider. It is recomputed per attempt and handed off to the
//! client; the guard never stores it.

#[cfg(test)]
#[path = "original_uri_test.rs"]
mod original_uri_test;

/// Compose the original URI from its parts.
///
/// `query` and `fragment` carry their own `?`/`#` prefixes (or are
/// empty), matching what the browser's location reports.
pub fn compose(origin: &str, matched_path: &str, query: &str, fragment: &str) -> String {
    format!("{origin}{matched_path}{query}{fragment}")
}

/// The original URI for the current browser location and the matched URL.
///
/// Outside the browser there is no location to preserve; the matched path
/// alone is returned so callers still hand the client something
/// meaningful.
pub fn current(matched_url: &str) -> String {
    #[cfg(feature = "hydrate")]
    {
        let location = match web_sys::window() {
            Some(window) => window.location(),
            None => return matched_url.to_owned(),
        };
        let origin = location.origin().unwrap_or_default();
        let query = location.search().unwrap_or_default();
        let fragment = location.hash().unwrap_or_default();
        compose(&origin, matched_url, &query, &fragment)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        matched_url.to_owned()
    }
}
