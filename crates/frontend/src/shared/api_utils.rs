//! API utilities for talking to the organization REST service
//!
//! Provides helper functions for constructing API URLs.

use super::config::config;

/// Get the base URL for API requests
///
/// # Returns
/// - Configured endpoint without a trailing slash,
///   e.g. "https://67b9760151192bd378dd7c04.mockapi.io"
pub fn api_base() -> String {
    config().api.endpoint.clone()
}

/// Join a base URL and a path with exactly one slash
///
/// # Example
/// ```ignore
/// let url = join_url(&api_base(), "/organization");
/// ```
pub fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://x", "/organization"), "http://x/organization");
        assert_eq!(join_url("http://x/", "organization"), "http://x/organization");
    }

    #[test]
    fn test_api_base_has_no_trailing_slash() {
        assert!(!api_base().ends_with('/'));
        assert!(api_base().starts_with("http"));
    }
}
