//! Explicit service configuration.
//!
//! The analysis-service address is resolved once at build time from
//! `MATCHMIND_API_URL` and handed to the client as a constructor argument;
//! no module hides a mutable base URL.

use api::ApiClient;

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Base address of the analysis service.
pub fn api_base_url() -> &'static str {
    option_env!("MATCHMIND_API_URL").unwrap_or(DEFAULT_API_URL)
}

/// A client bound to the configured base address.
pub fn api_client() -> ApiClient {
    ApiClient::new(api_base_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_has_an_explicit_scheme() {
        let url = api_base_url();
        assert!(url.starts_with("http://") || url.starts_with("https://"));
    }
}
