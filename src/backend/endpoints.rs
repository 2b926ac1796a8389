//! Typed construction of backend request URLs.
//!
//! All query and path encoding goes through the `url` crate, so user input
//! can never break out of the component it is placed in.

use crate::domain::{Result, ZiendaError};
use url::Url;

/// Builder for the two backend endpoint URLs.
///
/// The base URL is parsed and validated once at plugin load; building an
/// individual request URL afterwards cannot fail.
#[derive(Debug, Clone)]
pub struct BackendEndpoints {
    base: Url,
}

impl BackendEndpoints {
    /// Parses and validates the backend base URL.
    ///
    /// Accepts bases with or without a trailing slash, and with a path
    /// prefix (`https://gateway.example.com/lookup`).
    ///
    /// # Errors
    ///
    /// Returns [`ZiendaError::Config`] when the value does not parse as an
    /// absolute URL, or cannot carry path segments (e.g. `mailto:`).
    pub fn new(base: &str) -> Result<Self> {
        let parsed = Url::parse(base).map_err(|error| {
            ZiendaError::Config(format!("invalid backend_url '{base}': {error}"))
        })?;
        if parsed.cannot_be_a_base() {
            return Err(ZiendaError::Config(format!(
                "backend_url '{base}' cannot carry a path"
            )));
        }
        Ok(Self { base: parsed })
    }

    /// URL for the company-name search endpoint.
    ///
    /// The query text lands percent-encoded in the `query` parameter; the
    /// result cap travels as `max_results`.
    #[must_use]
    pub fn search_url(&self, query: &str, max_results: u32) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["api", "search"]);
        }
        url.query_pairs_mut()
            .append_pair("query", query)
            .append_pair("max_results", &max_results.to_string());
        url
    }

    /// URL for the VAT validation endpoint.
    ///
    /// The identifier travels as a path segment; a `/` inside it encodes to
    /// `%2F` instead of splitting the route.
    #[must_use]
    pub fn vat_url(&self, vat: &str) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(["api", "vat", vat]);
        }
        url
    }
}

impl Default for BackendEndpoints {
    /// Endpoints for the default local backend.
    fn default() -> Self {
        Self::new(crate::DEFAULT_BACKEND_URL)
            .expect("Default backend URL should always parse")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_url_percent_encodes_the_query() {
        let endpoints = BackendEndpoints::new("http://127.0.0.1:8000").unwrap();
        let url = endpoints.search_url("acme corp & sons", 100);
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/api/search?query=acme+corp+%26+sons&max_results=100"
        );
    }

    #[test]
    fn trailing_slash_bases_do_not_double_up() {
        let endpoints = BackendEndpoints::new("http://localhost:8000/").unwrap();
        let url = endpoints.search_url("acme", 50);
        assert_eq!(
            url.as_str(),
            "http://localhost:8000/api/search?query=acme&max_results=50"
        );
    }

    #[test]
    fn base_path_prefixes_are_preserved() {
        let endpoints = BackendEndpoints::new("https://lookup.example.com/internal").unwrap();
        let url = endpoints.vat_url("IT12345678901");
        assert_eq!(
            url.as_str(),
            "https://lookup.example.com/internal/api/vat/IT12345678901"
        );
    }

    #[test]
    fn vat_identifiers_cannot_escape_their_path_segment() {
        let endpoints = BackendEndpoints::new("http://127.0.0.1:8000").unwrap();
        let url = endpoints.vat_url("IT/123");
        assert_eq!(url.as_str(), "http://127.0.0.1:8000/api/vat/IT%2F123");
    }

    #[test]
    fn unparseable_or_baseless_urls_are_config_errors() {
        assert!(matches!(
            BackendEndpoints::new("not a url"),
            Err(ZiendaError::Config(_))
        ));
        assert!(matches!(
            BackendEndpoints::new("mailto:ops@example.com"),
            Err(ZiendaError::Config(_))
        ));
    }
}
