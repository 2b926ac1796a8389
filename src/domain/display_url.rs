//! Display-oriented splitting of result URLs.
//!
//! Search results arrive as raw URL strings. Rows render them as a
//! `domain path` pair instead of the full URL, so this module reduces each
//! string to [`DisplayUrl`]. The split is recomputed at projection time and
//! never stored.

use url::Url;

/// The `{domain, path}` pair a result row displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUrl {
    /// Host with one leading `www.` removed. For input that does not parse
    /// as a URL this carries the raw string instead.
    pub domain: String,
    /// Path plus `?query`, or the empty string for a bare root path.
    pub path: String,
}

impl DisplayUrl {
    /// Splits a raw backend URL into its display pair.
    ///
    /// Total over arbitrary input: anything that does not parse as a URL
    /// falls back to `{ domain: raw, path: "" }` so the raw text still
    /// serves as the row label. A path of exactly `/` with no query string
    /// collapses to the empty string, since root paths carry no information
    /// worth a column.
    #[must_use]
    pub fn from_raw(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(parsed) => {
                let host = parsed.host_str().unwrap_or_default();
                let domain = host.strip_prefix("www.").unwrap_or(host).to_string();
                let path = match parsed.query().filter(|query| !query.is_empty()) {
                    Some(query) => format!("{}?{}", parsed.path(), query),
                    None => parsed.path().to_string(),
                };
                let path = if path == "/" { String::new() } else { path };
                Self { domain, path }
            }
            Err(_) => Self {
                domain: raw.to_string(),
                path: String::new(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn split(raw: &str) -> (String, String) {
        let display = DisplayUrl::from_raw(raw);
        (display.domain, display.path)
    }

    #[test]
    fn strips_leading_www_and_keeps_path() {
        assert_eq!(
            split("https://www.twitter.com/acme"),
            ("twitter.com".to_string(), "/acme".to_string())
        );
    }

    #[test]
    fn suppresses_bare_root_path() {
        assert_eq!(
            split("https://www.example.com/"),
            ("example.com".to_string(), String::new())
        );
        // The parser normalizes a missing path to "/".
        assert_eq!(
            split("https://example.com"),
            ("example.com".to_string(), String::new())
        );
    }

    #[test]
    fn keeps_query_string_in_path() {
        assert_eq!(
            split("https://example.com/search?q=acme&lang=it"),
            ("example.com".to_string(), "/search?q=acme&lang=it".to_string())
        );
    }

    #[test]
    fn keeps_root_path_when_query_present() {
        assert_eq!(
            split("https://example.com/?ref=home"),
            ("example.com".to_string(), "/?ref=home".to_string())
        );
    }

    #[test]
    fn strips_www_only_as_a_leading_label() {
        assert_eq!(
            split("https://www.www.example.com/"),
            ("www.example.com".to_string(), String::new())
        );
        assert_eq!(
            split("https://awww.example.com/"),
            ("awww.example.com".to_string(), String::new())
        );
    }

    #[test]
    fn preserves_subdomains() {
        assert_eq!(
            split("https://it.linkedin.com/company/acme"),
            ("it.linkedin.com".to_string(), "/company/acme".to_string())
        );
    }

    #[test]
    fn unparseable_input_becomes_the_domain_label() {
        assert_eq!(split("not a url"), ("not a url".to_string(), String::new()));
        assert_eq!(
            split("twitter.com/acme"),
            ("twitter.com/acme".to_string(), String::new())
        );
        assert_eq!(split(""), (String::new(), String::new()));
    }

    #[test]
    fn never_panics_on_hostile_input() {
        for raw in ["http://", "https://:443", "☃", "a b c", "mailto:user@example.com"] {
            let _ = DisplayUrl::from_raw(raw);
        }
    }
}
