//! Zienda: a Zellij plugin for looking up companies from the terminal.
//!
//! Zienda is a terminal multiplexer plugin that provides:
//! - Company search by name with categorized URL results
//! - VAT number validation with registry details
//! - A single-pane UI with mode tabs, scrolling result lists, and themes
//! - Stale-response protection for out-of-order HTTP replies
//! - File-based OpenTelemetry tracing for offline debugging

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Zellij Plugin Shim (main.rs)                       │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │  ← Business logic
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!          │                          │
//! ┌───────────────────┐   ┌─────────────────────┐
//! │ UI Layer (ui/)    │   │ Backend (backend/)  │
//! │ - Rendering       │   │ - Endpoint URLs     │
//! │ - Theming         │   │ - Response decoding │
//! │ - Components      │   │ - Status checks     │
//! └───────────────────┘   └─────────────────────┘
//!          │                          │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Platform paths (infrastructure/)                 │
//! │  - Error types (domain/error)                       │
//! │  - Search results, VAT records, URLs (domain/)      │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - OpenTelemetry tracing                            │
//! │  - File-based OTLP export                           │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Application state machine with event/action model
//! - [`backend`]: Backend endpoint URLs and response decoding
//! - [`domain`]: Core domain types (search results, VAT records, errors)
//! - [`infrastructure`]: Platform-specific utilities (paths)
//! - [`ui`]: Terminal rendering with theme support
//! - `observability`: OpenTelemetry tracing (internal)
//!
//! # Configuration
//!
//! The plugin is configured via Zellij's plugin configuration:
//!
//! ```kdl
//! // ~/.config/zellij/layouts/default.kdl
//! pane {
//!     plugin location="file:/path/to/zienda.wasm" {
//!         backend_url "http://127.0.0.1:8000"
//!         max_results "50"
//!         theme "catppuccin-mocha"
//!         trace_level "info"
//!     }
//! }
//! ```
//!
//! Or loaded on-demand with `Ctrl+o` → `Ctrl+w` and entering the configuration.
//!
//! # Lookup Flow
//!
//! 1. **Plugin Load** (`main.rs`):
//!    - Parse configuration from Zellij
//!    - Initialize tracing (optional)
//!    - Create `AppState` with theme
//!    - Request web access permission, subscribe to Zellij events
//!
//! 2. **Input Handling**:
//!    - Raw key events become semantic [`Event`]s
//!    - [`handle_event`] updates state and returns [`Action`]s to execute
//!
//! 3. **Request Dispatch**:
//!    - Fetch actions turn into `web_request` calls carrying a sequence
//!      number and mode tag in the request context
//!    - A timeout timer is armed alongside every request
//!
//! 4. **Response Handling**:
//!    - Web results are matched against the live sequence number
//!    - The body is decoded and the lookup resolves to success or failure
//!
//! 5. **UI Rendering**:
//!    - Compute view model from state
//!    - Render components (header, input box, results, footer)
//!
//! # Examples
//!
//! ## Basic Usage (Library)
//!
//! ```rust
//! use zienda::{handle_event, AppState, Event, Theme};
//!
//! let mut state = AppState::new(Theme::default());
//!
//! // Type a query and submit it
//! for ch in "acme".chars() {
//!     handle_event(&mut state, &Event::Char(ch))?;
//! }
//! let (_needs_render, actions) = handle_event(&mut state, &Event::Submit)?;
//!
//! // `actions` now holds the HTTP fetch for the plugin shim to dispatch
//! assert_eq!(actions.len(), 1);
//! # Ok::<(), zienda::ZiendaError>(())
//! ```
//!
//! ## Building Request URLs
//!
//! ```rust
//! use zienda::backend::BackendEndpoints;
//!
//! let endpoints = BackendEndpoints::new("http://127.0.0.1:8000")?;
//! let url = endpoints.search_url("acme corp", 100);
//! assert_eq!(
//!     url.as_str(),
//!     "http://127.0.0.1:8000/api/search?query=acme+corp&max_results=100"
//! );
//! # Ok::<(), zienda::ZiendaError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Stale Response Guard
//!
//! Every dispatched request gets a fresh sequence number:
//! - The number travels in the request context and comes back with the reply
//! - Only the reply matching the live number may settle the lookup
//! - Superseded replies and late timers are dropped without touching state
//!
//! ## Single Reducer
//!
//! All input funnels through one `handle_event` function:
//! - State transitions live in one place and are easy to audit
//! - Host side effects come back as `Action` values instead of happening
//!   inline, so the core logic runs in native tests without a Zellij host
//!
//! ## Immutable View Models
//!
//! UI rendering uses computed view models:
//! - Clear separation between state and display
//! - Exactly one body view (loading, results, VAT panel, or empty state)
//!   can exist per frame by construction
//!
//! # Performance Characteristics
//!
//! - **Startup Time**: a few ms (theme parse + subscriber install)
//! - **Render Time**: <1ms per frame (direct ANSI output)
//! - **Search Latency**: dominated by the backend round-trip; input stays
//!   live while a lookup is pending
//!
//! # Platform Support
//!
//! - **Target**: `wasm32-wasip1` (Zellij WASM runtime)
//! - **Backend**: any HTTP server implementing the two JSON endpoints
//! - **Terminal**: Any ANSI-capable terminal emulator

pub mod app;
pub mod backend;
pub mod domain;
pub mod infrastructure;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, AppState, Event, RequestPhase, SearchMode, SearchOutcome};
pub use domain::{Result, ZiendaError};
pub use ui::Theme;

use std::collections::BTreeMap;

/// Backend base URL used when none is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8000";

const DEFAULT_MAX_RESULTS: u32 = 100;
const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Plugin configuration parsed from Zellij's configuration system.
///
/// Configuration values are provided via Zellij's KDL layout configuration
/// and passed to the plugin during initialization.
///
/// # Example
///
/// ```kdl
/// plugin location="file:/path/to/zienda.wasm" {
///     backend_url "http://127.0.0.1:8000"
///     max_results "50"
///     timeout_secs "20"
///     theme "catppuccin-mocha"
///     theme_file "/path/to/theme.toml"
///     trace_level "debug"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the company search backend.
    ///
    /// Both lookup endpoints (`/api/search` and `/api/vat/<number>`) are
    /// resolved relative to it. Default: `http://127.0.0.1:8000`
    pub backend_url: String,

    /// Upper bound on results requested per name search.
    ///
    /// Values outside 1-200 are clamped into that range. Default: 100
    pub max_results: u32,

    /// Seconds to wait for a backend reply before the lookup fails.
    ///
    /// Upstream VAT validation can take several seconds, so the default
    /// allows for that. Minimum: 1. Default: 20
    pub timeout_secs: u64,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`, `catppuccin-frappe`,
    /// `catppuccin-macchiato`. Ignored if `theme_file` is set.
    pub theme_name: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme_name`. See [`ui::theme`] for format.
    pub theme_file: Option<String>,

    /// Tracing level for OpenTelemetry spans.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            backend_url: DEFAULT_BACKEND_URL.to_string(),
            max_results: DEFAULT_MAX_RESULTS,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            theme_name: None,
            theme_file: None,
            trace_level: None,
        }
    }
}

impl Config {
    /// Parses configuration from Zellij's configuration map.
    ///
    /// Zellij provides configuration as a `BTreeMap<String, String>` during
    /// plugin initialization. This function extracts and parses typed values
    /// with fallback defaults.
    ///
    /// # Parsing Rules
    ///
    /// - `backend_url`: trimmed string (falls back to the default when blank)
    /// - `max_results`: string → `u32`, clamped to 1-200 (default 100 on
    ///   parse error)
    /// - `timeout_secs`: string → `u64`, floored at 1 (default 20 on parse
    ///   error)
    /// - `theme`, `theme_file`, `trace_level`: optional strings
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use zienda::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("backend_url".to_string(), "http://search.local:9000".to_string());
    /// map.insert("max_results".to_string(), "500".to_string());
    ///
    /// let config = Config::from_zellij(&map);
    /// assert_eq!(config.backend_url, "http://search.local:9000");
    /// assert_eq!(config.max_results, 200);
    /// ```
    #[must_use]
    pub fn from_zellij(config: &BTreeMap<String, String>) -> Self {
        let backend_url = config
            .get("backend_url")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());

        let max_results = config
            .get("max_results")
            .and_then(|s| s.parse::<u32>().ok())
            .map_or(DEFAULT_MAX_RESULTS, |n| n.clamp(1, 200));

        let timeout_secs = config
            .get("timeout_secs")
            .and_then(|s| s.parse::<u64>().ok())
            .map_or(DEFAULT_TIMEOUT_SECS, |n| n.max(1));

        Self {
            backend_url,
            max_results,
            timeout_secs,
            theme_name: config.get("theme").cloned(),
            theme_file: config.get("theme_file").cloned(),
            trace_level: config.get("trace_level").cloned(),
        }
    }
}

/// Initializes the plugin state from configuration.
///
/// Resolves the theme (from file, name, or default, in that order of
/// precedence) and returns a fresh `AppState` in name-search mode with an
/// empty query.
///
/// Theme failures never abort initialization; the plugin falls back to the
/// default theme and logs what went wrong.
///
/// # Example
///
/// ```rust
/// use zienda::{Config, initialize};
///
/// let config = Config {
///     theme_name: Some("catppuccin-latte".to_string()),
///     ..Default::default()
/// };
///
/// let state = initialize(&config);
/// assert!(state.query.is_empty());
/// ```
pub fn initialize(config: &Config) -> AppState {
    tracing::debug!("initializing zienda plugin");

    let theme = config.theme_file.as_ref().map_or_else(
        || {
            config.theme_name.as_ref().map_or_else(
                Theme::default,
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::debug!(theme_name = %theme_name, "failed to load theme, using default");
                        Theme::default()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file.clone()).unwrap_or_else(|e| {
                tracing::debug!(theme_file = %theme_file, error = %e, "failed to load theme from file, using default");
                Theme::default()
            })
        },
    );

    AppState::new(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Config {
        let map = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        Config::from_zellij(&map)
    }

    #[test]
    fn defaults_apply_when_nothing_is_configured() {
        let config = Config::from_zellij(&BTreeMap::new());

        assert_eq!(config.backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(config.max_results, DEFAULT_MAX_RESULTS);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert!(config.theme_name.is_none());
        assert!(config.theme_file.is_none());
        assert!(config.trace_level.is_none());
    }

    #[test]
    fn max_results_is_clamped_into_range() {
        assert_eq!(config_from(&[("max_results", "500")]).max_results, 200);
        assert_eq!(config_from(&[("max_results", "0")]).max_results, 1);
        assert_eq!(config_from(&[("max_results", "50")]).max_results, 50);
    }

    #[test]
    fn timeout_has_a_floor_of_one_second() {
        assert_eq!(config_from(&[("timeout_secs", "0")]).timeout_secs, 1);
        assert_eq!(config_from(&[("timeout_secs", "45")]).timeout_secs, 45);
    }

    #[test]
    fn unparseable_numbers_fall_back_to_defaults() {
        assert_eq!(config_from(&[("max_results", "lots")]).max_results, 100);
        assert_eq!(config_from(&[("timeout_secs", "soon")]).timeout_secs, 20);
    }

    #[test]
    fn blank_backend_url_falls_back_to_default() {
        assert_eq!(config_from(&[("backend_url", "  ")]).backend_url, DEFAULT_BACKEND_URL);
        assert_eq!(
            config_from(&[("backend_url", " http://10.0.0.5:8000 ")]).backend_url,
            "http://10.0.0.5:8000"
        );
    }

    #[test]
    fn initialize_builds_a_fresh_idle_state() {
        let state = initialize(&Config::default());

        assert_eq!(state.mode, SearchMode::Name);
        assert_eq!(state.phase, RequestPhase::Idle);
        assert!(state.query.is_empty());
    }
}
