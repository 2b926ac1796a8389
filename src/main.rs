//! Zellij plugin wrapper and entry point.
//!
//! This module provides the thin integration layer between the Zienda library
//! and the Zellij plugin system. It implements the `ZellijPlugin` trait to
//! handle Zellij events and lifecycle, and it is the only place allowed to
//! call Zellij host functions.
//!
//! # Architecture
//!
//! HTTP requests go through Zellij's web layer, which runs them on the host
//! side and reports back asynchronously:
//!
//! ```text
//! ┌──────────────────────────────┐
//! │      Zellij Main Thread      │
//! │  ┌────────────────────────┐  │
//! │  │     State (plugin)     │  │  ← UI state, event handling
//! │  └────────────────────────┘  │
//! │        │            ▲        │
//! │        │ web_request│        │
//! │        ▼            │        │
//! │  ┌────────────────────────┐  │
//! │  │    Zellij web layer    │  │  ← WebRequestResult events
//! │  └────────────────────────┘  │
//! └──────────────┼───────────────┘
//!                ▼
//!       company search backend
//! ```
//!
//! # Plugin Lifecycle
//!
//! 1. **Load**: Parse config, initialize tracing, create `AppState`
//! 2. **Subscribe**: Register for `Key`, `WebRequestResult`, `Timer`,
//!    `PermissionRequestResult` events
//! 3. **Update**: Translate events, delegate to `handle_event`, execute actions
//! 4. **Render**: Call library render function
//!
//! # Event Mapping
//!
//! Zellij events are translated to library events:
//!
//! - `Key(Enter)` → `Event::Submit`
//! - `Key(Tab)` → `Event::ToggleMode`
//! - `WebRequestResult` → `Event::BackendResponse` (seq and mode recovered
//!   from the request context)
//! - `Timer` → `Event::RequestTimedOut` for the oldest armed deadline
//!
//! # Keybindings
//!
//! - Printable characters: type into the query
//! - `Enter`: submit the query in the current mode
//! - `Tab`: switch between name search and VAT validation
//! - `Alt+n` / `Alt+v`: jump straight to a specific mode
//! - `Up`/`Down` (or `Ctrl+p`/`Ctrl+n`): scroll the result list
//! - `Backspace`: delete the last character
//! - `Ctrl+u`: clear the query
//! - `Esc`: clear query and results; close the pane when already empty
//! - `Ctrl+q`: close the pane unconditionally

#![allow(clippy::multiple_crate_versions)]

#[cfg(target_family = "wasm")]
use std::collections::{BTreeMap, VecDeque};
#[cfg(target_family = "wasm")]
use zellij_tile::prelude::*;

#[cfg(target_family = "wasm")]
use zienda::backend::{BackendEndpoints, CONTEXT_MODE, CONTEXT_SEQ};
#[cfg(target_family = "wasm")]
use zienda::{handle_event, Action, Config, Event, SearchMode};

// Register plugin with Zellij
#[cfg(target_family = "wasm")]
register_plugin!(State);

/// Plugin state wrapper.
///
/// Wraps the library's `AppState` with Zellij-specific concerns like request
/// dispatch and timeout bookkeeping.
#[cfg(target_family = "wasm")]
struct State {
    /// Core application state from the library layer.
    app: zienda::app::AppState,

    /// Resolved endpoint URLs for the configured backend.
    endpoints: BackendEndpoints,

    /// Upper bound on results requested per name search.
    max_results: u32,

    /// Seconds before a pending lookup is written off as timed out.
    timeout_secs: u64,

    /// Sequence numbers with an armed timeout timer, oldest first.
    ///
    /// Timers fire in arming order and carry no payload, so the front of
    /// the queue is always the dispatch the next `Timer` event belongs to.
    pending_timeouts: VecDeque<u64>,
}

#[cfg(target_family = "wasm")]
impl Default for State {
    fn default() -> Self {
        let default_config = Config::default();
        Self {
            app: zienda::initialize(&default_config),
            endpoints: BackendEndpoints::default(),
            max_results: default_config.max_results,
            timeout_secs: default_config.timeout_secs,
            pending_timeouts: VecDeque::new(),
        }
    }
}

#[cfg(target_family = "wasm")]
impl ZellijPlugin for State {
    /// Initializes the plugin on load.
    ///
    /// Called once during plugin startup. Parses configuration, initializes
    /// application state, requests permissions, and subscribes to events.
    ///
    /// # Permissions
    ///
    /// Requests:
    /// - `WebAccess`: issue HTTP requests to the configured backend
    ///
    /// # Subscriptions
    ///
    /// - `Key`: Keyboard input
    /// - `WebRequestResult`: Backend replies
    /// - `Timer`: Request deadlines
    /// - `PermissionRequestResult`: Permission grant outcome
    fn load(&mut self, configuration: BTreeMap<String, String>) {
        let config = Config::from_zellij(&configuration);
        zienda::observability::init_tracing(&config);

        let span = tracing::debug_span!("plugin_load");
        let _guard = span.entered();

        tracing::debug!("plugin loading started");
        tracing::debug!(
            backend_url = %config.backend_url,
            max_results = config.max_results,
            timeout_secs = config.timeout_secs,
            "parsed configuration"
        );
        self.app = zienda::initialize(&config);
        tracing::debug!("app state initialized");

        self.endpoints = match BackendEndpoints::new(&config.backend_url) {
            Ok(endpoints) => endpoints,
            Err(e) => {
                tracing::warn!(
                    backend_url = %config.backend_url,
                    error = %e,
                    "invalid backend_url, falling back to the default"
                );
                BackendEndpoints::default()
            }
        };
        self.max_results = config.max_results;
        self.timeout_secs = config.timeout_secs;

        tracing::debug!("requesting permissions");
        request_permission(&[PermissionType::WebAccess]);

        tracing::debug!("subscribing to events");
        subscribe(&[
            EventType::Key,
            EventType::WebRequestResult,
            EventType::Timer,
            EventType::PermissionRequestResult,
        ]);

        tracing::debug!("plugin load complete - waiting for permissions");
    }

    /// Handles incoming Zellij events.
    ///
    /// Translates Zellij events to library events, delegates to `handle_event`,
    /// and executes resulting actions. Returns `true` if the UI should re-render.
    ///
    /// # Tracing
    ///
    /// Each event is traced with its type for observability.
    ///
    /// # Returns
    ///
    /// - `true` if the plugin UI should re-render
    /// - `false` if the event was ignored or resulted in no state changes
    fn update(&mut self, event: zellij_tile::prelude::Event) -> bool {
        let event_name = Self::get_event_name(&event);
        let span_name = format!("plugin_update::{event_name}");
        let span = tracing::debug_span!("plugin_update_event", otel.name = %span_name, event_type = %event_name);
        let _guard = span.entered();

        tracing::debug!(event = %event_name, "processing event");

        let our_event = match event {
            zellij_tile::prelude::Event::Key(ref key) => match Self::map_key_event(key) {
                Some(event) => event,
                None => return false,
            },
            zellij_tile::prelude::Event::WebRequestResult(status, _headers, body, context) => {
                match Self::map_web_request_result(status, body, &context) {
                    Some(event) => event,
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::Timer(_elapsed) => {
                match self.pending_timeouts.pop_front() {
                    Some(seq) => Event::RequestTimedOut { seq },
                    None => return false,
                }
            }
            zellij_tile::prelude::Event::PermissionRequestResult(status) => {
                Self::map_permission_result(status)
            }
            _ => return false,
        };

        match handle_event(&mut self.app, &our_event) {
            Ok((should_render, actions)) => {
                tracing::debug!(
                    action_count = actions.len(),
                    should_render = should_render,
                    "event handled successfully"
                );
                for a in actions {
                    self.execute_action(&a);
                }
                should_render
            }
            Err(e) => {
                tracing::debug!(error = %e, "error handling event");
                false
            }
        }
    }

    /// Renders the plugin UI.
    ///
    /// Delegates to the library's rendering layer.
    fn render(&mut self, rows: usize, cols: usize) {
        zienda::ui::render(&self.app, rows, cols);
    }
}

#[cfg(target_family = "wasm")]
impl State {
    /// Gets a string name for a Zellij event for logging purposes.
    fn get_event_name(event: &zellij_tile::prelude::Event) -> String {
        match event {
            zellij_tile::prelude::Event::Key(key) => format!("Key({:?})", key.bare_key),
            zellij_tile::prelude::Event::WebRequestResult(status, ..) => {
                format!("WebRequestResult({status})")
            }
            zellij_tile::prelude::Event::Timer(..) => "Timer".to_string(),
            zellij_tile::prelude::Event::PermissionRequestResult(..) => {
                "PermissionRequestResult".to_string()
            }
            _ => "Other".to_string(),
        }
    }

    /// Maps keyboard events to application events.
    fn map_key_event(key: &KeyWithModifier) -> Option<Event> {
        tracing::debug!(bare_key = ?key.bare_key, "key event");

        if key.has_modifiers(&[KeyModifier::Ctrl]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::ScrollDown),
                BareKey::Char('p') => Some(Event::ScrollUp),
                BareKey::Char('u') => Some(Event::ClearQuery),
                BareKey::Char('q') => Some(Event::CloseFocus),
                _ => None,
            };
        }

        if key.has_modifiers(&[KeyModifier::Alt]) {
            return match key.bare_key {
                BareKey::Char('n') => Some(Event::SelectMode(SearchMode::Name)),
                BareKey::Char('v') => Some(Event::SelectMode(SearchMode::Vat)),
                _ => None,
            };
        }

        Some(match key.bare_key {
            BareKey::Down => Event::ScrollDown,
            BareKey::Up => Event::ScrollUp,
            BareKey::Esc => Event::Escape,
            BareKey::Enter => Event::Submit,
            BareKey::Tab => Event::ToggleMode,
            BareKey::Backspace => Event::Backspace,
            BareKey::Char(c) => Event::Char(c),
            _ => return None,
        })
    }

    /// Maps a web request result to a backend response event.
    ///
    /// The sequence number and mode tag placed in the request context at
    /// dispatch come back verbatim with the result. Results missing either
    /// entry did not come from this plugin's dispatch path and are dropped.
    fn map_web_request_result(
        status: u16,
        body: Vec<u8>,
        context: &BTreeMap<String, String>,
    ) -> Option<Event> {
        let Some(seq) = context
            .get(CONTEXT_SEQ)
            .and_then(|raw| raw.parse::<u64>().ok())
        else {
            tracing::debug!("web result without a request_seq context entry, ignoring");
            return None;
        };

        let Some(mode) = context.get(CONTEXT_MODE).and_then(|raw| SearchMode::from_tag(raw))
        else {
            tracing::debug!(seq = seq, "web result without a mode context entry, ignoring");
            return None;
        };

        tracing::debug!(seq = seq, status = status, "web request result event");
        Some(Event::BackendResponse {
            seq,
            mode,
            status,
            body,
        })
    }

    /// Maps the permission grant outcome to an application event.
    fn map_permission_result(status: PermissionStatus) -> Event {
        let granted = match status {
            PermissionStatus::Granted => vec![PermissionType::WebAccess],
            PermissionStatus::Denied => {
                tracing::warn!("web access denied - lookups will fail");
                vec![]
            }
        };
        Event::PermissionsResult { granted }
    }

    /// Executes an action returned from event handling.
    ///
    /// Translates library actions to Zellij API calls.
    ///
    /// # Actions
    ///
    /// - `CloseFocus`: Hide the plugin pane
    /// - `FetchNameResults`: Dispatch a name search request
    /// - `FetchVatRecord`: Dispatch a VAT validation request
    #[tracing::instrument(level = "debug", skip(self))]
    fn execute_action(&mut self, action: &Action) {
        match action {
            Action::CloseFocus => {
                tracing::debug!("closing plugin focus");
                hide_self();
            }
            Action::FetchNameResults { query, seq } => {
                let url = self.endpoints.search_url(query, self.max_results);
                tracing::debug!(url = %url, seq = seq, "dispatching name search");
                self.dispatch(url, *seq, SearchMode::Name);
            }
            Action::FetchVatRecord { vat, seq } => {
                let url = self.endpoints.vat_url(vat);
                tracing::debug!(url = %url, seq = seq, "dispatching vat validation");
                self.dispatch(url, *seq, SearchMode::Vat);
            }
        }
    }

    /// Issues a GET request and arms its timeout timer.
    ///
    /// The request context carries the sequence number and mode tag, which
    /// come back with the `WebRequestResult` and let the handler match the
    /// reply to the dispatch it answers.
    fn dispatch(&mut self, url: url::Url, seq: u64, mode: SearchMode) {
        let mut context = BTreeMap::new();
        context.insert(CONTEXT_SEQ.to_string(), seq.to_string());
        context.insert(CONTEXT_MODE.to_string(), mode.label().to_string());

        web_request(url, HttpVerb::Get, BTreeMap::new(), vec![], context);

        set_timeout(self.timeout_secs as f64);
        self.pending_timeouts.push_back(seq);
    }
}

// The plugin only does anything inside the Zellij WASM runtime.
#[cfg(not(target_family = "wasm"))]
fn main() {}
