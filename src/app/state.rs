//! Application state management and view model computation.
//!
//! This module defines [`AppState`], the central state container for the
//! plugin, along with the pure projection that turns a state snapshot into a
//! renderable view model. It is the single source of truth for all transient
//! UI state.
//!
//! # Architecture
//!
//! `AppState` holds exactly the coordinator data described by the state
//! machine in [`modes`](super::modes): the active mode, the query, the
//! request phase, and the scroll position over results. View models are
//! computed on demand from state snapshots; nothing derived is stored.
//!
//! # State Components
//!
//! - **Mode**: Which lookup is active (name search vs. VAT validation)
//! - **Query**: The input text, owned here and trimmed only at submit
//! - **Dispatched query**: The text captured by the most recent dispatch
//! - **Phase**: Request lifecycle (idle, loading, success, failure)
//! - **Request seq**: Monotonic counter backing the stale-response guard
//! - **Scroll**: Line offset into flattened name results
//!
//! # View Model Computation
//!
//! `compute_viewmodel` transforms state into a renderable representation,
//! splitting URLs for display, flattening categories into lines, windowing
//! them to the pane height, and picking exactly one body panel.

use crate::app::modes::{RequestPhase, SearchMode, SearchOutcome};
use crate::domain::{DisplayUrl, NameSearchResult, VatRecord};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    BodyView, EmptyState, FooterInfo, HeaderInfo, InputInfo, LoadingInfo, ModeTab, ResultLine,
    ResultsInfo, UIViewModel, VatPanelInfo, DOMAIN_COLUMN_WIDTH,
};

/// Safety margin subtracted from the terminal width before truncating paths.
const SAFETY_MARGIN: usize = 4;

/// Central application state container.
///
/// Holds all transient UI state for the coordinator. Mutated exclusively by
/// the event handler in response to user input and backend events. View
/// models are computed on demand from state snapshots.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Active search mode.
    ///
    /// Changed by the mode toggle; a change resets the query and clears any
    /// result or error payload.
    pub mode: SearchMode,

    /// Current query text as typed.
    ///
    /// Accumulated by `Char` events, reduced by `Backspace`, cleared by
    /// `ClearQuery`, `Escape`, and mode changes. Validation happens only at
    /// submit.
    pub query: String,

    /// Query text captured by the most recent dispatch.
    ///
    /// Result panels label themselves with this value, so edits made while a
    /// request is in flight never relabel the results they did not produce.
    pub dispatched_query: String,

    /// Request lifecycle phase. Exactly one variant is live at a time.
    pub phase: RequestPhase,

    /// Last allocated request sequence number.
    ///
    /// Incremented on every dispatch; the phase records which seq is still
    /// authoritative. Never reset while the plugin runs.
    pub request_seq: u64,

    /// Scroll offset into the flattened name-result lines.
    pub scroll_offset: usize,

    /// Color scheme for UI rendering.
    pub theme: Theme,
}

impl AppState {
    /// Creates the initial application state: name mode, empty query, idle.
    #[must_use]
    pub fn new(theme: Theme) -> Self {
        Self {
            mode: SearchMode::Name,
            query: String::new(),
            dispatched_query: String::new(),
            phase: RequestPhase::Idle,
            request_seq: 0,
            scroll_offset: 0,
            theme,
        }
    }

    /// Allocates the next request sequence number.
    ///
    /// Strictly increasing across the plugin lifetime, so a resolution
    /// carrying an older seq can always be recognized as stale.
    pub fn next_request_seq(&mut self) -> u64 {
        self.request_seq += 1;
        self.request_seq
    }

    /// Clears the query and any result or error payload, returning to idle.
    ///
    /// Used by mode changes and by Escape. The request seq is deliberately
    /// not reset; in-flight responses must stay recognizable as stale.
    pub fn reset_lookup(&mut self) {
        self.query.clear();
        self.dispatched_query.clear();
        self.phase = RequestPhase::Idle;
        self.scroll_offset = 0;
    }

    /// Switches to the given mode, clearing lookup state on change.
    ///
    /// Idempotent: selecting the already-active mode touches nothing and
    /// returns `false`.
    pub fn set_mode(&mut self, mode: SearchMode) -> bool {
        if self.mode == mode {
            return false;
        }
        self.mode = mode;
        self.reset_lookup();
        true
    }

    /// Number of flattened result lines, or 0 outside a non-empty name
    /// success. Categories contribute a heading line each, plus a separator
    /// line between categories.
    #[must_use]
    pub fn result_line_count(&self) -> usize {
        match &self.phase {
            RequestPhase::Success(SearchOutcome::Name(result)) if !result.is_empty() => {
                let url_lines: usize = result.categories.iter().map(|group| 1 + group.count()).sum();
                url_lines + result.categories.len().saturating_sub(1)
            }
            _ => 0,
        }
    }

    /// Scrolls the result window down one line. Returns whether the offset
    /// moved.
    pub fn scroll_down(&mut self) -> bool {
        let line_count = self.result_line_count();
        if line_count == 0 || self.scroll_offset + 1 >= line_count {
            return false;
        }
        self.scroll_offset += 1;
        true
    }

    /// Scrolls the result window up one line. Returns whether the offset
    /// moved.
    pub fn scroll_up(&mut self) -> bool {
        if self.scroll_offset == 0 {
            return false;
        }
        self.scroll_offset -= 1;
        true
    }

    /// Computes a renderable UI view model from current state and terminal
    /// dimensions.
    ///
    /// This is a pure projection: given the same state and dimensions it
    /// always produces the same view model, and it never mutates state. The
    /// body is a single [`BodyView`] value, so at most one of the loading
    /// indicator, the result panels, and the empty state can be produced;
    /// the error line exists only in the failure phase.
    ///
    /// # Parameters
    ///
    /// * `rows` - Terminal height in character cells
    /// * `cols` - Terminal width in character cells
    #[must_use]
    pub fn compute_viewmodel(&self, rows: usize, cols: usize) -> UIViewModel {
        let body = match &self.phase {
            RequestPhase::Idle | RequestPhase::Failure { .. } => BodyView::Idle,
            RequestPhase::Loading { .. } => BodyView::Loading(LoadingInfo {
                message: self.mode.loading_message().to_string(),
            }),
            RequestPhase::Success(SearchOutcome::Name(result)) => {
                if result.is_empty() {
                    BodyView::Empty(EmptyState {
                        message: "no results".to_string(),
                        subtitle: "try a different company name".to_string(),
                    })
                } else {
                    BodyView::Results(self.compute_results(result, rows, cols))
                }
            }
            RequestPhase::Success(SearchOutcome::Vat(record)) => {
                BodyView::Vat(Self::compute_vat_panel(record))
            }
        };

        let error = match &self.phase {
            RequestPhase::Failure { message } => Some(message.clone()),
            _ => None,
        };

        UIViewModel {
            header: HeaderInfo {
                title: " zienda · company lookup ".to_string(),
            },
            input: self.compute_input(),
            error,
            body,
            footer: self.compute_footer(),
        }
    }

    /// Flattens, truncates, and windows name results to the pane height.
    fn compute_results(&self, result: &NameSearchResult, rows: usize, cols: usize) -> ResultsInfo {
        let all_lines = Self::flatten_result_lines(result, cols);
        let capacity = Self::body_capacity(rows).max(1);

        let max_offset = all_lines.len().saturating_sub(capacity);
        let offset = self.scroll_offset.min(max_offset);
        let end = (offset + capacity).min(all_lines.len());

        ResultsInfo {
            summary: format!("{} results for \"{}\"", result.total, self.dispatched_query),
            lines: all_lines[offset..end].to_vec(),
            has_more_above: offset > 0,
            has_more_below: end < all_lines.len(),
        }
    }

    /// Flattens categories into display lines: one heading per category, one
    /// line per URL, one separator between categories.
    ///
    /// URL splitting happens here, per URL, per frame; display pairs are
    /// never stored back into state.
    fn flatten_result_lines(result: &NameSearchResult, cols: usize) -> Vec<ResultLine> {
        let max_path_width = cols.saturating_sub(DOMAIN_COLUMN_WIDTH + SAFETY_MARGIN);

        let mut lines = Vec::new();
        for group in &result.categories {
            if !lines.is_empty() {
                lines.push(ResultLine::Blank);
            }
            lines.push(ResultLine::Category {
                label: group.label(),
                count: group.count(),
            });
            for url in &group.urls {
                let display = DisplayUrl::from_raw(url);
                lines.push(ResultLine::Url {
                    domain: display.domain,
                    path: truncate_with_ellipsis(&display.path, max_path_width),
                });
            }
        }
        lines
    }

    /// Builds the VAT panel rows from a validation record.
    ///
    /// Country and number always render; company fields render only for a
    /// positive verdict and only when the registry actually disclosed them.
    /// The registry's error detail renders only for a negative verdict.
    fn compute_vat_panel(record: &VatRecord) -> VatPanelInfo {
        let mut rows = vec![
            ("country".to_string(), record.country_code.clone()),
            ("vat number".to_string(), record.vat_number.clone()),
        ];

        if record.is_valid {
            if let Some(name) = record.display_name() {
                rows.push(("company".to_string(), name.to_string()));
            }
            if let Some(address) = record.display_address() {
                rows.push(("address".to_string(), address.to_string()));
            }
            if let Some(date) = record.request_date.as_deref() {
                rows.push(("checked on".to_string(), date.to_string()));
            }
        }

        VatPanelInfo {
            verdict: if record.is_valid { "valid" } else { "not valid" }.to_string(),
            is_valid: record.is_valid,
            rows,
            notice: if record.is_valid {
                None
            } else {
                record.error_message.clone()
            },
        }
    }

    /// Computes the input area state: both mode tabs plus the current query.
    fn compute_input(&self) -> InputInfo {
        let mode_tabs = [SearchMode::Name, SearchMode::Vat]
            .iter()
            .map(|mode| ModeTab {
                label: mode.label().to_string(),
                is_active: *mode == self.mode,
            })
            .collect();

        InputInfo {
            query: self.query.clone(),
            placeholder: self.mode.placeholder().to_string(),
            mode_tabs,
        }
    }

    /// Computes footer keybinding hints for the current mode and phase.
    fn compute_footer(&self) -> FooterInfo {
        let target = self.mode.other().label();
        let scrollable = self.result_line_count() > 0;

        let keybindings = if scrollable {
            format!("Enter: search  Tab: {target} mode  Up/Down: scroll  Esc: clear")
        } else {
            format!("Enter: search  Tab: {target} mode  Esc: clear")
        };

        FooterInfo { keybindings }
    }

    /// Lines available for the result list after subtracting UI chrome.
    ///
    /// Accounts for the blank top line, header, border, mode tabs, the
    /// three-line input box, the error line, two blank spacers, the summary
    /// line, the scroll markers, and the bottom border plus footer.
    const fn body_capacity(total_rows: usize) -> usize {
        total_rows.saturating_sub(15)
    }
}

/// Truncates display text to `max_width` characters, appending `...`.
///
/// Operates on characters, not bytes, so multi-byte input cannot split.
fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.chars().count() <= max_width {
        return text.to_string();
    }
    let keep = max_width.saturating_sub(3);
    let truncated: String = text.chars().take(keep).collect();
    format!("{truncated}...")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CategoryGroup;

    fn state_with_phase(phase: RequestPhase) -> AppState {
        let mut state = AppState::new(Theme::default());
        state.phase = phase;
        state
    }

    fn name_success(categories: Vec<CategoryGroup>, total: u64) -> RequestPhase {
        RequestPhase::Success(SearchOutcome::Name(NameSearchResult { categories, total }))
    }

    fn social_media_result() -> RequestPhase {
        name_success(
            vec![CategoryGroup {
                key: "social_media".to_string(),
                urls: vec!["https://www.twitter.com/acme".to_string()],
            }],
            1,
        )
    }

    #[test]
    fn idle_state_renders_no_body_and_no_error() {
        let state = AppState::new(Theme::default());
        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.body, BodyView::Idle));
        assert!(vm.error.is_none());
    }

    #[test]
    fn loading_state_renders_only_the_loading_panel() {
        let state = state_with_phase(RequestPhase::Loading { seq: 1 });
        let vm = state.compute_viewmodel(24, 80);
        match vm.body {
            BodyView::Loading(info) => assert_eq!(info.message, "searching..."),
            other => panic!("expected loading body, got {other:?}"),
        }
        assert!(vm.error.is_none());
    }

    #[test]
    fn failure_sets_the_error_line_and_nothing_else() {
        let state = state_with_phase(RequestPhase::Failure {
            message: "error during research".to_string(),
        });
        let vm = state.compute_viewmodel(24, 80);
        assert!(matches!(vm.body, BodyView::Idle));
        assert_eq!(vm.error.as_deref(), Some("error during research"));
    }

    #[test]
    fn categorized_results_render_label_count_and_split_urls() {
        let mut state = state_with_phase(social_media_result());
        state.dispatched_query = "acme".to_string();

        let vm = state.compute_viewmodel(24, 80);
        let results = match vm.body {
            BodyView::Results(results) => results,
            other => panic!("expected results body, got {other:?}"),
        };

        assert_eq!(results.summary, "1 results for \"acme\"");
        assert_eq!(
            results.lines,
            vec![
                ResultLine::Category {
                    label: "social media".to_string(),
                    count: 1,
                },
                ResultLine::Url {
                    domain: "twitter.com".to_string(),
                    path: "/acme".to_string(),
                },
            ]
        );
        assert!(vm.error.is_none());
    }

    #[test]
    fn zero_categories_render_the_empty_state_not_an_error() {
        let state = state_with_phase(name_success(vec![], 0));
        let vm = state.compute_viewmodel(24, 80);
        match vm.body {
            BodyView::Empty(empty) => assert_eq!(empty.message, "no results"),
            other => panic!("expected empty body, got {other:?}"),
        }
        assert!(vm.error.is_none());
    }

    #[test]
    fn valid_vat_panel_skips_undisclosed_rows() {
        let record = VatRecord {
            country_code: "IT".to_string(),
            vat_number: "12345678901".to_string(),
            is_valid: true,
            company_name: Some("Acme Srl".to_string()),
            company_address: None,
            request_date: None,
            error_message: None,
        };
        let state = state_with_phase(RequestPhase::Success(SearchOutcome::Vat(record)));

        let vm = state.compute_viewmodel(24, 80);
        let panel = match vm.body {
            BodyView::Vat(panel) => panel,
            other => panic!("expected vat body, got {other:?}"),
        };

        assert_eq!(panel.verdict, "valid");
        let labels: Vec<&str> = panel.rows.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(labels, ["country", "vat number", "company"]);
        assert!(panel.notice.is_none());
    }

    #[test]
    fn invalid_vat_panel_shows_notice_and_no_company_rows() {
        let record = VatRecord {
            country_code: "IT".to_string(),
            vat_number: "00000000000".to_string(),
            is_valid: false,
            company_name: Some("Acme Srl".to_string()),
            company_address: Some("VIA ROMA 1".to_string()),
            request_date: None,
            error_message: Some("not found".to_string()),
        };
        let state = state_with_phase(RequestPhase::Success(SearchOutcome::Vat(record)));

        let vm = state.compute_viewmodel(24, 80);
        let panel = match vm.body {
            BodyView::Vat(panel) => panel,
            other => panic!("expected vat body, got {other:?}"),
        };

        assert_eq!(panel.verdict, "not valid");
        assert!(!panel.is_valid);
        let labels: Vec<&str> = panel.rows.iter().map(|(label, _)| label.as_str()).collect();
        assert_eq!(labels, ["country", "vat number"]);
        assert_eq!(panel.notice.as_deref(), Some("not found"));
    }

    #[test]
    fn result_window_follows_the_scroll_offset() {
        let urls: Vec<String> = (0..30)
            .map(|i| format!("https://example.com/page-{i}"))
            .collect();
        let mut state = state_with_phase(name_success(
            vec![CategoryGroup {
                key: "web_pages".to_string(),
                urls,
            }],
            30,
        ));

        let vm = state.compute_viewmodel(24, 80);
        let results = match vm.body {
            BodyView::Results(results) => results,
            other => panic!("expected results body, got {other:?}"),
        };
        assert_eq!(results.lines.len(), AppState::body_capacity(24));
        assert!(!results.has_more_above);
        assert!(results.has_more_below);

        state.scroll_offset = 5;
        let vm = state.compute_viewmodel(24, 80);
        match vm.body {
            BodyView::Results(results) => {
                assert!(results.has_more_above);
                assert_eq!(
                    results.lines[0],
                    ResultLine::Url {
                        domain: "example.com".to_string(),
                        path: "/page-4".to_string(),
                    }
                );
            }
            other => panic!("expected results body, got {other:?}"),
        }
    }

    #[test]
    fn set_mode_is_idempotent_for_the_active_mode() {
        let mut state = AppState::new(Theme::default());
        state.query = "acme".to_string();
        state.phase = RequestPhase::Failure {
            message: "error during research".to_string(),
        };

        assert!(!state.set_mode(SearchMode::Name));
        assert_eq!(state.query, "acme");
        assert!(matches!(state.phase, RequestPhase::Failure { .. }));
    }

    #[test]
    fn set_mode_change_clears_query_payload_and_scroll() {
        let mut state = state_with_phase(social_media_result());
        state.query = "acme".to_string();
        state.dispatched_query = "acme".to_string();
        state.scroll_offset = 3;

        assert!(state.set_mode(SearchMode::Vat));
        assert_eq!(state.mode, SearchMode::Vat);
        assert!(state.query.is_empty());
        assert!(state.dispatched_query.is_empty());
        assert_eq!(state.scroll_offset, 0);
        assert!(matches!(state.phase, RequestPhase::Idle));
    }

    #[test]
    fn scrolling_clamps_to_the_result_lines() {
        let mut state = state_with_phase(name_success(
            vec![CategoryGroup {
                key: "web_pages".to_string(),
                urls: vec!["https://example.com/a".to_string()],
            }],
            1,
        ));

        // Two lines total: heading plus one URL.
        assert!(state.scroll_down());
        assert!(!state.scroll_down());
        assert_eq!(state.scroll_offset, 1);
        assert!(state.scroll_up());
        assert!(!state.scroll_up());

        let mut idle = AppState::new(Theme::default());
        assert!(!idle.scroll_down());
        assert!(!idle.scroll_up());
    }

    #[test]
    fn long_paths_truncate_on_character_boundaries() {
        assert_eq!(truncate_with_ellipsis("/short", 10), "/short");
        assert_eq!(truncate_with_ellipsis("/abcdefghijk", 10), "/abcdef...");
        // Multi-byte characters must not split.
        let snowmen = "☃".repeat(12);
        let truncated = truncate_with_ellipsis(&snowmen, 10);
        assert!(truncated.ends_with("..."));
        assert_eq!(truncated.chars().count(), 10);
    }
}
