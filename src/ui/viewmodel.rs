//! View model types representing renderable UI state.
//!
//! This module defines immutable view models computed from application state,
//! following the MVVM pattern. View models are optimized for rendering and
//! contain pre-computed display information like split URLs and scroll
//! windows.
//!
//! # Architecture
//!
//! View models are created via `AppState::compute_viewmodel()` and consumed by
//! the renderer. They contain no business logic, only display-ready data. The
//! body is a single [`BodyView`] value, so the loading indicator, the result
//! panels, and the empty state can never be on screen at the same time; the
//! error line is separate because it accompanies the input prompt.
//!
//! # Example
//!
//! ```
//! use zienda::ui::viewmodel::{BodyView, FooterInfo, HeaderInfo, InputInfo, ModeTab, UIViewModel};
//!
//! let vm = UIViewModel {
//!     header: HeaderInfo { title: "zienda".to_string() },
//!     input: InputInfo {
//!         query: "acme".to_string(),
//!         placeholder: "type a company name".to_string(),
//!         mode_tabs: vec![ModeTab { label: "name".to_string(), is_active: true }],
//!     },
//!     error: None,
//!     body: BodyView::Idle,
//!     footer: FooterInfo { keybindings: "Enter: search".to_string() },
//! };
//! assert!(vm.error.is_none());
//! ```

/// Complete UI view model for rendering.
///
/// Contains all display information needed to render the plugin UI: header,
/// the always-visible input area, an optional error line, exactly one body
/// panel, and the footer.
#[derive(Debug, Clone)]
pub struct UIViewModel {
    /// Header information (title, branding).
    pub header: HeaderInfo,

    /// Input area state (mode tabs, query, placeholder).
    pub input: InputInfo,

    /// Error line under the input box. Set only while the coordinator is in
    /// its failure state; never set alongside a result panel.
    pub error: Option<String>,

    /// The single body panel to render below the input area.
    pub body: BodyView,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,
}

/// Header display information.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Input area display information.
///
/// The input box is visible in every state so the user can always correct
/// and resubmit.
#[derive(Debug, Clone)]
pub struct InputInfo {
    /// Current query text.
    pub query: String,

    /// Dim hint shown inside the box while the query is empty.
    pub placeholder: String,

    /// Mode tabs rendered above the box, in order.
    pub mode_tabs: Vec<ModeTab>,
}

/// One selectable search-mode tab.
#[derive(Debug, Clone)]
pub struct ModeTab {
    /// Tab label, e.g. "name".
    pub label: String,

    /// Whether this tab's mode is the active one.
    pub is_active: bool,
}

/// The one body panel derived from the coordinator state.
///
/// Being an enum is what enforces the projection rule: at most one of the
/// loading indicator, the name-results panel, the VAT panel, and the
/// empty-state message exists per frame.
#[derive(Debug, Clone)]
pub enum BodyView {
    /// Nothing below the input area (initial state and failure state).
    Idle,

    /// A request is in flight.
    Loading(LoadingInfo),

    /// Name-search results, already split, grouped, and windowed.
    Results(ResultsInfo),

    /// VAT validation record.
    Vat(VatPanelInfo),

    /// A name search completed with zero categories.
    Empty(EmptyState),
}

/// Loading indicator display information.
#[derive(Debug, Clone)]
pub struct LoadingInfo {
    /// Mode-specific progress text, e.g. "searching...".
    pub message: String,
}

/// Name-results panel: a scroll window over flattened result lines.
#[derive(Debug, Clone)]
pub struct ResultsInfo {
    /// Summary line, e.g. `12 results for "acme"`.
    pub summary: String,

    /// Visible slice of the flattened category/URL line list.
    pub lines: Vec<ResultLine>,

    /// Whether lines are scrolled off above the window.
    pub has_more_above: bool,

    /// Whether lines remain below the window.
    pub has_more_below: bool,
}

/// Fixed width of the domain column in result rows.
///
/// The renderer pads domains to this width and the projection budgets its
/// path truncation around it, which is what keeps the path column aligned
/// across rows.
pub const DOMAIN_COLUMN_WIDTH: usize = 28;

/// One line of the flattened results list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultLine {
    /// Category heading with its derived count.
    Category { label: String, count: usize },

    /// One URL, already split for display.
    Url { domain: String, path: String },

    /// Separator between categories.
    Blank,
}

/// VAT validation panel display information.
#[derive(Debug, Clone)]
pub struct VatPanelInfo {
    /// Verdict badge text: "valid" or "not valid".
    pub verdict: String,

    /// Whether the verdict is positive (selects the badge color).
    pub is_valid: bool,

    /// Label/value rows to render, already filtered for display.
    pub rows: Vec<(String, String)>,

    /// Registry detail for a negative verdict, e.g. "not found".
    pub notice: Option<String>,
}

/// Empty state message display information.
///
/// Shown when a name search succeeds with zero categories. Distinct from an
/// error.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "no results").
    pub message: String,

    /// Secondary explanatory text.
    pub subtitle: String,
}

/// Footer display information.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "Enter: search  Tab: switch mode").
    pub keybindings: String,
}
