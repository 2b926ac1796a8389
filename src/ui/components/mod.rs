//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different UI
//! elements, following a component-based architecture. Each component is
//! responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with branding
//! - [`footer`]: Help text and keybinding hints
//! - [`input`]: Mode tabs, bordered query box, and the message line
//! - [`results`]: Categorized URL list with scroll markers
//! - [`vat`]: VAT validation verdict panel
//! - [`loading`]: In-flight request indicator
//! - [`empty`]: Empty state message for searches with no results
//!
//! # Layout
//!
//! A single layout hosts every screen; only the body section below the
//! input area changes with the request phase:
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Mode tabs]
//! [Input box - 3 lines]
//! [Message line]
//! [blank line]
//! [Body: idle | loading | results | vat panel | empty state]
//! [Border]
//! [Footer]
//! ```
//!
//! # Example
//!
//! ```rust
//! use zienda::app::AppState;
//! use zienda::ui::components::render_layout;
//! use zienda::ui::Theme;
//!
//! let state = AppState::new(Theme::default());
//! let vm = state.compute_viewmodel(24, 80);
//! render_layout(&vm, &state.theme, 80, 24);
//! ```

mod empty;
mod footer;
mod header;
mod input;
mod loading;
mod results;
mod vat;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{BodyView, UIViewModel};

use footer::render_footer;
use header::render_header;
use input::{render_input_box, render_message_line, render_mode_tabs};

/// Renders a horizontal border line at the specified row.
///
/// Used to separate UI sections (header/input, body/footer).
///
/// # Parameters
///
/// * `row` - Row position to render the border (1-indexed)
/// * `color` - Hex color for the border
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full plugin layout from a computed view model.
///
/// Chrome (header, tabs, input box, message line, footer) renders the same
/// way in every phase; the body section dispatches on the single live
/// [`BodyView`] variant.
///
/// # Parameters
///
/// * `vm` - View model with all display content
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
///
/// # Line Accounting
///
/// The body starts at row 10: one blank line, header, border, mode tabs,
/// the three input box lines, the message line, and one more blank line
/// come first. The bottom border and footer occupy the last two rows.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_mode_tabs(current_row, &vm.input.mode_tabs, theme);
    current_row = render_input_box(current_row, &vm.input, theme, cols);
    current_row = render_message_line(current_row, vm.error.as_deref(), theme);

    let body_start = current_row + 1;
    render_body(body_start, &vm.body, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}

/// Renders the phase-dependent body section starting at the given row.
fn render_body(row: usize, body: &BodyView, theme: &Theme, cols: usize) {
    match body {
        BodyView::Idle => {}
        BodyView::Loading(info) => {
            loading::render_loading(row, info, theme);
        }
        BodyView::Results(info) => {
            results::render_results(row, info, theme);
        }
        BodyView::Vat(panel) => {
            vat::render_vat_panel(row, panel, theme);
        }
        BodyView::Empty(state) => {
            empty::render_empty_state(row, state, theme, cols);
        }
    }
}
