//! Empty state component renderer.
//!
//! This module renders the message shown when a name search succeeds but
//! matches nothing.

use crate::ui::helpers::{centered_padding, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message starting at the specified row.
///
/// Two centered lines: the message in the `empty_state_fg` theme color and
/// the subtitle dimmed below it. An empty result set is a normal outcome,
/// so the styling is informational rather than alarming.
///
/// # Parameters
///
/// * `row` - Starting row position (1-indexed)
/// * `empty` - Empty state information (message and subtitle)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 2)
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) -> usize {
    let (msg_left, msg_right) = centered_padding(empty.message.chars().count(), cols);

    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_left));
    print!("{}", empty.message);
    print!("{}", " ".repeat(msg_right));
    print!("{}", Theme::reset());

    let (sub_left, sub_right) = centered_padding(empty.subtitle.chars().count(), cols);

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_left));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(sub_right));
    print!("{}", Theme::reset());

    row + 2
}
