//! Loading indicator component renderer.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::LoadingInfo;

/// Renders the in-flight request indicator at the specified row.
///
/// A single line with the mode's progress text, e.g. `searching...`.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_loading(row: usize, info: &LoadingInfo, theme: &Theme) -> usize {
    position_cursor(row, 3);
    print!("{}", Theme::fg(&theme.colors.loading_fg));
    print!("{}", info.message);
    print!("{}", Theme::reset());
    row + 1
}
