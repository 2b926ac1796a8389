//! Input area component renderers.
//!
//! This module renders the mode tab strip, the bordered query box, and the
//! message line underneath it. The message line carries validation and
//! request failure text and stays blank in every other phase, so errors
//! always appear next to the input that caused them.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{InputInfo, ModeTab};

/// Horizontal margin for the input area (spaces on left and right).
const INPUT_BOX_MARGIN: usize = 5;

/// Renders the mode tab strip at the specified row.
///
/// Each tab shows its mode label. The active tab is drawn bold on the
/// active tab background; inactive tabs are dimmed.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_mode_tabs(row: usize, tabs: &[ModeTab], theme: &Theme) -> usize {
    position_cursor(row, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));

    for tab in tabs {
        if tab.is_active {
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.mode_active_fg));
            print!("{}", Theme::bg(&theme.colors.mode_active_bg));
        } else {
            print!("{}", Theme::fg(&theme.colors.text_dim));
        }
        print!(" {} ", tab.label);
        print!("{}", Theme::reset());
        print!(" ");
    }

    row + 1
}

/// Renders the query input box at the specified row.
///
/// Displays a 3-line bordered box containing the query text, or the dimmed
/// mode placeholder while the query is empty. The box is horizontally
/// centered with margins on both sides.
///
/// # Parameters
///
/// * `row` - Starting row position for the input box (1-indexed)
/// * `input` - Input area information (query, placeholder)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌─────────────┐ [margin]
/// [margin] │ > query     │ [margin]
/// [margin] └─────────────┘ [margin]
/// ```
///
/// The box width is calculated as `cols - (2 * INPUT_BOX_MARGIN)`. The inner
/// content width is `box_width - 2` (accounting for left and right borders).
/// Queries longer than the inner width keep their tail visible, so the end
/// being edited never scrolls out of the box.
pub fn render_input_box(row: usize, input: &InputInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(INPUT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let is_placeholder = input.query.is_empty();
    let full_text = if is_placeholder {
        format!(" > {}", input.placeholder)
    } else {
        format!(" > {}", input.query)
    };
    let chars: Vec<char> = full_text.chars().collect();
    let visible: String = if chars.len() > inner_width {
        chars[chars.len() - inner_width..].iter().collect()
    } else {
        full_text
    };
    let padding = inner_width.saturating_sub(visible.chars().count());

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("│");
    if is_placeholder {
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }
    print!("{visible}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(INPUT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.input_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}

/// Renders the message line under the input box.
///
/// Shows the failure message in the error color when one is live; the line
/// stays blank otherwise.
///
/// # Returns
///
/// The next available row position (row + 1)
pub fn render_message_line(row: usize, error: Option<&str>, theme: &Theme) -> usize {
    if let Some(message) = error {
        position_cursor(row, INPUT_BOX_MARGIN + 2);
        print!("{}", Theme::fg(&theme.colors.error_fg));
        print!("{message}");
        print!("{}", Theme::reset());
    }
    row + 1
}
