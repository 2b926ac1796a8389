//! VAT validation panel component renderer.
//!
//! This module renders the outcome of a VAT lookup: the verdict line, the
//! disclosed registry fields as label/value rows, and the registry's own
//! error detail when the number is not valid.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::VatPanelInfo;

/// Fixed width of the label column in panel rows.
const LABEL_COLUMN_WIDTH: usize = 12;

/// Renders the VAT panel starting at the specified row.
///
/// # Parameters
///
/// * `row` - Starting row position (1-indexed)
/// * `panel` - Verdict, field rows, and optional registry notice
/// * `theme` - Active color theme
///
/// # Returns
///
/// The next available row position
///
/// # Layout
///
/// ```text
/// valid
///
/// country      IT
/// vat number   12345678901
/// company      ACME SRL
/// address      VIA ROMA 1 00100 ROMA RM
/// checked on   2025-03-14
/// ```
///
/// The verdict uses the positive color for `valid` and the error color for
/// `not valid`. Only disclosed fields produce rows.
pub fn render_vat_panel(row: usize, panel: &VatPanelInfo, theme: &Theme) -> usize {
    let verdict_color = if panel.is_valid {
        &theme.colors.valid_fg
    } else {
        &theme.colors.error_fg
    };

    position_cursor(row, 3);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(verdict_color));
    print!("{}", panel.verdict);
    print!("{}", Theme::reset());

    let mut current_row = row + 2;
    for (label, value) in &panel.rows {
        position_cursor(current_row, 3);
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{:<width$} ", label, width = LABEL_COLUMN_WIDTH);
        print!("{}", Theme::fg(&theme.colors.text_normal));
        print!("{value}");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    if let Some(notice) = &panel.notice {
        current_row += 1;
        position_cursor(current_row, 3);
        print!("{}", Theme::dim());
        print!("{}", Theme::fg(&theme.colors.text_dim));
        print!("{notice}");
        print!("{}", Theme::reset());
        current_row += 1;
    }

    current_row
}
