//! Categorized result list component renderer.
//!
//! This module renders the name-search result body: a summary line, then the
//! flattened category/URL lines from the view model, with scroll markers when
//! more lines exist outside the visible window.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{DOMAIN_COLUMN_WIDTH, ResultLine, ResultsInfo};

/// Renders the result body starting at the specified row.
///
/// # Parameters
///
/// * `row` - Starting row position (1-indexed)
/// * `info` - Windowed result lines plus summary and overflow flags
/// * `theme` - Active color theme
///
/// # Returns
///
/// The next available row position
///
/// # Layout
///
/// ```text
/// 12 results for "acme"
/// ↑ earlier results            (only when scrolled down)
/// social media (2)
///   twitter.com                /acme
///   facebook.com               /acmecorp
///
/// news (1)
///   reuters.com                /companies/acme
/// ↓ more results               (only when lines continue below)
/// ```
pub fn render_results(row: usize, info: &ResultsInfo, theme: &Theme) -> usize {
    let mut current_row = row;

    position_cursor(current_row, 3);
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{}", info.summary);
    print!("{}", Theme::reset());
    current_row += 1;

    if info.has_more_above {
        current_row = render_scroll_marker(current_row, "↑ earlier results", theme);
    } else {
        current_row += 1;
    }

    for line in &info.lines {
        current_row = render_result_line(current_row, line, theme);
    }

    if info.has_more_below {
        current_row = render_scroll_marker(current_row, "↓ more results", theme);
    }

    current_row
}

/// Renders one flattened result line.
fn render_result_line(row: usize, line: &ResultLine, theme: &Theme) -> usize {
    match line {
        ResultLine::Category { label, count } => {
            position_cursor(row, 3);
            print!("{}", Theme::bold());
            print!("{}", Theme::fg(&theme.colors.category_fg));
            print!("{label} ({count})");
            print!("{}", Theme::reset());
        }
        ResultLine::Url { domain, path } => {
            position_cursor(row, 3);
            print!("{}", Theme::fg(&theme.colors.text_normal));
            print!("{:<width$} ", domain, width = DOMAIN_COLUMN_WIDTH);
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{path}");
            print!("{}", Theme::reset());
        }
        ResultLine::Blank => {}
    }
    row + 1
}

/// Renders a dimmed scroll marker line.
fn render_scroll_marker(row: usize, text: &str, theme: &Theme) -> usize {
    position_cursor(row, 3);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{text}");
    print!("{}", Theme::reset());
    row + 1
}
