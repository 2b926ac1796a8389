//! Shared rendering utilities.
//!
//! Low-level helpers used across the UI components: cursor positioning and
//! the centering math behind the full-width banner lines (header, footer,
//! empty state).

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
///
/// # Parameters
///
/// * `row` - Target row (1-indexed)
/// * `col` - Target column (1-indexed, typically 1 for start of line)
///
/// # Example
///
/// ```rust
/// use zienda::ui::helpers::position_cursor;
///
/// position_cursor(5, 1); // Move to start of row 5
/// print!("Content at row 5");
/// ```
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Computes left and right padding widths that center a text of `text_len`
/// display characters in a line of `cols` columns.
///
/// The two widths always sum to `cols - text_len` so the padded line fills
/// the terminal exactly; when the leftover space is odd, the extra column
/// goes to the right. Text wider than the line gets no padding at all.
///
/// # Example
///
/// ```rust
/// use zienda::ui::helpers::centered_padding;
///
/// assert_eq!(centered_padding(4, 10), (3, 3));
/// assert_eq!(centered_padding(3, 10), (3, 4));
/// ```
#[must_use]
pub fn centered_padding(text_len: usize, cols: usize) -> (usize, usize) {
    let left = cols.saturating_sub(text_len) / 2;
    let right = cols.saturating_sub(left + text_len);
    (left, right)
}
