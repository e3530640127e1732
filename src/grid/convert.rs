//! Delimited text ⇄ grid conversion
//!
//! `text_to_grid` splits each non-blank line on a delimiter and pads the
//! result to a rectangle. `grid_to_text` joins the non-empty cells of each
//! row back together. The two directions are intentionally asymmetric:
//!
//! - an empty delimiter falls back to `"\n"` when building the grid, but is
//!   used literally when joining it back into text;
//! - empty cells are skipped when joining, so `a,,c` comes back as `a,c`.

use super::model::Grid;

/// Delimiter used by `text_to_grid` when the caller supplies an empty one
pub const FALLBACK_DELIMITER: &str = "\n";

/// Delimiter actually used to split text into cells
pub fn effective_delimiter(delimiter: &str) -> &str {
    if delimiter.is_empty() {
        FALLBACK_DELIMITER
    } else {
        delimiter
    }
}

/// Strip leading and trailing delimiter characters from a line
///
/// Every character of the delimiter is stripped, so a multi-character
/// delimiter acts as a character set here (split still uses the whole token).
fn trim_delimiter<'a>(line: &'a str, delimiter: &str) -> &'a str {
    line.trim_matches(|c: char| delimiter.contains(c))
}

fn split_fields<'a>(line: &'a str, delimiter: &str) -> Vec<&'a str> {
    trim_delimiter(line, delimiter).split(delimiter).collect()
}

/// Widest field count across all non-blank lines
pub fn column_count<S: AsRef<str>>(lines: &[S], delimiter: &str) -> usize {
    let delimiter = effective_delimiter(delimiter);
    lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.is_empty())
        .map(|line| split_fields(line, delimiter).len())
        .max()
        .unwrap_or(0)
}

/// Convert document lines into a rectangular grid
///
/// Blank lines are dropped. Every remaining line becomes one row, padded
/// with empty cells up to the widest line's field count.
pub fn text_to_grid<S: AsRef<str>>(lines: &[S], delimiter: &str) -> Grid {
    let delimiter = effective_delimiter(delimiter);
    let columns = column_count(lines, delimiter);

    let rows: Vec<Vec<String>> = lines
        .iter()
        .map(AsRef::as_ref)
        .filter(|line| !line.is_empty())
        .map(|line| {
            split_fields(line, delimiter)
                .into_iter()
                .map(str::to_string)
                .collect()
        })
        .collect();

    tracing::debug!(
        rows = rows.len(),
        columns,
        delimiter = ?delimiter,
        "Converted text to grid"
    );

    Grid::with_columns(rows, columns)
}

/// Join one row's non-empty cells with the delimiter
fn join_row(cells: &[String], delimiter: &str) -> String {
    let mut line = String::new();
    for cell in cells.iter().filter(|c| !c.is_empty()) {
        line.push_str(delimiter);
        line.push_str(cell);
    }

    if !delimiter.is_empty() {
        if let Some(stripped) = line.strip_prefix(delimiter) {
            return stripped.to_string();
        }
    }
    line
}

/// Convert a grid back into text lines (without terminators)
///
/// Empty cells are not emitted, and an empty delimiter concatenates cells
/// directly. A row with no non-empty cells yields an empty line.
pub fn grid_to_text(grid: &Grid, delimiter: &str) -> Vec<String> {
    grid.rows().map(|row| join_row(row, delimiter)).collect()
}
