//! Grid data model types

use serde::Serialize;

/// Position of a cell in the grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellPosition {
    pub row: usize,
    pub col: usize,
}

impl CellPosition {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Rectangular table of cell strings
///
/// Every row holds exactly `column_count` cells. Short rows are padded with
/// empty strings on construction and cell edits never change the shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: Vec<Vec<String>>,
    column_count: usize,
}

impl Grid {
    /// Create an empty grid
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a grid from ragged rows, padding every row to the widest one
    pub fn from_rows(rows: Vec<Vec<String>>) -> Self {
        let column_count = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        Self::with_columns(rows, column_count)
    }

    /// Create a grid with an explicit column count
    ///
    /// Rows shorter than `column_count` are padded with empty cells, longer
    /// rows are truncated.
    pub fn with_columns(rows: Vec<Vec<String>>, column_count: usize) -> Self {
        let rows = rows
            .into_iter()
            .map(|mut row| {
                row.resize(column_count, String::new());
                row
            })
            .collect();
        Self { rows, column_count }
    }

    /// Get number of rows
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get number of columns
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Check if grid has no rows
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get cell value at position, or "" when out of range
    pub fn get(&self, row: usize, col: usize) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    /// Set cell value at position
    ///
    /// Returns false (and leaves the grid untouched) when the position is
    /// outside the grid.
    pub fn set(&mut self, row: usize, col: usize, value: &str) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(col)) {
            Some(cell) => {
                *cell = value.to_string();
                true
            }
            None => false,
        }
    }

    /// Get entire row as iterator over cells
    pub fn row_cells(&self, row: usize) -> impl Iterator<Item = &str> {
        self.rows
            .get(row)
            .into_iter()
            .flat_map(|r| r.iter().map(|s| s.as_str()))
    }

    /// Iterate over all rows
    pub fn rows(&self) -> impl Iterator<Item = &[String]> {
        self.rows.iter().map(|r| r.as_slice())
    }

    /// Consume the grid, returning its rows
    pub fn into_rows(self) -> Vec<Vec<String>> {
        self.rows
    }
}

/// State for the table view
#[derive(Debug, Clone, Default)]
pub struct GridState {
    /// Current table contents
    pub grid: Grid,
    /// Currently selected cell
    pub selected_cell: CellPosition,
    /// Delimiter the table was built with (used as the default when converting back)
    pub delimiter: Option<String>,
}

impl GridState {
    /// Create new grid state from converted data
    pub fn new(grid: Grid, delimiter: &str) -> Self {
        Self {
            grid,
            selected_cell: CellPosition::default(),
            delimiter: Some(delimiter.to_string()),
        }
    }

    /// Ensure selected cell is within valid bounds
    pub fn clamp_selection(&mut self) {
        let max_row = self.grid.row_count().saturating_sub(1);
        let max_col = self.grid.column_count().saturating_sub(1);

        self.selected_cell.row = self.selected_cell.row.min(max_row);
        self.selected_cell.col = self.selected_cell.col.min(max_col);
    }

    /// Select a specific cell, clamped to the grid
    pub fn select_cell(&mut self, row: usize, col: usize) {
        self.selected_cell = CellPosition::new(row, col);
        self.clamp_selection();
    }

    /// Value of the selected cell
    pub fn selected_value(&self) -> &str {
        self.grid
            .get(self.selected_cell.row, self.selected_cell.col)
    }

    /// Discard the table
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_rows_pads_to_widest() {
        let grid = Grid::from_rows(vec![row(&["a", "b", "c"]), row(&["1"])]);

        assert_eq!(grid.row_count(), 2);
        assert_eq!(grid.column_count(), 3);
        assert_eq!(grid.row_cells(1).collect::<Vec<_>>(), vec!["1", "", ""]);
    }

    #[test]
    fn test_get_out_of_range_is_empty() {
        let grid = Grid::from_rows(vec![row(&["name", "age"])]);

        assert_eq!(grid.get(0, 1), "age");
        assert_eq!(grid.get(0, 2), "");
        assert_eq!(grid.get(5, 0), "");
    }

    #[test]
    fn test_set_keeps_shape() {
        let mut grid = Grid::from_rows(vec![row(&["a", "b"])]);

        assert!(grid.set(0, 1, "updated"));
        assert_eq!(grid.get(0, 1), "updated");

        assert!(!grid.set(0, 2, "outside"));
        assert!(!grid.set(3, 0, "outside"));
        assert_eq!(grid.column_count(), 2);
        assert_eq!(grid.row_count(), 1);
    }

    #[test]
    fn test_with_columns_truncates_long_rows() {
        let grid = Grid::with_columns(vec![row(&["a", "b", "c"])], 2);
        assert_eq!(grid.row_cells(0).collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_grid_state_clamps_selection() {
        let grid = Grid::from_rows(vec![row(&["a", "b"]), row(&["c", "d"])]);
        let mut state = GridState::new(grid, ",");

        state.select_cell(10, 10);
        assert_eq!(state.selected_cell, CellPosition::new(1, 1));
        assert_eq!(state.selected_value(), "d");
    }

    #[test]
    fn test_grid_state_clear() {
        let grid = Grid::from_rows(vec![row(&["a"])]);
        let mut state = GridState::new(grid, ";");
        state.clear();

        assert!(state.grid.is_empty());
        assert_eq!(state.delimiter, None);
    }
}
