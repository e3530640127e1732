//! Table view of the document
//!
//! The table is an alternate representation of the document text, built by
//! splitting each line on a user-supplied delimiter.
//!
//! ```text
//! AppModel
//! ├── Document (text lines)
//! ├── GridState
//! │   ├── Grid (rectangular rows of cells)
//! │   └── selected CellPosition
//! └── ViewMode
//!     ├── Text
//!     └── Grid
//! ```
//!
//! Conversions in both directions live in [`convert`]; CSV import/export of
//! the grid lives in [`csv_io`].

pub mod convert;
pub mod csv_io;
mod model;

pub use convert::{
    column_count, effective_delimiter, grid_to_text, text_to_grid, FALLBACK_DELIMITER,
};
pub use csv_io::{detect_delimiter, parse_csv, to_csv, CsvDelimiter, ParseError};
pub use model::{CellPosition, Grid, GridState};
