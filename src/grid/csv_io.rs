//! CSV import/export for the table view
//!
//! RFC 4180 compliant reading and writing via the csv crate, with support
//! for quoted fields, escaped quotes, and the common delimiters. This is a
//! separate path from the plain delimiter split in [`super::convert`]: it is
//! used when a `.csv`/`.tsv` file is opened straight into the table, and when
//! the table is exported.

use std::io::Cursor;

use super::model::Grid;

/// Supported CSV delimiters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CsvDelimiter {
    #[default]
    Comma,
    Tab,
    Pipe,
    Semicolon,
}

impl CsvDelimiter {
    /// Get the character for this delimiter
    pub fn char(self) -> char {
        match self {
            CsvDelimiter::Comma => ',',
            CsvDelimiter::Tab => '\t',
            CsvDelimiter::Pipe => '|',
            CsvDelimiter::Semicolon => ';',
        }
    }

    /// Detect delimiter from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "csv" => Some(CsvDelimiter::Comma),
            "tsv" => Some(CsvDelimiter::Tab),
            "psv" => Some(CsvDelimiter::Pipe),
            _ => None,
        }
    }

    /// Map a free-form delimiter string onto a CSV delimiter, if it is one
    pub fn from_str_token(s: &str) -> Option<Self> {
        match s {
            "," => Some(CsvDelimiter::Comma),
            "\t" => Some(CsvDelimiter::Tab),
            "|" => Some(CsvDelimiter::Pipe),
            ";" => Some(CsvDelimiter::Semicolon),
            _ => None,
        }
    }
}

/// Error type for CSV parsing and writing
#[derive(Debug, Clone)]
pub struct ParseError {
    pub message: String,
    pub line: Option<usize>,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "CSV parse error at line {}: {}", line, self.message),
            None => write!(f, "CSV parse error: {}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse CSV content into a grid
pub fn parse_csv(content: &str, delimiter: CsvDelimiter) -> Result<Grid, ParseError> {
    let cursor = Cursor::new(content.as_bytes());

    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter.char() as u8)
        .has_headers(false)
        .flexible(true)
        .from_reader(cursor);

    let mut rows: Vec<Vec<String>> = Vec::new();

    for (line_num, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                rows.push(record.iter().map(|s| s.to_string()).collect());
            }
            Err(e) => {
                return Err(ParseError {
                    message: e.to_string(),
                    line: Some(line_num + 1),
                });
            }
        }
    }

    Ok(Grid::from_rows(rows))
}

/// Serialize a grid as CSV, quoting cells where needed
///
/// Unlike `grid_to_text`, empty cells are preserved as empty fields.
pub fn to_csv(grid: &Grid, delimiter: CsvDelimiter) -> Result<String, ParseError> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter.char() as u8)
        .has_headers(false)
        .from_writer(Vec::new());

    for (row_num, row) in grid.rows().enumerate() {
        writer.write_record(row).map_err(|e| ParseError {
            message: e.to_string(),
            line: Some(row_num + 1),
        })?;
    }

    let bytes = writer.into_inner().map_err(|e| ParseError {
        message: e.to_string(),
        line: None,
    })?;

    String::from_utf8(bytes).map_err(|e| ParseError {
        message: e.to_string(),
        line: None,
    })
}

/// Detect delimiter by analyzing first few lines
pub fn detect_delimiter(content: &str) -> CsvDelimiter {
    let first_lines: String = content.lines().take(5).collect::<Vec<_>>().join("\n");

    let comma_count = first_lines.matches(',').count();
    let tab_count = first_lines.matches('\t').count();
    let pipe_count = first_lines.matches('|').count();
    let semi_count = first_lines.matches(';').count();

    let max = comma_count.max(tab_count).max(pipe_count).max(semi_count);

    if max == 0 {
        return CsvDelimiter::Comma;
    }

    if tab_count == max {
        CsvDelimiter::Tab
    } else if pipe_count == max {
        CsvDelimiter::Pipe
    } else if semi_count == max {
        CsvDelimiter::Semicolon
    } else {
        CsvDelimiter::Comma
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_csv() {
        let data = parse_csv("a,b,c\n1,2,3\n", CsvDelimiter::Comma).unwrap();

        assert_eq!(data.row_count(), 2);
        assert_eq!(data.column_count(), 3);
        assert_eq!(data.get(0, 0), "a");
        assert_eq!(data.get(1, 2), "3");
    }

    #[test]
    fn test_parse_quoted_fields() {
        let content = r#""hello, world","test"
"with ""quotes""","normal"
"#;
        let data = parse_csv(content, CsvDelimiter::Comma).unwrap();

        assert_eq!(data.get(0, 0), "hello, world");
        assert_eq!(data.get(1, 0), "with \"quotes\"");
    }

    #[test]
    fn test_parse_ragged_rows() {
        let data = parse_csv("a,b,c\n1,2\n", CsvDelimiter::Comma).unwrap();

        assert_eq!(data.column_count(), 3);
        assert_eq!(data.get(1, 2), "");
    }

    #[test]
    fn test_parse_empty() {
        let data = parse_csv("", CsvDelimiter::Comma).unwrap();
        assert!(data.is_empty());
    }

    #[test]
    fn test_to_csv_keeps_empty_cells_and_quotes() {
        let grid = Grid::from_rows(vec![
            vec!["a".to_string(), String::new(), "c".to_string()],
            vec!["hello, world".to_string()],
        ]);
        let out = to_csv(&grid, CsvDelimiter::Comma).unwrap();

        assert_eq!(out, "a,,c\n\"hello, world\",,\n");
    }

    #[test]
    fn test_to_csv_semicolon() {
        let grid = Grid::from_rows(vec![vec!["x".to_string(), "y".to_string()]]);
        assert_eq!(to_csv(&grid, CsvDelimiter::Semicolon).unwrap(), "x;y\n");
    }

    #[test]
    fn test_detect_delimiter() {
        assert_eq!(detect_delimiter("a,b,c\n1,2,3\n"), CsvDelimiter::Comma);
        assert_eq!(detect_delimiter("a\tb\tc\n1\t2\t3\n"), CsvDelimiter::Tab);
        assert_eq!(detect_delimiter("a|b|c\n1|2|3\n"), CsvDelimiter::Pipe);
        assert_eq!(detect_delimiter("a;b;c\n1;2;3\n"), CsvDelimiter::Semicolon);
        assert_eq!(detect_delimiter("plain text"), CsvDelimiter::Comma);
    }

    #[test]
    fn test_delimiter_from_extension() {
        assert_eq!(CsvDelimiter::from_extension("CSV"), Some(CsvDelimiter::Comma));
        assert_eq!(CsvDelimiter::from_extension("tsv"), Some(CsvDelimiter::Tab));
        assert_eq!(CsvDelimiter::from_extension("psv"), Some(CsvDelimiter::Pipe));
        assert_eq!(CsvDelimiter::from_extension("txt"), None);
    }

    #[test]
    fn test_delimiter_from_token() {
        assert_eq!(CsvDelimiter::from_str_token(";"), Some(CsvDelimiter::Semicolon));
        assert_eq!(CsvDelimiter::from_str_token("::"), None);
    }
}
