//! Table view handlers (show, convert, cell editing, CSV)

use std::path::{Path, PathBuf};

use crate::commands::Cmd;
use crate::grid::{self, CsvDelimiter, GridState};
use crate::messages::GridMsg;
use crate::model::{AppModel, Document, ViewMode};

/// Handle grid messages
pub fn update_grid(model: &mut AppModel, msg: GridMsg) -> Option<Cmd> {
    match msg {
        GridMsg::ShowText => {
            model.view_mode = ViewMode::Text;
            Some(Cmd::Redraw)
        }

        GridMsg::ShowTable => {
            model.view_mode = ViewMode::Grid;
            Some(Cmd::Redraw)
        }

        GridMsg::ConvertToTable(delimiter) => {
            let lines = model.document.lines();
            let table = grid::text_to_grid(&lines, &delimiter);
            model.ui.set_status(format!(
                "Converted to table: {} rows, {} columns",
                table.row_count(),
                table.column_count()
            ));
            model.grid = GridState::new(table, &delimiter);
            model.view_mode = ViewMode::Grid;
            Some(Cmd::Redraw)
        }

        GridMsg::ConvertToText(delimiter) => {
            let lines = grid::grid_to_text(&model.grid.grid, &delimiter);
            model.document.set_lines(&lines);
            model.grid.clear();
            model.view_mode = ViewMode::Text;
            model
                .ui
                .set_status(format!("Converted to text: {} lines", lines.len()));
            Some(Cmd::Redraw)
        }

        GridMsg::SelectCell { row, col } => {
            model.grid.select_cell(row, col);
            Some(Cmd::Redraw)
        }

        GridMsg::SetCell { row, col, value } => {
            if model.grid.grid.set(row, col, &value) {
                model.grid.select_cell(row, col);
            } else {
                model.ui.set_status(format!("No cell at row {}, column {}", row, col));
            }
            Some(Cmd::Redraw)
        }

        GridMsg::ImportCsv(path) => import_csv(model, path),

        GridMsg::ExportCsv(path) => export_csv(model, path),
    }
}

/// CSV delimiter for a path, falling back to `fallback`
fn delimiter_for(path: &Path, fallback: CsvDelimiter) -> CsvDelimiter {
    path.extension()
        .and_then(|e| e.to_str())
        .and_then(CsvDelimiter::from_extension)
        .unwrap_or(fallback)
}

fn import_csv(model: &mut AppModel, path: PathBuf) -> Option<Cmd> {
    if path.as_os_str().is_empty() {
        return None;
    }

    let doc = match Document::from_file(path.clone()) {
        Ok(doc) => doc,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::warn!("Import skipped, {} does not exist", path.display());
            return None;
        }
        Err(e) => {
            model
                .ui
                .set_status(format!("Error opening {}: {}", path.display(), e));
            return Some(Cmd::Redraw);
        }
    };

    let content = doc.text();
    let delimiter = delimiter_for(&path, grid::detect_delimiter(&content));
    match grid::parse_csv(&content, delimiter) {
        Ok(table) => {
            tracing::info!(
                "Imported {} as a {}x{} table",
                path.display(),
                table.row_count(),
                table.column_count()
            );
            model.document = doc;
            model.grid = GridState::new(table, &delimiter.char().to_string());
            model.view_mode = ViewMode::Grid;
            model.ui.set_status(format!("Loaded: {}", path.display()));
        }
        Err(e) => {
            tracing::warn!("Failed to import {}: {}", path.display(), e);
            model.ui.set_status(format!("Error: {}", e));
        }
    }
    Some(Cmd::Redraw)
}

fn export_csv(model: &mut AppModel, path: PathBuf) -> Option<Cmd> {
    if path.as_os_str().is_empty() {
        return None;
    }

    let fallback = model
        .grid
        .delimiter
        .as_deref()
        .and_then(CsvDelimiter::from_str_token)
        .unwrap_or_default();
    let delimiter = delimiter_for(&path, fallback);

    match grid::to_csv(&model.grid.grid, delimiter) {
        Ok(content) => {
            model.ui.is_saving = true;
            model.ui.set_status("Saving...");
            Some(Cmd::WriteFile { path, content })
        }
        Err(e) => {
            model.ui.set_status(format!("Error: {}", e));
            Some(Cmd::Redraw)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ConfigLocation;

    fn model_with_text(text: &str) -> AppModel {
        let mut model = AppModel::with_location(ConfigLocation::default(), None);
        model.document = Document::with_text(text);
        model
    }

    #[test]
    fn test_convert_to_table_switches_view() {
        let mut model = model_with_text("a;b;c\nx;y\n");
        update_grid(&mut model, GridMsg::ConvertToTable(";".into()));

        assert_eq!(model.view_mode, ViewMode::Grid);
        assert_eq!(model.grid.grid.row_count(), 2);
        assert_eq!(model.grid.grid.column_count(), 3);
        assert_eq!(model.grid.grid.get(1, 2), "");
        assert_eq!(model.grid.delimiter.as_deref(), Some(";"));
    }

    #[test]
    fn test_convert_to_text_replaces_document() {
        let mut model = model_with_text("a,,c\n");
        update_grid(&mut model, GridMsg::ConvertToTable(",".into()));
        update_grid(&mut model, GridMsg::ConvertToText(";".into()));

        assert_eq!(model.view_mode, ViewMode::Text);
        assert_eq!(model.document.text(), "a;c\n");
        assert!(model.grid.grid.is_empty());
    }

    #[test]
    fn test_show_does_not_convert() {
        let mut model = model_with_text("a,b\n");
        update_grid(&mut model, GridMsg::ShowTable);
        assert_eq!(model.view_mode, ViewMode::Grid);
        assert!(model.grid.grid.is_empty());

        update_grid(&mut model, GridMsg::ShowText);
        assert_eq!(model.view_mode, ViewMode::Text);
        assert_eq!(model.document.text(), "a,b\n");
    }

    #[test]
    fn test_set_cell_keeps_shape() {
        let mut model = model_with_text("a,b\nc\n");
        update_grid(&mut model, GridMsg::ConvertToTable(",".into()));
        update_grid(
            &mut model,
            GridMsg::SetCell {
                row: 1,
                col: 1,
                value: "d".into(),
            },
        );
        assert_eq!(model.grid.grid.get(1, 1), "d");
        assert_eq!(model.grid.selected_cell.row, 1);

        update_grid(
            &mut model,
            GridMsg::SetCell {
                row: 5,
                col: 0,
                value: "x".into(),
            },
        );
        assert_eq!(model.grid.grid.row_count(), 2);
        assert!(model.ui.status_message.starts_with("No cell"));
    }

    #[test]
    fn test_export_uses_conversion_delimiter() {
        let mut model = model_with_text("a|b\n");
        update_grid(&mut model, GridMsg::ConvertToTable("|".into()));
        let cmd = update_grid(&mut model, GridMsg::ExportCsv(PathBuf::from("out.txt")));
        assert_eq!(
            cmd,
            Some(Cmd::WriteFile {
                path: PathBuf::from("out.txt"),
                content: "a|b\n".to_string(),
            })
        );
    }

    #[test]
    fn test_delimiter_for_extension() {
        assert_eq!(
            delimiter_for(Path::new("x.tsv"), CsvDelimiter::Comma),
            CsvDelimiter::Tab
        );
        assert_eq!(
            delimiter_for(Path::new("x.txt"), CsvDelimiter::Pipe),
            CsvDelimiter::Pipe
        );
    }
}
