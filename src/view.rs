//! View module - renders the model as terminal text
//!
//! Colors come from the active theme and are emitted as 24-bit ANSI escapes.
//! With color disabled the output is plain text, which is what `--print`
//! produces when stdout is not a terminal.


use crate::model::{AppModel, ViewMode};
use crate::syntax::SyntaxHighlights;
use crate::theme::{Color, Theme, TokenStyle};

pub const TAB_WIDTH: usize = 4;

/// Width of the line number gutter in characters (e.g. " 123 ")
pub const LINE_NUMBER_GUTTER_CHARS: usize = 5;

/// Console lines shown when the pane is visible
pub const CONSOLE_LINES: usize = 8;

const RESET: &str = "\x1b[0m";
const REVERSE: &str = "\x1b[7m";

pub fn expand_tabs_for_display(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    let mut visual_col = 0;

    for ch in text.chars() {
        if ch == '\t' {
            let spaces = TAB_WIDTH - (visual_col % TAB_WIDTH);
            result.push_str(&" ".repeat(spaces));
            visual_col += spaces;
        } else {
            result.push(ch);
            visual_col += 1;
        }
    }

    result
}

fn fg(color: Color) -> String {
    format!("\x1b[38;2;{};{};{}m", color.r, color.g, color.b)
}

fn bg(color: Color) -> String {
    format!("\x1b[48;2;{};{};{}m", color.r, color.g, color.b)
}

fn style_escape(style: TokenStyle) -> String {
    format!("{}{}", fg(style.foreground), bg(style.background))
}

/// Options for a render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    /// Width of the status bar and separators in characters
    pub width: usize,
    /// Emit ANSI color escapes
    pub color: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 80,
            color: true,
        }
    }
}

/// Renders an [`AppModel`] into a string
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Render the visible view, the console pane (if shown) and the status bar
    pub fn render(&self, model: &AppModel) -> String {
        let mut out = String::new();
        match model.view_mode {
            ViewMode::Text => self.render_text_area(model, &mut out),
            ViewMode::Grid => self.render_grid(model, &mut out),
        }
        if model.ui.console_visible {
            self.render_console(model, &mut out);
        }
        self.render_status_bar(model, &mut out);
        out
    }

    fn line_start(&self, out: &mut String, background: Color, text: Color) {
        if self.options.color {
            out.push_str(&bg(background));
            out.push_str(&fg(text));
        }
    }

    fn line_end(&self, out: &mut String) {
        if self.options.color {
            out.push_str(RESET);
        }
        out.push('\n');
    }

    fn render_text_area(&self, model: &AppModel, out: &mut String) {
        let theme = &model.theme;
        let doc = &model.document;
        for (idx, line) in doc.lines().iter().enumerate() {
            self.line_start(out, theme.editor.text_background, theme.editor.text_color);
            out.push_str(&format!(
                "{:>width$} ",
                idx + 1,
                width = LINE_NUMBER_GUTTER_CHARS - 1
            ));
            match (&doc.syntax_highlights, self.options.color) {
                (Some(highlights), true) => {
                    render_highlighted_line(out, line, idx, highlights, theme)
                }
                _ => out.push_str(&expand_tabs_for_display(line)),
            }
            self.line_end(out);
        }
    }

    fn render_grid(&self, model: &AppModel, out: &mut String) {
        let theme = &model.theme;
        let table = &model.grid.grid;
        if table.is_empty() {
            self.line_start(out, theme.editor.table_background, theme.editor.text_color);
            out.push_str("(empty table)");
            self.line_end(out);
            return;
        }

        let widths: Vec<usize> = (0..table.column_count())
            .map(|col| {
                (0..table.row_count())
                    .map(|row| table.get(row, col).chars().count())
                    .max()
                    .unwrap_or(0)
                    .max(1)
            })
            .collect();

        let selected = model.grid.selected_cell;
        for (row_idx, row) in table.rows().enumerate() {
            self.line_start(out, theme.editor.table_background, theme.editor.text_color);
            for (col_idx, cell) in row.iter().enumerate() {
                if col_idx > 0 {
                    out.push_str(" | ");
                }
                let is_selected = selected.row == row_idx && selected.col == col_idx;
                if is_selected && self.options.color {
                    out.push_str(REVERSE);
                }
                out.push_str(&format!("{:<width$}", cell, width = widths[col_idx]));
                if is_selected && self.options.color {
                    out.push_str(RESET);
                    out.push_str(&bg(theme.editor.table_background));
                    out.push_str(&fg(theme.editor.text_color));
                }
            }
            self.line_end(out);
        }
    }

    fn render_console(&self, model: &AppModel, out: &mut String) {
        let theme = &model.theme;
        self.line_start(out, theme.editor.editor_background, theme.editor.text_color);
        let title = " console ";
        let rule = self.options.width.saturating_sub(title.len()) / 2;
        out.push_str(&format!("{}{}{}", "-".repeat(rule), title, "-".repeat(rule)));
        self.line_end(out);

        let log = &model.ui.console_log;
        for line in &log[log.len().saturating_sub(CONSOLE_LINES)..] {
            self.line_start(out, theme.editor.editor_background, theme.editor.text_color);
            out.push_str(line);
            self.line_end(out);
        }
    }

    fn render_status_bar(&self, model: &AppModel, out: &mut String) {
        let theme = &model.theme;
        // Status bar uses inverted editor colors
        self.line_start(out, theme.editor.text_color, theme.editor.editor_background);
        out.push_str(&model.ui.status_bar.layout(self.options.width));
        self.line_end(out);
    }
}

/// Write one line with syntax colors, expanding tabs
fn render_highlighted_line(
    out: &mut String,
    line: &str,
    line_idx: usize,
    highlights: &SyntaxHighlights,
    theme: &Theme,
) {
    let plain = format!(
        "{}{}",
        fg(theme.editor.text_color),
        bg(theme.editor.text_background)
    );
    let mut current = None;
    let mut visual_col = 0;

    for (col, ch) in line.chars().enumerate() {
        let category = highlights.category_at(line_idx, col);
        if category != current {
            match category {
                Some(category) => out.push_str(&style_escape(theme.syntax.style(category))),
                None => out.push_str(&plain),
            }
            current = category;
        }

        if ch == '\t' {
            let spaces = TAB_WIDTH - (visual_col % TAB_WIDTH);
            out.push_str(&" ".repeat(spaces));
            visual_col += spaces;
        } else {
            out.push(ch);
            visual_col += 1;
        }
    }

    if current.is_some() {
        out.push_str(&plain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{text_to_grid, GridState};
    use crate::model::{ConfigLocation, Document};

    fn plain() -> Renderer {
        Renderer::new(RenderOptions {
            width: 40,
            color: false,
        })
    }

    fn test_model(text: &str) -> AppModel {
        let mut model = AppModel::with_location(ConfigLocation::default(), None);
        model.document = Document::with_text(text);
        model
    }

    #[test]
    fn test_expand_tabs_for_display() {
        assert_eq!(expand_tabs_for_display("a\tb"), "a   b");
        assert_eq!(expand_tabs_for_display("\tx"), "    x");
    }

    #[test]
    fn test_plain_text_view() {
        let mut model = test_model("alpha\nbeta\n");
        crate::model::sync_status_bar(&mut model);
        let out = plain().render(&model);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "   1 alpha");
        assert_eq!(lines[1], "   2 beta");
        assert!(lines[2].ends_with("Lines: 2"));
    }

    #[test]
    fn test_grid_view_aligns_columns() {
        let mut model = test_model("");
        model.grid = GridState::new(text_to_grid(&["a,bb", "ccc"], ","), ",");
        model.view_mode = ViewMode::Grid;
        let out = plain().render(&model);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines[0], "a   | bb");
        assert_eq!(lines[1], "ccc |   ");
    }

    #[test]
    fn test_empty_grid_placeholder() {
        let mut model = test_model("");
        model.view_mode = ViewMode::Grid;
        assert!(plain().render(&model).starts_with("(empty table)"));
    }

    #[test]
    fn test_console_pane() {
        let mut model = test_model("x\n");
        model.ui.log("hello");
        model.ui.console_visible = true;
        let out = plain().render(&model);
        assert!(out.contains(" console "));
        assert!(out.contains("hello\n"));
    }

    #[test]
    fn test_colored_output_uses_theme() {
        let mut model = test_model("# note\n");
        model.document.language = crate::syntax::LanguageId::Python;
        model.refresh_highlights();
        let out = Renderer::new(RenderOptions::default()).render(&model);
        let comment = fg(model.theme.syntax.comment.foreground);
        assert!(out.contains(&comment));
        assert!(out.contains(RESET));
    }
}
