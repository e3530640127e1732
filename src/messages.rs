//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use std::path::PathBuf;

/// File menu messages
#[derive(Debug, Clone, PartialEq)]
pub enum FileMsg {
    /// Clear the document and forget its path
    New,
    /// Load a file into the document (empty path = cancelled)
    Open(PathBuf),
    /// Write the document to the given path, or the current one
    Save(Option<PathBuf>),
}

/// Table view messages (Tools menu and cell editing)
#[derive(Debug, Clone, PartialEq)]
pub enum GridMsg {
    /// Switch to the text view without converting
    ShowText,
    /// Switch to the table view without converting
    ShowTable,
    /// Split the document lines on a delimiter and show the table
    ConvertToTable(String),
    /// Join the table rows with a delimiter and show the text
    ConvertToText(String),
    /// Select a cell (clamped to the table)
    SelectCell { row: usize, col: usize },
    /// Replace a cell's value
    SetCell {
        row: usize,
        col: usize,
        value: String,
    },
    /// Load a delimited file straight into the table
    ImportCsv(PathBuf),
    /// Write the table as CSV
    ExportCsv(PathBuf),
}

/// Document editing messages
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentMsg {
    /// Append text at the end of the document
    InsertText(String),
    /// Replace the content of a line
    SetLine { line: usize, text: String },
    /// Remove a line
    DeleteLine(usize),
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Persist config and quit
    Exit,
    /// Show or hide the console pane
    ToggleConsole,
    /// Rescan user and builtin themes
    ReloadThemes,
    /// Report a picked color (hex string)
    PickColor(String),
    /// Switch to a theme by id
    SwitchTheme(String),
    /// Show the about text
    About,
    /// Window resized
    Resize(u32, u32),
    /// Window moved
    Move(i32, i32),
    /// A document write finished
    SaveCompleted {
        path: PathBuf,
        result: Result<(), String>,
    },
    /// A config write finished
    ConfigSaved(Result<(), String>),
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    File(FileMsg),
    Grid(GridMsg),
    Document(DocumentMsg),
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Msg::File(FileMsg::Open(path.into()))
    }

    pub fn convert_to_table(delimiter: impl Into<String>) -> Self {
        Msg::Grid(GridMsg::ConvertToTable(delimiter.into()))
    }

    pub fn convert_to_text(delimiter: impl Into<String>) -> Self {
        Msg::Grid(GridMsg::ConvertToText(delimiter.into()))
    }
}
