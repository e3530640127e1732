//! Command-line argument parsing for the editor
//!
//! Supports:
//! - Opening a file as text, or a delimited file straight into the table
//! - Converting to a table at startup
//! - One-shot output (`--print`, `--json`) for scripting

use clap::Parser;
use std::path::PathBuf;

use crate::messages::{AppMsg, GridMsg, Msg};

/// A text editor that turns delimited text into tables
#[derive(Parser, Debug)]
#[command(
    name = "gridpad",
    version,
    about = "A text editor that turns delimited text into tables"
)]
pub struct CliArgs {
    /// File to open
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// Start with an empty document (ignore PATH)
    #[arg(short = 'n', long)]
    pub new: bool,

    /// Switch to theme ID at startup (e.g. "monokai")
    #[arg(long, value_name = "ID")]
    pub theme: Option<String>,

    /// Convert the document to a table using DELIM (`\t` and `\n` escapes allowed)
    #[arg(long, value_name = "DELIM", allow_hyphen_values = true)]
    pub table: Option<String>,

    /// Open PATH as CSV/TSV straight into the table
    #[arg(long)]
    pub csv: bool,

    /// Render once to stdout and exit
    #[arg(long)]
    pub print: bool,

    /// Print the table as JSON and exit
    #[arg(long, conflicts_with = "print")]
    pub json: bool,

    /// Read config and themes from DIR instead of the user config directory
    #[arg(long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,
}

/// The startup mode determines what to open
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StartupMode {
    /// Start with an empty buffer
    Empty,
    /// Open a file as text
    File(PathBuf),
    /// Open a delimited file as a table
    CsvTable(PathBuf),
}

/// What the process does after startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Read commands from stdin until exit
    Interactive,
    /// Render once and exit
    Print,
    /// Dump the table as JSON and exit
    Json,
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct StartupConfig {
    /// What to open
    pub mode: StartupMode,
    /// Theme to switch to at startup
    pub theme: Option<String>,
    /// Delimiter to convert the document with at startup
    pub table_delimiter: Option<String>,
    pub output: OutputMode,
    /// Explicit config directory
    pub config_dir: Option<PathBuf>,
}

/// Turn the `\t`, `\n` and `\\` escapes typed by a user into characters
pub fn unescape_delimiter(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '\\' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}

impl CliArgs {
    /// Convert parsed CLI args into startup configuration
    pub fn into_config(self) -> Result<StartupConfig, String> {
        let path = if self.new { None } else { self.path };

        let mode = match (path, self.csv) {
            (Some(path), true) => StartupMode::CsvTable(path),
            (Some(path), false) => StartupMode::File(path),
            (None, true) => return Err("--csv needs a PATH to open".to_string()),
            (None, false) => StartupMode::Empty,
        };

        if self.csv && self.table.is_some() {
            return Err("--csv and --table cannot be combined".to_string());
        }

        let output = if self.json {
            if !self.csv && self.table.is_none() {
                return Err("--json needs a table (use --table or --csv)".to_string());
            }
            OutputMode::Json
        } else if self.print {
            OutputMode::Print
        } else {
            OutputMode::Interactive
        };

        Ok(StartupConfig {
            mode,
            theme: self.theme,
            table_delimiter: self.table.as_deref().map(unescape_delimiter),
            output,
            config_dir: self.config_dir,
        })
    }
}

impl StartupConfig {
    /// File to load when the model is created
    pub fn file_path(&self) -> Option<PathBuf> {
        match &self.mode {
            StartupMode::File(path) => Some(path.clone()),
            StartupMode::Empty | StartupMode::CsvTable(_) => None,
        }
    }

    /// Messages to run once the model exists
    pub fn startup_messages(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        if let Some(theme) = &self.theme {
            msgs.push(Msg::App(AppMsg::SwitchTheme(theme.clone())));
        }
        if let StartupMode::CsvTable(path) = &self.mode {
            msgs.push(Msg::Grid(GridMsg::ImportCsv(path.clone())));
        }
        if let Some(delimiter) = &self.table_delimiter {
            msgs.push(Msg::convert_to_table(delimiter.clone()));
        }
        msgs
    }
}
