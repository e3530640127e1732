//! UI state - status bar, console pane, and other UI concerns

use std::path::PathBuf;

use super::status_bar::StatusBar;

/// Lines kept in the console pane before the oldest are dropped
pub const CONSOLE_CAPACITY: usize = 200;

/// A document save whose write has not completed yet
#[derive(Debug, Clone, PartialEq)]
pub struct PendingSave {
    /// Target path
    pub path: PathBuf,
    /// Exact text being written
    pub content: String,
}

/// UI state - status messages and the operator console
#[derive(Debug, Clone)]
pub struct UiState {
    /// Message displayed in the status bar
    pub status_message: String,
    /// Structured status bar with segments
    pub status_bar: StatusBar,
    /// Whether the console pane is shown below the editor
    pub console_visible: bool,
    /// Operator log shown in the console pane (oldest first)
    pub console_log: Vec<String>,
    /// Whether a file is currently being saved
    pub is_saving: bool,
    /// Document save applied to the model once its write succeeds
    pub pending_save: Option<PendingSave>,
}

impl UiState {
    /// Create a new UI state with default settings
    pub fn new() -> Self {
        Self {
            status_message: String::new(),
            status_bar: StatusBar::new(),
            console_visible: false,
            console_log: Vec::new(),
            is_saving: false,
            pending_save: None,
        }
    }

    /// Create a UI state with an initial status message
    pub fn with_status(message: impl Into<String>) -> Self {
        Self {
            status_message: message.into(),
            ..Self::new()
        }
    }

    /// Set the status message and record it in the console
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        let line = self.status_message.clone();
        self.log(line);
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message.clear();
    }

    /// Append a line to the console pane
    pub fn log(&mut self, line: impl Into<String>) {
        self.console_log.push(line.into());
        if self.console_log.len() > CONSOLE_CAPACITY {
            let overflow = self.console_log.len() - CONSOLE_CAPACITY;
            self.console_log.drain(..overflow);
        }
    }

    /// Show or hide the console pane, returning the new visibility
    pub fn toggle_console(&mut self) -> bool {
        self.console_visible = !self.console_visible;
        self.console_visible
    }
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}
