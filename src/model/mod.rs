//! Application model - the complete state of the editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod status_bar;
pub mod ui;

pub use document::{Document, TAB_REPLACEMENT};
pub use status_bar::{
    sync_status_bar, SegmentContent, SegmentId, SegmentPosition, StatusBar, StatusSegment,
};
pub use ui::{PendingSave, UiState, CONSOLE_CAPACITY};

use std::path::{Path, PathBuf};

use crate::config::EditorConfig;
use crate::config_paths;
use crate::grid::GridState;
use crate::syntax::ParserState;
use crate::theme::{self, Theme, ThemeInfo};

/// Which representation of the document is visible
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewMode {
    /// Text editor (default)
    #[default]
    Text,
    /// Table built from the text
    Grid,
}

/// Where configuration, user themes and logs are read from and written to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigLocation {
    /// `config.yaml` path (None disables persistence)
    pub config_file: Option<PathBuf>,
    /// Directory scanned for user themes
    pub themes_dir: Option<PathBuf>,
    /// Directory for rolling log files (None disables file logging)
    pub logs_dir: Option<PathBuf>,
}

impl ConfigLocation {
    /// The per-user config dir, or no persistence when there is none
    pub fn user() -> Self {
        match config_paths::config_dir() {
            Some(dir) => Self::in_dir(&dir),
            None => {
                tracing::debug!("No config directory available, settings won't persist");
                Self::default()
            }
        }
    }

    /// Locations rooted at an explicit directory
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            config_file: Some(dir.join(config_paths::CONFIG_FILE_NAME)),
            themes_dir: Some(dir.join(config_paths::THEMES_DIR_NAME)),
            logs_dir: Some(dir.join(config_paths::LOGS_DIR_NAME)),
        }
    }

    /// Create the themes and logs directories
    ///
    /// Failures are logged; the editor still runs without them.
    pub fn ensure_dirs(&self) {
        for dir in [&self.themes_dir, &self.logs_dir].into_iter().flatten() {
            if let Err(e) = config_paths::ensure_dir(dir) {
                tracing::warn!("{}", e);
            }
        }
    }
}

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The text being edited
    pub document: Document,
    /// Table view state
    pub grid: GridState,
    /// Currently visible view
    pub view_mode: ViewMode,
    /// UI state (status bar, console)
    pub ui: UiState,
    /// Theme for colors and styling
    pub theme: Theme,
    /// Themes offered in the Editor menu
    pub available_themes: Vec<ThemeInfo>,
    /// Persisted editor configuration
    pub config: EditorConfig,
    /// Where config and themes live
    pub location: ConfigLocation,
    /// Tree-sitter parsers for highlighting
    pub parser: ParserState,
}

impl AppModel {
    /// Create the model with config and themes read from `location`
    pub fn with_location(location: ConfigLocation, file_path: Option<PathBuf>) -> Self {
        let config = match &location.config_file {
            Some(path) => EditorConfig::load_from(path),
            None => EditorConfig::default(),
        };

        let (document, status_message) = match file_path {
            Some(path) => match Document::from_file(path.clone()) {
                Ok(doc) => (doc, format!("Loaded: {}", path.display())),
                Err(e) => {
                    let msg = format!("Error loading {}: {}", path.display(), e);
                    tracing::warn!("{}", msg);
                    (Document::new(), msg)
                }
            },
            None => (Document::new(), "New file".to_string()),
        };

        let mut model = Self {
            document,
            grid: GridState::default(),
            view_mode: ViewMode::Text,
            ui: UiState::with_status(status_message),
            theme: Theme::default(),
            available_themes: Vec::new(),
            config,
            location,
            parser: ParserState::new(),
        };

        model.reload_themes();
        let theme_id = model.config.theme.clone();
        model.theme = model.load_theme(&theme_id).unwrap_or_else(|e| {
            tracing::warn!("Failed to load theme '{}': {}, using default", theme_id, e);
            Theme::default()
        });
        model.refresh_highlights();
        sync_status_bar(&mut model);
        model
    }

    /// Load a theme by id, preferring the user themes directory
    pub fn load_theme(&self, id: &str) -> Result<Theme, String> {
        match &self.location.themes_dir {
            Some(dir) => theme::load_theme_from(dir, id),
            None => Theme::from_builtin(id),
        }
    }

    /// Rescan user and builtin themes
    pub fn reload_themes(&mut self) {
        self.available_themes = match &self.location.themes_dir {
            Some(dir) => theme::list_themes_in(dir),
            None => theme::list_themes_in(Path::new("")),
        };
    }

    /// Re-run highlighting if the document changed since the last parse
    pub fn refresh_highlights(&mut self) {
        let doc = &self.document;
        let fresh = doc
            .syntax_highlights
            .as_ref()
            .is_some_and(|h| h.revision == doc.revision && h.language == doc.language);
        if fresh || !doc.language.has_highlighting() {
            return;
        }

        let source = doc.text();
        let highlights = self
            .parser
            .parse_and_highlight(&source, doc.language, doc.revision);
        self.document.syntax_highlights = Some(highlights);
    }
}
