//! Editor configuration persistence
//!
//! Stores user preferences in `config.yaml` inside the config dir

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Window size and position, restored on the next start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowGeometry {
    #[serde(default = "default_width")]
    pub width: u32,
    #[serde(default = "default_height")]
    pub height: u32,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

fn default_width() -> u32 {
    800
}

fn default_height() -> u32 {
    600
}

impl Default for WindowGeometry {
    fn default() -> Self {
        Self {
            width: default_width(),
            height: default_height(),
            x: 0,
            y: 0,
        }
    }
}

/// Editor configuration that persists across sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditorConfig {
    /// Selected theme id (e.g., "default-dark", "monokai")
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Last window geometry
    #[serde(default)]
    pub window: WindowGeometry,
    /// File type filters offered when opening files (label -> glob patterns)
    #[serde(default = "default_open_types")]
    pub open_types: BTreeMap<String, Vec<String>>,
    /// Replace tabs with four spaces when saving
    #[serde(default = "default_expand_tabs")]
    pub expand_tabs_on_save: bool,
}

fn default_theme() -> String {
    "default-dark".to_string()
}

fn default_open_types() -> BTreeMap<String, Vec<String>> {
    let mut types = BTreeMap::new();
    types.insert("Text files".to_string(), vec!["*.txt".to_string()]);
    types.insert(
        "Python files".to_string(),
        vec!["*.py".to_string(), "*.pyw".to_string()],
    );
    types.insert("Rust files".to_string(), vec!["*.rs".to_string()]);
    types.insert(
        "Delimited files".to_string(),
        vec!["*.csv".to_string(), "*.tsv".to_string()],
    );
    types.insert("All files".to_string(), vec!["*".to_string()]);
    types
}

fn default_expand_tabs() -> bool {
    true
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            theme: default_theme(),
            window: WindowGeometry::default(),
            open_types: default_open_types(),
            expand_tabs_on_save: default_expand_tabs(),
        }
    }
}

impl EditorConfig {
    /// Load config from an explicit path, or return defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to an explicit path
    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }

    /// Update theme (persisted on the next save)
    pub fn set_theme(&mut self, theme_id: &str) {
        self.theme = theme_id.to_string();
    }

    /// Label of the open type whose patterns match `path`
    ///
    /// Specific patterns win over the catch-all `*`, so `data.csv` is a
    /// "Delimited files" file even though "All files" also matches it.
    pub fn file_type(&self, path: &Path) -> Option<&str> {
        let name = path.file_name()?.to_str()?;
        let find = |catch_all: bool| {
            self.open_types
                .iter()
                .find(|(_, patterns)| {
                    patterns
                        .iter()
                        .any(|p| (p == "*") == catch_all && pattern_matches(p, name))
                })
                .map(|(label, _)| label.as_str())
        };
        find(false).or_else(|| find(true))
    }
}

/// Match a file name against `*`, `*.ext` style or literal patterns
fn pattern_matches(pattern: &str, file_name: &str) -> bool {
    match pattern.strip_prefix('*') {
        Some("") => true,
        Some(suffix) => file_name
            .to_lowercase()
            .ends_with(&suffix.to_lowercase()),
        None => pattern.eq_ignore_ascii_case(file_name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_yaml_fills_defaults() {
        let config: EditorConfig = serde_yaml::from_str("theme: monokai\n").unwrap();
        assert_eq!(config.theme, "monokai");
        assert_eq!(config.window, WindowGeometry::default());
        assert!(config.expand_tabs_on_save);
        assert!(config.open_types.contains_key("Python files"));
    }

    #[test]
    fn test_window_partial() {
        let config: EditorConfig =
            serde_yaml::from_str("window:\n  width: 1024\n  x: 40\n").unwrap();
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.window.x, 40);
        assert_eq!(config.window.y, 0);
    }

    #[test]
    fn test_file_type_prefers_specific_patterns() {
        let config = EditorConfig::default();
        assert_eq!(config.file_type(Path::new("a/b.PY")), Some("Python files"));
        assert_eq!(config.file_type(Path::new("data.csv")), Some("Delimited files"));
        assert_eq!(config.file_type(Path::new("Makefile")), Some("All files"));
    }

    #[test]
    fn test_file_type_without_catch_all() {
        let mut config = EditorConfig::default();
        config.open_types.remove("All files");
        config
            .open_types
            .insert("Build".to_string(), vec!["Makefile".to_string()]);

        assert_eq!(config.file_type(Path::new("makefile")), Some("Build"));
        assert_eq!(config.file_type(Path::new("notes.md")), None);
    }
}
