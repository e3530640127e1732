//! Theme system for the editor
//!
//! Provides YAML-based theming support with compile-time embedded themes
//! and user-defined themes from config directories.
//!
//! Theme loading priority:
//! 1. User config: `~/.config/gridpad/themes/{id}.yaml`
//! 2. Embedded: Built-in themes compiled into binary
//!
//! Every color key is required; a theme file missing one fails to load
//! instead of falling back silently.

use std::path::Path;

use serde::Deserialize;

use crate::syntax::SyntaxCategory;

// Embed theme YAML files at compile time
pub const DEFAULT_DARK_YAML: &str = include_str!("../themes/default-dark.yaml");
pub const DEFAULT_LIGHT_YAML: &str = include_str!("../themes/default-light.yaml");
pub const MONOKAI_YAML: &str = include_str!("../themes/monokai.yaml");

/// A built-in theme entry
pub struct BuiltinTheme {
    /// Stable identifier for config (e.g. "default-dark", "monokai")
    pub id: &'static str,
    /// Embedded YAML content
    pub yaml: &'static str,
}

/// Registry of all built-in themes
pub const BUILTIN_THEMES: &[BuiltinTheme] = &[
    BuiltinTheme {
        id: "default-dark",
        yaml: DEFAULT_DARK_YAML,
    },
    BuiltinTheme {
        id: "default-light",
        yaml: DEFAULT_LIGHT_YAML,
    },
    BuiltinTheme {
        id: "monokai",
        yaml: MONOKAI_YAML,
    },
];

/// Where the theme came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeSource {
    /// User-defined theme in ~/.config/gridpad/themes/
    User,
    /// Built-in theme embedded in binary
    Builtin,
}

/// Information about an available theme
#[derive(Debug, Clone)]
pub struct ThemeInfo {
    /// Stable identifier (e.g., "default-dark", "my-custom-theme")
    pub id: String,
    /// Display name from YAML (e.g., "Default Dark")
    pub name: String,
    /// Where this theme is loaded from
    pub source: ThemeSource,
}

/// Load a theme from a YAML file
pub fn from_file(path: &Path) -> Result<Theme, String> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read theme file {}: {}", path.display(), e))?;
    Theme::from_yaml(&content)
}

/// Load theme by id, looking in `user_dir` before the builtins
pub fn load_theme_from(user_dir: &Path, id: &str) -> Result<Theme, String> {
    let user_path = user_dir.join(format!("{}.yaml", id));
    if user_path.exists() {
        tracing::info!("Loading user theme from {}", user_path.display());
        return from_file(&user_path);
    }

    tracing::info!("Loading builtin theme: {}", id);
    Theme::from_builtin(id)
}

/// List user themes in `user_dir` followed by the builtins they don't shadow
pub fn list_themes_in(user_dir: &Path) -> Vec<ThemeInfo> {
    let mut themes = Vec::new();
    let mut seen_ids = std::collections::HashSet::new();

    if let Ok(entries) = std::fs::read_dir(user_dir) {
        let mut paths: Vec<_> = entries.filter_map(|e| e.ok()).map(|e| e.path()).collect();
        paths.sort();

        for path in paths {
            if !path
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
            {
                continue;
            }
            if let Some(id) = path.file_stem().and_then(|s| s.to_str()) {
                if seen_ids.insert(id.to_string()) {
                    let name = extract_theme_name(&path).unwrap_or_else(|| id.to_string());
                    themes.push(ThemeInfo {
                        id: id.to_string(),
                        name,
                        source: ThemeSource::User,
                    });
                }
            }
        }
    }

    for builtin in BUILTIN_THEMES {
        if seen_ids.insert(builtin.id.to_string()) {
            let name = Theme::from_yaml(builtin.yaml)
                .map(|t| t.name)
                .unwrap_or_else(|_| builtin.id.to_string());
            themes.push(ThemeInfo {
                id: builtin.id.to_string(),
                name,
                source: ThemeSource::Builtin,
            });
        }
    }

    themes
}

/// Extract theme name from YAML file without full parsing
fn extract_theme_name(path: &Path) -> Option<String> {
    let content = std::fs::read_to_string(path).ok()?;
    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(value) = trimmed.strip_prefix("name:") {
            let value = value.trim().trim_matches('"').trim_matches('\'');
            return Some(value.to_string());
        }
    }
    None
}

/// RGBA color (0-255 per channel)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    /// Create a new color from RGB values (alpha defaults to 255)
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Create a new color from RGBA values
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Parse from "#RRGGBB" or "#RRGGBBAA" hex string
    pub fn from_hex(s: &str) -> Result<Self, String> {
        let s = s.trim_start_matches('#');
        // from_str_radix alone would accept a leading '+'
        if !s.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(format!("Invalid color format: {}", s));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&s[range], 16).map_err(|e| format!("Invalid color {}: {}", s, e))
        };
        match s.len() {
            6 => Ok(Color::rgb(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            8 => Ok(Color::rgba(
                channel(0..2)?,
                channel(2..4)?,
                channel(4..6)?,
                channel(6..8)?,
            )),
            _ => Err(format!("Invalid color format: {}", s)),
        }
    }

    /// Format as "#RRGGBB" (alpha is appended only when not opaque)
    pub fn to_hex(&self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:02X}{:02X}{:02X}{:02X}", self.r, self.g, self.b, self.a)
        }
    }
}

/// Raw theme data as parsed from YAML
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeData {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub editor: EditorThemeData,
    pub syntax: SyntaxThemeData,
}

/// Window and text area colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct EditorThemeData {
    pub editor_background: String,
    pub table_background: String,
    pub text_background: String,
    pub text_color: String,
    pub cursor_color: String,
}

/// Foreground/background pair (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct TokenStyleData {
    pub foreground: String,
    pub background: String,
}

/// Syntax category colors (raw strings from YAML)
#[derive(Debug, Clone, Deserialize)]
pub struct SyntaxThemeData {
    pub comment: TokenStyleData,
    pub keyword: TokenStyleData,
    pub builtin: TokenStyleData,
    pub string: TokenStyleData,
    pub definition: TokenStyleData,
}

/// Resolved theme with parsed colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub name: String,
    pub editor: EditorTheme,
    pub syntax: SyntaxTheme,
}

/// Window and text area colors (resolved)
#[derive(Debug, Clone, PartialEq)]
pub struct EditorTheme {
    /// Window background around the text area and table
    pub editor_background: Color,
    /// Background of the table view
    pub table_background: Color,
    /// Background of the text area
    pub text_background: Color,
    /// Default text color
    pub text_color: Color,
    pub cursor_color: Color,
}

/// Colors for one syntax category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenStyle {
    pub foreground: Color,
    pub background: Color,
}

impl TokenStyle {
    fn from_data(data: &TokenStyleData, key: &str) -> Result<Self, String> {
        Ok(Self {
            foreground: Color::from_hex(&data.foreground)
                .map_err(|e| format!("syntax.{}.foreground: {}", key, e))?,
            background: Color::from_hex(&data.background)
                .map_err(|e| format!("syntax.{}.background: {}", key, e))?,
        })
    }
}

/// Syntax category colors (resolved)
#[derive(Debug, Clone, PartialEq)]
pub struct SyntaxTheme {
    pub comment: TokenStyle,
    pub keyword: TokenStyle,
    pub builtin: TokenStyle,
    pub string: TokenStyle,
    pub definition: TokenStyle,
}

impl SyntaxTheme {
    /// Style for a highlight category
    pub fn style(&self, category: SyntaxCategory) -> TokenStyle {
        match category {
            SyntaxCategory::Comment => self.comment,
            SyntaxCategory::Keyword => self.keyword,
            SyntaxCategory::Builtin => self.builtin,
            SyntaxCategory::String => self.string,
            SyntaxCategory::Definition => self.definition,
        }
    }
}

impl Theme {
    /// Load theme from YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self, String> {
        let data: ThemeData =
            serde_yaml::from_str(yaml).map_err(|e| format!("YAML parse error: {}", e))?;
        Self::from_data(data)
    }

    /// Load a built-in theme by id
    pub fn from_builtin(id: &str) -> Result<Self, String> {
        let entry = BUILTIN_THEMES
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| format!("Unknown theme id: {}", id))?;
        Theme::from_yaml(entry.yaml)
    }

    /// Convert raw theme data to resolved theme
    pub fn from_data(data: ThemeData) -> Result<Self, String> {
        let editor_color = |value: &str, key: &str| {
            Color::from_hex(value).map_err(|e| format!("editor.{}: {}", key, e))
        };

        Ok(Theme {
            name: data.name,
            editor: EditorTheme {
                editor_background: editor_color(
                    &data.editor.editor_background,
                    "editor_background",
                )?,
                table_background: editor_color(&data.editor.table_background, "table_background")?,
                text_background: editor_color(&data.editor.text_background, "text_background")?,
                text_color: editor_color(&data.editor.text_color, "text_color")?,
                cursor_color: editor_color(&data.editor.cursor_color, "cursor_color")?,
            },
            syntax: SyntaxTheme {
                comment: TokenStyle::from_data(&data.syntax.comment, "comment")?,
                keyword: TokenStyle::from_data(&data.syntax.keyword, "keyword")?,
                builtin: TokenStyle::from_data(&data.syntax.builtin, "builtin")?,
                string: TokenStyle::from_data(&data.syntax.string, "string")?,
                definition: TokenStyle::from_data(&data.syntax.definition, "definition")?,
            },
        })
    }

    /// Default dark theme (YAML-backed with Rust fallback)
    pub fn default_dark() -> Self {
        match Theme::from_yaml(DEFAULT_DARK_YAML) {
            Ok(theme) => theme,
            Err(_) => {
                let on_bg = |fg: Color| TokenStyle {
                    foreground: fg,
                    background: Color::rgb(0x1E, 0x1E, 0x1E),
                };
                Theme {
                    name: "Default Dark".to_string(),
                    editor: EditorTheme {
                        editor_background: Color::rgb(0x25, 0x25, 0x26),
                        table_background: Color::rgb(0x25, 0x25, 0x26),
                        text_background: Color::rgb(0x1E, 0x1E, 0x1E),
                        text_color: Color::rgb(0xD4, 0xD4, 0xD4),
                        cursor_color: Color::rgb(0xFF, 0xFF, 0xFF),
                    },
                    syntax: SyntaxTheme {
                        comment: on_bg(Color::rgb(0x6A, 0x99, 0x55)),
                        keyword: on_bg(Color::rgb(0x56, 0x9C, 0xD6)),
                        builtin: on_bg(Color::rgb(0x4E, 0xC9, 0xB0)),
                        string: on_bg(Color::rgb(0xCE, 0x91, 0x78)),
                        definition: on_bg(Color::rgb(0xDC, 0xDC, 0xAA)),
                    },
                }
            }
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::default_dark()
    }
}
