//! Language identification and detection
//!
//! Maps file extensions to language IDs and provides language metadata.

use std::path::Path;

/// Supported language identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    #[default]
    PlainText,
    Python,
    Rust,
}

impl LanguageId {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "py" | "pyw" | "pyi" => LanguageId::Python,
            "rs" => LanguageId::Rust,
            _ => LanguageId::PlainText,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(LanguageId::PlainText)
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "Plain Text",
            LanguageId::Python => "Python",
            LanguageId::Rust => "Rust",
        }
    }

    /// Check if this language has syntax highlighting support
    pub fn has_highlighting(&self) -> bool {
        !matches!(self, LanguageId::PlainText)
    }

    /// Syntax node kinds whose `name` child is a definition
    pub(crate) fn definition_kinds(&self) -> &'static [&'static str] {
        match self {
            LanguageId::PlainText => &[],
            LanguageId::Python => &["function_definition", "class_definition"],
            LanguageId::Rust => &[
                "function_item",
                "function_signature_item",
                "struct_item",
                "enum_item",
                "trait_item",
                "type_item",
                "union_item",
                "mod_item",
                "macro_definition",
            ],
        }
    }
}
