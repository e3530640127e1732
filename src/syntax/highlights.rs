//! Syntax highlighting data structures
//!
//! Defines highlight categories, line tokens, and document-level syntax state.

use std::collections::HashMap;

use super::languages::LanguageId;

/// The five categories a theme assigns colors to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntaxCategory {
    Comment,
    Keyword,
    Builtin,
    String,
    Definition,
}

impl SyntaxCategory {
    pub const ALL: [SyntaxCategory; 5] = [
        SyntaxCategory::Comment,
        SyntaxCategory::Keyword,
        SyntaxCategory::Builtin,
        SyntaxCategory::String,
        SyntaxCategory::Definition,
    ];

    /// Key used for this category in theme files
    pub fn key(self) -> &'static str {
        match self {
            SyntaxCategory::Comment => "comment",
            SyntaxCategory::Keyword => "keyword",
            SyntaxCategory::Builtin => "builtin",
            SyntaxCategory::String => "string",
            SyntaxCategory::Definition => "definition",
        }
    }
}

/// What a tree-sitter capture name maps to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CaptureClass {
    /// Always this category
    Category(SyntaxCategory),
    /// A definition only when the node names a definition
    NameOfDefinition,
}

/// Capture names (and their parents) that map to a category.
/// Hierarchical names fall back to the nearest listed parent,
/// e.g. "keyword.control.import" -> "keyword".
const CAPTURE_CLASSES: &[(&str, CaptureClass)] = &[
    ("comment", CaptureClass::Category(SyntaxCategory::Comment)),
    ("keyword", CaptureClass::Category(SyntaxCategory::Keyword)),
    ("string", CaptureClass::Category(SyntaxCategory::String)),
    ("escape", CaptureClass::Category(SyntaxCategory::String)),
    ("function.builtin", CaptureClass::Category(SyntaxCategory::Builtin)),
    ("function.macro", CaptureClass::Category(SyntaxCategory::Builtin)),
    ("constant.builtin", CaptureClass::Category(SyntaxCategory::Builtin)),
    ("type.builtin", CaptureClass::Category(SyntaxCategory::Builtin)),
    ("variable.builtin", CaptureClass::Category(SyntaxCategory::Builtin)),
    ("function", CaptureClass::NameOfDefinition),
    ("constructor", CaptureClass::NameOfDefinition),
    ("type", CaptureClass::NameOfDefinition),
];

/// Classify a tree-sitter capture name
pub(crate) fn capture_class(name: &str) -> Option<CaptureClass> {
    let mut current = name;
    loop {
        if let Some((_, class)) = CAPTURE_CLASSES.iter().find(|(n, _)| *n == current) {
            return Some(*class);
        }

        let Some(dot_pos) = current.rfind('.') else {
            break;
        };
        current = &current[..dot_pos];
    }
    None
}

/// A single highlighted span within a line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightToken {
    /// Start column (0-indexed, inclusive, in chars)
    pub start_col: usize,
    /// End column (exclusive)
    pub end_col: usize,
    pub category: SyntaxCategory,
}

/// Highlight information for a single line
#[derive(Debug, Clone, Default)]
pub struct LineHighlights {
    /// Tokens sorted by start_col
    pub tokens: Vec<HighlightToken>,
}

impl LineHighlights {
    /// Get the category for a given column, if any
    pub fn category_at(&self, col: usize) -> Option<SyntaxCategory> {
        for token in &self.tokens {
            if col >= token.start_col && col < token.end_col {
                return Some(token.category);
            }
            if token.start_col > col {
                break; // tokens are sorted, no need to continue
            }
        }
        None
    }
}

/// Complete highlight state for a document
#[derive(Debug, Clone, Default)]
pub struct SyntaxHighlights {
    /// Map of line number (0-indexed) → tokens
    pub lines: HashMap<usize, LineHighlights>,
    /// Document revision this corresponds to
    pub revision: u64,
    /// Language of the document
    pub language: LanguageId,
}

impl SyntaxHighlights {
    /// Create new empty highlights for a language
    pub fn new(language: LanguageId, revision: u64) -> Self {
        Self {
            lines: HashMap::new(),
            revision,
            language,
        }
    }

    /// Get highlight tokens for a line, or empty slice if none
    pub fn get_line_tokens(&self, line: usize) -> &[HighlightToken] {
        self.lines
            .get(&line)
            .map(|lh| lh.tokens.as_slice())
            .unwrap_or(&[])
    }

    /// Category at a line/column, if highlighted
    pub fn category_at(&self, line: usize, col: usize) -> Option<SyntaxCategory> {
        self.lines.get(&line).and_then(|lh| lh.category_at(col))
    }

    /// Check whether any token on the line has the given category
    pub fn line_has(&self, line: usize, category: SyntaxCategory) -> bool {
        self.get_line_tokens(line)
            .iter()
            .any(|t| t.category == category)
    }
}
