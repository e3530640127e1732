//! Tree-sitter parser state and highlighting extraction
//!
//! Manages parsers and queries for syntax highlighting. Parsing runs
//! synchronously on the caller's thread.

use std::collections::HashMap;

use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor, Tree};

use super::highlights::{
    capture_class, CaptureClass, HighlightToken, SyntaxCategory, SyntaxHighlights,
};
use super::languages::LanguageId;

const PYTHON_HIGHLIGHTS: &str = tree_sitter_python::HIGHLIGHTS_QUERY;
const RUST_HIGHLIGHTS: &str = tree_sitter_rust::HIGHLIGHTS_QUERY;

/// Parser state (tree-sitter parsers are !Sync)
pub struct ParserState {
    /// Parser instances per language
    parsers: HashMap<LanguageId, Parser>,
    /// Compiled queries per language
    queries: HashMap<LanguageId, Query>,
}

impl ParserState {
    /// Create a new parser state with initialized languages
    pub fn new() -> Self {
        let mut state = Self {
            parsers: HashMap::new(),
            queries: HashMap::new(),
        };

        state.init_language(LanguageId::Python);
        state.init_language(LanguageId::Rust);

        state
    }

    /// Initialize a language's parser and query
    fn init_language(&mut self, lang: LanguageId) {
        let (ts_lang, highlights_scm) = match lang {
            LanguageId::Python => (tree_sitter_python::LANGUAGE.into(), PYTHON_HIGHLIGHTS),
            LanguageId::Rust => (tree_sitter_rust::LANGUAGE.into(), RUST_HIGHLIGHTS),
            // No highlighting for plain text
            LanguageId::PlainText => return,
        };

        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(&ts_lang) {
            tracing::error!("Failed to set language for {:?}: {}", lang, e);
            return;
        }
        self.parsers.insert(lang, parser);

        // Create query (may fail if query syntax is invalid)
        match Query::new(&ts_lang, highlights_scm) {
            Ok(query) => {
                self.queries.insert(lang, query);
            }
            Err(e) => {
                tracing::error!("Failed to compile query for {:?}: {:?}", lang, e);
            }
        }
    }

    /// Parse source and extract highlights
    pub fn parse_and_highlight(
        &mut self,
        source: &str,
        language: LanguageId,
        revision: u64,
    ) -> SyntaxHighlights {
        if !language.has_highlighting() {
            return SyntaxHighlights::new(language, revision);
        }

        let Some(parser) = self.parsers.get_mut(&language) else {
            tracing::warn!("No parser for language {:?}", language);
            return SyntaxHighlights::new(language, revision);
        };

        let Some(tree) = parser.parse(source, None) else {
            tracing::error!("Parse failed for {:?}", language);
            return SyntaxHighlights::new(language, revision);
        };

        self.extract_highlights(source, &tree, language, revision)
    }

    /// Extract highlight tokens from a parsed tree
    fn extract_highlights(
        &self,
        source: &str,
        tree: &Tree,
        language: LanguageId,
        revision: u64,
    ) -> SyntaxHighlights {
        let Some(query) = self.queries.get(&language) else {
            return SyntaxHighlights::new(language, revision);
        };

        let mut highlights = SyntaxHighlights::new(language, revision);
        let mut cursor = QueryCursor::new();
        let source_bytes = source.as_bytes();
        let definition_kinds = language.definition_kinds();

        // Pre-split into lines for byte→char column conversion
        let lines: Vec<&str> = source.lines().collect();

        // Tree-sitter positions are in bytes, but tokens use character indices
        fn byte_to_char_col(line: &str, byte_col: usize) -> usize {
            let byte_col = byte_col.min(line.len());
            let mut valid_byte = byte_col;
            while valid_byte > 0 && !line.is_char_boundary(valid_byte) {
                valid_byte -= 1;
            }
            line[..valid_byte].chars().count()
        }

        fn names_definition(node: Node<'_>, definition_kinds: &[&str]) -> bool {
            node.parent().is_some_and(|parent| {
                definition_kinds.contains(&parent.kind())
                    && parent
                        .child_by_field_name("name")
                        .is_some_and(|name| name.id() == node.id())
            })
        }

        let mut captures = cursor.captures(query, tree.root_node(), source_bytes);
        while let Some((query_match, capture_idx)) = captures.next() {
            let capture = &query_match.captures[*capture_idx];
            let capture_name = &query.capture_names()[capture.index as usize];
            let node = capture.node;

            let category = match capture_class(capture_name) {
                Some(CaptureClass::Category(category)) => category,
                Some(CaptureClass::NameOfDefinition)
                    if names_definition(node, definition_kinds) =>
                {
                    SyntaxCategory::Definition
                }
                _ => continue,
            };

            let start = node.start_position();
            let end = node.end_position();

            // Multi-line nodes (block comments, triple-quoted strings) are split per line
            for row in start.row..=end.row {
                let line = lines.get(row).copied().unwrap_or("");
                let start_char = if row == start.row {
                    byte_to_char_col(line, start.column)
                } else {
                    0
                };
                let end_char = if row == end.row {
                    byte_to_char_col(line, end.column)
                } else {
                    line.chars().count()
                };

                if start_char < end_char {
                    let line_highlights = highlights.lines.entry(row).or_default();
                    // First capture for a span wins
                    let duplicate = line_highlights
                        .tokens
                        .iter()
                        .any(|t| t.start_col == start_char && t.end_col == end_char);
                    if !duplicate {
                        line_highlights.tokens.push(HighlightToken {
                            start_col: start_char,
                            end_col: end_char,
                            category,
                        });
                    }
                }
            }
        }

        for line_highlights in highlights.lines.values_mut() {
            line_highlights
                .tokens
                .sort_by_key(|t| (t.start_col, t.end_col));
        }

        highlights
    }
}

impl Default for ParserState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for ParserState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ParserState")
            .field("languages", &self.parsers.keys().collect::<Vec<_>>())
            .finish()
    }
}
