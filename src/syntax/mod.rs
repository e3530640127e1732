//! Syntax highlighting module
//!
//! Provides tree-sitter based syntax highlighting with:
//! - Language detection from file extensions
//! - Highlight extraction into five theme categories
//!   (comment, keyword, builtin, string, definition)
//!
//! ## Supported Languages
//!
//! - Python
//! - Rust

mod highlights;
mod languages;
mod parser;

pub use highlights::{HighlightToken, LineHighlights, SyntaxCategory, SyntaxHighlights};
pub use languages::LanguageId;
pub use parser::ParserState;
