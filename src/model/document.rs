//! Document model - represents the text buffer and file state

use ropey::Rope;
use std::path::PathBuf;

use crate::syntax::{LanguageId, SyntaxHighlights};

/// Tab replacement used when saving with tab expansion enabled
pub const TAB_REPLACEMENT: &str = "    ";

/// Characters ropey treats as line breaks (CRLF counts as one break)
const LINE_BREAKS: &[char] = &[
    '\n', '\r', '\u{0B}', '\u{0C}', '\u{85}', '\u{2028}', '\u{2029}',
];

/// Document state - the text buffer and associated file metadata
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None for new/unsaved files)
    pub file_path: Option<PathBuf>,

    // === Syntax Highlighting ===
    /// Detected language for syntax highlighting
    pub language: LanguageId,
    /// Current syntax highlights (refreshed after each change)
    pub syntax_highlights: Option<SyntaxHighlights>,
    /// Document revision counter (incremented on each edit)
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            file_path: None,
            language: LanguageId::PlainText,
            syntax_highlights: None,
            revision: 0,
        }
    }

    /// Load a document from a file path
    pub fn from_file(path: PathBuf) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(&path)?;
        let language = LanguageId::from_path(&path);
        Ok(Self {
            buffer: Rope::from(content),
            file_path: Some(path),
            language,
            syntax_highlights: None,
            revision: 0,
        })
    }

    /// Get the full text of the document
    pub fn text(&self) -> String {
        self.buffer.to_string()
    }

    /// Text as it should be written to disk
    ///
    /// With `expand_tabs` set, every tab becomes four spaces.
    pub fn text_for_save(&self, expand_tabs: bool) -> String {
        let text = self.text();
        if expand_tabs {
            text.replace('\t', TAB_REPLACEMENT)
        } else {
            text
        }
    }

    /// Document lines without terminators
    ///
    /// Lines are split the same way as `line_count` and `get_line`, so a lone
    /// `\r` or U+2028 also ends a line. A trailing break does not produce an
    /// extra empty line.
    pub fn lines(&self) -> Vec<String> {
        if self.buffer.len_chars() == 0 {
            return Vec::new();
        }
        (0..self.line_count())
            .filter_map(|idx| self.get_line(idx))
            .collect()
    }

    /// Number of lines as an editor shows them (an empty buffer has one line)
    pub fn line_count(&self) -> usize {
        let lines = self.buffer.len_lines();
        // ropey counts the empty line after a trailing newline
        if lines > 1 && self.buffer.line(lines - 1).len_chars() == 0 {
            lines - 1
        } else {
            lines
        }
    }

    /// Get the content of a specific line (without its line break)
    pub fn get_line(&self, line_idx: usize) -> Option<String> {
        if line_idx >= self.line_count() {
            return None;
        }
        let line = self.buffer.line(line_idx).to_string();
        Some(line.trim_end_matches(LINE_BREAKS).to_string())
    }

    /// Replace the whole buffer
    pub fn set_text(&mut self, text: &str) {
        self.buffer = Rope::from(text);
        self.touch();
    }

    /// Replace the buffer with the given lines, each terminated by `\n`
    pub fn set_lines<S: AsRef<str>>(&mut self, lines: &[S]) {
        let mut text = String::new();
        for line in lines {
            text.push_str(line.as_ref());
            text.push('\n');
        }
        self.set_text(&text);
    }

    /// Append text at the end of the buffer
    pub fn append(&mut self, text: &str) {
        let end = self.buffer.len_chars();
        self.buffer.insert(end, text);
        self.touch();
    }

    /// Replace a line's content, keeping its terminator
    ///
    /// Returns false if the line does not exist.
    pub fn replace_line(&mut self, line_idx: usize, text: &str) -> bool {
        if line_idx >= self.line_count() {
            return false;
        }
        let start = self.buffer.line_to_char(line_idx);
        let content_len = self
            .get_line(line_idx)
            .map(|l| l.chars().count())
            .unwrap_or(0);
        self.buffer.remove(start..start + content_len);
        self.buffer.insert(start, text);
        self.touch();
        true
    }

    /// Remove a line including its terminator
    ///
    /// Returns false if the line does not exist.
    pub fn delete_line(&mut self, line_idx: usize) -> bool {
        if line_idx >= self.line_count() {
            return false;
        }
        let start = self.buffer.line_to_char(line_idx);
        let end = if line_idx + 1 < self.buffer.len_lines() {
            self.buffer.line_to_char(line_idx + 1)
        } else {
            self.buffer.len_chars()
        };
        self.buffer.remove(start..end);
        self.touch();
        true
    }

    /// Record a successful save of `content` to `path`
    ///
    /// Binds the document to the path (re-detecting the language when it
    /// changes) and brings the buffer in line with what was written.
    pub fn mark_saved(&mut self, path: PathBuf, content: &str) {
        if self.file_path.as_ref() != Some(&path) {
            self.language = LanguageId::from_path(&path);
            self.file_path = Some(path);
        }
        if self.text() != content {
            self.set_text(content);
        }
    }

    /// Display name for status bar / window title
    pub fn display_name(&self) -> String {
        self.file_path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    fn touch(&mut self) {
        self.revision += 1;
        self.syntax_highlights = None;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
