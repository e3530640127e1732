//! Status bar model - segments and layout
//!
//! Implements a structured, segment-based status bar system.

use super::{AppModel, ViewMode};

/// Identifier for status bar segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentId {
    /// File name display
    FileName,
    /// Transient status messages (e.g., "Saved")
    StatusMessage,
    /// Active view (e.g., "Text", "Table 3x4")
    ViewMode,
    /// Total line count (e.g., "Lines: 12")
    LineCount,
}

/// Position of a segment in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    Left,
    Right,
}

/// Content of a segment
#[derive(Debug, Clone, PartialEq)]
pub enum SegmentContent {
    /// Empty/hidden segment
    Empty,
    /// Text content
    Text(String),
}

impl SegmentContent {
    /// Get the display text for this content
    pub fn display_text(&self) -> &str {
        match self {
            SegmentContent::Empty => "",
            SegmentContent::Text(s) => s,
        }
    }

    /// Check if this content is empty (nothing to display)
    pub fn is_empty(&self) -> bool {
        match self {
            SegmentContent::Empty => true,
            SegmentContent::Text(s) => s.is_empty(),
        }
    }
}

/// A single segment in the status bar
#[derive(Debug, Clone)]
pub struct StatusSegment {
    pub id: SegmentId,
    pub position: SegmentPosition,
    pub content: SegmentContent,
}

impl StatusSegment {
    /// Create a new segment with the given ID and content
    pub fn new(id: SegmentId, content: SegmentContent) -> Self {
        let position = match id {
            SegmentId::FileName | SegmentId::StatusMessage => SegmentPosition::Left,
            SegmentId::ViewMode | SegmentId::LineCount => SegmentPosition::Right,
        };

        Self {
            id,
            position,
            content,
        }
    }
}

/// The complete status bar state
#[derive(Debug, Clone)]
pub struct StatusBar {
    segments: Vec<StatusSegment>,
    /// Spacing between segments (character units)
    pub separator_spacing: usize,
}

impl StatusBar {
    /// Create a new status bar with default segments
    pub fn new() -> Self {
        Self {
            segments: vec![
                StatusSegment::new(
                    SegmentId::FileName,
                    SegmentContent::Text("Untitled".into()),
                ),
                StatusSegment::new(SegmentId::StatusMessage, SegmentContent::Empty),
                StatusSegment::new(SegmentId::ViewMode, SegmentContent::Text("Text".into())),
                StatusSegment::new(
                    SegmentId::LineCount,
                    SegmentContent::Text("Lines: 1".into()),
                ),
            ],
            separator_spacing: 2,
        }
    }

    /// Get a segment by ID
    pub fn get_segment(&self, id: SegmentId) -> Option<&StatusSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Display text of a segment ("" when hidden)
    pub fn segment_text(&self, id: SegmentId) -> &str {
        self.get_segment(id)
            .map(|s| s.content.display_text())
            .unwrap_or("")
    }

    /// Update a segment's content
    pub fn update_segment(&mut self, id: SegmentId, content: SegmentContent) {
        if let Some(segment) = self.segments.iter_mut().find(|s| s.id == id) {
            segment.content = content;
        }
    }

    /// Render the bar into a single line of `width` characters
    ///
    /// Left segments are packed from the left edge, right segments from the
    /// right edge. If both sides don't fit, the right side wins and the left
    /// side is truncated.
    pub fn layout(&self, width: usize) -> String {
        let join = |position: SegmentPosition| {
            self.segments
                .iter()
                .filter(|s| s.position == position && !s.content.is_empty())
                .map(|s| s.content.display_text())
                .collect::<Vec<_>>()
                .join(&" ".repeat(self.separator_spacing))
        };
        let left = join(SegmentPosition::Left);
        let right = join(SegmentPosition::Right);

        let right_width = right.chars().count();
        let left_room = width.saturating_sub(right_width + self.separator_spacing);
        let left: String = left.chars().take(left_room).collect();
        let gap = width.saturating_sub(left.chars().count() + right_width);

        format!("{}{}{}", left, " ".repeat(gap), right)
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

/// Synchronize status bar segments with current document/view state
pub fn sync_status_bar(model: &mut AppModel) {
    let filename = model.document.display_name();
    let view = match model.view_mode {
        ViewMode::Text => "Text".to_string(),
        ViewMode::Grid => format!(
            "Table {}x{}",
            model.grid.grid.row_count(),
            model.grid.grid.column_count()
        ),
    };
    let line_text = format!("Lines: {}", model.document.line_count());
    let message = if model.ui.status_message.is_empty() {
        SegmentContent::Empty
    } else {
        SegmentContent::Text(model.ui.status_message.clone())
    };

    let bar = &mut model.ui.status_bar;
    bar.update_segment(SegmentId::FileName, SegmentContent::Text(filename));
    bar.update_segment(SegmentId::StatusMessage, message);
    bar.update_segment(SegmentId::ViewMode, SegmentContent::Text(view));
    bar.update_segment(SegmentId::LineCount, SegmentContent::Text(line_text));
}
