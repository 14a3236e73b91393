//! Status bar model - segments and layout
//!
//! Implements a structured, segment-based status line.

use std::time::{Duration, Instant};

use crate::editable::MarkState;

/// Identifier for status bar segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentId {
    /// File name display
    FileName,
    /// Modified indicator (e.g., "*")
    ModifiedIndicator,
    /// Status messages (e.g., "Saved", capacity errors)
    StatusMessage,
    /// Mark state (e.g., "MARK")
    Selection,
    /// Typing mode ("INS" / "OVR")
    Mode,
    /// Cursor position (e.g., "Ln 42, Col 15")
    CursorPosition,
    /// Total line count (e.g., "120 Ln")
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

    /// Width in terminal cells
    pub fn char_width(&self) -> usize {
        match self {
            SegmentContent::Empty => 0,
            SegmentContent::Text(s) => s.chars().count(),
        }
    }
}

/// A single segment in the status bar
#[derive(Debug, Clone)]
pub struct StatusSegment {
    /// Unique identifier
    pub id: SegmentId,
    /// Position in the status bar
    pub position: SegmentPosition,
    /// Content to display
    pub content: SegmentContent,
}

impl StatusSegment {
    /// Create a new segment with the given ID and content
    pub fn new(id: SegmentId, content: SegmentContent) -> Self {
        let position = match id {
            SegmentId::FileName | SegmentId::ModifiedIndicator | SegmentId::StatusMessage => {
                SegmentPosition::Left
            }
            SegmentId::Selection
            | SegmentId::Mode
            | SegmentId::CursorPosition
            | SegmentId::LineCount => SegmentPosition::Right,
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
    /// All segments in the status bar
    segments: Vec<StatusSegment>,
    /// Spacing between segments (cells)
    pub separator_spacing: usize,
    /// Padding on each side (cells)
    pub padding: usize,
}

impl StatusBar {
    /// Create a new status bar with default segments
    pub fn new() -> Self {
        Self {
            segments: vec![
                // Left segments
                StatusSegment::new(
                    SegmentId::FileName,
                    SegmentContent::Text("[No Name]".into()),
                ),
                StatusSegment::new(SegmentId::ModifiedIndicator, SegmentContent::Empty),
                StatusSegment::new(SegmentId::StatusMessage, SegmentContent::Empty),
                // Right segments
                StatusSegment::new(SegmentId::Selection, SegmentContent::Empty),
                StatusSegment::new(SegmentId::Mode, SegmentContent::Text("INS".into())),
                StatusSegment::new(
                    SegmentId::CursorPosition,
                    SegmentContent::Text("Ln 1, Col 1".into()),
                ),
                StatusSegment::new(SegmentId::LineCount, SegmentContent::Text("1 Ln".into())),
            ],
            separator_spacing: 2,
            padding: 1,
        }
    }

    /// Get a segment by ID
    pub fn get_segment(&self, id: SegmentId) -> Option<&StatusSegment> {
        self.segments.iter().find(|s| s.id == id)
    }

    /// Update a segment's content
    pub fn update_segment(&mut self, id: SegmentId, content: SegmentContent) {
        if let Some(segment) = self.segments.iter_mut().find(|s| s.id == id) {
            segment.content = content;
        }
    }

    /// Text of a segment, empty if hidden
    pub fn segment_text(&self, id: SegmentId) -> &str {
        self.get_segment(id)
            .map(|s| s.content.display_text())
            .unwrap_or("")
    }
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Transient Message
// =============================================================================

/// A transient status message that auto-expires
#[derive(Debug, Clone)]
pub struct TransientMessage {
    /// The message text
    pub text: String,
    /// When this message expires
    pub expires_at: Instant,
}

impl TransientMessage {
    /// Create a new transient message with the given duration
    pub fn new(text: impl Into<String>, duration: Duration) -> Self {
        Self {
            text: text.into(),
            expires_at: Instant::now() + duration,
        }
    }

    /// Check if this message has expired
    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

// =============================================================================
// Layout
// =============================================================================

/// A rendered segment with calculated position
#[derive(Debug, Clone)]
pub struct RenderedSegment {
    /// Segment identifier
    pub id: SegmentId,
    /// Column of the first cell
    pub x: usize,
    /// Width in cells
    pub width: usize,
    /// The text content to render
    pub text: String,
}

/// Complete layout of the status bar
#[derive(Debug, Clone)]
pub struct StatusBarLayout {
    /// Left-aligned segments with positions
    pub left: Vec<RenderedSegment>,
    /// Right-aligned segments with positions
    pub right: Vec<RenderedSegment>,
}

impl StatusBar {
    /// Calculate the layout for a line `available_width` cells wide.
    ///
    /// Left segments that would run into the right-hand group are cut short.
    pub fn layout(&self, available_width: usize) -> StatusBarLayout {
        // Right segments, positioned from the right edge backwards
        let mut right_segments = Vec::new();
        let mut right_x = available_width.saturating_sub(self.padding);
        let mut first = true;
        for seg in self
            .segments
            .iter()
            .filter(|s| s.position == SegmentPosition::Right && !s.content.is_empty())
            .rev()
        {
            if !first {
                right_x = right_x.saturating_sub(self.separator_spacing);
            }
            first = false;
            let width = seg.content.char_width();
            right_x = right_x.saturating_sub(width);
            right_segments.push(RenderedSegment {
                id: seg.id,
                x: right_x,
                width,
                text: seg.content.display_text().to_string(),
            });
        }
        right_segments.reverse();
        let right_start = right_segments
            .first()
            .map(|s| s.x.saturating_sub(self.separator_spacing))
            .unwrap_or(available_width);

        let mut left_segments = Vec::new();
        let mut left_x = self.padding;
        for seg in self
            .segments
            .iter()
            .filter(|s| s.position == SegmentPosition::Left && !s.content.is_empty())
        {
            if left_x >= right_start {
                break;
            }
            let text: String = seg
                .content
                .display_text()
                .chars()
                .take(right_start - left_x)
                .collect();
            let width = text.chars().count();
            left_segments.push(RenderedSegment {
                id: seg.id,
                x: left_x,
                width,
                text,
            });
            left_x += width + self.separator_spacing;
        }

        StatusBarLayout {
            left: left_segments,
            right: right_segments,
        }
    }
}

// =============================================================================
// Sync Function
// =============================================================================

use super::AppModel;

/// Synchronize status bar segments with current document state
pub fn sync_status_bar(model: &mut AppModel) {
    let filename = model
        .document
        .filename
        .clone()
        .unwrap_or_else(|| "[No Name]".to_string());
    let modified = if model.document.is_modified {
        SegmentContent::Text("*".to_string())
    } else {
        SegmentContent::Empty
    };
    let message = match &model.ui.transient_message {
        Some(transient) => transient.text.clone(),
        None => model.ui.status_message.clone(),
    };
    let selection = match model.mark.state() {
        MarkState::Unmarked => SegmentContent::Empty,
        MarkState::Marking => SegmentContent::Text("MARKING".to_string()),
        MarkState::Marked => SegmentContent::Text("MARKED".to_string()),
    };
    let mode = if model.insert_mode { "INS" } else { "OVR" };
    let cursor = model.document.cursor;
    let cursor_text = format!("Ln {}, Col {}", cursor.row + 1, cursor.col + 1);
    let line_text = format!("{} Ln", model.document.row_count());

    let bar = &mut model.ui.status_bar;
    bar.update_segment(SegmentId::FileName, SegmentContent::Text(filename));
    bar.update_segment(SegmentId::ModifiedIndicator, modified);
    bar.update_segment(SegmentId::StatusMessage, SegmentContent::Text(message));
    bar.update_segment(SegmentId::Selection, selection);
    bar.update_segment(SegmentId::Mode, SegmentContent::Text(mode.to_string()));
    bar.update_segment(SegmentId::CursorPosition, SegmentContent::Text(cursor_text));
    bar.update_segment(SegmentId::LineCount, SegmentContent::Text(line_text));
}
