//! Status bar model - segments synced from the grid state

use std::time::{Duration, Instant};

use super::AppModel;
use crate::grid::SelectionMode;

/// Identifier for status bar segments
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentId {
    /// Selection mode (e.g., "EDIT")
    Mode,
    /// Transient status messages (e.g., "Added column Column 10")
    StatusMessage,
    /// Active cell (e.g., "R2 · Status")
    CellPosition,
    /// Grid size (e.g., "5 × 9")
    Dimensions,
}

/// Position of a segment in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    Left,
    Right,
}

/// A single segment in the status bar
#[derive(Debug, Clone)]
pub struct StatusSegment {
    pub id: SegmentId,
    pub position: SegmentPosition,
    /// Empty text hides the segment
    pub text: String,
}

impl StatusSegment {
    fn new(id: SegmentId) -> Self {
        let position = match id {
            SegmentId::Mode | SegmentId::StatusMessage => SegmentPosition::Left,
            SegmentId::CellPosition | SegmentId::Dimensions => SegmentPosition::Right,
        };
        Self {
            id,
            position,
            text: String::new(),
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
    pub fn new() -> Self {
        Self {
            segments: vec![
                StatusSegment::new(SegmentId::Mode),
                StatusSegment::new(SegmentId::StatusMessage),
                StatusSegment::new(SegmentId::CellPosition),
                StatusSegment::new(SegmentId::Dimensions),
            ],
            separator_spacing: 2,
        }
    }

    pub fn text(&self, id: SegmentId) -> &str {
        self.segments
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.text.as_str())
            .unwrap_or("")
    }

    pub fn update_segment(&mut self, id: SegmentId, text: String) {
        if let Some(segment) = self.segments.iter_mut().find(|s| s.id == id) {
            segment.text = text;
        }
    }

    /// Joined text of the visible segments on one side
    pub fn side_text(&self, position: SegmentPosition) -> String {
        let separator = " ".repeat(self.separator_spacing);
        self.segments
            .iter()
            .filter(|s| s.position == position && !s.text.is_empty())
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(&separator)
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

/// A status message that disappears after a while
#[derive(Debug, Clone)]
pub struct TransientMessage {
    pub text: String,
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

    pub fn is_expired(&self) -> bool {
        Instant::now() >= self.expires_at
    }
}

/// Refresh every segment from the current model
pub fn sync_status_bar(model: &mut AppModel) {
    let grid = &model.grid;

    let mode = match grid.mode() {
        SelectionMode::Idle => "READY",
        SelectionMode::Active => "CELL",
        SelectionMode::Editing => "EDIT",
    };

    let position = grid
        .active()
        .map(|pos| {
            let label = grid
                .data
                .column(pos.col)
                .map(|c| c.label.as_str())
                .unwrap_or("");
            format!("R{} · {}", pos.row + 1, label)
        })
        .unwrap_or_default();

    let dimensions = format!("{} × {}", grid.data.row_count(), grid.data.column_count());

    let message = model
        .ui
        .transient_message
        .as_ref()
        .filter(|m| !m.is_expired())
        .map(|m| m.text.clone())
        .unwrap_or_default();

    let bar = &mut model.ui.status_bar;
    bar.update_segment(SegmentId::Mode, mode.to_string());
    bar.update_segment(SegmentId::CellPosition, position);
    bar.update_segment(SegmentId::Dimensions, dimensions);
    bar.update_segment(SegmentId::StatusMessage, message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_text_skips_empty() {
        let mut bar = StatusBar::new();
        bar.update_segment(SegmentId::CellPosition, "R1 · Job Request".to_string());
        bar.update_segment(SegmentId::Dimensions, "5 × 9".to_string());

        assert_eq!(bar.side_text(SegmentPosition::Left), "");
        assert_eq!(
            bar.side_text(SegmentPosition::Right),
            "R1 · Job Request  5 × 9"
        );
    }

    #[test]
    fn test_transient_expiry() {
        let msg = TransientMessage::new("hi", Duration::from_secs(0));
        assert!(msg.is_expired());
        let msg = TransientMessage::new("hi", Duration::from_secs(60));
        assert!(!msg.is_expired());
    }
}
