//! UI state - edit input, scrolling, status bar

use std::time::Duration;

use super::status_bar::{StatusBar, TransientMessage};
use crate::grid::CellInput;

/// How long transient status messages stay visible
pub const TRANSIENT_MESSAGE_DURATION: Duration = Duration::from_secs(3);

/// Scroll offset of the grid body in pixels
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct GridViewport {
    pub scroll_x: f32,
    pub scroll_y: f32,
}

/// UI state that is not part of the grid itself
#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Text and cursor of the edit input (meaningful only while editing)
    pub cell_input: CellInput,
    pub viewport: GridViewport,
    pub status_bar: StatusBar,
    pub transient_message: Option<TransientMessage>,
}

impl UiState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a message in the status bar for a few seconds
    pub fn set_status(&mut self, text: impl Into<String>) {
        self.transient_message = Some(TransientMessage::new(text, TRANSIENT_MESSAGE_DURATION));
    }

    /// Drop the transient message once it has expired. Returns true if dropped.
    pub fn expire_status(&mut self) -> bool {
        if self
            .transient_message
            .as_ref()
            .is_some_and(|m| m.is_expired())
        {
            self.transient_message = None;
            return true;
        }
        false
    }
}
