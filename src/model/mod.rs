//! Application model - the complete state of the grid window
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod status_bar;
pub mod ui;

pub use status_bar::{
    sync_status_bar, SegmentId, SegmentPosition, StatusBar, StatusSegment, TransientMessage,
};
pub use ui::{GridViewport, UiState, TRANSIENT_MESSAGE_DURATION};

use crate::config::GridConfig;
use crate::grid::{starter_grid, GridData, GridState};
use crate::theme::GridTheme;

/// The complete application state
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Grid data and selection
    pub grid: GridState,
    /// Edit input, scrolling, status bar
    pub ui: UiState,
    pub theme: GridTheme,
    pub config: GridConfig,
    /// Window dimensions in physical pixels
    pub window_size: (u32, u32),
    /// Line height in pixels
    pub line_height: usize,
    /// Character width in pixels (monospace)
    pub char_width: f32,
}

impl AppModel {
    /// Create a model showing the starter grid
    pub fn new(window_width: u32, window_height: u32, config: GridConfig) -> Self {
        Self::with_grid(window_width, window_height, config, starter_grid())
    }

    /// Create a model around existing grid data
    ///
    /// The row-number column is added when the config asks for it.
    pub fn with_grid(
        window_width: u32,
        window_height: u32,
        config: GridConfig,
        data: GridData,
    ) -> Self {
        let data = if config.row_numbers {
            data.with_row_numbers()
        } else {
            data
        };

        let mut model = Self {
            grid: GridState::new(data),
            ui: UiState::new(),
            theme: config.grid_theme(),
            config,
            window_size: (window_width, window_height),
            // Corrected by the renderer once the font is loaded
            line_height: 20,
            char_width: 10.0,
        };
        sync_status_bar(&mut model);
        model
    }
}
