//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::grid::{CommitReason, NavKey};
use crate::toolbar::ToolbarAction;

/// Grid interaction events reported by the view
#[derive(Debug, Clone, PartialEq)]
pub enum GridMsg {
    /// A body cell was clicked
    CellClicked { row: usize, col: usize },
    /// A key was pressed while the grid has focus
    Key(NavKey),
    /// The edit input's full text after a keystroke
    InputChanged(String),
    /// The edit input closed
    Commit(CommitReason),
    /// The add-column affordance was activated
    AddColumn,
}

/// Keystrokes aimed at the edit input
///
/// Each one that changes the text is followed by `GridMsg::InputChanged`.
#[derive(Debug, Clone, PartialEq)]
pub enum InputMsg {
    InsertChar(char),
    /// Paste
    InsertText(String),
    DeleteBackward,
    DeleteForward,
    CursorLeft,
    CursorRight,
    CursorHome,
    CursorEnd,
}

/// Page chrome messages
#[derive(Debug, Clone, PartialEq)]
pub enum UiMsg {
    /// A toolbar entry was clicked
    Toolbar(ToolbarAction),
    /// Scroll the grid by pixels (positive = right/down)
    Scroll { dx: f32, dy: f32 },
    /// Periodic tick, expires transient status messages
    Tick,
}

/// Application-level messages
#[derive(Debug, Clone, PartialEq)]
pub enum AppMsg {
    /// Window resized to physical pixels
    Resize(u32, u32),
    /// Font metrics known after the renderer loads its font
    SetMetrics { line_height: usize, char_width: f32 },
    Quit,
}

/// Top-level message
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    Grid(GridMsg),
    Input(InputMsg),
    Ui(UiMsg),
    App(AppMsg),
}
