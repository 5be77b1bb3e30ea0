//! Grid update functions
//!
//! Handles GridMsg messages: selection, navigation, editing and columns.

use crate::commands::Cmd;
use crate::grid::{CellInput, CellPosition, CommitReason, NavKey};
use crate::layout::GridLayout;
use crate::messages::GridMsg;
use crate::model::AppModel;

/// Handle grid messages
pub fn update_grid(model: &mut AppModel, msg: GridMsg) -> Option<Cmd> {
    match msg {
        GridMsg::CellClicked { row, col } => cell_clicked(model, row, col),
        GridMsg::Key(key) => key_pressed(model, key),
        GridMsg::InputChanged(text) => input_changed(model, &text),
        GridMsg::Commit(reason) => commit(model, reason),
        GridMsg::AddColumn => add_column(model),
    }
}

/// Select a cell and open it for editing
fn cell_clicked(model: &mut AppModel, row: usize, col: usize) -> Option<Cmd> {
    let target = CellPosition::new(row, col);

    // Clicking another cell blurs the open input first
    if let Some(editing) = model.grid.editing() {
        if editing != target && model.grid.data.contains(target) {
            model.grid.on_commit(CommitReason::Blur);
            tracing::debug!(row = editing.row, col = editing.col, "edit committed by blur");
        }
    }

    if let Err(e) = model.grid.on_cell_click(row, col) {
        tracing::warn!("Ignoring click: {}", e);
        return None;
    }

    if let Some(value) = model.grid.editing_value() {
        model.ui.cell_input = CellInput::from_text(value);
    }

    ensure_visible(model, target);
    Some(Cmd::Redraw)
}

/// Move the active cell with an arrow key
fn key_pressed(model: &mut AppModel, key: NavKey) -> Option<Cmd> {
    if !model.grid.on_key(key) {
        return None;
    }

    if let Some(active) = model.grid.active() {
        ensure_visible(model, active);
    }
    Some(Cmd::Redraw)
}

/// Write the edit input's text into the editing cell
fn input_changed(model: &mut AppModel, text: &str) -> Option<Cmd> {
    if !model.grid.is_editing() {
        return None;
    }

    // Keep the input in sync when the text came from outside the buffer
    if model.ui.cell_input.text() != text {
        model.ui.cell_input.set_text(text);
    }

    match model.grid.on_input_change(text) {
        Ok(true) => Some(Cmd::Redraw),
        Ok(false) => None,
        Err(e) => {
            tracing::warn!("Edit rejected: {}", e);
            model.ui.set_status(format!("Edit rejected: {}", e));
            Some(Cmd::Redraw)
        }
    }
}

/// Close the edit input; the written value stays
fn commit(model: &mut AppModel, reason: CommitReason) -> Option<Cmd> {
    let editing = model.grid.editing()?;
    model.grid.on_commit(reason);
    tracing::debug!(
        row = editing.row,
        col = editing.col,
        ?reason,
        "edit committed"
    );
    Some(Cmd::Redraw)
}

/// Append a column labelled from the config and backfill it
fn add_column(model: &mut AppModel) -> Option<Cmd> {
    let label = model
        .config
        .new_column_label(model.grid.data.column_count() + 1);
    let id = model.grid.append_column(&label);
    tracing::info!(%id, %label, "column added");
    model.ui.set_status(format!("Added column {}", label));
    Some(Cmd::Redraw)
}

/// Scroll the grid so a cell is fully visible
pub fn ensure_visible(model: &mut AppModel, pos: CellPosition) {
    let layout = GridLayout::compute(model);
    model.ui.viewport = layout.scroll_to_reveal(pos);
}
