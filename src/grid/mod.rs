//! Editable grid core
//!
//! Holds the grid data and the selection state machine:
//! - Click a cell to select it and open it for editing
//! - Arrow keys move the active cell, wrapping at the edges
//! - Input changes write straight into the grid
//! - Blur, Enter and Escape leave edit mode
//!
//! # Architecture
//!
//! ```text
//! AppModel
//! └── GridState
//!     ├── GridData   (columns + rows)
//!     └── Selection  (active / editing)
//! ```

mod input;
mod model;
mod navigation;
mod seed;
mod selection;

pub use input::CellInput;
pub use model::{
    CellPosition, Column, ColumnSpec, GridData, GridError, Row, ROW_INDEX_COLUMN_ID,
};
pub use navigation::{wrap_step, NavKey};
pub use seed::starter_grid;
pub use selection::{CommitReason, Selection, SelectionMode};

/// Grid data plus the selection that points into it
#[derive(Debug, Clone, Default)]
pub struct GridState {
    pub data: GridData,
    selection: Selection,
}

impl GridState {
    pub fn new(data: GridData) -> Self {
        Self {
            data,
            selection: Selection::new(),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn active(&self) -> Option<CellPosition> {
        self.selection.active()
    }

    pub fn editing(&self) -> Option<CellPosition> {
        self.selection.editing()
    }

    pub fn is_editing(&self) -> bool {
        self.selection.is_editing()
    }

    pub fn mode(&self) -> SelectionMode {
        self.selection.mode()
    }

    /// Select a cell and open it for editing
    ///
    /// Read-only cells are selected without entering edit mode.
    pub fn on_cell_click(&mut self, row: usize, col: usize) -> Result<(), GridError> {
        let pos = CellPosition::new(row, col);
        let column = self
            .data
            .column(col)
            .filter(|_| row < self.data.row_count())
            .ok_or(GridError::OutOfRange { row, col })?;

        if column.is_editable() {
            self.selection.select_and_edit(pos);
        } else {
            self.selection.select(pos);
        }
        Ok(())
    }

    /// Write the edit input's text into the editing cell
    ///
    /// Returns `Ok(false)` when nothing is being edited or the column is
    /// read-only. If the editing cell has gone out of range, edit mode is
    /// dropped and the error returned.
    pub fn on_input_change(&mut self, text: &str) -> Result<bool, GridError> {
        let Some(pos) = self.selection.editing() else {
            return Ok(false);
        };

        let result = match self.data.column_id_at(pos.col).map(str::to_string) {
            Some(id) => self.data.set_value(pos.row, &id, text),
            None => Err(GridError::OutOfRange {
                row: pos.row,
                col: pos.col,
            }),
        };

        if result.is_err() {
            self.selection.stop_editing();
        }
        result
    }

    /// Leave edit mode. Values already written are kept for every reason.
    pub fn on_commit(&mut self, _reason: CommitReason) {
        self.selection.stop_editing();
    }

    /// Append a column with backfilled empty values
    pub fn append_column(&mut self, label: &str) -> String {
        self.data.append_column(label)
    }

    /// Column id under the active cell
    pub fn active_column_id(&self) -> Option<&str> {
        self.active().and_then(|pos| self.data.column_id_at(pos.col))
    }

    /// Current value of the editing cell
    pub fn editing_value(&self) -> Option<&str> {
        self.editing().map(|pos| self.data.value_at(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> GridState {
        GridState::new(starter_grid())
    }

    #[test]
    fn test_click_enters_editing() {
        let mut state = state();
        state.on_cell_click(2, 3).unwrap();

        assert_eq!(state.mode(), SelectionMode::Editing);
        assert_eq!(state.active(), Some(CellPosition::new(2, 3)));
        assert_eq!(state.editing(), Some(CellPosition::new(2, 3)));
    }

    #[test]
    fn test_click_out_of_range_leaves_state() {
        let mut state = state();
        state.on_cell_click(1, 1).unwrap();

        assert_eq!(
            state.on_cell_click(5, 0),
            Err(GridError::OutOfRange { row: 5, col: 0 })
        );
        assert_eq!(state.on_cell_click(0, 9), Err(GridError::OutOfRange { row: 0, col: 9 }));
        assert_eq!(state.editing(), Some(CellPosition::new(1, 1)));
    }

    #[test]
    fn test_click_read_only_cell_selects_only() {
        let mut state = GridState::new(starter_grid().with_row_numbers());
        state.on_cell_click(3, 0).unwrap();

        assert_eq!(state.mode(), SelectionMode::Active);
        assert_eq!(state.active(), Some(CellPosition::new(3, 0)));
    }

    #[test]
    fn test_input_change_without_editing_is_noop() {
        let mut state = state();
        assert_eq!(state.on_input_change("ignored"), Ok(false));
        assert_eq!(state.data.value(0, "job"), "Launch social media campaign for product");
    }

    #[test]
    fn test_input_change_writes_editing_cell() {
        let mut state = state();
        state.on_cell_click(1, 2).unwrap();
        assert_eq!(state.on_input_change("Done"), Ok(true));

        assert_eq!(state.data.value(1, "status"), "Done");
        assert_eq!(state.editing_value(), Some("Done"));
    }

    #[test]
    fn test_input_change_on_vanished_cell_drops_editing() {
        let mut state = state();
        state.on_cell_click(4, 8).unwrap();

        let mut row = Row::new();
        row.insert("a".to_string(), "kept".to_string());
        state.data = GridData::from_parts(vec![ColumnSpec::new("a", "A")], vec![row]);
        let before = state.data.clone();

        assert!(matches!(
            state.on_input_change("x"),
            Err(GridError::OutOfRange { row: 4, col: 8 })
        ));
        assert_eq!(state.editing(), None);
        assert_eq!(state.data, before);
    }

    #[test]
    fn test_escape_keeps_typed_text() {
        let mut state = state();
        state.on_cell_click(0, 6).unwrap();
        state.on_input_change("Urgent").unwrap();
        state.on_commit(CommitReason::EscapeKey);

        assert_eq!(state.data.value(0, "priority"), "Urgent");
        assert_eq!(state.mode(), SelectionMode::Active);
    }

    #[test]
    fn test_key_exits_editing() {
        let mut state = state();
        state.on_cell_click(0, 0).unwrap();
        assert!(state.on_key(NavKey::ArrowRight));

        assert_eq!(state.active(), Some(CellPosition::new(0, 1)));
        assert_eq!(state.editing(), None);
    }

    #[test]
    fn test_other_key_keeps_editing() {
        let mut state = state();
        state.on_cell_click(0, 0).unwrap();
        assert!(!state.on_key(NavKey::Other));

        assert_eq!(state.editing(), Some(CellPosition::new(0, 0)));
    }

    #[test]
    fn test_append_column_keeps_selection() {
        let mut state = state();
        state.on_cell_click(2, 2).unwrap();
        let id = state.append_column("Notes");

        assert_eq!(state.data.column_count(), 10);
        assert_eq!(state.editing(), Some(CellPosition::new(2, 2)));
        assert_eq!(state.data.value(2, &id), "");
    }

    #[test]
    fn test_active_column_id() {
        let mut state = state();
        assert_eq!(state.active_column_id(), None);
        state.on_cell_click(0, 7).unwrap();
        assert_eq!(state.active_column_id(), Some("dueDate"));
    }
}
