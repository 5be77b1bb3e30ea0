//! Active and editing cell tracking

use super::model::CellPosition;

/// Why an edit session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitReason {
    /// Input lost focus
    Blur,
    EnterKey,
    /// Exits edit mode; typed text is kept
    EscapeKey,
}

/// Coarse state of the selection subsystem
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionMode {
    /// Nothing highlighted
    Idle,
    /// A cell is highlighted but not being edited
    Active,
    /// The highlighted cell shows an edit input
    Editing,
}

/// Active/editing cell pair
///
/// `editing`, when set, always equals `active`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Selection {
    active: Option<CellPosition>,
    editing: Option<CellPosition>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active(&self) -> Option<CellPosition> {
        self.active
    }

    pub fn editing(&self) -> Option<CellPosition> {
        self.editing
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    pub fn mode(&self) -> SelectionMode {
        match (self.active, self.editing) {
            (None, _) => SelectionMode::Idle,
            (Some(_), None) => SelectionMode::Active,
            (Some(_), Some(_)) => SelectionMode::Editing,
        }
    }

    /// Highlight a cell and open it for editing
    pub fn select_and_edit(&mut self, pos: CellPosition) {
        self.active = Some(pos);
        self.editing = Some(pos);
    }

    /// Highlight a cell without editing it
    pub fn select(&mut self, pos: CellPosition) {
        self.active = Some(pos);
        self.editing = None;
    }

    /// Leave edit mode, keeping the active cell
    pub fn stop_editing(&mut self) {
        self.editing = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let selection = Selection::new();
        assert_eq!(selection.mode(), SelectionMode::Idle);
        assert_eq!(selection.active(), None);
        assert_eq!(selection.editing(), None);
    }

    #[test]
    fn test_select_and_edit_sets_both() {
        let mut selection = Selection::new();
        selection.select_and_edit(CellPosition::new(2, 3));

        assert_eq!(selection.mode(), SelectionMode::Editing);
        assert_eq!(selection.active(), selection.editing());
    }

    #[test]
    fn test_select_clears_editing() {
        let mut selection = Selection::new();
        selection.select_and_edit(CellPosition::new(0, 0));
        selection.select(CellPosition::new(1, 0));

        assert_eq!(selection.mode(), SelectionMode::Active);
        assert_eq!(selection.active(), Some(CellPosition::new(1, 0)));
        assert_eq!(selection.editing(), None);
    }

    #[test]
    fn test_stop_editing_keeps_active() {
        let mut selection = Selection::new();
        selection.select_and_edit(CellPosition::new(4, 1));
        selection.stop_editing();

        assert_eq!(selection.mode(), SelectionMode::Active);
        assert_eq!(selection.active(), Some(CellPosition::new(4, 1)));
    }
}
