//! Arrow-key navigation for the grid
//!
//! Movement always wraps around the grid edges, computed against the live
//! row and column counts at the time of each key.

use super::model::CellPosition;
use super::GridState;

/// Keys the grid reacts to while it has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    /// Anything else; never changes state
    Other,
}

/// Step one cell in the direction of `key`, wrapping at the edges
///
/// Returns `None` for non-arrow keys or an empty grid.
pub fn wrap_step(
    pos: CellPosition,
    key: NavKey,
    row_count: usize,
    column_count: usize,
) -> Option<CellPosition> {
    if row_count == 0 || column_count == 0 {
        return None;
    }

    let CellPosition { row, col } = pos;
    let next = match key {
        NavKey::ArrowDown => CellPosition::new((row + 1) % row_count, col),
        NavKey::ArrowUp => CellPosition::new((row + row_count - 1) % row_count, col),
        NavKey::ArrowRight => CellPosition::new(row, (col + 1) % column_count),
        NavKey::ArrowLeft => CellPosition::new(row, (col + column_count - 1) % column_count),
        NavKey::Other => return None,
    };
    Some(next)
}

impl GridState {
    /// Move the active cell for a key press
    ///
    /// No-op when no cell is active. Any movement exits edit mode.
    /// Returns true if the selection changed.
    pub fn on_key(&mut self, key: NavKey) -> bool {
        let Some(active) = self.selection.active() else {
            return false;
        };

        // A stale coordinate from a shrunk grid would wrap from the wrong place
        let active = CellPosition::new(
            active.row.min(self.data.row_count().saturating_sub(1)),
            active.col.min(self.data.column_count().saturating_sub(1)),
        );

        match wrap_step(active, key, self.data.row_count(), self.data.column_count()) {
            Some(next) => {
                self.selection.select(next);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_step_down_wraps_to_top() {
        let pos = CellPosition::new(4, 2);
        assert_eq!(
            wrap_step(pos, NavKey::ArrowDown, 5, 3),
            Some(CellPosition::new(0, 2))
        );
    }

    #[test]
    fn test_wrap_step_up_wraps_to_bottom() {
        let pos = CellPosition::new(0, 1);
        assert_eq!(
            wrap_step(pos, NavKey::ArrowUp, 5, 3),
            Some(CellPosition::new(4, 1))
        );
    }

    #[test]
    fn test_wrap_step_horizontal() {
        let pos = CellPosition::new(1, 2);
        assert_eq!(
            wrap_step(pos, NavKey::ArrowRight, 5, 3),
            Some(CellPosition::new(1, 0))
        );
        assert_eq!(
            wrap_step(CellPosition::new(1, 0), NavKey::ArrowLeft, 5, 3),
            Some(CellPosition::new(1, 2))
        );
    }

    #[test]
    fn test_wrap_step_single_cell() {
        let pos = CellPosition::new(0, 0);
        for key in [
            NavKey::ArrowUp,
            NavKey::ArrowDown,
            NavKey::ArrowLeft,
            NavKey::ArrowRight,
        ] {
            assert_eq!(wrap_step(pos, key, 1, 1), Some(pos));
        }
    }

    #[test]
    fn test_wrap_step_ignores_other_keys_and_empty_grid() {
        let pos = CellPosition::new(0, 0);
        assert_eq!(wrap_step(pos, NavKey::Other, 5, 3), None);
        assert_eq!(wrap_step(pos, NavKey::ArrowDown, 0, 3), None);
        assert_eq!(wrap_step(pos, NavKey::ArrowRight, 5, 0), None);
    }
}
