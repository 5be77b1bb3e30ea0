//! Edit input update functions
//!
//! Keystrokes edit the `CellInput` buffer; every change to its text is
//! forwarded to the grid as `GridMsg::InputChanged`.

use crate::commands::Cmd;
use crate::messages::{GridMsg, InputMsg};
use crate::model::AppModel;

use super::grid::update_grid;

/// Handle edit input messages
pub fn update_input(model: &mut AppModel, msg: InputMsg) -> Option<Cmd> {
    // The input only exists while a cell is being edited
    if !model.grid.is_editing() {
        return None;
    }

    let input = &mut model.ui.cell_input;
    let changed = match msg {
        InputMsg::InsertChar(ch) => {
            input.insert_char(ch);
            true
        }
        InputMsg::InsertText(text) => {
            let before = input.text().len();
            input.insert_text(&text);
            input.text().len() != before
        }
        InputMsg::DeleteBackward => input.delete_backward(),
        InputMsg::DeleteForward => input.delete_forward(),
        InputMsg::CursorLeft => {
            input.move_left();
            false
        }
        InputMsg::CursorRight => {
            input.move_right();
            false
        }
        InputMsg::CursorHome => {
            input.move_home();
            false
        }
        InputMsg::CursorEnd => {
            input.move_end();
            false
        }
    };

    if changed {
        let text = model.ui.cell_input.text().to_string();
        update_grid(model, GridMsg::InputChanged(text)).or(Some(Cmd::Redraw))
    } else {
        // Cursor moved
        Some(Cmd::Redraw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;

    fn editing_model() -> AppModel {
        let mut model = AppModel::new(1200, 800, GridConfig::default());
        update_grid(&mut model, GridMsg::CellClicked { row: 1, col: 6 });
        model
    }

    #[test]
    fn test_typing_writes_through() {
        let mut model = editing_model();
        update_input(&mut model, InputMsg::DeleteBackward);
        update_input(&mut model, InputMsg::DeleteBackward);
        update_input(&mut model, InputMsg::DeleteBackward);
        update_input(&mut model, InputMsg::DeleteBackward);
        for ch in "Top".chars() {
            update_input(&mut model, InputMsg::InsertChar(ch));
        }

        assert_eq!(model.grid.data.value(1, "priority"), "Top");
    }

    #[test]
    fn test_insert_at_cursor() {
        let mut model = editing_model();
        update_input(&mut model, InputMsg::CursorHome);
        update_input(&mut model, InputMsg::InsertChar('!'));

        assert_eq!(model.grid.data.value(1, "priority"), "!High");
    }

    #[test]
    fn test_ignored_when_not_editing() {
        let mut model = AppModel::new(1200, 800, GridConfig::default());
        assert_eq!(update_input(&mut model, InputMsg::InsertChar('x')), None);
        assert_eq!(model.ui.cell_input.text(), "");
    }

    #[test]
    fn test_paste_drops_newlines() {
        let mut model = editing_model();
        update_input(&mut model, InputMsg::InsertText("\nA\r\n".to_string()));

        assert_eq!(model.grid.data.value(1, "priority"), "HighA");
    }
}
