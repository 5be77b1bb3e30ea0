//! Mouse event handling using the layout hit-test
//!
//! A left click is resolved to a `HitTarget`, which is turned into messages.
//! Clicking anywhere but another cell while editing blurs the edit input.

use gridpad::commands::Cmd;
use gridpad::grid::CommitReason;
use gridpad::layout::{GridLayout, HitTarget};
use gridpad::messages::{GridMsg, Msg, UiMsg};
use gridpad::model::AppModel;
use gridpad::update::update;

/// Messages produced by a left click on a target
pub fn click_msgs(target: HitTarget, is_editing: bool) -> Vec<Msg> {
    let mut msgs = Vec::new();

    let blur = Msg::Grid(GridMsg::Commit(CommitReason::Blur));
    match target {
        // The grid itself blurs the old input when another cell is clicked
        HitTarget::Cell { row, col } => msgs.push(Msg::Grid(GridMsg::CellClicked { row, col })),
        HitTarget::AddColumn => {
            if is_editing {
                msgs.push(blur);
            }
            msgs.push(Msg::Grid(GridMsg::AddColumn));
        }
        HitTarget::Toolbar(action) => {
            if is_editing {
                msgs.push(blur);
            }
            msgs.push(Msg::Ui(UiMsg::Toolbar(action)));
        }
        HitTarget::HeaderCell { .. }
        | HitTarget::GridEmpty
        | HitTarget::StatusBar
        | HitTarget::None => {
            if is_editing {
                msgs.push(blur);
            }
        }
    }

    msgs
}

/// Handle a left click at a window position (physical pixels)
pub fn handle_click(model: &mut AppModel, x: f64, y: f64) -> Option<Cmd> {
    let target = GridLayout::compute(model).hit_test(x as f32, y as f32);
    tracing::trace!(?target, x, y, "click");

    let mut result = None;
    for msg in click_msgs(target, model.grid.is_editing()) {
        result = update(model, msg).or(result);
    }
    result
}

/// Convert a wheel delta in lines to a scroll message
pub fn wheel_lines_msg(model: &AppModel, lines_x: f32, lines_y: f32) -> Msg {
    let step = model.line_height as f32 * 3.0;
    Msg::Ui(UiMsg::Scroll {
        dx: -lines_x * step,
        dy: -lines_y * step,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridpad::config::GridConfig;
    use gridpad::grid::{CellPosition, SelectionMode};
    use gridpad::toolbar::ToolbarAction;

    #[test]
    fn test_click_empty_area_blurs_only_while_editing() {
        assert!(click_msgs(HitTarget::None, false).is_empty());
        assert_eq!(
            click_msgs(HitTarget::GridEmpty, true),
            vec![Msg::Grid(GridMsg::Commit(CommitReason::Blur))]
        );
    }

    #[test]
    fn test_toolbar_click_while_editing() {
        assert_eq!(
            click_msgs(HitTarget::Toolbar(ToolbarAction::Export), true),
            vec![
                Msg::Grid(GridMsg::Commit(CommitReason::Blur)),
                Msg::Ui(UiMsg::Toolbar(ToolbarAction::Export)),
            ]
        );
    }

    #[test]
    fn test_click_cell_then_header() {
        let mut model = AppModel::new(1600, 900, GridConfig::default());
        let layout = GridLayout::compute(&model);
        let cell = layout.cell_rect(CellPosition::new(2, 1)).unwrap();
        handle_click(&mut model, (cell.x + 3.0) as f64, (cell.y + 3.0) as f64);

        assert_eq!(model.grid.editing(), Some(CellPosition::new(2, 1)));

        let header = layout.header_rect(1).unwrap();
        handle_click(&mut model, (header.x + 3.0) as f64, (header.y + 3.0) as f64);

        assert_eq!(model.grid.mode(), SelectionMode::Active);
        assert_eq!(model.grid.active(), Some(CellPosition::new(2, 1)));
    }

    #[test]
    fn test_click_add_column() {
        let mut model = AppModel::new(3000, 900, GridConfig::default());
        let add = GridLayout::compute(&model).add_column_rect();
        handle_click(&mut model, (add.x + 2.0) as f64, (add.y + 2.0) as f64);

        assert_eq!(model.grid.data.column_count(), 10);
    }

    #[test]
    fn test_wheel_down_scrolls_down() {
        let model = AppModel::new(800, 600, GridConfig::default());
        match wheel_lines_msg(&model, 0.0, -1.0) {
            Msg::Ui(UiMsg::Scroll { dy, .. }) => assert!(dy > 0.0),
            other => panic!("unexpected message {:?}", other),
        }
    }
}
