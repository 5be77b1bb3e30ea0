//! UI message handlers (toolbar, scrolling, transient messages)

use crate::commands::Cmd;
use crate::layout::GridLayout;
use crate::messages::UiMsg;
use crate::model::{AppModel, GridViewport};

/// Handle UI messages
pub fn update_ui(model: &mut AppModel, msg: UiMsg) -> Option<Cmd> {
    match msg {
        UiMsg::Toolbar(action) => {
            tracing::info!(?action, "toolbar action has no grid behaviour");
            model
                .ui
                .set_status(format!("{} is not available", action.label()));
            Some(Cmd::Redraw)
        }

        UiMsg::Scroll { dx, dy } => {
            let layout = GridLayout::compute(model);
            let current = layout.viewport;
            let next = layout.clamp_viewport(GridViewport {
                scroll_x: current.scroll_x + dx,
                scroll_y: current.scroll_y + dy,
            });
            if next == current {
                return None;
            }
            model.ui.viewport = next;
            Some(Cmd::Redraw)
        }

        UiMsg::Tick => {
            if model.ui.expire_status() {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GridConfig;
    use crate::toolbar::ToolbarAction;

    #[test]
    fn test_toolbar_action_sets_status_only() {
        let mut model = AppModel::new(1200, 800, GridConfig::default());
        update_ui(&mut model, UiMsg::Toolbar(ToolbarAction::Sort));

        assert_eq!(
            model.ui.transient_message.as_ref().map(|m| m.text.as_str()),
            Some("Sort is not available")
        );
        assert_eq!(model.grid.data.value(0, "status"), "In-process");
    }

    #[test]
    fn test_scroll_clamps_at_origin() {
        let mut model = AppModel::new(600, 400, GridConfig::default());
        assert_eq!(
            update_ui(&mut model, UiMsg::Scroll { dx: -10.0, dy: -10.0 }),
            None
        );

        update_ui(&mut model, UiMsg::Scroll { dx: 50.0, dy: 0.0 });
        assert_eq!(model.ui.viewport.scroll_x, 50.0);
    }

    #[test]
    fn test_tick_without_message() {
        let mut model = AppModel::new(600, 400, GridConfig::default());
        assert_eq!(update_ui(&mut model, UiMsg::Tick), None);
    }
}
