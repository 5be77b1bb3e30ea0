//! App message handlers (window events)

use crate::commands::Cmd;
use crate::layout::GridLayout;
use crate::messages::AppMsg;
use crate::model::AppModel;

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Resize(width, height) => {
            model.window_size = (width, height);
            clamp_scroll(model);
            Some(Cmd::Redraw)
        }

        AppMsg::SetMetrics {
            line_height,
            char_width,
        } => {
            model.line_height = line_height.max(1);
            model.char_width = char_width.max(1.0);
            clamp_scroll(model);
            Some(Cmd::Redraw)
        }

        AppMsg::Quit => Some(Cmd::Quit),
    }
}

/// Keep the viewport inside the content after the geometry changed
fn clamp_scroll(model: &mut AppModel) {
    model.ui.viewport = GridLayout::compute(model).viewport;
}
