//! App message handlers (host boundary)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::WorkbenchModel;

/// Handle host-boundary messages
pub fn update_app(model: &mut WorkbenchModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::SyncPaneBounds(bounds) => {
            model.pane_bounds = bounds;
            None
        }

        AppMsg::LayoutLoaded(layout) => {
            if layout.is_empty() {
                return None;
            }
            if model.apply_layout(layout) {
                Some(Cmd::Redraw)
            } else {
                None
            }
        }
    }
}
