//! Update functions - the only place model state changes
//!
//! Handlers are synchronous and run to completion on the host's event
//! thread, so no two transforms ever interleave. Each returns the side
//! effects the host should perform next.

mod app;
mod drag;
mod layout;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::{PaneLayout, WorkbenchModel};

/// Apply a message to the model, returning any command to execute
pub fn update(model: &mut WorkbenchModel, msg: Msg) -> Option<Cmd> {
    let cmd = match msg {
        Msg::Layout(msg) => layout::update_layout(model, msg),
        Msg::Drag(msg) => drag::update_drag(model, msg),
        Msg::App(msg) => app::update_app(model, msg),
    };

    model.layout.assert_invariants();
    cmd
}

/// Adopt a transformed layout; persist only when something changed
pub(crate) fn commit(model: &mut WorkbenchModel, next: PaneLayout) -> Option<Cmd> {
    if model.apply_layout(next) {
        Some(Cmd::layout_changed())
    } else {
        Some(Cmd::Redraw)
    }
}
