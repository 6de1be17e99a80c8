//! Layout message handlers (panes, tabs, splits)

use crate::commands::Cmd;
use crate::messages::LayoutMsg;
use crate::model::{PaneId, TabId, WorkbenchModel};

/// Handle layout messages
pub fn update_layout(model: &mut WorkbenchModel, msg: LayoutMsg) -> Option<Cmd> {
    match msg {
        LayoutMsg::ActivateTab { pane_id, tab_id } => {
            let next = model.engine.activate_tab(&model.layout, &pane_id, &tab_id);
            super::commit(model, next)
        }

        LayoutMsg::SetActiveTab { pane_id, tab_id } => {
            let next = model
                .engine
                .set_active_tab(&model.layout, &pane_id, &tab_id);
            super::commit(model, next)
        }

        LayoutMsg::CloseTab { pane_id, tab_id } => {
            let next = model.engine.close_tab(&model.layout, &pane_id, &tab_id);
            super::commit(model, next)
        }

        LayoutMsg::CloseTabOrPane { pane_id, tab_id } => {
            close_tab_or_pane(model, pane_id, tab_id)
        }

        LayoutMsg::MoveTabToPosition {
            tab_id,
            to_pane_id,
            insert_index,
        } => {
            let next =
                model
                    .engine
                    .move_tab_to_position(&model.layout, &tab_id, &to_pane_id, insert_index);
            super::commit(model, next)
        }

        LayoutMsg::SplitPane(pane_index) => {
            let (next, new_pane) = model.engine.split_pane(&model.layout, pane_index);
            let cmd = super::commit(model, next);
            if let Some(id) = new_pane {
                model.focused_pane = id;
            }
            cmd
        }

        LayoutMsg::RemovePane(pane_id) => {
            let next = model.engine.remove_pane(&model.layout, &pane_id);
            super::commit(model, next)
        }

        LayoutMsg::MovePaneByOffset { pane_id, offset } => {
            let next = model
                .engine
                .move_pane_by_offset(&model.layout, &pane_id, offset);
            super::commit(model, next)
        }

        LayoutMsg::MovePaneToIndex {
            from_index,
            to_index,
        } => {
            let next = model
                .engine
                .move_pane_to_index(&model.layout, from_index, to_index);
            super::commit(model, next)
        }

        LayoutMsg::CloseAllTabs(pane_id) => {
            let next = model.engine.close_all_tabs(&model.layout, &pane_id);
            super::commit(model, next)
        }

        LayoutMsg::OpenFromToolbar(tab_id) => open_from_toolbar(model, tab_id),

        LayoutMsg::FocusPane(pane_id) => {
            if model.layout.pane(&pane_id).is_some() {
                model.focused_pane = pane_id;
            }
            Some(Cmd::Redraw)
        }

        LayoutMsg::ResizePanes(widths) => {
            let next = model
                .engine
                .resize(&model.layout, &widths, model.config.min_pane_percent);
            super::commit(model, next)
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// The tab strip's close button: closes the tab, or the whole pane when
/// the tab is the pane's last one (and another pane remains).
fn close_tab_or_pane(model: &mut WorkbenchModel, pane_id: PaneId, tab_id: TabId) -> Option<Cmd> {
    let Some(pane) = model.layout.pane(&pane_id) else {
        return Some(Cmd::Redraw);
    };

    let next = if pane.tabs.len() > 1 {
        model.engine.close_tab(&model.layout, &pane_id, &tab_id)
    } else {
        model.engine.remove_pane(&model.layout, &pane_id)
    };
    super::commit(model, next)
}

/// Toolbar click on a tab: focus the pane already holding it (and make it
/// active there), or open it in the focused pane.
fn open_from_toolbar(model: &mut WorkbenchModel, tab_id: TabId) -> Option<Cmd> {
    if let Some((pane_index, _)) = model.layout.find_tab(&tab_id) {
        let pane_id = model.layout.panes[pane_index].id.clone();
        model.focused_pane = pane_id.clone();
        let next = model.engine.set_active_tab(&model.layout, &pane_id, &tab_id);
        return super::commit(model, next);
    }

    let target = model
        .focused()
        .map(|pane| pane.id.clone())
        .or_else(|| model.layout.panes.first().map(|pane| pane.id.clone()));
    let Some(target) = target else {
        return Some(Cmd::Redraw);
    };

    model.focused_pane = target.clone();
    let next = model.engine.activate_tab(&model.layout, &target, &tab_id);
    super::commit(model, next)
}
