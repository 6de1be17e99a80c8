//! Drag/drop coordinator
//!
//! A state machine over the transient refs in [`DragState`]: native
//! drag-and-drop for tabs and panes, plus a pointer-only reorder mode for
//! environments without native drag events (grip handle, touch).
//!
//! The payload is written into the native transport at drag-start, because
//! the transport is only readable again at drop; hover feedback therefore
//! runs off the in-memory refs. At drop the freshly read transport string
//! wins, with the refs as fallback; both paths agree by construction.

use crate::commands::Cmd;
use crate::geometry;
use crate::messages::DragMsg;
use crate::model::{
    DragPayload, GapTarget, PaneDrag, PaneId, PointerDrag, TabDrag, WorkbenchModel,
};

/// Handle drag/drop coordinator messages
pub fn update_drag(model: &mut WorkbenchModel, msg: DragMsg) -> Option<Cmd> {
    match msg {
        DragMsg::TabDragStart { pane_id, tab_id } => {
            model.drag.clear();
            model.drag.tab_drag = Some(TabDrag {
                from_pane: pane_id.clone(),
                tab: tab_id.clone(),
            });
            let payload = DragPayload::Tab {
                from_pane: pane_id,
                tab: tab_id,
            }
            .encode();
            tracing::debug!(%payload, "tab drag started");
            Some(Cmd::SetDragPayload(payload))
        }

        DragMsg::PaneDragStart { from_index } => {
            model.drag.clear();
            model.drag.pane_drag = Some(PaneDrag { from_index });
            let payload = DragPayload::Pane { from_index }.encode();
            tracing::debug!(%payload, "pane drag started");
            Some(Cmd::SetDragPayload(payload))
        }

        DragMsg::DragOverPane { pane_index } => {
            if !model.drag.in_flight() {
                return None;
            }
            // The whole-pane target is less specific than a tab-strip gap
            model.drag.gap_target = None;
            if model.drag.hover_pane == Some(pane_index) {
                return None;
            }
            model.drag.hover_pane = Some(pane_index);
            Some(Cmd::Redraw)
        }

        DragMsg::DragOverTabStrip { pane_id } => {
            if model.drag.tab_drag.is_none() {
                return None;
            }
            let insert_index = model.layout.pane(&pane_id)?.tabs.len();
            model.drag.gap_target = Some(GapTarget {
                pane_id,
                insert_index,
            });
            Some(Cmd::Redraw)
        }

        DragMsg::DragOverTab { pane_id, hover } => {
            if model.drag.tab_drag.is_none() {
                return None;
            }
            // Re-evaluated on every hover tick; the pointer moves continuously
            let insert_index =
                geometry::insertion_index(hover.tab_index, hover.pointer_x, &hover.chip);
            model.drag.gap_target = Some(GapTarget {
                pane_id,
                insert_index,
            });
            Some(Cmd::Redraw)
        }

        DragMsg::DragLeavePane => {
            model.drag.hover_pane = None;
            Some(Cmd::Redraw)
        }

        DragMsg::DragLeaveTabStrip => {
            model.drag.gap_target = None;
            Some(Cmd::Redraw)
        }

        DragMsg::Drop {
            pane_index,
            pane_id,
            transport,
        } => handle_drop(model, pane_index, pane_id, transport),

        // A gesture that leaves the viewport must never leave a stuck
        // highlight, so both clear everything unconditionally.
        DragMsg::DragEnd | DragMsg::WindowBlur => {
            if !model.drag.in_flight() && model.drag.hover_pane.is_none() {
                return None;
            }
            model.drag.clear();
            Some(Cmd::Redraw)
        }

        DragMsg::PointerDown { pane_index } => {
            if pane_index >= model.layout.len() {
                return None;
            }
            model.drag.clear();
            model.drag.pointer_drag = Some(PointerDrag {
                from_index: pane_index,
            });
            model.drag.pane_drag = Some(PaneDrag {
                from_index: pane_index,
            });
            model.drag.hover_pane = Some(pane_index);
            Some(Cmd::Redraw)
        }

        DragMsg::PointerMove { x, y } => pointer_move(model, x, y),

        DragMsg::PointerUp => {
            if model.drag.pointer_drag.is_none() {
                return None;
            }
            model.drag.clear();
            Some(Cmd::Redraw)
        }
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Complete a native drop: decode what was dragged and dispatch it.
///
/// An undecodable payload is a cancelled gesture, not an error; so is a
/// tab id the host never registered.
fn handle_drop(
    model: &mut WorkbenchModel,
    pane_index: usize,
    pane_id: PaneId,
    transport: Option<String>,
) -> Option<Cmd> {
    let payload = transport
        .as_deref()
        .and_then(DragPayload::parse)
        .or_else(|| payload_from_refs(model));
    let gap = model.drag.gap_target.clone();
    model.drag.clear();

    match payload {
        Some(DragPayload::Pane { from_index }) => {
            let next = model
                .engine
                .move_pane_to_index(&model.layout, from_index, pane_index);
            super::commit(model, next)
        }

        Some(DragPayload::Tab { tab, .. }) => {
            if !model.registry.contains(&tab) {
                tracing::debug!(tab = %tab, "dropped tab is not registered, ignoring");
                return Some(Cmd::Redraw);
            }
            if model.layout.pane(&pane_id).is_some() {
                model.focused_pane = pane_id.clone();
            }

            // A gap recorded for this pane is more precise than its body
            let next = match gap {
                Some(gap) if gap.pane_id == pane_id => model.engine.move_tab_to_position(
                    &model.layout,
                    &tab,
                    &pane_id,
                    gap.insert_index,
                ),
                _ => model.engine.activate_tab(&model.layout, &pane_id, &tab),
            };
            super::commit(model, next)
        }

        None => Some(Cmd::Redraw),
    }
}

/// Fallback payload from the in-memory refs, for drops where the transport
/// string failed to decode
fn payload_from_refs(model: &WorkbenchModel) -> Option<DragPayload> {
    if let Some(pane) = model.drag.pane_drag {
        return Some(DragPayload::Pane {
            from_index: pane.from_index,
        });
    }
    model.drag.tab_drag.clone().map(|drag| DragPayload::Tab {
        from_pane: drag.from_pane,
        tab: drag.tab,
    })
}

/// Pointer-only pane reorder.
///
/// Hit-tests the host-synced pane bounds and issues one
/// `move_pane_to_index` per crossed target, updating the tracked source
/// index in the same step, otherwise the next hit test would desync from
/// the already-applied move.
fn pointer_move(model: &mut WorkbenchModel, x: f32, y: f32) -> Option<Cmd> {
    let pointer = model.drag.pointer_drag?;
    let hit = geometry::pane_at_point(&model.pane_bounds, x, y)?;
    if hit >= model.layout.len() {
        // Stale bounds from before a structural change
        return None;
    }

    if hit == pointer.from_index {
        // Rapid-fire moves over the occupied pane are no-ops
        if model.drag.hover_pane == Some(hit) {
            return None;
        }
        model.drag.hover_pane = Some(hit);
        return Some(Cmd::Redraw);
    }

    let next = model
        .engine
        .move_pane_to_index(&model.layout, pointer.from_index, hit);
    let changed = model.apply_layout(next);

    model.drag.pointer_drag = Some(PointerDrag { from_index: hit });
    model.drag.pane_drag = Some(PaneDrag { from_index: hit });
    model.drag.hover_pane = Some(hit);

    if changed {
        Some(Cmd::layout_changed())
    } else {
        Some(Cmd::Redraw)
    }
}
