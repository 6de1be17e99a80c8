//! Tests for the drag/drop coordinator: native DnD protocol, payload
//! transport, and the pointer-only pane reorder

mod common;

use common::{model_with_panes, pane, pane_order, tabs_of, test_model};
use worktop::commands::Cmd;
use worktop::geometry::Rect;
use worktop::messages::{AppMsg, DragMsg, Msg};
use worktop::model::{ChipHover, DragPayload, DragState, PaneId, TabId};
use worktop::update::update;

fn drag(msg: DragMsg) -> Msg {
    Msg::Drag(msg)
}

// ============================================================================
// Drag Start / Payload Transport
// ============================================================================

#[test]
fn test_tab_drag_start_emits_transport_payload() {
    let mut model = test_model();

    let cmd = update(
        &mut model,
        drag(DragMsg::TabDragStart {
            pane_id: PaneId::from("pane-1"),
            tab_id: TabId::from("code"),
        }),
    );

    assert_eq!(cmd, Some(Cmd::SetDragPayload("tab:pane-1:code".to_string())));
    assert!(model.drag.tab_drag.is_some());
    assert!(model.drag.pane_drag.is_none());
}

#[test]
fn test_pane_drag_start_emits_transport_payload() {
    let mut model = test_model();

    let cmd = update(&mut model, drag(DragMsg::PaneDragStart { from_index: 1 }));

    assert_eq!(cmd, Some(Cmd::SetDragPayload("pane:1".to_string())));
}

#[test]
fn test_drag_start_replaces_previous_gesture_state() {
    let mut model = test_model();

    update(&mut model, drag(DragMsg::PaneDragStart { from_index: 0 }));
    update(
        &mut model,
        drag(DragMsg::TabDragStart {
            pane_id: PaneId::from("pane-2"),
            tab_id: TabId::from("topology"),
        }),
    );

    assert!(model.drag.pane_drag.is_none());
    assert!(model.drag.tab_drag.is_some());
}

// ============================================================================
// Hover Targets
// ============================================================================

#[test]
fn test_hover_over_pane_body_clears_gap_target() {
    let mut model = test_model();
    update(
        &mut model,
        drag(DragMsg::TabDragStart {
            pane_id: PaneId::from("pane-1"),
            tab_id: TabId::from("code"),
        }),
    );
    update(
        &mut model,
        drag(DragMsg::DragOverTabStrip {
            pane_id: PaneId::from("pane-2"),
        }),
    );
    assert!(model.drag.gap_target.is_some());

    update(&mut model, drag(DragMsg::DragOverPane { pane_index: 1 }));

    assert_eq!(model.drag.hover_pane, Some(1));
    assert!(model.drag.gap_target.is_none());
}

#[test]
fn test_hover_without_drag_in_flight_is_ignored() {
    let mut model = test_model();

    let cmd = update(&mut model, drag(DragMsg::DragOverPane { pane_index: 0 }));

    assert_eq!(cmd, None);
    assert_eq!(model.drag.hover_pane, None);
}

#[test]
fn test_chip_hover_picks_insertion_side_by_midpoint() {
    let mut model = model_with_panes(vec![pane("p1", &["code", "files"], "code", 100.0)]);
    update(
        &mut model,
        drag(DragMsg::TabDragStart {
            pane_id: PaneId::from("p1"),
            tab_id: TabId::from("files"),
        }),
    );

    let chip = Rect::new(100.0, 0.0, 60.0, 24.0);

    // Left of the midpoint: before the chip
    update(
        &mut model,
        drag(DragMsg::DragOverTab {
            pane_id: PaneId::from("p1"),
            hover: ChipHover {
                tab_index: 0,
                pointer_x: 105.0,
                chip,
            },
        }),
    );
    assert_eq!(model.drag.gap_target.as_ref().unwrap().insert_index, 0);

    // Right of the midpoint: after the chip
    update(
        &mut model,
        drag(DragMsg::DragOverTab {
            pane_id: PaneId::from("p1"),
            hover: ChipHover {
                tab_index: 0,
                pointer_x: 155.0,
                chip,
            },
        }),
    );
    assert_eq!(model.drag.gap_target.as_ref().unwrap().insert_index, 1);
}

#[test]
fn test_strip_hover_targets_end_of_strip() {
    let mut model = model_with_panes(vec![pane("p1", &["code", "files", "docs"], "code", 100.0)]);
    update(
        &mut model,
        drag(DragMsg::TabDragStart {
            pane_id: PaneId::from("p1"),
            tab_id: TabId::from("code"),
        }),
    );

    update(
        &mut model,
        drag(DragMsg::DragOverTabStrip {
            pane_id: PaneId::from("p1"),
        }),
    );

    assert_eq!(model.drag.gap_target.as_ref().unwrap().insert_index, 3);
}

// ============================================================================
// Drop
// ============================================================================

#[test]
fn test_drop_on_pane_body_activates_tab_there() {
    let mut model = test_model();
    update(
        &mut model,
        drag(DragMsg::TabDragStart {
            pane_id: PaneId::from("pane-1"),
            tab_id: TabId::from("code"),
        }),
    );

    let cmd = update(
        &mut model,
        drag(DragMsg::Drop {
            pane_index: 1,
            pane_id: PaneId::from("pane-2"),
            transport: Some("tab:pane-1:code".to_string()),
        }),
    );

    assert_eq!(model.layout.len(), 1);
    assert_eq!(tabs_of(&model, 0), vec!["topology", "code"]);
    assert_eq!(model.focused_pane, PaneId::from("pane-2"));
    assert_eq!(cmd, Some(Cmd::layout_changed()));
    // All transient state cleared
    assert_eq!(model.drag, DragState::default());
}

#[test]
fn test_drop_into_gap_uses_exact_position() {
    let mut model = model_with_panes(vec![pane("p1", &["x", "y", "z"], "x", 100.0)]);
    update(
        &mut model,
        drag(DragMsg::TabDragStart {
            pane_id: PaneId::from("p1"),
            tab_id: TabId::from("x"),
        }),
    );
    // Hover recorded a gap before "z"
    update(
        &mut model,
        drag(DragMsg::DragOverTab {
            pane_id: PaneId::from("p1"),
            hover: ChipHover {
                tab_index: 2,
                pointer_x: 0.0,
                chip: Rect::new(0.0, 0.0, 60.0, 24.0),
            },
        }),
    );

    update(
        &mut model,
        drag(DragMsg::Drop {
            pane_index: 0,
            pane_id: PaneId::from("p1"),
            transport: Some("tab:p1:x".to_string()),
        }),
    );

    assert_eq!(tabs_of(&model, 0), vec!["y", "x", "z"]);
}

#[test]
fn test_gap_for_other_pane_does_not_apply() {
    let mut model = model_with_panes(vec![
        pane("p1", &["code", "files"], "code", 50.0),
        pane("p2", &["topology"], "topology", 50.0),
    ]);
    update(
        &mut model,
        drag(DragMsg::TabDragStart {
            pane_id: PaneId::from("p1"),
            tab_id: TabId::from("files"),
        }),
    );
    update(
        &mut model,
        drag(DragMsg::DragOverTabStrip {
            pane_id: PaneId::from("p1"),
        }),
    );

    // Drop lands on p2, whose gap was never hovered: whole-pane semantics
    update(
        &mut model,
        drag(DragMsg::Drop {
            pane_index: 1,
            pane_id: PaneId::from("p2"),
            transport: Some("tab:p1:files".to_string()),
        }),
    );

    assert_eq!(tabs_of(&model, 1), vec!["topology", "files"]);
}

#[test]
fn test_drop_falls_back_to_refs_when_transport_unreadable() {
    let mut model = test_model();
    update(
        &mut model,
        drag(DragMsg::TabDragStart {
            pane_id: PaneId::from("pane-1"),
            tab_id: TabId::from("code"),
        }),
    );

    update(
        &mut model,
        drag(DragMsg::Drop {
            pane_index: 1,
            pane_id: PaneId::from("pane-2"),
            transport: None,
        }),
    );

    assert_eq!(tabs_of(&model, 0), vec!["topology", "code"]);
}

#[test]
fn test_undecodable_drop_with_no_refs_is_cancelled() {
    let mut model = test_model();
    let before = model.layout.clone();

    let cmd = update(
        &mut model,
        drag(DragMsg::Drop {
            pane_index: 0,
            pane_id: PaneId::from("pane-1"),
            transport: Some("???".to_string()),
        }),
    );

    assert_eq!(model.layout, before);
    assert_eq!(cmd, Some(Cmd::Redraw));
}

#[test]
fn test_drop_of_unregistered_tab_is_cancelled() {
    let mut model = test_model();
    let before = model.layout.clone();

    update(
        &mut model,
        drag(DragMsg::Drop {
            pane_index: 0,
            pane_id: PaneId::from("pane-1"),
            transport: Some("tab:pane-9:intruder".to_string()),
        }),
    );

    assert_eq!(model.layout, before);
}

#[test]
fn test_pane_drop_reorders_columns() {
    let mut model = model_with_panes(vec![
        pane("a", &["code"], "code", 34.0),
        pane("b", &["topology"], "topology", 33.0),
        pane("c", &["files"], "files", 33.0),
    ]);
    update(&mut model, drag(DragMsg::PaneDragStart { from_index: 0 }));

    update(
        &mut model,
        drag(DragMsg::Drop {
            pane_index: 2,
            pane_id: PaneId::from("c"),
            transport: Some("pane:0".to_string()),
        }),
    );

    assert_eq!(pane_order(&model), vec!["b", "c", "a"]);
}

// ============================================================================
// Gesture Teardown
// ============================================================================

#[test]
fn test_drag_end_clears_all_transient_state() {
    let mut model = test_model();
    update(
        &mut model,
        drag(DragMsg::TabDragStart {
            pane_id: PaneId::from("pane-1"),
            tab_id: TabId::from("code"),
        }),
    );
    update(&mut model, drag(DragMsg::DragOverPane { pane_index: 1 }));
    update(
        &mut model,
        drag(DragMsg::DragOverTabStrip {
            pane_id: PaneId::from("pane-2"),
        }),
    );

    update(&mut model, drag(DragMsg::DragEnd));

    assert_eq!(model.drag, DragState::default());
}

#[test]
fn test_window_blur_clears_gesture_mid_flight() {
    let mut model = test_model();
    update(&mut model, drag(DragMsg::PointerDown { pane_index: 0 }));

    update(&mut model, drag(DragMsg::WindowBlur));

    assert_eq!(model.drag, DragState::default());
}

// ============================================================================
// Pointer-Only Pane Reorder
// ============================================================================

fn three_pane_model_with_bounds() -> worktop::model::WorkbenchModel {
    let mut model = model_with_panes(vec![
        pane("a", &["code"], "code", 34.0),
        pane("b", &["topology"], "topology", 33.0),
        pane("c", &["files"], "files", 33.0),
    ]);
    update(
        &mut model,
        Msg::App(AppMsg::SyncPaneBounds(vec![
            Rect::new(0.0, 0.0, 100.0, 100.0),
            Rect::new(100.0, 0.0, 100.0, 100.0),
            Rect::new(200.0, 0.0, 100.0, 100.0),
        ])),
    );
    model
}

#[test]
fn test_pointer_reorder_single_step() {
    let mut model = three_pane_model_with_bounds();

    update(&mut model, drag(DragMsg::PointerDown { pane_index: 0 }));
    update(&mut model, drag(DragMsg::PointerMove { x: 150.0, y: 50.0 }));

    assert_eq!(pane_order(&model), vec!["b", "a", "c"]);
    // Tracked source index follows the moved pane
    assert_eq!(model.drag.pointer_drag.unwrap().from_index, 1);
}

#[test]
fn test_pointer_reorder_chains_across_panes() {
    let mut model = three_pane_model_with_bounds();

    update(&mut model, drag(DragMsg::PointerDown { pane_index: 0 }));
    // Each move already reflects the prior move's result
    update(&mut model, drag(DragMsg::PointerMove { x: 150.0, y: 50.0 }));
    update(&mut model, drag(DragMsg::PointerMove { x: 250.0, y: 50.0 }));

    assert_eq!(pane_order(&model), vec!["b", "c", "a"]);
    assert_eq!(model.drag.pointer_drag.unwrap().from_index, 2);

    // And back again
    update(&mut model, drag(DragMsg::PointerMove { x: 50.0, y: 50.0 }));
    assert_eq!(pane_order(&model), vec!["a", "b", "c"]);
}

#[test]
fn test_pointer_move_over_occupied_pane_is_noop() {
    let mut model = three_pane_model_with_bounds();
    update(&mut model, drag(DragMsg::PointerDown { pane_index: 1 }));
    let before = model.layout.clone();

    let cmd = update(&mut model, drag(DragMsg::PointerMove { x: 150.0, y: 50.0 }));

    assert_eq!(model.layout, before);
    assert_eq!(cmd, None);
}

#[test]
fn test_pointer_move_outside_any_pane_is_ignored() {
    let mut model = three_pane_model_with_bounds();
    update(&mut model, drag(DragMsg::PointerDown { pane_index: 0 }));
    let before = model.layout.clone();

    update(&mut model, drag(DragMsg::PointerMove { x: 999.0, y: 50.0 }));

    assert_eq!(model.layout, before);
    assert_eq!(model.drag.pointer_drag.unwrap().from_index, 0);
}

#[test]
fn test_pointer_up_ends_gesture() {
    let mut model = three_pane_model_with_bounds();
    update(&mut model, drag(DragMsg::PointerDown { pane_index: 0 }));
    update(&mut model, drag(DragMsg::PointerMove { x: 150.0, y: 50.0 }));

    update(&mut model, drag(DragMsg::PointerUp));

    assert_eq!(model.drag, DragState::default());
    // The applied reorder stays; there is nothing to roll back
    assert_eq!(pane_order(&model), vec!["b", "a", "c"]);
}

#[test]
fn test_pointer_move_without_gesture_is_ignored() {
    let mut model = three_pane_model_with_bounds();
    let before = model.layout.clone();

    let cmd = update(&mut model, drag(DragMsg::PointerMove { x: 150.0, y: 50.0 }));

    assert_eq!(cmd, None);
    assert_eq!(model.layout, before);
}

// ============================================================================
// Payload Codec (transport grammar)
// ============================================================================

#[test]
fn test_payload_round_trips_through_transport_strings() {
    let tab = DragPayload::Tab {
        from_pane: PaneId::from("pane-2"),
        tab: TabId::from("docs"),
    };
    assert_eq!(DragPayload::parse(&tab.encode()), Some(tab));

    let pane = DragPayload::Pane { from_index: 7 };
    assert_eq!(DragPayload::parse(&pane.encode()), Some(pane));
}

#[test]
fn test_tab_ids_containing_colons_survive_transport() {
    let payload = DragPayload::parse("tab:pane-1:preview:doc:3").unwrap();
    assert_eq!(
        payload,
        DragPayload::Tab {
            from_pane: PaneId::from("pane-1"),
            tab: TabId::from("preview:doc:3"),
        }
    );
}
