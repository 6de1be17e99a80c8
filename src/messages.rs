//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::geometry::Rect;
use crate::model::{ChipHover, PaneId, PaneLayout, TabId};

/// Layout messages (structural pane/tab operations)
#[derive(Debug, Clone)]
pub enum LayoutMsg {
    /// Bring a tab into a pane and make it active, moving it out of
    /// whichever pane held it
    ActivateTab { pane_id: PaneId, tab_id: TabId },

    /// Switch the active tab within a pane that already holds it
    SetActiveTab { pane_id: PaneId, tab_id: TabId },

    /// Close a tab in one pane; an emptied pane is culled
    CloseTab { pane_id: PaneId, tab_id: TabId },

    /// Close a tab, or the whole pane when it is the pane's last tab
    /// (the tab strip's close button)
    CloseTabOrPane { pane_id: PaneId, tab_id: TabId },

    /// Drop a tab into an exact slot of a pane's tab strip
    MoveTabToPosition {
        tab_id: TabId,
        to_pane_id: PaneId,
        insert_index: usize,
    },

    /// Divide the pane at this index into two adjacent columns
    SplitPane(usize),

    /// Delete a pane entirely; refused for the last remaining pane
    RemovePane(PaneId),

    /// Discrete "move left"/"move right" by offset
    MovePaneByOffset { pane_id: PaneId, offset: isize },

    /// Reorder a pane to a new index (post-removal index space)
    MovePaneToIndex { from_index: usize, to_index: usize },

    /// Reset one pane to only the fallback tab
    CloseAllTabs(PaneId),

    /// Toolbar click: focus the pane already holding the tab, or open the
    /// tab in the focused pane
    OpenFromToolbar(TabId),

    /// Focus a pane (pointer down anywhere inside it)
    FocusPane(PaneId),

    /// Splitter gesture reported new column sizes
    ResizePanes(Vec<f32>),
}

/// Drag/drop coordinator messages, mapped 1:1 from host gesture events
#[derive(Debug, Clone)]
pub enum DragMsg {
    /// A tab chip started dragging
    TabDragStart { pane_id: PaneId, tab_id: TabId },

    /// A pane's grip handle started a native drag
    PaneDragStart { from_index: usize },

    /// Hover over a pane's body (whole-pane drop target)
    DragOverPane { pane_index: usize },

    /// Hover over the empty area of a pane's tab strip (drop at end)
    DragOverTabStrip { pane_id: PaneId },

    /// Hover over a single tab chip; insertion side comes from the
    /// pointer's position against the chip midpoint
    DragOverTab { pane_id: PaneId, hover: ChipHover },

    /// Pointer left a pane body
    DragLeavePane,

    /// Pointer left a tab strip
    DragLeaveTabStrip,

    /// Drop onto a pane. `transport` is the payload string read from the
    /// native channel at drop time, if any.
    Drop {
        pane_index: usize,
        pane_id: PaneId,
        transport: Option<String>,
    },

    /// Native drag ended or was cancelled
    DragEnd,

    /// Pointer-only reorder: pointer down on a grip handle
    PointerDown { pane_index: usize },

    /// Pointer-only reorder: window-level pointer move
    PointerMove { x: f32, y: f32 },

    /// Pointer-only reorder: pointer up or cancel
    PointerUp,

    /// Window lost focus mid-gesture
    WindowBlur,
}

/// Application-level messages (host boundary)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Host republished pane geometry after a layout pass; consumed by the
    /// pointer-mode reorder hit test
    SyncPaneBounds(Vec<Rect>),

    /// Persistence adapter handed over a decoded layout
    LayoutLoaded(PaneLayout),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Layout messages (panes, tabs, splits)
    Layout(LayoutMsg),
    /// Drag/drop coordinator messages
    Drag(DragMsg),
    /// App messages (host boundary)
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create an activate-tab message
    pub fn activate_tab(pane_id: impl Into<PaneId>, tab_id: impl Into<TabId>) -> Self {
        Msg::Layout(LayoutMsg::ActivateTab {
            pane_id: pane_id.into(),
            tab_id: tab_id.into(),
        })
    }

    /// Create a close-tab message
    pub fn close_tab(pane_id: impl Into<PaneId>, tab_id: impl Into<TabId>) -> Self {
        Msg::Layout(LayoutMsg::CloseTab {
            pane_id: pane_id.into(),
            tab_id: tab_id.into(),
        })
    }

    /// Create a split message
    pub fn split_pane(pane_index: usize) -> Self {
        Msg::Layout(LayoutMsg::SplitPane(pane_index))
    }
}
