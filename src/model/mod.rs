//! Model types for the workbench shell

pub mod drag;
pub mod pane;
pub mod workbench;

pub use drag::{
    ChipHover, DragPayload, DragState, GapTarget, PaneDrag, PointerDrag, TabDrag,
    DRAG_PAYLOAD_MIME,
};
pub use pane::{LayoutEngine, Pane, PaneId, PaneLayout, TabId, DEFAULT_MAX_COLUMNS};
pub use workbench::WorkbenchModel;
