//! Drag payload encoding and transient drag state
//!
//! The native drag-and-drop transport only carries strings, so what is
//! being dragged (a tab or a whole pane) travels as a tagged payload
//! string. Encoding and decoding live here, behind one pair of functions;
//! anything malformed decodes to `None` and is treated as a cancelled
//! gesture, never an error.

use super::pane::{PaneId, TabId};
use crate::geometry::Rect;

/// Custom transport type under which the payload string is written.
/// The same string is also written under `text/plain` as a fallback.
pub const DRAG_PAYLOAD_MIME: &str = "application/x-worktop-drag";

// ============================================================================
// Payload
// ============================================================================

/// What a drag gesture carries: a tab leaving a pane, or a whole pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragPayload {
    /// A whole column, identified by its index at drag-start
    Pane { from_index: usize },
    /// A tab, identified by id and the pane it left
    Tab { from_pane: PaneId, tab: TabId },
}

impl DragPayload {
    /// Serialize to the transport string: `pane:<index>` or
    /// `tab:<paneId>:<tabId>`.
    pub fn encode(&self) -> String {
        match self {
            DragPayload::Pane { from_index } => format!("pane:{from_index}"),
            DragPayload::Tab { from_pane, tab } => format!("tab:{from_pane}:{tab}"),
        }
    }

    /// Parse a transport string. Returns `None` for anything malformed.
    ///
    /// Tab ids may themselves contain `:`, so everything after the second
    /// colon is the id, taken verbatim.
    pub fn parse(raw: &str) -> Option<DragPayload> {
        let value = raw.trim();
        if value.is_empty() {
            return None;
        }

        if let Some(index) = value.strip_prefix("pane:") {
            let from_index = index.parse::<usize>().ok()?;
            return Some(DragPayload::Pane { from_index });
        }

        if let Some(rest) = value.strip_prefix("tab:") {
            let (pane, tab) = rest.split_once(':')?;
            if pane.is_empty() || tab.is_empty() {
                return None;
            }
            return Some(DragPayload::Tab {
                from_pane: PaneId::from(pane),
                tab: TabId::from(tab),
            });
        }

        None
    }
}

// ============================================================================
// Transient drag state
// ============================================================================

/// In-memory record of a tab drag, kept alongside the transport string
/// because the transport is unreadable during hover in native DnD.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabDrag {
    pub from_pane: PaneId,
    pub tab: TabId,
}

/// In-memory record of a native pane drag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneDrag {
    pub from_index: usize,
}

/// Pointer-only pane reorder (grip handle, no native DnD).
/// `from_index` tracks the dragged pane's current slot and is updated
/// transactionally with every applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDrag {
    pub from_index: usize,
}

/// A precise drop slot between two tabs in a pane's tab strip
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapTarget {
    pub pane_id: PaneId,
    pub insert_index: usize,
}

/// All transient drag state owned by the coordinator.
///
/// Cleared unconditionally on drag end, cancel, and window blur, so a
/// gesture that leaves the viewport never leaves a stuck highlight.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DragState {
    pub tab_drag: Option<TabDrag>,
    pub pane_drag: Option<PaneDrag>,
    pub pointer_drag: Option<PointerDrag>,
    /// Pane currently highlighted as a whole-pane drop target
    pub hover_pane: Option<usize>,
    /// Gap-level drop target; more specific than `hover_pane`
    pub gap_target: Option<GapTarget>,
}

impl DragState {
    /// Whether any drag gesture is in flight
    pub fn in_flight(&self) -> bool {
        self.tab_drag.is_some() || self.pane_drag.is_some() || self.pointer_drag.is_some()
    }

    /// Drop every ref and target
    pub fn clear(&mut self) {
        *self = DragState::default();
    }
}

/// Geometry carried by a hover event over a single tab chip
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChipHover {
    pub tab_index: usize,
    pub pointer_x: f32,
    pub chip: Rect,
}

// ============================================================================
// Tests
// ============================================================================
