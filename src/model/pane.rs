//! Pane and tab data model plus the layout engine
//!
//! A workspace is a row of resizable columns ("panes"), each holding an
//! ordered set of tabs with exactly one active tab. All structural changes
//! go through [`LayoutEngine`], whose transforms take a layout by reference
//! and return a new, already-valid layout. Callers never need a separate
//! validation pass.

use std::fmt;

// ============================================================================
// Identifiers
// ============================================================================

/// Opaque identifier for a tab.
///
/// The engine treats tab ids as tokens: the host declares which ids exist
/// (and what they render as) in its [`TabRegistry`](crate::registry::TabRegistry).
/// Ids may contain any character, including `:`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TabId(pub String);

impl TabId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TabId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Unique identifier for a pane within one layout
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PaneId(pub String);

impl PaneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Generate a fresh id of the form `pane-<n>`, one past the highest
    /// numeric suffix already present in the layout.
    pub fn next_in(layout: &PaneLayout) -> PaneId {
        let max = layout
            .panes
            .iter()
            .filter_map(|pane| pane.id.as_str().strip_prefix("pane-"))
            .filter_map(|suffix| suffix.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        PaneId(format!("pane-{}", max + 1))
    }
}

impl fmt::Display for PaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PaneId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// ============================================================================
// Panes
// ============================================================================

/// One resizable column of the workspace
#[derive(Debug, Clone, PartialEq)]
pub struct Pane {
    pub id: PaneId,
    /// Ordered tabs; no duplicates within a pane
    pub tabs: Vec<TabId>,
    /// Always an element of `tabs`
    pub active_tab: TabId,
    /// Share of the horizontal space, as a percentage; all panes sum to 100
    pub width: f32,
}

impl Pane {
    /// Create a single-tab pane
    pub fn new(id: PaneId, tab: TabId, width: f32) -> Self {
        Self {
            id,
            active_tab: tab.clone(),
            tabs: vec![tab],
            width,
        }
    }

    pub fn contains(&self, tab: &TabId) -> bool {
        self.tabs.contains(tab)
    }

    /// Re-point `active_tab` at `tabs[0]` when it no longer names a member.
    /// Panes with no tabs are left for the caller to cull.
    fn with_resolved_active(mut self) -> Pane {
        if !self.tabs.is_empty() && !self.tabs.contains(&self.active_tab) {
            self.active_tab = self.tabs[0].clone();
        }
        self
    }

    /// Remove `tab` from this pane, keeping the active tab valid.
    /// An emptied pane gets `fallback` as a placeholder active tab; the
    /// engine culls it before the layout is observable.
    fn without_tab(&self, tab: &TabId, fallback: &TabId) -> Pane {
        let tabs: Vec<TabId> = self.tabs.iter().filter(|t| *t != tab).cloned().collect();
        let active_tab = if tabs.contains(&self.active_tab) {
            self.active_tab.clone()
        } else {
            tabs.first().cloned().unwrap_or_else(|| fallback.clone())
        };
        Pane {
            id: self.id.clone(),
            tabs,
            active_tab,
            width: self.width,
        }
    }
}

// ============================================================================
// Layout
// ============================================================================

/// The ordered list of all panes, left to right.
///
/// This is the complete, serializable state of the workspace shell. It is
/// only ever replaced wholesale with the result of a [`LayoutEngine`]
/// transform, never mutated in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneLayout {
    pub panes: Vec<Pane>,
}

impl PaneLayout {
    pub fn len(&self) -> usize {
        self.panes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.panes.is_empty()
    }

    pub fn pane(&self, id: &PaneId) -> Option<&Pane> {
        self.panes.iter().find(|pane| &pane.id == id)
    }

    pub fn index_of(&self, id: &PaneId) -> Option<usize> {
        self.panes.iter().position(|pane| &pane.id == id)
    }

    /// Locate a tab anywhere in the layout.
    /// Returns the holding pane's index and the tab's index within it.
    pub fn find_tab(&self, tab: &TabId) -> Option<(usize, usize)> {
        self.panes.iter().enumerate().find_map(|(pane_index, pane)| {
            pane.tabs
                .iter()
                .position(|t| t == tab)
                .map(|tab_index| (pane_index, tab_index))
        })
    }

    /// Whether any pane holds the tab
    pub fn has_tab(&self, tab: &TabId) -> bool {
        self.find_tab(tab).is_some()
    }
}

// ============================================================================
// Debug Invariant Validation
// ============================================================================

impl PaneLayout {
    /// Validate structural invariants in debug builds.
    ///
    /// Checks that the layout is non-empty, no pane has zero tabs or
    /// duplicate tabs, every active tab is a member of its pane, and the
    /// widths are finite and sum to 100.
    ///
    /// Panics in debug builds if any invariant is violated. A violation here
    /// is a defect in the engine, not a recoverable condition.
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        use std::collections::HashSet;

        assert!(!self.panes.is_empty(), "layout has no panes");

        for pane in &self.panes {
            assert!(!pane.tabs.is_empty(), "pane {:?} has no tabs", pane.id);
            assert!(
                pane.tabs.contains(&pane.active_tab),
                "pane {:?} active tab {:?} is not a member of its tabs",
                pane.id,
                pane.active_tab
            );

            let mut seen = HashSet::new();
            for tab in &pane.tabs {
                assert!(
                    seen.insert(tab),
                    "pane {:?} holds tab {:?} more than once",
                    pane.id,
                    tab
                );
            }

            assert!(
                pane.width.is_finite() && pane.width >= 0.0,
                "pane {:?} has width {}",
                pane.id,
                pane.width
            );
        }

        let total: f32 = self.panes.iter().map(|pane| pane.width).sum();
        assert!(
            (total - 100.0).abs() < 1e-3,
            "pane widths sum to {total}, expected 100"
        );
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}

// ============================================================================
// Layout Engine
// ============================================================================

/// Default cap on the number of columns
pub const DEFAULT_MAX_COLUMNS: usize = 4;

/// Pure, synchronous transforms over [`PaneLayout`].
///
/// Every operation returns a new layout that already satisfies all
/// invariants. Operations referencing a pane or tab id that does not exist
/// return the input unchanged: drag/drop races (a pane closed mid-gesture)
/// are expected and must degrade silently.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    fallback_tab: TabId,
    max_columns: usize,
}

impl LayoutEngine {
    pub fn new(fallback_tab: TabId) -> Self {
        Self {
            fallback_tab,
            max_columns: DEFAULT_MAX_COLUMNS,
        }
    }

    pub fn with_max_columns(mut self, max_columns: usize) -> Self {
        self.max_columns = max_columns.max(1);
        self
    }

    /// The tab a reseeded pane receives when its last tab is closed
    pub fn fallback_tab(&self) -> &TabId {
        &self.fallback_tab
    }

    pub fn max_columns(&self) -> usize {
        self.max_columns
    }

    /// The layout a workspace gets when nothing was persisted:
    /// two panes at 50/50, one seed tab each.
    pub fn initial_layout(&self, left: TabId, right: TabId) -> PaneLayout {
        self.normalize_widths(&PaneLayout {
            panes: vec![
                Pane::new(PaneId::new("pane-1"), left, 50.0),
                Pane::new(PaneId::new("pane-2"), right, 50.0),
            ],
        })
    }

    /// A single pane filled with the fallback tab; used when every pane
    /// in a layout has been emptied.
    fn seed_pane(&self) -> Pane {
        Pane::new(PaneId::new("pane-1"), self.fallback_tab.clone(), 100.0)
    }

    /// Rescale every width proportionally so the sum is exactly 100.
    /// A non-positive sum falls back to an equal split.
    pub fn normalize_widths(&self, layout: &PaneLayout) -> PaneLayout {
        if layout.panes.is_empty() {
            return layout.clone();
        }

        let total: f32 = layout.panes.iter().map(|pane| pane.width).sum();
        let panes = if total <= 0.0 || !total.is_finite() {
            let equal = 100.0 / layout.panes.len() as f32;
            layout
                .panes
                .iter()
                .map(|pane| Pane {
                    width: equal,
                    ..pane.clone()
                })
                .collect()
        } else {
            layout
                .panes
                .iter()
                .map(|pane| Pane {
                    width: pane.width / total * 100.0,
                    ..pane.clone()
                })
                .collect()
        };

        PaneLayout { panes }
    }

    /// Bring `tab` into the pane `pane_id` and make it active.
    ///
    /// The tab is stripped out of whichever other pane holds it, then
    /// appended to the target (or merely marked active if already there).
    /// A target id that no longer exists falls back to the first pane.
    /// Idempotent.
    pub fn activate_tab(&self, layout: &PaneLayout, pane_id: &PaneId, tab: &TabId) -> PaneLayout {
        if layout.panes.is_empty() {
            return layout.clone();
        }

        // Already in the target: only the active marker changes.
        if layout.pane(pane_id).is_some_and(|pane| pane.contains(tab)) {
            return self.set_active_tab(layout, pane_id, tab);
        }

        let stripped = self.strip_tab(layout, tab);
        let target_id = if stripped.pane(pane_id).is_some() {
            pane_id.clone()
        } else {
            stripped.panes[0].id.clone()
        };

        let panes = stripped
            .panes
            .into_iter()
            .map(|mut pane| {
                if pane.id == target_id {
                    pane.tabs.push(tab.clone());
                    pane.active_tab = tab.clone();
                }
                pane
            })
            .collect();

        self.finalize(PaneLayout { panes })
    }

    /// Switch the active tab within a pane that already holds it.
    /// No-op when the pane or tab is absent; never touches other panes.
    pub fn set_active_tab(&self, layout: &PaneLayout, pane_id: &PaneId, tab: &TabId) -> PaneLayout {
        let panes = layout
            .panes
            .iter()
            .map(|pane| {
                if &pane.id == pane_id && pane.contains(tab) {
                    Pane {
                        active_tab: tab.clone(),
                        ..pane.clone()
                    }
                } else {
                    pane.clone()
                }
            })
            .collect();
        PaneLayout { panes }
    }

    /// Remove `tab` from the named pane only.
    /// An emptied pane is culled, or reseeded with the fallback tab when it
    /// was the last pane standing.
    pub fn close_tab(&self, layout: &PaneLayout, pane_id: &PaneId, tab: &TabId) -> PaneLayout {
        if layout.pane(pane_id).is_none() {
            return layout.clone();
        }

        let panes = layout
            .panes
            .iter()
            .map(|pane| {
                if &pane.id == pane_id {
                    pane.without_tab(tab, &self.fallback_tab)
                } else {
                    pane.clone()
                }
            })
            .collect();

        self.finalize(PaneLayout { panes })
    }

    /// Reset one pane to contain only the fallback tab.
    /// The pane itself survives; its width is untouched.
    pub fn close_all_tabs(&self, layout: &PaneLayout, pane_id: &PaneId) -> PaneLayout {
        let panes = layout
            .panes
            .iter()
            .map(|pane| {
                if &pane.id == pane_id {
                    Pane {
                        id: pane.id.clone(),
                        tabs: vec![self.fallback_tab.clone()],
                        active_tab: self.fallback_tab.clone(),
                        width: pane.width,
                    }
                } else {
                    pane.clone()
                }
            })
            .collect();
        PaneLayout { panes }
    }

    /// Move `tab` to an exact slot in `to_pane`'s tab strip.
    ///
    /// `insert_index` is clamped into `[0, tabs.len()]`. When source and
    /// destination pane are the same and the tab sat before the insertion
    /// point, the index is decremented by one to compensate for the removal
    /// shift; otherwise the drop would land one slot right of the gap the
    /// user aimed at.
    pub fn move_tab_to_position(
        &self,
        layout: &PaneLayout,
        tab: &TabId,
        to_pane: &PaneId,
        insert_index: usize,
    ) -> PaneLayout {
        let Some((source_pane_index, source_tab_index)) = layout.find_tab(tab) else {
            return layout.clone();
        };
        if layout.pane(to_pane).is_none() {
            return layout.clone();
        }

        let source_pane_id = layout.panes[source_pane_index].id.clone();
        let stripped = self.strip_tab(layout, tab);

        let mut adjusted = insert_index;
        if &source_pane_id == to_pane && source_tab_index < insert_index {
            adjusted = insert_index - 1;
        }

        let panes = stripped
            .panes
            .into_iter()
            .map(|mut pane| {
                if &pane.id == to_pane {
                    let slot = adjusted.min(pane.tabs.len());
                    pane.tabs.insert(slot, tab.clone());
                    pane.active_tab = tab.clone();
                }
                pane
            })
            .collect();

        self.finalize(PaneLayout { panes })
    }

    /// Divide the pane at `pane_index` into two adjacent columns.
    ///
    /// A single-tab pane is split visually: the new pane duplicates the tab
    /// (there is nothing else to move), and the next activate or move of
    /// that tab collapses it back to one instance. A multi-tab pane moves
    /// its active tab out; the source's new active tab is the one that sat
    /// immediately before it in tab order.
    ///
    /// The new pane takes the source's pre-split width, so together the two
    /// occupy what one did after normalization. No-op when the column cap
    /// is reached. Returns the new pane's id so the host can focus it.
    pub fn split_pane(
        &self,
        layout: &PaneLayout,
        pane_index: usize,
    ) -> (PaneLayout, Option<PaneId>) {
        let Some(source) = layout.panes.get(pane_index) else {
            return (layout.clone(), None);
        };
        if layout.len() >= self.max_columns {
            return (layout.clone(), None);
        }

        let new_id = PaneId::next_in(layout);
        let mut panes = layout.panes.clone();

        if source.tabs.len() <= 1 {
            // Visual split: duplicate the lone tab, source unchanged.
            let new_pane = Pane::new(new_id.clone(), source.active_tab.clone(), source.width);
            panes.insert(pane_index + 1, new_pane);
        } else {
            let active_index = source
                .tabs
                .iter()
                .position(|t| t == &source.active_tab)
                .unwrap_or(0);
            let moved = source.tabs[active_index].clone();
            let remaining: Vec<TabId> = source
                .tabs
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != active_index)
                .map(|(_, t)| t.clone())
                .collect();
            let next_active = if active_index > 0 {
                remaining[active_index - 1].clone()
            } else {
                remaining[0].clone()
            };

            panes[pane_index] = Pane {
                id: source.id.clone(),
                tabs: remaining,
                active_tab: next_active,
                width: source.width,
            };
            let new_pane = Pane::new(new_id.clone(), moved, source.width);
            panes.insert(pane_index + 1, new_pane);
        }

        (self.normalize_widths(&PaneLayout { panes }), Some(new_id))
    }

    /// Delete a pane and everything in it.
    /// Refuses to remove the last remaining pane.
    pub fn remove_pane(&self, layout: &PaneLayout, pane_id: &PaneId) -> PaneLayout {
        if layout.len() <= 1 {
            return layout.clone();
        }
        let panes: Vec<Pane> = layout
            .panes
            .iter()
            .filter(|pane| &pane.id != pane_id)
            .cloned()
            .collect();
        if panes.len() == layout.len() {
            return layout.clone();
        }
        self.normalize_widths(&PaneLayout { panes })
    }

    /// Discrete "move left / move right": swap a pane with the one `offset`
    /// slots away. No-op when out of range.
    pub fn move_pane_by_offset(
        &self,
        layout: &PaneLayout,
        pane_id: &PaneId,
        offset: isize,
    ) -> PaneLayout {
        let Some(from) = layout.index_of(pane_id) else {
            return layout.clone();
        };
        let to = from as isize + offset;
        if to < 0 || to as usize >= layout.len() {
            return layout.clone();
        }

        let mut panes = layout.panes.clone();
        let moved = panes.remove(from);
        panes.insert(to as usize, moved);
        PaneLayout { panes }
    }

    /// Continuous drag-to-reorder: splice the pane out of `from_index` and
    /// reinsert at `to_index`, interpreted in the post-removal index space
    /// exactly like [`move_tab_to_position`](Self::move_tab_to_position)'s
    /// same-pane case.
    pub fn move_pane_to_index(
        &self,
        layout: &PaneLayout,
        from_index: usize,
        to_index: usize,
    ) -> PaneLayout {
        if from_index >= layout.len() || to_index >= layout.len() || from_index == to_index {
            return layout.clone();
        }

        let mut panes = layout.panes.clone();
        let moved = panes.remove(from_index);
        panes.insert(to_index.min(panes.len()), moved);
        PaneLayout { panes }
    }

    /// Adopt host-reported column sizes from a resize gesture.
    ///
    /// Non-finite entries keep the previous width, everything is floored at
    /// `min_percent`, and the result is normalized. A length mismatch with
    /// the current pane list is a no-op (a resize racing a structural
    /// change).
    pub fn resize(&self, layout: &PaneLayout, widths: &[f32], min_percent: f32) -> PaneLayout {
        if widths.len() != layout.len() {
            return layout.clone();
        }

        let panes = layout
            .panes
            .iter()
            .zip(widths)
            .map(|(pane, &width)| Pane {
                width: if width.is_finite() {
                    width.max(min_percent)
                } else {
                    pane.width
                },
                ..pane.clone()
            })
            .collect();

        self.normalize_widths(&PaneLayout { panes })
    }

    /// Remove `tab` from every pane that holds it, fixing actives
    fn strip_tab(&self, layout: &PaneLayout, tab: &TabId) -> PaneLayout {
        let panes = layout
            .panes
            .iter()
            .map(|pane| {
                if pane.contains(tab) {
                    pane.without_tab(tab, &self.fallback_tab)
                } else {
                    pane.clone()
                }
            })
            .collect();
        PaneLayout { panes }
    }

    /// Restore every invariant after a structural edit: cull emptied panes
    /// (reseeding when none survive), resolve dangling active tabs, and
    /// renormalize widths.
    fn finalize(&self, layout: PaneLayout) -> PaneLayout {
        let mut panes: Vec<Pane> = layout
            .panes
            .into_iter()
            .filter(|pane| !pane.tabs.is_empty())
            .map(Pane::with_resolved_active)
            .collect();

        if panes.is_empty() {
            panes.push(self.seed_pane());
        }

        self.normalize_widths(&PaneLayout { panes })
    }
}

// ============================================================================
// Tests
// ============================================================================
