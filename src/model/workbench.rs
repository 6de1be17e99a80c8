//! Top-level workbench state
//!
//! One [`WorkbenchModel`] exists per workspace, created when the workspace
//! view mounts and dropped when it unmounts. It owns the pane layout, the
//! focused pane, the transient drag state, and the host-synced pane
//! geometry. All mutation goes through [`update`](crate::update::update).

use crate::config::WorkbenchConfig;
use crate::geometry::Rect;
use crate::model::drag::DragState;
use crate::model::pane::{LayoutEngine, Pane, PaneId, PaneLayout};
use crate::persist::{self, LayoutStore};
use crate::registry::TabRegistry;

/// The complete mutable state of one workspace shell
#[derive(Debug, Clone)]
pub struct WorkbenchModel {
    /// The pane layout; replaced wholesale by engine transforms
    pub layout: PaneLayout,
    /// The pane receiving keyboard-driven operations; always a live id
    pub focused_pane: PaneId,
    /// Transient drag/drop coordinator state
    pub drag: DragState,
    /// Pane bounds as last reported by the host; drives the pointer-mode
    /// reorder hit test
    pub pane_bounds: Vec<Rect>,
    /// Layout transforms, configured with the fallback tab and column cap
    pub engine: LayoutEngine,
    /// Tabs the host declared for this workspace
    pub registry: TabRegistry,
    pub config: WorkbenchConfig,
    /// Stable identity the persisted layout is keyed by
    pub workspace_key: String,
}

impl WorkbenchModel {
    /// Create a workspace with the default layout: the registry's first two
    /// tabs side by side at 50/50, or a single full-width pane when the
    /// host registered fewer than two.
    pub fn new(
        workspace_key: impl Into<String>,
        registry: TabRegistry,
        config: WorkbenchConfig,
    ) -> Self {
        let engine =
            LayoutEngine::new(config.fallback_tab_id()).with_max_columns(config.max_columns);

        let (left, right_seed) = {
            let mut seeds = registry.ids().cloned();
            let left = seeds.next().unwrap_or_else(|| engine.fallback_tab().clone());
            (left, seeds.next())
        };
        let layout = match right_seed {
            Some(right) => engine.initial_layout(left, right),
            None => PaneLayout {
                panes: vec![Pane::new(PaneId::new("pane-1"), left, 100.0)],
            },
        };
        let focused_pane = layout.panes[0].id.clone();

        Self {
            layout,
            focused_pane,
            drag: DragState::default(),
            pane_bounds: Vec::new(),
            engine,
            registry,
            config,
            workspace_key: workspace_key.into(),
        }
    }

    /// Create a workspace from whatever the store holds for the key,
    /// falling back to the default layout when nothing usable is persisted.
    pub fn load_or_default(
        workspace_key: impl Into<String>,
        store: &dyn LayoutStore,
        registry: TabRegistry,
        config: WorkbenchConfig,
    ) -> Self {
        let mut model = Self::new(workspace_key, registry, config);

        if let Some(raw) = store.load(&model.workspace_key) {
            match persist::decode_layout(&raw, &model.registry, &model.engine) {
                Some(layout) => {
                    tracing::debug!(key = %model.workspace_key, "restored persisted layout");
                    model.layout = layout;
                    model.ensure_focus();
                }
                None => {
                    tracing::warn!(
                        key = %model.workspace_key,
                        "persisted layout was unusable, falling back to defaults"
                    );
                }
            }
        }

        model
    }

    /// Hand the current layout to the persistence adapter.
    /// Failures are logged and swallowed; persistence is fire-and-forget
    /// relative to layout mutation.
    pub fn persist(&self, store: &dyn LayoutStore) {
        let payload = match persist::encode_layout(&self.layout) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::warn!(key = %self.workspace_key, "failed to encode layout: {e}");
                return;
            }
        };
        if let Err(e) = store.save(&self.workspace_key, &payload) {
            tracing::warn!(key = %self.workspace_key, "failed to persist layout: {e}");
        }
    }

    /// Adopt a transformed layout. Returns whether anything changed, so
    /// handlers can skip the persist round trip for no-ops.
    pub fn apply_layout(&mut self, next: PaneLayout) -> bool {
        if next == self.layout {
            return false;
        }
        self.layout = next;
        self.ensure_focus();
        true
    }

    /// Re-point focus at the first pane when the focused id vanished
    pub fn ensure_focus(&mut self) {
        if self.layout.pane(&self.focused_pane).is_none() {
            if let Some(first) = self.layout.panes.first() {
                self.focused_pane = first.id.clone();
            }
        }
    }

    /// The focused pane, if the layout is in a consistent state
    pub fn focused(&self) -> Option<&Pane> {
        self.layout.pane(&self.focused_pane)
    }
}
