//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use worktop::config::WorkbenchConfig;
use worktop::model::{Pane, PaneId, PaneLayout, TabId, WorkbenchModel};
use worktop::registry::TabRegistry;

/// Registry used across the integration suite
pub fn test_registry() -> TabRegistry {
    TabRegistry::new()
        .with("code", "Code")
        .with("topology", "Topology")
        .with("files", "Files")
        .with("docs", "Documentation")
}

/// Config with the suite's fallback tab
pub fn test_config() -> WorkbenchConfig {
    WorkbenchConfig {
        fallback_tab: "code".to_string(),
        ..WorkbenchConfig::default()
    }
}

/// Fresh model with the default two-pane layout: code | topology
pub fn test_model() -> WorkbenchModel {
    WorkbenchModel::new("test-workspace", test_registry(), test_config())
}

/// Build a pane from raw parts
pub fn pane(id: &str, tabs: &[&str], active: &str, width: f32) -> Pane {
    Pane {
        id: PaneId::from(id),
        tabs: tabs.iter().map(|t| TabId::from(*t)).collect(),
        active_tab: TabId::from(active),
        width,
    }
}

/// Model with a hand-built layout
pub fn model_with_panes(panes: Vec<Pane>) -> WorkbenchModel {
    let mut model = test_model();
    model.layout = PaneLayout { panes };
    model.ensure_focus();
    model
}

/// Tab ids of one pane as plain strings, for terse assertions
pub fn tabs_of(model: &WorkbenchModel, pane_index: usize) -> Vec<String> {
    model.layout.panes[pane_index]
        .tabs
        .iter()
        .map(|tab| tab.as_str().to_string())
        .collect()
}

/// Pane ids in order, for terse assertions
pub fn pane_order(model: &WorkbenchModel) -> Vec<String> {
    model
        .layout
        .panes
        .iter()
        .map(|pane| pane.id.as_str().to_string())
        .collect()
}
