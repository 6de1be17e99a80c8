//! Host registration surface for tabs
//!
//! The host declares which tab ids exist and what their display label is.
//! The registry is an explicit value passed into the model at construction,
//! not a process-wide table, so independent workspaces cannot
//! cross-contaminate. The layout engine itself never consults it; it is
//! used by the host renderer and by the drop/decode paths to reject tab
//! ids the host never declared.

use crate::model::TabId;

/// One registered tab: an id plus its display label.
/// Rendering for an id is bound host-side, keyed off [`TabRegistry::ids`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSpec {
    pub id: TabId,
    pub label: String,
}

/// Ordered table of the tabs a workspace knows about.
/// Declaration order is meaningful: hosts use it for toolbars and menus.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabRegistry {
    entries: Vec<TabSpec>,
}

impl TabRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style registration
    pub fn with(mut self, id: impl Into<TabId>, label: impl Into<String>) -> Self {
        self.register(id, label);
        self
    }

    /// Register a tab id. Re-registering an id replaces its label and keeps
    /// its original position.
    pub fn register(&mut self, id: impl Into<TabId>, label: impl Into<String>) {
        let id = id.into();
        let label = label.into();
        if let Some(entry) = self.entries.iter_mut().find(|entry| entry.id == id) {
            entry.label = label;
        } else {
            self.entries.push(TabSpec { id, label });
        }
    }

    pub fn contains(&self, id: &TabId) -> bool {
        self.entries.iter().any(|entry| &entry.id == id)
    }

    pub fn label(&self, id: &TabId) -> Option<&str> {
        self.entries
            .iter()
            .find(|entry| &entry.id == id)
            .map(|entry| entry.label.as_str())
    }

    /// All registered ids, in declaration order
    pub fn ids(&self) -> impl Iterator<Item = &TabId> {
        self.entries.iter().map(|entry| &entry.id)
    }

    pub fn entries(&self) -> &[TabSpec] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let registry = TabRegistry::new()
            .with("code", "Code")
            .with("topology", "Topology");

        assert_eq!(registry.len(), 2);
        assert!(registry.contains(&TabId::from("code")));
        assert_eq!(registry.label(&TabId::from("topology")), Some("Topology"));
        assert_eq!(registry.label(&TabId::from("missing")), None);
    }

    #[test]
    fn test_reregister_replaces_label_in_place() {
        let mut registry = TabRegistry::new().with("code", "Code").with("files", "Files");
        registry.register("code", "Flow Code");

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.label(&TabId::from("code")), Some("Flow Code"));
        // Order unchanged
        let ids: Vec<_> = registry.ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, vec!["code", "files"]);
    }
}
