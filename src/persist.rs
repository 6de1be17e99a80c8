//! Layout persistence
//!
//! Serializes the pane list keyed by a workspace identity. The engine is
//! agnostic to the storage medium: hosts inject a [`LayoutStore`], and the
//! file-backed implementation here keeps one JSON file per workspace key.
//!
//! Decoding is tolerant by design: unknown tab ids are dropped, duplicate
//! tabs deduped, missing active tabs re-derived, and broken widths
//! replaced. A malformed persisted state is recovered locally, never
//! surfaced to the user.

use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::model::{LayoutEngine, Pane, PaneId, PaneLayout, TabId};
use crate::registry::TabRegistry;

// ============================================================================
// Wire shape
// ============================================================================

/// The persisted shape of one pane.
/// Field names are camelCase on the wire; every field is optional so a
/// partially written file still parses and gets repaired below.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SerializedPane {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub tabs: Vec<String>,
    #[serde(default)]
    pub active_tab: String,
    #[serde(default)]
    pub width: f64,
}

/// Serialize a layout to its JSON wire form
pub fn encode_layout(layout: &PaneLayout) -> Result<String> {
    let panes: Vec<SerializedPane> = layout
        .panes
        .iter()
        .map(|pane| SerializedPane {
            id: pane.id.as_str().to_string(),
            tabs: pane.tabs.iter().map(|tab| tab.as_str().to_string()).collect(),
            active_tab: pane.active_tab.as_str().to_string(),
            width: pane.width as f64,
        })
        .collect();
    serde_json::to_string(&panes).context("serializing pane layout")
}

/// Decode a persisted layout, repairing whatever can be repaired.
///
/// Tab ids the registry does not know are dropped; a pane left with no
/// tabs is reseeded with the fallback tab; `activeTab` is re-derived when
/// missing from the pane; non-finite or non-positive widths become an
/// equal share; the pane list is truncated to the engine's column cap and
/// then normalized. Structurally unusable input returns `None` and the
/// caller falls back to the initial layout.
pub fn decode_layout(
    raw: &str,
    registry: &TabRegistry,
    engine: &LayoutEngine,
) -> Option<PaneLayout> {
    let parsed: Vec<SerializedPane> = serde_json::from_str(raw).ok()?;
    if parsed.is_empty() {
        return None;
    }

    let count = parsed.len();
    let panes: Vec<Pane> = parsed
        .into_iter()
        .take(engine.max_columns())
        .enumerate()
        .map(|(index, item)| {
            let mut seen = HashSet::new();
            let mut tabs: Vec<TabId> = Vec::new();
            for tab in item.tabs {
                let tab = TabId::new(tab);
                if registry.contains(&tab) && seen.insert(tab.clone()) {
                    tabs.push(tab);
                }
            }
            if tabs.is_empty() {
                tabs.push(engine.fallback_tab().clone());
            }

            let active = TabId::new(item.active_tab);
            let active_tab = if tabs.contains(&active) {
                active
            } else {
                tabs[0].clone()
            };

            let width = if item.width.is_finite() && item.width > 0.0 {
                item.width as f32
            } else {
                100.0 / count as f32
            };

            let id = if item.id.is_empty() {
                PaneId::new(format!("pane-{}", index + 1))
            } else {
                PaneId::new(item.id)
            };

            Pane {
                id,
                tabs,
                active_tab,
                width,
            }
        })
        .collect();

    Some(engine.normalize_widths(&PaneLayout { panes }))
}

// ============================================================================
// Stores
// ============================================================================

/// Injected load/save boundary for serialized layouts.
///
/// `save` failures are the adapter's concern; callers log and move on.
pub trait LayoutStore {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&self, key: &str, payload: &str) -> Result<()>;
}

/// One JSON file per workspace key, under a layouts directory
#[derive(Debug, Clone)]
pub struct FileLayoutStore {
    dir: PathBuf,
}

impl FileLayoutStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store under `~/.config/worktop/layouts/`
    pub fn at_default_location() -> Option<Self> {
        crate::config_paths::layouts_dir().map(Self::new)
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", sanitize_key(key)))
    }
}

/// Workspace keys may carry arbitrary identity strings (`ns:flow-42`);
/// anything unsafe for a file name maps to `-`.
fn sanitize_key(key: &str) -> String {
    key.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

impl LayoutStore for FileLayoutStore {
    fn load(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn save(&self, key: &str, payload: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("creating layouts dir {}", self.dir.display()))?;
        let path = self.path_for(key);
        fs::write(&path, payload).with_context(|| format!("writing layout {}", path.display()))
    }
}

/// Keeps layouts in memory; useful for hosts without durable storage and
/// for tests
#[derive(Debug, Default)]
pub struct MemoryLayoutStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryLayoutStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutStore for MemoryLayoutStore {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, payload: &str) -> Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| anyhow::anyhow!("layout store poisoned"))?;
        entries.insert(key.to_string(), payload.to_string());
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> TabRegistry {
        TabRegistry::new()
            .with("code", "Code")
            .with("topology", "Topology")
            .with("files", "Files")
    }

    fn engine() -> LayoutEngine {
        LayoutEngine::new(TabId::from("code"))
    }

    #[test]
    fn test_round_trip() {
        let eng = engine();
        let layout = eng.initial_layout(TabId::from("code"), TabId::from("topology"));

        let encoded = encode_layout(&layout).unwrap();
        let decoded = decode_layout(&encoded, &registry(), &eng).unwrap();

        assert_eq!(decoded, layout);
    }

    #[test]
    fn test_unknown_tabs_are_dropped() {
        let raw = r#"[{"id":"pane-1","tabs":["code","ghost","files"],"activeTab":"ghost","width":100}]"#;
        let decoded = decode_layout(raw, &registry(), &engine()).unwrap();

        assert_eq!(
            decoded.panes[0].tabs,
            vec![TabId::from("code"), TabId::from("files")]
        );
        // activeTab pointed at a dropped id, re-derived
        assert_eq!(decoded.panes[0].active_tab, TabId::from("code"));
    }

    #[test]
    fn test_duplicate_tabs_are_deduped() {
        let raw = r#"[{"id":"pane-1","tabs":["code","code","files"],"activeTab":"files","width":100}]"#;
        let decoded = decode_layout(raw, &registry(), &engine()).unwrap();
        assert_eq!(
            decoded.panes[0].tabs,
            vec![TabId::from("code"), TabId::from("files")]
        );
        assert_eq!(decoded.panes[0].active_tab, TabId::from("files"));
    }

    #[test]
    fn test_pane_with_no_known_tabs_is_reseeded() {
        let raw = r#"[{"id":"pane-1","tabs":["ghost"],"activeTab":"ghost","width":100}]"#;
        let decoded = decode_layout(raw, &registry(), &engine()).unwrap();
        assert_eq!(decoded.panes[0].tabs, vec![TabId::from("code")]);
    }

    #[test]
    fn test_broken_widths_become_equal_shares() {
        let raw = r#"[
            {"id":"pane-1","tabs":["code"],"activeTab":"code","width":0},
            {"id":"pane-2","tabs":["files"],"activeTab":"files","width":-3}
        ]"#;
        let decoded = decode_layout(raw, &registry(), &engine()).unwrap();
        assert!((decoded.panes[0].width - 50.0).abs() < 1e-4);
        assert!((decoded.panes[1].width - 50.0).abs() < 1e-4);
    }

    #[test]
    fn test_missing_pane_id_is_generated() {
        let raw = r#"[{"tabs":["code"],"activeTab":"code","width":100}]"#;
        let decoded = decode_layout(raw, &registry(), &engine()).unwrap();
        assert_eq!(decoded.panes[0].id, PaneId::from("pane-1"));
    }

    #[test]
    fn test_truncates_to_column_cap() {
        let raw = r#"[
            {"id":"a","tabs":["code"],"activeTab":"code","width":25},
            {"id":"b","tabs":["topology"],"activeTab":"topology","width":25},
            {"id":"c","tabs":["files"],"activeTab":"files","width":25}
        ]"#;
        let eng = engine().with_max_columns(2);
        let decoded = decode_layout(raw, &registry(), &eng).unwrap();
        assert_eq!(decoded.len(), 2);
    }

    #[test]
    fn test_garbage_decodes_to_none() {
        let reg = registry();
        let eng = engine();
        assert!(decode_layout("", &reg, &eng).is_none());
        assert!(decode_layout("not json", &reg, &eng).is_none());
        assert!(decode_layout("[]", &reg, &eng).is_none());
        assert!(decode_layout(r#"{"id":"pane-1"}"#, &reg, &eng).is_none());
    }

    #[test]
    fn test_memory_store_round_trip() {
        let store = MemoryLayoutStore::new();
        assert!(store.load("ws-1").is_none());
        store.save("ws-1", "[]").unwrap();
        assert_eq!(store.load("ws-1").as_deref(), Some("[]"));
    }

    #[test]
    fn test_sanitize_key() {
        assert_eq!(sanitize_key("flows:prod/pipeline 7"), "flows-prod-pipeline-7");
        assert_eq!(sanitize_key("plain-key_1.2"), "plain-key_1.2");
    }
}
