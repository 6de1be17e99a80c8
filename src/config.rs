//! Workbench configuration persistence
//!
//! Stores the layout knobs in `~/.config/worktop/config.yaml`

use serde::{Deserialize, Serialize};

use crate::model::TabId;

/// Layout configuration that persists across sessions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkbenchConfig {
    /// Tab a reseeded pane receives when its last tab is closed
    #[serde(default = "default_fallback_tab")]
    pub fallback_tab: String,

    /// Hard cap on the number of columns
    #[serde(default = "default_max_columns")]
    pub max_columns: usize,

    /// Smallest share (percent) a column may be resized down to
    #[serde(default = "default_min_pane_percent")]
    pub min_pane_percent: f32,
}

fn default_fallback_tab() -> String {
    "home".to_string()
}

fn default_max_columns() -> usize {
    4
}

fn default_min_pane_percent() -> f32 {
    18.0
}

impl Default for WorkbenchConfig {
    fn default() -> Self {
        Self {
            fallback_tab: default_fallback_tab(),
            max_columns: default_max_columns(),
            min_pane_percent: default_min_pane_percent(),
        }
    }
}

impl WorkbenchConfig {
    /// The fallback tab as a typed id
    pub fn fallback_tab_id(&self) -> TabId {
        TabId::new(self.fallback_tab.clone())
    }

    /// Load config from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::config_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse config at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read config at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save config to disk
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::config_file()
            .ok_or_else(|| "No config directory available".to_string())?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize config: {}", e))?;

        std::fs::write(&path, content)
            .map_err(|e| format!("Failed to write config to {}: {}", path.display(), e))?;

        tracing::info!("Saved config to {}", path.display());
        Ok(())
    }
}
