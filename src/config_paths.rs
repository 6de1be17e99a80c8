//! Centralized configuration paths for worktop
//!
//! All state files live under:
//! - Unix/macOS: `~/.config/worktop/`
//! - Windows: `%APPDATA%\worktop\`
//!
//! This module is the single source of truth for these paths.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

const APP_DIR: &str = "worktop";

/// Base config directory for worktop
///
/// Unix/macOS:
///   - If XDG_CONFIG_HOME is set: `$XDG_CONFIG_HOME/worktop`
///   - Else: `~/.config/worktop`
///
/// Windows:
///   - `%APPDATA%\worktop`
pub fn config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        env::var("APPDATA")
            .ok()
            .map(|appdata| PathBuf::from(appdata).join(APP_DIR))
    }

    #[cfg(not(target_os = "windows"))]
    {
        env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .map(|config| config.join(APP_DIR))
    }
}

/// `~/.config/worktop/config.yaml`
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("config.yaml"))
}

/// `~/.config/worktop/layouts/`, one JSON file per workspace key
pub fn layouts_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("layouts"))
}

/// `~/.config/worktop/logs/`
pub fn logs_dir() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join("logs"))
}

fn ensure_dir(path: &Path) -> Result<(), String> {
    fs::create_dir_all(path)
        .map_err(|e| format!("Failed to create directory {}: {}", path.display(), e))
}

/// Create the logs directory if needed and return it
pub fn ensure_logs_dir() -> Result<PathBuf, String> {
    let dir = logs_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}

/// Create the layouts directory if needed and return it
pub fn ensure_layouts_dir() -> Result<PathBuf, String> {
    let dir = layouts_dir().ok_or_else(|| "No config directory available".to_string())?;
    ensure_dir(&dir)?;
    Ok(dir)
}
