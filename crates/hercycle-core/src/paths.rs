//! Settings file location and persistence.
//!
//! Settings live in `<config dir>/hercycle/settings.json`, where the config
//! dir comes from the platform (`~/.config` on Linux, `~/Library/Application
//! Support` on macOS, `%APPDATA%` on Windows).

use std::fs;
use std::path::{Path, PathBuf};

use crate::settings::{Settings, SettingsError};

const APP_DIR: &str = "hercycle";
const SETTINGS_FILE: &str = "settings.json";

/// Errors from resolving application paths.
#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("Could not determine the platform config directory")]
    NoConfigDir,
}

/// Directory holding hercycle configuration.
pub fn config_dir() -> Result<PathBuf, PathError> {
    dirs::config_dir()
        .map(|dir| dir.join(APP_DIR))
        .ok_or(PathError::NoConfigDir)
}

/// Full path of the settings file.
pub fn settings_path() -> Result<PathBuf, PathError> {
    config_dir().map(|dir| dir.join(SETTINGS_FILE))
}

/// Load settings from `path`.
///
/// A missing file is not an error: defaults are returned.
pub fn load_settings(path: &Path) -> Result<Settings, SettingsError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "No settings file, using defaults");
            return Ok(Settings::with_defaults());
        }
        Err(e) => return Err(SettingsError::Io(e.to_string())),
    };

    serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
}

/// Write settings to `path`, creating parent directories as needed.
pub fn save_settings(path: &Path, settings: &Settings) -> Result<(), SettingsError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
    }
    let json =
        serde_json::to_string_pretty(settings).map_err(|e| SettingsError::Parse(e.to_string()))?;
    fs::write(path, json).map_err(|e| SettingsError::Io(e.to_string()))
}
