//! Settings domain types and validation.
//!
//! This module contains the user settings shared by every adapter. These
//! are pure domain types; reading and writing the settings file lives in
//! [`crate::paths`].

use serde::{Deserialize, Serialize};

/// Default multiplier applied to every playback pause and tick.
pub const DEFAULT_PACE: f32 = 1.0;

/// Largest accepted pace multiplier.
pub const MAX_PACE: f32 = 10.0;

/// Environment variables that override file settings.
pub const ENV_API_URL: &str = "HERCYCLE_API_URL";
pub const ENV_USER: &str = "HERCYCLE_USER";
pub const ENV_PACE: &str = "HERCYCLE_PACE";
pub const ENV_VOICE: &str = "HERCYCLE_VOICE";

/// Application settings structure.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the spreadsheet-backed log API.
    pub api_url: Option<String>,

    /// User id the logs are stored under.
    pub user_id: Option<String>,

    /// Playback pace multiplier (1.0 = real time, 0.5 = twice as fast).
    pub pace: Option<f32>,

    /// Voice name tried before the built-in preference list.
    pub preferred_voice: Option<String>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            api_url: None,
            user_id: None,
            pace: Some(DEFAULT_PACE),
            preferred_voice: None,
        }
    }

    /// Get the effective pace (with default fallback).
    #[must_use]
    pub const fn effective_pace(&self) -> f32 {
        match self.pace {
            Some(pace) => pace,
            None => DEFAULT_PACE,
        }
    }

    /// Merge another settings into this one, only updating fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(ref url) = other.api_url {
            self.api_url.clone_from(url);
        }
        if let Some(ref user) = other.user_id {
            self.user_id.clone_from(user);
        }
        if let Some(pace) = other.pace {
            self.pace = pace;
        }
        if let Some(ref voice) = other.preferred_voice {
            self.preferred_voice.clone_from(voice);
        }
    }

    /// Overlay values from the environment (see the `ENV_*` constants).
    ///
    /// `lookup` is usually `|k| std::env::var(k).ok()`; unparseable values
    /// are ignored with a warning.
    pub fn apply_env_with(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api_url = Some(url);
        }
        if let Some(user) = lookup(ENV_USER) {
            self.user_id = Some(user);
        }
        if let Some(raw) = lookup(ENV_PACE) {
            match raw.trim().parse::<f32>() {
                Ok(pace) => self.pace = Some(pace),
                Err(_) => tracing::warn!(value = %raw, "Ignoring unparseable {ENV_PACE}"),
            }
        }
        if let Some(voice) = lookup(ENV_VOICE) {
            self.preferred_voice = Some(voice);
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = set field to None/null
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub api_url: Option<Option<String>>,
    pub user_id: Option<Option<String>>,
    pub pace: Option<Option<f32>>,
    pub preferred_voice: Option<Option<String>>,
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Pace must be greater than 0 and at most {MAX_PACE}, got {0}")]
    InvalidPace(f32),

    #[error("API URL must start with http:// or https://, got '{0}'")]
    InvalidApiUrl(String),

    #[error("User id cannot be empty")]
    EmptyUserId,

    #[error("Failed to read settings file: {0}")]
    Io(String),

    #[error("Settings file is not valid JSON: {0}")]
    Parse(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(pace) = settings.pace {
        if !(pace > 0.0 && pace <= MAX_PACE) {
            return Err(SettingsError::InvalidPace(pace));
        }
    }

    if let Some(ref url) = settings.api_url {
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(SettingsError::InvalidApiUrl(url.clone()));
        }
    }

    if let Some(ref user) = settings.user_id {
        if user.trim().is_empty() {
            return Err(SettingsError::EmptyUserId);
        }
    }

    Ok(())
}
