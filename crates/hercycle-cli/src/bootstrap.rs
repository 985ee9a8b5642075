//! CLI bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the CLI adapter:
//! - Settings file, environment overlay and flag overrides
//! - The log API client behind the `LogStore` port
//! - Tracing subscriber installation
//!
//! Playback wiring (speech engine, session, console adapters) is done by
//! the `play` handler since it only lives for one run.

use std::path::PathBuf;
use std::sync::Arc;

use hercycle_api::{DefaultLogClient, LogApiConfig};
use hercycle_core::{
    LogService, Settings, SettingsUpdate, load_settings, settings_path, validate_settings,
};
use tracing_subscriber::EnvFilter;

use crate::error::CliError;

/// Bootstrap configuration for the CLI.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Settings file to read; the platform default when `None`.
    pub settings_path: Option<PathBuf>,
    /// User id from the command line, overriding every other source.
    pub user: Option<String>,
}

/// Fully composed application context for CLI commands.
#[derive(Debug)]
pub struct CliContext {
    settings: Settings,
}

impl CliContext {
    /// Effective settings after all overrides.
    pub const fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Build the daily-log service for the configured user.
    pub fn log_service(&self) -> Result<LogService, CliError> {
        let url = self.settings.api_url.as_deref().ok_or_else(|| {
            CliError::Config(
                "no log API URL; set HERCYCLE_API_URL or api_url in settings.json".to_string(),
            )
        })?;
        let user = self.settings.user_id.as_deref().ok_or_else(|| {
            CliError::Config("no user id; pass --user or set HERCYCLE_USER".to_string())
        })?;

        let client = DefaultLogClient::new(&LogApiConfig::new(url))?;
        Ok(LogService::new(Arc::new(client), user))
    }
}

/// Bootstrap the CLI application from the process environment.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    bootstrap_with(config, |key| std::env::var(key).ok())
}

/// Bootstrap with an explicit environment lookup.
///
/// Precedence, lowest first: defaults, settings file, environment, flags.
pub fn bootstrap_with(
    config: CliConfig,
    env: impl Fn(&str) -> Option<String>,
) -> Result<CliContext, CliError> {
    let path = match config.settings_path {
        Some(path) => path,
        None => settings_path()?,
    };

    let mut settings = load_settings(&path)?;
    settings.apply_env_with(env);
    if let Some(user) = config.user {
        settings.merge(&SettingsUpdate {
            user_id: Some(Some(user)),
            ..SettingsUpdate::default()
        });
    }
    validate_settings(&settings)?;

    tracing::debug!(path = %path.display(), ?settings, "Settings resolved");
    Ok(CliContext { settings })
}

/// Install the stderr tracing subscriber.
///
/// `RUST_LOG` wins; otherwise `verbose` selects `debug` over `info`.
pub fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .compact()
        .try_init()
        .ok(); // Ignore error if already initialized
}
