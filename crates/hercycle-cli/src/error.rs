//! CLI-specific error types and mappings.
//!
//! Library errors are mapped to exit codes and user-facing messages here.

use hercycle_api::ApiError;
use hercycle_core::{CatalogError, LogServiceError, LogStoreError, PathError, SettingsError};
use hercycle_voice::SessionError;
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Argument or lookup error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The log API could not be reached or answered badly.
    #[error("Log API error: {0}")]
    Service(String),

    /// A daily-log rule rejected the request.
    #[error("{0}")]
    Rule(String),

    /// Playback could not start.
    #[error("Playback error: {0}")]
    Playback(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow the sysexits.h categories.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Arguments(_) => 64, // EX_USAGE
            Self::Config(_) => 78,    // EX_CONFIG
            Self::Service(_) => 69,   // EX_UNAVAILABLE
            Self::Rule(_) => 65,      // EX_DATAERR
            Self::Playback(_) => 70,  // EX_SOFTWARE
        }
    }
}

impl From<CatalogError> for CliError {
    fn from(err: CatalogError) -> Self {
        Self::Arguments(err.to_string())
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<ApiError> for CliError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::InvalidUrl(_) => Self::Config(err.to_string()),
            _ => Self::Service(err.to_string()),
        }
    }
}

impl From<LogServiceError> for CliError {
    fn from(err: LogServiceError) -> Self {
        match err {
            LogServiceError::Rule(rule) => Self::Rule(rule.to_string()),
            LogServiceError::Store(LogStoreError::NotConfigured(msg)) => Self::Config(msg),
            LogServiceError::Store(store) => Self::Service(store.to_string()),
        }
    }
}

impl From<SessionError> for CliError {
    fn from(err: SessionError) -> Self {
        Self::Playback(err.to_string())
    }
}
