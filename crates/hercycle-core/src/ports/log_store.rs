//! Log store port: persistence of daily logs.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::DailyLog;

/// Errors surfaced by log store adapters.
#[derive(Debug, Error)]
pub enum LogStoreError {
    /// The store could not be reached or returned a failure status.
    #[error("Log store unavailable: {0}")]
    Unavailable(String),

    /// The store answered with data we could not understand.
    #[error("Invalid response from log store: {0}")]
    InvalidResponse(String),

    /// No store is configured (e.g. missing API URL).
    #[error("Log store not configured: {0}")]
    NotConfigured(String),
}

/// Remote persistence of a user's daily logs.
///
/// `save_log` is an upsert keyed by `(user_id, log.date)`.
#[async_trait]
pub trait LogStore: Send + Sync {
    async fn save_log(&self, user_id: &str, log: &DailyLog) -> Result<(), LogStoreError>;

    async fn fetch_logs(&self, user_id: &str) -> Result<Vec<DailyLog>, LogStoreError>;
}
