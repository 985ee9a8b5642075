//! Daily-log service: applies [`LogBook`] rules and persists the result.

use std::sync::Arc;

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, info};

use crate::domain::{DailyLog, LogBook, LogError};
use crate::ports::{LogStore, LogStoreError};

/// Errors from log operations.
#[derive(Debug, Error)]
pub enum LogServiceError {
    #[error(transparent)]
    Rule(#[from] LogError),

    #[error(transparent)]
    Store(#[from] LogStoreError),
}

/// Reads and writes one user's logs through a [`LogStore`].
pub struct LogService {
    store: Arc<dyn LogStore>,
    user_id: String,
}

impl LogService {
    pub fn new(store: Arc<dyn LogStore>, user_id: impl Into<String>) -> Self {
        Self {
            store,
            user_id: user_id.into(),
        }
    }

    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Fetch all logs and make sure `today` exists.
    ///
    /// A running period cycle is carried into today and persisted.
    pub async fn load(&self, today: NaiveDate) -> Result<LogBook, LogServiceError> {
        let logs = self.store.fetch_logs(&self.user_id).await?;
        debug!(user = %self.user_id, count = logs.len(), "Fetched daily logs");

        let mut book = LogBook::from_logs(logs);
        book.get_or_create(today);
        if let Some(carried) = book.carry_period_day(today) {
            info!(day = ?carried.period_cycle_day, "Carried period day into today");
            self.save(&carried).await?;
        }
        Ok(book)
    }

    /// Apply a tap on water glass `glass` for `today`.
    pub async fn record_water(
        &self,
        book: &mut LogBook,
        today: NaiveDate,
        glass: u8,
    ) -> Result<DailyLog, LogServiceError> {
        let log = book.get_or_create(today);
        log.toggle_water(glass);
        let log = log.clone();
        self.save(&log).await?;
        Ok(log)
    }

    /// Mark today's routine as completed.
    pub async fn complete(
        &self,
        book: &mut LogBook,
        today: NaiveDate,
    ) -> Result<DailyLog, LogServiceError> {
        let log = book.get_or_create(today);
        log.completed = true;
        let log = log.clone();
        self.save(&log).await?;
        Ok(log)
    }

    /// Record today as period day `day`, back-filling the earlier days.
    pub async fn start_period(
        &self,
        book: &mut LogBook,
        today: NaiveDate,
        day: u8,
    ) -> Result<Vec<DailyLog>, LogServiceError> {
        let touched = book.start_period(today, day)?;
        self.save_all(&touched).await?;
        Ok(touched)
    }

    /// Clear the period cycle that includes today.
    pub async fn reset_period(
        &self,
        book: &mut LogBook,
        today: NaiveDate,
    ) -> Result<Vec<DailyLog>, LogServiceError> {
        let touched = book.reset_period_cycle(today)?;
        self.save_all(&touched).await?;
        Ok(touched)
    }

    async fn save(&self, log: &DailyLog) -> Result<(), LogServiceError> {
        debug!(date = %log.date, "Saving daily log");
        self.store.save_log(&self.user_id, log).await?;
        Ok(())
    }

    async fn save_all(&self, logs: &[DailyLog]) -> Result<(), LogServiceError> {
        for log in logs {
            self.save(log).await?;
        }
        Ok(())
    }
}
