//! Wire types of the log API.

use hercycle_core::DailyLog;
use serde::{Deserialize, Serialize};

/// Body of a `saveLog` request.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveLogRequest<'a> {
    pub action: &'static str,
    pub user_id: &'a str,
    pub log_data: &'a DailyLog,
}

impl<'a> SaveLogRequest<'a> {
    pub const ACTION: &'static str = "saveLog";

    pub const fn new(user_id: &'a str, log_data: &'a DailyLog) -> Self {
        Self {
            action: Self::ACTION,
            user_id,
            log_data,
        }
    }
}

/// Response of a `getUserData` request.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDataResponse {
    /// Absent for users with no logs yet.
    #[serde(default)]
    pub daily_logs: Vec<DailyLog>,
}
