//! Log API client implementing the `LogStore` port.

use async_trait::async_trait;
use hercycle_core::{DailyLog, LogStore, LogStoreError};
use url::Url;

use crate::config::LogApiConfig;
use crate::error::ApiResult;
use crate::http::{HttpBackend, ReqwestBackend};
use crate::models::{SaveLogRequest, UserDataResponse};

/// Action name of the fetch request.
const GET_USER_DATA: &str = "getUserData";

/// Default log client using the reqwest HTTP backend.
pub type DefaultLogClient = SheetLogClient<ReqwestBackend>;

/// Client for the spreadsheet-backed log API.
///
/// Generic over an HTTP backend for testing. Use [`DefaultLogClient`] in
/// production code.
pub struct SheetLogClient<B: HttpBackend> {
    backend: B,
    base_url: Url,
}

impl DefaultLogClient {
    /// Create a client for the endpoint in `config`.
    pub fn new(config: &LogApiConfig) -> ApiResult<Self> {
        let base_url = Url::parse(&config.base_url)?;
        let backend = ReqwestBackend::new(config)?;
        Ok(Self { backend, base_url })
    }
}

impl<B: HttpBackend> SheetLogClient<B> {
    /// Create a client with a custom backend.
    #[cfg(test)]
    pub(crate) const fn with_backend(base_url: Url, backend: B) -> Self {
        Self { backend, base_url }
    }

    fn user_data_url(&self, user_id: &str) -> Url {
        let mut url = self.base_url.clone();
        url.query_pairs_mut()
            .append_pair("action", GET_USER_DATA)
            .append_pair("userId", user_id);
        url
    }

    async fn fetch(&self, user_id: &str) -> ApiResult<Vec<DailyLog>> {
        let url = self.user_data_url(user_id);
        tracing::debug!(user_id, "Fetching daily logs");
        let data: UserDataResponse = self.backend.get_json(&url).await?;
        Ok(data.daily_logs)
    }

    async fn save(&self, user_id: &str, log: &DailyLog) -> ApiResult<()> {
        tracing::debug!(user_id, date = %log.date, "Saving daily log");
        self.backend
            .post_json(&self.base_url, &SaveLogRequest::new(user_id, log))
            .await
    }
}

#[async_trait]
impl<B: HttpBackend> LogStore for SheetLogClient<B> {
    async fn save_log(&self, user_id: &str, log: &DailyLog) -> Result<(), LogStoreError> {
        self.save(user_id, log).await.map_err(Into::into)
    }

    async fn fetch_logs(&self, user_id: &str) -> Result<Vec<DailyLog>, LogStoreError> {
        self.fetch(user_id).await.map_err(Into::into)
    }
}
