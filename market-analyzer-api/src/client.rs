//! HTTP client for the analysis service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use crate::error::{ApiError, Result};
use crate::report::AnalysisReport;
use crate::traits::AnalysisApi;
use crate::types::{AnalyzeRequest, AnalyzeResponse, ApiStatus};

/// Default backend base URL (the analysis backend's development server).
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Analysis submission endpoint, relative to the base URL.
pub(crate) const ANALYZE_PATH: &str = "/analyze";
/// External-dependency health endpoint, relative to the base URL.
pub(crate) const STATUS_PATH: &str = "/test-apis";

/// Default connect timeout (seconds).
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;
/// Default request timeout (seconds).
///
/// Report generation runs live market research on the backend and
/// routinely takes minutes, so this is far above a typical API timeout.
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 300;

/// Connection settings for [`AnalysisClient`].
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL of the analysis service, without a trailing slash.
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ApiConfig {
    /// Config for a service at `base_url` with default timeouts.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}

/// Analysis service client.
///
/// Cheap to clone is a non-goal; one client per session is the expected
/// usage. Each call is an independent one-shot exchange.
pub struct AnalysisClient {
    pub(crate) client: Client,
    pub(crate) base_url: String,
}

impl AnalysisClient {
    pub fn new(config: ApiConfig) -> Self {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.request_timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        }
    }
}

impl Default for AnalysisClient {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}

#[async_trait]
impl AnalysisApi for AnalysisClient {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisReport> {
        let response: AnalyzeResponse = self.post_json(ANALYZE_PATH, request).await?;

        if !response.success {
            let message = response
                .error
                .unwrap_or_else(|| "Unknown error".to_string());
            log::warn!("Analysis rejected by backend: {message}");
            return Err(ApiError::RemoteError { message });
        }

        response.analysis.ok_or_else(|| ApiError::ParseError {
            detail: "Response is missing the analysis payload".to_string(),
        })
    }

    async fn check_status(&self) -> Result<ApiStatus> {
        self.get_json(STATUS_PATH).await
    }
}
