//! Submission orchestration service

use std::sync::Arc;

use tokio::sync::RwLock;

use market_analyzer_api::{AnalysisApi, ApiError, ApiStatus};

use crate::error::{CoreError, CoreResult};
use crate::session::RequestLifecycle;
use crate::types::{AnalysisForm, ReportModel};

/// Drives one submission session against the analysis service.
///
/// Owns the session's single lifecycle instance. A second `submit` while
/// one is in flight is rejected with `AlreadyInProgress` rather than
/// superseding the running exchange, so two completions can never race
/// on the same lifecycle.
pub struct AnalysisService {
    api: Arc<dyn AnalysisApi>,
    lifecycle: RwLock<RequestLifecycle>,
}

impl AnalysisService {
    /// Create a service over an analysis backend.
    #[must_use]
    pub fn new(api: Arc<dyn AnalysisApi>) -> Self {
        Self {
            api,
            lifecycle: RwLock::new(RequestLifecycle::new()),
        }
    }

    /// Validate the form, run the exchange, and record the outcome.
    ///
    /// Validation failures surface before the lifecycle is touched, so a
    /// rejected form does not consume the attempt. The in-flight guard is
    /// taken before any network I/O; the lock itself is not held across
    /// the exchange.
    pub async fn submit(&self, form: &AnalysisForm) -> CoreResult<Arc<ReportModel>> {
        // 1. Local validation
        let payload = form.to_payload()?;

        // 2. In-flight guard
        self.lifecycle.write().await.begin_submission()?;
        log::info!(
            "Submitting analysis request for segment '{}'",
            payload.segmento
        );

        // 3. One-shot exchange (no retries, no cancellation)
        let outcome = self.api.analyze(&payload).await;

        // 4. Record the outcome
        let mut lifecycle = self.lifecycle.write().await;
        match outcome {
            Ok(report) => {
                let report = Arc::new(ReportModel::new(report));
                lifecycle.complete(Ok(report.clone()))?;
                log::info!(
                    "Analysis succeeded with {} sections",
                    report.available_sections().len()
                );
                Ok(report)
            }
            Err(e) => {
                if e.is_expected() {
                    log::warn!("Analysis submission failed: {e}");
                } else {
                    log::error!("Analysis submission failed: {e}");
                }
                lifecycle.complete(Err(e.clone()))?;
                Err(CoreError::Api(e))
            }
        }
    }

    /// Whether a submission is currently in flight.
    pub async fn is_submitting(&self) -> bool {
        self.lifecycle.read().await.is_submitting()
    }

    /// Report of the most recent successful submission, if any.
    pub async fn current_report(&self) -> Option<Arc<ReportModel>> {
        self.lifecycle.read().await.report()
    }

    /// Failure of the most recent submission, if it failed.
    pub async fn last_failure(&self) -> Option<ApiError> {
        self.lifecycle.read().await.failure().cloned()
    }

    /// Probe the backend's external data sources.
    ///
    /// Display-only; has no effect on the lifecycle.
    pub async fn check_api_status(&self) -> CoreResult<ApiStatus> {
        Ok(self.api.check_status().await?)
    }
}
