use async_trait::async_trait;

use crate::error::Result;
use crate::report::AnalysisReport;
use crate::types::{AnalyzeRequest, ApiStatus};

/// Analysis service operations.
///
/// Both operations are one-shot: a single request, no retries, no caching.
/// Calls are independent of each other; serializing submissions is the
/// caller's concern.
#[async_trait]
pub trait AnalysisApi: Send + Sync {
    /// Submit a filled form for analysis and return the decoded report.
    ///
    /// The report's internal shape is trusted as-is; the service is the
    /// hard boundary and no post-decoding validation is applied.
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalysisReport>;

    /// Probe which external data sources the backend has configured.
    ///
    /// Display-only; has no effect on any submission.
    async fn check_status(&self) -> Result<ApiStatus>;
}
