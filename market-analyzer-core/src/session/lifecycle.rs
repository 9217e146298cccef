//! Submission lifecycle state machine

use std::sync::Arc;

use market_analyzer_api::ApiError;

use crate::error::{CoreError, CoreResult};
use crate::types::ReportModel;

/// State of the current (or most recent) submission attempt.
///
/// The session may stay in `Succeeded`/`Failed` indefinitely; the next
/// submission resets to `Submitting` and discards the prior outcome.
#[derive(Debug, Clone, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded(Arc<ReportModel>),
    Failed(ApiError),
}

impl SubmissionState {
    /// Short state name, for logs and UI binding.
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded(_) => "succeeded",
            SubmissionState::Failed(_) => "failed",
        }
    }
}

/// State machine guarding a single in-flight submission per session.
///
/// There is exactly one lifecycle per session and no cancellation: an
/// in-flight exchange runs to completion, and a second submission attempt
/// is rejected rather than superseding it. That keeps two completions
/// from ever racing on the same instance.
#[derive(Debug, Default)]
pub struct RequestLifecycle {
    state: SubmissionState,
}

impl RequestLifecycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.state, SubmissionState::Submitting)
    }

    /// Enter `Submitting`, discarding any previous report or failure.
    ///
    /// Valid from `Idle`, `Succeeded` and `Failed`; while already
    /// `Submitting` the attempt is rejected with `AlreadyInProgress`.
    pub fn begin_submission(&mut self) -> CoreResult<()> {
        if self.is_submitting() {
            log::warn!("Submission attempt rejected: one is already in flight");
            return Err(CoreError::AlreadyInProgress);
        }
        self.state = SubmissionState::Submitting;
        Ok(())
    }

    /// Record the outcome of the in-flight submission.
    ///
    /// Calling this in any state but `Submitting` indicates a lost or
    /// duplicated completion signal and fails loudly with
    /// `InvalidTransition`; the state is left untouched in that case.
    pub fn complete(
        &mut self,
        outcome: Result<Arc<ReportModel>, ApiError>,
    ) -> CoreResult<()> {
        if !self.is_submitting() {
            let detail = format!("complete() called in state '{}'", self.state.name());
            log::error!("{detail}");
            return Err(CoreError::InvalidTransition(detail));
        }

        self.state = match outcome {
            Ok(report) => SubmissionState::Succeeded(report),
            Err(e) => SubmissionState::Failed(e),
        };
        Ok(())
    }

    /// Report of the most recent successful submission, if any.
    pub fn report(&self) -> Option<Arc<ReportModel>> {
        match &self.state {
            SubmissionState::Succeeded(report) => Some(report.clone()),
            _ => None,
        }
    }

    /// Failure of the most recent submission, if it failed.
    pub fn failure(&self) -> Option<&ApiError> {
        match &self.state {
            SubmissionState::Failed(e) => Some(e),
            _ => None,
        }
    }
}
