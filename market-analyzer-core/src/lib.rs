//! Market Analyzer Core Library
//!
//! Session and report logic for the market analysis client:
//! - form state and payload validation (`AnalysisForm`)
//! - the single-submission lifecycle state machine (`RequestLifecycle`)
//! - the section-addressable report model (`ReportModel`)
//! - section navigation (`SectionNavigator`)
//! - submission orchestration (`AnalysisService`)
//!
//! The library is presentation-independent: it abstracts the network
//! boundary behind the `AnalysisApi` trait from `market-analyzer-api` and
//! leaves rendering entirely to the embedding frontend.

pub mod error;
pub mod services;
pub mod session;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{ApiError, CoreError, CoreResult};
pub use services::AnalysisService;
pub use session::{RequestLifecycle, SectionNavigator, SubmissionState};
pub use types::{AnalysisForm, FormField, ReportModel, SectionId, SectionView};

// Re-export the api crate's client surface
pub use market_analyzer_api::{AnalysisApi, AnalysisClient, ApiConfig};
