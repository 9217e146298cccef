//! # market-analyzer-api
//!
//! HTTP client bindings for the ARQV30-style market analysis service.
//!
//! The service exposes two endpoints:
//!
//! | Endpoint | Method | Purpose |
//! |----------|--------|---------|
//! | `/analyze` | POST | Submit form data, receive a multi-section report |
//! | `/test-apis` | GET | Health of the backend's external data sources |
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)* — Use the platform's native TLS implementation.
//! - **`rustls`** — Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use market_analyzer_api::{AnalysisApi, AnalysisClient, AnalyzeRequest, ApiConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = AnalysisClient::new(ApiConfig::default());
//!
//!     let request = AnalyzeRequest {
//!         segmento: "Educação Online".to_string(),
//!         produto: "Plataforma de Cursos".to_string(),
//!         publico: "Profissionais 25-45 anos".to_string(),
//!         preco: "197.00".to_string(),
//!         ..Default::default()
//!     };
//!
//!     let report = client.analyze(&request).await?;
//!     if let Some(positioning) = &report.escopo_posicionamento {
//!         println!("{}", positioning.proposta_valor_unica);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, ApiError>`](ApiError):
//!
//! - [`ApiError::NetworkError`] / [`ApiError::Timeout`] — transport failure
//! - [`ApiError::ParseError`] — response body was not the expected JSON
//! - [`ApiError::RemoteError`] — the backend reported the analysis as failed
//!
//! Nothing is retried automatically; every exchange is one-shot and a
//! failure is terminal for that submission attempt.

mod client;
mod error;
mod http;
mod report;
mod traits;
mod types;
mod utils;

// Re-export error types
pub use error::{ApiError, Result};

// Re-export the client and its configuration
pub use client::{AnalysisClient, ApiConfig, DEFAULT_BASE_URL};

// Re-export the service trait
pub use traits::AnalysisApi;

// Re-export wire types
pub use types::{AnalyzeRequest, AnalyzeResponse, ApiStatus};

// Re-export the report payload types
pub use report::{
    ActionPhase, ActionPlan, ActivationScript, AnalysisReport, AvatarProfile, CompetitorAnalysis,
    DemographicProfile, EmotionalJourney, FinancialProjections, ImpactPhrases, InnerLanguage, Kpi,
    KeywordStrategy, LogicalProof, MarketIntelligence, MentalDriver, PerformanceMetrics,
    PositioningScope, ProofScript, ProofVariations, PsychographicProfile, ResearchMetadata,
    RiskManagement, ScenarioProjection, SearchIntent, SwotAnalysis, VisualProof,
};

// Re-export log utils
pub use utils::truncate_for_log;
