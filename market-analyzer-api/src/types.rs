//! Wire types for the analysis service endpoints.
//!
//! Field names are the backend's contract and are carried verbatim,
//! including the Portuguese form-field identifiers.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::report::AnalysisReport;

/// Payload for `POST /analyze`.
///
/// All fields are raw strings taken from the submission form; the backend
/// does its own interpretation (e.g. parsing `preco` as a price). Callers
/// are expected to have validated the required fields before submitting.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Market segment (required).
    pub segmento: String,
    /// Product or service under analysis (required).
    pub produto: String,
    /// Target audience (required).
    pub publico: String,
    /// Unit price in R$ (required).
    pub preco: String,
    /// Monthly revenue goal in R$.
    pub objetivo_receita: String,
    /// Marketing budget in R$.
    pub orcamento_marketing: String,
    /// Launch timeframe.
    pub prazo_lancamento: String,
    /// Main competitors, free text.
    pub concorrentes: String,
    /// Additional free-text notes.
    pub dados_adicionais: String,
}

/// Response envelope for `POST /analyze`.
///
/// The backend also answers validation failures and internal errors with
/// this shape minus the `success` key (HTTP 4xx/5xx with only `error`), so
/// `success` defaults to `false` when absent.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeResponse {
    #[serde(default)]
    pub success: bool,
    pub analysis: Option<AnalysisReport>,
    pub error: Option<String>,
}

/// Response of `GET /test-apis`.
///
/// Reports which of the backend's external data sources are configured.
/// Display-only: the submission flow does not depend on it.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiStatus {
    /// Per-API configuration flag, keyed by the backend's API identifier.
    #[serde(default)]
    pub apis_configured: HashMap<String, bool>,
    /// Number of configured APIs.
    #[serde(default)]
    pub total_configured: u32,
}
