//! Type definitions module

mod form;
mod report;
mod section;

pub use form::{AnalysisForm, FormField};
pub use report::ReportModel;
pub use section::{SectionId, SectionView};

// Re-export the api crate's public types
pub use market_analyzer_api::{
    ActionPhase, ActionPlan, ActivationScript, AnalysisReport, AnalyzeRequest, ApiStatus,
    AvatarProfile, CompetitorAnalysis, DemographicProfile, EmotionalJourney,
    FinancialProjections, ImpactPhrases, InnerLanguage, Kpi, KeywordStrategy, LogicalProof,
    MarketIntelligence, MentalDriver, PerformanceMetrics, PositioningScope, ProofScript,
    ProofVariations, PsychographicProfile, ResearchMetadata, RiskManagement, ScenarioProjection,
    SearchIntent, SwotAnalysis, VisualProof,
};
