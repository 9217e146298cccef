//! Report section identifiers and typed section views

use serde::{Deserialize, Serialize};

use market_analyzer_api::{
    ActionPlan, AvatarProfile, CompetitorAnalysis, KeywordStrategy, MarketIntelligence,
    MentalDriver, PerformanceMetrics, PositioningScope, VisualProof,
};

/// Known report sections, in canonical render order.
///
/// The wire identifiers are the backend's contract and are fixed; the
/// free-text fallback `raw_analysis` renders last when present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    #[default]
    AvatarUltraDetalhado,
    EscopoPosicionamento,
    AnaliseConcorrenciaProfunda,
    EstrategiaPalavrasChave,
    MetricasPerformanceDetalhadas,
    PlanoAcaoDetalhado,
    InsightsExclusivosUltra,
    InteligenciaMercado,
    DriversMentais,
    ProvasVisuaisInstantaneas,
    RawAnalysis,
}

impl SectionId {
    /// All sections, in canonical order.
    pub fn all() -> &'static [SectionId] {
        &[
            SectionId::AvatarUltraDetalhado,
            SectionId::EscopoPosicionamento,
            SectionId::AnaliseConcorrenciaProfunda,
            SectionId::EstrategiaPalavrasChave,
            SectionId::MetricasPerformanceDetalhadas,
            SectionId::PlanoAcaoDetalhado,
            SectionId::InsightsExclusivosUltra,
            SectionId::InteligenciaMercado,
            SectionId::DriversMentais,
            SectionId::ProvasVisuaisInstantaneas,
            SectionId::RawAnalysis,
        ]
    }

    /// Wire identifier of the section.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::AvatarUltraDetalhado => "avatar_ultra_detalhado",
            SectionId::EscopoPosicionamento => "escopo_posicionamento",
            SectionId::AnaliseConcorrenciaProfunda => "analise_concorrencia_profunda",
            SectionId::EstrategiaPalavrasChave => "estrategia_palavras_chave",
            SectionId::MetricasPerformanceDetalhadas => "metricas_performance_detalhadas",
            SectionId::PlanoAcaoDetalhado => "plano_acao_detalhado",
            SectionId::InsightsExclusivosUltra => "insights_exclusivos_ultra",
            SectionId::InteligenciaMercado => "inteligencia_mercado",
            SectionId::DriversMentais => "drivers_mentais",
            SectionId::ProvasVisuaisInstantaneas => "provas_visuais_instantaneas",
            SectionId::RawAnalysis => "raw_analysis",
        }
    }

    /// Parse a wire identifier.
    pub fn parse(id: &str) -> Option<SectionId> {
        SectionId::all().iter().copied().find(|s| s.as_str() == id)
    }

    /// Human-readable section title.
    pub fn title(&self) -> &'static str {
        match self {
            SectionId::AvatarUltraDetalhado => "Avatar Ultra Detalhado",
            SectionId::EscopoPosicionamento => "Escopo de Posicionamento",
            SectionId::AnaliseConcorrenciaProfunda => "Análise de Concorrência",
            SectionId::EstrategiaPalavrasChave => "Estratégia de Palavras-chave",
            SectionId::MetricasPerformanceDetalhadas => "Métricas de Performance",
            SectionId::PlanoAcaoDetalhado => "Plano de Ação Detalhado",
            SectionId::InsightsExclusivosUltra => "Insights Exclusivos",
            SectionId::InteligenciaMercado => "Inteligência de Mercado",
            SectionId::DriversMentais => "Drivers Mentais",
            SectionId::ProvasVisuaisInstantaneas => "Provas Visuais Instantâneas",
            SectionId::RawAnalysis => "Análise Completa (Texto)",
        }
    }

    /// Next section, wrapping around.
    pub fn next(&self) -> SectionId {
        match self {
            SectionId::AvatarUltraDetalhado => SectionId::EscopoPosicionamento,
            SectionId::EscopoPosicionamento => SectionId::AnaliseConcorrenciaProfunda,
            SectionId::AnaliseConcorrenciaProfunda => SectionId::EstrategiaPalavrasChave,
            SectionId::EstrategiaPalavrasChave => SectionId::MetricasPerformanceDetalhadas,
            SectionId::MetricasPerformanceDetalhadas => SectionId::PlanoAcaoDetalhado,
            SectionId::PlanoAcaoDetalhado => SectionId::InsightsExclusivosUltra,
            SectionId::InsightsExclusivosUltra => SectionId::InteligenciaMercado,
            SectionId::InteligenciaMercado => SectionId::DriversMentais,
            SectionId::DriversMentais => SectionId::ProvasVisuaisInstantaneas,
            SectionId::ProvasVisuaisInstantaneas => SectionId::RawAnalysis,
            SectionId::RawAnalysis => SectionId::AvatarUltraDetalhado,
        }
    }

    /// Previous section, wrapping around.
    pub fn prev(&self) -> SectionId {
        match self {
            SectionId::AvatarUltraDetalhado => SectionId::RawAnalysis,
            SectionId::EscopoPosicionamento => SectionId::AvatarUltraDetalhado,
            SectionId::AnaliseConcorrenciaProfunda => SectionId::EscopoPosicionamento,
            SectionId::EstrategiaPalavrasChave => SectionId::AnaliseConcorrenciaProfunda,
            SectionId::MetricasPerformanceDetalhadas => SectionId::EstrategiaPalavrasChave,
            SectionId::PlanoAcaoDetalhado => SectionId::MetricasPerformanceDetalhadas,
            SectionId::InsightsExclusivosUltra => SectionId::PlanoAcaoDetalhado,
            SectionId::InteligenciaMercado => SectionId::InsightsExclusivosUltra,
            SectionId::DriversMentais => SectionId::InteligenciaMercado,
            SectionId::ProvasVisuaisInstantaneas => SectionId::DriversMentais,
            SectionId::RawAnalysis => SectionId::ProvasVisuaisInstantaneas,
        }
    }
}

impl std::fmt::Display for SectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Borrowed, typed view of one report section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SectionView<'a> {
    Avatar(&'a AvatarProfile),
    Positioning(&'a PositioningScope),
    Competitors(&'a [CompetitorAnalysis]),
    Keywords(&'a KeywordStrategy),
    Metrics(&'a PerformanceMetrics),
    ActionPlan(&'a ActionPlan),
    Insights(&'a [String]),
    MarketIntelligence(&'a MarketIntelligence),
    MentalDrivers(&'a [MentalDriver]),
    VisualProofs(&'a [VisualProof]),
    RawAnalysis(&'a str),
}

impl SectionView<'_> {
    /// Identifier of the viewed section.
    pub fn id(&self) -> SectionId {
        match self {
            SectionView::Avatar(_) => SectionId::AvatarUltraDetalhado,
            SectionView::Positioning(_) => SectionId::EscopoPosicionamento,
            SectionView::Competitors(_) => SectionId::AnaliseConcorrenciaProfunda,
            SectionView::Keywords(_) => SectionId::EstrategiaPalavrasChave,
            SectionView::Metrics(_) => SectionId::MetricasPerformanceDetalhadas,
            SectionView::ActionPlan(_) => SectionId::PlanoAcaoDetalhado,
            SectionView::Insights(_) => SectionId::InsightsExclusivosUltra,
            SectionView::MarketIntelligence(_) => SectionId::InteligenciaMercado,
            SectionView::MentalDrivers(_) => SectionId::DriversMentais,
            SectionView::VisualProofs(_) => SectionId::ProvasVisuaisInstantaneas,
            SectionView::RawAnalysis(_) => SectionId::RawAnalysis,
        }
    }
}
