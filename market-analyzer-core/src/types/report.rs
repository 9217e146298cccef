//! Section-addressable report model

use chrono::{DateTime, Utc};

use market_analyzer_api::{AnalysisReport, ResearchMetadata};

use crate::error::{CoreError, CoreResult};

use super::section::{SectionId, SectionView};

/// Read-only, section-addressable wrapper around a decoded report.
///
/// Constructed once per successful submission and replaced wholesale by
/// the next one, never patched. The generator does not guarantee an
/// exhaustive report, so addressing an absent section is an expected
/// condition, not a crash.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportModel {
    report: AnalysisReport,
    received_at: DateTime<Utc>,
}

impl ReportModel {
    pub fn new(report: AnalysisReport) -> Self {
        Self {
            report,
            received_at: Utc::now(),
        }
    }

    /// Typed view of one section, or `SectionMissing` when the payload
    /// omitted it.
    pub fn section(&self, id: SectionId) -> CoreResult<SectionView<'_>> {
        let r = &self.report;
        let view = match id {
            SectionId::AvatarUltraDetalhado => {
                r.avatar_ultra_detalhado.as_ref().map(SectionView::Avatar)
            }
            SectionId::EscopoPosicionamento => {
                r.escopo_posicionamento.as_ref().map(SectionView::Positioning)
            }
            SectionId::AnaliseConcorrenciaProfunda => r
                .analise_concorrencia_profunda
                .as_deref()
                .map(SectionView::Competitors),
            SectionId::EstrategiaPalavrasChave => {
                r.estrategia_palavras_chave.as_ref().map(SectionView::Keywords)
            }
            SectionId::MetricasPerformanceDetalhadas => r
                .metricas_performance_detalhadas
                .as_ref()
                .map(SectionView::Metrics),
            SectionId::PlanoAcaoDetalhado => {
                r.plano_acao_detalhado.as_ref().map(SectionView::ActionPlan)
            }
            SectionId::InsightsExclusivosUltra => r
                .insights_exclusivos_ultra
                .as_deref()
                .map(SectionView::Insights),
            SectionId::InteligenciaMercado => r
                .inteligencia_mercado
                .as_ref()
                .map(SectionView::MarketIntelligence),
            SectionId::DriversMentais => {
                r.drivers_mentais.as_deref().map(SectionView::MentalDrivers)
            }
            SectionId::ProvasVisuaisInstantaneas => r
                .provas_visuais_instantaneas
                .as_deref()
                .map(SectionView::VisualProofs),
            SectionId::RawAnalysis => r.raw_analysis.as_deref().map(SectionView::RawAnalysis),
        };

        view.ok_or_else(|| CoreError::SectionMissing(id.as_str().to_string()))
    }

    /// Whether the payload carried this section.
    pub fn has_section(&self, id: SectionId) -> bool {
        self.section(id).is_ok()
    }

    /// Sections present in this report, in canonical order.
    pub fn available_sections(&self) -> Vec<SectionId> {
        SectionId::all()
            .iter()
            .copied()
            .filter(|id| self.has_section(*id))
            .collect()
    }

    /// Research provenance attached by the backend, when present.
    pub fn research_metadata(&self) -> Option<&ResearchMetadata> {
        self.report.dados_pesquisa.as_ref()
    }

    /// When this report was received by the client.
    pub fn received_at(&self) -> DateTime<Utc> {
        self.received_at
    }

    /// The underlying decoded payload.
    pub fn raw(&self) -> &AnalysisReport {
        &self.report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use market_analyzer_api::{AvatarProfile, MarketIntelligence, PositioningScope};

    fn sample_report() -> AnalysisReport {
        AnalysisReport {
            avatar_ultra_detalhado: Some(AvatarProfile {
                nome_ficticio: "Mariana".to_string(),
                ..Default::default()
            }),
            escopo_posicionamento: Some(PositioningScope {
                mensagem_central: "Conhecimento que vira receita".to_string(),
                ..Default::default()
            }),
            insights_exclusivos_ultra: Some(vec!["insight um".to_string()]),
            inteligencia_mercado: Some(MarketIntelligence::default()),
            raw_analysis: Some("texto".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn section_returns_the_exact_sub_document() {
        let model = ReportModel::new(sample_report());

        match model.section(SectionId::AvatarUltraDetalhado).unwrap() {
            SectionView::Avatar(avatar) => assert_eq!(avatar.nome_ficticio, "Mariana"),
            other => panic!("wrong view: {other:?}"),
        }
        match model.section(SectionId::InsightsExclusivosUltra).unwrap() {
            SectionView::Insights(insights) => assert_eq!(insights, ["insight um"]),
            other => panic!("wrong view: {other:?}"),
        }
        match model.section(SectionId::RawAnalysis).unwrap() {
            SectionView::RawAnalysis(text) => assert_eq!(text, "texto"),
            other => panic!("wrong view: {other:?}"),
        }
    }

    #[test]
    fn absent_section_is_missing_but_others_stay_retrievable() {
        let model = ReportModel::new(sample_report());

        assert!(matches!(
            model.section(SectionId::DriversMentais),
            Err(CoreError::SectionMissing(id)) if id == "drivers_mentais"
        ));
        assert!(model.section(SectionId::AvatarUltraDetalhado).is_ok());
        assert!(model.section(SectionId::EscopoPosicionamento).is_ok());
    }

    #[test]
    fn available_sections_in_canonical_order() {
        let model = ReportModel::new(sample_report());
        assert_eq!(
            model.available_sections(),
            vec![
                SectionId::AvatarUltraDetalhado,
                SectionId::EscopoPosicionamento,
                SectionId::InsightsExclusivosUltra,
                SectionId::InteligenciaMercado,
                SectionId::RawAnalysis,
            ]
        );
    }

    #[test]
    fn view_ids_match_requested_sections() {
        let model = ReportModel::new(sample_report());
        for id in model.available_sections() {
            assert_eq!(model.section(id).unwrap().id(), id);
        }
    }

    #[test]
    fn empty_report_has_no_sections() {
        let model = ReportModel::new(AnalysisReport::default());
        assert!(model.available_sections().is_empty());
        assert!(model.research_metadata().is_none());
    }
}
