//! Typed report payload returned by the analysis service.
//!
//! The backend's generator emits one large JSON document with a fixed set
//! of named sections. Each section is modeled here with its own concrete
//! schema instead of a loose JSON blob, so a consumer addressing a section
//! gets a typed sub-document. Two tolerances are built in, because the
//! generator does not guarantee exhaustive output:
//!
//! - every section is optional at the top level (partial reports are legal);
//! - every sub-document field defaults when absent, so shape drift in the
//!   generator degrades to empty fields rather than a parse failure.
//!
//! Field identifiers are the backend's wire names, carried verbatim.

use serde::{Deserialize, Serialize};

/// A complete decoded analysis report.
///
/// Immutable by convention: constructed once per successful exchange and
/// replaced wholesale by the next submission, never patched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_ultra_detalhado: Option<AvatarProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escopo_posicionamento: Option<PositioningScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analise_concorrencia_profunda: Option<Vec<CompetitorAnalysis>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub estrategia_palavras_chave: Option<KeywordStrategy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metricas_performance_detalhadas: Option<PerformanceMetrics>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plano_acao_detalhado: Option<ActionPlan>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights_exclusivos_ultra: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inteligencia_mercado: Option<MarketIntelligence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drivers_mentais: Option<Vec<MentalDriver>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provas_visuais_instantaneas: Option<Vec<VisualProof>>,
    /// Free-text fallback emitted when the generator could not produce
    /// structured sections.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_analysis: Option<String>,
    /// Research provenance metadata. Not a renderable section.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dados_pesquisa: Option<ResearchMetadata>,
}

// ─── avatar_ultra_detalhado ────────────────────────────────

/// Ultra-detailed customer avatar.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AvatarProfile {
    pub nome_ficticio: String,
    pub perfil_demografico: DemographicProfile,
    pub perfil_psicografico: PsychographicProfile,
    pub dores_viscerais: Vec<String>,
    pub desejos_secretos: Vec<String>,
    pub objecoes_reais: Vec<String>,
    pub jornada_emocional: EmotionalJourney,
    pub linguagem_interna: InnerLanguage,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemographicProfile {
    pub idade: String,
    pub genero: String,
    pub renda: String,
    pub escolaridade: String,
    pub localizacao: String,
    pub estado_civil: String,
    pub profissao: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PsychographicProfile {
    pub personalidade: String,
    pub valores: String,
    pub interesses: String,
    pub estilo_vida: String,
    pub comportamento_compra: String,
    pub influenciadores: String,
    pub medos_profundos: String,
    pub aspiracoes_secretas: String,
}

/// Awareness-to-post-purchase emotional stages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EmotionalJourney {
    pub consciencia: String,
    pub consideracao: String,
    pub decisao: String,
    pub pos_compra: String,
}

/// How the avatar talks about the problem, in their own words.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InnerLanguage {
    pub frases_dor: Vec<String>,
    pub frases_desejo: Vec<String>,
    pub metaforas_comuns: Vec<String>,
    pub vocabulario_especifico: Vec<String>,
    pub tom_comunicacao: String,
}

// ─── escopo_posicionamento ─────────────────────────────────

/// Market positioning scope.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PositioningScope {
    pub posicionamento_mercado: String,
    pub proposta_valor_unica: String,
    pub diferenciais_competitivos: Vec<String>,
    pub mensagem_central: String,
    pub tom_comunicacao: String,
    pub nicho_especifico: String,
    pub estrategia_oceano_azul: String,
    pub ancoragem_preco: String,
}

// ─── analise_concorrencia_profunda ─────────────────────────

/// Deep-dive on a single competitor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompetitorAnalysis {
    pub nome: String,
    pub analise_swot: SwotAnalysis,
    pub estrategia_marketing: String,
    pub posicionamento: String,
    pub vulnerabilidades: Vec<String>,
    pub share_mercado_estimado: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwotAnalysis {
    pub forcas: Vec<String>,
    pub fraquezas: Vec<String>,
    pub oportunidades: Vec<String>,
    pub ameacas: Vec<String>,
}

// ─── estrategia_palavras_chave ─────────────────────────────

/// Keyword strategy, split by volume tier and search intent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeywordStrategy {
    pub palavras_primarias: Vec<String>,
    pub palavras_secundarias: Vec<String>,
    pub palavras_cauda_longa: Vec<String>,
    pub intencao_busca: SearchIntent,
    pub estrategia_conteudo: String,
    pub sazonalidade: String,
    pub oportunidades_seo: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchIntent {
    pub informacional: Vec<String>,
    pub navegacional: Vec<String>,
    pub transacional: Vec<String>,
}

// ─── metricas_performance_detalhadas ───────────────────────

/// KPI targets and financial projections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PerformanceMetrics {
    pub kpis_principais: Vec<Kpi>,
    pub projecoes_financeiras: FinancialProjections,
    pub roi_esperado: String,
    pub payback_investimento: String,
    pub lifetime_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Kpi {
    pub metrica: String,
    pub objetivo: String,
    pub frequencia: String,
    pub responsavel: String,
}

/// Conservative / realistic / optimistic projection scenarios.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FinancialProjections {
    pub cenario_conservador: ScenarioProjection,
    pub cenario_realista: ScenarioProjection,
    pub cenario_otimista: ScenarioProjection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioProjection {
    pub receita_mensal: String,
    pub clientes_mes: String,
    pub ticket_medio: String,
    pub margem_lucro: String,
}

// ─── plano_acao_detalhado ──────────────────────────────────

/// Phased launch plan: preparation, launch, growth.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionPlan {
    pub fase_1_preparacao: ActionPhase,
    pub fase_2_lancamento: ActionPhase,
    pub fase_3_crescimento: ActionPhase,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionPhase {
    pub duracao: String,
    pub atividades: Vec<String>,
    pub investimento: String,
    pub entregas: Vec<String>,
    pub responsaveis: Vec<String>,
}

// ─── inteligencia_mercado ──────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketIntelligence {
    pub tendencias_emergentes: Vec<String>,
    pub oportunidades_ocultas: Vec<String>,
    pub ameacas_potenciais: Vec<String>,
    pub gaps_mercado: Vec<String>,
    pub inovacoes_disruptivas: Vec<String>,
}

// ─── drivers_mentais ───────────────────────────────────────

/// A persuasion driver with its activation script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MentalDriver {
    pub nome_driver: String,
    pub gatilho_central: String,
    pub definicao_visceral: String,
    pub mecanica_psicologica: String,
    pub momento_instalacao: String,
    pub roteiro_ativacao: ActivationScript,
    pub frases_ancoragem: Vec<String>,
    pub prova_logica: LogicalProof,
    pub loop_reforco: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActivationScript {
    pub pergunta_abertura: String,
    pub historia_analogia: String,
    pub metafora_visual: String,
    pub comando_acao: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogicalProof {
    pub estatistica: String,
    pub caso_exemplo: String,
    pub demonstracao: String,
}

// ─── provas_visuais_instantaneas ───────────────────────────

/// A physical proof experiment with its full stage script.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualProof {
    pub nome_provi: String,
    pub conceito_alvo: String,
    pub categoria: String,
    pub prioridade: String,
    pub momento_ideal: String,
    pub objetivo_psicologico: String,
    pub experimento_escolhido: String,
    pub analogia_perfeita: String,
    pub roteiro_completo: ProofScript,
    pub materiais: Vec<String>,
    pub variacoes: ProofVariations,
    pub gestao_riscos: RiskManagement,
    pub frases_impacto: ImpactPhrases,
    pub dramatizacao_extra: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProofScript {
    pub setup: String,
    pub execucao: String,
    pub climax: String,
    pub bridge: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProofVariations {
    pub online: String,
    pub grande_publico: String,
    pub intimista: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskManagement {
    pub pode_falhar_se: String,
    pub plano_b: String,
    pub transformar_erro: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactPhrases {
    pub durante: String,
    pub revelacao: String,
    pub ancoragem: String,
}

// ─── dados_pesquisa ────────────────────────────────────────

/// Provenance of the research behind the report.
///
/// The backend echoes the submitted form back in `entrada_usuario`; its
/// shape is whatever was posted, so it stays an opaque value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResearchMetadata {
    pub fontes_consultadas: u32,
    pub qualidade_dados: String,
    pub confiabilidade: String,
    pub atualizacao: String,
    pub timestamp_analise: Option<String>,
    pub entrada_usuario: Option<serde_json::Value>,
}
