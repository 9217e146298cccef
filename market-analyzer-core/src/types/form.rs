//! Submission form state

use serde::{Deserialize, Serialize};

use market_analyzer_api::AnalyzeRequest;

use crate::error::{CoreError, CoreResult};

/// Form fields, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Segment,
    Product,
    Audience,
    Price,
    RevenueGoal,
    MarketingBudget,
    LaunchWindow,
    Competitors,
    AdditionalNotes,
}

impl FormField {
    /// All fields, in display order.
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Segment,
            FormField::Product,
            FormField::Audience,
            FormField::Price,
            FormField::RevenueGoal,
            FormField::MarketingBudget,
            FormField::LaunchWindow,
            FormField::Competitors,
            FormField::AdditionalNotes,
        ]
    }

    /// Wire name used by the analysis backend.
    pub fn wire_name(&self) -> &'static str {
        match self {
            FormField::Segment => "segmento",
            FormField::Product => "produto",
            FormField::Audience => "publico",
            FormField::Price => "preco",
            FormField::RevenueGoal => "objetivo_receita",
            FormField::MarketingBudget => "orcamento_marketing",
            FormField::LaunchWindow => "prazo_lancamento",
            FormField::Competitors => "concorrentes",
            FormField::AdditionalNotes => "dados_adicionais",
        }
    }

    /// Whether submission requires a non-empty value.
    pub fn is_required(&self) -> bool {
        matches!(
            self,
            FormField::Segment | FormField::Product | FormField::Audience | FormField::Price
        )
    }
}

/// Owned form state for one session.
///
/// Values are stored raw, exactly as typed. Validation happens only in
/// [`to_payload`](Self::to_payload), so partially filled state is always
/// representable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisForm {
    segmento: String,
    produto: String,
    publico: String,
    preco: String,
    objetivo_receita: String,
    orcamento_marketing: String,
    prazo_lancamento: String,
    concorrentes: String,
    dados_adicionais: String,
}

impl AnalysisForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw value against a field, overwriting any prior value.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    /// Current raw value of a field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Segment => &self.segmento,
            FormField::Product => &self.produto,
            FormField::Audience => &self.publico,
            FormField::Price => &self.preco,
            FormField::RevenueGoal => &self.objetivo_receita,
            FormField::MarketingBudget => &self.orcamento_marketing,
            FormField::LaunchWindow => &self.prazo_lancamento,
            FormField::Competitors => &self.concorrentes,
            FormField::AdditionalNotes => &self.dados_adicionais,
        }
    }

    fn slot_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Segment => &mut self.segmento,
            FormField::Product => &mut self.produto,
            FormField::Audience => &mut self.publico,
            FormField::Price => &mut self.preco,
            FormField::RevenueGoal => &mut self.objetivo_receita,
            FormField::MarketingBudget => &mut self.orcamento_marketing,
            FormField::LaunchWindow => &mut self.prazo_lancamento,
            FormField::Competitors => &mut self.concorrentes,
            FormField::AdditionalNotes => &mut self.dados_adicionais,
        }
    }

    /// Build the wire payload, passing every field through verbatim.
    ///
    /// Fails when a required field is empty (whitespace-only counts as
    /// empty) or when the price does not parse as a non-negative decimal.
    pub fn to_payload(&self) -> CoreResult<AnalyzeRequest> {
        for field in FormField::all() {
            if field.is_required() && self.get(*field).trim().is_empty() {
                return Err(CoreError::MissingRequiredField(
                    field.wire_name().to_string(),
                ));
            }
        }

        let price: f64 = self.preco.trim().parse().map_err(|_| {
            CoreError::InvalidFieldValue {
                field: FormField::Price.wire_name().to_string(),
                detail: format!("'{}' is not a decimal number", self.preco),
            }
        })?;
        if !price.is_finite() || price < 0.0 {
            return Err(CoreError::InvalidFieldValue {
                field: FormField::Price.wire_name().to_string(),
                detail: format!("'{}' is not a non-negative price", self.preco),
            });
        }

        Ok(AnalyzeRequest {
            segmento: self.segmento.clone(),
            produto: self.produto.clone(),
            publico: self.publico.clone(),
            preco: self.preco.clone(),
            objetivo_receita: self.objetivo_receita.clone(),
            orcamento_marketing: self.orcamento_marketing.clone(),
            prazo_lancamento: self.prazo_lancamento.clone(),
            concorrentes: self.concorrentes.clone(),
            dados_adicionais: self.dados_adicionais.clone(),
        })
    }
}
