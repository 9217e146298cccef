//! Test helper module
//!
//! Provides a scriptable mock backend and convenient factory methods.

use std::collections::VecDeque;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use async_trait::async_trait;
use tokio::sync::{Mutex, Notify};

use market_analyzer_api::{
    AnalysisApi, AnalysisReport, AnalyzeRequest, ApiError, ApiStatus, AvatarProfile,
    MentalDriver, PositioningScope,
};

use crate::services::AnalysisService;
use crate::types::{AnalysisForm, FormField};

type ApiResult<T> = std::result::Result<T, ApiError>;

// ===== MockAnalysisApi =====

/// Scriptable [`AnalysisApi`] backend.
///
/// `analyze` pops scripted outcomes in order; with `hold_responses` set it
/// parks each call until `release_one`, which lets tests observe the
/// Submitting window deterministically.
pub struct MockAnalysisApi {
    analyze_results: Mutex<VecDeque<ApiResult<AnalysisReport>>>,
    status_result: Mutex<Option<ApiResult<ApiStatus>>>,
    hold: AtomicBool,
    release: Notify,
    pub analyze_calls: AtomicUsize,
}

impl MockAnalysisApi {
    pub fn new() -> Self {
        Self {
            analyze_results: Mutex::new(VecDeque::new()),
            status_result: Mutex::new(None),
            hold: AtomicBool::new(false),
            release: Notify::new(),
            analyze_calls: AtomicUsize::new(0),
        }
    }

    /// Script the outcome of the next `analyze` call.
    pub async fn push_analysis(&self, result: ApiResult<AnalysisReport>) {
        self.analyze_results.lock().await.push_back(result);
    }

    /// Script the outcome of the next `check_status` call.
    pub async fn set_status(&self, result: ApiResult<ApiStatus>) {
        *self.status_result.lock().await = Some(result);
    }

    /// Park `analyze` calls until [`release_one`](Self::release_one).
    pub fn hold_responses(&self) {
        self.hold.store(true, Ordering::SeqCst);
    }

    /// Release one parked `analyze` call.
    pub fn release_one(&self) {
        self.release.notify_one();
    }
}

#[async_trait]
impl AnalysisApi for MockAnalysisApi {
    async fn analyze(&self, _request: &AnalyzeRequest) -> ApiResult<AnalysisReport> {
        self.analyze_calls.fetch_add(1, Ordering::SeqCst);
        if self.hold.load(Ordering::SeqCst) {
            self.release.notified().await;
        }
        self.analyze_results
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| {
                Err(ApiError::NetworkError {
                    detail: "mock: no scripted analyze outcome".to_string(),
                })
            })
    }

    async fn check_status(&self) -> ApiResult<ApiStatus> {
        self.status_result
            .lock()
            .await
            .take()
            .unwrap_or_else(|| Ok(ApiStatus::default()))
    }
}

// ===== Factory methods =====

/// Create an [`AnalysisService`] over a fresh mock backend.
pub fn create_test_service() -> (Arc<AnalysisService>, Arc<MockAnalysisApi>) {
    let api = Arc::new(MockAnalysisApi::new());
    let service = Arc::new(AnalysisService::new(api.clone()));
    (service, api)
}

/// A form with every field filled and valid.
pub fn filled_form() -> AnalysisForm {
    let mut form = AnalysisForm::new();
    form.set(FormField::Segment, "Educação Online");
    form.set(FormField::Product, "Plataforma de Cursos");
    form.set(FormField::Audience, "Profissionais 25-45 anos");
    form.set(FormField::Price, "197.00");
    form.set(FormField::RevenueGoal, "50000");
    form.set(FormField::MarketingBudget, "10000");
    form.set(FormField::LaunchWindow, "3 meses");
    form.set(FormField::Competitors, "Coursera, Udemy, Hotmart");
    form.set(FormField::AdditionalNotes, "Foco em B2C");
    form
}

/// A small but multi-section report payload.
pub fn sample_report() -> AnalysisReport {
    AnalysisReport {
        avatar_ultra_detalhado: Some(AvatarProfile {
            nome_ficticio: "Mariana Empreendedora".to_string(),
            dores_viscerais: vec!["Trocar tempo por dinheiro".to_string()],
            ..Default::default()
        }),
        escopo_posicionamento: Some(PositioningScope {
            proposta_valor_unica: "Do zero à primeira turma em 90 dias".to_string(),
            ..Default::default()
        }),
        drivers_mentais: Some(vec![MentalDriver {
            nome_driver: "Ambição Liberta".to_string(),
            ..Default::default()
        }]),
        raw_analysis: Some("análise em texto livre".to_string()),
        ..Default::default()
    }
}
