//! Business logic service layer

mod analysis_service;

pub use analysis_service::AnalysisService;
