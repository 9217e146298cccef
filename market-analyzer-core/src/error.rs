//! Unified error type definition

use serde::Serialize;
use thiserror::Error;

// Re-export library error type
pub use market_analyzer_api::ApiError;

/// Core layer error type
#[derive(Error, Debug, Serialize)]
#[serde(tag = "code", content = "details")]
pub enum CoreError {
    /// A required form field is empty
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// A form field is present but its value does not parse
    #[error("Invalid value for field '{field}': {detail}")]
    InvalidFieldValue { field: String, detail: String },

    /// A submission is already in flight for this session
    #[error("A submission is already in progress")]
    AlreadyInProgress,

    /// Lifecycle API misuse: a lost or duplicated completion signal
    #[error("Invalid lifecycle transition: {0}")]
    InvalidTransition(String),

    /// The report payload omitted the requested section
    #[error("Section not present in report: {0}")]
    SectionMissing(String),

    /// Unrecognized section identifier
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// Analysis service error (converted from the api crate)
    #[error("{0}")]
    Api(#[from] ApiError),
}

impl CoreError {
    /// Whether it is expected behavior (user input, partial reports, etc.),
    /// used for log leveling.
    ///
    /// Level `warn` should be used when returning `true` and level `error`
    /// when returning `false`.
    /// **Please update this method when new variants are added.**
    #[must_use]
    pub fn is_expected(&self) -> bool {
        match self {
            Self::MissingRequiredField(_)
            | Self::InvalidFieldValue { .. }
            | Self::AlreadyInProgress
            | Self::SectionMissing(_)
            | Self::UnknownSection(_) => true,
            Self::Api(e) => e.is_expected(),
            Self::InvalidTransition(_) => false,
        }
    }
}

/// Core layer Result type alias
pub type CoreResult<T> = std::result::Result<T, CoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_missing_required_field() {
        let e = CoreError::MissingRequiredField("segmento".to_string());
        assert_eq!(e.to_string(), "Missing required field: segmento");
    }

    #[test]
    fn display_invalid_field_value() {
        let e = CoreError::InvalidFieldValue {
            field: "preco".to_string(),
            detail: "'abc' is not a decimal number".to_string(),
        };
        assert_eq!(
            e.to_string(),
            "Invalid value for field 'preco': 'abc' is not a decimal number"
        );
    }

    #[test]
    fn display_already_in_progress() {
        assert_eq!(
            CoreError::AlreadyInProgress.to_string(),
            "A submission is already in progress"
        );
    }

    #[test]
    fn display_unknown_section() {
        let e = CoreError::UnknownSection("bogus".to_string());
        assert_eq!(e.to_string(), "Unknown section: bogus");
    }

    #[test]
    fn api_error_converts_and_displays_transparently() {
        let api = ApiError::RemoteError {
            message: "Erro desconhecido".to_string(),
        };
        let e: CoreError = api.into();
        assert_eq!(e.to_string(), "Analysis failed: Erro desconhecido");
    }

    #[test]
    fn invalid_transition_is_not_expected() {
        assert!(!CoreError::InvalidTransition("complete() in idle".into()).is_expected());
        assert!(CoreError::AlreadyInProgress.is_expected());
        assert!(CoreError::SectionMissing("drivers_mentais".into()).is_expected());
        assert!(
            !CoreError::Api(ApiError::NetworkError {
                detail: "down".into()
            })
            .is_expected()
        );
        assert!(
            CoreError::Api(ApiError::RemoteError {
                message: "x".into()
            })
            .is_expected()
        );
    }

    #[test]
    fn serializes_with_code_tag() {
        let e = CoreError::SectionMissing("drivers_mentais".to_string());
        let json = serde_json::to_string(&e).unwrap();
        assert!(json.contains("\"code\":\"SectionMissing\""));
        assert!(json.contains("drivers_mentais"));
    }
}
