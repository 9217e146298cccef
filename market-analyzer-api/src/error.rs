use serde::{Deserialize, Serialize};

/// Unified error type for all analysis service operations.
///
/// All variants are serializable for structured error reporting. None of
/// them is retried automatically: every exchange with the backend is a
/// one-shot operation, and a failure is terminal for that attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "code")]
pub enum ApiError {
    /// A network-level error occurred (DNS resolution failure, connection
    /// refused, unreadable response body, etc.).
    NetworkError {
        /// Error details.
        detail: String,
    },

    /// The HTTP request timed out.
    ///
    /// Report generation runs real market research on the backend and can
    /// legitimately take minutes; a timeout usually means the configured
    /// request timeout is shorter than that.
    Timeout {
        /// Error details.
        detail: String,
    },

    /// The response body could not be decoded as the expected JSON shape.
    ParseError {
        /// Details about the parse failure.
        detail: String,
    },

    /// The backend answered, but reported the analysis as failed
    /// (`success: false` in the response envelope).
    RemoteError {
        /// Server-supplied failure message.
        message: String,
    },
}

impl ApiError {
    /// Whether this is expected behavior (backend-reported failures) as
    /// opposed to an infrastructure problem, used for log leveling.
    ///
    /// Returns `true` for `warn`-level errors, `false` for `error`-level.
    #[must_use]
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::RemoteError { .. })
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NetworkError { detail } => {
                write!(f, "Network error: {detail}")
            }
            Self::Timeout { detail } => {
                write!(f, "Request timeout: {detail}")
            }
            Self::ParseError { detail } => {
                write!(f, "Parse error: {detail}")
            }
            Self::RemoteError { message } => {
                write!(f, "Analysis failed: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;
