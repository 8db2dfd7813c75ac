use thiserror::Error;

/// Failures surfaced by the analysis engine and its counters
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("Text to analyze must not be empty")]
    InvalidInput,

    #[error("Unknown analysis kind: {0}")]
    UnknownKind(String),

    #[error("Invalid counting service endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("Counting service unavailable: {0}")]
    RemoteUnavailable(String),

    #[error("Malformed counting response: {0}")]
    MalformedResponse(String),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
