use thiserror::Error;

/// Errors that can occur while obtaining rates or symbols.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RateError {
    /// The request never produced a response body.
    #[error("Rate source unreachable: {0}")]
    Transport(String),
    /// The source answered but reported failure.
    #[error("Rate source reported failure fetching {resource}: {reason}")]
    Unsuccessful {
        resource: &'static str,
        reason: String,
    },
    #[error("Invalid rate source payload: {0}")]
    InvalidPayload(String),
}

/// Result type for rate operations.
pub type Result<T> = std::result::Result<T, RateError>;
