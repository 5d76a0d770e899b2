use thiserror::Error;

/// Error types for word translation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The upstream endpoint could not be reached, timed out, or its body
    /// could not be read. Carries the underlying transport message.
    #[error("{0}")]
    Transport(String),
    /// The upstream answered with its HTML "Bad Request" page instead of JSON
    #[error("invalid request")]
    InvalidRequest,
    /// The body was not the nested JSON array shape we know how to walk
    #[error("malformed response: {0}")]
    MalformedResponse(String),
    /// The upstream returned an empty top-level array
    #[error("no translation found")]
    NoTranslation,
    /// Bad endpoint URL, timeout value or HTTP client setup
    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for TranslateError {
    fn from(err: reqwest::Error) -> Self {
        TranslateError::Transport(err.to_string())
    }
}

/// Result type for translation operations
pub type TranslateResult<T> = Result<T, TranslateError>;
