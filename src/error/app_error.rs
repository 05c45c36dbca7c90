use thiserror::Error;

/// Application-wide error type.
///
/// Failures below the episode resolver propagate unchanged; only the
/// "program not in catalog" case is modelled as an absent result rather
/// than an error (see [`crate::services::EpisodeService`]).
#[derive(Error, Debug)]
pub enum AppError {
    /// Resource not found error with entity, field, and value information
    #[error("Resource not found: {entity} with {field}={value}")]
    NotFound {
        entity: String,
        field: String,
        value: String,
    },

    /// Upstream API failure: network error, non-success status, or an
    /// unparseable response body
    #[error("Upstream API error: {message}")]
    UpstreamApi {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Upstream episode date field contained no digit run to decode
    #[error("Malformed publish date: {value:?}")]
    MalformedDate { value: String },

    /// Configuration error with key information
    #[error("Configuration error: {key}")]
    Configuration {
        key: String,
        #[source]
        source: anyhow::Error,
    },

    /// Internal error for unexpected failures
    #[error("Internal error")]
    Internal {
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        AppError::Internal { source: error }
    }
}

/// Type alias for Result with AppError to simplify function signatures
pub type AppResult<T> = Result<T, AppError>;
