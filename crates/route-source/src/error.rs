//! Error types for the route record source.

use thiserror::Error;

/// Errors raised while loading configuration or fetching records.
///
/// Record defects are not represented here; they surface as findings in the
/// report. Everything below is fatal to the run, and a failed fetch never
/// yields a partial record list.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SourceError {
    /// Required connection or credential values are missing or unusable.
    #[error("configuration error: {0}")]
    Config(String),

    /// The HTTP request could not be performed.
    #[error("network error: {0}")]
    Network(String),

    /// The route service answered with a non-success status.
    #[error("route service returned {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body could not be decoded into route records.
    #[error("malformed response: {0}")]
    Decode(String),
}

pub type Result<T> = std::result::Result<T, SourceError>;

impl From<reqwest::Error> for SourceError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.to_string())
    }
}
