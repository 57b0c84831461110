//! Generation error types.

use thiserror::Error;

/// Errors that can occur when asking the provider for text.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// HTTP transport error (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the provider.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The provider returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The provider refused the prompt (safety filters, recitation, ...).
    #[error("prompt blocked: {0}")]
    Blocked(String),

    /// The provider answered without any text.
    #[error("empty response from model '{0}'")]
    Empty(String),
}
