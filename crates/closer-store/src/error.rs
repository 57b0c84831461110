//! Store error types.

use thiserror::Error;

/// Errors from record store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// HTTP transport error (connect, timeout, body decode).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The store rejected the request (constraint violation, bad column, auth).
    #[error("store error ({status}) on '{table}': {message}")]
    Api {
        table: String,
        status: u16,
        message: String,
    },

    /// The store answered with something that is not a list of records.
    #[error("unexpected response from '{table}': {reason}")]
    Decode { table: String, reason: String },

    /// The configured store key cannot be sent as an HTTP header.
    #[error("invalid store key: {0}")]
    InvalidKey(String),

    /// An update without filters would touch every row of the table.
    #[error("refusing unfiltered update on '{0}'")]
    UnfilteredUpdate(String),
}
