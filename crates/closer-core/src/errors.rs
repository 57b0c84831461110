//! Cross-cutting error types for Closer.
//!
//! Domain-specific errors (`StoreError`, `GenerationError`, ...) are defined in
//! their respective crates and converge in `closer-analyst`.

use thiserror::Error;

/// Errors raised while turning store records into domain values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A record did not have the shape of the entity it was read as.
    #[error("Malformed {entity} record: {source}")]
    MalformedRecord {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// An entity could not be encoded as a store record.
    #[error("Cannot encode {entity} record: {source}")]
    EncodeRecord {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A state machine transition was attempted that is not allowed.
    #[error("Invalid state transition: {entity} {id} from {from} to {to}")]
    InvalidTransition {
        entity: &'static str,
        id: String,
        from: String,
        to: String,
    },
}

/// Errors decoding a campaign's targeting criteria (`criterio_busqueda`).
#[derive(Debug, Error)]
pub enum CriteriaError {
    /// The column held text that is not JSON.
    #[error("targeting criteria is not valid JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    /// The column held JSON that is not an object.
    #[error("targeting criteria must be a JSON object, got {0}")]
    NotAnObject(&'static str),

    /// A required field is absent or blank.
    #[error("targeting criteria is missing required field '{0}'")]
    MissingField(&'static str),
}
