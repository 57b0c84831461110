//! Analyst error types.
//!
//! [`ParseError`] and [`ExtractError`] stay inside the sales-bible builder,
//! which logs them and gives up for the cycle. [`CycleError`] is what escapes
//! a cycle and reaches the worker loop.

use closer_core::errors::CoreError;
use closer_llm::GenerationError;
use closer_store::StoreError;
use thiserror::Error;

/// The generator's objection list could not be understood.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The response is not JSON, even after removing code fences.
    #[error("response is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    /// The JSON lacks the `objeciones` list.
    #[error("response has no '{0}' list")]
    MissingList(&'static str),

    /// An entry of the list is not a `{dolor_clave, descripcion_dolor}` object.
    #[error("objection #{index} is malformed: {source}")]
    MalformedObjection {
        index: usize,
        #[source]
        source: serde_json::Error,
    },

    /// The list is present but empty.
    #[error("response lists no objections")]
    NoObjections,
}

/// Objection extraction failed before anything was written.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error(transparent)]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Errors that abort a cycle.
#[derive(Debug, Error)]
pub enum CycleError {
    #[error("store: {0}")]
    Store(#[from] StoreError),

    #[error("generation: {0}")]
    Generation(#[from] GenerationError),

    #[error(transparent)]
    Record(#[from] CoreError),
}
