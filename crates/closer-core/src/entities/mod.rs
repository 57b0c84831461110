//! Entity structs for all domain objects.
//!
//! Field names are English; the serde names match the record store columns
//! (see [`crate::tables`]) so a record decodes with `serde_json::from_value`.

mod campaign;
mod objection;
mod prospect;
mod sales_bible;

pub use campaign::Campaign;
pub use objection::Objection;
pub use prospect::Prospect;
pub use sales_bible::SalesBibleEntry;

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::errors::CoreError;

/// Decode a store record into an entity.
pub(crate) fn from_record<T: DeserializeOwned>(
    entity: &'static str,
    record: Map<String, Value>,
) -> Result<T, CoreError> {
    serde_json::from_value(Value::Object(record))
        .map_err(|source| CoreError::MalformedRecord { entity, source })
}
