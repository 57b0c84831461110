//! Typed campaign targeting criteria.
//!
//! `campanas.criterio_busqueda` is a JSON document written by the campaign
//! setup flow. Depending on the column type it reaches us either as an encoded
//! string (text column) or as an already-decoded object (json/jsonb column).
//! It is decoded exactly once, here, and the product description is validated
//! before any generation work starts.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::errors::CriteriaError;

/// Field holding the free-text description of what the client sells.
pub const PRODUCT_FIELD: &str = "que_vendes";

/// Decoded targeting criteria of a campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetingCriteria {
    /// What the client sells, in their own words.
    #[serde(rename = "que_vendes")]
    pub product: String,

    /// Every other targeting field (location, sector, ...), kept for other workers.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl TargetingCriteria {
    /// Decode the raw `criterio_busqueda` column value.
    ///
    /// # Errors
    ///
    /// Returns [`CriteriaError`] if the value is not a JSON object (or a string
    /// encoding one), or if the product description is absent or blank.
    pub fn from_column(raw: &Value) -> Result<Self, CriteriaError> {
        let decoded;
        let value = match raw {
            Value::String(text) => {
                decoded = serde_json::from_str::<Value>(text)?;
                &decoded
            }
            other => other,
        };

        let Value::Object(fields) = value else {
            return Err(CriteriaError::NotAnObject(json_kind(value)));
        };

        let product = fields
            .get(PRODUCT_FIELD)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .ok_or(CriteriaError::MissingField(PRODUCT_FIELD))?;

        let mut extra = fields.clone();
        extra.remove(PRODUCT_FIELD);

        Ok(Self {
            product: product.to_string(),
            extra,
        })
    }
}

const fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
