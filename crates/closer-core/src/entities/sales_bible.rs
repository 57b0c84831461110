use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::entities::Objection;
use crate::errors::CoreError;
use crate::ids::RecordId;

/// One (objection, rebuttal) pair of a campaign's sales bible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalesBibleEntry {
    #[serde(rename = "campana_id")]
    pub campaign_id: RecordId,
    #[serde(rename = "dolor_clave")]
    pub pain_key: String,
    #[serde(rename = "descripcion_dolor")]
    pub pain_description: String,
    #[serde(rename = "argumentario_solucion")]
    pub rebuttal: String,
}

impl SalesBibleEntry {
    #[must_use]
    pub fn new(campaign_id: RecordId, objection: Objection, rebuttal: String) -> Self {
        Self {
            campaign_id,
            pain_key: objection.pain_key,
            pain_description: objection.pain_description,
            rebuttal,
        }
    }

    /// Encode as an `argumentarios_venta` insert payload.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::EncodeRecord`] if serialization does not produce
    /// a JSON object.
    pub fn to_record(&self) -> Result<Map<String, Value>, CoreError> {
        let encode = |source| CoreError::EncodeRecord {
            entity: "sales bible entry",
            source,
        };
        match serde_json::to_value(self).map_err(encode)? {
            Value::Object(record) => Ok(record),
            _ => Err(encode(<serde_json::Error as serde::ser::Error>::custom(
                "not a JSON object",
            ))),
        }
    }
}
