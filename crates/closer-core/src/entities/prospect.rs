use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::ProspectStatus;
use crate::errors::CoreError;
use crate::ids::RecordId;

/// A business found for a campaign, moving through qualification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prospect {
    #[serde(rename = "prospecto_id")]
    pub id: RecordId,
    #[serde(rename = "campana_id")]
    pub campaign_id: RecordId,
    /// Display only; the column is nullable.
    #[serde(rename = "nombre_negocio", default, skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(rename = "estado_prospecto")]
    pub status: ProspectStatus,
    #[serde(rename = "sitio_web", default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl Prospect {
    /// Decode a `prospectos` record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedRecord`] if required columns are missing.
    pub fn from_record(record: Map<String, Value>) -> Result<Self, CoreError> {
        super::from_record("prospect", record)
    }
}
