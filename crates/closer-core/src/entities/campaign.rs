use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::criteria::TargetingCriteria;
use crate::enums::CampaignStatus;
use crate::errors::{CoreError, CriteriaError};
use crate::ids::RecordId;

/// A marketing campaign run on behalf of one client.
///
/// The targeting criteria stay raw on the entity: a campaign with unusable
/// criteria must still be loadable so the failure is reported against it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: RecordId,
    #[serde(rename = "estado_campana")]
    pub status: CampaignStatus,
    #[serde(rename = "criterio_busqueda", default)]
    pub criteria: Value,
}

impl Campaign {
    /// Decode a `campanas` record.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::MalformedRecord`] if required columns are missing.
    pub fn from_record(record: Map<String, Value>) -> Result<Self, CoreError> {
        super::from_record("campaign", record)
    }

    /// Decode and validate the targeting criteria.
    ///
    /// # Errors
    ///
    /// See [`TargetingCriteria::from_column`].
    pub fn targeting(&self) -> Result<TargetingCriteria, CriteriaError> {
        TargetingCriteria::from_column(&self.criteria)
    }
}
