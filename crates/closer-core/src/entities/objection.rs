use serde::{Deserialize, Serialize};

/// A customer fear or objection, as identified by the generator.
///
/// The serde names double as the keys the generator is asked to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Objection {
    /// Short uppercase identifier, e.g. `MIEDO_COSTOS`.
    #[serde(rename = "dolor_clave")]
    pub pain_key: String,
    /// The customer's concern in one sentence.
    #[serde(rename = "descripcion_dolor")]
    pub pain_description: String,
}
