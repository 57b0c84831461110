//! Fixtures shared by the unit tests.

use closer_core::entities::Campaign;
use closer_llm::ScriptedGenerator;
use closer_store::Record;
use serde_json::{Value, json};

pub(crate) fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("fixture is not an object: {other}"),
    }
}

/// A campaign row with criteria stored as a JSON string, the way the
/// dashboard writes them.
pub(crate) fn campaign_record(id: i64, status: &str) -> Record {
    record(json!({
        "id": id,
        "estado_campana": status,
        "criterio_busqueda": r#"{"que_vendes": "luxury construction services"}"#,
    }))
}

pub(crate) fn campaign(id: i64, status: &str) -> Campaign {
    Campaign::from_record(campaign_record(id, status)).unwrap()
}

pub(crate) fn objections_json(n: usize) -> String {
    let items: Vec<Value> = (1..=n)
        .map(|i| {
            json!({
                "dolor_clave": format!("DOLOR_{i}"),
                "descripcion_dolor": format!("Pain number {i}."),
            })
        })
        .collect();
    json!({ "objeciones": items }).to_string()
}

/// Answers the objections prompt with `n` objections and each rebuttal
/// prompt with a rebuttal naming the pain it was asked about.
pub(crate) fn sales_generator(n: usize) -> ScriptedGenerator {
    ScriptedGenerator::from_fn(move |prompt| {
        if prompt.contains("\"objeciones\"") {
            return Ok(objections_json(n));
        }
        let pain = (1..=n)
            .find(|i| prompt.contains(&format!("Pain number {i}.")))
            .unwrap_or(0);
        Ok(format!("Rebuttal for pain {pain}."))
    })
}

pub(crate) fn prospects(campaign_id: i64, n: usize) -> Vec<Record> {
    (1..=n)
        .map(|i| {
            record(json!({
                "prospecto_id": campaign_id * 1000 + i as i64,
                "campana_id": campaign_id,
                "nombre_negocio": format!("Negocio {i}"),
                "estado_prospecto": "hunted",
            }))
        })
        .collect()
}
