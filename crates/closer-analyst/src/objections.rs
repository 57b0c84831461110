//! Objection extraction and rebuttal generation.
//!
//! Both are a single generation call. Extraction additionally parses the
//! answer strictly; rebuttals are used verbatim.

use closer_core::entities::Objection;
use closer_llm::{GenerationError, TextGenerator};
use serde_json::Value;

use crate::error::{ExtractError, ParseError};
use crate::prompts::{OBJECTIONS_KEY, objections_prompt, rebuttal_prompt};

/// Ask the generator for `count` objections a buyer of `product` would raise.
///
/// Pain keys are not deduplicated and the list length is not checked against
/// `count`: whatever well-formed list the generator returns is used.
///
/// # Errors
///
/// Returns [`ExtractError::Generation`] if the call fails and
/// [`ExtractError::Parse`] if the answer is not the expected JSON.
pub async fn extract_objections(
    generator: &dyn TextGenerator,
    product: &str,
    count: usize,
) -> Result<Vec<Objection>, ExtractError> {
    let text = generator
        .generate(&objections_prompt(product, count))
        .await?;
    Ok(parse_objections(&text)?)
}

/// Ask the generator for copy that overcomes one objection.
///
/// # Errors
///
/// Returns [`GenerationError`] if the call fails.
pub async fn generate_rebuttal(
    generator: &dyn TextGenerator,
    product: &str,
    pain_description: &str,
) -> Result<String, GenerationError> {
    generator
        .generate(&rebuttal_prompt(product, pain_description))
        .await
}

/// Parse `{"objeciones": [{"dolor_clave": ..., "descripcion_dolor": ...}, ...]}`,
/// tolerating a surrounding Markdown code fence.
///
/// # Errors
///
/// Returns [`ParseError`] describing the first problem found.
pub fn parse_objections(text: &str) -> Result<Vec<Objection>, ParseError> {
    let json: Value = serde_json::from_str(strip_code_fences(text)).map_err(ParseError::InvalidJson)?;

    let Some(Value::Array(items)) = json.get(OBJECTIONS_KEY) else {
        return Err(ParseError::MissingList(OBJECTIONS_KEY));
    };
    if items.is_empty() {
        return Err(ParseError::NoObjections);
    }

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value(item.clone())
                .map_err(|source| ParseError::MalformedObjection { index, source })
        })
        .collect()
}

/// Remove a leading ```` ```json ```` (or bare ```` ``` ````) line and a trailing
/// ```` ``` ````.
fn strip_code_fences(text: &str) -> &str {
    let mut body = text.trim();
    if let Some(rest) = body.strip_prefix("```") {
        body = rest
            .strip_prefix("json")
            .or_else(|| rest.strip_prefix("JSON"))
            .unwrap_or(rest);
    }
    if let Some(rest) = body.strip_suffix("```") {
        body = rest;
    }
    body.trim()
}

#[cfg(test)]
mod tests {
    use super::*;
    use closer_llm::ScriptedGenerator;
    use pretty_assertions::assert_eq;

    const FENCED: &str = r#"```json
{
  "objeciones": [
    {"dolor_clave": "MIEDO_COSTOS", "descripcion_dolor": "Temen que el presupuesto se dispare."},
    {"dolor_clave": "MIEDO_PLAZOS", "descripcion_dolor": "Creen que la obra no terminará a tiempo."}
  ]
}
```"#;

    #[test]
    fn parses_fenced_response() {
        let objections = parse_objections(FENCED).unwrap();
        assert_eq!(objections.len(), 2);
        assert_eq!(objections[0].pain_key, "MIEDO_COSTOS");
        assert_eq!(
            objections[1].pain_description,
            "Creen que la obra no terminará a tiempo."
        );
    }

    #[test]
    fn parses_bare_json() {
        let text = r#"{"objeciones": [{"dolor_clave": "A", "descripcion_dolor": "a"}]}"#;
        assert_eq!(parse_objections(text).unwrap().len(), 1);
    }

    #[test]
    fn duplicate_keys_pass_through() {
        let text = r#"{"objeciones": [
            {"dolor_clave": "MIEDO_COSTOS", "descripcion_dolor": "uno"},
            {"dolor_clave": "MIEDO_COSTOS", "descripcion_dolor": "dos"}
        ]}"#;
        let keys: Vec<String> = parse_objections(text)
            .unwrap()
            .into_iter()
            .map(|o| o.pain_key)
            .collect();
        assert_eq!(keys, vec!["MIEDO_COSTOS", "MIEDO_COSTOS"]);
    }

    #[test]
    fn rejects_prose() {
        let err = parse_objections("Claro, aquí tienes las objeciones:").unwrap_err();
        assert!(matches!(err, ParseError::InvalidJson(_)));
    }

    #[test]
    fn rejects_missing_list() {
        let err = parse_objections(r#"{"objections": []}"#).unwrap_err();
        assert!(matches!(err, ParseError::MissingList("objeciones")));
    }

    #[test]
    fn rejects_empty_list() {
        let err = parse_objections(r#"{"objeciones": []}"#).unwrap_err();
        assert!(matches!(err, ParseError::NoObjections));
    }

    #[test]
    fn rejects_malformed_entry() {
        let text = r#"{"objeciones": [
            {"dolor_clave": "A", "descripcion_dolor": "a"},
            {"dolor_clave": "B"}
        ]}"#;
        let err = parse_objections(text).unwrap_err();
        assert!(matches!(err, ParseError::MalformedObjection { index: 1, .. }));
    }

    #[test]
    fn strips_bare_fence() {
        assert_eq!(strip_code_fences("```\n{}\n```"), "{}");
        assert_eq!(strip_code_fences("  {}  "), "{}");
    }

    #[tokio::test]
    async fn extract_sends_one_prompt() {
        let generator = ScriptedGenerator::queued([Ok(FENCED.to_string())]);
        let objections = extract_objections(&generator, "obra de lujo", 5)
            .await
            .unwrap();

        assert_eq!(objections.len(), 2);
        assert_eq!(generator.calls(), 1);
        assert!(generator.prompts()[0].contains("\"obra de lujo\""));
    }

    #[tokio::test]
    async fn extract_surfaces_generation_failure() {
        let generator = ScriptedGenerator::queued([Err(GenerationError::Blocked("SAFETY".into()))]);
        let err = extract_objections(&generator, "x", 5).await.unwrap_err();
        assert!(matches!(err, ExtractError::Generation(_)));
    }

    #[tokio::test]
    async fn rebuttal_is_verbatim() {
        let copy = "  Le garantizamos un presupuesto cerrado.\n";
        let generator = ScriptedGenerator::queued([Ok(copy.to_string())]);
        let rebuttal = generate_rebuttal(&generator, "obra", "miedo al coste")
            .await
            .unwrap();
        assert_eq!(rebuttal, copy);
    }
}
