//! Prompt templates.

/// Key of the objection list in the generator's JSON answer.
pub const OBJECTIONS_KEY: &str = "objeciones";

/// Prompt asking for `count` buyer objections as a JSON object.
pub fn objections_prompt(product: &str, count: usize) -> String {
    format!(
        r#"Actúa como un psicólogo de ventas con experiencia en ventas consultivas.
Tu cliente vende: "{product}".

Devuelve un objeto JSON cuya única clave sea "{OBJECTIONS_KEY}".
Su valor es una lista de {count} objeciones o miedos frecuentes que un prospecto tiene antes de comprar.
Cada elemento es un objeto con dos claves:
- "dolor_clave": identificador corto en MAYÚSCULAS_CON_GUIONES_BAJOS (por ejemplo "MIEDO_COSTOS").
- "descripcion_dolor": la preocupación del prospecto, en una sola frase.

Responde solo con el objeto JSON, sin texto adicional."#
    )
}

/// Prompt asking for persuasive copy overcoming one objection.
pub fn rebuttal_prompt(product: &str, pain_description: &str) -> String {
    format!(
        r#"Actúa como un redactor publicitario de ventas de primer nivel.
Producto de tu cliente: "{product}".
Objeción o dolor del prospecto: "{pain_description}".

Escribe un argumentario de venta empático y convincente que desmonte esta objeción concreta
y presente el producto como la solución."#
    )
}
