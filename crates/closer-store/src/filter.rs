//! Equality filters.

use serde_json::Value;

/// `column = value`.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: String,
    pub value: Value,
}

impl Filter {
    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    /// Whether `record` satisfies the filter. A missing column never matches,
    /// and `null` only matches an explicit `null`.
    #[must_use]
    pub fn matches(&self, record: &crate::Record) -> bool {
        record.get(&self.column) == Some(&self.value)
    }

    /// PostgREST query pair, e.g. `estado_campana=eq.analyzing`.
    #[must_use]
    pub fn to_query_pair(&self) -> String {
        let operand = match &self.value {
            Value::Null => "is.null".to_string(),
            Value::String(s) => format!("eq.{}", urlencoding::encode(s)),
            other => format!("eq.{other}"),
        };
        format!("{}={operand}", urlencoding::encode(&self.column))
    }
}
