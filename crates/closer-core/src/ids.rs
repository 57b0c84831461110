//! Record identifiers.
//!
//! The record store hands out either integer keys (`bigserial`) or textual keys
//! (`uuid`, slugs). [`RecordId`] keeps whichever JSON shape the store used so a
//! foreign key written back (e.g. `campana_id` on a sales-bible row) matches the
//! column type exactly.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Primary or foreign key of a record, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Int(i64),
    Text(String),
}

impl RecordId {
    /// JSON value suitable for an insert payload or an equality filter.
    #[must_use]
    pub fn to_value(&self) -> Value {
        match self {
            Self::Int(id) => Value::from(*id),
            Self::Text(id) => Value::from(id.as_str()),
        }
    }
}

impl From<i64> for RecordId {
    fn from(id: i64) -> Self {
        Self::Int(id)
    }
}

impl From<&str> for RecordId {
    fn from(id: &str) -> Self {
        Self::Text(id.to_string())
    }
}

impl From<String> for RecordId {
    fn from(id: String) -> Self {
        Self::Text(id)
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(id) => write!(f, "{id}"),
            Self::Text(id) => f.write_str(id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_ids_stay_numeric() {
        let id: RecordId = serde_json::from_str("42").unwrap();
        assert_eq!(id, RecordId::Int(42));
        assert_eq!(id.to_value(), serde_json::json!(42));
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn text_ids_stay_text() {
        let id: RecordId = serde_json::from_str("\"0b6c-77\"").unwrap();
        assert_eq!(id, RecordId::from("0b6c-77"));
        assert_eq!(id.to_value(), serde_json::json!("0b6c-77"));
    }
}
