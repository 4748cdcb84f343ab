//! Decoding helpers for spreadsheet cells.
//!
//! Cells arrive as JSON scalars. Text fields accept strings, numbers and
//! booleans; null decodes to the empty string.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a cell value as the text a spreadsheet would display.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        other => other.to_string(),
    }
}

/// `deserialize_with` adapter for text columns.
pub fn text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    let value = Value::deserialize(deserializer)?;
    Ok(cell_text(&value))
}

/// `deserialize_with` adapter for optional text columns; an empty cell is `None`.
pub fn optional_text<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    let text = text(deserializer)?;
    Ok(if text.is_empty() { None } else { Some(text) })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cell_text_scalars() {
        assert_eq!(cell_text(&json!("Thermal")), "Thermal");
        assert_eq!(cell_text(&json!(7)), "7");
        assert_eq!(cell_text(&json!(2.5)), "2.5");
        assert_eq!(cell_text(&json!(true)), "true");
        assert_eq!(cell_text(&Value::Null), "");
    }
}
