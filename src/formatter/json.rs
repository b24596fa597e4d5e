use crate::error::DeltaError;
use crate::formatter::Formatter;
use crate::types::Difference;

/// Formatter for the "json" output format
///
/// This formatter outputs a JSON array, one object per difference:
/// - operation: "added" or "removed"
/// - path: location of the change
/// - value: the added or removed value, whole subtrees included
pub struct JsonFormatter {
    pretty: bool,
}

impl JsonFormatter {
    /// Create a new JsonFormatter with pretty printing enabled
    pub fn new() -> Self {
        Self { pretty: true }
    }

    /// Create a JsonFormatter with custom pretty printing setting
    pub fn with_pretty(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, differences: &[Difference]) -> Result<String, DeltaError> {
        let output = if self.pretty {
            serde_json::to_string_pretty(differences)
        } else {
            serde_json::to_string(differences)
        };
        output.map_err(|source| DeltaError::Serialize { source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Operation;
    use crate::value::TreeValue;
    use serde_json::{json, Value};

    #[test]
    fn test_format_empty_differences() {
        let formatter = JsonFormatter::new();

        let result = formatter.format(&[]).unwrap();
        let parsed: Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed, json!([]));
    }

    #[test]
    fn test_format_with_differences() {
        let formatter = JsonFormatter::new();
        let differences = vec![
            Difference::new(TreeValue::from(1), "/foo/", Operation::Removed),
            Difference::new(TreeValue::from(json!({"a": [true]})), "/foo/", Operation::Added),
        ];

        let result = formatter.format(&differences).unwrap();
        let parsed: Value = serde_json::from_str(&result).unwrap();

        assert_eq!(parsed.as_array().unwrap().len(), 2);
        assert_eq!(parsed[0]["operation"], "removed");
        assert_eq!(parsed[0]["path"], "/foo/");
        assert_eq!(parsed[0]["value"], 1);
        assert_eq!(parsed[1]["operation"], "added");
        assert_eq!(parsed[1]["value"], json!({"a": [true]}));
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let formatter = JsonFormatter::with_pretty(false);
        let differences = vec![Difference::new(TreeValue::from("x"), "/k", Operation::Added)];

        let result = formatter.format(&differences).unwrap();
        assert_eq!(result, r#"[{"operation":"added","path":"/k","value":"x"}]"#);
    }
}
