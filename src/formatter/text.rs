use crate::error::DeltaError;
use crate::formatter::Formatter;
use crate::types::{Difference, Operation};

/// Formatter for the "text" output format
///
/// One line per difference: `- <path>: <value>` for removed values and
/// `+ <path>: <value>` for added ones, values rendered as compact JSON.
#[derive(Default)]
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Formatter for TextFormatter {
    fn format(&self, differences: &[Difference]) -> Result<String, DeltaError> {
        if differences.is_empty() {
            return Ok("No differences".to_string());
        }

        let lines: Vec<String> = differences
            .iter()
            .map(|difference| {
                let marker = match difference.operation() {
                    Operation::Added => '+',
                    Operation::Removed => '-',
                };
                format!("{} {}: {}", marker, difference.path(), difference.value())
            })
            .collect();
        Ok(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::TreeValue;
    use serde_json::json;

    #[test]
    fn test_empty() {
        assert_eq!(TextFormatter::new().format(&[]).unwrap(), "No differences");
    }

    #[test]
    fn test_lines() {
        let differences = vec![
            Difference::new(TreeValue::from(json!({"a": 2})), "/bar/", Operation::Removed),
            Difference::new(TreeValue::from(2), "/bar/", Operation::Added),
        ];

        let output = TextFormatter::new().format(&differences).unwrap();
        assert_eq!(output, "- /bar/: {\"a\":2}\n+ /bar/: 2");
    }
}
