use crate::value::TreeValue;
use serde::Serialize;
use std::fmt;

/// Kind of edit a [`Difference`] records
///
/// A changed value is never an operation of its own: it shows up as a
/// `Removed` of the old value followed by an `Added` of the new one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Added,
    Removed,
}

impl Operation {
    /// The operation seen from the other side of the diff
    pub fn inverse(self) -> Self {
        match self {
            Operation::Added => Operation::Removed,
            Operation::Removed => Operation::Added,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Added => write!(f, "ADDED"),
            Operation::Removed => write!(f, "REMOVED"),
        }
    }
}

/// One record of a diff: a value added or removed at a path
///
/// `value` is the whole leaf or subtree, never a nested diff.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Difference {
    operation: Operation,
    path: String,
    value: TreeValue,
}

impl Difference {
    pub fn new(value: TreeValue, path: impl Into<String>, operation: Operation) -> Self {
        Self {
            operation,
            path: path.into(),
            value,
        }
    }

    pub fn value(&self) -> &TreeValue {
        &self.value
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn operation(&self) -> Operation {
        self.operation
    }

    pub fn is_added(&self) -> bool {
        self.operation == Operation::Added
    }

    pub fn is_removed(&self) -> bool {
        self.operation == Operation::Removed
    }
}

/// `REMOVED /bar: 1`
impl fmt::Display for Difference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}: {}", self.operation, self.path, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_inverse() {
        assert_eq!(Operation::Added.inverse(), Operation::Removed);
        assert_eq!(Operation::Removed.inverse(), Operation::Added);
    }

    #[test]
    fn test_structural_equality() {
        let a = Difference::new(TreeValue::from(json!({"a": 2})), "/bar/", Operation::Removed);
        let b = Difference::new(TreeValue::from(json!({"a": 2})), "/bar/", Operation::Removed);
        let c = Difference::new(TreeValue::from(json!({"a": 2})), "/bar/", Operation::Added);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_display() {
        let difference = Difference::new(TreeValue::from("x"), "/foo/0", Operation::Added);
        assert_eq!(difference.to_string(), r#"ADDED /foo/0: "x""#);
    }

    #[test]
    fn test_serialize() {
        let difference = Difference::new(TreeValue::from(1), "/bar", Operation::Removed);
        let value = serde_json::to_value(&difference).unwrap();
        assert_eq!(value, json!({"operation": "removed", "path": "/bar", "value": 1}));
    }
}
