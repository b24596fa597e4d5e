use crate::value::{Object, TreeValue};

/// How a pair of values is compared
#[derive(Debug, PartialEq)]
pub(crate) enum Pairing<'a> {
    /// At least one side is a scalar: equal or replaced, never descended into
    Primitive,
    Objects(&'a Object, &'a Object),
    Arrays(&'a [TreeValue], &'a [TreeValue]),
    /// Object on one side, array on the other
    Mismatched,
}

/// Classify a value pair by shape
///
/// The scalar check comes first, so `1` against `{"a": 1}` is a primitive
/// replacement and the object is never walked.
pub(crate) fn classify<'a>(from: &'a TreeValue, to: &'a TreeValue) -> Pairing<'a> {
    match (from, to) {
        (TreeValue::Primitive(_), _) | (_, TreeValue::Primitive(_)) => Pairing::Primitive,
        (TreeValue::Object(old), TreeValue::Object(new)) => Pairing::Objects(old, new),
        (TreeValue::Array(old), TreeValue::Array(new)) => Pairing::Arrays(old, new),
        (TreeValue::Object(_), TreeValue::Array(_)) | (TreeValue::Array(_), TreeValue::Object(_)) => {
            Pairing::Mismatched
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> TreeValue {
        TreeValue::from(value)
    }

    #[test]
    fn test_primitive_wins_over_containers() {
        let scalar = tree(json!(1));
        let object = tree(json!({"a": 1}));
        let array = tree(json!([1]));

        assert_eq!(classify(&scalar, &object), Pairing::Primitive);
        assert_eq!(classify(&array, &scalar), Pairing::Primitive);
        assert_eq!(classify(&scalar, &tree(json!("x"))), Pairing::Primitive);
    }

    #[test]
    fn test_null_and_bool_are_primitives() {
        assert_eq!(classify(&tree(json!(null)), &tree(json!({}))), Pairing::Primitive);
        assert_eq!(classify(&tree(json!(true)), &tree(json!(true))), Pairing::Primitive);
    }

    #[test]
    fn test_matching_containers() {
        let object = tree(json!({"a": 1}));
        let array = tree(json!([1, 2]));

        assert!(matches!(classify(&object, &object), Pairing::Objects(_, _)));
        assert!(matches!(classify(&array, &array), Pairing::Arrays(a, b) if a.len() == 2 && b.len() == 2));
    }

    #[test]
    fn test_object_against_array_is_mismatched() {
        let object = tree(json!({}));
        let array = tree(json!([]));

        assert_eq!(classify(&object, &array), Pairing::Mismatched);
        assert_eq!(classify(&array, &object), Pairing::Mismatched);
    }
}
