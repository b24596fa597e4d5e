use crate::diff::classify::{classify, Pairing};
use crate::error::DeltaError;
use crate::path::{join_index, join_key, nest_index, nest_key, ROOT_PATH};
use crate::types::{Difference, Operation};
use crate::value::{Object, TreeValue};

/// Default limit on container nesting walked by the differ
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Main diff function - compares two documents from the root path
pub fn diff(from: &Object, to: &Object) -> Result<Vec<Difference>, DeltaError> {
    Differ::default().diff(from, to)
}

/// Compares two documents, prefixing every path with `base_path`
pub fn diff_at(from: &Object, to: &Object, base_path: &str) -> Result<Vec<Difference>, DeltaError> {
    Differ::default().diff_at(from, to, base_path)
}

/// Recursive tree comparison
///
/// Walks both trees once and returns the edits in traversal order: keys of
/// `from`, then keys only `to` has; array elements by index, growth or
/// shrink entries last.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Differ {
    max_depth: usize,
}

impl Default for Differ {
    fn default() -> Self {
        Self::new()
    }
}

impl Differ {
    pub fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    /// Limit how many container levels below the root are walked
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn diff(&self, from: &Object, to: &Object) -> Result<Vec<Difference>, DeltaError> {
        self.diff_at(from, to, ROOT_PATH)
    }

    pub fn diff_at(
        &self,
        from: &Object,
        to: &Object,
        base_path: &str,
    ) -> Result<Vec<Difference>, DeltaError> {
        if !base_path.ends_with('/') {
            return Err(DeltaError::InvalidBasePath {
                path: base_path.to_string(),
            });
        }

        let differences = self.diff_objects(from, to, base_path, 0)?;
        tracing::debug!(
            base_path,
            count = differences.len(),
            "diff complete"
        );
        Ok(differences)
    }

    /// Diff two untyped roots, rejecting anything that is not an object
    pub fn diff_values(&self, from: &TreeValue, to: &TreeValue) -> Result<Vec<Difference>, DeltaError> {
        let from = root_object(from, "from")?;
        let to = root_object(to, "to")?;
        self.diff(from, to)
    }

    fn diff_objects(
        &self,
        from: &Object,
        to: &Object,
        path: &str,
        depth: usize,
    ) -> Result<Vec<Difference>, DeltaError> {
        if std::ptr::eq(from, to) {
            return Ok(Vec::new());
        }
        self.check_depth(path, depth)?;
        tracing::trace!(path, depth, "comparing objects");

        let mut differences = Vec::new();
        for (key, old) in from {
            match to.get(key) {
                Some(new) => {
                    differences.extend(self.compare(old, new, &nest_key(path, key), depth + 1)?)
                }
                None => differences.push(Difference::new(
                    old.clone(),
                    join_key(path, key),
                    Operation::Removed,
                )),
            }
        }
        for (key, new) in to.iter().filter(|(key, _)| !from.contains_key(*key)) {
            differences.push(Difference::new(
                new.clone(),
                join_key(path, key),
                Operation::Added,
            ));
        }
        Ok(differences)
    }

    fn compare(
        &self,
        from: &TreeValue,
        to: &TreeValue,
        path: &str,
        depth: usize,
    ) -> Result<Vec<Difference>, DeltaError> {
        match classify(from, to) {
            Pairing::Primitive if from == to => Ok(Vec::new()),
            Pairing::Primitive | Pairing::Mismatched => Ok(replacement(from, to, path)),
            Pairing::Objects(old, new) => self.diff_objects(old, new, path, depth),
            Pairing::Arrays(old, new) => self.diff_arrays(old, new, path, depth),
        }
    }

    /// Positional array diff: elements are paired by index only
    fn diff_arrays(
        &self,
        from: &[TreeValue],
        to: &[TreeValue],
        path: &str,
        depth: usize,
    ) -> Result<Vec<Difference>, DeltaError> {
        self.check_depth(path, depth)?;
        tracing::trace!(path, depth, from_len = from.len(), to_len = to.len(), "comparing arrays");

        let mut differences = Vec::new();
        for (i, (old, new)) in from.iter().zip(to).enumerate() {
            differences.extend(self.compare(old, new, &nest_index(path, i), depth + 1)?);
        }

        let common = from.len().min(to.len());
        for (i, new) in to.iter().enumerate().skip(common) {
            differences.push(Difference::new(new.clone(), join_index(path, i), Operation::Added));
        }
        for (i, old) in from.iter().enumerate().skip(common) {
            differences.push(Difference::new(old.clone(), join_index(path, i), Operation::Removed));
        }
        Ok(differences)
    }

    fn check_depth(&self, path: &str, depth: usize) -> Result<(), DeltaError> {
        if depth > self.max_depth {
            return Err(DeltaError::DepthLimitExceeded {
                path: path.to_string(),
                limit: self.max_depth,
            });
        }
        Ok(())
    }
}

fn replacement(from: &TreeValue, to: &TreeValue, path: &str) -> Vec<Difference> {
    vec![
        Difference::new(from.clone(), path, Operation::Removed),
        Difference::new(to.clone(), path, Operation::Added),
    ]
}

fn root_object<'a>(value: &'a TreeValue, side: &str) -> Result<&'a Object, DeltaError> {
    value.as_object().ok_or_else(|| DeltaError::NotAnObject {
        side: side.to_string(),
        kind: value.kind(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn object(value: serde_json::Value) -> Object {
        match TreeValue::from(value) {
            TreeValue::Object(map) => map,
            other => panic!("expected object, got {}", other.kind()),
        }
    }

    fn nested(levels: usize) -> Object {
        let mut value = json!(1);
        for _ in 0..levels {
            value = json!({ "a": value });
        }
        object(value)
    }

    #[test]
    fn test_same_instance_is_empty() {
        let document = object(json!({"foo": [1, {"bar": 2}]}));
        assert!(diff(&document, &document).unwrap().is_empty());
    }

    #[test]
    fn test_from_keys_before_new_keys() {
        let from = object(json!({"b": 1, "a": 2}));
        let to = object(json!({"c": 3, "a": 5}));
        let differences = diff(&from, &to).unwrap();

        let paths: Vec<&str> = differences.iter().map(Difference::path).collect();
        assert_eq!(paths, vec!["/a/", "/a/", "/b", "/c"]);
    }

    #[test]
    fn test_base_path_prefixes_every_path() {
        let from = object(json!({"foo": 1, "gone": true}));
        let to = object(json!({"foo": 2}));
        let differences = diff_at(&from, &to, "/root/").unwrap();

        let paths: Vec<&str> = differences.iter().map(Difference::path).collect();
        assert_eq!(paths, vec!["/root/foo/", "/root/foo/", "/root/gone"]);
    }

    #[test]
    fn test_base_path_without_slash_is_rejected() {
        let document = object(json!({}));
        let result = diff_at(&document, &object(json!({})), "/root");
        assert!(matches!(result, Err(DeltaError::InvalidBasePath { .. })));
    }

    #[test]
    fn test_depth_limit() {
        let from = nested(5);
        let to = nested(5);

        assert!(Differ::new().with_max_depth(5).diff(&from, &to).unwrap().is_empty());

        let result = Differ::new().with_max_depth(3).diff(&from, &to);
        match result {
            Err(DeltaError::DepthLimitExceeded { path, limit }) => {
                assert_eq!(path, "/a/a/a/a/");
                assert_eq!(limit, 3);
            }
            other => panic!("expected depth error, got {:?}", other),
        }
    }

    #[test]
    fn test_depth_limit_counts_arrays() {
        let from = object(json!({"a": [[[1]]]}));
        let to = object(json!({"a": [[[2]]]}));
        assert!(Differ::new().with_max_depth(2).diff(&from, &to).is_err());
        assert_eq!(Differ::new().with_max_depth(3).diff(&from, &to).unwrap().len(), 2);
    }

    #[test]
    fn test_diff_values_rejects_non_object_root() {
        let array = TreeValue::from(json!([1]));
        let document = TreeValue::from(json!({}));

        match Differ::new().diff_values(&array, &document) {
            Err(DeltaError::NotAnObject { side, kind }) => {
                assert_eq!(side, "from");
                assert_eq!(kind, "array");
            }
            other => panic!("expected root error, got {:?}", other),
        }
        assert!(Differ::new().diff_values(&document, &TreeValue::from(3)).is_err());
    }
}
