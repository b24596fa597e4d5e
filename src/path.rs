/// Utilities for building difference paths
///
/// Format: `/foo/0/bar` style, segments concatenated verbatim (no escaping).
/// - Root path: "/"
/// - Leaf of a key-only change: `parent + key`, e.g. `/bar`
/// - Prefix handed to a nested comparison: `parent + key + "/"`, e.g. `/foo/`
///
/// A value replaced inside a nested comparison is reported at the prefix
/// itself, so its path keeps the trailing slash (`/foo/`), while array
/// growth and shrink entries never do (`/foo/3`).
pub const ROOT_PATH: &str = "/";

/// Path of a key that exists on one side only
pub fn join_key(parent: &str, key: &str) -> String {
    format!("{}{}", parent, key)
}

/// Prefix for comparing the values under a key present on both sides
pub fn nest_key(parent: &str, key: &str) -> String {
    format!("{}{}/", parent, key)
}

/// Path of an array element past the end of the shorter array
pub fn join_index(parent: &str, index: usize) -> String {
    format!("{}{}", parent, index)
}

/// Prefix for comparing two array elements at the same index
pub fn nest_index(parent: &str, index: usize) -> String {
    format!("{}{}/", parent, index)
}
