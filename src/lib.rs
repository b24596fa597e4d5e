//! jsondelta - structural diff of JSON-like documents
//!
//! Compares two object-rooted documents and returns an ordered list of
//! [`Difference`] records, each an added or removed value at a path.
//!
//! ```rust
//! use jsondelta::{diff, load_document_str, LoadConfig, Operation};
//!
//! let config = LoadConfig::default();
//! let from = load_document_str(r#"{"foo": [0, 1, 2]}"#, "from", &config).unwrap();
//! let to = load_document_str(r#"{"foo": [0, 1, 2, 3]}"#, "to", &config).unwrap();
//!
//! let differences = diff(&from, &to).unwrap();
//! assert_eq!(differences.len(), 1);
//! assert_eq!(differences[0].path(), "/foo/3");
//! assert_eq!(differences[0].operation(), Operation::Added);
//! ```

pub use diff::{diff, diff_at, Differ, DEFAULT_MAX_DEPTH};
pub use error::DeltaError;
pub use formatter::{create_formatter, sort_by_path, Formatter, OutputFormat};
pub use loader::{
    load_document_file, load_document_input, load_document_stdin, load_document_str, LoadConfig,
    DEFAULT_MAX_FILE_SIZE,
};
pub use path::ROOT_PATH;
pub use types::{Difference, Operation};
pub use value::{Object, Primitive, TreeValue};

pub mod cli;
mod diff;
mod error;
pub mod formatter;
mod loader;
mod path;
pub mod types;
pub mod value;
