use std::path::PathBuf;
use thiserror::Error;

/// Custom error type for jsondelta operations
#[derive(Debug, Error)]
pub enum DeltaError {
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse JSON from {origin}: {source}")]
    JsonParse {
        origin: String,
        source: serde_json::Error,
    },

    #[error("File {path} is {size} bytes, limit is {limit}")]
    FileTooLarge { path: PathBuf, size: u64, limit: u64 },

    #[error("Document root of {side} must be an object, found {kind}")]
    NotAnObject { side: String, kind: &'static str },

    #[error("Document {origin} is nested {depth} levels deep, limit is {limit}")]
    TooDeep {
        origin: String,
        depth: usize,
        limit: usize,
    },

    #[error("Nesting at {path} exceeds the depth limit of {limit}")]
    DepthLimitExceeded { path: String, limit: usize },

    #[error("Base path '{path}' must end with '/'")]
    InvalidBasePath { path: String },

    #[error("Missing second input: pass a second document or use --stdin")]
    MissingInput,

    #[error("Invalid arguments: {message}")]
    InvalidArgs { message: String },

    #[error("Failed to serialize output: {source}")]
    Serialize { source: serde_json::Error },
}
