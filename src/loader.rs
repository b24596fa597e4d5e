use std::fs;
use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::diff::DEFAULT_MAX_DEPTH;
use crate::error::DeltaError;
use crate::value::{Object, TreeValue};

/// Default maximum input size: 100 MiB
pub const DEFAULT_MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

const MAX_FILE_SIZE_ENV: &str = "JSONDELTA_MAX_FILE_SIZE";
const MAX_DEPTH_ENV: &str = "JSONDELTA_MAX_DEPTH";

/// Limits applied while loading documents
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadConfig {
    pub max_file_size: u64,
    pub max_depth: usize,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl LoadConfig {
    /// Defaults overridden by `JSONDELTA_MAX_FILE_SIZE` / `JSONDELTA_MAX_DEPTH`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            max_file_size: env_or(MAX_FILE_SIZE_ENV, defaults.max_file_size),
            max_depth: env_or(MAX_DEPTH_ENV, defaults.max_depth),
        }
    }

    pub fn with_max_file_size(mut self, max_file_size: u64) -> Self {
        self.max_file_size = max_file_size;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

fn env_or<T: std::str::FromStr + Copy>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(name, value = %raw, "ignoring invalid environment override");
            default
        }),
        Err(_) => default,
    }
}

/// Load and parse a JSON document from a file
pub fn load_document_file(path: &Path, config: &LoadConfig) -> Result<Object, DeltaError> {
    // Check if file exists
    if !path.exists() {
        return Err(DeltaError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", path.display()),
            ),
        });
    }

    // Check if it's a file (not a directory)
    if !path.is_file() {
        return Err(DeltaError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("Not a file: {}", path.display()),
            ),
        });
    }

    let size = fs::metadata(path)
        .map_err(|source| DeltaError::FileRead {
            path: path.to_path_buf(),
            source,
        })?
        .len();
    if size > config.max_file_size {
        return Err(DeltaError::FileTooLarge {
            path: path.to_path_buf(),
            size,
            limit: config.max_file_size,
        });
    }

    tracing::info!(path = %path.display(), size, "loading document");
    let content = fs::read_to_string(path).map_err(|source| DeltaError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    load_document_str(&content, &path.display().to_string(), config)
}

/// Deepest bracket nesting in JSON text, ignoring brackets inside strings
///
/// Matches [`TreeValue::depth`] for well-formed input. Malformed input is
/// left for the parser to reject.
fn nesting_depth(content: &str) -> usize {
    let mut depth = 0usize;
    let mut max_depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for byte in content.bytes() {
        if in_string {
            match byte {
                _ if escaped => escaped = false,
                b'\\' => escaped = true,
                b'"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match byte {
            b'"' => in_string = true,
            b'{' | b'[' => {
                depth += 1;
                max_depth = max_depth.max(depth);
            }
            b'}' | b']' => depth = depth.saturating_sub(1),
            _ => {}
        }
    }
    max_depth
}

/// Parse an inline JSON document; `origin` names it in errors
///
/// Nesting is checked against `config.max_depth` before parsing, so the
/// parser's own recursion limit is lifted and the configured one applies.
pub fn load_document_str(
    content: &str,
    origin: &str,
    config: &LoadConfig,
) -> Result<Object, DeltaError> {
    let depth = nesting_depth(content);
    if depth > config.max_depth {
        return Err(DeltaError::TooDeep {
            origin: origin.to_string(),
            depth,
            limit: config.max_depth,
        });
    }

    let json_error = |source: serde_json::Error| DeltaError::JsonParse {
        origin: origin.to_string(),
        source,
    };
    let mut deserializer = serde_json::Deserializer::from_str(content);
    deserializer.disable_recursion_limit();
    let value = TreeValue::deserialize(&mut deserializer).map_err(json_error)?;
    deserializer.end().map_err(json_error)?;

    match value {
        TreeValue::Object(object) => {
            tracing::debug!(origin, keys = object.len(), depth, "parsed document");
            Ok(object)
        }
        other => Err(DeltaError::NotAnObject {
            side: origin.to_string(),
            kind: other.kind(),
        }),
    }
}

/// Read a JSON document from stdin
pub fn load_document_stdin(config: &LoadConfig) -> Result<Object, DeltaError> {
    let mut content = String::new();
    std::io::stdin()
        .take(config.max_file_size.saturating_add(1))
        .read_to_string(&mut content)
        .map_err(|source| DeltaError::FileRead {
            path: "<stdin>".into(),
            source,
        })?;

    let size = content.len() as u64;
    if size > config.max_file_size {
        return Err(DeltaError::FileTooLarge {
            path: "<stdin>".into(),
            size,
            limit: config.max_file_size,
        });
    }

    load_document_str(&content, "<stdin>", config)
}

/// Load a document given either a file path or inline JSON text
///
/// `input` is parsed as inline JSON when `inline` is set, or when no such
/// file exists and the text starts with `{`.
pub fn load_document_input(
    input: &str,
    inline: bool,
    config: &LoadConfig,
) -> Result<Object, DeltaError> {
    let path = Path::new(input);
    if inline || (!path.exists() && input.trim_start().starts_with('{')) {
        load_document_str(input, "inline input", config)
    } else {
        load_document_file(path, config)
    }
}
