//! Formatter module for outputting diff results
//!
//! This module provides different output formatters for a list of
//! differences. The default is the "json" format, a JSON array with one
//! `{operation, path, value}` object per difference, in diff order.

mod json;
mod text;
mod util;

pub use json::JsonFormatter;
pub use text::TextFormatter;
pub use util::sort_by_path;

use crate::error::DeltaError;
use crate::types::Difference;

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[value(name = "json")]
    Json, // Default: array of {operation, path, value}

    #[value(name = "text")]
    Text, // One "+ path: value" / "- path: value" line per difference
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Text => write!(f, "text"),
        }
    }
}

/// Trait for formatting diff results
pub trait Formatter {
    /// Format the differences and return a string representation
    fn format(&self, differences: &[Difference]) -> Result<String, DeltaError>;
}

/// Factory function to create a formatter based on output format
pub fn create_formatter(format: OutputFormat, pretty: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Json => Box::new(JsonFormatter::with_pretty(pretty)),
        OutputFormat::Text => Box::new(TextFormatter::new()),
    }
}
