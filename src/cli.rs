use clap::Parser;

use crate::error::DeltaError;
use crate::formatter::OutputFormat;
use crate::loader::LoadConfig;

/// Command-line arguments for jsondelta
#[derive(Parser, Debug)]
#[command(name = "jsondelta")]
#[command(about = "Show what was removed from and added to a JSON document")]
pub struct Args {
    /// The "from" document: JSON file or inline JSON string
    pub from: String,

    /// The "to" document (not required when using --stdin)
    #[arg(required = false)]
    pub to: Option<String>,

    /// Read the "to" document from stdin
    #[arg(long)]
    pub stdin: bool,

    /// Force inputs to be treated as inline JSON
    #[arg(long)]
    pub inline: bool,

    /// Output format (default: json)
    #[arg(short, long, default_value_t = OutputFormat::Json, hide_default_value = true)]
    pub format: OutputFormat,

    /// Sort differences by path
    #[arg(long)]
    pub sort: bool,

    /// Print JSON output on a single line
    #[arg(long)]
    pub compact: bool,

    /// Maximum file size in bytes (default: 104857600, env: JSONDELTA_MAX_FILE_SIZE)
    #[arg(long)]
    pub max_file_size: Option<u64>,

    /// Maximum nesting depth (default: 1000, env: JSONDELTA_MAX_DEPTH)
    #[arg(long)]
    pub max_depth: Option<usize>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    /// Validate command-line arguments
    pub fn validate(&self) -> Result<(), DeltaError> {
        // Without stdin, the "to" document must be given
        if !self.stdin && self.to.is_none() {
            return Err(DeltaError::MissingInput);
        }
        if self.stdin && self.to.is_some() {
            return Err(DeltaError::InvalidArgs {
                message: "--stdin replaces the second document, pass one or the other".to_string(),
            });
        }
        Ok(())
    }

    /// Environment-derived limits with command-line overrides applied
    pub fn load_config(&self) -> LoadConfig {
        let mut config = LoadConfig::from_env();
        if let Some(max_file_size) = self.max_file_size {
            config = config.with_max_file_size(max_file_size);
        }
        if let Some(max_depth) = self.max_depth {
            config = config.with_max_depth(max_depth);
        }
        config
    }

    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_second_document() {
        let args = Args::parse_from(["jsondelta", "a.json"]);
        assert!(matches!(args.validate(), Err(DeltaError::MissingInput)));

        let args = Args::parse_from(["jsondelta", "a.json", "--stdin"]);
        assert!(args.validate().is_ok());
    }

    #[test]
    fn test_second_document_and_stdin_conflict() {
        let args = Args::parse_from(["jsondelta", "a.json", "b.json", "--stdin"]);
        assert!(matches!(args.validate(), Err(DeltaError::InvalidArgs { .. })));
    }

    #[test]
    fn test_overrides() {
        let args = Args::parse_from([
            "jsondelta",
            "a.json",
            "b.json",
            "--max-file-size",
            "10",
            "--max-depth",
            "4",
            "-vv",
        ]);
        let config = args.load_config();
        assert_eq!(config.max_file_size, 10);
        assert_eq!(config.max_depth, 4);
        assert_eq!(args.log_level(), tracing::Level::DEBUG);
        assert_eq!(args.format, OutputFormat::Json);
    }

    #[test]
    fn test_text_format() {
        let args = Args::parse_from(["jsondelta", "a.json", "b.json", "-f", "text"]);
        assert_eq!(args.format, OutputFormat::Text);
        assert_eq!(args.log_level(), tracing::Level::WARN);
    }
}
