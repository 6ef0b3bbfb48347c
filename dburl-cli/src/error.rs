//! CLI error types and result alias.

use dburl_parser::UrlParseError;
use miette::Diagnostic;
use thiserror::Error;

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug, Diagnostic)]
pub enum CliError {
    /// IO error
    #[error("IO error: {0}")]
    #[diagnostic(code(dburl::io))]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    #[diagnostic(code(dburl::config))]
    Config(String),

    /// URL parse error
    #[error("Parse error: {0}")]
    #[diagnostic(code(dburl::parse))]
    Parse(#[from] UrlParseError),

    /// Output serialization error
    #[error("Output error: {0}")]
    #[diagnostic(code(dburl::output))]
    Output(String),

    /// Command error
    #[error("Command error: {0}")]
    #[diagnostic(code(dburl::command))]
    Command(String),
}

impl From<toml::de::Error> for CliError {
    fn from(err: toml::de::Error) -> Self {
        CliError::Config(format!("Failed to parse TOML: {}", err))
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Output(format!("Failed to serialize JSON: {}", err))
    }
}
