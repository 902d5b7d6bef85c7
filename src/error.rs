use std::process::ExitStatus;
use thiserror::Error;

use crate::constants::exit_codes;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to write '{target}'. Original error: {source}")]
    WriteError { target: String, source: std::io::Error },

    #[error("Failed to render. Original error: {0}")]
    MinijinjaError(#[from] minijinja::Error),

    #[error("Failed to parse JSON config file. Original error: {0}")]
    JSONParseError(#[from] serde_json::Error),

    #[error("Failed to parse YAML config file. Original error: {0}")]
    YAMLParseError(#[from] serde_yaml::Error),

    #[error("Configuration validation failed: {0}.")]
    ConfigValidation(String),

    /// Represents validation failures in the generation request
    #[error("Validation error: {0}.")]
    ValidationError(String),

    /// When a version-control command could not be started at all.
    #[error("Failed to run '{command}'. Original error: {source}")]
    VcsSpawnError { command: String, source: std::io::Error },

    /// When a version-control command has executed but finished with an error.
    #[error("'{command}' failed with status: {status}{}", format_stderr(.stderr))]
    VcsCommandError { command: String, status: ExitStatus, stderr: String },
}

fn format_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(" ({stderr})")
    }
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Arguments
/// * `err` - The error to handle
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) {
    eprintln!("{err}");
    std::process::exit(exit_codes::FAILURE);
}
