//! Error handling for the subtheme application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for subtheme operations.
///
/// Each scaffold step surfaces its failures through its own variant, so the
/// log line produced for a failed run names the stage that broke.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    Io(#[from] io::Error),

    /// Represents failures while downloading or copying the starter kit artifact
    #[error("Fetch error: {0}.")]
    Fetch(String),

    /// Represents failures while unpacking the starter kit archive
    #[error("Extract error: {0}.")]
    Extract(String),

    /// Represents failures while mirroring the template into the destination
    #[error("Mirror error: {0}.")]
    Mirror(String),

    /// Represents failures in the token-substitution generator
    #[error("Generator error: {0}.")]
    Generate(String),

    /// Represents errors during configuration parsing or processing
    #[error("Configuration error: {0}.")]
    Config(String),

    /// Represents failures to resolve an installed theme
    #[error("Theme error: {0}.")]
    Theme(String),

    /// Represents errors in processing .subthemeignore files
    #[error("Ignore error: {0}.")]
    Ignore(String),

    /// Represents failures of interactive confirmation prompts
    #[error("Prompt error: {0}.")]
    Prompt(String),

    /// Represents errors reported by git while cloning a starter kit
    #[error("Git error: {0}.")]
    Git(#[from] git2::Error),

    /// Represents template rendering errors
    #[error("Render error: {0}.")]
    Render(#[from] minijinja::Error),
}

/// Convenience type alias for Results with subtheme's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that reports the error and exits the program.
///
/// Logs the message at error severity and exits with status code 1, the only
/// non-zero exit the command emits.
pub fn default_error_handler(err: Error) -> ! {
    log::error!("{}", err);
    std::process::exit(1);
}
