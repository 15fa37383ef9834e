//! Domain error types

use thiserror::Error;

/// Error when the command line does not describe a save request
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("{message}. Usage: cb2f <input> [outputPath] [--name <custom>]")]
pub struct UsageError {
    pub message: String,
}

impl UsageError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error when a format token is in neither extension table
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Unsupported format \"{token}\". Supported formats: {supported}")]
pub struct UnsupportedFormatError {
    pub token: String,
    pub supported: String,
}

/// Error when the output directory cannot be used
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OutputPathError {
    #[error("Output path \"{0}\" does not exist.")]
    NotFound(String),

    #[error("Output path \"{0}\" is not a directory.")]
    NotADirectory(String),

    #[error("Output path \"{path}\" cannot be accessed: {message}")]
    Inaccessible { path: String, message: String },
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Failed to write config file: {0}")]
    WriteError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },

    #[error("Config file already exists at: {0}")]
    AlreadyExists(String),
}
