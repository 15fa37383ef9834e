//! Output storage port interface

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::error::OutputPathError;
use crate::domain::payload::ClipboardPayload;

/// Error writing the output file
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Failed to write {path}: {message}")]
pub struct WriteError {
    pub path: String,
    pub message: String,
}

/// Port for the filesystem the payload lands in
#[async_trait]
pub trait OutputStore: Send + Sync {
    /// Resolve `directory` to an absolute path of an existing directory.
    /// Never creates anything.
    async fn validate_dir(&self, directory: &Path) -> Result<PathBuf, OutputPathError>;

    /// Create or truncate `path` and write the payload bytes.
    async fn write(&self, path: &Path, payload: &ClipboardPayload) -> Result<(), WriteError>;
}
