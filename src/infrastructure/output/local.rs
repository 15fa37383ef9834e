//! Local filesystem output adapter

use std::env;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;

use crate::application::ports::{OutputStore, WriteError};
use crate::domain::error::OutputPathError;
use crate::domain::payload::ClipboardPayload;

/// Writes payloads to the local filesystem
pub struct LocalOutputStore;

impl LocalOutputStore {
    /// Create a new local output store
    pub fn new() -> Self {
        Self
    }

    fn absolute(directory: &Path) -> Result<PathBuf, OutputPathError> {
        if directory.is_absolute() {
            return Ok(directory.to_path_buf());
        }
        env::current_dir()
            .map(|cwd| cwd.join(directory))
            .map_err(|e| OutputPathError::Inaccessible {
                path: directory.display().to_string(),
                message: e.to_string(),
            })
    }
}

impl Default for LocalOutputStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutputStore for LocalOutputStore {
    async fn validate_dir(&self, directory: &Path) -> Result<PathBuf, OutputPathError> {
        let absolute = Self::absolute(directory)?;
        let shown = absolute.display().to_string();

        let metadata = match fs::metadata(&absolute).await {
            Ok(m) => m,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(OutputPathError::NotFound(shown));
            }
            Err(e) => {
                return Err(OutputPathError::Inaccessible {
                    path: shown,
                    message: e.to_string(),
                });
            }
        };

        if !metadata.is_dir() {
            return Err(OutputPathError::NotADirectory(shown));
        }

        fs::canonicalize(&absolute)
            .await
            .map_err(|e| OutputPathError::Inaccessible {
                path: shown,
                message: e.to_string(),
            })
    }

    async fn write(&self, path: &Path, payload: &ClipboardPayload) -> Result<(), WriteError> {
        fs::write(path, payload.as_bytes())
            .await
            .map_err(|e| WriteError {
                path: path.display().to_string(),
                message: e.to_string(),
            })
    }
}
