//! Save clipboard to file use case

use std::path::PathBuf;

use chrono::Utc;
use thiserror::Error;

use crate::domain::error::{OutputPathError, UnsupportedFormatError, UsageError};
use crate::domain::format::{Format, FormatKind};
use crate::domain::input::ParsedInput;
use crate::domain::payload::ClipboardPayload;
use crate::domain::target::OutputTarget;

use super::ports::{ClipboardError, ClipboardSource, OutputStore, WriteError};

/// Errors from the save use case
#[derive(Debug, Error)]
pub enum SaveError {
    #[error(transparent)]
    Usage(#[from] UsageError),

    #[error(transparent)]
    UnsupportedFormat(#[from] UnsupportedFormatError),

    #[error(transparent)]
    OutputPath(#[from] OutputPathError),

    #[error("No text found in clipboard.")]
    EmptyClipboard,

    #[error("No image found in clipboard.")]
    NoImageInClipboard,

    #[error("Error accessing clipboard: {0}")]
    ClipboardAccess(#[from] ClipboardError),

    #[error("Error saving {kind} file: {source}")]
    Io {
        kind: FormatKind,
        #[source]
        source: WriteError,
    },
}

impl SaveError {
    /// Remediation hint, if the failure has one
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::ClipboardAccess(e) => e.hint(),
            Self::NoImageInClipboard => {
                Some("Copy an image (e.g. take a screenshot to the clipboard) and retry.".to_string())
            }
            _ => None,
        }
    }
}

/// Output from the save use case
#[derive(Debug, Clone)]
pub struct SaveOutput {
    /// Absolute path of the written file
    pub path: PathBuf,
    /// Payload kind that was written
    pub kind: FormatKind,
    /// Payload size in human-readable format
    pub size: String,
}

/// Callbacks for status updates
#[derive(Default)]
#[allow(clippy::type_complexity)]
pub struct SaveCallbacks {
    /// Called before the clipboard is read, with the tool name
    pub on_reading_start: Option<Box<dyn Fn(&str) + Send + Sync>>,
    /// Called after a clipboard read attempt, successful or not
    pub on_reading_end: Option<Box<dyn Fn() + Send + Sync>>,
}

/// Copies clipboard content into a file
pub struct SaveClipboardUseCase<C, S>
where
    C: ClipboardSource,
    S: OutputStore,
{
    clipboard: C,
    store: S,
}

impl<C, S> SaveClipboardUseCase<C, S>
where
    C: ClipboardSource,
    S: OutputStore,
{
    /// Create a new use case instance
    pub fn new(clipboard: C, store: S) -> Self {
        Self { clipboard, store }
    }

    /// Execute the save workflow.
    ///
    /// Format and directory are checked before the clipboard is touched.
    pub async fn execute(
        &self,
        input: ParsedInput,
        callbacks: SaveCallbacks,
    ) -> Result<SaveOutput, SaveError> {
        let format: Format = input.format_token.parse()?;
        let directory = self.store.validate_dir(&input.output_directory).await?;

        if let Some(ref cb) = callbacks.on_reading_start {
            cb(self.clipboard.name());
        }

        let payload = self.read_clipboard(&format).await;

        if let Some(ref cb) = callbacks.on_reading_end {
            cb();
        }
        let payload = payload?;

        let target = OutputTarget::new(
            &directory,
            input.filename_override.as_deref(),
            format.extension(),
            Utc::now(),
        );

        self.store
            .write(target.path(), &payload)
            .await
            .map_err(|source| SaveError::Io {
                kind: payload.kind(),
                source,
            })?;

        Ok(SaveOutput {
            path: target.into_path(),
            kind: payload.kind(),
            size: payload.human_readable_size(),
        })
    }

    /// Read the clipboard representation `format` needs
    pub async fn read_clipboard(&self, format: &Format) -> Result<ClipboardPayload, SaveError> {
        match format.kind() {
            FormatKind::Text => {
                let text = self.clipboard.read_text().await?;
                if text.trim().is_empty() {
                    return Err(SaveError::EmptyClipboard);
                }
                Ok(ClipboardPayload::Text(text))
            }
            FormatKind::Image => match self.clipboard.read_image(format.mime_type()).await? {
                Some(bytes) if !bytes.is_empty() => Ok(ClipboardPayload::Image(bytes)),
                _ => Err(SaveError::NoImageInClipboard),
            },
        }
    }
}
