//! Cross-platform clipboard adapter using arboard
//!
//! Works on Windows, macOS, and Linux (X11/Wayland). Reads text only:
//! arboard hands images over as decoded RGBA pixels, not the original bytes.

use async_trait::async_trait;

use crate::application::ports::{ClipboardError, ClipboardSource};

/// Cross-platform clipboard adapter using arboard
pub struct ArboardClipboard;

impl ArboardClipboard {
    /// Create a new arboard clipboard adapter
    pub fn new() -> Self {
        Self
    }

    fn open() -> Result<arboard::Clipboard, ClipboardError> {
        arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))
    }

    fn map_error(e: arboard::Error) -> ClipboardError {
        match e {
            arboard::Error::ClipboardNotSupported => ClipboardError::Unavailable(e.to_string()),
            arboard::Error::ClipboardOccupied => ClipboardError::AccessDenied(e.to_string()),
            other => ClipboardError::ReadFailed(other.to_string()),
        }
    }
}

impl Default for ArboardClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardSource for ArboardClipboard {
    fn name(&self) -> &'static str {
        "arboard"
    }

    async fn read_text(&self) -> Result<String, ClipboardError> {
        // arboard operations are blocking, so run in spawn_blocking
        tokio::task::spawn_blocking(|| {
            let mut clipboard = Self::open()?;
            match clipboard.get_text() {
                Ok(text) => Ok(text),
                Err(arboard::Error::ContentNotAvailable) => Ok(String::new()),
                Err(e) => Err(Self::map_error(e)),
            }
        })
        .await
        .map_err(|e| ClipboardError::ReadFailed(format!("Task join error: {}", e)))?
    }

    async fn read_image(&self, _mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        let has_image = tokio::task::spawn_blocking(|| {
            let mut clipboard = Self::open()?;
            match clipboard.get_image() {
                Ok(_) => Ok(true),
                Err(arboard::Error::ContentNotAvailable) => Ok(false),
                Err(e) => Err(Self::map_error(e)),
            }
        })
        .await
        .map_err(|e| ClipboardError::ReadFailed(format!("Task join error: {}", e)))??;

        if has_image {
            Err(ClipboardError::Unsupported(
                "arboard only exposes decoded pixels, so the original image bytes cannot be saved"
                    .to_string(),
            ))
        } else {
            Ok(None)
        }
    }
}
