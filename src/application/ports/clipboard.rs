//! Clipboard port interface

use async_trait::async_trait;
use thiserror::Error;

/// Clipboard errors
///
/// These describe failures to reach the clipboard. An empty clipboard is not
/// an error at this level.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ClipboardError {
    #[error("{0} not found")]
    ToolNotFound(String),

    #[error("Permission denied: {0}")]
    AccessDenied(String),

    #[error("Clipboard unavailable: {0}")]
    Unavailable(String),

    #[error("Failed to read clipboard: {0}")]
    ReadFailed(String),

    #[error("Clipboard text is not valid UTF-8")]
    InvalidUtf8,

    #[error("{0}")]
    Unsupported(String),
}

impl ClipboardError {
    /// Remediation hint shown below the error
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::ToolNotFound(tool) => Some(match tool.as_str() {
                "wl-paste" => "Install wl-clipboard (e.g. `sudo apt install wl-clipboard`) or choose another tool with --tool.".to_string(),
                "xclip" => "Install xclip (e.g. `sudo apt install xclip`) or choose another tool with --tool.".to_string(),
                other => format!("Make sure '{}' is installed and on PATH, or choose another tool with --tool.", other),
            }),
            Self::AccessDenied(_) => Some(
                if cfg!(target_os = "macos") {
                    "Grant your terminal clipboard/automation access in System Settings > Privacy & Security, then retry."
                } else {
                    "Check that this session is allowed to read the clipboard (desktop session, display variables, permissions)."
                }
                .to_string(),
            ),
            Self::Unavailable(_) => Some(
                "Run cb2f inside a graphical session, or set --tool to a clipboard tool that works here.".to_string(),
            ),
            Self::Unsupported(_) => Some(
                "Use --tool wl-paste, xclip, macos or powershell to save images as raw bytes.".to_string(),
            ),
            Self::ReadFailed(_) | Self::InvalidUtf8 => None,
        }
    }
}

/// Port for reading the system clipboard
#[async_trait]
pub trait ClipboardSource: Send + Sync {
    /// Short name of the underlying tool, for messages
    fn name(&self) -> &'static str;

    /// Read the clipboard as UTF-8 text.
    ///
    /// # Returns
    /// The text, or an empty string if the clipboard holds no text
    async fn read_text(&self) -> Result<String, ClipboardError>;

    /// Read the clipboard's image representation as raw bytes.
    ///
    /// # Arguments
    /// * `mime_type` - Preferred image type, e.g. `image/png`
    ///
    /// # Returns
    /// `None` if the clipboard holds no image
    async fn read_image(&self, mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError>;
}

/// Blanket implementation for boxed clipboard types
#[async_trait]
impl ClipboardSource for Box<dyn ClipboardSource> {
    fn name(&self) -> &'static str {
        self.as_ref().name()
    }

    async fn read_text(&self) -> Result<String, ClipboardError> {
        self.as_ref().read_text().await
    }

    async fn read_image(&self, mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        self.as_ref().read_image(mime_type).await
    }
}
