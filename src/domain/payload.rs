//! Clipboard payload value object

use super::format::FormatKind;

/// Content read from the clipboard, consumed by the writer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClipboardPayload {
    Text(String),
    Image(Vec<u8>),
}

impl ClipboardPayload {
    pub fn kind(&self) -> FormatKind {
        match self {
            Self::Text(_) => FormatKind::Text,
            Self::Image(_) => FormatKind::Image,
        }
    }

    /// Bytes as they will be written: UTF-8 for text, raw for images
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            Self::Text(text) => text.as_bytes(),
            Self::Image(bytes) => bytes,
        }
    }

    pub fn size_bytes(&self) -> usize {
        self.as_bytes().len()
    }

    /// Get human-readable size
    pub fn human_readable_size(&self) -> String {
        let bytes = self.size_bytes();
        if bytes < 1024 {
            format!("{} B", bytes)
        } else if bytes < 1024 * 1024 {
            format!("{:.1} KB", bytes as f64 / 1024.0)
        } else {
            format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
        }
    }
}
