//! Output format value object and the extension tables

use std::fmt;
use std::str::FromStr;

use super::error::UnsupportedFormatError;

/// Extensions saved from the clipboard's text representation
pub const TEXT_EXTENSIONS: &[&str] = &["txt", "md", "json", "js", "ts", "html", "css", "xml"];

/// Extensions saved from the clipboard's image representation
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp"];

/// Kind of clipboard payload a format needs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormatKind {
    Text,
    Image,
}

impl FormatKind {
    /// Classify a format token, case-insensitively.
    pub fn classify(token: &str) -> Result<Self, UnsupportedFormatError> {
        let lower = token.to_lowercase();
        if TEXT_EXTENSIONS.contains(&lower.as_str()) {
            Ok(Self::Text)
        } else if IMAGE_EXTENSIONS.contains(&lower.as_str()) {
            Ok(Self::Image)
        } else {
            Err(UnsupportedFormatError {
                token: token.to_string(),
                supported: supported_formats().join(", "),
            })
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for FormatKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// All supported extensions, text first
pub fn supported_formats() -> Vec<&'static str> {
    TEXT_EXTENSIONS
        .iter()
        .chain(IMAGE_EXTENSIONS.iter())
        .copied()
        .collect()
}

/// A validated output format: lowercase extension plus its payload kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Format {
    extension: String,
    kind: FormatKind,
}

impl Format {
    /// Lowercase extension without the dot
    pub fn extension(&self) -> &str {
        &self.extension
    }

    pub fn kind(&self) -> FormatKind {
        self.kind
    }

    pub fn is_image(&self) -> bool {
        self.kind == FormatKind::Image
    }

    /// MIME type to request from clipboards that expose typed image data.
    ///
    /// Text formats map to `text/plain`.
    pub fn mime_type(&self) -> &'static str {
        match self.extension.as_str() {
            "png" => "image/png",
            "jpg" | "jpeg" => "image/jpeg",
            "gif" => "image/gif",
            "webp" => "image/webp",
            "bmp" => "image/bmp",
            _ => "text/plain",
        }
    }
}

impl FromStr for Format {
    type Err = UnsupportedFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let kind = FormatKind::classify(s)?;
        Ok(Self {
            extension: s.to_lowercase(),
            kind,
        })
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.extension)
    }
}
