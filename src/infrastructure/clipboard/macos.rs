//! macOS clipboard adapter using pbpaste and osascript
//!
//! AppleScript can only hand image data over through a file, so images are
//! written to a scoped temp file that is removed when the read finishes.

use std::path::Path;

use async_trait::async_trait;

use crate::application::ports::{ClipboardError, ClipboardSource};

use super::command::{run_tool, stderr_of, utf8_stdout};

const PNG_CLASS: &str = "«class PNGf»";
const JPEG_CLASS: &str = "JPEG picture";

/// macOS clipboard adapter
pub struct MacosClipboard;

impl MacosClipboard {
    /// Create a new macOS clipboard adapter
    pub fn new() -> Self {
        Self
    }

    /// Pick the AppleScript class to extract from `clipboard info` output
    fn pick_class(info: &str, mime_type: &str) -> Option<&'static str> {
        if mime_type == "image/jpeg" && info.contains(JPEG_CLASS) {
            Some(JPEG_CLASS)
        } else if info.contains(PNG_CLASS) {
            Some(PNG_CLASS)
        } else if info.contains(JPEG_CLASS) {
            Some(JPEG_CLASS)
        } else {
            None
        }
    }

    /// AppleScript that writes the clipboard as `class` into `path`
    fn export_script(class: &str, path: &str) -> String {
        let escaped = path.replace('\\', "\\\\").replace('"', "\\\"");
        format!(
            "set outFile to open for access POSIX file \"{escaped}\" with write permission\n\
             try\n\
             write (the clipboard as {class}) to outFile\n\
             close access outFile\n\
             on error errMsg\n\
             close access outFile\n\
             error errMsg\n\
             end try"
        )
    }

    fn failure(stderr: String) -> ClipboardError {
        if stderr.contains("-1743") || stderr.contains("Not authorized") || stderr.contains("not allowed") {
            ClipboardError::AccessDenied(stderr)
        } else {
            ClipboardError::ReadFailed(stderr)
        }
    }

    async fn osascript(&self, script: &str) -> Result<String, ClipboardError> {
        let output = run_tool("osascript", &["-e", script]).await?;
        if !output.status.success() {
            return Err(Self::failure(stderr_of(&output)));
        }
        Ok(String::from_utf8_lossy(&output.stdout).to_string())
    }
}

impl Default for MacosClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardSource for MacosClipboard {
    fn name(&self) -> &'static str {
        "macos"
    }

    async fn read_text(&self) -> Result<String, ClipboardError> {
        let output = run_tool("pbpaste", &[]).await?;
        if !output.status.success() {
            return Err(Self::failure(stderr_of(&output)));
        }
        utf8_stdout(output)
    }

    async fn read_image(&self, mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        let info = self.osascript("clipboard info").await?;
        let Some(class) = Self::pick_class(&info, mime_type) else {
            return Ok(None);
        };

        // Dropping the guard deletes the file on every path out of this scope
        let temp = tempfile::Builder::new()
            .prefix("cb2f-")
            .suffix(".img")
            .tempfile()
            .map_err(|e| ClipboardError::ReadFailed(format!("temp file: {}", e)))?
            .into_temp_path();
        let path = temp_path(&temp)?;

        self.osascript(&Self::export_script(class, &path)).await?;

        let bytes = tokio::fs::read(&temp)
            .await
            .map_err(|e| ClipboardError::ReadFailed(e.to_string()))?;

        Ok(Some(bytes))
    }
}

fn temp_path(temp: &Path) -> Result<String, ClipboardError> {
    temp.to_str()
        .map(str::to_string)
        .ok_or_else(|| ClipboardError::ReadFailed("temp path is not valid UTF-8".to_string()))
}
