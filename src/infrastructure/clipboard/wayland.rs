//! Wayland clipboard adapter using wl-paste

use async_trait::async_trait;

use crate::application::ports::{ClipboardError, ClipboardSource};

use super::command::{run_tool, stderr_of, utf8_stdout};
use super::pick_image_type;

/// Wayland clipboard adapter using wl-paste
pub struct WaylandClipboard;

impl WaylandClipboard {
    /// Create a new Wayland clipboard adapter
    pub fn new() -> Self {
        Self
    }

    /// wl-paste exits non-zero when the selection is empty or lacks the type
    fn is_no_content(stderr: &str) -> bool {
        let lower = stderr.to_lowercase();
        lower.contains("nothing is copied")
            || lower.contains("no selection")
            || lower.contains("no suitable type")
    }

    fn failure(stderr: String) -> ClipboardError {
        let lower = stderr.to_lowercase();
        if lower.contains("failed to connect") || lower.contains("wayland") {
            ClipboardError::Unavailable(stderr)
        } else {
            ClipboardError::ReadFailed(stderr)
        }
    }

    async fn offered_types(&self) -> Result<Vec<String>, ClipboardError> {
        let output = run_tool("wl-paste", &["--list-types"]).await?;
        if !output.status.success() {
            let stderr = stderr_of(&output);
            if Self::is_no_content(&stderr) {
                return Ok(Vec::new());
            }
            return Err(Self::failure(stderr));
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .collect())
    }
}

impl Default for WaylandClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardSource for WaylandClipboard {
    fn name(&self) -> &'static str {
        "wl-paste"
    }

    async fn read_text(&self) -> Result<String, ClipboardError> {
        let output = run_tool("wl-paste", &["--no-newline", "--type", "text"]).await?;

        if !output.status.success() {
            let stderr = stderr_of(&output);
            if Self::is_no_content(&stderr) {
                return Ok(String::new());
            }
            return Err(Self::failure(stderr));
        }

        utf8_stdout(output)
    }

    async fn read_image(&self, mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        let offered = self.offered_types().await?;
        let Some(chosen) = pick_image_type(&offered, mime_type) else {
            return Ok(None);
        };

        let output = run_tool("wl-paste", &["--type", chosen.as_str()]).await?;
        if !output.status.success() {
            let stderr = stderr_of(&output);
            if Self::is_no_content(&stderr) {
                return Ok(None);
            }
            return Err(Self::failure(stderr));
        }

        Ok(Some(output.stdout))
    }
}
