//! X11 clipboard adapter using xclip

use async_trait::async_trait;

use crate::application::ports::{ClipboardError, ClipboardSource};

use super::command::{run_tool, stderr_of, utf8_stdout};
use super::pick_image_type;

/// X11 clipboard adapter using xclip
pub struct X11Clipboard;

impl X11Clipboard {
    /// Create a new X11 clipboard adapter
    pub fn new() -> Self {
        Self
    }

    /// xclip reports an empty or mistyped selection as an unavailable target
    fn is_no_content(stderr: &str) -> bool {
        stderr.contains("target") && stderr.contains("not available")
    }

    fn failure(stderr: String) -> ClipboardError {
        if stderr.contains("Can't open display") {
            ClipboardError::Unavailable(stderr)
        } else {
            ClipboardError::ReadFailed(stderr)
        }
    }

    fn target_args(target: &str) -> [&str; 5] {
        ["-selection", "clipboard", "-t", target, "-o"]
    }

    async fn read_target(&self, target: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        let output = run_tool("xclip", &Self::target_args(target)).await?;
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

impl Default for X11Clipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardSource for X11Clipboard {
    fn name(&self) -> &'static str {
        "xclip"
    }

    async fn read_text(&self) -> Result<String, ClipboardError> {
        let output = run_tool("xclip", &["-selection", "clipboard", "-o"]).await?;

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
        let Some(targets) = self.read_target("TARGETS").await? else {
            return Ok(None);
        };
        let offered: Vec<String> = String::from_utf8_lossy(&targets)
            .lines()
            .map(str::to_string)
            .collect();

        match pick_image_type(&offered, mime_type) {
            Some(chosen) => self.read_target(&chosen).await,
            None => Ok(None),
        }
    }
}
