//! Windows clipboard adapter using PowerShell
//!
//! The image is saved by .NET into a scoped temp file, then read back.

use async_trait::async_trait;

use crate::application::ports::{ClipboardError, ClipboardSource};

use super::command::{run_tool, stderr_of};

const NO_IMAGE_MARKER: &str = "cb2f:no-image";

/// Windows clipboard adapter using PowerShell
pub struct PowerShellClipboard;

impl PowerShellClipboard {
    /// Create a new PowerShell clipboard adapter
    pub fn new() -> Self {
        Self
    }

    /// Script that saves the clipboard image to `path`, or prints the marker
    fn image_script(path: &str) -> String {
        let quoted = path.replace('\'', "''");
        format!(
            "Add-Type -AssemblyName System.Windows.Forms; Add-Type -AssemblyName System.Drawing; \
             if ([System.Windows.Forms.Clipboard]::ContainsImage()) {{ \
             $img = [System.Windows.Forms.Clipboard]::GetImage(); \
             $img.Save('{quoted}', [System.Drawing.Imaging.ImageFormat]::Png) \
             }} else {{ Write-Output '{NO_IMAGE_MARKER}' }}"
        )
    }

    /// PowerShell appends a line break to pipeline output
    fn strip_host_newline(mut text: String) -> String {
        if text.ends_with("\r\n") {
            text.truncate(text.len() - 2);
        } else if text.ends_with('\n') {
            text.truncate(text.len() - 1);
        }
        text
    }

    fn failure(stderr: String) -> ClipboardError {
        if stderr.contains("Access is denied") || stderr.contains("UnauthorizedAccess") {
            ClipboardError::AccessDenied(stderr)
        } else {
            ClipboardError::ReadFailed(stderr)
        }
    }

    async fn powershell(&self, script: &str) -> Result<Vec<u8>, ClipboardError> {
        let output = run_tool(
            "powershell",
            &["-NoProfile", "-NonInteractive", "-Sta", "-Command", script],
        )
        .await?;
        if !output.status.success() {
            return Err(Self::failure(stderr_of(&output)));
        }
        Ok(output.stdout)
    }
}

impl Default for PowerShellClipboard {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ClipboardSource for PowerShellClipboard {
    fn name(&self) -> &'static str {
        "powershell"
    }

    async fn read_text(&self) -> Result<String, ClipboardError> {
        let stdout = self
            .powershell("[Console]::OutputEncoding = [System.Text.Encoding]::UTF8; Get-Clipboard -Raw")
            .await?;
        let text = String::from_utf8(stdout).map_err(|_| ClipboardError::InvalidUtf8)?;
        Ok(Self::strip_host_newline(text))
    }

    async fn read_image(&self, _mime_type: &str) -> Result<Option<Vec<u8>>, ClipboardError> {
        // Dropping the guard deletes the file on every path out of this scope
        let temp = tempfile::Builder::new()
            .prefix("cb2f-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| ClipboardError::ReadFailed(format!("temp file: {}", e)))?
            .into_temp_path();
        let path = temp.to_string_lossy().to_string();

        let stdout = self.powershell(&Self::image_script(&path)).await?;
        if String::from_utf8_lossy(&stdout).contains(NO_IMAGE_MARKER) {
            return Ok(None);
        }

        let bytes = tokio::fs::read(&temp)
            .await
            .map_err(|e| ClipboardError::ReadFailed(e.to_string()))?;

        Ok(Some(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_trailing_line_break() {
        assert_eq!(
            PowerShellClipboard::strip_host_newline("hello\r\n".to_string()),
            "hello"
        );
        assert_eq!(
            PowerShellClipboard::strip_host_newline("a\n\n".to_string()),
            "a\n"
        );
        assert_eq!(PowerShellClipboard::strip_host_newline("x".to_string()), "x");
    }

    #[test]
    fn image_script_quotes_path() {
        let script = PowerShellClipboard::image_script("C:\\Temp\\it's.png");
        assert!(script.contains("'C:\\Temp\\it''s.png'"));
        assert!(script.contains(NO_IMAGE_MARKER));
    }

    #[test]
    fn access_denied_is_detected() {
        let err = PowerShellClipboard::failure("Access is denied.".to_string());
        assert!(matches!(err, ClipboardError::AccessDenied(_)));
    }
}
