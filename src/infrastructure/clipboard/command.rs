//! Helpers for clipboard tools that run as child processes

use std::process::{Output, Stdio};

use tokio::process::Command;

use crate::application::ports::ClipboardError;

/// Run `program` to completion and capture its output.
///
/// A missing binary maps to `ToolNotFound`; exit status is left to the caller.
pub(crate) async fn run_tool(program: &str, args: &[&str]) -> Result<Output, ClipboardError> {
    Command::new(program)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ClipboardError::ToolNotFound(program.to_string())
            } else if e.kind() == std::io::ErrorKind::PermissionDenied {
                ClipboardError::AccessDenied(format!("{}: {}", program, e))
            } else {
                ClipboardError::ReadFailed(format!("{}: {}", program, e))
            }
        })
}

/// Stderr of a finished process, trimmed
pub(crate) fn stderr_of(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).trim().to_string()
}

/// Decode tool stdout as UTF-8
pub(crate) fn utf8_stdout(output: Output) -> Result<String, ClipboardError> {
    String::from_utf8(output.stdout).map_err(|_| ClipboardError::InvalidUtf8)
}

/// Check if a tool binary is available using `which`
pub(crate) async fn is_tool_available(tool: &str) -> bool {
    Command::new("which")
        .arg(tool)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .await
        .map(|s| s.success())
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn missing_binary_is_tool_not_found() {
        let err = run_tool("cb2f-definitely-not-a-real-tool", &[])
            .await
            .unwrap_err();
        assert_eq!(
            err,
            ClipboardError::ToolNotFound("cb2f-definitely-not-a-real-tool".to_string())
        );
    }

    #[tokio::test]
    async fn missing_binary_is_not_available() {
        assert!(!is_tool_available("cb2f-definitely-not-a-real-tool").await);
    }
}
