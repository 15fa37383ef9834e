//! Application configuration value object

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration.
/// All fields are optional to support partial configs and merging.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Directory used when no output path is given
    pub output_dir: Option<String>,
    /// Clipboard tool preference (auto, arboard, wl-paste, xclip, macos, powershell)
    pub clipboard_tool: Option<String>,
}

impl AppConfig {
    /// Create config with default values
    pub fn defaults() -> Self {
        Self {
            output_dir: Some(".".to_string()),
            clipboard_tool: Some("auto".to_string()),
        }
    }

    /// Create an empty config (all None)
    pub fn empty() -> Self {
        Self::default()
    }

    /// Merge this config with another, where other takes precedence.
    /// Only non-None values from other will override this.
    pub fn merge(self, other: Self) -> Self {
        Self {
            output_dir: other.output_dir.or(self.output_dir),
            clipboard_tool: other.clipboard_tool.or(self.clipboard_tool),
        }
    }

    /// Get output directory, or the current directory if not set.
    /// A leading `~` is expanded to the home directory.
    pub fn output_dir_or_default(&self) -> PathBuf {
        match self.output_dir.as_deref().filter(|s| !s.is_empty()) {
            Some(dir) => expand_home(dir),
            None => PathBuf::from("."),
        }
    }

    /// Get clipboard tool preference, or "auto" if not set
    pub fn clipboard_tool_or_default(&self) -> &str {
        self.clipboard_tool.as_deref().unwrap_or("auto")
    }
}

fn expand_home(dir: &str) -> PathBuf {
    let rest = if dir == "~" {
        Some("")
    } else {
        dir.strip_prefix("~/")
    };

    match (rest, dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(dir),
    }
}
