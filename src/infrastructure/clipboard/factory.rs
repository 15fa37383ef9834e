//! Clipboard tool factory with automatic detection

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::application::ports::ClipboardSource;

use super::arboard::ArboardClipboard;
use super::command::is_tool_available;
use super::macos::MacosClipboard;
use super::powershell::PowerShellClipboard;
use super::wayland::WaylandClipboard;
use super::x11::X11Clipboard;

/// Valid clipboard tool preference values
pub const VALID_CLIPBOARD_TOOLS: &[&str] =
    &["auto", "arboard", "wl-paste", "xclip", "macos", "powershell"];

/// Available clipboard tools
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardTool {
    /// Cross-platform arboard library (text only)
    Arboard,
    /// Wayland: wl-paste from wl-clipboard
    WlPaste,
    /// X11: xclip
    Xclip,
    /// macOS: pbpaste and osascript
    Macos,
    /// Windows: PowerShell and System.Windows.Forms
    PowerShell,
}

impl fmt::Display for ClipboardTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardTool::Arboard => write!(f, "arboard"),
            ClipboardTool::WlPaste => write!(f, "wl-paste"),
            ClipboardTool::Xclip => write!(f, "xclip"),
            ClipboardTool::Macos => write!(f, "macos"),
            ClipboardTool::PowerShell => write!(f, "powershell"),
        }
    }
}

/// User preference for clipboard tool selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ClipboardToolPreference {
    /// Detect the native tool for this session
    #[default]
    Auto,
    /// Always use a specific tool
    Tool(ClipboardTool),
}

impl fmt::Display for ClipboardToolPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardToolPreference::Auto => write!(f, "auto"),
            ClipboardToolPreference::Tool(tool) => write!(f, "{}", tool),
        }
    }
}

/// Error type for parsing clipboard tool preference
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseClipboardToolError {
    pub value: String,
}

impl fmt::Display for ParseClipboardToolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid clipboard tool '{}'. Valid options: {}",
            self.value,
            VALID_CLIPBOARD_TOOLS.join(", ")
        )
    }
}

impl std::error::Error for ParseClipboardToolError {}

impl FromStr for ClipboardToolPreference {
    type Err = ParseClipboardToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "arboard" => Ok(Self::Tool(ClipboardTool::Arboard)),
            "wl-paste" | "wayland" => Ok(Self::Tool(ClipboardTool::WlPaste)),
            "xclip" | "x11" => Ok(Self::Tool(ClipboardTool::Xclip)),
            "macos" | "pbpaste" | "osascript" => Ok(Self::Tool(ClipboardTool::Macos)),
            "powershell" | "windows" => Ok(Self::Tool(ClipboardTool::PowerShell)),
            _ => Err(ParseClipboardToolError {
                value: s.to_string(),
            }),
        }
    }
}

/// Detect the best available clipboard tool
///
/// On macOS: osascript. On Windows: PowerShell.
/// On Linux: wl-paste under Wayland, xclip under X11, otherwise arboard.
pub async fn detect_clipboard_tool() -> ClipboardTool {
    if cfg!(target_os = "macos") {
        return ClipboardTool::Macos;
    }
    if cfg!(windows) {
        return ClipboardTool::PowerShell;
    }

    if env::var_os("WAYLAND_DISPLAY").is_some() && is_tool_available("wl-paste").await {
        return ClipboardTool::WlPaste;
    }
    if env::var_os("DISPLAY").is_some() && is_tool_available("xclip").await {
        return ClipboardTool::Xclip;
    }

    ClipboardTool::Arboard
}

/// Create a clipboard adapter using the specified preference.
///
/// Availability of an explicitly chosen tool is only checked when the
/// clipboard is read, so validation errors are reported first.
pub async fn create_clipboard(
    preference: ClipboardToolPreference,
) -> (Box<dyn ClipboardSource>, ClipboardTool) {
    let tool = match preference {
        ClipboardToolPreference::Auto => detect_clipboard_tool().await,
        ClipboardToolPreference::Tool(tool) => tool,
    };

    (create_specific_tool(tool), tool)
}

/// Create a specific clipboard tool adapter
fn create_specific_tool(tool: ClipboardTool) -> Box<dyn ClipboardSource> {
    match tool {
        ClipboardTool::Arboard => Box::new(ArboardClipboard::new()) as Box<dyn ClipboardSource>,
        ClipboardTool::WlPaste => Box::new(WaylandClipboard::new()) as Box<dyn ClipboardSource>,
        ClipboardTool::Xclip => Box::new(X11Clipboard::new()) as Box<dyn ClipboardSource>,
        ClipboardTool::Macos => Box::new(MacosClipboard::new()) as Box<dyn ClipboardSource>,
        ClipboardTool::PowerShell => Box::new(PowerShellClipboard::new()) as Box<dyn ClipboardSource>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_tool_display() {
        assert_eq!(ClipboardTool::Arboard.to_string(), "arboard");
        assert_eq!(ClipboardTool::WlPaste.to_string(), "wl-paste");
        assert_eq!(ClipboardTool::Xclip.to_string(), "xclip");
        assert_eq!(ClipboardTool::Macos.to_string(), "macos");
        assert_eq!(ClipboardTool::PowerShell.to_string(), "powershell");
    }

    #[test]
    fn every_valid_value_parses() {
        for value in VALID_CLIPBOARD_TOOLS {
            let pref: ClipboardToolPreference = value.parse().unwrap();
            assert_eq!(pref.to_string(), *value);
        }
    }

    #[test]
    fn preference_from_str_is_case_insensitive() {
        assert_eq!(
            "XCLIP".parse::<ClipboardToolPreference>().unwrap(),
            ClipboardToolPreference::Tool(ClipboardTool::Xclip)
        );
        assert_eq!(
            "wayland".parse::<ClipboardToolPreference>().unwrap(),
            ClipboardToolPreference::Tool(ClipboardTool::WlPaste)
        );
    }

    #[test]
    fn preference_from_str_invalid() {
        let err = "clipit".parse::<ClipboardToolPreference>().unwrap_err();
        assert_eq!(err.value, "clipit");
        assert!(err.to_string().contains("wl-paste"));
    }

    #[test]
    fn preference_default_is_auto() {
        assert_eq!(
            ClipboardToolPreference::default(),
            ClipboardToolPreference::Auto
        );
    }

    #[tokio::test]
    async fn explicit_preference_is_honored() {
        let (clipboard, tool) =
            create_clipboard(ClipboardToolPreference::Tool(ClipboardTool::Xclip)).await;
        assert_eq!(tool, ClipboardTool::Xclip);
        assert_eq!(clipboard.name(), "xclip");
    }
}
