//! Clipboard infrastructure module
//!
//! One adapter per platform tool. The factory picks one at startup.

mod arboard;
mod command;
mod factory;
mod macos;
mod powershell;
mod wayland;
mod x11;

pub use arboard::ArboardClipboard;
pub use factory::{
    create_clipboard, detect_clipboard_tool, ClipboardTool, ClipboardToolPreference,
    ParseClipboardToolError, VALID_CLIPBOARD_TOOLS,
};
pub use macos::MacosClipboard;
pub use powershell::PowerShellClipboard;
pub use wayland::WaylandClipboard;
pub use x11::X11Clipboard;

/// Pick the image type to request from a list of offered MIME types.
///
/// Prefers `preferred`, then PNG, then any other `image/*` type.
pub(crate) fn pick_image_type<S: AsRef<str>>(offered: &[S], preferred: &str) -> Option<String> {
    let offered: Vec<&str> = offered.iter().map(|s| s.as_ref().trim()).collect();

    [preferred, "image/png"]
        .into_iter()
        .find(|wanted| offered.contains(wanted))
        .or_else(|| offered.iter().copied().find(|t| t.starts_with("image/")))
        .map(str::to_string)
}
