//! Infrastructure layer - Adapter implementations
//!
//! Contains concrete implementations of the port interfaces,
//! integrating with platform clipboard tools and the filesystem.

pub mod clipboard;
pub mod config;
pub mod output;

// Re-export adapters
pub use clipboard::{
    create_clipboard, ArboardClipboard, ClipboardTool, ClipboardToolPreference, MacosClipboard,
    PowerShellClipboard, WaylandClipboard, X11Clipboard,
};
pub use config::XdgConfigStore;
pub use output::LocalOutputStore;
