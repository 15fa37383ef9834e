//! Port interfaces (traits) for external systems
//!
//! These traits define the boundaries between the application
//! and infrastructure layers.

pub mod clipboard;
pub mod config;
pub mod output;

// Re-export common types
pub use clipboard::{ClipboardError, ClipboardSource};
pub use config::ConfigStore;
pub use output::{OutputStore, WriteError};
