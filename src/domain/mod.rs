//! Domain layer - Core business logic
//!
//! Contains value objects and domain errors.
//! This layer has no dependencies on external systems.

pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod payload;
pub mod target;

// Re-export common types
pub use config::AppConfig;
pub use error::*;
pub use format::{Format, FormatKind, IMAGE_EXTENSIONS, TEXT_EXTENSIONS};
pub use input::ParsedInput;
pub use payload::ClipboardPayload;
pub use target::OutputTarget;
