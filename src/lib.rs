//! cb2f - save clipboard content to a file
//!
//! This crate reads the system clipboard and writes its text or image
//! representation to a file whose format is inferred from an extension.
//!
//! # Architecture
//!
//! The crate follows hexagonal (ports & adapters) architecture:
//!
//! - **Domain**: Format table, input resolution, file naming, and errors
//! - **Application**: The save use case and port interfaces (traits)
//! - **Infrastructure**: Adapter implementations (wl-paste, xclip, osascript, filesystem, etc.)
//! - **CLI**: Command-line interface, argument parsing, and output formatting

pub mod application;
pub mod cli;
pub mod domain;
pub mod infrastructure;
