//! Cue Shell Library
//!
//! Line-oriented command shell embedding the `cue-playlist` engine.
//!
//! This library exposes the core components for testing purposes.

pub mod command;
pub mod config;
pub mod error;
pub mod shell;

// Re-export commonly used types for convenience
pub use command::Command;
pub use config::ShellConfig;
pub use error::{Result, ShellError};
pub use shell::{Outcome, Shell};
