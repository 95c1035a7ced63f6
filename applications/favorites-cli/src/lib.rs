//! Soul Favorites CLI Library
//!
//! Line-oriented driver for the favorites playlist: command parsing, session
//! loop, output rendering, and configuration.
//!
//! This library exposes the core components for testing purposes.

pub mod command;
pub mod config;
pub mod error;
pub mod session;

// Re-export commonly used types for convenience
pub use command::Command;
pub use config::{CliConfig, OutputFormat, OutputSettings};
pub use error::{CliError, Result};
pub use session::{Flow, Session};
