/// CLI error types
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Unknown command: {0} (type `help` for a list)")]
    UnknownCommand(String),

    #[error("Invalid arguments for `{command}`: {reason}")]
    InvalidArguments {
        command: &'static str,
        reason: String,
    },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    /// Create an invalid arguments error
    pub fn invalid_arguments(command: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArguments {
            command,
            reason: reason.into(),
        }
    }
}
