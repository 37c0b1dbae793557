//! Error types for the tmux launcher plugin.

use thiserror::Error;

/// Main error type for tmux launcher operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The tmux executable could not be started
    #[error("Failed to run {binary}: {source}")]
    TmuxSpawn {
        /// Executable that was invoked
        binary: String,
        /// Underlying spawn error
        #[source]
        source: std::io::Error,
    },

    /// tmux ran but exited unsuccessfully
    #[error("tmux exited with {status}: {stderr}")]
    TmuxFailed {
        /// Exit status as reported by the OS
        status: String,
        /// Trimmed stderr output
        stderr: String,
    },

    /// A list-panes line did not split into the expected fields
    #[error("Malformed list-panes line: {0:?}")]
    MalformedLine(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input or parameters (generic)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML configuration parse errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error with custom message
    #[error("{0}")]
    Other(String),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;
