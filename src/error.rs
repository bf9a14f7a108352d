use std::io;
use thiserror::Error;

/// Custom result type alias for the crate
pub type Result<T> = std::result::Result<T, DeskError>;

/// Errors raised by the banner formatter, the clipboard sink and the capture run
#[derive(Debug, Error)]
pub enum DeskError {
    /// A caller-supplied value is out of range or not understood
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The clipboard program is missing or failed
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// A capture tool could not be run or exited unsuccessfully
    #[error("Capture error: {0}")]
    Capture(String),

    /// Configuration errors
    #[error("Config error: {0}")]
    Config(String),

    /// I/O errors
    #[error("IO error: {0}")]
    IO(#[from] io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General message errors
    #[error("{0}")]
    Message(String),
}

impl DeskError {
    /// Creates a new error with the specified message
    pub fn new(message: &str) -> Self {
        Self::Message(message.to_string())
    }

    /// Shorthand for an [`DeskError::InvalidArgument`]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Checks if this error was caused by bad input rather than the environment
    pub fn is_usage_error(&self) -> bool {
        matches!(self, Self::InvalidArgument(_) | Self::Config(_))
    }

    /// Process exit code the CLI reports for this error
    pub fn exit_code(&self) -> i32 {
        if self.is_usage_error() {
            2
        } else {
            1
        }
    }
}
