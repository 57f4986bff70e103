//! Error types for the logger

use std::io;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: io::Error,
    },

    /// JSON configuration error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// A log file could not be opened for appending
    #[error("open {path}: {source}")]
    FileOpen {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Time format that chrono cannot render
    #[error("Formatter error ({format_type}): {message}")]
    FormatterError {
        format_type: String,
        message: String,
    },
}

impl LoggerError {
    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    /// Create a file open error
    pub fn file_open(path: impl Into<String>, source: io::Error) -> Self {
        LoggerError::FileOpen {
            path: path.into(),
            source,
        }
    }

    /// Create a formatter error
    pub fn formatter(format_type: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FormatterError {
            format_type: format_type.into(),
            message: message.into(),
        }
    }

    /// The underlying `io::ErrorKind`, if this error came from the filesystem or sink
    #[must_use]
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            LoggerError::IoOperation { source, .. } | LoggerError::FileOpen { source, .. } => {
                Some(source.kind())
            }
            LoggerError::JsonError(_) | LoggerError::FormatterError { .. } => None,
        }
    }
}
