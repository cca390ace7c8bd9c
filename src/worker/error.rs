//! Worker-specific error types.

use std::io;
use thiserror::Error;

use crate::config::SettingsError;
use crate::executor::TransportError;

/// Result type for worker operations.
pub type WorkerResult<T> = Result<T, WorkerError>;

/// Errors that can occur during worker communication.
#[derive(Error, Debug)]
pub enum WorkerError {
    /// Failed to spawn the worker process.
    #[error("failed to spawn worker process: {0}")]
    SpawnFailed(#[source] io::Error),

    /// No worker binary is configured.
    #[error("no catalog worker configured: {0}")]
    NotConfigured(String),

    /// Failed to write to worker stdin.
    #[error("failed to write to worker: {0}")]
    WriteFailed(#[source] io::Error),

    /// Failed to serialize request to JSON.
    #[error("failed to serialize request: {0}")]
    SerializeFailed(#[source] serde_json::Error),

    /// Failed to deserialize response from JSON.
    #[error("failed to deserialize response: {0}")]
    DeserializeFailed(#[source] serde_json::Error),

    /// Request timed out waiting for response.
    #[error("request timed out after {0} seconds")]
    Timeout(u64),

    /// Worker process exited unexpectedly.
    #[error("worker process exited unexpectedly")]
    WorkerExited,

    /// Response channel was closed (internal error).
    #[error("response channel closed unexpectedly")]
    ChannelClosed,

    /// The catalog matched no rows.
    #[error("no rows found")]
    NoRowsFound,

    /// Worker returned an error response.
    #[error("worker error: {message} (code: {code})")]
    Remote {
        /// Error code from worker.
        code: String,
        /// Error message from worker.
        message: String,
    },

    /// Catalog connection failed.
    #[error("catalog connection failed: {0}")]
    ConnectionFailed(String),

    /// Invalid request parameters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Method not found.
    #[error("method not found: {0}")]
    MethodNotFound(String),
}

impl WorkerError {
    /// Create a remote error from an error response.
    pub fn remote(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remote {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Check if this error indicates the worker has exited.
    pub fn is_worker_exited(&self) -> bool {
        matches!(self, Self::WorkerExited | Self::ChannelClosed)
    }
}

impl From<SettingsError> for WorkerError {
    fn from(err: SettingsError) -> Self {
        Self::NotConfigured(err.to_string())
    }
}

impl From<tokio::sync::oneshot::error::RecvError> for WorkerError {
    fn from(_: tokio::sync::oneshot::error::RecvError) -> Self {
        Self::ChannelClosed
    }
}

impl From<WorkerError> for TransportError {
    fn from(err: WorkerError) -> Self {
        match err {
            WorkerError::SpawnFailed(e) | WorkerError::WriteFailed(e) => Self::Io(e),
            WorkerError::Timeout(secs) => Self::Timeout(secs),
            WorkerError::WorkerExited | WorkerError::ChannelClosed => Self::Disconnected,
            WorkerError::SerializeFailed(e) | WorkerError::DeserializeFailed(e) => {
                Self::Protocol(e.to_string())
            }
            WorkerError::Remote { code, message } => Self::Remote { code, message },
            WorkerError::NoRowsFound => {
                Self::remote(super::protocol::CAT_NO_ROWS_FOUND, "no rows found")
            }
            WorkerError::NotConfigured(message) => Self::remote("NOT_CONFIGURED", message),
            WorkerError::ConnectionFailed(message) => Self::remote("CONNECTION_FAILED", message),
            WorkerError::InvalidRequest(message) => Self::remote("INVALID_REQUEST", message),
            WorkerError::MethodNotFound(message) => Self::remote("METHOD_NOT_FOUND", message),
        }
    }
}
