//! Errors surfaced by the runtime API.

use thiserror::Error;

/// Errors returned to runtime clients.
#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("command channel closed (worker stopped)")]
    CommandChannelClosed,

    #[error("reply channel closed: {0}")]
    ReplyChannelClosed(#[from] tokio::sync::oneshot::error::RecvError),

    #[error("match duration must be positive, got {seconds}")]
    InvalidDuration { seconds: f64 },

    #[error("message pool has {available} messages but the schedule needs {required}")]
    CatalogTooSmall { available: usize, required: usize },

    #[error("no message pool configured")]
    MessagesNotSet,

    #[error("worker task failed to join: {0}")]
    WorkerJoin(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
