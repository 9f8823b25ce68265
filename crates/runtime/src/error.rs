//! Error types for the session runtime.

use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, SessionError>;

/// Errors surfaced by the session runtime and its handle.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// The worker task is gone; the session cannot accept commands.
    #[error("session worker is no longer running")]
    ChannelClosed,

    /// The core rejected the action with a user-facing reason.
    #[error(transparent)]
    Execute(#[from] sorteo_core::ExecuteError),

    /// Snapshot persistence failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// The worker task panicked or was cancelled.
    #[error("failed to join worker task: {0}")]
    WorkerJoin(#[from] tokio::task::JoinError),
}
