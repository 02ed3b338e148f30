//! Error types for the playback sync engine

use thiserror::Error;

/// Playback sync errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Channel subscription failed or was lost
    #[error("Channel error: {0}")]
    Channel(String),

    /// External state store rejected an operation
    #[error("Store error: {0}")]
    Store(String),

    /// The engine was asked to run without an active subscription
    #[error("Engine is not observing a playlist")]
    NotObserving,
}

/// Result type for playback sync operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
