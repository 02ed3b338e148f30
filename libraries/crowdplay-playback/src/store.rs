//! External state store seam
//!
//! The canonical copy of every playlist's state lives outside the engine
//! (behind a REST API in production). This trait covers the two operations
//! the engine needs from it; `crowdplay-server-client` provides the HTTP
//! implementation, and tests plug in recording fakes.

use crate::error::Result;
use async_trait::async_trait;
use crowdplay_core::{PlaybackState, PlaylistId, StateSnapshot};

/// External persistence/broadcast collaborator for playlist state.
#[async_trait]
pub trait StateStore: Send + Sync {
    /// Fetch the current snapshot for a playlist (initial state).
    ///
    /// The result goes through the same reconciliation path as snapshots
    /// pushed over the channel.
    async fn fetch_state(&self, playlist_id: &PlaylistId) -> Result<StateSnapshot>;

    /// Persist and broadcast the full state for a playlist.
    ///
    /// The engine calls this fire-and-forget after every transition; there
    /// is no response contract beyond success/failure.
    async fn publish_state(&self, playlist_id: &PlaylistId, state: &PlaybackState) -> Result<()>;
}
