//! Render contract
//!
//! What the engine exposes for display: the full state plus the derived
//! values the track list and controls are rendered from.

use crate::{controller, sequencer};
use crowdplay_core::{PlaybackState, Track};
use serde::Serialize;

/// Snapshot of everything a renderer needs for one playlist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlaylistView {
    /// The full playback state
    pub state: PlaybackState,

    /// "Pause" while playing, "Play" otherwise
    pub action_label: &'static str,

    /// Tracks not yet played, in play order
    pub remaining: Vec<Track>,
}

impl PlaylistView {
    /// Derive a view from the current state.
    pub fn of(state: &PlaybackState) -> Self {
        Self {
            state: state.clone(),
            action_label: controller::action_label(state),
            remaining: sequencer::remaining_tracks(state)
                .into_iter()
                .cloned()
                .collect(),
        }
    }
}
