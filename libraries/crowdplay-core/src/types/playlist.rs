/// Playlist domain type
use crate::types::{PlaylistId, Track, TrackId};
use serde::{Deserialize, Serialize};

/// A collaboratively viewed playlist.
///
/// Track order is insertion order and defines play order; the engine never
/// reorders tracks, only flips their flags. Inbound snapshots may carry a
/// playlist without an `id` (the channel is already scoped to one playlist),
/// so the field defaults to empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    /// Unique playlist identifier
    #[serde(default)]
    pub id: PlaylistId,

    /// Playlist name
    #[serde(default)]
    pub name: String,

    /// Tracks in play order
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Playlist {
    /// Create a new empty playlist
    pub fn new(id: PlaylistId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            tracks: Vec::new(),
        }
    }

    /// Find a track by id
    pub fn track(&self, id: &TrackId) -> Option<&Track> {
        self.tracks.iter().find(|t| &t.id == id)
    }

    /// Whether the playlist has no tracks
    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }
}
