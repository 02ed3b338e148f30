//! State reconciliation
//!
//! Merges a (possibly partial) inbound snapshot into the local playback
//! state. Field-presence rules: every snapshot field that is present
//! replaces the corresponding local field wholesale; absent fields are left
//! alone. The playlist is replaced as a unit, tracks included - there is no
//! element-wise diffing.

use crowdplay_core::{PlaybackState, StateSnapshot};
use tracing::debug;

/// Merge `snapshot` into `local`, returning the new state.
///
/// Pure: neither input is mutated. `merge(local, &StateSnapshot::default())`
/// is the identity.
///
/// After the field merge, the seed rule runs: if the merged `url` is empty
/// and the merged track list is not, the first track becomes the active one
/// (`playing = true`, `url` = its url). This is the only place an initial
/// track is ever selected.
///
/// Snapshots are trusted input. Nothing here validates that the snapshot is
/// internally consistent; an implausible one (say, two tracks flagged
/// playing) propagates into local state unchanged.
pub fn merge(local: &PlaybackState, snapshot: &StateSnapshot) -> PlaybackState {
    let mut merged = local.clone();

    if let Some(playlist) = &snapshot.playlist {
        merged.playlist = playlist.clone();
    }
    if let Some(url) = &snapshot.url {
        merged.url = url.clone();
    }
    if let Some(playing) = snapshot.playing {
        merged.playing = playing;
    }
    if let Some(played_tracks) = &snapshot.played_tracks {
        merged.played_tracks = played_tracks.clone();
    }

    if merged.url.is_empty() {
        if let Some(first) = merged.playlist.tracks.first_mut() {
            debug!(track_id = %first.id, "seeding initial track");
            merged.url = first.url.clone();
            first.playing = true;
        }
    }

    merged
}
