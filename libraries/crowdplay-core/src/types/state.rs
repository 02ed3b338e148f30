/// Playback state and the partial snapshot exchanged with the store
use crate::types::{Playlist, TrackId};
use serde::{Deserialize, Serialize};

/// The full playback state of one observed playlist.
///
/// This is the unit held locally by the sync engine and the unit published
/// whole to the external store after every transition. When no track is
/// playing, `url` keeps its last value; when one is, `url` equals that
/// track's url.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    /// The playlist being played
    #[serde(default)]
    pub playlist: Playlist,

    /// URL of the active track, or empty before the first track is seeded
    #[serde(default)]
    pub url: String,

    /// Whether playback is running (the play/pause flag)
    #[serde(default)]
    pub playing: bool,

    /// Track ids other viewers have already filtered out of their display.
    /// Carried through merges and publishes verbatim; the engine itself
    /// never consults it.
    #[serde(default)]
    pub played_tracks: Vec<TrackId>,
}

/// A partial playback state received from the channel or the REST API.
///
/// Any subset of top-level fields may be present. An absent field means
/// "leave the local value alone"; a present field replaces the local value
/// wholesale (for `playlist` that includes the entire track list). The shape
/// is not validated beyond deserialization: input is trusted, and an
/// implausible snapshot propagates into local state unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateSnapshot {
    /// Full replacement playlist, tracks included
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playlist: Option<Playlist>,

    /// Replacement active-track URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Replacement play/pause flag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub playing: Option<bool>,

    /// Replacement played-tracks list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub played_tracks: Option<Vec<TrackId>>,
}

impl StateSnapshot {
    /// Whether the snapshot carries no fields at all
    pub fn is_empty(&self) -> bool {
        self.playlist.is_none()
            && self.url.is_none()
            && self.playing.is_none()
            && self.played_tracks.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{PlaylistId, Track};

    #[test]
    fn empty_snapshot_deserializes_from_empty_object() {
        let snapshot: StateSnapshot = serde_json::from_str("{}").unwrap();
        assert!(snapshot.is_empty());
    }

    #[test]
    fn snapshot_uses_camel_case_on_the_wire() {
        let snapshot: StateSnapshot =
            serde_json::from_str(r#"{"playedTracks": ["t1", "t2"], "playing": true}"#).unwrap();
        assert_eq!(
            snapshot.played_tracks,
            Some(vec![TrackId::new("t1"), TrackId::new("t2")])
        );
        assert_eq!(snapshot.playing, Some(true));
        assert!(snapshot.playlist.is_none());

        // Absent fields stay absent when re-serialized
        let json = serde_json::to_value(&snapshot).unwrap();
        assert!(json.get("url").is_none());
        assert!(json.get("playedTracks").is_some());
    }

    #[test]
    fn playback_state_round_trips() {
        let mut state = PlaybackState::default();
        state.playlist = Playlist::new(PlaylistId::new("p1"), "Party");
        state
            .playlist
            .tracks
            .push(Track::new(TrackId::new("t1"), "u1"));
        state.url = "u1".to_string();
        state.playing = true;
        state.played_tracks = vec![TrackId::new("t0")];

        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"playedTracks\""));

        let back: PlaybackState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
