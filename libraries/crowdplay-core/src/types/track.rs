/// Track domain type
use crate::types::{TrackId, UserId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A single entry in a collaborative playlist.
///
/// `played` and `playing` are the two flags the sync engine drives; they
/// default to `false` so freshly added tracks arriving over the wire without
/// them deserialize cleanly. The upvote set is read-only data for the engine:
/// it is carried through merges and exposed for display, never mutated here
/// (vote counting happens server-side).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// Unique track identifier
    pub id: TrackId,

    /// Media URL handed to the embedded player
    pub url: String,

    /// Whether this track has already been played this session.
    /// Monotonic: the engine never resets it to `false`.
    #[serde(default)]
    pub played: bool,

    /// Whether this track is the active one. At most one track per
    /// playlist carries this flag at any time.
    #[serde(default)]
    pub playing: bool,

    /// Users who upvoted this track
    #[serde(default)]
    pub upvoted: HashSet<UserId>,
}

impl Track {
    /// Create a new unplayed track
    pub fn new(id: TrackId, url: impl Into<String>) -> Self {
        Self {
            id,
            url: url.into(),
            played: false,
            playing: false,
            upvoted: HashSet::new(),
        }
    }

    /// Number of upvotes
    pub fn upvote_count(&self) -> usize {
        self.upvoted.len()
    }

    /// Whether the given user upvoted this track
    pub fn is_upvoted_by(&self, user: &UserId) -> bool {
        self.upvoted.contains(user)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_track_is_unplayed() {
        let track = Track::new(TrackId::new("t1"), "https://youtu.be/abc");
        assert!(!track.played);
        assert!(!track.playing);
        assert_eq!(track.upvote_count(), 0);
    }

    #[test]
    fn track_flags_default_on_deserialize() {
        let track: Track =
            serde_json::from_str(r#"{"id": "t1", "url": "https://youtu.be/abc"}"#).unwrap();
        assert_eq!(track.id.as_str(), "t1");
        assert!(!track.played);
        assert!(!track.playing);
        assert!(track.upvoted.is_empty());
    }

    #[test]
    fn upvote_membership() {
        let mut track = Track::new(TrackId::new("t1"), "u");
        track.upvoted.insert(UserId::new("alice"));

        assert!(track.is_upvoted_by(&UserId::new("alice")));
        assert!(!track.is_upvoted_by(&UserId::new("bob")));
    }
}
