//! Track sequencing
//!
//! Derives the current and next track from the playlist's flags and
//! implements the advance and jump transitions. All functions are pure and
//! scan tracks in list order; list order never changes, only flags do.

use crowdplay_core::{PlaybackState, Track, TrackId};
use tracing::debug;

/// The track currently flagged `playing`, if any.
pub fn current_track(state: &PlaybackState) -> Option<&Track> {
    state.playlist.tracks.iter().find(|t| t.playing)
}

/// The first track in list order that has not been played yet.
///
/// Deliberately a first-unplayed lookup, not the list successor of the
/// current track: after a jump skips past an unplayed track, that track will
/// never be revisited here because jumps mark everything before the target
/// as played. Do not "fix" this to mean list successor.
pub fn next_track(state: &PlaybackState) -> Option<&Track> {
    state.playlist.tracks.iter().find(|t| !t.played)
}

/// Tracks not yet played, in list order (the displayable remainder).
pub fn remaining_tracks(state: &PlaybackState) -> Vec<&Track> {
    state.playlist.tracks.iter().filter(|t| !t.played).collect()
}

/// Complete the current track and activate the next one.
///
/// The current track is marked `played = true, playing = false`. If a next
/// track exists it becomes the active one and `url` is updated to its url
/// (the play/pause flag is untouched); otherwise `playing` is cleared and
/// `url` keeps its last value. With no current track the track list is left
/// alone and `playing` is cleared.
pub fn advance(state: &PlaybackState) -> PlaybackState {
    let mut next_state = state.clone();

    let Some(current) = next_state.playlist.tracks.iter_mut().find(|t| t.playing) else {
        next_state.playing = false;
        return next_state;
    };
    let finished = current.id.clone();
    current.played = true;
    current.playing = false;

    match next_state.playlist.tracks.iter_mut().find(|t| !t.played) {
        Some(next) => {
            debug!(finished = %finished, next = %next.id, "advancing to next track");
            next.playing = true;
            next_state.url = next.url.clone();
        }
        None => {
            debug!(finished = %finished, "playlist exhausted");
            next_state.playing = false;
        }
    }

    next_state
}

/// Jump directly to the track with id `target`.
///
/// Scans in list order: every track before the match is marked
/// `played = true, playing = false`, the match becomes the active one and
/// `url` is set to its url, and the scan stops there - tracks after the
/// match keep whatever flags they had. If no track matches, the whole list
/// ends up marked played with `url` unchanged.
pub fn jump_to(state: &PlaybackState, target: &TrackId) -> PlaybackState {
    let mut next_state = state.clone();

    for track in &mut next_state.playlist.tracks {
        if &track.id == target {
            debug!(track_id = %track.id, "jumping to track");
            track.playing = true;
            next_state.url = track.url.clone();
            return next_state;
        }
        track.played = true;
        track.playing = false;
    }

    next_state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconciler;
    use crowdplay_core::{Playlist, PlaylistId, StateSnapshot, Track};

    fn seeded_state(ids: &[&str]) -> PlaybackState {
        let mut playlist = Playlist::new(PlaylistId::new("p1"), "Party");
        for id in ids {
            playlist
                .tracks
                .push(Track::new(TrackId::new(*id), format!("url-{id}")));
        }
        let snapshot = StateSnapshot {
            playlist: Some(playlist),
            ..StateSnapshot::default()
        };
        reconciler::merge(&PlaybackState::default(), &snapshot)
    }

    fn playing_ids(state: &PlaybackState) -> Vec<&str> {
        state
            .playlist
            .tracks
            .iter()
            .filter(|t| t.playing)
            .map(|t| t.id.as_str())
            .collect()
    }

    #[test]
    fn seed_then_advance_through_whole_playlist() {
        // Fresh playlist [A, B, C]: nothing played, nothing playing.
        let state = seeded_state(&["a", "b", "c"]);
        assert_eq!(playing_ids(&state), vec!["a"]);
        assert_eq!(state.url, "url-a");

        let state = advance(&state);
        assert!(state.playlist.tracks[0].played);
        assert_eq!(playing_ids(&state), vec!["b"]);
        assert_eq!(state.url, "url-b");

        let state = advance(&state);
        assert_eq!(playing_ids(&state), vec!["c"]);
        assert_eq!(state.url, "url-c");

        let state = advance(&state);
        assert!(state.playlist.tracks.iter().all(|t| t.played));
        assert!(playing_ids(&state).is_empty());
        assert!(!state.playing);
        // URL keeps its last value when the playlist runs out
        assert_eq!(state.url, "url-c");
    }

    #[test]
    fn advance_without_current_track_leaves_list_untouched() {
        let mut state = seeded_state(&["a", "b"]);
        state.playlist.tracks[0].playing = false;
        state.playing = true;
        let before = state.playlist.clone();

        let after = advance(&state);
        assert_eq!(after.playlist, before);
        assert!(!after.playing);
        assert_eq!(after.url, state.url);
    }

    #[test]
    fn advance_preserves_play_pause_flag_mid_playlist() {
        let mut state = seeded_state(&["a", "b"]);
        state.playing = true;

        let after = advance(&state);
        assert!(after.playing);

        let mut paused = seeded_state(&["a", "b"]);
        paused.playing = false;
        let after = advance(&paused);
        assert!(!after.playing);
    }

    #[test]
    fn next_track_is_first_unplayed_not_list_successor() {
        // Jump from A to C, leaving B unplayed behind the active track.
        let state = seeded_state(&["a", "b", "c"]);
        let state = jump_to(&state, &TrackId::new("c"));

        // First-unplayed lookup lands on C itself here (A and B are played);
        // after C finishes there is nothing left even though C has no
        // successor problem - the scan starts from the front.
        assert_eq!(next_track(&state).unwrap().id, TrackId::new("c"));

        let state = advance(&state);
        assert!(playing_ids(&state).is_empty());
        assert!(!state.playing);
    }

    #[test]
    fn jump_marks_exactly_the_strict_predecessors() {
        let state = seeded_state(&["a", "b", "c", "d"]);
        let state = jump_to(&state, &TrackId::new("c"));

        assert!(state.playlist.tracks[0].played);
        assert!(state.playlist.tracks[1].played);
        assert!(!state.playlist.tracks[2].played);
        assert!(state.playlist.tracks[2].playing);
        assert_eq!(state.url, "url-c");
        // Tracks after the match keep their flags
        assert!(!state.playlist.tracks[3].played);
        assert!(!state.playlist.tracks[3].playing);
    }

    #[test]
    fn jump_to_the_active_track_is_allowed() {
        let state = seeded_state(&["a", "b"]);
        let state = jump_to(&state, &TrackId::new("a"));

        assert_eq!(playing_ids(&state), vec!["a"]);
        assert!(!state.playlist.tracks[0].played);
        assert_eq!(state.url, "url-a");
    }

    #[test]
    fn jump_with_unknown_id_marks_everything_played() {
        // Pins the original behavior: a miss exhausts the scan.
        let state = seeded_state(&["a", "b"]);
        let state = jump_to(&state, &TrackId::new("zzz"));

        assert!(state.playlist.tracks.iter().all(|t| t.played));
        assert!(playing_ids(&state).is_empty());
        assert_eq!(state.url, "url-a");
    }

    #[test]
    fn jump_with_duplicate_ids_stops_at_the_first_match() {
        // Track ids are unique by contract; input is trusted and duplicates
        // are not defended against. The scan stops at the first match, so a
        // playing track after it keeps its flag.
        let mut state = seeded_state(&["a", "b"]);
        state
            .playlist
            .tracks
            .push(Track::new(TrackId::new("a"), "url-a2"));
        let state = advance(&state);
        assert_eq!(playing_ids(&state), vec!["b"]);

        let state = jump_to(&state, &TrackId::new("a"));
        assert!(state.playlist.tracks[0].playing);
        assert_eq!(state.url, "url-a");
        assert_eq!(playing_ids(&state), vec!["a", "b"]);
    }

    #[test]
    fn current_track_none_on_empty_playlist() {
        let state = PlaybackState::default();
        assert!(current_track(&state).is_none());
        assert!(next_track(&state).is_none());
        assert!(remaining_tracks(&state).is_empty());
    }

    #[test]
    fn remaining_tracks_filters_played() {
        let state = seeded_state(&["a", "b", "c"]);
        let state = advance(&state);

        let remaining: Vec<&str> = remaining_tracks(&state)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(remaining, vec!["b", "c"]);
    }
}
