//! Playback control
//!
//! Owns the play/pause semantics and the media-player callback handling.
//! Playback errors are treated exactly like natural track end: the engine
//! skips forward rather than stalling on an unplayable track, and nothing
//! is surfaced to the user.

use crate::sequencer;
use crowdplay_core::PlaybackState;

/// Flip the play/pause flag. No other field changes.
pub fn toggle_play(state: &PlaybackState) -> PlaybackState {
    let mut next_state = state.clone();
    next_state.playing = !state.playing;
    next_state
}

/// The current track finished naturally.
pub fn on_ended(state: &PlaybackState) -> PlaybackState {
    sequencer::advance(state)
}

/// The current track failed to play. Identical to [`on_ended`].
pub fn on_error(state: &PlaybackState) -> PlaybackState {
    sequencer::advance(state)
}

/// Label for the play/pause control. Derived display value, not state.
pub fn action_label(state: &PlaybackState) -> &'static str {
    if state.playing {
        "Pause"
    } else {
        "Play"
    }
}
