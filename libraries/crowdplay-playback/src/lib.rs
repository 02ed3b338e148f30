//! Crowdplay - Playback Sync Engine
//!
//! Playback state reconciliation and track sequencing for collaboratively
//! viewed playlists. One "server" viewer drives playback; every other viewer
//! mirrors it through state snapshots pushed over a per-playlist channel.
//!
//! This crate provides:
//! - Snapshot reconciliation (field-presence merge + initial-track seeding)
//! - Track sequencing (current/next lookup, advance, jump)
//! - Playback control (play/pause toggle, end-of-track and error handling)
//! - The sync loop orchestrating all of the above per observed playlist
//!
//! # Architecture
//!
//! State transitions are pure functions over [`PlaybackState`](crowdplay_core::PlaybackState):
//! they take a reference and return a new value, so a state captured by a
//! pending callback can never be mutated out from under it. The only place
//! state lives is inside a [`SyncEngine`], which applies events one at a
//! time and publishes each result to the external [`StateStore`]
//! fire-and-forget.
//!
//! Rendering, the network transport, and the embedded media player are
//! external collaborators behind the [`StateStore`] and [`SnapshotChannel`]
//! traits and the [`PlaylistView`] render contract.
//!
//! # Example
//!
//! ```rust
//! use crowdplay_core::{PlaybackState, Playlist, PlaylistId, StateSnapshot, Track, TrackId};
//! use crowdplay_playback::{reconciler, sequencer};
//!
//! let mut playlist = Playlist::new(PlaylistId::new("p1"), "Friday Night");
//! playlist.tracks.push(Track::new(TrackId::new("t1"), "https://youtu.be/a"));
//! playlist.tracks.push(Track::new(TrackId::new("t2"), "https://youtu.be/b"));
//!
//! // The first snapshot seeds the first track as the active one
//! let snapshot = StateSnapshot { playlist: Some(playlist), ..StateSnapshot::default() };
//! let state = reconciler::merge(&PlaybackState::default(), &snapshot);
//! assert_eq!(state.url, "https://youtu.be/a");
//!
//! // Natural end of track moves on to the next unplayed one
//! let state = sequencer::advance(&state);
//! assert_eq!(state.url, "https://youtu.be/b");
//! ```

mod channel;
mod engine;
mod error;
mod store;
mod view;

pub mod controller;
pub mod reconciler;
pub mod sequencer;

// Public exports
pub use channel::{LocalChannel, SnapshotChannel, Subscription};
pub use engine::{EngineCommand, EngineEvent, SyncEngine};
pub use error::{PlaybackError, Result};
pub use store::StateStore;
pub use view::PlaylistView;
