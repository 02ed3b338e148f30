//! Crowdplay Core
//!
//! Domain types for Crowdplay, the collaborative playlist playback engine.
//!
//! This crate is pure data: the track/playlist/state types held by the sync
//! engine and the (possibly partial) snapshot type exchanged with the
//! external store. Serialization matches the wire shape used by the
//! playlist channel and the REST API, so a `StateSnapshot` can be fed
//! straight from either source into the reconciler.
//!
//! # Example
//!
//! ```rust
//! use crowdplay_core::{Playlist, PlaylistId, Track, TrackId};
//!
//! let mut playlist = Playlist::new(PlaylistId::new("p1"), "Friday Night");
//! playlist
//!     .tracks
//!     .push(Track::new(TrackId::new("t1"), "https://youtu.be/dQw4w9WgXcQ"));
//!
//! assert_eq!(playlist.tracks.len(), 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod types;

// Re-export commonly used types
pub use types::{
    // Identifiers
    PlaylistId, TrackId, UserId,
    // Domain
    Playlist, Track,
    // State exchanged with the engine and the store
    PlaybackState, StateSnapshot,
};
