//! Domain types for Crowdplay

mod ids;
mod playlist;
mod state;
mod track;

pub use ids::{PlaylistId, TrackId, UserId};
pub use playlist::Playlist;
pub use state::{PlaybackState, StateSnapshot};
pub use track::Track;
