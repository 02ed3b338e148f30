//! Crowdplay Server Client
//!
//! HTTP client for the Crowdplay playlist state API.
//!
//! The sync engine treats the server as a dumb store: fetch the initial
//! snapshot, publish the full state after every transition. This crate
//! implements that contract over REST and plugs into the engine through
//! the [`StateStore`](crowdplay_playback::StateStore) trait.
//!
//! # Example
//!
//! ```ignore
//! use crowdplay_core::PlaylistId;
//! use crowdplay_playback::{LocalChannel, SyncEngine};
//! use crowdplay_server_client::{CrowdplayServerClient, ServerConfig};
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CrowdplayServerClient::new(ServerConfig::new("https://party.example.com"))?;
//!
//!     let channel = LocalChannel::new();
//!     let (mut engine, views) = SyncEngine::new(PlaylistId::new("p1"), Arc::new(client));
//!     engine.start(&channel).await?;
//!
//!     println!("now playing: {}", views.borrow().state.url);
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod types;

// Re-export main types
pub use client::CrowdplayServerClient;
pub use error::{Result, ServerClientError};
pub use types::ServerConfig;
