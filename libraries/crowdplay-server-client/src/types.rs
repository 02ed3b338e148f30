//! Types for the Crowdplay playlist state API.

use crowdplay_core::PlaybackState;
use serde::Serialize;

/// Configuration for connecting to a Crowdplay server.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Base URL of the server (e.g., "https://party.example.com")
    pub url: String,
}

impl ServerConfig {
    /// Create a new server config with the given base URL.
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Request body for the state publish endpoint: the full state wrapped in a
/// `state` envelope.
#[derive(Debug, Serialize)]
pub struct PublishStateRequest<'a> {
    pub state: &'a PlaybackState,
}
