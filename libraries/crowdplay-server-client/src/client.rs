//! Main Crowdplay server client.

use crate::error::{Result, ServerClientError};
use crate::types::{PublishStateRequest, ServerConfig};
use async_trait::async_trait;
use crowdplay_core::{PlaybackState, PlaylistId, StateSnapshot};
use crowdplay_playback::{PlaybackError, StateStore};
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// HTTP client for the playlist state API.
///
/// Two endpoints back the sync engine: the initial-state fetch and the
/// full-state publish. The client implements
/// [`StateStore`](crowdplay_playback::StateStore), so it plugs straight
/// into a [`SyncEngine`](crowdplay_playback::SyncEngine).
///
/// # Example
///
/// ```ignore
/// use crowdplay_server_client::{CrowdplayServerClient, ServerConfig};
/// use crowdplay_core::PlaylistId;
///
/// let client = CrowdplayServerClient::new(ServerConfig::new("https://party.example.com"))?;
/// let snapshot = client.fetch_state(&PlaylistId::new("p1")).await?;
/// ```
pub struct CrowdplayServerClient {
    http: Client,
    base_url: String,
}

impl CrowdplayServerClient {
    /// Create a new client with the given configuration.
    pub fn new(config: ServerConfig) -> Result<Self> {
        // Validate URL
        if config.url.is_empty() {
            return Err(ServerClientError::InvalidUrl("URL cannot be empty".into()));
        }

        // Parse and normalize URL
        let base_url = config.url.trim_end_matches('/').to_string();
        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(ServerClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        // Create HTTP client with reasonable defaults
        let http = Client::builder()
            .timeout(Duration::from_secs(30))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Crowdplay/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ServerClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// The normalized server base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the current state snapshot for a playlist.
    pub async fn fetch_state(&self, playlist_id: &PlaylistId) -> Result<StateSnapshot> {
        let url = format!("{}/api/v1/playlists/{}", self.base_url, playlist_id);
        debug!(url = %url, "Fetching playlist state");

        let response = self.http.get(&url).send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                ServerClientError::ServerUnreachable(e.to_string())
            } else {
                ServerClientError::Request(e)
            }
        })?;

        let status = response.status();

        if status.is_success() {
            let snapshot: StateSnapshot = response.json().await.map_err(|e| {
                ServerClientError::ParseError(format!("Failed to parse state snapshot: {}", e))
            })?;

            debug!(
                playlist_id = %playlist_id,
                tracks = snapshot.playlist.as_ref().map_or(0, |p| p.tracks.len()),
                "Fetched playlist state"
            );

            Ok(snapshot)
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }

    /// Publish the full state for a playlist.
    ///
    /// The body is the state wrapped in a `state` envelope; the server
    /// persists it and broadcasts it to every other viewer. No response
    /// body is expected.
    pub async fn publish_state(
        &self,
        playlist_id: &PlaylistId,
        state: &PlaybackState,
    ) -> Result<()> {
        let url = format!("{}/api/v1/playlists/{}/state", self.base_url, playlist_id);
        debug!(url = %url, playing = state.playing, "Publishing playlist state");

        let response = self
            .http
            .post(&url)
            .json(&PublishStateRequest { state })
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    ServerClientError::ServerUnreachable(e.to_string())
                } else {
                    ServerClientError::Request(e)
                }
            })?;

        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let error_text = response.text().await.unwrap_or_default();
            Err(ServerClientError::ServerError {
                status: status.as_u16(),
                message: error_text,
            })
        }
    }
}

#[async_trait]
impl StateStore for CrowdplayServerClient {
    async fn fetch_state(
        &self,
        playlist_id: &PlaylistId,
    ) -> crowdplay_playback::Result<StateSnapshot> {
        CrowdplayServerClient::fetch_state(self, playlist_id)
            .await
            .map_err(|e| PlaybackError::Store(e.to_string()))
    }

    async fn publish_state(
        &self,
        playlist_id: &PlaylistId,
        state: &PlaybackState,
    ) -> crowdplay_playback::Result<()> {
        CrowdplayServerClient::publish_state(self, playlist_id, state)
            .await
            .map_err(|e| PlaybackError::Store(e.to_string()))
    }
}
