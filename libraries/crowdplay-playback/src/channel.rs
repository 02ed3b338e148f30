//! Snapshot pub/sub channel
//!
//! Viewers of a playlist receive state snapshots pushed over a channel keyed
//! by playlist id. The engine acquires a [`Subscription`] when it starts
//! observing and releases it by dropping, so a stopped engine cannot see
//! duplicate deliveries. Subscriptions are plain values owned by the
//! engine's lifecycle, never ambient globals.

use crate::error::{PlaybackError, Result};
use async_trait::async_trait;
use crowdplay_core::{PlaylistId, StateSnapshot};
use std::collections::HashMap;
use std::sync::Mutex;
use tokio::sync::broadcast;
use tracing::{debug, warn};

/// Per-playlist buffer for in-flight snapshots. Lagging subscribers skip
/// ahead; under last-applied-wins a skipped snapshot is stale anyway.
const CHANNEL_CAPACITY: usize = 64;

/// A source of pushed state snapshots, keyed by playlist id.
#[async_trait]
pub trait SnapshotChannel: Send + Sync {
    /// Start receiving snapshots for one playlist.
    async fn subscribe(&self, playlist_id: &PlaylistId) -> Result<Subscription>;
}

/// Live receive handle for one playlist's snapshots.
///
/// Dropping the subscription releases the channel slot.
pub struct Subscription {
    playlist_id: PlaylistId,
    receiver: broadcast::Receiver<StateSnapshot>,
}

impl Subscription {
    /// Wrap a broadcast receiver. Channel implementations use this to hand
    /// out subscriptions.
    pub fn new(playlist_id: PlaylistId, receiver: broadcast::Receiver<StateSnapshot>) -> Self {
        Self {
            playlist_id,
            receiver,
        }
    }

    /// The playlist this subscription observes.
    pub fn playlist_id(&self) -> &PlaylistId {
        &self.playlist_id
    }

    /// Receive the next snapshot. Returns `None` once the channel closes.
    pub async fn recv(&mut self) -> Option<StateSnapshot> {
        loop {
            match self.receiver.recv().await {
                Ok(snapshot) => return Some(snapshot),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    warn!(
                        playlist_id = %self.playlist_id,
                        skipped, "subscription lagged, skipping stale snapshots"
                    );
                }
                Err(broadcast::error::RecvError::Closed) => return None,
            }
        }
    }
}

/// In-process snapshot channel.
///
/// Fans snapshots out to every live subscriber of a playlist id. Used by
/// tests and by same-process viewers; a networked transport implements
/// [`SnapshotChannel`] the same way.
pub struct LocalChannel {
    topics: Mutex<HashMap<PlaylistId, broadcast::Sender<StateSnapshot>>>,
}

impl LocalChannel {
    /// Create a channel with no topics.
    pub fn new() -> Self {
        Self {
            topics: Mutex::new(HashMap::new()),
        }
    }

    /// Deliver a snapshot to every current subscriber of `playlist_id`.
    ///
    /// Returns how many subscribers received it. A poisoned registry is
    /// treated as having no subscribers, matching [`SnapshotChannel::subscribe`]
    /// never panicking on poison.
    pub fn publish(&self, playlist_id: &PlaylistId, snapshot: StateSnapshot) -> usize {
        let Ok(mut topics) = self.topics.lock() else {
            warn!(playlist_id = %playlist_id, "channel registry poisoned, dropping snapshot");
            return 0;
        };

        // Prune topics whose last subscriber went away
        topics.retain(|_, sender| sender.receiver_count() > 0);

        match topics.get(playlist_id) {
            Some(sender) => sender.send(snapshot).unwrap_or(0),
            None => 0,
        }
    }

    /// Number of live subscribers for a playlist. Zero when the registry
    /// is poisoned.
    pub fn subscriber_count(&self, playlist_id: &PlaylistId) -> usize {
        self.topics.lock().map_or(0, |topics| {
            topics
                .get(playlist_id)
                .map_or(0, broadcast::Sender::receiver_count)
        })
    }
}

impl Default for LocalChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SnapshotChannel for LocalChannel {
    async fn subscribe(&self, playlist_id: &PlaylistId) -> Result<Subscription> {
        let mut topics = self
            .topics
            .lock()
            .map_err(|_| PlaybackError::Channel("channel registry poisoned".to_string()))?;

        let sender = topics
            .entry(playlist_id.clone())
            .or_insert_with(|| broadcast::channel(CHANNEL_CAPACITY).0);

        debug!(playlist_id = %playlist_id, "subscribed to playlist channel");
        Ok(Subscription::new(playlist_id.clone(), sender.subscribe()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_playing(playing: bool) -> StateSnapshot {
        StateSnapshot {
            playing: Some(playing),
            ..StateSnapshot::default()
        }
    }

    #[tokio::test]
    async fn delivers_to_subscribers_of_the_same_playlist() {
        let channel = LocalChannel::new();
        let p1 = PlaylistId::new("p1");

        let mut first = channel.subscribe(&p1).await.unwrap();
        let mut second = channel.subscribe(&p1).await.unwrap();

        assert_eq!(channel.publish(&p1, snapshot_playing(true)), 2);
        assert_eq!(first.recv().await.unwrap().playing, Some(true));
        assert_eq!(second.recv().await.unwrap().playing, Some(true));
    }

    #[tokio::test]
    async fn playlists_are_isolated() {
        let channel = LocalChannel::new();
        let p1 = PlaylistId::new("p1");
        let p2 = PlaylistId::new("p2");

        let _sub = channel.subscribe(&p1).await.unwrap();

        // Nobody observes p2
        assert_eq!(channel.publish(&p2, snapshot_playing(true)), 0);
    }

    #[tokio::test]
    async fn dropping_the_subscription_releases_the_slot() {
        let channel = LocalChannel::new();
        let p1 = PlaylistId::new("p1");

        let subscription = channel.subscribe(&p1).await.unwrap();
        assert_eq!(channel.subscriber_count(&p1), 1);

        drop(subscription);
        assert_eq!(channel.publish(&p1, snapshot_playing(false)), 0);
        assert_eq!(channel.subscriber_count(&p1), 0);
    }

    #[test]
    fn poisoned_registry_is_treated_as_empty() {
        let channel = std::sync::Arc::new(LocalChannel::new());
        let p1 = PlaylistId::new("p1");

        let poisoner = std::sync::Arc::clone(&channel);
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.topics.lock().unwrap();
            panic!("poison the registry");
        })
        .join();

        assert_eq!(channel.publish(&p1, snapshot_playing(true)), 0);
        assert_eq!(channel.subscriber_count(&p1), 0);
    }

    #[tokio::test]
    async fn recv_returns_none_when_channel_closes() {
        let channel = LocalChannel::new();
        let p1 = PlaylistId::new("p1");

        let mut subscription = channel.subscribe(&p1).await.unwrap();
        drop(channel);

        assert!(subscription.recv().await.is_none());
    }
}
