//! Sync loop orchestration
//!
//! One [`SyncEngine`] owns the playback state of one observed playlist and
//! serializes every mutation: inbound snapshots, local user actions, and
//! media-player callbacks are applied one at a time, in arrival order, with
//! no locking (last applied wins). After each transition the new state is
//! published to the external store fire-and-forget; completion is never
//! awaited, so the store may observe updates out of local order. That race
//! is tolerated by design - the next inbound snapshot heals any divergence.

use crate::channel::{SnapshotChannel, Subscription};
use crate::error::{PlaybackError, Result};
use crate::store::StateStore;
use crate::view::PlaylistView;
use crate::{controller, reconciler, sequencer};
use crowdplay_core::{PlaybackState, PlaylistId, StateSnapshot, TrackId};
use std::sync::Arc;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info, warn};

/// One discrete input to the sync loop.
#[derive(Debug, Clone)]
pub enum EngineEvent {
    /// A (possibly partial) state pushed from the channel or fetched from
    /// the store
    Snapshot(StateSnapshot),
    /// User hit the play/pause control
    TogglePlay,
    /// User jumped to an arbitrary track
    JumpTo(TrackId),
    /// The embedded player reached the end of the current track
    TrackEnded,
    /// The embedded player failed to play the current track
    TrackError,
}

/// Commands accepted by a running engine loop.
#[derive(Debug, Clone)]
pub enum EngineCommand {
    /// User hit the play/pause control
    TogglePlay,
    /// User jumped to an arbitrary track
    JumpTo(TrackId),
    /// End-of-track notification from the player
    TrackEnded,
    /// Playback-error notification from the player
    TrackError,
    /// Stop observing and shut the loop down
    Stop,
}

/// Playback sync engine for one playlist.
///
/// Drives the reconciler, sequencer, and controller, publishes every
/// resulting state to the [`StateStore`], and exposes a [`watch`] stream of
/// [`PlaylistView`]s for rendering.
pub struct SyncEngine {
    playlist_id: PlaylistId,
    state: PlaybackState,
    store: Arc<dyn StateStore>,
    subscription: Option<Subscription>,
    view_tx: watch::Sender<PlaylistView>,
}

impl SyncEngine {
    /// Create an engine for `playlist_id` with empty local state.
    ///
    /// The returned receiver yields a fresh [`PlaylistView`] after every
    /// applied event.
    pub fn new(
        playlist_id: PlaylistId,
        store: Arc<dyn StateStore>,
    ) -> (Self, watch::Receiver<PlaylistView>) {
        let state = PlaybackState::default();
        let (view_tx, view_rx) = watch::channel(PlaylistView::of(&state));

        let engine = Self {
            playlist_id,
            state,
            store,
            subscription: None,
            view_tx,
        };
        (engine, view_rx)
    }

    /// The playlist this engine observes.
    pub fn playlist_id(&self) -> &PlaylistId {
        &self.playlist_id
    }

    /// Current local state.
    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    /// Current render view.
    pub fn view(&self) -> PlaylistView {
        PlaylistView::of(&self.state)
    }

    /// Whether the engine holds a live channel subscription.
    pub fn is_observing(&self) -> bool {
        self.subscription.is_some()
    }

    /// Start observing: subscribe to the playlist's channel, fetch the
    /// initial snapshot, and run it through the normal reconciliation path
    /// (which publishes the merged result).
    pub async fn start(&mut self, channel: &dyn SnapshotChannel) -> Result<()> {
        self.subscription = Some(channel.subscribe(&self.playlist_id).await?);

        let initial = self.store.fetch_state(&self.playlist_id).await?;
        info!(playlist_id = %self.playlist_id, "fetched initial playlist state");
        self.apply(EngineEvent::Snapshot(initial));
        Ok(())
    }

    /// Drop the channel subscription. No snapshots are delivered after this
    /// until [`start`](Self::start) is called again.
    pub fn stop_observing(&mut self) {
        if self.subscription.take().is_some() {
            info!(playlist_id = %self.playlist_id, "stopped observing playlist");
        }
    }

    /// Apply one event: reconcile, sequence, control, then publish.
    ///
    /// Must be called from within a tokio runtime (the publish is spawned).
    pub fn apply(&mut self, event: EngineEvent) -> &PlaybackState {
        let next = match event {
            EngineEvent::Snapshot(ref snapshot) => reconciler::merge(&self.state, snapshot),
            EngineEvent::TogglePlay => controller::toggle_play(&self.state),
            EngineEvent::JumpTo(ref target) => sequencer::jump_to(&self.state, target),
            EngineEvent::TrackEnded => controller::on_ended(&self.state),
            EngineEvent::TrackError => controller::on_error(&self.state),
        };

        debug!(
            playlist_id = %self.playlist_id,
            playing = next.playing,
            url = %next.url,
            "applied engine event"
        );

        self.state = next;
        let _ = self.view_tx.send(PlaylistView::of(&self.state));
        self.publish();
        &self.state
    }

    /// Run the cooperative event loop: one event at a time, either a pushed
    /// snapshot or a command, until `Stop` arrives or both inputs close.
    ///
    /// Consumes the engine; the subscription is released when the loop ends.
    pub async fn run(mut self, mut commands: mpsc::UnboundedReceiver<EngineCommand>) -> Result<()> {
        let mut subscription = self.subscription.take().ok_or(PlaybackError::NotObserving)?;

        loop {
            tokio::select! {
                snapshot = subscription.recv() => match snapshot {
                    Some(snapshot) => {
                        self.apply(EngineEvent::Snapshot(snapshot));
                    }
                    None => break,
                },
                command = commands.recv() => match command {
                    Some(EngineCommand::TogglePlay) => {
                        self.apply(EngineEvent::TogglePlay);
                    }
                    Some(EngineCommand::JumpTo(target)) => {
                        self.apply(EngineEvent::JumpTo(target));
                    }
                    Some(EngineCommand::TrackEnded) => {
                        self.apply(EngineEvent::TrackEnded);
                    }
                    Some(EngineCommand::TrackError) => {
                        self.apply(EngineEvent::TrackError);
                    }
                    Some(EngineCommand::Stop) | None => break,
                },
            }
        }

        info!(playlist_id = %self.playlist_id, "sync loop stopped");
        Ok(())
    }

    // Fire-and-forget publish of the full current state. Failures are
    // logged and otherwise ignored: local/store divergence is tolerated
    // until the next inbound snapshot overwrites it.
    fn publish(&self) {
        let store = Arc::clone(&self.store);
        let playlist_id = self.playlist_id.clone();
        let state = self.state.clone();

        tokio::spawn(async move {
            if let Err(err) = store.publish_state(&playlist_id, &state).await {
                warn!(playlist_id = %playlist_id, error = %err, "state publish failed");
            }
        });
    }
}
