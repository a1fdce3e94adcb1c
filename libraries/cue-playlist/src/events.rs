//! Playlist notifications
//!
//! Non-fatal notices emitted by the playlist. A sink never influences control
//! flow. Routine mutations are logged through `tracing` instead.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex, PoisonError};

/// Notices emitted by the playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaylistEvent {
    /// `add` was called with a track already in the playlist; nothing changed
    DuplicateTrack {
        /// The rejected track
        track: String,
    },
}

/// Receiver for playlist events
pub trait EventSink: Send {
    fn emit(&mut self, event: PlaylistEvent);
}

/// Default sink: forwards notices to `tracing` as warnings
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, event: PlaylistEvent) {
        match &event {
            PlaylistEvent::DuplicateTrack { track } => {
                tracing::warn!("Track is already in playlist: {:?}!", track);
            }
        }
    }
}

/// Sink that keeps every event for later inspection
///
/// Clones share the same buffer, so one handle can be given to the playlist
/// and another kept by the caller.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
    events: Arc<Mutex<Vec<PlaylistEvent>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of recorded events, oldest first
    pub fn events(&self) -> Vec<PlaylistEvent> {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Remove and return recorded events
    pub fn drain(&self) -> Vec<PlaylistEvent> {
        std::mem::take(&mut *self.events.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Recorded duplicate-track notices
    pub fn duplicates(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .map(|event| match event {
                PlaylistEvent::DuplicateTrack { track } => track,
            })
            .collect()
    }
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: PlaylistEvent) {
        self.events
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(event);
    }
}
