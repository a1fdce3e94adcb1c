//! Cue - Playlist Engine
//!
//! In-memory playback-order engine for a sequence of track identifiers.
//!
//! This crate provides:
//! - Canonical track list (insertion order, duplicate-rejecting `add`)
//! - Play order as a permutation of track identities
//! - Playback cursor with repeat modes (Off, All, One)
//! - Seedable shuffle that keeps the playing track in place
//! - Identity-preserving remove and move
//!
//! # Architecture
//!
//! `cue-playlist` does no I/O. The random source ([`ShuffleRng`]) and the
//! notification channel ([`EventSink`]) are owned by each [`Playlist`] and
//! can be swapped for deterministic implementations in tests.
//!
//! A playlist is meant for single-owner use; wrap it in a mutex if several
//! threads need it.
//!
//! # Example: Basic Playback
//!
//! ```rust
//! use cue_playlist::{Playlist, RepeatMode};
//!
//! let mut playlist = Playlist::new(["Andersen", "Beethoven", "Chaplin"]);
//!
//! assert_eq!(playlist.next(), Some("Andersen"));
//! assert_eq!(playlist.next(), Some("Beethoven"));
//!
//! // Removing the playing track lands on the one that slides into its slot
//! assert_eq!(playlist.remove(1).unwrap(), "Beethoven");
//! assert_eq!(playlist.current(), Some("Chaplin"));
//!
//! playlist.set_repeat(RepeatMode::All);
//! assert_eq!(playlist.next(), Some("Andersen"));
//! ```
//!
//! # Example: Shuffle and Unshuffle
//!
//! ```rust
//! use cue_playlist::Playlist;
//!
//! let mut playlist = Playlist::new(["a", "b", "c", "d"]);
//! playlist.next();
//! playlist.next();
//!
//! playlist.shuffle(Some(42));
//! assert_eq!(playlist.current(), Some("b"));
//!
//! playlist.unshuffle();
//! assert_eq!(playlist.order(), &[0, 1, 2, 3]);
//! assert_eq!(playlist.current(), Some("b"));
//! ```
//!
//! # Example: Observing Events
//!
//! ```rust
//! use cue_playlist::{Playlist, RecordingSink};
//!
//! let sink = RecordingSink::new();
//! let mut playlist = Playlist::new(["a"]).with_sink(sink.clone());
//!
//! assert!(!playlist.add("a"));
//! assert_eq!(sink.duplicates(), vec!["a".to_string()]);
//! ```

pub mod cursor;
mod error;
pub mod events;
pub mod index;
pub mod order;
mod playlist;
pub mod shuffle;
pub mod types;

// Public exports
pub use cursor::Cursor;
pub use error::{PlaylistError, Result};
pub use events::{EventSink, PlaylistEvent, RecordingSink, TracingSink};
pub use index::{normalize_index, Selector};
pub use playlist::{Playlist, Selection};
pub use shuffle::{SeededRng, ShuffleRng};
pub use types::{PlaylistConfig, RepeatMode};
