//! Playlist - canonical track list, play order and cursor
//!
//! Coordinates the track list, the play-order permutation, the cursor and
//! the repeat mode. Every mutation of the track list is expressed as an
//! identity mapping and pushed through [`order::remap`], so the track under
//! the cursor is tracked by identity rather than by position.

use crate::{
    cursor::Cursor,
    error::{PlaylistError, Result},
    events::{EventSink, PlaylistEvent, TracingSink},
    index::{normalize_index, resolve_range, Selector},
    order,
    shuffle::{shuffled_order, SeededRng, ShuffleRng},
    types::{PlaylistConfig, RepeatMode},
};
use std::fmt;
use tracing::{debug, trace};

/// Result of [`Playlist::select`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<'a> {
    /// Integer selector
    One(&'a str),

    /// Range selector, in selector order
    Many(Vec<&'a str>),
}

/// Ordered collection of tracks with an independent play order
///
/// Structure:
/// ```text
/// tracks:  [A, B, C, D]      canonical (insertion) order, identity = index
/// order:   [2, 0, 3, 1]      play order, a permutation of identities
/// cursor:  At(1)             -> order[1] = 0 -> "A" is playing
/// ```
///
/// Tracks are not deduplicated on construction; only [`Playlist::add`]
/// rejects values that are already present.
pub struct Playlist {
    /// Tracks in canonical order
    tracks: Vec<String>,

    /// Play order (permutation of `0..tracks.len()`)
    order: Vec<usize>,

    /// Position into `order`
    cursor: Cursor,

    repeat: RepeatMode,

    /// Whether `order` currently reflects a shuffle
    shuffled: bool,

    rng: Box<dyn ShuffleRng>,

    sink: Box<dyn EventSink>,
}

impl Playlist {
    /// Create a playlist in canonical play order with an entropy-seeded RNG
    pub fn new<I, S>(tracks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tracks: Vec<String> = tracks.into_iter().map(Into::into).collect();
        let order = order::identity(tracks.len());
        Self {
            tracks,
            order,
            cursor: Cursor::NotStarted,
            repeat: RepeatMode::Off,
            shuffled: false,
            rng: Box::new(SeededRng::new()),
            sink: Box::new(TracingSink),
        }
    }

    /// Create an empty playlist
    pub fn empty() -> Self {
        Self::new(Vec::<String>::new())
    }

    /// Create a playlist and apply `config`
    ///
    /// A configured seed makes every later shuffle reproducible. With
    /// `config.shuffle` set the initial order is shuffled before returning.
    pub fn from_config<I, S>(tracks: I, config: &PlaylistConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rng = config.seed.map_or_else(SeededRng::new, SeededRng::seeded);
        let mut playlist = Self::new(tracks).with_rng(rng);
        playlist.repeat = config.repeat;
        if config.shuffle {
            playlist.shuffle(None);
        }
        debug!(
            "Playlist created with {} tracks (repeat: {}, shuffled: {})",
            playlist.len(),
            playlist.repeat,
            playlist.shuffled
        );
        playlist
    }

    /// Replace the random source
    #[must_use]
    pub fn with_rng(mut self, rng: impl ShuffleRng + 'static) -> Self {
        self.rng = Box::new(rng);
        self
    }

    /// Replace the event sink
    #[must_use]
    pub fn with_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    // ===== Read-only access =====

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn contains(&self, track: &str) -> bool {
        self.tracks.iter().any(|t| t == track)
    }

    /// Canonical position of the first track equal to `track`
    pub fn find(&self, track: &str) -> Option<usize> {
        self.tracks.iter().position(|t| t == track)
    }

    /// Track at a canonical position (negative counts from the end)
    pub fn get(&self, pos: isize) -> Result<&str> {
        let index = normalize_index(pos, self.len())?;
        Ok(&self.tracks[index])
    }

    /// Track or tracks addressed by `selector`, in canonical order
    ///
    /// Ranges clamp their bounds and never fail on position; integer
    /// selectors fail like [`Playlist::get`].
    pub fn select(&self, selector: &Selector) -> Result<Selection<'_>> {
        match *selector {
            Selector::Index(pos) => self.get(pos).map(Selection::One),
            Selector::Range { step: 0, .. } => Err(PlaylistError::InvalidSelector(
                "range step cannot be zero".to_string(),
            )),
            Selector::Range { start, stop, step } => Ok(Selection::Many(
                resolve_range(start, stop, step, self.len())
                    .into_iter()
                    .map(|i| self.tracks[i].as_str())
                    .collect(),
            )),
        }
    }

    /// Tracks in canonical order
    pub fn tracks(&self) -> &[String] {
        &self.tracks
    }

    /// Iterate tracks in canonical order, regardless of shuffle
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.tracks.iter()
    }

    /// Play order as canonical identities
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    /// Tracks in play order
    pub fn order_view(&self) -> Vec<&str> {
        self.order.iter().map(|&id| self.tracks[id].as_str()).collect()
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn repeat_mode(&self) -> RepeatMode {
        self.repeat
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    // ===== Navigation =====

    /// Track under the cursor, `None` before playback starts
    pub fn current(&self) -> Option<&str> {
        self.current_identity().map(|id| self.tracks[id].as_str())
    }

    /// Advance according to the repeat mode
    ///
    /// Returns `None` (and leaves the cursor alone) when the end of the play
    /// order is reached with repeat off, or when the playlist is empty.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&str> {
        let cursor = self.cursor.advance(self.order.len(), self.repeat)?;
        trace!("next: {:?} -> {:?}", self.cursor, cursor);
        self.cursor = cursor;
        self.current()
    }

    /// Step back according to the repeat mode
    ///
    /// Mirror of [`Playlist::next`]: repeat all wraps to the last entry,
    /// repeat one pins the cursor.
    pub fn previous(&mut self) -> Option<&str> {
        let cursor = self.cursor.retreat(self.order.len(), self.repeat)?;
        trace!("previous: {:?} -> {:?}", self.cursor, cursor);
        self.cursor = cursor;
        self.current()
    }

    /// Jump to a play-order position (negative counts from the end)
    pub fn play_at(&mut self, pos: isize) -> Result<&str> {
        let position = normalize_index(pos, self.order.len())?;
        self.cursor = Cursor::At(position);
        Ok(&self.tracks[self.order[position]])
    }

    /// Return the cursor to the not-started state
    pub fn stop(&mut self) {
        self.cursor = Cursor::NotStarted;
    }

    /// Set the repeat mode
    pub fn set_repeat(&mut self, mode: RepeatMode) {
        debug!("Repeat mode set to {}", mode);
        self.repeat = mode;
    }

    /// Set the repeat mode from its code (`off`, `all`, `one`)
    ///
    /// # Errors
    /// `InvalidRepeatMode` for any other string; the mode is unchanged.
    pub fn set_repeat_code(&mut self, code: &str) -> Result<()> {
        let mode = code.parse()?;
        self.set_repeat(mode);
        Ok(())
    }

    // ===== Mutations =====

    /// Append a track
    ///
    /// Duplicates are rejected with a [`PlaylistEvent::DuplicateTrack`]
    /// notice and `false`. While shuffled, the new identity is inserted at a
    /// random play-order position and the cursor is shifted so it keeps
    /// pointing at the same track.
    pub fn add(&mut self, track: impl Into<String>) -> bool {
        let track = track.into();
        if self.find(&track).is_some() {
            self.sink.emit(PlaylistEvent::DuplicateTrack { track });
            return false;
        }

        self.tracks.push(track.clone());
        let new_id = self.tracks.len() - 1;

        let order_position = if self.shuffled && !self.order.is_empty() {
            let position = self.rng.index_below(self.order.len() + 1);
            self.order.insert(position, new_id);
            if let Cursor::At(current) = self.cursor {
                if position <= current {
                    self.cursor = Cursor::At(current + 1);
                }
            }
            position
        } else {
            self.order.push(new_id);
            self.order.len() - 1
        };

        debug!("Added track {:?} at play position {}", track, order_position);
        true
    }

    /// Remove and return the track at a canonical position
    ///
    /// If the removed track was playing, the cursor keeps its position (the
    /// following entry slides under it) or moves to the new last entry.
    /// Otherwise it follows the playing track to its new position.
    ///
    /// # Errors
    /// `Empty` or `IndexOutOfRange`; nothing is changed.
    pub fn remove(&mut self, pos: isize) -> Result<String> {
        let index = normalize_index(pos, self.len())?;
        let current = self.current_identity();

        let len_before = self.tracks.len();
        let removed = self.tracks.remove(index);
        let mapping = order::removal_mapping(len_before, index);
        self.order = order::remap(&self.order, &mapping);

        self.cursor = match (current, self.cursor) {
            _ if self.order.is_empty() => Cursor::NotStarted,
            (Some(id), Cursor::At(position)) if id == index => {
                Cursor::At(position.min(self.order.len() - 1))
            }
            (Some(id), _) => mapping[id]
                .and_then(|new_id| self.order.iter().position(|&x| x == new_id))
                .map_or(Cursor::NotStarted, Cursor::At),
            (None, _) => Cursor::NotStarted,
        };

        debug!("Removed track {:?} (canonical position {})", removed, index);
        Ok(removed)
    }

    /// Relocate a track in canonical order without changing playback
    ///
    /// Splice semantics: the track is taken out at `src` and inserted at
    /// `dst`. The play order is remapped so the sequence of tracks it
    /// produces is unchanged, and the cursor keeps pointing at the same
    /// track.
    ///
    /// # Errors
    /// `Empty` or `IndexOutOfRange` for either position; nothing is changed.
    pub fn move_track(&mut self, src: isize, dst: isize) -> Result<()> {
        let len = self.len();
        let src = normalize_index(src, len)?;
        let dst = normalize_index(dst, len)?;
        if src == dst {
            return Ok(());
        }

        let track = self.tracks.remove(src);
        self.tracks.insert(dst, track);

        let mapping = order::move_mapping(len, src, dst);
        self.order = order::remap(&self.order, &mapping);

        debug!("Moved track from {} to {}", src, dst);
        Ok(())
    }

    /// Shuffle the play order, keeping the playing track under the cursor
    ///
    /// A seed reseeds the owned RNG first, so identical seeds on identical
    /// playlists give identical orders.
    pub fn shuffle(&mut self, seed: Option<u64>) {
        if let Some(seed) = seed {
            self.rng.reseed(seed);
        }

        let n = self.order.len();
        if n > 1 {
            let pinned = self.current_identity().zip(self.cursor.position());
            self.order = shuffled_order(n, pinned, self.rng.as_mut());
        }

        self.shuffled = true;
        debug!("Shuffled {} tracks (seed: {:?})", n, seed);
    }

    /// Restore canonical play order, keeping the playing track
    pub fn unshuffle(&mut self) {
        let current = self.current_identity();
        self.order = order::identity(self.tracks.len());
        self.shuffled = false;

        // In canonical order an identity is its own position.
        self.cursor = current.map_or(Cursor::NotStarted, Cursor::At);

        debug!("Unshuffled {} tracks", self.tracks.len());
    }

    /// Reseed the owned RNG without shuffling
    pub fn reseed(&mut self, seed: u64) {
        self.rng.reseed(seed);
    }

    /// Canonical identity under the cursor
    fn current_identity(&self) -> Option<usize> {
        self.cursor
            .position()
            .and_then(|position| self.order.get(position).copied())
    }
}

impl Default for Playlist {
    fn default() -> Self {
        Self::empty()
    }
}

impl fmt::Debug for Playlist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Playlist")
            .field("tracks", &self.tracks)
            .field("order", &self.order)
            .field("cursor", &self.cursor)
            .field("repeat", &self.repeat)
            .field("shuffled", &self.shuffled)
            .finish_non_exhaustive()
    }
}

impl FromIterator<String> for Playlist {
    fn from_iter<T: IntoIterator<Item = String>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a> IntoIterator for &'a Playlist {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.tracks.iter()
    }
}
