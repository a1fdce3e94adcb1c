//! Playback cursor and repeat transitions
//!
//! The cursor is a position into the play order. Transitions are pure: they
//! return the next cursor, or `None` when there is nowhere to go, in which
//! case the caller keeps its current cursor.

use crate::types::RepeatMode;

/// Position into the play order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    /// Playback has not started
    #[default]
    NotStarted,

    /// Playing the play-order entry at this position
    At(usize),
}

impl Cursor {
    /// Play-order position, if started
    pub fn position(self) -> Option<usize> {
        match self {
            Cursor::NotStarted => None,
            Cursor::At(pos) => Some(pos),
        }
    }

    pub fn is_started(self) -> bool {
        matches!(self, Cursor::At(_))
    }

    /// Cursor after a "next" request over a play order of `len` entries
    pub fn advance(self, len: usize, repeat: RepeatMode) -> Option<Cursor> {
        if len == 0 {
            return None;
        }

        if repeat == RepeatMode::One {
            return Some(self.pinned());
        }

        match self {
            Cursor::NotStarted => Some(Cursor::At(0)),
            Cursor::At(pos) if pos + 1 < len => Some(Cursor::At(pos + 1)),
            Cursor::At(_) if repeat == RepeatMode::All => Some(Cursor::At(0)),
            Cursor::At(_) => None,
        }
    }

    /// Cursor after a "previous" request over a play order of `len` entries
    pub fn retreat(self, len: usize, repeat: RepeatMode) -> Option<Cursor> {
        if len == 0 {
            return None;
        }

        if repeat == RepeatMode::One {
            return Some(self.pinned());
        }

        match self {
            Cursor::At(pos) if pos > 0 => Some(Cursor::At(pos - 1)),
            _ if repeat == RepeatMode::All => Some(Cursor::At(len - 1)),
            _ => None,
        }
    }

    // Repeat-one keeps a started cursor and starts an idle one at the top.
    fn pinned(self) -> Cursor {
        match self {
            Cursor::NotStarted => Cursor::At(0),
            started => started,
        }
    }
}
