//! Error types for playlist management

use thiserror::Error;

/// Playlist errors
///
/// Every operation that returns one of these leaves the playlist untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlaylistError {
    /// Position-based access on a playlist with no tracks
    #[error("Playlist is empty!")]
    Empty,

    /// Position outside `[-len, len)`
    #[error("Position is out of range: {index} (playlist has {len} tracks)")]
    IndexOutOfRange { index: isize, len: usize },

    /// Selector that is neither an integer index nor a range
    #[error("Indices must be integers or ranges: {0:?}")]
    InvalidSelector(String),

    /// Unknown repeat mode token
    #[error("Unknown repeat mode: {0:?}! Allowed: off|all|one.")]
    InvalidRepeatMode(String),
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;
