//! Core types for playlist management

use crate::error::PlaylistError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Repeat mode
///
/// The lowercase codes `off`, `all` and `one` are the only serialized form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RepeatMode {
    /// Stop after the last track
    #[default]
    Off,

    /// Loop the whole play order
    All,

    /// Loop the current track only
    One,
}

impl RepeatMode {
    /// All modes, in code order
    pub const ALL_MODES: [RepeatMode; 3] = [RepeatMode::Off, RepeatMode::All, RepeatMode::One];

    /// Canonical code for this mode
    pub fn as_str(self) -> &'static str {
        match self {
            RepeatMode::Off => "off",
            RepeatMode::All => "all",
            RepeatMode::One => "one",
        }
    }
}

impl fmt::Display for RepeatMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RepeatMode {
    type Err = PlaylistError;

    fn from_str(code: &str) -> Result<Self, Self::Err> {
        match code {
            "off" => Ok(RepeatMode::Off),
            "all" => Ok(RepeatMode::All),
            "one" => Ok(RepeatMode::One),
            other => Err(PlaylistError::InvalidRepeatMode(other.to_string())),
        }
    }
}

/// Configuration for a new playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaylistConfig {
    /// Initial repeat mode (default: Off)
    pub repeat: RepeatMode,

    /// Shuffle right after construction (default: false)
    pub shuffle: bool,

    /// Seed for the shuffle RNG; entropy-seeded when absent (default: None)
    pub seed: Option<u64>,
}

impl Default for PlaylistConfig {
    fn default() -> Self {
        Self {
            repeat: RepeatMode::Off,
            shuffle: false,
            seed: None,
        }
    }
}
