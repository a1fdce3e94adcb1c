/// Shell error types
use cue_playlist::PlaylistError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ShellError>;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("Unknown command: {0} (try 'help')")]
    UnknownCommand(String),

    #[error("Missing argument for '{command}': expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("Not a number: {0:?}")]
    InvalidNumber(String),

    #[error("Playlist error: {0}")]
    Playlist(#[from] PlaylistError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
