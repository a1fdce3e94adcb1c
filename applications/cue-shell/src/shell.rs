/// Interactive shell over a playlist
use crate::{
    command::{Command, HELP},
    config::ShellConfig,
    error::Result,
};
use cue_playlist::{Cursor, Playlist, Selection};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Text to print; the loop continues
    Reply(String),
    Quit,
}

/// Command loop embedding a [`Playlist`]
pub struct Shell {
    playlist: Playlist,
    prompt: String,
}

const NO_TRACK: &str = "(no track)";

impl Shell {
    pub fn new(playlist: Playlist, prompt: impl Into<String>) -> Self {
        Self {
            playlist,
            prompt: prompt.into(),
        }
    }

    /// Build the playlist described by `config`
    pub fn from_config(config: &ShellConfig) -> Self {
        let playlist = Playlist::from_config(config.tracks.iter().cloned(), &config.playlist);
        Self::new(playlist, config.prompt.clone())
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    /// Execute a single command against the playlist
    pub fn execute(&mut self, command: Command) -> Result<Outcome> {
        debug!("Executing {:?}", command);

        let reply = match command {
            Command::Next => track_or_none(self.playlist.next()),
            Command::Previous => track_or_none(self.playlist.previous()),
            Command::Current => track_or_none(self.playlist.current()),
            Command::Add(track) => {
                if self.playlist.add(track.clone()) {
                    format!("added {track}")
                } else {
                    format!("already in playlist: {track}")
                }
            }
            Command::Remove(pos) => format!("removed {}", self.playlist.remove(pos)?),
            Command::Move { src, dst } => {
                self.playlist.move_track(src, dst)?;
                format!("moved {src} -> {dst}")
            }
            Command::Shuffle(seed) => {
                self.playlist.shuffle(seed);
                "shuffled".to_string()
            }
            Command::Unshuffle => {
                self.playlist.unshuffle();
                "unshuffled".to_string()
            }
            Command::Repeat(mode) => {
                self.playlist.set_repeat(mode);
                format!("repeat {mode}")
            }
            Command::Get(selector) => match self.playlist.select(&selector)? {
                Selection::One(track) => track.to_string(),
                Selection::Many(tracks) => tracks.join("\n"),
            },
            Command::List => self.render_list(),
            Command::Order => self.render_order(),
            Command::Status => self.render_status(),
            Command::Help => HELP.to_string(),
            Command::Quit => return Ok(Outcome::Quit),
        };

        Ok(Outcome::Reply(reply))
    }

    /// Read commands line by line until EOF or `quit`
    ///
    /// Parse and playlist errors are reported on `output` and do not stop
    /// the loop; only I/O failures do.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        info!("Shell started with {} tracks", self.playlist.len());

        self.write_prompt(&mut output)?;
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() {
                self.write_prompt(&mut output)?;
                continue;
            }

            match line.parse::<Command>().and_then(|command| self.execute(command)) {
                Ok(Outcome::Quit) => break,
                Ok(Outcome::Reply(text)) => writeln!(output, "{text}")?,
                Err(err) => writeln!(output, "error: {err}")?,
            }
            self.write_prompt(&mut output)?;
        }

        output.flush()?;
        info!("Shell finished");
        Ok(())
    }

    fn write_prompt<W: Write>(&self, output: &mut W) -> Result<()> {
        if !self.prompt.is_empty() {
            write!(output, "{}", self.prompt)?;
            output.flush()?;
        }
        Ok(())
    }

    fn render_list(&self) -> String {
        self.playlist
            .iter()
            .enumerate()
            .map(|(i, track)| format!("{i:>3}  {track}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_order(&self) -> String {
        let playing = self.playlist.cursor().position();
        self.playlist
            .order_view()
            .into_iter()
            .enumerate()
            .map(|(position, track)| {
                let marker = if playing == Some(position) { '>' } else { ' ' };
                format!("{marker}{position:>3}  {track}")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_status(&self) -> String {
        let cursor = match self.playlist.cursor() {
            Cursor::NotStarted => "not started".to_string(),
            Cursor::At(position) => format!("at {position}"),
        };
        format!(
            "tracks: {} | repeat: {} | shuffled: {} | cursor: {} | current: {}",
            self.playlist.len(),
            self.playlist.repeat_mode(),
            self.playlist.is_shuffled(),
            cursor,
            self.playlist.current().unwrap_or(NO_TRACK)
        )
    }
}

fn track_or_none(track: Option<&str>) -> String {
    track.unwrap_or(NO_TRACK).to_string()
}
