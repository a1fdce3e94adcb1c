/// Shell commands
use crate::error::{Result, ShellError};
use cue_playlist::{RepeatMode, Selector};
use std::str::FromStr;

/// One line of shell input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Next,
    Previous,
    Current,
    /// Append a track; the name is the rest of the line
    Add(String),
    Remove(isize),
    Move { src: isize, dst: isize },
    Shuffle(Option<u64>),
    Unshuffle,
    Repeat(RepeatMode),
    Get(Selector),
    /// Tracks in canonical order
    List,
    /// Tracks in play order
    Order,
    Status,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  next | prev | current         navigate the play order
  add <track>                   append a track
  remove <pos>                  remove by canonical position (negative from end)
  move <src> <dst>              relocate in canonical order
  shuffle [seed] | unshuffle    randomize or restore play order
  repeat <off|all|one>          set repeat mode
  get <index|start:stop:step>   read tracks in canonical order
  list | order | status         show playlist state
  help | quit";

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self> {
        let line = line.trim();
        let (word, rest) = line
            .split_once(char::is_whitespace)
            .map_or((line, ""), |(word, rest)| (word, rest.trim()));

        let mut args = rest.split_whitespace();

        match word {
            "next" | "n" => Ok(Command::Next),
            "prev" | "previous" | "p" => Ok(Command::Previous),
            "current" | "c" => Ok(Command::Current),
            "add" => {
                if rest.is_empty() {
                    return Err(missing("add", "a track name"));
                }
                Ok(Command::Add(rest.to_string()))
            }
            "remove" | "rm" => {
                let pos = args.next().ok_or_else(|| missing("remove", "a position"))?;
                Ok(Command::Remove(number(pos)?))
            }
            "move" | "mv" => {
                let src = args.next().ok_or_else(|| missing("move", "<src> <dst>"))?;
                let dst = args.next().ok_or_else(|| missing("move", "<src> <dst>"))?;
                Ok(Command::Move {
                    src: number(src)?,
                    dst: number(dst)?,
                })
            }
            "shuffle" => args
                .next()
                .map(number::<u64>)
                .transpose()
                .map(Command::Shuffle),
            "unshuffle" => Ok(Command::Unshuffle),
            "repeat" => {
                let code = args.next().ok_or_else(|| missing("repeat", "off|all|one"))?;
                Ok(Command::Repeat(code.parse()?))
            }
            "get" => {
                if rest.is_empty() {
                    return Err(missing("get", "an index or range"));
                }
                Ok(Command::Get(rest.parse()?))
            }
            "list" | "ls" => Ok(Command::List),
            "order" => Ok(Command::Order),
            "status" => Ok(Command::Status),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(ShellError::UnknownCommand(other.to_string())),
        }
    }
}

fn missing(command: &'static str, expected: &'static str) -> ShellError {
    ShellError::MissingArgument { command, expected }
}

fn number<T: FromStr>(text: &str) -> Result<T> {
    text.parse()
        .map_err(|_| ShellError::InvalidNumber(text.to_string()))
}
