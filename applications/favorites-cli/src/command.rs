/// Menu command parsing
use crate::error::{CliError, Result};
use soul_favorites::Song;
use std::str::FromStr;

/// Separator between fields of `add`
const FIELD_SEPARATOR: char = '|';

/// One line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <title> | <artist> [| <album>]`
    Add(Song),
    /// `remove <index>`
    Remove(i64),
    /// `list`
    List,
    /// `next`
    Next,
    /// `prev` / `previous`
    Previous,
    /// `first`
    First,
    /// `status`
    Status,
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
}

impl Command {
    /// Parse a line; blank lines and `#` comments yield `None`
    pub fn parse_line(line: &str) -> Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(None);
        }
        line.parse().map(Some)
    }
}

impl FromStr for Command {
    type Err = CliError;

    fn from_str(input: &str) -> Result<Self> {
        let input = input.trim();
        let (name, rest) = match input.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (input, ""),
        };

        let command = match name.to_ascii_lowercase().as_str() {
            "add" => Command::Add(parse_song(rest)?),
            "remove" | "rm" => Command::Remove(parse_index(rest)?),
            "list" | "ls" => Command::List,
            "next" => Command::Next,
            "prev" | "previous" => Command::Previous,
            "first" => Command::First,
            "status" => Command::Status,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CliError::UnknownCommand(name.to_string())),
        };

        let takes_arguments = matches!(command, Command::Add(_) | Command::Remove(_));
        if !takes_arguments && !rest.is_empty() {
            return Err(CliError::invalid_arguments(
                command.name(),
                format!("unexpected `{}`", rest),
            ));
        }

        Ok(command)
    }
}

impl Command {
    /// Canonical command name
    pub fn name(&self) -> &'static str {
        match self {
            Command::Add(_) => "add",
            Command::Remove(_) => "remove",
            Command::List => "list",
            Command::Next => "next",
            Command::Previous => "prev",
            Command::First => "first",
            Command::Status => "status",
            Command::Help => "help",
            Command::Quit => "quit",
        }
    }
}

fn parse_song(rest: &str) -> Result<Song> {
    let fields: Vec<&str> = rest.split(FIELD_SEPARATOR).map(str::trim).collect();

    match fields.as_slice() {
        [title, artist] if !title.is_empty() && !artist.is_empty() => {
            Ok(Song::new(*title, *artist))
        }
        [title, artist, album] if !title.is_empty() && !artist.is_empty() => {
            let song = Song::new(*title, *artist);
            Ok(if album.is_empty() {
                song
            } else {
                song.with_album(*album)
            })
        }
        _ => Err(CliError::invalid_arguments(
            "add",
            "expected `<title> | <artist> [| <album>]`",
        )),
    }
}

fn parse_index(rest: &str) -> Result<i64> {
    if rest.is_empty() {
        return Err(CliError::invalid_arguments("remove", "missing index"));
    }
    rest.parse::<i64>()
        .map_err(|e| CliError::invalid_arguments("remove", format!("`{}`: {}", rest, e)))
}

/// Menu text for `help`
pub const HELP: &str = "\
Commands:
  add <title> | <artist> [| <album>]   Add a favorite song
  remove <index>                       Remove the song at a 1-based index
  list                                 Show all favorite songs
  next                                 Play the next song
  prev                                 Play the previous song
  first                                Play from the first song
  status                               Show playlist status
  help                                 Show this menu
  quit                                 Exit";
