/// Interactive session: reads commands, drives the playlist, renders events
use crate::{
    command::{Command, HELP},
    config::{CliConfig, OutputFormat},
    error::Result,
};
use serde::Serialize;
use soul_favorites::{Playlist, PlaylistError, PlaylistEvent, Song};
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Whether the loop keeps reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Non-event output in JSON mode
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum Report<'a> {
    Listing {
        songs: Vec<ListingLine<'a>>,
    },
    Status {
        length: usize,
        current_position: Option<usize>,
        current: Option<&'a Song>,
    },
    Error {
        message: String,
    },
}

#[derive(Debug, Serialize)]
struct ListingLine<'a> {
    position: usize,
    #[serde(flatten)]
    song: &'a Song,
}

pub struct Session<W: Write> {
    playlist: Playlist,
    format: OutputFormat,
    prompt: Option<String>,
    out: W,
}

impl<W: Write> Session<W> {
    pub fn new(config: &CliConfig, out: W) -> Self {
        Self {
            playlist: Playlist::new(config.playlist),
            format: config.output.format,
            prompt: None,
            out,
        }
    }

    /// Print `prompt` before reading each line (interactive use)
    #[must_use]
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Read commands until `quit` or end of input
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<()> {
        info!("Favorites session started");

        let mut lines = input.lines();
        loop {
            if let Some(prompt) = &self.prompt {
                write!(self.out, "{}", prompt)?;
                self.out.flush()?;
            }

            let Some(line) = lines.next() else {
                break;
            };
            if self.handle_line(&line?)? == Flow::Quit {
                break;
            }
        }

        info!("Favorites session ended with {} songs", self.playlist.len());
        Ok(())
    }

    /// Parse and execute one line; parse errors are reported, not returned
    pub fn handle_line(&mut self, line: &str) -> Result<Flow> {
        match Command::parse_line(line) {
            Ok(Some(command)) => self.execute(command),
            Ok(None) => Ok(Flow::Continue),
            Err(e) => {
                debug!("Ignoring input {:?}: {}", line, e);
                self.write_error(&e.to_string())?;
                Ok(Flow::Continue)
            }
        }
    }

    pub fn execute(&mut self, command: Command) -> Result<Flow> {
        debug!("Executing `{}`", command.name());

        match command {
            Command::Add(song) => {
                self.playlist.add_favorite_song(song).ok();
            }
            Command::Remove(index) => {
                self.playlist.remove_favorite_song(index).ok();
            }
            Command::Next => {
                self.playlist.play_next_favorite_song().ok();
            }
            Command::Previous => {
                self.playlist.play_previous_favorite_song().ok();
            }
            Command::First => {
                self.playlist.set_current_to_first().ok();
            }
            Command::List => self.write_listing()?,
            Command::Status => self.write_status()?,
            Command::Help => writeln!(self.out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        self.flush_events()?;
        Ok(Flow::Continue)
    }

    fn flush_events(&mut self) -> Result<()> {
        for event in self.playlist.drain_events() {
            self.write_event(&event)?;
        }
        Ok(())
    }

    fn write_event(&mut self, event: &PlaylistEvent) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", event)?,
            OutputFormat::Json => {
                serde_json::to_writer(&mut self.out, event)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    fn write_listing(&mut self) -> Result<()> {
        let listing = match self.playlist.display_favorite_songs() {
            Ok(listing) => listing,
            Err(reason) => return self.write_rejection(reason),
        };

        match self.format {
            OutputFormat::Text => {
                for entry in listing {
                    writeln!(self.out, "{}", entry)?;
                }
            }
            OutputFormat::Json => {
                let songs = listing
                    .map(|entry| ListingLine {
                        position: entry.position,
                        song: entry.song,
                    })
                    .collect();
                serde_json::to_writer(&mut self.out, &Report::Listing { songs })?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    fn write_status(&mut self) -> Result<()> {
        let length = self.playlist.len();
        let current_position = self.playlist.current_position();
        let current = self.playlist.current();

        match self.format {
            OutputFormat::Text => {
                if self.playlist.is_empty() {
                    writeln!(self.out, "Playlist is empty.")?;
                    return Ok(());
                }
                let noun = if length == 1 { "song" } else { "songs" };
                match (current_position, current) {
                    (Some(position), Some(song)) => writeln!(
                        self.out,
                        "{} {} in the playlist. Current: {}. {}",
                        length, noun, position, song
                    )?,
                    _ => writeln!(
                        self.out,
                        "{} {} in the playlist. No current song.",
                        length, noun
                    )?,
                }
            }
            OutputFormat::Json => {
                let report = Report::Status {
                    length,
                    current_position,
                    current,
                };
                serde_json::to_writer(&mut self.out, &report)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Report a read-only failure the same way queued rejections are shown
    fn write_rejection(&mut self, reason: PlaylistError) -> Result<()> {
        self.write_event(&PlaylistEvent::Rejected { reason })
    }

    fn write_error(&mut self, message: &str) -> Result<()> {
        match self.format {
            OutputFormat::Text => writeln!(self.out, "Error: {}", message)?,
            OutputFormat::Json => {
                let report = Report::Error {
                    message: message.to_string(),
                };
                serde_json::to_writer(&mut self.out, &report)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }
}
