//! Playlist Events
//!
//! Status notifications for the host (CLI, UI) after each playlist call.
//! Events are queued by the playlist and taken with `drain_events`.

use crate::error::{Direction, PlaylistError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Events emitted by the playlist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlaylistEvent {
    /// Song appended at the tail
    SongAdded {
        /// Title of the new song
        title: String,
        /// Playlist length after the insertion
        length: usize,
    },

    /// Song removed by index
    SongRemoved {
        /// Title of the removed song
        title: String,
        /// 1-based position it occupied
        position: usize,
        /// Playlist length after the removal
        length: usize,
    },

    /// Cursor designates a new current song
    NowPlaying {
        /// 1-based position of the current song
        position: usize,
        /// Display form of the current song
        song: String,
    },

    /// Cursor was re-homed because its song was removed
    CursorMoved {
        /// New 1-based position, `None` when the cursor was cleared
        position: Option<usize>,
    },

    /// Request was refused; nothing changed
    Rejected {
        /// Why the request was refused
        reason: PlaylistError,
    },
}

impl fmt::Display for PlaylistEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaylistEvent::SongAdded { title, .. } => {
                write!(f, "{} added to the playlist.", title)
            }
            PlaylistEvent::SongRemoved { title, .. } => {
                write!(f, "{} removed from the playlist.", title)
            }
            PlaylistEvent::NowPlaying { song, .. } => write!(f, "Now playing: {}", song),
            PlaylistEvent::CursorMoved {
                position: Some(position),
            } => write!(f, "Current song moved to position {}.", position),
            PlaylistEvent::CursorMoved { position: None } => {
                write!(f, "No current song.")
            }
            PlaylistEvent::Rejected { reason } => match reason {
                PlaylistError::InvalidIndex(_) => write!(f, "Invalid index."),
                PlaylistError::EmptyCollection => write!(f, "Playlist is empty."),
                PlaylistError::DuplicateEntry { .. } => {
                    write!(f, "Song already exists in the playlist.")
                }
                PlaylistError::NoAdjacentElement(Direction::Next) => {
                    write!(f, "No next song in the playlist.")
                }
                PlaylistError::NoAdjacentElement(Direction::Previous) => {
                    write!(f, "There are no more previous songs.")
                }
            },
        }
    }
}
