//! Error types for favorites management

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Cursor movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Towards the tail
    Next,

    /// Towards the head
    Previous,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Next => write!(f, "next"),
            Direction::Previous => write!(f, "previous"),
        }
    }
}

/// Playlist errors
///
/// Every variant is a recoverable, caller-visible condition. The playlist is
/// left untouched whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum PlaylistError {
    /// Index below 1 or past the last song
    #[error("Invalid index: {0}")]
    InvalidIndex(i64),

    /// Operation needs at least one song
    #[error("Playlist is empty")]
    EmptyCollection,

    /// A song with the same title and artist is already present
    #[error("Song already exists in the playlist: {title} by {artist}")]
    DuplicateEntry { title: String, artist: String },

    /// Navigation past either end of the playlist
    #[error("No {0} song in the playlist")]
    NoAdjacentElement(Direction),
}

impl PlaylistError {
    /// Create a duplicate entry error
    pub fn duplicate(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self::DuplicateEntry {
            title: title.into(),
            artist: artist.into(),
        }
    }
}

/// Result type for playlist operations
pub type Result<T> = std::result::Result<T, PlaylistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_condition() {
        assert_eq!(PlaylistError::InvalidIndex(0).to_string(), "Invalid index: 0");
        assert_eq!(
            PlaylistError::EmptyCollection.to_string(),
            "Playlist is empty"
        );
        assert_eq!(
            PlaylistError::NoAdjacentElement(Direction::Previous).to_string(),
            "No previous song in the playlist"
        );
        assert_eq!(
            PlaylistError::duplicate("Song A", "Artist X").to_string(),
            "Song already exists in the playlist: Song A by Artist X"
        );
    }
}
