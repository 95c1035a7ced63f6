//! Core types for favorites management

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Identity of a song inside a playlist
///
/// Two songs are the same favorite when title and artist match exactly
/// (case-sensitive). Implement `title` and `artist`; `same_song` holds the rule.
pub trait SongIdentity {
    /// Song title
    fn title(&self) -> &str;

    /// Artist name
    fn artist(&self) -> &str;

    /// Check whether `other` denotes the same favorite
    fn same_song<O: SongIdentity + ?Sized>(&self, other: &O) -> bool {
        self.title() == other.title() && self.artist() == other.artist()
    }
}

/// A song that can be added to favorites
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    /// Song title
    pub title: String,

    /// Artist name
    pub artist: String,

    /// Album name (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub album: Option<String>,

    /// Song duration (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<Duration>,
}

impl Song {
    /// Create a new song with minimal metadata
    pub fn new(title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            album: None,
            duration: None,
        }
    }

    /// Set the album name
    #[must_use]
    pub fn with_album(mut self, album: impl Into<String>) -> Self {
        self.album = Some(album.into());
        self
    }

    /// Set the duration
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }
}

impl SongIdentity for Song {
    fn title(&self) -> &str {
        &self.title
    }

    fn artist(&self) -> &str {
        &self.artist
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} by {}", self.title, self.artist)?;
        if let Some(album) = &self.album {
            write!(f, " [{}]", album)?;
        }
        Ok(())
    }
}

/// Where the cursor goes when the song under it is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CursorRemovalPolicy {
    /// Move to the successor, or the predecessor when the tail was removed
    #[default]
    Successor,

    /// Clear the cursor
    Unset,
}

/// How "previous" finds the song before the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreviousLookup {
    /// Follow the stored back link (O(1))
    #[default]
    BackLink,

    /// Ignore back links and rescan from the head (O(n)), as a singly
    /// linked playlist would
    Rescan,
}

/// Configuration for a favorites playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PlaylistConfig {
    /// Cursor behaviour when the current song is removed (default: Successor)
    #[serde(default)]
    pub cursor_on_removal: CursorRemovalPolicy,

    /// Previous-song lookup strategy (default: BackLink)
    #[serde(default)]
    pub previous_lookup: PreviousLookup,
}
