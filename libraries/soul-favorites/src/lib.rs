//! Soul Player - Favorites
//!
//! In-memory favorites playlist for Soul Player.
//!
//! This crate provides:
//! - Ordered insertion at the tail with duplicate rejection (title + artist)
//! - Removal by 1-based index
//! - A cursor ("current song") that moves next/previous in O(1)
//! - Restartable, numbered listing of every song
//! - Status events for the host UI
//!
//! # Architecture
//!
//! Songs live in an arena-backed doubly linked list: nodes sit in a slot
//! vector and refer to their neighbours by index, so both directions are
//! walkable without reference cycles or `unsafe`. The cursor always denotes
//! a song that is still in the list; removing the current song re-homes it
//! (see [`CursorRemovalPolicy`]).
//!
//! `soul-favorites` does no I/O. Status is reported through return values
//! and queued [`PlaylistEvent`]s; diagnostics go through `tracing`.
//!
//! # Example
//!
//! ```rust
//! use soul_favorites::{Playlist, PlaylistError, Song};
//!
//! let mut favorites = Playlist::default();
//! favorites.add_favorite_song(Song::new("Song A", "Artist X")).unwrap();
//! favorites.add_favorite_song(Song::new("Song B", "Artist Y")).unwrap();
//!
//! // Same title and artist is rejected
//! let err = favorites.add_favorite_song(Song::new("Song A", "Artist X"));
//! assert!(matches!(err, Err(PlaylistError::DuplicateEntry { .. })));
//!
//! assert_eq!(favorites.play_next_favorite_song().unwrap().title, "Song B");
//! assert_eq!(favorites.play_previous_favorite_song().unwrap().title, "Song A");
//!
//! for entry in favorites.display_favorite_songs().unwrap() {
//!     println!("{}", entry); // "1. Song A by Artist X"
//! }
//!
//! let removed = favorites.remove_favorite_song(1).unwrap();
//! assert_eq!(removed.title, "Song A");
//!
//! for event in favorites.drain_events() {
//!     println!("{}", event);
//! }
//! ```

mod error;
mod events;
mod list;
mod playlist;
pub mod types;

// Public exports
pub use error::{Direction, PlaylistError, Result};
pub use events::PlaylistEvent;
pub use list::Iter;
pub use playlist::{ListedSong, Listing, Playlist};
pub use types::{CursorRemovalPolicy, PlaylistConfig, PreviousLookup, Song, SongIdentity};
