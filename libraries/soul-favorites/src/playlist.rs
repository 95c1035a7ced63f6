//! Favorites playlist - doubly linked songs with a cursor
//!
//! Songs are kept in insertion order. The cursor ("current song") moves one
//! step at a time in either direction and is re-homed when its song is removed.

use crate::{
    error::{Direction, PlaylistError, Result},
    events::PlaylistEvent,
    list::{Iter, NodeId, SongList, Unlinked},
    types::{CursorRemovalPolicy, PlaylistConfig, PreviousLookup, Song, SongIdentity},
};
use std::fmt;
use std::iter::{Enumerate, FusedIterator};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Cursor {
    node: NodeId,
    /// 1-based position of `node`
    position: usize,
}

/// Ordered favorites with duplicate rejection and a navigation cursor
///
/// Structure:
/// ```text
///  head                              tail
///   1. Song A  ⇄  2. Song B  ⇄  3. Song C
///                    ▲
///                 cursor
/// ```
///
/// Every call returns a `Result` and queues a [`PlaylistEvent`] describing
/// the outcome (except the read-only listing). Failed calls change nothing.
#[derive(Debug, Clone)]
pub struct Playlist<S = Song> {
    songs: SongList<S>,
    current: Option<Cursor>,
    config: PlaylistConfig,
    pending_events: Vec<PlaylistEvent>,
}

impl<S: SongIdentity + fmt::Display> Playlist<S> {
    /// Create an empty playlist
    pub fn new(config: PlaylistConfig) -> Self {
        Self {
            songs: SongList::new(),
            current: None,
            config,
            pending_events: Vec::new(),
        }
    }

    // ===== Structure =====

    /// Append a song at the tail
    ///
    /// Rejected with `DuplicateEntry` when a song with the same title and
    /// artist is already present. The first song added to an empty playlist
    /// becomes the current song.
    pub fn add_favorite_song(&mut self, song: S) -> Result<()> {
        if self.contains(&song) {
            debug!("Rejected duplicate favorite: {} by {}", song.title(), song.artist());
            return Err(self.reject(PlaylistError::duplicate(song.title(), song.artist())));
        }

        let was_empty = self.songs.is_empty();
        let title = song.title().to_string();
        let node = self.songs.push_back(song);

        if was_empty {
            self.current = Some(Cursor { node, position: 1 });
        }

        debug!("Added favorite {} at position {}", title, self.songs.len());
        self.pending_events.push(PlaylistEvent::SongAdded {
            title,
            length: self.songs.len(),
        });
        Ok(())
    }

    /// Remove the song at a 1-based index and return it
    ///
    /// Later songs shift down by one. If the removed song was current, the
    /// cursor is re-homed according to [`CursorRemovalPolicy`].
    pub fn remove_favorite_song(&mut self, index: i64) -> Result<S> {
        if index < 1 {
            return Err(self.reject(PlaylistError::InvalidIndex(index)));
        }
        if self.songs.is_empty() {
            return Err(self.reject(PlaylistError::EmptyCollection));
        }

        let Some((position, node)) = usize::try_from(index).ok().and_then(|position| {
            self.songs
                .node_at(position)
                .map(|node| (position, node))
        }) else {
            debug!("Index {} is past the last of {} favorites", index, self.songs.len());
            return Err(self.reject(PlaylistError::InvalidIndex(index)));
        };

        let Some((song, neighbours)) = self.songs.unlink(node) else {
            return Err(self.reject(PlaylistError::InvalidIndex(index)));
        };

        debug!("Removed favorite {} from position {}", song.title(), position);
        self.pending_events.push(PlaylistEvent::SongRemoved {
            title: song.title().to_string(),
            position,
            length: self.songs.len(),
        });

        if let Some(cursor) = self.current {
            if cursor.node == node {
                self.rehome_cursor(position, neighbours);
            } else if cursor.position > position {
                self.current = Some(Cursor {
                    position: cursor.position - 1,
                    ..cursor
                });
            }
        }

        Ok(song)
    }

    fn rehome_cursor(&mut self, removed_position: usize, neighbours: Unlinked) {
        self.current = match self.config.cursor_on_removal {
            CursorRemovalPolicy::Successor => match (neighbours.next, neighbours.prev) {
                (Some(node), _) => Some(Cursor {
                    node,
                    position: removed_position,
                }),
                (None, Some(node)) => Some(Cursor {
                    node,
                    position: removed_position - 1,
                }),
                (None, None) => None,
            },
            CursorRemovalPolicy::Unset => None,
        };

        let position = self.current_position();
        debug!("Current favorite removed, cursor now at {:?}", position);
        self.pending_events.push(PlaylistEvent::CursorMoved { position });
    }

    /// List every song head to tail with its 1-based position
    ///
    /// Read-only; call again to restart from the head.
    pub fn display_favorite_songs(&self) -> Result<Listing<'_, S>> {
        if self.songs.is_empty() {
            return Err(PlaylistError::EmptyCollection);
        }
        Ok(Listing {
            inner: self.songs.iter().enumerate(),
        })
    }

    // ===== Navigation =====

    /// Move the cursor one song towards the tail
    pub fn play_next_favorite_song(&mut self) -> Result<&S> {
        let next = self.current.and_then(|cursor| {
            self.songs.next_of(cursor.node).map(|node| Cursor {
                node,
                position: cursor.position + 1,
            })
        });

        match next {
            Some(cursor) => self.play(cursor),
            None => Err(self.reject(PlaylistError::NoAdjacentElement(Direction::Next))),
        }
    }

    /// Move the cursor one song towards the head
    pub fn play_previous_favorite_song(&mut self) -> Result<&S> {
        let previous = self.current.and_then(|cursor| {
            let node = match self.config.previous_lookup {
                PreviousLookup::BackLink => self.songs.prev_of(cursor.node),
                PreviousLookup::Rescan => self.songs.prev_by_scan(cursor.node),
            };
            node.map(|node| Cursor {
                node,
                position: cursor.position - 1,
            })
        });

        match previous {
            Some(cursor) => self.play(cursor),
            None => Err(self.reject(PlaylistError::NoAdjacentElement(Direction::Previous))),
        }
    }

    /// Reset the cursor to the first song
    pub fn set_current_to_first(&mut self) -> Result<&S> {
        self.current = self.songs.head().map(|node| Cursor { node, position: 1 });

        match self.current {
            Some(cursor) => self.play(cursor),
            None => Err(self.reject(PlaylistError::EmptyCollection)),
        }
    }

    /// Make `cursor` current and queue `NowPlaying`
    ///
    /// Callers build the cursor from a live link, so a missing node means a
    /// stale id; it is rejected like any other failed move.
    fn play(&mut self, cursor: Cursor) -> Result<&S> {
        let Some(song) = self.songs.get(cursor.node) else {
            debug!("Cursor target at position {} is not linked", cursor.position);
            let reason = PlaylistError::InvalidIndex(cursor.position as i64);
            self.pending_events.push(PlaylistEvent::Rejected {
                reason: reason.clone(),
            });
            return Err(reason);
        };

        self.current = Some(cursor);
        debug!("Now playing {} at position {}", song.title(), cursor.position);
        self.pending_events.push(PlaylistEvent::NowPlaying {
            position: cursor.position,
            song: song.to_string(),
        });
        Ok(song)
    }

    // ===== Queries =====

    /// Check whether the playlist has no songs
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Number of songs
    pub fn len(&self) -> usize {
        self.songs.len()
    }

    /// Check whether a song with the same title and artist is present
    pub fn contains<O: SongIdentity + ?Sized>(&self, song: &O) -> bool {
        self.songs.iter().any(|existing| existing.same_song(song))
    }

    /// Song under the cursor
    pub fn current(&self) -> Option<&S> {
        self.current.and_then(|cursor| self.songs.get(cursor.node))
    }

    /// 1-based position of the cursor
    pub fn current_position(&self) -> Option<usize> {
        self.current.map(|cursor| cursor.position)
    }

    /// Songs head to tail (reverse walks the back links)
    pub fn songs(&self) -> Iter<'_, S> {
        self.songs.iter()
    }

    /// Cursor and lookup settings this playlist was built with
    pub fn config(&self) -> &PlaylistConfig {
        &self.config
    }

    // ===== Events =====

    /// Take all queued events, oldest first
    pub fn drain_events(&mut self) -> Vec<PlaylistEvent> {
        std::mem::take(&mut self.pending_events)
    }

    /// Check if there are pending events
    pub fn has_pending_events(&self) -> bool {
        !self.pending_events.is_empty()
    }

    fn reject(&mut self, reason: PlaylistError) -> PlaylistError {
        self.pending_events.push(PlaylistEvent::Rejected {
            reason: reason.clone(),
        });
        reason
    }
}

impl<S: SongIdentity + fmt::Display> Default for Playlist<S> {
    fn default() -> Self {
        Self::new(PlaylistConfig::default())
    }
}

/// One line of a playlist listing
#[derive(Debug)]
pub struct ListedSong<'a, S> {
    /// 1-based position
    pub position: usize,
    pub song: &'a S,
}

impl<S: fmt::Display> fmt::Display for ListedSong<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.position, self.song)
    }
}

/// Lazy, numbered listing returned by [`Playlist::display_favorite_songs`]
pub struct Listing<'a, S> {
    inner: Enumerate<Iter<'a, S>>,
}

impl<'a, S> Iterator for Listing<'a, S> {
    type Item = ListedSong<'a, S>;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|(index, song)| ListedSong {
                position: index + 1,
                song,
            })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<S> ExactSizeIterator for Listing<'_, S> {}

impl<S> FusedIterator for Listing<'_, S> {}

impl<S> Clone for Listing<'_, S> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}
