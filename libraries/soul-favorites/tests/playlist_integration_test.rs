//! Favorites playlist integration tests
//!
//! Real-world scenarios: building a favorites list, pruning it, and walking
//! it with next/previous.

use soul_favorites::{
    CursorRemovalPolicy, Direction, Playlist, PlaylistConfig, PlaylistError, PlaylistEvent,
    PreviousLookup, Song,
};
use std::time::Duration;

// ===== Test Helpers =====

fn create_song(title: &str, artist: &str) -> Song {
    Song::new(title, artist).with_duration(Duration::from_secs(180))
}

fn playlist_with(songs: &[(&str, &str)]) -> Playlist {
    let mut playlist = Playlist::default();
    for (title, artist) in songs {
        playlist
            .add_favorite_song(create_song(title, artist))
            .expect("fixture songs are unique");
    }
    playlist.drain_events();
    playlist
}

fn listed_titles(playlist: &Playlist) -> Vec<String> {
    playlist
        .display_favorite_songs()
        .map(|listing| listing.map(|entry| entry.song.title.clone()).collect())
        .unwrap_or_default()
}

// ===== Scenario Tests =====

#[test]
fn test_add_duplicate_then_remove_first() {
    let mut playlist = Playlist::default();
    assert!(playlist.is_empty());

    playlist
        .add_favorite_song(create_song("Song A", "Artist X"))
        .unwrap();
    assert_eq!(playlist.len(), 1);

    let duplicate = playlist.add_favorite_song(create_song("Song A", "Artist X"));
    assert_eq!(
        duplicate,
        Err(PlaylistError::duplicate("Song A", "Artist X"))
    );
    assert_eq!(playlist.len(), 1);

    playlist
        .add_favorite_song(create_song("Song B", "Artist Y"))
        .unwrap();
    assert_eq!(playlist.len(), 2);

    let removed = playlist.remove_favorite_song(1).unwrap();
    assert_eq!(removed.title, "Song A");
    assert_eq!(playlist.len(), 1);

    let lines: Vec<String> = playlist
        .display_favorite_songs()
        .unwrap()
        .map(|entry| entry.to_string())
        .collect();
    assert_eq!(lines, vec!["1. Song B by Artist Y"]);

    let events: Vec<String> = playlist
        .drain_events()
        .iter()
        .map(|event| event.to_string())
        .collect();
    assert_eq!(
        events,
        vec![
            "Song A added to the playlist.",
            "Song already exists in the playlist.",
            "Song B added to the playlist.",
            "Song A removed from the playlist.",
            "Current song moved to position 1.",
        ]
    );
}

#[test]
fn test_remove_from_empty_playlist() {
    let mut playlist = Playlist::<Song>::default();

    assert_eq!(
        playlist.remove_favorite_song(1),
        Err(PlaylistError::EmptyCollection)
    );
    assert!(playlist.is_empty());
    assert_eq!(
        playlist.drain_events(),
        vec![PlaylistEvent::Rejected {
            reason: PlaylistError::EmptyCollection
        }]
    );
}

#[test]
fn test_index_below_one_is_checked_before_emptiness() {
    let mut playlist = Playlist::<Song>::default();
    assert_eq!(
        playlist.remove_favorite_song(0),
        Err(PlaylistError::InvalidIndex(0))
    );
}

#[test]
fn test_previous_from_second_of_three() {
    let mut playlist = playlist_with(&[("1", "A"), ("2", "B"), ("3", "C")]);

    playlist.set_current_to_first().unwrap();
    playlist.play_next_favorite_song().unwrap();
    assert_eq!(playlist.current_position(), Some(2));

    let previous = playlist.play_previous_favorite_song().unwrap();
    assert_eq!(previous.title, "1");
    assert_eq!(playlist.current_position(), Some(1));
}

#[test]
fn test_previous_at_head_stays_at_head() {
    let mut playlist = playlist_with(&[("1", "A"), ("2", "B")]);
    playlist.play_next_favorite_song().unwrap();

    let first = playlist.set_current_to_first().unwrap();
    assert_eq!(first.title, "1");

    assert_eq!(
        playlist.play_previous_favorite_song(),
        Err(PlaylistError::NoAdjacentElement(Direction::Previous))
    );
    assert_eq!(playlist.current().unwrap().title, "1");
}

#[test]
fn test_next_at_tail_stays_at_tail() {
    let mut playlist = playlist_with(&[("1", "A"), ("2", "B")]);
    playlist.play_next_favorite_song().unwrap();

    assert_eq!(
        playlist.play_next_favorite_song(),
        Err(PlaylistError::NoAdjacentElement(Direction::Next))
    );
    assert_eq!(playlist.current().unwrap().title, "2");
}

#[test]
fn test_navigation_on_empty_playlist() {
    let mut playlist = Playlist::<Song>::default();

    assert_eq!(
        playlist.play_next_favorite_song(),
        Err(PlaylistError::NoAdjacentElement(Direction::Next))
    );
    assert_eq!(
        playlist.play_previous_favorite_song(),
        Err(PlaylistError::NoAdjacentElement(Direction::Previous))
    );
    assert_eq!(
        playlist.set_current_to_first(),
        Err(PlaylistError::EmptyCollection)
    );
}

#[test]
fn test_walk_forward_and_back() {
    let songs = [("1", "A"), ("2", "B"), ("3", "C"), ("4", "D")];
    let mut playlist = playlist_with(&songs);

    let mut forward = vec![playlist.set_current_to_first().unwrap().title.clone()];
    while let Ok(song) = playlist.play_next_favorite_song() {
        forward.push(song.title.clone());
    }

    let mut backward = vec![playlist.current().unwrap().title.clone()];
    while let Ok(song) = playlist.play_previous_favorite_song() {
        backward.push(song.title.clone());
    }
    backward.reverse();

    assert_eq!(forward, vec!["1", "2", "3", "4"]);
    assert_eq!(forward, backward);
}

#[test]
fn test_remove_middle_shifts_later_songs() {
    let mut playlist = playlist_with(&[("1", "A"), ("2", "B"), ("3", "C"), ("4", "D")]);

    let removed = playlist.remove_favorite_song(2).unwrap();
    assert_eq!(removed.title, "2");
    assert_eq!(listed_titles(&playlist), vec!["1", "3", "4"]);

    // Back links were repaired on both neighbours
    let reversed: Vec<&str> = playlist.songs().rev().map(|s| s.title.as_str()).collect();
    assert_eq!(reversed, vec!["4", "3", "1"]);
}

#[test]
fn test_remove_past_end_is_invalid() {
    let mut playlist = playlist_with(&[("1", "A"), ("2", "B")]);

    assert_eq!(
        playlist.remove_favorite_song(3),
        Err(PlaylistError::InvalidIndex(3))
    );
    assert_eq!(listed_titles(&playlist), vec!["1", "2"]);
}

#[test]
fn test_same_title_different_artist_is_allowed() {
    let mut playlist = playlist_with(&[("Intro", "Artist A")]);

    playlist
        .add_favorite_song(create_song("Intro", "Artist B"))
        .unwrap();
    playlist
        .add_favorite_song(create_song("intro", "Artist A"))
        .unwrap();
    assert_eq!(playlist.len(), 3);
}

#[test]
fn test_removed_song_can_be_added_again() {
    let mut playlist = playlist_with(&[("1", "A"), ("2", "B")]);
    playlist.remove_favorite_song(1).unwrap();

    playlist.add_favorite_song(create_song("1", "A")).unwrap();
    assert_eq!(listed_titles(&playlist), vec!["2", "1"]);
}

// ===== Cursor Removal Policy =====

#[test]
fn test_cursor_never_points_at_removed_song() {
    let mut playlist = playlist_with(&[("1", "A"), ("2", "B"), ("3", "C")]);
    playlist.play_next_favorite_song().unwrap();

    playlist.remove_favorite_song(2).unwrap();
    assert_eq!(playlist.current().unwrap().title, "3");

    // Navigation continues from the re-homed cursor
    assert_eq!(playlist.play_previous_favorite_song().unwrap().title, "1");
}

#[test]
fn test_unset_policy_requires_reset() {
    let config = PlaylistConfig {
        cursor_on_removal: CursorRemovalPolicy::Unset,
        ..Default::default()
    };
    let mut playlist = Playlist::new(config);
    playlist.add_favorite_song(create_song("1", "A")).unwrap();
    playlist.add_favorite_song(create_song("2", "B")).unwrap();

    playlist.remove_favorite_song(1).unwrap();
    assert_eq!(playlist.current(), None);
    assert_eq!(
        playlist.play_previous_favorite_song(),
        Err(PlaylistError::NoAdjacentElement(Direction::Previous))
    );

    assert_eq!(playlist.set_current_to_first().unwrap().title, "2");
}

#[test]
fn test_rescan_lookup_behaves_like_back_links() {
    let songs = [("1", "A"), ("2", "B"), ("3", "C")];
    let mut back_link = playlist_with(&songs);
    let mut rescan = Playlist::new(PlaylistConfig {
        previous_lookup: PreviousLookup::Rescan,
        ..Default::default()
    });
    for (title, artist) in songs {
        rescan.add_favorite_song(create_song(title, artist)).unwrap();
    }

    for playlist in [&mut back_link, &mut rescan] {
        playlist.play_next_favorite_song().unwrap();
        playlist.play_next_favorite_song().unwrap();
    }

    for _ in 0..3 {
        let a = back_link.play_previous_favorite_song().map(|s| s.title.clone());
        let b = rescan.play_previous_favorite_song().map(|s| s.title.clone());
        assert_eq!(a, b);
    }
    assert_eq!(back_link.current_position(), rescan.current_position());
}
