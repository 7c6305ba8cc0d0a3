// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Playlists of shared songs.
//!
//! A [`Playlist`] stores [`Shared`] handles, never copies. Any change made
//! to a song through the playlist (for example by
//! [`Playlist::mark_all_as_played`]) is visible to every other holder of the
//! same handle, and changes made through an outside handle are visible
//! through the playlist.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::debug;

use super::song::{Song, SongError};

/// Shared, mutable handle to a song.
///
/// Cloning the handle aliases the same song; it does not copy it. Playlist
/// operations borrow each song only for the duration of the call, so callers
/// must not hold a `Ref` or `RefMut` from one of these handles across a call
/// such as [`Playlist::mark_all_as_played`]; `RefCell` panics on the
/// conflicting borrow.
pub type Shared<T> = Rc<RefCell<T>>;

/// Capability a playlist needs from its entries.
pub trait Playable {
    /// Mark as played. Must be idempotent.
    fn play(&mut self);

    /// Check if played
    fn is_played(&self) -> bool;
}

/// Rating capability of a song-like value.
pub trait Rated {
    /// Get star rating
    fn stars(&self) -> i32;

    /// Set star rating, rejecting values above the maximum
    fn set_stars(&mut self, stars: i32) -> Result<(), SongError>;
}

/// Something that can be added to a playlist: one song, or a sequence of
/// entries which may itself contain sequences.
#[derive(Debug)]
pub enum Entry<T> {
    /// A single song
    Single(Shared<T>),
    /// A sequence of entries, added in order
    Many(Vec<Entry<T>>),
}

impl<T> Entry<T> {
    /// Number of songs this entry will append
    pub fn song_count(&self) -> usize {
        match self {
            Entry::Single(_) => 1,
            Entry::Many(entries) => entries.iter().map(Entry::song_count).sum(),
        }
    }
}

impl<T> From<Shared<T>> for Entry<T> {
    fn from(song: Shared<T>) -> Self {
        Entry::Single(song)
    }
}

impl<T> From<&Shared<T>> for Entry<T> {
    fn from(song: &Shared<T>) -> Self {
        Entry::Single(Rc::clone(song))
    }
}

impl<T> From<Vec<Shared<T>>> for Entry<T> {
    fn from(songs: Vec<Shared<T>>) -> Self {
        Entry::Many(songs.into_iter().map(Entry::Single).collect())
    }
}

impl<T> From<Vec<Entry<T>>> for Entry<T> {
    fn from(entries: Vec<Entry<T>>) -> Self {
        Entry::Many(entries)
    }
}

/// Ordered collection of shared songs.
///
/// Insertion order is preserved and the same handle may appear more than
/// once. Songs are never removed. Bulk operations need every handle to be
/// free of outstanding borrows (see [`Shared`]).
#[derive(Debug)]
pub struct Playlist<T = Song> {
    songs: Vec<Shared<T>>,
}

impl<T> Playlist<T> {
    /// Create an empty playlist
    pub fn new() -> Self {
        Self { songs: Vec::new() }
    }

    /// Add a song or a (possibly nested) sequence of songs.
    ///
    /// Sequences are flattened in iteration order, each element going
    /// through the same path as a single add.
    pub fn add(&mut self, entry: impl Into<Entry<T>>) {
        let entry = entry.into();
        self.songs.reserve(entry.song_count());
        self.add_entry(entry);
    }

    fn add_entry(&mut self, entry: Entry<T>) {
        match entry {
            Entry::Single(song) => self.add_one(song),
            Entry::Many(entries) => {
                for entry in entries {
                    self.add_entry(entry);
                }
            }
        }
    }

    /// Append one song to the end of the playlist
    pub fn add_one(&mut self, song: Shared<T>) {
        self.songs.push(song);
        debug!(count = self.songs.len(), "added song to playlist");
    }

    /// Append every song in order
    pub fn add_many<I>(&mut self, songs: I)
    where
        I: IntoIterator<Item = Shared<T>>,
    {
        for song in songs {
            self.add_one(song);
        }
    }

    /// Number of songs added so far
    pub fn count(&self) -> usize {
        self.songs.len()
    }

    /// Same as [`Playlist::count`]
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Check if no songs have been added
    pub fn is_empty(&self) -> bool {
        self.songs.is_empty()
    }

    /// Get the handle at a position
    pub fn get(&self, index: usize) -> Option<&Shared<T>> {
        self.songs.get(index)
    }

    /// Iterate over the handles in insertion order
    pub fn songs(&self) -> std::slice::Iter<'_, Shared<T>> {
        self.songs.iter()
    }
}

impl<T: Playable> Playlist<T> {
    /// Play every song in insertion order.
    ///
    /// Membership and order are left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if any song handle is currently borrowed elsewhere.
    pub fn mark_all_as_played(&mut self) {
        for song in &self.songs {
            song.borrow_mut().play();
        }
        debug!(count = self.songs.len(), "marked all songs as played");
    }

    /// Number of entries currently reporting played
    pub fn played_count(&self) -> usize {
        self.songs.iter().filter(|song| song.borrow().is_played()).count()
    }
}

impl<T> Default for Playlist<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> IntoIterator for &'a Playlist<T> {
    type Item = &'a Shared<T>;
    type IntoIter = std::slice::Iter<'a, Shared<T>>;

    fn into_iter(self) -> Self::IntoIter {
        self.songs()
    }
}
