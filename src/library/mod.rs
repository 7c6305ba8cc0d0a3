// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Song and playlist system.
//!
//! This module provides:
//! - Songs: Named tracks with a star rating and a played flag
//! - Playlists: Ordered collections of shared songs with bulk operations

pub mod playlist;
pub mod song;

pub use playlist::{Entry, Playable, Playlist, Rated, Shared};
pub use song::{Song, SongError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_creation() {
        let song = Song::new("My Song");
        assert_eq!(song.name(), "My Song");
        assert!(!song.is_played());
    }

    #[test]
    fn test_playlist_creation() {
        let playlist: Playlist = Playlist::default();
        assert!(playlist.is_empty());
    }

    #[test]
    fn test_song_through_capabilities() {
        fn rate_and_play<S: Playable + Rated>(song: &mut S) -> Result<(), SongError> {
            song.set_stars(4)?;
            song.play();
            Ok(())
        }

        let mut song = Song::new("Generic");
        rate_and_play(&mut song).unwrap();
        assert_eq!(Rated::stars(&song), 4);
        assert!(Playable::is_played(&song));
    }
}
