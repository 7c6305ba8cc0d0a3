// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Songs and their per-track attributes.
//!
//! A [`Song`] owns its name, star rating and played flag. The played flag
//! only ever moves from unplayed to played.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use thiserror::Error;
use tracing::warn;

use super::playlist::{Playable, Rated, Shared};

/// Errors raised when mutating a song
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SongError {
    /// Rating above the allowed maximum
    #[error("invalid star rating {stars}: must not exceed {max}")]
    InvalidStars { stars: i32, max: i32 },
}

/// A single track in a playlist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Song {
    /// Track name, fixed at construction
    name: String,
    /// Star rating
    stars: i32,
    /// Whether the song has been played
    played: bool,
}

impl Song {
    /// Highest accepted star rating
    pub const MAX_STARS: i32 = 5;

    /// Create a new unrated, unplayed song
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            stars: 0,
            played: false,
        }
    }

    /// Wrap the song in a shared handle suitable for a playlist
    pub fn into_shared(self) -> Shared<Song> {
        Rc::new(RefCell::new(self))
    }

    /// Get name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get star rating
    pub fn stars(&self) -> i32 {
        self.stars
    }

    /// Set the star rating.
    ///
    /// Values above [`Song::MAX_STARS`] are rejected and leave the current
    /// rating untouched. There is no lower bound: zero and negative values
    /// are stored as given.
    pub fn set_stars(&mut self, stars: i32) -> Result<(), SongError> {
        if stars > Self::MAX_STARS {
            warn!(song = %self.name, stars, "rejected star rating");
            return Err(SongError::InvalidStars {
                stars,
                max: Self::MAX_STARS,
            });
        }

        self.stars = stars;
        Ok(())
    }

    /// Render the rating as filled and empty stars, e.g. `★★★☆☆`.
    ///
    /// Ratings below zero render as no stars; the stored value is untouched.
    pub fn star_bar(&self) -> String {
        let full = self.stars.clamp(0, Self::MAX_STARS) as usize;
        let empty = Self::MAX_STARS as usize - full;
        format!("{}{}", "★".repeat(full), "☆".repeat(empty))
    }

    /// Mark the song as played. Calling again has no further effect.
    pub fn play(&mut self) {
        self.played = true;
    }

    /// Check if played
    pub fn is_played(&self) -> bool {
        self.played
    }
}

impl Playable for Song {
    fn play(&mut self) {
        Song::play(self);
    }

    fn is_played(&self) -> bool {
        Song::is_played(self)
    }
}

impl Rated for Song {
    fn stars(&self) -> i32 {
        Song::stars(self)
    }

    fn set_stars(&mut self, stars: i32) -> Result<(), SongError> {
        Song::set_stars(self, stars)
    }
}

impl fmt::Display for Song {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.star_bar())?;
        if self.played {
            write!(f, " (played)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_creation() {
        let song = Song::new("La la la");
        assert_eq!(song.name(), "La la la");
        assert_eq!(song.stars(), 0);
        assert!(!song.is_played());
    }

    #[test]
    fn test_empty_name_accepted() {
        let song = Song::new("");
        assert_eq!(song.name(), "");
    }

    #[test]
    fn test_set_stars_in_range() {
        let mut song = Song::new("Track");

        for stars in 0..=Song::MAX_STARS {
            song.set_stars(stars).unwrap();
            assert_eq!(song.stars(), stars);
        }
    }

    #[test]
    fn test_set_stars_above_max_rejected() {
        let mut song = Song::new("Track");
        song.set_stars(3).unwrap();

        let err = song.set_stars(6).unwrap_err();
        assert_eq!(err, SongError::InvalidStars { stars: 6, max: 5 });
        assert_eq!(song.stars(), 3);

        assert!(song.set_stars(i32::MAX).is_err());
        assert_eq!(song.stars(), 3);
    }

    #[test]
    fn test_set_stars_no_lower_bound() {
        let mut song = Song::new("Track");

        song.set_stars(-2).unwrap();
        assert_eq!(song.stars(), -2);

        song.set_stars(i32::MIN).unwrap();
        assert_eq!(song.stars(), i32::MIN);
    }

    #[test]
    fn test_play_is_idempotent() {
        let mut song = Song::new("Track");

        song.play();
        assert!(song.is_played());

        song.play();
        song.play();
        assert!(song.is_played());
    }

    #[test]
    fn test_rejected_rating_does_not_touch_played() {
        let mut song = Song::new("Track");
        song.play();

        assert!(song.set_stars(10).is_err());
        assert!(song.is_played());
    }

    #[test]
    fn test_error_message() {
        let err = SongError::InvalidStars { stars: 7, max: 5 };
        assert_eq!(err.to_string(), "invalid star rating 7: must not exceed 5");
    }

    #[test]
    fn test_display() {
        let mut song = Song::new("Intro");
        assert_eq!(song.to_string(), "Intro [☆☆☆☆☆]");

        song.set_stars(3).unwrap();
        song.play();
        assert_eq!(song.to_string(), "Intro [★★★☆☆] (played)");

        song.set_stars(-1).unwrap();
        assert_eq!(song.to_string(), "Intro [☆☆☆☆☆] (played)");
    }

    #[test]
    fn test_star_bar() {
        let mut song = Song::new("Bar");
        assert_eq!(song.star_bar(), "☆☆☆☆☆");

        song.set_stars(5).unwrap();
        assert_eq!(song.star_bar(), "★★★★★");

        song.set_stars(i32::MIN).unwrap();
        assert_eq!(song.star_bar(), "☆☆☆☆☆");
        assert_eq!(song.stars(), i32::MIN);
    }

    #[test]
    fn test_into_shared() {
        let shared = Song::new("Shared").into_shared();
        shared.borrow_mut().play();
        assert!(shared.borrow().is_played());
    }
}
