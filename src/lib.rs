// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! In-memory songs and playlists.
//!
//! Songs carry a name, a star rating and a played flag. Playlists hold
//! shared handles to songs and apply bulk operations to every one of them.

pub mod config;
pub mod library;

pub use library::{Entry, Playable, Playlist, Rated, Shared, Song, SongError};
