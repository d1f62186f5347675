//! Test fixture creation
//!
//! Creates a temporary songs database, optionally seeded with the fixture songs.

use super::constants::*;
use anyhow::Result;
use song_library_server::song_store::{NewSong, SongStore, SqliteSongStore};
use std::path::PathBuf;
use tempfile::TempDir;

pub fn create_test_db() -> Result<(TempDir, PathBuf)> {
    let temp_dir = TempDir::new()?;
    let db_path = temp_dir.path().join("songs.db");
    Ok((temp_dir, db_path))
}

fn to_new_song(song: &FixtureSong) -> NewSong {
    NewSong {
        group: song.group.to_string(),
        title: song.title.to_string(),
        release_date: song.release_date.to_string(),
        lyrics: song.lyrics.to_string(),
        link: song.link.to_string(),
    }
}

/// Inserts every fixture song and returns their ids, in `FIXTURE_SONGS` order.
pub fn seed_fixture_songs(store: &SqliteSongStore) -> Result<Vec<String>> {
    FIXTURE_SONGS
        .iter()
        .map(|song| -> Result<String> { Ok(store.create(&to_new_song(song))?.id) })
        .collect()
}
