//! SongStore trait definition.

use super::errors::SongResult;
use super::lyrics;
use super::models::{NewSong, Song, SongFilter, UpdateSong};

/// Trait for song storage backends.
pub trait SongStore: Send + Sync {
    /// Insert a new song, returning it with its generated id and timestamps.
    fn create(&self, song: &NewSong) -> SongResult<Song>;

    /// Get a song by ID. Fails with `SongError::NotFound` when it doesn't exist.
    fn get_by_id(&self, id: &str) -> SongResult<Song>;

    /// List one page of songs matching `filter`, newest release first.
    fn list(&self, filter: &SongFilter) -> SongResult<Vec<Song>>;

    /// Overwrite every mutable field of an existing song.
    fn update(&self, update: &UpdateSong) -> SongResult<Song>;

    /// Delete a song by ID. Deleting a missing song is not an error.
    fn delete(&self, id: &str) -> SongResult<()>;

    /// Number of stored songs.
    fn count(&self) -> SongResult<usize>;

    /// Slice `full_text` by verse, see [`lyrics::paginate`].
    fn paginate_text(&self, full_text: &str, limit: i64, offset: i64) -> SongResult<String> {
        lyrics::paginate(full_text, limit, offset)
    }
}
