//! Song service: validation and structured logging around the song store.
//!
//! Events are recorded under the span handed to [`SongService::new`], so the
//! caller decides where (and whether) service logs end up.

use std::sync::Arc;
use tracing::{error, info, Span};

use crate::server::metrics::{record_song_operation, set_songs_stored};
use crate::song_store::{
    DeleteMessage, NewSong, Song, SongError, SongFilter, SongResult, SongStore, UpdateSong,
};

pub const DELETED_MESSAGE: &str = "Song deleted successfully";

pub struct SongService {
    store: Arc<dyn SongStore>,
    span: Span,
}

impl SongService {
    pub fn new(store: Arc<dyn SongStore>, span: Span) -> Self {
        Self { store, span }
    }

    pub fn create_song(&self, song: NewSong) -> SongResult<Song> {
        info!(parent: &self.span, title = %song.title, "started creating song");

        let result = if song.title.is_empty() {
            Err(SongError::Validation("title is required".to_string()))
        } else {
            self.store.create(&song)
        };
        let result = self.observe("create", result);
        if result.is_ok() {
            self.refresh_songs_gauge();
        }

        info!(parent: &self.span, title = %song.title, "ended creating song");
        result
    }

    pub fn get_song(&self, id: &str) -> SongResult<Song> {
        info!(parent: &self.span, song_id = %id, "started getting song");
        let result = self.observe("get", self.store.get_by_id(id));
        info!(parent: &self.span, song_id = %id, "ended getting song");
        result
    }

    pub fn list_songs(&self, filter: &SongFilter) -> SongResult<Vec<Song>> {
        info!(
            parent: &self.span,
            page = filter.page,
            limit = filter.limit,
            "started listing songs"
        );
        let result = self.observe("list", self.store.list(filter));
        info!(
            parent: &self.span,
            returned = result.as_ref().map(Vec::len).unwrap_or(0),
            "ended listing songs"
        );
        result
    }

    pub fn update_song(&self, update: &UpdateSong) -> SongResult<Song> {
        info!(parent: &self.span, song_id = %update.id, "started updating song");
        let result = self.observe("update", self.store.update(update));
        info!(parent: &self.span, song_id = %update.id, "ended updating song");
        result
    }

    pub fn delete_song(&self, id: &str) -> SongResult<DeleteMessage> {
        info!(parent: &self.span, song_id = %id, "started deleting song");
        let result = self
            .observe("delete", self.store.delete(id))
            .map(|()| DeleteMessage {
                message: DELETED_MESSAGE.to_string(),
            });
        if result.is_ok() {
            self.refresh_songs_gauge();
        }
        info!(parent: &self.span, song_id = %id, "ended deleting song");
        result
    }

    pub fn paginate_text(&self, full_text: &str, limit: i64, offset: i64) -> SongResult<String> {
        info!(parent: &self.span, limit, offset, "started paginating text");
        let result = self.observe(
            "paginate",
            self.store.paginate_text(full_text, limit, offset),
        );
        info!(parent: &self.span, limit, offset, "ended paginating text");
        result
    }

    /// Fetches a song and returns the requested verses of its lyrics.
    pub fn paginate_lyrics(&self, id: &str, limit: i64, offset: i64) -> SongResult<String> {
        let song = self.get_song(id)?;
        self.paginate_text(&song.lyrics, limit, offset)
    }

    fn refresh_songs_gauge(&self) {
        match self.store.count() {
            Ok(count) => set_songs_stored(count),
            Err(err) => error!(parent: &self.span, error = %err, "failed to count songs"),
        }
    }

    fn observe<T>(&self, operation: &'static str, result: SongResult<T>) -> SongResult<T> {
        match &result {
            Ok(_) => record_song_operation(operation, "ok"),
            Err(err) => {
                error!(
                    parent: &self.span,
                    operation,
                    kind = err.kind(),
                    error = %err,
                    "song operation failed"
                );
                record_song_operation(operation, err.kind());
            }
        }
        result
    }
}
