//! SQLite-backed song store implementation.
//!
//! Writes go through a single connection, reads are spread round-robin over a
//! small pool of read-only connections (WAL mode allows them to run alongside
//! the writer).

use super::errors::{SongError, SongResult};
use super::models::{NewSong, Song, SongFilter, UpdateSong};
use super::query::{fold_case, SongQuery, UNICODE_LOWER_FN};
use super::schema::{SONGS_VERSIONED_SCHEMAS, SONG_COLUMNS};
use super::trait_def::SongStore;
use anyhow::{anyhow, Context, Result};
use rusqlite::functions::FunctionFlags;
use rusqlite::{params, params_from_iter, Connection, OpenFlags};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use tracing::{debug, info};

pub const DEFAULT_READ_POOL_SIZE: usize = 4;

#[derive(Clone)]
pub struct SqliteSongStore {
    read_pool: Vec<Arc<Mutex<Connection>>>,
    write_conn: Arc<Mutex<Connection>>,
    read_index: Arc<AtomicUsize>,
}

fn register_functions(conn: &Connection) -> Result<()> {
    conn.create_scalar_function(
        UNICODE_LOWER_FN,
        1,
        FunctionFlags::SQLITE_UTF8 | FunctionFlags::SQLITE_DETERMINISTIC,
        |ctx| {
            let value: Option<String> = ctx.get(0)?;
            Ok(value.map(|s| fold_case(&s)))
        },
    )
    .with_context(|| format!("Failed to register {} function", UNICODE_LOWER_FN))
}

fn lock(conn: &Mutex<Connection>) -> SongResult<MutexGuard<'_, Connection>> {
    conn.lock()
        .map_err(|_| SongError::Store(anyhow!("songs database connection lock poisoned")))
}

impl SqliteSongStore {
    /// Open (or create) the songs database at `db_path`.
    ///
    /// # Arguments
    /// * `db_path` - Path to the SQLite database file
    /// * `read_pool_size` - Number of read-only connections, at least 1
    pub fn new<P: AsRef<Path>>(db_path: P, read_pool_size: usize) -> Result<Self> {
        let db_path = db_path.as_ref();

        let write_conn = Connection::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_WRITE
                | OpenFlags::SQLITE_OPEN_CREATE
                | OpenFlags::SQLITE_OPEN_URI
                | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .with_context(|| format!("Failed to open songs database at {:?}", db_path))?;

        let latest_schema = &SONGS_VERSIONED_SCHEMAS[SONGS_VERSIONED_SCHEMAS.len() - 1];
        latest_schema
            .ensure(&write_conn)
            .context("Songs database schema check failed")?;

        write_conn.pragma_update(None, "journal_mode", "WAL")?;
        register_functions(&write_conn)?;

        let mut read_pool = Vec::with_capacity(read_pool_size.max(1));
        for _ in 0..read_pool_size.max(1) {
            let read_conn = Connection::open_with_flags(
                db_path,
                OpenFlags::SQLITE_OPEN_READ_ONLY
                    | OpenFlags::SQLITE_OPEN_URI
                    | OpenFlags::SQLITE_OPEN_NO_MUTEX,
            )
            .context("Failed to open read connection")?;
            register_functions(&read_conn)?;
            read_pool.push(Arc::new(Mutex::new(read_conn)));
        }

        let store = SqliteSongStore {
            read_pool,
            write_conn: Arc::new(Mutex::new(write_conn)),
            read_index: Arc::new(AtomicUsize::new(0)),
        };
        info!("Opened songs database with {} songs", store.count()?);
        Ok(store)
    }

    fn get_read_conn(&self) -> Arc<Mutex<Connection>> {
        let index = self.read_index.fetch_add(1, Ordering::SeqCst) % self.read_pool.len();
        self.read_pool[index].clone()
    }

    fn parse_song_row(row: &rusqlite::Row) -> rusqlite::Result<Song> {
        Ok(Song {
            id: row.get(0)?,
            group: row.get(1)?,
            title: row.get(2)?,
            release_date: row.get(3)?,
            lyrics: row.get(4)?,
            link: row.get(5)?,
            created_at: row.get(6)?,
            updated_at: row.get(7)?,
        })
    }
}

impl SongStore for SqliteSongStore {
    fn create(&self, song: &NewSong) -> SongResult<Song> {
        let id = uuid::Uuid::new_v4().to_string();
        let conn = lock(&self.write_conn)?;
        let created = conn
            .query_row(
                &format!(
                    "INSERT INTO songs (id, groups, song, release_date, text, link)
                     VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                     RETURNING {}",
                    SONG_COLUMNS
                ),
                params![
                    &id,
                    &song.group,
                    &song.title,
                    &song.release_date,
                    &song.lyrics,
                    &song.link
                ],
                Self::parse_song_row,
            )
            .context("Failed to create song")?;
        Ok(created)
    }

    fn get_by_id(&self, id: &str) -> SongResult<Song> {
        let conn = self.get_read_conn();
        let conn = lock(&conn)?;
        match conn.query_row(
            &format!("SELECT {} FROM songs WHERE id = ?1", SONG_COLUMNS),
            params![id],
            Self::parse_song_row,
        ) {
            Ok(song) => Ok(song),
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(SongError::NotFound(id.to_string())),
            Err(e) => Err(anyhow::Error::new(e).context("Failed to get song").into()),
        }
    }

    fn list(&self, filter: &SongFilter) -> SongResult<Vec<Song>> {
        let query = SongQuery::from_filter(filter)?;
        let (sql, values) = query.render();
        debug!("Listing songs: {} ({} bound values)", sql, values.len());

        let conn = self.get_read_conn();
        let conn = lock(&conn)?;
        let mut stmt = conn
            .prepare(&sql)
            .context("Failed to prepare songs listing query")?;
        let songs = stmt
            .query_map(params_from_iter(values), Self::parse_song_row)
            .context("Failed to list songs")?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to read listed songs")?;
        Ok(songs)
    }

    fn update(&self, update: &UpdateSong) -> SongResult<Song> {
        let conn = lock(&self.write_conn)?;
        let song = &update.song;
        match conn.query_row(
            &format!(
                "UPDATE songs
                 SET groups = ?1, song = ?2, release_date = ?3, text = ?4, link = ?5,
                     updated_at = cast(strftime('%s','now') as int)
                 WHERE id = ?6
                 RETURNING {}",
                SONG_COLUMNS
            ),
            params![
                &song.group,
                &song.title,
                &song.release_date,
                &song.lyrics,
                &song.link,
                &update.id
            ],
            Self::parse_song_row,
        ) {
            Ok(updated) => Ok(updated),
            Err(rusqlite::Error::QueryReturnedNoRows) => {
                Err(SongError::NotFound(update.id.clone()))
            }
            Err(e) => Err(anyhow::Error::new(e)
                .context("Failed to update song")
                .into()),
        }
    }

    fn delete(&self, id: &str) -> SongResult<()> {
        let conn = lock(&self.write_conn)?;
        let rows_affected = conn
            .execute("DELETE FROM songs WHERE id = ?1", params![id])
            .context("Failed to delete song")?;
        if rows_affected == 0 {
            debug!("Delete of song {} matched no rows", id);
        }
        Ok(())
    }

    fn count(&self) -> SongResult<usize> {
        let conn = self.get_read_conn();
        let conn = lock(&conn)?;
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM songs", [], |r| r.get(0))
            .context("Failed to count songs")?;
        Ok(count as usize)
    }
}
