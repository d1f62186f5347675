//! SQLite schema of the songs database.

use crate::sqlite_column;
use crate::sqlite_persistence::{Column, SqlType, Table, VersionedSchema, DEFAULT_TIMESTAMP};

/// Columns returned by every song query, in the order `parse_song_row` reads them.
pub const SONG_COLUMNS: &str = "id, groups, song, release_date, text, link, created_at, updated_at";

const SONGS_TABLE: Table = Table {
    name: "songs",
    columns: &[
        sqlite_column!("rowid", &SqlType::Integer, is_primary_key = true),
        sqlite_column!("id", &SqlType::Text, non_null = true, is_unique = true), // uuid v4
        sqlite_column!("groups", &SqlType::Text, non_null = true),
        sqlite_column!("song", &SqlType::Text, non_null = true),
        sqlite_column!("release_date", &SqlType::Text, non_null = true),
        sqlite_column!("text", &SqlType::Text, non_null = true),
        sqlite_column!("link", &SqlType::Text, non_null = true),
        sqlite_column!(
            "created_at",
            &SqlType::Integer,
            non_null = true,
            default_value = Some(DEFAULT_TIMESTAMP)
        ),
        sqlite_column!(
            "updated_at",
            &SqlType::Integer,
            non_null = true,
            default_value = Some(DEFAULT_TIMESTAMP)
        ),
    ],
    indices: &[
        ("idx_songs_id", "id"),
        ("idx_songs_release_date", "release_date"),
    ],
};

pub const SONGS_VERSIONED_SCHEMAS: &[VersionedSchema] = &[VersionedSchema {
    version: 0,
    tables: &[SONGS_TABLE],
}];
