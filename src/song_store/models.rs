//! Song records and the transient request types around them.
//!
//! Field names follow the domain (`group`, `title`, `lyrics`), while the JSON
//! keys keep the wire format of the public API (`groups`, `song`, `text`).

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE: i64 = 1;
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// A stored song, including the store-assigned identity and timestamps.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub id: String,
    #[serde(rename = "groups")]
    pub group: String,
    #[serde(rename = "song")]
    pub title: String,
    pub release_date: String,
    #[serde(rename = "text")]
    pub lyrics: String,
    pub link: String,
    /// Unix timestamp (seconds)
    pub created_at: i64,
    /// Unix timestamp (seconds)
    pub updated_at: i64,
}

/// Client supplied attributes of a song.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewSong {
    #[serde(rename = "groups")]
    pub group: String,
    #[serde(rename = "song")]
    pub title: String,
    pub release_date: String,
    #[serde(rename = "text")]
    pub lyrics: String,
    pub link: String,
}

/// Full replacement of every mutable attribute of the song identified by `id`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateSong {
    pub id: String,
    pub song: NewSong,
}

impl UpdateSong {
    pub fn new(id: impl Into<String>, song: NewSong) -> Self {
        Self {
            id: id.into(),
            song,
        }
    }
}

/// Criteria for listing songs. Empty strings behave like absent filters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SongFilter {
    pub group: Option<String>,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub lyrics: Option<String>,
    /// 1-based page number
    pub page: i64,
    pub limit: i64,
}

impl Default for SongFilter {
    fn default() -> Self {
        Self {
            group: None,
            title: None,
            release_date: None,
            lyrics: None,
            page: DEFAULT_PAGE,
            limit: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SongFilter {
    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_release_date(mut self, release_date: impl Into<String>) -> Self {
        self.release_date = Some(release_date.into());
        self
    }

    pub fn with_lyrics(mut self, lyrics: impl Into<String>) -> Self {
        self.lyrics = Some(lyrics.into());
        self
    }

    pub fn with_page(mut self, page: i64, limit: i64) -> Self {
        self.page = page;
        self.limit = limit;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteMessage {
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatedText {
    pub text: String,
}
