//! Shared constants for end-to-end tests
//!
//! When fixture data changes, update only this file.

// ============================================================================
// Fixture Songs (listed newest release first)
// ============================================================================

pub struct FixtureSong {
    pub group: &'static str,
    pub title: &'static str,
    pub release_date: &'static str,
    pub lyrics: &'static str,
    pub link: &'static str,
}

pub const BLUE_NIGHT: FixtureSong = FixtureSong {
    group: "Jazz Ensemble",
    title: "Blue Night",
    release_date: "2015-05-20",
    lyrics: "A slow tune about LOVE",
    link: "https://example.com/blue-night",
};

pub const LOVE_STORY: FixtureSong = FixtureSong {
    group: "The Test Band",
    title: "Love Story",
    release_date: "2008-09-12",
    lyrics: "First verse of love\n\nSecond verse\n\nThird verse",
    link: "https://example.com/love-story",
};

pub const OPENING_TRACK: FixtureSong = FixtureSong {
    group: "The Test Band",
    title: "Opening Track",
    release_date: "2001-01-01",
    lyrics: "Intro",
    link: "",
};

pub const CYRILLIC_SONG: FixtureSong = FixtureSong {
    group: "Кино",
    title: "Группа крови",
    release_date: "1988-01-05",
    lyrics: "Тёплое место\n\nНо улицы ждут",
    link: "",
};

/// All fixture songs in the order `GET /songs` returns them.
pub const FIXTURE_SONGS: [FixtureSong; 4] = [BLUE_NIGHT, LOVE_STORY, OPENING_TRACK, CYRILLIC_SONG];

// ============================================================================
// Timeouts
// ============================================================================

/// Maximum time to wait for the server to become ready
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Interval between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 10;

/// Timeout for individual requests made by the test client
pub const REQUEST_TIMEOUT_SECS: u64 = 10;
