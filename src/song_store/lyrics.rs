//! Verse based pagination of lyrics.
//!
//! A verse is a block of text separated from its neighbours by a blank line.

use super::errors::{SongError, SongResult};

pub const VERSE_SEPARATOR: &str = "\n\n";

pub fn verse_count(full_text: &str) -> usize {
    full_text.split(VERSE_SEPARATOR).count()
}

/// Returns the verses `[offset, offset + limit)` of `full_text`, clamped to the
/// available verses and joined back with the blank line separator.
///
/// A non-positive `limit` yields an empty string.
pub fn paginate(full_text: &str, limit: i64, offset: i64) -> SongResult<String> {
    let verses: Vec<&str> = full_text.split(VERSE_SEPARATOR).collect();
    let verse_count = verses.len();

    if offset < 0 || offset as u64 >= verse_count as u64 {
        return Err(SongError::OffsetOutOfRange {
            offset,
            verse_count,
        });
    }
    if limit <= 0 {
        return Ok(String::new());
    }

    let start = offset as usize;
    let end = usize::try_from(limit)
        .map(|limit| start.saturating_add(limit))
        .unwrap_or(usize::MAX)
        .min(verse_count);

    Ok(verses[start..end].join(VERSE_SEPARATOR))
}
