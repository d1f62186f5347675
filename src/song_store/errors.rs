use thiserror::Error;

#[derive(Debug, Error)]
pub enum SongError {
    #[error("{0}")]
    Validation(String),

    #[error("Song not found: {0}")]
    NotFound(String),

    #[error("Offset {offset} out of range, text has {verse_count} verses")]
    OffsetOutOfRange { offset: i64, verse_count: usize },

    #[error("Store error: {0:#}")]
    Store(#[from] anyhow::Error),
}

impl SongError {
    /// Short, stable label used for metrics and log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SongError::Validation(_) => "validation",
            SongError::NotFound(_) => "not_found",
            SongError::OffsetOutOfRange { .. } => "out_of_range",
            SongError::Store(_) => "store",
        }
    }
}

pub type SongResult<T> = Result<T, SongError>;
