use axum::{
    extract::rejection::{JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::error;

use crate::song_store::SongError;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Error returned by every song route, rendered as `{"error": "..."}`.
#[derive(Debug)]
pub enum ApiError {
    Song(SongError),
    BadRequest(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Song(SongError::Validation(_)) => StatusCode::BAD_REQUEST,
            ApiError::Song(SongError::OffsetOutOfRange { .. }) => StatusCode::BAD_REQUEST,
            ApiError::Song(SongError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Song(SongError::Store(_)) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<SongError> for ApiError {
    fn from(err: SongError) -> Self {
        ApiError::Song(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match self {
            ApiError::BadRequest(message) => message,
            ApiError::Song(err) => {
                if status == StatusCode::INTERNAL_SERVER_ERROR {
                    error!("Request failed: {}", err);
                }
                err.to_string()
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
