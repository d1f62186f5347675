//! Song routes: CRUD plus verse pagination of a song's lyrics.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use super::error::ApiError;
use super::state::{GuardedSongService, ServerState};
use super::ServerConfig;
use crate::song_store::{
    DeleteMessage, NewSong, PaginatedText, Song, SongFilter, UpdateSong, DEFAULT_PAGE,
};

const DEFAULT_PAGINATE_LIMIT: i64 = 10;
const DEFAULT_PAGINATE_OFFSET: i64 = 0;

/// Query string of `GET /songs`. Numbers stay strings so bad input becomes a 400 with our body.
#[derive(Deserialize, Debug, Default)]
pub struct ListSongsQuery {
    pub groups: Option<String>,
    pub title: Option<String>,
    pub release_date: Option<String>,
    pub text: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
pub struct PaginateQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// Parses an optional integer query parameter, absent or empty means `default`.
fn parse_int_param(name: &str, value: Option<&str>, default: i64) -> Result<i64, ApiError> {
    match value.map(str::trim) {
        None | Some("") => Ok(default),
        Some(raw) => raw
            .parse::<i64>()
            .map_err(|_| ApiError::BadRequest(format!("{} must be an integer, got '{}'", name, raw))),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

impl ListSongsQuery {
    pub fn into_filter(self, config: &ServerConfig) -> Result<SongFilter, ApiError> {
        let page = parse_int_param("page", self.page.as_deref(), DEFAULT_PAGE)?;
        let limit = parse_int_param("limit", self.limit.as_deref(), config.default_page_size)?;

        Ok(SongFilter {
            group: non_empty(self.groups),
            title: non_empty(self.title),
            release_date: non_empty(self.release_date),
            lyrics: non_empty(self.text),
            page,
            limit: limit.min(config.max_page_size),
        })
    }
}

async fn create_song(
    State(service): State<GuardedSongService>,
    payload: Result<Json<NewSong>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Json(song) = payload?;
    let created = service.create_song(song)?;
    Ok((StatusCode::CREATED, Json(created)))
}

async fn list_songs(
    State(service): State<GuardedSongService>,
    State(config): State<ServerConfig>,
    query: Result<Query<ListSongsQuery>, QueryRejection>,
) -> Result<Json<Vec<Song>>, ApiError> {
    let Query(query) = query?;
    let filter = query.into_filter(&config)?;
    Ok(Json(service.list_songs(&filter)?))
}

async fn get_song(
    State(service): State<GuardedSongService>,
    Path(id): Path<String>,
) -> Result<Json<Song>, ApiError> {
    Ok(Json(service.get_song(&id)?))
}

async fn update_song(
    State(service): State<GuardedSongService>,
    Path(id): Path<String>,
    payload: Result<Json<NewSong>, JsonRejection>,
) -> Result<Json<Song>, ApiError> {
    let Json(song) = payload?;
    Ok(Json(service.update_song(&UpdateSong::new(id, song))?))
}

async fn delete_song(
    State(service): State<GuardedSongService>,
    Path(id): Path<String>,
) -> Result<Json<DeleteMessage>, ApiError> {
    Ok(Json(service.delete_song(&id)?))
}

async fn paginate_lyrics(
    State(service): State<GuardedSongService>,
    Path(id): Path<String>,
    query: Result<Query<PaginateQuery>, QueryRejection>,
) -> Result<Json<PaginatedText>, ApiError> {
    let Query(query) = query?;
    let limit = parse_int_param("limit", query.limit.as_deref(), DEFAULT_PAGINATE_LIMIT)?;
    let offset = parse_int_param("offset", query.offset.as_deref(), DEFAULT_PAGINATE_OFFSET)?;

    let text = service.paginate_lyrics(&id, limit, offset)?;
    Ok(Json(PaginatedText { text }))
}

pub fn make_songs_routes() -> Router<ServerState> {
    Router::new()
        .route("/songs", get(list_songs).post(create_song))
        .route(
            "/songs/{id}",
            get(get_song).put(update_song).delete(delete_song),
        )
        .route("/songs/{id}/paginate", get(paginate_lyrics))
}
