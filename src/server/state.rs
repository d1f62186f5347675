use axum::extract::FromRef;
use std::sync::Arc;
use std::time::Instant;

use super::ServerConfig;
use crate::song_service::SongService;

pub type GuardedSongService = Arc<SongService>;

#[derive(Clone)]
pub struct ServerState {
    pub config: ServerConfig,
    pub start_time: Instant,
    pub song_service: GuardedSongService,
    pub hash: String,
}

impl FromRef<ServerState> for GuardedSongService {
    fn from_ref(input: &ServerState) -> Self {
        input.song_service.clone()
    }
}

impl FromRef<ServerState> for ServerConfig {
    fn from_ref(input: &ServerState) -> Self {
        input.config.clone()
    }
}
