use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{extract::State, middleware, response::IntoResponse, routing::get, Json, Router};
use serde::Serialize;
use tokio::net::TcpListener;
use tracing::{error, info};

use super::songs::make_songs_routes;
use super::{log_requests, make_cors_layer, metrics::metrics_handler, state::*, ServerConfig};
use crate::song_service::SongService;

#[derive(Serialize)]
struct ServerStats {
    pub uptime: String,
    pub hash: String,
}

fn format_uptime(duration: Duration) -> String {
    let total_seconds = duration.as_secs();

    let days = total_seconds / 86_400;
    let hours = (total_seconds % 86_400) / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;

    format!("{}d {:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

async fn home(State(state): State<ServerState>) -> impl IntoResponse {
    let stats = ServerStats {
        uptime: format_uptime(state.start_time.elapsed()),
        hash: state.hash.clone(),
    };
    Json(stats)
}

pub fn make_app(config: ServerConfig, song_service: Arc<SongService>) -> Result<Router> {
    let cors = make_cors_layer(&config.cors_allowed_origins)?;

    let state = ServerState {
        config,
        start_time: Instant::now(),
        song_service,
        hash: env!("GIT_HASH").to_owned(),
    };

    let app = Router::new()
        .route("/", get(home))
        .merge(make_songs_routes())
        .layer(middleware::from_fn_with_state(state.clone(), log_requests))
        .layer(cors)
        .with_state(state);

    Ok(app)
}

pub fn make_metrics_app() -> Router {
    Router::new().route("/metrics", get(metrics_handler))
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for Ctrl+C: {}", err);
        return;
    }
    info!("Received Ctrl+C, shutting down");
}

pub async fn run_server(config: ServerConfig, song_service: Arc<SongService>) -> Result<()> {
    let address = format!("{}:{}", config.bind_address, config.port);
    let metrics_address = format!("{}:{}", config.bind_address, config.metrics_port);
    let app = make_app(config, song_service)?;

    let metrics_listener = TcpListener::bind(&metrics_address)
        .await
        .with_context(|| format!("Failed to bind metrics listener on {}", metrics_address))?;
    tokio::spawn(async move {
        if let Err(err) = axum::serve(metrics_listener, make_metrics_app()).await {
            error!("Metrics server stopped: {}", err);
        }
    });

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind listener on {}", address))?;
    info!("Listening on {}", address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")
}
