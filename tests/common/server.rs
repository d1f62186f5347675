//! Test server lifecycle management
//!
//! This module manages spawning and shutting down test HTTP servers.
//! Each test gets an isolated server with its own database.

use super::constants::*;
use super::fixtures::{create_test_db, seed_fixture_songs};
use song_library_server::server::{make_app, RequestsLoggingLevel, ServerConfig};
use song_library_server::song_service::SongService;
use song_library_server::song_store::SqliteSongStore;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::net::TcpListener;

/// Test server instance with an isolated database
///
/// When dropped, the server gracefully shuts down and temp resources are cleaned up.
pub struct TestServer {
    /// Base URL for making requests (e.g., "http://127.0.0.1:12345")
    pub base_url: String,

    /// Ids of the seeded fixture songs, in `FIXTURE_SONGS` order
    pub fixture_ids: Vec<String>,

    /// Song store for direct database access in tests
    pub song_store: Arc<SqliteSongStore>,

    // Private fields - keep resources alive until drop
    _temp_db_dir: TempDir,
    _shutdown_tx: Option<tokio::sync::oneshot::Sender<()>>,
}

impl TestServer {
    /// Spawns a new test server with an empty library on a random port
    pub async fn spawn() -> Self {
        Self::spawn_inner(false, ServerConfig::default()).await
    }

    /// Spawns a new test server whose library holds the fixture songs
    pub async fn spawn_with_fixtures() -> Self {
        Self::spawn_inner(true, ServerConfig::default()).await
    }

    /// Spawns a seeded server with custom page size limits
    pub async fn spawn_with_page_sizes(default_page_size: i64, max_page_size: i64) -> Self {
        let config = ServerConfig {
            default_page_size,
            max_page_size,
            ..Default::default()
        };
        Self::spawn_inner(true, config).await
    }

    /// # Panics
    ///
    /// Panics if the database cannot be created, the port cannot be bound
    /// or the server doesn't become ready within timeout.
    async fn spawn_inner(with_fixtures: bool, config: ServerConfig) -> Self {
        let (temp_db_dir, db_path) = create_test_db().expect("Failed to create test database");

        let song_store =
            Arc::new(SqliteSongStore::new(&db_path, 2).expect("Failed to open song store"));
        let fixture_ids = if with_fixtures {
            seed_fixture_songs(&song_store).expect("Failed to seed fixture songs")
        } else {
            Vec::new()
        };

        // Bind to random port
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind to random port");
        let port = listener
            .local_addr()
            .expect("Failed to get local address")
            .port();
        let base_url = format!("http://127.0.0.1:{}", port);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let config = ServerConfig {
            port,
            requests_logging_level: RequestsLoggingLevel::None,
            ..config
        };
        let song_service = Arc::new(SongService::new(
            song_store.clone(),
            tracing::Span::none(),
        ));
        let app = make_app(config, song_service).expect("Failed to build app");

        // Spawn server in background task with graceful shutdown
        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .expect("Server failed");
        });

        let server = Self {
            base_url,
            fixture_ids,
            song_store,
            _temp_db_dir: temp_db_dir,
            _shutdown_tx: Some(shutdown_tx),
        };

        server.wait_for_ready().await;

        server
    }

    /// Waits for the server to become ready by polling `GET /`
    async fn wait_for_ready(&self) {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(100))
            .build()
            .expect("Failed to build reqwest client");

        let start = std::time::Instant::now();
        let timeout = Duration::from_millis(SERVER_READY_TIMEOUT_MS);

        loop {
            if start.elapsed() > timeout {
                panic!(
                    "Server did not become ready within {}ms",
                    SERVER_READY_TIMEOUT_MS
                );
            }

            match client.get(format!("{}/", self.base_url)).send().await {
                Ok(response) if response.status().is_success() => return,
                _ => {
                    tokio::time::sleep(Duration::from_millis(SERVER_READY_POLL_INTERVAL_MS)).await;
                }
            }
        }
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        if let Some(tx) = self._shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
