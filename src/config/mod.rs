mod file_config;

pub use file_config::FileConfig;

use crate::server::config::DEFAULT_MAX_PAGE_SIZE;
use crate::server::{RequestsLoggingLevel, ServerConfig};
use crate::song_store::{DEFAULT_PAGE_SIZE, DEFAULT_READ_POOL_SIZE};
use anyhow::{bail, Result};
use clap::ValueEnum;
use std::path::PathBuf;

pub const SONGS_DB_FILE_NAME: &str = "songs.db";

/// CLI arguments that can be used for config resolution.
/// This struct mirrors the CLI arguments that can be overridden by TOML config.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    pub db_dir: Option<PathBuf>,
    pub bind_address: String,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub db_dir: PathBuf,
    pub bind_address: String,
    pub port: u16,
    pub metrics_port: u16,
    pub logging_level: RequestsLoggingLevel,
    pub read_pool_size: usize,
    pub default_page_size: i64,
    pub max_page_size: i64,
    pub cors_allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Resolve configuration from CLI arguments and optional TOML file config.
    /// TOML values override CLI values where present.
    pub fn resolve(cli: &CliConfig, file_config: Option<FileConfig>) -> Result<Self> {
        let file = file_config.unwrap_or_default();

        let db_dir = file
            .db_dir
            .map(PathBuf::from)
            .or_else(|| cli.db_dir.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("db_dir must be specified via --db-dir or in config file")
            })?;

        if !db_dir.exists() {
            bail!("Database directory does not exist: {:?}", db_dir);
        }
        if !db_dir.is_dir() {
            bail!("db_dir is not a directory: {:?}", db_dir);
        }

        let bind_address = file
            .bind_address
            .unwrap_or_else(|| cli.bind_address.clone());
        let port = file.port.unwrap_or(cli.port);
        let metrics_port = file.metrics_port.unwrap_or(cli.metrics_port);
        if port == metrics_port {
            bail!("port and metrics_port must differ (both are {})", port);
        }

        let logging_level = file
            .logging_level
            .and_then(|s| parse_logging_level(&s))
            .unwrap_or_else(|| cli.logging_level.clone());

        let read_pool_size = file.read_pool_size.unwrap_or(DEFAULT_READ_POOL_SIZE);
        if read_pool_size == 0 {
            bail!("read_pool_size must be at least 1");
        }

        let default_page_size = file.default_page_size.unwrap_or(DEFAULT_PAGE_SIZE);
        let max_page_size = file.max_page_size.unwrap_or(DEFAULT_MAX_PAGE_SIZE);
        if default_page_size < 1 {
            bail!("default_page_size must be at least 1, got {}", default_page_size);
        }
        if max_page_size < default_page_size {
            bail!(
                "max_page_size ({}) must not be smaller than default_page_size ({})",
                max_page_size,
                default_page_size
            );
        }

        Ok(Self {
            db_dir,
            bind_address,
            port,
            metrics_port,
            logging_level,
            read_pool_size,
            default_page_size,
            max_page_size,
            cors_allowed_origins: file.cors_allowed_origins.unwrap_or_default(),
        })
    }

    pub fn songs_db_path(&self) -> PathBuf {
        self.db_dir.join(SONGS_DB_FILE_NAME)
    }

    pub fn server_config(&self) -> ServerConfig {
        ServerConfig {
            requests_logging_level: self.logging_level.clone(),
            bind_address: self.bind_address.clone(),
            port: self.port,
            metrics_port: self.metrics_port,
            default_page_size: self.default_page_size,
            max_page_size: self.max_page_size,
            cors_allowed_origins: self.cors_allowed_origins.clone(),
        }
    }
}

/// Parses a logging level string into RequestsLoggingLevel.
/// Uses clap's ValueEnum trait for parsing.
fn parse_logging_level(s: &str) -> Option<RequestsLoggingLevel> {
    RequestsLoggingLevel::from_str(s, true).ok()
}
