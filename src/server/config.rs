use super::RequestsLoggingLevel;
use crate::song_store::DEFAULT_PAGE_SIZE;

pub const DEFAULT_MAX_PAGE_SIZE: i64 = 100;

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub requests_logging_level: RequestsLoggingLevel,
    pub bind_address: String,
    pub port: u16,
    pub metrics_port: u16,
    /// Page size used by `GET /songs` when the request carries no `limit`.
    pub default_page_size: i64,
    /// Larger `limit` values are clamped down to this.
    pub max_page_size: i64,
    /// Allowed CORS origins, an empty list allows any origin.
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        ServerConfig {
            requests_logging_level: RequestsLoggingLevel::Path,
            bind_address: "127.0.0.1".to_string(),
            port: 3001,
            metrics_port: 9091,
            default_page_size: DEFAULT_PAGE_SIZE,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            cors_allowed_origins: Vec::new(),
        }
    }
}
