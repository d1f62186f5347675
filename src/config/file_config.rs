use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Optional TOML configuration. Every value present here overrides the CLI.
#[derive(Debug, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub db_dir: Option<String>,
    pub bind_address: Option<String>,
    pub port: Option<u16>,
    pub metrics_port: Option<u16>,
    pub logging_level: Option<String>,

    // Only configurable through the file
    pub read_pool_size: Option<usize>,
    pub default_page_size: Option<i64>,
    pub max_page_size: Option<i64>,
    pub cors_allowed_origins: Option<Vec<String>>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse config file: {:?}", path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn parses_full_file() {
        let config: FileConfig = toml::from_str(
            r#"
            db_dir = "/data"
            bind_address = "0.0.0.0"
            port = 8080
            metrics_port = 9100
            logging_level = "headers"
            read_pool_size = 8
            default_page_size = 20
            max_page_size = 50
            cors_allowed_origins = ["http://localhost:5173"]
            "#,
        )
        .unwrap();

        assert_eq!(config.db_dir.as_deref(), Some("/data"));
        assert_eq!(config.bind_address.as_deref(), Some("0.0.0.0"));
        assert_eq!(config.port, Some(8080));
        assert_eq!(config.metrics_port, Some(9100));
        assert_eq!(config.logging_level.as_deref(), Some("headers"));
        assert_eq!(config.read_pool_size, Some(8));
        assert_eq!(config.default_page_size, Some(20));
        assert_eq!(config.max_page_size, Some(50));
        assert_eq!(
            config.cors_allowed_origins,
            Some(vec!["http://localhost:5173".to_string()])
        );
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let config: FileConfig = toml::from_str("").unwrap();
        assert!(config.db_dir.is_none());
        assert!(config.port.is_none());
        assert!(config.cors_allowed_origins.is_none());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(toml::from_str::<FileConfig>("prot = 3000").is_err());
    }

    #[test]
    fn load_reports_missing_file() {
        let err = FileConfig::load(Path::new("/nonexistent/songs.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn load_reads_file_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 4242").unwrap();

        let config = FileConfig::load(file.path()).unwrap();
        assert_eq!(config.port, Some(4242));
    }
}
