// Configuration module entry point
// Loads the server configuration and holds the immutable application state

mod state;
mod types;

use std::net::SocketAddr;

// Re-export public types
pub use state::AppState;
pub use types::{Config, DataConfig, HttpConfig, LoggingConfig, PerformanceConfig, ServerConfig};

/// Default config file name (without extension)
pub const DEFAULT_CONFIG_PATH: &str = "config";

impl Config {
    /// Load configuration from specified file path (without extension)
    /// The file is optional; every key has a built-in default
    pub fn load_from(config_path: &str) -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(config_path).required(false))
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 3000)?
            .set_default("data.path", "datasample.json")?
            .set_default("logging.level", "info")?
            .set_default("logging.access_log", true)?
            .set_default("performance.keep_alive_timeout", 75)?
            .set_default("performance.read_timeout", 30)?
            .set_default("performance.write_timeout", 30)?
            .set_default("http.server_name", "fixture-api")?
            .set_default("http.max_body_size", 102_400)? // 100KB
            .build()?;

        settings.try_deserialize()
    }

    pub fn get_socket_addr(&self) -> Result<SocketAddr, String> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|e| format!("Invalid address: {e}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_file() {
        let cfg = Config::load_from("definitely-missing-config-file").unwrap();
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.workers, None);
        assert_eq!(cfg.data.path, "datasample.json");
        assert_eq!(cfg.logging.level, "info");
        assert!(cfg.logging.access_log);
        assert_eq!(cfg.logging.access_log_format, "combined");
        assert_eq!(cfg.performance.read_timeout, 30);
        assert_eq!(cfg.http.max_body_size, 102_400);
        assert_eq!(
            cfg.get_socket_addr().unwrap(),
            "0.0.0.0:3000".parse::<SocketAddr>().unwrap()
        );
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nport = 4100\nworkers = 2\n\n[data]\npath = \"fixtures/catalog.json\"\n\n[logging]\naccess_log_format = \"json\""
        )
        .unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let cfg = Config::load_from(&path).unwrap();
        assert_eq!(cfg.server.port, 4100);
        assert_eq!(cfg.server.workers, Some(2));
        assert_eq!(cfg.data.path, "fixtures/catalog.json");
        assert_eq!(cfg.logging.access_log_format, "json");
        // Untouched keys keep their defaults
        assert_eq!(cfg.server.host, "0.0.0.0");
    }

    #[test]
    fn test_invalid_host_rejected() {
        let mut cfg = Config::load_from("definitely-missing-config-file").unwrap();
        cfg.server.host = "not a host".to_string();
        assert!(cfg.get_socket_addr().is_err());
    }
}
