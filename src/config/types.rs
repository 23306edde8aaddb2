// Configuration types module
// Every section is filled from config.toml on top of the defaults in `Config::load_from`

use serde::Deserialize;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub data: DataConfig,
    pub logging: LoggingConfig,
    pub performance: PerformanceConfig,
    pub http: HttpConfig,
}

/// Listening address and runtime size
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Tokio worker threads; CPU count when unset
    pub workers: Option<usize>,
}

/// Static data document served on `/data`
#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// JSON file read once at startup
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// One of error, warn, info, debug
    pub level: String,
    /// Emit one line per request
    pub access_log: bool,
    /// `combined`, `common`, `json`, or a pattern of `$variables`
    #[serde(default = "default_access_log_format")]
    pub access_log_format: String,
    /// Stdout when unset
    #[serde(default)]
    pub access_log_file: Option<String>,
    /// Stderr when unset
    #[serde(default)]
    pub error_log_file: Option<String>,
}

#[allow(clippy::missing_const_for_fn)]
fn default_access_log_format() -> String {
    "combined".to_string()
}

/// Connection limits and timeouts (seconds)
#[derive(Debug, Deserialize, Clone)]
pub struct PerformanceConfig {
    /// 0 disables HTTP keep-alive
    pub keep_alive_timeout: u64,
    pub read_timeout: u64,
    pub write_timeout: u64,
    /// Concurrent connection cap; unlimited when unset
    pub max_connections: Option<u64>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    /// Value of the `Server` response header
    pub server_name: String,
    /// Largest accepted request body, in bytes
    pub max_body_size: u64,
}
