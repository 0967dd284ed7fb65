//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `smartlaunch.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Rule and history storage settings.
    pub storage: StorageConfig,
    /// Static stops dataset settings.
    pub stops: StopsConfig,
    /// Launch-check settings.
    pub launch: LaunchConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// JSON document storage configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding the rule, recent, and saved JSON documents.
    pub data_dir: String,
}

/// Stops dataset configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct StopsConfig {
    /// Path to the stops CSV file.
    pub csv_path: String,
}

/// Launch-check configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    /// Milliseconds the cancelable notice is shown before navigating.
    pub notice_delay_ms: u64,
    /// Simulated device latitude. When absent the locator reports
    /// "unavailable" and launch checks quietly do nothing.
    pub device_lat: Option<f64>,
    /// Simulated device longitude.
    pub device_lon: Option<f64>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `smartlaunch.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if
    /// validation fails after overrides.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("smartlaunch.toml")?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("SMARTLAUNCH_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("SMARTLAUNCH_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("SMARTLAUNCH_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("SMARTLAUNCH_DATA_DIR") {
            self.storage.data_dir = val;
        }
        if let Ok(val) = std::env::var("SMARTLAUNCH_STOPS_CSV") {
            self.stops.csv_path = val;
        }
        if let Ok(val) = std::env::var("SMARTLAUNCH_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.launch.notice_delay_ms == 0 {
            return Err(ConfigError::Validation(
                "notice delay must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: "data".to_string(),
        }
    }
}

impl Default for StopsConfig {
    fn default() -> Self {
        Self {
            csv_path: "data/stops.csv".to_string(),
        }
    }
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            notice_delay_ms: 1100,
            device_lat: None,
            device_lon: None,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "smartlaunchd=info,smartlaunch=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
