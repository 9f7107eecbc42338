use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub security: SecurityConfig,
    #[serde(default)]
    pub session: SessionConfig,
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    pub storage: StorageConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SecurityConfig {
    /// Shared admin password. Empty means login is disabled and every
    /// login attempt answers 500 until it is configured.
    #[serde(default)]
    pub admin_password: String,

    #[serde(default)]
    pub cors_origins: Vec<String>,

    /// Set the Secure attribute on the session cookie (requires HTTPS).
    #[serde(default)]
    pub secure_cookies: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,

    /// Session lifetime in seconds (default: 43200 = 12 hours)
    #[serde(default = "default_session_max_age")]
    pub max_age_secs: i64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: default_cookie_name(),
            max_age_secs: default_session_max_age(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RateLimitConfig {
    /// Fixed window length in seconds (default: 900 = 15 minutes)
    #[serde(default = "default_rate_limit_window")]
    pub window_secs: u64,

    /// Failed login attempts allowed per window before lockout
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            window_secs: default_rate_limit_window(),
            max_attempts: default_max_attempts(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Read-only snapshot served (and migrated) when no persisted
    /// collection exists yet. Empty disables the fallback.
    #[serde(default)]
    pub bootstrap_file: String,
}

impl StorageConfig {
    pub fn bootstrap_path(&self) -> Option<PathBuf> {
        if self.bootstrap_file.is_empty() {
            None
        } else {
            Some(PathBuf::from(&self.bootstrap_file))
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CatalogConfig {
    /// Postings older than this many days get archived by the sweep.
    #[serde(default = "default_stale_after_days")]
    pub stale_after_days: u32,

    /// Run the daily background sweep in addition to the manual endpoint.
    #[serde(default = "default_sweep_enabled")]
    pub sweep_enabled: bool,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            stale_after_days: default_stale_after_days(),
            sweep_enabled: default_sweep_enabled(),
        }
    }
}

// Default value functions
fn default_host() -> String {
    "0.0.0.0".to_string()
}
fn default_port() -> u16 {
    8080
}
fn default_request_timeout() -> u64 {
    30
}
fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "json".to_string()
}
fn default_cookie_name() -> String {
    "erp21_admin".to_string()
}
fn default_session_max_age() -> i64 {
    43200
}
fn default_rate_limit_window() -> u64 {
    900
}
fn default_max_attempts() -> u32 {
    5
}
fn default_data_dir() -> String {
    "data".to_string()
}
fn default_stale_after_days() -> u32 {
    14
}
fn default_sweep_enabled() -> bool {
    true
}

/// Configuration validation error
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
}

impl Config {
    /// Load configuration from files and environment variables.
    ///
    /// Loading order (later sources override earlier):
    /// 1. config/default.toml - base configuration with defaults
    /// 2. config/local.toml - local overrides (optional, not in git)
    /// 3. Environment variables with ERP__ prefix
    pub fn load() -> Result<Self, config::ConfigError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            .add_source(config::File::with_name("config/local").required(false))
            .add_source(config::Environment::with_prefix("ERP").separator("__"))
            .build()?;

        let cfg: Self = config.try_deserialize()?;
        cfg.validate()
            .map_err(|e| config::ConfigError::Message(e.to_string()))?;
        Ok(cfg)
    }

    /// Load configuration for testing with custom overrides.
    ///
    /// This method creates a config entirely from defaults and overrides,
    /// without relying on config files (which may not be accessible during tests).
    #[cfg(test)]
    pub fn load_for_test(overrides: &[(&str, &str)]) -> Result<Self, config::ConfigError> {
        // Embed defaults directly to avoid file system dependency in tests
        let defaults = r#"
            [server]
            host = "0.0.0.0"
            port = 8080
            request_timeout_secs = 30

            [logging]
            level = "info"
            format = "json"

            [security]
            admin_password = "test-password"
            cors_origins = []
            secure_cookies = false

            [session]
            cookie_name = "erp21_admin"
            max_age_secs = 43200

            [rate_limit]
            window_secs = 900
            max_attempts = 5

            [storage]
            data_dir = "data"
            bootstrap_file = ""

            [catalog]
            stale_after_days = 14
            sweep_enabled = true
        "#;

        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(defaults, config::FileFormat::Toml));

        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }

        let cfg: Self = builder.build()?.try_deserialize()?;
        // Skip validation in tests to allow partial configs
        Ok(cfg)
    }

    /// Validate configuration values.
    fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.server.port == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "Server port cannot be 0".to_string(),
            ));
        }

        if self.rate_limit.max_attempts == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "rate_limit.max_attempts must be at least 1".to_string(),
            ));
        }

        if self.catalog.stale_after_days == 0 {
            return Err(ConfigValidationError::InvalidValue(
                "catalog.stale_after_days must be at least 1".to_string(),
            ));
        }

        if self.session.max_age_secs <= 0 {
            return Err(ConfigValidationError::InvalidValue(
                "session.max_age_secs must be positive".to_string(),
            ));
        }

        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigValidationError> {
        format!("{}:{}", self.server.host, self.server.port)
            .parse()
            .map_err(|_| {
                ConfigValidationError::InvalidValue(format!(
                    "Invalid listen address {}:{}",
                    self.server.host, self.server.port
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_load_with_defaults() {
        let config = Config::load_for_test(&[]).expect("Failed to load config");

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.session.cookie_name, "erp21_admin");
        assert_eq!(config.session.max_age_secs, 43200);
        assert_eq!(config.rate_limit.window_secs, 900);
        assert_eq!(config.rate_limit.max_attempts, 5);
        assert_eq!(config.catalog.stale_after_days, 14);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_config_override() {
        let config = Config::load_for_test(&[
            ("server.port", "9000"),
            ("logging.level", "debug"),
            ("catalog.stale_after_days", "30"),
        ])
        .expect("Failed to load config");

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.logging.level, "debug");
        assert_eq!(config.catalog.stale_after_days, 30);
    }

    #[test]
    fn test_config_validation_zero_attempts() {
        let config =
            Config::load_for_test(&[("rate_limit.max_attempts", "0")]).expect("Failed to load");
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("max_attempts"));
    }

    #[test]
    fn test_config_validation_zero_stale_days() {
        let config =
            Config::load_for_test(&[("catalog.stale_after_days", "0")]).expect("Failed to load");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bootstrap_path_empty_is_none() {
        let config = Config::load_for_test(&[]).expect("Failed to load config");
        assert!(config.storage.bootstrap_path().is_none());

        let config = Config::load_for_test(&[("storage.bootstrap_file", "data/jobs.json")])
            .expect("Failed to load config");
        assert_eq!(
            config.storage.bootstrap_path(),
            Some(PathBuf::from("data/jobs.json"))
        );
    }

    #[test]
    fn test_socket_addr() {
        let config = Config::load_for_test(&[("server.host", "127.0.0.1"), ("server.port", "3000")])
            .expect("Failed to load config");

        let addr = config.socket_addr().unwrap();
        assert_eq!(addr.to_string(), "127.0.0.1:3000");
    }
}
