//! # Smoke Test Configuration
//!
//! Configuration for the target web application and smoke run behavior.
//! Supports environment variables, config files, and command-line overrides.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::constants::defaults;
use crate::error::{ClientError, ClientResult};

/// Smoke run configuration
///
/// # Examples
///
/// ```rust
/// use trade_smoke::config::SmokeConfig;
///
/// let config = SmokeConfig::default();
/// assert_eq!(config.base_url, "http://localhost:3000");
/// assert_eq!(config.timeout_ms, 30000);
/// assert!(config.auth_token.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmokeConfig {
    /// Base URL of the running web application
    pub base_url: String,
    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
    /// A known-valid bearer token; enables the authenticated half of the token check
    pub auth_token: Option<String>,
    /// Token sent where the API is only expected to see *some* bearer credential
    pub placeholder_token: String,
    /// How long `health` waits for the server to answer
    pub health_timeout_seconds: u64,
    /// Delay between readiness probes
    pub health_retry_interval_seconds: u64,
    /// Skip the readiness wait before a run
    pub skip_health_check: bool,
    /// Logging settings
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Output format (pretty, json)
    pub format: String,
    /// Default level when neither RUST_LOG nor -v is given
    pub level: String,
}

impl Default for SmokeConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::BASE_URL.to_string(),
            timeout_ms: defaults::TIMEOUT_MS,
            auth_token: None,
            placeholder_token: defaults::PLACEHOLDER_TOKEN.to_string(),
            health_timeout_seconds: defaults::HEALTH_TIMEOUT_SECONDS,
            health_retry_interval_seconds: defaults::HEALTH_RETRY_INTERVAL_SECONDS,
            skip_health_check: false,
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            format: "pretty".to_string(),
            level: "warn".to_string(),
        }
    }
}

impl SmokeConfig {
    /// Load configuration from the discovered config file and environment
    ///
    /// Precedence (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file (./trade-smoke.toml, ~/.trade-smoke/config.toml, ...)
    /// 3. Default values
    ///
    /// A discovered file that cannot be read or parsed is an error.
    pub fn load() -> ClientResult<Self> {
        Self::load_discovered(Self::find_config_file())
    }

    fn load_discovered(config_path: Option<PathBuf>) -> ClientResult<Self> {
        let mut config = match config_path {
            Some(config_path) => {
                debug!("Loading config from: {}", config_path.display());
                Self::load_from_file(&config_path)?
            }
            None => Self::default(),
        };

        config.apply_env_overrides();
        config.validate()?;

        debug!(config = ?config.redacted(), "Loaded smoke configuration");
        Ok(config)
    }

    /// Load configuration from a specific file, then apply environment overrides
    pub fn load_with_file(path: &Path) -> ClientResult<Self> {
        let mut config = Self::load_from_file(path)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from specific file
    pub fn load_from_file(path: &Path) -> ClientResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            ClientError::config_error(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ClientError::config_error(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Ok(config)
    }

    /// Find the config file in standard locations
    fn find_config_file() -> Option<PathBuf> {
        let mut possible_paths = vec![
            PathBuf::from("./trade-smoke.toml"),
            PathBuf::from("./config/trade-smoke.toml"),
        ];
        if let Some(home) = dirs::home_dir() {
            possible_paths.push(home.join(".trade-smoke").join("config.toml"));
        }
        if let Some(config_dir) = dirs::config_dir() {
            possible_paths.push(config_dir.join("trade-smoke").join("config.toml"));
        }

        possible_paths
            .into_iter()
            .find(|path| path.exists() && path.is_file())
    }

    /// Apply `TRADE_SMOKE_*` environment variable overrides
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|key| std::env::var(key).ok());
    }

    /// Apply overrides from an arbitrary key lookup
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("TRADE_SMOKE_BASE_URL") {
            self.base_url = url;
        }
        if let Some(timeout_ms) = lookup("TRADE_SMOKE_TIMEOUT_MS").and_then(|v| v.parse().ok()) {
            self.timeout_ms = timeout_ms;
        }
        if let Some(token) = lookup("TRADE_SMOKE_AUTH_TOKEN") {
            self.auth_token = if token.trim().is_empty() {
                None
            } else {
                Some(token)
            };
        }
        if let Some(token) = lookup("TRADE_SMOKE_PLACEHOLDER_TOKEN") {
            self.placeholder_token = token;
        }
        if let Some(skip) = lookup("TRADE_SMOKE_SKIP_HEALTH_CHECK") {
            self.skip_health_check = skip == "true" || skip == "1";
        }
        if let Some(secs) = lookup("TRADE_SMOKE_HEALTH_TIMEOUT").and_then(|v| v.parse().ok()) {
            self.health_timeout_seconds = secs;
        }
        if let Some(secs) =
            lookup("TRADE_SMOKE_HEALTH_RETRY_INTERVAL").and_then(|v| v.parse().ok())
        {
            self.health_retry_interval_seconds = secs;
        }
        if let Some(format) = lookup("TRADE_SMOKE_LOG_FORMAT") {
            self.log.format = format;
        }
    }

    /// Reject configurations that cannot produce a working client
    pub fn validate(&self) -> ClientResult<()> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ClientError::config_error(format!(
                "base_url must start with http:// or https://, got '{}'",
                self.base_url
            )));
        }
        if self.timeout_ms == 0 {
            return Err(ClientError::config_error("timeout_ms must be positive"));
        }
        Ok(())
    }

    /// Copy of the configuration that is safe to print
    #[must_use]
    pub fn redacted(&self) -> Self {
        let mut copy = self.clone();
        if copy.auth_token.is_some() {
            copy.auth_token = Some("<redacted>".to_string());
        }
        copy
    }

    /// Save configuration to file
    pub fn save_to_file(&self, path: &Path) -> ClientResult<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                ClientError::config_error(format!("Failed to create config directory: {}", e))
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ClientError::config_error(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, content).map_err(|e| {
            ClientError::config_error(format!("Failed to write config file: {}", e))
        })?;

        Ok(())
    }

    /// Get default config file path
    pub fn default_config_path() -> ClientResult<PathBuf> {
        let home_dir = dirs::home_dir()
            .ok_or_else(|| ClientError::config_error("Could not determine home directory"))?;

        Ok(home_dir.join(".trade-smoke").join("config.toml"))
    }
}
