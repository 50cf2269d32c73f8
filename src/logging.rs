//! # Structured Logging Module
//!
//! Environment-aware structured logging for smoke runs. Console output is
//! either human-readable or JSON lines, so CI can ingest run logs.

use std::sync::OnceLock;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

static LOGGER_INITIALIZED: OnceLock<()> = OnceLock::new();

/// Output format for log lines
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// Parse a format name, falling back to pretty output
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Initialize logging once per process
///
/// `RUST_LOG` wins when set. Otherwise the level comes from the verbosity
/// count, and with no `-v` flags from the environment (`TRADE_SMOKE_ENV`)
/// or the configured default.
pub fn init_logging(verbosity: u8, format: LogFormat, default_level: &str) {
    LOGGER_INITIALIZED.get_or_init(|| {
        let level = level_for(verbosity, &get_environment(), default_level);
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.clone()));

        let layer = match format {
            LogFormat::Pretty => fmt::layer()
                .with_target(false)
                .with_level(true)
                .with_ansi(true)
                .boxed(),
            LogFormat::Json => fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_ansi(false)
                .json()
                .boxed(),
        };

        // A subscriber may already be installed by a test harness
        if tracing_subscriber::registry()
            .with(layer.with_filter(filter))
            .try_init()
            .is_err()
        {
            tracing::debug!("Global tracing subscriber already initialized");
        }

        tracing::debug!(level = %level, format = ?format, "Logging initialized");
    });
}

/// Get current environment from environment variables
fn get_environment() -> String {
    std::env::var("TRADE_SMOKE_ENV")
        .or_else(|_| std::env::var("APP_ENV"))
        .unwrap_or_else(|_| "development".to_string())
}

/// Resolve the log level from verbosity, environment, and configured default
fn level_for(verbosity: u8, environment: &str, default_level: &str) -> String {
    match verbosity {
        0 => match environment {
            "test" | "ci" => "info".to_string(),
            _ => default_level.to_string(),
        },
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}
