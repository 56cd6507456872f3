//! Configuration module for environment variable parsing.
//!
//! Everything is read once at startup and passed to the handlers through
//! `AppState`; nothing here is consulted again while serving.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use tracing::warn;

/// Default listening port.
pub const DEFAULT_PORT: u16 = 8080;

/// Default location of the code-to-webhook mapping file.
pub const DEFAULT_MAP_PATH: &str = "webhook_map.json";

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Port for the web server to listen on
    pub port: u16,

    /// Path of the JSON mapping file, reloaded on every request
    pub webhook_map_path: PathBuf,

    /// Optional timeout applied to each outbound delivery
    pub delivery_timeout: Option<Duration>,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Config {
            port: parse_port(env::var("PORT").ok()),
            webhook_map_path: parse_map_path(env::var("WEBHOOK_MAP_PATH").ok()),
            delivery_timeout: parse_timeout(env::var("DELIVERY_TIMEOUT_MS").ok()),
        }
    }

    /// Delivery timeout in whole milliseconds, for logging.
    pub fn delivery_timeout_ms(&self) -> Option<u64> {
        self.delivery_timeout
            .and_then(|t| u64::try_from(t.as_millis()).ok())
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            port: DEFAULT_PORT,
            webhook_map_path: PathBuf::from(DEFAULT_MAP_PATH),
            delivery_timeout: None,
        }
    }
}

/// Parse `PORT`, falling back to 8080 when unset, empty or invalid.
fn parse_port(raw: Option<String>) -> u16 {
    let raw = match raw {
        Some(v) if !v.trim().is_empty() => v,
        _ => return DEFAULT_PORT,
    };

    match raw.trim().parse() {
        Ok(port) => port,
        Err(_) => {
            warn!(env_var = "PORT", value = %raw, "Invalid port, using default");
            DEFAULT_PORT
        }
    }
}

fn parse_map_path(raw: Option<String>) -> PathBuf {
    raw.filter(|v| !v.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_MAP_PATH))
}

/// Parse a millisecond timeout. Zero means no timeout.
fn parse_timeout(raw: Option<String>) -> Option<Duration> {
    let raw = raw.filter(|v| !v.trim().is_empty())?;

    match raw.trim().parse::<u64>() {
        Ok(0) => None,
        Ok(ms) => Some(Duration::from_millis(ms)),
        Err(_) => {
            warn!(env_var = "DELIVERY_TIMEOUT_MS", value = %raw, "Invalid timeout, ignoring");
            None
        }
    }
}
