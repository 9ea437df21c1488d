//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file if present).

use murmur_core::entities::{DEFAULT_MAX_COMMENT_LENGTH, DEFAULT_MAX_MURMUR_LENGTH};
use serde::Deserialize;
use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Main application configuration
#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    pub app: AppSettings,
    pub session: SessionConfig,
    pub store: StoreConfig,
    pub limits: LimitsConfig,
}

/// General application settings
#[derive(Debug, Clone, Deserialize)]
pub struct AppSettings {
    #[serde(default = "default_app_name")]
    pub name: String,
    #[serde(default)]
    pub env: Environment,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            env: Environment::default(),
        }
    }
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(ConfigError::InvalidValue("APP_ENV", other.to_string())),
        }
    }
}

/// The connected viewer
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    /// Wallet address the session is bound to
    #[serde(default = "default_viewer_address")]
    pub viewer_address: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            viewer_address: default_viewer_address(),
        }
    }
}

/// Data source settings
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Load the fixture dataset into a fresh store
    #[serde(default = "default_seed")]
    pub seed: bool,
    /// Simulated round-trip delay per store call (milliseconds)
    #[serde(default)]
    pub latency_ms: u64,
    /// Worker id for the entity id generator (0-1023)
    #[serde(default)]
    pub worker_id: u16,
}

impl StoreConfig {
    #[must_use]
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            latency_ms: 0,
            worker_id: 0,
        }
    }
}

/// Content limits
#[derive(Debug, Clone, Deserialize)]
pub struct LimitsConfig {
    #[serde(default = "default_max_murmur_length")]
    pub max_murmur_length: usize,
    #[serde(default = "default_max_comment_length")]
    pub max_comment_length: usize,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_murmur_length: default_max_murmur_length(),
            max_comment_length: default_max_comment_length(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "murmur".to_string()
}

fn default_viewer_address() -> String {
    "0x1234567890abcdef".to_string()
}

fn default_seed() -> bool {
    true
}

fn default_max_murmur_length() -> usize {
    DEFAULT_MAX_MURMUR_LENGTH
}

fn default_max_comment_length() -> usize {
    DEFAULT_MAX_COMMENT_LENGTH
}

/// Parse an optional variable, keeping the default when unset
fn parse_var<T: FromStr>(name: &'static str, default: T) -> Result<T, ConfigError> {
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue(name, raw)),
        Err(_) => Ok(default),
    }
}

/// Booleans accept true/false, 1/0, yes/no
fn parse_bool_var(name: &'static str, default: bool) -> Result<bool, ConfigError> {
    match env::var(name) {
        Ok(raw) => match raw.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" => Ok(true),
            "false" | "0" | "no" => Ok(false),
            _ => Err(ConfigError::InvalidValue(name, raw)),
        },
        Err(_) => Ok(default),
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// Every variable is optional; malformed values are rejected.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let worker_id = parse_var("MURMUR_WORKER_ID", 0u16)?;
        if worker_id >= 1024 {
            return Err(ConfigError::InvalidValue("MURMUR_WORKER_ID", worker_id.to_string()));
        }

        Ok(Self {
            app: AppSettings {
                name: env::var("APP_NAME").unwrap_or_else(|_| default_app_name()),
                env: match env::var("APP_ENV") {
                    Ok(raw) => raw.parse()?,
                    Err(_) => Environment::default(),
                },
            },
            session: SessionConfig {
                viewer_address: env::var("MURMUR_VIEWER_ADDRESS")
                    .unwrap_or_else(|_| default_viewer_address()),
            },
            store: StoreConfig {
                seed: parse_bool_var("MURMUR_SEED", default_seed())?,
                latency_ms: parse_var("MURMUR_LATENCY_MS", 0)?,
                worker_id,
            },
            limits: LimitsConfig {
                max_murmur_length: parse_var(
                    "MURMUR_MAX_MURMUR_LENGTH",
                    default_max_murmur_length(),
                )?,
                max_comment_length: parse_var(
                    "MURMUR_MAX_COMMENT_LENGTH",
                    default_max_comment_length(),
                )?,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
