//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `MINUTEMART_API_URL` - Base URL of the backend REST API
//!   (default: `http://localhost:5000/api`)
//! - `MINUTEMART_REQUEST_TIMEOUT_SECS` - Per-request timeout in seconds
//!   (default: 30)

use thiserror::Error;
use url::Url;

const DEFAULT_API_URL: &str = "http://localhost:5000/api";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// MCP server configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend REST API, including the `/api` prefix
    pub api_base_url: String,
    /// Per-request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let api_base_url = get_env_or_default("MINUTEMART_API_URL", DEFAULT_API_URL);
        Url::parse(&api_base_url).map_err(|e| {
            ConfigError::InvalidEnvVar("MINUTEMART_API_URL".to_string(), e.to_string())
        })?;

        let request_timeout_secs = match std::env::var("MINUTEMART_REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar(
                    "MINUTEMART_REQUEST_TIMEOUT_SECS".to_string(),
                    e.to_string(),
                )
            })?,
            Err(_) => DEFAULT_REQUEST_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base_url,
            request_timeout_secs,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
