use std::time::Duration;
use thiserror::Error;
use tracing::{info, warn};

pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("REALTY_API_BASE_URL must start with http:// or https://, got '{0}'")]
    BaseUrlScheme(String),
    #[error("REALTY_HTTP_TIMEOUT_SECS must be a positive whole number, got '{0}'")]
    Timeout(String),
}

/// Application configuration
/// In debug builds: loads .env first, then reads the environment
/// In release builds: environment only
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Origin of the listing backend, without trailing slash
    pub api_base_url: String,
    /// Upper bound for every backend request
    pub http_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Config: Dev mode activated - loaded .env file");
            } else {
                info!("Config: No .env file found, using environment only");
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from a variable lookup; unset keys use defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_base_url = match lookup("REALTY_API_BASE_URL") {
            Some(url) => {
                let url = url.trim().trim_end_matches('/').to_string();
                if !(url.starts_with("http://") || url.starts_with("https://")) {
                    return Err(ConfigError::BaseUrlScheme(url));
                }
                url
            }
            None => DEFAULT_API_BASE_URL.to_string(),
        };

        let http_timeout = match lookup("REALTY_HTTP_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::Timeout(raw)),
            },
            None => DEFAULT_HTTP_TIMEOUT,
        };

        if api_base_url != DEFAULT_API_BASE_URL {
            warn!("Config: Using non-default backend {}", api_base_url);
        }
        info!(
            "Config: backend={} timeout={}s",
            api_base_url,
            http_timeout.as_secs()
        );

        Ok(Self {
            api_base_url,
            http_timeout,
        })
    }
}
