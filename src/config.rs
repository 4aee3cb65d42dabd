use crate::api::{normalize_base_url, ApiError};
use dioxus::prelude::use_context;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_NAVIGATE_DELAY_MS: u64 = 1500;
const DEFAULT_MESSAGE_TIMEOUT_MS: u64 = 3000;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidNumber { key: &'static str, value: String },
    #[error(transparent)]
    ApiUrl(#[from] ApiError),
}

/// Application configuration
/// In debug builds a .env file is loaded into the environment first
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Backend origin, without trailing slash
    pub api_url: String,
    /// How long the "updated" message stays before returning to the list
    pub navigate_delay: Duration,
    /// How long transient form messages stay visible
    pub message_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            navigate_delay: Duration::from_millis(DEFAULT_NAVIGATE_DELAY_MS),
            message_timeout: Duration::from_millis(DEFAULT_MESSAGE_TIMEOUT_MS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Dev mode activated - loaded .env file");
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from a key lookup, falling back to defaults for
    /// anything unset
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_url = match lookup("USER_ADMIN_API_URL") {
            Some(url) => normalize_base_url(&url)?,
            None => DEFAULT_API_URL.to_string(),
        };

        let navigate_delay = Duration::from_millis(parse_number(
            &lookup,
            "USER_ADMIN_NAVIGATE_DELAY_MS",
            DEFAULT_NAVIGATE_DELAY_MS,
        )?);
        let message_timeout = Duration::from_millis(parse_number(
            &lookup,
            "USER_ADMIN_MESSAGE_TIMEOUT_MS",
            DEFAULT_MESSAGE_TIMEOUT_MS,
        )?);
        let request_timeout = Duration::from_secs(parse_number(
            &lookup,
            "USER_ADMIN_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?);

        info!("Config: users backend at {}", api_url);

        Ok(Self {
            api_url,
            navigate_delay,
            message_timeout,
            request_timeout,
        })
    }
}

fn parse_number<F>(lookup: &F, key: &'static str, default: u64) -> Result<u64, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidNumber { key, value }),
        None => Ok(default),
    }
}

/// Hook to access the configuration from components
pub fn use_config() -> Config {
    use_context::<crate::AppContext>().config
}
