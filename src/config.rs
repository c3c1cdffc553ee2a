use crate::constants::{
    DEFAULT_BACKOFF_BASE_MS, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_RATE_LIMIT_BURST,
    DEFAULT_RATE_LIMIT_MAX_REQUESTS, DEFAULT_RATE_LIMIT_PERIOD_SECS, DEFAULT_RATE_LIMIT_RETRIES,
    DEFAULT_TIMEOUT_SECS,
};
use crate::utils::config::{get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Authentication credentials for the FinanceAnalyst Pro API
pub struct Credentials {
    /// API key sent in the X-API-Key header, empty when not configured
    pub api_key: String,
    /// Username for the password grant
    pub username: Option<String>,
    /// Password for the password grant
    pub password: Option<String>,
    /// OAuth2 client id, sent with token grants when present
    pub client_id: Option<String>,
    /// OAuth2 client secret, sent with token grants when present
    pub client_secret: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for the FinanceAnalyst Pro REST API
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size, maximum number of requests that can be made at once
    pub burst_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for request retries
pub struct RetryConfig {
    /// Total number of attempts for a request, including the first one
    pub max_retries: u32,
    /// Base delay in milliseconds for the exponential backoff between attempts
    pub backoff_base_ms: u64,
    /// Number of 429 replays allowed before a call fails as rate limited.
    /// Tracked separately from `max_retries`.
    pub rate_limit_max_retries: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the FinanceAnalyst Pro API client
pub struct Config {
    /// Authentication credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
    /// Retry behavior for failed requests
    pub retry: RetryConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a configuration from the environment.
    ///
    /// Loads `.env` first, then reads `FA_*` variables, falling back to the
    /// documented defaults. A missing API key is allowed; the platform
    /// serves demo data to unauthenticated clients.
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let api_key = get_env_or_default("FA_API_KEY", String::new());
        if api_key.is_empty() {
            warn!("FA_API_KEY not set, requests will run against demo data");
        }

        Config {
            credentials: Credentials {
                api_key,
                username: get_env_or_none("FA_USERNAME"),
                password: get_env_or_none("FA_PASSWORD"),
                client_id: get_env_or_none("FA_CLIENT_ID"),
                client_secret: get_env_or_none("FA_CLIENT_SECRET"),
            },
            rest_api: RestApiConfig {
                base_url: get_env_or_default("FA_REST_BASE_URL", String::from(DEFAULT_BASE_URL)),
                timeout: get_env_or_default("FA_REST_TIMEOUT", DEFAULT_TIMEOUT_SECS),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "FA_RATE_LIMIT_MAX_REQUESTS",
                    DEFAULT_RATE_LIMIT_MAX_REQUESTS,
                ),
                period_seconds: get_env_or_default(
                    "FA_RATE_LIMIT_PERIOD_SECONDS",
                    DEFAULT_RATE_LIMIT_PERIOD_SECS,
                ),
                burst_size: get_env_or_default("FA_RATE_LIMIT_BURST_SIZE", DEFAULT_RATE_LIMIT_BURST),
            },
            retry: RetryConfig {
                max_retries: get_env_or_default("FA_MAX_RETRIES", DEFAULT_MAX_RETRIES),
                backoff_base_ms: get_env_or_default("FA_BACKOFF_BASE_MS", DEFAULT_BACKOFF_BASE_MS),
                rate_limit_max_retries: get_env_or_default(
                    "FA_RATE_LIMIT_MAX_RETRIES",
                    DEFAULT_RATE_LIMIT_RETRIES,
                ),
            },
        }
    }

    /// Creates a configuration with just an API key, everything else at defaults
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        let mut config = Self::new();
        config.credentials.api_key = api_key.into();
        config
    }

    /// Points the configuration at a different API host
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.rest_api.base_url = base_url.into();
        self
    }
}
