//! App state: query service and configuration.

use std::time::Duration;

use unidir_core::constants::{
    DEFAULT_CACHE_TTL_SECS, DEFAULT_UPSTREAM_TIMEOUT_SECS, DEFAULT_UPSTREAM_URL,
};
use unidir_core::error::Result;
use unidir_lookup::{DirectoryService, LookupConfig};

/// Server configuration, sourced from the environment in deployments.
#[derive(Clone, Debug)]
pub struct ApiConfig {
    /// Upstream directory search endpoint.
    pub upstream_url: String,
    /// Per-request upstream timeout in seconds.
    pub upstream_timeout_secs: u64,
    /// Cache entry time-to-live in seconds.
    pub cache_ttl_secs: u64,
    /// Whether query results are cached at all.
    pub enable_cache: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.into(),
            upstream_timeout_secs: DEFAULT_UPSTREAM_TIMEOUT_SECS,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
            enable_cache: true,
        }
    }
}

impl ApiConfig {
    /// Builds the configuration from environment variables, falling back to
    /// defaults. Reads a `.env` file when present.
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        Self {
            upstream_url: std::env::var("UPSTREAM_URL")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_URL.into()),
            upstream_timeout_secs: std::env::var("UPSTREAM_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            cache_ttl_secs: std::env::var("CACHE_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_CACHE_TTL_SECS),
            enable_cache: std::env::var("ENABLE_CACHE")
                .map(|v| v != "false" && v != "0")
                .unwrap_or(true),
        }
    }
}

/// Shared state handed to every request handler.
pub struct AppState {
    /// The configuration this server was built with.
    pub config: ApiConfig,
    /// The query service behind all lookup endpoints.
    pub directory: DirectoryService,
}

impl AppState {
    /// Builds the query service from the configuration.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let lookup = LookupConfig {
            upstream_url: config.upstream_url.clone(),
            upstream_timeout: Duration::from_secs(config.upstream_timeout_secs),
            cache_ttl: Duration::from_secs(config.cache_ttl_secs),
            enable_cache: config.enable_cache,
        };

        Ok(Self {
            config,
            directory: DirectoryService::with_config(lookup)?,
        })
    }
}
