//! Query service: cache-first orchestration of directory lookups.

use std::time::Duration;

use tracing::{debug, info, instrument};

use unidir_core::constants::{
    COUNTRY_LIST_KEY, DEFAULT_CACHE_TTL_SECS, DEFAULT_UPSTREAM_TIMEOUT_SECS,
    DEFAULT_UPSTREAM_URL, MAX_COUNTRY_LEN,
};
use unidir_core::error::{DirectoryError, Result};
use unidir_core::types::{Lookup, UniversityRecord};

use crate::cache::{CachePayload, CacheStats, QueryCache};
use crate::client::{ClientConfig, DirectoryClient};
use crate::normalize::{distinct_countries, normalize};

/// Lookup layer configuration.
#[derive(Clone, Debug)]
pub struct LookupConfig {
    /// Search endpoint of the upstream directory service.
    pub upstream_url: String,
    /// Timeout applied to each upstream request.
    pub upstream_timeout: Duration,
    /// How long a cache entry counts as fresh.
    pub cache_ttl: Duration,
    /// Whether to cache at all; disabled, every call goes upstream.
    pub enable_cache: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            upstream_url: DEFAULT_UPSTREAM_URL.into(),
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            enable_cache: true,
        }
    }
}

impl LookupConfig {
    /// Creates a config pointed at the given upstream endpoint.
    pub fn with_upstream(upstream_url: impl Into<String>) -> Self {
        Self {
            upstream_url: upstream_url.into(),
            ..Default::default()
        }
    }

    /// Disables caching.
    pub fn no_cache(mut self) -> Self {
        self.enable_cache = false;
        self
    }
}

/// Orchestrates directory lookups: derives the cache key, serves fresh
/// hits, and on miss or staleness fetches from the upstream, normalizes,
/// and records the result.
///
/// Concurrent misses on the same key are not deduplicated: each fetches
/// and writes independently, last write wins. A failed fetch writes
/// nothing, so a prior stale entry stays in place untouched.
pub struct DirectoryService {
    client: DirectoryClient,
    cache: Option<QueryCache>,
    ttl: Duration,
}

impl DirectoryService {
    /// Creates a service with default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(LookupConfig::default())
    }

    /// Creates a service with custom configuration.
    pub fn with_config(config: LookupConfig) -> Result<Self> {
        let client = DirectoryClient::with_config(ClientConfig {
            endpoint: config.upstream_url.clone(),
            timeout: config.upstream_timeout,
        })?;

        let cache = config.enable_cache.then(QueryCache::new);

        Ok(Self {
            client,
            cache,
            ttl: config.cache_ttl,
        })
    }

    /// Looks up universities by country, optionally filtered by name.
    ///
    /// Returns the normalized records together with a flag telling whether
    /// they came from a fresh cache entry.
    #[instrument(skip(self))]
    pub async fn search_universities(
        &self,
        country: &str,
        name: Option<&str>,
    ) -> Result<Lookup<Vec<UniversityRecord>>> {
        validate_country(country)?;

        let key = search_key(country, name);

        if let Some(cache) = &self.cache {
            if let Some((CachePayload::Universities(records), recorded_at)) = cache.get(&key) {
                if recorded_at.elapsed() < self.ttl {
                    debug!(%key, "cache hit");
                    return Ok(Lookup::cached(records));
                }
                debug!(%key, "cache entry stale");
            }
        }

        debug!(%key, "querying upstream");
        let raw = self.client.search(Some(country), name).await?;
        let records: Vec<UniversityRecord> = raw.into_iter().map(normalize).collect();

        if let Some(cache) = &self.cache {
            cache.set(&key, CachePayload::Universities(records.clone()));
        }

        info!(country, count = records.len(), "fetched universities from upstream");
        Ok(Lookup::fresh(records))
    }

    /// Returns the distinct, ascending-sorted list of countries known to
    /// the upstream.
    #[instrument(skip(self))]
    pub async fn list_countries(&self) -> Result<Lookup<Vec<String>>> {
        if let Some(cache) = &self.cache {
            if let Some((CachePayload::Countries(countries), recorded_at)) =
                cache.get(COUNTRY_LIST_KEY)
            {
                if recorded_at.elapsed() < self.ttl {
                    debug!("country list cache hit");
                    return Ok(Lookup::cached(countries));
                }
                debug!("country list cache entry stale");
            }
        }

        debug!("querying upstream for full data set");
        let raw = self.client.search(None, None).await?;
        let countries = distinct_countries(&raw);

        if let Some(cache) = &self.cache {
            cache.set(COUNTRY_LIST_KEY, CachePayload::Countries(countries.clone()));
        }

        info!(count = countries.len(), "fetched country list from upstream");
        Ok(Lookup::fresh(countries))
    }

    /// Removes every cache entry.
    pub fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            cache.clear();
        }
    }

    /// Returns cache entry counts against the configured TTL, or `None`
    /// when caching is disabled.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(|c| c.stats(self.ttl))
    }
}

/// Derives the cache key for a university search.
///
/// Case-insensitive on both halves; an absent name filter participates as
/// the empty string, so "country only" and "country with empty name"
/// collapse to the same key.
fn search_key(country: &str, name: Option<&str>) -> String {
    format!(
        "{}-{}",
        country.to_lowercase(),
        name.unwrap_or_default().to_lowercase()
    )
}

/// Validates the country parameter. The HTTP layer checks presence; this is
/// the source of truth for emptiness and length.
fn validate_country(country: &str) -> Result<()> {
    if country.is_empty() {
        return Err(DirectoryError::InvalidArgument(
            "Country parameter is required".into(),
        ));
    }
    if country.len() > MAX_COUNTRY_LEN {
        return Err(DirectoryError::InvalidArgument(format!(
            "Country parameter exceeds {} characters",
            MAX_COUNTRY_LEN
        )));
    }
    Ok(())
}
