//! Shared constants for the unidir proxy.
//!
//! Defaults mirror the public universities directory service; every one of
//! them can be overridden through configuration.

// ═══════════════════════════════════════════════════════════════════════════════
// UPSTREAM DIRECTORY SERVICE
// ═══════════════════════════════════════════════════════════════════════════════

/// Default search endpoint of the upstream directory service.
pub const DEFAULT_UPSTREAM_URL: &str = "http://universities.hipolabs.com/search";

/// Default timeout applied to every upstream request, in seconds.
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 5;

/// User-Agent header sent with every upstream request.
pub const UPSTREAM_USER_AGENT: &str = concat!("unidir/", env!("CARGO_PKG_VERSION"));

// ═══════════════════════════════════════════════════════════════════════════════
// CACHE POLICY
// ═══════════════════════════════════════════════════════════════════════════════

/// Default time-to-live for cache entries, in seconds (15 minutes).
pub const DEFAULT_CACHE_TTL_SECS: u64 = 15 * 60;

/// Cache key under which the distinct country list is stored.
///
/// Search keys are `"{country}-{name}"`, both halves lowercased, so this
/// sentinel lives in the same keyspace as searches.
pub const COUNTRY_LIST_KEY: &str = "countries-list";

// ═══════════════════════════════════════════════════════════════════════════════
// INPUT VALIDATION
// ═══════════════════════════════════════════════════════════════════════════════

/// Maximum accepted length of the `country` query parameter.
pub const MAX_COUNTRY_LEN: usize = 100;
