//! Domain types for the unidir proxy.
//!
//! Two record shapes exist on purpose: `RawUniversity` mirrors whatever the
//! upstream directory returns, while `UniversityRecord` is the stable,
//! normalized entity served to clients. Only the normalizer converts between
//! them; records are never mutated after construction.

use serde::{Deserialize, Serialize};

/// A record as returned by the upstream directory service.
///
/// Field names follow the upstream wire format (snake_case, with the odd
/// hyphenated `state-province`). Sequence fields default to empty when the
/// upstream omits them.
#[derive(Clone, Debug, Deserialize)]
pub struct RawUniversity {
    /// Institution name.
    pub name: String,
    /// Country the institution is located in, upstream casing preserved.
    pub country: String,
    /// ISO 3166-1 alpha-2 country code, when the upstream provides one.
    #[serde(default)]
    pub alpha_two_code: Option<String>,
    /// Registered domains.
    #[serde(default)]
    pub domains: Vec<String>,
    /// Institution web pages.
    #[serde(default)]
    pub web_pages: Vec<String>,
    /// State or province, when known upstream.
    #[serde(default, rename = "state-province")]
    pub state_province: Option<String>,
}

/// The normalized university entity served to clients.
///
/// Immutable once constructed by the normalizer; the cache and the HTTP
/// layer only ever clone it whole. Serializes camelCase, with `stateProvince`
/// rendered as an explicit `null` when absent (never an empty string).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UniversityRecord {
    /// Institution name, non-empty.
    pub name: String,
    /// Country, non-empty, upstream casing preserved.
    pub country: String,
    /// Alpha-2 country code, passed through as given (no validation).
    pub country_code: Option<String>,
    /// Registered domains, possibly empty.
    pub domains: Vec<String>,
    /// Institution web pages, possibly empty.
    pub web_pages: Vec<String>,
    /// State or province; `None` when the upstream has no value.
    pub state_province: Option<String>,
}

/// A lookup result together with its cache provenance.
#[derive(Clone, Debug)]
pub struct Lookup<T> {
    /// The payload served to the caller.
    pub data: T,
    /// True when the payload was served from a fresh cache entry.
    pub from_cache: bool,
}

impl<T> Lookup<T> {
    /// Wraps a payload served from the cache.
    pub fn cached(data: T) -> Self {
        Self { data, from_cache: true }
    }

    /// Wraps a payload freshly fetched from the upstream.
    pub fn fresh(data: T) -> Self {
        Self { data, from_cache: false }
    }
}
