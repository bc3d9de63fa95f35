//! Pure override resolution.
//!
//! Given the registry and a fetched override snapshot, computes the URL
//! to display per asset id. Total over every documented input: missing
//! snapshot, empty snapshot, and unmatched paths all fall back to the
//! built-in URL.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use rustc_hash::FxHashMap;

use super::OverrideRecord;
use crate::registry::AssetEntry;

/// Resolved URL per asset id.
pub type ResolvedMap = FxHashMap<&'static str, String>;

/// Query-value encode set: everything except the characters
/// `encodeURIComponent` leaves alone, so stamps produced here match the
/// cache keys the site's pages already carry.
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Append a cache-bust marker derived from the record's `updated_at`.
///
/// The stamp is not validated, only encoded; presence is the contract.
fn cache_busted(url: &str, stamp: &str) -> String {
    let sep = if url.contains('?') { '&' } else { '?' };
    format!("{url}{sep}v={}", utf8_percent_encode(stamp, QUERY_VALUE))
}

/// URL to display for one asset.
///
/// `overrides` is `None` while the snapshot has not loaded; the built-in
/// URL comes back unmodified. With a snapshot, the first record whose
/// `original_path` equals the entry's `path` wins (duplicate paths in
/// the store resolve deterministically to fetch order).
pub fn resolve_one(entry: &AssetEntry, overrides: Option<&[OverrideRecord]>) -> String {
    let Some(records) = overrides else {
        return entry.built_in_url.to_string();
    };

    let Some(record) = records.iter().find(|r| r.original_path == entry.path) else {
        return entry.built_in_url.to_string();
    };

    match record.updated_at.as_deref() {
        Some(stamp) if !stamp.is_empty() => cache_busted(&record.override_url, stamp),
        _ => record.override_url.clone(),
    }
}

/// Resolve every entry: exactly one URL per input asset id.
pub fn resolve_all(entries: &[AssetEntry], overrides: Option<&[OverrideRecord]>) -> ResolvedMap {
    entries
        .iter()
        .map(|entry| (entry.id, resolve_one(entry, overrides)))
        .collect()
}
