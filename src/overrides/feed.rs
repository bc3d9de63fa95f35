//! Cached override snapshot with TTL and single-flight refresh.
//!
//! A page renders dozens of registry-backed images at once; they all
//! read one shared snapshot instead of issuing per-image fetches. The
//! snapshot is replaced wholesale through an `ArcSwap`, so a reader
//! never observes a half-updated list.

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwap;
use tokio::sync::Mutex;

use super::{OverrideSource, OverrideState};
use crate::{debug, log};

/// Default snapshot lifetime.
pub const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Shared override snapshot for all asset resolutions.
///
/// Invariants:
/// - `state()` never blocks and never returns a partial snapshot
/// - once `Ready`, the feed never reverts to `Loading`; a failed
///   refetch keeps the last-known records (stale beats blank)
pub struct OverrideFeed<S> {
    source: S,
    ttl: Duration,
    state: ArcSwap<OverrideState>,
    /// Serializes fetch attempts and carries the last attempt stamp.
    gate: Mutex<Option<Instant>>,
}

impl<S: OverrideSource> OverrideFeed<S> {
    /// Feed with the default 5-minute TTL.
    pub fn new(source: S) -> Self {
        Self::with_ttl(source, DEFAULT_TTL)
    }

    pub fn with_ttl(source: S, ttl: Duration) -> Self {
        Self {
            source,
            ttl,
            state: ArcSwap::from_pointee(OverrideState::Loading),
            gate: Mutex::new(None),
        }
    }

    /// Current snapshot. Lock-free; safe to call from a render path.
    pub fn state(&self) -> Arc<OverrideState> {
        self.state.load_full()
    }

    /// Fetch the snapshot unless the cached one is still within its TTL.
    ///
    /// Concurrent callers share one in-flight fetch: the gate serializes
    /// attempts, and late arrivals observe a fresh stamp and return the
    /// cached snapshot without touching the source.
    pub async fn refresh(&self) -> Arc<OverrideState> {
        let mut last_attempt = self.gate.lock().await;

        if let Some(at) = *last_attempt
            && at.elapsed() < self.ttl
        {
            return self.state.load_full();
        }

        match self.source.fetch_overrides().await {
            Ok(records) => {
                debug!("fetch"; "override snapshot: {} records", records.len());
                self.state
                    .store(Arc::new(OverrideState::Ready(records.into())));
            }
            Err(err) => {
                log!("fetch"; "override fetch failed, serving last known assets: {err}");
                if !self.state.load().is_ready() {
                    self.state.store(Arc::new(OverrideState::Failed(err)));
                }
            }
        }

        // Failed attempts stamp the gate too: a broken store is retried
        // at TTL cadence, not once per render.
        *last_attempt = Some(Instant::now());

        self.state.load_full()
    }

    /// Drop the TTL stamp so the next `refresh` refetches. The cached
    /// snapshot stays visible until the new one lands.
    pub async fn invalidate(&self) {
        *self.gate.lock().await = None;
    }
}
