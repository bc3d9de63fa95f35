//! Delivery policy: what a rendering component gets per asset id.
//!
//! Balances two competing goals: never show a broken or empty image,
//! and never paint the built-in only to visibly swap in an override a
//! moment later. Resolution is pure; fetching lives in the override
//! feed, so the policy can be tested without any I/O.

use rustc_hash::FxHashMap;

use crate::overrides::{
    OverrideFeed, OverrideSource, OverrideState, ResolvedMap, resolve_all, resolve_one,
};
use crate::registry::{self, AssetEntry};
use crate::transform::{VariantOptions, build_variant_set, build_variant_url};

/// What to render while the first override fetch is outstanding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadingPolicy {
    /// Hold rendering until the snapshot is in. No flash; the default.
    #[default]
    Deferred,
    /// Paint the built-in immediately. Critical-path assets (the
    /// above-the-fold hero) accept a possible one-time swap instead of
    /// delaying first paint.
    StaticFirst,
}

/// Resolved URL per asset id, plus snapshot readiness.
#[derive(Debug, Clone, Default)]
pub struct ResolvedAssets {
    /// Asset id → display URL. Empty while deferred.
    pub urls: ResolvedMap,
    /// False while the first override fetch is outstanding.
    pub ready: bool,
}

impl ResolvedAssets {
    pub fn url(&self, id: &str) -> Option<&str> {
        self.urls.get(id).map(String::as_str)
    }
}

/// Apply the loading policy to a snapshot. Pure.
pub fn resolve_with_policy(
    entries: &[AssetEntry],
    state: &OverrideState,
    policy: LoadingPolicy,
) -> ResolvedAssets {
    match state {
        OverrideState::Loading => match policy {
            LoadingPolicy::Deferred => ResolvedAssets {
                urls: FxHashMap::default(),
                ready: false,
            },
            LoadingPolicy::StaticFirst => ResolvedAssets {
                urls: resolve_all(entries, None),
                ready: false,
            },
        },
        OverrideState::Ready(records) => ResolvedAssets {
            urls: resolve_all(entries, Some(records)),
            ready: true,
        },
        // Fetch finished, just badly: show the defaults rather than
        // nothing, under either policy.
        OverrideState::Failed(_) => ResolvedAssets {
            urls: resolve_all(entries, None),
            ready: true,
        },
    }
}

/// Registry + feed façade handed to rendering components.
pub struct AssetDelivery<S> {
    entries: &'static [AssetEntry],
    feed: OverrideFeed<S>,
}

impl<S: OverrideSource> AssetDelivery<S> {
    /// Delivery over the built-in registry.
    pub fn new(feed: OverrideFeed<S>) -> Self {
        Self {
            entries: registry::assets(),
            feed,
        }
    }

    /// Delivery over a custom entry table (embedding apps, tests).
    pub fn with_entries(entries: &'static [AssetEntry], feed: OverrideFeed<S>) -> Self {
        Self { entries, feed }
    }

    pub fn entries(&self) -> &'static [AssetEntry] {
        self.entries
    }

    pub fn feed(&self) -> &OverrideFeed<S> {
        &self.feed
    }

    /// Refresh the snapshot (TTL- and dedup-aware), then resolve.
    pub async fn refresh(&self, policy: LoadingPolicy) -> ResolvedAssets {
        let state = self.feed.refresh().await;
        resolve_with_policy(self.entries, &state, policy)
    }

    /// Resolve from the current snapshot without fetching. Never blocks.
    pub fn assets(&self, policy: LoadingPolicy) -> ResolvedAssets {
        resolve_with_policy(self.entries, &self.feed.state(), policy)
    }

    /// Single-asset accessor.
    ///
    /// `None` only for unregistered ids, or while the first fetch is
    /// outstanding under `Deferred`.
    pub fn asset_url(&self, id: &str, policy: LoadingPolicy) -> Option<String> {
        let entry = self.entries.iter().find(|e| e.id == id)?;
        let state = self.feed.state();

        match (&*state, policy) {
            (OverrideState::Loading, LoadingPolicy::Deferred) => None,
            (state, _) => Some(resolve_one(entry, state.records())),
        }
    }

    /// Variant URL for a registry asset's resolved URL.
    pub fn asset_variant_url(
        &self,
        id: &str,
        policy: LoadingPolicy,
        options: &VariantOptions,
    ) -> Option<String> {
        self.asset_url(id, policy)
            .map(|url| build_variant_url(&url, options))
    }

    /// Srcset for a registry asset. `None` when the asset is unresolved
    /// or its URL is outside the transformable bucket.
    pub fn asset_variant_set(
        &self,
        id: &str,
        policy: LoadingPolicy,
        widths: &[u32],
        options: &VariantOptions,
    ) -> Option<String> {
        self.asset_url(id, policy)
            .and_then(|url| build_variant_set(&url, widths, options))
    }
}
