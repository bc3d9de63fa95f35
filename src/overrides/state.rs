//! Override snapshot state.

use std::sync::Arc;

use super::{FetchError, OverrideRecord};

/// Fetch status of the override snapshot, as one tagged value.
///
/// `Loading` only ever occurs before the first fetch completes; the feed
/// never re-enters it on refresh, so consumers defer rendering at most
/// once per asset (stale-while-revalidate).
#[derive(Debug)]
pub enum OverrideState {
    /// First fetch still outstanding.
    Loading,
    /// Snapshot fetched; records kept in store fetch order.
    Ready(Arc<[OverrideRecord]>),
    /// First fetch failed; no overrides available.
    Failed(FetchError),
}

impl OverrideState {
    /// Records when ready, `None` otherwise.
    pub fn records(&self) -> Option<&[OverrideRecord]> {
        match self {
            Self::Ready(records) => Some(records),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}
