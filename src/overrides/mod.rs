//! Admin image overrides: wire shape, pure resolution, snapshot feed.
//!
//! The record store is external; this module reads a snapshot of it per
//! resolution cycle and never mutates records. Resolution is a pure
//! left join against the registry — override absence is a fallback,
//! never an error.

mod feed;
mod record;
mod resolve;
mod source;
mod state;

pub use feed::{DEFAULT_TTL, OverrideFeed};
pub use record::OverrideRecord;
pub use resolve::{ResolvedMap, resolve_all, resolve_one};
pub use source::{FetchError, JsonFileSource, OverrideSource, RestSource, StaticSource};
pub use state::OverrideState;
