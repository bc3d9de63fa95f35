//! Reva - image override resolution and responsive asset delivery.
//!
//! A marketing site ships a fixed set of built-in images (hero banners,
//! logos, service photos). Admins can replace any of them at runtime
//! through an override record store, without a redeploy. This crate owns
//! the data flow from the static registry, through override resolution
//! and the loading-state delivery policy, to the final
//! width/quality/format-qualified URL handed to a rendering component.
//!
//! Data flow: [`registry`] (static) → [`overrides`] (merges the fetched
//! snapshot) → resolved URL per asset id → [`transform`] (per image
//! request) → URL / srcset for the renderer. [`delivery`] ties the
//! pieces together behind the two loading policies.

pub mod cli;
pub mod config;
pub mod delivery;
pub mod logger;
pub mod overrides;
pub mod registry;
pub mod transform;

pub use delivery::{AssetDelivery, LoadingPolicy, ResolvedAssets, resolve_with_policy};
pub use overrides::{
    FetchError, OverrideFeed, OverrideRecord, OverrideSource, OverrideState, resolve_all,
    resolve_one,
};
pub use registry::{AssetCategory, AssetEntry};
pub use transform::{
    DEFAULT_WIDTHS, ImageFormat, VariantOptions, build_variant_set, build_variant_url,
    is_transformable_url,
};
