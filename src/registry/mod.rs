//! Static registry of built-in image assets.
//!
//! Pure data, loaded once at compile time. Override records join against
//! `AssetEntry::path`; resolution never mutates anything here.

mod category;
mod entry;

pub use category::AssetCategory;
pub use entry::{AssetEntry, assets, find, find_by_path};
