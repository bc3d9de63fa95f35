//! Built-in asset table.
//!
//! Every image slot in the site UI has a stable logical id here,
//! independent of which physical file currently backs it. The `path` is
//! the join key override records match on; it is compared exactly, with
//! no normalization and no trailing-slash tolerance.

use super::AssetCategory;

/// One logical image slot, defined at build time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetEntry {
    /// Stable logical identifier, unique across the registry.
    pub id: &'static str,
    /// Join key matched against `OverrideRecord::original_path`.
    pub path: &'static str,
    /// Default URL shipped with the application.
    pub built_in_url: &'static str,
    /// Human-readable name for admin listings.
    pub label: &'static str,
    /// Admin grouping.
    pub category: AssetCategory,
}

const fn entry(
    id: &'static str,
    path: &'static str,
    built_in_url: &'static str,
    label: &'static str,
    category: AssetCategory,
) -> AssetEntry {
    AssetEntry {
        id,
        path,
        built_in_url,
        label,
        category,
    }
}

/// Built-in assets in declaration order.
///
/// Declaration order is the listing order everywhere (admin UI, CLI,
/// resolved maps), so keep category blocks together.
static BUILT_IN: &[AssetEntry] = &[
    // Heroes
    entry(
        "hero-home",
        "hero-home.jpg",
        "/assets/images/hero-home.jpg",
        "Homepage hero",
        AssetCategory::Hero,
    ),
    entry(
        "hero-services",
        "hero-services.jpg",
        "/assets/images/hero-services.jpg",
        "Services hero",
        AssetCategory::Hero,
    ),
    entry(
        "hero-projects",
        "hero-projects.jpg",
        "/assets/images/hero-projects.jpg",
        "Projects hero",
        AssetCategory::Hero,
    ),
    entry(
        "hero-contact",
        "hero-contact.jpg",
        "/assets/images/hero-contact.jpg",
        "Contact hero",
        AssetCategory::Hero,
    ),
    // Branding
    entry(
        "logo-main",
        "logo-main.png",
        "/assets/images/logo-main.png",
        "Primary logo",
        AssetCategory::Logo,
    ),
    entry(
        "logo-footer",
        "logo-footer.png",
        "/assets/images/logo-footer.png",
        "Footer logo",
        AssetCategory::Logo,
    ),
    // Editorial
    entry(
        "editorial-team",
        "editorial-team.jpg",
        "/assets/images/editorial-team.jpg",
        "Team at work",
        AssetCategory::Editorial,
    ),
    entry(
        "editorial-craft",
        "editorial-craft.jpg",
        "/assets/images/editorial-craft.jpg",
        "Craftsmanship close-up",
        AssetCategory::Editorial,
    ),
    entry(
        "editorial-process",
        "editorial-process.jpg",
        "/assets/images/editorial-process.jpg",
        "Design process",
        AssetCategory::Editorial,
    ),
    // Life stages
    entry(
        "lifestage-young-family",
        "lifestage-young-family.jpg",
        "/assets/images/lifestage-young-family.jpg",
        "Young family",
        AssetCategory::Lifestage,
    ),
    entry(
        "lifestage-growing-family",
        "lifestage-growing-family.jpg",
        "/assets/images/lifestage-growing-family.jpg",
        "Growing family",
        AssetCategory::Lifestage,
    ),
    entry(
        "lifestage-empty-nest",
        "lifestage-empty-nest.jpg",
        "/assets/images/lifestage-empty-nest.jpg",
        "Empty nesters",
        AssetCategory::Lifestage,
    ),
    // Lifestyle
    entry(
        "lifestyle-kitchen-morning",
        "lifestyle-kitchen-morning.jpg",
        "/assets/images/lifestyle-kitchen-morning.jpg",
        "Morning kitchen",
        AssetCategory::Lifestyle,
    ),
    entry(
        "lifestyle-garden-evening",
        "lifestyle-garden-evening.jpg",
        "/assets/images/lifestyle-garden-evening.jpg",
        "Evening garden room",
        AssetCategory::Lifestyle,
    ),
    // Service lines
    entry(
        "service-kitchens",
        "service-kitchens.jpg",
        "/assets/images/service-kitchens.jpg",
        "Kitchen renovations",
        AssetCategory::Service,
    ),
    entry(
        "service-bathrooms",
        "service-bathrooms.jpg",
        "/assets/images/service-bathrooms.jpg",
        "Bathroom renovations",
        AssetCategory::Service,
    ),
    entry(
        "service-extensions",
        "service-extensions.jpg",
        "/assets/images/service-extensions.jpg",
        "Home extensions",
        AssetCategory::Service,
    ),
    entry(
        "service-lofts",
        "service-lofts.jpg",
        "/assets/images/service-lofts.jpg",
        "Loft conversions",
        AssetCategory::Service,
    ),
];

/// All registered assets, in declaration order. Stable across calls.
pub fn assets() -> &'static [AssetEntry] {
    BUILT_IN
}

/// Look up an asset by logical id.
pub fn find(id: &str) -> Option<&'static AssetEntry> {
    BUILT_IN.iter().find(|e| e.id == id)
}

/// Look up an asset by its original path (the override join key).
/// Exact match only.
pub fn find_by_path(path: &str) -> Option<&'static AssetEntry> {
    BUILT_IN.iter().find(|e| e.path == path)
}
