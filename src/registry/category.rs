//! Asset category definitions.

use std::fmt;

/// Grouping for admin listings; resolution behavior never depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetCategory {
    /// Above-the-fold hero banners
    Hero,
    /// Logos and branding marks
    Logo,
    /// Editorial and about-page photography
    Editorial,
    /// Life-stage audience imagery
    Lifestage,
    /// Lifestyle and atmosphere shots
    Lifestyle,
    /// Service line photography
    Service,
}

impl AssetCategory {
    /// All categories, in admin display order.
    pub const ALL: [Self; 6] = [
        Self::Hero,
        Self::Logo,
        Self::Editorial,
        Self::Lifestage,
        Self::Lifestyle,
        Self::Service,
    ];

    /// Human-readable group label for admin listings.
    pub fn label(self) -> &'static str {
        match self {
            Self::Hero => "Hero banners",
            Self::Logo => "Logos & branding",
            Self::Editorial => "Editorial photos",
            Self::Lifestage => "Life stages",
            Self::Lifestyle => "Lifestyle shots",
            Self::Service => "Service lines",
        }
    }

    /// Short identifier used in CLI filters and config files.
    pub fn name(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::Logo => "logo",
            Self::Editorial => "editorial",
            Self::Lifestage => "lifestage",
            Self::Lifestyle => "lifestyle",
            Self::Service => "service",
        }
    }

    /// Parse a short identifier. Unknown names come from user input
    /// (CLI filters); callers turn `None` into their own error.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "hero" => Some(Self::Hero),
            "logo" => Some(Self::Logo),
            "editorial" => Some(Self::Editorial),
            "lifestage" => Some(Self::Lifestage),
            "lifestyle" => Some(Self::Lifestyle),
            "service" => Some(Self::Service),
            _ => None,
        }
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for category in AssetCategory::ALL {
            assert_eq!(AssetCategory::from_name(category.name()), Some(category));
        }
    }

    #[test]
    fn test_from_name_case_insensitive() {
        assert_eq!(AssetCategory::from_name("Hero"), Some(AssetCategory::Hero));
        assert_eq!(
            AssetCategory::from_name("LIFESTYLE"),
            Some(AssetCategory::Lifestyle)
        );
    }

    #[test]
    fn test_from_name_unknown() {
        assert_eq!(AssetCategory::from_name("banner"), None);
        assert_eq!(AssetCategory::from_name(""), None);
    }

    #[test]
    fn test_labels_total() {
        for category in AssetCategory::ALL {
            assert!(!category.label().is_empty());
        }
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(format!("{}", AssetCategory::Service), "service");
    }
}
