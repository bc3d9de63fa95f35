//! Variant parameters.

use std::fmt;
use std::str::FromStr;

/// Output format supported by the bucket's transform endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    Avif,
    Webp,
}

impl ImageFormat {
    /// Wire value for the `format` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Avif => "avif",
            Self::Webp => "webp",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "avif" => Some(Self::Avif),
            "webp" => Some(Self::Webp),
            _ => None,
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown image format `{s}` (expected avif, webp)"))
    }
}

/// Requested variant parameters.
///
/// Unset fields leave the URL's existing parameters alone.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VariantOptions {
    /// Target width in pixels (clamped to a minimum of 1).
    pub width: Option<u32>,
    /// Compression quality; below 1 is ignored, above 100 clamps to 100.
    pub quality: Option<i32>,
    /// Requested output format.
    pub format: Option<ImageFormat>,
}

impl VariantOptions {
    /// Width-only options, the common srcset case.
    pub const fn from_width(width: u32) -> Self {
        Self {
            width: Some(width),
            quality: None,
            format: None,
        }
    }
}
