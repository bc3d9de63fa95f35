//! Responsive variant URLs for the object-storage bucket.
//!
//! Only the recognized public bucket supports on-the-fly transforms;
//! every other URL passes through untouched. The parameter names
//! (`width`, `quality`, `format`) are the storage provider's wire
//! contract, not a local convention.

mod options;

pub use options::{ImageFormat, VariantOptions};

use std::collections::BTreeSet;

use url::Url;

/// Path segment identifying the transformable public bucket.
const STORAGE_PUBLIC_SEGMENT: &str = "/storage/v1/object/public/";

/// Default responsive width ladder.
pub const DEFAULT_WIDTHS: [u32; 6] = [320, 480, 640, 768, 960, 1200];

/// True iff the URL points at the transformable bucket.
pub fn is_transformable_url(url: &str) -> bool {
    url.contains(STORAGE_PUBLIC_SEGMENT)
}

/// Replace-or-insert one query parameter.
fn set_param(params: &mut Vec<(String, String)>, key: &str, value: String) {
    match params.iter_mut().find(|(k, _)| k == key) {
        Some((_, v)) => *v = value,
        None => params.push((key.to_string(), value)),
    }
}

/// Width/quality/format-qualified variant of a bucket URL.
///
/// Parameters are overwritten, not appended, so the function is
/// idempotent over its own output. The fragment survives untouched.
/// Non-bucket URLs and unparseable URLs come back unchanged: a
/// non-optimized image beats a broken one.
pub fn build_variant_url(url: &str, options: &VariantOptions) -> String {
    if !is_transformable_url(url) {
        return url.to_string();
    }
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };

    let mut params: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    if let Some(width) = options.width {
        set_param(&mut params, "width", width.max(1).to_string());
    }
    if let Some(quality) = options.quality {
        // Below 1 the store rejects the parameter; treat as absent.
        if quality >= 1 {
            set_param(&mut params, "quality", quality.min(100).to_string());
        }
    }
    if let Some(format) = options.format {
        set_param(&mut params, "format", format.as_str().to_string());
    }

    if params.is_empty() {
        parsed.set_query(None);
    } else {
        parsed.query_pairs_mut().clear().extend_pairs(params);
    }

    parsed.to_string()
}

/// Comma-joined srcset candidates, one per unique width, ascending.
///
/// `None` when the URL is not transformable or the ladder is empty —
/// callers fall back to a plain `src`.
pub fn build_variant_set(url: &str, widths: &[u32], options: &VariantOptions) -> Option<String> {
    if !is_transformable_url(url) {
        return None;
    }

    let unique: BTreeSet<u32> = widths.iter().copied().collect();
    if unique.is_empty() {
        return None;
    }

    let candidates: Vec<String> = unique
        .iter()
        .map(|&width| {
            let variant = build_variant_url(
                url,
                &VariantOptions {
                    width: Some(width),
                    ..*options
                },
            );
            format!("{variant} {width}w")
        })
        .collect();

    Some(candidates.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUCKET_URL: &str =
        "https://store.example.com/storage/v1/object/public/site-images/hero.jpg";

    #[test]
    fn test_pass_through_for_foreign_urls() {
        let url = "https://example.com/not-bucket/img.jpg";
        let result = build_variant_url(url, &VariantOptions::from_width(400));
        assert_eq!(result, url);
    }

    #[test]
    fn test_width_param() {
        let result = build_variant_url(BUCKET_URL, &VariantOptions::from_width(400));
        assert_eq!(result, format!("{BUCKET_URL}?width=400"));
    }

    #[test]
    fn test_width_clamped_to_one() {
        let result = build_variant_url(BUCKET_URL, &VariantOptions::from_width(0));
        assert_eq!(result, format!("{BUCKET_URL}?width=1"));
    }

    #[test]
    fn test_idempotent_width_override() {
        let once = build_variant_url(BUCKET_URL, &VariantOptions::from_width(400));
        let twice = build_variant_url(&once, &VariantOptions::from_width(800));

        assert!(twice.contains("width=800"));
        assert!(!twice.contains("width=400"));
        assert_eq!(twice.matches("width=").count(), 1);
    }

    #[test]
    fn test_quality_clamped_high() {
        let options = VariantOptions {
            quality: Some(150),
            ..VariantOptions::default()
        };
        let result = build_variant_url(BUCKET_URL, &options);
        assert!(result.contains("quality=100"));
    }

    #[test]
    fn test_quality_below_range_absent() {
        let options = VariantOptions {
            quality: Some(-5),
            ..VariantOptions::default()
        };
        let result = build_variant_url(BUCKET_URL, &options);
        assert!(!result.contains("quality"));
        assert_eq!(result, BUCKET_URL);
    }

    #[test]
    fn test_invalid_quality_leaves_existing_param() {
        let url = format!("{BUCKET_URL}?quality=80");
        let options = VariantOptions {
            quality: Some(0),
            ..VariantOptions::default()
        };
        assert_eq!(build_variant_url(&url, &options), url);
    }

    #[test]
    fn test_format_param() {
        let options = VariantOptions {
            width: Some(640),
            format: Some(ImageFormat::Webp),
            ..VariantOptions::default()
        };
        let result = build_variant_url(BUCKET_URL, &options);
        assert!(result.contains("width=640"));
        assert!(result.contains("format=webp"));
    }

    #[test]
    fn test_fragment_preserved() {
        let url = format!("{BUCKET_URL}#section");
        let result = build_variant_url(&url, &VariantOptions::from_width(200));
        assert_eq!(result, format!("{BUCKET_URL}?width=200#section"));
    }

    #[test]
    fn test_existing_query_merged() {
        let url = format!("{BUCKET_URL}?download=true");
        let result = build_variant_url(&url, &VariantOptions::from_width(320));
        assert!(result.contains("download=true"));
        assert!(result.contains("width=320"));
    }

    #[test]
    fn test_unparseable_bucket_url_degrades() {
        // Contains the bucket segment but is not a valid URL; a broken
        // image source is strictly worse than a non-optimized one.
        let url = "https://[bad/storage/v1/object/public/x.jpg";
        assert_eq!(build_variant_url(url, &VariantOptions::from_width(100)), url);
    }

    #[test]
    fn test_no_options_no_query() {
        let result = build_variant_url(BUCKET_URL, &VariantOptions::default());
        assert!(!result.contains('?'));
    }

    #[test]
    fn test_variant_set_sorted_deduplicated() {
        let srcset = build_variant_set(
            BUCKET_URL,
            &[640, 480, 480, 640, 320],
            &VariantOptions::default(),
        )
        .unwrap();

        assert_eq!(
            srcset,
            format!(
                "{BUCKET_URL}?width=320 320w, {BUCKET_URL}?width=480 480w, {BUCKET_URL}?width=640 640w"
            )
        );
    }

    #[test]
    fn test_variant_set_none_for_foreign_urls() {
        assert_eq!(
            build_variant_set(
                "https://example.com/img.jpg",
                &DEFAULT_WIDTHS,
                &VariantOptions::default()
            ),
            None
        );
    }

    #[test]
    fn test_variant_set_none_for_empty_ladder() {
        assert_eq!(
            build_variant_set(BUCKET_URL, &[], &VariantOptions::default()),
            None
        );
    }

    #[test]
    fn test_variant_set_carries_quality_and_format() {
        let options = VariantOptions {
            quality: Some(75),
            format: Some(ImageFormat::Avif),
            ..VariantOptions::default()
        };
        let srcset = build_variant_set(BUCKET_URL, &[320, 640], &options).unwrap();

        for candidate in srcset.split(", ") {
            assert!(candidate.contains("quality=75"));
            assert!(candidate.contains("format=avif"));
        }
    }

    #[test]
    fn test_default_ladder_shape() {
        // Ascending and duplicate-free by construction.
        let mut sorted = DEFAULT_WIDTHS;
        sorted.sort_unstable();
        assert_eq!(sorted, DEFAULT_WIDTHS);
        assert_eq!(
            DEFAULT_WIDTHS.iter().collect::<BTreeSet<_>>().len(),
            DEFAULT_WIDTHS.len()
        );
    }
}
