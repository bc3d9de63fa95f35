//! Override record wire shape.

use serde::Deserialize;

/// One admin-supplied image replacement, fetched from the record store.
///
/// `original_path` must equal a registry entry's `path` to take effect;
/// records matching nothing are inert. Extra wire fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OverrideRecord {
    /// Record identifier in the external store.
    pub id: String,
    /// Join key against `AssetEntry::path` (exact match).
    pub original_path: String,
    /// Absolute URL to use instead of the built-in.
    pub override_url: String,
    /// ISO-8601 modification stamp, used to cache-bust the override URL.
    /// Absent means no cache busting (accepted staleness risk).
    #[serde(default)]
    pub updated_at: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_record() {
        let record: OverrideRecord = serde_json::from_str(
            r#"{
                "id": "rec-1",
                "original_path": "hero-home.jpg",
                "override_url": "https://cdn.example.com/new-hero.jpg",
                "updated_at": "2024-06-01T00:00:00.000Z"
            }"#,
        )
        .unwrap();

        assert_eq!(record.id, "rec-1");
        assert_eq!(record.original_path, "hero-home.jpg");
        assert_eq!(
            record.updated_at.as_deref(),
            Some("2024-06-01T00:00:00.000Z")
        );
    }

    #[test]
    fn test_deserialize_missing_updated_at() {
        let record: OverrideRecord = serde_json::from_str(
            r#"{"id": "rec-2", "original_path": "a.jpg", "override_url": "https://x/a.jpg"}"#,
        )
        .unwrap();
        assert_eq!(record.updated_at, None);
    }

    #[test]
    fn test_deserialize_null_updated_at() {
        let record: OverrideRecord = serde_json::from_str(
            r#"{"id": "rec-3", "original_path": "a.jpg", "override_url": "https://x/a.jpg", "updated_at": null}"#,
        )
        .unwrap();
        assert_eq!(record.updated_at, None);
    }

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        // The store may grow columns; the wire contract ignores them.
        let record: OverrideRecord = serde_json::from_str(
            r#"{
                "id": "rec-4",
                "original_path": "a.jpg",
                "override_url": "https://x/a.jpg",
                "uploaded_by": "admin@example.com",
                "size_bytes": 48213
            }"#,
        )
        .unwrap();
        assert_eq!(record.original_path, "a.jpg");
    }
}
