//! Override record sources.
//!
//! The record store is an external collaborator; this module owns the
//! narrow fetch contract and the typed failure modes. A failed fetch is
//! recovered by the feed (built-ins are served) and never reaches the
//! rendering boundary as a panic.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use thiserror::Error;

use super::OverrideRecord;

/// Request timeout for the HTTP-backed source.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Failure modes of an override fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to read override file `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("override store returned HTTP {0}")]
    Status(u16),

    #[error("override store request failed: {0}")]
    Transport(String),

    #[error("override payload could not be decoded")]
    Decode(#[from] serde_json::Error),
}

/// A queryable source of override records.
///
/// Conceptually `SELECT * FROM image_overrides ORDER BY original_path`.
/// Record order is preserved end to end because duplicate paths resolve
/// first-match-wins.
#[async_trait]
pub trait OverrideSource: Send + Sync {
    async fn fetch_overrides(&self) -> Result<Vec<OverrideRecord>, FetchError>;
}

// ============================================================================
// StaticSource
// ============================================================================

/// Fixed in-memory records. Demos, previews, tests.
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    records: Vec<OverrideRecord>,
}

impl StaticSource {
    pub fn new(records: Vec<OverrideRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl OverrideSource for StaticSource {
    async fn fetch_overrides(&self) -> Result<Vec<OverrideRecord>, FetchError> {
        Ok(self.records.clone())
    }
}

// ============================================================================
// JsonFileSource
// ============================================================================

/// Records from a JSON array on disk (CLI `--overrides`).
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl OverrideSource for JsonFileSource {
    async fn fetch_overrides(&self) -> Result<Vec<OverrideRecord>, FetchError> {
        let content = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|err| FetchError::Io(self.path.clone(), err))?;
        let records = serde_json::from_str(&content)?;
        Ok(records)
    }
}

// ============================================================================
// RestSource
// ============================================================================

/// PostgREST-style record store over HTTP.
///
/// Issues `GET {endpoint}/rest/v1/{table}?select=...&order=original_path.asc`
/// with the public API key in both `apikey` and bearer headers.
#[derive(Debug, Clone)]
pub struct RestSource {
    client: reqwest::Client,
    endpoint: String,
    table: String,
    api_key: Option<String>,
}

impl RestSource {
    /// Build a source with a bounded request timeout.
    pub fn new(
        endpoint: &str,
        table: &str,
        api_key: Option<&str>,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
            table: table.to_string(),
            api_key: api_key.map(str::to_string),
        })
    }

    fn query_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select=id,original_path,override_url,updated_at&order=original_path.asc",
            self.endpoint, self.table
        )
    }
}

#[async_trait]
impl OverrideSource for RestSource {
    async fn fetch_overrides(&self) -> Result<Vec<OverrideRecord>, FetchError> {
        let mut request = self.client.get(self.query_url());
        if let Some(key) = &self.api_key {
            request = request.header("apikey", key).bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }

        let body = response
            .bytes()
            .await
            .map_err(|err| FetchError::Transport(err.to_string()))?;
        let records = serde_json::from_slice(&body)?;
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn record(path: &str) -> OverrideRecord {
        OverrideRecord {
            id: "rec".to_string(),
            original_path: path.to_string(),
            override_url: format!("https://cdn.example.com/{path}"),
            updated_at: None,
        }
    }

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticSource::new(vec![record("a.jpg"), record("b.jpg")]);
        let records = source.fetch_overrides().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].original_path, "a.jpg");
    }

    #[tokio::test]
    async fn test_json_file_source() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("overrides.json");
        fs::write(
            &path,
            r#"[{"id": "1", "original_path": "a.jpg", "override_url": "https://x/a.jpg",
                "updated_at": "2024-06-01T00:00:00.000Z"}]"#,
        )
        .unwrap();

        let records = JsonFileSource::new(path).fetch_overrides().await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].updated_at.as_deref(),
            Some("2024-06-01T00:00:00.000Z")
        );
    }

    #[tokio::test]
    async fn test_json_file_source_missing_file() {
        let dir = TempDir::new().unwrap();
        let source = JsonFileSource::new(dir.path().join("absent.json"));

        let err = source.fetch_overrides().await.unwrap_err();
        assert!(matches!(err, FetchError::Io(..)));
    }

    #[tokio::test]
    async fn test_json_file_source_bad_payload() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("overrides.json");
        fs::write(&path, "{not json").unwrap();

        let err = JsonFileSource::new(path).fetch_overrides().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_rest_source_query_url() {
        let source = RestSource::new("https://store.example.com/", "image_overrides", None).unwrap();
        assert_eq!(
            source.query_url(),
            "https://store.example.com/rest/v1/image_overrides\
             ?select=id,original_path,override_url,updated_at&order=original_path.asc"
        );
    }
}
