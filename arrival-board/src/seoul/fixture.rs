//! Fixture feed for running without an access key.
//!
//! Loads recorded API responses from JSON files and serves them as if they
//! were live, through the same parser as the real client.

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde_json::Value;

use super::error::FetchError;
use super::types::{FeedPayload, parse_feed};

/// Code reported for a station with no recorded response.
const NO_DATA_CODE: &str = "INFO-200";

/// Feed that serves recorded responses, keyed by station name.
#[derive(Debug, Clone)]
pub struct FixtureFeed {
    documents: Arc<HashMap<String, Value>>,
}

impl FixtureFeed {
    /// Load every `*.json` file in `data_dir`.
    ///
    /// Expects files named `{station}.json` (e.g., `지축.json`).
    pub fn new(data_dir: impl AsRef<Path>) -> Result<Self, FetchError> {
        let data_dir = data_dir.as_ref();
        let mut documents = HashMap::new();

        let entries = std::fs::read_dir(data_dir).map_err(|e| {
            FetchError::InvalidSetup(format!(
                "failed to read fixture directory {}: {e}",
                data_dir.display()
            ))
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| {
                FetchError::InvalidSetup(format!("failed to read directory entry: {e}"))
            })?;

            let path = entry.path();
            if !path.is_file() || path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let Some(station) = path.file_stem().and_then(|s| s.to_str()) else {
                tracing::warn!(path = %path.display(), "skipping fixture with non-UTF-8 name");
                continue;
            };

            let json = std::fs::read_to_string(&path).map_err(|e| {
                FetchError::InvalidSetup(format!("failed to read {}: {e}", path.display()))
            })?;

            let doc: Value = serde_json::from_str(&json).map_err(|e| FetchError::Json {
                message: format!("{}: {e}", path.display()),
                body: None,
            })?;

            documents.insert(station.to_string(), doc);
        }

        if documents.is_empty() {
            return Err(FetchError::InvalidSetup(format!(
                "no fixture files found in {}",
                data_dir.display()
            )));
        }

        tracing::info!(count = documents.len(), dir = %data_dir.display(), "loaded fixtures");
        Ok(Self {
            documents: Arc::new(documents),
        })
    }

    /// Serve the recorded response for a station.
    pub async fn fetch(&self, station: &str) -> Result<FeedPayload, FetchError> {
        let doc = self
            .documents
            .get(station)
            .ok_or_else(|| FetchError::Api {
                code: NO_DATA_CODE.to_string(),
                message: format!(
                    "no fixture for station {station}. Available: {}",
                    self.stations().join(", ")
                ),
            })?;

        parse_feed(doc.clone())
    }

    /// Stations with a recorded response, sorted.
    pub fn stations(&self) -> Vec<&str> {
        let mut stations: Vec<&str> = self.documents.keys().map(String::as_str).collect();
        stations.sort_unstable();
        stations
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seoul::types::FeedShape;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, contents: &str) {
        std::fs::write(dir.join(name), contents).unwrap();
    }

    #[tokio::test]
    async fn serves_recorded_responses() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "강남.json",
            r#"{"realtimeArrivalList": [{"barvlDt": "60", "updnLine": "내선"}]}"#,
        );
        write(dir.path(), "notes.txt", "ignored");

        let feed = FixtureFeed::new(dir.path()).unwrap();
        assert_eq!(feed.stations(), vec!["강남"]);

        let payload = feed.fetch("강남").await.unwrap();
        assert_eq!(payload.shape, FeedShape::Current);
        assert_eq!(payload.arrivals.len(), 1);
        assert_eq!(payload.arrivals[0].seconds(), 60);
    }

    #[tokio::test]
    async fn recorded_errors_are_replayed() {
        let dir = tempdir().unwrap();
        write(
            dir.path(),
            "오류.json",
            r#"{"errorMessage": {"code": "ERROR-300", "message": "invalid key"}}"#,
        );

        let feed = FixtureFeed::new(dir.path()).unwrap();
        let err = feed.fetch("오류").await.unwrap_err();
        assert!(matches!(err, FetchError::Api { message, .. } if message == "invalid key"));
    }

    #[tokio::test]
    async fn unknown_station_lists_available() {
        let dir = tempdir().unwrap();
        write(dir.path(), "b.json", "[]");
        write(dir.path(), "a.json", "[]");

        let feed = FixtureFeed::new(dir.path()).unwrap();
        let err = feed.fetch("c").await.unwrap_err();
        match err {
            FetchError::Api { code, message } => {
                assert_eq!(code, NO_DATA_CODE);
                assert!(message.ends_with("Available: a, b"));
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn empty_directory_is_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            FixtureFeed::new(dir.path()),
            Err(FetchError::InvalidSetup(_))
        ));
    }

    #[test]
    fn missing_directory_is_error() {
        assert!(matches!(
            FixtureFeed::new("/nonexistent/fixtures"),
            Err(FetchError::InvalidSetup(_))
        ));
    }

    #[test]
    fn invalid_json_is_error() {
        let dir = tempdir().unwrap();
        write(dir.path(), "broken.json", "{not json");
        assert!(matches!(
            FixtureFeed::new(dir.path()),
            Err(FetchError::Json { .. })
        ));
    }

    #[tokio::test]
    async fn bundled_fixtures_load() {
        let feed = FixtureFeed::new("data/fixtures").unwrap();
        assert!(feed.stations().contains(&"지축"));

        let payload = feed.fetch("지축").await.unwrap();
        assert!(!payload.arrivals.is_empty());
    }
}
