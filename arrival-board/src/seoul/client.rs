//! Seoul Open Data realtime arrival HTTP client.

use reqwest::Url;
use serde_json::Value;

use super::error::FetchError;
use super::types::{FeedPayload, parse_feed};

/// Default base URL for the realtime subway API.
pub const DEFAULT_BASE_URL: &str = "http://swopenAPI.seoul.go.kr/api/subway";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Default result range requested from the API.
const DEFAULT_PAGE: (u32, u32) = (0, 10);

/// Configuration for the arrival client.
#[derive(Debug, Clone)]
pub struct SeoulConfig {
    /// Open Data access key, embedded in the request path
    pub api_key: String,
    /// Base URL for the API
    pub base_url: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// First result index
    pub start_index: u32,
    /// Last result index
    pub end_index: u32,
}

impl SeoulConfig {
    /// Create a new config with the given access key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            start_index: DEFAULT_PAGE.0,
            end_index: DEFAULT_PAGE.1,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    /// Set the requested result range.
    pub fn with_page(mut self, start: u32, end: u32) -> Self {
        self.start_index = start;
        self.end_index = end;
        self
    }
}

/// Realtime arrival API client.
///
/// One request per call, no retries.
#[derive(Debug, Clone)]
pub struct SeoulClient {
    http: reqwest::Client,
    base_url: Url,
    api_key: String,
    page: (u32, u32),
}

impl SeoulClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails with [`FetchError::NotConfigured`] when the access key is blank
    /// and [`FetchError::InvalidSetup`] when the base URL is unusable.
    pub fn new(config: SeoulConfig) -> Result<Self, FetchError> {
        let api_key = config.api_key.trim().to_string();
        if api_key.is_empty() {
            return Err(FetchError::NotConfigured(
                "access key is empty".to_string(),
            ));
        }

        let base_url = Url::parse(&config.base_url).map_err(|e| {
            FetchError::InvalidSetup(format!("invalid base URL {}: {e}", config.base_url))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(FetchError::InvalidSetup(format!(
                "base URL {} cannot carry a path",
                config.base_url
            )));
        }

        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url,
            api_key,
            page: (config.start_index, config.end_index),
        })
    }

    /// Build the request URL for a station.
    ///
    /// Every path segment, the station name included, is percent-encoded.
    pub fn arrivals_url(&self, station: &str) -> Url {
        let mut url = self.base_url.clone();
        let start = self.page.0.to_string();
        let end = self.page.1.to_string();

        // Checked in `new`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                self.api_key.as_str(),
                "json",
                "realtimeStationArrival",
                start.as_str(),
                end.as_str(),
                station,
            ]);
        }
        url
    }

    /// Fetch arrivals for a station.
    pub async fn fetch(&self, station: &str) -> Result<FeedPayload, FetchError> {
        let url = self.arrivals_url(station);
        tracing::debug!(station, host = ?self.base_url.host_str(), "requesting arrivals");

        // Errors carry the request URL, which embeds the access key
        let response = self
            .http
            .get(url)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| FetchError::Transport(e.without_url()))?;

        let body = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.without_url()))?;

        let doc: Value = serde_json::from_str(&body).map_err(|e| FetchError::Json {
            message: e.to_string(),
            body: Some(body.chars().take(500).collect()),
        })?;

        let payload = parse_feed(doc)?;
        tracing::info!(
            station,
            shape = ?payload.shape,
            count = payload.arrivals.len(),
            "fetched arrivals"
        );
        Ok(payload)
    }
}
