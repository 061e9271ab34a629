//! Application configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use crate::seoul::{ArrivalFeed, DEFAULT_BASE_URL, FetchError, FixtureFeed, SeoulClient, SeoulConfig};

/// Environment variable holding the Open Data access key.
pub const API_KEY_VAR: &str = "SEOUL_API_KEY";

const BASE_URL_VAR: &str = "ARRIVALS_BASE_URL";
const FIXTURES_VAR: &str = "ARRIVALS_FIXTURES";
const BIND_VAR: &str = "ARRIVALS_BIND";
const DEFAULT_STATION_VAR: &str = "ARRIVALS_DEFAULT_STATION";
const STATIC_DIR_VAR: &str = "ARRIVALS_STATIC_DIR";
const AUTO_REFRESH_VAR: &str = "ARRIVALS_AUTO_REFRESH_SECS";

/// Errors in configuration values.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid {var}: {message}")]
pub struct ConfigError {
    var: &'static str,
    message: String,
}

/// Dashboard behaviour.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    /// Station shown when the request names none.
    pub default_station: String,

    /// Auto-refresh interval when the user opts in (seconds).
    pub auto_refresh_secs: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_station: "지축".to_string(),
            auto_refresh_secs: 30,
        }
    }
}

/// Everything `main` needs to start the server.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Access key; `None` disables the live feed.
    pub api_key: Option<String>,

    /// Upstream base URL.
    pub base_url: String,

    /// Serve recorded responses from this directory instead of the live API.
    pub fixtures_dir: Option<PathBuf>,

    /// Listen address.
    pub bind: SocketAddr,

    /// Stylesheet directory.
    pub static_dir: String,

    pub dashboard: DashboardConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read configuration through `lookup`. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let bind = match get(BIND_VAR) {
            Some(addr) => addr.parse().map_err(|e| ConfigError {
                var: BIND_VAR,
                message: format!("{addr}: {e}"),
            })?,
            None => SocketAddr::from(([127, 0, 0, 1], 3000)),
        };

        let mut dashboard = DashboardConfig::default();
        if let Some(station) = get(DEFAULT_STATION_VAR) {
            dashboard.default_station = station;
        }
        if let Some(secs) = get(AUTO_REFRESH_VAR) {
            dashboard.auto_refresh_secs = secs
                .parse()
                .ok()
                .filter(|&s: &u64| s > 0)
                .ok_or_else(|| ConfigError {
                    var: AUTO_REFRESH_VAR,
                    message: format!("{secs}: expected a positive number of seconds"),
                })?;
        }

        Ok(Self {
            api_key: get(API_KEY_VAR),
            base_url: get(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            fixtures_dir: get(FIXTURES_VAR).map(PathBuf::from),
            bind,
            static_dir: get(STATIC_DIR_VAR).unwrap_or_else(|| "static".to_string()),
            dashboard,
        })
    }

    /// Build the arrival feed.
    ///
    /// Fixtures take precedence over the live API. A missing access key is
    /// reported as [`FetchError::NotConfigured`] for the caller to surface;
    /// an unusable base URL or fixture directory is
    /// [`FetchError::InvalidSetup`].
    pub fn feed(&self) -> Result<ArrivalFeed, FetchError> {
        if let Some(dir) = &self.fixtures_dir {
            return Ok(ArrivalFeed::Fixture(FixtureFeed::new(dir)?));
        }

        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| FetchError::NotConfigured(format!("{API_KEY_VAR} is not set")))?;

        let config = SeoulConfig::new(api_key).with_base_url(&self.base_url);
        Ok(ArrivalFeed::Live(SeoulClient::new(config)?))
    }
}
