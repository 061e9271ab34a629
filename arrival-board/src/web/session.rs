//! Request-scoped dashboard session.
//!
//! The last searched station and the manual refresh counter live in the
//! query string, so every request carries its own state.

use reqwest::Url;
use serde::Deserialize;

/// Query parameters of the dashboard page.
#[derive(Debug, Default, Deserialize)]
pub struct DashboardQuery {
    /// Station name as typed; absent means "use the default station"
    pub station: Option<String>,

    /// Auto-refresh checkbox (`on` when ticked)
    pub auto: Option<String>,

    /// Manual refresh counter; anything unparseable counts as 0
    pub refresh: Option<String>,
}

/// Dashboard state for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    /// Trimmed station name; empty when the user cleared the input
    pub station: String,

    /// Whether the page reloads itself periodically
    pub auto_refresh: bool,

    /// Incremented by the refresh button to give the input a fresh identity
    pub refresh_key: u64,
}

impl Session {
    /// Build the session from the query, falling back to `default_station`.
    pub fn from_query(query: DashboardQuery, default_station: &str) -> Self {
        let station = match query.station {
            Some(station) => station.trim().to_string(),
            None => default_station.to_string(),
        };

        let auto_refresh = query
            .auto
            .is_some_and(|v| !matches!(v.trim(), "" | "0" | "off" | "false"));

        Self {
            station,
            auto_refresh,
            refresh_key: query
                .refresh
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(0),
        }
    }

    /// Counter value submitted by the refresh button.
    pub fn next_refresh_key(&self) -> u64 {
        self.refresh_key.saturating_add(1)
    }

    /// Element id of the station input, unique per refresh.
    pub fn input_id(&self) -> String {
        format!("station_input_{}", self.refresh_key)
    }

    /// Relative URL reproducing this session.
    pub fn href(&self) -> String {
        let refresh = self.refresh_key.to_string();
        let mut params = vec![("station", self.station.as_str()), ("refresh", refresh.as_str())];
        if self.auto_refresh {
            params.push(("auto", "on"));
        }

        match Url::parse_with_params("http://localhost/", &params) {
            Ok(url) => format!("/?{}", url.query().unwrap_or_default()),
            Err(_) => "/".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(station: Option<&str>, auto: Option<&str>, refresh: Option<u64>) -> DashboardQuery {
        DashboardQuery {
            station: station.map(String::from),
            auto: auto.map(String::from),
            refresh: refresh.map(|n| n.to_string()),
        }
    }

    #[test]
    fn absent_station_uses_default() {
        let session = Session::from_query(DashboardQuery::default(), "지축");
        assert_eq!(session.station, "지축");
        assert!(!session.auto_refresh);
        assert_eq!(session.refresh_key, 0);
    }

    #[test]
    fn blank_station_stays_blank() {
        let session = Session::from_query(query(Some("   "), None, None), "지축");
        assert_eq!(session.station, "");
    }

    #[test]
    fn station_is_trimmed() {
        let session = Session::from_query(query(Some(" 강남 "), None, None), "지축");
        assert_eq!(session.station, "강남");
    }

    #[test]
    fn auto_refresh_checkbox() {
        assert!(Session::from_query(query(None, Some("on"), None), "x").auto_refresh);
        assert!(Session::from_query(query(None, Some("1"), None), "x").auto_refresh);
        assert!(!Session::from_query(query(None, Some(""), None), "x").auto_refresh);
        assert!(!Session::from_query(query(None, Some("off"), None), "x").auto_refresh);
    }

    #[test]
    fn refresh_counter() {
        let session = Session::from_query(query(None, None, Some(4)), "x");
        assert_eq!(session.next_refresh_key(), 5);
        assert_eq!(session.input_id(), "station_input_4");

        let session = Session::from_query(query(None, None, Some(u64::MAX)), "x");
        assert_eq!(session.next_refresh_key(), u64::MAX);
    }

    #[test]
    fn malformed_refresh_counts_as_zero() {
        for raw in ["", "x", "-1", "1.5"] {
            let query = DashboardQuery {
                refresh: Some(raw.to_string()),
                ..DashboardQuery::default()
            };
            assert_eq!(Session::from_query(query, "지축").refresh_key, 0);
        }
    }

    #[test]
    fn href_encodes_station() {
        let session = Session {
            station: "홍대 입구".to_string(),
            auto_refresh: true,
            refresh_key: 2,
        };
        assert_eq!(
            session.href(),
            "/?station=%ED%99%8D%EB%8C%80+%EC%9E%85%EA%B5%AC&refresh=2&auto=on"
        );
    }

    #[test]
    fn href_without_auto() {
        let session = Session {
            station: "a&b".to_string(),
            auto_refresh: false,
            refresh_key: 0,
        };
        assert_eq!(session.href(), "/?station=a%26b&refresh=0");
    }
}
