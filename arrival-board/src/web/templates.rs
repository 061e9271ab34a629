//! Askama templates for the dashboard.

use askama::Template;

use crate::domain::{Direction, DirectionBoard, NormalizedArrival};

use super::notice::Notice;
use super::session::Session;

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// Dashboard page: search form, notices and the two direction tabs.
#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub session: Session,
    pub notices: Vec<Notice>,
    pub board: Option<BoardView>,
    /// Configured auto-refresh interval in seconds
    pub refresh_interval_secs: u64,
}

impl DashboardTemplate {
    /// URL the page reloads to when auto-refresh is on.
    pub fn reload_href(&self) -> String {
        self.session.href()
    }

    /// Reload interval, when the page should reload itself.
    ///
    /// Nothing reloads while the station input is empty.
    pub fn auto_refresh_secs(&self) -> Option<u64> {
        (self.session.auto_refresh && !self.session.station.is_empty())
            .then_some(self.refresh_interval_secs)
    }
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Arrivals at the searched station, one tab per direction.
#[derive(Debug, Clone)]
pub struct BoardView {
    pub station: String,
    /// Local time of the fetch
    pub fetched_at: String,
    /// Down direction first, then up
    pub tabs: Vec<DirectionTab>,
}

impl BoardView {
    /// Create from a grouped board.
    pub fn new(station: &str, board: &DirectionBoard, fetched_at: String) -> Self {
        let tabs = [Direction::Down, Direction::Up]
            .into_iter()
            .map(|direction| DirectionTab::new(station, direction, board.group(direction)))
            .collect();

        Self {
            station: station.to_string(),
            fetched_at,
            tabs,
        }
    }
}

/// One direction's arrivals.
#[derive(Debug, Clone)]
pub struct DirectionTab {
    /// "down" or "up", used for element ids
    pub key: String,
    /// e.g. "🔺 하행선 (3개)"
    pub label: String,
    /// e.g. "'지축' 역 하행선 도착 정보"
    pub heading: String,
    /// Shown when there are no arrivals
    pub empty_message: String,
    pub arrivals: Vec<ArrivalView>,
}

impl DirectionTab {
    fn new(station: &str, direction: Direction, arrivals: &[NormalizedArrival]) -> Self {
        let icon = match direction {
            Direction::Down => "🔺",
            Direction::Up => "🔻",
        };
        let name = direction.label();

        Self {
            key: direction.to_string(),
            label: format!("{icon} {name} ({}개)", arrivals.len()),
            heading: format!("'{station}' 역 {name} 도착 정보"),
            empty_message: format!("{name} 도착 예정 열차가 없습니다."),
            arrivals: arrivals.iter().map(ArrivalView::from_arrival).collect(),
        }
    }
}

/// Arrival card view model.
#[derive(Debug, Clone)]
pub struct ArrivalView {
    /// e.g. "대화 방면"
    pub heading: String,
    pub line_name: String,
    pub status: String,
    pub time_display: String,
    pub current_location: String,
    pub is_last_train: bool,
}

impl ArrivalView {
    /// Create from a normalized arrival.
    pub fn from_arrival(arrival: &NormalizedArrival) -> Self {
        Self {
            heading: format!("{} 방면", arrival.direction),
            line_name: arrival.line_name.clone(),
            status: arrival.status.clone(),
            time_display: arrival.time_display.clone(),
            current_location: arrival.current_location.clone(),
            is_last_train: arrival.is_last_train,
        }
    }

    /// CSS class of the card.
    pub fn card_class(&self) -> &'static str {
        if self.is_last_train {
            "card card-last"
        } else {
            "card"
        }
    }
}
