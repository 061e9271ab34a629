//! Data transfer objects for the JSON API.

use serde::{Deserialize, Serialize};

use crate::domain::{DirectionBoard, NormalizedArrival};

/// Request for a station's arrivals.
#[derive(Debug, Deserialize)]
pub struct ArrivalsRequest {
    /// Station name, e.g. "지축"
    #[serde(default)]
    pub station: String,
}

/// Arrivals at a station, grouped by direction.
#[derive(Debug, Serialize)]
pub struct ArrivalsResponse {
    /// Station as requested (trimmed)
    pub station: String,

    /// Local time of the fetch (RFC 3339)
    pub fetched_at: String,

    /// Total number of arrivals
    pub count: usize,

    /// Down-direction / outer-loop arrivals
    pub down: Vec<ArrivalResult>,

    /// Up-direction / inner-loop arrivals
    pub up: Vec<ArrivalResult>,
}

impl ArrivalsResponse {
    /// Create from a grouped board.
    pub fn new(station: &str, board: &DirectionBoard, fetched_at: String) -> Self {
        Self {
            station: station.to_string(),
            fetched_at,
            count: board.len(),
            down: board.down.iter().map(ArrivalResult::from_arrival).collect(),
            up: board.up.iter().map(ArrivalResult::from_arrival).collect(),
        }
    }
}

/// One arrival in the JSON API.
#[derive(Debug, Serialize)]
pub struct ArrivalResult {
    /// Destination ("방면")
    pub direction: String,

    /// Headline status
    pub status: String,

    /// Remaining time text
    pub time: String,

    /// Current train location
    pub current: String,

    /// Raw line id
    pub line_id: String,

    /// Line display name
    pub line_name: String,

    /// Raw direction code
    pub updn_line: String,

    /// Last train of the day
    pub is_last_train: bool,
}

impl ArrivalResult {
    /// Create from a normalized arrival.
    pub fn from_arrival(arrival: &NormalizedArrival) -> Self {
        Self {
            direction: arrival.direction.clone(),
            status: arrival.status.clone(),
            time: arrival.time_display.clone(),
            current: arrival.current_location.clone(),
            line_id: arrival.line_id.clone(),
            line_name: arrival.line_name.clone(),
            updn_line: arrival.direction_raw.clone(),
            is_last_train: arrival.is_last_train,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,

    /// Error category, when the upstream feed failed
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<&'static str>,
}
