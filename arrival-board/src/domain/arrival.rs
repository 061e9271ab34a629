//! Normalized arrival, ready for display.

use serde::Serialize;

use super::Direction;

/// One train arrival after normalization.
///
/// `direction`, `status`, `time_display`, `current_location` and `line_name`
/// always carry display text; empty upstream values are replaced by fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedArrival {
    /// Destination the train is bound for (`bstatnNm`)
    pub direction: String,

    /// Headline status, e.g. "전역 도착" or "3분 후"
    pub status: String,

    /// Remaining time text
    pub time_display: String,

    /// Where the train currently is
    pub current_location: String,

    /// Raw line id (`subwayId`)
    pub line_id: String,

    /// Human-readable line name
    pub line_name: String,

    /// Raw direction code (`updnLine`)
    pub direction_raw: String,

    /// Final service of the day
    pub is_last_train: bool,
}

impl NormalizedArrival {
    /// Direction group for this arrival.
    pub fn direction_group(&self) -> Direction {
        Direction::classify(&self.direction_raw)
    }
}
