//! Travel direction derived from the upstream `updnLine` code.

use std::fmt;

/// Codes for up-direction / inner-loop trains.
const UP_TOKENS: [&str; 3] = ["상행", "내선", "상"];

/// Codes for down-direction / outer-loop trains.
const DOWN_TOKENS: [&str; 3] = ["하행", "외선", "하"];

/// Direction group of an arrival.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// 상행 / 내선
    Up,
    /// 하행 / 외선
    Down,
}

impl Direction {
    /// Classify a raw direction code.
    ///
    /// Codes matching neither token set are treated as [`Direction::Down`].
    pub fn classify(code: &str) -> Self {
        if UP_TOKENS.iter().any(|token| code.contains(token)) {
            return Direction::Up;
        }

        if !DOWN_TOKENS.iter().any(|token| code.contains(token)) {
            tracing::debug!(code, "unrecognized direction code, grouping as down");
        }
        Direction::Down
    }

    /// Korean label used for tabs and headings.
    pub fn label(&self) -> &'static str {
        match self {
            Direction::Up => "상행선",
            Direction::Down => "하행선",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("up"),
            Direction::Down => f.write_str("down"),
        }
    }
}
