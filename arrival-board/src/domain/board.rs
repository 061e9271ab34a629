//! Arrivals grouped by direction.

use super::{Direction, NormalizedArrival};

/// Arrivals at one station, split into up and down groups.
///
/// Upstream order is preserved within each group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirectionBoard {
    pub up: Vec<NormalizedArrival>,
    pub down: Vec<NormalizedArrival>,
}

impl DirectionBoard {
    /// Group arrivals by their direction code.
    pub fn from_arrivals(arrivals: impl IntoIterator<Item = NormalizedArrival>) -> Self {
        let mut board = Self::default();
        for arrival in arrivals {
            match arrival.direction_group() {
                Direction::Up => board.up.push(arrival),
                Direction::Down => board.down.push(arrival),
            }
        }
        board
    }

    /// Arrivals in one direction.
    pub fn group(&self, direction: Direction) -> &[NormalizedArrival] {
        match direction {
            Direction::Up => &self.up,
            Direction::Down => &self.down,
        }
    }

    /// Total number of arrivals.
    pub fn len(&self) -> usize {
        self.up.len() + self.down.len()
    }

    /// Whether there are no arrivals at all.
    pub fn is_empty(&self) -> bool {
        self.up.is_empty() && self.down.is_empty()
    }
}
