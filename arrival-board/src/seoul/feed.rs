//! Arrival source used by the web layer.

use crate::domain::{DirectionBoard, NormalizedArrival};

use super::client::SeoulClient;
use super::convert::normalize;
use super::error::FetchError;
use super::fixture::FixtureFeed;
use super::types::FeedPayload;

/// Where arrivals come from: the live API or recorded fixtures.
#[derive(Debug, Clone)]
pub enum ArrivalFeed {
    Live(SeoulClient),
    Fixture(FixtureFeed),
}

impl ArrivalFeed {
    /// Fetch the raw payload for a station.
    pub async fn fetch(&self, station: &str) -> Result<FeedPayload, FetchError> {
        match self {
            ArrivalFeed::Live(client) => client.fetch(station).await,
            ArrivalFeed::Fixture(fixtures) => fixtures.fetch(station).await,
        }
    }

    /// Fetch and normalize arrivals for a station, in upstream order.
    pub async fn arrivals(&self, station: &str) -> Result<Vec<NormalizedArrival>, FetchError> {
        let payload = self.fetch(station).await?;
        Ok(payload.arrivals.iter().map(normalize).collect())
    }

    /// Fetch arrivals for a station, grouped by direction.
    pub async fn board(&self, station: &str) -> Result<DirectionBoard, FetchError> {
        Ok(DirectionBoard::from_arrivals(self.arrivals(station).await?))
    }

    /// Short description for startup logs.
    pub fn describe(&self) -> &'static str {
        match self {
            ArrivalFeed::Live(_) => "live",
            ArrivalFeed::Fixture(_) => "fixtures",
        }
    }
}
