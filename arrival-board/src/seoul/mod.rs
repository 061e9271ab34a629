//! Seoul Open Data realtime subway arrival feed.
//!
//! This module provides an HTTP client for the `realtimeStationArrival`
//! API, a lenient parser for its responses, and the conversion from raw
//! arrival records to [`crate::domain::NormalizedArrival`].
//!
//! Key characteristics of the feed:
//! - Numeric fields arrive as strings or numbers
//! - The arrival list has appeared under two key names, or as a bare list
//! - The message fields sometimes carry operator/internal strings instead
//!   of rider-facing text

mod client;
mod convert;
mod error;
mod feed;
mod fixture;
mod types;

pub use client::{DEFAULT_BASE_URL, SeoulClient, SeoulConfig};
pub use convert::normalize;
pub use error::FetchError;
pub use feed::ArrivalFeed;
pub use fixture::FixtureFeed;
pub use types::{FeedPayload, FeedShape, RawArrival, SUCCESS_CODE, Scalar, parse_feed};
