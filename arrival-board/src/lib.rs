//! Subway arrival board server.
//!
//! A web dashboard that answers: "When is the next train at this station,
//! in each direction?" using the Seoul Open Data realtime arrival feed.

pub mod config;
pub mod domain;
pub mod seoul;
pub mod web;
