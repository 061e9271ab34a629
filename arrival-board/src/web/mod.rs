//! Web layer for the arrival board.
//!
//! Serves the dashboard page and a JSON endpoint for a station's arrivals.

mod dto;
mod notice;
mod routes;
mod session;
mod state;
pub mod templates;

pub use dto::*;
pub use notice::{Notice, NoticeLevel};
pub use routes::{AppError, create_router};
pub use session::{DashboardQuery, Session};
pub use state::AppState;
pub use templates::*;
