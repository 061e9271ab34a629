//! Application state for the web layer.

use std::sync::Arc;

use crate::config::DashboardConfig;
use crate::seoul::ArrivalFeed;

/// Shared application state.
///
/// Holds no per-user data; the station and refresh counter travel with
/// each request.
#[derive(Clone)]
pub struct AppState {
    /// Arrival source, `None` while the access key is missing
    pub feed: Option<Arc<ArrivalFeed>>,

    /// Dashboard settings
    pub dashboard: Arc<DashboardConfig>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(feed: Option<ArrivalFeed>, dashboard: DashboardConfig) -> Self {
        Self {
            feed: feed.map(Arc::new),
            dashboard: Arc::new(dashboard),
        }
    }
}
