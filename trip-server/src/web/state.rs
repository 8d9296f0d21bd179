//! Application state for the web layer.

use std::sync::Arc;

use crate::traffic::TrafficService;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Traffic snapshot service (shared with the background refresh task)
    pub traffic: Arc<TrafficService>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(traffic: TrafficService) -> Self {
        Self {
            traffic: Arc::new(traffic),
        }
    }
}
