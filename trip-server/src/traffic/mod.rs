//! Traffic correlation engine.
//!
//! Maintains a background-refreshed snapshot of live traffic incidents
//! (point alerts and congestion polylines) behind two spatial indexes, and
//! matches itinerary route geometry against it: nearby same-heading jams
//! and nearby alerts are attached to each itinerary, with road-closure
//! links between jams and alerts reconciled afterwards.

mod client;
mod error;
mod matcher;
mod service;
mod snapshot;
mod types;

pub use client::{TrafficFeedClient, TrafficFeedConfig};
pub use error::TrafficError;
pub use matcher::{
    HEADING_COSINE_THRESHOLD, MATCH_DISTANCE_TOLERANCE, QUERY_TOLERANCE_METERS, attach_traffic,
};
pub use service::{REFRESH_INTERVAL, RETRY_DELAY, TrafficService};
pub use snapshot::{AlertPoint, JamSegment, TrafficSnapshot};
pub use types::{Alert, AlertKind, FeedLocation, Jam, TrafficFeed, TrafficOverlay};
