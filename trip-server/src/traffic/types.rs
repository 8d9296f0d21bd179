//! Traffic feed wire types.
//!
//! The feed document mirrors the upstream incident feed: point-located
//! alerts and congestion polylines ("jams"). Field names follow the feed's
//! camelCase convention so the document deserializes directly.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Incident category reported by the feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    Accident,
    Jam,
    Hazard,
    RoadClosed,
    Construction,
    #[serde(other)]
    Unknown,
}

/// A geographic position as the feed encodes it: `x` is longitude, `y` is
/// latitude (EPSG:4326).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedLocation {
    pub x: f64,
    pub y: f64,
}

/// A point-located traffic incident.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub uuid: Uuid,
    pub location: FeedLocation,

    #[serde(rename = "type")]
    pub kind: AlertKind,

    #[serde(default)]
    pub subtype: String,

    #[serde(default)]
    pub street: Option<String>,

    #[serde(default)]
    pub city: String,

    #[serde(default)]
    pub report_rating: u8,

    #[serde(default)]
    pub reliability: u8,

    #[serde(default)]
    pub confidence: u8,

    /// Publication time in Unix milliseconds.
    #[serde(default)]
    pub pub_millis: i64,
}

/// A congestion stretch reported as a polyline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Jam {
    pub uuid: i64,

    /// Vertices of the congestion polyline, in travel direction.
    #[serde(default)]
    pub line: Vec<FeedLocation>,

    /// Current speed in m/s.
    #[serde(default)]
    pub speed: f64,

    #[serde(default, rename = "speedKMH")]
    pub speed_kmh: f64,

    /// Stretch length in meters.
    #[serde(default)]
    pub length: f64,

    /// Extra travel time in seconds.
    #[serde(default)]
    pub delay: f64,

    /// Congestion severity, 0 (free flow) to 5 (blocked).
    #[serde(default)]
    pub level: u8,

    #[serde(default)]
    pub street: String,

    #[serde(default)]
    pub city: String,

    /// Road-closure alert this jam is caused by, when the feed knows it.
    #[serde(default)]
    pub blocking_alert_uuid: Option<Uuid>,

    /// Whether the road is actually closed. Never trusted from the feed:
    /// reset on every refresh and recomputed during closure reconciliation.
    #[serde(default)]
    pub road_closed: bool,

    /// Publication time in Unix milliseconds.
    #[serde(default)]
    pub pub_millis: i64,
}

/// One generation of the upstream feed document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficFeed {
    #[serde(default)]
    pub alerts: Vec<Alert>,

    #[serde(default)]
    pub jams: Vec<Jam>,

    // The upstream feed spells these fields "Milis".
    #[serde(default)]
    pub start_time_milis: i64,

    #[serde(default)]
    pub end_time_milis: i64,

    #[serde(default)]
    pub start_time: String,

    #[serde(default)]
    pub end_time: String,
}

/// Traffic events matched against one itinerary's route geometry.
///
/// Jam lines are sliced down to the stretch actually neighboring the route.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficOverlay {
    #[serde(default)]
    pub alerts: Vec<Alert>,

    #[serde(default)]
    pub jams: Vec<Jam>,
}
