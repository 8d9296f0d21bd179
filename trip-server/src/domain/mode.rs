//! Transport mode enumeration.

use serde::{Deserialize, Serialize};

/// Mode of transport for a single trip leg.
///
/// The set mirrors what the itinerary generator can produce: private car,
/// walking, and the public transport modes running in the served region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportMode {
    Car,
    Foot,
    Bus,
    Rail,
    Tram,
    Trolleybus,
    Metro,
}

impl TransportMode {
    /// Returns true for scheduled public transport (anything that can be
    /// delayed against a timetable).
    pub fn is_public_transport(self) -> bool {
        !matches!(self, TransportMode::Car | TransportMode::Foot)
    }

    /// Returns true for modes that travel on roads.
    ///
    /// Rail runs on its own right of way, so road traffic events are never
    /// relevant to a rail leg.
    pub fn is_road_based(self) -> bool {
        !matches!(self, TransportMode::Rail)
    }
}
