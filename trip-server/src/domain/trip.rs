//! Itinerary and leg types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::traffic::TrafficOverlay;

use super::{DelayAnnotation, DomainError, TransportMode};

/// One leg of an itinerary: a stretch travelled with a single mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripLeg {
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub mode_of_transport: TransportMode,

    /// Name of the place where the leg begins.
    pub from: String,

    /// Name of the place where the leg ends.
    pub to: String,

    /// Leg distance in kilometers.
    pub distance: f64,

    /// Public line identifier, empty for car and walking legs.
    #[serde(default)]
    pub line: String,

    /// Leg geometry as an encoded polyline (precision 5).
    pub route: String,

    /// Realtime and historical delay data for this leg.
    #[serde(default)]
    pub delays: DelayAnnotation,
}

impl TripLeg {
    /// Scheduled duration of the leg.
    pub fn duration(&self) -> chrono::Duration {
        self.end_time.signed_duration_since(self.start_time)
    }

    /// Delay to use for this leg, in minutes.
    pub fn effective_delay(&self) -> f64 {
        self.delays.effective_delay()
    }
}

/// A complete candidate itinerary.
///
/// Produced by the external itinerary generator, then annotated in place by
/// the ranking engine (highlight flags) and the traffic correlation engine
/// (traffic overlay).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripResult {
    /// Total duration in seconds.
    pub total_time: i64,

    /// Total distance in kilometers.
    pub total_distance: f64,

    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    pub legs: Vec<TripLeg>,

    pub total_transfers: u32,

    /// Total emissions in grams of CO2.
    pub total_emissions: f64,

    /// Transfer stop the trip routes through, empty for direct trips.
    #[serde(default)]
    pub via: String,

    /// Set on the single best-scoring itinerary of a batch.
    #[serde(default)]
    pub best_overall: bool,

    /// Set on the kept itinerary with the lowest total time.
    #[serde(default)]
    pub lowest_time: bool,

    /// Set on the kept itinerary with the lowest total emissions.
    #[serde(default)]
    pub lowest_emissions: bool,

    /// Traffic events matched against this itinerary's route geometry.
    #[serde(default)]
    pub traffic_events: TrafficOverlay,
}

impl TripResult {
    /// Check the preconditions the ranking pipeline relies on.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the itinerary has no legs, a non-positive total
    /// distance, or ends before it starts.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.legs.is_empty() {
            return Err(DomainError::EmptyTrip);
        }
        if !(self.total_distance > 0.0) {
            return Err(DomainError::InvalidDistance(self.total_distance));
        }
        if self.end_time < self.start_time {
            return Err(DomainError::InvalidTimeRange);
        }
        Ok(())
    }

    /// Summed distance of legs travelled by public transport, in kilometers.
    pub fn public_transport_distance(&self) -> f64 {
        self.legs
            .iter()
            .filter(|leg| leg.mode_of_transport.is_public_transport())
            .map(|leg| leg.distance)
            .sum()
    }

    /// Summed effective delay over all legs, in minutes.
    pub fn total_delay(&self) -> f64 {
        self.legs.iter().map(TripLeg::effective_delay).sum()
    }
}
