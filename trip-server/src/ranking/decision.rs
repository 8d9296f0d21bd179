//! Per-candidate ranking metrics.

use crate::domain::{DomainError, TripResult};

use super::critical::has_critical_delay;

/// Raw and normalized metrics for one candidate itinerary.
///
/// Created fresh for every ranking call and discarded after scoring; the
/// `trip_index` ties the decision back to its candidate in the input batch.
#[derive(Debug, Clone, PartialEq)]
pub struct TripDecision {
    pub trip_index: usize,

    /// Total travel time in minutes.
    pub total_time: f64,
    pub total_transfers: f64,
    pub total_emissions: f64,

    /// Summed effective delay over all legs, in minutes.
    pub total_delay: f64,

    /// Public transport distance / total distance, in [0, 1].
    pub distance_ratio: f64,

    /// Whether the delay on a leg would make its connection unreachable.
    pub is_delay_critical: bool,

    pub total_time_normalized: f64,
    pub total_transfers_normalized: f64,
    pub total_emissions_normalized: f64,
    pub total_delay_normalized: f64,
    pub distance_ratio_normalized: f64,
}

impl TripDecision {
    /// Derive the raw metrics for one candidate.
    ///
    /// # Errors
    ///
    /// Returns `Err` for itineraries violating the pipeline preconditions
    /// (no legs, non-positive distance, reversed time range). Such a
    /// candidate is skipped; the batch continues without it.
    pub fn from_trip(trip_index: usize, trip: &TripResult) -> Result<Self, DomainError> {
        trip.validate()?;

        Ok(Self {
            trip_index,
            total_time: trip.total_time as f64 / 60.0,
            total_transfers: trip.total_transfers as f64,
            total_emissions: trip.total_emissions,
            total_delay: trip.total_delay(),
            distance_ratio: trip.public_transport_distance() / trip.total_distance,
            is_delay_critical: has_critical_delay(trip),
            total_time_normalized: 0.0,
            total_transfers_normalized: 0.0,
            total_emissions_normalized: 0.0,
            total_delay_normalized: 0.0,
            distance_ratio_normalized: 0.0,
        })
    }
}
