//! Domain error types.
//!
//! These errors represent precondition violations in itineraries handed over
//! by the external generator. A violating itinerary is skipped by the
//! pipeline; the rest of the batch is unaffected.

/// Domain-level validation errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum DomainError {
    /// Itinerary carries no legs at all
    #[error("trip has no legs")]
    EmptyTrip,

    /// Total distance must be positive to form the distance ratio
    #[error("trip total distance must be positive (got {0})")]
    InvalidDistance(f64),

    /// Itinerary ends before it starts
    #[error("trip ends before it starts")]
    InvalidTimeRange,
}
