//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::TripResult;

/// Request to select the best itineraries from a candidate batch.
///
/// Candidates come from the external itinerary generator with leg geometry
/// and delay annotations already attached.
#[derive(Debug, Deserialize)]
pub struct SelectTripsRequest {
    pub trips: Vec<TripResult>,
}

/// One returned itinerary, tagged with a fresh identifier so clients can
/// reference it in follow-up requests.
#[derive(Debug, Serialize)]
pub struct TripWithId {
    pub uuid: Uuid,

    #[serde(flatten)]
    pub trip: TripResult,
}

impl TripWithId {
    /// Wrap a trip with a freshly generated identifier.
    pub fn new(trip: TripResult) -> Self {
        Self {
            uuid: Uuid::new_v4(),
            trip,
        }
    }
}

/// Response with the ranked, flagged and traffic-annotated itineraries.
#[derive(Debug, Serialize)]
pub struct SelectTripsResponse {
    pub trips: Vec<TripWithId>,
}

/// Diagnostic view of the current traffic snapshot.
#[derive(Debug, Serialize)]
pub struct TrafficStatusResponse {
    /// Whether a feed endpoint is configured
    pub configured: bool,

    /// Alerts in the current snapshot generation
    pub alerts: usize,

    /// Jams in the current snapshot generation
    pub jams: usize,
}
