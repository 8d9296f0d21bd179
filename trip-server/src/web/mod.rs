//! Web layer for the trip planning server.
//!
//! A thin HTTP surface: candidate itineraries come in as JSON, the ranked
//! and traffic-annotated subset goes out. Itinerary generation, geocoding
//! and presentation live in external collaborators.

mod dto;
mod routes;
mod state;

pub use dto::{SelectTripsRequest, SelectTripsResponse, TrafficStatusResponse, TripWithId};
pub use routes::create_router;
pub use state::AppState;
