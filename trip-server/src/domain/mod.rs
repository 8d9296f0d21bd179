//! Domain types for the multimodal trip planner.
//!
//! This module contains the core domain model: transport modes, trip legs
//! with their delay annotations, and complete itineraries. Itineraries arrive
//! from the external itinerary generator already carrying geometry and delay
//! data; the ranking and traffic engines only read them and attach flags and
//! overlays.

mod delay;
mod emissions;
mod error;
mod mode;
mod trip;

pub use delay::{DELAY_UNKNOWN, DelayAnnotation, PastDelay};
pub use emissions::{
    BUS_EMISSIONS_G_PER_KM, CAR_EMISSIONS_G_PER_KM, TRAIN_EMISSIONS_G_PER_KM, trip_emissions,
};
pub use error::DomainError;
pub use mode::TransportMode;
pub use trip::{TripLeg, TripResult};
