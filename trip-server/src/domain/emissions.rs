//! Emissions estimation.
//!
//! Average emissions per transport mode, in grams of CO2 per kilometer per
//! passenger. Trams, trolleybuses and the metro are not in the published
//! per-passenger table and contribute zero.

use super::{TransportMode, TripResult};

pub const CAR_EMISSIONS_G_PER_KM: f64 = 192.0;
pub const BUS_EMISSIONS_G_PER_KM: f64 = 68.0;
pub const TRAIN_EMISSIONS_G_PER_KM: f64 = 35.0;

/// Total emissions for a trip, summed over its legs by mode and distance.
pub fn trip_emissions(trip: &TripResult) -> f64 {
    trip.legs
        .iter()
        .map(|leg| match leg.mode_of_transport {
            TransportMode::Car => leg.distance * CAR_EMISSIONS_G_PER_KM,
            TransportMode::Bus => leg.distance * BUS_EMISSIONS_G_PER_KM,
            TransportMode::Rail => leg.distance * TRAIN_EMISSIONS_G_PER_KM,
            _ => 0.0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DelayAnnotation;
    use crate::traffic::TrafficOverlay;
    use chrono::{TimeZone, Utc};

    fn leg(mode: TransportMode, distance: f64) -> crate::domain::TripLeg {
        crate::domain::TripLeg {
            start_time: Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 6, 3, 10, 30, 0).unwrap(),
            mode_of_transport: mode,
            from: "A".into(),
            to: "B".into(),
            distance,
            line: String::new(),
            route: String::new(),
            delays: DelayAnnotation::unknown(),
        }
    }

    fn trip(legs: Vec<crate::domain::TripLeg>) -> TripResult {
        TripResult {
            total_time: 1800,
            total_distance: legs.iter().map(|l| l.distance).sum(),
            start_time: Utc.with_ymd_and_hms(2024, 6, 3, 10, 0, 0).unwrap(),
            end_time: Utc.with_ymd_and_hms(2024, 6, 3, 10, 30, 0).unwrap(),
            legs,
            total_transfers: 0,
            total_emissions: 0.0,
            via: String::new(),
            best_overall: false,
            lowest_time: false,
            lowest_emissions: false,
            traffic_events: TrafficOverlay::default(),
        }
    }

    #[test]
    fn emissions_by_mode() {
        let trip = trip(vec![
            leg(TransportMode::Car, 10.0),
            leg(TransportMode::Bus, 5.0),
            leg(TransportMode::Rail, 20.0),
        ]);
        let expected = 10.0 * CAR_EMISSIONS_G_PER_KM
            + 5.0 * BUS_EMISSIONS_G_PER_KM
            + 20.0 * TRAIN_EMISSIONS_G_PER_KM;
        assert_eq!(trip_emissions(&trip), expected);
    }

    #[test]
    fn walking_and_tram_are_free() {
        let trip = trip(vec![
            leg(TransportMode::Foot, 1.0),
            leg(TransportMode::Tram, 4.0),
            leg(TransportMode::Trolleybus, 2.0),
            leg(TransportMode::Metro, 6.0),
        ]);
        assert_eq!(trip_emissions(&trip), 0.0);
    }
}
