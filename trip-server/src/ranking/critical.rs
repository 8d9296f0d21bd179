//! Delay criticality check.

use crate::domain::{TripLeg, TripResult};

/// Would the current delay make a connection unreachable?
///
/// Scans the legs in order and decides at the *first* public transport leg
/// found:
///
/// - followed by another public transport leg: critical iff the leg's end
///   time plus its delay is later than the next leg's start;
/// - followed by a walk to a public transport leg two positions ahead:
///   critical iff the end time plus delay plus the walking duration is
///   later than that leg's start;
/// - anything else: not critical.
///
/// Only the first public transport leg is inspected; later transfers are
/// not checked even if the first one is fine.
pub fn has_critical_delay(trip: &TripResult) -> bool {
    let is_public_transport = |leg: &TripLeg| leg.mode_of_transport.is_public_transport();

    for (i, window) in trip.legs.windows(2).enumerate() {
        let leg = &window[0];
        if !is_public_transport(leg) {
            continue;
        }

        let delay_secs = (leg.effective_delay() * 60.0) as i64;
        let next = &window[1];

        // Public transport directly followed by public transport
        if is_public_transport(next) {
            let end_with_delay = leg.end_time + chrono::Duration::seconds(delay_secs);
            return end_with_delay > next.start_time;
        }

        // Public transport, then a walk to another stop, then public
        // transport again
        if next.mode_of_transport == crate::domain::TransportMode::Foot {
            if let Some(after_walk) = trip.legs.get(i + 2)
                && is_public_transport(after_walk)
            {
                let walk_secs = next.duration().num_seconds();
                let end_with_delay_and_walk =
                    leg.end_time + chrono::Duration::seconds(delay_secs + walk_secs);
                return end_with_delay_and_walk > after_walk.start_time;
            }
        }

        return false;
    }
    false
}
