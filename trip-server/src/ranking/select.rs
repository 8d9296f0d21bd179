//! Best-trip selection.
//!
//! The ranking engine is a pure transform: a batch of candidate itineraries
//! goes in, an ordered, bounded, flagged subset comes out. No state survives
//! the call.

use tracing::debug;

use crate::domain::TripResult;

use super::pareto::pareto_front;
use super::weights::{CriterionWeights, criterion_weights};
use super::TripDecision;

/// Maximum number of itineraries returned to the caller.
pub const MAX_RESULTS: usize = 10;

/// Min-max normalization; 0 when all values coincide.
fn min_max_normalize(value: f64, min: f64, max: f64) -> f64 {
    if min == max {
        0.0
    } else {
        (value - min) / (max - min)
    }
}

/// Minimum and maximum of a metric over the candidate set.
fn min_max_by<F>(decisions: &[TripDecision], metric: F) -> (f64, f64)
where
    F: Fn(&TripDecision) -> f64,
{
    decisions.iter().fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), d| {
        let value = metric(d);
        (min.min(value), max.max(value))
    })
}

/// Score for the public-transport-distance ratio.
///
/// Piecewise ease centered at 0.5: both branches evaluate to 0 at a balanced
/// car/transit split and approach 1 at the all-car and all-transit extremes,
/// so lopsided itineraries are penalized.
fn distance_ratio_score(ratio: f64) -> f64 {
    if ratio <= 0.5 {
        1.0 - 8.0 * ratio.powi(3)
    } else {
        1.0 - 4.0 * (1.0 - ratio).powi(2)
    }
}

/// Normalize all criteria over the filtered candidate set, in place.
fn normalize_criteria(decisions: &mut [TripDecision]) {
    let (min_time, max_time) = min_max_by(decisions, |d| d.total_time);
    let (min_transfers, max_transfers) = min_max_by(decisions, |d| d.total_transfers);
    let (min_emissions, max_emissions) = min_max_by(decisions, |d| d.total_emissions);
    let (min_delay, max_delay) = min_max_by(decisions, |d| d.total_delay);

    for d in decisions {
        d.total_time_normalized = min_max_normalize(d.total_time, min_time, max_time);
        d.total_transfers_normalized =
            min_max_normalize(d.total_transfers, min_transfers, max_transfers);
        d.total_emissions_normalized =
            min_max_normalize(d.total_emissions, min_emissions, max_emissions);
        d.total_delay_normalized = min_max_normalize(d.total_delay, min_delay, max_delay);
        d.distance_ratio_normalized = distance_ratio_score(d.distance_ratio);
    }
}

/// Weighted score of a normalized decision; lower is better.
fn score(decision: &TripDecision, weights: &CriterionWeights) -> f64 {
    decision.total_time_normalized * weights.time
        + decision.total_emissions_normalized * weights.emissions
        + decision.total_delay_normalized * weights.delay
        + decision.total_transfers_normalized * weights.transfers
        + decision.distance_ratio_normalized * weights.distance_ratio
}

/// Mark the kept itineraries with the lowest raw time and lowest raw
/// emissions. Ties go to the earliest-ranked itinerary.
fn flag_lowest_time_and_emissions(trips: &mut [TripResult]) {
    if trips.is_empty() {
        return;
    }

    let mut min_time_idx = 0;
    let mut min_emissions_idx = 0;
    for (i, trip) in trips.iter().enumerate() {
        if trip.total_time < trips[min_time_idx].total_time {
            min_time_idx = i;
        }
        if trip.total_emissions < trips[min_emissions_idx].total_emissions {
            min_emissions_idx = i;
        }
    }
    trips[min_time_idx].lowest_time = true;
    trips[min_emissions_idx].lowest_emissions = true;
}

/// Select and order the best itineraries of a candidate batch.
///
/// Batches of zero or one candidate are returned unchanged. Larger batches
/// are Pareto-filtered over {time, emissions, transfers}, scored with the
/// AHP criterion weights over the normalized metrics, sorted ascending by
/// score (lower is better), truncated to [`MAX_RESULTS`] and flagged.
///
/// Candidates that violate the domain preconditions are skipped without
/// failing the batch.
pub fn select_best_trips(trips: Vec<TripResult>) -> Vec<TripResult> {
    if trips.len() <= 1 {
        return trips;
    }

    let mut decisions: Vec<TripDecision> = Vec::with_capacity(trips.len());
    for (i, trip) in trips.iter().enumerate() {
        match TripDecision::from_trip(i, trip) {
            Ok(decision) => decisions.push(decision),
            Err(e) => debug!("skipping malformed itinerary {i}: {e}"),
        }
    }

    let mut front = pareto_front(decisions);
    normalize_criteria(&mut front);

    let weights = criterion_weights();
    front.sort_by(|a, b| {
        score(a, &weights)
            .partial_cmp(&score(b, &weights))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    front.truncate(MAX_RESULTS);

    // Move the winning candidates out of the batch, in score order
    let mut slots: Vec<Option<TripResult>> = trips.into_iter().map(Some).collect();
    let mut best: Vec<TripResult> = front
        .iter()
        .filter_map(|d| slots[d.trip_index].take())
        .collect();

    if let Some(first) = best.first_mut() {
        first.best_overall = true;
    }
    flag_lowest_time_and_emissions(&mut best);

    best
}
