//! Pareto filter over candidate itineraries.

use super::TripDecision;

/// Does `a` dominate `b` over {time, emissions, transfers}?
///
/// `a` dominates iff it is no worse on every metric and strictly better on
/// at least one (all three minimized).
fn dominates(a: &TripDecision, b: &TripDecision) -> bool {
    if a.total_time > b.total_time
        || a.total_emissions > b.total_emissions
        || a.total_transfers > b.total_transfers
    {
        return false;
    }

    a.total_time < b.total_time
        || a.total_emissions < b.total_emissions
        || a.total_transfers < b.total_transfers
}

/// Keep only the Pareto-optimal candidates.
///
/// Builds the non-dominated front incrementally: each new candidate first
/// evicts any front member it dominates, then joins the front only if no
/// remaining member dominates it. The result does not depend on input order.
pub fn pareto_front(decisions: Vec<TripDecision>) -> Vec<TripDecision> {
    let mut front: Vec<TripDecision> = Vec::with_capacity(decisions.len());

    for decision in decisions {
        front.retain(|existing| !dominates(&decision, existing));

        if !front.iter().any(|existing| dominates(existing, &decision)) {
            front.push(decision);
        }
    }

    front
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decision(index: usize, time: f64, transfers: f64, emissions: f64) -> TripDecision {
        TripDecision {
            trip_index: index,
            total_time: time,
            total_transfers: transfers,
            total_emissions: emissions,
            total_delay: 0.0,
            distance_ratio: 0.5,
            is_delay_critical: false,
            total_time_normalized: 0.0,
            total_transfers_normalized: 0.0,
            total_emissions_normalized: 0.0,
            total_delay_normalized: 0.0,
            distance_ratio_normalized: 0.0,
        }
    }

    #[test]
    fn single_dominating_candidate_wins() {
        // Candidate (45, 0, 60) beats every other candidate on every axis.
        let decisions = vec![
            decision(0, 85.0, 2.0, 120.0),
            decision(1, 65.0, 1.0, 90.0),
            decision(2, 110.0, 3.0, 150.0),
            decision(3, 45.0, 0.0, 60.0),
            decision(4, 95.0, 2.0, 130.0),
        ];

        let front = pareto_front(decisions);
        assert_eq!(front.len(), 1);
        assert_eq!(front[0].trip_index, 3);
    }

    #[test]
    fn incomparable_candidates_all_survive() {
        // Each is best on a different axis.
        let decisions = vec![
            decision(0, 30.0, 3.0, 200.0),
            decision(1, 90.0, 0.0, 150.0),
            decision(2, 60.0, 2.0, 50.0),
        ];

        let front = pareto_front(decisions);
        assert_eq!(front.len(), 3);
    }

    #[test]
    fn dominated_candidate_is_dropped_even_if_seen_first() {
        let decisions = vec![
            decision(0, 60.0, 1.0, 100.0),
            decision(1, 50.0, 1.0, 100.0), // dominates index 0
        ];

        let front = pareto_front(decisions);
        assert_eq!(front.len(), 1);
        assert_eq!(front[0].trip_index, 1);
    }

    #[test]
    fn equal_candidates_keep_the_first() {
        // Identical on every axis: neither dominates, both stay.
        let decisions = vec![
            decision(0, 60.0, 1.0, 100.0),
            decision(1, 60.0, 1.0, 100.0),
        ];

        let front = pareto_front(decisions);
        assert_eq!(front.len(), 2);
    }

    #[test]
    fn empty_input() {
        assert!(pareto_front(vec![]).is_empty());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn decisions_strategy() -> impl Strategy<Value = Vec<TripDecision>> {
        prop::collection::vec(
            (0.0f64..200.0, 0u32..5, 0.0f64..300.0),
            0..25,
        )
        .prop_map(|params| {
            params
                .into_iter()
                .enumerate()
                .map(|(i, (time, transfers, emissions))| TripDecision {
                    trip_index: i,
                    total_time: time,
                    total_transfers: transfers as f64,
                    total_emissions: emissions,
                    total_delay: 0.0,
                    distance_ratio: 0.5,
                    is_delay_critical: false,
                    total_time_normalized: 0.0,
                    total_transfers_normalized: 0.0,
                    total_emissions_normalized: 0.0,
                    total_delay_normalized: 0.0,
                    distance_ratio_normalized: 0.0,
                })
                .collect()
        })
    }

    proptest! {
        #[test]
        fn front_has_no_internal_domination(decisions in decisions_strategy()) {
            let front = pareto_front(decisions);

            for (i, a) in front.iter().enumerate() {
                for (j, b) in front.iter().enumerate() {
                    if i != j {
                        prop_assert!(
                            !dominates(a, b),
                            "front member {} dominates front member {}",
                            i,
                            j
                        );
                    }
                }
            }
        }

        #[test]
        fn dropped_candidates_are_dominated_by_the_front(decisions in decisions_strategy()) {
            let front = pareto_front(decisions.clone());

            for candidate in &decisions {
                let kept = front.iter().any(|f| f.trip_index == candidate.trip_index);
                if !kept {
                    prop_assert!(
                        front.iter().any(|f| dominates(f, candidate)),
                        "dropped candidate {} is not dominated by any front member",
                        candidate.trip_index
                    );
                }
            }
        }

        #[test]
        fn front_is_a_subset(decisions in decisions_strategy()) {
            let len = decisions.len();
            let front = pareto_front(decisions);
            prop_assert!(front.len() <= len);
        }
    }
}
