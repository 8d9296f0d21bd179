//! Multi-criteria trip ranking engine.
//!
//! Filters a batch of candidate itineraries down to the Pareto-optimal set
//! over {time, emissions, transfers}, scores the survivors with AHP-derived
//! criterion weights over normalized metrics, and returns an ordered,
//! bounded, flagged subset. The engine is a pure function of its input
//! batch; concurrent requests share nothing but the process-lifetime weight
//! vector.

mod critical;
mod decision;
mod pareto;
mod select;
mod weights;

pub use critical::has_critical_delay;
pub use decision::TripDecision;
pub use pareto::pareto_front;
pub use select::{MAX_RESULTS, select_best_trips};
pub use weights::{CRITERIA_COUNT, CriterionWeights, criterion_weights};
