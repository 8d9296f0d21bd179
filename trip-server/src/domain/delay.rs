//! Per-leg delay annotations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Sentinel meaning "no realtime delay reading available".
///
/// The delay provider reports `-1` rather than omitting the field, so the
/// sentinel is part of the wire contract.
pub const DELAY_UNKNOWN: f64 = -1.0;

/// A recorded delay for one past service day, in minutes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PastDelay {
    pub date: NaiveDate,
    pub delay: f64,
}

/// Realtime and historical schedule deviation for a single leg.
///
/// All delays are in minutes. `current_delay` is [`DELAY_UNKNOWN`] when the
/// vehicle is not currently being tracked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DelayAnnotation {
    pub average_delay: f64,
    pub current_delay: f64,
    pub past_delays: Vec<PastDelay>,
}

impl DelayAnnotation {
    /// An annotation carrying no delay information at all.
    pub fn unknown() -> Self {
        Self {
            average_delay: 0.0,
            current_delay: DELAY_UNKNOWN,
            past_delays: Vec::new(),
        }
    }

    /// The delay to use in calculations: the realtime reading when one
    /// exists, the historical average otherwise.
    pub fn effective_delay(&self) -> f64 {
        if self.current_delay != DELAY_UNKNOWN {
            self.current_delay
        } else {
            self.average_delay
        }
    }
}

impl Default for DelayAnnotation {
    fn default() -> Self {
        Self::unknown()
    }
}
