//! Criterion weights derived with the Analytic Hierarchy Process.
//!
//! The pairwise comparison matrix encodes how much more important each
//! criterion is than the others. Weights are derived once per process with
//! the geometric-mean method: per-row product, nth root, normalized to sum
//! to 1.

use std::sync::LazyLock;

/// Number of ranking criteria.
pub const CRITERIA_COUNT: usize = 5;

/// Pairwise comparison matrix.
///
/// Row/column order: total time, total emissions, accumulated delay,
/// transfer count, public-transport-distance ratio. Entry `[i][j]` states
/// how much more important criterion `i` is than criterion `j`.
const COMPARISON_MATRIX: [[f64; CRITERIA_COUNT]; CRITERIA_COUNT] = [
    [1.0, 5.0, 3.0, 7.0, 1.0 / 3.0],
    [1.0 / 5.0, 1.0, 1.0 / 5.0, 3.0, 1.0 / 9.0],
    [1.0 / 3.0, 5.0, 1.0, 7.0, 1.0 / 9.0],
    [1.0 / 7.0, 1.0 / 3.0, 1.0 / 7.0, 1.0, 1.0 / 9.0],
    [3.0, 9.0, 9.0, 9.0, 1.0],
];

/// Relative importance of each ranking criterion.
///
/// Non-negative, sums to 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CriterionWeights {
    pub time: f64,
    pub emissions: f64,
    pub delay: f64,
    pub transfers: f64,
    pub distance_ratio: f64,
}

static WEIGHTS: LazyLock<CriterionWeights> = LazyLock::new(|| derive_weights(&COMPARISON_MATRIX));

/// The process-lifetime criterion weights.
pub fn criterion_weights() -> CriterionWeights {
    *WEIGHTS
}

/// Derive weights from a pairwise comparison matrix with the geometric-mean
/// method.
fn derive_weights(matrix: &[[f64; CRITERIA_COUNT]; CRITERIA_COUNT]) -> CriterionWeights {
    let mut raw = [0.0; CRITERIA_COUNT];
    for (i, row) in matrix.iter().enumerate() {
        let product: f64 = row.iter().product();
        raw[i] = product.powf(1.0 / CRITERIA_COUNT as f64);
    }

    let sum: f64 = raw.iter().sum();
    for weight in &mut raw {
        *weight /= sum;
    }

    CriterionWeights {
        time: raw[0],
        emissions: raw[1],
        delay: raw[2],
        transfers: raw[3],
        distance_ratio: raw[4],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_array(w: CriterionWeights) -> [f64; CRITERIA_COUNT] {
        [w.time, w.emissions, w.delay, w.transfers, w.distance_ratio]
    }

    #[test]
    fn weights_sum_to_one() {
        let sum: f64 = as_array(criterion_weights()).iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "sum = {sum}");
    }

    #[test]
    fn weights_are_positive() {
        for w in as_array(criterion_weights()) {
            assert!(w > 0.0);
        }
    }

    #[test]
    fn ratio_criterion_dominates() {
        // The matrix rates the distance ratio far above everything else;
        // the derived weights must reflect that ordering.
        let w = criterion_weights();
        assert!(w.distance_ratio > w.time);
        assert!(w.time > w.delay);
        assert!(w.delay > w.emissions);
        assert!(w.emissions > w.transfers);
    }

    #[test]
    fn indifferent_judgments_give_uniform_weights() {
        let matrix = [[1.0; CRITERIA_COUNT]; CRITERIA_COUNT];
        let w = derive_weights(&matrix);
        for value in as_array(w) {
            assert!((value - 0.2).abs() < 1e-12);
        }
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Strategy for a reciprocal pairwise comparison matrix with entries
    /// drawn from the usual 1/9 ..= 9 judgment scale.
    fn matrix_strategy() -> impl Strategy<Value = [[f64; CRITERIA_COUNT]; CRITERIA_COUNT]> {
        prop::collection::vec(1.0f64..9.0, CRITERIA_COUNT * CRITERIA_COUNT).prop_map(|values| {
            let mut matrix = [[1.0; CRITERIA_COUNT]; CRITERIA_COUNT];
            let mut k = 0;
            for i in 0..CRITERIA_COUNT {
                for j in (i + 1)..CRITERIA_COUNT {
                    matrix[i][j] = values[k];
                    matrix[j][i] = 1.0 / values[k];
                    k += 1;
                }
            }
            matrix
        })
    }

    proptest! {
        #[test]
        fn derived_weights_sum_to_one(matrix in matrix_strategy()) {
            let w = derive_weights(&matrix);
            let sum = w.time + w.emissions + w.delay + w.transfers + w.distance_ratio;
            prop_assert!((sum - 1.0).abs() < 1e-9);
        }

        #[test]
        fn derived_weights_are_positive(matrix in matrix_strategy()) {
            let w = derive_weights(&matrix);
            for value in [w.time, w.emissions, w.delay, w.transfers, w.distance_ratio] {
                prop_assert!(value > 0.0);
            }
        }
    }
}
