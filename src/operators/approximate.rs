use serde::{Deserialize, Serialize};

use crate::operators::{is_strictly_better, is_strictly_worse, DominanceComparison, PairOutcome};

/// Approximate comparison of the lexicographic semiorder. This behaves like the
/// [`crate::operators::ExactComparison`] but, when neither point can be discarded, a point is
/// dropped if the other one lies in the same cell of a grid whose cells have width `epsilon`
/// and it is at least as good in all dimensions. This bounds the number of candidates stored
/// in any neighbourhood.
///
/// The advantage of the applicant over the candidate is tracked while scanning the dimensions
/// with two flags:
///  - `has_advantage`: the applicant is smaller than or equal to the candidate in all
///    dimensions scanned so far.
///  - `has_no_advantage`: the applicant is larger than the candidate in all dimensions scanned
///    so far.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ApproximateComparison {
    /// The width of a grid cell in each dimension.
    epsilon: Vec<f64>,
}

impl ApproximateComparison {
    /// Create the comparison operator. The epsilon values are validated by the tracker.
    ///
    /// # Arguments
    ///
    /// * `epsilon`: The width of a grid cell in each dimension.
    ///
    /// returns: `ApproximateComparison`
    pub(crate) fn new(epsilon: Vec<f64>) -> Self {
        Self { epsilon }
    }

    /// The width of a grid cell in each dimension.
    pub fn epsilon(&self) -> &[f64] {
        &self.epsilon
    }

    /// Get the index of the grid cell the point falls into.
    ///
    /// # Arguments
    ///
    /// * `point`: The point.
    ///
    /// returns: `Vec<f64>`. The cell index in each dimension.
    pub fn grid_cell(&self, point: &[f64]) -> Vec<f64> {
        point
            .iter()
            .zip(&self.epsilon)
            .map(|(v, e)| (v / e).floor())
            .collect()
    }

    /// Whether two points fall into the same grid cell.
    pub fn same_cell(&self, x: &[f64], y: &[f64]) -> bool {
        self.grid_cell(x) == self.grid_cell(y)
    }
}

impl DominanceComparison for ApproximateComparison {
    fn compare(&self, applicant: &[f64], candidate: &[f64], slack: &[f64]) -> PairOutcome {
        let mut has_advantage = true;
        let mut has_no_advantage = true;

        for i in 0..slack.len() {
            has_advantage = has_advantage && applicant[i] <= candidate[i];
            has_no_advantage = has_no_advantage && applicant[i] > candidate[i];

            if is_strictly_worse(applicant, candidate, slack, i) && has_no_advantage {
                return PairOutcome::DiscardApplicant;
            }
            if is_strictly_better(applicant, candidate, slack, i) && has_advantage {
                return PairOutcome::PruneCandidate;
            }
        }

        // no strict preference; check whether one of the two points is redundant
        if self.same_cell(applicant, candidate) {
            if has_advantage {
                return PairOutcome::PruneCandidate;
            }
            if has_no_advantage {
                return PairOutcome::DiscardApplicant;
            }
        }
        PairOutcome::Keep
    }
}

#[cfg(test)]
mod test {
    use crate::core::test_utils::assert_approx_array_eq;
    use crate::operators::{ApproximateComparison, DominanceComparison, PairOutcome};

    #[test]
    /// Test the grid cell index.
    fn test_grid_cell() {
        let c = ApproximateComparison::new(vec![0.1, 0.5, 2.0]);
        assert_approx_array_eq(&c.grid_cell(&[0.05, 0.75, -1.0]), &[0.0, 1.0, -1.0]);
        assert!(c.same_cell(&[0.01, 0.6, 1.9], &[0.09, 0.99, 0.0]));
        assert!(!c.same_cell(&[0.01, 0.6, 1.9], &[0.11, 0.99, 0.0]));
    }

    #[test]
    /// The applicant worse in all dimensions is discarded by the strict test.
    fn test_strictly_worse() {
        let c = ApproximateComparison::new(vec![0.1, 0.1, 0.1]);
        let slack = [0.0, 0.0, 0.0];
        assert_eq!(
            c.compare(&[0.06, 0.06, 0.06], &[0.05, 0.05, 0.05], &slack),
            PairOutcome::DiscardApplicant
        );
        assert_eq!(
            c.compare(&[0.05, 0.05, 0.05], &[0.06, 0.06, 0.06], &slack),
            PairOutcome::PruneCandidate
        );
    }

    #[test]
    /// Tied points in the same cell are deduplicated; tied points in different cells are kept.
    fn test_grid_redundancy() {
        let c = ApproximateComparison::new(vec![0.1, 0.1]);
        let slack = [0.05, 0.05];

        // applicant worse within the slack, same cell
        assert_eq!(
            c.compare(&[0.03, 0.04], &[0.01, 0.02], &slack),
            PairOutcome::DiscardApplicant
        );
        // applicant better within the slack, same cell
        assert_eq!(
            c.compare(&[0.01, 0.02], &[0.03, 0.04], &slack),
            PairOutcome::PruneCandidate
        );
        // identical points: the newest replaces the stored one
        assert_eq!(
            c.compare(&[0.01, 0.02], &[0.01, 0.02], &slack),
            PairOutcome::PruneCandidate
        );
        // mixed advantage in the same cell
        assert_eq!(
            c.compare(&[0.01, 0.04], &[0.03, 0.02], &slack),
            PairOutcome::Keep
        );
        // tied but in different cells
        assert_eq!(
            c.compare(&[0.11, 0.12], &[0.09, 0.08], &slack),
            PairOutcome::Keep
        );
    }

    #[test]
    /// A strict preference is decided before the grid test.
    fn test_strict_before_grid() {
        let c = ApproximateComparison::new(vec![10.0, 10.0]);
        let slack = [0.0, 0.0];
        // same cell, applicant better in dim 0 but worse in dim 1. The grid test alone would
        // keep both points, but the strict preference in dim 0 decides first
        assert_eq!(
            c.compare(&[0.1, 0.9], &[0.2, 0.1], &slack),
            PairOutcome::PruneCandidate
        );
        assert_eq!(
            c.compare(&[0.2, 0.1], &[0.1, 0.9], &slack),
            PairOutcome::DiscardApplicant
        );
    }
}
