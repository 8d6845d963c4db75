use crate::operators::{is_strictly_better, is_strictly_worse, DominanceComparison, PairOutcome};

/// Exact comparison of the lexicographic semiorder. A point is discarded when it is strictly
/// worse than another point in a dimension, unless it has an advantage in one of the
/// preceding dimensions.
///
/// The worse/better tests account for the slack, while the advantage test on the preceding
/// dimensions uses the raw values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExactComparison;

impl ExactComparison {
    /// Whether `dominated` can be discarded by `dominator` after a strict preference for
    /// `dominator` was detected in `dimension`. This is `false` when `dominated` is better than
    /// `dominator` in any of the preceding dimensions.
    ///
    /// # Arguments
    ///
    /// * `dominator`: The point that possibly discards the other.
    /// * `dominated`: The point to be discarded.
    /// * `dimension`: The dimension where the strict preference was detected.
    ///
    /// returns: `bool`
    pub fn discardable(dominator: &[f64], dominated: &[f64], dimension: usize) -> bool {
        !(0..dimension).any(|j| dominator[j] > dominated[j])
    }
}

impl DominanceComparison for ExactComparison {
    fn compare(&self, applicant: &[f64], candidate: &[f64], slack: &[f64]) -> PairOutcome {
        for i in 0..slack.len() {
            if is_strictly_worse(applicant, candidate, slack, i)
                && Self::discardable(candidate, applicant, i)
            {
                return PairOutcome::DiscardApplicant;
            }
            if is_strictly_better(applicant, candidate, slack, i)
                && Self::discardable(applicant, candidate, i)
            {
                return PairOutcome::PruneCandidate;
            }
        }
        PairOutcome::Keep
    }
}
