use crate::operators::{ApproximateComparison, ExactComparison};

/// The outcome of comparing a new point (the applicant) against one candidate.
#[derive(Debug, PartialOrd, PartialEq, Clone, Copy)]
pub enum PairOutcome {
    /// The applicant is dominated or redundant and must be discarded. No further candidate
    /// needs to be compared.
    DiscardApplicant,
    /// The candidate is dominated or redundant and must be removed from the candidate set.
    PruneCandidate,
    /// Neither point can be discarded. Both stay candidates.
    Keep,
}

/// A trait to implement the comparison between a new point and a point already in the
/// candidate set of a tracker.
pub trait DominanceComparison {
    /// Compare the applicant against a candidate.
    ///
    /// # Arguments
    ///
    /// * `applicant`: The point being added to the tracker.
    /// * `candidate`: The point already stored as candidate.
    /// * `slack`: The tolerance in each dimension.
    ///
    /// returns: `PairOutcome`.
    fn compare(&self, applicant: &[f64], candidate: &[f64], slack: &[f64]) -> PairOutcome;
}

/// Whether `x` is strictly worse than `y` in dimension `i`, i.e. `x` exceeds `y` by more than
/// the slack.
#[inline]
pub fn is_strictly_worse(x: &[f64], y: &[f64], slack: &[f64], i: usize) -> bool {
    x[i] > y[i] + slack[i]
}

/// Whether `x` is strictly better than `y` in dimension `i`, i.e. `x` is below `y` by more than
/// the slack.
#[inline]
pub fn is_strictly_better(x: &[f64], y: &[f64], slack: &[f64], i: usize) -> bool {
    x[i] + slack[i] < y[i]
}

/// The policy used by a tracker to decide which points are discarded.
#[derive(Debug, Clone, PartialEq)]
pub enum DiscardPolicy {
    /// Keep all candidates that may become minimal.
    Exact(ExactComparison),
    /// Additionally drop candidates that are redundant within the same epsilon-grid cell.
    Approximate(ApproximateComparison),
}

impl DiscardPolicy {
    /// The name of the policy.
    pub fn name(&self) -> String {
        match self {
            DiscardPolicy::Exact(_) => "ExactMinTracker".to_string(),
            DiscardPolicy::Approximate(_) => "ApproximateMinTracker".to_string(),
        }
    }

    /// The grid-cell width in each dimension. This is `None` for the exact policy.
    pub fn epsilon(&self) -> Option<&[f64]> {
        match self {
            DiscardPolicy::Exact(_) => None,
            DiscardPolicy::Approximate(c) => Some(c.epsilon()),
        }
    }
}

impl DominanceComparison for DiscardPolicy {
    fn compare(&self, applicant: &[f64], candidate: &[f64], slack: &[f64]) -> PairOutcome {
        match self {
            DiscardPolicy::Exact(c) => c.compare(applicant, candidate, slack),
            DiscardPolicy::Approximate(c) => c.compare(applicant, candidate, slack),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::operators::{is_strictly_better, is_strictly_worse};

    #[test]
    /// Values within the slack band are neither worse nor better.
    fn test_tolerance_band() {
        let slack = [0.2, 0.0];
        let x = [0.3, 0.5];
        let y = [0.1, 0.5];

        // 0.3 is not above 0.1 + 0.2
        assert!(!is_strictly_worse(&x, &y, &slack, 0));
        assert!(!is_strictly_better(&y, &x, &slack, 0));

        let x = [0.31, 0.5];
        assert!(is_strictly_worse(&x, &y, &slack, 0));
        assert!(is_strictly_better(&y, &x, &slack, 0));

        // equal values with zero slack are tied
        assert!(!is_strictly_worse(&x, &y, &slack, 1));
        assert!(!is_strictly_better(&x, &y, &slack, 1));
    }
}
