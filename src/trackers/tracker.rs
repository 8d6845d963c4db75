use std::fmt::{Display, Formatter};
use std::time::Instant;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::core::point::{check_point, validate_epsilon, validate_slack};
use crate::core::{MError, Point};
use crate::operators::{
    ApproximateComparison, DiscardPolicy, DominanceComparison, ExactComparison, PairOutcome,
};
use crate::trackers::{ExportHistory, MinTrackerArg};

/// The result of [`MinTracker::get_minimals`]. Both vectors are copies of the tracker data.
#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq)]
pub struct Partition {
    /// The candidates that are minimal in the lexicographic semiorder.
    pub minimal: Vec<Point>,
    /// The candidates that are not minimal yet but may become minimal with future points.
    pub non_minimal_candidates: Vec<Point>,
}

/// What happened to a point given to [`MinTracker::update`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpdateOutcome {
    /// The point was the first one and seeded the candidate set.
    Seeded,
    /// The point was added to the candidate set and `pruned` candidates were discarded.
    Admitted { pruned: usize },
    /// The point was discarded because of the candidate stored at index `by`.
    Discarded { by: usize },
}

/// Keep track of the candidate set of a stream of points and of those that can be discarded.
/// A point is a candidate if it is minimal, or it might become minimal in the future, in the
/// lexicographic semiorder defined by the slack vector. All other points are discarded and are
/// never compared again.
///
/// Points are compared dimension by dimension in index order. A point `x` is strictly worse than
/// `y` in dimension `i` when $x_i > y_i + s_i$ and strictly better when $x_i + s_i < y_i$, where
/// $s_i$ is the slack. Which points are discarded depends on the [`DiscardPolicy`]:
///  - [`MinTracker::exact`] keeps every point that may become minimal.
///  - [`MinTracker::approximate`] also drops points that are redundant in the same cell of an
///    epsilon grid, to bound the number of candidates.
///
/// # Example
/// ```rust
/// use mintracker::trackers::MinTracker;
///
/// let mut tracker = MinTracker::exact(vec![0.01, 0.01, 0.01]).unwrap();
/// tracker.update(&[0.0, 0.0, 0.0]).unwrap();
/// tracker.update(&[0.5, 0.5, 0.5]).unwrap();
///
/// let partition = tracker.get_minimals();
/// assert_eq!(partition.minimal, vec![vec![0.0, 0.0, 0.0]]);
/// assert_eq!(tracker.discarded(), &[vec![0.5, 0.5, 0.5]]);
/// ```
#[derive(Debug, Clone)]
pub struct MinTracker {
    /// The tolerance in each dimension.
    slack: Vec<f64>,
    /// The policy used to compare new points with the candidates.
    policy: DiscardPolicy,
    /// The points that are or may become minimal, in the order they were admitted.
    candidates: Vec<Point>,
    /// The discarded points, in the order they were discarded.
    discarded: Vec<Point>,
    /// The number of point pairs compared so far.
    number_of_comparisons: usize,
    /// The largest size reached by the candidate set, including the seeding point.
    max_candidates: usize,
    /// The number of points given to the tracker.
    number_of_updates: usize,
    /// The time when the tracker was created.
    start_time: Instant,
}

impl Display for MinTracker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} with {} dimensions after {} points ({} candidates, {} discarded)",
            self.name(),
            self.dimension(),
            self.number_of_updates,
            self.candidates.len(),
            self.discarded.len()
        )
    }
}

impl MinTracker {
    /// Initialise the exact tracker. This returns an error if the slack vector is empty or
    /// contains negative numbers.
    ///
    /// # Arguments
    ///
    /// * `slack`: The tolerance in each dimension. Its size sets the number of dimensions of
    /// the points.
    ///
    /// returns: `Result<MinTracker, MError>`
    pub fn exact(slack: Vec<f64>) -> Result<Self, MError> {
        validate_slack(&slack)?;
        Ok(Self::with_policy(
            slack,
            DiscardPolicy::Exact(ExactComparison),
        ))
    }

    /// Initialise the approximate tracker. Among the points falling into the same cell of a
    /// grid with cells of width `epsilon`, only the best ones are kept. This returns an error if
    /// the two vectors do not have the same size, or `epsilon` contains non-positive numbers.
    ///
    /// # Arguments
    ///
    /// * `slack`: The tolerance in each dimension.
    /// * `epsilon`: The width of a grid cell in each dimension.
    ///
    /// returns: `Result<MinTracker, MError>`
    pub fn approximate(slack: Vec<f64>, epsilon: Vec<f64>) -> Result<Self, MError> {
        validate_slack(&slack)?;
        validate_epsilon(&epsilon, slack.len())?;
        Ok(Self::with_policy(
            slack,
            DiscardPolicy::Approximate(ApproximateComparison::new(epsilon)),
        ))
    }

    /// Initialise the tracker from its options. The approximate tracker is used when an
    /// epsilon vector is provided.
    ///
    /// # Arguments
    ///
    /// * `args`: The tracker options.
    ///
    /// returns: `Result<MinTracker, MError>`
    pub fn from_args(args: MinTrackerArg) -> Result<Self, MError> {
        match args.epsilon {
            None => Self::exact(args.slack),
            Some(epsilon) => Self::approximate(args.slack, epsilon),
        }
    }

    fn with_policy(slack: Vec<f64>, policy: DiscardPolicy) -> Self {
        let tracker = Self {
            slack,
            policy,
            candidates: Vec::new(),
            discarded: Vec::new(),
            number_of_comparisons: 0,
            max_candidates: 0,
            number_of_updates: 0,
            start_time: Instant::now(),
        };
        info!("{}", tracker.option_str());
        tracker
    }

    /// Get a string listing the tracker options.
    pub fn option_str(&self) -> String {
        let mut log_opts = format!("{} options are:\n", self.name());
        log_opts.push_str(format!("\t* Number of dimensions {:>6}\n", self.dimension()).as_str());
        log_opts.push_str(format!("\t* Slack {:?}", self.slack).as_str());
        if let Some(epsilon) = self.policy.epsilon() {
            log_opts.push_str(format!("\n\t* Epsilon {:?}", epsilon).as_str());
        }
        log_opts
    }

    /// Add a new point to the tracker. The point is compared with the stored candidates in
    /// the order they were admitted:
    ///  - as soon as a candidate discards the point, the point is moved to the discarded set
    ///    and the remaining candidates are not compared;
    ///  - the candidates discarded by the point are moved to the discarded set and the point
    ///    becomes a candidate.
    ///
    /// This returns an error, and leaves the tracker unchanged, if the point size does not match
    /// the number of dimensions or the point contains NaN.
    ///
    /// # Arguments
    ///
    /// * `point`: The new point.
    ///
    /// returns: `Result<UpdateOutcome, MError>`
    pub fn update(&mut self, point: &[f64]) -> Result<UpdateOutcome, MError> {
        check_point(point, self.dimension())?;
        self.number_of_updates += 1;

        if self.candidates.is_empty() {
            debug!("Seeding the candidate set with {:?}", point);
            self.candidates.push(point.to_vec());
            self.update_max_candidates();
            return Ok(UpdateOutcome::Seeded);
        }

        let mut to_prune = vec![false; self.candidates.len()];
        for (j, candidate) in self.candidates.iter().enumerate() {
            self.number_of_comparisons += 1;
            match self.policy.compare(point, candidate, &self.slack) {
                PairOutcome::DiscardApplicant => {
                    debug!("Discarding {:?} because of candidate {:?}", point, candidate);
                    self.discarded.push(point.to_vec());
                    return Ok(UpdateOutcome::Discarded { by: j });
                }
                PairOutcome::PruneCandidate => to_prune[j] = true,
                PairOutcome::Keep => {}
            }
        }

        // move the pruned candidates and add the new point to the survivors
        let mut pruned = 0;
        let previous = std::mem::take(&mut self.candidates);
        self.candidates.reserve(previous.len() + 1);
        for (candidate, prune) in previous.into_iter().zip(to_prune) {
            if prune {
                self.discarded.push(candidate);
                pruned += 1;
            } else {
                self.candidates.push(candidate);
            }
        }
        self.candidates.push(point.to_vec());
        self.update_max_candidates();

        debug!("Admitted {:?} and pruned {} candidates", point, pruned);
        Ok(UpdateOutcome::Admitted { pruned })
    }

    fn update_max_candidates(&mut self) {
        self.max_candidates = self.max_candidates.max(self.candidates.len());
    }

    /// Split the candidate set into the minimal points and the candidates that are not minimal.
    /// Starting with all candidates, for each dimension, the points larger than the minimum of
    /// the remaining points plus the slack are moved to the non-minimal candidates. This does not
    /// change the tracker state.
    ///
    /// When no point was added yet, a warning is logged and both sets are empty.
    ///
    /// returns: `Partition`
    pub fn get_minimals(&self) -> Partition {
        if self.candidates.is_empty() {
            warn!("The candidate set of {} is empty", self.name());
            return Partition::default();
        }

        let mut minimal = self.candidates.clone();
        let mut non_minimal_candidates: Vec<Point> = Vec::new();
        for (i, slack) in self.slack.iter().enumerate() {
            let min_value = minimal.iter().map(|p| p[i]).fold(f64::INFINITY, f64::min);
            let (retained, rejected): (Vec<Point>, Vec<Point>) = minimal
                .into_iter()
                .partition(|p| p[i] <= min_value + slack);
            non_minimal_candidates.extend(rejected);
            minimal = retained;
        }

        Partition {
            minimal,
            non_minimal_candidates,
        }
    }

    /// Feed all the points of a source into the tracker. When `export_history` is given, a
    /// snapshot of the tracker is saved to a JSON file each time the number of processed points
    /// increases by the configured step, and once more at the end.
    ///
    /// # Arguments
    ///
    /// * `points`: The points. An infinite source must be limited by the caller.
    /// * `export_history`: The optional export configuration.
    ///
    /// returns: `Result<(), MError>`
    pub fn run<I>(
        &mut self,
        points: I,
        export_history: Option<&ExportHistory>,
    ) -> Result<(), MError>
    where
        I: IntoIterator<Item = Point>,
    {
        info!("Starting {}", self.name());
        let mut history_step: usize = 0;
        for point in points {
            self.update(&point)?;

            if let Some(export) = export_history {
                history_step += 1;
                if history_step >= export.step() {
                    self.save_to_json(export.destination(), None)?;
                    history_step = 0;
                }
            }
        }

        if let Some(export) = export_history {
            self.save_to_json(export.destination(), Some("Final"))?;
        }
        info!(
            "{} processed {} points with {} comparisons. Kept {} candidates (max {}) and discarded {} points",
            self.name(),
            self.number_of_updates,
            self.number_of_comparisons,
            self.candidates.len(),
            self.max_candidates,
            self.discarded.len()
        );
        info!("Took {}", self.elapsed_as_string());
        Ok(())
    }

    /// Return the number of point pairs compared so far.
    pub fn get_number_of_comparisons(&self) -> usize {
        self.number_of_comparisons
    }

    /// Return the largest size reached by the candidate set. The first point seeding the
    /// candidate set is counted too, so this is `1` after one point.
    pub fn max_candidates(&self) -> usize {
        self.max_candidates
    }

    /// Return the number of points given to the tracker.
    pub fn number_of_updates(&self) -> usize {
        self.number_of_updates
    }

    /// Return the candidates, in the order they were admitted.
    pub fn candidates(&self) -> &[Point] {
        &self.candidates
    }

    /// Return the discarded points, in the order they were discarded.
    pub fn discarded(&self) -> &[Point] {
        &self.discarded
    }

    /// Return the number of dimensions of the points.
    pub fn dimension(&self) -> usize {
        self.slack.len()
    }

    /// Return the slack vector.
    pub fn slack(&self) -> &[f64] {
        &self.slack
    }

    /// Return the discard policy.
    pub fn policy(&self) -> &DiscardPolicy {
        &self.policy
    }

    /// Return the tracker name.
    pub fn name(&self) -> String {
        self.policy.name()
    }

    /// Return the options to create a new tracker with the same configuration.
    pub fn options(&self) -> MinTrackerArg {
        MinTrackerArg {
            slack: self.slack.clone(),
            epsilon: self.policy.epsilon().map(|e| e.to_vec()),
        }
    }

    /// Get the elapsed hours, minutes and seconds since the tracker was created.
    ///
    /// return: `[u64; 3]`.
    pub fn elapsed(&self) -> [u64; 3] {
        let duration = self.start_time.elapsed();
        let seconds = duration.as_secs() % 60;
        let minutes = (duration.as_secs() / 60) % 60;
        let hours = (duration.as_secs() / 60) / 60;
        [hours, minutes, seconds]
    }

    /// Format the elapsed time as string.
    pub fn elapsed_as_string(&self) -> String {
        let [hours, minutes, seconds] = self.elapsed();
        format!(
            "{:0>2} hours, {:0>2} minutes and {:0>2} seconds",
            hours, minutes, seconds
        )
    }
}
