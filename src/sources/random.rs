use rand::{Rng, RngCore};

use crate::core::utils::get_rng;
use crate::core::Point;

/// Generate points whose values are uniformly distributed in `[0, 1)`. The source is finite
/// when a number of points is given, infinite otherwise.
///
/// # Example
/// ```rust
/// use mintracker::sources::RandomPoints;
///
/// let points: Vec<Vec<f64>> = RandomPoints::new(3, Some(10), Some(1)).collect();
/// assert_eq!(points.len(), 10);
/// assert!(points.iter().all(|p| p.len() == 3));
/// ```
pub struct RandomPoints {
    /// The number of values in each point.
    dimension: usize,
    /// The number of points still to generate. `None` for an infinite source.
    remaining: Option<usize>,
    /// The random number generator.
    rng: Box<dyn RngCore + Send>,
}

impl RandomPoints {
    /// Create the random source.
    ///
    /// # Arguments
    ///
    /// * `dimension`: The number of values in each point.
    /// * `number_of_points`: The number of points to generate. Use `None` for an infinite source.
    /// * `seed`: The optional seed to reproduce the points.
    ///
    /// returns: `RandomPoints`
    pub fn new(dimension: usize, number_of_points: Option<usize>, seed: Option<u64>) -> Self {
        Self {
            dimension,
            remaining: number_of_points,
            rng: get_rng(seed),
        }
    }
}

impl Iterator for RandomPoints {
    type Item = Point;

    fn next(&mut self) -> Option<Self::Item> {
        match self.remaining {
            Some(0) => return None,
            Some(ref mut n) => *n -= 1,
            None => {}
        }
        Some((0..self.dimension).map(|_| self.rng.gen::<f64>()).collect())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}
