//! # mintracker
//!
//! Track the minimal elements of a stream of points under a lexicographic semiorder with
//! slack. Points are compared dimension by dimension, in order of priority, and two values
//! closer than the slack of their dimension are considered tied.
//!
//! Each new point is compared with the current candidate set: the point is either discarded,
//! because it is and will never be minimal, or it becomes a candidate and may discard other
//! candidates. Two trackers are available:
//!  - the exact tracker ([`trackers::MinTracker::exact`]);
//!  - the approximate tracker ([`trackers::MinTracker::approximate`]), which stores at most one
//!    representative of the points that are comparable within the same cell of an epsilon
//!    grid.
//!
//! Points can be read from a delimited file or generated randomly (see [`sources`]), and the
//! tracker data can be exported to JSON files after each update to draw the evolution of the
//! minimal set.
//!
//! ```rust
//! use mintracker::sources::RandomPoints;
//! use mintracker::trackers::MinTracker;
//!
//! let mut tracker = MinTracker::approximate(vec![0.1, 0.1], vec![0.05, 0.05]).unwrap();
//! tracker.run(RandomPoints::new(2, Some(100), Some(1)), None).unwrap();
//! let partition = tracker.get_minimals();
//! assert!(!partition.minimal.is_empty());
//! ```
pub mod core;
pub mod operators;
pub mod sources;
pub mod trackers;
