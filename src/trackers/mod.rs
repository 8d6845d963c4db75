pub use args::MinTrackerArg;
pub use export::{Elapsed, ExportHistory, TrackerSnapshot};
pub use tracker::{MinTracker, Partition, UpdateOutcome};

mod args;
mod export;
mod tracker;
