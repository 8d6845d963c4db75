use std::env;
use std::error::Error;
use std::fs;

use log::LevelFilter;

use mintracker::sources::RandomPoints;
use mintracker::trackers::{ExportHistory, MinTracker};

/// Track the minimal points of 500 random points in the unit cube, with the exact and the
/// approximate trackers, and compare how many points each one keeps.
///
/// The tracker data is exported to JSON after every point, so that the three sets (discarded,
/// non-minimal candidates and minimal points) can be drawn as the frames of an animation.
///
/// `cargo run --example random_points --release`
fn main() -> Result<(), Box<dyn Error>> {
    // Add log
    env_logger::builder().filter_level(LevelFilter::Info).init();

    let slack = vec![0.01, 0.01, 0.01];
    let number_of_points = 500;
    let seed = Some(10);

    let mut exact = MinTracker::exact(slack.clone())?;
    let mut approximate = MinTracker::approximate(slack, vec![0.1, 0.1, 0.1])?;

    for tracker in [&mut exact, &mut approximate] {
        let destination = env::temp_dir().join("mintracker").join(tracker.name());
        fs::create_dir_all(&destination)?;
        let export = ExportHistory::new(1, &destination)?;

        tracker.run(RandomPoints::new(3, Some(number_of_points), seed), Some(&export))?;

        let partition = tracker.get_minimals();
        println!(
            "{}: {} minimal, {} non-minimal candidates, {} comparisons, max {} candidates",
            tracker,
            partition.minimal.len(),
            partition.non_minimal_candidates.len(),
            tracker.get_number_of_comparisons(),
            tracker.max_candidates()
        );
    }

    Ok(())
}
