use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::core::{MError, Point};
use crate::trackers::{MinTracker, MinTrackerArg};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
/// The data with the elapsed time.
pub struct Elapsed {
    /// Elapsed hours.
    pub hours: u64,
    /// Elapsed minutes.
    pub minutes: u64,
    /// Elapsed seconds.
    pub seconds: u64,
}

/// The tracker data exported after an update. This contains the three sets a visualiser needs
/// to draw a frame: the discarded points, the non-minimal candidates and the minimal points.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TrackerSnapshot {
    /// The tracker name.
    pub tracker: String,
    /// The tracker options.
    pub options: MinTrackerArg,
    /// The number of points given to the tracker when the snapshot was taken.
    pub step: usize,
    /// The discarded points.
    pub discarded: Vec<Point>,
    /// The candidates that are not minimal.
    pub non_minimal_candidates: Vec<Point>,
    /// The minimal points.
    pub minimal: Vec<Point>,
    /// The number of point pairs compared so far.
    pub number_of_comparisons: usize,
    /// The largest size reached by the candidate set.
    pub max_candidates: usize,
    /// The time took to reach the `step`.
    pub took: Elapsed,
}

impl TrackerSnapshot {
    /// Read a snapshot previously exported with [`MinTracker::save_to_json`].
    ///
    /// # Arguments
    ///
    /// * `file`: The path to the JSON file.
    ///
    /// returns: `Result<TrackerSnapshot, MError>`
    pub fn read(file: &Path) -> Result<Self, MError> {
        if !file.exists() {
            return Err(MError::Generic(format!(
                "The file {:?} does not exist",
                file
            )));
        }
        let data = fs::read_to_string(file)
            .map_err(|e| MError::Generic(format!("Cannot read the JSON file because: {e}")))?;
        serde_json::from_str(&data)
            .map_err(|e| MError::Generic(format!("Cannot parse the JSON file because: {e}")))
    }
}

/// A struct with the options to configure the export of the tracker snapshots. A snapshot is
/// saved each time the number of points processed by [`MinTracker::run`] increases by the
/// given step. Use a step of `1` to export one frame per point.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExportHistory {
    /// Export the tracker data each time the number of processed points increases by this step.
    step: usize,
    /// The folder where the JSON files are saved.
    destination: PathBuf,
}

impl ExportHistory {
    /// Initialise the export configuration. This returns an error if the step is zero or the
    /// destination folder does not exist.
    ///
    /// # Arguments
    ///
    /// * `step`: Export the tracker data each time the number of processed points increases by
    /// this step.
    /// * `destination`: The folder where the JSON files are saved.
    ///
    /// returns: `Result<ExportHistory, MError>`
    pub fn new(step: usize, destination: &Path) -> Result<Self, MError> {
        if step == 0 {
            return Err(MError::Configuration(
                "The export step must be at least 1".to_string(),
            ));
        }
        if !destination.exists() {
            return Err(MError::Configuration(format!(
                "The destination folder '{:?}' does not exist",
                destination
            )));
        }
        Ok(Self {
            step,
            destination: destination.to_owned(),
        })
    }

    /// The export step.
    pub fn step(&self) -> usize {
        self.step
    }

    /// The destination folder.
    pub fn destination(&self) -> &Path {
        &self.destination
    }
}

impl MinTracker {
    /// Take a snapshot of the tracker.
    ///
    /// returns: `TrackerSnapshot`
    pub fn snapshot(&self) -> TrackerSnapshot {
        let partition = self.get_minimals();
        let [hours, minutes, seconds] = self.elapsed();
        TrackerSnapshot {
            tracker: self.name(),
            options: self.options(),
            step: self.number_of_updates(),
            discarded: self.discarded().to_vec(),
            non_minimal_candidates: partition.non_minimal_candidates,
            minimal: partition.minimal,
            number_of_comparisons: self.get_number_of_comparisons(),
            max_candidates: self.max_candidates(),
            took: Elapsed {
                hours,
                minutes,
                seconds,
            },
        }
    }

    /// Save a snapshot of the tracker to a JSON file named
    /// `{file_prefix}_{tracker name}_step{number of points}.json`. This returns an error if the
    /// file cannot be saved.
    ///
    /// # Arguments
    ///
    /// * `destination`: The folder where to save the file.
    /// * `file_prefix`: A prefix to prepend at the beginning of the file name. This defaults to
    /// `History` when `None`.
    ///
    /// returns: `Result<PathBuf, MError>`. The path to the saved file.
    pub fn save_to_json(
        &self,
        destination: &Path,
        file_prefix: Option<&str>,
    ) -> Result<PathBuf, MError> {
        let file_prefix = file_prefix.unwrap_or("History");
        let data = serde_json::to_string_pretty(&self.snapshot()).map_err(|e| {
            MError::Export(format!(
                "The following error occurred while converting the snapshot: {e}"
            ))
        })?;

        let file = destination.join(format!(
            "{}_{}_step{:0>4}.json",
            file_prefix,
            self.name(),
            self.number_of_updates()
        ));
        info!("Saving JSON file {:?}", file);
        fs::write(&file, data).map_err(|e| {
            MError::Export(format!(
                "The following error occurred while exporting the JSON file: {e}",
            ))
        })?;
        Ok(file)
    }
}
