use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::MError;

/// Input arguments to create a [`crate::trackers::MinTracker`].
///
/// The options can be stored in a JSON file, for example:
/// ```json
/// {
///   "slack": [0.01, 0.01, 0.01],
///   "epsilon": [0.1, 0.1, 0.1]
/// }
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MinTrackerArg {
    /// The tolerance in each dimension. Its size sets the number of dimensions of the points.
    pub slack: Vec<f64>,
    /// The width of a grid cell in each dimension. When provided, the approximate tracker is
    /// used.
    #[serde(default)]
    pub epsilon: Option<Vec<f64>>,
}

impl MinTrackerArg {
    /// Load the options from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `file`: The path to the JSON file.
    ///
    /// returns: `Result<MinTrackerArg, MError>`
    pub fn from_json_file(file: &Path) -> Result<Self, MError> {
        let data = fs::read_to_string(file).map_err(|e| {
            MError::Configuration(format!("Cannot read the file {:?} because: {e}", file))
        })?;
        serde_json::from_str(&data).map_err(|e| {
            MError::Configuration(format!("Cannot parse the JSON file {:?} because: {e}", file))
        })
    }
}

#[cfg(test)]
mod test {
    use std::env;
    use std::fs;

    use crate::trackers::{MinTracker, MinTrackerArg};

    #[test]
    /// Load the tracker options from a JSON file.
    fn test_from_json_file() {
        let file = env::temp_dir().join("mintracker_test_args.json");
        fs::write(&file, r#"{"slack": [0.1, 0.2]}"#).unwrap();
        let args = MinTrackerArg::from_json_file(&file).unwrap();
        assert_eq!(
            args,
            MinTrackerArg {
                slack: vec![0.1, 0.2],
                epsilon: None
            }
        );
        assert_eq!(MinTracker::from_args(args).unwrap().name(), "ExactMinTracker");

        fs::write(&file, r#"{"slack": [0.1, 0.2], "epsilon": [0.5]}"#).unwrap();
        let args = MinTrackerArg::from_json_file(&file).unwrap();
        assert!(MinTracker::from_args(args)
            .err()
            .unwrap()
            .to_string()
            .contains("not of the same size"));

        fs::write(&file, r#"{"epsilon": [0.5]}"#).unwrap();
        assert!(MinTrackerArg::from_json_file(&file).is_err());
        fs::remove_file(&file).unwrap();
    }
}
