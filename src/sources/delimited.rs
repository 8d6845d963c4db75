use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::core::{MError, Point};

/// Options to read points from a delimited text file, where each row is a point and each column
/// a dimension.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DelimitedFileOptions {
    /// The character separating the values in a row.
    pub delimiter: char,
    /// Whether the first row contains the column names and must be skipped.
    pub has_header: bool,
}

impl Default for DelimitedFileOptions {
    /// A comma-separated file with a header row.
    fn default() -> Self {
        Self {
            delimiter: ',',
            has_header: true,
        }
    }
}

/// Read the points from a delimited text file. Empty lines are skipped. This returns an error
/// if the file cannot be read, a value is not a number, or the rows do not have the same number
/// of values.
///
/// # Arguments
///
/// * `file`: The path to the file.
/// * `options`: The file format.
///
/// returns: `Result<Vec<Point>, MError>`
pub fn read_points(file: &Path, options: &DelimitedFileOptions) -> Result<Vec<Point>, MError> {
    let file_str = file.display().to_string();
    let data = File::open(file)
        .map_err(|e| MError::PointSource(file_str.clone(), format!("cannot open the file: {e}")))?;
    let points = parse_points(BufReader::new(data), options)
        .map_err(|e| MError::PointSource(file_str.clone(), e))?;
    info!("Read {} points from {}", points.len(), file_str);
    Ok(points)
}

/// Parse the points from a reader. See [`read_points`].
///
/// # Arguments
///
/// * `reader`: The reader.
/// * `options`: The file format.
///
/// returns: `Result<Vec<Point>, String>`. The error message.
fn parse_points<R: BufRead>(
    reader: R,
    options: &DelimitedFileOptions,
) -> Result<Vec<Point>, String> {
    let mut points: Vec<Point> = Vec::new();
    let mut dimension: Option<usize> = None;
    let rows_to_skip = if options.has_header { 1 } else { 0 };

    for (line_number, line) in reader.lines().enumerate().skip(rows_to_skip) {
        let line = line.map_err(|e| format!("cannot read line #{}: {e}", line_number + 1))?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let point = line
            .split(options.delimiter)
            .map(|v| {
                v.trim().parse::<f64>().map_err(|e| {
                    format!("the value '{v}' on line #{} is not a number: {e}", line_number + 1)
                })
            })
            .collect::<Result<Point, String>>()?;

        match dimension {
            None => {
                debug!("Reading points with {} dimensions", point.len());
                dimension = Some(point.len());
            }
            Some(d) if d != point.len() => {
                return Err(format!(
                    "line #{} has {} values, but {d} were expected",
                    line_number + 1,
                    point.len()
                ));
            }
            Some(_) => {}
        }
        points.push(point);
    }

    Ok(points)
}

#[cfg(test)]
mod test {
    use std::env;
    use std::fs;

    use crate::core::test_utils::assert_points_eq;
    use crate::sources::delimited::parse_points;
    use crate::sources::{read_points, DelimitedFileOptions};

    #[test]
    /// Read a CSV file with a header.
    fn test_read_csv() {
        let file = env::temp_dir().join("mintracker_test_read_csv.csv");
        fs::write(&file, "x,y,z\n0.1,0.2,0.3\n\n0.4, 0.5, 0.6\n").unwrap();

        let points = read_points(&file, &DelimitedFileOptions::default()).unwrap();
        assert_points_eq(&points, &[vec![0.1, 0.2, 0.3], vec![0.4, 0.5, 0.6]]);
        fs::remove_file(&file).unwrap();
    }

    #[test]
    /// Parse a file without a header and with a different delimiter.
    fn test_parse_without_header() {
        let options = DelimitedFileOptions {
            delimiter: ';',
            has_header: false,
        };
        let points = parse_points("1;2\n3;4\n".as_bytes(), &options).unwrap();
        assert_points_eq(&points, &[vec![1.0, 2.0], vec![3.0, 4.0]]);
    }

    #[test]
    /// Test the parsing errors.
    fn test_parse_errors() {
        let options = DelimitedFileOptions::default();
        let err = parse_points("a,b\n1,x\n".as_bytes(), &options).unwrap_err();
        assert!(err.contains("'x' on line #2"));

        let err = parse_points("a,b\n1,2\n1,2,3\n".as_bytes(), &options).unwrap_err();
        assert!(err.contains("line #3 has 3 values, but 2 were expected"));

        let err = read_points(
            &env::temp_dir().join("mintracker_missing_file.csv"),
            &options,
        )
        .unwrap_err();
        assert!(err.to_string().contains("cannot open the file"));
    }
}
