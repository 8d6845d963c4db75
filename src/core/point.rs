use crate::core::MError;

/// A point with one value per dimension. The number of dimensions is fixed by the tracker the
/// point is given to.
pub type Point = Vec<f64>;

/// Check that the slack vector can be used to configure a tracker. Each value is the tolerance
/// in a dimension, within which two values are considered tied. This returns an error if the
/// vector is empty or a value is negative or not finite.
///
/// # Arguments
///
/// * `slack`: The slack vector.
///
/// returns: `Result<(), MError>`
pub(crate) fn validate_slack(slack: &[f64]) -> Result<(), MError> {
    if slack.is_empty() {
        return Err(MError::Configuration(
            "The slack vector must have at least one dimension".to_string(),
        ));
    }
    if let Some((i, s)) = slack
        .iter()
        .enumerate()
        .find(|(_, s)| !s.is_finite() || **s < 0.0)
    {
        return Err(MError::Configuration(format!(
            "The slack in dimension #{i} must be a finite non-negative number, but {s} given"
        )));
    }
    Ok(())
}

/// Check that the epsilon vector, with the width of the grid cells, matches the slack vector
/// size and only contains finite positive numbers.
///
/// # Arguments
///
/// * `epsilon`: The epsilon vector.
/// * `dimension`: The number of dimensions (i.e. the slack vector size).
///
/// returns: `Result<(), MError>`
pub(crate) fn validate_epsilon(epsilon: &[f64], dimension: usize) -> Result<(), MError> {
    if epsilon.len() != dimension {
        return Err(MError::Configuration(format!(
            "The epsilon ({}) and slack ({}) vectors are not of the same size",
            epsilon.len(),
            dimension
        )));
    }
    if let Some((i, e)) = epsilon
        .iter()
        .enumerate()
        .find(|(_, e)| !e.is_finite() || **e <= 0.0)
    {
        return Err(MError::Configuration(format!(
            "The epsilon in dimension #{i} must be a finite positive number, but {e} given"
        )));
    }
    Ok(())
}

/// Check that a point has the expected number of dimensions and no NaN.
///
/// # Arguments
///
/// * `point`: The point to check.
/// * `dimension`: The expected number of dimensions.
///
/// returns: `Result<(), MError>`
pub(crate) fn check_point(point: &[f64], dimension: usize) -> Result<(), MError> {
    if point.len() != dimension {
        return Err(MError::DimensionMismatch(dimension, point.len()));
    }
    if point.iter().any(|v| v.is_nan()) {
        return Err(MError::NaN(format!("the point {:?}", point)));
    }
    Ok(())
}
