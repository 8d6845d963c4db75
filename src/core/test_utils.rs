#[cfg(test)]
use float_cmp::{approx_eq, F64Margin};

#[cfg(test)]
/// Compare two arrays of f64
pub(crate) fn assert_approx_array_eq(calculated_values: &[f64], expected_values: &[f64]) {
    let margins = F64Margin {
        epsilon: 1e-12,
        ulps: 4,
    };
    if calculated_values.len() != expected_values.len() {
        panic!(
            "assertion failed: arrays have different sizes ({} vs {})",
            calculated_values.len(),
            expected_values.len()
        );
    }
    for (i, (calculated, expected)) in calculated_values.iter().zip(expected_values).enumerate() {
        if !approx_eq!(f64, *calculated, *expected, margins) {
            panic!(
                r#"assertion failed on item #{i:?}
                    actual: `{calculated:?}`,
                    expected: `{expected:?}`"#,
            )
        }
    }
}

#[cfg(test)]
/// Compare two sets of points, keeping their order.
pub(crate) fn assert_points_eq(calculated: &[Vec<f64>], expected: &[Vec<f64>]) {
    assert_eq!(
        calculated.len(),
        expected.len(),
        "different number of points: {calculated:?} vs {expected:?}"
    );
    for (c, e) in calculated.iter().zip(expected) {
        assert_approx_array_eq(c, e);
    }
}

#[cfg(test)]
mod test {
    use crate::core::test_utils::{assert_approx_array_eq, assert_points_eq};

    #[test]
    /// Values differing only by rounding errors are equal.
    fn test_rounding_errors() {
        assert_approx_array_eq(&[0.1 + 0.2, 0.3], &[0.3, 0.3]);
        assert_points_eq(&[vec![0.5, 0.1]], &[vec![0.5, 0.1]]);
    }

    #[test]
    #[should_panic(expected = "assertion failed on item #0")]
    /// Points with different values are not equal.
    fn test_different_points() {
        assert_points_eq(&[vec![0.3, 0.6]], &[vec![0.5, 0.1]]);
    }

    #[test]
    #[should_panic(expected = "assertion failed on item #1")]
    /// A small but not negligible difference is detected.
    fn test_small_difference() {
        assert_approx_array_eq(&[0.4, 0.2], &[0.4, 0.2001]);
    }
}
