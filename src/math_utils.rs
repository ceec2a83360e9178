/// Mathematical utility functions for the thermal field engine
///
/// Finite-difference operators and the scalar statistics the metric
/// computations are built from. All operators are defined for 1-D fields.

/// Assert that the deviation between two values is less than a threshold
///
/// This macro combines deviation calculation with assertion for cleaner test code.
/// It calculates the percentage deviation between `actual` and `expected`, then
/// asserts that this deviation is less than the specified `max_deviation`.
#[macro_export]
macro_rules! assert_deviation {
    ($actual:expr, $expected:expr, $max_deviation:expr) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if actual_deviation >= max_dev {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, actual_val, expected_val
                );
            }
        }
    };
    ($actual:expr, $expected:expr, $max_deviation:expr, $($arg:tt)+) => {
        {
            let actual_val = $actual;
            let expected_val = $expected;
            let max_dev = $max_deviation;
            let actual_deviation = $crate::math_utils::deviation(actual_val, expected_val);

            if actual_deviation >= max_dev {
                panic!(
                    "assertion failed: deviation {:.2}% >= {:.2}%: {}\n  actual: {:?},\n  expected: {:?}",
                    actual_deviation, max_dev, format_args!($($arg)+), actual_val, expected_val
                );
            }
        }
    };
}

/// Discrete first derivative of a 1-D field, one sample per position.
///
/// Convention: forward difference at the left edge, backward difference at the
/// right edge, central differences inside. A single-element field has no
/// spatial extent, so its derivative is defined as `[0.0]`.
///
/// # Arguments
/// * `field` - Sampled values, one per spatial position
///
/// # Returns
/// Derivative samples, same length as `field`
///
/// # Examples
/// ```
/// use thermo_field_rust::math_utils::gradient;
///
/// let g = gradient(&[1.0, 2.0, 4.0]);
/// assert_eq!(g, vec![1.0, 1.5, 2.0]);
/// ```
pub fn gradient(field: &[f64]) -> Vec<f64> {
    let n = field.len();
    if n < 2 {
        return vec![0.0; n];
    }

    let mut grad = Vec::with_capacity(n);
    grad.push(field[1] - field[0]);
    for i in 1..n - 1 {
        grad.push((field[i + 1] - field[i - 1]) / 2.0);
    }
    grad.push(field[n - 1] - field[n - 2]);
    grad
}

/// Discrete Laplacian of a 1-D field: the second finite difference,
/// computed as the gradient of the gradient.
///
/// Approximates spatial diffusion for the reaction-diffusion update.
/// Defined for 1-D fields only.
pub fn laplacian(field: &[f64]) -> Vec<f64> {
    gradient(&gradient(field))
}

/// Arithmetic mean. Empty input yields 0.0.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation (no Bessel correction).
///
/// The metric definitions are biased estimators on purpose; see
/// `ThermalFieldAnalyzer::alignment_coefficient`.
pub fn std_dev(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    let variance = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    variance.sqrt()
}

/// Calculate the percentage deviation between two values
///
/// Returns the percentage difference of `actual` from `expected`.
/// Uses the expected value as the reference (base) for the percentage calculation.
///
/// # Examples
/// ```
/// use thermo_field_rust::math_utils::deviation;
///
/// // 105 is 5% higher than 100
/// assert_eq!(deviation(105.0, 100.0), 5.0);
/// ```
pub fn deviation(actual: f64, expected: f64) -> f64 {
    if expected.abs() < f64::EPSILON {
        // Avoid division by zero - if expected is 0, return 0 if actual is also 0
        if actual.abs() < f64::EPSILON {
            0.0
        } else {
            f64::INFINITY // Infinite deviation if expected is 0 but actual is not
        }
    } else {
        ((actual - expected).abs() / expected.abs()) * 100.0
    }
}
