use crate::errors::{
    DataProcessingError,
    Result,
};

/// Order-statistic quantile over an unsorted slice.
///
/// Sorts a copy of the input and reads the value at rank `(len - 1) * q`,
/// linearly interpolating between the two neighboring order statistics when
/// the rank is not integral. `q` is clamped to `[0, 1]`.
///
/// # Example
///
/// ```
/// use chromresolve::utils::quantile::quantile;
///
/// let values = [3.0, 1.0, 2.0, 4.0];
/// // Even length, the median averages the two middle order statistics.
/// assert_eq!(quantile(&values, 0.5).unwrap(), 2.5);
/// assert_eq!(quantile(&values, 0.0).unwrap(), 1.0);
/// assert_eq!(quantile(&values, 1.0).unwrap(), 4.0);
/// ```
///
/// # Errors
///
/// Returns an error on an empty input slice.
///
/// # Panics
///
/// Panics if the input contains NaN, which has no defined rank.
pub fn quantile(values: &[f64], q: f64) -> Result<f64> {
    if values.is_empty() {
        return Err(DataProcessingError::ExpectedNonEmptyData.into());
    }
    let q = q.clamp(0.0, 1.0);

    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(|a, b| {
        a.partial_cmp(b)
            .expect("quantile input must not contain NaN")
    });

    let pos = (sorted.len() - 1) as f64 * q;
    let lower = pos.floor() as usize;
    let upper = pos.ceil() as usize;
    if lower == upper {
        return Ok(sorted[lower]);
    }
    let frac = pos - lower as f64;
    Ok(sorted[lower] + (sorted[upper] - sorted[lower]) * frac)
}

/// Median shorthand, `quantile(values, 0.5)`.
pub fn median(values: &[f64]) -> Result<f64> {
    quantile(values, 0.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_odd_length() {
        let values = [100.2, 100.0, 100.1];
        assert_eq!(median(&values).unwrap(), 100.1);
    }

    #[test]
    fn test_median_even_length() {
        let values = [100.0, 100.1, 100.05, 100.2];
        // Average of the two middle sorted values (100.05, 100.1).
        assert!((median(&values).unwrap() - 100.075).abs() < 1e-9);
    }

    #[test]
    fn test_median_single_value() {
        assert_eq!(median(&[42.0]).unwrap(), 42.0);
    }

    #[test]
    fn test_quantile_interpolates() {
        let values = [0.0, 10.0];
        assert_eq!(quantile(&values, 0.25).unwrap(), 2.5);
        assert_eq!(quantile(&values, 0.75).unwrap(), 7.5);
    }

    #[test]
    fn test_quantile_clamps_q() {
        let values = [1.0, 2.0, 3.0];
        assert_eq!(quantile(&values, -0.5).unwrap(), 1.0);
        assert_eq!(quantile(&values, 1.5).unwrap(), 3.0);
    }

    #[test]
    fn test_quantile_empty_input() {
        assert!(quantile(&[], 0.5).is_err());
    }

    #[test]
    fn test_median_with_zero_filled_gaps() {
        // A zero-filled slot from a missing sample drags the median down.
        let values = [100.0, 100.1, 0.0, 100.2];
        assert!((median(&values).unwrap() - 100.05).abs() < 1e-9);
    }
}
