//! Mean and sample standard deviation of course marks.

use serde::Serialize;

/// Aggregate statistics for a non-empty set of marks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation; `None` when fewer than two marks exist.
    pub std_dev: Option<f64>,
}

/// Arithmetic mean, or `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

/// Standard deviation with Bessel's correction (divides by `n - 1`).
///
/// Undefined for fewer than two values, which is reported as `None`
/// rather than a division by zero.
pub fn sample_std_dev(values: &[f64], mean: f64) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let squared_deviations: f64 = values.iter().map(|value| (value - mean).powi(2)).sum();
    Some((squared_deviations / (values.len() - 1) as f64).sqrt())
}

pub fn summarize(values: &[f64]) -> Option<Summary> {
    let mean = mean(values)?;
    Some(Summary {
        count: values.len(),
        mean,
        std_dev: sample_std_dev(values, mean),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_of_empty_is_none() {
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn std_dev_needs_two_values() {
        assert_eq!(sample_std_dev(&[42.0], 42.0), None);
        assert_eq!(sample_std_dev(&[], 0.0), None);
    }

    #[test]
    fn summary_of_single_mark() {
        let summary = summarize(&[64.0]).expect("summary");
        assert_eq!(summary.count, 1);
        assert_eq!(summary.mean, 64.0);
        assert_eq!(summary.std_dev, None);
    }
}
