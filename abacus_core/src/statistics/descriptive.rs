//! # Descriptive Statistics
//!
//! Aggregate measures over a numeric sample. Every function takes a
//! read-only slice, never reorders the caller's data, and returns `0.0`
//! (or an empty mode set) for an empty sample instead of failing.
//!
//! ## Example
//!
//! ```rust
//! use abacus_core::statistics::calculate_statistics;
//!
//! let summary = calculate_statistics(&[1.0, 2.0, 2.0, 3.0]);
//! assert_eq!(summary.mean, 2.0);
//! assert_eq!(summary.median, 2.0);
//! assert_eq!(summary.mode, vec![2.0]);
//! assert_eq!(summary.count, 4);
//! ```

use serde::{Deserialize, Serialize};

/// Summary of a sample, as shown on the statistics panel.
///
/// `std_dev` and `variance` are the population measures (divide by n).
///
/// ## JSON Example
///
/// ```json
/// {
///   "values": [1.0, 2.0, 2.0, 3.0],
///   "mean": 2.0,
///   "median": 2.0,
///   "mode": [2.0],
///   "std_dev": 0.7071067811865476,
///   "variance": 0.5,
///   "sum": 8.0,
///   "count": 4
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    /// The sample in its original order, duplicates preserved
    pub values: Vec<f64>,
    pub mean: f64,
    pub median: f64,
    /// Most frequent values, ascending; empty when no value repeats
    pub mode: Vec<f64>,
    /// Population standard deviation
    pub std_dev: f64,
    /// Population variance
    pub variance: f64,
    pub sum: f64,
    pub count: usize,
}

/// Compute the full summary for a sample.
pub fn calculate_statistics(values: &[f64]) -> StatisticsSummary {
    StatisticsSummary {
        values: values.to_vec(),
        mean: mean(values),
        median: median(values),
        mode: mode(values),
        std_dev: population_std_dev(values),
        variance: population_variance(values),
        sum: sum(values),
        count: count(values),
    }
}

pub fn sum(values: &[f64]) -> f64 {
    values.iter().sum()
}

pub fn count(values: &[f64]) -> usize {
    values.len()
}

/// Arithmetic mean
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    sum(values) / values.len() as f64
}

/// Middle value of the sorted sample; mean of the two middle values for
/// an even count.
pub fn median(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let sorted = sorted_copy(values);
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Every value reaching the highest occurrence count, ascending.
///
/// A sample where every value is distinct has no mode, except that a
/// single value is its own mode.
pub fn mode(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }

    // Runs of equal values in the sorted copy, as (value, occurrences)
    let sorted = sorted_copy(values);
    let mut runs: Vec<(f64, usize)> = Vec::new();
    for value in sorted {
        match runs.last_mut() {
            Some((last, occurrences)) if *last == value => *occurrences += 1,
            _ => runs.push((value, 1)),
        }
    }

    let max_occurrences = runs.iter().map(|&(_, n)| n).max().unwrap_or(0);
    if max_occurrences == 1 && values.len() > 1 {
        return Vec::new();
    }

    runs.into_iter()
        .filter(|&(_, n)| n == max_occurrences)
        .map(|(value, _)| value)
        .collect()
}

/// Mean squared deviation from the mean (divide by n)
pub fn population_variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    squared_deviations(values) / values.len() as f64
}

/// Unbiased variance (divide by n - 1); 0 for fewer than two values
pub fn sample_variance(values: &[f64]) -> f64 {
    if values.len() <= 1 {
        return 0.0;
    }
    squared_deviations(values) / (values.len() - 1) as f64
}

pub fn population_std_dev(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

pub fn sample_std_dev(values: &[f64]) -> f64 {
    sample_variance(values).sqrt()
}

/// Smallest value, 0 for an empty sample
pub fn min(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Largest value, 0 for an empty sample
pub fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

/// Spread between largest and smallest value
pub fn range(values: &[f64]) -> f64 {
    max(values) - min(values)
}

fn squared_deviations(values: &[f64]) -> f64 {
    let mean = mean(values);
    values.iter().map(|x| (x - mean).powi(2)).sum()
}

fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_sample() {
        let summary = calculate_statistics(&[]);
        assert_eq!(summary.count, 0);
        assert_eq!(summary.mean, 0.0);
        assert_eq!(summary.median, 0.0);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.sum, 0.0);
        assert!(summary.mode.is_empty());
        assert!(summary.values.is_empty());
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&[1.0, 2.0, 3.0, 4.0]), 2.5);
        assert_eq!(median(&[5.0, 1.0, 3.0]), 3.0);
        assert_eq!(median(&[7.0]), 7.0);
    }

    #[test]
    fn test_median_does_not_mutate_input() {
        let values = vec![3.0, 1.0, 2.0];
        let _ = median(&values);
        let summary = calculate_statistics(&values);
        assert_eq!(values, vec![3.0, 1.0, 2.0]);
        assert_eq!(summary.values, vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_mode() {
        assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0]), vec![2.0]);
        assert_eq!(mode(&[3.0, 1.0, 3.0, 1.0, 2.0]), vec![1.0, 3.0]);
        assert!(mode(&[1.0, 2.0, 3.0]).is_empty());
        assert_eq!(mode(&[4.0]), vec![4.0]);
        assert_eq!(mode(&[5.0, 5.0]), vec![5.0]);
    }

    #[test]
    fn test_variance_and_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_eq!(mean(&values), 5.0);
        assert_eq!(population_variance(&values), 4.0);
        assert_eq!(population_std_dev(&values), 2.0);
        assert!((sample_variance(&values) - 32.0 / 7.0).abs() < 1e-12);
        assert!((sample_std_dev(&values) - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_sample_variance_small_samples() {
        assert_eq!(sample_variance(&[]), 0.0);
        assert_eq!(sample_variance(&[42.0]), 0.0);
        assert_eq!(sample_std_dev(&[42.0]), 0.0);
    }

    #[test]
    fn test_min_max_range() {
        let values = [4.0, -2.0, 9.5];
        assert_eq!(min(&values), -2.0);
        assert_eq!(max(&values), 9.5);
        assert_eq!(range(&values), 11.5);
        assert_eq!(range(&[]), 0.0);
    }

    #[test]
    fn test_serialization() {
        let summary = calculate_statistics(&[1.0, 2.0, 2.0, 3.0]);
        let json = serde_json::to_string_pretty(&summary).unwrap();
        let roundtrip: StatisticsSummary = serde_json::from_str(&json).unwrap();
        assert_eq!(summary, roundtrip);
    }
}
