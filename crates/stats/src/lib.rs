//! Statistical helper functions for the sluice simulators.

use statrs::distribution::{ContinuousCDF, Normal};

/// Arithmetic mean of a slice. Returns 0.0 if empty.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let sum: f64 = data.iter().sum();
    sum / data.len() as f64
}

/// Sample variance with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return 0.0;
    }
    let nf = n as f64;
    let mean = data.iter().sum::<f64>() / nf;
    data.iter().map(|&x| (x - mean) * (x - mean)).sum::<f64>() / (nf - 1.0)
}

/// Sample standard deviation with N-1 denominator.
/// Returns 0.0 if fewer than 2 elements.
pub fn sd(data: &[f64]) -> f64 {
    variance(data).sqrt()
}

/// Population standard deviation (N denominator, numpy's default `std`).
/// Returns 0.0 if empty.
pub fn population_sd(data: &[f64]) -> f64 {
    if data.is_empty() {
        return 0.0;
    }
    let m = mean(data);
    let ss: f64 = data.iter().map(|&x| (x - m) * (x - m)).sum();
    (ss / data.len() as f64).sqrt()
}

/// Standard error of the mean, `sd / sqrt(n)` using the N-1 sample sd.
/// Returns 0.0 if fewer than 2 elements.
pub fn standard_error(data: &[f64]) -> f64 {
    if data.len() < 2 {
        return 0.0;
    }
    sd(data) / (data.len() as f64).sqrt()
}

/// Linear-interpolation quantile (R type 7, numpy's default `percentile`).
///
/// **Expects pre-sorted input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Median of pre-sorted data. For even length, averages the middle two values.
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn median(sorted: &[f64]) -> f64 {
    assert!(!sorted.is_empty(), "median: input must not be empty");
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    }
}

/// Sorts a copy of `data` ascending. NaNs compare equal and keep their position.
pub fn sorted_copy(data: &[f64]) -> Vec<f64> {
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    sorted
}

/// Symmetric percentile interval `[(1-c)/2, (1+c)/2]` of unsorted data.
///
/// Returns `None` if `data` is empty or `confidence` is outside (0, 1).
pub fn percentile_interval(data: &[f64], confidence: f64) -> Option<(f64, f64)> {
    if data.is_empty() || !(confidence > 0.0 && confidence < 1.0) {
        return None;
    }
    let sorted = sorted_copy(data);
    let lo = quantile_type7(&sorted, (1.0 - confidence) / 2.0);
    let hi = quantile_type7(&sorted, (1.0 + confidence) / 2.0);
    Some((lo, hi))
}

/// Two-sided standard-normal critical value for a confidence level,
/// e.g. 1.96 for 0.95.
///
/// Returns `None` if `confidence` is outside (0, 1).
pub fn normal_critical_value(confidence: f64) -> Option<f64> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return None;
    }
    let std_normal = Normal::new(0.0, 1.0).ok()?;
    Some(std_normal.inverse_cdf((1.0 + confidence) / 2.0))
}

/// Distribution summary of a set of Monte Carlo outcomes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    /// Number of values summarised.
    pub n: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Population standard deviation.
    pub sd: f64,
    /// Standard error of the mean.
    pub standard_error: f64,
    /// Lower bound of the percentile interval.
    pub lower: f64,
    /// Upper bound of the percentile interval.
    pub upper: f64,
    /// Smallest value.
    pub min: f64,
    /// Largest value.
    pub max: f64,
    /// Confidence level used for `lower` / `upper`.
    pub confidence: f64,
}

impl SummaryStats {
    /// Summarises `data` with a symmetric percentile interval at `confidence`.
    ///
    /// Returns `None` if `data` is empty or `confidence` is outside (0, 1).
    pub fn from_values(data: &[f64], confidence: f64) -> Option<Self> {
        let (lower, upper) = percentile_interval(data, confidence)?;
        let min = data.iter().copied().fold(f64::INFINITY, f64::min);
        let max = data.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Self {
            n: data.len(),
            mean: mean(data),
            sd: population_sd(data),
            standard_error: standard_error(data),
            lower,
            upper,
            min,
            max,
            confidence,
        })
    }

    /// Normal-approximation interval for the mean, `mean ± z * se`.
    pub fn mean_interval(&self) -> (f64, f64) {
        let z = normal_critical_value(self.confidence).unwrap_or(0.0);
        let half = z * self.standard_error;
        (self.mean - half, self.mean + half)
    }
}
