//! Configuration for the inverse solve.

use crate::error::InverseError;

/// What to do when the target discharge falls outside the sampled envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExtrapolationPolicy {
    /// Fail with [`InverseError::OutOfRange`].
    #[default]
    Reject,
    /// Extend the nearest end segment linearly and flag the result as
    /// extrapolated. Unreliable far outside the sampled range.
    Linear,
}

/// Sampling grid and out-of-range policy for the inverse solve.
///
/// # Example
///
/// ```
/// use sluice_inverse::{ExtrapolationPolicy, SolverConfig};
///
/// let config = SolverConfig::new(0.01, 10.0, 500)
///     .with_extrapolation(ExtrapolationPolicy::Linear);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    t_min: f64,
    t_max: f64,
    num_samples: usize,
    extrapolation: ExtrapolationPolicy,
}

impl SolverConfig {
    /// Creates a grid of `num_samples` evenly spaced top widths over
    /// `[t_min, t_max]`, endpoints included. Extrapolation is rejected.
    pub fn new(t_min: f64, t_max: f64, num_samples: usize) -> Self {
        Self {
            t_min,
            t_max,
            num_samples,
            extrapolation: ExtrapolationPolicy::Reject,
        }
    }

    /// Sets the out-of-range policy.
    pub fn with_extrapolation(mut self, policy: ExtrapolationPolicy) -> Self {
        self.extrapolation = policy;
        self
    }

    /// Lower end of the sampled top-width range.
    pub fn t_min(&self) -> f64 {
        self.t_min
    }

    /// Upper end of the sampled top-width range.
    pub fn t_max(&self) -> f64 {
        self.t_max
    }

    /// Number of grid points.
    pub fn num_samples(&self) -> usize {
        self.num_samples
    }

    /// Out-of-range policy.
    pub fn extrapolation(&self) -> ExtrapolationPolicy {
        self.extrapolation
    }

    /// Distance between neighbouring grid points.
    pub fn spacing(&self) -> f64 {
        if self.num_samples < 2 {
            return 0.0;
        }
        (self.t_max - self.t_min) / (self.num_samples - 1) as f64
    }

    /// The sampled top widths, `t_max` hit exactly.
    pub fn grid(&self) -> Vec<f64> {
        let n = self.num_samples;
        let step = self.spacing();
        (0..n)
            .map(|i| {
                if i + 1 == n {
                    self.t_max
                } else {
                    self.t_min + step * i as f64
                }
            })
            .collect()
    }

    /// Validates this configuration.
    ///
    /// Requires finite bounds with `0 <= t_min < t_max` and at least two
    /// samples.
    pub fn validate(&self) -> Result<(), InverseError> {
        if !self.t_min.is_finite() || !self.t_max.is_finite() {
            return Err(InverseError::InvalidConfig {
                reason: format!(
                    "top-width bounds must be finite, got [{}, {}]",
                    self.t_min, self.t_max
                ),
            });
        }
        if self.t_min < 0.0 {
            return Err(InverseError::InvalidConfig {
                reason: format!("t_min must be non-negative, got {}", self.t_min),
            });
        }
        if self.t_min >= self.t_max {
            return Err(InverseError::InvalidConfig {
                reason: format!(
                    "t_min must be less than t_max, got [{}, {}]",
                    self.t_min, self.t_max
                ),
            });
        }
        if self.num_samples < 2 {
            return Err(InverseError::InvalidConfig {
                reason: format!("num_samples must be >= 2, got {}", self.num_samples),
            });
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    /// The composite-gutter grid: 500 samples over `[0.01, 10.0]`.
    fn default() -> Self {
        Self::new(0.01, 10.0, 500)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = SolverConfig::default();
        assert_eq!(cfg.t_min(), 0.01);
        assert_eq!(cfg.t_max(), 10.0);
        assert_eq!(cfg.num_samples(), 500);
        assert_eq!(cfg.extrapolation(), ExtrapolationPolicy::Reject);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn grid_endpoints_and_spacing() {
        let cfg = SolverConfig::new(0.0, 10.0, 11);
        let grid = cfg.grid();
        assert_eq!(grid.len(), 11);
        assert_eq!(grid[0], 0.0);
        assert_eq!(grid[10], 10.0);
        assert!((cfg.spacing() - 1.0).abs() < 1e-12);
        assert!(grid.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn validate_rejects_bad_bounds() {
        assert!(SolverConfig::new(5.0, 5.0, 10).validate().is_err());
        assert!(SolverConfig::new(6.0, 5.0, 10).validate().is_err());
        assert!(SolverConfig::new(-1.0, 5.0, 10).validate().is_err());
        assert!(SolverConfig::new(0.0, f64::NAN, 10).validate().is_err());
        assert!(SolverConfig::new(0.0, f64::INFINITY, 10).validate().is_err());
    }

    #[test]
    fn validate_rejects_too_few_samples() {
        assert!(SolverConfig::new(0.0, 1.0, 0).validate().is_err());
        assert!(SolverConfig::new(0.0, 1.0, 1).validate().is_err());
        assert!(SolverConfig::new(0.0, 1.0, 2).validate().is_ok());
    }
}
