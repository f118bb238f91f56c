//! Parameter distributions for the per-year draws.

use rand::Rng;
use rand_distr::{Distribution, StandardNormal};

use crate::error::HazardError;

/// Draws independent real values.
pub trait Sampler {
    /// Draws one value.
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64;

    /// Draws `n` independent values.
    fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<f64> {
        (0..n).map(|_| self.sample(rng)).collect()
    }
}

/// Distribution of a design parameter (e.g. a runoff coefficient) in one year.
///
/// Draws are not truncated: a Normal may produce values outside the physical
/// range of the parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamDistribution {
    /// Always the same value. Consumes no randomness.
    Constant(f64),
    /// Normal with the given mean and standard deviation.
    Normal {
        /// Mean.
        mean: f64,
        /// Standard deviation (>= 0).
        sd: f64,
    },
    /// Uniform on `[low, high)`; a point mass when `low == high`.
    Uniform {
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
    },
}

impl ParamDistribution {
    /// Mean of the distribution.
    pub fn mean(&self) -> f64 {
        match *self {
            Self::Constant(v) => v,
            Self::Normal { mean, .. } => mean,
            Self::Uniform { low, high } => 0.5 * (low + high),
        }
    }

    /// Validates the parameters. `name` labels the error.
    pub fn validate(&self, name: &'static str) -> Result<(), HazardError> {
        let invalid = |reason: String| Err(HazardError::InvalidDistribution { name, reason });
        match *self {
            Self::Constant(v) if !v.is_finite() => {
                invalid(format!("constant must be finite, got {v}"))
            }
            Self::Normal { mean, .. } if !mean.is_finite() => {
                invalid(format!("mean must be finite, got {mean}"))
            }
            Self::Normal { sd, .. } if !sd.is_finite() || sd < 0.0 => {
                invalid(format!("sd must be finite and >= 0, got {sd}"))
            }
            Self::Uniform { low, high } if !low.is_finite() || !high.is_finite() => {
                invalid(format!("bounds must be finite, got [{low}, {high}]"))
            }
            Self::Uniform { low, high } if low > high => {
                invalid(format!("low must be <= high, got [{low}, {high}]"))
            }
            _ => Ok(()),
        }
    }
}

impl Sampler for ParamDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match *self {
            Self::Constant(v) => v,
            Self::Normal { mean, sd } => {
                let z: f64 = StandardNormal.sample(rng);
                mean + sd * z
            }
            Self::Uniform { low, high } => {
                if low == high {
                    low
                } else {
                    rng.random_range(low..high)
                }
            }
        }
    }

    fn sample_n<R: Rng + ?Sized>(&self, rng: &mut R, n: usize) -> Vec<f64> {
        match *self {
            Self::Constant(v) => vec![v; n],
            _ => (0..n).map(|_| self.sample(rng)).collect(),
        }
    }
}
