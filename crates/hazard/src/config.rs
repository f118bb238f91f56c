//! Configuration for the hazard Monte Carlo simulation.

use crate::distribution::ParamDistribution;
use crate::error::HazardError;

/// Configuration for [`run_simulation`](crate::run_simulation).
///
/// Each trial simulates `num_years` years. Every year draws a baseline value,
/// a hazard-affected value and a hazard onset flag; an onset replaces the
/// baseline with the hazard value for `hazard_effect_duration` years.
///
/// # Example
///
/// ```
/// use sluice_hazard::{HazardConfig, ParamDistribution};
///
/// let config = HazardConfig::new()
///     .with_num_trials(500)
///     .with_hazard_probability(0.02)
///     .with_hazard(ParamDistribution::Normal { mean: 0.5, sd: 0.1 })
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HazardConfig {
    num_trials: usize,
    num_years: usize,
    baseline: ParamDistribution,
    hazard: ParamDistribution,
    hazard_probability: f64,
    hazard_effect_duration: usize,
    confidence_level: f64,
    seed: Option<u64>,
    parallel: bool,
}

impl HazardConfig {
    /// Creates a new configuration with defaults.
    ///
    /// Defaults: 10 000 trials of 70 years, baseline `Normal(0.25, 0.05)`,
    /// hazard `Normal(0.40, 0.10)`, annual probability 0.015, effect duration
    /// 15 years, 85 % confidence, OS-seeded, sequential.
    pub fn new() -> Self {
        Self {
            num_trials: 10_000,
            num_years: 70,
            baseline: ParamDistribution::Normal {
                mean: 0.25,
                sd: 0.05,
            },
            hazard: ParamDistribution::Normal {
                mean: 0.40,
                sd: 0.10,
            },
            hazard_probability: 0.015,
            hazard_effect_duration: 15,
            confidence_level: 0.85,
            seed: None,
            parallel: false,
        }
    }

    /// Sets the number of Monte Carlo trials.
    pub fn with_num_trials(mut self, n: usize) -> Self {
        self.num_trials = n;
        self
    }

    /// Sets the number of years per trial (design lifespan).
    pub fn with_num_years(mut self, n: usize) -> Self {
        self.num_years = n;
        self
    }

    /// Sets the baseline distribution.
    pub fn with_baseline(mut self, d: ParamDistribution) -> Self {
        self.baseline = d;
        self
    }

    /// Sets the hazard-affected distribution.
    pub fn with_hazard(mut self, d: ParamDistribution) -> Self {
        self.hazard = d;
        self
    }

    /// Sets the annual hazard onset probability.
    pub fn with_hazard_probability(mut self, p: f64) -> Self {
        self.hazard_probability = p;
        self
    }

    /// Sets how many years (including the onset year) a hazard lasts.
    pub fn with_hazard_effect_duration(mut self, years: usize) -> Self {
        self.hazard_effect_duration = years;
        self
    }

    /// Sets the confidence level of the percentile interval.
    pub fn with_confidence_level(mut self, c: f64) -> Self {
        self.confidence_level = c;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables running trials on the rayon pool.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    // --- Accessors ---

    /// Returns the number of trials.
    pub fn num_trials(&self) -> usize {
        self.num_trials
    }

    /// Returns the number of years per trial.
    pub fn num_years(&self) -> usize {
        self.num_years
    }

    /// Returns the baseline distribution.
    pub fn baseline(&self) -> ParamDistribution {
        self.baseline
    }

    /// Returns the hazard-affected distribution.
    pub fn hazard(&self) -> ParamDistribution {
        self.hazard
    }

    /// Returns the annual hazard onset probability.
    pub fn hazard_probability(&self) -> f64 {
        self.hazard_probability
    }

    /// Returns the hazard effect duration in years.
    pub fn hazard_effect_duration(&self) -> usize {
        self.hazard_effect_duration
    }

    /// Returns the confidence level.
    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Returns the random seed, if set.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Returns whether trials run in parallel.
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates this configuration.
    ///
    /// Counts must be positive, the probability in `[0, 1]`, the confidence
    /// level in `(0, 1)`, and both distributions well-formed.
    pub fn validate(&self) -> Result<(), HazardError> {
        if self.num_trials == 0 {
            return Err(HazardError::InvalidConfig {
                reason: "num_trials must be > 0".to_string(),
            });
        }
        if self.num_years == 0 {
            return Err(HazardError::InvalidConfig {
                reason: "num_years must be > 0".to_string(),
            });
        }
        let p = self.hazard_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(HazardError::InvalidConfig {
                reason: format!("hazard_probability must be in [0, 1], got {p}"),
            });
        }
        let c = self.confidence_level;
        if !c.is_finite() || c <= 0.0 || c >= 1.0 {
            return Err(HazardError::InvalidConfig {
                reason: format!("confidence_level must be in (0, 1), got {c}"),
            });
        }
        self.baseline.validate("baseline")?;
        self.hazard.validate("hazard")?;
        Ok(())
    }
}

impl Default for HazardConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = HazardConfig::new();
        assert_eq!(cfg.num_trials(), 10_000);
        assert_eq!(cfg.num_years(), 70);
        assert_eq!(
            cfg.baseline(),
            ParamDistribution::Normal {
                mean: 0.25,
                sd: 0.05
            }
        );
        assert_eq!(
            cfg.hazard(),
            ParamDistribution::Normal {
                mean: 0.40,
                sd: 0.10
            }
        );
        assert_eq!(cfg.hazard_probability(), 0.015);
        assert_eq!(cfg.hazard_effect_duration(), 15);
        assert_eq!(cfg.confidence_level(), 0.85);
        assert!(cfg.seed().is_none());
        assert!(!cfg.parallel());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn builder_chain() {
        let cfg = HazardConfig::new()
            .with_num_trials(10)
            .with_num_years(5)
            .with_hazard_effect_duration(0)
            .with_seed(1)
            .with_parallel(true);
        assert_eq!(cfg.num_trials(), 10);
        assert_eq!(cfg.num_years(), 5);
        assert_eq!(cfg.hazard_effect_duration(), 0);
        assert_eq!(cfg.seed(), Some(1));
        assert!(cfg.parallel());
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_zero_counts() {
        assert!(HazardConfig::new().with_num_trials(0).validate().is_err());
        assert!(HazardConfig::new().with_num_years(0).validate().is_err());
    }

    #[test]
    fn rejects_bad_probability() {
        for p in [-0.1, 1.1, f64::NAN] {
            let err = HazardConfig::new().with_hazard_probability(p).validate();
            assert!(matches!(err, Err(HazardError::InvalidConfig { .. })), "p={p}");
        }
        assert!(
            HazardConfig::new()
                .with_hazard_probability(1.0)
                .validate()
                .is_ok()
        );
    }

    #[test]
    fn rejects_bad_confidence() {
        for c in [0.0, 1.0, 1.5] {
            assert!(HazardConfig::new().with_confidence_level(c).validate().is_err());
        }
    }

    #[test]
    fn rejects_bad_distribution() {
        let err = HazardConfig::new()
            .with_hazard(ParamDistribution::Normal {
                mean: 0.4,
                sd: -1.0,
            })
            .validate();
        assert!(matches!(
            err,
            Err(HazardError::InvalidDistribution { name: "hazard", .. })
        ));
    }
}
