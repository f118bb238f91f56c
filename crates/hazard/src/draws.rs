//! Random draws of a single trial and their hazard-window evaluation.

use rand::Rng;

use crate::config::HazardConfig;
use crate::distribution::Sampler;
use crate::error::HazardError;
use crate::result::TrialSummary;

/// Everything one trial draws: a baseline value, a hazard value and an onset
/// flag per year.
///
/// Draws are independent of the effect duration, so the same draws can be
/// re-evaluated at several durations.
#[derive(Debug, Clone, PartialEq)]
pub struct TrialDraws {
    baseline: Vec<f64>,
    hazard: Vec<f64>,
    onsets: Vec<bool>,
}

/// One year of a trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearRecord {
    /// Zero-based year index.
    pub year: usize,
    /// Baseline draw.
    pub baseline: f64,
    /// Hazard-affected draw.
    pub hazard: f64,
    /// Whether a hazard started this year.
    pub onset: bool,
    /// Whether any hazard window covers this year.
    pub hazard_active: bool,
    /// Value in effect this year.
    pub effective: f64,
}

impl TrialDraws {
    /// Draws one trial from `rng`: all baseline values, then all hazard
    /// values, then all onset flags.
    ///
    /// Expects a validated `config`.
    pub fn draw<R: Rng + ?Sized>(config: &HazardConfig, rng: &mut R) -> Self {
        let n = config.num_years();
        let baseline = config.baseline().sample_n(rng, n);
        let hazard = config.hazard().sample_n(rng, n);
        let p = config.hazard_probability();
        let onsets = (0..n).map(|_| rng.random_bool(p)).collect();
        Self {
            baseline,
            hazard,
            onsets,
        }
    }

    /// Builds draws from explicit values.
    ///
    /// # Errors
    ///
    /// Returns [`HazardError::InvalidConfig`] if the three vectors differ in
    /// length.
    pub fn from_parts(
        baseline: Vec<f64>,
        hazard: Vec<f64>,
        onsets: Vec<bool>,
    ) -> Result<Self, HazardError> {
        if baseline.len() != hazard.len() || hazard.len() != onsets.len() {
            return Err(HazardError::InvalidConfig {
                reason: format!(
                    "per-year draws differ in length: baseline {}, hazard {}, onsets {}",
                    baseline.len(),
                    hazard.len(),
                    onsets.len()
                ),
            });
        }
        Ok(Self {
            baseline,
            hazard,
            onsets,
        })
    }

    /// Number of years.
    pub fn num_years(&self) -> usize {
        self.baseline.len()
    }

    /// Baseline draws.
    pub fn baseline(&self) -> &[f64] {
        &self.baseline
    }

    /// Hazard-affected draws.
    pub fn hazard(&self) -> &[f64] {
        &self.hazard
    }

    /// Onset flags.
    pub fn onsets(&self) -> &[bool] {
        &self.onsets
    }

    /// Number of hazard onsets.
    pub fn hazard_count(&self) -> usize {
        self.onsets.iter().filter(|&&o| o).count()
    }

    /// Which years a hazard window of `duration` years covers.
    ///
    /// An onset in year `y` covers `y .. min(y + duration, num_years)`.
    /// Windows that overlap are merged; a zero duration covers nothing.
    pub fn coverage(&self, duration: usize) -> Vec<bool> {
        let mut active_until = 0;
        self.onsets
            .iter()
            .enumerate()
            .map(|(year, &onset)| {
                if onset {
                    active_until = active_until.max(year.saturating_add(duration));
                }
                year < active_until
            })
            .collect()
    }

    /// Values in effect per year for a hazard window of `duration` years.
    pub fn effective(&self, duration: usize) -> Vec<f64> {
        self.coverage(duration)
            .into_iter()
            .zip(self.baseline.iter().zip(&self.hazard))
            .map(|(active, (&b, &h))| if active { h } else { b })
            .collect()
    }

    /// Per-year breakdown for a hazard window of `duration` years.
    pub fn records(&self, duration: usize) -> Vec<YearRecord> {
        self.coverage(duration)
            .into_iter()
            .enumerate()
            .map(|(year, active)| YearRecord {
                year,
                baseline: self.baseline[year],
                hazard: self.hazard[year],
                onset: self.onsets[year],
                hazard_active: active,
                effective: if active {
                    self.hazard[year]
                } else {
                    self.baseline[year]
                },
            })
            .collect()
    }

    /// Time-averaged response with and without hazards.
    pub fn summarize<F>(&self, trial_id: usize, duration: usize, response: &F) -> TrialSummary
    where
        F: Fn(f64) -> f64 + ?Sized,
    {
        let n = self.num_years() as f64;
        let with_hazard: f64 = self.effective(duration).into_iter().map(response).sum();
        let baseline: f64 = self.baseline.iter().map(|&b| response(b)).sum();
        TrialSummary {
            trial_id,
            time_averaged_with_hazard: with_hazard / n,
            time_averaged_baseline: baseline / n,
            hazard_count: self.hazard_count(),
        }
    }
}
