//! Sensitivity of the outcome to the hazard effect duration.

use tracing::debug;

use crate::config::HazardConfig;
use crate::error::HazardError;
use crate::result::{DurationSweep, SweepPoint};
use crate::simulate::{aggregate, draw_trials, map_indexed};

/// [`sweep_durations_with`] using the drawn parameter itself as the output.
///
/// # Errors
///
/// See [`sweep_durations_with`].
pub fn sweep_durations(
    config: &HazardConfig,
    durations: &[usize],
) -> Result<DurationSweep, HazardError> {
    sweep_durations_with(config, durations, |x| x)
}

/// Draws every trial once and evaluates the same draws at each effect
/// duration. The configured `hazard_effect_duration` is ignored.
///
/// A point at duration `d` equals the with-hazard statistics of
/// [`run_simulation_with`](crate::run_simulation_with) on the same config
/// with `hazard_effect_duration = d`.
///
/// # Errors
///
/// Returns [`HazardError::InvalidConfig`] if `durations` is empty, or any
/// error of [`HazardConfig::validate`].
#[tracing::instrument(skip(config, durations, response), fields(
    num_trials = config.num_trials(),
    n_durations = durations.len(),
))]
pub fn sweep_durations_with<F>(
    config: &HazardConfig,
    durations: &[usize],
    response: F,
) -> Result<DurationSweep, HazardError>
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    if durations.is_empty() {
        return Err(HazardError::InvalidConfig {
            reason: "durations must not be empty".to_string(),
        });
    }
    let draws = draw_trials(config)?;
    let confidence = config.confidence_level();

    let mut baseline = None;
    let mut points = Vec::with_capacity(durations.len());
    for &duration in durations {
        let trials = map_indexed(&draws, config.parallel(), |i, d| {
            d.summarize(i, duration, &response)
        });
        let outcome = aggregate(trials, confidence)?;
        debug!(duration, mean = outcome.with_hazard().mean, "sweep point");
        points.push(SweepPoint {
            duration,
            with_hazard: *outcome.with_hazard(),
        });
        // Baseline and onset counts do not depend on the duration.
        baseline.get_or_insert((*outcome.baseline(), outcome.mean_hazard_count()));
    }

    let (baseline, mean_hazard_count) = baseline.ok_or_else(|| HazardError::InvalidConfig {
        reason: "durations must not be empty".to_string(),
    })?;
    Ok(DurationSweep::new(points, baseline, mean_hazard_count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulate::{run_simulation, run_simulation_with};

    #[test]
    fn empty_durations_rejected() {
        let cfg = HazardConfig::new().with_num_trials(5).with_seed(1);
        assert!(matches!(
            sweep_durations(&cfg, &[]),
            Err(HazardError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn zero_duration_point_is_baseline() {
        let cfg = HazardConfig::new()
            .with_num_trials(100)
            .with_hazard_probability(0.2)
            .with_seed(8);
        let sweep = sweep_durations(&cfg, &[0, 5]).unwrap();
        assert_eq!(sweep.points()[0].with_hazard.mean, sweep.baseline().mean);
        assert!(sweep.points()[1].with_hazard.mean > sweep.baseline().mean);
    }

    #[test]
    fn mean_grows_with_duration() {
        let cfg = HazardConfig::new()
            .with_num_trials(300)
            .with_hazard_probability(0.05)
            .with_seed(21);
        let sweep = sweep_durations(&cfg, &[1, 5, 15, 30]).unwrap();
        let means: Vec<f64> = sweep.points().iter().map(|p| p.with_hazard.mean).collect();
        assert!(means.windows(2).all(|w| w[1] >= w[0] - 1e-3), "{means:?}");
    }

    #[test]
    fn single_duration_equals_direct_run() {
        let cfg = HazardConfig::new()
            .with_num_trials(150)
            .with_hazard_effect_duration(7)
            .with_seed(77);
        let direct = run_simulation(&cfg).unwrap();
        let sweep = sweep_durations(&cfg, &[7]).unwrap();
        assert_eq!(&sweep.points()[0].with_hazard, direct.with_hazard());
        assert_eq!(sweep.baseline(), direct.baseline());
        assert_eq!(sweep.mean_hazard_count(), direct.mean_hazard_count());
    }

    #[test]
    fn parallel_sweep_matches_sequential() {
        let cfg = HazardConfig::new()
            .with_num_trials(120)
            .with_hazard_probability(0.1)
            .with_seed(31);
        let sequential = sweep_durations(&cfg, &[0, 3, 12]).unwrap();
        let parallel = sweep_durations(&cfg.clone().with_parallel(true), &[0, 3, 12]).unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn sweep_baseline_uses_response() {
        let cfg = HazardConfig::new().with_num_trials(60).with_seed(4);
        let direct = run_simulation_with(&cfg, |c| 3.0 * c).unwrap();
        let sweep = sweep_durations_with(&cfg, &[2, 9], |c| 3.0 * c).unwrap();
        assert_eq!(sweep.baseline(), direct.baseline());
    }
}
