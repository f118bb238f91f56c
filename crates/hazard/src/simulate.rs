//! Monte Carlo driver.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use sluice_stats::SummaryStats;
use tracing::{debug, info};

use crate::config::HazardConfig;
use crate::draws::TrialDraws;
use crate::error::HazardError;
use crate::result::{SimulationOutcome, TrialSummary};

/// Builds a seeded or OS-sourced RNG.
pub(crate) fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// One sub-stream seed per trial, drawn in trial order from the master RNG.
pub(crate) fn trial_seeds(config: &HazardConfig) -> Vec<u64> {
    let mut master = make_rng(config.seed());
    (0..config.num_trials()).map(|_| master.random()).collect()
}

/// Maps `f(trial_id, item)` over `items`, on rayon if `parallel`.
/// Output is in item order either way.
pub(crate) fn map_indexed<T, U, F>(items: &[T], parallel: bool, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(usize, &T) -> U + Sync + Send,
{
    if parallel {
        items.par_iter().enumerate().map(|(i, t)| f(i, t)).collect()
    } else {
        items.iter().enumerate().map(|(i, t)| f(i, t)).collect()
    }
}

/// Maps `f(trial_id, seed)` over all trial seeds.
pub(crate) fn map_trials<T, F>(seeds: &[u64], parallel: bool, f: F) -> Vec<T>
where
    T: Send,
    F: Fn(usize, u64) -> T + Sync + Send,
{
    map_indexed(seeds, parallel, |i, &s| f(i, s))
}

/// Draws every trial of `config`, in trial order.
///
/// # Errors
///
/// Returns [`HazardError`] if the configuration is invalid.
pub fn draw_trials(config: &HazardConfig) -> Result<Vec<TrialDraws>, HazardError> {
    config.validate()?;
    let seeds = trial_seeds(config);
    Ok(map_trials(&seeds, config.parallel(), |_, seed| {
        TrialDraws::draw(config, &mut StdRng::seed_from_u64(seed))
    }))
}

/// Summarises trial outcomes.
pub(crate) fn aggregate(
    trials: Vec<TrialSummary>,
    confidence: f64,
) -> Result<SimulationOutcome, HazardError> {
    let with_hazard: Vec<f64> = trials.iter().map(|t| t.time_averaged_with_hazard).collect();
    let baseline: Vec<f64> = trials.iter().map(|t| t.time_averaged_baseline).collect();
    let counts: Vec<f64> = trials.iter().map(|t| t.hazard_count as f64).collect();

    let with_hazard = summary(&with_hazard, confidence)?;
    let baseline = summary(&baseline, confidence)?;
    Ok(SimulationOutcome::new(
        trials,
        with_hazard,
        baseline,
        sluice_stats::mean(&counts),
    ))
}

fn summary(values: &[f64], confidence: f64) -> Result<SummaryStats, HazardError> {
    SummaryStats::from_values(values, confidence).ok_or_else(|| HazardError::InvalidConfig {
        reason: format!(
            "cannot summarise {} values at confidence {confidence}",
            values.len()
        ),
    })
}

/// Runs the simulation with the drawn parameter itself as the output.
///
/// # Errors
///
/// Returns [`HazardError`] if the configuration is invalid.
pub fn run_simulation(config: &HazardConfig) -> Result<SimulationOutcome, HazardError> {
    run_simulation_with(config, |x| x)
}

/// Runs the simulation, mapping each year's effective parameter value through
/// `response` before averaging.
///
/// Each trial draws from its own RNG seeded by the master RNG, so results are
/// identical whether trials run sequentially or in parallel.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`HazardError::InvalidConfig`] | zero counts, probability or confidence out of range |
/// | [`HazardError::InvalidDistribution`] | malformed baseline or hazard distribution |
#[tracing::instrument(skip(config, response), fields(
    num_trials = config.num_trials(),
    num_years = config.num_years(),
    parallel = config.parallel(),
))]
pub fn run_simulation_with<F>(
    config: &HazardConfig,
    response: F,
) -> Result<SimulationOutcome, HazardError>
where
    F: Fn(f64) -> f64 + Sync + Send,
{
    config.validate()?;
    let seeds = trial_seeds(config);
    let duration = config.hazard_effect_duration();

    let trials = map_trials(&seeds, config.parallel(), |trial_id, seed| {
        let draws = TrialDraws::draw(config, &mut StdRng::seed_from_u64(seed));
        draws.summarize(trial_id, duration, &response)
    });
    debug!(n = trials.len(), "trials complete");

    let outcome = aggregate(trials, config.confidence_level())?;
    info!(
        mean_with_hazard = outcome.with_hazard().mean,
        mean_baseline = outcome.baseline().mean,
        mean_hazard_count = outcome.mean_hazard_count(),
        "simulation complete"
    );
    Ok(outcome)
}
