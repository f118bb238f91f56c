//! Monte Carlo comparison of the registered formulas.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::error::TcError;
use crate::ranges::TcRanges;
use crate::registry::TcRegistry;

/// Configuration for [`simulate_tc`].
#[derive(Clone, Debug, PartialEq)]
pub struct TcConfig {
    iterations: usize,
    seed: Option<u64>,
}

impl TcConfig {
    /// Creates a new configuration. Defaults: 1000 iterations, OS-seeded.
    pub fn new() -> Self {
        Self {
            iterations: 1000,
            seed: None,
        }
    }

    /// Sets the number of samples.
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the number of samples.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Returns the random seed, if set.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }
}

impl Default for TcConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Distribution of one method's results.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodSummary {
    name: String,
    values: Vec<f64>,
    mean: f64,
    sd: f64,
    min: f64,
    max: f64,
    non_finite: usize,
}

impl MethodSummary {
    fn from_values(name: String, values: Vec<f64>) -> Self {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        let (min, max) = if finite.is_empty() {
            (f64::NAN, f64::NAN)
        } else {
            (
                finite.iter().copied().fold(f64::INFINITY, f64::min),
                finite.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            )
        };
        Self {
            name,
            mean: sluice_stats::mean(&finite),
            sd: sluice_stats::population_sd(&finite),
            min,
            max,
            non_finite: values.len() - finite.len(),
            values,
        }
    }

    /// Method name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Every result in sample order, including non-finite ones (minutes).
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Mean of the finite results.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation of the finite results.
    pub fn sd(&self) -> f64 {
        self.sd
    }

    /// Smallest finite result, NaN if none.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest finite result, NaN if none.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Number of results excluded as NaN or infinite.
    pub fn non_finite(&self) -> usize {
        self.non_finite
    }
}

/// Draws `config.iterations()` catchment samples from `ranges` and evaluates
/// every registered formula on each.
///
/// # Errors
///
/// | Variant | Trigger |
/// |---------|---------|
/// | [`TcError::EmptyRegistry`] | `registry` has no methods |
/// | [`TcError::InvalidConfig`] | zero iterations |
/// | [`TcError::InvalidRange`] | a sampling range fails validation |
#[tracing::instrument(skip(registry, ranges, config), fields(
    n_methods = registry.len(),
    iterations = config.iterations(),
))]
pub fn simulate_tc(
    registry: &TcRegistry,
    ranges: &TcRanges,
    config: &TcConfig,
) -> Result<Vec<MethodSummary>, TcError> {
    if registry.is_empty() {
        return Err(TcError::EmptyRegistry);
    }
    if config.iterations() == 0 {
        return Err(TcError::InvalidConfig {
            reason: "iterations must be > 0".to_string(),
        });
    }
    ranges.validate()?;

    let mut rng = match config.seed() {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    };

    let mut columns: Vec<Vec<f64>> = vec![Vec::with_capacity(config.iterations()); registry.len()];
    for _ in 0..config.iterations() {
        let sample = ranges.sample(&mut rng);
        for (col, v) in columns.iter_mut().zip(registry.evaluate(&sample)) {
            col.push(v);
        }
    }

    let summaries: Vec<MethodSummary> = registry
        .names()
        .into_iter()
        .zip(columns)
        .map(|(name, values)| MethodSummary::from_values(name.to_string(), values))
        .collect();
    for s in &summaries {
        if s.non_finite() > 0 {
            debug!(method = s.name(), count = s.non_finite(), "non-finite results excluded");
        }
    }
    info!("time-of-concentration simulation complete");
    Ok(summaries)
}
