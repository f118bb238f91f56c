//! Result types for the hazard simulation.

use sluice_stats::SummaryStats;

/// Outcome of one trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrialSummary {
    /// Zero-based trial index.
    pub trial_id: usize,
    /// Mean response over the lifespan with hazard windows applied.
    pub time_averaged_with_hazard: f64,
    /// Mean response over the lifespan from baseline draws only.
    pub time_averaged_baseline: f64,
    /// Number of hazard onsets.
    pub hazard_count: usize,
}

/// All trial outcomes of a simulation and their summary statistics.
#[derive(Debug, Clone)]
pub struct SimulationOutcome {
    trials: Vec<TrialSummary>,
    with_hazard: SummaryStats,
    baseline: SummaryStats,
    mean_hazard_count: f64,
}

impl SimulationOutcome {
    /// Creates a new outcome.
    pub fn new(
        trials: Vec<TrialSummary>,
        with_hazard: SummaryStats,
        baseline: SummaryStats,
        mean_hazard_count: f64,
    ) -> Self {
        Self {
            trials,
            with_hazard,
            baseline,
            mean_hazard_count,
        }
    }

    /// Per-trial outcomes in trial order.
    pub fn trials(&self) -> &[TrialSummary] {
        &self.trials
    }

    /// Statistics of the time-averaged response with hazards.
    pub fn with_hazard(&self) -> &SummaryStats {
        &self.with_hazard
    }

    /// Statistics of the time-averaged baseline response.
    pub fn baseline(&self) -> &SummaryStats {
        &self.baseline
    }

    /// Mean number of hazard onsets per trial.
    pub fn mean_hazard_count(&self) -> f64 {
        self.mean_hazard_count
    }

    /// Time-averaged responses with hazards, in trial order.
    pub fn with_hazard_values(&self) -> Vec<f64> {
        self.trials
            .iter()
            .map(|t| t.time_averaged_with_hazard)
            .collect()
    }

    /// Time-averaged baseline responses, in trial order.
    pub fn baseline_values(&self) -> Vec<f64> {
        self.trials
            .iter()
            .map(|t| t.time_averaged_baseline)
            .collect()
    }
}

/// With-hazard statistics at one effect duration of a sweep.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepPoint {
    /// Effect duration in years.
    pub duration: usize,
    /// Statistics of the time-averaged response with hazards.
    pub with_hazard: SummaryStats,
}

/// Result of re-evaluating the same draws at several effect durations.
#[derive(Debug, Clone, PartialEq)]
pub struct DurationSweep {
    points: Vec<SweepPoint>,
    baseline: SummaryStats,
    mean_hazard_count: f64,
}

impl DurationSweep {
    /// Creates a new sweep result.
    pub fn new(points: Vec<SweepPoint>, baseline: SummaryStats, mean_hazard_count: f64) -> Self {
        Self {
            points,
            baseline,
            mean_hazard_count,
        }
    }

    /// One point per requested duration, in request order.
    pub fn points(&self) -> &[SweepPoint] {
        &self.points
    }

    /// Baseline statistics, shared by every point.
    pub fn baseline(&self) -> &SummaryStats {
        &self.baseline
    }

    /// Mean number of hazard onsets per trial, shared by every point.
    pub fn mean_hazard_count(&self) -> f64 {
        self.mean_hazard_count
    }
}
