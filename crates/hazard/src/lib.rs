//! # sluice-hazard
//!
//! Multi-year Monte Carlo simulation of a design parameter that is disturbed
//! by randomly occurring hazards, e.g. a runoff coefficient raised for years
//! after a wildfire.
//!
//! ## Simulation Pipeline
//!
//! ```text
//! HazardConfig ──validate()──► master StdRng ──► one u64 seed per trial
//!                                                      │
//!                    ┌─────────────────────────────────┘ (rayon optional)
//!                    ▼
//!   TrialDraws::draw: baseline[y], hazard[y], onset[y] for every year
//!                    │
//!                    ▼  onset at y covers y .. y + duration
//!   effective[y] ──response()──► time average ──► TrialSummary
//!                    │
//!                    ▼
//!   SimulationOutcome: SummaryStats (with hazard, baseline), mean hazard count
//! ```
//!
//! [`sweep_durations`] evaluates the same draws at several effect durations.
//!
//! ## Quick start
//!
//! ```
//! use sluice_hazard::{HazardConfig, run_simulation_with};
//!
//! let config = HazardConfig::new().with_num_trials(200).with_seed(7);
//! // Rational-method peak flow for 50 mm/h over 100 ha.
//! let outcome = run_simulation_with(&config, |c| c * 50.0 / 3.6e6 * 100.0 * 1e4).unwrap();
//! assert!(outcome.with_hazard().mean >= outcome.baseline().mean * 0.9);
//! ```

mod config;
mod distribution;
mod draws;
mod error;
mod result;
mod simulate;
mod sweep;

pub use config::HazardConfig;
pub use distribution::{ParamDistribution, Sampler};
pub use draws::{TrialDraws, YearRecord};
pub use error::HazardError;
pub use result::{DurationSweep, SimulationOutcome, SweepPoint, TrialSummary};
pub use simulate::{draw_trials, run_simulation, run_simulation_with};
pub use sweep::{sweep_durations, sweep_durations_with};

pub use sluice_stats::SummaryStats;
