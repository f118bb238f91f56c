//! Inverse hydraulic solver.
//!
//! Given a forward flow model `Q(T)` that is non-decreasing in top width `T`
//! and a target discharge, finds the top width that carries it. The model is
//! sampled on an even grid over `[t_min, t_max]` and the samples are inverted
//! through a monotone piecewise-linear `Q -> T` interpolant.
//!
//! # Pipeline
//!
//! ```text
//!  ┌──────────────┐     ┌────────────────┐     ┌──────────────────┐
//!  │   sample      │────▶│  interpolant   │────▶│     solve        │
//!  │  (Q at T_i)   │     │  (Q -> T)      │     │  (T, depth)      │
//!  └──────────────┘     └────────────────┘     └──────────────────┘
//! ```
//!
//! # Quick start
//!
//! ```rust
//! use sluice_inverse::{SolverConfig, solve_for_target};
//!
//! let config = SolverConfig::new(0.0, 10.0, 500);
//! let result = solve_for_target(&|t: f64| t, &config, 4.0).unwrap();
//! assert!((result.solved_t() - 4.0).abs() < 0.02);
//! ```

pub mod config;
pub mod error;
pub mod interpolate;
pub mod model;
pub mod result;
pub mod sample;
pub mod solve;

pub use config::{ExtrapolationPolicy, SolverConfig};
pub use error::InverseError;
pub use interpolate::MonotoneInterpolant;
pub use model::{DepthModel, ForwardModel};
pub use result::InversionResult;
pub use sample::{ForwardModelSample, SampledCurve};
pub use solve::{InverseSolver, solve_for_target, solve_with_depth};
