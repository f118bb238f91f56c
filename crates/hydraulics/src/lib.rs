//! # sluice-hydraulics
//!
//! Street drainage hydraulics: Manning flow in a composite gutter, HEC-22
//! grate inlets on grade and in sag, and the rational method.
//!
//! ## Spread of a design flow
//!
//! ```text
//! CompositeGutter::new().with_*(..)
//!         |
//!         | ForwardModel + DepthModel
//!         v
//! solve_spread(q, &SolverConfig) ──► InversionResult { spread, curb depth }
//! ```
//!
//! ## Inlets
//!
//! ```text
//! GrateOnGrade::new(GrateType) ──analyze()──► OnGradeResult (Qi, Qb, E)
//! GrateInSag::new(GrateType)   ──analyze()──► SagResult (weir / orifice)
//!                              ──required_curb_depth()──► InversionResult
//! ```
//!
//! ## Quick start
//!
//! ```
//! use sluice_hydraulics::CompositeGutter;
//! use sluice_inverse::SolverConfig;
//!
//! let gutter = CompositeGutter::new();
//! let spread = gutter.solve_spread(0.025, &SolverConfig::default()).unwrap();
//! assert!(spread.solved_t() > gutter.gutter_width());
//! ```

mod error;
mod grate;
mod gutter;
mod inlet;
mod manning;
mod rational;
mod sag;
mod units;

pub use error::HydraulicsError;
pub use grate::{GrateType, SHORT_GRATE_LIMIT};
pub use gutter::{CompositeGutter, DEFAULT_DEPTH_LIMIT, SectionFlow};
pub use inlet::{
    GrateOnGrade, OnGradeResult, frontal_efficiency, frontal_flow_ratio, gutter_flow,
    gutter_velocity, side_flow_efficiency, spread_for_flow,
};
pub use manning::{hydraulic_radius, mannings_flow};
pub use rational::rational_peak_flow;
pub use sag::{
    FlowRegime, GrateInSag, ORIFICE_COEFFICIENT, SagResult, WEIR_COEFFICIENT, depth_search_config,
};
pub use units::UnitSystem;
