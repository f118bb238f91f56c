//! # sluice-tc
//!
//! Time-of-concentration estimates from a catalog of empirical formulas,
//! compared by Monte Carlo sampling of uncertain catchment inputs.
//!
//! ```text
//! TcRanges ──sample(rng)──► CatchmentSample ──TcRegistry::evaluate──► minutes per method
//!                                  (× iterations)                            │
//!                                                                            ▼
//!                                                 MethodSummary { mean, sd, min, max }
//! ```
//!
//! ## Quick start
//!
//! ```
//! use sluice_tc::{TcConfig, TcRanges, TcRegistry, simulate_tc};
//!
//! let summaries = simulate_tc(
//!     &TcRegistry::standard(),
//!     &TcRanges::default(),
//!     &TcConfig::new().with_iterations(100).with_seed(42),
//! )
//! .unwrap();
//! assert_eq!(summaries[0].name(), "Kirpich");
//! ```

mod error;
pub mod formulas;
mod ranges;
mod registry;
mod simulate;

pub use error::TcError;
pub use formulas::CatchmentSample;
pub use ranges::{Range, TcRanges};
pub use registry::{TcFormula, TcRegistry};
pub use simulate::{MethodSummary, TcConfig, simulate_tc};
