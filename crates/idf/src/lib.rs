//! # sluice-idf
//!
//! Rainfall intensity lookup in a gridded depth-duration-frequency dataset:
//! snap a location to the nearest grid cell, pick a return period, and turn
//! the depths for each storm duration into mean intensities.
//!
//! ```text
//! Vec<GridRecord> ──PrecipGrid::new──► PrecipGrid
//!   (lat, lon) ──nearest_cell──► GridCell ──return_periods──► [RP]
//!                                   │
//!                                   └──intensity_table(rp)──► [IntensityRow] by duration
//! ```

mod error;
mod grid;

pub use error::IdfError;
pub use grid::{GridCell, GridRecord, IntensityRow, PrecipGrid, intensity_mm_hr};
