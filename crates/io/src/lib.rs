//! # sluice-io
//!
//! Delimited-text boundary of sluice: read gridded precipitation tables into
//! [`sluice_idf::GridRecord`]s and write Monte Carlo results for plotting or
//! spreadsheet work. The core crates never touch the filesystem.

mod config;
mod error;
mod grid;
mod results;

pub use config::DelimitedConfig;
pub use error::IoError;
pub use grid::{read_grid_csv, read_precip_grid};
pub use results::{
    TRIAL_SUMMARY_COLUMNS, YEAR_RECORD_COLUMNS, write_trial_summaries, write_year_records,
};
