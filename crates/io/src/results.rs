//! Writing simulation results as delimited text.

use std::fs::File;
use std::path::Path;

use sluice_hazard::{SimulationOutcome, YearRecord};
use tracing::info;

use crate::config::DelimitedConfig;
use crate::error::IoError;

/// Column order of [`write_trial_summaries`].
pub const TRIAL_SUMMARY_COLUMNS: [&str; 4] = [
    "trial_id",
    "time_averaged_with_hazard",
    "time_averaged_baseline",
    "hazard_count",
];

/// Column order of [`write_year_records`].
pub const YEAR_RECORD_COLUMNS: [&str; 6] = [
    "year",
    "baseline",
    "hazard",
    "onset",
    "hazard_active",
    "effective",
];

/// Writes one row per trial of `outcome`.
///
/// The header (when enabled) is [`TRIAL_SUMMARY_COLUMNS`]. Floats use the
/// shortest representation that reads back to the same value.
///
/// # Errors
///
/// Returns [`IoError::InvalidConfig`] for an unusable layout or
/// [`IoError::Io`] if the file cannot be written.
pub fn write_trial_summaries(
    path: &Path,
    outcome: &SimulationOutcome,
    config: &DelimitedConfig,
) -> Result<(), IoError> {
    let rows = outcome.trials().iter().map(|t| {
        vec![
            t.trial_id.to_string(),
            t.time_averaged_with_hazard.to_string(),
            t.time_averaged_baseline.to_string(),
            t.hazard_count.to_string(),
        ]
    });
    write_rows(path, config, &TRIAL_SUMMARY_COLUMNS, rows)?;
    info!(path = %path.display(), n_trials = outcome.trials().len(), "trial summaries written");
    Ok(())
}

/// Writes one row per simulated year, e.g. the records of a single trial.
///
/// Flags are written as `0`/`1`.
///
/// # Errors
///
/// See [`write_trial_summaries`].
pub fn write_year_records(
    path: &Path,
    records: &[YearRecord],
    config: &DelimitedConfig,
) -> Result<(), IoError> {
    let rows = records.iter().map(|r| {
        vec![
            r.year.to_string(),
            r.baseline.to_string(),
            r.hazard.to_string(),
            u8::from(r.onset).to_string(),
            u8::from(r.hazard_active).to_string(),
            r.effective.to_string(),
        ]
    });
    write_rows(path, config, &YEAR_RECORD_COLUMNS, rows)?;
    info!(path = %path.display(), n_years = records.len(), "year records written");
    Ok(())
}

fn write_rows<I>(
    path: &Path,
    config: &DelimitedConfig,
    header: &[&str],
    rows: I,
) -> Result<(), IoError>
where
    I: Iterator<Item = Vec<String>>,
{
    let builder = config.writer_builder()?;
    let file = File::create(path).map_err(|e| IoError::io(path, e))?;
    let mut writer = builder.from_writer(file);

    if config.has_header() {
        writer
            .write_record(header)
            .map_err(|e| IoError::csv(path, e))?;
    }
    for row in rows {
        writer
            .write_record(&row)
            .map_err(|e| IoError::csv(path, e))?;
    }
    writer.flush().map_err(|e| IoError::io(path, e))
}
