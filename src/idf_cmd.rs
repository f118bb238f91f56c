//! IDF command: nearest-cell rainfall intensity table from a gridded
//! depth-duration-frequency file.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sluice_io::read_precip_grid;

use crate::cli::IdfArgs;
use crate::config;
use crate::convert;
use crate::report::{self, IdfReport, IdfRowReport};

/// Run the gridded intensity lookup.
pub fn run(args: IdfArgs) -> Result<()> {
    let _cmd = info_span!("idf").entered();
    let config = config::load(args.common.config.as_deref())?;
    let layout = convert::build_delimited_config(&config.io)?;

    let grid = read_precip_grid(&args.input, &layout)
        .with_context(|| format!("failed to read grid: {}", args.input.display()))?;
    let cell = grid.nearest_cell(args.lat, args.lon);
    let return_periods = grid.return_periods(cell);
    info!(lat = cell.lat, lon = cell.lon, n_rp = return_periods.len(), "nearest cell selected");

    println!("Nearest grid point: ({:.4}, {:.4})", cell.lat, cell.lon);
    let rp_list: Vec<String> = return_periods.iter().map(|rp| rp.to_string()).collect();
    println!("Return periods:     {}", rp_list.join(", "));

    let rows = match args.return_period {
        Some(rp) => {
            let table = grid.intensity_table(cell, rp)?;
            println!("Duration (min)  Precip (mm)  Intensity (mm/h)");
            for row in &table {
                println!(
                    "{:>14}  {:>11.2}  {:>16.2}",
                    row.duration_min, row.precip_mm, row.intensity_mm_hr
                );
            }
            table
        }
        None => Vec::new(),
    };

    if let Some(path) = &args.common.json {
        let report = IdfReport {
            lat: cell.lat,
            lon: cell.lon,
            return_periods,
            return_period: args.return_period,
            rows: rows
                .iter()
                .map(|r| IdfRowReport {
                    duration_min: r.duration_min,
                    precip_mm: r.precip_mm,
                    intensity_mm_hr: r.intensity_mm_hr,
                })
                .collect(),
        };
        report::write_json(path, &report)?;
    }
    Ok(())
}
