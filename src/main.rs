mod cli;
mod config;
mod convert;
mod gutter_cmd;
mod hazard_cmd;
mod idf_cmd;
mod inlet_cmd;
mod logging;
mod report;
mod tc_cmd;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Gutter(args) => gutter_cmd::run(args),
        Command::InletGrade(args) => inlet_cmd::run_grade(args),
        Command::InletSag(args) => inlet_cmd::run_sag(args),
        Command::Wildfire(args) => hazard_cmd::run_wildfire(args),
        Command::Sweep(args) => hazard_cmd::run_sweep(args),
        Command::Tc(args) => tc_cmd::run(args),
        Command::Idf(args) => idf_cmd::run(args),
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use super::*;

    fn sluice(args: &[&str]) -> Result<()> {
        let cli = Cli::try_parse_from(std::iter::once("sluice").chain(args.iter().copied()))
            .expect("valid arguments");
        run(cli.command)
    }

    fn read_json(path: &Path) -> serde_json::Value {
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
    }

    fn arg(path: &Path) -> &str {
        path.to_str().unwrap()
    }

    #[test]
    fn gutter_default_report() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("gutter.json");

        sluice(&["gutter", "--json", arg(&json)]).unwrap();

        let report = read_json(&json);
        let spread = report["spread"].as_f64().unwrap();
        assert!((spread - 1.91).abs() < 0.05, "spread {spread}");
        assert_eq!(report["extrapolated"], false);
    }

    #[test]
    fn gutter_out_of_range_needs_extrapolation() {
        let dir = tempfile::tempdir().unwrap();
        let json = dir.path().join("gutter.json");

        assert!(sluice(&["gutter", "--flow", "1000"]).is_err());

        sluice(&["gutter", "--flow", "1000", "--extrapolate", "--json", arg(&json)]).unwrap();
        assert_eq!(read_json(&json)["extrapolated"], true);
    }

    #[test]
    fn wildfire_writes_trials_and_years() {
        let dir = tempfile::tempdir().unwrap();
        let trials = dir.path().join("trials.csv");
        let years = dir.path().join("years.csv");

        sluice(&[
            "wildfire",
            "--seed",
            "3",
            "--trials",
            "50",
            "--output",
            arg(&trials),
            "--years",
            arg(&years),
        ])
        .unwrap();

        let text = fs::read_to_string(&trials).unwrap();
        assert_eq!(text.lines().count(), 51);
        assert!(text.starts_with("trial_id,time_averaged_with_hazard"));
        assert_eq!(fs::read_to_string(&years).unwrap().lines().count(), 71);
    }

    #[test]
    fn config_file_drives_sweep() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = dir.path().join("sluice.toml");
        let json = dir.path().join("sweep.json");
        fs::write(
            &cfg,
            "seed = 11\n\n[hazard]\nnum_trials = 40\nnum_years = 20\n\n[sweep]\ndurations = [0, 10]\n",
        )
        .unwrap();

        sluice(&["sweep", "--config", arg(&cfg), "--json", arg(&json)]).unwrap();

        let report = read_json(&json);
        assert_eq!(report["num_trials"], 40);
        assert_eq!(report["seed"], 11);
        assert_eq!(report["points"].as_array().unwrap().len(), 2);
        // Zero duration never applies the hazard.
        assert_eq!(
            report["points"][0]["with_hazard"]["mean"],
            report["baseline"]["mean"]
        );
    }

    #[test]
    fn idf_lookup_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let grid = dir.path().join("grid.csv");
        let json = dir.path().join("idf.json");
        fs::write(
            &grid,
            "lat,lon,RP,duration,precip_mm\n45.0,-73.0,2,60,24\n45.0,-73.0,2,30,18\n",
        )
        .unwrap();

        sluice(&[
            "idf",
            "--input",
            arg(&grid),
            "--lat",
            "45.1",
            "--lon",
            "-73.2",
            "--return-period",
            "2",
            "--json",
            arg(&json),
        ])
        .unwrap();

        let report = read_json(&json);
        let intensities: Vec<f64> = report["rows"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["intensity_mm_hr"].as_f64().unwrap())
            .collect();
        assert_eq!(intensities, vec![36.0, 24.0]);
    }

    #[test]
    fn unknown_grate_is_reported() {
        let err = sluice(&["inlet-sag", "--grate", "square"]).unwrap_err();
        assert!(format!("{err:#}").contains("square"));
    }
}
