//! Wildfire commands: lifespan-average peak discharge Monte Carlo and the
//! fire effect duration sweep.

use anyhow::{Context, Result};
use tracing::{info, info_span};

use sluice_hazard::{SummaryStats, draw_trials, run_simulation_with, sweep_durations_with};
use sluice_hydraulics::rational_peak_flow;
use sluice_io::{write_trial_summaries, write_year_records};

use crate::cli::{SweepArgs, WildfireArgs};
use crate::config::{self, RationalToml};
use crate::convert;
use crate::report::{self, StatsReport, SweepPointReport, SweepReport, WildfireReport};

/// Rational peak discharge (m³/s) as a function of the runoff coefficient.
fn discharge_response(rational: &RationalToml) -> impl Fn(f64) -> f64 + Sync + Send {
    discharge_for(rational.intensity_mm_hr, rational.area_ha)
}

fn discharge_for(intensity_mm_hr: f64, area_ha: f64) -> impl Fn(f64) -> f64 + Sync + Send {
    move |c| rational_peak_flow(c, intensity_mm_hr, area_ha)
}

fn print_stats(label: &str, s: &SummaryStats) {
    println!("{label}");
    println!("  Mean:    {:.2} m³/s", s.mean);
    println!("  Std Dev: {:.2} m³/s", s.sd);
    println!(
        "  {:.0}% CI: ({:.2}, {:.2}) m³/s",
        s.confidence * 100.0,
        s.lower,
        s.upper
    );
}

/// Run the wildfire Monte Carlo.
pub fn run_wildfire(args: WildfireArgs) -> Result<()> {
    let _cmd = info_span!("wildfire").entered();
    let mut config = config::load(args.common.config.as_deref())?;
    if let Some(n) = args.trials {
        config.hazard.num_trials = n;
    }
    config.hazard.parallel |= args.parallel;
    // A concrete seed lets the per-year breakdown replay trial 0.
    let seed = Some(args.seed.or(config.seed).unwrap_or_else(rand::random));

    let hazard_cfg = convert::build_hazard_config(&config.hazard, seed)?;
    let layout = convert::build_delimited_config(&config.io)?;
    let response = discharge_response(&config.rational);

    let outcome =
        run_simulation_with(&hazard_cfg, &response).context("wildfire simulation failed")?;

    print_stats("Baseline (no wildfires)", outcome.baseline());
    print_stats("With wildfires", outcome.with_hazard());
    info!(seed, "wildfire simulation complete");
    println!(
        "Average wildfires over {} years: {:.2}",
        hazard_cfg.num_years(),
        outcome.mean_hazard_count()
    );

    if let Some(path) = &args.output {
        write_trial_summaries(path, &outcome, &layout)
            .with_context(|| format!("failed to write trials: {}", path.display()))?;
    }

    if let Some(path) = &args.years {
        // Trial seeds come off the master stream in order, so a one-trial
        // draw with the same seed is trial 0 of the full run.
        let first = draw_trials(&hazard_cfg.clone().with_num_trials(1))?;
        let records = first[0].records(hazard_cfg.hazard_effect_duration());
        write_year_records(path, &records, &layout)
            .with_context(|| format!("failed to write year records: {}", path.display()))?;
        info!(path = %path.display(), "first-trial year records written");
    }

    if let Some(path) = &args.common.json {
        let report = WildfireReport {
            num_trials: hazard_cfg.num_trials(),
            num_years: hazard_cfg.num_years(),
            hazard_probability: hazard_cfg.hazard_probability(),
            hazard_effect_duration: hazard_cfg.hazard_effect_duration(),
            seed,
            with_hazard: StatsReport::from(outcome.with_hazard()),
            baseline: StatsReport::from(outcome.baseline()),
            mean_hazard_count: outcome.mean_hazard_count(),
        };
        report::write_json(path, &report)?;
    }
    Ok(())
}

/// Run the fire effect duration sweep.
pub fn run_sweep(args: SweepArgs) -> Result<()> {
    let _cmd = info_span!("sweep").entered();
    let mut config = config::load(args.common.config.as_deref())?;
    if let Some(n) = args.trials {
        config.hazard.num_trials = n;
    }
    if let Some(durations) = args.durations {
        config.sweep.durations = durations;
    }
    let seed = args.seed.or(config.seed);

    let hazard_cfg = convert::build_hazard_config(&config.hazard, seed)?;
    let response = discharge_response(&config.rational);
    let sweep = sweep_durations_with(&hazard_cfg, &config.sweep.durations, &response)
        .context("duration sweep failed")?;

    print_stats("Baseline (no wildfires)", sweep.baseline());
    println!("Duration  Mean      Lower     Upper");
    for point in sweep.points() {
        let s = &point.with_hazard;
        println!(
            "{:>8}  {:>8.2}  {:>8.2}  {:>8.2}",
            point.duration, s.mean, s.lower, s.upper
        );
    }

    if let Some(path) = &args.common.json {
        let report = SweepReport {
            num_trials: hazard_cfg.num_trials(),
            seed,
            baseline: StatsReport::from(sweep.baseline()),
            mean_hazard_count: sweep.mean_hazard_count(),
            points: sweep
                .points()
                .iter()
                .map(|p| SweepPointReport {
                    duration: p.duration,
                    with_hazard: StatsReport::from(&p.with_hazard),
                })
                .collect(),
        };
        report::write_json(path, &report)?;
    }
    Ok(())
}
