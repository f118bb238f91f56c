//! Time of concentration command: Monte Carlo comparison of the method
//! catalog over sampled catchments.

use anyhow::{Context, Result};
use tracing::info_span;

use sluice_tc::simulate_tc;

use crate::cli::TcArgs;
use crate::config;
use crate::convert;
use crate::report::{self, TcMethodReport, TcReport};

/// Run the time of concentration Monte Carlo.
pub fn run(args: TcArgs) -> Result<()> {
    let _cmd = info_span!("tc").entered();
    let mut config = config::load(args.common.config.as_deref())?;
    if let Some(n) = args.iterations {
        config.tc.iterations = n;
    }
    if let Some(methods) = args.methods {
        config.tc.methods = methods;
    }
    config.tc.extended |= args.extended;
    let seed = args.seed.or(config.seed);

    let registry = convert::build_tc_registry(&config.tc.methods, config.tc.extended)?;
    let ranges = convert::build_tc_ranges(&config.tc)?;
    let tc_cfg = convert::build_tc_config(&config.tc, seed);

    let summaries =
        simulate_tc(&registry, &ranges, &tc_cfg).context("time of concentration run failed")?;

    println!(
        "{:<20}  {:>9}  {:>9}  {:>9}  {:>9}",
        "Method", "Mean", "Std Dev", "Min", "Max"
    );
    for m in &summaries {
        println!(
            "{:<20}  {:>9.2}  {:>9.2}  {:>9.2}  {:>9.2}",
            m.name(),
            m.mean(),
            m.sd(),
            m.min(),
            m.max()
        );
        if m.non_finite() > 0 {
            println!("  ({} non-finite results excluded)", m.non_finite());
        }
    }
    println!("All values in minutes, {} iterations", tc_cfg.iterations());

    if let Some(path) = &args.common.json {
        let report = TcReport {
            iterations: tc_cfg.iterations(),
            seed,
            methods: summaries
                .iter()
                .map(|m| TcMethodReport {
                    name: m.name().to_string(),
                    mean: m.mean(),
                    sd: m.sd(),
                    min: m.min(),
                    max: m.max(),
                    non_finite: m.non_finite(),
                    values: m.values().to_vec(),
                })
                .collect(),
        };
        report::write_json(path, &report)?;
    }
    Ok(())
}
