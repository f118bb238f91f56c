//! Gutter command: spread and depth of a composite gutter for a target flow.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use sluice_inverse::DepthModel;

use crate::cli::GutterArgs;
use crate::config;
use crate::convert;
use crate::report::{self, GutterReport};

/// Run the gutter spread solve.
pub fn run(args: GutterArgs) -> Result<()> {
    let _cmd = info_span!("gutter").entered();
    let config = config::load(args.common.config.as_deref())?;

    let gutter = convert::build_gutter(&config.gutter)?;
    let solver = convert::build_solver_config(&config.solver, args.extrapolate)?;
    let target = args.flow.unwrap_or(config.gutter.target_flow);
    let limit = config.gutter.depth_limit;

    let result = gutter
        .solve_spread(target, &solver)
        .with_context(|| format!("no spread found for Q = {target} m³/s"))?;
    let spread = result.solved_t();
    let depth = gutter.max_depth(spread);
    let exceeds = gutter.exceeds_depth_limit(spread, limit);
    if result.extrapolated() {
        warn!(target, spread, "target outside the sampled spread range");
    }
    info!(target, spread, depth, "spread solved");

    let report = GutterReport {
        target_flow: target,
        spread,
        depth: result.derived_depth(),
        extrapolated: result.extrapolated(),
        gutter_flow: gutter.gutter_section(spread).discharge,
        side_flow: gutter.side_section(spread).discharge,
        depth_limit: limit,
        exceeds_depth_limit: exceeds,
    };

    println!("Target flow:       {target:.4} m³/s");
    println!(
        "Spread (T):        {spread:.3} m{}",
        if result.extrapolated() { " (extrapolated)" } else { "" }
    );
    println!("Depth at curb:     {depth:.4} m");
    println!("  gutter section:  {:.4} m³/s", report.gutter_flow);
    println!("  road section:    {:.4} m³/s", report.side_flow);
    if exceeds {
        println!("Depth exceeds the {limit:.3} m limit");
    } else {
        println!("Depth within the {limit:.3} m limit");
    }

    if let Some(path) = &args.common.json {
        report::write_json(path, &report)?;
    }
    Ok(())
}
