//! Inlet commands: HEC-22 grate interception on grade and capacity in sag.

use anyhow::{Context, Result};
use tracing::{info, info_span, warn};

use sluice_hydraulics::depth_search_config;

use crate::cli::{InletGradeArgs, InletSagArgs};
use crate::config;
use crate::convert;
use crate::report::{self, GradeReport, SagReport};

/// Run the on-grade interception analysis.
pub fn run_grade(args: InletGradeArgs) -> Result<()> {
    let _cmd = info_span!("inlet_grade").entered();
    let mut config = config::load(args.common.config.as_deref())?;
    if let Some(grate) = args.grate {
        config.inlet_grade.grate = grate;
    }
    if let Some(spread) = args.spread {
        config.inlet_grade.spread = spread;
    }

    let inlet = convert::build_grade_inlet(&config.inlet_grade)?;
    let r = inlet.analyze().context("on-grade analysis failed")?;
    let units = inlet.units();
    let (len, flow) = (units.length_unit(), units.flow_unit());
    info!(grate = inlet.grate().name(), efficiency = r.efficiency(), "on-grade inlet analyzed");

    println!("Grate:                {}", inlet.grate());
    println!("Spread:               {:.2} {len}", inlet.spread());
    println!("Gutter flow:          {:.3} {flow}", r.flow());
    println!("Gutter velocity:      {:.2} {len}/s", r.velocity());
    println!("Splash-over velocity: {:.2} {len}/s", r.splash_over());
    println!("Frontal flow ratio:   {:.3}", r.frontal_ratio());
    println!("Frontal efficiency:   {:.3}", r.frontal_efficiency());
    println!("Side efficiency:      {:.3}", r.side_efficiency());
    println!("Inlet efficiency:     {:.3}", r.efficiency());
    println!("Intercepted flow:     {:.3} {flow}", r.intercepted());
    println!("Bypass flow:          {:.3} {flow}", r.bypass());

    if let Some(path) = &args.common.json {
        let report = GradeReport {
            grate: inlet.grate().name(),
            units: len,
            spread: inlet.spread(),
            flow: r.flow(),
            velocity: r.velocity(),
            splash_over_velocity: r.splash_over(),
            frontal_flow_ratio: r.frontal_ratio(),
            frontal_efficiency: r.frontal_efficiency(),
            side_efficiency: r.side_efficiency(),
            efficiency: r.efficiency(),
            intercepted: r.intercepted(),
            bypass: r.bypass(),
            effective_efficiency: r.effective_efficiency(),
        };
        report::write_json(path, &report)?;
    }
    Ok(())
}

/// Run the sag capacity analysis, including the curb depth that would pass
/// the design flow.
pub fn run_sag(args: InletSagArgs) -> Result<()> {
    let _cmd = info_span!("inlet_sag").entered();
    let mut config = config::load(args.common.config.as_deref())?;
    if let Some(grate) = args.grate {
        config.inlet_sag.grate = grate;
    }
    if let Some(flow) = args.flow {
        config.inlet_sag.design_flow = flow;
    }
    if let Some(depth) = args.depth {
        config.inlet_sag.curb_depth = depth;
    }

    let inlet = convert::build_sag_inlet(&config.inlet_sag)?;
    let r = inlet.analyze().context("sag analysis failed")?;
    let units = inlet.units();
    let (len, flow) = (units.length_unit(), units.flow_unit());

    let required = match inlet.required_curb_depth(&depth_search_config(units)) {
        Ok(found) => Some(found.solved_t()),
        Err(e) => {
            warn!(error = %e, "required curb depth not found in the search range");
            None
        }
    };
    info!(
        grate = inlet.grate().name(),
        capacity = r.capacity(),
        regime = r.regime().label(),
        "sag inlet analyzed"
    );

    println!("Grate:             {}", inlet.grate());
    println!("Design flow:       {:.3} {flow}", inlet.design_flow());
    println!("Depth at curb:     {:.3} {len}", inlet.curb_depth());
    println!("Spread:            {:.2} {len}", r.spread());
    println!("Average depth:     {:.3} {len}", r.average_depth());
    println!("Weir capacity:     {:.3} {flow}", r.weir_capacity());
    println!("Orifice capacity:  {:.3} {flow}", r.orifice_capacity());
    println!("Controlling:       {} ({:.3} {flow})", r.regime().label(), r.capacity());
    println!(
        "Adequacy:          {:.2} ({})",
        r.adequacy_ratio(),
        if r.is_adequate() { "adequate" } else { "inadequate" }
    );
    match required {
        Some(d) => println!("Required depth:    {d:.3} {len}"),
        None => println!("Required depth:    beyond search range"),
    }

    if let Some(path) = &args.common.json {
        let report = SagReport {
            grate: inlet.grate().name(),
            units: len,
            design_flow: inlet.design_flow(),
            curb_depth: inlet.curb_depth(),
            spread: r.spread(),
            average_depth: r.average_depth(),
            weir_capacity: r.weir_capacity(),
            orifice_capacity: r.orifice_capacity(),
            regime: r.regime().label(),
            capacity: r.capacity(),
            adequacy_ratio: r.adequacy_ratio(),
            adequate: r.is_adequate(),
            required_curb_depth: required,
        };
        report::write_json(path, &report)?;
    }
    Ok(())
}
