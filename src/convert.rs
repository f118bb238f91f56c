//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use crate::config::*;

use sluice_hazard::{HazardConfig, ParamDistribution};
use sluice_hydraulics::{CompositeGutter, GrateInSag, GrateOnGrade, GrateType, UnitSystem};
use sluice_inverse::{ExtrapolationPolicy, SolverConfig};
use sluice_io::DelimitedConfig;
use sluice_tc::{TcConfig, TcRanges, TcRegistry};

/// Parses a unit system name into the corresponding enum variant.
pub fn parse_units(s: &str) -> Result<UnitSystem> {
    match UnitSystem::from_name(s) {
        Some(units) => Ok(units),
        None => bail!("unknown unit system: {s:?} (expected \"us\" or \"si\")"),
    }
}

/// Parses a grate catalog name into the corresponding enum variant.
pub fn parse_grate(s: &str) -> Result<GrateType> {
    GrateType::from_name(s).with_context(|| {
        let known: Vec<&str> = GrateType::ALL.iter().map(|g| g.name()).collect();
        format!("known grates: {}", known.join(", "))
    })
}

/// Converts a TOML distribution into a [`ParamDistribution`].
///
/// Exactly one of `value`, `mean` + `sd`, or `low` + `high` must be set.
pub fn parse_distribution(d: &DistributionToml) -> Result<ParamDistribution> {
    match (d.value, d.mean, d.sd, d.low, d.high) {
        (Some(v), None, None, None, None) => Ok(ParamDistribution::Constant(v)),
        (None, Some(mean), Some(sd), None, None) => Ok(ParamDistribution::Normal { mean, sd }),
        (None, None, None, Some(low), Some(high)) => Ok(ParamDistribution::Uniform { low, high }),
        _ => bail!(
            "distribution must have exactly one of `value`, `mean` + `sd`, or `low` + `high`"
        ),
    }
}

/// Builds a [`DelimitedConfig`] from the TOML I/O configuration.
pub fn build_delimited_config(io: &IoToml) -> Result<DelimitedConfig> {
    let cfg = DelimitedConfig::default()
        .with_delimiter(io.delimiter)
        .with_header(io.has_header)
        .with_comment_prefix(io.comment_prefix);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`SolverConfig`] from the TOML solver configuration.
///
/// `extrapolate` overrides the config flag when set.
pub fn build_solver_config(solver: &SolverToml, extrapolate: bool) -> Result<SolverConfig> {
    let policy = if solver.extrapolate || extrapolate {
        ExtrapolationPolicy::Linear
    } else {
        ExtrapolationPolicy::Reject
    };
    let cfg = SolverConfig::new(solver.t_min, solver.t_max, solver.num_samples)
        .with_extrapolation(policy);
    cfg.validate()?;
    Ok(cfg)
}

/// Builds a [`CompositeGutter`] from the TOML gutter configuration.
pub fn build_gutter(gutter: &GutterToml) -> Result<CompositeGutter> {
    let g = CompositeGutter::new()
        .with_gutter_width(gutter.gutter_width)
        .with_gutter_slope(gutter.gutter_slope)
        .with_gutter_n(gutter.gutter_n)
        .with_cross_slope(gutter.cross_slope)
        .with_road_n(gutter.road_n)
        .with_long_slope(gutter.long_slope);
    g.validate()?;
    Ok(g)
}

/// Builds a [`GrateOnGrade`] from the TOML on-grade inlet configuration.
pub fn build_grade_inlet(grade: &GradeToml) -> Result<GrateOnGrade> {
    let inlet = GrateOnGrade::new(parse_grate(&grade.grate)?)
        .with_units(parse_units(&grade.units)?)
        .with_manning_n(grade.manning_n)
        .with_cross_slope(grade.cross_slope)
        .with_long_slope(grade.long_slope)
        .with_spread(grade.spread)
        .with_grate_size(grade.grate_width, grade.grate_length)
        .with_clogging(grade.clogging);
    inlet.validate()?;
    Ok(inlet)
}

/// Builds a [`GrateInSag`] from the TOML sag inlet configuration.
pub fn build_sag_inlet(sag: &SagToml) -> Result<GrateInSag> {
    let inlet = GrateInSag::new(parse_grate(&sag.grate)?)
        .with_units(parse_units(&sag.units)?)
        .with_cross_slope(sag.cross_slope)
        .with_depression_slope(sag.depression_slope)
        .with_design_flow(sag.design_flow)
        .with_curb_depth(sag.curb_depth)
        .with_grate_size(sag.grate_width, sag.grate_length)
        .with_clogging(sag.clogging);
    inlet.validate()?;
    Ok(inlet)
}

/// Builds a [`HazardConfig`] from the TOML hazard configuration.
///
/// An optional global seed is forwarded to the master RNG.
pub fn build_hazard_config(hazard: &HazardToml, seed: Option<u64>) -> Result<HazardConfig> {
    let baseline = parse_distribution(&hazard.baseline).context("invalid [hazard].baseline")?;
    let affected = parse_distribution(&hazard.hazard).context("invalid [hazard].hazard")?;

    let mut cfg = HazardConfig::new()
        .with_num_trials(hazard.num_trials)
        .with_num_years(hazard.num_years)
        .with_baseline(baseline)
        .with_hazard(affected)
        .with_hazard_probability(hazard.hazard_probability)
        .with_hazard_effect_duration(hazard.hazard_effect_duration)
        .with_confidence_level(hazard.confidence_level)
        .with_parallel(hazard.parallel);
    if let Some(s) = seed {
        cfg = cfg.with_seed(s);
    }
    cfg.validate()?;
    Ok(cfg)
}

/// Builds [`TcRanges`] from the TOML time of concentration configuration.
pub fn build_tc_ranges(tc: &TcToml) -> Result<TcRanges> {
    let pair = |r: [f64; 2]| (r[0], r[1]);
    let ranges = TcRanges::new()
        .with_length(pair(tc.length))
        .with_slope(pair(tc.slope))
        .with_roughness(pair(tc.roughness))
        .with_area_km2(pair(tc.area_km2))
        .with_intensity(pair(tc.intensity))
        .with_p2(pair(tc.p2))
        .with_velocity(pair(tc.velocity))
        .with_runoff_coefficient(pair(tc.runoff_coefficient));
    ranges.validate()?;
    Ok(ranges)
}

/// Builds the method registry: the standard or extended catalog, narrowed
/// to `methods` when non-empty.
pub fn build_tc_registry(methods: &[String], extended: bool) -> Result<TcRegistry> {
    let catalog = if extended {
        TcRegistry::extended()
    } else {
        TcRegistry::standard()
    };
    if methods.is_empty() {
        return Ok(catalog);
    }
    catalog
        .select(methods)
        .with_context(|| format!("available methods: {}", catalog.names().join(", ")))
}

/// Builds a [`TcConfig`] from the TOML time of concentration configuration.
pub fn build_tc_config(tc: &TcToml, seed: Option<u64>) -> TcConfig {
    let cfg = TcConfig::new().with_iterations(tc.iterations);
    match seed {
        Some(s) => cfg.with_seed(s),
        None => cfg,
    }
}
