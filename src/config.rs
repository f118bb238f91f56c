use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level sluice configuration. Every section is optional; omitted
/// values take the calculator defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SluiceConfig {
    /// Global RNG seed for the Monte Carlo commands.
    #[serde(default)]
    pub seed: Option<u64>,

    /// Delimited file settings.
    #[serde(default)]
    pub io: IoToml,

    /// Inverse solver grid.
    #[serde(default)]
    pub solver: SolverToml,

    /// Composite gutter geometry.
    #[serde(default)]
    pub gutter: GutterToml,

    /// Grate inlet on grade.
    #[serde(default)]
    pub inlet_grade: GradeToml,

    /// Grate inlet in sag.
    #[serde(default)]
    pub inlet_sag: SagToml,

    /// Hazard Monte Carlo settings.
    #[serde(default)]
    pub hazard: HazardToml,

    /// Rational method response for the wildfire commands.
    #[serde(default)]
    pub rational: RationalToml,

    /// Duration sweep settings.
    #[serde(default)]
    pub sweep: SweepToml,

    /// Time of concentration Monte Carlo settings.
    #[serde(default)]
    pub tc: TcToml,
}

/// Reads a TOML config, or returns the defaults when `path` is `None`.
pub fn load(path: Option<&Path>) -> Result<SluiceConfig> {
    let Some(path) = path else {
        return Ok(SluiceConfig::default());
    };
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
    #[serde(default = "default_true")]
    pub has_header: bool,
    #[serde(default = "default_comment_prefix")]
    pub comment_prefix: Option<char>,
}

impl Default for IoToml {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            has_header: true,
            comment_prefix: default_comment_prefix(),
        }
    }
}

fn default_delimiter() -> char {
    ','
}
fn default_true() -> bool {
    true
}
fn default_comment_prefix() -> Option<char> {
    Some('#')
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SolverToml {
    #[serde(default = "default_t_min")]
    pub t_min: f64,
    #[serde(default = "default_t_max")]
    pub t_max: f64,
    #[serde(default = "default_num_samples")]
    pub num_samples: usize,
    #[serde(default)]
    pub extrapolate: bool,
}

impl Default for SolverToml {
    fn default() -> Self {
        Self {
            t_min: default_t_min(),
            t_max: default_t_max(),
            num_samples: default_num_samples(),
            extrapolate: false,
        }
    }
}

fn default_t_min() -> f64 {
    0.01
}
fn default_t_max() -> f64 {
    10.0
}
fn default_num_samples() -> usize {
    500
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GutterToml {
    #[serde(default = "default_gutter_width")]
    pub gutter_width: f64,
    #[serde(default = "default_gutter_slope")]
    pub gutter_slope: f64,
    #[serde(default = "default_gutter_n")]
    pub gutter_n: f64,
    #[serde(default = "default_cross_slope")]
    pub cross_slope: f64,
    #[serde(default = "default_road_n")]
    pub road_n: f64,
    #[serde(default = "default_long_slope")]
    pub long_slope: f64,
    #[serde(default = "default_target_flow")]
    pub target_flow: f64,
    #[serde(default = "default_depth_limit")]
    pub depth_limit: f64,
}

impl Default for GutterToml {
    fn default() -> Self {
        Self {
            gutter_width: default_gutter_width(),
            gutter_slope: default_gutter_slope(),
            gutter_n: default_gutter_n(),
            cross_slope: default_cross_slope(),
            road_n: default_road_n(),
            long_slope: default_long_slope(),
            target_flow: default_target_flow(),
            depth_limit: default_depth_limit(),
        }
    }
}

fn default_gutter_width() -> f64 {
    0.3
}
fn default_gutter_slope() -> f64 {
    0.065
}
fn default_gutter_n() -> f64 {
    0.012
}
fn default_cross_slope() -> f64 {
    0.020
}
fn default_road_n() -> f64 {
    0.018
}
fn default_long_slope() -> f64 {
    0.02
}
fn default_target_flow() -> f64 {
    0.025
}
fn default_depth_limit() -> f64 {
    sluice_hydraulics::DEFAULT_DEPTH_LIMIT
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GradeToml {
    #[serde(default = "default_units")]
    pub units: String,
    #[serde(default = "default_grate")]
    pub grate: String,
    #[serde(default = "default_grade_n")]
    pub manning_n: f64,
    #[serde(default = "default_grade_cross_slope")]
    pub cross_slope: f64,
    #[serde(default = "default_grade_long_slope")]
    pub long_slope: f64,
    #[serde(default = "default_spread")]
    pub spread: f64,
    #[serde(default = "default_grate_width")]
    pub grate_width: f64,
    #[serde(default = "default_grate_width")]
    pub grate_length: f64,
    #[serde(default)]
    pub clogging: f64,
}

impl Default for GradeToml {
    fn default() -> Self {
        Self {
            units: default_units(),
            grate: default_grate(),
            manning_n: default_grade_n(),
            cross_slope: default_grade_cross_slope(),
            long_slope: default_grade_long_slope(),
            spread: default_spread(),
            grate_width: default_grate_width(),
            grate_length: default_grate_width(),
            clogging: 0.0,
        }
    }
}

fn default_units() -> String {
    "us".to_string()
}
fn default_grate() -> String {
    "P-1-7/8".to_string()
}
fn default_grade_n() -> f64 {
    0.016
}
fn default_grade_cross_slope() -> f64 {
    0.025
}
fn default_grade_long_slope() -> f64 {
    0.03
}
fn default_spread() -> f64 {
    8.0
}
fn default_grate_width() -> f64 {
    2.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SagToml {
    #[serde(default = "default_units")]
    pub units: String,
    #[serde(default = "default_grate")]
    pub grate: String,
    #[serde(default = "default_grade_cross_slope")]
    pub cross_slope: f64,
    #[serde(default = "default_depression_slope")]
    pub depression_slope: f64,
    #[serde(default = "default_design_flow")]
    pub design_flow: f64,
    #[serde(default = "default_curb_depth")]
    pub curb_depth: f64,
    #[serde(default = "default_grate_width")]
    pub grate_width: f64,
    #[serde(default = "default_sag_length")]
    pub grate_length: f64,
    #[serde(default)]
    pub clogging: f64,
}

impl Default for SagToml {
    fn default() -> Self {
        Self {
            units: default_units(),
            grate: default_grate(),
            cross_slope: default_grade_cross_slope(),
            depression_slope: default_depression_slope(),
            design_flow: default_design_flow(),
            curb_depth: default_curb_depth(),
            grate_width: default_grate_width(),
            grate_length: default_sag_length(),
            clogging: 0.0,
        }
    }
}

fn default_depression_slope() -> f64 {
    0.05
}
fn default_design_flow() -> f64 {
    5.0
}
fn default_curb_depth() -> f64 {
    0.33
}
fn default_sag_length() -> f64 {
    3.0
}

/// A parameter distribution. Exactly one shape should be given:
/// `value`, `mean` + `sd`, or `low` + `high`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DistributionToml {
    pub value: Option<f64>,
    pub mean: Option<f64>,
    pub sd: Option<f64>,
    pub low: Option<f64>,
    pub high: Option<f64>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HazardToml {
    #[serde(default = "default_num_trials")]
    pub num_trials: usize,
    #[serde(default = "default_num_years")]
    pub num_years: usize,
    #[serde(default = "default_baseline")]
    pub baseline: DistributionToml,
    #[serde(default = "default_hazard")]
    pub hazard: DistributionToml,
    #[serde(default = "default_hazard_probability")]
    pub hazard_probability: f64,
    #[serde(default = "default_hazard_effect_duration")]
    pub hazard_effect_duration: usize,
    #[serde(default = "default_confidence_level")]
    pub confidence_level: f64,
    #[serde(default)]
    pub parallel: bool,
}

impl Default for HazardToml {
    fn default() -> Self {
        Self {
            num_trials: default_num_trials(),
            num_years: default_num_years(),
            baseline: default_baseline(),
            hazard: default_hazard(),
            hazard_probability: default_hazard_probability(),
            hazard_effect_duration: default_hazard_effect_duration(),
            confidence_level: default_confidence_level(),
            parallel: false,
        }
    }
}

fn default_num_trials() -> usize {
    10_000
}
fn default_num_years() -> usize {
    70
}
fn default_baseline() -> DistributionToml {
    DistributionToml {
        mean: Some(0.25),
        sd: Some(0.05),
        ..DistributionToml::default()
    }
}
fn default_hazard() -> DistributionToml {
    DistributionToml {
        mean: Some(0.40),
        sd: Some(0.10),
        ..DistributionToml::default()
    }
}
fn default_hazard_probability() -> f64 {
    0.015
}
fn default_hazard_effect_duration() -> usize {
    15
}
fn default_confidence_level() -> f64 {
    0.85
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RationalToml {
    #[serde(default = "default_intensity")]
    pub intensity_mm_hr: f64,
    #[serde(default = "default_area")]
    pub area_ha: f64,
}

impl Default for RationalToml {
    fn default() -> Self {
        Self {
            intensity_mm_hr: default_intensity(),
            area_ha: default_area(),
        }
    }
}

fn default_intensity() -> f64 {
    50.0
}
fn default_area() -> f64 {
    100.0
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SweepToml {
    #[serde(default = "default_durations")]
    pub durations: Vec<usize>,
}

impl Default for SweepToml {
    fn default() -> Self {
        Self {
            durations: default_durations(),
        }
    }
}

fn default_durations() -> Vec<usize> {
    vec![0, 5, 10, 15, 20, 25, 30]
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TcToml {
    #[serde(default = "default_iterations")]
    pub iterations: usize,
    /// Method names to run; empty runs the whole catalog.
    #[serde(default)]
    pub methods: Vec<String>,
    #[serde(default)]
    pub extended: bool,
    #[serde(default = "default_length")]
    pub length: [f64; 2],
    #[serde(default = "default_slope")]
    pub slope: [f64; 2],
    #[serde(default = "default_roughness")]
    pub roughness: [f64; 2],
    #[serde(default = "default_area_km2")]
    pub area_km2: [f64; 2],
    #[serde(default = "default_tc_intensity")]
    pub intensity: [f64; 2],
    #[serde(default = "default_p2")]
    pub p2: [f64; 2],
    #[serde(default = "default_velocity")]
    pub velocity: [f64; 2],
    #[serde(default = "default_runoff_coefficient")]
    pub runoff_coefficient: [f64; 2],
}

impl Default for TcToml {
    fn default() -> Self {
        Self {
            iterations: default_iterations(),
            methods: Vec::new(),
            extended: false,
            length: default_length(),
            slope: default_slope(),
            roughness: default_roughness(),
            area_km2: default_area_km2(),
            intensity: default_tc_intensity(),
            p2: default_p2(),
            velocity: default_velocity(),
            runoff_coefficient: default_runoff_coefficient(),
        }
    }
}

fn default_iterations() -> usize {
    1000
}
fn default_length() -> [f64; 2] {
    [50.0, 200.0]
}
fn default_slope() -> [f64; 2] {
    [0.01, 0.05]
}
fn default_roughness() -> [f64; 2] {
    [0.03, 0.06]
}
fn default_area_km2() -> [f64; 2] {
    [0.1, 1.0]
}
fn default_tc_intensity() -> [f64; 2] {
    [20.0, 40.0]
}
fn default_p2() -> [f64; 2] {
    [30.0, 80.0]
}
fn default_velocity() -> [f64; 2] {
    [0.3, 2.0]
}
fn default_runoff_coefficient() -> [f64; 2] {
    [0.3, 0.8]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_gives_defaults() {
        let cfg: SluiceConfig = toml::from_str("").unwrap();
        assert_eq!(cfg.seed, None);
        assert_eq!(cfg.hazard.num_trials, 10_000);
        assert_eq!(cfg.hazard.baseline.mean, Some(0.25));
        assert_eq!(cfg.solver.num_samples, 500);
        assert_eq!(cfg.gutter.target_flow, 0.025);
        assert_eq!(cfg.io.delimiter, ',');
        assert_eq!(cfg.sweep.durations.len(), 7);
        assert_eq!(cfg.tc.length, [50.0, 200.0]);
    }

    #[test]
    fn partial_sections_merge_with_defaults() {
        let cfg: SluiceConfig = toml::from_str(
            r#"
            seed = 42

            [hazard]
            num_trials = 500
            baseline = { low = 0.2, high = 0.3 }

            [inlet_sag]
            grate = "Curved Vane"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.seed, Some(42));
        assert_eq!(cfg.hazard.num_trials, 500);
        assert_eq!(cfg.hazard.num_years, 70);
        assert_eq!(cfg.hazard.baseline.low, Some(0.2));
        assert_eq!(cfg.hazard.hazard.mean, Some(0.40));
        assert_eq!(cfg.inlet_sag.grate, "Curved Vane");
        assert_eq!(cfg.inlet_sag.design_flow, 5.0);
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(toml::from_str::<SluiceConfig>("[hazard]\nnum_trails = 5\n").is_err());
        assert!(toml::from_str::<SluiceConfig>("bogus = 1\n").is_err());
    }
}
