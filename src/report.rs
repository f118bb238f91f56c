//! JSON report types written by the `--json` flag.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use sluice_hazard::SummaryStats;

/// Writes `report` as pretty-printed JSON.
pub fn write_json<T: Serialize>(path: &Path, report: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("failed to serialize report")?;
    std::fs::write(path, json)
        .with_context(|| format!("failed to write JSON report: {}", path.display()))?;
    info!(path = %path.display(), "report written");
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct StatsReport {
    pub n: usize,
    pub mean: f64,
    pub sd: f64,
    pub standard_error: f64,
    pub confidence: f64,
    pub lower: f64,
    pub upper: f64,
    pub min: f64,
    pub max: f64,
}

impl From<&SummaryStats> for StatsReport {
    fn from(s: &SummaryStats) -> Self {
        Self {
            n: s.n,
            mean: s.mean,
            sd: s.sd,
            standard_error: s.standard_error,
            confidence: s.confidence,
            lower: s.lower,
            upper: s.upper,
            min: s.min,
            max: s.max,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct GutterReport {
    pub target_flow: f64,
    pub spread: f64,
    pub depth: Option<f64>,
    pub extrapolated: bool,
    pub gutter_flow: f64,
    pub side_flow: f64,
    pub depth_limit: f64,
    pub exceeds_depth_limit: bool,
}

#[derive(Debug, Serialize)]
pub struct GradeReport {
    pub grate: &'static str,
    pub units: &'static str,
    pub spread: f64,
    pub flow: f64,
    pub velocity: f64,
    pub splash_over_velocity: f64,
    pub frontal_flow_ratio: f64,
    pub frontal_efficiency: f64,
    pub side_efficiency: f64,
    pub efficiency: f64,
    pub intercepted: f64,
    pub bypass: f64,
    pub effective_efficiency: f64,
}

#[derive(Debug, Serialize)]
pub struct SagReport {
    pub grate: &'static str,
    pub units: &'static str,
    pub design_flow: f64,
    pub curb_depth: f64,
    pub spread: f64,
    pub average_depth: f64,
    pub weir_capacity: f64,
    pub orifice_capacity: f64,
    pub regime: &'static str,
    pub capacity: f64,
    pub adequacy_ratio: f64,
    pub adequate: bool,
    pub required_curb_depth: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct WildfireReport {
    pub num_trials: usize,
    pub num_years: usize,
    pub hazard_probability: f64,
    pub hazard_effect_duration: usize,
    pub seed: Option<u64>,
    pub with_hazard: StatsReport,
    pub baseline: StatsReport,
    pub mean_hazard_count: f64,
}

#[derive(Debug, Serialize)]
pub struct SweepPointReport {
    pub duration: usize,
    pub with_hazard: StatsReport,
}

#[derive(Debug, Serialize)]
pub struct SweepReport {
    pub num_trials: usize,
    pub seed: Option<u64>,
    pub baseline: StatsReport,
    pub mean_hazard_count: f64,
    pub points: Vec<SweepPointReport>,
}

#[derive(Debug, Serialize)]
pub struct TcMethodReport {
    pub name: String,
    pub mean: f64,
    pub sd: f64,
    pub min: f64,
    pub max: f64,
    pub non_finite: usize,
    pub values: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct TcReport {
    pub iterations: usize,
    pub seed: Option<u64>,
    pub methods: Vec<TcMethodReport>,
}

#[derive(Debug, Serialize)]
pub struct IdfRowReport {
    pub duration_min: f64,
    pub precip_mm: f64,
    pub intensity_mm_hr: f64,
}

#[derive(Debug, Serialize)]
pub struct IdfReport {
    pub lat: f64,
    pub lon: f64,
    pub return_periods: Vec<f64>,
    pub return_period: Option<f64>,
    pub rows: Vec<IdfRowReport>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stats_report_round_trips_through_json() {
        let stats = SummaryStats::from_values(&[1.0, 2.0, 3.0, 4.0], 0.85).unwrap();
        let report = StatsReport::from(&stats);
        let value: serde_json::Value = serde_json::to_value(&report).unwrap();
        assert_eq!(value["n"], 4);
        assert_eq!(value["mean"], 2.5);
        assert_eq!(value["min"], 1.0);
        assert_eq!(value["confidence"], 0.85);
    }

    #[test]
    fn write_json_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("r.json");
        let report = IdfReport {
            lat: 45.0,
            lon: -73.0,
            return_periods: vec![2.0, 100.0],
            return_period: None,
            rows: Vec::new(),
        };
        write_json(&path, &report).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"return_periods\""));
        assert!(text.contains("\"return_period\": null"));
    }
}
