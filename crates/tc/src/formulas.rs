//! Empirical time-of-concentration formulas, SI inputs, result in minutes.
//!
//! Lengths in metres, slopes in m/m, areas in km², intensities in mm/h,
//! velocities in m/s.

/// Inputs shared by every formula. Each formula reads only the fields it
/// needs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CatchmentSample {
    /// Flow path length (m).
    pub length: f64,
    /// Average slope (m/m).
    pub slope: f64,
    /// Manning's n of the flow surface.
    pub roughness: f64,
    /// Catchment area (km²).
    pub area_km2: f64,
    /// Rainfall intensity (mm/h).
    pub intensity: f64,
    /// 2-year 24-hour rainfall depth (mm).
    pub p2: f64,
    /// Flow velocity (m/s).
    pub velocity: f64,
    /// Rational runoff coefficient.
    pub runoff_coefficient: f64,
}

/// Kirpich (1940).
pub fn kirpich(s: &CatchmentSample) -> f64 {
    0.01947 * s.length.powf(0.77) * s.slope.powf(-0.385)
}

/// NRCS TR-55 sheet flow.
pub fn nrcs_sheet_flow(s: &CatchmentSample) -> f64 {
    (0.007 * s.roughness * s.length).powf(0.8) / (s.p2.sqrt() * s.slope.powf(0.4))
}

/// NRCS lag form, `(L / (0.13·√S))^0.77`.
pub fn nrcs_lag(s: &CatchmentSample) -> f64 {
    (s.length / (0.13 * s.slope.sqrt())).powf(0.77)
}

/// Manning kinematic wave with intensity converted to mm/s.
pub fn manning_kinematic_wave(s: &CatchmentSample) -> f64 {
    let i = s.intensity / 3600.0;
    (0.94 * s.length.powf(0.6) * s.roughness.powf(0.6)) / (i.powf(0.4) * s.slope.powf(0.3))
}

/// Manning overland flow without a rainfall term.
pub fn manning_overland(s: &CatchmentSample) -> f64 {
    (1.44 * s.length.powf(0.6) * s.roughness.powf(0.6)) / s.slope.powf(0.3)
}

/// Bransby-Williams, area in hectares.
pub fn bransby_williams(s: &CatchmentSample) -> f64 {
    let area_ha = s.area_km2 * 100.0;
    58.5 * area_ha.powf(0.1) * s.slope.powf(-0.2)
}

/// FAA airport drainage, area in hectares.
pub fn airport(s: &CatchmentSample) -> f64 {
    let area_ha = s.area_km2 * 100.0;
    0.76 * area_ha.sqrt() - 0.5
}

/// Kerby-Hathaway.
pub fn kerby_hathaway(s: &CatchmentSample) -> f64 {
    0.946 * s.length.powf(0.77) * (s.slope / s.roughness).powf(-0.385)
}

/// Izzard.
pub fn izzard(s: &CatchmentSample) -> f64 {
    0.00013 * s.length.powf(0.9) * s.slope.powf(-0.6) * s.roughness.powf(0.4)
}

/// Travel time at a uniform velocity.
pub fn velocity_method(s: &CatchmentSample) -> f64 {
    (s.length / s.velocity) / 60.0
}

/// Rational-method form `A·C·360 / (i·1000)`.
pub fn rational(s: &CatchmentSample) -> f64 {
    (s.area_km2 * s.runoff_coefficient * 360.0) / (s.intensity * 1000.0)
}
