//! Rational method peak discharge.

/// Peak discharge in m³/s, `Q = C · (i / 3.6e6) · (A · 1e4)`, for runoff
/// coefficient `c`, rainfall intensity in mm/h and catchment area in hectares.
pub fn rational_peak_flow(c: f64, intensity_mm_hr: f64, area_ha: f64) -> f64 {
    let intensity_m_s = intensity_mm_hr / 3.6e6;
    let area_m2 = area_ha * 1e4;
    c * intensity_m_s * area_m2
}
