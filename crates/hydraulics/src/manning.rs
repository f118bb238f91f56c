//! Manning's equation.

/// Discharge from Manning's equation, `(1/n)·A·R^(2/3)·S^(1/2)`.
///
/// Units follow the inputs (SI gives m³/s). Callers validate `n > 0`.
pub fn mannings_flow(area: f64, hydraulic_radius: f64, slope: f64, n: f64) -> f64 {
    (1.0 / n) * area * hydraulic_radius.powf(2.0 / 3.0) * slope.sqrt()
}

/// Flow area over wetted perimeter. A dry section (zero perimeter) has zero
/// radius.
pub fn hydraulic_radius(area: f64, perimeter: f64) -> f64 {
    if perimeter == 0.0 {
        0.0
    } else {
        area / perimeter
    }
}
