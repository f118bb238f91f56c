//! HEC-22 grate inlet on a continuous grade.
//!
//! Flow in a uniform triangular gutter approaches the grate. The part over
//! the grate width (frontal flow) is captured with efficiency `Rf`, reduced
//! once the gutter velocity exceeds the grate's splash-over velocity; the
//! remainder (side flow) is captured along the grate length with efficiency
//! `Rs`.

use crate::error::{HydraulicsError, require_fraction, require_positive};
use crate::grate::GrateType;
use crate::units::UnitSystem;

/// Gutter flow at spread `t`, `(Ku/n)·Sx^1.67·SL^0.5·T^2.67`.
pub fn gutter_flow(units: UnitSystem, n: f64, sx: f64, sl: f64, t: f64) -> f64 {
    (units.gutter_flow_coefficient() / n) * sx.powf(1.67) * sl.sqrt() * t.powf(2.67)
}

/// Mean gutter velocity at spread `t`, `(Ku/n)·SL^0.5·Sx^0.67·T^0.67`.
pub fn gutter_velocity(units: UnitSystem, n: f64, sx: f64, sl: f64, t: f64) -> f64 {
    (units.velocity_coefficient() / n) * sl.sqrt() * sx.powf(0.67) * t.powf(0.67)
}

/// Spread carrying `q`, the closed-form inverse of [`gutter_flow`].
pub fn spread_for_flow(units: UnitSystem, n: f64, sx: f64, sl: f64, q: f64) -> f64 {
    let k = (units.gutter_flow_coefficient() / n) * sx.powf(1.67) * sl.sqrt();
    (q / k).powf(1.0 / 2.67)
}

/// Ratio of frontal flow to total gutter flow, `1 − (1 − min(W/T, 1))^2.67`.
pub fn frontal_flow_ratio(grate_width: f64, spread: f64) -> f64 {
    1.0 - (1.0 - (grate_width / spread).min(1.0)).powf(2.67)
}

/// Frontal-flow interception efficiency. 1 below the splash-over velocity,
/// then falling linearly, clamped to `[0, 1]`.
pub fn frontal_efficiency(units: UnitSystem, velocity: f64, splash_over: f64) -> f64 {
    if velocity < splash_over {
        1.0
    } else {
        (1.0 - units.splash_coefficient() * (velocity - splash_over)).clamp(0.0, 1.0)
    }
}

/// Side-flow interception efficiency, `1 / (1 + Ku·V^1.8 / (Sx·L^2.3))`.
pub fn side_flow_efficiency(
    units: UnitSystem,
    velocity: f64,
    cross_slope: f64,
    grate_length: f64,
) -> f64 {
    1.0 / (1.0 + units.side_flow_coefficient() * velocity.powf(1.8)
        / (cross_slope * grate_length.powf(2.3)))
}

/// A grate inlet on grade.
///
/// # Example
///
/// ```
/// use sluice_hydraulics::{GrateOnGrade, GrateType};
///
/// let result = GrateOnGrade::new(GrateType::CurvedVane)
///     .with_spread(6.0)
///     .analyze()
///     .unwrap();
/// assert!(result.intercepted() <= result.flow());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrateOnGrade {
    units: UnitSystem,
    n: f64,
    cross_slope: f64,
    long_slope: f64,
    spread: f64,
    grate: GrateType,
    grate_width: f64,
    grate_length: f64,
    clogging: f64,
}

impl GrateOnGrade {
    /// Creates an inlet of the given grate type with defaults.
    ///
    /// Defaults: US customary, `n = 0.016`, `Sx = 0.025`, `SL = 0.03`,
    /// `T = 8 ft`, `W = L = 2 ft`, no clogging.
    pub fn new(grate: GrateType) -> Self {
        Self {
            units: UnitSystem::UsCustomary,
            n: 0.016,
            cross_slope: 0.025,
            long_slope: 0.03,
            spread: 8.0,
            grate,
            grate_width: 2.0,
            grate_length: 2.0,
            clogging: 0.0,
        }
    }

    /// Sets the unit system.
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    /// Sets Manning's n of the gutter.
    pub fn with_manning_n(mut self, n: f64) -> Self {
        self.n = n;
        self
    }

    /// Sets the cross slope `Sx`.
    pub fn with_cross_slope(mut self, sx: f64) -> Self {
        self.cross_slope = sx;
        self
    }

    /// Sets the longitudinal slope `SL`.
    pub fn with_long_slope(mut self, sl: f64) -> Self {
        self.long_slope = sl;
        self
    }

    /// Sets the approaching spread `T`.
    pub fn with_spread(mut self, t: f64) -> Self {
        self.spread = t;
        self
    }

    /// Sets the grate dimensions.
    pub fn with_grate_size(mut self, width: f64, length: f64) -> Self {
        self.grate_width = width;
        self.grate_length = length;
        self
    }

    /// Sets the clogging fraction in `[0, 1)`.
    pub fn with_clogging(mut self, fraction: f64) -> Self {
        self.clogging = fraction;
        self
    }

    /// Unit system.
    pub fn units(&self) -> UnitSystem {
        self.units
    }

    /// Grate type.
    pub fn grate(&self) -> GrateType {
        self.grate
    }

    /// Approaching spread.
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), HydraulicsError> {
        require_positive("manning_n", self.n)?;
        require_positive("cross_slope", self.cross_slope)?;
        require_positive("long_slope", self.long_slope)?;
        require_positive("spread", self.spread)?;
        require_positive("grate_width", self.grate_width)?;
        require_positive("grate_length", self.grate_length)?;
        require_fraction("clogging", self.clogging)?;
        Ok(())
    }

    /// Computes the interception of this inlet.
    ///
    /// # Errors
    ///
    /// Returns [`HydraulicsError::InvalidParameter`] if validation fails.
    pub fn analyze(&self) -> Result<OnGradeResult, HydraulicsError> {
        self.validate()?;
        let u = self.units;
        let flow = gutter_flow(u, self.n, self.cross_slope, self.long_slope, self.spread);
        let velocity = gutter_velocity(u, self.n, self.cross_slope, self.long_slope, self.spread);
        let splash_over = self.grate.splash_over_velocity(self.grate_length, u);

        let eo = frontal_flow_ratio(self.grate_width, self.spread);
        let rf = frontal_efficiency(u, velocity, splash_over);
        let rs = side_flow_efficiency(u, velocity, self.cross_slope, self.grate_length);
        let efficiency = rf * eo + rs * (1.0 - eo);

        let intercepted = flow * efficiency * (1.0 - self.clogging);
        Ok(OnGradeResult {
            flow,
            velocity,
            splash_over,
            frontal_ratio: eo,
            frontal_efficiency: rf,
            side_efficiency: rs,
            efficiency,
            intercepted,
            bypass: flow - intercepted,
        })
    }
}

impl Default for GrateOnGrade {
    fn default() -> Self {
        Self::new(GrateType::default())
    }
}

/// Interception of a grate inlet on grade.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OnGradeResult {
    flow: f64,
    velocity: f64,
    splash_over: f64,
    frontal_ratio: f64,
    frontal_efficiency: f64,
    side_efficiency: f64,
    efficiency: f64,
    intercepted: f64,
    bypass: f64,
}

impl OnGradeResult {
    /// Total approaching gutter flow `Q`.
    pub fn flow(&self) -> f64 {
        self.flow
    }

    /// Gutter velocity `V`.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Splash-over velocity `Vo` of the grate.
    pub fn splash_over(&self) -> f64 {
        self.splash_over
    }

    /// Frontal flow ratio `Eo`.
    pub fn frontal_ratio(&self) -> f64 {
        self.frontal_ratio
    }

    /// Frontal-flow efficiency `Rf`.
    pub fn frontal_efficiency(&self) -> f64 {
        self.frontal_efficiency
    }

    /// Side-flow efficiency `Rs`.
    pub fn side_efficiency(&self) -> f64 {
        self.side_efficiency
    }

    /// Clean-grate efficiency `E`.
    pub fn efficiency(&self) -> f64 {
        self.efficiency
    }

    /// Intercepted flow after clogging.
    pub fn intercepted(&self) -> f64 {
        self.intercepted
    }

    /// Bypass flow after clogging.
    pub fn bypass(&self) -> f64 {
        self.bypass
    }

    /// Intercepted share of the approaching flow after clogging.
    pub fn effective_efficiency(&self) -> f64 {
        self.intercepted / self.flow
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn default_inlet_by_hand() {
        let r = GrateOnGrade::default().analyze().unwrap();
        let q = (0.56 / 0.016) * 0.025f64.powf(1.67) * 0.03f64.sqrt() * 8.0f64.powf(2.67);
        let v = (1.11 / 0.016) * 0.03f64.sqrt() * 0.025f64.powf(0.67) * 8.0f64.powf(0.67);
        assert_relative_eq!(r.flow(), q, epsilon = 1e-12);
        assert_relative_eq!(r.velocity(), v, epsilon = 1e-12);
        assert_eq!(r.splash_over(), 8.2);
        // V < Vo for the defaults.
        assert_eq!(r.frontal_efficiency(), 1.0);
        let eo = 1.0 - (1.0 - 0.25f64).powf(2.67);
        assert_relative_eq!(r.frontal_ratio(), eo, epsilon = 1e-12);
        let rs = 1.0 / (1.0 + 0.15 * v.powf(1.8) / (0.025 * 2.0f64.powf(2.3)));
        assert_relative_eq!(r.side_efficiency(), rs, epsilon = 1e-12);
        assert_relative_eq!(r.efficiency(), eo + rs * (1.0 - eo), epsilon = 1e-12);
        assert_relative_eq!(r.intercepted() + r.bypass(), r.flow(), epsilon = 1e-12);
    }

    #[test]
    fn clogging_reduces_interception() {
        let clean = GrateOnGrade::default().analyze().unwrap();
        let clogged = GrateOnGrade::default().with_clogging(0.5).analyze().unwrap();
        assert_relative_eq!(clogged.intercepted(), clean.intercepted() * 0.5, epsilon = 1e-12);
        assert_relative_eq!(
            clogged.bypass(),
            clean.flow() - clogged.intercepted(),
            epsilon = 1e-12
        );
        assert_eq!(clogged.efficiency(), clean.efficiency());
    }

    #[test]
    fn grate_wider_than_spread_takes_all_frontal() {
        assert_eq!(frontal_flow_ratio(2.0, 1.5), 1.0);
    }

    #[test]
    fn splash_over_degrades_frontal_efficiency() {
        let u = UnitSystem::UsCustomary;
        assert_eq!(frontal_efficiency(u, 5.0, 6.0), 1.0);
        assert_relative_eq!(frontal_efficiency(u, 8.0, 6.0), 1.0 - 0.18, epsilon = 1e-12);
        assert_eq!(frontal_efficiency(u, 30.0, 6.0), 0.0);
    }

    #[test]
    fn spread_inverse() {
        let u = UnitSystem::Si;
        let q = gutter_flow(u, 0.016, 0.02, 0.01, 2.5);
        assert_relative_eq!(spread_for_flow(u, 0.016, 0.02, 0.01, q), 2.5, epsilon = 1e-10);
    }

    #[test]
    fn invalid_clogging() {
        let err = GrateOnGrade::default().with_clogging(1.0).analyze();
        assert!(matches!(
            err,
            Err(HydraulicsError::InvalidParameter {
                name: "clogging",
                ..
            })
        ));
    }
}
