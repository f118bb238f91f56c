//! Composite gutter section: a steep gutter strip next to a flatter road.
//!
//! ```text
//!  curb
//!   |\                                  water surface
//!   | \________________________________________
//!   |  \  gutter (W, Sw, Nw)    road (Sx, Nx)  /
//!   |   \_________                      ______/
//!   |             \___________________/
//!   <---- W ----><-------- T - W --------->
//! ```
//!
//! Discharge is the Manning flow of the gutter triangle plus the Manning flow
//! of the road section above it, each with its own roughness.

use sluice_inverse::{DepthModel, ForwardModel, InversionResult, SolverConfig, solve_with_depth};
use tracing::debug;

use crate::error::{HydraulicsError, require_non_negative, require_positive};
use crate::manning::{hydraulic_radius, mannings_flow};

/// Default road-side ponding depth limit in metres.
pub const DEFAULT_DEPTH_LIMIT: f64 = 0.150;

/// Area, wetted perimeter and discharge of one sub-section.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionFlow {
    /// Flow area.
    pub area: f64,
    /// Wetted perimeter.
    pub perimeter: f64,
    /// Hydraulic radius (0 for a dry section).
    pub radius: f64,
    /// Manning discharge.
    pub discharge: f64,
}

/// Composite gutter geometry and roughness.
///
/// # Example
///
/// ```
/// use sluice_hydraulics::CompositeGutter;
/// use sluice_inverse::ForwardModel;
///
/// let gutter = CompositeGutter::new().with_long_slope(0.01);
/// assert!(gutter.discharge(1.0) > gutter.discharge(0.5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompositeGutter {
    gutter_width: f64,
    gutter_slope: f64,
    gutter_n: f64,
    cross_slope: f64,
    road_n: f64,
    long_slope: f64,
}

impl CompositeGutter {
    /// Creates a gutter with defaults.
    ///
    /// Defaults: `W = 0.3 m`, `Sw = 0.065`, `Nw = 0.012`, `Sx = 0.020`,
    /// `Nx = 0.018`, `Sl = 0.02`.
    pub fn new() -> Self {
        Self {
            gutter_width: 0.3,
            gutter_slope: 0.065,
            gutter_n: 0.012,
            cross_slope: 0.020,
            road_n: 0.018,
            long_slope: 0.02,
        }
    }

    /// Sets the gutter strip width `W`.
    pub fn with_gutter_width(mut self, w: f64) -> Self {
        self.gutter_width = w;
        self
    }

    /// Sets the gutter cross slope `Sw`.
    pub fn with_gutter_slope(mut self, sw: f64) -> Self {
        self.gutter_slope = sw;
        self
    }

    /// Sets Manning's n for the gutter strip.
    pub fn with_gutter_n(mut self, n: f64) -> Self {
        self.gutter_n = n;
        self
    }

    /// Sets the road cross slope `Sx`.
    pub fn with_cross_slope(mut self, sx: f64) -> Self {
        self.cross_slope = sx;
        self
    }

    /// Sets Manning's n for the road surface.
    pub fn with_road_n(mut self, n: f64) -> Self {
        self.road_n = n;
        self
    }

    /// Sets the longitudinal slope `Sl`.
    pub fn with_long_slope(mut self, sl: f64) -> Self {
        self.long_slope = sl;
        self
    }

    // --- Accessors ---

    /// Gutter strip width `W`.
    pub fn gutter_width(&self) -> f64 {
        self.gutter_width
    }

    /// Gutter cross slope `Sw`.
    pub fn gutter_slope(&self) -> f64 {
        self.gutter_slope
    }

    /// Manning's n of the gutter strip.
    pub fn gutter_n(&self) -> f64 {
        self.gutter_n
    }

    /// Road cross slope `Sx`.
    pub fn cross_slope(&self) -> f64 {
        self.cross_slope
    }

    /// Manning's n of the road surface.
    pub fn road_n(&self) -> f64 {
        self.road_n
    }

    /// Longitudinal slope `Sl`.
    pub fn long_slope(&self) -> f64 {
        self.long_slope
    }

    /// Validates the geometry.
    ///
    /// Roughness and longitudinal slope must be strictly positive; widths and
    /// cross slopes non-negative.
    pub fn validate(&self) -> Result<(), HydraulicsError> {
        require_non_negative("gutter_width", self.gutter_width)?;
        require_non_negative("gutter_slope", self.gutter_slope)?;
        require_positive("gutter_n", self.gutter_n)?;
        require_non_negative("cross_slope", self.cross_slope)?;
        require_positive("road_n", self.road_n)?;
        require_positive("long_slope", self.long_slope)?;
        Ok(())
    }

    /// Flow in the gutter triangle at top width `t`.
    pub fn gutter_section(&self, t: f64) -> SectionFlow {
        let tw = t.min(self.gutter_width);
        let sw = self.gutter_slope;
        let area = 0.5 * tw * (sw * tw);
        let perimeter = tw * (1.0 + sw * sw).sqrt();
        let radius = hydraulic_radius(area, perimeter);
        SectionFlow {
            area,
            perimeter,
            radius,
            discharge: mannings_flow(area, radius, self.long_slope, self.gutter_n),
        }
    }

    /// Flow over the road beyond the gutter strip at top width `t`.
    pub fn side_section(&self, t: f64) -> SectionFlow {
        let ts = (t - self.gutter_width).max(0.0);
        let step = self.gutter_slope * self.gutter_width;
        let sx = self.cross_slope;
        let area = ts * (step + sx * ts / 2.0);
        let perimeter = ts + (step * step + ts * ts).sqrt() + ts * (1.0 + sx * sx).sqrt();
        let radius = hydraulic_radius(area, perimeter);
        SectionFlow {
            area,
            perimeter,
            radius,
            discharge: mannings_flow(area, radius, self.long_slope, self.road_n),
        }
    }

    /// Whether the maximum depth at top width `t` exceeds `limit`.
    pub fn exceeds_depth_limit(&self, t: f64, limit: f64) -> bool {
        self.max_depth(t) > limit
    }

    /// Solves the spread carrying `q` and the corresponding curb depth.
    ///
    /// # Errors
    ///
    /// Returns [`HydraulicsError::InvalidParameter`] for bad geometry, or the
    /// solver's error for a bad grid or an unreachable target.
    pub fn solve_spread(
        &self,
        q: f64,
        config: &SolverConfig,
    ) -> Result<InversionResult, HydraulicsError> {
        self.validate()?;
        let result = solve_with_depth(self, config, q)?;
        debug!(
            q,
            spread = result.solved_t(),
            depth = result.derived_depth(),
            "gutter spread solved"
        );
        Ok(result)
    }
}

impl Default for CompositeGutter {
    fn default() -> Self {
        Self::new()
    }
}

impl ForwardModel for CompositeGutter {
    fn discharge(&self, top_width: f64) -> f64 {
        self.gutter_section(top_width).discharge + self.side_section(top_width).discharge
    }
}

impl DepthModel for CompositeGutter {
    fn max_depth(&self, top_width: f64) -> f64 {
        if top_width <= self.gutter_width {
            self.gutter_slope * top_width
        } else {
            self.gutter_slope * self.gutter_width
                + self.cross_slope * (top_width - self.gutter_width)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn defaults() {
        let g = CompositeGutter::default();
        assert_eq!(g.gutter_width(), 0.3);
        assert_eq!(g.gutter_slope(), 0.065);
        assert_eq!(g.gutter_n(), 0.012);
        assert_eq!(g.cross_slope(), 0.020);
        assert_eq!(g.road_n(), 0.018);
        assert_eq!(g.long_slope(), 0.02);
        assert!(g.validate().is_ok());
    }

    #[test]
    fn dry_section_carries_nothing() {
        let g = CompositeGutter::new();
        assert_eq!(g.discharge(0.0), 0.0);
        let side = g.side_section(0.2);
        assert_eq!(side.perimeter, 0.0);
        assert_eq!(side.radius, 0.0);
        assert_eq!(side.discharge, 0.0);
    }

    #[test]
    fn gutter_triangle_by_hand() {
        let g = CompositeGutter::new();
        let s = g.gutter_section(0.2);
        let area = 0.5 * 0.2 * 0.065 * 0.2;
        let perimeter = 0.2 * (1.0f64 + 0.065 * 0.065).sqrt();
        assert_relative_eq!(s.area, area, epsilon = 1e-15);
        assert_relative_eq!(s.perimeter, perimeter, epsilon = 1e-15);
        let q = (1.0 / 0.012) * area * (area / perimeter).powf(2.0 / 3.0) * 0.02f64.sqrt();
        assert_relative_eq!(g.discharge(0.2), q, epsilon = 1e-15);
    }

    #[test]
    fn gutter_strip_saturates_at_w() {
        let g = CompositeGutter::new();
        assert_eq!(g.gutter_section(0.3), g.gutter_section(2.0));
    }

    #[test]
    fn discharge_is_monotone() {
        let g = CompositeGutter::new();
        let mut prev = 0.0;
        for k in 1..=200 {
            let q = g.discharge(k as f64 * 0.05);
            assert!(q >= prev);
            prev = q;
        }
    }

    #[test]
    fn depth_kinks_at_gutter_width() {
        let g = CompositeGutter::new();
        assert_relative_eq!(g.max_depth(0.2), 0.013, epsilon = 1e-12);
        assert_relative_eq!(g.max_depth(0.3), 0.0195, epsilon = 1e-12);
        assert_relative_eq!(g.max_depth(1.3), 0.0395, epsilon = 1e-12);
        assert!(!g.exceeds_depth_limit(1.3, DEFAULT_DEPTH_LIMIT));
        assert!(g.exceeds_depth_limit(7.0, DEFAULT_DEPTH_LIMIT));
    }

    #[test]
    fn invalid_roughness_rejected() {
        let g = CompositeGutter::new().with_gutter_n(0.0);
        assert!(matches!(
            g.validate(),
            Err(HydraulicsError::InvalidParameter {
                name: "gutter_n",
                ..
            })
        ));
        let g = CompositeGutter::new().with_long_slope(-0.01);
        assert!(g.solve_spread(0.025, &SolverConfig::default()).is_err());
    }

    #[test]
    fn spread_for_default_target() {
        let g = CompositeGutter::new();
        let cfg = SolverConfig::default();
        let r = g.solve_spread(0.025, &cfg).unwrap();
        assert!(!r.extrapolated());
        assert!(r.solved_t() > g.gutter_width());
        assert_relative_eq!(g.discharge(r.solved_t()), 0.025, max_relative = 0.01);
        assert_relative_eq!(
            r.derived_depth().unwrap(),
            g.max_depth(r.solved_t()),
            epsilon = 1e-12
        );
    }
}
