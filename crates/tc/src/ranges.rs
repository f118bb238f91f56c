//! Uniform sampling ranges for the catchment inputs.

use rand::Rng;

use crate::error::TcError;
use crate::formulas::CatchmentSample;

/// Inclusive `[low, high]` sampling range.
pub type Range = (f64, f64);

/// Sampling ranges for every [`CatchmentSample`] field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TcRanges {
    length: Range,
    slope: Range,
    roughness: Range,
    area_km2: Range,
    intensity: Range,
    p2: Range,
    velocity: Range,
    runoff_coefficient: Range,
}

impl TcRanges {
    /// Creates ranges with defaults.
    ///
    /// Defaults: length 50-200 m, slope 0.01-0.05, n 0.03-0.06,
    /// area 0.1-1.0 km², intensity 20-40 mm/h, P2 30-80 mm,
    /// velocity 0.3-2.0 m/s, C 0.3-0.8.
    pub fn new() -> Self {
        Self {
            length: (50.0, 200.0),
            slope: (0.01, 0.05),
            roughness: (0.03, 0.06),
            area_km2: (0.1, 1.0),
            intensity: (20.0, 40.0),
            p2: (30.0, 80.0),
            velocity: (0.3, 2.0),
            runoff_coefficient: (0.3, 0.8),
        }
    }

    /// Sets the flow path length range (m).
    pub fn with_length(mut self, r: Range) -> Self {
        self.length = r;
        self
    }

    /// Sets the slope range (m/m).
    pub fn with_slope(mut self, r: Range) -> Self {
        self.slope = r;
        self
    }

    /// Sets the Manning's n range.
    pub fn with_roughness(mut self, r: Range) -> Self {
        self.roughness = r;
        self
    }

    /// Sets the catchment area range (km²).
    pub fn with_area_km2(mut self, r: Range) -> Self {
        self.area_km2 = r;
        self
    }

    /// Sets the rainfall intensity range (mm/h).
    pub fn with_intensity(mut self, r: Range) -> Self {
        self.intensity = r;
        self
    }

    /// Sets the 2-year 24-hour rainfall range (mm).
    pub fn with_p2(mut self, r: Range) -> Self {
        self.p2 = r;
        self
    }

    /// Sets the flow velocity range (m/s).
    pub fn with_velocity(mut self, r: Range) -> Self {
        self.velocity = r;
        self
    }

    /// Sets the runoff coefficient range.
    pub fn with_runoff_coefficient(mut self, r: Range) -> Self {
        self.runoff_coefficient = r;
        self
    }

    fn all(&self) -> [(&'static str, Range); 8] {
        [
            ("length", self.length),
            ("slope", self.slope),
            ("roughness", self.roughness),
            ("area", self.area_km2),
            ("intensity", self.intensity),
            ("p2", self.p2),
            ("velocity", self.velocity),
            ("runoff_coefficient", self.runoff_coefficient),
        ]
    }

    /// Validates every range: finite, `low <= high`, and `low > 0`.
    pub fn validate(&self) -> Result<(), TcError> {
        for (name, (low, high)) in self.all() {
            let fail = |reason| Err(TcError::InvalidRange {
                name,
                low,
                high,
                reason,
            });
            if !low.is_finite() || !high.is_finite() {
                return fail("bounds must be finite");
            }
            if low > high {
                return fail("low must be <= high");
            }
            if low <= 0.0 {
                return fail("low must be > 0");
            }
        }
        Ok(())
    }

    /// Draws one sample. Fields are drawn in declaration order.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> CatchmentSample {
        CatchmentSample {
            length: uniform(rng, self.length),
            slope: uniform(rng, self.slope),
            roughness: uniform(rng, self.roughness),
            area_km2: uniform(rng, self.area_km2),
            intensity: uniform(rng, self.intensity),
            p2: uniform(rng, self.p2),
            velocity: uniform(rng, self.velocity),
            runoff_coefficient: uniform(rng, self.runoff_coefficient),
        }
    }
}

impl Default for TcRanges {
    fn default() -> Self {
        Self::new()
    }
}

fn uniform<R: Rng + ?Sized>(rng: &mut R, (low, high): Range) -> f64 {
    if low == high {
        low
    } else {
        rng.random_range(low..=high)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn defaults_valid() {
        assert!(TcRanges::default().validate().is_ok());
    }

    #[test]
    fn samples_within_ranges() {
        let ranges = TcRanges::new().with_slope((0.02, 0.02));
        let mut rng = StdRng::seed_from_u64(4);
        for _ in 0..500 {
            let s = ranges.sample(&mut rng);
            assert!((50.0..=200.0).contains(&s.length));
            assert_eq!(s.slope, 0.02);
            assert!((0.3..=0.8).contains(&s.runoff_coefficient));
        }
    }

    #[test]
    fn invalid_ranges() {
        assert!(matches!(
            TcRanges::new().with_slope((0.05, 0.01)).validate(),
            Err(TcError::InvalidRange { name: "slope", .. })
        ));
        assert!(matches!(
            TcRanges::new().with_slope((0.0, 0.01)).validate(),
            Err(TcError::InvalidRange { name: "slope", .. })
        ));
        assert!(
            TcRanges::new()
                .with_p2((f64::NAN, 10.0))
                .validate()
                .is_err()
        );
    }
}
