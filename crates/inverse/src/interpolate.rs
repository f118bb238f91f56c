//! Monotone piecewise-linear `Q -> T` interpolant.

use crate::error::InverseError;
use crate::sample::ForwardModelSample;

/// Piecewise-linear map from discharge to top width.
///
/// Knots are non-decreasing in discharge. A run of equal discharges (a flat
/// stretch of the forward model) is reduced to its narrowest and widest top
/// width, so targets just below the run interpolate toward its start and
/// targets just above it interpolate away from its end. A target equal to the
/// run's discharge resolves to the narrowest width.
#[derive(Debug, Clone)]
pub struct MonotoneInterpolant {
    discharge: Vec<f64>,
    top_width: Vec<f64>,
}

impl MonotoneInterpolant {
    /// Builds the interpolant, ignoring samples with non-finite values.
    ///
    /// # Errors
    ///
    /// Returns [`InverseError::DegenerateModel`] if fewer than two distinct
    /// finite discharges remain.
    pub fn from_samples(samples: &[ForwardModelSample]) -> Result<Self, InverseError> {
        let mut pts: Vec<(f64, f64)> = samples
            .iter()
            .filter(|s| s.discharge.is_finite() && s.top_width.is_finite())
            .map(|s| (s.discharge, s.top_width))
            .collect();
        pts.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.total_cmp(&b.1)));

        let mut discharge = Vec::with_capacity(pts.len());
        let mut top_width = Vec::with_capacity(pts.len());
        let mut distinct = 0;
        let mut i = 0;
        while i < pts.len() {
            let q = pts[i].0;
            let mut end = i;
            while end + 1 < pts.len() && pts[end + 1].0 == q {
                end += 1;
            }
            discharge.push(q);
            top_width.push(pts[i].1);
            if end > i {
                discharge.push(q);
                top_width.push(pts[end].1);
            }
            distinct += 1;
            i = end + 1;
        }

        if distinct < 2 {
            return Err(InverseError::DegenerateModel { distinct });
        }

        Ok(Self {
            discharge,
            top_width,
        })
    }

    /// Smallest knot discharge.
    pub fn q_min(&self) -> f64 {
        self.discharge[0]
    }

    /// Largest knot discharge.
    pub fn q_max(&self) -> f64 {
        self.discharge[self.discharge.len() - 1]
    }

    /// Number of knots.
    pub fn n_knots(&self) -> usize {
        self.discharge.len()
    }

    /// Returns `true` if `q` lies within `[q_min, q_max]`.
    pub fn contains(&self, q: f64) -> bool {
        q >= self.q_min() && q <= self.q_max()
    }

    /// Interpolates the top width for `q`, clamping to the end knots outside
    /// the knot range.
    pub fn interpolate(&self, q: f64) -> f64 {
        let n = self.discharge.len();
        if q <= self.discharge[0] {
            return self.top_width[0];
        }
        if q >= self.discharge[n - 1] {
            return self.top_width[n - 1];
        }
        // First knot with discharge >= q; guaranteed in 1..n by the checks above.
        // Knot hi - 1 is then the last one strictly below q.
        let hi = self.discharge.partition_point(|&x| x < q);
        if self.discharge[hi] == q {
            return self.top_width[hi];
        }
        self.segment(hi - 1, q)
    }

    /// Evaluates the end segment nearest `q` as a straight line, extending it
    /// past the knot range.
    pub fn extrapolate(&self, q: f64) -> f64 {
        let n = self.discharge.len();
        if q < self.discharge[0] {
            // Last knot of the lowest-discharge run.
            let first_above = self.discharge.partition_point(|&x| x <= self.discharge[0]);
            self.segment(first_above - 1, q)
        } else if q > self.discharge[n - 1] {
            // First knot of the highest-discharge run.
            let first_top = self.discharge.partition_point(|&x| x < self.discharge[n - 1]);
            self.segment(first_top - 1, q)
        } else {
            self.interpolate(q)
        }
    }

    /// Linear evaluation of the segment starting at knot `i`.
    fn segment(&self, i: usize, q: f64) -> f64 {
        let (q0, q1) = (self.discharge[i], self.discharge[i + 1]);
        let (t0, t1) = (self.top_width[i], self.top_width[i + 1]);
        t0 + (q - q0) * (t1 - t0) / (q1 - q0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn samples(points: &[(f64, f64)]) -> Vec<ForwardModelSample> {
        points
            .iter()
            .map(|&(t, q)| ForwardModelSample {
                top_width: t,
                discharge: q,
            })
            .collect()
    }

    #[test]
    fn interpolates_between_knots() {
        let interp =
            MonotoneInterpolant::from_samples(&samples(&[(0.0, 0.0), (1.0, 2.0), (2.0, 6.0)]))
                .unwrap();
        assert_relative_eq!(interp.interpolate(1.0), 0.5, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(4.0), 1.5, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(2.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(0.0), 0.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(6.0), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn flat_run_reduced_to_its_ends() {
        // Q stays 0 until T = 2, then rises.
        let interp = MonotoneInterpolant::from_samples(&samples(&[
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
            (3.0, 1.0),
        ]))
        .unwrap();
        assert_eq!(interp.n_knots(), 3);
        assert_relative_eq!(interp.interpolate(0.0), 0.0);
        // Rises from the end of the flat run, not its start.
        assert_relative_eq!(interp.interpolate(0.5), 2.5, epsilon = 1e-12);
    }

    #[test]
    fn flat_run_in_the_middle() {
        let interp = MonotoneInterpolant::from_samples(&samples(&[
            (0.0, 0.0),
            (1.0, 1.0),
            (2.0, 1.0),
            (3.0, 1.0),
            (4.0, 2.0),
        ]))
        .unwrap();
        assert_relative_eq!(interp.interpolate(0.5), 0.5, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(1.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(interp.interpolate(1.5), 3.5, epsilon = 1e-12);
    }

    #[test]
    fn extrapolation_skips_flat_end_runs() {
        let interp = MonotoneInterpolant::from_samples(&samples(&[
            (0.0, 1.0),
            (1.0, 1.0),
            (2.0, 2.0),
            (3.0, 3.0),
            (4.0, 3.0),
        ]))
        .unwrap();
        // Below: segment (1,1)-(2,2).
        assert_relative_eq!(interp.extrapolate(0.5), 0.5, epsilon = 1e-12);
        // Above: segment (2,2)-(3,3).
        assert_relative_eq!(interp.extrapolate(4.0), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn unsorted_samples_are_ordered_by_discharge() {
        let interp =
            MonotoneInterpolant::from_samples(&samples(&[(2.0, 4.0), (0.0, 0.0), (1.0, 2.0)]))
                .unwrap();
        assert_eq!(interp.q_min(), 0.0);
        assert_eq!(interp.q_max(), 4.0);
        assert_relative_eq!(interp.interpolate(3.0), 1.5, epsilon = 1e-12);
    }

    #[test]
    fn degenerate_constant_model() {
        let err = MonotoneInterpolant::from_samples(&samples(&[(0.0, 1.0), (1.0, 1.0)]));
        assert!(matches!(
            err,
            Err(InverseError::DegenerateModel { distinct: 1 })
        ));
    }

    #[test]
    fn degenerate_all_nan() {
        let err =
            MonotoneInterpolant::from_samples(&samples(&[(0.0, f64::NAN), (1.0, f64::NAN)]));
        assert!(matches!(
            err,
            Err(InverseError::DegenerateModel { distinct: 0 })
        ));
    }

    #[test]
    fn extrapolates_end_segments() {
        let interp =
            MonotoneInterpolant::from_samples(&samples(&[(1.0, 1.0), (2.0, 2.0), (3.0, 4.0)]))
                .unwrap();
        // Below: slope of first segment is 1.
        assert_relative_eq!(interp.extrapolate(0.0), 0.0, epsilon = 1e-12);
        // Above: last segment has dT/dQ = 0.5.
        assert_relative_eq!(interp.extrapolate(6.0), 4.0, epsilon = 1e-12);
        // Inside: same as interpolate.
        assert_relative_eq!(interp.extrapolate(3.0), 2.5, epsilon = 1e-12);
        assert!(!interp.contains(6.0));
        assert!(interp.contains(3.0));
    }
}
