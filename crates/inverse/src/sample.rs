//! Sampling a forward model over the top-width grid.

use tracing::warn;

use crate::config::SolverConfig;
use crate::error::InverseError;
use crate::model::ForwardModel;

/// One evaluation of the forward model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForwardModelSample {
    /// Sampled top width.
    pub top_width: f64,
    /// Discharge at that top width.
    pub discharge: f64,
}

/// The forward model evaluated over a [`SolverConfig`] grid, in increasing
/// top-width order.
#[derive(Debug, Clone)]
pub struct SampledCurve {
    samples: Vec<ForwardModelSample>,
}

impl SampledCurve {
    /// Evaluates `model` at every grid point of `config`.
    ///
    /// Logs a warning when the sampled discharge decreases anywhere, since the
    /// inversion is then not unique.
    ///
    /// # Errors
    ///
    /// Returns [`InverseError::InvalidConfig`] if `config` is invalid.
    pub fn sample<M: ForwardModel + ?Sized>(
        model: &M,
        config: &SolverConfig,
    ) -> Result<Self, InverseError> {
        config.validate()?;
        let samples: Vec<ForwardModelSample> = config
            .grid()
            .into_iter()
            .map(|t| ForwardModelSample {
                top_width: t,
                discharge: model.discharge(t),
            })
            .collect();

        let decreases = samples
            .windows(2)
            .filter(|w| w[1].discharge < w[0].discharge)
            .count();
        if decreases > 0 {
            warn!(
                decreases,
                "forward model is not monotone over the sampled range; inversion may be ambiguous"
            );
        }

        Ok(Self { samples })
    }

    /// Builds a curve from pre-computed samples (assumed ordered by top width).
    pub fn from_samples(samples: Vec<ForwardModelSample>) -> Self {
        Self { samples }
    }

    /// All samples in top-width order.
    pub fn samples(&self) -> &[ForwardModelSample] {
        &self.samples
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if there are no samples.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Smallest and largest finite sampled discharge, or `None` if there are
    /// no finite samples.
    pub fn discharge_range(&self) -> Option<(f64, f64)> {
        self.samples
            .iter()
            .map(|s| s.discharge)
            .filter(|q| q.is_finite())
            .fold(None, |acc, q| match acc {
                None => Some((q, q)),
                Some((lo, hi)) => Some((lo.min(q), hi.max(q))),
            })
    }

    /// Samples whose discharge does not exceed `q_max`.
    ///
    /// This is a display-range filter for plotting only. The solver never
    /// applies it, so a chart ceiling cannot change which targets are
    /// solvable.
    pub fn below_ceiling(&self, q_max: f64) -> Vec<ForwardModelSample> {
        self.samples
            .iter()
            .copied()
            .filter(|s| s.discharge <= q_max)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_linear_model() {
        let cfg = SolverConfig::new(0.0, 10.0, 11);
        let curve = SampledCurve::sample(&|t: f64| 2.0 * t, &cfg).unwrap();
        assert_eq!(curve.len(), 11);
        assert_eq!(curve.samples()[0].discharge, 0.0);
        assert_eq!(curve.samples()[10].discharge, 20.0);
        assert_eq!(curve.discharge_range(), Some((0.0, 20.0)));
    }

    #[test]
    fn sample_rejects_invalid_config() {
        let cfg = SolverConfig::new(1.0, 0.0, 11);
        assert!(matches!(
            SampledCurve::sample(&|t: f64| t, &cfg),
            Err(InverseError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn discharge_range_skips_non_finite() {
        let curve = SampledCurve::from_samples(vec![
            ForwardModelSample {
                top_width: 0.0,
                discharge: f64::NAN,
            },
            ForwardModelSample {
                top_width: 1.0,
                discharge: 3.0,
            },
            ForwardModelSample {
                top_width: 2.0,
                discharge: 5.0,
            },
        ]);
        assert_eq!(curve.discharge_range(), Some((3.0, 5.0)));
    }

    #[test]
    fn discharge_range_empty() {
        let curve = SampledCurve::from_samples(vec![]);
        assert!(curve.is_empty());
        assert_eq!(curve.discharge_range(), None);
    }

    #[test]
    fn below_ceiling_filters_display_only() {
        let cfg = SolverConfig::new(0.0, 10.0, 11);
        let curve = SampledCurve::sample(&|t: f64| t, &cfg).unwrap();
        let shown = curve.below_ceiling(4.5);
        assert_eq!(shown.len(), 5);
        assert!(shown.iter().all(|s| s.discharge <= 4.5));
        // The curve itself is untouched.
        assert_eq!(curve.len(), 11);
    }
}
