//! Inverse solve entry points.

use tracing::debug;

use crate::config::{ExtrapolationPolicy, SolverConfig};
use crate::error::InverseError;
use crate::interpolate::MonotoneInterpolant;
use crate::model::{DepthModel, ForwardModel};
use crate::result::InversionResult;
use crate::sample::SampledCurve;

/// A sampled forward model ready to answer many targets.
///
/// Sampling and interpolant construction happen once in [`InverseSolver::build`];
/// each [`InverseSolver::solve`] is a binary search.
#[derive(Debug, Clone)]
pub struct InverseSolver {
    curve: SampledCurve,
    interpolant: MonotoneInterpolant,
    config: SolverConfig,
}

impl InverseSolver {
    /// Samples `model` over the grid of `config` and builds the `Q -> T`
    /// interpolant.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`InverseError::InvalidConfig`] | bad grid bounds or fewer than 2 samples |
    /// | [`InverseError::DegenerateModel`] | fewer than 2 distinct finite discharges |
    pub fn build<M: ForwardModel + ?Sized>(
        model: &M,
        config: &SolverConfig,
    ) -> Result<Self, InverseError> {
        let curve = SampledCurve::sample(model, config)?;
        let interpolant = MonotoneInterpolant::from_samples(curve.samples())?;
        debug!(
            n_samples = curve.len(),
            n_knots = interpolant.n_knots(),
            q_min = interpolant.q_min(),
            q_max = interpolant.q_max(),
            "forward model sampled"
        );
        Ok(Self {
            curve,
            interpolant,
            config: *config,
        })
    }

    /// The sampled curve, for plotting.
    pub fn curve(&self) -> &SampledCurve {
        &self.curve
    }

    /// The interpolant built from the curve.
    pub fn interpolant(&self) -> &MonotoneInterpolant {
        &self.interpolant
    }

    /// The configuration used to build this solver.
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Finds the top width carrying `q_target`.
    ///
    /// # Errors
    ///
    /// | Variant | Trigger |
    /// |---------|---------|
    /// | [`InverseError::InvalidConfig`] | `q_target` negative or non-finite |
    /// | [`InverseError::OutOfRange`] | target outside the sampled range under [`ExtrapolationPolicy::Reject`] |
    pub fn solve(&self, q_target: f64) -> Result<InversionResult, InverseError> {
        if !q_target.is_finite() || q_target < 0.0 {
            return Err(InverseError::InvalidConfig {
                reason: format!("target discharge must be finite and >= 0, got {q_target}"),
            });
        }

        let interp = &self.interpolant;
        if interp.contains(q_target) {
            return Ok(InversionResult::new(
                q_target,
                interp.interpolate(q_target),
                false,
            ));
        }

        match self.config.extrapolation() {
            ExtrapolationPolicy::Reject => Err(InverseError::OutOfRange {
                target: q_target,
                q_min: interp.q_min(),
                q_max: interp.q_max(),
            }),
            ExtrapolationPolicy::Linear => {
                let t = interp.extrapolate(q_target);
                debug!(q_target, t, "target outside sampled range, extrapolated");
                Ok(InversionResult::new(q_target, t, true))
            }
        }
    }
}

/// Finds the top width at which `forward_model` carries `q_target`.
///
/// Samples the model at `config.num_samples()` evenly spaced top widths over
/// `[config.t_min(), config.t_max()]` and inverts the samples through a
/// monotone piecewise-linear interpolant. For a monotone model and a target
/// inside the sampled discharge range, the answer is within one grid spacing
/// of the true root.
///
/// # Errors
///
/// See [`InverseSolver::build`] and [`InverseSolver::solve`].
pub fn solve_for_target<M: ForwardModel + ?Sized>(
    forward_model: &M,
    config: &SolverConfig,
    q_target: f64,
) -> Result<InversionResult, InverseError> {
    InverseSolver::build(forward_model, config)?.solve(q_target)
}

/// Like [`solve_for_target`], also deriving the maximum depth at the solved
/// top width from the model's [`DepthModel`] implementation.
///
/// # Errors
///
/// See [`InverseSolver::build`] and [`InverseSolver::solve`].
pub fn solve_with_depth<M: ForwardModel + DepthModel + ?Sized>(
    model: &M,
    config: &SolverConfig,
    q_target: f64,
) -> Result<InversionResult, InverseError> {
    let result = solve_for_target(model, config, q_target)?;
    Ok(result.with_depth(model.max_depth(result.solved_t())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    struct Vee;

    impl ForwardModel for Vee {
        fn discharge(&self, top_width: f64) -> f64 {
            top_width.powf(2.67)
        }
    }

    impl DepthModel for Vee {
        fn max_depth(&self, top_width: f64) -> f64 {
            0.02 * top_width
        }
    }

    #[test]
    fn identity_model_concrete_scenario() {
        let cfg = SolverConfig::new(0.0, 10.0, 500);
        let r = solve_for_target(&|t: f64| t, &cfg, 4.0).unwrap();
        assert_abs_diff_eq!(r.solved_t(), 4.0, epsilon = 0.02);
        assert!(!r.extrapolated());
        assert!(r.derived_depth().is_none());
    }

    #[test]
    fn solve_with_depth_derives_depth() {
        let cfg = SolverConfig::new(0.0, 10.0, 1000);
        let q = 3.0f64.powf(2.67);
        let r = solve_with_depth(&Vee, &cfg, q).unwrap();
        assert_abs_diff_eq!(r.solved_t(), 3.0, epsilon = cfg.spacing());
        assert_abs_diff_eq!(r.derived_depth().unwrap(), 0.06, epsilon = 0.02 * cfg.spacing());
    }

    #[test]
    fn out_of_range_rejected_by_default() {
        let cfg = SolverConfig::new(0.0, 10.0, 100);
        let err = solve_for_target(&|t: f64| t, &cfg, 11.0);
        assert!(matches!(err, Err(InverseError::OutOfRange { .. })));
    }

    #[test]
    fn out_of_range_extrapolated_when_requested() {
        let cfg =
            SolverConfig::new(1.0, 10.0, 100).with_extrapolation(ExtrapolationPolicy::Linear);
        let above = solve_for_target(&|t: f64| 2.0 * t, &cfg, 24.0).unwrap();
        assert!(above.extrapolated());
        assert_abs_diff_eq!(above.solved_t(), 12.0, epsilon = 1e-9);
        let below = solve_for_target(&|t: f64| 2.0 * t, &cfg, 1.0).unwrap();
        assert!(below.extrapolated());
        assert_abs_diff_eq!(below.solved_t(), 0.5, epsilon = 1e-9);
    }

    #[test]
    fn negative_target_is_invalid() {
        let cfg = SolverConfig::new(0.0, 10.0, 100);
        assert!(matches!(
            solve_for_target(&|t: f64| t, &cfg, -1.0),
            Err(InverseError::InvalidConfig { .. })
        ));
        assert!(matches!(
            solve_for_target(&|t: f64| t, &cfg, f64::NAN),
            Err(InverseError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn flat_model_is_degenerate() {
        let cfg = SolverConfig::new(0.0, 10.0, 100);
        assert!(matches!(
            solve_for_target(&|_t: f64| 0.5, &cfg, 0.5),
            Err(InverseError::DegenerateModel { distinct: 1 })
        ));
    }

    #[test]
    fn solver_reuse_across_targets() {
        let cfg = SolverConfig::new(0.0, 10.0, 501);
        let solver = InverseSolver::build(&|t: f64| t * t, &cfg).unwrap();
        for &t0 in &[1.0, 2.5, 7.0, 9.9] {
            let r = solver.solve(t0 * t0).unwrap();
            assert_abs_diff_eq!(r.solved_t(), t0, epsilon = cfg.spacing());
        }
        assert_eq!(solver.curve().len(), 501);
    }

    #[test]
    fn solver_is_send_and_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<InverseSolver>();
        assert_impl::<InversionResult>();
    }
}
