use approx::assert_abs_diff_eq;
use sluice_inverse::{
    DepthModel, ExtrapolationPolicy, ForwardModel, InverseError, InverseSolver, SolverConfig,
    solve_for_target, solve_with_depth,
};

/// A V-shaped gutter with a Manning-like power law and a kink at `w`.
struct KinkedGutter {
    w: f64,
}

impl ForwardModel for KinkedGutter {
    fn discharge(&self, t: f64) -> f64 {
        if t <= self.w {
            0.5 * t.powf(2.67)
        } else {
            0.5 * self.w.powf(2.67) + 0.1 * (t - self.w).powf(1.67) + 0.3 * (t - self.w)
        }
    }
}

impl DepthModel for KinkedGutter {
    fn max_depth(&self, t: f64) -> f64 {
        if t <= self.w {
            0.065 * t
        } else {
            0.065 * self.w + 0.02 * (t - self.w)
        }
    }
}

// ---------------------------------------------------------------------------
// 1. interior_targets_within_one_spacing
// ---------------------------------------------------------------------------
#[test]
fn interior_targets_within_one_spacing() {
    let models: Vec<Box<dyn Fn(f64) -> f64>> = vec![
        Box::new(|t| t),
        Box::new(|t| 3.0 * t + 1.0),
        Box::new(|t| t * t),
        Box::new(|t| t.powf(2.67)),
        Box::new(|t| t.sqrt()),
        Box::new(|t| (t / 2.0).exp()),
    ];
    let cfg = SolverConfig::new(0.01, 10.0, 500);
    let spacing = cfg.spacing();

    for (i, model) in models.iter().enumerate() {
        let solver = InverseSolver::build(model.as_ref(), &cfg).expect("build");
        for k in 1..50 {
            let t0 = 0.01 + k as f64 * (9.99 / 50.0);
            let r = solver.solve(model(t0)).expect("solve");
            assert!(
                (r.solved_t() - t0).abs() <= spacing,
                "model {i}: t0={t0}, solved={} (spacing {spacing})",
                r.solved_t()
            );
        }
    }
}

// ---------------------------------------------------------------------------
// 2. discharge_round_trip
// ---------------------------------------------------------------------------
#[test]
fn discharge_round_trip() {
    let model = KinkedGutter { w: 0.3 };
    let cfg = SolverConfig::new(0.01, 10.0, 500);
    let (q_min, q_max) = InverseSolver::build(&model, &cfg)
        .unwrap()
        .curve()
        .discharge_range()
        .unwrap();

    for k in 0..=20 {
        let q = q_min + (q_max - q_min) * k as f64 / 20.0;
        let r = solve_for_target(&model, &cfg, q).unwrap();
        let back = model.discharge(r.solved_t());
        // Linear interpolation of a convex curve overestimates T by at most one
        // segment's worth of discharge.
        assert_abs_diff_eq!(back, q, epsilon = 0.02 * q_max);
    }
}

// ---------------------------------------------------------------------------
// 3. depth_follows_kink
// ---------------------------------------------------------------------------
#[test]
fn depth_follows_kink() {
    let model = KinkedGutter { w: 0.3 };
    let cfg = SolverConfig::new(0.01, 10.0, 2000);

    let narrow = solve_with_depth(&model, &cfg, model.discharge(0.2)).unwrap();
    assert_abs_diff_eq!(narrow.derived_depth().unwrap(), 0.065 * 0.2, epsilon = 1e-3);

    let wide = solve_with_depth(&model, &cfg, model.discharge(4.0)).unwrap();
    assert_abs_diff_eq!(
        wide.derived_depth().unwrap(),
        0.065 * 0.3 + 0.02 * 3.7,
        epsilon = 1e-3
    );
}

// ---------------------------------------------------------------------------
// 4. extrapolation_is_explicit
// ---------------------------------------------------------------------------
#[test]
fn extrapolation_is_explicit() {
    let model = KinkedGutter { w: 0.3 };
    let reject = SolverConfig::new(0.01, 2.0, 200);
    let beyond = model.discharge(3.0);

    match solve_for_target(&model, &reject, beyond) {
        Err(InverseError::OutOfRange { target, q_max, .. }) => {
            assert_eq!(target, beyond);
            assert!(q_max < beyond);
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }

    let linear = reject.with_extrapolation(ExtrapolationPolicy::Linear);
    let r = solve_for_target(&model, &linear, beyond).unwrap();
    assert!(r.extrapolated());
    assert!(r.solved_t() > 2.0);
}

// ---------------------------------------------------------------------------
// 5. display_ceiling_does_not_change_solvability
// ---------------------------------------------------------------------------
#[test]
fn display_ceiling_does_not_change_solvability() {
    let model = |t: f64| t * t;
    let cfg = SolverConfig::new(0.0, 10.0, 500);
    let solver = InverseSolver::build(&model, &cfg).unwrap();

    let shown = solver.curve().below_ceiling(10.0);
    assert!(shown.iter().all(|s| s.discharge <= 10.0));

    // A target above the display ceiling is still solved.
    let r = solver.solve(50.0).unwrap();
    assert_abs_diff_eq!(r.solved_t(), 50f64.sqrt(), epsilon = cfg.spacing());
}
