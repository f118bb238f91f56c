//! Forward model seams consumed by the solver.

/// A pure discharge model `Q(T)` for fixed geometry, slope and roughness.
///
/// Implementations should be non-decreasing in `top_width` over the sampled
/// range; the solver inverts whatever it samples but only a monotone model
/// has a unique answer.
///
/// Any `Fn(f64) -> f64` is a forward model.
pub trait ForwardModel {
    /// Discharge carried at the given top width.
    fn discharge(&self, top_width: f64) -> f64;
}

impl<F> ForwardModel for F
where
    F: Fn(f64) -> f64 + ?Sized,
{
    fn discharge(&self, top_width: f64) -> f64 {
        self(top_width)
    }
}

/// Maximum flow depth as a function of top width for fixed geometry.
pub trait DepthModel {
    /// Deepest point of the flow section at the given top width.
    fn max_depth(&self, top_width: f64) -> f64;
}
