//! Error types for the sluice-inverse crate.

/// Error type for all fallible operations in the sluice-inverse crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum InverseError {
    /// Returned when a solver parameter or target is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the sampled model has fewer than two distinct finite
    /// discharge values, so no `Q -> T` mapping exists.
    #[error("degenerate forward model: {distinct} distinct discharge value(s), need at least 2")]
    DegenerateModel {
        /// Number of distinct finite discharges found.
        distinct: usize,
    },

    /// Returned when the target lies outside the sampled discharge envelope
    /// and extrapolation was not requested.
    #[error("target discharge {target} outside sampled range [{q_min}, {q_max}]")]
    OutOfRange {
        /// The requested discharge.
        target: f64,
        /// Smallest sampled discharge.
        q_min: f64,
        /// Largest sampled discharge.
        q_max: f64,
    },
}
