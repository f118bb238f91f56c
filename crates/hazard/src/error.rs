//! Error types for the sluice-hazard crate.

/// Error type for all fallible operations in the sluice-hazard crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HazardError {
    /// Returned when a simulation parameter is invalid. Raised before any
    /// sampling.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a distribution's parameters cannot be sampled.
    #[error("invalid {name} distribution: {reason}")]
    InvalidDistribution {
        /// Which distribution (`baseline` or `hazard`).
        name: &'static str,
        /// Description of the problem.
        reason: String,
    },
}
