//! Error types for the sluice-tc crate.

/// Error type for all fallible operations in the sluice-tc crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum TcError {
    /// Returned when a sampling range is empty, inverted or non-physical.
    #[error("invalid {name} range [{low}, {high}]: {reason}")]
    InvalidRange {
        /// Parameter name.
        name: &'static str,
        /// Lower bound.
        low: f64,
        /// Upper bound.
        high: f64,
        /// Description of the problem.
        reason: &'static str,
    },

    /// Returned when a simulation setting is invalid.
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a requested method is not registered.
    #[error("unknown time-of-concentration method: {0}")]
    UnknownMethod(String),

    /// Returned when a method name is registered twice.
    #[error("method already registered: {0}")]
    DuplicateMethod(String),

    /// Returned when a simulation is asked to run with no methods.
    #[error("no methods registered")]
    EmptyRegistry,
}
