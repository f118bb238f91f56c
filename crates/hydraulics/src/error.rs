//! Error types for the sluice-hydraulics crate.

use sluice_inverse::InverseError;

/// Error type for all fallible operations in the sluice-hydraulics crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum HydraulicsError {
    /// Returned when a geometric or hydraulic parameter is out of range.
    #[error("invalid parameter {name}: {reason}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when a grate name is not in the catalog.
    #[error("unknown grate type: {0}")]
    UnknownGrate(String),

    /// Error propagated from the inverse solver.
    #[error(transparent)]
    Inverse(#[from] InverseError),
}

/// Checks that `value` is finite and strictly positive.
pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<(), HydraulicsError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(HydraulicsError::InvalidParameter {
            name,
            reason: format!("must be finite and > 0, got {value}"),
        });
    }
    Ok(())
}

/// Checks that `value` is finite and non-negative.
pub(crate) fn require_non_negative(
    name: &'static str,
    value: f64,
) -> Result<(), HydraulicsError> {
    if !value.is_finite() || value < 0.0 {
        return Err(HydraulicsError::InvalidParameter {
            name,
            reason: format!("must be finite and >= 0, got {value}"),
        });
    }
    Ok(())
}

/// Checks that a clogging fraction lies in `[0, 1)`.
pub(crate) fn require_fraction(name: &'static str, value: f64) -> Result<(), HydraulicsError> {
    if !value.is_finite() || !(0.0..1.0).contains(&value) {
        return Err(HydraulicsError::InvalidParameter {
            name,
            reason: format!("must be in [0, 1), got {value}"),
        });
    }
    Ok(())
}
