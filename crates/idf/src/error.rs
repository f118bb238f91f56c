//! Error types for the sluice-idf crate.

/// Error type for all fallible operations in the sluice-idf crate.
#[derive(Debug, Clone, thiserror::Error)]
pub enum IdfError {
    /// Returned when a grid is built from no records.
    #[error("precipitation grid is empty")]
    EmptyGrid,

    /// Returned when a record has a non-finite coordinate or value.
    #[error("invalid record {index}: {reason}")]
    InvalidRecord {
        /// Zero-based record index.
        index: usize,
        /// Description of the problem.
        reason: String,
    },

    /// Returned when the selected cell has no data for a return period.
    #[error("no data for return period {return_period} at ({lat}, {lon})")]
    NoData {
        /// Requested return period (years).
        return_period: f64,
        /// Cell latitude.
        lat: f64,
        /// Cell longitude.
        lon: f64,
    },

    /// Returned when an intensity is requested for a non-positive duration.
    #[error("duration must be > 0 minutes, got {duration}")]
    NonPositiveDuration {
        /// The offending duration (minutes).
        duration: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_no_data() {
        let e = IdfError::NoData {
            return_period: 100.0,
            lat: 45.5,
            lon: -73.5,
        };
        assert_eq!(
            e.to_string(),
            "no data for return period 100 at (45.5, -73.5)"
        );
    }

    #[test]
    fn error_non_positive_duration() {
        let e = IdfError::NonPositiveDuration { duration: 0.0 };
        assert_eq!(e.to_string(), "duration must be > 0 minutes, got 0");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_impl<T: Send + Sync>() {}
        assert_impl::<IdfError>();
    }
}
