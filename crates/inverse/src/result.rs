//! Result type for the inverse solve.

/// Top width (and optionally depth) found for a target discharge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InversionResult {
    target_q: f64,
    solved_t: f64,
    derived_depth: Option<f64>,
    extrapolated: bool,
}

impl InversionResult {
    /// Creates a new result.
    pub fn new(target_q: f64, solved_t: f64, extrapolated: bool) -> Self {
        Self {
            target_q,
            solved_t,
            derived_depth: None,
            extrapolated,
        }
    }

    /// Attaches the depth derived from the solved top width.
    pub fn with_depth(mut self, depth: f64) -> Self {
        self.derived_depth = Some(depth);
        self
    }

    /// The requested discharge.
    pub fn target_q(&self) -> f64 {
        self.target_q
    }

    /// Top width carrying the target discharge.
    pub fn solved_t(&self) -> f64 {
        self.solved_t
    }

    /// Maximum flow depth at the solved top width, if a depth model was given.
    pub fn derived_depth(&self) -> Option<f64> {
        self.derived_depth
    }

    /// Whether the target lay outside the sampled range and the top width was
    /// extrapolated.
    pub fn extrapolated(&self) -> bool {
        self.extrapolated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let r = InversionResult::new(0.025, 1.2, false).with_depth(0.04);
        assert_eq!(r.target_q(), 0.025);
        assert_eq!(r.solved_t(), 1.2);
        assert_eq!(r.derived_depth(), Some(0.04));
        assert!(!r.extrapolated());
    }

    #[test]
    fn no_depth_by_default() {
        let r = InversionResult::new(1.0, 1.0, true);
        assert!(r.derived_depth().is_none());
        assert!(r.extrapolated());
    }
}
