//! Named collection of time-of-concentration formulas.

use crate::error::TcError;
use crate::formulas::{self, CatchmentSample};

/// A time-of-concentration formula, in minutes.
pub type TcFormula = fn(&CatchmentSample) -> f64;

/// Ordered list of named formulas.
///
/// # Example
///
/// ```
/// use sluice_tc::TcRegistry;
///
/// let registry = TcRegistry::standard().select(&["Kirpich", "Izzard"]).unwrap();
/// assert_eq!(registry.names(), vec!["Kirpich", "Izzard"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TcRegistry {
    methods: Vec<(String, TcFormula)>,
}

impl TcRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// The seven-method SI catalog.
    pub fn standard() -> Self {
        let methods: [(&str, TcFormula); 7] = [
            ("Kirpich", formulas::kirpich),
            ("NRCS (Sheet Flow)", formulas::nrcs_sheet_flow),
            ("Manning-KWA", formulas::manning_kinematic_wave),
            ("Bransby-Williams", formulas::bransby_williams),
            ("Airport", formulas::airport),
            ("Kerby-Hathaway", formulas::kerby_hathaway),
            ("Izzard", formulas::izzard),
        ];
        Self {
            methods: methods
                .into_iter()
                .map(|(name, f)| (name.to_string(), f))
                .collect(),
        }
    }

    /// [`standard`](Self::standard) plus the NRCS lag, Manning overland,
    /// velocity and rational forms.
    pub fn extended() -> Self {
        let mut registry = Self::standard();
        let extra: [(&str, TcFormula); 4] = [
            ("NRCS (Lag)", formulas::nrcs_lag),
            ("Manning (Overland)", formulas::manning_overland),
            ("Velocity", formulas::velocity_method),
            ("Rational", formulas::rational),
        ];
        for (name, f) in extra {
            registry.methods.push((name.to_string(), f));
        }
        registry
    }

    /// Appends a formula.
    ///
    /// # Errors
    ///
    /// Returns [`TcError::DuplicateMethod`] if `name` is already registered.
    pub fn register(&mut self, name: &str, formula: TcFormula) -> Result<(), TcError> {
        if self.get(name).is_some() {
            return Err(TcError::DuplicateMethod(name.to_string()));
        }
        self.methods.push((name.to_string(), formula));
        Ok(())
    }

    /// A registry of the named methods, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`TcError::UnknownMethod`] for a name that is not registered.
    pub fn select<S: AsRef<str>>(&self, names: &[S]) -> Result<Self, TcError> {
        let mut methods = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let f = self
                .get(name)
                .ok_or_else(|| TcError::UnknownMethod(name.to_string()))?;
            methods.push((name.to_string(), f));
        }
        Ok(Self { methods })
    }

    /// Looks up a formula by name.
    pub fn get(&self, name: &str) -> Option<TcFormula> {
        self.methods
            .iter()
            .find(|(n, _)| n == name)
            .map(|&(_, f)| f)
    }

    /// Method names in order.
    pub fn names(&self) -> Vec<&str> {
        self.methods.iter().map(|(n, _)| n.as_str()).collect()
    }

    /// Number of methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Whether no methods are registered.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Evaluates every method on one sample.
    pub fn evaluate(&self, sample: &CatchmentSample) -> Vec<f64> {
        self.methods.iter().map(|(_, f)| f(sample)).collect()
    }
}
