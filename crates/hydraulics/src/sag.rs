//! HEC-22 grate inlet in a sag.
//!
//! Ponded water enters the grate over its open perimeter as a weir at low
//! depth and through its clear openings as an orifice at greater depth. The
//! smaller of the two capacities controls.

use sluice_inverse::{InversionResult, SolverConfig, solve_for_target};
use tracing::debug;

use crate::error::{HydraulicsError, require_fraction, require_non_negative, require_positive};
use crate::grate::GrateType;
use crate::units::UnitSystem;

/// Weir coefficient.
pub const WEIR_COEFFICIENT: f64 = 0.37;

/// Orifice coefficient.
pub const ORIFICE_COEFFICIENT: f64 = 0.67;

/// Controlling flow regime of a sag inlet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FlowRegime {
    /// Weir flow over the grate perimeter.
    Weir,
    /// Orifice flow through the clear opening.
    Orifice,
}

impl FlowRegime {
    /// Report label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Weir => "Weir Flow",
            Self::Orifice => "Orifice Flow",
        }
    }
}

/// A grate inlet at a low point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrateInSag {
    units: UnitSystem,
    cross_slope: f64,
    depression_slope: f64,
    design_flow: f64,
    curb_depth: f64,
    grate: GrateType,
    grate_width: f64,
    grate_length: f64,
    clogging: f64,
}

impl GrateInSag {
    /// Creates a sag inlet of the given grate type with defaults.
    ///
    /// Defaults: US customary, `Sx = 0.025`, `Sw = 0.05`, `Q = 5 ft³/s`,
    /// `d = 0.33 ft`, `W = 2 ft`, `L = 3 ft`, no clogging.
    pub fn new(grate: GrateType) -> Self {
        Self {
            units: UnitSystem::UsCustomary,
            cross_slope: 0.025,
            depression_slope: 0.05,
            design_flow: 5.0,
            curb_depth: 0.33,
            grate,
            grate_width: 2.0,
            grate_length: 3.0,
            clogging: 0.0,
        }
    }

    /// Sets the unit system.
    pub fn with_units(mut self, units: UnitSystem) -> Self {
        self.units = units;
        self
    }

    /// Sets the cross slope `Sx`.
    pub fn with_cross_slope(mut self, sx: f64) -> Self {
        self.cross_slope = sx;
        self
    }

    /// Sets the gutter depression slope `Sw`.
    pub fn with_depression_slope(mut self, sw: f64) -> Self {
        self.depression_slope = sw;
        self
    }

    /// Sets the design flow the inlet must accept.
    pub fn with_design_flow(mut self, q: f64) -> Self {
        self.design_flow = q;
        self
    }

    /// Sets the ponded depth at the curb.
    pub fn with_curb_depth(mut self, d: f64) -> Self {
        self.curb_depth = d;
        self
    }

    /// Sets the grate dimensions.
    pub fn with_grate_size(mut self, width: f64, length: f64) -> Self {
        self.grate_width = width;
        self.grate_length = length;
        self
    }

    /// Sets the clogging fraction in `[0, 1)`.
    pub fn with_clogging(mut self, fraction: f64) -> Self {
        self.clogging = fraction;
        self
    }

    /// Unit system.
    pub fn units(&self) -> UnitSystem {
        self.units
    }

    /// Grate type.
    pub fn grate(&self) -> GrateType {
        self.grate
    }

    /// Design flow.
    pub fn design_flow(&self) -> f64 {
        self.design_flow
    }

    /// Ponded depth at the curb.
    pub fn curb_depth(&self) -> f64 {
        self.curb_depth
    }

    /// Validates this configuration.
    pub fn validate(&self) -> Result<(), HydraulicsError> {
        require_positive("cross_slope", self.cross_slope)?;
        require_non_negative("depression_slope", self.depression_slope)?;
        require_positive("design_flow", self.design_flow)?;
        require_non_negative("curb_depth", self.curb_depth)?;
        require_positive("grate_width", self.grate_width)?;
        require_positive("grate_length", self.grate_length)?;
        require_fraction("clogging", self.clogging)?;
        Ok(())
    }

    fn clear_area(&self) -> f64 {
        self.grate_width * self.grate_length * self.grate.opening_ratio()
    }

    fn effective_perimeter(&self) -> f64 {
        (1.0 - self.clogging) * (self.grate_length + 2.0 * self.grate_width)
    }

    fn effective_area(&self) -> f64 {
        (1.0 - self.clogging) * self.clear_area()
    }

    /// Average depth over the grate for a curb depth `d_curb`.
    fn average_depth(&self, d_curb: f64) -> f64 {
        d_curb - (self.grate_width / 2.0) * self.depression_slope
    }

    /// Weir and orifice capacities at curb depth `d_curb`. Both are zero while
    /// the water is below the grate centre.
    fn capacities(&self, d_curb: f64) -> (f64, f64) {
        let d = self.average_depth(d_curb).max(0.0);
        let two_g = 2.0 * self.units.gravity();
        let weir = WEIR_COEFFICIENT * two_g.sqrt() * self.effective_perimeter() * d.powf(1.5);
        let orifice = ORIFICE_COEFFICIENT * self.effective_area() * (two_g * d).sqrt();
        (weir, orifice)
    }

    /// Controlling capacity at curb depth `d_curb`.
    pub fn capacity_at(&self, d_curb: f64) -> f64 {
        let (weir, orifice) = self.capacities(d_curb);
        weir.min(orifice)
    }

    /// Computes the capacity of this inlet at its curb depth.
    ///
    /// # Errors
    ///
    /// Returns [`HydraulicsError::InvalidParameter`] if validation fails.
    pub fn analyze(&self) -> Result<SagResult, HydraulicsError> {
        self.validate()?;
        let (weir, orifice) = self.capacities(self.curb_depth);
        let (regime, capacity) = if weir < orifice {
            (FlowRegime::Weir, weir)
        } else {
            (FlowRegime::Orifice, orifice)
        };
        Ok(SagResult {
            spread: self.curb_depth / self.cross_slope,
            clear_area: self.clear_area(),
            effective_perimeter: self.effective_perimeter(),
            effective_area: self.effective_area(),
            average_depth: self.average_depth(self.curb_depth),
            weir_capacity: weir,
            orifice_capacity: orifice,
            regime,
            capacity,
            design_flow: self.design_flow,
        })
    }

    /// Solves the curb depth at which capacity equals the design flow.
    ///
    /// The returned [`InversionResult::solved_t`] is the curb depth, searched
    /// over `[config.t_min(), config.t_max()]`; see [`depth_search_config`]
    /// for a default range.
    ///
    /// # Errors
    ///
    /// Returns [`HydraulicsError::InvalidParameter`] if validation fails, or
    /// the solver's error if the design flow is beyond the searched range.
    pub fn required_curb_depth(
        &self,
        config: &SolverConfig,
    ) -> Result<InversionResult, HydraulicsError> {
        self.validate()?;
        let capacity = |d: f64| self.capacity_at(d);
        let result = solve_for_target(&capacity, config, self.design_flow)?;
        debug!(
            design_flow = self.design_flow,
            curb_depth = result.solved_t(),
            "required curb depth solved"
        );
        Ok(result)
    }
}

impl Default for GrateInSag {
    fn default() -> Self {
        Self::new(GrateType::default())
    }
}

/// Default curb-depth search range: 0 to 3 ft, or 0 to 1 m.
pub fn depth_search_config(units: UnitSystem) -> SolverConfig {
    let upper = match units {
        UnitSystem::UsCustomary => 3.0,
        UnitSystem::Si => 1.0,
    };
    SolverConfig::new(0.0, upper, 1000)
}

/// Capacity of a grate inlet in sag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SagResult {
    spread: f64,
    clear_area: f64,
    effective_perimeter: f64,
    effective_area: f64,
    average_depth: f64,
    weir_capacity: f64,
    orifice_capacity: f64,
    regime: FlowRegime,
    capacity: f64,
    design_flow: f64,
}

impl SagResult {
    /// Ponded spread `d / Sx`.
    pub fn spread(&self) -> f64 {
        self.spread
    }

    /// Clear opening area of the clean grate.
    pub fn clear_area(&self) -> f64 {
        self.clear_area
    }

    /// Perimeter available to weir flow after clogging.
    pub fn effective_perimeter(&self) -> f64 {
        self.effective_perimeter
    }

    /// Opening area available to orifice flow after clogging.
    pub fn effective_area(&self) -> f64 {
        self.effective_area
    }

    /// Average depth over the grate. Negative when the water is below the
    /// grate centre.
    pub fn average_depth(&self) -> f64 {
        self.average_depth
    }

    /// Weir capacity.
    pub fn weir_capacity(&self) -> f64 {
        self.weir_capacity
    }

    /// Orifice capacity.
    pub fn orifice_capacity(&self) -> f64 {
        self.orifice_capacity
    }

    /// Controlling regime.
    pub fn regime(&self) -> FlowRegime {
        self.regime
    }

    /// Controlling capacity.
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    /// Capacity over design flow.
    pub fn adequacy_ratio(&self) -> f64 {
        self.capacity / self.design_flow
    }

    /// Whether capacity meets the design flow.
    pub fn is_adequate(&self) -> bool {
        self.capacity >= self.design_flow
    }
}
