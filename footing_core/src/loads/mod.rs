//! Column loads, foundation self-load and ACI 318M load combinations
//!
//! This module is the load aggregator for a pad foundation: it holds the
//! column loads split by source, adds the weight of the pad and the soil
//! above it, and reduces everything to service and ultimate resultants.
//!
//! # Overview
//!
//! - [`LoadType`] - Load sources (D, L, W, E)
//! - [`LoadComponent`] - The five column load components (axial, two shears, two moments)
//! - [`LoadEffects`] - One value per component
//! - [`LoadCaseSet`] - Column loads for every source, replaced one component at a time
//! - [`FoundationSelfLoad`] - Soil depth and unit weights for self-weight and surcharge
//! - [`FoundationLoading`] - Service and governing ultimate resultants
//! - [`LoadCombination`] - Factors for one strength combination
//!
//! # Sign Convention
//!
//! Axial force is positive in compression. Horizontal forces and moments may
//! take either sign; moments in the x-direction cause eccentricity along the
//! foundation length.
//!
//! # Example
//!
//! ```
//! use footing_core::aci_factors::LoadFactors;
//! use footing_core::loads::{FoundationLoading, LoadCaseSet, LoadComponent};
//! use footing_core::units::KiloNewtons;
//!
//! let cases = LoadCaseSet::new()
//!     .with_axial(800.0, 300.0, 0.0)
//!     .unwrap();
//!
//! let loading = FoundationLoading::new(cases, KiloNewtons(60.0), KiloNewtons(78.75), LoadFactors::default());
//! assert!((loading.service(LoadComponent::Axial) - 1238.75).abs() < 1e-9);
//! assert!((loading.ultimate(LoadComponent::Axial).value - 1606.5).abs() < 1e-9);
//! ```

pub mod combinations;
pub mod load_types;

pub use combinations::{
    aci318_strength_combinations,
    evaluate_combinations,
    find_governing_combination,
    find_governing_magnitude,
    find_governing_min_max,
    find_minimum_combination,
    CombinationResult,
    GoverningResults,
    LoadCombination,
};
pub use load_types::LoadType;

use std::collections::BTreeMap;
use serde::{Deserialize, Serialize};

use crate::aci_factors::LoadFactors;
use crate::errors::{ensure_finite, ensure_non_negative, CalcError, CalcResult};
use crate::geometry::FoundationGeometry;
use crate::units::KiloNewtons;

// ============================================================================
// Load cases
// ============================================================================

/// A collection of load values by type for one load component
///
/// LoadCase stores unfactored (service) values. These are combined using
/// [`LoadCombination`] factors to get design values.
///
/// # Example
/// ```
/// use footing_core::loads::{LoadCase, LoadType};
///
/// let case = LoadCase::new("Axial")
///     .with_load(LoadType::Dead, 800.0)
///     .with_load(LoadType::Live, 300.0);
///
/// assert_eq!(case.get(LoadType::Dead), 800.0);
/// assert_eq!(case.get(LoadType::Wind), 0.0);  // Not specified, defaults to 0
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadCase {
    /// Label for this load case
    pub label: String,

    /// Load values keyed by type (kN or kN·m depending on component)
    pub loads: BTreeMap<LoadType, f64>,
}

impl LoadCase {
    /// Create a new empty load case with a label
    pub fn new(label: impl Into<String>) -> Self {
        LoadCase {
            label: label.into(),
            loads: BTreeMap::new(),
        }
    }

    /// Add or update a load value (builder pattern)
    pub fn with_load(mut self, load_type: LoadType, value: f64) -> Self {
        self.loads.insert(load_type, value);
        self
    }

    /// Set a load value (mutable)
    pub fn set_load(&mut self, load_type: LoadType, value: f64) {
        self.loads.insert(load_type, value);
    }

    /// Get the load value for a type, defaulting to 0.0 if not set
    pub fn get(&self, load_type: LoadType) -> f64 {
        self.loads.get(&load_type).copied().unwrap_or(0.0)
    }

    /// Check if a load type is defined (even if zero)
    pub fn has(&self, load_type: LoadType) -> bool {
        self.loads.contains_key(&load_type)
    }

    /// Unfactored sum over all load types, in [`LoadType::ALL`] order
    pub fn total(&self) -> f64 {
        LoadType::ALL.iter().map(|lt| self.get(*lt)).sum()
    }

    /// Validate the load case: every value must be finite.
    pub fn validate(&self) -> CalcResult<()> {
        for (load_type, value) in &self.loads {
            ensure_finite(&format!("{}_{}", self.label.to_lowercase(), load_type.code()), *value)?;
        }
        Ok(())
    }
}

impl Default for LoadCase {
    fn default() -> Self {
        LoadCase::new("Unnamed")
    }
}

// ============================================================================
// Load components
// ============================================================================

/// The five column load components carried to the foundation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadComponent {
    /// Vertical force, compression positive (kN)
    Axial,
    /// Horizontal force along x (kN)
    HorizontalX,
    /// Horizontal force along y (kN)
    HorizontalY,
    /// Moment in the x-direction (kN·m)
    MomentX,
    /// Moment in the y-direction (kN·m)
    MomentY,
}

impl LoadComponent {
    pub const ALL: [LoadComponent; 5] = [
        LoadComponent::Axial,
        LoadComponent::HorizontalX,
        LoadComponent::HorizontalY,
        LoadComponent::MomentX,
        LoadComponent::MomentY,
    ];

    pub fn description(&self) -> &'static str {
        match self {
            LoadComponent::Axial => "Axial",
            LoadComponent::HorizontalX => "Horizontal X",
            LoadComponent::HorizontalY => "Horizontal Y",
            LoadComponent::MomentX => "Moment X",
            LoadComponent::MomentY => "Moment Y",
        }
    }

    pub fn units(&self) -> &'static str {
        match self {
            LoadComponent::MomentX | LoadComponent::MomentY => "kN·m",
            _ => "kN",
        }
    }

    /// Snake-case key used in validation messages
    fn field(&self) -> &'static str {
        match self {
            LoadComponent::Axial => "axial",
            LoadComponent::HorizontalX => "horizontal_xdir",
            LoadComponent::HorizontalY => "horizontal_ydir",
            LoadComponent::MomentX => "moment_xdir",
            LoadComponent::MomentY => "moment_ydir",
        }
    }
}

/// One value per load component.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadEffects {
    /// Axial force (kN, compression positive)
    pub axial_kn: f64,
    /// Horizontal force along x (kN)
    pub horizontal_x_kn: f64,
    /// Horizontal force along y (kN)
    pub horizontal_y_kn: f64,
    /// Moment in the x-direction (kN·m)
    pub moment_x_knm: f64,
    /// Moment in the y-direction (kN·m)
    pub moment_y_knm: f64,
}

impl LoadEffects {
    pub fn get(&self, component: LoadComponent) -> f64 {
        match component {
            LoadComponent::Axial => self.axial_kn,
            LoadComponent::HorizontalX => self.horizontal_x_kn,
            LoadComponent::HorizontalY => self.horizontal_y_kn,
            LoadComponent::MomentX => self.moment_x_knm,
            LoadComponent::MomentY => self.moment_y_knm,
        }
    }

    pub fn set(&mut self, component: LoadComponent, value: f64) {
        match component {
            LoadComponent::Axial => self.axial_kn = value,
            LoadComponent::HorizontalX => self.horizontal_x_kn = value,
            LoadComponent::HorizontalY => self.horizontal_y_kn = value,
            LoadComponent::MomentX => self.moment_x_knm = value,
            LoadComponent::MomentY => self.moment_y_knm = value,
        }
    }

    /// Build from a per-component function
    pub fn from_fn<F: FnMut(LoadComponent) -> f64>(mut f: F) -> Self {
        let mut effects = LoadEffects::default();
        for component in LoadComponent::ALL {
            effects.set(component, f(component));
        }
        effects
    }

    /// Every value must be finite.
    pub fn validate(&self, prefix: &str) -> CalcResult<()> {
        for component in LoadComponent::ALL {
            ensure_finite(&format!("{}_{}", prefix, component.field()), self.get(component))?;
        }
        Ok(())
    }
}

/// Column loads for every load source.
///
/// A `LoadCaseSet` is a value: each `with_*` call validates its arguments and
/// returns a new set in which that component is replaced for the dead, live
/// and wind cases together. Components never set stay at zero.
///
/// # Example
/// ```
/// use footing_core::loads::{LoadCaseSet, LoadComponent, LoadType};
///
/// let cases = LoadCaseSet::new()
///     .with_axial(800.0, 300.0, 0.0).unwrap()
///     .with_moment_x(20.0, 10.0, 5.0).unwrap();
///
/// assert_eq!(cases.get(LoadType::Live).axial_kn, 300.0);
/// assert_eq!(cases.component_total(LoadComponent::MomentX), 35.0);
///
/// // Replacing a component replaces, not accumulates
/// let cases = cases.with_axial(500.0, 100.0, 0.0).unwrap();
/// assert_eq!(cases.get(LoadType::Dead).axial_kn, 500.0);
///
/// assert!(LoadCaseSet::new().with_axial(f64::NAN, 0.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoadCaseSet {
    pub dead: LoadEffects,
    pub live: LoadEffects,
    pub wind: LoadEffects,
    /// Seismic column loads; zero unless set explicitly
    pub seismic: LoadEffects,
}

impl LoadCaseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Column loads for one source
    pub fn get(&self, load_type: LoadType) -> &LoadEffects {
        match load_type {
            LoadType::Dead => &self.dead,
            LoadType::Live => &self.live,
            LoadType::Wind => &self.wind,
            LoadType::Seismic => &self.seismic,
        }
    }

    fn get_mut(&mut self, load_type: LoadType) -> &mut LoadEffects {
        match load_type {
            LoadType::Dead => &mut self.dead,
            LoadType::Live => &mut self.live,
            LoadType::Wind => &mut self.wind,
            LoadType::Seismic => &mut self.seismic,
        }
    }

    /// Replace one component for the dead, live and wind cases.
    pub fn with_component(mut self, component: LoadComponent, dead: f64, live: f64, wind: f64) -> CalcResult<Self> {
        for (load_type, value) in [(LoadType::Dead, dead), (LoadType::Live, live), (LoadType::Wind, wind)] {
            let field = format!("{:?}_{}", load_type, component.field()).to_lowercase();
            ensure_finite(&field, value)?;
            self.get_mut(load_type).set(component, value);
        }
        Ok(self)
    }

    /// Column axial loads (kN, compression positive)
    pub fn with_axial(self, dead: f64, live: f64, wind: f64) -> CalcResult<Self> {
        self.with_component(LoadComponent::Axial, dead, live, wind)
    }

    /// Column horizontal loads along x (kN)
    pub fn with_horizontal_x(self, dead: f64, live: f64, wind: f64) -> CalcResult<Self> {
        self.with_component(LoadComponent::HorizontalX, dead, live, wind)
    }

    /// Column horizontal loads along y (kN)
    pub fn with_horizontal_y(self, dead: f64, live: f64, wind: f64) -> CalcResult<Self> {
        self.with_component(LoadComponent::HorizontalY, dead, live, wind)
    }

    /// Column moments in the x-direction (kN·m)
    pub fn with_moment_x(self, dead: f64, live: f64, wind: f64) -> CalcResult<Self> {
        self.with_component(LoadComponent::MomentX, dead, live, wind)
    }

    /// Column moments in the y-direction (kN·m)
    pub fn with_moment_y(self, dead: f64, live: f64, wind: f64) -> CalcResult<Self> {
        self.with_component(LoadComponent::MomentY, dead, live, wind)
    }

    /// Replace the whole seismic case.
    pub fn with_seismic(mut self, seismic: LoadEffects) -> CalcResult<Self> {
        seismic.validate("seismic")?;
        self.seismic = seismic;
        Ok(self)
    }

    /// One component across all sources, as a [`LoadCase`] for combination
    pub fn component_case(&self, component: LoadComponent) -> LoadCase {
        let mut case = LoadCase::new(component.description());
        for load_type in LoadType::ALL {
            case.set_load(load_type, self.get(load_type).get(component));
        }
        case
    }

    /// Unfactored sum of one component over all sources
    pub fn component_total(&self, component: LoadComponent) -> f64 {
        self.component_case(component).total()
    }
}

// ============================================================================
// Foundation self-load
// ============================================================================

/// Parameters for the weight of the pad and the soil above it.
///
/// Both contributions are dead load and act on the axial component only.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoundationSelfLoad {
    /// Depth of soil above the top of the pad (mm)
    pub soil_depth_mm: f64,
    /// Unit weight of the backfill (kN/m³)
    pub soil_unit_weight_kn_m3: f64,
    /// Unit weight of reinforced concrete (kN/m³)
    pub concrete_unit_weight_kn_m3: f64,
}

impl Default for FoundationSelfLoad {
    fn default() -> Self {
        FoundationSelfLoad {
            soil_depth_mm: 700.0,
            soil_unit_weight_kn_m3: 18.0,
            concrete_unit_weight_kn_m3: 24.0,
        }
    }
}

impl FoundationSelfLoad {
    pub fn new(soil_depth_mm: f64, soil_unit_weight_kn_m3: f64, concrete_unit_weight_kn_m3: f64) -> CalcResult<Self> {
        let self_load = FoundationSelfLoad {
            soil_depth_mm,
            soil_unit_weight_kn_m3,
            concrete_unit_weight_kn_m3,
        };
        self_load.validate()?;
        Ok(self_load)
    }

    pub fn validate(&self) -> CalcResult<()> {
        ensure_non_negative("soil_depth_above", self.soil_depth_mm)?;
        ensure_non_negative("soil_unit_weight", self.soil_unit_weight_kn_m3)?;
        ensure_non_negative("concrete_unit_weight", self.concrete_unit_weight_kn_m3)?;
        Ok(())
    }

    /// Pad self-weight = area × thickness × γc
    pub fn self_weight(&self, geometry: &FoundationGeometry) -> KiloNewtons {
        KiloNewtons(geometry.area_mm2().0 * geometry.thickness_mm / 1.0e9 * self.concrete_unit_weight_kn_m3)
    }

    /// Soil surcharge = area × soil depth × γs
    pub fn surcharge(&self, geometry: &FoundationGeometry) -> KiloNewtons {
        KiloNewtons(geometry.area_mm2().0 * self.soil_depth_mm / 1.0e9 * self.soil_unit_weight_kn_m3)
    }
}

// ============================================================================
// Resultants
// ============================================================================

/// Service and ultimate resultants for one load state.
///
/// Built fresh from the current loads; nothing here is cached between
/// evaluations, and the combination table is rebuilt on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationLoading {
    pub cases: LoadCaseSet,
    pub self_weight_kn: f64,
    pub surcharge_kn: f64,
    pub factors: LoadFactors,
}

impl FoundationLoading {
    pub fn new(cases: LoadCaseSet, self_weight: KiloNewtons, surcharge: KiloNewtons, factors: LoadFactors) -> Self {
        FoundationLoading {
            cases,
            self_weight_kn: self_weight.0,
            surcharge_kn: surcharge.0,
            factors,
        }
    }

    /// The strength envelope for the current factors
    pub fn combinations(&self) -> Vec<LoadCombination> {
        aci318_strength_combinations(&self.factors)
    }

    /// One component as a load case, with the pad and soil weight added to
    /// dead load on the axial component.
    pub fn component_case(&self, component: LoadComponent) -> LoadCase {
        let mut case = self.cases.component_case(component);
        if component == LoadComponent::Axial {
            case.set_load(LoadType::Dead, case.get(LoadType::Dead) + self.self_weight_kn + self.surcharge_kn);
        }
        case
    }

    /// Unfactored total of one component (every source, plus self-load on axial)
    pub fn service(&self, component: LoadComponent) -> f64 {
        self.component_case(component).total()
    }

    /// Service totals for every component
    pub fn service_effects(&self) -> LoadEffects {
        LoadEffects::from_fn(|component| self.service(component))
    }

    /// Governing ultimate value of one component.
    ///
    /// Axial governs by maximum; the other components by largest magnitude.
    pub fn ultimate(&self, component: LoadComponent) -> CombinationResult {
        let case = self.component_case(component);
        let combos = self.combinations();
        let governing = match component {
            LoadComponent::Axial => find_governing_combination(&case, &combos),
            _ => find_governing_magnitude(&case, &combos),
        };
        governing.unwrap_or_else(empty_result)
    }

    /// Smallest ultimate value of one component (uplift check)
    pub fn ultimate_minimum(&self, component: LoadComponent) -> CombinationResult {
        find_minimum_combination(&self.component_case(component), &self.combinations())
            .unwrap_or_else(empty_result)
    }

    /// Governing ultimate values for every component
    pub fn ultimate_effects(&self) -> LoadEffects {
        LoadEffects::from_fn(|component| self.ultimate(component).value)
    }

    /// Every combination applied to one component
    pub fn combination_results(&self, component: LoadComponent) -> Vec<CombinationResult> {
        evaluate_combinations(&self.component_case(component), &self.combinations())
    }

    /// Compact summary for reports
    pub fn summary(&self) -> LoadSummary {
        let axial = self.ultimate(LoadComponent::Axial);
        LoadSummary {
            self_weight_kn: self.self_weight_kn,
            surcharge_kn: self.surcharge_kn,
            service: self.service_effects(),
            ultimate: self.ultimate_effects(),
            governing_combination: axial.name,
            governing_equation: axial.equation,
            axial_combinations: self.combination_results(LoadComponent::Axial),
        }
    }
}

fn empty_result() -> CombinationResult {
    CombinationResult {
        name: String::new(),
        equation: String::new(),
        value: 0.0,
    }
}

/// Load summary carried in the design report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadSummary {
    /// Pad self-weight (kN)
    pub self_weight_kn: f64,
    /// Soil surcharge (kN)
    pub surcharge_kn: f64,
    /// Unfactored resultants
    pub service: LoadEffects,
    /// Governing factored resultants
    pub ultimate: LoadEffects,
    /// Combination governing the ultimate axial load
    pub governing_combination: String,
    /// Equation of the governing combination
    pub governing_equation: String,
    /// Every combination applied to the axial component
    pub axial_combinations: Vec<CombinationResult>,
}

impl LoadSummary {
    /// Reject a summary whose governing axial load is not compressive.
    pub fn require_compression(&self) -> CalcResult<()> {
        if self.ultimate.axial_kn <= 0.0 {
            return Err(CalcError::calculation_failed(
                "load_aggregation",
                format!("Governing ultimate axial load {} kN is not compressive", self.ultimate.axial_kn),
            ));
        }
        Ok(())
    }
}
