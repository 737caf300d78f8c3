//! # Pad Foundation Analysis
//!
//! The analysis object for one isolated pad: geometry, soil capacity, the
//! column load cases and the pad's own weight. It owns the load aggregation
//! (service and ultimate resultants), the soil bearing check and the
//! eccentricity of the resultant.
//!
//! Loads are set per component with a three-way dead/live/wind split. Each
//! setter validates and replaces that component's values wholesale; nothing
//! accumulates across calls.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::calculations::pad_foundation::PadFoundation;
//! use footing_core::geometry::FoundationGeometry;
//!
//! let geometry = FoundationGeometry::centered(2500.0, 2500.0, 400.0, 400.0).unwrap();
//! let mut pad = PadFoundation::new(geometry, 200.0).unwrap();
//! pad.set_column_axial_loads(800.0, 300.0, 0.0).unwrap();
//! pad.set_foundation_loads(400.0, 700.0, 18.0, 24.0).unwrap();
//!
//! assert!((pad.service_load().0 - 1238.75).abs() < 1e-9);
//! assert!((pad.ultimate_load().value - 1606.5).abs() < 1e-9);
//!
//! let bearing = pad.bearing_pressure_check();
//! assert!((bearing.pressure_kpa - 198.2).abs() < 1e-9);
//! assert!(bearing.check.passes());
//! ```

use log::debug;
use serde::{Deserialize, Serialize};

use crate::aci_factors::{LoadFactors, StrengthReductionFactors};
use crate::calculations::checks::SectionCheckResult;
use crate::equations::footing::bearing_pressure;
use crate::errors::{ensure_strictly_positive, CalcResult};
use crate::geometry::FoundationGeometry;
use crate::loads::{
    CombinationResult, FoundationLoading, FoundationSelfLoad, LoadCaseSet, LoadComponent, LoadEffects,
    LoadSummary,
};
use crate::pressure::{FoundationModel, LoadState, PressureDistribution, UniformPressure};
use crate::units::{KiloNewtons, Meters, Millimeters};

/// An isolated pad foundation under one column.
///
/// ## JSON Example
///
/// ```json
/// {
///   "geometry": {
///     "length_mm": 2500.0, "width_mm": 2500.0, "thickness_mm": 400.0,
///     "column_length_mm": 400.0, "column_width_mm": 400.0,
///     "column_x_mm": 1250.0, "column_y_mm": 1250.0
///   },
///   "soil_bearing_capacity_kpa": 200.0,
///   "cases": { "dead": { "axial_kn": 800.0 }, "live": { "axial_kn": 300.0 } },
///   "self_load": {
///     "soil_depth_mm": 700.0,
///     "soil_unit_weight_kn_m3": 18.0,
///     "concrete_unit_weight_kn_m3": 24.0
///   }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PadFoundation {
    geometry: FoundationGeometry,
    /// Allowable soil bearing pressure (kPa)
    soil_bearing_capacity_kpa: f64,
    #[serde(default)]
    cases: LoadCaseSet,
    /// Pad and soil weight; `None` until foundation loads are set
    #[serde(default)]
    self_load: Option<FoundationSelfLoad>,
    #[serde(default)]
    load_factors: LoadFactors,
    #[serde(default)]
    phi_factors: StrengthReductionFactors,
}

impl PadFoundation {
    /// Create a pad with no loads and code-default factors.
    pub fn new(geometry: FoundationGeometry, soil_bearing_capacity_kpa: f64) -> CalcResult<Self> {
        geometry.validate()?;
        ensure_strictly_positive("soil_bearing_capacity", soil_bearing_capacity_kpa)?;
        Ok(PadFoundation {
            geometry,
            soil_bearing_capacity_kpa,
            cases: LoadCaseSet::new(),
            self_load: None,
            load_factors: LoadFactors::default(),
            phi_factors: StrengthReductionFactors::default(),
        })
    }

    /// Create a pad from plan dimensions (mm) and soil capacity (kPa).
    pub fn from_dimensions(
        foundation_length_mm: f64,
        foundation_width_mm: f64,
        column_length_mm: f64,
        column_width_mm: f64,
        col_pos_xdir_mm: f64,
        col_pos_ydir_mm: f64,
        soil_bearing_capacity_kpa: f64,
    ) -> CalcResult<Self> {
        let geometry = FoundationGeometry::new(
            foundation_length_mm,
            foundation_width_mm,
            column_length_mm,
            column_width_mm,
            col_pos_xdir_mm,
            col_pos_ydir_mm,
        )?;
        Self::new(geometry, soil_bearing_capacity_kpa)
    }

    /// Override the load factors.
    pub fn with_load_factors(mut self, factors: LoadFactors) -> CalcResult<Self> {
        factors.validate()?;
        self.load_factors = factors;
        Ok(self)
    }

    /// Override the strength reduction factors.
    pub fn with_phi_factors(mut self, factors: StrengthReductionFactors) -> CalcResult<Self> {
        factors.validate()?;
        self.phi_factors = factors;
        Ok(self)
    }

    /// Re-check everything, e.g. after deserializing.
    pub fn validate(&self) -> CalcResult<()> {
        self.geometry.validate()?;
        ensure_strictly_positive("soil_bearing_capacity", self.soil_bearing_capacity_kpa)?;
        for load_type in crate::loads::LoadType::ALL {
            self.cases.get(load_type).validate(&format!("{:?}", load_type).to_lowercase())?;
        }
        if let Some(self_load) = &self.self_load {
            self_load.validate()?;
        }
        self.load_factors.validate()?;
        self.phi_factors.validate()
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    pub fn soil_bearing_capacity_kpa(&self) -> f64 {
        self.soil_bearing_capacity_kpa
    }

    pub fn cases(&self) -> &LoadCaseSet {
        &self.cases
    }

    pub fn self_load(&self) -> Option<&FoundationSelfLoad> {
        self.self_load.as_ref()
    }

    pub fn load_factors(&self) -> &LoadFactors {
        &self.load_factors
    }

    pub fn phi_factors(&self) -> &StrengthReductionFactors {
        &self.phi_factors
    }

    // ------------------------------------------------------------------------
    // Load setters
    // ------------------------------------------------------------------------

    /// Column axial loads (kN, compression positive).
    pub fn set_column_axial_loads(&mut self, dead: f64, live: f64, wind: f64) -> CalcResult<()> {
        self.cases = self.cases.clone().with_axial(dead, live, wind)?;
        Ok(())
    }

    /// Column horizontal loads along x (kN).
    pub fn set_column_horizontal_loads_xdir(&mut self, dead: f64, live: f64, wind: f64) -> CalcResult<()> {
        self.cases = self.cases.clone().with_horizontal_x(dead, live, wind)?;
        Ok(())
    }

    /// Column horizontal loads along y (kN).
    pub fn set_column_horizontal_loads_ydir(&mut self, dead: f64, live: f64, wind: f64) -> CalcResult<()> {
        self.cases = self.cases.clone().with_horizontal_y(dead, live, wind)?;
        Ok(())
    }

    /// Column moments in the x direction (kN·m).
    pub fn set_column_moments_xdir(&mut self, dead: f64, live: f64, wind: f64) -> CalcResult<()> {
        self.cases = self.cases.clone().with_moment_x(dead, live, wind)?;
        Ok(())
    }

    /// Column moments in the y direction (kN·m).
    pub fn set_column_moments_ydir(&mut self, dead: f64, live: f64, wind: f64) -> CalcResult<()> {
        self.cases = self.cases.clone().with_moment_y(dead, live, wind)?;
        Ok(())
    }

    /// Seismic column loads, all components at once.
    pub fn set_column_seismic_loads(&mut self, seismic: LoadEffects) -> CalcResult<()> {
        self.cases = self.cases.clone().with_seismic(seismic)?;
        Ok(())
    }

    /// Pad thickness (mm), soil depth above the pad (mm) and unit weights
    /// (kN/m³). Self-weight and surcharge follow from these.
    pub fn set_foundation_loads(
        &mut self,
        thickness_mm: f64,
        soil_depth_mm: f64,
        soil_unit_weight_kn_m3: f64,
        concrete_unit_weight_kn_m3: f64,
    ) -> CalcResult<()> {
        let self_load = FoundationSelfLoad::new(soil_depth_mm, soil_unit_weight_kn_m3, concrete_unit_weight_kn_m3)?;
        self.geometry.set_thickness(thickness_mm)?;
        self.self_load = Some(self_load);
        debug!(
            "Foundation loads: self-weight {:.2} kN, surcharge {:.2} kN",
            self.self_weight().0,
            self.surcharge().0
        );
        Ok(())
    }

    /// Revise the pad thickness, keeping soil depth and unit weights.
    pub fn set_thickness(&mut self, thickness_mm: f64) -> CalcResult<()> {
        self.geometry.set_thickness(thickness_mm)
    }

    // ------------------------------------------------------------------------
    // Resultants
    // ------------------------------------------------------------------------

    /// Loads and factors as they stand, ready for combination.
    pub fn loading(&self) -> FoundationLoading {
        FoundationLoading::new(self.cases.clone(), self.self_weight(), self.surcharge(), self.load_factors)
    }

    /// Unfactored vertical resultant including self-weight and surcharge.
    pub fn service_load(&self) -> KiloNewtons {
        KiloNewtons(self.loading().service(LoadComponent::Axial))
    }

    /// Governing factored vertical resultant.
    pub fn ultimate_load(&self) -> CombinationResult {
        self.loading().ultimate(LoadComponent::Axial)
    }

    pub fn load_summary(&self) -> LoadSummary {
        self.loading().summary()
    }

    fn resultant(&self, state: LoadState) -> LoadEffects {
        let loading = self.loading();
        match state {
            LoadState::Service => loading.service_effects(),
            LoadState::Ultimate => loading.ultimate_effects(),
        }
    }

    // ------------------------------------------------------------------------
    // Checks
    // ------------------------------------------------------------------------

    /// Service bearing pressure against the allowable soil capacity.
    pub fn bearing_pressure_check(&self) -> BearingCheck {
        let service = self.service_load();
        let area = self.geometry.area_m2();
        let pressure = bearing_pressure(service, area);
        let check = SectionCheckResult::new(pressure.0, self.soil_bearing_capacity_kpa, 1.0);

        debug!(
            "Bearing: {:.2} kN over {:.3} m² = {:.2} kPa (allowable {:.1} kPa)",
            service.0, area.0, pressure.0, self.soil_bearing_capacity_kpa
        );

        BearingCheck {
            service_load_kn: service.0,
            area_m2: area.0,
            pressure_kpa: pressure.0,
            allowable_kpa: self.soil_bearing_capacity_kpa,
            check,
        }
    }

    /// Eccentricity of the resultant at the underside of the pad.
    ///
    /// The base moment adds the horizontal force times the pad thickness to
    /// the column moment in the same direction.
    pub fn eccentricity(&self, state: LoadState) -> Eccentricity {
        let effects = self.resultant(state);
        let lever: Meters = Millimeters(self.geometry.thickness_mm).into();
        let base_moment_x_knm = effects.moment_x_knm + effects.horizontal_x_kn * lever.0;
        let base_moment_y_knm = effects.moment_y_knm + effects.horizontal_y_kn * lever.0;

        let offset = |moment: f64| -> Option<f64> {
            if effects.axial_kn != 0.0 {
                let e: Millimeters = Meters(moment / effects.axial_kn).into();
                Some(e.0)
            } else {
                None
            }
        };

        Eccentricity {
            state,
            axial_kn: effects.axial_kn,
            base_moment_x_knm,
            base_moment_y_knm,
            ex_mm: offset(base_moment_x_knm),
            ey_mm: offset(base_moment_y_knm),
        }
    }

    /// Whether the resultant stays inside the kern (|ex| ≤ L/6, |ey| ≤ B/6).
    ///
    /// Zero axial load has no defined eccentricity and is never inside.
    pub fn within_middle_third(&self, state: LoadState) -> bool {
        let e = self.eccentricity(state);
        match (e.ex_mm, e.ey_mm) {
            (Some(ex), Some(ey)) => {
                ex.abs() <= self.geometry.length_mm / 6.0 && ey.abs() <= self.geometry.width_mm / 6.0
            }
            _ => false,
        }
    }

    /// Nominal punching stress on the column perimeter (MPa) for an
    /// effective depth.
    pub fn column_face_punching_stress(&self, d_mm: f64) -> Option<f64> {
        let pu: crate::units::Newtons = KiloNewtons(self.ultimate_load().value).into();
        crate::equations::concrete::column_face_punching_stress(pu.0, self.geometry.column_perimeter(), d_mm)
    }
}

impl FoundationModel for PadFoundation {
    fn geometry(&self) -> &FoundationGeometry {
        &self.geometry
    }

    fn self_weight(&self) -> KiloNewtons {
        self.self_load
            .map_or(KiloNewtons(0.0), |load| load.self_weight(&self.geometry))
    }

    fn surcharge(&self) -> KiloNewtons {
        self.self_load
            .map_or(KiloNewtons(0.0), |load| load.surcharge(&self.geometry))
    }

    fn pressure_distribution(&self, state: LoadState) -> Box<dyn PressureDistribution> {
        let resultant = match state {
            LoadState::Service => self.service_load(),
            LoadState::Ultimate => KiloNewtons(self.ultimate_load().value),
        };
        Box::new(UniformPressure::from_resultant(resultant, &self.geometry))
    }
}

/// Soil bearing check at service loads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BearingCheck {
    /// Unfactored vertical resultant (kN)
    pub service_load_kn: f64,
    /// Footprint area (m²)
    pub area_m2: f64,
    /// Average bearing pressure (kPa)
    pub pressure_kpa: f64,
    /// Allowable bearing pressure (kPa)
    pub allowable_kpa: f64,
    /// Pressure against allowable, φ = 1
    pub check: SectionCheckResult,
}

impl BearingCheck {
    /// Pressure / allowable
    pub fn utilization(&self) -> Option<f64> {
        self.check.ratio
    }
}

/// Resultant eccentricity at the base of the pad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Eccentricity {
    pub state: LoadState,
    /// Vertical resultant (kN)
    pub axial_kn: f64,
    /// Column moment plus horizontal x force times thickness (kN·m)
    pub base_moment_x_knm: f64,
    /// Column moment plus horizontal y force times thickness (kN·m)
    pub base_moment_y_knm: f64,
    /// Offset along x (mm); `None` for zero axial load
    pub ex_mm: Option<f64>,
    /// Offset along y (mm); `None` for zero axial load
    pub ey_mm: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;

    fn worked_example() -> PadFoundation {
        let geometry = FoundationGeometry::centered(2500.0, 2500.0, 400.0, 400.0).unwrap();
        let mut pad = PadFoundation::new(geometry, 200.0).unwrap();
        pad.set_column_axial_loads(800.0, 300.0, 0.0).unwrap();
        pad.set_foundation_loads(400.0, 700.0, 18.0, 24.0).unwrap();
        pad
    }

    #[test]
    fn test_rejects_non_positive_capacity() {
        let geometry = FoundationGeometry::centered(2000.0, 2000.0, 400.0, 400.0).unwrap();
        let err = PadFoundation::new(geometry, 0.0).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "soil_bearing_capacity"));
    }

    #[test]
    fn test_from_dimensions_validates_column_position() {
        assert!(PadFoundation::from_dimensions(2500.0, 2500.0, 400.0, 400.0, 1250.0, 1250.0, 200.0).is_ok());
        assert!(PadFoundation::from_dimensions(2500.0, 2500.0, 400.0, 400.0, 2400.0, 1250.0, 200.0).is_err());
    }

    #[test]
    fn test_self_weight_and_surcharge() {
        let pad = worked_example();
        assert!((pad.self_weight().0 - 60.0).abs() < 1e-9);
        assert!((pad.surcharge().0 - 78.75).abs() < 1e-9);
        assert!((pad.area().0 - 6.25).abs() < 1e-12);
    }

    #[test]
    fn test_self_weight_zero_until_foundation_loads_set() {
        let geometry = FoundationGeometry::centered(2500.0, 2500.0, 400.0, 400.0).unwrap();
        let mut pad = PadFoundation::new(geometry, 200.0).unwrap();
        pad.set_column_axial_loads(800.0, 300.0, 0.0).unwrap();
        assert_eq!(pad.self_weight().0, 0.0);
        assert!((pad.service_load().0 - 1100.0).abs() < 1e-12);
    }

    #[test]
    fn test_worked_example_resultants() {
        let pad = worked_example();
        assert!((pad.service_load().0 - 1238.75).abs() < 1e-9);
        let ultimate = pad.ultimate_load();
        assert!((ultimate.value - 1606.5).abs() < 1e-9);
        assert_eq!(ultimate.name, "U1");
    }

    #[test]
    fn test_setters_replace_values() {
        let mut pad = worked_example();
        pad.set_column_axial_loads(500.0, 100.0, 0.0).unwrap();
        pad.set_column_axial_loads(800.0, 300.0, 0.0).unwrap();
        assert!((pad.service_load().0 - 1238.75).abs() < 1e-9);
    }

    #[test]
    fn test_setter_rejects_non_finite() {
        let mut pad = worked_example();
        assert!(pad.set_column_moments_xdir(f64::NAN, 0.0, 0.0).is_err());
        assert!(pad.set_foundation_loads(0.0, 700.0, 18.0, 24.0).is_err());
        // Failed setters leave the previous state
        assert!((pad.service_load().0 - 1238.75).abs() < 1e-9);
    }

    #[test]
    fn test_wind_included_in_service_total() {
        let mut pad = worked_example();
        pad.set_column_axial_loads(800.0, 300.0, 100.0).unwrap();
        assert!((pad.service_load().0 - 1338.75).abs() < 1e-9);
    }

    #[test]
    fn test_thickness_revision_updates_self_weight() {
        let mut pad = worked_example();
        pad.set_thickness(600.0).unwrap();
        assert!((pad.self_weight().0 - 90.0).abs() < 1e-9);
        assert!((pad.surcharge().0 - 78.75).abs() < 1e-9);
    }

    #[test]
    fn test_bearing_check_worked_example() {
        let pad = worked_example();
        let bearing = pad.bearing_pressure_check();
        assert!((bearing.pressure_kpa - 198.2).abs() < 1e-9);
        assert!((bearing.utilization().unwrap() - 0.991).abs() < 1e-9);
        assert!(bearing.check.passes());
        assert_eq!(bearing.check.phi, 1.0);
    }

    #[test]
    fn test_bearing_check_idempotent() {
        let pad = worked_example();
        let first = pad.bearing_pressure_check();
        let second = pad.bearing_pressure_check();
        assert_eq!(first, second);
        assert_eq!(first.pressure_kpa.to_bits(), second.pressure_kpa.to_bits());
    }

    #[test]
    fn test_bearing_check_fails_over_capacity() {
        let mut pad = worked_example();
        pad.set_column_axial_loads(900.0, 300.0, 0.0).unwrap();
        assert!(!pad.bearing_pressure_check().check.passes());
    }

    #[test]
    fn test_custom_load_factors() {
        let factors = LoadFactors { dead: 1.4, ..LoadFactors::default() };
        let pad = worked_example().with_load_factors(factors).unwrap();
        assert!((pad.ultimate_load().value - (1.4 * 938.75 + 1.6 * 300.0)).abs() < 1e-9);
        assert!(worked_example()
            .with_load_factors(LoadFactors { live: 0.0, ..LoadFactors::default() })
            .is_err());
        assert!(worked_example()
            .with_phi_factors(StrengthReductionFactors { shear: 1.2, ..StrengthReductionFactors::default() })
            .is_err());
    }

    #[test]
    fn test_uniform_pressure_distribution() {
        let pad = worked_example();
        let q = pad.pressure_at(LoadState::Ultimate, 100.0, 2400.0);
        assert!((q.0 - 257.04).abs() < 1e-9);
        let qs = pad.pressure_at(LoadState::Service, 1250.0, 1250.0);
        assert!((qs.0 - 198.2).abs() < 1e-9);
    }

    #[test]
    fn test_eccentricity() {
        let mut pad = worked_example();
        pad.set_column_moments_xdir(78.0, 34.0, 0.0).unwrap();
        pad.set_column_horizontal_loads_xdir(35.0, 15.0, 0.0).unwrap();

        let e = pad.eccentricity(LoadState::Service);
        // 112 + 50 × 0.4
        assert!((e.base_moment_x_knm - 132.0).abs() < 1e-9);
        assert!((e.ex_mm.unwrap() - 132.0 / 1238.75 * 1000.0).abs() < 1e-9);
        assert_eq!(e.ey_mm, Some(0.0));
        assert!(pad.within_middle_third(LoadState::Service));
        assert!(pad.within_middle_third(LoadState::Ultimate));
    }

    #[test]
    fn test_eccentricity_outside_kern() {
        let mut pad = worked_example();
        pad.set_column_moments_ydir(600.0, 0.0, 0.0).unwrap();
        // 600 / 1238.75 m = 484 mm > 2500/6
        assert!(!pad.within_middle_third(LoadState::Service));
    }

    #[test]
    fn test_eccentricity_zero_axial() {
        let geometry = FoundationGeometry::centered(2000.0, 2000.0, 400.0, 400.0).unwrap();
        let mut pad = PadFoundation::new(geometry, 150.0).unwrap();
        pad.set_column_moments_xdir(10.0, 0.0, 0.0).unwrap();
        let e = pad.eccentricity(LoadState::Service);
        assert_eq!(e.ex_mm, None);
        assert!(!pad.within_middle_third(LoadState::Service));
    }

    #[test]
    fn test_column_face_punching_stress() {
        let pad = worked_example();
        let stress = pad.column_face_punching_stress(317.0).unwrap();
        assert!((stress - 1_606_500.0 / (1600.0 * 317.0)).abs() < 1e-9);
        assert!(pad.column_face_punching_stress(0.0).is_none());
    }

    #[test]
    fn test_json_round_trip_keeps_loads() {
        let pad = worked_example();
        let json = serde_json::to_string(&pad).unwrap();
        let back: PadFoundation = serde_json::from_str(&json).unwrap();
        back.validate().unwrap();
        assert_eq!(back, pad);
    }
}
