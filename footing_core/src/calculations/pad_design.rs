//! # Pad Foundation Design
//!
//! Runs every ACI 318M check on an isolated pad for a chosen thickness,
//! concrete, steel and reinforcement layout, and assembles the results into a
//! [`DesignReport`].
//!
//! ## Stages
//!
//! 1. Soil bearing at service loads
//! 2. Flexure at the column face, each direction
//! 3. One-way shear at `d` from the column face, each direction
//! 4. Punching shear at `d/2` from the column faces
//!
//! Every stage runs regardless of earlier failures, so the report always
//! carries all ratios. The pad is adequate only if every stage passes.
//! Development length and bar spacing are reported alongside but do not
//! gate adequacy.
//!
//! ## Assumptions
//!
//! - Concentric column load; uniform bearing pressure under factored loads
//! - x-direction bars form the bottom layer
//! - Interior column for punching (αs = 40)
//! - Strength checks use the governing factored axial load; bearing uses
//!   service loads
//!
//! ## Example
//!
//! ```rust
//! use footing_core::calculations::pad_design::{design, PadDesignInput};
//! use footing_core::calculations::pad_foundation::PadFoundation;
//! use footing_core::geometry::FoundationGeometry;
//!
//! let geometry = FoundationGeometry::centered(2500.0, 2500.0, 400.0, 400.0).unwrap();
//! let mut pad = PadFoundation::new(geometry, 200.0).unwrap();
//! pad.set_column_axial_loads(800.0, 300.0, 0.0).unwrap();
//! pad.set_foundation_loads(400.0, 700.0, 18.0, 24.0).unwrap();
//!
//! let report = design(&pad, &PadDesignInput::default()).unwrap();
//! assert!(report.is_adequate);
//! assert_eq!(report.bearing.check.status.as_str(), "PASS");
//! println!("{}", serde_json::to_string_pretty(&report).unwrap());
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::aci_factors::{max_bar_spacing, ColumnLocation};
use crate::calculations::checks::{CheckStatus, SectionCheckResult};
use crate::calculations::pad_foundation::{BearingCheck, PadFoundation};
use crate::equations::concrete::{
    bar_spacing_limits, development_length, flexural_design, maximum_flexural_steel, minimum_flexural_steel,
    nominal_moment_capacity, one_way_shear_strength, punching_critical_section, punching_shear_strength,
    BarSpacingLimits, CriticalSection, DevelopmentLength, FlexuralOutcome, PunchingShearStrength,
    DEFAULT_DEVELOPMENT_SPACING_MM,
};
use crate::equations::footing::{
    effective_depths, face_moment, one_way_shear_demand, punching_shear_demand, EffectiveDepths, FaceMoment,
    OneWayShearDemand, PunchingShearDemand,
};
use crate::equations::registry::{Equation, EquationTracker};
use crate::errors::{ensure_in_range, ensure_non_negative, ensure_strictly_positive, CalcResult};
use crate::geometry::{Direction, FoundationGeometry};
use crate::loads::{FoundationSelfLoad, LoadSummary};
use crate::materials::MaterialProperties;
use crate::pressure::{FoundationModel, LoadState, PressureDistribution};
use crate::units::{KiloNewtons, KnM, NMm, Newtons};

/// Code edition the checks follow
pub const DESIGN_CODE: &str = "ACI 318M-25";

/// Design parameters for one pad.
///
/// ## JSON Example
///
/// ```json
/// {
///   "fc_mpa": 30.0,
///   "fy_mpa": 420.0,
///   "thickness_mm": 400.0,
///   "cover_mm": 75.0,
///   "bar_diameter_x_mm": 16.0,
///   "bar_diameter_y_mm": 16.0,
///   "lambda": 1.0,
///   "bar_spacing_mm": 150.0,
///   "aggregate_size_mm": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PadDesignInput {
    /// Concrete compressive strength f'c (MPa)
    pub fc_mpa: f64,
    /// Steel yield strength fy (MPa)
    pub fy_mpa: f64,
    /// Pad thickness (mm)
    pub thickness_mm: f64,
    /// Clear cover to the bottom bars (mm)
    pub cover_mm: f64,
    /// Diameter of the x-direction (bottom layer) bars (mm)
    pub bar_diameter_x_mm: f64,
    /// Diameter of the y-direction bars (mm)
    pub bar_diameter_y_mm: f64,
    /// Lightweight concrete factor λ
    pub lambda: f64,
    /// Centre-to-centre bar spacing used for detailing (mm)
    pub bar_spacing_mm: f64,
    /// Nominal maximum aggregate size (mm), 20 mm when absent
    pub aggregate_size_mm: Option<f64>,
}

impl Default for PadDesignInput {
    fn default() -> Self {
        PadDesignInput {
            fc_mpa: 30.0,
            fy_mpa: 420.0,
            thickness_mm: 400.0,
            cover_mm: 75.0,
            bar_diameter_x_mm: 16.0,
            bar_diameter_y_mm: 16.0,
            lambda: 1.0,
            bar_spacing_mm: DEFAULT_DEVELOPMENT_SPACING_MM,
            aggregate_size_mm: None,
        }
    }
}

impl PadDesignInput {
    /// Validate the geometric and detailing inputs. Material strengths are
    /// checked separately against the code limits.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_strictly_positive("foundation_thickness", self.thickness_mm)?;
        ensure_non_negative("cover", self.cover_mm)?;
        ensure_strictly_positive("bar_dia_x", self.bar_diameter_x_mm)?;
        ensure_strictly_positive("bar_dia_y", self.bar_diameter_y_mm)?;
        ensure_strictly_positive("lambda", self.lambda)?;
        ensure_in_range("lambda", self.lambda, 0.0, 1.0)?;
        ensure_strictly_positive("bar_spacing", self.bar_spacing_mm)?;
        if let Some(aggregate) = self.aggregate_size_mm {
            ensure_strictly_positive("aggregate_size", aggregate)?;
        }
        Ok(())
    }

    pub fn materials(&self) -> MaterialProperties {
        MaterialProperties::new(self.fc_mpa, self.fy_mpa)
    }

    /// Bar diameter running in a direction
    pub fn bar_diameter(&self, direction: Direction) -> f64 {
        match direction {
            Direction::X => self.bar_diameter_x_mm,
            Direction::Y => self.bar_diameter_y_mm,
        }
    }
}

/// A pair of per-direction results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerDirection<T> {
    pub x: T,
    pub y: T,
}

impl<T> PerDirection<T> {
    /// Build both directions with the same function.
    pub fn build<F: FnMut(Direction) -> T>(mut f: F) -> Self {
        PerDirection {
            x: f(Direction::X),
            y: f(Direction::Y),
        }
    }

    pub fn get(&self, direction: Direction) -> &T {
        match direction {
            Direction::X => &self.x,
            Direction::Y => &self.y,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (Direction, &T)> {
        [(Direction::X, &self.x), (Direction::Y, &self.y)].into_iter()
    }
}

/// Flexural design at the column face in one direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlexureCheck {
    pub direction: Direction,
    /// Effective depth of this layer (mm)
    pub effective_depth_mm: f64,
    pub face_moment: FaceMoment,
    /// Outcome of the tension-steel design
    pub outcome: FlexuralOutcome,
    /// Steel needed for strength (mm²), absent when the section fails
    pub as_required_mm2: Option<f64>,
    /// Minimum steel (mm²)
    pub as_min_mm2: f64,
    /// Tension-controlled maximum steel (mm²)
    pub as_max_mm2: f64,
    /// max(required, minimum) (mm²)
    pub as_governing_mm2: f64,
    /// Mu against φMn of the governing steel; PASS iff the outcome is adequate
    pub check: SectionCheckResult,
}

/// One-way shear at `d` from the column face in one direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OneWayShearCheck {
    pub direction: Direction,
    /// Effective depth of this layer (mm)
    pub effective_depth_mm: f64,
    pub demand: OneWayShearDemand,
    /// Vu against φVc (kN)
    pub check: SectionCheckResult,
}

/// Punching shear on the critical perimeter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunchingShearCheck {
    /// Mean effective depth (mm)
    pub effective_depth_mm: f64,
    pub critical_section: CriticalSection,
    pub demand: PunchingShearDemand,
    /// Column aspect ratio βc
    pub beta_c: f64,
    /// Column location factor αs
    pub alpha_s: f64,
    /// Candidate strengths (N) and the governing one
    pub strength: PunchingShearStrength,
    /// Pu / (column perimeter × d) (MPa)
    pub column_face_stress_mpa: Option<f64>,
    /// Vu against φVc (kN)
    pub check: SectionCheckResult,
}

/// Reinforcement detailing for one direction. Reported, not checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetailingInfo {
    pub direction: Direction,
    pub bar_diameter_mm: f64,
    pub development: DevelopmentLength,
    /// Shorter overhang less cover (mm)
    pub available_length_mm: f64,
    /// Whether the bars can develop within the shorter overhang
    pub development_available: bool,
    pub spacing_limits: BarSpacingLimits,
    pub bar_spacing_mm: f64,
    /// Whether the spacing satisfies both limits
    pub spacing_permitted: bool,
}

/// Complete design results for one pad.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignReport {
    pub design_code: String,
    /// Geometry with the design thickness applied
    pub geometry: FoundationGeometry,
    pub materials: MaterialProperties,
    /// Advisory material notes
    pub material_warnings: Vec<String>,
    pub cover_mm: f64,
    pub loads: LoadSummary,
    /// Governing factored pressure used for the strength checks (kPa)
    pub ultimate_pressure_kpa: f64,
    pub effective_depths: EffectiveDepths,
    pub bearing: BearingCheck,
    pub flexure: PerDirection<FlexureCheck>,
    pub one_way_shear: PerDirection<OneWayShearCheck>,
    pub punching_shear: PunchingShearCheck,
    pub detailing: PerDirection<DetailingInfo>,
    /// Equations applied, in order
    pub equations: EquationTracker,
    /// True when every check passes
    pub is_adequate: bool,
}

impl DesignReport {
    /// Every gating verdict with a label, in stage order.
    pub fn verdicts(&self) -> Vec<(String, CheckStatus)> {
        let mut verdicts = vec![("Bearing pressure".to_string(), self.bearing.check.status)];
        for (direction, flexure) in self.flexure.iter() {
            verdicts.push((format!("Flexure, {}", direction), flexure.check.status));
        }
        for (direction, shear) in self.one_way_shear.iter() {
            verdicts.push((format!("One-way shear, {}", direction), shear.check.status));
        }
        verdicts.push(("Punching shear".to_string(), self.punching_shear.check.status));
        verdicts
    }

    /// Labels of the checks that failed
    pub fn failed_checks(&self) -> Vec<String> {
        self.verdicts()
            .into_iter()
            .filter(|(_, status)| !status.is_pass())
            .map(|(label, _)| label)
            .collect()
    }
}

/// Run every check on `foundation` at the design thickness.
///
/// The caller's foundation is not modified: the checks run on a copy with
/// `input.thickness_mm` applied. Self-weight uses the foundation's soil depth
/// and unit weights, or the defaults (700 mm of 18 kN/m³ soil, 24 kN/m³
/// concrete) if none were set.
///
/// # Errors
///
/// - `InvalidInput` for an invalid foundation (e.g. one deserialized with the
///   column off the footprint) or a non-positive thickness, bar size or spacing
/// - `MaterialOutOfRange` when f'c or fy is outside the code limits
/// - `CalculationFailed` when the governing factored axial load is not compressive
pub fn design(foundation: &PadFoundation, input: &PadDesignInput) -> CalcResult<DesignReport> {
    foundation.validate()?;
    input.validate()?;

    let materials = input.materials();
    let material_warnings = materials.validate().into_result()?;
    for warning in &material_warnings {
        warn!("{}", warning);
    }

    let mut pad = foundation.clone();
    let self_load = effective_self_load(&pad);
    pad.set_foundation_loads(
        input.thickness_mm,
        self_load.soil_depth_mm,
        self_load.soil_unit_weight_kn_m3,
        self_load.concrete_unit_weight_kn_m3,
    )?;

    let mut equations = EquationTracker::new();

    // === Loads ===
    let loads = pad.load_summary();
    loads.require_compression()?;
    equations.record(Equation::FoundationSelfWeight, "Pad self-weight as dead load");
    equations.record(Equation::SoilSurcharge, "Backfill weight as dead load");
    equations.record(Equation::StrengthCombination, format!("Governing axial load {}", loads.governing_combination));
    debug!(
        "Loads: service {:.2} kN, ultimate {:.2} kN ({})",
        loads.service.axial_kn, loads.ultimate.axial_kn, loads.governing_combination
    );

    // === Stage 1: bearing ===
    let bearing = pad.bearing_pressure_check();
    equations.record(Equation::BearingPressure, "Service bearing pressure");
    equations.record(Equation::BearingUtilization, "Service pressure against allowable");

    // === Strength checks share the factored pressure and depths ===
    let pressure = pad.pressure_distribution(LoadState::Ultimate);
    let ultimate_pressure_kpa = loads.ultimate.axial_kn / pad.area().0;
    let depths = effective_depths(
        input.thickness_mm,
        input.cover_mm,
        input.bar_diameter_x_mm,
        input.bar_diameter_y_mm,
    );
    equations.record(Equation::EffectiveDepth, "Bottom bar layers");
    debug!(
        "Ultimate pressure {:.2} kPa, d_x = {:.1} mm, d_y = {:.1} mm",
        ultimate_pressure_kpa, depths.x_mm, depths.y_mm
    );

    // === Stage 2: flexure ===
    let flexure = PerDirection::build(|direction| {
        flexure_check(&pad, pressure.as_ref(), &materials, depths.get(direction), direction, &mut equations)
    });

    // === Stage 3: one-way shear ===
    let one_way_shear = PerDirection::build(|direction| {
        one_way_shear_check(&pad, pressure.as_ref(), &materials, input, depths.get(direction), direction, &mut equations)
    });

    // === Stage 4: punching shear ===
    let punching_shear = punching_shear_check(
        &pad,
        pressure.as_ref(),
        &materials,
        input,
        depths.average_mm,
        KiloNewtons(loads.ultimate.axial_kn),
        &mut equations,
    );

    // === Detailing (informational) ===
    let detailing = PerDirection::build(|direction| detailing_info(pad.geometry(), &materials, input, direction));
    equations.record(Equation::DevelopmentLength, "Bottom bars, both directions");
    equations.record(Equation::MinimumClearSpacing, "Bottom bars, both directions");
    equations.record(Equation::MaximumBarSpacing, "Crack control");

    let mut report = DesignReport {
        design_code: DESIGN_CODE.to_string(),
        geometry: pad.geometry().clone(),
        materials,
        material_warnings,
        cover_mm: input.cover_mm,
        loads,
        ultimate_pressure_kpa,
        effective_depths: depths,
        bearing,
        flexure,
        one_way_shear,
        punching_shear,
        detailing,
        equations,
        is_adequate: false,
    };
    report.equations.record(Equation::DemandCapacityRatio, "Every check");

    let failed = report.failed_checks();
    report.is_adequate = failed.is_empty();
    if !report.is_adequate {
        warn!("Pad foundation inadequate: {}", failed.join(", "));
    }

    Ok(report)
}

fn flexure_check(
    pad: &PadFoundation,
    pressure: &dyn PressureDistribution,
    materials: &MaterialProperties,
    d_mm: f64,
    direction: Direction,
    equations: &mut EquationTracker,
) -> FlexureCheck {
    let geometry = pad.geometry();
    let phi = pad.phi_factors().flexure;
    let (fc, fy) = (materials.fc_mpa, materials.fy_mpa);

    let moment = face_moment(pressure, geometry, direction);
    let b = moment.section_width_mm;
    let mu: NMm = KnM(moment.governing_knm).into();

    let outcome = flexural_design(mu.0, b, d_mm, fc, fy, phi);
    let as_required_mm2 = outcome.as_required();
    let as_min_mm2 = minimum_flexural_steel(b, d_mm, fc, fy).max(0.0);
    let as_max_mm2 = maximum_flexural_steel(b, d_mm, fc, fy).max(0.0);
    let as_governing_mm2 = as_required_mm2.unwrap_or(0.0).max(as_min_mm2);

    let mn: KnM = NMm(nominal_moment_capacity(as_governing_mm2, b, d_mm, fc, fy)).into();
    let check = SectionCheckResult::new(moment.governing_knm, mn.0, phi).with_verdict(outcome.is_adequate());

    let label = direction.to_string();
    equations.record_for_member(Equation::FaceMoment, "Moment at column face", label.as_str());
    equations.record_for_member(Equation::FlexuralDesign, "Required tension steel", label.as_str());
    equations.record_for_member(Equation::StressBlockFactor, "Whitney block depth", label.as_str());
    equations.record_for_member(Equation::MinimumFlexuralSteel, "Minimum steel", label.as_str());
    equations.record_for_member(Equation::MaximumFlexuralSteel, "Tension-controlled limit", label.as_str());
    equations.record_for_member(Equation::NominalMomentCapacity, "Capacity of governing steel", label.as_str());

    debug!(
        "Flexure {}: Mu = {:.2} kN·m, As,req = {:?} mm², As,min = {:.0} mm², {}",
        direction,
        moment.governing_knm,
        as_required_mm2,
        as_min_mm2,
        outcome.description()
    );
    if !outcome.is_adequate() {
        warn!("Flexure {}: {}", direction, outcome.description());
    }

    FlexureCheck {
        direction,
        effective_depth_mm: d_mm,
        face_moment: moment,
        outcome,
        as_required_mm2,
        as_min_mm2,
        as_max_mm2,
        as_governing_mm2,
        check,
    }
}

fn one_way_shear_check(
    pad: &PadFoundation,
    pressure: &dyn PressureDistribution,
    materials: &MaterialProperties,
    input: &PadDesignInput,
    d_mm: f64,
    direction: Direction,
    equations: &mut EquationTracker,
) -> OneWayShearCheck {
    let demand = one_way_shear_demand(pressure, pad.geometry(), direction, d_mm);
    let vc: KiloNewtons = Newtons(one_way_shear_strength(demand.section_width_mm, d_mm, materials.fc_mpa, input.lambda)).into();
    let check = SectionCheckResult::new(demand.governing_kn, vc.0, pad.phi_factors().shear);

    let label = direction.to_string();
    equations.record_for_member(Equation::OneWayShearDemand, "Shear beyond d from the face", label.as_str());
    equations.record_for_member(Equation::OneWayShearStrength, "Concrete shear strength", label.as_str());

    debug!(
        "One-way shear {}: Vu = {:.2} kN, phi*Vc = {:.2} kN",
        direction, demand.governing_kn, check.design_strength
    );
    if !check.passes() {
        warn!("One-way shear {} fails: ratio {:?}", direction, check.ratio);
    }

    OneWayShearCheck {
        direction,
        effective_depth_mm: d_mm,
        demand,
        check,
    }
}

fn punching_shear_check(
    pad: &PadFoundation,
    pressure: &dyn PressureDistribution,
    materials: &MaterialProperties,
    input: &PadDesignInput,
    d_mm: f64,
    column_load: KiloNewtons,
    equations: &mut EquationTracker,
) -> PunchingShearCheck {
    let geometry = pad.geometry();
    let critical_section = punching_critical_section(geometry.column_length_mm, geometry.column_width_mm, d_mm);
    let demand = punching_shear_demand(pressure, geometry, column_load, d_mm);

    let beta_c = geometry.column_aspect_ratio();
    let alpha_s = ColumnLocation::Interior.alpha_s();
    let strength = punching_shear_strength(
        critical_section.perimeter_mm,
        d_mm,
        materials.fc_mpa,
        beta_c,
        alpha_s,
        input.lambda,
    );
    let vc: KiloNewtons = Newtons(strength.vc).into();
    let check = SectionCheckResult::new(demand.demand_kn, vc.0, pad.phi_factors().shear).with_governing(strength.governing);
    let column_face_stress_mpa = pad.column_face_punching_stress(d_mm);

    equations.record(Equation::PunchingCriticalSection, "Perimeter at d/2 from the column");
    equations.record(Equation::PunchingShearDemand, "Column load less enclosed reaction");
    equations.record(Equation::PunchingShearAspectRatio, "Candidate Vc1");
    equations.record(Equation::PunchingShearLocation, "Candidate Vc2");
    equations.record(Equation::PunchingShearMaximum, "Candidate Vc3, least governs");
    equations.record(Equation::ColumnFacePunchingStress, "Stress on the column perimeter");

    debug!(
        "Punching: bo = {:.0} mm, Vu = {:.2} kN, phi*Vc = {:.2} kN ({})",
        critical_section.perimeter_mm,
        demand.demand_kn,
        check.design_strength,
        strength.governing.description()
    );
    if !check.passes() {
        warn!("Punching shear fails: ratio {:?}", check.ratio);
    }

    PunchingShearCheck {
        effective_depth_mm: d_mm,
        critical_section,
        demand,
        beta_c,
        alpha_s,
        strength,
        column_face_stress_mpa,
        check,
    }
}

fn detailing_info(
    geometry: &FoundationGeometry,
    materials: &MaterialProperties,
    input: &PadDesignInput,
    direction: Direction,
) -> DetailingInfo {
    let db = input.bar_diameter(direction);
    let development = development_length(db, materials.fy_mpa, materials.fc_mpa, input.cover_mm, input.bar_spacing_mm);
    let (low, high) = geometry.cantilever_lengths(direction);
    let available_length_mm = low.min(high) - input.cover_mm;
    let spacing_limits = bar_spacing_limits(db, input.aggregate_size_mm, max_bar_spacing(input.thickness_mm));

    DetailingInfo {
        direction,
        bar_diameter_mm: db,
        development,
        available_length_mm,
        development_available: available_length_mm >= development.required_mm,
        spacing_limits,
        bar_spacing_mm: input.bar_spacing_mm,
        spacing_permitted: spacing_limits.permits(input.bar_spacing_mm, db),
    }
}

/// Self-load parameters a design will use for `foundation`.
pub fn effective_self_load(foundation: &PadFoundation) -> FoundationSelfLoad {
    foundation.self_load().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equations::concrete::PunchingGoverning;
    use crate::errors::CalcError;

    fn worked_example() -> PadFoundation {
        let geometry = FoundationGeometry::centered(2500.0, 2500.0, 400.0, 400.0).unwrap();
        let mut pad = PadFoundation::new(geometry, 200.0).unwrap();
        pad.set_column_axial_loads(800.0, 300.0, 0.0).unwrap();
        pad.set_foundation_loads(400.0, 700.0, 18.0, 24.0).unwrap();
        pad
    }

    #[test]
    fn test_worked_example_loads_and_bearing() {
        let report = design(&worked_example(), &PadDesignInput::default()).unwrap();
        assert!((report.loads.service.axial_kn - 1238.75).abs() < 1e-9);
        assert!((report.loads.ultimate.axial_kn - 1606.5).abs() < 1e-9);
        assert_eq!(report.loads.governing_combination, "U1");
        assert!((report.bearing.pressure_kpa - 198.2).abs() < 1e-9);
        assert!((report.bearing.utilization().unwrap() - 0.991).abs() < 1e-9);
        assert_eq!(report.bearing.check.status, CheckStatus::Pass);
        assert!((report.ultimate_pressure_kpa - 257.04).abs() < 1e-9);
    }

    #[test]
    fn test_worked_example_effective_depths() {
        let report = design(&worked_example(), &PadDesignInput::default()).unwrap();
        assert_eq!(report.effective_depths.x_mm, 317.0);
        assert_eq!(report.effective_depths.y_mm, 301.0);
        assert_eq!(report.punching_shear.effective_depth_mm, 309.0);
    }

    #[test]
    fn test_worked_example_flexure() {
        let report = design(&worked_example(), &PadDesignInput::default()).unwrap();
        let fx = &report.flexure.x;
        assert!((fx.face_moment.governing_knm - 354.23325).abs() < 1e-6);
        assert!(fx.outcome.is_adequate());
        assert!((fx.as_required_mm2.unwrap() - 3053.09).abs() < 0.1);
        assert!((fx.as_min_mm2 - 2641.667).abs() < 0.01);
        assert_eq!(fx.as_governing_mm2, fx.as_required_mm2.unwrap());
        assert!(fx.check.passes());
        assert!((fx.check.ratio.unwrap() - 1.0).abs() < 1e-6);

        let fy = &report.flexure.y;
        assert!((fy.as_required_mm2.unwrap() - 3227.36).abs() < 0.1);
        assert!(fy.check.passes());
    }

    #[test]
    fn test_worked_example_one_way_shear() {
        let report = design(&worked_example(), &PadDesignInput::default()).unwrap();
        let vx = &report.one_way_shear.x;
        assert!((vx.demand.governing_kn - 471.0258).abs() < 1e-6);
        assert!((vx.check.design_strength - 553.439).abs() < 0.01);
        assert!((vx.check.ratio.unwrap() - 0.8511).abs() < 1e-4);

        let vy = &report.one_way_shear.y;
        assert!((vy.demand.governing_kn - 481.3074).abs() < 1e-6);
        assert!((vy.check.ratio.unwrap() - 0.9159).abs() < 1e-4);
        assert!(vy.check.passes());
    }

    #[test]
    fn test_worked_example_punching() {
        let report = design(&worked_example(), &PadDesignInput::default()).unwrap();
        let p = &report.punching_shear;
        assert_eq!(p.critical_section.perimeter_mm, 2836.0);
        assert_eq!(p.beta_c, 1.0);
        assert_eq!(p.alpha_s, 40.0);
        assert_eq!(p.strength.governing, PunchingGoverning::Maximum);
        assert_eq!(p.check.governing, Some(PunchingGoverning::Maximum));
        assert!((p.demand.demand_kn - 1477.2909).abs() < 1e-3);
        assert!((p.check.ratio.unwrap() - 0.61556).abs() < 1e-4);
        assert!((p.column_face_stress_mpa.unwrap() - 3.2494).abs() < 1e-3);
    }

    #[test]
    fn test_worked_example_adequate() {
        let report = design(&worked_example(), &PadDesignInput::default()).unwrap();
        assert!(report.is_adequate);
        assert!(report.failed_checks().is_empty());
        assert_eq!(report.verdicts().len(), 6);
        assert!(report.material_warnings.is_empty());
        assert_eq!(report.design_code, "ACI 318M-25");
    }

    #[test]
    fn test_detailing_reported() {
        let report = design(&worked_example(), &PadDesignInput::default()).unwrap();
        let dx = &report.detailing.x;
        assert!((dx.development.required_mm - 584.24).abs() < 0.01);
        assert_eq!(dx.available_length_mm, 975.0);
        assert!(dx.development_available);
        assert!(dx.spacing_permitted);
        assert_eq!(dx.spacing_limits.max_spacing_mm, 450.0);
    }

    #[test]
    fn test_design_does_not_mutate_input() {
        let pad = worked_example();
        let before = pad.clone();
        let input = PadDesignInput { thickness_mm: 600.0, ..PadDesignInput::default() };
        let report = design(&pad, &input).unwrap();
        assert_eq!(pad, before);
        assert_eq!(report.geometry.thickness_mm, 600.0);
        assert!((report.loads.self_weight_kn - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_self_load_when_unset() {
        let geometry = FoundationGeometry::centered(2500.0, 2500.0, 400.0, 400.0).unwrap();
        let mut pad = PadFoundation::new(geometry, 200.0).unwrap();
        pad.set_column_axial_loads(800.0, 300.0, 0.0).unwrap();
        assert_eq!(effective_self_load(&pad), FoundationSelfLoad::default());
        let report = design(&pad, &PadDesignInput::default()).unwrap();
        assert!((report.loads.service.axial_kn - 1238.75).abs() < 1e-9);
    }

    #[test]
    fn test_material_out_of_range_is_error() {
        let input = PadDesignInput { fc_mpa: 15.0, ..PadDesignInput::default() };
        let err = design(&worked_example(), &input).unwrap_err();
        match err {
            CalcError::MaterialOutOfRange { errors } => {
                assert_eq!(errors.len(), 1);
                assert!(errors[0].contains("below minimum 17"));
            }
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn test_material_warnings_carried() {
        let input = PadDesignInput { fc_mpa: 20.0, fy_mpa: 500.0, ..PadDesignInput::default() };
        let report = design(&worked_example(), &input).unwrap();
        assert_eq!(report.material_warnings.len(), 2);
    }

    #[test]
    fn test_invalid_input_rejected() {
        let input = PadDesignInput { bar_diameter_x_mm: 0.0, ..PadDesignInput::default() };
        assert!(matches!(design(&worked_example(), &input), Err(CalcError::InvalidInput { .. })));
        let input = PadDesignInput { lambda: 1.5, ..PadDesignInput::default() };
        assert!(design(&worked_example(), &input).is_err());
    }

    #[test]
    fn test_no_compression_is_error() {
        let geometry = FoundationGeometry::centered(2000.0, 2000.0, 400.0, 400.0).unwrap();
        let mut pad = PadFoundation::new(geometry, 200.0).unwrap();
        pad.set_foundation_loads(400.0, 0.0, 18.0, 0.0).unwrap();
        let err = design(&pad, &PadDesignInput::default()).unwrap_err();
        assert_eq!(err.error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_thin_pad_fails_without_short_circuit() {
        let input = PadDesignInput { thickness_mm: 200.0, ..PadDesignInput::default() };
        let report = design(&worked_example(), &input).unwrap();
        assert!(!report.is_adequate);
        // Infeasible flexure comes back as data
        assert!(matches!(report.flexure.x.outcome, FlexuralOutcome::ExceedsMaximumReinforcement { .. }));
        assert_eq!(report.flexure.x.check.status, CheckStatus::Fail);
        assert!(matches!(report.flexure.y.outcome, FlexuralOutcome::CompressionReinforcementRequired { .. }));
        assert_eq!(report.flexure.y.check.status, CheckStatus::Fail);
        assert_eq!(report.flexure.y.as_required_mm2, None);
        // Every stage still reported
        assert!(report.one_way_shear.x.check.ratio.is_some());
        assert!(report.punching_shear.check.ratio.is_some());
        assert!(!report.punching_shear.check.passes());
        assert!(report.failed_checks().contains(&"Punching shear".to_string()));
    }

    #[test]
    fn test_deserialized_invalid_foundation_rejected() {
        let json = r#"{
            "geometry": {
                "length_mm": 2500.0, "width_mm": 2500.0, "thickness_mm": 400.0,
                "column_length_mm": 400.0, "column_width_mm": 400.0,
                "column_x_mm": 100.0, "column_y_mm": 1250.0
            },
            "soil_bearing_capacity_kpa": 200.0,
            "cases": { "dead": { "axial_kn": 800.0 }, "live": { "axial_kn": 300.0 } }
        }"#;
        let pad: PadFoundation = serde_json::from_str(json).unwrap();
        let err = design(&pad, &PadDesignInput::default()).unwrap_err();
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "col_pos_xdir"),
            other => panic!("unexpected error {:?}", other),
        }

        let json = json
            .replace("\"column_x_mm\": 100.0", "\"column_x_mm\": 1250.0")
            .replace("200.0,", "-200.0,");
        let pad: PadFoundation = serde_json::from_str(&json).unwrap();
        let err = design(&pad, &PadDesignInput::default()).unwrap_err();
        assert!(matches!(err, CalcError::InvalidInput { ref field, .. } if field == "soil_bearing_capacity"));
    }

    #[test]
    fn test_zero_depth_fails_with_undefined_ratio() {
        // Cover swallows the whole thickness
        let input = PadDesignInput { thickness_mm: 150.0, cover_mm: 150.0, ..PadDesignInput::default() };
        let report = design(&worked_example(), &input).unwrap();
        assert!(matches!(report.flexure.x.outcome, FlexuralOutcome::InsufficientDepth { .. }));
        assert_eq!(report.flexure.x.check.status, CheckStatus::Fail);
        assert!(report.one_way_shear.y.check.ratio.is_none());
        assert!(report.punching_shear.check.ratio.is_none());
        assert!(!report.is_adequate);
        // Bearing still evaluated
        assert!(report.bearing.check.ratio.is_some());
    }

    #[test]
    fn test_equations_recorded() {
        let report = design(&worked_example(), &PadDesignInput::default()).unwrap();
        let used = report.equations.unique_equations();
        for eq in crate::equations::registry::pad_design_equations() {
            assert!(used.contains(&eq), "{:?} not recorded", eq);
        }
    }

    #[test]
    fn test_report_serializes() {
        let report = design(&worked_example(), &PadDesignInput::default()).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["bearing"]["check"]["status"], "PASS");
        assert_eq!(json["punching_shear"]["check"]["governing"], "MAXIMUM");
        assert_eq!(json["flexure"]["x"]["outcome"]["outcome"], "adequate");
        assert_eq!(json["is_adequate"], true);
    }

    #[test]
    fn test_input_json_defaults() {
        let input: PadDesignInput = serde_json::from_str(r#"{ "thickness_mm": 500.0 }"#).unwrap();
        assert_eq!(input.thickness_mm, 500.0);
        assert_eq!(input.fc_mpa, 30.0);
        assert_eq!(input.aggregate_size_mm, None);
    }
}
