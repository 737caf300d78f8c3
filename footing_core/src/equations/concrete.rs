//! # Reinforced Concrete Section Capacities (ACI 318M)
//!
//! Closed-form section capacities: stress block, flexural steel limits,
//! flexural design, one-way and two-way shear strength, development length
//! and bar spacing.
//!
//! ## Units
//!
//! Every function here works in millimetres, MPa and newtons: lengths and
//! widths in mm, moments in N·mm, forces in N, steel areas in mm². Callers
//! convert kN and kN·m at the boundary (see [`crate::units`]).
//!
//! ## Sign Conventions
//!
//! Moments and shears are magnitudes. A non-positive depth or width is never
//! divided by: flexural design reports [`FlexuralOutcome::InsufficientDepth`]
//! and the strengths come back as zero.

use serde::{Deserialize, Serialize};

use crate::aci_factors::{CONCRETE_ULTIMATE_STRAIN, DEFAULT_AGGREGATE_SIZE_MM, TENSION_CONTROLLED_STRAIN};

/// Default clear spacing assumed for development length (mm)
pub const DEFAULT_DEVELOPMENT_SPACING_MM: f64 = 150.0;

/// Absolute minimum development length (mm)
const MIN_DEVELOPMENT_LENGTH_MM: f64 = 300.0;

/// Absolute minimum clear spacing between bars (mm)
const MIN_CLEAR_SPACING_MM: f64 = 25.0;

// ============================================================================
// Stress block
// ============================================================================

/// Whitney stress block factor β₁.
///
/// 0.85 up to f'c = 28 MPa, reducing by 0.05 per 7 MPa above that, and
/// exactly 0.65 from f'c = 55 MPa upward.
///
/// # Example
///
/// ```rust
/// use footing_core::equations::concrete::beta1;
///
/// assert_eq!(beta1(28.0), 0.85);
/// assert!((beta1(40.0) - 0.7643).abs() < 1e-4);
/// assert_eq!(beta1(70.0), 0.65);
/// ```
pub fn beta1(fc_mpa: f64) -> f64 {
    if fc_mpa <= 28.0 {
        0.85
    } else if fc_mpa >= 55.0 {
        0.65
    } else {
        (0.85 - 0.05 * (fc_mpa - 28.0) / 7.0).max(0.65)
    }
}

/// Neutral axis depth ratio c/d at the tension-controlled strain limit
fn tension_controlled_depth_ratio() -> f64 {
    CONCRETE_ULTIMATE_STRAIN / (CONCRETE_ULTIMATE_STRAIN + TENSION_CONTROLLED_STRAIN)
}

/// Maximum tension-controlled reinforcement ratio ρ_max
pub fn max_reinforcement_ratio(fc_mpa: f64, fy_mpa: f64) -> f64 {
    0.85 * beta1(fc_mpa) * fc_mpa / fy_mpa * tension_controlled_depth_ratio()
}

// ============================================================================
// Flexure
// ============================================================================

/// Result of designing tension steel for a moment.
///
/// Infeasible outcomes are ordinary values, not errors: a pad that needs
/// compression steel simply fails its flexural check.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum FlexuralOutcome {
    /// Tension steel alone resists the moment within the tension-controlled limit
    Adequate {
        /// Required reinforcement ratio ρ
        rho_required: f64,
        /// Tension-controlled limit ρ_max
        rho_max: f64,
        /// Required steel area As = ρbd (mm²)
        as_required_mm2: f64,
    },
    /// 1 − 2Rn/(0.85f'c) < 0: the concrete cannot balance the moment
    CompressionReinforcementRequired {
        /// Flexural resistance factor Rn (MPa)
        rn_mpa: f64,
    },
    /// Required ρ exceeds the tension-controlled limit
    ExceedsMaximumReinforcement {
        rho_required: f64,
        rho_max: f64,
    },
    /// Width or effective depth is not positive
    InsufficientDepth {
        effective_depth_mm: f64,
    },
}

impl FlexuralOutcome {
    pub fn is_adequate(&self) -> bool {
        matches!(self, FlexuralOutcome::Adequate { .. })
    }

    /// Required steel area, when the section is adequate
    pub fn as_required(&self) -> Option<f64> {
        match self {
            FlexuralOutcome::Adequate { as_required_mm2, .. } => Some(*as_required_mm2),
            _ => None,
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FlexuralOutcome::Adequate { .. } => "Tension reinforcement adequate",
            FlexuralOutcome::CompressionReinforcementRequired { .. } => "Compression reinforcement required",
            FlexuralOutcome::ExceedsMaximumReinforcement { .. } => "Exceeds maximum reinforcement ratio",
            FlexuralOutcome::InsufficientDepth { .. } => "Effective depth is not positive",
        }
    }
}

/// Design tension steel for a factored moment (Whitney stress block).
///
/// * `mu_nmm` - factored moment Mu (N·mm)
/// * `b_mm`, `d_mm` - section width and effective depth
/// * `phi` - strength reduction factor (0.90 for tension-controlled flexure)
///
/// # Example
///
/// ```rust
/// use footing_core::equations::concrete::{flexural_design, FlexuralOutcome};
///
/// // 1000 mm strip, d = 317 mm, Mu = 150 kN·m
/// let outcome = flexural_design(150.0e6, 1000.0, 317.0, 30.0, 420.0, 0.9);
/// let as_req = outcome.as_required().unwrap();
/// assert!(as_req > 1200.0 && as_req < 1350.0);
///
/// // Shallow section under a large moment
/// let outcome = flexural_design(900.0e6, 1000.0, 150.0, 30.0, 420.0, 0.9);
/// assert!(matches!(outcome, FlexuralOutcome::CompressionReinforcementRequired { .. }));
/// ```
pub fn flexural_design(mu_nmm: f64, b_mm: f64, d_mm: f64, fc_mpa: f64, fy_mpa: f64, phi: f64) -> FlexuralOutcome {
    if !(d_mm > 0.0) || !(b_mm > 0.0) {
        return FlexuralOutcome::InsufficientDepth { effective_depth_mm: d_mm };
    }

    let mn_required = mu_nmm / phi;
    let rn = mn_required / (b_mm * d_mm * d_mm);

    let c_max = d_mm / (1.0 + TENSION_CONTROLLED_STRAIN / CONCRETE_ULTIMATE_STRAIN);
    let rho_max = 0.85 * beta1(fc_mpa) * fc_mpa / fy_mpa * c_max / d_mm;

    let discriminant = 1.0 - 2.0 * rn / (0.85 * fc_mpa);
    if discriminant < 0.0 {
        return FlexuralOutcome::CompressionReinforcementRequired { rn_mpa: rn };
    }

    let rho_required = (0.85 * fc_mpa / fy_mpa) * (1.0 - discriminant.sqrt());
    if rho_required > rho_max {
        return FlexuralOutcome::ExceedsMaximumReinforcement { rho_required, rho_max };
    }

    FlexuralOutcome::Adequate {
        rho_required,
        rho_max,
        as_required_mm2: rho_required * b_mm * d_mm,
    }
}

/// Minimum flexural steel: As_min = max(1.4bd/fy, √f'c·bd/(4fy)) (mm²)
pub fn minimum_flexural_steel(b_mm: f64, d_mm: f64, fc_mpa: f64, fy_mpa: f64) -> f64 {
    let basic = 1.4 * b_mm * d_mm / fy_mpa;
    let strength_based = fc_mpa.sqrt() * b_mm * d_mm / (4.0 * fy_mpa);
    basic.max(strength_based)
}

/// Maximum tension-controlled flexural steel As_max = ρ_max·b·d (mm²)
pub fn maximum_flexural_steel(b_mm: f64, d_mm: f64, fc_mpa: f64, fy_mpa: f64) -> f64 {
    let c = d_mm * tension_controlled_depth_ratio();
    let rho_max = 0.85 * beta1(fc_mpa) * fc_mpa / fy_mpa * c / d_mm;
    rho_max * b_mm * d_mm
}

/// Nominal moment capacity of a singly reinforced section (N·mm).
///
/// a = As·fy/(0.85f'c·b), Mn = As·fy(d − a/2). Returns 0 for a non-positive
/// width or depth.
pub fn nominal_moment_capacity(as_mm2: f64, b_mm: f64, d_mm: f64, fc_mpa: f64, fy_mpa: f64) -> f64 {
    if !(d_mm > 0.0) || !(b_mm > 0.0) || !(as_mm2 > 0.0) {
        return 0.0;
    }
    let a = as_mm2 * fy_mpa / (0.85 * fc_mpa * b_mm);
    (as_mm2 * fy_mpa * (d_mm - a / 2.0)).max(0.0)
}

// ============================================================================
// Shear
// ============================================================================

/// One-way shear strength Vc = 0.17λ√f'c·b·d (N), simplified method.
pub fn one_way_shear_strength(b_mm: f64, d_mm: f64, fc_mpa: f64, lambda: f64) -> f64 {
    if !(d_mm > 0.0) || !(b_mm > 0.0) {
        return 0.0;
    }
    0.17 * lambda * fc_mpa.sqrt() * b_mm * d_mm
}

/// Which of the three two-way shear equations governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PunchingGoverning {
    /// (2 + 4/βc) term, column aspect ratio
    AspectRatio,
    /// (αs·d/bo + 2) term, column location
    Location,
    /// Upper limit of 4
    Maximum,
}

impl PunchingGoverning {
    pub fn description(&self) -> &'static str {
        match self {
            PunchingGoverning::AspectRatio => "Column aspect ratio",
            PunchingGoverning::Location => "Column location",
            PunchingGoverning::Maximum => "Maximum strength",
        }
    }
}

/// Two-way shear strength candidates and the governing value (N).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PunchingShearStrength {
    /// (2 + 4/βc)λ√f'c·bo·d/6
    pub vc_aspect_ratio: f64,
    /// (αs·d/bo + 2)λ√f'c·bo·d/6
    pub vc_location: f64,
    /// 4λ√f'c·bo·d/6
    pub vc_maximum: f64,
    /// Smallest of the three
    pub vc: f64,
    pub governing: PunchingGoverning,
}

/// Two-way (punching) shear strength per ACI 318M 22.6.5.2.
///
/// The governing value is the minimum of the three equations; ties go to
/// the first in the order aspect ratio, location, maximum.
///
/// # Example
///
/// ```rust
/// use footing_core::equations::concrete::{punching_shear_strength, PunchingGoverning};
///
/// // Square interior column, thick slab: the cap of 4 governs
/// let s = punching_shear_strength(2800.0, 300.0, 30.0, 1.0, 40.0, 1.0);
/// assert_eq!(s.governing, PunchingGoverning::Maximum);
/// assert_eq!(s.vc, s.vc_maximum);
/// ```
pub fn punching_shear_strength(bo_mm: f64, d_mm: f64, fc_mpa: f64, beta_c: f64, alpha_s: f64, lambda: f64) -> PunchingShearStrength {
    if !(d_mm > 0.0) || !(bo_mm > 0.0) {
        return PunchingShearStrength {
            vc_aspect_ratio: 0.0,
            vc_location: 0.0,
            vc_maximum: 0.0,
            vc: 0.0,
            governing: PunchingGoverning::AspectRatio,
        };
    }

    let base = lambda * fc_mpa.sqrt() * bo_mm * d_mm / 6.0;
    let vc_aspect_ratio = (2.0 + 4.0 / beta_c) * base;
    let vc_location = (alpha_s * d_mm / bo_mm + 2.0) * base;
    let vc_maximum = 4.0 * base;

    let mut governing = PunchingGoverning::AspectRatio;
    let mut vc = vc_aspect_ratio;
    if vc_location < vc {
        governing = PunchingGoverning::Location;
        vc = vc_location;
    }
    if vc_maximum < vc {
        governing = PunchingGoverning::Maximum;
        vc = vc_maximum;
    }

    PunchingShearStrength {
        vc_aspect_ratio,
        vc_location,
        vc_maximum,
        vc,
        governing,
    }
}

/// Two-way shear critical section at d/2 from each column face.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CriticalSection {
    /// Section dimension along the column length, c1 + d (mm)
    pub b1_mm: f64,
    /// Section dimension along the column width, c2 + d (mm)
    pub b2_mm: f64,
    /// Perimeter bo = 2(b1 + b2) (mm)
    pub perimeter_mm: f64,
    /// Enclosed area b1·b2 (mm²)
    pub area_mm2: f64,
}

/// Critical section for punching around a rectangular column.
pub fn punching_critical_section(column_length_mm: f64, column_width_mm: f64, d_mm: f64) -> CriticalSection {
    let b1_mm = column_length_mm + d_mm;
    let b2_mm = column_width_mm + d_mm;
    CriticalSection {
        b1_mm,
        b2_mm,
        perimeter_mm: 2.0 * (b1_mm + b2_mm),
        area_mm2: b1_mm * b2_mm,
    }
}

/// Nominal punching stress on the column perimeter, Pu/(bo·d) (MPa).
///
/// `None` when the perimeter or depth is not positive.
pub fn column_face_punching_stress(pu_n: f64, column_perimeter_mm: f64, d_mm: f64) -> Option<f64> {
    let denominator = column_perimeter_mm * d_mm;
    if denominator > 0.0 {
        Some(pu_n / denominator)
    } else {
        None
    }
}

// ============================================================================
// Development and spacing
// ============================================================================

/// Tension development length of a deformed bar with its modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DevelopmentLength {
    /// fy·db/(2.1√f'c) (mm)
    pub basic_mm: f64,
    /// 1.0 with adequate cover and spacing, otherwise 1.3
    pub confinement_factor: f64,
    /// 1.0 for db ≤ 20 mm, otherwise 1.3
    pub size_factor: f64,
    /// Modified length before the minimums (mm)
    pub modified_mm: f64,
    /// max(modified, 300, 12db) (mm)
    pub required_mm: f64,
}

/// Tension development length per ACI 318M 25.4.2.
///
/// Bottom bars in uncoated normal-weight concrete are assumed, so the
/// casting-position and coating modifiers are 1.0.
///
/// # Example
///
/// ```rust
/// use footing_core::equations::concrete::development_length;
///
/// let ld = development_length(16.0, 420.0, 30.0, 75.0, 150.0);
/// assert_eq!(ld.confinement_factor, 1.0);
/// assert!((ld.required_mm - 584.24).abs() < 0.01);
/// ```
pub fn development_length(db_mm: f64, fy_mpa: f64, fc_mpa: f64, cover_mm: f64, spacing_mm: f64) -> DevelopmentLength {
    let basic_mm = fy_mpa * db_mm / (2.1 * fc_mpa.sqrt());

    let controlling = cover_mm.min(spacing_mm / 2.0);
    let confinement_factor = if controlling + db_mm / 2.0 >= 3.0 * db_mm { 1.0 } else { 1.3 };
    let size_factor = if db_mm <= 20.0 { 1.0 } else { 1.3 };
    let casting_position = 1.0;
    let coating = 1.0;

    let modified_mm = basic_mm * confinement_factor * casting_position * coating * size_factor;
    let required_mm = modified_mm.max(MIN_DEVELOPMENT_LENGTH_MM).max(12.0 * db_mm);

    DevelopmentLength {
        basic_mm,
        confinement_factor,
        size_factor,
        modified_mm,
        required_mm,
    }
}

/// Spacing limits for a bar layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarSpacingLimits {
    /// max(25, db, 4/3·aggregate) (mm)
    pub min_clear_spacing_mm: f64,
    /// Crack-control cap supplied by the caller (mm)
    pub max_spacing_mm: f64,
}

impl BarSpacingLimits {
    /// Whether a centre-to-centre spacing satisfies both limits for bar `db`
    pub fn permits(&self, spacing_mm: f64, db_mm: f64) -> bool {
        spacing_mm - db_mm >= self.min_clear_spacing_mm && spacing_mm <= self.max_spacing_mm
    }
}

/// Minimum clear spacing: max(25 mm, db, 4/3 of the aggregate size)
pub fn min_clear_spacing(db_mm: f64, aggregate_size_mm: f64) -> f64 {
    MIN_CLEAR_SPACING_MM.max(db_mm).max(4.0 / 3.0 * aggregate_size_mm)
}

/// Bar spacing limits. The maximum depends on the member and is passed in
/// (see [`crate::aci_factors::max_bar_spacing`]).
///
/// # Example
///
/// ```rust
/// use footing_core::aci_factors::max_bar_spacing;
/// use footing_core::equations::concrete::bar_spacing_limits;
///
/// let limits = bar_spacing_limits(16.0, None, max_bar_spacing(400.0));
/// assert!((limits.min_clear_spacing_mm - 26.667).abs() < 1e-3);
/// assert_eq!(limits.max_spacing_mm, 450.0);
/// assert!(limits.permits(200.0, 16.0));
/// ```
pub fn bar_spacing_limits(db_mm: f64, aggregate_size_mm: Option<f64>, max_spacing_mm: f64) -> BarSpacingLimits {
    let aggregate = aggregate_size_mm.unwrap_or(DEFAULT_AGGREGATE_SIZE_MM);
    BarSpacingLimits {
        min_clear_spacing_mm: min_clear_spacing(db_mm, aggregate),
        max_spacing_mm,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_beta1_breakpoints() {
        assert_eq!(beta1(20.0), 0.85);
        assert_eq!(beta1(28.0), 0.85);
        assert!((beta1(40.0) - (0.85 - 0.05 * 12.0 / 7.0)).abs() < 1e-12);
        assert!((beta1(40.0) - 0.7643).abs() < 1e-4);
        assert_eq!(beta1(55.0), 0.65);
        assert_eq!(beta1(83.0), 0.65);
    }

    #[test]
    fn test_beta1_monotone() {
        let mut previous = beta1(10.0);
        let mut fc = 10.0;
        while fc <= 90.0 {
            let b = beta1(fc);
            assert!(b <= previous, "beta1 increased at f'c = {}", fc);
            assert!(b >= 0.65);
            previous = b;
            fc += 0.5;
        }
    }

    #[test]
    fn test_flexural_design_adequate() {
        let outcome = flexural_design(150.0e6, 1000.0, 317.0, 30.0, 420.0, 0.9);
        match outcome {
            FlexuralOutcome::Adequate { rho_required, rho_max, as_required_mm2 } => {
                assert!(rho_required < rho_max);
                assert!((as_required_mm2 - rho_required * 1000.0 * 317.0).abs() < 1e-9);
                // Capacity of the required steel recovers Mu/φ
                let mn = nominal_moment_capacity(as_required_mm2, 1000.0, 317.0, 30.0, 420.0);
                assert!((mn - 150.0e6 / 0.9).abs() / mn < 1e-9);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_flexural_design_zero_discriminant() {
        // Mu chosen so that 2Rn/(0.85f'c) is exactly 1
        let fc = 30.0;
        let fy = 420.0;
        let mu = 0.85 * fc / 2.0;
        let outcome = flexural_design(mu, 1.0, 1.0, fc, fy, 1.0);
        match outcome {
            FlexuralOutcome::CompressionReinforcementRequired { .. } => {
                panic!("zero discriminant misclassified as compression steel")
            }
            FlexuralOutcome::ExceedsMaximumReinforcement { rho_required, .. } => {
                assert!((rho_required - 0.85 * fc / fy).abs() < 1e-15);
            }
            FlexuralOutcome::Adequate { rho_required, .. } => {
                assert!((rho_required - 0.85 * fc / fy).abs() < 1e-15);
            }
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_flexural_design_exceeds_max() {
        // Between the tension-controlled limit and the compression-steel limit
        let b = 1000.0;
        let d = 300.0;
        let rho = 0.9 * 0.85 * 30.0 / 420.0;
        let rn = rho * 420.0 * (1.0 - rho * 420.0 / (1.7 * 30.0));
        let mu = rn * b * d * d * 0.9;
        let outcome = flexural_design(mu, b, d, 30.0, 420.0, 0.9);
        assert!(matches!(outcome, FlexuralOutcome::ExceedsMaximumReinforcement { .. }));
        assert!(!outcome.is_adequate());
        assert!(outcome.as_required().is_none());
    }

    #[test]
    fn test_flexural_design_insufficient_depth() {
        let outcome = flexural_design(1.0e6, 1000.0, 0.0, 30.0, 420.0, 0.9);
        assert_eq!(outcome, FlexuralOutcome::InsufficientDepth { effective_depth_mm: 0.0 });
        let outcome = flexural_design(1.0e6, 1000.0, -20.0, 30.0, 420.0, 0.9);
        assert!(matches!(outcome, FlexuralOutcome::InsufficientDepth { .. }));
    }

    #[test]
    fn test_zero_moment_needs_no_steel() {
        let outcome = flexural_design(0.0, 1000.0, 300.0, 30.0, 420.0, 0.9);
        assert_eq!(outcome.as_required(), Some(0.0));
    }

    #[test]
    fn test_minimum_steel_scaling() {
        let base = minimum_flexural_steel(1000.0, 300.0, 30.0, 420.0);
        let wide = minimum_flexural_steel(2000.0, 300.0, 30.0, 420.0);
        assert!((wide - 2.0 * base).abs() < 1e-9);
        // 1.4bd/fy governs below f'c ≈ 31.4 MPa
        assert!((base - 1.4 * 1000.0 * 300.0 / 420.0).abs() < 1e-9);
        let half_fy = minimum_flexural_steel(1000.0, 300.0, 30.0, 210.0);
        assert!((half_fy - 2.0 * base).abs() < 1e-9);
    }

    #[test]
    fn test_minimum_steel_high_strength_concrete() {
        let as_min = minimum_flexural_steel(1000.0, 300.0, 49.0, 420.0);
        assert!((as_min - 7.0 * 1000.0 * 300.0 / (4.0 * 420.0)).abs() < 1e-9);
    }

    #[test]
    fn test_maximum_steel() {
        let as_max = maximum_flexural_steel(1000.0, 300.0, 28.0, 420.0);
        let expected = 0.85 * 0.85 * 28.0 / 420.0 * 0.375 * 1000.0 * 300.0;
        assert!((as_max - expected).abs() < 1e-6);
        assert!((max_reinforcement_ratio(28.0, 420.0) * 1000.0 * 300.0 - as_max).abs() < 1e-6);
    }

    #[test]
    fn test_one_way_shear() {
        let vc = one_way_shear_strength(2500.0, 317.0, 30.0, 1.0);
        assert!((vc - 0.17 * 30.0_f64.sqrt() * 2500.0 * 317.0).abs() < 1e-6);
        assert_eq!(one_way_shear_strength(2500.0, 0.0, 30.0, 1.0), 0.0);
        let lightweight = one_way_shear_strength(2500.0, 317.0, 30.0, 0.75);
        assert!((lightweight - 0.75 * vc).abs() < 1e-6);
    }

    #[test]
    fn test_punching_aspect_ratio_governs() {
        // βc = 4 gives 3; αs·d/bo + 2 = 40·200/2000 + 2 = 6
        let s = punching_shear_strength(2000.0, 200.0, 30.0, 4.0, 40.0, 1.0);
        assert_eq!(s.governing, PunchingGoverning::AspectRatio);
        assert_eq!(s.vc, s.vc_aspect_ratio);
    }

    #[test]
    fn test_punching_location_governs() {
        // 40·50/4000 + 2 = 2.5
        let s = punching_shear_strength(4000.0, 50.0, 30.0, 1.0, 40.0, 1.0);
        assert_eq!(s.governing, PunchingGoverning::Location);
        assert_eq!(s.vc, s.vc_location);
    }

    #[test]
    fn test_punching_maximum_governs() {
        // 40·400/1600 + 2 = 12, βc = 1 gives 6
        let s = punching_shear_strength(1600.0, 400.0, 30.0, 1.0, 40.0, 1.0);
        assert_eq!(s.governing, PunchingGoverning::Maximum);
        let expected = 4.0 * 30.0_f64.sqrt() * 1600.0 * 400.0 / 6.0;
        assert!((s.vc - expected).abs() < 1e-6);
    }

    #[test]
    fn test_punching_ties_resolve_in_order() {
        // βc = 2: aspect ratio term equals the cap of 4
        let s = punching_shear_strength(1600.0, 400.0, 30.0, 2.0, 40.0, 1.0);
        assert_eq!(s.vc_aspect_ratio, s.vc_maximum);
        assert_eq!(s.governing, PunchingGoverning::AspectRatio);

        // αs·d/bo = 40·100/2000 = 2: location term equals the cap
        let s = punching_shear_strength(2000.0, 100.0, 30.0, 1.0, 40.0, 1.0);
        assert_eq!(s.vc_location, s.vc_maximum);
        assert_eq!(s.governing, PunchingGoverning::Location);
    }

    #[test]
    fn test_punching_zero_depth() {
        let s = punching_shear_strength(2000.0, 0.0, 30.0, 1.0, 40.0, 1.0);
        assert_eq!(s.vc, 0.0);
    }

    #[test]
    fn test_critical_section() {
        let cs = punching_critical_section(400.0, 300.0, 309.0);
        assert_eq!(cs.b1_mm, 709.0);
        assert_eq!(cs.b2_mm, 609.0);
        assert_eq!(cs.perimeter_mm, 2636.0);
        assert_eq!(cs.area_mm2, 709.0 * 609.0);
    }

    #[test]
    fn test_column_face_stress() {
        let stress = column_face_punching_stress(1_600_000.0, 1600.0, 317.0).unwrap();
        assert!((stress - 1_600_000.0 / (1600.0 * 317.0)).abs() < 1e-12);
        assert!(column_face_punching_stress(1.0, 1600.0, 0.0).is_none());
    }

    #[test]
    fn test_development_length_modifiers() {
        // 25 mm bar: size factor applies, cover still adequate
        let ld = development_length(25.0, 420.0, 30.0, 75.0, 150.0);
        assert_eq!(ld.confinement_factor, 1.0);
        assert_eq!(ld.size_factor, 1.3);
        assert!((ld.required_mm - 1.3 * 420.0 * 25.0 / (2.1 * 30.0_f64.sqrt())).abs() < 1e-9);

        // Tight spacing triggers the 1.3 confinement factor
        let ld = development_length(32.0, 420.0, 30.0, 75.0, 100.0);
        assert_eq!(ld.confinement_factor, 1.3);
        assert!((ld.modified_mm - ld.basic_mm * 1.69).abs() < 1e-9);
    }

    #[test]
    fn test_development_length_minimums() {
        // Small bar, strong concrete: 300 mm floor governs
        let ld = development_length(10.0, 280.0, 60.0, 75.0, 150.0);
        assert!(ld.modified_mm < 300.0);
        assert_eq!(ld.required_mm, 300.0);
    }

    #[test]
    fn test_spacing_limits() {
        assert_eq!(min_clear_spacing(12.0, 15.0), 25.0);
        assert_eq!(min_clear_spacing(32.0, 20.0), 32.0);
        assert!((min_clear_spacing(16.0, 30.0) - 40.0).abs() < 1e-12);

        let limits = bar_spacing_limits(20.0, Some(20.0), 300.0);
        assert!(!limits.permits(40.0, 20.0));
        assert!(!limits.permits(350.0, 20.0));
        assert!(limits.permits(150.0, 20.0));
    }

    #[test]
    fn test_outcome_serialization() {
        let outcome = FlexuralOutcome::CompressionReinforcementRequired { rn_mpa: 14.2 };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("\"outcome\":\"compression_reinforcement_required\""));
        let roundtrip: FlexuralOutcome = serde_json::from_str(&json).unwrap();
        assert_eq!(outcome, roundtrip);

        let json = serde_json::to_string(&PunchingGoverning::AspectRatio).unwrap();
        assert_eq!(json, "\"ASPECT_RATIO\"");
    }
}
