//! # Equation Registry
//!
//! Central registry of the code equations used in pad foundation design.
//! Each equation has metadata including code references, formulas, and variable definitions.
//!
//! ## Architecture
//!
//! The registry provides:
//! - Type-safe equation identification via the `Equation` enum
//! - Full metadata for reports and audit trails
//! - Serialization support for JSON export
//!
//! ## Usage
//!
//! ```rust
//! use footing_core::equations::registry::{Equation, EquationTracker};
//!
//! // Track equation usage during a design
//! let mut tracker = EquationTracker::new();
//! tracker.record_for_member(Equation::FlexuralDesign, "Face moment", "x-direction");
//!
//! // Get metadata for the report
//! let meta = Equation::FlexuralDesign.metadata();
//! assert!(meta.formula_plain.contains("Rn"));
//! ```

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

// ============================================================================
// Code References
// ============================================================================

/// Reference to a structural engineering code or standard.
///
/// All equations should cite their source for auditability.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CodeReference {
    /// ACI 318M - Building Code Requirements for Structural Concrete (metric)
    ACI318 {
        year: u16,
        section: &'static str,
    },
    /// Fundamental mechanics (no specific code reference needed)
    Mechanics,
}

impl CodeReference {
    /// Format the reference for display in reports
    pub fn citation(&self) -> String {
        match self {
            CodeReference::ACI318 { year, section } => {
                format!("ACI 318M-{} Section {}", year % 100, section)
            }
            CodeReference::Mechanics => "Fundamental Mechanics".to_string(),
        }
    }

    /// Short form for inline references
    pub fn short_form(&self) -> &'static str {
        match self {
            CodeReference::ACI318 { .. } => "ACI 318M",
            CodeReference::Mechanics => "Mechanics",
        }
    }
}

const fn aci(section: &'static str) -> CodeReference {
    CodeReference::ACI318 { year: 2025, section }
}

// ============================================================================
// Equation Categories
// ============================================================================

/// Categories for organizing equations in the reference document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EquationCategory {
    /// Load combinations and foundation self-load
    Loads,
    /// Soil bearing pressure
    Bearing,
    /// Flexural demand and reinforcement
    Flexure,
    /// Beam (one-way) shear
    OneWayShear,
    /// Punching (two-way) shear
    TwoWayShear,
    /// Development length and bar spacing
    Detailing,
    /// Demand/capacity checks
    DesignChecks,
}

impl EquationCategory {
    /// Display name for the category
    pub fn display_name(&self) -> &'static str {
        match self {
            EquationCategory::Loads => "Loads",
            EquationCategory::Bearing => "Bearing",
            EquationCategory::Flexure => "Flexure",
            EquationCategory::OneWayShear => "One-Way Shear",
            EquationCategory::TwoWayShear => "Two-Way Shear",
            EquationCategory::Detailing => "Detailing",
            EquationCategory::DesignChecks => "Design Checks",
        }
    }

    /// Sort order for the reference document (lower = earlier)
    pub fn sort_order(&self) -> u8 {
        match self {
            EquationCategory::Loads => 1,
            EquationCategory::Bearing => 2,
            EquationCategory::Flexure => 3,
            EquationCategory::OneWayShear => 4,
            EquationCategory::TwoWayShear => 5,
            EquationCategory::Detailing => 6,
            EquationCategory::DesignChecks => 7,
        }
    }
}

// ============================================================================
// Variable Definition
// ============================================================================

/// Definition of a variable used in an equation.
#[derive(Debug, Clone)]
pub struct Variable {
    /// Symbol (e.g., "Mu", "d", "f'c")
    pub symbol: &'static str,
    /// Description
    pub description: &'static str,
    /// Units (e.g., "kN·m", "mm", "MPa")
    pub units: &'static str,
}

impl Variable {
    pub const fn new(symbol: &'static str, description: &'static str, units: &'static str) -> Self {
        Self { symbol, description, units }
    }
}

// ============================================================================
// Equation Metadata
// ============================================================================

/// Complete metadata for a code equation.
#[derive(Debug, Clone)]
pub struct EquationMetadata {
    /// Human-readable name (e.g., "Required Flexural Reinforcement")
    pub name: &'static str,
    /// Brief description of what this equation calculates
    pub description: &'static str,
    /// The formula in plain text for markdown
    pub formula_plain: &'static str,
    /// Code/standard reference
    pub reference: CodeReference,
    /// Variable definitions
    pub variables: Vec<Variable>,
    /// Assumptions or limitations
    pub assumptions: Vec<&'static str>,
    /// Category for grouping
    pub category: EquationCategory,
    /// Source module where the equation implementation lives
    pub source_module: &'static str,
    /// Function name implementing the equation (for linking)
    pub source_function: &'static str,
}

// ============================================================================
// Equation Enum
// ============================================================================

/// All code equations used in pad foundation design.
///
/// Each variant maps to a specific formula with full metadata.
/// This enum is the primary interface for equation tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Equation {
    // -------------------------------------------------------------------------
    // Loads
    // -------------------------------------------------------------------------
    /// U = max over the ACI 318M strength combinations
    StrengthCombination,
    /// W = A·h·γc
    FoundationSelfWeight,
    /// W = A·hs·γs
    SoilSurcharge,
    /// e = (M + H·h)/P
    LoadEccentricity,

    // -------------------------------------------------------------------------
    // Bearing
    // -------------------------------------------------------------------------
    /// q = P/A
    BearingPressure,
    /// q/qa <= 1
    BearingUtilization,

    // -------------------------------------------------------------------------
    // Flexure
    // -------------------------------------------------------------------------
    /// d = h - cover - db/2 (stacked layers)
    EffectiveDepth,
    /// Mu at column face
    FaceMoment,
    /// β1(f'c)
    StressBlockFactor,
    /// ρ from Rn
    FlexuralDesign,
    /// As,min
    MinimumFlexuralSteel,
    /// As,max at εt = 0.005
    MaximumFlexuralSteel,
    /// Mn = As·fy(d - a/2)
    NominalMomentCapacity,

    // -------------------------------------------------------------------------
    // One-way shear
    // -------------------------------------------------------------------------
    /// Vu beyond d from the face
    OneWayShearDemand,
    /// Vc = 0.17λ√f'c·b·d
    OneWayShearStrength,

    // -------------------------------------------------------------------------
    // Two-way shear
    // -------------------------------------------------------------------------
    /// bo and enclosed area at d/2
    PunchingCriticalSection,
    /// Vu = Pu - q·A_crit
    PunchingShearDemand,
    /// Vc1, column aspect ratio limit
    PunchingShearAspectRatio,
    /// Vc2, column location limit
    PunchingShearLocation,
    /// Vc3, upper limit
    PunchingShearMaximum,
    /// vu = Pu/(b_col·d)
    ColumnFacePunchingStress,

    // -------------------------------------------------------------------------
    // Detailing
    // -------------------------------------------------------------------------
    /// ld for deformed bars in tension
    DevelopmentLength,
    /// Minimum clear bar spacing
    MinimumClearSpacing,
    /// Crack-control spacing cap
    MaximumBarSpacing,

    // -------------------------------------------------------------------------
    // Checks
    // -------------------------------------------------------------------------
    /// Demand / φ·Rn
    DemandCapacityRatio,
}

impl Equation {
    /// Get the full metadata for this equation
    pub fn metadata(&self) -> EquationMetadata {
        match self {
            // Loads
            Equation::StrengthCombination => EquationMetadata {
                name: "Strength Load Combinations",
                description: "Governing factored column load over the strength envelope; D includes pad self-weight and soil surcharge",
                formula_plain: "U = max(1.2D+1.6L, 1.2D+1.6L+0.5W, 1.2D+1.0W+1.0L, 0.9D+1.0W, 1.2D+1.0L+1.0E, 0.9D+1.0E)",
                reference: aci("5.3.1"),
                variables: vec![
                    Variable::new("U", "Factored load effect", "kN or kN·m"),
                    Variable::new("D", "Dead load effect", "kN or kN·m"),
                    Variable::new("L", "Live load effect", "kN or kN·m"),
                    Variable::new("W", "Wind load effect", "kN or kN·m"),
                    Variable::new("E", "Seismic load effect", "kN or kN·m"),
                ],
                assumptions: vec![
                    "Axial load governs by maximum value",
                    "Horizontal forces and moments govern by maximum magnitude, sign kept",
                    "Ties resolve to the first combination in order",
                ],
                category: EquationCategory::Loads,
                source_module: "loads/combinations.rs",
                source_function: "aci318_strength_combinations",
            },

            Equation::FoundationSelfWeight => EquationMetadata {
                name: "Foundation Self-Weight",
                description: "Weight of the concrete pad",
                formula_plain: "Wc = L * B * h * gamma_c",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("L", "Foundation length", "m"),
                    Variable::new("B", "Foundation width", "m"),
                    Variable::new("h", "Foundation thickness", "m"),
                    Variable::new("gamma_c", "Concrete unit weight", "kN/m³"),
                ],
                assumptions: vec!["Treated as dead load acting on the axial component"],
                category: EquationCategory::Loads,
                source_module: "loads/mod.rs",
                source_function: "FoundationSelfLoad::self_weight",
            },

            Equation::SoilSurcharge => EquationMetadata {
                name: "Soil Surcharge",
                description: "Weight of backfill above the pad",
                formula_plain: "Ws = L * B * hs * gamma_s",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("hs", "Soil depth above the pad", "m"),
                    Variable::new("gamma_s", "Soil unit weight", "kN/m³"),
                ],
                assumptions: vec![
                    "Column footprint is not deducted",
                    "Treated as dead load acting on the axial component",
                ],
                category: EquationCategory::Loads,
                source_module: "loads/mod.rs",
                source_function: "FoundationSelfLoad::surcharge",
            },

            Equation::LoadEccentricity => EquationMetadata {
                name: "Load Eccentricity",
                description: "Offset of the resultant from the footprint centroid at the base",
                formula_plain: "e = (M + H * h) / P",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("e", "Eccentricity", "m"),
                    Variable::new("M", "Column moment", "kN·m"),
                    Variable::new("H", "Column horizontal force", "kN"),
                    Variable::new("h", "Foundation thickness", "m"),
                    Variable::new("P", "Axial load", "kN"),
                ],
                assumptions: vec!["Undefined when P = 0", "Kern limit |e| <= L/6"],
                category: EquationCategory::Loads,
                source_module: "calculations/pad_foundation.rs",
                source_function: "PadFoundation::eccentricity",
            },

            // Bearing
            Equation::BearingPressure => EquationMetadata {
                name: "Bearing Pressure",
                description: "Average soil pressure under a concentrically loaded pad",
                formula_plain: "q = P / (L * B)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("q", "Bearing pressure", "kPa"),
                    Variable::new("P", "Column load plus self-weight and surcharge", "kN"),
                    Variable::new("L * B", "Footprint area", "m²"),
                ],
                assumptions: vec!["Uniform pressure (concentric load)", "Rigid pad"],
                category: EquationCategory::Bearing,
                source_module: "equations/footing.rs",
                source_function: "bearing_pressure",
            },

            Equation::BearingUtilization => EquationMetadata {
                name: "Bearing Utilization",
                description: "Service bearing pressure against allowable soil capacity",
                formula_plain: "q_service / q_allow <= 1.0",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("q_service", "Unfactored bearing pressure", "kPa"),
                    Variable::new("q_allow", "Allowable soil bearing capacity", "kPa"),
                ],
                assumptions: vec!["Allowable stress basis, no load factors"],
                category: EquationCategory::Bearing,
                source_module: "calculations/pad_foundation.rs",
                source_function: "PadFoundation::bearing_pressure_check",
            },

            // Flexure
            Equation::EffectiveDepth => EquationMetadata {
                name: "Effective Depth",
                description: "Depth to the centroid of each bottom bar layer",
                formula_plain: "dx = h - cover - dbx/2, dy = h - cover - dbx - dby/2",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("h", "Foundation thickness", "mm"),
                    Variable::new("cover", "Clear cover", "mm"),
                    Variable::new("dbx", "x-direction bar diameter", "mm"),
                    Variable::new("dby", "y-direction bar diameter", "mm"),
                ],
                assumptions: vec!["x-direction bars form the bottom layer", "Two-way shear uses (dx + dy)/2"],
                category: EquationCategory::Flexure,
                source_module: "equations/footing.rs",
                source_function: "effective_depths",
            },

            Equation::FaceMoment => EquationMetadata {
                name: "Moment at Column Face",
                description: "Cantilever moment of the bearing pressure beyond the column face",
                formula_plain: "Mu = qu * B * Lc^2 / 2",
                reference: aci("13.2.7.1"),
                variables: vec![
                    Variable::new("Mu", "Factored moment", "kN·m"),
                    Variable::new("qu", "Factored bearing pressure", "kPa"),
                    Variable::new("B", "Section width", "m"),
                    Variable::new("Lc", "Overhang beyond the column face", "m"),
                ],
                assumptions: vec!["Both faces evaluated, larger governs", "Uniform pressure closed form shown"],
                category: EquationCategory::Flexure,
                source_module: "equations/footing.rs",
                source_function: "face_moment",
            },

            Equation::StressBlockFactor => EquationMetadata {
                name: "Stress Block Depth Factor",
                description: "Ratio of Whitney stress block depth to neutral axis depth",
                formula_plain: "beta1 = 0.85 (f'c <= 28), 0.85 - 0.05(f'c - 28)/7, 0.65 (f'c >= 55)",
                reference: aci("22.2.2.4.3"),
                variables: vec![
                    Variable::new("beta1", "Stress block factor", "-"),
                    Variable::new("f'c", "Concrete compressive strength", "MPa"),
                ],
                assumptions: vec![],
                category: EquationCategory::Flexure,
                source_module: "equations/concrete.rs",
                source_function: "beta1",
            },

            Equation::FlexuralDesign => EquationMetadata {
                name: "Required Flexural Reinforcement",
                description: "Tension steel ratio for a singly reinforced rectangular section",
                formula_plain: "Rn = Mu/(phi * b * d^2), rho = (0.85 f'c/fy)(1 - sqrt(1 - 2Rn/(0.85 f'c)))",
                reference: aci("22.2"),
                variables: vec![
                    Variable::new("Rn", "Strength coefficient", "MPa"),
                    Variable::new("rho", "Reinforcement ratio", "-"),
                    Variable::new("b", "Section width", "mm"),
                    Variable::new("d", "Effective depth", "mm"),
                    Variable::new("fy", "Steel yield strength", "MPa"),
                ],
                assumptions: vec![
                    "Negative discriminant: compression reinforcement required",
                    "rho above the tension-controlled limit: section fails",
                ],
                category: EquationCategory::Flexure,
                source_module: "equations/concrete.rs",
                source_function: "flexural_design",
            },

            Equation::MinimumFlexuralSteel => EquationMetadata {
                name: "Minimum Flexural Reinforcement",
                description: "Lower bound on tension steel area",
                formula_plain: "As,min = max(1.4 b d / fy, sqrt(f'c) b d / (4 fy))",
                reference: aci("9.6.1.2"),
                variables: vec![
                    Variable::new("As,min", "Minimum steel area", "mm²"),
                ],
                assumptions: vec![],
                category: EquationCategory::Flexure,
                source_module: "equations/concrete.rs",
                source_function: "minimum_flexural_steel",
            },

            Equation::MaximumFlexuralSteel => EquationMetadata {
                name: "Maximum Flexural Reinforcement",
                description: "Steel area at the tension-controlled strain limit",
                formula_plain: "c/d = 0.003/(0.003 + 0.005), As,max = 0.85 beta1 (f'c/fy)(c/d) b d",
                reference: aci("21.2.2"),
                variables: vec![
                    Variable::new("c", "Neutral axis depth", "mm"),
                    Variable::new("As,max", "Maximum steel area", "mm²"),
                ],
                assumptions: vec!["Net tensile strain 0.005"],
                category: EquationCategory::Flexure,
                source_module: "equations/concrete.rs",
                source_function: "maximum_flexural_steel",
            },

            Equation::NominalMomentCapacity => EquationMetadata {
                name: "Nominal Moment Capacity",
                description: "Moment capacity of a provided steel area (Whitney stress block)",
                formula_plain: "a = As fy / (0.85 f'c b), Mn = As fy (d - a/2)",
                reference: aci("22.2"),
                variables: vec![
                    Variable::new("a", "Stress block depth", "mm"),
                    Variable::new("As", "Provided steel area", "mm²"),
                    Variable::new("Mn", "Nominal moment", "N·mm"),
                ],
                assumptions: vec!["Steel yields"],
                category: EquationCategory::Flexure,
                source_module: "equations/concrete.rs",
                source_function: "nominal_moment_capacity",
            },

            // One-way shear
            Equation::OneWayShearDemand => EquationMetadata {
                name: "One-Way Shear Demand",
                description: "Bearing force beyond a section at d from the column face",
                formula_plain: "Vu = qu * B * max(Lc - d, 0)",
                reference: aci("13.2.7.2"),
                variables: vec![
                    Variable::new("Vu", "Factored shear", "kN"),
                    Variable::new("Lc", "Overhang beyond the column face", "m"),
                    Variable::new("d", "Effective depth", "m"),
                ],
                assumptions: vec!["Zero when the section falls outside the footprint"],
                category: EquationCategory::OneWayShear,
                source_module: "equations/footing.rs",
                source_function: "one_way_shear_demand",
            },

            Equation::OneWayShearStrength => EquationMetadata {
                name: "One-Way Shear Strength",
                description: "Concrete beam shear strength, simplified method",
                formula_plain: "Vc = 0.17 lambda sqrt(f'c) b d",
                reference: aci("22.5.5.1"),
                variables: vec![
                    Variable::new("Vc", "Nominal shear strength", "N"),
                    Variable::new("lambda", "Lightweight concrete factor", "-"),
                ],
                assumptions: vec!["No shear reinforcement"],
                category: EquationCategory::OneWayShear,
                source_module: "equations/concrete.rs",
                source_function: "one_way_shear_strength",
            },

            // Two-way shear
            Equation::PunchingCriticalSection => EquationMetadata {
                name: "Punching Critical Section",
                description: "Perimeter and enclosed area at d/2 from the column faces",
                formula_plain: "b1 = c1 + d, b2 = c2 + d, bo = 2(b1 + b2)",
                reference: aci("22.6.4.1"),
                variables: vec![
                    Variable::new("c1, c2", "Column dimensions", "mm"),
                    Variable::new("bo", "Critical perimeter", "mm"),
                ],
                assumptions: vec!["Rectangular column"],
                category: EquationCategory::TwoWayShear,
                source_module: "equations/concrete.rs",
                source_function: "punching_critical_section",
            },

            Equation::PunchingShearDemand => EquationMetadata {
                name: "Punching Shear Demand",
                description: "Column load less the bearing reaction inside the critical section",
                formula_plain: "Vu = Pu - qu * b1 * b2",
                reference: aci("22.6.4.1"),
                variables: vec![
                    Variable::new("Pu", "Factored column load", "kN"),
                    Variable::new("qu", "Factored bearing pressure", "kPa"),
                ],
                assumptions: vec!["Enclosed area clipped to the footprint", "Never negative"],
                category: EquationCategory::TwoWayShear,
                source_module: "equations/footing.rs",
                source_function: "punching_shear_demand",
            },

            Equation::PunchingShearAspectRatio => EquationMetadata {
                name: "Punching Strength, Aspect Ratio Limit",
                description: "Two-way shear strength governed by column aspect ratio",
                formula_plain: "Vc1 = (2 + 4/beta_c) lambda sqrt(f'c) bo d / 6",
                reference: aci("22.6.5.2"),
                variables: vec![
                    Variable::new("beta_c", "Long over short column side", "-"),
                ],
                assumptions: vec![],
                category: EquationCategory::TwoWayShear,
                source_module: "equations/concrete.rs",
                source_function: "punching_shear_strength",
            },

            Equation::PunchingShearLocation => EquationMetadata {
                name: "Punching Strength, Location Limit",
                description: "Two-way shear strength governed by column location",
                formula_plain: "Vc2 = (alpha_s d / bo + 2) lambda sqrt(f'c) bo d / 6",
                reference: aci("22.6.5.2"),
                variables: vec![
                    Variable::new("alpha_s", "40 interior, 30 edge, 20 corner", "-"),
                ],
                assumptions: vec!["Interior column"],
                category: EquationCategory::TwoWayShear,
                source_module: "equations/concrete.rs",
                source_function: "punching_shear_strength",
            },

            Equation::PunchingShearMaximum => EquationMetadata {
                name: "Punching Strength, Upper Limit",
                description: "Upper limit on two-way shear strength; the least of the three governs",
                formula_plain: "Vc3 = 4 lambda sqrt(f'c) bo d / 6, Vc = min(Vc1, Vc2, Vc3)",
                reference: aci("22.6.5.2"),
                variables: vec![
                    Variable::new("Vc", "Nominal two-way shear strength", "N"),
                ],
                assumptions: vec!["Ties resolve in the order Vc1, Vc2, Vc3"],
                category: EquationCategory::TwoWayShear,
                source_module: "equations/concrete.rs",
                source_function: "punching_shear_strength",
            },

            Equation::ColumnFacePunchingStress => EquationMetadata {
                name: "Column Face Punching Stress",
                description: "Nominal shear stress on the column perimeter",
                formula_plain: "vu = Pu / (b_col * d)",
                reference: CodeReference::Mechanics,
                variables: vec![
                    Variable::new("vu", "Shear stress", "MPa"),
                    Variable::new("b_col", "Column perimeter", "mm"),
                ],
                assumptions: vec!["Informational only"],
                category: EquationCategory::TwoWayShear,
                source_module: "equations/concrete.rs",
                source_function: "column_face_punching_stress",
            },

            // Detailing
            Equation::DevelopmentLength => EquationMetadata {
                name: "Tension Development Length",
                description: "Development length of deformed bars in tension",
                formula_plain: "ld = max(fy db / (2.1 sqrt(f'c)) * psi_c * psi_s, 300, 12 db)",
                reference: aci("25.4.2"),
                variables: vec![
                    Variable::new("ld", "Development length", "mm"),
                    Variable::new("db", "Bar diameter", "mm"),
                    Variable::new("psi_c", "1.0 if min(cover, s/2) + db/2 >= 3db, else 1.3", "-"),
                    Variable::new("psi_s", "1.3 for db > 20 mm, else 1.0", "-"),
                ],
                assumptions: vec!["Bottom bars", "Uncoated bars", "Reported, not checked"],
                category: EquationCategory::Detailing,
                source_module: "equations/concrete.rs",
                source_function: "development_length",
            },

            Equation::MinimumClearSpacing => EquationMetadata {
                name: "Minimum Clear Spacing",
                description: "Least clear distance between parallel bars",
                formula_plain: "s_min = max(25, db, 4/3 * dagg)",
                reference: aci("25.2.1"),
                variables: vec![
                    Variable::new("dagg", "Nominal maximum aggregate size", "mm"),
                ],
                assumptions: vec!["20 mm aggregate when not given"],
                category: EquationCategory::Detailing,
                source_module: "equations/concrete.rs",
                source_function: "min_clear_spacing",
            },

            Equation::MaximumBarSpacing => EquationMetadata {
                name: "Maximum Bar Spacing",
                description: "Crack-control cap on bar spacing in the pad",
                formula_plain: "s_max = min(3h, 450)",
                reference: aci("7.7.2.3"),
                variables: vec![
                    Variable::new("h", "Foundation thickness", "mm"),
                ],
                assumptions: vec![],
                category: EquationCategory::Detailing,
                source_module: "aci_factors.rs",
                source_function: "max_bar_spacing",
            },

            // Checks
            Equation::DemandCapacityRatio => EquationMetadata {
                name: "Demand/Capacity Ratio",
                description: "Applied effect over design strength",
                formula_plain: "ratio = demand / (phi * Rn) <= 1.0",
                reference: aci("21.2.1"),
                variables: vec![
                    Variable::new("phi", "Strength reduction factor", "-"),
                    Variable::new("Rn", "Nominal strength", "varies"),
                ],
                assumptions: vec!["Undefined ratio (zero design strength) fails"],
                category: EquationCategory::DesignChecks,
                source_module: "calculations/checks.rs",
                source_function: "SectionCheckResult::new",
            },
        }
    }

    /// Get all equations in a given category
    pub fn in_category(category: EquationCategory) -> Vec<Equation> {
        ALL_EQUATIONS
            .iter()
            .filter(|eq| eq.metadata().category == category)
            .copied()
            .collect()
    }

    /// Get all categories that contain at least one equation
    pub fn all_categories() -> Vec<EquationCategory> {
        use EquationCategory::*;
        let mut cats = vec![Loads, Bearing, Flexure, OneWayShear, TwoWayShear, Detailing, DesignChecks];
        cats.sort_by_key(|c| c.sort_order());
        cats
    }
}

/// All equations in the registry (for iteration)
pub static ALL_EQUATIONS: &[Equation] = &[
    // Loads
    Equation::StrengthCombination,
    Equation::FoundationSelfWeight,
    Equation::SoilSurcharge,
    Equation::LoadEccentricity,
    // Bearing
    Equation::BearingPressure,
    Equation::BearingUtilization,
    // Flexure
    Equation::EffectiveDepth,
    Equation::FaceMoment,
    Equation::StressBlockFactor,
    Equation::FlexuralDesign,
    Equation::MinimumFlexuralSteel,
    Equation::MaximumFlexuralSteel,
    Equation::NominalMomentCapacity,
    // One-way shear
    Equation::OneWayShearDemand,
    Equation::OneWayShearStrength,
    // Two-way shear
    Equation::PunchingCriticalSection,
    Equation::PunchingShearDemand,
    Equation::PunchingShearAspectRatio,
    Equation::PunchingShearLocation,
    Equation::PunchingShearMaximum,
    Equation::ColumnFacePunchingStress,
    // Detailing
    Equation::DevelopmentLength,
    Equation::MinimumClearSpacing,
    Equation::MaximumBarSpacing,
    // Checks
    Equation::DemandCapacityRatio,
];

// ============================================================================
// Equation Usage Tracking
// ============================================================================

/// Record of an equation being used in a calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquationUsage {
    /// The equation that was used
    pub equation: Equation,
    /// Context describing where/why it was used (e.g., "Moment at column face")
    pub context: String,
    /// Optional: the section or direction this equation was applied to
    pub member_label: Option<String>,
}

impl EquationUsage {
    /// Create a new equation usage record
    pub fn new(equation: Equation, context: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
            member_label: None,
        }
    }

    /// Create usage record with a section label
    pub fn for_member(equation: Equation, context: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            equation,
            context: context.into(),
            member_label: Some(label.into()),
        }
    }
}

/// Collector for equation usage during a design.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquationTracker {
    usages: Vec<EquationUsage>,
}

impl EquationTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that an equation was used
    pub fn record(&mut self, equation: Equation, context: impl Into<String>) {
        self.usages.push(EquationUsage::new(equation, context));
    }

    /// Record equation usage for a specific section
    pub fn record_for_member(&mut self, equation: Equation, context: impl Into<String>, label: impl Into<String>) {
        self.usages.push(EquationUsage::for_member(equation, context, label));
    }

    /// Get all recorded usages
    pub fn usages(&self) -> &[EquationUsage] {
        &self.usages
    }

    /// Get unique equations used (deduplicated, first-use order)
    pub fn unique_equations(&self) -> Vec<Equation> {
        let mut seen = HashSet::new();
        self.usages
            .iter()
            .filter(|u| seen.insert(u.equation))
            .map(|u| u.equation)
            .collect()
    }

    /// Group usages by equation
    pub fn by_equation(&self) -> HashMap<Equation, Vec<&EquationUsage>> {
        let mut map: HashMap<Equation, Vec<&EquationUsage>> = HashMap::new();
        for usage in &self.usages {
            map.entry(usage.equation).or_default().push(usage);
        }
        map
    }

    /// Group unique equations by category
    pub fn by_category(&self) -> Vec<(EquationCategory, Vec<Equation>)> {
        let unique = self.unique_equations();
        let mut by_cat: HashMap<EquationCategory, Vec<Equation>> = HashMap::new();

        for eq in unique {
            let cat = eq.metadata().category;
            by_cat.entry(cat).or_default().push(eq);
        }

        let mut result: Vec<_> = by_cat.into_iter().collect();
        result.sort_by_key(|(cat, _)| cat.sort_order());
        result
    }

    /// Merge another tracker into this one
    pub fn merge(&mut self, other: EquationTracker) {
        self.usages.extend(other.usages);
    }

    pub fn is_empty(&self) -> bool {
        self.usages.is_empty()
    }
}

/// Equations recorded by a complete pad design.
pub fn pad_design_equations() -> Vec<Equation> {
    vec![
        Equation::StrengthCombination,
        Equation::FoundationSelfWeight,
        Equation::SoilSurcharge,
        Equation::BearingPressure,
        Equation::BearingUtilization,
        Equation::EffectiveDepth,
        Equation::FaceMoment,
        Equation::FlexuralDesign,
        Equation::MinimumFlexuralSteel,
        Equation::NominalMomentCapacity,
        Equation::OneWayShearDemand,
        Equation::OneWayShearStrength,
        Equation::PunchingCriticalSection,
        Equation::PunchingShearDemand,
        Equation::PunchingShearAspectRatio,
        Equation::PunchingShearLocation,
        Equation::PunchingShearMaximum,
        Equation::DevelopmentLength,
        Equation::MinimumClearSpacing,
        Equation::MaximumBarSpacing,
        Equation::DemandCapacityRatio,
    ]
}

// ============================================================================
// Markdown Generation
// ============================================================================

/// Generate the equations reference document from the registry.
///
/// # Example
///
/// ```rust
/// use footing_core::equations::registry::generate_equations_markdown;
///
/// let markdown = generate_equations_markdown();
/// assert!(markdown.contains("# Footing Equations Reference"));
/// assert!(markdown.contains("Two-Way Shear"));
/// ```
pub fn generate_equations_markdown() -> String {
    let mut output = String::with_capacity(24_000);

    // Header
    output.push_str(r#"# Footing Equations Reference

> **Auto-generated from source code. Do not edit manually.**
>
> Regenerate with: `cargo run --bin gen-equations`

This document lists the ACI 318M equations used in isolated pad foundation design.
Each equation includes its formula, code reference, source location, and assumptions.

## Units and Sign Conventions

| Quantity | Convention |
|----------|------------|
| Axial load | kN, compression positive |
| Moments | kN·m at the column base; N·mm inside section formulas |
| Pressure | kPa (kN/m²), bearing positive |
| Lengths | mm; m inside pressure and load formulas |
| Stresses | MPa |

---

"#);

    let categories = Equation::all_categories();

    for category in &categories {
        let equations = Equation::in_category(*category);
        if equations.is_empty() {
            continue;
        }

        output.push_str(&format!("## {}\n\n", category.display_name()));

        for equation in equations {
            let meta = equation.metadata();

            output.push_str(&format!("### {}\n\n", meta.name));
            output.push_str(&format!("{}\n\n", meta.description));
            output.push_str(&format!("**Formula:** `{}`\n\n", meta.formula_plain));

            if !meta.variables.is_empty() {
                output.push_str("**Variables:**\n\n");
                output.push_str("| Symbol | Description | Units |\n");
                output.push_str("|--------|-------------|-------|\n");
                for var in &meta.variables {
                    output.push_str(&format!("| {} | {} | {} |\n", var.symbol, var.description, var.units));
                }
                output.push('\n');
            }

            output.push_str(&format!("**Reference:** {}\n\n", meta.reference.citation()));
            output.push_str(&format!(
                "**Source:** [`{}`](footing_core/src/{})\n\n",
                meta.source_function, meta.source_module
            ));

            if !meta.assumptions.is_empty() {
                output.push_str("**Assumptions:**\n");
                for assumption in &meta.assumptions {
                    output.push_str(&format!("- {}\n", assumption));
                }
                output.push('\n');
            }

            output.push_str("---\n\n");
        }
    }

    output.push_str(&format!(
        "## Statistics\n\n- **Total Equations:** {}\n- **Categories:** {}\n\n",
        ALL_EQUATIONS.len(),
        categories.len()
    ));

    output.push_str(r#"## How to Audit

1. Find the equation you want to verify in the sections above
2. Check the **Reference** for the ACI 318M clause
3. Follow the **Source** link to the implementation
4. Run `cargo test` to verify equations against known values
"#);

    output
}

// ============================================================================
// Tests
// ============================================================================
