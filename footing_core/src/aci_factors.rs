//! # ACI 318M Code Constants
//!
//! Fixed tables from ACI 318M: load factors, strength reduction factors (φ),
//! material limits and concrete cover. Everything here is a pure lookup.
//!
//! ## Factor Summary
//!
//! | Factor              | Value | Reference        |
//! |---------------------|-------|------------------|
//! | Dead (1.2D)         | 1.2   | ACI 318M 5.3.1   |
//! | Live (1.6L)         | 1.6   | ACI 318M 5.3.1   |
//! | Wind (1.0W)         | 1.0   | ACI 318M 5.3.1   |
//! | Dead minimum (0.9D) | 0.9   | ACI 318M 5.3.1   |
//! | φ flexure           | 0.90  | ACI 318M 21.2.1  |
//! | φ shear             | 0.75  | ACI 318M 21.2.1  |
//!
//! Callers that need different factors override them through
//! [`LoadFactors`] and [`StrengthReductionFactors`]; the defaults are the
//! code values.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::errors::{ensure_in_range, ensure_strictly_positive, CalcResult};

// ============================================================================
// ACI 318M Section References
// ============================================================================

/// ACI 318M section references used in reports and the equation registry.
pub mod aci_ref {
    /// Load combinations
    pub const LOAD_COMBINATIONS: &str = "ACI 318M 5.3.1";
    /// Strength reduction factors
    pub const PHI_FACTORS: &str = "ACI 318M 21.2.1";
    /// Equivalent rectangular stress block (β₁)
    pub const BETA_1: &str = "ACI 318M 22.2.2.4.3";
    /// Flexural strength
    pub const FLEXURE: &str = "ACI 318M 22.2";
    /// Minimum flexural reinforcement
    pub const MIN_FLEXURAL_STEEL: &str = "ACI 318M 9.6.1.2";
    /// Tension-controlled strain limit
    pub const TENSION_CONTROLLED: &str = "ACI 318M 21.2.2";
    /// One-way shear strength
    pub const ONE_WAY_SHEAR: &str = "ACI 318M 22.5.5.1";
    /// Two-way shear strength
    pub const TWO_WAY_SHEAR: &str = "ACI 318M 22.6.5.2";
    /// Two-way shear critical section
    pub const TWO_WAY_CRITICAL_SECTION: &str = "ACI 318M 22.6.4.1";
    /// Critical section for moment in footings
    pub const FOOTING_MOMENT_SECTION: &str = "ACI 318M 13.2.7.1";
    /// Development length of deformed bars in tension
    pub const DEVELOPMENT_LENGTH: &str = "ACI 318M 25.4.2";
    /// Minimum clear spacing of reinforcement
    pub const BAR_SPACING: &str = "ACI 318M 25.2.1";
    /// Specified concrete cover
    pub const COVER: &str = "ACI 318M 20.5.1.3";
    /// Concrete strength limits
    pub const CONCRETE_LIMITS: &str = "ACI 318M 19.2.1";
    /// Reinforcement strength limits
    pub const STEEL_LIMITS: &str = "ACI 318M 20.2.2";
}

// ============================================================================
// Strain and material constants
// ============================================================================

/// Maximum usable strain at the extreme concrete compression fibre
pub const CONCRETE_ULTIMATE_STRAIN: f64 = 0.003;

/// Net tensile strain at the tension-controlled limit
pub const TENSION_CONTROLLED_STRAIN: f64 = 0.005;

/// Factor on wind in the `1.2D + 1.6L + 0.5W` combination
pub const WIND_COMPANION_FACTOR: f64 = 0.5;

/// Factor on live load in combinations led by wind or seismic
pub const LIVE_COMPANION_FACTOR: f64 = 1.0;

/// Factor on seismic load effects
pub const SEISMIC_LOAD_FACTOR: f64 = 1.0;

/// Default maximum aggregate size (mm)
pub const DEFAULT_AGGREGATE_SIZE_MM: f64 = 20.0;

/// Absolute cap on bar spacing for crack control in footings and slabs (mm)
pub const MAX_BAR_SPACING_CAP_MM: f64 = 450.0;

// ============================================================================
// Load factors
// ============================================================================

/// Load factors for strength design per ACI 318M 5.3.1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LoadFactors {
    /// Dead load factor (1.2)
    pub dead: f64,
    /// Live load factor (1.6)
    pub live: f64,
    /// Wind load factor (1.0)
    pub wind: f64,
    /// Dead load factor when dead load counteracts other effects (0.9)
    pub dead_minimum: f64,
    /// Roof live load companion factor (0.5)
    pub roof_live: f64,
    /// Snow load companion factor (0.5)
    pub snow: f64,
}

impl Default for LoadFactors {
    fn default() -> Self {
        LoadFactors {
            dead: 1.2,
            live: 1.6,
            wind: 1.0,
            dead_minimum: 0.9,
            roof_live: 0.5,
            snow: 0.5,
        }
    }
}

impl LoadFactors {
    /// Factors are multipliers on load effects; they must be finite and positive.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_strictly_positive("dead_load_factor", self.dead)?;
        ensure_strictly_positive("live_load_factor", self.live)?;
        ensure_strictly_positive("wind_load_factor", self.wind)?;
        ensure_strictly_positive("dead_minimum_load_factor", self.dead_minimum)?;
        ensure_strictly_positive("roof_live_load_factor", self.roof_live)?;
        ensure_strictly_positive("snow_load_factor", self.snow)?;
        Ok(())
    }
}

// ============================================================================
// Strength reduction factors
// ============================================================================

/// Strength reduction factors φ per ACI 318M 21.2.1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthReductionFactors {
    /// Tension-controlled flexure (0.90)
    pub flexure: f64,
    /// Shear and torsion (0.75)
    pub shear: f64,
    /// Compression-controlled, tied (0.65)
    pub compression_tied: f64,
    /// Compression-controlled, spiral (0.75)
    pub compression_spiral: f64,
    /// Bearing on concrete (0.65)
    pub bearing: f64,
    /// Strut-and-tie models (0.75)
    pub strut_tie: f64,
}

impl Default for StrengthReductionFactors {
    fn default() -> Self {
        StrengthReductionFactors {
            flexure: 0.90,
            shear: 0.75,
            compression_tied: 0.65,
            compression_spiral: 0.75,
            bearing: 0.65,
            strut_tie: 0.75,
        }
    }
}

impl StrengthReductionFactors {
    /// φ must lie in (0, 1].
    pub fn validate(&self) -> CalcResult<()> {
        for (field, value) in [
            ("phi_flexure", self.flexure),
            ("phi_shear", self.shear),
            ("phi_compression_tied", self.compression_tied),
            ("phi_compression_spiral", self.compression_spiral),
            ("phi_bearing", self.bearing),
            ("phi_strut_tie", self.strut_tie),
        ] {
            ensure_strictly_positive(field, value)?;
            ensure_in_range(field, value, 0.0, 1.0)?;
        }
        Ok(())
    }
}

// ============================================================================
// Material limits
// ============================================================================

/// Permitted range of specified material strengths.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialLimits {
    /// Minimum f'c (MPa)
    pub fc_min_mpa: f64,
    /// Maximum f'c (MPa)
    pub fc_max_mpa: f64,
    /// Minimum fy (MPa)
    pub fy_min_mpa: f64,
    /// Maximum fy (MPa)
    pub fy_max_mpa: f64,
}

impl MaterialLimits {
    /// Limits per ACI 318M 19.2.1 and 20.2.2
    pub const ACI318: MaterialLimits = MaterialLimits {
        fc_min_mpa: 17.0,
        fc_max_mpa: 83.0,
        fy_min_mpa: 280.0,
        fy_max_mpa: 550.0,
    };
}

impl Default for MaterialLimits {
    fn default() -> Self {
        MaterialLimits::ACI318
    }
}

// ============================================================================
// Concrete cover
// ============================================================================

/// Member type for cover lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum MemberType {
    /// Footings cast against earth
    #[default]
    Foundation,
    Beam,
    Column,
    Slab,
}

/// Exposure condition for cover lookup
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ExposureCondition {
    #[default]
    Normal,
    Severe,
    Marine,
}

impl FromStr for MemberType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "foundation" | "footing" => Ok(MemberType::Foundation),
            "beam" => Ok(MemberType::Beam),
            "column" => Ok(MemberType::Column),
            "slab" => Ok(MemberType::Slab),
            _ => Err(format!("Unknown member type: {}", s)),
        }
    }
}

impl FromStr for ExposureCondition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(ExposureCondition::Normal),
            "severe" => Ok(ExposureCondition::Severe),
            "marine" => Ok(ExposureCondition::Marine),
            _ => Err(format!("Unknown exposure condition: {}", s)),
        }
    }
}

/// Minimum concrete cover (mm) per ACI 318M 20.5.1.3.
///
/// | Member     | Normal | Severe | Marine |
/// |------------|--------|--------|--------|
/// | Foundation | 75     | 100    | 100    |
/// | Beam       | 40     | 50     | 65     |
/// | Column     | 40     | 50     | 65     |
/// | Slab       | 20     | 30     | 40     |
pub fn concrete_cover(member: MemberType, exposure: ExposureCondition) -> f64 {
    use ExposureCondition::*;
    use MemberType::*;

    match (member, exposure) {
        (Foundation, Normal) => 75.0,
        (Foundation, Severe) | (Foundation, Marine) => 100.0,
        (Beam, Normal) | (Column, Normal) => 40.0,
        (Beam, Severe) | (Column, Severe) => 50.0,
        (Beam, Marine) | (Column, Marine) => 65.0,
        (Slab, Normal) => 20.0,
        (Slab, Severe) => 30.0,
        (Slab, Marine) => 40.0,
    }
}

/// Cover lookup by name. Unrecognised member or exposure names fall back to
/// the foundation/normal value of 75 mm.
pub fn concrete_cover_by_name(member: &str, exposure: &str) -> f64 {
    match (member.parse::<MemberType>(), exposure.parse::<ExposureCondition>()) {
        (Ok(m), Ok(e)) => concrete_cover(m, e),
        _ => concrete_cover(MemberType::Foundation, ExposureCondition::Normal),
    }
}

// ============================================================================
// Column location (two-way shear α_s)
// ============================================================================

/// Column location relative to the slab edges, selects α_s for two-way shear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColumnLocation {
    #[default]
    Interior,
    Edge,
    Corner,
}

impl ColumnLocation {
    /// α_s: 40 interior, 30 edge, 20 corner
    pub fn alpha_s(&self) -> f64 {
        match self {
            ColumnLocation::Interior => 40.0,
            ColumnLocation::Edge => 30.0,
            ColumnLocation::Corner => 20.0,
        }
    }
}

/// Crack-control cap on bar spacing for a member of thickness `h`: min(3h, 450 mm).
pub fn max_bar_spacing(thickness_mm: f64) -> f64 {
    (3.0 * thickness_mm).min(MAX_BAR_SPACING_CAP_MM)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_load_factors() {
        let f = LoadFactors::default();
        assert_eq!(f.dead, 1.2);
        assert_eq!(f.live, 1.6);
        assert_eq!(f.wind, 1.0);
        assert_eq!(f.dead_minimum, 0.9);
        assert_eq!(f.roof_live, 0.5);
        assert_eq!(f.snow, 0.5);
        assert!(f.validate().is_ok());
    }

    #[test]
    fn test_default_phi_factors() {
        let phi = StrengthReductionFactors::default();
        assert_eq!(phi.flexure, 0.90);
        assert_eq!(phi.shear, 0.75);
        assert_eq!(phi.compression_tied, 0.65);
        assert_eq!(phi.compression_spiral, 0.75);
        assert_eq!(phi.bearing, 0.65);
        assert_eq!(phi.strut_tie, 0.75);
        assert!(phi.validate().is_ok());
    }

    #[test]
    fn test_invalid_overrides() {
        let f = LoadFactors { dead: 0.0, ..LoadFactors::default() };
        assert!(f.validate().is_err());

        let phi = StrengthReductionFactors { shear: 1.2, ..StrengthReductionFactors::default() };
        assert!(phi.validate().is_err());
    }

    #[test]
    fn test_material_limits() {
        let limits = MaterialLimits::default();
        assert_eq!(limits.fc_min_mpa, 17.0);
        assert_eq!(limits.fc_max_mpa, 83.0);
        assert_eq!(limits.fy_min_mpa, 280.0);
        assert_eq!(limits.fy_max_mpa, 550.0);
    }

    #[test]
    fn test_cover_table() {
        assert_eq!(concrete_cover(MemberType::Foundation, ExposureCondition::Normal), 75.0);
        assert_eq!(concrete_cover(MemberType::Foundation, ExposureCondition::Marine), 100.0);
        assert_eq!(concrete_cover(MemberType::Column, ExposureCondition::Marine), 65.0);
        assert_eq!(concrete_cover(MemberType::Slab, ExposureCondition::Severe), 30.0);
    }

    #[test]
    fn test_cover_unknown_falls_back() {
        assert_eq!(concrete_cover_by_name("beam", "severe"), 50.0);
        assert_eq!(concrete_cover_by_name("wall", "normal"), 75.0);
        assert_eq!(concrete_cover_by_name("slab", "tidal"), 75.0);
    }

    #[test]
    fn test_alpha_s() {
        assert_eq!(ColumnLocation::Interior.alpha_s(), 40.0);
        assert_eq!(ColumnLocation::Edge.alpha_s(), 30.0);
        assert_eq!(ColumnLocation::Corner.alpha_s(), 20.0);
    }

    #[test]
    fn test_max_bar_spacing() {
        assert_eq!(max_bar_spacing(100.0), 300.0);
        assert_eq!(max_bar_spacing(400.0), 450.0);
    }
}
