//! # Foundation Design Equations
//!
//! The closed-form code equations behind every pad foundation check, kept in
//! one place so they can be verified against ACI 318M clause by clause.
//!
//! ## Modules
//!
//! - [`concrete`] - Section capacities (stress block, flexural steel, shear strength, detailing)
//! - [`footing`] - Critical section demands from a bearing pressure field
//! - [`registry`] - Equation metadata and usage tracking for reports
//!
//! ## Sign Conventions
//!
//! - **Axial load**: Positive in compression (downward on the pad)
//! - **Bearing pressure**: Positive when the soil pushes up on the pad
//! - **Section moments and shears**: Magnitudes; the governing side is reported separately
//!
//! ## References
//!
//! - ACI 318M-25: Building Code Requirements for Structural Concrete (metric)

pub mod concrete;
pub mod footing;
pub mod registry;

pub use concrete::{
    bar_spacing_limits,
    beta1,
    column_face_punching_stress,
    development_length,
    flexural_design,
    max_reinforcement_ratio,
    maximum_flexural_steel,
    min_clear_spacing,
    minimum_flexural_steel,
    nominal_moment_capacity,
    one_way_shear_strength,
    punching_critical_section,
    punching_shear_strength,
    BarSpacingLimits,
    CriticalSection,
    DevelopmentLength,
    FlexuralOutcome,
    PunchingGoverning,
    PunchingShearStrength,
};

pub use footing::{
    bearing_pressure,
    effective_depths,
    face_moment,
    one_way_shear_demand,
    punching_shear_demand,
    EffectiveDepths,
    FaceMoment,
    OneWayShearDemand,
    PunchingShearDemand,
    Side,
};

pub use registry::{generate_equations_markdown, Equation, EquationCategory, EquationTracker, EquationUsage};
