//! # Foundation Calculations
//!
//! The pad foundation model and the design checks run against it. Each
//! calculation follows the pattern:
//!
//! - `*Input` - Design parameters (JSON-serializable)
//! - `*Report` / `*Check` - Results (JSON-serializable)
//! - `design(foundation, input) -> Result<DesignReport, CalcError>` - Pure calculation function
//!
//! ## Available Calculations
//!
//! - [`pad_foundation`] - Pad model: geometry, column loads, self-weight, bearing and eccentricity
//! - [`pad_design`] - Full ACI 318M check of a pad (bearing, flexure, shear, punching, detailing)
//! - [`checks`] - Demand/capacity result shared by every check

pub mod checks;
pub mod pad_design;
pub mod pad_foundation;

// Re-export commonly used types
pub use checks::{CheckStatus, SectionCheckResult};
pub use pad_design::{design, DesignReport, PadDesignInput, PerDirection};
pub use pad_foundation::{BearingCheck, Eccentricity, PadFoundation};

pub use crate::geometry::Direction;
