//! # footing_core - Isolated Pad Foundation Design
//!
//! `footing_core` checks reinforced concrete pad foundations under a single
//! column against ACI 318M. Inputs and outputs are JSON-serializable so a
//! design can be stored, transmitted or fed to another tool unchanged.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: `design` takes a foundation and parameters and returns a report
//! - **JSON-First**: All types implement Serialize/Deserialize
//! - **Rich Errors**: Structured error types, not just strings
//! - **Traceable**: Every report lists the code equations it applied
//!
//! ## Quick Start
//!
//! ```rust
//! use footing_core::{design, FoundationGeometry, PadDesignInput, PadFoundation};
//!
//! let geometry = FoundationGeometry::centered(2500.0, 2500.0, 400.0, 400.0).unwrap();
//! let mut pad = PadFoundation::new(geometry, 200.0).unwrap();
//! pad.set_column_axial_loads(800.0, 300.0, 0.0).unwrap();
//! pad.set_foundation_loads(400.0, 700.0, 18.0, 24.0).unwrap();
//!
//! let report = design(&pad, &PadDesignInput::default()).unwrap();
//! assert!(report.is_adequate);
//!
//! let json = serde_json::to_string_pretty(&report).unwrap();
//! assert!(json.contains("\"design_code\": \"ACI 318M-25\""));
//! ```
//!
//! ## Modules
//!
//! - [`calculations`] - Pad model and the design checks
//! - [`equations`] - Code equations and the equation registry
//! - [`geometry`] - Footprint, thickness and column placement
//! - [`loads`] - Load cases, self-weight and ACI 318M strength combinations
//! - [`pressure`] - Bearing pressure fields and their integration
//! - [`materials`] - Concrete and steel properties
//! - [`aci_factors`] - Load factors, φ factors and code constants
//! - [`units`] - Type-safe unit wrappers
//! - [`errors`] - Structured error types

pub mod aci_factors;
pub mod calculations;
pub mod equations;
pub mod errors;
pub mod geometry;
pub mod loads;
pub mod materials;
pub mod pressure;
pub mod units;

// Re-export commonly used types at crate root for convenience
pub use calculations::{design, CheckStatus, DesignReport, PadDesignInput, PadFoundation, SectionCheckResult};
pub use errors::{CalcError, CalcResult};
pub use geometry::{Direction, FoundationGeometry};
pub use materials::MaterialProperties;
