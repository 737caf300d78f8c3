//! # Materials
//!
//! Concrete and reinforcement strengths for ACI 318M design, with the
//! code-limit validation that every design run performs before any formula
//! sees the values.
//!
//! Validation is reported as data ([`MaterialValidation`]): the caller gets
//! every violated limit and every advisory warning at once and decides what to
//! do with them. [`MaterialValidation::into_result`] converts hard errors into
//! [`CalcError::MaterialOutOfRange`] for callers that want to stop.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::materials::MaterialProperties;
//!
//! let materials = MaterialProperties::new(30.0, 420.0);
//! let validation = materials.validate();
//! assert!(validation.valid);
//! assert!(validation.warnings.is_empty());
//!
//! let weak = MaterialProperties::new(15.0, 420.0);
//! let validation = weak.validate();
//! assert!(!validation.valid);
//! assert_eq!(validation.errors.len(), 1);
//! ```

use serde::{Deserialize, Serialize};

use crate::aci_factors::{aci_ref, MaterialLimits};
use crate::equations::concrete::beta1;
use crate::errors::{CalcError, CalcResult};

/// f'c below which a warning is issued (MPa)
const LOW_CONCRETE_WARNING_MPA: f64 = 21.0;

/// fy above which high-strength steel is flagged against low-strength concrete (MPa)
const HIGH_STEEL_WARNING_MPA: f64 = 420.0;

/// f'c below which high-strength steel is considered uneconomical (MPa)
const ECONOMIC_CONCRETE_MPA: f64 = 28.0;

/// Specified material strengths.
///
/// ## JSON Example
///
/// ```json
/// { "fc_mpa": 30.0, "fy_mpa": 420.0 }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialProperties {
    /// Specified compressive strength of concrete f'c (MPa)
    pub fc_mpa: f64,
    /// Specified yield strength of reinforcement fy (MPa)
    pub fy_mpa: f64,
}

impl Default for MaterialProperties {
    fn default() -> Self {
        MaterialProperties {
            fc_mpa: 30.0,
            fy_mpa: 420.0,
        }
    }
}

impl MaterialProperties {
    pub fn new(fc_mpa: f64, fy_mpa: f64) -> Self {
        MaterialProperties { fc_mpa, fy_mpa }
    }

    /// Validate against the ACI 318M limits.
    pub fn validate(&self) -> MaterialValidation {
        self.validate_with(&MaterialLimits::ACI318)
    }

    /// Validate against an explicit set of limits.
    pub fn validate_with(&self, limits: &MaterialLimits) -> MaterialValidation {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();
        let fc = self.fc_mpa;
        let fy = self.fy_mpa;

        if !fc.is_finite() {
            errors.push(format!("f'c = {} MPa is not a finite number", fc));
        } else if fc < limits.fc_min_mpa {
            errors.push(format!(
                "f'c = {} MPa is below minimum {} MPa ({})",
                fc, limits.fc_min_mpa, aci_ref::CONCRETE_LIMITS
            ));
        } else if fc > limits.fc_max_mpa {
            errors.push(format!(
                "f'c = {} MPa exceeds maximum {} MPa ({})",
                fc, limits.fc_max_mpa, aci_ref::CONCRETE_LIMITS
            ));
        }

        if !fy.is_finite() {
            errors.push(format!("fy = {} MPa is not a finite number", fy));
        } else if fy < limits.fy_min_mpa {
            errors.push(format!(
                "fy = {} MPa is below minimum {} MPa ({})",
                fy, limits.fy_min_mpa, aci_ref::STEEL_LIMITS
            ));
        } else if fy > limits.fy_max_mpa {
            errors.push(format!(
                "fy = {} MPa exceeds maximum {} MPa ({})",
                fy, limits.fy_max_mpa, aci_ref::STEEL_LIMITS
            ));
        }

        if fc < LOW_CONCRETE_WARNING_MPA {
            warnings.push(format!("f'c = {} MPa is quite low for structural concrete", fc));
        }
        if fy > HIGH_STEEL_WARNING_MPA && fc < ECONOMIC_CONCRETE_MPA {
            warnings.push("High strength steel with low strength concrete may not be economical".to_string());
        }

        MaterialValidation {
            valid: errors.is_empty(),
            errors,
            warnings,
        }
    }

    /// √f'c (MPa), the term every ACI shear and development equation uses
    pub fn sqrt_fc(&self) -> f64 {
        self.fc_mpa.sqrt()
    }

    /// Whitney stress block factor β₁ for this concrete
    pub fn beta1(&self) -> f64 {
        beta1(self.fc_mpa)
    }
}

/// Outcome of material validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MaterialValidation {
    /// True when no code limit is violated
    pub valid: bool,
    /// Violated limits; design must not proceed
    pub errors: Vec<String>,
    /// Advisory notes; design may proceed
    pub warnings: Vec<String>,
}

impl MaterialValidation {
    /// Convert hard errors into `CalcError::MaterialOutOfRange`, passing
    /// warnings through on success.
    pub fn into_result(self) -> CalcResult<Vec<String>> {
        if self.valid {
            Ok(self.warnings)
        } else {
            Err(CalcError::material_out_of_range(self.errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_materials_are_clean() {
        let v = MaterialProperties::new(30.0, 420.0).validate();
        assert!(v.valid);
        assert!(v.errors.is_empty());
        assert!(v.warnings.is_empty());
    }

    #[test]
    fn test_limits_are_inclusive() {
        assert!(MaterialProperties::new(17.0, 280.0).validate().valid);
        assert!(MaterialProperties::new(83.0, 550.0).validate().valid);
    }

    #[test]
    fn test_out_of_range_reports_every_error() {
        let v = MaterialProperties::new(90.0, 600.0).validate();
        assert!(!v.valid);
        assert_eq!(v.errors.len(), 2);
        assert!(v.errors[0].contains("exceeds maximum 83"));
        assert!(v.errors[1].contains("exceeds maximum 550"));
    }

    #[test]
    fn test_low_concrete_warns_and_errors() {
        let v = MaterialProperties::new(15.0, 420.0).validate();
        assert!(!v.valid);
        assert!(v.errors[0].contains("below minimum 17"));
        assert_eq!(v.warnings.len(), 1);
        assert!(v.warnings[0].contains("quite low"));
    }

    #[test]
    fn test_economy_warning() {
        let v = MaterialProperties::new(25.0, 500.0).validate();
        assert!(v.valid);
        assert_eq!(v.warnings.len(), 1);
        assert!(v.warnings[0].contains("may not be economical"));

        // fy exactly 420 is not "high strength"
        let v = MaterialProperties::new(25.0, 420.0).validate();
        assert!(v.warnings.is_empty());
    }

    #[test]
    fn test_nan_is_an_error() {
        let v = MaterialProperties::new(f64::NAN, 420.0).validate();
        assert!(!v.valid);
    }

    #[test]
    fn test_into_result() {
        let ok = MaterialProperties::new(20.0, 420.0).validate().into_result().unwrap();
        assert_eq!(ok.len(), 1);

        let err = MaterialProperties::new(10.0, 100.0).validate().into_result().unwrap_err();
        assert_eq!(err.error_code(), "MATERIAL_OUT_OF_RANGE");
    }

    #[test]
    fn test_beta1_passthrough() {
        assert!((MaterialProperties::new(40.0, 420.0).beta1() - 0.7643).abs() < 1e-4);
    }
}
