//! # Error Types
//!
//! Structured error types for footing_core. Errors are reserved for inputs
//! that must never reach the design formulas (non-positive lengths, NaN loads,
//! out-of-range materials). A section that simply fails its check is *not* an
//! error; it comes back as a `FAIL` verdict inside the design report.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::errors::{CalcError, CalcResult};
//!
//! fn validate_length(length_mm: f64) -> CalcResult<()> {
//!     if length_mm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "foundation_length".to_string(),
//!             value: length_mm.to_string(),
//!             reason: "Length must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_length(-5.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for footing_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for foundation design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (non-finite, non-positive, out of range, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Material strengths outside the code limits
    #[error("Material properties out of range: {}", errors.join("; "))]
    MaterialOutOfRange { errors: Vec<String> },

    /// Calculation could not be carried out
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MaterialOutOfRange error from the validation messages
    pub fn material_out_of_range(errors: Vec<String>) -> Self {
        CalcError::MaterialOutOfRange { errors }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(calculation_type: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MaterialOutOfRange { .. } => "MATERIAL_OUT_OF_RANGE",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

// ============================================================================
// Input validation helpers
// ============================================================================

/// Reject NaN and infinite values.
pub fn ensure_finite(field: &str, value: f64) -> CalcResult<f64> {
    if !value.is_finite() {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be a finite number"));
    }
    Ok(value)
}

/// Reject anything that is not a finite number greater than zero.
pub fn ensure_strictly_positive(field: &str, value: f64) -> CalcResult<f64> {
    ensure_finite(field, value)?;
    if value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value must be greater than zero"));
    }
    Ok(value)
}

/// Reject negative or non-finite values (zero is allowed).
pub fn ensure_non_negative(field: &str, value: f64) -> CalcResult<f64> {
    ensure_finite(field, value)?;
    if value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Value cannot be negative"));
    }
    Ok(value)
}

/// Reject values outside `[min, max]`.
pub fn ensure_in_range(field: &str, value: f64, min: f64, max: f64) -> CalcResult<f64> {
    ensure_finite(field, value)?;
    if value < min || value > max {
        return Err(CalcError::invalid_input(
            field,
            value.to_string(),
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_serialization() {
        let error = CalcError::invalid_input("foundation_length", "-5", "Value must be greater than zero");
        let json = serde_json::to_string(&error).unwrap();
        let roundtrip: CalcError = serde_json::from_str(&json).unwrap();
        assert_eq!(error, roundtrip);
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(CalcError::material_out_of_range(vec![]).error_code(), "MATERIAL_OUT_OF_RANGE");
        assert_eq!(CalcError::calculation_failed("flexure", "x").error_code(), "CALCULATION_FAILED");
    }

    #[test]
    fn test_material_error_message_lists_all() {
        let err = CalcError::material_out_of_range(vec!["fc low".to_string(), "fy high".to_string()]);
        assert_eq!(err.to_string(), "Material properties out of range: fc low; fy high");
    }

    #[test]
    fn test_positive_validation() {
        assert!(ensure_strictly_positive("length", 1.0).is_ok());
        assert!(ensure_strictly_positive("length", 0.0).is_err());
        assert!(ensure_strictly_positive("length", f64::NAN).is_err());
        assert!(ensure_non_negative("depth", 0.0).is_ok());
        assert!(ensure_non_negative("depth", -1.0).is_err());
        assert!(ensure_finite("load", f64::INFINITY).is_err());
    }

    #[test]
    fn test_error_names_field() {
        match ensure_in_range("phi", 1.2, 0.0, 1.0) {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "phi"),
            other => panic!("unexpected: {:?}", other),
        }
    }
}
