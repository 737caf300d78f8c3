//! # Section Check Results
//!
//! The common shape every capacity check reports: demand against φ times the
//! nominal strength, the demand/capacity ratio and a PASS/FAIL verdict.
//!
//! A zero design strength has no ratio. The check reports `None` and fails
//! rather than dividing by zero.

use serde::{Deserialize, Serialize};

use crate::equations::concrete::PunchingGoverning;

/// Verdict of a single check, serialized as `"PASS"` or `"FAIL"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckStatus {
    Pass,
    Fail,
}

impl CheckStatus {
    pub fn from_pass(passes: bool) -> Self {
        if passes {
            CheckStatus::Pass
        } else {
            CheckStatus::Fail
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, CheckStatus::Pass)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CheckStatus::Pass => "PASS",
            CheckStatus::Fail => "FAIL",
        }
    }
}

impl std::fmt::Display for CheckStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Demand against design strength for one section.
///
/// Demand and strengths share units within a check (kPa for bearing, kN·m
/// for flexure, kN for shear).
///
/// ## JSON Example
///
/// ```json
/// {
///   "demand": 471.0,
///   "nominal_strength": 737.9,
///   "phi": 0.75,
///   "design_strength": 553.4,
///   "ratio": 0.851,
///   "status": "PASS",
///   "governing": null
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionCheckResult {
    /// Applied effect
    pub demand: f64,
    /// Nominal strength before reduction
    pub nominal_strength: f64,
    /// Strength reduction factor φ
    pub phi: f64,
    /// φ × nominal strength
    pub design_strength: f64,
    /// Demand / design strength; `None` when the design strength is not positive
    pub ratio: Option<f64>,
    pub status: CheckStatus,
    /// Which strength formula governed, where several compete
    pub governing: Option<PunchingGoverning>,
}

impl SectionCheckResult {
    /// Build a check and decide its verdict.
    ///
    /// # Example
    ///
    /// ```rust
    /// use footing_core::calculations::checks::{CheckStatus, SectionCheckResult};
    ///
    /// let ok = SectionCheckResult::new(400.0, 600.0, 0.75);
    /// assert_eq!(ok.design_strength, 450.0);
    /// assert_eq!(ok.status, CheckStatus::Pass);
    ///
    /// // Zero effective depth: no strength, no ratio, FAIL
    /// let none = SectionCheckResult::new(10.0, 0.0, 0.75);
    /// assert!(none.ratio.is_none());
    /// assert_eq!(none.status, CheckStatus::Fail);
    /// ```
    pub fn new(demand: f64, nominal_strength: f64, phi: f64) -> Self {
        let design_strength = phi * nominal_strength;
        let ratio = if design_strength > 0.0 && design_strength.is_finite() {
            Some(demand / design_strength)
        } else {
            None
        };
        let passes = ratio.is_some() && demand <= design_strength;
        SectionCheckResult {
            demand,
            nominal_strength,
            phi,
            design_strength,
            ratio,
            status: CheckStatus::from_pass(passes),
            governing: None,
        }
    }

    /// Record the governing strength formula.
    pub fn with_governing(mut self, governing: PunchingGoverning) -> Self {
        self.governing = Some(governing);
        self
    }

    /// Let an outside condition decide the verdict, leaving the ratio
    /// informational. An undefined ratio still fails.
    pub fn with_verdict(mut self, passes: bool) -> Self {
        self.status = CheckStatus::from_pass(passes && self.ratio.is_some());
        self
    }

    /// Check if the section passes
    pub fn passes(&self) -> bool {
        self.status.is_pass()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_at_exact_capacity() {
        let r = SectionCheckResult::new(90.0, 120.0, 0.75);
        assert!(r.passes());
        assert!((r.ratio.unwrap() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_fail_over_capacity() {
        let r = SectionCheckResult::new(91.0, 120.0, 0.75);
        assert_eq!(r.status, CheckStatus::Fail);
        assert!(r.ratio.unwrap() > 1.0);
    }

    #[test]
    fn test_zero_strength_is_undefined_fail() {
        let r = SectionCheckResult::new(0.0, 0.0, 0.75);
        assert_eq!(r.ratio, None);
        assert!(!r.passes());
    }

    #[test]
    fn test_zero_demand_passes() {
        let r = SectionCheckResult::new(0.0, 500.0, 0.75);
        assert_eq!(r.ratio, Some(0.0));
        assert!(r.passes());
    }

    #[test]
    fn test_verdict_overrides_ratio() {
        let r = SectionCheckResult::new(10.0, 100.0, 0.9).with_verdict(false);
        assert_eq!(r.status, CheckStatus::Fail);
        assert!(r.ratio.unwrap() < 1.0);

        // Ratio a hair over 1.0 from rounding, verdict decided elsewhere
        let r = SectionCheckResult::new(120.0000001, 160.0, 0.75).with_verdict(true);
        assert!(r.passes());

        // Undefined ratio cannot be overridden into a pass
        assert!(!SectionCheckResult::new(10.0, 0.0, 0.9).with_verdict(true).passes());
    }

    #[test]
    fn test_serialization() {
        let r = SectionCheckResult::new(1.0, 0.0, 0.75).with_governing(PunchingGoverning::Maximum);
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["status"], "FAIL");
        assert!(json["ratio"].is_null());
        assert_eq!(json["governing"], "MAXIMUM");
        assert_eq!(CheckStatus::Pass.to_string(), "PASS");
    }
}
