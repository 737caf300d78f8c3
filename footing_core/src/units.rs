//! # Unit Types
//!
//! Type-safe wrappers for the metric units used by ACI 318M. These are
//! lightweight `f64` newtypes that serialize as plain numbers.
//!
//! ## Working Units
//!
//! The design functions follow the usual metric split:
//! - Geometry in millimetres (mm), areas in mm² or m²
//! - Column loads in kilonewtons (kN) and kilonewton-metres (kN·m)
//! - Section capacities in newtons (N) and newton-millimetres (N·mm)
//! - Stresses in MPa (N/mm²), soil pressures in kPa (kN/m²)
//!
//! Conversions between the two families happen at the boundary where a
//! load-side value meets a capacity-side value.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::units::{KiloNewtons, Newtons, SqMm, SqM};
//!
//! let pu: Newtons = KiloNewtons(1606.5).into();
//! assert_eq!(pu.0, 1_606_500.0);
//!
//! let area: SqM = SqMm(6_250_000.0).into();
//! assert!((area.0 - 6.25).abs() < 1e-12);
//! ```

use serde::{Deserialize, Serialize};
use std::ops::{Add, Div, Mul, Sub};

// ============================================================================
// Length Units
// ============================================================================

/// Length in millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Millimeters(pub f64);

/// Length in metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Meters(pub f64);

impl From<Meters> for Millimeters {
    fn from(m: Meters) -> Self {
        Millimeters(m.0 * 1000.0)
    }
}

impl From<Millimeters> for Meters {
    fn from(mm: Millimeters) -> Self {
        Meters(mm.0 / 1000.0)
    }
}

// ============================================================================
// Force Units
// ============================================================================

/// Force in newtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Newtons(pub f64);

/// Force in kilonewtons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KiloNewtons(pub f64);

impl From<KiloNewtons> for Newtons {
    fn from(kn: KiloNewtons) -> Self {
        Newtons(kn.0 * 1000.0)
    }
}

impl From<Newtons> for KiloNewtons {
    fn from(n: Newtons) -> Self {
        KiloNewtons(n.0 / 1000.0)
    }
}

// ============================================================================
// Moment Units
// ============================================================================

/// Moment in kilonewton-metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KnM(pub f64);

/// Moment in newton-millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NMm(pub f64);

impl From<KnM> for NMm {
    fn from(knm: KnM) -> Self {
        NMm(knm.0 * 1.0e6)
    }
}

impl From<NMm> for KnM {
    fn from(nmm: NMm) -> Self {
        KnM(nmm.0 / 1.0e6)
    }
}

// ============================================================================
// Stress / Pressure Units
// ============================================================================

/// Stress in megapascals (N/mm²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Mpa(pub f64);

/// Pressure in kilopascals (kN/m²)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kpa(pub f64);

impl From<Kpa> for Mpa {
    fn from(kpa: Kpa) -> Self {
        Mpa(kpa.0 / 1000.0)
    }
}

impl From<Mpa> for Kpa {
    fn from(mpa: Mpa) -> Self {
        Kpa(mpa.0 * 1000.0)
    }
}

// ============================================================================
// Area Units
// ============================================================================

/// Area in square millimetres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqMm(pub f64);

/// Area in square metres
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SqM(pub f64);

impl From<SqM> for SqMm {
    fn from(sqm: SqM) -> Self {
        SqMm(sqm.0 * 1.0e6)
    }
}

impl From<SqMm> for SqM {
    fn from(sqmm: SqMm) -> Self {
        SqM(sqmm.0 / 1.0e6)
    }
}

// ============================================================================
// Arithmetic Implementations (macro to reduce boilerplate)
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl $type {
            /// Get the raw f64 value
            pub fn value(self) -> f64 {
                self.0
            }

            /// Create from raw f64 value
            pub fn new(value: f64) -> Self {
                Self(value)
            }
        }
    };
}

impl_arithmetic!(Millimeters);
impl_arithmetic!(Meters);
impl_arithmetic!(Newtons);
impl_arithmetic!(KiloNewtons);
impl_arithmetic!(KnM);
impl_arithmetic!(NMm);
impl_arithmetic!(Mpa);
impl_arithmetic!(Kpa);
impl_arithmetic!(SqMm);
impl_arithmetic!(SqM);

/// Force (kN) produced by a pressure (kPa) acting on an area (m²).
pub fn pressure_force(pressure: Kpa, area: SqM) -> KiloNewtons {
    KiloNewtons(pressure.0 * area.0)
}
