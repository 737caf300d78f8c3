//! # Bearing Pressure Model
//!
//! The seam between the load aggregator and the section checks. A
//! [`FoundationModel`] turns the resultant column load into a
//! [`PressureDistribution`] over the footprint; the checks only ever ask the
//! distribution for the force on a region and its moment about a line.
//!
//! For concentric loading the distribution is [`UniformPressure`], which
//! answers with closed forms. Any other distribution (for example one
//! produced by an external soil-structure solver) only needs to implement
//! [`PressureDistribution::pressure_at`]; force and moment fall back to
//! midpoint integration over a grid.
//!
//! ## Units
//!
//! Coordinates in mm from the footprint origin (see [`crate::geometry`]),
//! pressure in kPa, force in kN, moment in kN·m.
//!
//! ## Example
//!
//! ```rust
//! use footing_core::pressure::{PressureDistribution, Region, UniformPressure};
//!
//! let q = UniformPressure::new(200.0);
//! // 1 m overhang strip on a 2.5 m wide pad
//! let strip = Region::new(1500.0, 2500.0, 0.0, 2500.0);
//! assert!((q.force_over(&strip).0 - 500.0).abs() < 1e-9);
//! // q·B·Lc²/2 about the column face at x = 1500
//! assert!((q.moment_about_x(&strip, 1500.0).0 - 250.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

use crate::geometry::FoundationGeometry;
use crate::units::{pressure_force, KiloNewtons, KnM, Kpa, SqM, SqMm};

/// Grid divisions per axis for numerical integration
pub const INTEGRATION_DIVISIONS: usize = 64;

/// Which resultant a pressure field is derived from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadState {
    /// Unfactored loads, used for soil bearing
    Service,
    /// Governing factored loads, used for section strength
    Ultimate,
}

/// Axis-aligned rectangle in footprint coordinates (mm).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Region {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Region { x_min, x_max, y_min, y_max }
    }

    /// The whole footprint of a foundation
    pub fn footprint(geometry: &FoundationGeometry) -> Self {
        Region::new(0.0, geometry.length_mm, 0.0, geometry.width_mm)
    }

    /// Rectangle of the given size centred on a point
    pub fn centred(x_mm: f64, y_mm: f64, size_x_mm: f64, size_y_mm: f64) -> Self {
        Region::new(
            x_mm - size_x_mm / 2.0,
            x_mm + size_x_mm / 2.0,
            y_mm - size_y_mm / 2.0,
            y_mm + size_y_mm / 2.0,
        )
    }

    /// Intersection with another region; `None` when they do not overlap.
    pub fn intersect(&self, other: &Region) -> Option<Region> {
        let clipped = Region::new(
            self.x_min.max(other.x_min),
            self.x_max.min(other.x_max),
            self.y_min.max(other.y_min),
            self.y_max.min(other.y_max),
        );
        if clipped.is_empty() {
            None
        } else {
            Some(clipped)
        }
    }

    /// Clip to a foundation footprint.
    pub fn clip_to(&self, geometry: &FoundationGeometry) -> Option<Region> {
        self.intersect(&Region::footprint(geometry))
    }

    pub fn is_empty(&self) -> bool {
        !(self.x_max > self.x_min) || !(self.y_max > self.y_min)
    }

    pub fn width_x(&self) -> f64 {
        (self.x_max - self.x_min).max(0.0)
    }

    pub fn width_y(&self) -> f64 {
        (self.y_max - self.y_min).max(0.0)
    }

    pub fn area_mm2(&self) -> SqMm {
        SqMm(self.width_x() * self.width_y())
    }

    pub fn area_m2(&self) -> SqM {
        self.area_mm2().into()
    }
}

/// ∫|u| du antiderivative, u|u|/2
fn abs_antiderivative(u: f64) -> f64 {
    u * u.abs() / 2.0
}

/// A bearing pressure field over the footprint.
pub trait PressureDistribution {
    /// Pressure at a point (kPa, compression positive)
    fn pressure_at(&self, x_mm: f64, y_mm: f64) -> Kpa;

    /// Resultant force on a region (kN)
    fn force_over(&self, region: &Region) -> KiloNewtons {
        integrate(region, |x, y| self.pressure_at(x, y).0)
    }

    /// Moment of the pressure on a region about the line x = `x0_mm` (kN·m).
    ///
    /// Lever arms are absolute distances, so a region on one side of the
    /// line gives the cantilever moment about it.
    fn moment_about_x(&self, region: &Region, x0_mm: f64) -> KnM {
        let force_mm = integrate(region, |x, y| self.pressure_at(x, y).0 * (x - x0_mm).abs());
        KnM(force_mm.0 / 1000.0)
    }

    /// Moment of the pressure on a region about the line y = `y0_mm` (kN·m).
    fn moment_about_y(&self, region: &Region, y0_mm: f64) -> KnM {
        let force_mm = integrate(region, |x, y| self.pressure_at(x, y).0 * (y - y0_mm).abs());
        KnM(force_mm.0 / 1000.0)
    }
}

/// Midpoint-rule integral of `f` (kPa-valued) over a region, giving kN.
fn integrate<F: Fn(f64, f64) -> f64>(region: &Region, f: F) -> KiloNewtons {
    if region.is_empty() {
        return KiloNewtons(0.0);
    }
    let n = INTEGRATION_DIVISIONS;
    let dx = region.width_x() / n as f64;
    let dy = region.width_y() / n as f64;
    let cell = SqM(dx * dy / 1.0e6);

    let mut total = 0.0;
    for i in 0..n {
        let x = region.x_min + (i as f64 + 0.5) * dx;
        for j in 0..n {
            let y = region.y_min + (j as f64 + 0.5) * dy;
            total += f(x, y);
        }
    }
    pressure_force(Kpa(total), cell)
}

/// Uniform bearing pressure, the concentric-load case.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UniformPressure {
    /// Pressure (kPa)
    pub pressure_kpa: f64,
}

impl UniformPressure {
    pub fn new(pressure_kpa: f64) -> Self {
        UniformPressure { pressure_kpa }
    }

    /// Resultant force spread evenly over the footprint.
    pub fn from_resultant(force: KiloNewtons, geometry: &FoundationGeometry) -> Self {
        UniformPressure::new(force.0 / geometry.area_m2().0)
    }
}

impl PressureDistribution for UniformPressure {
    fn pressure_at(&self, _x_mm: f64, _y_mm: f64) -> Kpa {
        Kpa(self.pressure_kpa)
    }

    fn force_over(&self, region: &Region) -> KiloNewtons {
        pressure_force(Kpa(self.pressure_kpa), region.area_m2())
    }

    fn moment_about_x(&self, region: &Region, x0_mm: f64) -> KnM {
        if region.is_empty() {
            return KnM(0.0);
        }
        let lever_integral = abs_antiderivative(region.x_max - x0_mm) - abs_antiderivative(region.x_min - x0_mm);
        KnM(self.pressure_kpa * region.width_y() * lever_integral / 1.0e9)
    }

    fn moment_about_y(&self, region: &Region, y0_mm: f64) -> KnM {
        if region.is_empty() {
            return KnM(0.0);
        }
        let lever_integral = abs_antiderivative(region.y_max - y0_mm) - abs_antiderivative(region.y_min - y0_mm);
        KnM(self.pressure_kpa * region.width_x() * lever_integral / 1.0e9)
    }
}

/// Adapter for a pressure field given as a closure `(x_mm, y_mm) -> kPa`.
///
/// ```rust
/// use footing_core::pressure::{FnPressure, PressureDistribution, Region};
///
/// // Pressure rising linearly from 100 to 300 kPa along a 2 m pad
/// let field = FnPressure(|x: f64, _y: f64| 100.0 + 0.1 * x);
/// let pad = Region::new(0.0, 2000.0, 0.0, 1000.0);
/// assert!((field.force_over(&pad).0 - 400.0).abs() < 1e-6);
/// ```
pub struct FnPressure<F>(pub F);

impl<F: Fn(f64, f64) -> f64> PressureDistribution for FnPressure<F> {
    fn pressure_at(&self, x_mm: f64, y_mm: f64) -> Kpa {
        Kpa((self.0)(x_mm, y_mm))
    }
}

/// Geometry plus pressure model: the capability set the design checks
/// depend on.
pub trait FoundationModel {
    /// Plan geometry and thickness
    fn geometry(&self) -> &FoundationGeometry;

    /// Pad self-weight (kN)
    fn self_weight(&self) -> KiloNewtons;

    /// Weight of soil above the pad (kN)
    fn surcharge(&self) -> KiloNewtons;

    /// Pressure field for a load state
    fn pressure_distribution(&self, state: LoadState) -> Box<dyn PressureDistribution>;

    /// Footprint area (m²)
    fn area(&self) -> SqM {
        self.geometry().area_m2()
    }

    /// Pressure at a point for a load state
    fn pressure_at(&self, state: LoadState, x_mm: f64, y_mm: f64) -> Kpa {
        self.pressure_distribution(state).pressure_at(x_mm, y_mm)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Linear;

    impl PressureDistribution for Linear {
        fn pressure_at(&self, x_mm: f64, _y_mm: f64) -> Kpa {
            Kpa(x_mm / 10.0)
        }
    }

    #[test]
    fn test_region_clipping() {
        let g = FoundationGeometry::centered(2000.0, 1000.0, 400.0, 400.0).unwrap();
        let r = Region::new(1800.0, 2300.0, -100.0, 500.0).clip_to(&g).unwrap();
        assert_eq!(r, Region::new(1800.0, 2000.0, 0.0, 500.0));
        assert!(Region::new(2100.0, 2300.0, 0.0, 500.0).clip_to(&g).is_none());
        assert!(Region::new(2000.0, 2000.0, 0.0, 500.0).is_empty());
    }

    #[test]
    fn test_centred_region() {
        let r = Region::centred(1250.0, 1250.0, 709.0, 709.0);
        assert!((r.x_min - 895.5).abs() < 1e-12);
        assert!((r.area_mm2().0 - 709.0 * 709.0).abs() < 1e-6);
    }

    #[test]
    fn test_uniform_force() {
        let q = UniformPressure::new(198.2);
        let pad = Region::new(0.0, 2500.0, 0.0, 2500.0);
        assert!((q.force_over(&pad).0 - 1238.75).abs() < 1e-9);
    }

    #[test]
    fn test_uniform_from_resultant() {
        let g = FoundationGeometry::centered(2500.0, 2500.0, 400.0, 400.0).unwrap();
        let q = UniformPressure::from_resultant(KiloNewtons(1606.5), &g);
        assert!((q.pressure_kpa - 257.04).abs() < 1e-9);
    }

    #[test]
    fn test_uniform_moment_cantilever() {
        let q = UniformPressure::new(100.0);
        let strip = Region::new(1450.0, 2500.0, 0.0, 2000.0);
        // q·B·Lc²/2 = 100 × 2.0 × 1.05² / 2
        let expected = 100.0 * 2.0 * 1.05 * 1.05 / 2.0;
        assert!((q.moment_about_x(&strip, 1450.0).0 - expected).abs() < 1e-9);

        let strip_y = Region::new(0.0, 2000.0, 0.0, 800.0);
        let expected_y = 100.0 * 2.0 * 0.8 * 0.8 / 2.0;
        assert!((q.moment_about_y(&strip_y, 800.0).0 - expected_y).abs() < 1e-9);
    }

    #[test]
    fn test_uniform_moment_straddling_line() {
        let q = UniformPressure::new(100.0);
        let r = Region::new(0.0, 2000.0, 0.0, 1000.0);
        // Two 1 m cantilevers about the centre line, each q·B·1²/2
        assert!((q.moment_about_x(&r, 1000.0).0 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_default_integration_matches_closed_form() {
        let r = Region::new(500.0, 1500.0, 0.0, 1000.0);
        // ∫∫ x/10 dA = (1500² - 500²)/2 /10 × 1000 mm³·kPa/mm
        let expected_force = (1500.0_f64.powi(2) - 500.0_f64.powi(2)) / 2.0 / 10.0 * 1000.0 / 1.0e6;
        assert!((Linear.force_over(&r).0 - expected_force).abs() < 1e-9);

        let uniform = FnPressure(|_x: f64, _y: f64| 100.0);
        let strip = Region::new(1450.0, 2500.0, 0.0, 2000.0);
        let closed = UniformPressure::new(100.0).moment_about_x(&strip, 1450.0).0;
        assert!((uniform.moment_about_x(&strip, 1450.0).0 - closed).abs() < 1e-9);
        assert!((uniform.force_over(&strip).0 - 210.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_region_carries_nothing() {
        let empty = Region::new(10.0, 10.0, 0.0, 100.0);
        assert_eq!(UniformPressure::new(100.0).force_over(&empty).0, 0.0);
        assert_eq!(UniformPressure::new(100.0).moment_about_y(&empty, 0.0).0, 0.0);
        assert_eq!(Linear.force_over(&empty).0, 0.0);
    }
}
