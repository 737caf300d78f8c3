//! # Pad Foundation Critical Section Demands
//!
//! Locates the critical sections of an isolated pad and integrates the bearing
//! pressure over the footprint beyond them:
//!
//! - flexure at the column face (ACI 318M 13.2.7.1)
//! - one-way shear at `d` from the column face
//! - two-way shear on the rectangle at `d/2` from the column faces
//!
//! Each section exists on both sides of the column. The larger side governs,
//! ties going to the low side.
//!
//! ## Units
//!
//! Geometry in mm (see [`crate::geometry`] for the coordinate system),
//! pressure in kPa, forces in kN, moments in kN·m.

use serde::{Deserialize, Serialize};

use crate::geometry::{Direction, FoundationGeometry};
use crate::pressure::{PressureDistribution, Region};
use crate::units::{KiloNewtons, Kpa, SqM};

/// Side of the column a section lies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    /// Towards the footprint origin
    Low,
    /// Away from the footprint origin
    High,
}

fn governing_side(low: f64, high: f64) -> (Side, f64) {
    if high > low {
        (Side::High, high)
    } else {
        (Side::Low, low)
    }
}

// ============================================================================
// Effective depth
// ============================================================================

/// Effective depths of the two bottom bar layers.
///
/// The x-direction bars sit lowest; the y-direction layer rests on them and
/// loses a further bar diameter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectiveDepths {
    /// Depth to the x-direction bars (mm)
    pub x_mm: f64,
    /// Depth to the y-direction bars (mm)
    pub y_mm: f64,
    /// Mean of the two layers, used for two-way shear (mm)
    pub average_mm: f64,
}

impl EffectiveDepths {
    pub fn get(&self, direction: Direction) -> f64 {
        match direction {
            Direction::X => self.x_mm,
            Direction::Y => self.y_mm,
        }
    }
}

/// Effective depths for two orthogonal bar layers.
///
/// # Example
///
/// ```rust
/// use footing_core::equations::footing::effective_depths;
///
/// let d = effective_depths(400.0, 75.0, 16.0, 16.0);
/// assert_eq!(d.x_mm, 317.0);
/// assert_eq!(d.y_mm, 301.0);
/// assert_eq!(d.average_mm, 309.0);
/// ```
pub fn effective_depths(thickness_mm: f64, cover_mm: f64, bar_x_mm: f64, bar_y_mm: f64) -> EffectiveDepths {
    let x_mm = thickness_mm - cover_mm - bar_x_mm / 2.0;
    let y_mm = thickness_mm - cover_mm - bar_x_mm - bar_y_mm / 2.0;
    EffectiveDepths {
        x_mm,
        y_mm,
        average_mm: (x_mm + y_mm) / 2.0,
    }
}

// ============================================================================
// Bearing
// ============================================================================

/// Average bearing pressure of a resultant over a footprint.
pub fn bearing_pressure(resultant: KiloNewtons, area: SqM) -> Kpa {
    Kpa(resultant.0 / area.0)
}

// ============================================================================
// Regions beyond a section
// ============================================================================

/// Footprint beyond a line offset from each column face, `(low, high)`.
///
/// A side is `None` when the line falls on or outside the footprint edge.
pub fn regions_beyond(geometry: &FoundationGeometry, direction: Direction, offset_mm: f64) -> (Option<Region>, Option<Region>) {
    let (face_lo, face_hi) = geometry.column_span(direction);
    let extent = geometry.extent(direction);
    let section_lo = face_lo - offset_mm;
    let section_hi = face_hi + offset_mm;

    let footprint = Region::footprint(geometry);
    let (low, high) = match direction {
        Direction::X => (
            Region::new(0.0, section_lo, 0.0, geometry.width_mm),
            Region::new(section_hi, extent, 0.0, geometry.width_mm),
        ),
        Direction::Y => (
            Region::new(0.0, geometry.length_mm, 0.0, section_lo),
            Region::new(0.0, geometry.length_mm, section_hi, extent),
        ),
    };
    (low.intersect(&footprint), high.intersect(&footprint))
}

// ============================================================================
// Flexure
// ============================================================================

/// Cantilever moment at the column faces for one direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FaceMoment {
    pub direction: Direction,
    /// Width of the section resisting the moment (mm)
    pub section_width_mm: f64,
    /// Overhang beyond the low face (mm)
    pub cantilever_low_mm: f64,
    /// Overhang beyond the high face (mm)
    pub cantilever_high_mm: f64,
    /// Moment at the low face (kN·m)
    pub moment_low_knm: f64,
    /// Moment at the high face (kN·m)
    pub moment_high_knm: f64,
    pub governing_side: Side,
    /// Design moment Mu (kN·m)
    pub governing_knm: f64,
}

/// Moment of the pressure beyond each column face, about that face.
///
/// For uniform pressure this is q·B·Lc²/2 per side.
///
/// # Example
///
/// ```rust
/// use footing_core::equations::footing::face_moment;
/// use footing_core::geometry::{Direction, FoundationGeometry};
/// use footing_core::pressure::UniformPressure;
///
/// let g = FoundationGeometry::centered(2500.0, 2500.0, 400.0, 400.0).unwrap();
/// let m = face_moment(&UniformPressure::new(100.0), &g, Direction::X);
/// // 100 kPa × 2.5 m × 1.05² / 2
/// assert!((m.governing_knm - 137.8125).abs() < 1e-9);
/// ```
pub fn face_moment(pressure: &dyn PressureDistribution, geometry: &FoundationGeometry, direction: Direction) -> FaceMoment {
    let (face_lo, face_hi) = geometry.column_span(direction);
    let (cantilever_low_mm, cantilever_high_mm) = geometry.cantilever_lengths(direction);
    let (low, high) = regions_beyond(geometry, direction, 0.0);

    let moment_about = |region: Option<Region>, face: f64| -> f64 {
        match (region, direction) {
            (Some(r), Direction::X) => pressure.moment_about_x(&r, face).0,
            (Some(r), Direction::Y) => pressure.moment_about_y(&r, face).0,
            (None, _) => 0.0,
        }
    };
    let moment_low_knm = moment_about(low, face_lo);
    let moment_high_knm = moment_about(high, face_hi);
    let (governing_side, governing_knm) = governing_side(moment_low_knm, moment_high_knm);

    FaceMoment {
        direction,
        section_width_mm: geometry.section_width(direction),
        cantilever_low_mm,
        cantilever_high_mm,
        moment_low_knm,
        moment_high_knm,
        governing_side,
        governing_knm,
    }
}

// ============================================================================
// One-way shear
// ============================================================================

/// Beam shear at `d` from each column face for one direction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OneWayShearDemand {
    pub direction: Direction,
    /// Distance of the section from the column face (mm)
    pub section_offset_mm: f64,
    /// Width of the section (mm)
    pub section_width_mm: f64,
    /// Shear on the low-side section (kN)
    pub shear_low_kn: f64,
    /// Shear on the high-side section (kN)
    pub shear_high_kn: f64,
    pub governing_side: Side,
    /// Design shear Vu (kN)
    pub governing_kn: f64,
}

/// Force on the footprint beyond the sections at `d` from each column face.
///
/// A section outside the footprint carries nothing, and the demand is never
/// negative.
///
/// # Example
///
/// ```rust
/// use footing_core::equations::footing::one_way_shear_demand;
/// use footing_core::geometry::{Direction, FoundationGeometry};
/// use footing_core::pressure::UniformPressure;
///
/// let g = FoundationGeometry::centered(2500.0, 2500.0, 400.0, 400.0).unwrap();
/// let q = UniformPressure::new(100.0);
/// let v = one_way_shear_demand(&q, &g, Direction::X, 317.0);
/// assert!((v.governing_kn - 100.0 * 2.5 * 0.733).abs() < 1e-9);
///
/// // Section past the edge
/// assert_eq!(one_way_shear_demand(&q, &g, Direction::X, 1200.0).governing_kn, 0.0);
/// ```
pub fn one_way_shear_demand(
    pressure: &dyn PressureDistribution,
    geometry: &FoundationGeometry,
    direction: Direction,
    d_mm: f64,
) -> OneWayShearDemand {
    let section_offset_mm = d_mm.max(0.0);
    let (low, high) = regions_beyond(geometry, direction, section_offset_mm);
    let force = |region: Option<Region>| region.map_or(0.0, |r| pressure.force_over(&r).0.max(0.0));

    let shear_low_kn = force(low);
    let shear_high_kn = force(high);
    let (governing_side, governing_kn) = governing_side(shear_low_kn, shear_high_kn);

    OneWayShearDemand {
        direction,
        section_offset_mm,
        section_width_mm: geometry.section_width(direction),
        shear_low_kn,
        shear_high_kn,
        governing_side,
        governing_kn,
    }
}

// ============================================================================
// Two-way shear
// ============================================================================

/// Punching shear demand on the critical rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PunchingShearDemand {
    /// Critical rectangle clipped to the footprint, `None` if nothing remains
    pub critical_region: Option<Region>,
    /// Enclosed area after clipping (mm²)
    pub enclosed_area_mm2: f64,
    /// Bearing force inside the critical rectangle (kN)
    pub enclosed_force_kn: f64,
    /// Design punching shear Vu (kN)
    pub demand_kn: f64,
}

/// Column load less the bearing reaction inside the critical rectangle
/// at `d/2` from the column faces.
///
/// # Example
///
/// ```rust
/// use footing_core::equations::footing::punching_shear_demand;
/// use footing_core::geometry::FoundationGeometry;
/// use footing_core::pressure::UniformPressure;
/// use footing_core::units::KiloNewtons;
///
/// let g = FoundationGeometry::centered(2500.0, 2500.0, 400.0, 400.0).unwrap();
/// let q = UniformPressure::new(256.0);
/// let v = punching_shear_demand(&q, &g, KiloNewtons(1600.0), 300.0);
/// // 1600 - 256 × 0.7²
/// assert!((v.demand_kn - 1474.56).abs() < 1e-9);
/// ```
pub fn punching_shear_demand(
    pressure: &dyn PressureDistribution,
    geometry: &FoundationGeometry,
    column_load: KiloNewtons,
    d_mm: f64,
) -> PunchingShearDemand {
    let d = d_mm.max(0.0);
    let critical = Region::centred(
        geometry.column_x_mm,
        geometry.column_y_mm,
        geometry.column_length_mm + d,
        geometry.column_width_mm + d,
    );
    let critical_region = critical.clip_to(geometry);
    let (enclosed_area_mm2, enclosed_force_kn) = match critical_region {
        Some(r) => (r.area_mm2().0, pressure.force_over(&r).0),
        None => (0.0, 0.0),
    };

    PunchingShearDemand {
        critical_region,
        enclosed_area_mm2,
        enclosed_force_kn,
        demand_kn: (column_load.0 - enclosed_force_kn).max(0.0),
    }
}
