//! # Foundation Geometry
//!
//! Plan dimensions of an isolated pad footing and the column it carries.
//!
//! ## Coordinate System
//!
//! The origin is one corner of the footprint. `x` runs along the foundation
//! length, `y` along the foundation width. The column position is the
//! column centroid measured from that origin, so a centred column sits at
//! `(length / 2, width / 2)`.
//!
//! ```text
//!   y
//!   ^
//!   |  +-------------------------+
//!   |  |                         |
//!   |  |        +-----+          |  width
//!   |  |        | col |          |
//!   |  |        +-----+          |
//!   |  +-------------------------+
//!   +----------- length ------------> x
//! ```
//!
//! The column must lie entirely within the footprint. Thickness is the only
//! field that changes after construction, so a design loop can resize the
//! pad without rebuilding the plan.

use serde::{Deserialize, Serialize};

use crate::errors::{ensure_non_negative, ensure_strictly_positive, CalcError, CalcResult};
use crate::units::{SqM, SqMm};

/// Default pad thickness (mm)
pub const DEFAULT_THICKNESS_MM: f64 = 400.0;

/// Plan direction of a check.
///
/// `X` checks bend or shear the pad along its length (critical sections are
/// lines of constant `x`, spanning the width). `Y` is the orthogonal case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    X,
    Y,
}

impl Direction {
    pub const BOTH: [Direction; 2] = [Direction::X, Direction::Y];

    pub fn label(&self) -> &'static str {
        match self {
            Direction::X => "x",
            Direction::Y => "y",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-direction", self.label())
    }
}

/// Footprint, thickness and column placement of a pad foundation.
///
/// ## JSON Example
///
/// ```json
/// {
///   "length_mm": 2500.0,
///   "width_mm": 2500.0,
///   "thickness_mm": 400.0,
///   "column_length_mm": 400.0,
///   "column_width_mm": 400.0,
///   "column_x_mm": 1250.0,
///   "column_y_mm": 1250.0
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoundationGeometry {
    /// Foundation length along x (mm)
    pub length_mm: f64,
    /// Foundation width along y (mm)
    pub width_mm: f64,
    /// Foundation thickness (mm)
    pub thickness_mm: f64,
    /// Column dimension along x (mm)
    pub column_length_mm: f64,
    /// Column dimension along y (mm)
    pub column_width_mm: f64,
    /// Column centroid x from the footprint origin (mm)
    pub column_x_mm: f64,
    /// Column centroid y from the footprint origin (mm)
    pub column_y_mm: f64,
}

impl FoundationGeometry {
    /// Create and validate a geometry with the default thickness.
    ///
    /// # Example
    ///
    /// ```rust
    /// use footing_core::geometry::FoundationGeometry;
    ///
    /// let g = FoundationGeometry::new(2500.0, 2500.0, 400.0, 400.0, 1250.0, 1250.0).unwrap();
    /// assert!((g.area_m2().0 - 6.25).abs() < 1e-12);
    ///
    /// // Column hanging off the footprint is rejected
    /// assert!(FoundationGeometry::new(2500.0, 2500.0, 400.0, 400.0, 100.0, 1250.0).is_err());
    /// ```
    pub fn new(
        length_mm: f64,
        width_mm: f64,
        column_length_mm: f64,
        column_width_mm: f64,
        column_x_mm: f64,
        column_y_mm: f64,
    ) -> CalcResult<Self> {
        let geometry = FoundationGeometry {
            length_mm,
            width_mm,
            thickness_mm: DEFAULT_THICKNESS_MM,
            column_length_mm,
            column_width_mm,
            column_x_mm,
            column_y_mm,
        };
        geometry.validate()?;
        Ok(geometry)
    }

    /// Geometry with the column centred on the footprint.
    pub fn centered(length_mm: f64, width_mm: f64, column_length_mm: f64, column_width_mm: f64) -> CalcResult<Self> {
        Self::new(
            length_mm,
            width_mm,
            column_length_mm,
            column_width_mm,
            length_mm / 2.0,
            width_mm / 2.0,
        )
    }

    /// Builder-style thickness override.
    pub fn with_thickness(mut self, thickness_mm: f64) -> CalcResult<Self> {
        self.set_thickness(thickness_mm)?;
        Ok(self)
    }

    /// Revise the thickness in place.
    pub fn set_thickness(&mut self, thickness_mm: f64) -> CalcResult<()> {
        ensure_strictly_positive("foundation_thickness", thickness_mm)?;
        self.thickness_mm = thickness_mm;
        Ok(())
    }

    /// Validate all dimensions and the column placement.
    pub fn validate(&self) -> CalcResult<()> {
        ensure_strictly_positive("foundation_length", self.length_mm)?;
        ensure_strictly_positive("foundation_width", self.width_mm)?;
        ensure_strictly_positive("foundation_thickness", self.thickness_mm)?;
        ensure_strictly_positive("column_length", self.column_length_mm)?;
        ensure_strictly_positive("column_width", self.column_width_mm)?;
        ensure_non_negative("col_pos_xdir", self.column_x_mm)?;
        ensure_non_negative("col_pos_ydir", self.column_y_mm)?;

        if self.column_length_mm > self.length_mm {
            return Err(CalcError::invalid_input(
                "column_length",
                self.column_length_mm.to_string(),
                format!("Column length exceeds foundation length of {} mm", self.length_mm),
            ));
        }
        if self.column_width_mm > self.width_mm {
            return Err(CalcError::invalid_input(
                "column_width",
                self.column_width_mm.to_string(),
                format!("Column width exceeds foundation width of {} mm", self.width_mm),
            ));
        }

        let (x_lo, x_hi) = self.column_span(Direction::X);
        if x_lo < 0.0 || x_hi > self.length_mm {
            return Err(CalcError::invalid_input(
                "col_pos_xdir",
                self.column_x_mm.to_string(),
                "Column must lie within the foundation footprint",
            ));
        }
        let (y_lo, y_hi) = self.column_span(Direction::Y);
        if y_lo < 0.0 || y_hi > self.width_mm {
            return Err(CalcError::invalid_input(
                "col_pos_ydir",
                self.column_y_mm.to_string(),
                "Column must lie within the foundation footprint",
            ));
        }
        Ok(())
    }

    /// Footprint area (mm²)
    pub fn area_mm2(&self) -> SqMm {
        SqMm(self.length_mm * self.width_mm)
    }

    /// Footprint area (m²)
    pub fn area_m2(&self) -> SqM {
        self.area_mm2().into()
    }

    /// Footprint extent along a direction (length for X, width for Y)
    pub fn extent(&self, direction: Direction) -> f64 {
        match direction {
            Direction::X => self.length_mm,
            Direction::Y => self.width_mm,
        }
    }

    /// Footprint extent across a direction: the width of a critical section
    /// for checks in that direction.
    pub fn section_width(&self, direction: Direction) -> f64 {
        match direction {
            Direction::X => self.width_mm,
            Direction::Y => self.length_mm,
        }
    }

    /// Column dimension along a direction
    pub fn column_dimension(&self, direction: Direction) -> f64 {
        match direction {
            Direction::X => self.column_length_mm,
            Direction::Y => self.column_width_mm,
        }
    }

    /// Column centroid coordinate along a direction
    pub fn column_position(&self, direction: Direction) -> f64 {
        match direction {
            Direction::X => self.column_x_mm,
            Direction::Y => self.column_y_mm,
        }
    }

    /// Coordinates of the two column faces along a direction `(low, high)`
    pub fn column_span(&self, direction: Direction) -> (f64, f64) {
        let centre = self.column_position(direction);
        let half = self.column_dimension(direction) / 2.0;
        (centre - half, centre + half)
    }

    /// Overhang beyond each column face along a direction `(low side, high side)`
    pub fn cantilever_lengths(&self, direction: Direction) -> (f64, f64) {
        let (lo, hi) = self.column_span(direction);
        (lo, self.extent(direction) - hi)
    }

    /// βc: long over short column dimension
    pub fn column_aspect_ratio(&self) -> f64 {
        let long = self.column_length_mm.max(self.column_width_mm);
        let short = self.column_length_mm.min(self.column_width_mm);
        long / short
    }

    /// Column perimeter (mm)
    pub fn column_perimeter(&self) -> f64 {
        2.0 * (self.column_length_mm + self.column_width_mm)
    }

    /// Column centroid offset from the footprint centroid `(ex, ey)` in mm
    pub fn column_offset(&self) -> (f64, f64) {
        (
            self.column_x_mm - self.length_mm / 2.0,
            self.column_y_mm - self.width_mm / 2.0,
        )
    }

    /// True when the column centroid coincides with the footprint centroid
    pub fn is_concentric(&self) -> bool {
        let (ex, ey) = self.column_offset();
        ex.abs() < 1e-9 && ey.abs() < 1e-9
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pad() -> FoundationGeometry {
        FoundationGeometry::centered(2500.0, 2000.0, 400.0, 300.0).unwrap()
    }

    #[test]
    fn test_area() {
        let g = pad();
        assert_eq!(g.area_mm2().0, 5_000_000.0);
        assert!((g.area_m2().0 - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_default_thickness() {
        assert_eq!(pad().thickness_mm, DEFAULT_THICKNESS_MM);
    }

    #[test]
    fn test_set_thickness() {
        let mut g = pad();
        g.set_thickness(550.0).unwrap();
        assert_eq!(g.thickness_mm, 550.0);
        assert!(g.set_thickness(0.0).is_err());
        assert!(g.set_thickness(f64::NAN).is_err());
        assert_eq!(g.thickness_mm, 550.0);
    }

    #[test]
    fn test_cantilevers_centered() {
        let g = pad();
        let (left, right) = g.cantilever_lengths(Direction::X);
        assert!((left - 1050.0).abs() < 1e-9);
        assert!((right - 1050.0).abs() < 1e-9);
        let (low, high) = g.cantilever_lengths(Direction::Y);
        assert!((low - 850.0).abs() < 1e-9);
        assert!((high - 850.0).abs() < 1e-9);
    }

    #[test]
    fn test_cantilevers_offset_column() {
        let g = FoundationGeometry::new(3000.0, 2000.0, 400.0, 400.0, 1000.0, 1000.0).unwrap();
        let (left, right) = g.cantilever_lengths(Direction::X);
        assert!((left - 800.0).abs() < 1e-9);
        assert!((right - 1800.0).abs() < 1e-9);
        assert!(!g.is_concentric());
        assert_eq!(g.column_offset(), (-500.0, 0.0));
    }

    #[test]
    fn test_section_width() {
        let g = pad();
        assert_eq!(g.section_width(Direction::X), 2000.0);
        assert_eq!(g.section_width(Direction::Y), 2500.0);
    }

    #[test]
    fn test_aspect_ratio() {
        let g = pad();
        assert!((g.column_aspect_ratio() - 400.0 / 300.0).abs() < 1e-12);
        assert_eq!(g.column_perimeter(), 1400.0);
    }

    #[test]
    fn test_rejects_bad_dimensions() {
        assert!(FoundationGeometry::centered(0.0, 2000.0, 400.0, 400.0).is_err());
        assert!(FoundationGeometry::centered(2500.0, -1.0, 400.0, 400.0).is_err());
        assert!(FoundationGeometry::centered(2500.0, 2000.0, 0.0, 400.0).is_err());
        assert!(FoundationGeometry::centered(300.0, 2000.0, 400.0, 400.0).is_err());
    }

    #[test]
    fn test_rejects_column_outside_footprint() {
        let err = FoundationGeometry::new(2500.0, 2500.0, 400.0, 400.0, 2400.0, 1250.0).unwrap_err();
        match err {
            CalcError::InvalidInput { field, .. } => assert_eq!(field, "col_pos_xdir"),
            other => panic!("unexpected: {:?}", other),
        }
        // Flush with the edge is allowed
        assert!(FoundationGeometry::new(2500.0, 2500.0, 400.0, 400.0, 200.0, 200.0).is_ok());
    }

    #[test]
    fn test_serialization() {
        let g = pad();
        let json = serde_json::to_string(&g).unwrap();
        let roundtrip: FoundationGeometry = serde_json::from_str(&json).unwrap();
        assert_eq!(g, roundtrip);
    }
}
