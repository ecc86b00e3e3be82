//! Angle normalization and hatch direction vectors.

use std::f64::consts::PI;
use crate::geometry::{Line, Point};

/// Normalize an angle in degrees to the range `[0, 360)`.
///
/// Accepts any finite input: `-90` becomes `270`, `720` becomes `0`.
#[inline]
pub fn normalize_degrees(angle_degrees: f64) -> f64 {
    let mut a = angle_degrees % 360.0;
    if a < 0.0 {
        a += 360.0;
    }
    a
}

/// How a hatch angle is handled by the generator.
///
/// The axis-aligned classes take fast paths that never touch the clipper.
/// Classification is exact: 89.999 degrees is oblique, not vertical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AngleClass {
    /// 0 degrees: horizontal lines swept bottom to top.
    Horizontal,
    /// 180 degrees: the same horizontal lines swept top to bottom.
    HorizontalReversed,
    /// 90 or 270 degrees: vertical lines swept left to right.
    Vertical,
    /// Everything else, carrying the normalized angle in degrees.
    Oblique(f64),
}

impl AngleClass {
    /// Normalize an angle and classify it.
    pub fn of(angle_degrees: f64) -> AngleClass {
        let a = normalize_degrees(angle_degrees);
        if a == 0.0 {
            AngleClass::Horizontal
        } else if a == 180.0 {
            AngleClass::HorizontalReversed
        } else if a == 90.0 || a == 270.0 {
            AngleClass::Vertical
        } else {
            AngleClass::Oblique(a)
        }
    }
}

/// Unit direction vectors for hatch lines at an angle.
///
/// `(dx, dy)` runs along the lines, `(px, py)` is its perpendicular and
/// carries the spacing between lines.
#[derive(Debug, Clone, Copy)]
pub struct HatchDirection {
    pub dx: f64,
    pub dy: f64,
    pub px: f64,
    pub py: f64,
}

impl HatchDirection {
    /// Create direction vectors from an angle in radians.
    pub fn new(angle_rad: f64) -> Self {
        let cos_a = angle_rad.cos();
        let sin_a = angle_rad.sin();
        Self {
            dx: cos_a,
            dy: sin_a,
            px: -sin_a,
            py: cos_a,
        }
    }

    /// Create from an angle in degrees.
    pub fn from_degrees(angle_degrees: f64) -> Self {
        Self::new(angle_degrees * PI / 180.0)
    }

    /// Build one hatch candidate: a segment centered `offset` along the
    /// perpendicular from `center`, extending `half_length` both ways
    /// along the hatch direction.
    pub fn candidate(&self, center: Point, offset: f64, half_length: f64) -> Line {
        let cx = center.x + self.px * offset;
        let cy = center.y + self.py * offset;

        Line::new(
            cx - self.dx * half_length,
            cy - self.dy * half_length,
            cx + self.dx * half_length,
            cy + self.dy * half_length,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_keeps_range() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(45.5), 45.5);
        assert_eq!(normalize_degrees(359.9), 359.9);
    }

    #[test]
    fn normalize_folds_full_turns() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(405.0), 45.0);
    }

    #[test]
    fn normalize_lifts_negative_angles() {
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-180.0), 180.0);
        assert_eq!(normalize_degrees(-450.0), 270.0);
    }

    #[test]
    fn classify_axis_angles() {
        assert_eq!(AngleClass::of(0.0), AngleClass::Horizontal);
        assert_eq!(AngleClass::of(360.0), AngleClass::Horizontal);
        assert_eq!(AngleClass::of(180.0), AngleClass::HorizontalReversed);
        assert_eq!(AngleClass::of(-180.0), AngleClass::HorizontalReversed);
        assert_eq!(AngleClass::of(90.0), AngleClass::Vertical);
        assert_eq!(AngleClass::of(270.0), AngleClass::Vertical);
        assert_eq!(AngleClass::of(-90.0), AngleClass::Vertical);
        assert_eq!(AngleClass::of(-270.0), AngleClass::Vertical);
    }

    #[test]
    fn classify_oblique_angles() {
        assert_eq!(AngleClass::of(45.0), AngleClass::Oblique(45.0));
        assert_eq!(AngleClass::of(-45.0), AngleClass::Oblique(315.0));
        // Exact comparison: almost-vertical is still oblique.
        assert_eq!(AngleClass::of(89.999), AngleClass::Oblique(89.999));
    }

    #[test]
    fn direction_is_unit_length() {
        for deg in [0.0, 30.0, 45.0, 90.0, 133.0, 270.0] {
            let dir = HatchDirection::from_degrees(deg);
            let len = (dir.dx * dir.dx + dir.dy * dir.dy).sqrt();
            assert!((len - 1.0).abs() < 1e-12, "angle {} gave length {}", deg, len);
        }
    }

    #[test]
    fn perpendicular_is_orthogonal() {
        for deg in [0.0, 30.0, 45.0, 90.0, 133.0, 270.0] {
            let dir = HatchDirection::from_degrees(deg);
            let dot = dir.dx * dir.px + dir.dy * dir.py;
            assert!(dot.abs() < 1e-12, "angle {} gave dot product {}", deg, dot);
        }
    }

    #[test]
    fn horizontal_direction_vectors() {
        let dir = HatchDirection::from_degrees(0.0);
        assert_eq!(dir.dx, 1.0);
        assert_eq!(dir.dy, 0.0);
        // Perpendicular points straight up.
        assert_eq!(dir.px, -0.0);
        assert_eq!(dir.py, 1.0);
    }

    #[test]
    fn candidate_spans_both_directions() {
        let dir = HatchDirection::from_degrees(0.0);
        let line = dir.candidate(Point::new(5.0, 5.0), 2.0, 10.0);
        assert_eq!(line, Line::new(-5.0, 7.0, 15.0, 7.0));
    }
}
