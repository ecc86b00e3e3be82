//! Hatch line generation for rectangle fills.
//!
//! Horizontal and vertical angles are swept directly across the rectangle
//! without clipping. Oblique angles build candidate lines long enough to
//! span the rectangle from any direction and clip each one down.

use crate::angle::{AngleClass, HatchDirection};
use crate::clip::clip_line_to_rect;
use crate::geometry::{Line, Rect};

// Re-import Point only for tests
#[cfg(test)]
use crate::geometry::Point;

/// Error produced when a hatch request is invalid.
#[derive(Debug)]
pub enum HatchError {
    /// The spacing step was zero or negative.
    InvalidStep(f64),
}

impl std::fmt::Display for HatchError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HatchError::InvalidStep(step) => {
                write!(f, "step must be greater than zero (got {})", step)
            }
        }
    }
}

// Makes our error type work with the standard error trait
impl std::error::Error for HatchError {}

/// Generate evenly spaced hatch lines covering a rectangle.
///
/// `angle_degrees` may be any finite angle; it is normalized to `[0, 360)`.
/// Lines are returned in sweep order: bottom to top for 0 degrees, top to
/// bottom for 180, left to right for 90/270, and by ascending perpendicular
/// offset for oblique angles. Every returned endpoint lies within the
/// rectangle.
pub fn generate_hatch_lines(
    rect: &Rect,
    angle_degrees: f64,
    step: f64,
) -> Result<Vec<Line>, HatchError> {
    if step <= 0.0 {
        return Err(HatchError::InvalidStep(step));
    }

    let mut lines = Vec::new();

    match AngleClass::of(angle_degrees) {
        AngleClass::Horizontal => {
            let mut y = rect.min.y;
            while y <= rect.max.y {
                lines.push(Line::new(rect.min.x, y, rect.max.x, y));
                y += step;
            }
        }
        AngleClass::HorizontalReversed => {
            // Same segments as 0 degrees, swept the other way.
            let mut y = rect.max.y;
            while y >= rect.min.y {
                lines.push(Line::new(rect.min.x, y, rect.max.x, y));
                y -= step;
            }
        }
        AngleClass::Vertical => {
            let mut x = rect.min.x;
            while x <= rect.max.x {
                lines.push(Line::new(x, rect.min.y, x, rect.max.y));
                x += step;
            }
        }
        AngleClass::Oblique(deg) => {
            // Half the diagonal reaches any point of the rectangle from its
            // center, so candidates at +-half_span cover the whole area and
            // every candidate fully spans it lengthwise.
            let half_span = rect.diagonal() / 2.0;
            let center = rect.center();
            let dir = HatchDirection::from_degrees(deg);
            let num_offsets = (half_span / step).ceil() as i32;

            for i in -num_offsets..=num_offsets {
                let offset = i as f64 * step;
                let candidate = dir.candidate(center, offset, half_span);
                if let Some(clipped) = clip_line_to_rect(candidate, rect) {
                    lines.push(clipped);
                }
            }
        }
    }

    Ok(lines)
}

/// Generate a crosshatch: one hatch family plus a second one rotated 90
/// degrees.
pub fn generate_crosshatch_lines(
    rect: &Rect,
    angle_degrees: f64,
    step: f64,
) -> Result<Vec<Line>, HatchError> {
    let mut lines = generate_hatch_lines(rect, angle_degrees, step)?;
    let cross = generate_hatch_lines(rect, angle_degrees + 90.0, step)?;
    lines.extend(cross);
    Ok(lines)
}

/// Available fill patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern {
    Lines,
    Crosshatch,
}

impl Pattern {
    /// Get all available patterns.
    pub fn all() -> &'static [Pattern] {
        &[Pattern::Lines, Pattern::Crosshatch]
    }

    /// Get pattern name as string.
    pub fn name(&self) -> &'static str {
        match self {
            Pattern::Lines => "lines",
            Pattern::Crosshatch => "crosshatch",
        }
    }

    /// Parse pattern from string.
    pub fn from_name(name: &str) -> Option<Pattern> {
        match name.to_lowercase().as_str() {
            "lines" | "hatch" => Some(Pattern::Lines),
            "crosshatch" | "cross" => Some(Pattern::Crosshatch),
            _ => None,
        }
    }

    /// Generate this pattern's lines for a rectangle.
    pub fn generate(
        &self,
        rect: &Rect,
        angle_degrees: f64,
        step: f64,
    ) -> Result<Vec<Line>, HatchError> {
        match self {
            Pattern::Lines => generate_hatch_lines(rect, angle_degrees, step),
            Pattern::Crosshatch => generate_crosshatch_lines(rect, angle_degrees, step),
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
