//! Cohen-Sutherland line clipping against an axis-aligned rectangle.
//!
//! Each endpoint gets a 4-bit outcode describing which rectangle edges it
//! violates. Lines with both codes empty are accepted as-is, lines whose
//! codes share a bit are rejected, and everything else is trimmed edge by
//! edge until one of those two cases holds.

use crate::geometry::{Line, Rect};

bitflags::bitflags! {
    /// Outcode bits for a point relative to a rectangle.
    ///
    /// The empty set means the point is inside (boundary included). At most
    /// one of LEFT/RIGHT and one of BOTTOM/TOP can be set at a time.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct OutCode: u8 {
        const LEFT = 0b0001;
        const RIGHT = 0b0010;
        const BOTTOM = 0b0100;
        const TOP = 0b1000;
    }
}

impl OutCode {
    /// Classify a point against the rectangle's edges.
    #[inline]
    pub fn of(x: f64, y: f64, rect: &Rect) -> OutCode {
        let mut code = OutCode::empty();
        if x < rect.min.x {
            code |= OutCode::LEFT;
        } else if x > rect.max.x {
            code |= OutCode::RIGHT;
        }
        if y < rect.min.y {
            code |= OutCode::BOTTOM;
        } else if y > rect.max.y {
            code |= OutCode::TOP;
        }
        code
    }
}

/// Clip a line segment to a rectangle.
///
/// Returns the surviving portion of the line, or `None` if the line lies
/// entirely outside. A line already inside comes back unchanged.
pub fn clip_line_to_rect(line: Line, rect: &Rect) -> Option<Line> {
    let (mut x1, mut y1) = (line.x1, line.y1);
    let (mut x2, mut y2) = (line.x2, line.y2);

    let mut code1 = OutCode::of(x1, y1, rect);
    let mut code2 = OutCode::of(x2, y2, rect);

    loop {
        if (code1 | code2).is_empty() {
            // Both endpoints inside.
            return Some(Line::new(x1, y1, x2, y2));
        }
        if !(code1 & code2).is_empty() {
            // Both endpoints beyond the same edge.
            return None;
        }

        // Trim the endpoint that is outside, preferring the first.
        let outside = if !code1.is_empty() { code1 } else { code2 };

        // Each trim lands the moved endpoint exactly on the violated edge,
        // so its bit clears and the loop makes progress. The divisor cannot
        // be zero: a zero delta on that axis would put the same bit in both
        // codes and reject above.
        let (x, y) = if outside.contains(OutCode::TOP) {
            (x1 + (x2 - x1) * (rect.max.y - y1) / (y2 - y1), rect.max.y)
        } else if outside.contains(OutCode::BOTTOM) {
            (x1 + (x2 - x1) * (rect.min.y - y1) / (y2 - y1), rect.min.y)
        } else if outside.contains(OutCode::RIGHT) {
            (rect.max.x, y1 + (y2 - y1) * (rect.max.x - x1) / (x2 - x1))
        } else {
            (rect.min.x, y1 + (y2 - y1) * (rect.min.x - x1) / (x2 - x1))
        };

        if outside == code1 {
            x1 = x;
            y1 = y;
            code1 = OutCode::of(x1, y1, rect);
        } else {
            x2 = x;
            y2 = y;
            code2 = OutCode::of(x2, y2, rect);
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
