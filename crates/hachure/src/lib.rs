//! # hachure
//!
//! Directional hatch fills for axis-aligned rectangles.
//!
//! Given an angle and a spacing step, the generator produces evenly spaced
//! parallel line segments clipped to a rectangle. Horizontal and vertical
//! angles take exact fast paths; every other angle goes through candidate
//! construction and Cohen-Sutherland clipping.

pub mod angle;
pub mod clip;
pub mod geometry;
pub mod hatch;

// Re-export common types at crate root for convenience.
pub use angle::{normalize_degrees, AngleClass, HatchDirection};
pub use clip::{clip_line_to_rect, OutCode};
pub use geometry::{Contour, Line, Point, Rect};
pub use hatch::{generate_crosshatch_lines, generate_hatch_lines, HatchError, Pattern};
