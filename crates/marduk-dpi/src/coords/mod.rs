//! Geometry value types for DPI conversion.
//!
//! Canonical CPU space:
//! - Logical units: 96 per inch, resolution independent
//! - Device units: physical pixels of the display surface
//! - Origin top-left, +X right, +Y down
//!
//! None of the types record which space they live in; callers track that.

mod matrix;
mod point;
mod rect;
mod size;
mod thickness;

pub use matrix::Matrix;
pub use point::Point;
pub use rect::Rect;
pub use size::Size;
pub use thickness::Thickness;
