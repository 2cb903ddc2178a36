//!
//! # Shapes
//!
//! The drawable entities: lines, open polylines, closed polygons and cubic bezier curves. Each
//! owns its vertices outright and supports the same lifecycle - transform in place through the
//! matrix pipeline, divide through the homogeneous weight, then draw into an image. Polygons
//! additionally carry the optional per-vertex colors and normals that interpolated shading
//! works from.
//!

mod bezier;
mod line;
mod polygon;
mod polyline;

pub use bezier::*;
pub use line::*;
pub use polygon::*;
pub use polyline::*;
