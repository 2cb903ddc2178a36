//!
//! # Rasterization
//!
//! Converts screen-space primitives into pixels. The centerpiece is the scanline polygon filler:
//! an edge table of per-scanline increments swept top to bottom through an active edge list,
//! pairing edges into spans and interpolating `1/z` and `color/z` across each span so depth and
//! color recover their perspective-correct values at every pixel. Lines and points go through a
//! simpler plotter that applies the same depth rule.
//!
//! Everything here expects coordinates already in device space - x and y in pixels with row 0 at
//! the top, z holding the view depth in `(0, 1]` - which the scene graph interpreter produces by
//! running primitives through the view matrix and the homogeneous divide.
//!

mod edge_table;
mod line_raster;
mod scanline_fill;

pub use line_raster::*;
pub use scanline_fill::*;
