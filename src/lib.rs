//!
//! # polyscan
//!
//! A software rendering pipeline: scenes are described as hierarchical modules of transform and
//! drawing instructions, and rendered to a pixel buffer by a depth-buffered, perspective-correct
//! scanline rasterizer. No GPU or external graphics API is involved anywhere.
//!
//! A client builds one or more `Module`s (which may reference each other to instance sub-scenes),
//! derives a view matrix from a `View2D` or `View3D`, then calls `Module::draw` with the view,
//! a starting global transform, a `DrawState` and a `LightingSet` to rasterize into an `Image`.
//!

pub mod error;

/// The value types the pipeline is built from: homogeneous points, vectors, 4x4 transforms, colors
pub mod geometry;

/// The drawable entities: lines, polylines, polygons and bezier curves
pub mod shapes;

/// View parameter blocks and the matrices that map world coordinates to pixels
pub mod view;

/// Light sources and the illumination formula
pub mod lighting;

/// The scanline polygon rasterizer and the z-buffered line and point plotters
pub mod raster;

/// Draw state, scene graph modules and the instruction interpreter
pub mod scene;

/// The image boundary type: pixel and depth buffers, plus the optional PNG target
pub mod render;

pub use self::error::*;
