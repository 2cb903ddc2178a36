//!
//! # Geometry
//!
//! The value types everything else is built from: homogeneous points, weightless vectors, 4x4
//! transforms and clamped RGB colors. These are plain copyable values with no ownership story;
//! primitives and the scene graph copy them rather than share them, which is what lets a module
//! be traversed read-only from any number of threads.
//!

mod color;
mod matrix;
mod point;
mod vector;

pub use color::*;
pub use matrix::*;
pub use point::*;
pub use vector::*;
