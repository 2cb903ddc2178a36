//!
//! # Views
//!
//! Parameter blocks describing a camera, each able to build the single matrix that carries world
//! coordinates all the way to pixel coordinates. `View2D` frames a window on the z = 0 plane;
//! `View3D` is the full perspective pipeline with a view volume and a center of projection.
//!
//! Both use the same device convention: row 0 is the top of the image, and the view center maps
//! to the middle of the screen. The drawing routines and the rasterizer rely on that convention
//! and never re-flip.
//!

mod view2d;
mod view3d;

pub use view2d::*;
pub use view3d::*;
