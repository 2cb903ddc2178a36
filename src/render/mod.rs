//!
//! # Render targets
//!
//! The `Image` boundary type the rest of the pipeline draws into: an RGB pixel buffer plus the
//! parallel depth buffer the rasterizer tests against. With the `render_png` feature enabled
//! (the default), an image can also encode itself as a PNG for the demo programs and external
//! collaborators; no other file format lives in this crate.
//!

mod image;
#[cfg(feature = "render_png")]
mod png_target;

pub use image::*;
