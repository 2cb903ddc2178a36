//!
//! # Lighting
//!
//! Light sources and the illumination formula that combines them. A `LightingSet` is a bounded,
//! ordered collection of ambient, directional, point and spot lights; its `shade` operation sums
//! each light's diffuse and specular contribution for one surface point. The scene graph
//! evaluates lighting in world space at the polygon's vertices (or once per face for flat
//! shading) before anything reaches the rasterizer.
//!

mod light;
mod lighting_set;

pub use light::*;
pub use lighting_set::*;
