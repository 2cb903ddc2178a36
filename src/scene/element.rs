use super::module::*;
use crate::geometry;
use crate::shapes;

use std::sync::Arc;

///
/// One instruction in a module's program
///
/// Elements are a closed set: transforms that update the module's local matrix, attribute changes
/// that update the module's copy of the draw state, primitives to draw, and references to other
/// modules to draw nested under the accumulated transform.
///
/// Ownership is deliberately uneven. The geometry and attribute variants own a deep copy of their
/// payload, taken when the element is appended, so later changes to the caller's value never
/// reach a module that already recorded it. The `SubModule` variant instead holds a shared handle
/// to another module: referencing is what lets one sub-scene be instanced many times under
/// different transforms without copying it, and the reference count keeps the child alive for as
/// long as anything still points at it.
///
#[derive(Clone, Debug)]
pub enum Element {
    /// Resets the module's local transform to the identity
    IdentityTransform,

    /// Multiplies the module's local transform on the left (closest to the object)
    MultiplyTransform(geometry::Matrix),

    /// Sets the current drawing color
    Color(geometry::Color),

    /// Sets the diffuse reflectance used by the lighting model
    BodyColor(geometry::Color),

    /// Sets the specular reflectance used by the lighting model
    SurfaceColor(geometry::Color),

    /// Sets the specular exponent used by the lighting model
    SurfaceCoefficient(f32),

    /// Draws a single point
    Point(geometry::Point),

    /// Draws a line segment
    Line(shapes::Line),

    /// Draws an open chain of line segments
    Polyline(shapes::Polyline),

    /// Draws a closed, filled (or wireframed) polygon
    Polygon(shapes::Polygon),

    /// Draws a cubic bezier curve
    Bezier(shapes::BezierCurve),

    /// Draws another module under the transform accumulated so far
    SubModule(Arc<Module>),
}
