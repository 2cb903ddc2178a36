use super::draw_state::*;
use super::element::*;
use crate::error::*;
use crate::geometry::*;
use crate::lighting::*;
use crate::raster;
use crate::render::*;
use crate::shapes::*;

use std::sync::Arc;

///
/// An ordered program of transform and drawing instructions
///
/// A module is built by appending elements (geometry is deep-copied at append time) and can then
/// be drawn any number of times; drawing is read-only, so the same module can render into
/// separate images on separate threads. Modules form a hierarchy through `SubModule` elements,
/// which share the referenced module rather than copying it - the standard way to instance a
/// sub-scene (a wheel, a tree, a leg of a spacecraft) several times under different transforms.
///
/// While drawing, a module maintains a local transform matrix - identity on entry, updated only
/// by its own transform elements - and a private copy of the draw state. Geometry is transformed
/// by the local matrix, then the caller's global matrix (which puts it in world space, where
/// lighting is evaluated), then the view matrix and the homogeneous divide, which lands it in
/// screen space for the rasterizer. A sub-module is drawn with the global matrix advanced by the
/// parent's local matrix and a copy of the parent's draw state, so nothing a child does can leak
/// back into the instructions after it.
///
#[derive(Clone, Debug, Default)]
pub struct Module {
    elements: Vec<Element>,
}

impl Module {
    ///
    /// Creates an empty module
    ///
    pub fn new() -> Module {
        Module { elements: vec![] }
    }

    /// The instructions in this module, in the order they will run
    #[inline]
    pub fn elements(&self) -> &[Element] { &self.elements }

    /// The number of instructions in this module
    #[inline]
    pub fn len(&self) -> usize { self.elements.len() }

    /// True if this module contains no instructions
    #[inline]
    pub fn is_empty(&self) -> bool { self.elements.is_empty() }

    ///
    /// Appends an instruction to the end of the program
    ///
    #[inline]
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    ///
    /// Appends an instruction resetting the local transform to the identity
    ///
    pub fn identity(&mut self) {
        self.push(Element::IdentityTransform);
    }

    ///
    /// Appends a transform, composed closest to the object (on the right of everything so far)
    ///
    pub fn transform(&mut self, matrix: Matrix) {
        self.push(Element::MultiplyTransform(matrix));
    }

    ///
    /// Appends an instruction setting the current drawing color
    ///
    pub fn color(&mut self, color: Color) {
        self.push(Element::Color(color));
    }

    ///
    /// Appends an instruction setting the diffuse reflectance
    ///
    pub fn body_color(&mut self, color: Color) {
        self.push(Element::BodyColor(color));
    }

    ///
    /// Appends an instruction setting the specular reflectance
    ///
    pub fn surface_color(&mut self, color: Color) {
        self.push(Element::SurfaceColor(color));
    }

    ///
    /// Appends an instruction setting the specular exponent
    ///
    pub fn surface_coefficient(&mut self, coefficient: f32) {
        self.push(Element::SurfaceCoefficient(coefficient));
    }

    ///
    /// Appends a point to draw
    ///
    pub fn point(&mut self, point: Point) {
        self.push(Element::Point(point));
    }

    ///
    /// Appends a line to draw
    ///
    pub fn line(&mut self, line: Line) {
        self.push(Element::Line(line));
    }

    ///
    /// Appends a polyline to draw
    ///
    pub fn polyline(&mut self, polyline: Polyline) {
        self.push(Element::Polyline(polyline));
    }

    ///
    /// Appends a polygon to draw
    ///
    pub fn polygon(&mut self, polygon: Polygon) {
        self.push(Element::Polygon(polygon));
    }

    ///
    /// Appends a bezier curve to draw
    ///
    pub fn bezier(&mut self, bezier: BezierCurve) {
        self.push(Element::Bezier(bezier));
    }

    ///
    /// Appends a reference to another module, drawn under the transform accumulated so far
    ///
    /// The module is shared, not copied: appending the same `Arc` after different transforms is
    /// how one sub-scene gets instanced in several places.
    ///
    pub fn module(&mut self, module: Arc<Module>) {
        self.push(Element::SubModule(module));
    }

    ///
    /// Appends a translation transform
    ///
    pub fn translate(&mut self, tx: f64, ty: f64, tz: f64) {
        self.transform(Matrix::translate(tx, ty, tz));
    }

    ///
    /// Appends a scale transform
    ///
    pub fn scale(&mut self, sx: f64, sy: f64, sz: f64) {
        self.transform(Matrix::scale(sx, sy, sz));
    }

    ///
    /// Appends a translation within the z = 0 plane
    ///
    pub fn translate_2d(&mut self, tx: f64, ty: f64) {
        self.transform(Matrix::translate_2d(tx, ty));
    }

    ///
    /// Appends a scale within the z = 0 plane
    ///
    pub fn scale_2d(&mut self, sx: f64, sy: f64) {
        self.transform(Matrix::scale_2d(sx, sy));
    }

    ///
    /// Appends a rotation about the x axis (radians)
    ///
    pub fn rotate_x(&mut self, angle: f64) {
        self.transform(Matrix::rotate_x(angle));
    }

    ///
    /// Appends a rotation about the y axis (radians)
    ///
    pub fn rotate_y(&mut self, angle: f64) {
        self.transform(Matrix::rotate_y(angle));
    }

    ///
    /// Appends a rotation about the z axis (radians)
    ///
    pub fn rotate_z(&mut self, angle: f64) {
        self.transform(Matrix::rotate_z(angle));
    }

    ///
    /// Appends the rotation carrying the orthonormal basis {u, v, w} onto the world axes
    ///
    pub fn rotate_axes(&mut self, u: &Vector, v: &Vector, w: &Vector) {
        self.transform(Matrix::rotate_axes(u, v, w));
    }

    ///
    /// Appends a shear within the z = 0 plane
    ///
    pub fn shear_2d(&mut self, shx: f64, shy: f64) {
        self.transform(Matrix::shear_2d(shx, shy));
    }

    ///
    /// Appends a shear of x and y proportional to z
    ///
    pub fn shear_z(&mut self, shx: f64, shy: f64) {
        self.transform(Matrix::shear_z(shx, shy));
    }

    ///
    /// Interprets this module's instructions, rasterizing its geometry into an image
    ///
    /// `view` maps world coordinates to pixels (from `View2D` or `View3D`); `global` is the
    /// transform this module is nested under (the identity at the top of a scene); `state` and
    /// `lights` supply the initial drawing attributes and the light sources. The caller's state
    /// is copied, never mutated, so the same state can start any number of draws.
    ///
    pub fn draw(&self, view: &Matrix, global: &Matrix, state: &DrawState, lights: &LightingSet, image: &mut Image) -> Result<(), RenderError> {
        let mut ltm     = Matrix::identity();
        let mut state   = *state;

        for element in self.elements.iter() {
            match element {
                Element::IdentityTransform          => { ltm = Matrix::identity(); }
                Element::MultiplyTransform(matrix)  => { ltm = matrix.multiply(&ltm); }

                Element::Color(color)               => { state.color = *color; }
                Element::BodyColor(color)           => { state.body_color = *color; }
                Element::SurfaceColor(color)        => { state.surface_color = *color; }
                Element::SurfaceCoefficient(value)  => { state.surface_coefficient = *value; }

                Element::Point(point)               => {
                    let world       = global.multiply(&ltm);
                    let mut point   = world.transform_point(point);

                    point = view.transform_point(&point);
                    point.normalize();

                    raster::draw_point(&point, state.color, state.z_buffer, image);
                }

                Element::Line(line)                 => {
                    let world       = global.multiply(&ltm);
                    let mut line    = *line;

                    line.transform(&world);
                    line.transform(view);
                    line.normalize();
                    line.draw(&state, image)?;
                }

                Element::Polyline(polyline)         => {
                    let world           = global.multiply(&ltm);
                    let mut polyline    = polyline.clone();

                    polyline.transform(&world);
                    polyline.transform(view);
                    polyline.normalize();
                    polyline.draw(&state, image)?;
                }

                Element::Polygon(polygon)           => {
                    let world       = global.multiply(&ltm);
                    let mut polygon = polygon.clone();

                    // Lighting runs in world space, before the view transform distorts it
                    polygon.transform(&world);
                    polygon.shade(&state, lights);

                    polygon.transform(view);
                    polygon.normalize();
                    polygon.draw(&state, image)?;
                }

                Element::Bezier(bezier)             => {
                    let world       = global.multiply(&ltm);
                    let mut bezier  = *bezier;

                    bezier.transform(&world);
                    bezier.transform(view);
                    bezier.normalize();
                    bezier.draw(&state, image)?;
                }

                Element::SubModule(child)           => {
                    // The child starts with its own identity LTM and a copy of our state
                    let child_global = global.multiply(&ltm);
                    child.draw(view, &child_global, &state, lights, image)?;
                }
            }
        }

        Ok(())
    }
}
