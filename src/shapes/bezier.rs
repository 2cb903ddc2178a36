use crate::error::*;
use crate::geometry::*;
use crate::raster;
use crate::render::*;
use crate::scene::*;

/// Subdivision stops once a segment's control hull fits inside a box this many pixels across
const FLATNESS_LIMIT: f64 = 1.0;

/// Hard cap on subdivision recursion, for curves with pathological control points
const MAX_SUBDIVISION_DEPTH: usize = 10;

///
/// A cubic bezier curve described by four control points
///
/// The curve passes through the first and last control points; the middle two shape it. Drawing
/// flattens the curve into line segments by repeated de Casteljau subdivision, splitting each
/// segment at its midpoint until the control hull is smaller than a pixel, so flattening is only
/// meaningful once the control points are in screen space.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BezierCurve {
    pub (crate) control:    [Point; 4],
    pub (crate) z_buffer:   bool,
}

impl BezierCurve {
    ///
    /// Creates a curve from its four control points
    ///
    #[inline]
    pub fn new(control: [Point; 4]) -> BezierCurve {
        BezierCurve {
            control:  control,
            z_buffer: true,
        }
    }

    /// The control points of this curve
    #[inline]
    pub fn control_points(&self) -> &[Point; 4] { &self.control }

    ///
    /// Enables or disables depth testing when this curve is drawn
    ///
    #[inline]
    pub fn set_z_buffer(&mut self, enabled: bool) {
        self.z_buffer = enabled;
    }

    /// True if this curve participates in depth testing
    #[inline]
    pub fn z_buffer_enabled(&self) -> bool { self.z_buffer }

    ///
    /// Transforms all four control points in place
    ///
    pub fn transform(&mut self, matrix: &Matrix) {
        for point in self.control.iter_mut() {
            *point = matrix.transform_point(point);
        }
    }

    ///
    /// Performs the homogeneous divide on all four control points
    ///
    pub fn normalize(&mut self) {
        for point in self.control.iter_mut() {
            point.normalize();
        }
    }

    ///
    /// Flattens this curve into a chain of points suitable for line drawing
    ///
    /// The chain starts at the first control point and ends at the last; interior points are
    /// added wherever subdivision decided the curve bends enough to matter.
    ///
    pub fn flatten(&self) -> Vec<Point> {
        let mut chain = vec![self.control[0]];
        Self::subdivide(&self.control, MAX_SUBDIVISION_DEPTH, &mut chain);

        chain
    }

    ///
    /// Splits a segment at its midpoint until it is flat enough, appending endpoints to the chain
    ///
    fn subdivide(control: &[Point; 4], depth: usize, chain: &mut Vec<Point>) {
        if depth == 0 || Self::is_flat(control) {
            chain.push(control[3]);
            return;
        }

        // De Casteljau split at t = 1/2: midpoints of the control edges, then midpoints of those
        let m01     = Self::midpoint(&control[0], &control[1]);
        let m12     = Self::midpoint(&control[1], &control[2]);
        let m23     = Self::midpoint(&control[2], &control[3]);
        let m012    = Self::midpoint(&m01, &m12);
        let m123    = Self::midpoint(&m12, &m23);
        let mid     = Self::midpoint(&m012, &m123);

        Self::subdivide(&[control[0], m01, m012, mid], depth - 1, chain);
        Self::subdivide(&[mid, m123, m23, control[3]], depth - 1, chain);
    }

    ///
    /// True once the control hull's bounding box is below the flatness limit
    ///
    fn is_flat(control: &[Point; 4]) -> bool {
        let mut min_x = control[0].x;
        let mut max_x = control[0].x;
        let mut min_y = control[0].y;
        let mut max_y = control[0].y;

        for point in control[1..].iter() {
            min_x = min_x.min(point.x);
            max_x = max_x.max(point.x);
            min_y = min_y.min(point.y);
            max_y = max_y.max(point.y);
        }

        (max_x - min_x) <= FLATNESS_LIMIT && (max_y - min_y) <= FLATNESS_LIMIT
    }

    #[inline]
    fn midpoint(a: &Point, b: &Point) -> Point {
        Point::new((a.x + b.x) * 0.5, (a.y + b.y) * 0.5, (a.z + b.z) * 0.5)
    }

    ///
    /// Draws this screen-space curve into an image using the state's current color
    ///
    pub fn draw(&self, state: &DrawState, image: &mut Image) -> Result<(), RenderError> {
        let chain       = self.flatten();
        let depth_test  = self.z_buffer && state.z_buffer;

        for pair in chain.windows(2) {
            raster::draw_line(&pair[0], &pair[1], state.color, depth_test, image);
        }

        Ok(())
    }
}
