use crate::error::*;
use crate::geometry::*;
use crate::raster;
use crate::render::*;
use crate::scene::*;

///
/// A straight segment between two points
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    pub start:          Point,
    pub end:            Point,
    pub (crate) z_buffer: bool,
}

impl Line {
    ///
    /// Creates a line between two points (depth testing enabled)
    ///
    #[inline]
    pub fn new(start: Point, end: Point) -> Line {
        Line {
            start:    start,
            end:      end,
            z_buffer: true,
        }
    }

    ///
    /// Creates a 2D line on the z = 0 plane
    ///
    #[inline]
    pub fn new_2d(x0: f64, y0: f64, x1: f64, y1: f64) -> Line {
        Line::new(Point::new_2d(x0, y0), Point::new_2d(x1, y1))
    }

    ///
    /// Enables or disables depth testing when this line is drawn
    ///
    #[inline]
    pub fn set_z_buffer(&mut self, enabled: bool) {
        self.z_buffer = enabled;
    }

    /// True if this line participates in depth testing
    #[inline]
    pub fn z_buffer_enabled(&self) -> bool { self.z_buffer }

    ///
    /// Transforms both endpoints in place
    ///
    #[inline]
    pub fn transform(&mut self, matrix: &Matrix) {
        self.start  = matrix.transform_point(&self.start);
        self.end    = matrix.transform_point(&self.end);
    }

    ///
    /// Performs the homogeneous divide on both endpoints
    ///
    #[inline]
    pub fn normalize(&mut self) {
        self.start.normalize();
        self.end.normalize();
    }

    ///
    /// Draws this line into an image using the state's current color
    ///
    /// The line is expected to be in screen space already (the scene graph interpreter handles
    /// the transform pipeline before calling this).
    ///
    pub fn draw(&self, state: &DrawState, image: &mut Image) -> Result<(), RenderError> {
        raster::draw_line(&self.start, &self.end, state.color, self.z_buffer && state.z_buffer, image);

        Ok(())
    }
}
