use crate::error::*;
use crate::geometry::*;
use crate::raster;
use crate::render::*;
use crate::scene::*;

///
/// An open chain of vertices, drawn as connected line segments
///
/// Unlike `Polygon` there is no implicit segment from the last vertex back to the first.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub (crate) vertices: Vec<Point>,
    pub (crate) z_buffer: bool,
}

impl Polyline {
    ///
    /// Creates an empty polyline
    ///
    #[inline]
    pub fn new() -> Polyline {
        Polyline {
            vertices: vec![],
            z_buffer: true,
        }
    }

    ///
    /// Creates a polyline from a list of vertices
    ///
    #[inline]
    pub fn from_points(vertices: Vec<Point>) -> Polyline {
        Polyline {
            vertices: vertices,
            z_buffer: true,
        }
    }

    /// The vertices of this polyline, in order
    #[inline]
    pub fn vertices(&self) -> &[Point] { &self.vertices }

    /// The number of vertices
    #[inline]
    pub fn len(&self) -> usize { self.vertices.len() }

    /// True if this polyline has no vertices
    #[inline]
    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    ///
    /// Appends a vertex to the end of the chain
    ///
    #[inline]
    pub fn push(&mut self, vertex: Point) {
        self.vertices.push(vertex);
    }

    ///
    /// Enables or disables depth testing when this polyline is drawn
    ///
    #[inline]
    pub fn set_z_buffer(&mut self, enabled: bool) {
        self.z_buffer = enabled;
    }

    /// True if this polyline participates in depth testing
    #[inline]
    pub fn z_buffer_enabled(&self) -> bool { self.z_buffer }

    ///
    /// Transforms every vertex in place
    ///
    pub fn transform(&mut self, matrix: &Matrix) {
        for vertex in self.vertices.iter_mut() {
            *vertex = matrix.transform_point(vertex);
        }
    }

    ///
    /// Performs the homogeneous divide on every vertex
    ///
    pub fn normalize(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.normalize();
        }
    }

    ///
    /// Draws this polyline into an image using the state's current color
    ///
    /// A polyline with fewer than two vertices covers no pixels and draws nothing.
    ///
    pub fn draw(&self, state: &DrawState, image: &mut Image) -> Result<(), RenderError> {
        let depth_test = self.z_buffer && state.z_buffer;

        for pair in self.vertices.windows(2) {
            raster::draw_line(&pair[0], &pair[1], state.color, depth_test, image);
        }

        Ok(())
    }
}

impl Default for Polyline {
    fn default() -> Polyline {
        Polyline::new()
    }
}
