use crate::error::*;
use crate::geometry::*;
use crate::lighting::*;
use crate::raster;
use crate::render::*;
use crate::scene::*;

///
/// A closed polygon with optional per-vertex shading attributes
///
/// The vertex list is a closed ring: the last vertex implicitly connects back to the first. The
/// color and normal arrays are either empty or exactly as long as the vertex list - the setters
/// enforce this, so a polygon built through the public API always satisfies the invariant the
/// rasterizer depends on.
///
/// A one-sided polygon only accepts light from its front (the side its winding order faces);
/// two-sided polygons are illuminated on whichever side faces the light, with the normal flipped
/// to match. Both kinds are still rasterized wherever they land - visibility is the depth
/// buffer's job, not the lighting model's.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    pub (crate) vertices:   Vec<Point>,
    pub (crate) colors:     Vec<Color>,
    pub (crate) normals:    Vec<Vector>,
    pub (crate) one_sided:  bool,
    pub (crate) z_buffer:   bool,
}

impl Polygon {
    ///
    /// Creates an empty polygon (two-sided, depth testing enabled)
    ///
    #[inline]
    pub fn new() -> Polygon {
        Polygon {
            vertices:   vec![],
            colors:     vec![],
            normals:    vec![],
            one_sided:  false,
            z_buffer:   true,
        }
    }

    ///
    /// Creates a polygon from a list of vertices
    ///
    #[inline]
    pub fn from_points(vertices: Vec<Point>) -> Polygon {
        Polygon {
            vertices:   vertices,
            colors:     vec![],
            normals:    vec![],
            one_sided:  false,
            z_buffer:   true,
        }
    }

    /// The vertices of this polygon, in winding order
    #[inline]
    pub fn vertices(&self) -> &[Point] { &self.vertices }

    /// The per-vertex colors (empty when the polygon is uniformly colored)
    #[inline]
    pub fn colors(&self) -> &[Color] { &self.colors }

    /// The per-vertex normals (empty when only the face normal is available)
    #[inline]
    pub fn normals(&self) -> &[Vector] { &self.normals }

    /// The number of vertices
    #[inline]
    pub fn len(&self) -> usize { self.vertices.len() }

    /// True if this polygon has no vertices
    #[inline]
    pub fn is_empty(&self) -> bool { self.vertices.is_empty() }

    ///
    /// Replaces the per-vertex colors
    ///
    /// The array must be empty (clearing the attribute) or match the vertex count.
    ///
    pub fn set_colors(&mut self, colors: Vec<Color>) -> Result<(), RenderError> {
        if !colors.is_empty() && colors.len() != self.vertices.len() {
            return Err(RenderError::AttributeMismatch(self.vertices.len(), colors.len()));
        }

        self.colors = colors;
        Ok(())
    }

    ///
    /// Replaces the per-vertex normals
    ///
    /// The array must be empty (clearing the attribute) or match the vertex count.
    ///
    pub fn set_normals(&mut self, normals: Vec<Vector>) -> Result<(), RenderError> {
        if !normals.is_empty() && normals.len() != self.vertices.len() {
            return Err(RenderError::AttributeMismatch(self.vertices.len(), normals.len()));
        }

        self.normals = normals;
        Ok(())
    }

    ///
    /// Marks this polygon as one-sided (lit from the front only) or two-sided
    ///
    #[inline]
    pub fn set_one_sided(&mut self, one_sided: bool) {
        self.one_sided = one_sided;
    }

    /// True if this polygon is only lit from its front side
    #[inline]
    pub fn is_one_sided(&self) -> bool { self.one_sided }

    ///
    /// Enables or disables depth testing when this polygon is drawn
    ///
    #[inline]
    pub fn set_z_buffer(&mut self, enabled: bool) {
        self.z_buffer = enabled;
    }

    /// True if this polygon participates in depth testing
    #[inline]
    pub fn z_buffer_enabled(&self) -> bool { self.z_buffer }

    ///
    /// The unnormalized face normal implied by the winding order of the first three vertices
    ///
    pub fn face_normal(&self) -> Option<Vector> {
        if self.vertices.len() < 3 {
            None
        } else {
            Some(Vector::surface_normal(&self.vertices[0], &self.vertices[1], &self.vertices[2]))
        }
    }

    ///
    /// Transforms every vertex and normal in place
    ///
    /// Normals ride through as vectors (weight 0), so translations leave them alone. They are not
    /// re-normalized here; shading normalizes on use so that scaling transforms don't distort the
    /// lighting.
    ///
    pub fn transform(&mut self, matrix: &Matrix) {
        for vertex in self.vertices.iter_mut() {
            *vertex = matrix.transform_point(vertex);
        }

        for normal in self.normals.iter_mut() {
            *normal = matrix.transform_vector(normal);
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
    /// Evaluates the lighting model and stores the result as this polygon's vertex colors
    ///
    /// This runs in world space, before the view transform: the vertex positions, the normals
    /// and the state's viewer position must all be in the same coordinate frame. `FlatShaded`
    /// evaluates once at the vertex average and replicates the color; `Gouraud` (and `Phong`,
    /// which this renderer treats as Gouraud) evaluate per vertex so the rasterizer can
    /// interpolate. Other shading modes don't consult the lights and leave the polygon alone.
    ///
    pub fn shade(&mut self, state: &DrawState, lights: &LightingSet) {
        match state.shade {
            ShadeMode::FlatShaded           => self.shade_flat(state, lights),
            ShadeMode::Gouraud              => self.shade_vertices(state, lights),
            ShadeMode::Phong                => self.shade_vertices(state, lights),
            ShadeMode::Wireframe            => { }
            ShadeMode::Constant             => { }
            ShadeMode::DepthTint            => { }
        }
    }

    ///
    /// One lighting evaluation at the vertex average, replicated to every vertex
    ///
    fn shade_flat(&mut self, state: &DrawState, lights: &LightingSet) {
        if self.vertices.is_empty() {
            return;
        }

        // Average the vertex positions, and the vertex normals when they're present
        let count       = self.vertices.len() as f64;
        let mut center  = Point::origin();
        let mut normal  = Vector::zero();

        for vertex in self.vertices.iter() {
            center.x += vertex.x;
            center.y += vertex.y;
            center.z += vertex.z;
        }
        center.x /= count;
        center.y /= count;
        center.z /= count;

        if self.normals.is_empty() {
            normal = self.face_normal().unwrap_or(Vector::zero());
        } else {
            for vertex_normal in self.normals.iter() {
                normal = normal + *vertex_normal;
            }
        }

        let normal = match normal.normalized() {
            Ok(normal)  => normal,
            Err(_)      => {
                log::warn!("Skipping flat shading for a polygon with a degenerate normal");
                return;
            }
        };

        let color = Self::shade_point(&center, &normal, self.one_sided, state, lights);
        self.colors = vec![color; self.vertices.len()];
    }

    ///
    /// One lighting evaluation per vertex, for interpolated shading
    ///
    fn shade_vertices(&mut self, state: &DrawState, lights: &LightingSet) {
        let face_normal = self.face_normal().unwrap_or(Vector::zero());
        let mut colors  = Vec::with_capacity(self.vertices.len());

        for (idx, vertex) in self.vertices.iter().enumerate() {
            let normal = if idx < self.normals.len() { self.normals[idx] } else { face_normal };
            let normal = match normal.normalized() {
                Ok(normal)  => normal,
                Err(_)      => {
                    log::warn!("Skipping vertex shading for a polygon with a degenerate normal");
                    return;
                }
            };

            colors.push(Self::shade_point(vertex, &normal, self.one_sided, state, lights));
        }

        self.colors = colors;
    }

    ///
    /// Runs the illumination formula for one surface point
    ///
    fn shade_point(point: &Point, normal: &Vector, one_sided: bool, state: &DrawState, lights: &LightingSet) -> Color {
        // A viewer sitting exactly on the surface point has no view direction: look along the normal
        let view = match Vector::between(point, &state.viewer).normalized() {
            Ok(view)    => view,
            Err(_)      => *normal,
        };

        lights.shade(normal, &view, point, &state.body_color, &state.surface_color, state.surface_coefficient, one_sided)
    }

    ///
    /// Draws this screen-space polygon into an image
    ///
    /// `Wireframe` outlines the ring through the line plotter; every other mode goes through the
    /// scanline rasterizer. Fewer than three vertices is a caller error.
    ///
    pub fn draw(&self, state: &DrawState, image: &mut Image) -> Result<(), RenderError> {
        if self.vertices.len() < 3 {
            return Err(RenderError::InvalidPolygon(self.vertices.len()));
        }

        match state.shade {
            ShadeMode::Wireframe => {
                let depth_test = self.z_buffer && state.z_buffer;

                for idx in 0..self.vertices.len() {
                    let next = (idx + 1) % self.vertices.len();
                    raster::draw_line(&self.vertices[idx], &self.vertices[next], state.color, depth_test, image);
                }

                Ok(())
            }

            _ => raster::fill_polygon(self, state, image),
        }
    }
}

impl Default for Polygon {
    fn default() -> Polygon {
        Polygon::new()
    }
}
