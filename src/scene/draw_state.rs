use crate::geometry::*;

///
/// How a polygon's pixels get their color
///
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ShadeMode {
    /// Outline only, drawn through the line plotter in the current color
    Wireframe,

    /// Every pixel takes the current color, no lighting
    Constant,

    /// The current color, faded toward black with distance from the viewer
    DepthTint,

    /// The lighting model evaluated once per polygon, at the vertex average
    FlatShaded,

    /// The lighting model evaluated at each vertex, interpolated across the polygon
    Gouraud,

    /// Treated as `Gouraud`: lighting is evaluated per vertex and interpolated. True per-pixel
    /// normal interpolation would need the rasterizer to carry normals, which it does not
    Phong,
}

///
/// The drawing attributes in effect while a module's instructions run
///
/// A draw state is a plain value that the scene graph copies at every module boundary: a module's
/// `set-*` instructions affect its own later instructions and everything nested beneath them, but
/// never its parent or siblings. That copy-on-entry rule is what makes attribute changes
/// lexically scoped within the instruction list.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawState {
    /// Color for wireframes, points, lines and constant-shaded polygons
    pub color: Color,

    /// Diffuse reflectance used by the lighting model
    pub body_color: Color,

    /// Specular reflectance used by the lighting model
    pub surface_color: Color,

    /// Specular exponent: higher values make tighter highlights
    pub surface_coefficient: f32,

    /// How polygons are shaded
    pub shade: ShadeMode,

    /// Whether primitives test and write the depth buffer
    pub z_buffer: bool,

    /// The viewer's position in world coordinates, for specular highlights
    pub viewer: Point,
}

impl DrawState {
    ///
    /// A draw state with everything at its defaults: white constant shading with depth testing on
    ///
    pub fn new() -> DrawState {
        DrawState {
            color:                  Color::white(),
            body_color:             Color::white(),
            surface_color:          Color::white(),
            surface_coefficient:    32.0,
            shade:                  ShadeMode::Constant,
            z_buffer:               true,
            viewer:                 Point::origin(),
        }
    }
}

impl Default for DrawState {
    fn default() -> DrawState {
        DrawState::new()
    }
}
