use crate::error::*;
use crate::geometry::*;

///
/// Parameters describing a 3D perspective view
///
/// The view plane sits at the view reference point `vrp`, facing along the view plane normal
/// `vpn` (the direction the camera looks). The center of projection is `d` world units behind
/// the view plane, and the visible depth range extends `b` units beyond it. `du` and `dv` are
/// the half-extents of the view window on the view plane.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View3D {
    /// The world point at the center of the view plane
    pub vrp: Point,

    /// The view plane normal: the direction the camera looks along
    pub vpn: Vector,

    /// The approximate "up" direction (must not be parallel to `vpn`)
    pub vup: Vector,

    /// Distance from the center of projection to the view plane
    pub d: f64,

    /// Half-width of the view window on the view plane, in world units
    pub du: f64,

    /// Half-height of the view window on the view plane, in world units
    pub dv: f64,

    /// Depth of the view volume beyond the view plane, in world units
    pub b: f64,

    /// The width of the target image in pixels
    pub screen_width: usize,

    /// The height of the target image in pixels
    pub screen_height: usize,
}

impl View3D {
    ///
    /// Builds the matrix mapping world coordinates to pixel coordinates for this view
    ///
    /// The construction follows the classic pipeline: translate the view reference point to the
    /// origin; derive the orthonormal basis {u, v', n} from the view plane normal and the up
    /// vector with two cross products and rotate it onto the world axes; slide the center of
    /// projection to the origin; scale into the canonical view volume; apply the perspective
    /// weight; then scale and flip into pixel space with the origin at the image center.
    ///
    /// After a point passes through this matrix and `Point::normalize`, its x and y are pixel
    /// coordinates (row 0 at the top of the image) and its z is the view depth scaled into
    /// (0, 1], with 1 on the back clip plane. The rasterizer interpolates 1/z from that value,
    /// so nearer surfaces carry larger depth-buffer entries.
    ///
    pub fn matrix(&self) -> Result<Matrix, RenderError> {
        if self.d <= 0.0 {
            return Err(RenderError::InvalidView("projection distance must be positive"));
        }
        if self.b <= 0.0 {
            return Err(RenderError::InvalidView("back clip distance must be positive"));
        }
        if self.du <= 0.0 || self.dv <= 0.0 {
            return Err(RenderError::InvalidView("view window extents must be positive"));
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(RenderError::InvalidView("screen size must be non-zero"));
        }

        // Orthonormal view basis; a zero cross product means vup and vpn give no usable frame
        let n = self.vpn.normalized()
            .map_err(|_| RenderError::InvalidView("view plane normal has zero length"))?;
        let u = self.vup.cross(&self.vpn).normalized()
            .map_err(|_| RenderError::InvalidView("up vector is parallel to the view plane normal"))?;
        let v = n.cross(&u);

        let b       = self.d + self.b;
        let d_prime = self.d / b;
        let cols    = self.screen_width as f64;
        let rows    = self.screen_height as f64;

        let mut vtm = Matrix::translate(-self.vrp.x, -self.vrp.y, -self.vrp.z);
        vtm = Matrix::rotate_axes(&u, &v, &n).multiply(&vtm);
        vtm = Matrix::translate(0.0, 0.0, self.d).multiply(&vtm);
        vtm = Matrix::scale(self.d / (b * self.du), self.d / (b * self.dv), 1.0 / b).multiply(&vtm);
        vtm = Matrix::perspective(d_prime).multiply(&vtm);

        // Pixel space: flip x to undo the mirror of looking down +z, flip y to put row 0 on top
        vtm = Matrix::scale_2d(-cols / (2.0 * d_prime), -rows / (2.0 * d_prime)).multiply(&vtm);
        vtm = Matrix::translate_2d(cols / 2.0, rows / 2.0).multiply(&vtm);

        Ok(vtm)
    }
}
