use crate::error::*;
use crate::geometry::*;

///
/// Parameters describing a 2D view of the world plane
///
/// The view window is centered on `center`, has its horizontal axis along `x_axis`, and spans
/// `du` world units across `screen_width` pixels (the vertical extent follows from the aspect
/// ratio, so pixels come out square). Row 0 of the target image is the top of the view.
///
/// Everything in a 2D scene sits on the z = 0 plane, so depth testing is usually disabled in the
/// draw state when rendering through one of these.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct View2D {
    /// The world point at the center of the view window
    pub center: Point,

    /// The world direction that maps to "rightward across the image"
    pub x_axis: Vector,

    /// The width of the view window in world units
    pub du: f64,

    /// The width of the target image in pixels
    pub screen_width: usize,

    /// The height of the target image in pixels
    pub screen_height: usize,
}

impl View2D {
    ///
    /// Builds the matrix mapping world coordinates to pixel coordinates for this view
    ///
    /// The construction translates the view center to the origin, rotates the view's x axis onto
    /// the world x axis, scales into pixel units (flipping y so that "up" in the world is "up"
    /// in the image with row 0 at the top), and re-centers on the middle of the image.
    ///
    pub fn matrix(&self) -> Result<Matrix, RenderError> {
        if self.du <= 0.0 {
            return Err(RenderError::InvalidView("view window width must be positive"));
        }
        if self.screen_width == 0 || self.screen_height == 0 {
            return Err(RenderError::InvalidView("screen size must be non-zero"));
        }

        let x_axis = self.x_axis.normalized()
            .map_err(|_| RenderError::InvalidView("view x axis has zero length"))?;

        let cols    = self.screen_width as f64;
        let rows    = self.screen_height as f64;
        let dv      = self.du * rows / cols;

        // Rotate the view orientation onto +x (the rotation by the negated orientation angle)
        let orient = Matrix([
            [x_axis.x,  x_axis.y, 0.0, 0.0],
            [-x_axis.y, x_axis.x, 0.0, 0.0],
            [0.0,       0.0,      1.0, 0.0],
            [0.0,       0.0,      0.0, 1.0],
        ]);

        let mut vtm = Matrix::translate_2d(-self.center.x, -self.center.y);
        vtm = orient.multiply(&vtm);
        vtm = Matrix::scale_2d(cols / self.du, -rows / dv).multiply(&vtm);
        vtm = Matrix::translate_2d(cols / 2.0, rows / 2.0).multiply(&vtm);

        Ok(vtm)
    }
}
