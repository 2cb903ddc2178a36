use crate::geometry::*;

/// Depth-buffer value every pixel starts at: the back clip plane maps to a stored depth of 1
pub const FAR_PLANE: f32 = 1.0;

///
/// A raster image: a pixel buffer and a parallel depth buffer
///
/// Pixels are addressed by `(x, y)` column and row, with row 0 at the top of the image - the same
/// convention the view matrices and the rasterizer use, so nothing anywhere re-flips a row index.
///
/// The depth buffer stores `1/z` of the nearest surface written so far, where `z` is the view
/// depth scaled into `(0, 1]` by the view transform. That puts the back clip plane at a stored
/// value of 1 (the initial value of every entry) and makes larger stored values nearer to the
/// viewer, so the depth test is a simple "greater wins" comparison.
///
/// An image is the only thing the pipeline mutates while drawing, and one draw call assumes it
/// has the image to itself. Separate images can be rendered from the same modules on separate
/// threads with no extra synchronization.
///
#[derive(Clone, Debug, PartialEq)]
pub struct Image {
    width:  usize,
    height: usize,
    pixels: Vec<Color>,
    depth:  Vec<f32>,
}

impl Image {
    ///
    /// Creates a black image with every depth entry at the far plane
    ///
    pub fn new(width: usize, height: usize) -> Image {
        Image {
            width:  width,
            height: height,
            pixels: vec![Color::black(); width * height],
            depth:  vec![FAR_PLANE; width * height],
        }
    }

    /// The width of this image in pixels
    #[inline]
    pub fn width(&self) -> usize { self.width }

    /// The height of this image in pixels
    #[inline]
    pub fn height(&self) -> usize { self.height }

    /// The color at a pixel (column `x`, row `y` from the top)
    #[inline]
    pub fn pixel(&self, x: usize, y: usize) -> Color {
        self.pixels[y * self.width + x]
    }

    /// Writes the color at a pixel
    #[inline]
    pub fn set_pixel(&mut self, x: usize, y: usize, color: Color) {
        self.pixels[y * self.width + x] = color;
    }

    /// The stored depth (1/z, larger = nearer) at a pixel
    #[inline]
    pub fn depth(&self, x: usize, y: usize) -> f32 {
        self.depth[y * self.width + x]
    }

    /// Writes the stored depth at a pixel
    #[inline]
    pub fn set_depth(&mut self, x: usize, y: usize, depth: f32) {
        self.depth[y * self.width + x] = depth;
    }

    /// Every pixel in row-major order, row 0 (the top) first
    #[inline]
    pub fn pixels(&self) -> &[Color] { &self.pixels }

    ///
    /// Sets every pixel to one color, leaving the depth buffer alone
    ///
    pub fn fill(&mut self, color: Color) {
        for pixel in self.pixels.iter_mut() {
            *pixel = color;
        }
    }

    ///
    /// Returns the image to its initial state: black pixels, far-plane depth everywhere
    ///
    pub fn reset(&mut self) {
        for pixel in self.pixels.iter_mut() {
            *pixel = Color::black();
        }

        for depth in self.depth.iter_mut() {
            *depth = FAR_PLANE;
        }
    }
}
