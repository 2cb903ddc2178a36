///
/// A location in homogeneous coordinates
///
/// The fourth component `h` defaults to 1 and carries the projective weight: `normalize` divides
/// the device-plane components through by it. Points are plain values, copied freely; nothing in
/// the pipeline shares them.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub h: f64,
}

impl Point {
    ///
    /// Creates a point at (x, y, z) with unit homogeneous weight
    ///
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Point {
        Point { x: x, y: y, z: z, h: 1.0 }
    }

    ///
    /// Creates a 2D point on the z = 0 plane
    ///
    #[inline]
    pub fn new_2d(x: f64, y: f64) -> Point {
        Point { x: x, y: y, z: 0.0, h: 1.0 }
    }

    ///
    /// The origin
    ///
    #[inline]
    pub fn origin() -> Point {
        Point { x: 0.0, y: 0.0, z: 0.0, h: 1.0 }
    }

    ///
    /// Projects the device-plane components through the homogeneous weight
    ///
    /// Divides `x` and `y` by `h` and resets `h` to 1. `z` is deliberately left alone: after the
    /// view transform it holds the view depth scaled into (0, 1], and dividing it through would
    /// destroy the proportionality that 1/z interpolation depends on. Normalizing a point whose
    /// `h` is already 1 is a no-op, and normalizing twice is the same as normalizing once. A
    /// point with `h == 0` (a direction at infinity) is left unchanged.
    ///
    #[inline]
    pub fn normalize(&mut self) {
        if self.h != 0.0 {
            self.x /= self.h;
            self.y /= self.h;
            self.h = 1.0;
        }
    }
}

impl Default for Point {
    #[inline]
    fn default() -> Point {
        Point::origin()
    }
}
