use super::point::*;
use crate::error::*;

use std::ops::{Add, Mul, Neg, Sub};

///
/// A direction in 3D space
///
/// Vectors share the homogeneous representation of `Point` with the weight fixed at 0, which is
/// what makes translation leave them alone when they pass through a transform (see
/// `Matrix::transform_vector`).
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector {
    ///
    /// Creates a vector with the given components
    ///
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Vector {
        Vector { x: x, y: y, z: z }
    }

    ///
    /// The zero vector
    ///
    #[inline]
    pub fn zero() -> Vector {
        Vector { x: 0.0, y: 0.0, z: 0.0 }
    }

    ///
    /// The direction from one point to another
    ///
    #[inline]
    pub fn between(from: &Point, to: &Point) -> Vector {
        Vector {
            x: to.x - from.x,
            y: to.y - from.y,
            z: to.z - from.z,
        }
    }

    ///
    /// The euclidean length of this vector
    ///
    #[inline]
    pub fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    ///
    /// The squared length (cheaper than `length` when only comparing against a threshold)
    ///
    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    ///
    /// This vector scaled to unit length
    ///
    /// A zero-length vector has no direction to preserve, so normalizing one is a fatal error:
    /// letting it through would silently corrupt whatever transform or shading computation asked
    /// for the direction.
    ///
    pub fn normalized(&self) -> Result<Vector, RenderError> {
        let length = self.length();

        if length == 0.0 {
            Err(RenderError::DegenerateVector)
        } else {
            Ok(Vector {
                x: self.x / length,
                y: self.y / length,
                z: self.z / length,
            })
        }
    }

    ///
    /// The dot product with another vector
    ///
    #[inline]
    pub fn dot(&self, rhs: &Vector) -> f64 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    ///
    /// The cross product with another vector (right-handed)
    ///
    #[inline]
    pub fn cross(&self, rhs: &Vector) -> Vector {
        Vector {
            x: self.y * rhs.z - self.z * rhs.y,
            y: self.z * rhs.x - self.x * rhs.z,
            z: self.x * rhs.y - self.y * rhs.x,
        }
    }

    ///
    /// The surface normal of the plane through three ordered points
    ///
    /// This is the cross product of the first two edges, so its orientation follows the winding
    /// order of the points: counter-clockwise winding (seen from the front) produces a normal
    /// toward the viewer. The result is not normalized.
    ///
    #[inline]
    pub fn surface_normal(a: &Point, b: &Point, c: &Point) -> Vector {
        let ab = Vector::between(a, b);
        let ac = Vector::between(a, c);

        ab.cross(&ac)
    }
}

impl Add for Vector {
    type Output = Vector;

    #[inline]
    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector {
    type Output = Vector;

    #[inline]
    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;

    #[inline]
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;

    #[inline]
    fn neg(self) -> Vector {
        Vector::new(-self.x, -self.y, -self.z)
    }
}
