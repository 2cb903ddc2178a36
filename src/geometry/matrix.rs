use super::point::*;
use super::vector::*;

use std::ops::Mul;

///
/// A 4x4 transform in row-major order
///
/// Matrices apply to column vectors, so `m.transform_point(&p)` computes `M * p` and the product
/// `a * b` is the transform that applies `b` first and then `a`. Transform composition is not
/// commutative, so every operation here is explicit about which operand is on which side.
///
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix(pub [[f64; 4]; 4]);

impl Matrix {
    ///
    /// The identity transform
    ///
    #[inline]
    pub fn identity() -> Matrix {
        Matrix([
            [1.0, 0.0, 0.0, 0.0],
            [0.0, 1.0, 0.0, 0.0],
            [0.0, 0.0, 1.0, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    ///
    /// Computes `self * rhs` (the transform that applies `rhs` first)
    ///
    pub fn multiply(&self, rhs: &Matrix) -> Matrix {
        let mut product = [[0.0; 4]; 4];

        for row in 0..4 {
            for col in 0..4 {
                product[row][col] = self.0[row][0] * rhs.0[0][col]
                    + self.0[row][1] * rhs.0[1][col]
                    + self.0[row][2] * rhs.0[2][col]
                    + self.0[row][3] * rhs.0[3][col];
            }
        }

        Matrix(product)
    }

    ///
    /// Applies this transform to a point (all four homogeneous components participate)
    ///
    pub fn transform_point(&self, point: &Point) -> Point {
        let m = &self.0;

        Point {
            x: m[0][0] * point.x + m[0][1] * point.y + m[0][2] * point.z + m[0][3] * point.h,
            y: m[1][0] * point.x + m[1][1] * point.y + m[1][2] * point.z + m[1][3] * point.h,
            z: m[2][0] * point.x + m[2][1] * point.y + m[2][2] * point.z + m[2][3] * point.h,
            h: m[3][0] * point.x + m[3][1] * point.y + m[3][2] * point.z + m[3][3] * point.h,
        }
    }

    ///
    /// Applies this transform to a vector (homogeneous weight 0, so translation has no effect)
    ///
    pub fn transform_vector(&self, vector: &Vector) -> Vector {
        let m = &self.0;

        Vector {
            x: m[0][0] * vector.x + m[0][1] * vector.y + m[0][2] * vector.z,
            y: m[1][0] * vector.x + m[1][1] * vector.y + m[1][2] * vector.z,
            z: m[2][0] * vector.x + m[2][1] * vector.y + m[2][2] * vector.z,
        }
    }

    ///
    /// The transpose of this matrix
    ///
    pub fn transpose(&self) -> Matrix {
        let mut transposed = [[0.0; 4]; 4];

        for row in 0..4 {
            for col in 0..4 {
                transposed[row][col] = self.0[col][row];
            }
        }

        Matrix(transposed)
    }

    ///
    /// A translation by (tx, ty, tz)
    ///
    #[inline]
    pub fn translate(tx: f64, ty: f64, tz: f64) -> Matrix {
        let mut m = Matrix::identity();

        m.0[0][3] = tx;
        m.0[1][3] = ty;
        m.0[2][3] = tz;
        m
    }

    ///
    /// A scale by (sx, sy, sz) about the origin
    ///
    #[inline]
    pub fn scale(sx: f64, sy: f64, sz: f64) -> Matrix {
        let mut m = Matrix::identity();

        m.0[0][0] = sx;
        m.0[1][1] = sy;
        m.0[2][2] = sz;
        m
    }

    ///
    /// A translation within the z = 0 plane
    ///
    #[inline]
    pub fn translate_2d(tx: f64, ty: f64) -> Matrix {
        Matrix::translate(tx, ty, 0.0)
    }

    ///
    /// A scale within the z = 0 plane
    ///
    #[inline]
    pub fn scale_2d(sx: f64, sy: f64) -> Matrix {
        Matrix::scale(sx, sy, 1.0)
    }

    ///
    /// A rotation about the x axis by an angle in radians
    ///
    pub fn rotate_x(angle: f64) -> Matrix {
        let (sin, cos) = angle.sin_cos();
        let mut m = Matrix::identity();

        m.0[1][1] = cos;
        m.0[1][2] = -sin;
        m.0[2][1] = sin;
        m.0[2][2] = cos;
        m
    }

    ///
    /// A rotation about the y axis by an angle in radians
    ///
    pub fn rotate_y(angle: f64) -> Matrix {
        let (sin, cos) = angle.sin_cos();
        let mut m = Matrix::identity();

        m.0[0][0] = cos;
        m.0[0][2] = sin;
        m.0[2][0] = -sin;
        m.0[2][2] = cos;
        m
    }

    ///
    /// A rotation about the z axis by an angle in radians
    ///
    pub fn rotate_z(angle: f64) -> Matrix {
        let (sin, cos) = angle.sin_cos();
        let mut m = Matrix::identity();

        m.0[0][0] = cos;
        m.0[0][1] = -sin;
        m.0[1][0] = sin;
        m.0[1][1] = cos;
        m
    }

    ///
    /// The rotation that carries the orthonormal basis {u, v, w} onto the world axes
    ///
    /// The basis vectors become the rows of the matrix, so a point on the `u` axis lands on the
    /// x axis and so on. This is the alignment step of the 3D view pipeline.
    ///
    pub fn rotate_axes(u: &Vector, v: &Vector, w: &Vector) -> Matrix {
        Matrix([
            [u.x, u.y, u.z, 0.0],
            [v.x, v.y, v.z, 0.0],
            [w.x, w.y, w.z, 0.0],
            [0.0, 0.0, 0.0, 1.0],
        ])
    }

    ///
    /// A shear within the z = 0 plane (x picks up `shx` per unit y, y picks up `shy` per unit x)
    ///
    pub fn shear_2d(shx: f64, shy: f64) -> Matrix {
        let mut m = Matrix::identity();

        m.0[0][1] = shx;
        m.0[1][0] = shy;
        m
    }

    ///
    /// A shear of x and y proportional to z
    ///
    pub fn shear_z(shx: f64, shy: f64) -> Matrix {
        let mut m = Matrix::identity();

        m.0[0][2] = shx;
        m.0[1][2] = shy;
        m
    }

    ///
    /// The perspective projection with the center of projection a distance `d` behind the plane
    ///
    /// Replaces the homogeneous weight with `z / d`, so that `Point::normalize` performs the
    /// perspective division.
    ///
    pub fn perspective(d: f64) -> Matrix {
        let mut m = Matrix::identity();

        m.0[3][2] = 1.0 / d;
        m.0[3][3] = 0.0;
        m
    }
}

impl Default for Matrix {
    #[inline]
    fn default() -> Matrix {
        Matrix::identity()
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    #[inline]
    fn mul(self, rhs: Matrix) -> Matrix {
        self.multiply(&rhs)
    }
}
