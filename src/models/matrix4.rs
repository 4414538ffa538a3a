use std::ops::{Mul, MulAssign};

use crate::models::Vector3;

/// A 4x4 homogeneous transform stored column-major (`m[col * 4 + row]`),
/// the layout OpenGL/WebGL expect for uniform upload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix4 {
    m: [f64; 16],
}

impl Default for Matrix4 {
    fn default() -> Self {
        Matrix4::identity()
    }
}

impl Matrix4 {
    pub const fn identity() -> Self {
        Matrix4 {
            m: [
                1.0, 0.0, 0.0, 0.0,
                0.0, 1.0, 0.0, 0.0,
                0.0, 0.0, 1.0, 0.0,
                0.0, 0.0, 0.0, 1.0,
            ],
        }
    }

    /// Builds a matrix from 16 column-major values.
    pub const fn from_array(m: [f64; 16]) -> Self {
        Matrix4 { m }
    }

    pub fn as_array(&self) -> &[f64; 16] {
        &self.m
    }

    /// Element at `row`, `col`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.m[col * 4 + row]
    }

    /// Column-major single precision copy, ready for a `uniformMatrix4fv` call.
    pub fn to_f32_array(&self) -> [f32; 16] {
        let mut out = [0.0_f32; 16];
        for (dst, src) in out.iter_mut().zip(self.m.iter()) {
            *dst = *src as f32;
        }
        out
    }

    /// The translation column of the matrix.
    pub fn translation_part(&self) -> Vector3 {
        Vector3::new(self.m[12], self.m[13], self.m[14])
    }

    /// Composes `t` on the left: `self = t * self`.
    ///
    /// Points transformed by the result go through the existing transform
    /// first and through `t` afterwards.
    ///
    /// # Example
    /// ```
    /// use rs_ballpit::models::{Matrix4, Vector3};
    ///
    /// let mut m = Matrix4::scaling(2.0);
    /// m.apply_transformation(&Matrix4::translation(1.0, 0.0, 0.0));
    /// // Scaled first, then translated
    /// let p = Vector3::new(1.0, 0.0, 0.0).transform_point(&m);
    /// assert_eq!(p, Vector3::new(3.0, 0.0, 0.0));
    /// ```
    pub fn apply_transformation(&mut self, t: &Matrix4) {
        *self = *t * *self;
    }

    pub fn scaling(factor: f64) -> Self {
        Self::scaling_xyz(factor, factor, factor)
    }

    pub fn scaling_xyz(x: f64, y: f64, z: f64) -> Self {
        let mut ret = Self::identity();
        ret.m[0] = x;
        ret.m[5] = y;
        ret.m[10] = z;
        ret
    }

    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut ret = Self::identity();
        ret.m[12] = x;
        ret.m[13] = y;
        ret.m[14] = z;
        ret
    }

    pub fn rotation_x(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut ret = Self::identity();
        ret.m[5] = cos;
        ret.m[6] = sin;
        ret.m[9] = -sin;
        ret.m[10] = cos;
        ret
    }

    pub fn rotation_y(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut ret = Self::identity();
        ret.m[0] = cos;
        ret.m[2] = -sin;
        ret.m[8] = sin;
        ret.m[10] = cos;
        ret
    }

    pub fn rotation_z(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        let mut ret = Self::identity();
        ret.m[0] = cos;
        ret.m[1] = sin;
        ret.m[4] = -sin;
        ret.m[5] = cos;
        ret
    }

    /// Rotation by `angle` radians around the unit axis `axis` (Rodrigues).
    /// The axis is expected to be normalized.
    pub fn rotation(angle: f64, axis: Vector3) -> Self {
        let (sin, cos) = angle.sin_cos();
        let one_minus_cos = 1.0 - cos;
        let Vector3 { x: ux, y: uy, z: uz } = axis;
        let mut ret = Self::identity();
        ret.m[0] = cos + ux * ux * one_minus_cos;
        ret.m[1] = uy * ux * one_minus_cos + uz * sin;
        ret.m[2] = uz * ux * one_minus_cos - uy * sin;
        ret.m[4] = ux * uy * one_minus_cos - uz * sin;
        ret.m[5] = cos + uy * uy * one_minus_cos;
        ret.m[6] = uz * uy * one_minus_cos + ux * sin;
        ret.m[8] = ux * uz * one_minus_cos + uy * sin;
        ret.m[9] = uy * uz * one_minus_cos - ux * sin;
        ret.m[10] = cos + uz * uz * one_minus_cos;
        ret
    }

    /// Perspective frustum projection (glFrustum layout).
    pub fn frustum(left: f64, right: f64, bottom: f64, top: f64, z_near: f64, z_far: f64) -> Self {
        let two_near = 2.0 * z_near;
        let x_dist = right - left;
        let y_dist = top - bottom;
        let z_dist = z_far - z_near;
        let mut ret = Self::identity();
        ret.m[0] = two_near / x_dist;
        ret.m[5] = two_near / y_dist;
        ret.m[8] = (right + left) / x_dist;
        ret.m[9] = (top + bottom) / y_dist;
        ret.m[10] = (-z_far - z_near) / z_dist;
        ret.m[11] = -1.0;
        ret.m[14] = (-two_near * z_far) / z_dist;
        ret.m[15] = 0.0;
        ret
    }

    /// Symmetric perspective projection. The half-height of the near plane is
    /// `z_near * tan(fov)`.
    pub fn perspective(fov: f64, aspect_ratio: f64, z_near: f64, z_far: f64) -> Self {
        let y_max = z_near * fov.tan();
        let x_max = y_max * aspect_ratio;
        Self::frustum(-x_max, x_max, -y_max, y_max, z_near, z_far)
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, other: Matrix4) -> Matrix4 {
        let a = &self.m;
        let b = &other.m;
        let mut out = [0.0; 16];
        for col in 0..4 {
            for row in 0..4 {
                out[col * 4 + row] = a[row] * b[col * 4]
                    + a[4 + row] * b[col * 4 + 1]
                    + a[8 + row] * b[col * 4 + 2]
                    + a[12 + row] * b[col * 4 + 3];
            }
        }
        Matrix4 { m: out }
    }
}

impl MulAssign for Matrix4 {
    fn mul_assign(&mut self, rhs: Matrix4) {
        *self = *self * rhs;
    }
}

impl Mul<f64> for Matrix4 {
    type Output = Matrix4;

    fn mul(mut self, scalar: f64) -> Matrix4 {
        self.m.iter_mut().for_each(|v| *v *= scalar);
        self
    }
}
