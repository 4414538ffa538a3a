use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use approx::{AbsDiffEq, RelativeEq};

use crate::models::Matrix4;
use crate::utils::clamped_acos;

/// A 3D vector used for positions, velocities and axis-angle rates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vector3 {
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    pub const UP: Vector3 = Vector3::new(0.0, 1.0, 0.0);

    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Vector3 { x, y, z }
    }

    #[inline]
    pub fn dot(&self, other: &Vector3) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Calculates the cross product of two vectors.
    ///
    /// # Example
    /// ```
    /// use rs_ballpit::models::Vector3;
    ///
    /// let x = Vector3::new(1.0, 0.0, 0.0);
    /// let y = Vector3::new(0.0, 1.0, 0.0);
    /// assert_eq!(x.cross(&y), Vector3::new(0.0, 0.0, 1.0));
    /// ```
    #[inline]
    pub fn cross(&self, other: &Vector3) -> Vector3 {
        Vector3 {
            x: self.y * other.z - self.z * other.y,
            y: self.z * other.x - self.x * other.z,
            z: self.x * other.y - self.y * other.x,
        }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.length_squared().sqrt()
    }

    #[inline]
    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Rescales the vector to `new_length` keeping its direction.
    /// A zero-length vector is left unchanged.
    ///
    /// # Example
    /// ```
    /// use rs_ballpit::models::Vector3;
    ///
    /// let mut v = Vector3::new(3.0, 0.0, 4.0);
    /// v.set_length(10.0);
    /// assert_eq!(v, Vector3::new(6.0, 0.0, 8.0));
    ///
    /// let mut zero = Vector3::ZERO;
    /// zero.set_length(1.0);
    /// assert_eq!(zero, Vector3::ZERO);
    /// ```
    pub fn set_length(&mut self, new_length: f64) -> &mut Self {
        let length = self.length();
        if length > 0.0 {
            *self *= new_length / length;
        }
        self
    }

    /// Returns a copy of the vector rescaled to `new_length`.
    pub fn with_length(mut self, new_length: f64) -> Vector3 {
        self.set_length(new_length);
        self
    }

    /// Returns the unit vector in the same direction, or `None` when the
    /// length is zero or not finite.
    pub fn try_normalize(&self) -> Option<Vector3> {
        let length = self.length();
        if length > 0.0 && length.is_finite() {
            Some(*self / length)
        } else {
            None
        }
    }

    /// Rotates the vector around the X axis (right handed, radians).
    pub fn rotate_x(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let y = self.y;
        self.y = y * cos - self.z * sin;
        self.z = y * sin + self.z * cos;
        self
    }

    /// Rotates the vector around the Y axis (right handed, radians).
    pub fn rotate_y(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let x = self.x;
        self.x = x * cos + self.z * sin;
        self.z = -x * sin + self.z * cos;
        self
    }

    /// Rotates the vector around the Z axis (right handed, radians).
    pub fn rotate_z(&mut self, angle: f64) -> &mut Self {
        let (sin, cos) = angle.sin_cos();
        let x = self.x;
        self.x = x * cos - self.y * sin;
        self.y = x * sin + self.y * cos;
        self
    }

    /// Applies a homogeneous transform to the vector treated as a point.
    /// The perspective divide is skipped when the resulting w is zero.
    pub fn transform_point(&self, matrix: &Matrix4) -> Vector3 {
        let m = matrix.as_array();
        let (a, b, c) = (self.x, self.y, self.z);
        let w = m[3] * a + m[7] * b + m[11] * c + m[15];
        let w = if w == 0.0 { 1.0 } else { 1.0 / w };
        Vector3 {
            x: (m[0] * a + m[4] * b + m[8] * c + m[12]) * w,
            y: (m[1] * a + m[5] * b + m[9] * c + m[13]) * w,
            z: (m[2] * a + m[6] * b + m[10] * c + m[14]) * w,
        }
    }

    /// Angle between two vectors in radians. Returns 0 if either is zero length.
    ///
    /// # Example
    /// ```
    /// use rs_ballpit::models::Vector3;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// let a = Vector3::new(2.0, 0.0, 0.0);
    /// let b = Vector3::new(0.0, 0.0, 5.0);
    /// assert!((Vector3::angle_between(&a, &b) - FRAC_PI_2).abs() < 1e-12);
    /// assert_eq!(Vector3::angle_between(&a, &Vector3::ZERO), 0.0);
    /// ```
    pub fn angle_between(a: &Vector3, b: &Vector3) -> f64 {
        let lengths = a.length() * b.length();
        if lengths == 0.0 {
            return 0.0;
        }
        clamped_acos(a.dot(b) / lengths)
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    fn add(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    fn sub(self, rhs: Vector3) -> Vector3 {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    fn mul(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    fn mul(self, rhs: Vector3) -> Vector3 {
        rhs * self
    }
}

impl Div<f64> for Vector3 {
    type Output = Vector3;
    fn div(self, rhs: f64) -> Vector3 {
        Vector3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl AddAssign for Vector3 {
    fn add_assign(&mut self, rhs: Vector3) {
        self.x += rhs.x;
        self.y += rhs.y;
        self.z += rhs.z;
    }
}

impl SubAssign for Vector3 {
    fn sub_assign(&mut self, rhs: Vector3) {
        self.x -= rhs.x;
        self.y -= rhs.y;
        self.z -= rhs.z;
    }
}

impl MulAssign<f64> for Vector3 {
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
        self.z *= rhs;
    }
}

impl Sum for Vector3 {
    fn sum<I: Iterator<Item = Vector3>>(iter: I) -> Vector3 {
        iter.fold(Vector3::ZERO, |acc, v| acc + v)
    }
}

impl From<(f64, f64, f64)> for Vector3 {
    fn from((x, y, z): (f64, f64, f64)) -> Self {
        Vector3::new(x, y, z)
    }
}

impl From<Vector3> for (f64, f64, f64) {
    fn from(v: Vector3) -> Self {
        (v.x, v.y, v.z)
    }
}

impl AbsDiffEq for Vector3 {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Vector3 {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
