use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

use crate::models::{Matrix4, Vector3};

/// Fraction of a right angle the camera may pitch up or down.
const PITCH_LIMIT: f64 = 0.95 * FRAC_PI_2;

/// First-person viewer with +Y as the fixed up direction.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    position: Vector3,
    direction: Vector3,
    aspect_ratio: f64,
    fov: f64,
}

impl Default for Camera {
    fn default() -> Self {
        Camera {
            position: Vector3::ZERO,
            direction: Vector3::new(0.0, 0.0, 1.0),
            aspect_ratio: 1.0,
            fov: FRAC_PI_4,
        }
    }
}

impl Camera {
    pub fn new(position: Vector3) -> Self {
        Camera { position, ..Default::default() }
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    pub fn move_by(&mut self, delta: Vector3) {
        self.position += delta;
    }

    /// Unit looking direction.
    pub fn direction(&self) -> Vector3 {
        self.direction
    }

    /// Sets the looking direction. Zero vectors are ignored.
    pub fn set_direction(&mut self, direction: Vector3) {
        if let Some(dir) = direction.try_normalize() {
            self.direction = dir;
        }
    }

    /// Turns the camera toward `target`. Does nothing when the target is the
    /// camera position itself.
    pub fn look_at(&mut self, target: Vector3) {
        self.set_direction(target - self.position);
    }

    pub fn set_aspect_ratio(&mut self, aspect_ratio: f64) {
        self.aspect_ratio = aspect_ratio;
    }

    pub fn set_fov(&mut self, fov: f64) {
        self.fov = fov;
    }

    pub fn turn_right(&mut self, angle: f64) {
        self.direction.rotate_y(-angle);
    }

    pub fn turn_left(&mut self, angle: f64) {
        self.direction.rotate_y(angle);
    }

    /// Horizontal right-hand direction, `direction × up`.
    pub fn right_direction(&self) -> Vector3 {
        self.direction.cross(&Vector3::UP)
    }

    /// Looking direction flattened onto the horizontal plane.
    pub fn forward_direction(&self) -> Vector3 {
        let mut forward = self.direction;
        forward.y = 0.0;
        forward.set_length(1.0);
        forward
    }

    /// Signed pitch, positive when looking above the horizon.
    pub fn pitch(&self) -> f64 {
        let angle = Vector3::angle_between(&self.forward_direction(), &self.direction);
        if self.direction.y < 0.0 { -angle } else { angle }
    }

    /// Pitches the camera up by `angle` (down for negative values). The
    /// resulting pitch is clamped to just short of straight up or down.
    ///
    /// # Example
    /// ```
    /// use rs_ballpit::models::Camera;
    /// use std::f64::consts::PI;
    ///
    /// let mut camera = Camera::default();
    /// camera.tilt_up(PI);
    /// assert!((camera.pitch() - 0.95 * PI / 2.0).abs() < 1e-9);
    /// ```
    pub fn tilt_up(&mut self, angle: f64) {
        let right = self.right_direction();
        let current = self.pitch();
        let target = (current + angle).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        let Some(axis) = right.try_normalize() else {
            return;
        };
        let rotation = Matrix4::rotation(target - current, axis);
        self.direction = self.direction.transform_point(&rotation);
    }

    /// Projection matrix placing the camera in the world: perspective, then
    /// pitch around the right axis, then yaw, then the camera translation.
    pub fn projection_matrix(&self, z_near: f64, z_far: f64) -> Matrix4 {
        let mut ret = Matrix4::perspective(self.fov, self.aspect_ratio, z_near, z_far);
        if let Some(axis) = self.right_direction().try_normalize() {
            ret.apply_transformation(&Matrix4::rotation(self.pitch(), axis));
        }
        ret.apply_transformation(&Matrix4::rotation_y(self.direction.z.atan2(self.direction.x)));
        ret.apply_transformation(&Matrix4::translation(
            self.position.x,
            self.position.y,
            self.position.z,
        ));
        ret
    }
}
