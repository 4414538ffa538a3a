use std::f64::consts::PI;

use crate::models::{Matrix4, Vector3};
use crate::utils::{
    PhysicsError, DEFAULT_DENSITY, DEFAULT_FRICTION_COEFFICIENT, DEFAULT_RESTITUTION,
    SHELL_SPHERE_SHAPE_FACTOR, SOLID_SPHERE_SHAPE_FACTOR,
};

/// Mass distribution of a ball, selecting its moment of inertia shape factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallType {
    /// Uniform solid sphere, `I = 2/5 m r²`.
    Solid,
    /// Thin hollow shell, `I = 2/3 m r²`.
    Shell,
}

impl BallType {
    pub fn angular_mass_multiplier(&self) -> f64 {
        match self {
            BallType::Solid => SOLID_SPHERE_SHAPE_FACTOR,
            BallType::Shell => SHELL_SPHERE_SHAPE_FACTOR,
        }
    }
}

/// A rigid sphere with linear and angular state.
///
/// Shape parameters can only be changed through the setters, which keep mass
/// and angular mass strictly positive.
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub(crate) position: Vector3,
    pub(crate) velocity: Vector3,
    pub(crate) orientation: Matrix4,
    pub(crate) angular_velocity: Vector3,
    radius: f64,
    density: f64,
    angular_mass_multiplier: f64,
    restitution: f64,
    friction_coefficient: f64,
}

impl Ball {
    /// Creates a resting solid ball.
    ///
    /// # Arguments
    /// * `position` - World space center of the ball, must be finite.
    /// * `radius` - Radius, must be positive and finite.
    ///
    /// # Errors
    /// Returns `PhysicsError::InvalidParameter` for a non-finite position,
    /// `PhysicsError::InvalidRadius` for a zero, negative or non-finite
    /// radius, and `PhysicsError::InvalidMass` when the radius is so small that
    /// the mass or angular mass underflows to zero.
    ///
    /// # Example
    /// ```
    /// use rs_ballpit::models::{Ball, Vector3};
    ///
    /// let ball = Ball::new(Vector3::new(0.0, 5.0, 0.0), 0.5).unwrap();
    /// assert_eq!(ball.radius(), 0.5);
    /// assert_eq!(ball.bounciness(), 0.2);
    /// assert_eq!(ball.friction_coefficient(), 0.2);
    /// assert_eq!(ball.velocity(), Vector3::ZERO);
    ///
    /// assert!(Ball::new(Vector3::ZERO, 0.0).is_err());
    /// ```
    pub fn new(position: Vector3, radius: f64) -> Result<Self, PhysicsError> {
        if !position.is_finite() {
            return Err(PhysicsError::InvalidParameter(format!("ball position {:?} is not finite", position)));
        }
        validate_radius(radius)?;
        validate_masses(DEFAULT_DENSITY, radius, SOLID_SPHERE_SHAPE_FACTOR)?;
        Ok(Ball {
            position,
            velocity: Vector3::ZERO,
            orientation: Matrix4::identity(),
            angular_velocity: Vector3::ZERO,
            radius,
            density: DEFAULT_DENSITY,
            angular_mass_multiplier: BallType::Solid.angular_mass_multiplier(),
            restitution: DEFAULT_RESTITUTION,
            friction_coefficient: DEFAULT_FRICTION_COEFFICIENT,
        })
    }

    /// `density * 4/3 * π * r³`
    pub fn mass(&self) -> f64 {
        sphere_mass(self.density, self.radius)
    }

    /// Moment of inertia about the center: `r² * shape factor * mass`.
    pub fn angular_mass(&self) -> f64 {
        self.radius * self.radius * self.angular_mass_multiplier * self.mass()
    }

    pub fn set_type(&mut self, ball_type: BallType) {
        self.angular_mass_multiplier = ball_type.angular_mass_multiplier();
    }

    pub fn position(&self) -> Vector3 {
        self.position
    }

    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
    }

    pub fn velocity(&self) -> Vector3 {
        self.velocity
    }

    pub fn set_velocity(&mut self, velocity: Vector3) {
        self.velocity = velocity;
    }

    pub fn angular_velocity(&self) -> Vector3 {
        self.angular_velocity
    }

    pub fn set_angular_velocity(&mut self, angular_velocity: Vector3) {
        self.angular_velocity = angular_velocity;
    }

    /// Current spin as a pure rotation matrix.
    pub fn orientation(&self) -> Matrix4 {
        self.orientation
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn set_radius(&mut self, radius: f64) -> Result<(), PhysicsError> {
        validate_radius(radius)?;
        validate_masses(self.density, radius, self.angular_mass_multiplier)?;
        self.radius = radius;
        Ok(())
    }

    pub fn density(&self) -> f64 {
        self.density
    }

    pub fn set_density(&mut self, density: f64) -> Result<(), PhysicsError> {
        if !(density.is_finite() && density > 0.0) {
            return Err(PhysicsError::InvalidDensity);
        }
        validate_masses(density, self.radius, self.angular_mass_multiplier)?;
        self.density = density;
        Ok(())
    }

    /// Coefficient of restitution.
    pub fn bounciness(&self) -> f64 {
        self.restitution
    }

    /// Sets the coefficient of restitution, clamped to [0, 1]. NaN maps to 0.
    ///
    /// # Example
    /// ```
    /// use rs_ballpit::models::{Ball, Vector3};
    ///
    /// let mut ball = Ball::new(Vector3::ZERO, 1.0).unwrap();
    /// ball.set_bounciness(1.7);
    /// assert_eq!(ball.bounciness(), 1.0);
    /// ball.set_bounciness(-0.3);
    /// assert_eq!(ball.bounciness(), 0.0);
    /// ```
    pub fn set_bounciness(&mut self, restitution: f64) {
        self.restitution = if restitution.is_nan() { 0.0 } else { restitution.clamp(0.0, 1.0) };
    }

    pub fn friction_coefficient(&self) -> f64 {
        self.friction_coefficient
    }

    /// Stores the absolute value of `friction_coefficient`. NaN maps to 0.
    pub fn set_friction_coefficient(&mut self, friction_coefficient: f64) {
        self.friction_coefficient = if friction_coefficient.is_nan() { 0.0 } else { friction_coefficient.abs() };
    }

    pub fn angular_mass_multiplier(&self) -> f64 {
        self.angular_mass_multiplier
    }

    /// Stores the absolute value of the shape factor.
    ///
    /// # Errors
    /// Returns `PhysicsError::InvalidParameter` when the factor is zero or not
    /// finite, and `PhysicsError::InvalidMass` if the angular mass underflows.
    pub fn set_angular_mass_multiplier(&mut self, multiplier: f64) -> Result<(), PhysicsError> {
        let multiplier = multiplier.abs();
        if !(multiplier.is_finite() && multiplier > 0.0) {
            return Err(PhysicsError::InvalidParameter(format!(
                "angular mass multiplier must be non-zero and finite, got {}",
                multiplier
            )));
        }
        validate_masses(self.density, self.radius, multiplier)?;
        self.angular_mass_multiplier = multiplier;
        Ok(())
    }

    /// Advances the ball by `dt` seconds under constant acceleration `gravity`.
    ///
    /// The position moves with the velocity from before this step's gravity
    /// kick. The orientation is rotated around the angular velocity axis by
    /// `|ω| * dt`; a zero angular velocity leaves it untouched.
    ///
    /// # Example
    /// ```
    /// use rs_ballpit::models::{Ball, Vector3};
    ///
    /// let mut ball = Ball::new(Vector3::ZERO, 1.0).unwrap();
    /// ball.set_velocity(Vector3::new(1.0, 0.0, 0.0));
    /// ball.integrate(0.5, Vector3::new(0.0, -10.0, 0.0));
    /// assert_eq!(ball.position(), Vector3::new(0.5, 0.0, 0.0));
    /// assert_eq!(ball.velocity(), Vector3::new(1.0, -5.0, 0.0));
    /// ```
    pub fn integrate(&mut self, dt: f64, gravity: Vector3) {
        self.position += self.velocity * dt;
        self.velocity += gravity * dt;

        let spin_rate = self.angular_velocity.length();
        if let Some(axis) = self.angular_velocity.try_normalize() {
            self.orientation
                .apply_transformation(&Matrix4::rotation(spin_rate * dt, axis));
        }
    }

    /// Transform that maps a unit sphere at the origin onto this ball:
    /// spin first, then scale by the radius, then translate to the position.
    pub fn model_matrix(&self) -> Matrix4 {
        let mut ret = Matrix4::identity();
        ret.apply_transformation(&self.orientation);
        ret.apply_transformation(&Matrix4::scaling(self.radius));
        ret.apply_transformation(&Matrix4::translation(
            self.position.x,
            self.position.y,
            self.position.z,
        ));
        ret
    }

    /// Velocity of the material point of the ball located at `point`:
    /// `v + ω × (p − center)`.
    pub fn velocity_at_point(&self, point: Vector3) -> Vector3 {
        self.velocity + self.angular_velocity.cross(&(point - self.position))
    }

    /// Linear plus rotational kinetic energy.
    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass() * self.velocity.length_squared()
            + 0.5 * self.angular_mass() * self.angular_velocity.length_squared()
    }

    /// Linear momentum `m * v`.
    pub fn momentum(&self) -> Vector3 {
        self.velocity * self.mass()
    }
}

fn sphere_mass(density: f64, radius: f64) -> f64 {
    density * 4.0 / 3.0 * PI * radius.powi(3)
}

/// Both the mass and the angular mass must stay usable as divisors.
fn validate_masses(density: f64, radius: f64, multiplier: f64) -> Result<(), PhysicsError> {
    let mass = sphere_mass(density, radius);
    let angular_mass = radius * radius * multiplier * mass;
    if mass.is_finite() && mass > 0.0 && angular_mass.is_finite() && angular_mass > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidMass)
    }
}

fn validate_radius(radius: f64) -> Result<(), PhysicsError> {
    if radius.is_finite() && radius > 0.0 {
        Ok(())
    } else {
        Err(PhysicsError::InvalidRadius)
    }
}
