use approx::assert_relative_eq;
use crate::assert_float_eq;
use crate::models::{Ball, BallType, Matrix4, Vector3};
use crate::utils::PhysicsError;
use std::f64::consts::PI;

#[test]
fn test_defaults() {
    let ball = Ball::new(Vector3::new(1.0, 2.0, 3.0), 2.0).unwrap();
    assert_eq!(ball.position(), Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(ball.velocity(), Vector3::ZERO);
    assert_eq!(ball.angular_velocity(), Vector3::ZERO);
    assert_eq!(ball.orientation(), Matrix4::identity());
    assert_eq!(ball.density(), 1.0);
    assert_eq!(ball.bounciness(), 0.2);
    assert_eq!(ball.friction_coefficient(), 0.2);
    assert_float_eq(ball.angular_mass_multiplier(), 0.4, 1e-12, None);
}

#[test]
fn test_invalid_radius() {
    assert_eq!(Ball::new(Vector3::ZERO, 0.0), Err(PhysicsError::InvalidRadius));
    assert_eq!(Ball::new(Vector3::ZERO, -1.0), Err(PhysicsError::InvalidRadius));
    assert_eq!(Ball::new(Vector3::ZERO, f64::NAN), Err(PhysicsError::InvalidRadius));

    let mut ball = Ball::new(Vector3::ZERO, 1.0).unwrap();
    assert!(ball.set_radius(-2.0).is_err());
    assert_eq!(ball.radius(), 1.0);
}

#[test]
fn test_non_finite_position_rejected() {
    let result = Ball::new(Vector3::new(f64::NAN, 0.0, 0.0), 1.0);
    assert!(matches!(result, Err(PhysicsError::InvalidParameter(_))));
    let result = Ball::new(Vector3::new(0.0, f64::INFINITY, 0.0), 1.0);
    assert!(matches!(result, Err(PhysicsError::InvalidParameter(_))));
}

#[test]
fn test_vanishing_mass_rejected() {
    assert_eq!(Ball::new(Vector3::ZERO, 1e-120), Err(PhysicsError::InvalidMass));

    let mut ball = Ball::new(Vector3::ZERO, 1e-60).unwrap();
    assert_eq!(ball.set_density(1e-200), Err(PhysicsError::InvalidMass));
    assert_eq!(ball.set_angular_mass_multiplier(1e-300), Err(PhysicsError::InvalidMass));
    assert_eq!(ball.density(), 1.0);
}

#[test]
fn test_mass_and_angular_mass() {
    let mut ball = Ball::new(Vector3::ZERO, 2.0).unwrap();
    let volume = 4.0 / 3.0 * PI * 8.0;
    assert_float_eq(ball.mass(), volume, 1e-9, None);
    assert_float_eq(ball.angular_mass(), 4.0 * 0.4 * volume, 1e-9, None);

    ball.set_type(BallType::Shell);
    assert_float_eq(ball.angular_mass(), 4.0 * (2.0 / 3.0) * volume, 1e-9, None);

    // Density scales both masses
    ball.set_density(3.0).unwrap();
    assert_float_eq(ball.mass(), 3.0 * volume, 1e-9, None);
}

#[test]
fn test_setters_sanitize_input() {
    let mut ball = Ball::new(Vector3::ZERO, 1.0).unwrap();

    ball.set_bounciness(0.6);
    assert_eq!(ball.bounciness(), 0.6);
    ball.set_bounciness(2.0);
    assert_eq!(ball.bounciness(), 1.0);
    ball.set_bounciness(f64::NAN);
    assert_eq!(ball.bounciness(), 0.0);

    ball.set_friction_coefficient(-0.7);
    assert_eq!(ball.friction_coefficient(), 0.7);

    ball.set_angular_mass_multiplier(-0.5).unwrap();
    assert_eq!(ball.angular_mass_multiplier(), 0.5);
    assert!(ball.set_angular_mass_multiplier(0.0).is_err());
    assert_eq!(ball.angular_mass_multiplier(), 0.5);

    assert_eq!(ball.set_density(0.0), Err(PhysicsError::InvalidDensity));
    assert_eq!(ball.set_density(-1.0), Err(PhysicsError::InvalidDensity));
    assert_eq!(ball.density(), 1.0);
}

#[test]
fn test_free_fall() {
    let gravity = Vector3::new(0.0, -9.8, 0.0);
    let mut ball = Ball::new(Vector3::ZERO, 0.5).unwrap();
    let dt = 1e-4;
    let steps = 10_000;
    for _ in 0..steps {
        ball.integrate(dt, gravity);
    }
    let t = dt * steps as f64;

    assert_relative_eq!(ball.velocity(), gravity * t, epsilon = 1e-9);
    // Position lags the exact parabola by one step of explicit Euler
    assert_relative_eq!(ball.position(), gravity * (0.5 * t * t), epsilon = 1e-3);
}

#[test]
fn test_integrate_without_spin_keeps_orientation() {
    let mut ball = Ball::new(Vector3::ZERO, 1.0).unwrap();
    ball.integrate(0.1, Vector3::ZERO);
    assert_eq!(ball.orientation(), Matrix4::identity());
}

#[test]
fn test_integrate_spin() {
    let mut ball = Ball::new(Vector3::ZERO, 1.0).unwrap();
    ball.set_angular_velocity(Vector3::new(0.0, PI, 0.0));
    ball.integrate(0.5, Vector3::ZERO);

    // Half a second at π rad/s is a quarter turn around Y
    let expected = Matrix4::rotation_y(PI / 2.0);
    for (a, b) in ball.orientation().as_array().iter().zip(expected.as_array().iter()) {
        assert_float_eq(*a, *b, 1e-12, None);
    }
    // Orientation never picks up a translation
    assert_eq!(ball.orientation().translation_part(), Vector3::ZERO);
}

#[test]
fn test_model_matrix_order() {
    let mut ball = Ball::new(Vector3::new(10.0, 0.0, 0.0), 2.0).unwrap();
    ball.set_angular_velocity(Vector3::new(0.0, 0.0, PI));
    ball.integrate(0.5, Vector3::ZERO);

    // Unit +X: rotated to +Y, scaled to 2, then moved to the center
    let p = Vector3::new(1.0, 0.0, 0.0).transform_point(&ball.model_matrix());
    assert_relative_eq!(p, Vector3::new(10.0, 2.0, 0.0), epsilon = 1e-12);
}

#[test]
fn test_velocity_at_point() {
    let mut ball = Ball::new(Vector3::ZERO, 1.0).unwrap();
    ball.set_velocity(Vector3::new(1.0, 0.0, 0.0));
    ball.set_angular_velocity(Vector3::new(0.0, 0.0, 2.0));

    // ω × r = (0,0,2) × (0,-1,0) = (2,0,0)
    let bottom = ball.velocity_at_point(Vector3::new(0.0, -1.0, 0.0));
    assert_eq!(bottom, Vector3::new(3.0, 0.0, 0.0));
    let top = ball.velocity_at_point(Vector3::new(0.0, 1.0, 0.0));
    assert_eq!(top, Vector3::new(-1.0, 0.0, 0.0));
}

#[test]
fn test_energy_and_momentum() {
    let mut ball = Ball::new(Vector3::ZERO, 1.0).unwrap();
    ball.set_velocity(Vector3::new(0.0, 2.0, 0.0));
    let m = ball.mass();
    assert_float_eq(ball.kinetic_energy(), 0.5 * m * 4.0, 1e-9, None);
    assert_relative_eq!(ball.momentum(), Vector3::new(0.0, 2.0 * m, 0.0), epsilon = 1e-12);

    ball.set_angular_velocity(Vector3::new(1.0, 0.0, 0.0));
    assert_float_eq(ball.kinetic_energy(), 0.5 * m * 4.0 + 0.5 * ball.angular_mass(), 1e-9, None);
}
