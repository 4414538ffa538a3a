use crate::models::Vector3;
use crate::utils::SimulationConstants;

/// Standard gravity along -Y, the world's up axis being +Y.
pub const STANDARD_GRAVITY: Vector3 = Vector3::new(0.0, -9.80665, 0.0);

pub const DEFAULT_TIMESTEP: f64 = 1.0 / 60.0;

pub const DEFAULT_MAX_STEPS_PER_ADVANCE: usize = 8;

pub const DEFAULT_SIMULATION_CONSTANTS: SimulationConstants = SimulationConstants {
    gravity: STANDARD_GRAVITY,
    timestep: DEFAULT_TIMESTEP,
    max_steps_per_advance: DEFAULT_MAX_STEPS_PER_ADVANCE,
};

pub const DEFAULT_RESTITUTION: f64 = 0.2;
pub const DEFAULT_FRICTION_COEFFICIENT: f64 = 0.2;
pub const DEFAULT_DENSITY: f64 = 1.0;

/// Moment of inertia shape factor of a uniform solid sphere.
pub const SOLID_SPHERE_SHAPE_FACTOR: f64 = 2.0 / 5.0;
/// Moment of inertia shape factor of a thin hollow shell.
pub const SHELL_SPHERE_SHAPE_FACTOR: f64 = 2.0 / 3.0;
