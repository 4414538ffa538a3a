// src/utils/constants_config.rs
use crate::models::Vector3;
use crate::utils::{DEFAULT_SIMULATION_CONSTANTS, PhysicsError};

/// Global parameters of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConstants {
    /// Constant acceleration applied to every ball each step.
    pub gravity: Vector3,
    /// Fixed step length in seconds.
    pub timestep: f64,
    /// Upper bound on fixed steps run by a single `World::advance` call.
    pub max_steps_per_advance: usize,
}

impl Default for SimulationConstants {
    fn default() -> Self {
        DEFAULT_SIMULATION_CONSTANTS
    }
}

impl SimulationConstants {
    /// Builds a set of constants, falling back to the defaults for every `None`.
    ///
    /// # Example
    /// ```
    /// use rs_ballpit::models::Vector3;
    /// use rs_ballpit::utils::SimulationConstants;
    ///
    /// let moon = SimulationConstants::new(Some(Vector3::new(0.0, -1.62, 0.0)), None, None);
    /// assert_eq!(moon.gravity.y, -1.62);
    /// assert_eq!(moon.timestep, SimulationConstants::default().timestep);
    /// ```
    pub fn new(
        gravity: Option<Vector3>,
        timestep: Option<f64>,
        max_steps_per_advance: Option<usize>,
    ) -> Self {
        let default = DEFAULT_SIMULATION_CONSTANTS;
        Self {
            gravity: gravity.unwrap_or(default.gravity),
            timestep: timestep.unwrap_or(default.timestep),
            max_steps_per_advance: max_steps_per_advance.unwrap_or(default.max_steps_per_advance),
        }
    }

    /// Checks that the constants can drive a simulation.
    pub fn validate(&self) -> Result<(), PhysicsError> {
        if !(self.timestep.is_finite() && self.timestep > 0.0) {
            return Err(PhysicsError::InvalidTime);
        }
        if !self.gravity.is_finite() {
            return Err(PhysicsError::InvalidParameter("gravity must be finite".to_string()));
        }
        if self.max_steps_per_advance == 0 {
            return Err(PhysicsError::InvalidParameter("max_steps_per_advance must be at least 1".to_string()));
        }
        Ok(())
    }
}
