use crate::models::Vector3;
use crate::utils::{PhysicsError, SimulationConstants, DEFAULT_SIMULATION_CONSTANTS, STANDARD_GRAVITY};

#[test]
fn test_default_constants() {
    let constants = SimulationConstants::default();
    assert_eq!(constants, DEFAULT_SIMULATION_CONSTANTS);
    assert_eq!(constants.gravity, STANDARD_GRAVITY);
    assert!(constants.validate().is_ok());
}

#[test]
fn test_partial_override() {
    let constants = SimulationConstants::new(None, Some(0.001), Some(100));
    assert_eq!(constants.gravity, STANDARD_GRAVITY);
    assert_eq!(constants.timestep, 0.001);
    assert_eq!(constants.max_steps_per_advance, 100);
}

#[test]
fn test_validate_rejects_bad_values() {
    let zero_dt = SimulationConstants::new(None, Some(0.0), None);
    assert_eq!(zero_dt.validate(), Err(PhysicsError::InvalidTime));

    let nan_gravity = SimulationConstants::new(Some(Vector3::new(f64::NAN, 0.0, 0.0)), None, None);
    assert!(matches!(nan_gravity.validate(), Err(PhysicsError::InvalidParameter(_))));

    let no_steps = SimulationConstants::new(None, None, Some(0));
    assert!(matches!(no_steps.validate(), Err(PhysicsError::InvalidParameter(_))));
}
