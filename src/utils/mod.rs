mod constants;
mod constants_config;
mod math_helpers;

pub use constants::*;
pub use constants_config::*;
pub use math_helpers::*;
pub use crate::errors::PhysicsError;

#[cfg(test)]
mod math_helpers_tests;
#[cfg(test)]
mod constants_config_tests;
