mod vector3;
mod matrix4;
mod static_mesh;
mod ball;
mod camera;

pub use vector3::*;
pub use matrix4::*;
pub use static_mesh::*;
pub use ball::*;
pub use camera::*;

#[cfg(test)]
mod static_mesh_tests;
#[cfg(test)]
mod ball_tests;
