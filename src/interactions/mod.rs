mod mesh_collisions;
mod sphere_collisions;

pub use mesh_collisions::*;
pub use sphere_collisions::*;
