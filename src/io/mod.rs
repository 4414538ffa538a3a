#[cfg(feature = "scene_io")]
mod scene;
#[cfg(feature = "obj_loader")]
mod obj;

#[cfg(feature = "scene_io")]
pub use scene::*;

#[cfg(feature = "obj_loader")]
pub use obj::*;

#[cfg(test)]
#[cfg(feature = "scene_io")]
mod scene_tests;
