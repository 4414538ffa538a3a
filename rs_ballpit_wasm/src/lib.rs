// rs_ballpit_wasm/src/lib.rs
// This is the public API for the wasm wrapper of the ball pit simulation.

use js_sys::Float32Array;
use wasm_bindgen::prelude::*;
use rs_ballpit::io::parse_obj;
use rs_ballpit::models::{Ball, BallType, Camera, StaticMesh, Vector3};
use rs_ballpit::simulation::World;
use rs_ballpit::utils::{PhysicsError, SimulationConstants};

fn to_js(err: PhysicsError) -> JsValue {
    JsValue::from_str(&err.to_string())
}

#[wasm_bindgen]
pub struct WasmWorld {
    world: World,
}

#[wasm_bindgen]
impl WasmWorld {
    /// Creates an empty world around the default octahedron.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WasmWorld, JsValue> {
        let world = World::new(StaticMesh::octahedron(), SimulationConstants::default()).map_err(to_js)?;
        Ok(Self { world })
    }

    /// Replaces the world geometry with the contents of an OBJ file.
    #[wasm_bindgen]
    pub fn load_obj(&mut self, text: &str) -> Result<(), JsValue> {
        let mesh = parse_obj(text).map_err(to_js)?;
        web_sys::console::log_1(&format!("Loaded world with {} triangles", mesh.triangles().len()).into());
        self.world.set_mesh(mesh);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_gravity(&mut self, x: f64, y: f64, z: f64) -> Result<(), JsValue> {
        let mut constants = *self.world.constants();
        constants.gravity = Vector3::new(x, y, z);
        self.world.set_constants(constants).map_err(to_js)
    }

    #[wasm_bindgen]
    pub fn spawn(&mut self, x: f64, y: f64, z: f64, radius: f64, shell: bool) -> Result<usize, JsValue> {
        let mut ball = Ball::new(Vector3::new(x, y, z), radius).map_err(to_js)?;
        if shell {
            ball.set_type(BallType::Shell);
        }
        self.world.spawn(ball);
        Ok(self.world.ball_count() - 1)
    }

    #[wasm_bindgen]
    pub fn set_velocity(&mut self, index: usize, x: f64, y: f64, z: f64) -> Result<(), JsValue> {
        let ball = self.world.balls_mut().get_mut(index).ok_or_else(|| out_of_range(index))?;
        ball.set_velocity(Vector3::new(x, y, z));
        Ok(())
    }

    #[wasm_bindgen]
    pub fn clear(&mut self) {
        self.world.clear();
    }

    #[wasm_bindgen(getter)]
    pub fn ball_count(&self) -> usize {
        self.world.ball_count()
    }

    /// Runs a single fixed step and returns the number of contacts.
    #[wasm_bindgen]
    pub fn step(&mut self) -> usize {
        self.world.step().total()
    }

    /// Feeds real frame time (seconds) into the fixed-step loop.
    #[wasm_bindgen]
    pub fn advance(&mut self, elapsed: f64) -> Result<usize, JsValue> {
        self.world.advance(elapsed).map_err(to_js)
    }

    /// Column-major model matrix of one ball, for a `uniformMatrix4fv` call.
    #[wasm_bindgen]
    pub fn model_matrix(&self, index: usize) -> Result<Float32Array, JsValue> {
        let ball = self.world.balls().get(index).ok_or_else(|| out_of_range(index))?;
        Ok(Float32Array::from(&ball.model_matrix().to_f32_array()[..]))
    }

    /// Model matrices of all balls, 16 floats each, in ball order.
    #[wasm_bindgen]
    pub fn model_matrices(&self) -> Float32Array {
        let data: Vec<f32> = self
            .world
            .balls()
            .iter()
            .flat_map(|ball| ball.model_matrix().to_f32_array())
            .collect();
        Float32Array::from(&data[..])
    }

    #[wasm_bindgen]
    pub fn world_vertices(&self) -> Float32Array {
        Float32Array::from(&self.world.mesh().to_vertex_buffer()[..])
    }

    #[wasm_bindgen]
    pub fn world_indices(&self) -> Vec<u32> {
        self.world.mesh().to_index_buffer()
    }

    #[wasm_bindgen]
    pub fn kinetic_energy(&self) -> f64 {
        self.world.total_kinetic_energy()
    }

    #[wasm_bindgen]
    pub fn save_scene(&self) -> String {
        self.world.save_scene()
    }

    /// Replaces all balls with the ones in `text`. Returns the ball count.
    /// A malformed scene leaves the current balls in place.
    #[wasm_bindgen]
    pub fn load_scene(&mut self, text: &str) -> Result<usize, JsValue> {
        self.world.load_scene(text).map_err(to_js)
    }
}

fn out_of_range(index: usize) -> JsValue {
    JsValue::from_str(&format!("no ball with index {}", index))
}

#[wasm_bindgen]
pub struct WasmCamera(Camera);

#[wasm_bindgen]
impl WasmCamera {
    #[wasm_bindgen(constructor)]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(Camera::new(Vector3::new(x, y, z)))
    }

    #[wasm_bindgen]
    pub fn look_at(&mut self, x: f64, y: f64, z: f64) {
        self.0.look_at(Vector3::new(x, y, z));
    }

    #[wasm_bindgen]
    pub fn set_aspect_ratio(&mut self, aspect_ratio: f64) {
        self.0.set_aspect_ratio(aspect_ratio);
    }

    #[wasm_bindgen]
    pub fn turn_right(&mut self, angle: f64) {
        self.0.turn_right(angle);
    }

    #[wasm_bindgen]
    pub fn turn_left(&mut self, angle: f64) {
        self.0.turn_left(angle);
    }

    #[wasm_bindgen]
    pub fn tilt_up(&mut self, angle: f64) {
        self.0.tilt_up(angle);
    }

    /// Moves along the horizontal looking direction.
    #[wasm_bindgen]
    pub fn walk(&mut self, distance: f64) {
        let delta = self.0.forward_direction() * distance;
        self.0.move_by(delta);
    }

    /// Moves sideways, positive to the right.
    #[wasm_bindgen]
    pub fn strafe(&mut self, distance: f64) {
        let delta = self.0.right_direction().with_length(distance);
        self.0.move_by(delta);
    }

    #[wasm_bindgen]
    pub fn projection_matrix(&self, z_near: f64, z_far: f64) -> Float32Array {
        Float32Array::from(&self.0.projection_matrix(z_near, z_far).to_f32_array()[..])
    }
}
