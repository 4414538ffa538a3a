//! Fixed-step driver owning the balls and the static world geometry.
//!
//! Every step integrates the balls in index order. Right after ball `i` is
//! integrated it is resolved against every ball `j > i`, then against the
//! mesh. Balls later in the list are therefore tested against `i` before they
//! have been integrated themselves in the same step. This is a frame coherent
//! approximation, not a simultaneous solve, and results depend on ball order.
//!
//! # Example
//!
//! ```
//! use rs_ballpit::models::{Ball, StaticMesh, Vector3};
//! use rs_ballpit::simulation::World;
//! use rs_ballpit::utils::SimulationConstants;
//!
//! let floor = StaticMesh::uv_sphere(16, 20.0).unwrap();
//! let mut world = World::new(floor, SimulationConstants::default()).unwrap();
//! world.spawn(Ball::new(Vector3::new(0.0, 5.0, 0.0), 0.5).unwrap());
//!
//! // Two seconds of simulated time
//! world.simulate(120);
//! assert!(world.balls()[0].position().y < 5.0);
//! ```
use std::ops::{Add, AddAssign};

use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::interactions::resolve_sphere_contact;
use crate::models::{Ball, StaticMesh, Vector3};
use crate::utils::{PhysicsError, SimulationConstants};

/// Contacts resolved during one or more steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepReport {
    pub sphere_contacts: usize,
    pub mesh_contacts: usize,
}

impl StepReport {
    pub fn total(&self) -> usize {
        self.sphere_contacts + self.mesh_contacts
    }
}

impl Add for StepReport {
    type Output = StepReport;

    fn add(self, other: StepReport) -> StepReport {
        StepReport {
            sphere_contacts: self.sphere_contacts + other.sphere_contacts,
            mesh_contacts: self.mesh_contacts + other.mesh_contacts,
        }
    }
}

impl AddAssign for StepReport {
    fn add_assign(&mut self, other: StepReport) {
        *self = *self + other;
    }
}

/// Balls, world geometry and the constants driving them.
#[derive(Debug, Clone)]
pub struct World {
    balls: Vec<Ball>,
    mesh: StaticMesh,
    constants: SimulationConstants,
    accumulator: f64,
}

impl World {
    /// Creates an empty world around `mesh`.
    ///
    /// # Errors
    /// Fails if `constants` does not pass `SimulationConstants::validate`.
    pub fn new(mesh: StaticMesh, constants: SimulationConstants) -> Result<Self, PhysicsError> {
        constants.validate()?;
        debug!(
            "Created world with {} vertices and {} triangles",
            mesh.vertices().len(),
            mesh.triangles().len()
        );
        Ok(World {
            balls: Vec::new(),
            mesh,
            constants,
            accumulator: 0.0,
        })
    }

    pub fn spawn(&mut self, ball: Ball) {
        self.balls.push(ball);
    }

    /// Removes every ball and any pending accumulated time.
    pub fn clear(&mut self) {
        self.balls.clear();
        self.accumulator = 0.0;
    }

    pub fn balls(&self) -> &[Ball] {
        &self.balls
    }

    pub fn balls_mut(&mut self) -> &mut [Ball] {
        &mut self.balls
    }

    pub fn ball_count(&self) -> usize {
        self.balls.len()
    }

    pub fn mesh(&self) -> &StaticMesh {
        &self.mesh
    }

    pub fn set_mesh(&mut self, mesh: StaticMesh) {
        self.mesh = mesh;
    }

    pub fn constants(&self) -> &SimulationConstants {
        &self.constants
    }

    pub fn set_constants(&mut self, constants: SimulationConstants) -> Result<(), PhysicsError> {
        constants.validate()?;
        self.constants = constants;
        Ok(())
    }

    /// Simulated time carried over to the next `advance` call.
    pub fn pending_time(&self) -> f64 {
        self.accumulator
    }

    /// Runs one fixed step of `constants.timestep` seconds.
    pub fn step(&mut self) -> StepReport {
        let dt = self.constants.timestep;
        let gravity = self.constants.gravity;
        let mut report = StepReport::default();

        for i in 0..self.balls.len() {
            let (head, tail) = self.balls.split_at_mut(i + 1);
            let ball = &mut head[i];
            ball.integrate(dt, gravity);
            for other in tail.iter_mut() {
                if resolve_sphere_contact(ball, other) {
                    report.sphere_contacts += 1;
                }
            }
            report.mesh_contacts += ball.collide_with_static_mesh(&self.mesh);
        }

        debug!(
            "Stepped {} balls: {} sphere contacts, {} mesh contacts",
            self.balls.len(),
            report.sphere_contacts,
            report.mesh_contacts
        );
        report
    }

    /// Runs `steps` fixed steps and sums their reports.
    pub fn simulate(&mut self, steps: usize) -> StepReport {
        let mut report = StepReport::default();
        for _ in 0..steps {
            report += self.step();
        }
        report
    }

    /// Adds `elapsed` seconds of real time and runs as many fixed steps as fit.
    ///
    /// At most `constants.max_steps_per_advance` steps run per call. Whole
    /// steps beyond that are dropped so a stalled caller cannot make the
    /// simulation fall further and further behind.
    ///
    /// # Returns
    /// The number of steps run.
    ///
    /// # Errors
    /// Returns `PhysicsError::InvalidTime` for a negative or non-finite `elapsed`.
    ///
    /// # Example
    /// ```
    /// use rs_ballpit::models::StaticMesh;
    /// use rs_ballpit::simulation::World;
    /// use rs_ballpit::utils::SimulationConstants;
    ///
    /// let constants = SimulationConstants::new(None, Some(0.01), Some(4));
    /// let mut world = World::new(StaticMesh::octahedron(), constants).unwrap();
    ///
    /// assert_eq!(world.advance(0.025).unwrap(), 2);
    /// assert_eq!(world.advance(0.5).unwrap(), 4);
    /// assert!(world.advance(-1.0).is_err());
    /// ```
    pub fn advance(&mut self, elapsed: f64) -> Result<usize, PhysicsError> {
        if !(elapsed.is_finite() && elapsed >= 0.0) {
            return Err(PhysicsError::InvalidTime);
        }

        let dt = self.constants.timestep;
        self.accumulator += elapsed;
        let mut steps = 0;
        while self.accumulator >= dt && steps < self.constants.max_steps_per_advance {
            self.step();
            self.accumulator -= dt;
            steps += 1;
        }

        if self.accumulator >= dt {
            let remainder = self.accumulator % dt;
            warn!(
                "Simulation is falling behind, dropping {:.4}s of simulated time",
                self.accumulator - remainder
            );
            self.accumulator = remainder;
        }
        Ok(steps)
    }

    /// Spawns `count` balls at uniformly random positions inside the box
    /// spanned by `region_min` and `region_max`, with radii drawn from
    /// `radius_range` (inclusive). The same `seed` always gives the same balls.
    ///
    /// # Errors
    /// Returns `PhysicsError::InvalidParameter` for an inverted or non-finite
    /// region and `PhysicsError::InvalidRadius` for a radius range that is
    /// inverted or not strictly positive. Errors from creating a ball, such as
    /// `PhysicsError::InvalidMass` for radii too small to carry mass, leave the
    /// world unchanged.
    pub fn scatter(
        &mut self,
        count: usize,
        region_min: Vector3,
        region_max: Vector3,
        radius_range: (f64, f64),
        seed: u64,
    ) -> Result<(), PhysicsError> {
        let bounds = [
            (region_min.x, region_max.x),
            (region_min.y, region_max.y),
            (region_min.z, region_max.z),
        ];
        if bounds.iter().any(|&(lo, hi)| !((hi - lo).is_finite() && lo <= hi)) {
            return Err(PhysicsError::InvalidParameter(format!(
                "scatter region {:?} to {:?} is not a finite box",
                region_min, region_max
            )));
        }
        let (min_radius, max_radius) = radius_range;
        if !(min_radius > 0.0 && max_radius.is_finite() && min_radius <= max_radius) {
            return Err(PhysicsError::InvalidRadius);
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let mut scattered = Vec::with_capacity(count);
        for _ in 0..count {
            let position = Vector3::new(
                rng.random_range(bounds[0].0..=bounds[0].1),
                rng.random_range(bounds[1].0..=bounds[1].1),
                rng.random_range(bounds[2].0..=bounds[2].1),
            );
            let radius = rng.random_range(min_radius..=max_radius);
            scattered.push(Ball::new(position, radius)?);
        }
        self.balls.extend(scattered);
        debug!("Scattered {} balls with seed {}", count, seed);
        Ok(())
    }

    /// Sum of the linear and rotational kinetic energy of all balls.
    pub fn total_kinetic_energy(&self) -> f64 {
        self.balls.par_iter().map(Ball::kinetic_energy).sum()
    }

    /// Sum of the linear momentum of all balls.
    pub fn total_momentum(&self) -> Vector3 {
        self.balls
            .par_iter()
            .map(Ball::momentum)
            .reduce(|| Vector3::ZERO, |a, b| a + b)
    }

    /// Replaces all balls with the ones described by `text` and returns how
    /// many were loaded. On error the world is left unchanged.
    #[cfg(feature = "scene_io")]
    pub fn load_scene(&mut self, text: &str) -> Result<usize, PhysicsError> {
        let balls = crate::io::parse_scene(text)?;
        debug!("Loaded scene with {} balls", balls.len());
        self.balls = balls;
        self.accumulator = 0.0;
        Ok(self.balls.len())
    }

    /// Serializes all balls in the scene text format.
    #[cfg(feature = "scene_io")]
    pub fn save_scene(&self) -> String {
        crate::io::write_scene(&self.balls)
    }
}
