// demos/drop_balls.rs
// Drops a cloud of balls into a bowl and prints diagnostics once per second.
// Run with RUST_LOG=debug to see the per-step contact counts.

use rs_ballpit::models::{Matrix4, StaticMesh, Vector3};
use rs_ballpit::simulation::World;
use rs_ballpit::utils::{PhysicsError, SimulationConstants};

fn main() -> Result<(), PhysicsError> {
    env_logger::init();

    // Optional OBJ file for the world, otherwise a large sphere used as a bowl
    let mesh = match std::env::args().nth(1) {
        Some(path) => rs_ballpit::io::load_obj(path)?,
        None => StaticMesh::uv_sphere(24, 12.0)?.transformed(&Matrix4::translation(0.0, 4.0, 0.0)),
    };

    let mut world = World::new(mesh, SimulationConstants::default())?;
    world.scatter(
        60,
        Vector3::new(-4.0, 0.0, -4.0),
        Vector3::new(4.0, 8.0, 4.0),
        (0.3, 0.7),
        2024,
    )?;

    println!("Initial state:");
    println!("Balls: {}", world.ball_count());
    println!("Kinetic energy: {:.3} J", world.total_kinetic_energy());

    let steps_per_second = (1.0 / world.constants().timestep).round() as usize;
    for second in 1..=5 {
        let report = world.simulate(steps_per_second);
        let momentum = world.total_momentum();
        println!(
            "t={}s  contacts: {} ball/ball, {} ball/world  energy: {:.3} J  momentum: ({:.3}, {:.3}, {:.3})",
            second,
            report.sphere_contacts,
            report.mesh_contacts,
            world.total_kinetic_energy(),
            momentum.x,
            momentum.y,
            momentum.z
        );
    }

    let lowest = world
        .balls()
        .iter()
        .map(|b| b.position().y - b.radius())
        .fold(f64::INFINITY, f64::min);
    println!("\nLowest ball surface point: y = {:.3}", lowest);

    println!("\nFinal scene:");
    print!("{}", world.save_scene());
    Ok(())
}
