use std::env;
use std::fs;

use crate::io::{load_scene_file, parse_scene, save_scene_file, write_scene};
use crate::models::{Ball, BallType, Vector3};
use crate::utils::PhysicsError;

fn sample_balls() -> Vec<Ball> {
    let mut a = Ball::new(Vector3::new(1.5, -2.0, 0.25), 0.75).unwrap();
    a.set_density(2.5).unwrap();
    a.set_bounciness(0.8);
    a.set_friction_coefficient(0.05);

    let mut b = Ball::new(Vector3::new(0.0, 10.0, -3.0), 2.0).unwrap();
    b.set_type(BallType::Shell);
    vec![a, b]
}

#[test]
fn test_field_order() {
    let text = write_scene(&sample_balls()[..1]);
    assert_eq!(text, "1.5 -2 0.25 0.75 2.5 0.4 0.8 0.05\n");
}

#[test]
fn test_parse_fields() {
    let balls = parse_scene("1 2 3 0.5 4 0.6 0.7 0.3").unwrap();
    let ball = &balls[0];
    assert_eq!(ball.position(), Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(ball.radius(), 0.5);
    assert_eq!(ball.density(), 4.0);
    assert_eq!(ball.angular_mass_multiplier(), 0.6);
    assert_eq!(ball.bounciness(), 0.7);
    assert_eq!(ball.friction_coefficient(), 0.3);
    assert_eq!(ball.velocity(), Vector3::ZERO);
}

#[test]
fn test_write_then_parse_keeps_balls() {
    let balls = sample_balls();
    assert_eq!(parse_scene(&write_scene(&balls)).unwrap(), balls);
}

#[test]
fn test_comments_and_blank_lines() {
    let text = "# saved scene\n\n  \n0 1 0 1 1 0.4 0.2 0.2\n# trailing\n\t0 4 0 1 1 0.4 0.2 0.2\n";
    let balls = parse_scene(text).unwrap();
    assert_eq!(balls.len(), 2);
    assert_eq!(balls[1].position().y, 4.0);
}

#[test]
fn test_values_go_through_setters() {
    let balls = parse_scene("0 0 0 1 1 -0.5 3.0 -0.4").unwrap();
    assert_eq!(balls[0].angular_mass_multiplier(), 0.5);
    assert_eq!(balls[0].bounciness(), 1.0);
    assert_eq!(balls[0].friction_coefficient(), 0.4);
}

#[test]
fn test_errors_report_line() {
    let text = "0 0 0 1 1 0.4 0.2 0.2\n\n0 0 0 1 1 0.4 0.2\n";
    match parse_scene(text) {
        Err(PhysicsError::ParseError { line, message }) => {
            assert_eq!(line, 3);
            assert!(message.contains("expected 8 fields"));
        }
        other => panic!("expected a parse error, got {:?}", other),
    }

    let bad_number = parse_scene("0 0 zero 1 1 0.4 0.2 0.2");
    assert!(matches!(bad_number, Err(PhysicsError::ParseError { line: 1, .. })));

    let bad_radius = parse_scene("# header\n0 0 0 -1 1 0.4 0.2 0.2");
    assert!(matches!(bad_radius, Err(PhysicsError::ParseError { line: 2, .. })));

    let bad_density = parse_scene("0 0 0 1 0 0.4 0.2 0.2");
    assert!(matches!(bad_density, Err(PhysicsError::ParseError { line: 1, .. })));

    let zero_multiplier = parse_scene("0 0 0 1 1 0 0.2 0.2");
    assert!(matches!(zero_multiplier, Err(PhysicsError::ParseError { line: 1, .. })));
}

#[test]
fn test_non_finite_fields_rejected() {
    let bad_position = parse_scene("nan 0 inf 1 1 0.4 0.2 0.2\n");
    assert!(matches!(bad_position, Err(PhysicsError::ParseError { line: 1, .. })));

    let bad_friction = parse_scene("0 0 0 1 1 0.4 0.2 0.2\n0 0 0 1 1 0.4 0.2 NaN\n");
    assert!(matches!(bad_friction, Err(PhysicsError::ParseError { line: 2, .. })));
}

#[test]
fn test_scene_files() {
    let path = env::temp_dir().join(format!("rs_ballpit_scene_{}.txt", std::process::id()));
    let balls = sample_balls();

    save_scene_file(&path, &balls).unwrap();
    let loaded = load_scene_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(loaded, balls);
}

#[test]
fn test_missing_file() {
    let path = env::temp_dir().join("rs_ballpit_scene_does_not_exist.txt");
    assert!(matches!(load_scene_file(path), Err(PhysicsError::Io(_))));
}
