//! Plain text scene files.
//!
//! One ball per line, eight whitespace separated numbers:
//!
//! ```text
//! x y z radius density angularMassMultiplier bounciness frictionCoefficient
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. Only the shape and
//! material of each ball is stored; balls are loaded at rest.
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use log::debug;

use crate::models::{Ball, Vector3};
use crate::utils::PhysicsError;

const FIELDS_PER_BALL: usize = 8;

/// Parses a scene, returning the balls in file order.
///
/// Every ball goes through the regular setters, so bounciness is clamped and
/// the friction coefficient and angular mass multiplier lose their sign.
///
/// # Errors
/// Returns `PhysicsError::ParseError` with the 1-based line number for a wrong
/// field count, an unparsable number or a value the ball setters reject.
///
/// # Example
/// ```
/// use rs_ballpit::io::parse_scene;
///
/// let balls = parse_scene("# a single ball\n0 5 0 0.5 1 0.4 0.9 0.1\n").unwrap();
/// assert_eq!(balls.len(), 1);
/// assert_eq!(balls[0].radius(), 0.5);
/// assert_eq!(balls[0].bounciness(), 0.9);
///
/// assert!(parse_scene("0 5 0 0.5").is_err());
/// ```
pub fn parse_scene(text: &str) -> Result<Vec<Ball>, PhysicsError> {
    let mut balls = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        balls.push(parse_ball(line, index + 1)?);
    }
    Ok(balls)
}

fn parse_ball(line: &str, line_number: usize) -> Result<Ball, PhysicsError> {
    let parse_error = |message: String| PhysicsError::ParseError { line: line_number, message };

    let fields = line
        .split_whitespace()
        .map(|token| {
            token
                .parse::<f64>()
                .map_err(|e| parse_error(format!("'{}' is not a number: {}", token, e)))
        })
        .collect::<Result<Vec<f64>, PhysicsError>>()?;
    if fields.len() != FIELDS_PER_BALL {
        return Err(parse_error(format!(
            "expected {} fields, found {}",
            FIELDS_PER_BALL,
            fields.len()
        )));
    }

    if let Some(bad) = fields.iter().find(|f| !f.is_finite()) {
        return Err(parse_error(format!("field value {} is not finite", bad)));
    }

    let build = || -> Result<Ball, PhysicsError> {
        let mut ball = Ball::new(Vector3::from((fields[0], fields[1], fields[2])), fields[3])?;
        ball.set_density(fields[4])?;
        ball.set_angular_mass_multiplier(fields[5])?;
        ball.set_bounciness(fields[6]);
        ball.set_friction_coefficient(fields[7]);
        Ok(ball)
    };
    build().map_err(|e| parse_error(e.to_string()))
}

/// Formats balls in the scene format, one line each.
pub fn write_scene(balls: &[Ball]) -> String {
    let mut out = String::new();
    for ball in balls {
        let p = ball.position();
        // Writing into a String cannot fail
        let _ = writeln!(
            out,
            "{} {} {} {} {} {} {} {}",
            p.x,
            p.y,
            p.z,
            ball.radius(),
            ball.density(),
            ball.angular_mass_multiplier(),
            ball.bounciness(),
            ball.friction_coefficient()
        );
    }
    out
}

/// Reads and parses a scene file.
pub fn load_scene_file(path: impl AsRef<Path>) -> Result<Vec<Ball>, PhysicsError> {
    let path = path.as_ref();
    let balls = parse_scene(&fs::read_to_string(path)?)?;
    debug!("Read {} balls from {}", balls.len(), path.display());
    Ok(balls)
}

/// Writes `balls` to a scene file, replacing any existing file.
pub fn save_scene_file(path: impl AsRef<Path>, balls: &[Ball]) -> Result<(), PhysicsError> {
    let path = path.as_ref();
    fs::write(path, write_scene(balls))?;
    debug!("Wrote {} balls to {}", balls.len(), path.display());
    Ok(())
}
