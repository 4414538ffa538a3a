use log::trace;

use crate::interactions::tangent_direction;
use crate::models::{Ball, Vector3};
use crate::utils::series_combination;

/// Resolves an overlap between two balls.
///
/// The balls are first pushed apart along the line of centers, the lighter
/// ball moving further. If they are still approaching, a restitution impulse
/// using the mean of both restitutions is applied, followed by a friction
/// impulse bounded by the geometric mean of both friction coefficients.
///
/// Coincident centers have no separation axis and are left untouched.
///
/// # Returns
/// `true` if either ball was changed.
///
/// # Example
/// ```
/// use rs_ballpit::interactions::resolve_sphere_contact;
/// use rs_ballpit::models::{Ball, Vector3};
///
/// let mut left = Ball::new(Vector3::new(0.0, 0.0, 0.0), 1.0).unwrap();
/// let mut right = Ball::new(Vector3::new(1.5, 0.0, 0.0), 1.0).unwrap();
/// left.set_velocity(Vector3::new(1.0, 0.0, 0.0));
///
/// assert!(resolve_sphere_contact(&mut left, &mut right));
/// let gap = (right.position() - left.position()).length();
/// assert!(gap >= 2.0 - 1e-12);
/// assert!(right.velocity().x > left.velocity().x);
/// ```
pub fn resolve_sphere_contact(b1: &mut Ball, b2: &mut Ball) -> bool {
    let axis = b2.position - b1.position;
    let distance = axis.length();
    let contact_distance = b1.radius() + b2.radius();
    if distance > contact_distance {
        return false;
    }
    let Some(n) = axis.try_normalize() else {
        trace!("Skipping sphere contact with coincident centers at {:?}", b1.position);
        return false;
    };

    let m1 = b1.mass();
    let m2 = b2.mass();
    let total_mass = m1 + m2;
    let penetration = contact_distance - distance;
    b1.position -= n * (penetration * m2 / total_mass);
    b2.position += n * (penetration * m1 / total_mass);

    if n.dot(&b2.velocity) >= n.dot(&b1.velocity) {
        trace!("Separated spheres, penetration {}", penetration);
        return true;
    }

    let contact = b1.position + n * b1.radius();
    let r1 = contact - b1.position;
    let r2 = contact - b2.position;
    let i1 = b1.angular_mass();
    let i2 = b2.angular_mass();

    let v_rel = b2.velocity_at_point(contact) - b1.velocity_at_point(contact);
    let restitution = (b1.bounciness() + b2.bounciness()) / 2.0;
    let denominator = 1.0 / m1
        + 1.0 / m2
        + n.dot(&r1.cross(&n).cross(&r1)) / i1
        + n.dot(&r2.cross(&n).cross(&r2)) / i2;
    let j = -(1.0 + restitution) * v_rel.dot(&n) / denominator;
    let normal_impulse = n * j;
    b1.velocity -= normal_impulse / m1;
    b2.velocity += normal_impulse / m2;
    b1.angular_velocity -= r1.cross(&normal_impulse) / i1;
    b2.angular_velocity += r2.cross(&normal_impulse) / i2;

    apply_sphere_friction(b1, b2, contact, n, j);
    trace!("Resolved sphere contact at {:?}, normal impulse {}", contact, j);
    true
}

fn apply_sphere_friction(b1: &mut Ball, b2: &mut Ball, contact: Vector3, n: Vector3, normal_impulse: f64) {
    let v_rel = b2.velocity_at_point(contact) - b1.velocity_at_point(contact);
    let Some(tangent) = tangent_direction(v_rel, n) else {
        return;
    };

    let friction_coefficient = (b1.friction_coefficient() * b2.friction_coefficient()).sqrt();
    let Some(effective_mass) = series_combination(point_effective_mass(b1, contact), point_effective_mass(b2, contact)) else {
        return;
    };

    let required_impulse = v_rel.dot(&tangent) * effective_mass;
    let friction = tangent * required_impulse.min(normal_impulse * friction_coefficient);

    let r1 = contact - b1.position;
    let r2 = contact - b2.position;
    b1.velocity += friction / b1.mass();
    b1.angular_velocity += r1.cross(&friction) / b1.angular_mass();
    b2.velocity -= friction / b2.mass();
    b2.angular_velocity -= r2.cross(&friction) / b2.angular_mass();
}

/// Resistance of `ball` to a tangential impulse at `point`: `1 / (1/m + r²/I)`.
fn point_effective_mass(ball: &Ball, point: Vector3) -> f64 {
    let lever = point - ball.position;
    1.0 / (1.0 / ball.mass() + lever.length_squared() / ball.angular_mass())
}
