use log::trace;

use crate::models::{Ball, MeshQuery, Vector3};
use crate::utils::{series_combination, DIRECTION_EPSILON};

impl Ball {
    /// Collides the ball with every vertex and then every triangle face of
    /// `mesh`.
    ///
    /// Each penetrating point is resolved on its own against the ball's state
    /// as left by the previous one. A vertex and a face may both fire for the
    /// same contact region.
    ///
    /// # Returns
    /// The number of contacts that produced a response.
    ///
    /// # Example
    /// ```
    /// use rs_ballpit::models::{Ball, StaticMesh, Vector3};
    ///
    /// let floor = StaticMesh::new(
    ///     vec![Vector3::new(-5.0, 0.0, -5.0), Vector3::new(0.0, 0.0, 5.0), Vector3::new(5.0, 0.0, -5.0)],
    ///     vec![[0, 1, 2]],
    /// ).unwrap();
    /// let mut ball = Ball::new(Vector3::new(0.0, 0.9, 0.0), 1.0).unwrap();
    /// ball.set_velocity(Vector3::new(0.0, -1.0, 0.0));
    ///
    /// assert_eq!(ball.collide_with_static_mesh(&floor), 1);
    /// assert!(ball.velocity().y > 0.0);
    /// assert!((ball.position().y - 1.0).abs() < 1e-12);
    /// ```
    pub fn collide_with_static_mesh(&mut self, mesh: &impl MeshQuery) -> usize {
        let mut contacts = 0;
        for i in 0..mesh.vertex_count() {
            if self.resolve_point_contact(mesh.vertex(i)) {
                contacts += 1;
            }
        }
        for i in 0..mesh.triangle_count() {
            let (a, b, c) = mesh.triangle(i);
            let Some(point) = triangle_contact_point(self.position, a, b, c) else {
                continue;
            };
            if self.resolve_point_contact(point) {
                contacts += 1;
            }
        }
        contacts
    }

    /// Resolves contact with a single fixed point.
    ///
    /// Nothing happens unless the point lies inside the ball and the ball is
    /// moving towards it. Otherwise the ball is pushed out until the point is
    /// on its surface, its normal velocity is reflected with the ball's
    /// restitution and a Coulomb-bounded friction impulse is applied at the
    /// point.
    ///
    /// # Returns
    /// `true` if the contact was resolved.
    pub fn resolve_point_contact(&mut self, point: Vector3) -> bool {
        let mut d = point - self.position;
        // Negated comparisons so a NaN point is never treated as a contact
        if !(d.length_squared() <= self.radius() * self.radius()) {
            return false;
        }
        if !(self.velocity.dot(&d) > 0.0) {
            return false;
        }

        let depth = self.radius() - d.length();
        d.set_length(depth);
        self.position -= d;

        let Some(normal) = (point - self.position).try_normalize() else {
            trace!("Skipping contact at {:?}: no normal", point);
            return false;
        };
        let dv = normal * (self.velocity.dot(&normal) * (1.0 + self.bounciness()));
        self.velocity -= dv;

        self.apply_point_friction(point, normal, dv.length());
        trace!("Resolved point contact at {:?}, depth {}", point, depth);
        true
    }

    /// Tangential impulse at `point` after a normal velocity change of
    /// magnitude `normal_dv`: fully cancels the sliding velocity of the
    /// contact point when the Coulomb bound allows it, clamps otherwise.
    fn apply_point_friction(&mut self, point: Vector3, normal: Vector3, normal_dv: f64) {
        let v_rel = -self.velocity_at_point(point);
        let Some(tangent) = tangent_direction(v_rel, normal) else {
            return;
        };

        let mass = self.mass();
        let angular_mass = self.angular_mass();
        let angular_effective_mass = angular_mass / (self.radius() * self.radius());
        let Some(effective_mass) = series_combination(mass, angular_effective_mass) else {
            return;
        };

        let max_friction_impulse = normal_dv * mass * self.friction_coefficient();
        let required_impulse = v_rel.dot(&tangent) * effective_mass;
        let friction = tangent * required_impulse.min(max_friction_impulse);

        let lever = point - self.position;
        self.velocity += friction / mass;
        self.angular_velocity += lever.cross(&friction) / angular_mass;
    }
}

/// Unit direction of the part of `v` perpendicular to the unit vector `normal`.
pub(crate) fn tangent_direction(v: Vector3, normal: Vector3) -> Option<Vector3> {
    let tangential = v - normal * normal.dot(&v);
    if tangential.length() < DIRECTION_EPSILON {
        return None;
    }
    tangential.try_normalize()
}

/// Projects `center` onto the plane of triangle `abc`.
///
/// Returns `None` for degenerate triangles and when `center` lies outside the
/// infinite prism swept by the triangle along its normal.
///
/// # Example
/// ```
/// use rs_ballpit::interactions::triangle_contact_point;
/// use rs_ballpit::models::Vector3;
///
/// let a = Vector3::new(0.0, 0.0, 0.0);
/// let b = Vector3::new(0.0, 0.0, 2.0);
/// let c = Vector3::new(2.0, 0.0, 0.0);
///
/// let inside = triangle_contact_point(Vector3::new(0.5, 3.0, 0.5), a, b, c);
/// assert_eq!(inside, Some(Vector3::new(0.5, 0.0, 0.5)));
///
/// assert_eq!(triangle_contact_point(Vector3::new(2.0, 1.0, 2.0), a, b, c), None);
/// ```
pub fn triangle_contact_point(center: Vector3, a: Vector3, b: Vector3, c: Vector3) -> Option<Vector3> {
    let normal = (b - a).cross(&(c - a));
    let unit_normal = normal.try_normalize()?;

    for (start, end) in [(a, b), (b, c), (c, a)] {
        let inward = normal.cross(&(end - start));
        if inward.dot(&(center - start)) < 0.0 {
            return None;
        }
    }

    Some(center - unit_normal * unit_normal.dot(&(center - a)))
}
