use gimbal_base::OrbitAngles;
use std::f64::consts::TAU;

mod catalog;

pub use catalog::{PREDEFINED_VIEWS, PredefinedView, default_view};

/// A point on the unit sphere, the image of an orbit angle pair.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpherePoint {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl SpherePoint {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn distance(self, other: Self) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        let dz = self.z - other.z;
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<OrbitAngles> for SpherePoint {
    fn from(angles: OrbitAngles) -> Self {
        sphere_point(angles.theta, angles.phi)
    }
}

/// Standard spherical-to-Cartesian mapping on the unit sphere.
pub fn sphere_point(theta: f64, phi: f64) -> SpherePoint {
    SpherePoint::new(
        theta.cos() * phi.sin(),
        theta.sin() * phi.sin(),
        phi.cos(),
    )
}

/// Straight-line distance between two unit-sphere points. Collapses near the
/// poles: insensitive to theta when phi is close to 0 or pi.
pub fn euclidean_distance(p: SpherePoint, q: SpherePoint) -> f64 {
    p.distance(q)
}

/// Shortest circular distance between two angles, in [0, pi]. Zero exactly
/// when the angles are equal modulo 2*pi.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let delta = (a - b).abs() % TAU;
    delta.min(TAU - delta)
}

/// Closest catalog entry to a queried orbit, with both distance figures so
/// callers can apply independent thresholds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NearestView {
    pub index: usize,
    pub euclidean: f64,
    pub angular: f64,
}

/// Resolves the catalog entry closest to `angles` by Euclidean distance on
/// the unit sphere; ties go to the earliest catalog index. The angular figure
/// is the per-axis wraparound distance to the winning entry only, taken as
/// the worse of the two axes.
pub fn nearest_view(angles: OrbitAngles) -> NearestView {
    let query = SpherePoint::from(angles);
    let mut index = 0;
    let mut euclidean = f64::INFINITY;
    for (i, view) in PREDEFINED_VIEWS.iter().enumerate() {
        let dist = query.distance(view.sphere_point());
        if dist < euclidean {
            euclidean = dist;
            index = i;
        }
    }
    let view = &PREDEFINED_VIEWS[index];
    let angular = angular_distance(angles.theta, view.theta)
        .max(angular_distance(angles.phi, view.phi));
    NearestView {
        index,
        euclidean,
        angular,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn angular_distance_is_symmetric_and_bounded() {
        for (a, b) in [(0.0, 1.0), (-3.0, 5.0), (10.0 * PI, 0.3), (-7.5, 7.5)] {
            let d = angular_distance(a, b);
            assert_eq!(d, angular_distance(b, a));
            assert!((0.0..=PI + 1.0e-12).contains(&d), "distance {d} out of range");
        }
    }

    #[test]
    fn angular_distance_wraps_full_turns() {
        assert!(angular_distance(0.3, 0.3 + TAU) < 1.0e-12);
        assert_eq!(angular_distance(1.2, 1.2), 0.0);
        assert!(angular_distance(-PI + 0.05, PI - 0.05) < 0.11);
    }

    #[test]
    fn sphere_point_poles_ignore_theta() {
        let a = sphere_point(0.0, 0.0);
        let b = sphere_point(2.0, 0.0);
        assert!(euclidean_distance(a, b) < 1.0e-12);
    }
}
