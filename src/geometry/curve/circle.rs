use crate::math::{Point3, Vector3};

/// A circle in a plane of constant z.
///
/// Defined by a center and a radius, with the plane fixed parallel to XY:
///
/// `P(t) = center + r * (cos(t), sin(t), 0)`
///
/// The parameter `t` is the angle in radians; the curve is periodic with
/// period `2*pi`. A non-positive radius is accepted and yields a mirrored
/// or degenerate circle.
#[derive(Debug, Clone)]
pub struct Circle {
    center: Point3,
    r: f64,
}

impl Circle {
    /// Creates a new circle from a center and radius.
    #[must_use]
    pub fn new(center: Point3, r: f64) -> Self {
        Self { center, r }
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.r
    }

    /// Evaluates the circle position at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        Point3::new(
            self.center.x + self.r * t.cos(),
            self.center.y + self.r * t.sin(),
            self.center.z,
        )
    }

    /// Evaluates the derivative of position at parameter `t`.
    ///
    /// The magnitude of the result is `|r|`.
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Vector3 {
        Vector3::new(-self.r * t.sin(), self.r * t.cos(), 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, TAU};

    #[test]
    fn evaluate_at_zero() {
        let c = Circle::new(Point3::origin(), 2.0);
        let p = c.point_at(0.0);
        assert!((p - Point3::new(2.0, 0.0, 0.0)).norm() < TOLERANCE);
    }

    #[test]
    fn evaluate_at_pi_over_2() {
        let c = Circle::new(Point3::origin(), 3.0);
        let p = c.point_at(FRAC_PI_2);
        assert!((p - Point3::new(0.0, 3.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn point_stays_at_distance_r_from_center() {
        let c = Circle::new(Point3::new(1.0, -2.0, 4.0), 2.5);
        for i in 0..16 {
            let t = TAU * f64::from(i) / 16.0;
            let d = (c.point_at(t) - c.center()).norm();
            assert_relative_eq!(d, 2.5, epsilon = 1e-12);
        }
    }

    #[test]
    fn tangent_magnitude_equals_radius() {
        let c = Circle::new(Point3::origin(), 4.0);
        for i in 0..16 {
            let t = TAU * f64::from(i) / 16.0;
            assert_relative_eq!(c.tangent_at(t).norm(), 4.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn tangent_at_zero_points_up() {
        let c = Circle::new(Point3::origin(), 1.0);
        let v = c.tangent_at(0.0);
        // At t=0 the derivative is +Y with magnitude r.
        assert!((v - Vector3::new(0.0, 1.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn z_is_constant() {
        let c = Circle::new(Point3::new(0.0, 0.0, 7.0), 1.0);
        assert!((c.point_at(1.3).z - 7.0).abs() < TOLERANCE);
        assert!(c.tangent_at(1.3).z.abs() < TOLERANCE);
    }

    #[test]
    fn offset_center() {
        let c = Circle::new(Point3::new(1.0, 2.0, 3.0), 1.0);
        let p = c.point_at(0.0);
        assert!((p - Point3::new(2.0, 2.0, 3.0)).norm() < TOLERANCE);
    }

    #[test]
    fn degenerate_radius_collapses_to_center() {
        let c = Circle::new(Point3::new(1.0, 1.0, 1.0), 0.0);
        assert!((c.point_at(0.7) - Point3::new(1.0, 1.0, 1.0)).norm() < TOLERANCE);
        assert!(c.tangent_at(0.7).norm() < TOLERANCE);
    }
}
