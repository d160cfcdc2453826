use crate::math::{Point3, Vector3};

/// An ellipse in a plane of constant z.
///
/// Defined by a center, a semi-major axis along X and a semi-minor axis
/// along Y:
///
/// `P(t) = center + (a * cos(t), b * sin(t), 0)`
///
/// Non-positive axis lengths are accepted and yield mirrored or degenerate
/// geometry.
#[derive(Debug, Clone)]
pub struct Ellipse {
    center: Point3,
    semi_major: f64,
    semi_minor: f64,
}

impl Ellipse {
    /// Creates a new ellipse from a center and two semi-axis lengths.
    #[must_use]
    pub fn new(center: Point3, semi_major: f64, semi_minor: f64) -> Self {
        Self {
            center,
            semi_major,
            semi_minor,
        }
    }

    /// Returns the center of the ellipse.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the semi-major axis length.
    #[must_use]
    pub fn semi_major(&self) -> f64 {
        self.semi_major
    }

    /// Returns the semi-minor axis length.
    #[must_use]
    pub fn semi_minor(&self) -> f64 {
        self.semi_minor
    }

    /// Returns the mean of the two semi-axes.
    ///
    /// This is a scale proxy for ordering and aggregation, not a geometric
    /// invariant: no point on the ellipse need lie at this distance from
    /// the center.
    #[must_use]
    pub fn radius(&self) -> f64 {
        (self.semi_major + self.semi_minor) / 2.0
    }

    /// Evaluates the ellipse position at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        Point3::new(
            self.center.x + self.semi_major * t.cos(),
            self.center.y + self.semi_minor * t.sin(),
            self.center.z,
        )
    }

    /// Evaluates the derivative of position at parameter `t`.
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Vector3 {
        Vector3::new(
            -self.semi_major * t.sin(),
            self.semi_minor * t.cos(),
            0.0,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use approx::assert_relative_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn evaluate_at_zero_hits_major_axis() {
        let e = Ellipse::new(Point3::new(1.0, 2.0, 3.0), 3.0, 2.0);
        let p = e.point_at(0.0);
        assert!((p - Point3::new(4.0, 2.0, 3.0)).norm() < TOLERANCE);
    }

    #[test]
    fn evaluate_at_pi_over_2_hits_minor_axis() {
        let e = Ellipse::new(Point3::new(1.0, 2.0, 3.0), 3.0, 2.0);
        let p = e.point_at(FRAC_PI_2);
        assert!((p - Point3::new(1.0, 4.0, 3.0)).norm() < 1e-9);
    }

    #[test]
    fn radius_is_mean_of_axes() {
        let e = Ellipse::new(Point3::origin(), 5.0, 3.0);
        assert_relative_eq!(e.radius(), 4.0);
    }

    #[test]
    fn tangent_at_zero() {
        let e = Ellipse::new(Point3::origin(), 3.0, 2.0);
        let v = e.tangent_at(0.0);
        // At t=0: dx = 0, dy = b.
        assert!((v - Vector3::new(0.0, 2.0, 0.0)).norm() < 1e-9);
    }

    #[test]
    fn circle_is_special_case() {
        let e = Ellipse::new(Point3::origin(), 2.0, 2.0);
        let p = e.point_at(FRAC_PI_2);
        assert!((p - Point3::new(0.0, 2.0, 0.0)).norm() < 1e-9);
        assert_relative_eq!(e.radius(), 2.0);
    }

    #[test]
    fn z_is_constant() {
        let e = Ellipse::new(Point3::new(0.0, 0.0, -2.0), 3.0, 2.0);
        assert!((e.point_at(0.9).z + 2.0).abs() < TOLERANCE);
        assert!(e.tangent_at(0.9).z.abs() < TOLERANCE);
    }
}
