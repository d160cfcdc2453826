use std::f64::consts::TAU;

use crate::math::{Point3, Vector3};

/// A helical spiral advancing along the z-axis.
///
/// The XY footprint is an ellipse with semi-axes `a` and `b`; the z
/// coordinate rises by `a + b` per full turn:
///
/// `P(t) = (cx + a * cos(t), cy + b * sin(t), cz + (t / 2*pi) * (a + b))`
#[derive(Debug, Clone)]
pub struct Spiral {
    center: Point3,
    semi_major: f64,
    semi_minor: f64,
}

impl Spiral {
    /// Creates a new spiral from a center and two semi-axis lengths.
    #[must_use]
    pub fn new(center: Point3, semi_major: f64, semi_minor: f64) -> Self {
        Self {
            center,
            semi_major,
            semi_minor,
        }
    }

    /// Returns the center of the spiral.
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

    /// Returns the mean of the two semi-axes, same convention as
    /// [`super::Ellipse::radius`].
    #[must_use]
    pub fn radius(&self) -> f64 {
        (self.semi_major + self.semi_minor) / 2.0
    }

    /// Evaluates the spiral position at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        Point3::new(
            self.center.x + self.semi_major * t.cos(),
            self.center.y + self.semi_minor * t.sin(),
            self.center.z + (t / TAU) * (self.semi_major + self.semi_minor),
        )
    }

    /// Evaluates the derivative of position at parameter `t`.
    ///
    /// The z component is expressed against the mean radius and therefore
    /// reduces to the constant `1/pi` for any axes; it is kept in the
    /// unreduced form.
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Vector3 {
        let r = self.radius();
        Vector3::new(
            -self.semi_major * t.sin(),
            self.semi_minor * t.cos(),
            (self.semi_major + self.semi_minor) / (TAU * r),
        )
    }
}
