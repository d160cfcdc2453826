mod circle;
mod ellipse;
mod spiral;

pub use circle::Circle;
pub use ellipse::Ellipse;
pub use spiral::Spiral;

use crate::math::{Point3, Vector3};

/// A parametric 3D curve.
///
/// A closed set of variants dispatched by exhaustive matching, so consumers
/// that care about one variant (the circle filter in [`crate::report`])
/// narrow on the discriminant instead of downcasting.
///
/// All evaluation is pure and total over finite `t`: no variant validates
/// its parameters, and degenerate geometry (zero radius, zero axes) simply
/// produces degenerate points and tangents.
#[derive(Debug, Clone)]
pub enum Curve {
    /// A circle in a plane of constant z.
    Circle(Circle),
    /// An ellipse in a plane of constant z.
    Ellipse(Ellipse),
    /// A helical spiral advancing along the z-axis.
    Spiral(Spiral),
}

impl Curve {
    /// Returns the representative scalar radius of the curve.
    ///
    /// Exact for a circle; the arithmetic mean of the semi-axes for an
    /// ellipse or spiral. Used for ordering and aggregation, not as a
    /// geometric invariant.
    #[must_use]
    pub fn radius(&self) -> f64 {
        match self {
            Curve::Circle(c) => c.radius(),
            Curve::Ellipse(e) => e.radius(),
            Curve::Spiral(s) => s.radius(),
        }
    }

    /// Evaluates the curve position at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point3 {
        match self {
            Curve::Circle(c) => c.point_at(t),
            Curve::Ellipse(e) => e.point_at(t),
            Curve::Spiral(s) => s.point_at(t),
        }
    }

    /// Evaluates the first derivative of position with respect to `t`.
    ///
    /// The result is not normalized; its magnitude carries the speed of
    /// traversal (e.g. exactly `r` for a circle of radius `r`).
    #[must_use]
    pub fn tangent_at(&self, t: f64) -> Vector3 {
        match self {
            Curve::Circle(c) => c.tangent_at(t),
            Curve::Ellipse(e) => e.tangent_at(t),
            Curve::Spiral(s) => s.tangent_at(t),
        }
    }

    /// Returns the circle payload when this curve is the circle variant.
    #[must_use]
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            Curve::Circle(c) => Some(c),
            _ => None,
        }
    }
}
