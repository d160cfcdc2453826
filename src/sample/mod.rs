//! Random curve generation with an injectable random source.

use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::SampleError;
use crate::geometry::{Circle, Curve, Ellipse, Spiral};
use crate::math::Point3;

/// Variant-selection cutoffs over a uniform draw in `[0, 1)`.
///
/// Deliberately 0.33/0.66 rather than exact thirds, so the three bands
/// are approximate thirds with a slight bias toward the spiral.
const CIRCLE_CUTOFF: f64 = 0.33;
const ELLIPSE_CUTOFF: f64 = 0.66;

/// Settings for the random curve generator.
#[derive(Debug, Clone)]
pub struct SampleConfig {
    /// Number of curves to generate.
    pub count: usize,
    /// Uniform range for each center coordinate.
    pub center_range: Range<f64>,
    /// Uniform range for the radius or semi-axis lengths.
    pub shape_range: Range<f64>,
    /// Fixed seed for reproducible runs; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for SampleConfig {
    fn default() -> Self {
        Self {
            count: 5,
            center_range: 0.0..10.0,
            shape_range: 1.0..6.0,
            seed: None,
        }
    }
}

impl SampleConfig {
    /// Checks the configuration for empty or non-finite ranges.
    ///
    /// # Errors
    ///
    /// Returns [`SampleError::EmptySample`] for a zero count and
    /// [`SampleError::InvalidRange`] for a range that is empty or has
    /// non-finite bounds.
    pub fn validate(&self) -> Result<(), SampleError> {
        if self.count == 0 {
            return Err(SampleError::EmptySample);
        }
        check_range("center", &self.center_range)?;
        check_range("shape", &self.shape_range)?;
        Ok(())
    }

    /// Generates the configured number of curves using a seeded or
    /// entropy-backed [`StdRng`].
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`Self::validate`].
    pub fn generate(&self) -> Result<Vec<Curve>, SampleError> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.generate_with(&mut rng)
    }

    /// Generates the configured number of curves from a caller-supplied
    /// random source.
    ///
    /// Per curve: one uniform draw in `[0, 1)` selects the variant by the
    /// 0.33/0.66 cutoffs, then center coordinates and shape parameters are
    /// drawn independently from the configured ranges.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration fails [`Self::validate`].
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> Result<Vec<Curve>, SampleError> {
        self.validate()?;

        let mut curves = Vec::with_capacity(self.count);
        for _ in 0..self.count {
            let choice: f64 = rng.gen();
            let center = Point3::new(
                rng.gen_range(self.center_range.clone()),
                rng.gen_range(self.center_range.clone()),
                rng.gen_range(self.center_range.clone()),
            );
            let curve = if choice < CIRCLE_CUTOFF {
                Curve::Circle(Circle::new(center, rng.gen_range(self.shape_range.clone())))
            } else if choice < ELLIPSE_CUTOFF {
                Curve::Ellipse(Ellipse::new(
                    center,
                    rng.gen_range(self.shape_range.clone()),
                    rng.gen_range(self.shape_range.clone()),
                ))
            } else {
                Curve::Spiral(Spiral::new(
                    center,
                    rng.gen_range(self.shape_range.clone()),
                    rng.gen_range(self.shape_range.clone()),
                ))
            };
            tracing::debug!(radius = curve.radius(), kind = kind_name(&curve), "generated curve");
            curves.push(curve);
        }
        Ok(curves)
    }
}

fn check_range(name: &'static str, range: &Range<f64>) -> Result<(), SampleError> {
    if !range.start.is_finite() || !range.end.is_finite() || range.start >= range.end {
        return Err(SampleError::InvalidRange {
            name,
            min: range.start,
            max: range.end,
        });
    }
    Ok(())
}

fn kind_name(curve: &Curve) -> &'static str {
    match curve {
        Curve::Circle(_) => "circle",
        Curve::Ellipse(_) => "ellipse",
        Curve::Spiral(_) => "spiral",
    }
}
