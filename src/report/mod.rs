//! Evaluation output and the circle filter-sort-aggregate pipeline.
//!
//! Formatting lives here so the geometry code stays pure and the exact
//! output shape is localized in one place.

use std::io::Write;

use crate::error::Result;
use crate::geometry::{Circle, Curve};

/// Writes position and derivative lines for every curve at parameter `t`.
///
/// Curves are visited in collection order; each produces two lines:
///
/// ```text
/// Coordinates: (x, y, z)
/// Derivative: (x, y, z)
/// ```
///
/// # Errors
///
/// Returns an error if writing to the sink fails.
pub fn write_evaluations<W: Write>(out: &mut W, curves: &[Curve], t: f64) -> Result<()> {
    for curve in curves {
        let p = curve.point_at(t);
        let d = curve.tangent_at(t);
        writeln!(out, "Coordinates: ({}, {}, {})", p.x, p.y, p.z)?;
        writeln!(out, "Derivative: ({}, {}, {})", d.x, d.y, d.z)?;
    }
    Ok(())
}

/// Selects the circle-variant curves, borrowing from the primary collection.
#[must_use]
pub fn circles(curves: &[Curve]) -> Vec<&Circle> {
    curves.iter().filter_map(Curve::as_circle).collect()
}

/// Sorts circles ascending by radius. Tie order is not specified.
pub fn sort_by_radius(circles: &mut [&Circle]) {
    circles.sort_unstable_by(|a, b| a.radius().total_cmp(&b.radius()));
}

/// Sums the radii of the given circles.
#[must_use]
pub fn radius_sum(circles: &[&Circle]) -> f64 {
    circles.iter().map(|c| c.radius()).sum()
}

/// Writes the `Total radius sum` line for the circle subset.
///
/// # Errors
///
/// Returns an error if writing to the sink fails.
pub fn write_radius_sum<W: Write>(out: &mut W, sum: f64) -> Result<()> {
    writeln!(out, "Total radius sum: {sum}")?;
    Ok(())
}
