//! End-to-end demonstration run: generate, evaluate, filter, aggregate.

use std::f64::consts::FRAC_PI_4;
use std::io::Write;

use crate::error::Result;
use crate::report;
use crate::sample::SampleConfig;

/// Runs the full demonstration with the given settings, writing all
/// contract output to `out`.
///
/// The pipeline is strictly one-way: the generator produces the owning
/// collection, the evaluation pass reads every curve at `t = pi/4`, then
/// the circle subset is filtered, sorted by radius, and summed.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the sink fails.
pub fn run_with<W: Write>(config: &SampleConfig, out: &mut W) -> Result<()> {
    let curves = config.generate()?;
    tracing::info!(count = curves.len(), "generated curve collection");

    report::write_evaluations(out, &curves, FRAC_PI_4)?;

    let mut subset = report::circles(&curves);
    report::sort_by_radius(&mut subset);
    let sum = report::radius_sum(&subset);
    tracing::info!(circles = subset.len(), sum, "aggregated circle radii");

    report::write_radius_sum(out, sum)?;
    Ok(())
}

/// Runs the demonstration with default settings on standard output.
///
/// # Errors
///
/// Returns an error if writing to standard output fails.
pub fn run() -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    run_with(&SampleConfig::default(), &mut stdout)
}
