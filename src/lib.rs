pub mod app;
pub mod error;
pub mod geometry;
pub mod math;
pub mod report;
pub mod sample;

pub use error::{CurveletError, Result};
