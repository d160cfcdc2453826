pub mod curve;

pub use curve::{Circle, Curve, Ellipse, Spiral};
