pub mod arc_2d;
pub mod interp;

/// 2D point type (pitch coordinates).
pub type Point2 = nalgebra::Point2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;
