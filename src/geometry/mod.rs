pub mod curve;
mod pitch_geometry;

pub use curve::{Annulus, Arc, Ellipse, Polyline, Transpose};
pub use pitch_geometry::PitchGeometry;
