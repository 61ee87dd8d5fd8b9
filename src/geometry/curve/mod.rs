mod annulus;
mod arc;
mod ellipse;
mod line;

pub use annulus::Annulus;
pub use arc::Arc;
pub use ellipse::Ellipse;
pub use line::Polyline;

/// Shapes that can be reflected about the diagonal `y = x`.
///
/// A vertical pitch draws every primitive of the horizontal one reflected
/// this way, so each primitive knows how to transpose itself.
pub trait Transpose {
    /// Returns the shape with its x and y axes swapped.
    #[must_use]
    fn transposed(&self) -> Self;
}
