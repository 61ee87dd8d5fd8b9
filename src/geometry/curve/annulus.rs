use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

use super::{Ellipse, Transpose};

/// A ring: an ellipse outline of a given thickness, drawn inwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Annulus {
    outer: Ellipse,
    ring_width: f64,
}

impl Annulus {
    /// Creates a new annulus.
    ///
    /// # Errors
    ///
    /// Returns an error if the outer diameters are non-positive or the ring
    /// is not thinner than the smaller outer radius.
    pub fn new(center: Point2, width: f64, height: f64, ring_width: f64) -> Result<Self> {
        let outer = Ellipse::new(center, width, height)?;
        if !(ring_width >= TOLERANCE && ring_width < 0.5 * width.min(height)) {
            return Err(GeometryError::Degenerate(format!(
                "annulus ring width {ring_width} must be positive and less than the outer radius"
            ))
            .into());
        }
        Ok(Self { outer, ring_width })
    }

    #[must_use]
    pub fn outer(&self) -> &Ellipse {
        &self.outer
    }

    #[must_use]
    pub fn center(&self) -> &Point2 {
        self.outer.center()
    }

    #[must_use]
    pub fn ring_width(&self) -> f64 {
        self.ring_width
    }
}

impl Transpose for Annulus {
    fn transposed(&self) -> Self {
        Self {
            outer: self.outer.transposed(),
            ring_width: self.ring_width,
        }
    }
}
