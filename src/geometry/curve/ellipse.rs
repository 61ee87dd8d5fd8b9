use crate::error::{GeometryError, Result};
use crate::math::{Point2, TOLERANCE};

use super::Transpose;

/// An axis-aligned ellipse given by its center and full diameters.
///
/// Pitch circles become ellipses once the x and y scales differ, so every
/// round marking is an `Ellipse` with `width == height` in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    center: Point2,
    width: f64,
    height: f64,
}

impl Ellipse {
    /// Creates a new ellipse.
    ///
    /// # Errors
    ///
    /// Returns an error if either diameter is non-positive.
    pub fn new(center: Point2, width: f64, height: f64) -> Result<Self> {
        if !(width >= TOLERANCE && height >= TOLERANCE) {
            return Err(GeometryError::Degenerate(format!(
                "ellipse diameters must be positive, got {width} x {height}"
            ))
            .into());
        }
        Ok(Self {
            center,
            width,
            height,
        })
    }

    /// Creates a circle.
    ///
    /// # Errors
    ///
    /// Returns an error if the diameter is non-positive.
    pub fn circle(center: Point2, diameter: f64) -> Result<Self> {
        Self::new(center, diameter, diameter)
    }

    #[must_use]
    pub fn center(&self) -> &Point2 {
        &self.center
    }

    /// Diameter along x.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Diameter along y.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }
}

impl Transpose for Ellipse {
    fn transposed(&self) -> Self {
        Self {
            center: Point2::new(self.center.y, self.center.x),
            width: self.height,
            height: self.width,
        }
    }
}
