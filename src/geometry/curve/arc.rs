use crate::error::Result;
use crate::math::arc_2d::{arc_point_at, ccw_sweep, reflect_about_diagonal};
use crate::math::Point2;

use super::{Ellipse, Transpose};

/// An elliptical arc running counter-clockwise from `theta1` to `theta2`
/// (degrees).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    ellipse: Ellipse,
    theta1: f64,
    theta2: f64,
}

impl Arc {
    /// Creates a new arc on the ellipse with the given center and diameters.
    ///
    /// # Errors
    ///
    /// Returns an error if either diameter is non-positive.
    pub fn new(center: Point2, width: f64, height: f64, theta1: f64, theta2: f64) -> Result<Self> {
        Ok(Self {
            ellipse: Ellipse::new(center, width, height)?,
            theta1,
            theta2,
        })
    }

    #[must_use]
    pub fn ellipse(&self) -> &Ellipse {
        &self.ellipse
    }

    #[must_use]
    pub fn center(&self) -> &Point2 {
        self.ellipse.center()
    }

    #[must_use]
    pub fn theta1(&self) -> f64 {
        self.theta1
    }

    #[must_use]
    pub fn theta2(&self) -> f64 {
        self.theta2
    }

    /// Angular extent in degrees, in `(0, 360]`.
    #[must_use]
    pub fn sweep(&self) -> f64 {
        ccw_sweep(self.theta1, self.theta2)
    }

    /// Point at parameter `t` in `[0, 1]` along the arc.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        let c = self.ellipse.center();
        let (x, y) = arc_point_at(
            c.x, c.y,
            self.ellipse.width(), self.ellipse.height(),
            self.theta1, self.theta2,
            t,
        );
        Point2::new(x, y)
    }
}

impl Transpose for Arc {
    fn transposed(&self) -> Self {
        let (theta1, theta2) = reflect_about_diagonal(self.theta1, self.theta2);
        Self {
            ellipse: self.ellipse.transposed(),
            theta1,
            theta2,
        }
    }
}
