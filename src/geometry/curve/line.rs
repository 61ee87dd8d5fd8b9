use crate::error::{GeometryError, Result};
use crate::math::Point2;

use super::Transpose;

/// An open polyline through two or more points.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    points: Vec<Point2>,
}

impl Polyline {
    /// Creates a polyline.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than two points are given.
    pub fn new(points: Vec<Point2>) -> Result<Self> {
        if points.len() < 2 {
            return Err(
                GeometryError::Degenerate("a polyline needs at least two points".into()).into(),
            );
        }
        Ok(Self { points })
    }

    /// Creates a two-point segment.
    #[must_use]
    pub fn segment(a: Point2, b: Point2) -> Self {
        Self { points: vec![a, b] }
    }

    /// The x-coordinates of every point, in order.
    #[must_use]
    pub fn xs(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.x).collect()
    }

    /// The y-coordinates of every point, in order.
    #[must_use]
    pub fn ys(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.y).collect()
    }
}

impl Transpose for Polyline {
    fn transposed(&self) -> Self {
        Self {
            points: self.points.iter().map(|p| Point2::new(p.y, p.x)).collect(),
        }
    }
}
