//! Coordinate mapping between pitch types.
//!
//! Each axis is mapped piecewise-linearly between the corresponding sorted
//! markings of the two pitches, so landmarks land on landmarks (a point on
//! the penalty spot of one pitch maps to the penalty spot of the other).

use crate::dimensions::{create_pitch_dims, PitchDims};
use crate::error::{BinningError, Result};
use crate::math::interp::interp;

/// Maps coordinates from one pitch's coordinate system to another's.
#[derive(Debug, Clone, PartialEq)]
pub struct Standardizer {
    from: PitchDims,
    to: PitchDims,
}

impl Standardizer {
    /// Creates a standardizer between two pitches.
    #[must_use]
    pub fn new(from: &PitchDims, to: &PitchDims) -> Self {
        Self {
            from: from.clone(),
            to: to.clone(),
        }
    }

    /// Builds both pitches through [`create_pitch_dims`]. The target is
    /// always a fixed-size pitch type, so only the source takes sizes.
    ///
    /// # Errors
    ///
    /// Propagates any error from building either pitch.
    pub fn from_pitch_types(
        pitch_from: &str,
        width_from: Option<f64>,
        length_from: Option<f64>,
        pitch_to: &str,
    ) -> Result<Self> {
        let from = create_pitch_dims(pitch_from, width_from, length_from, None)?;
        let to = create_pitch_dims(pitch_to, None, None, None)?;
        Ok(Self { from, to })
    }

    #[must_use]
    pub fn from_dims(&self) -> &PitchDims {
        &self.from
    }

    #[must_use]
    pub fn to_dims(&self) -> &PitchDims {
        &self.to
    }

    /// Maps one point.
    ///
    /// The top of the source pitch lands on the top of the target whether
    /// or not either pitch has an inverted y-axis.
    #[must_use]
    pub fn transform_point(&self, x: f64, y: f64) -> (f64, f64) {
        let y_up = upright(&self.from, y);
        let mapped = interp(y_up, &upright_knots(&self.from), &upright_knots(&self.to));
        (
            interp(x, self.from.x_markings_sorted(), self.to.x_markings_sorted()),
            upright(&self.to, mapped),
        )
    }

    /// Maps every point, returning the new `(x, y)` arrays.
    ///
    /// Points beyond the source pitch clamp to the target boundary.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `x` and `y` differ in length.
    pub fn transform(&self, x: &[f64], y: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
        if x.len() != y.len() {
            return Err(BinningError::DimensionMismatch {
                x_len: x.len(),
                y_len: y.len(),
            }
            .into());
        }
        Ok(x.iter()
            .zip(y)
            .map(|(&px, &py)| self.transform_point(px, py))
            .unzip())
    }

    /// The inverse mapping.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

/// Reflects `y` of an inverted pitch so that it grows towards the top.
/// The reflection is its own inverse.
fn upright(dims: &PitchDims, y: f64) -> f64 {
    if dims.invert_y() {
        dims.top() + dims.bottom() - y
    } else {
        y
    }
}

/// The y-markings in upright coordinates, ascending.
fn upright_knots(dims: &PitchDims) -> [f64; 4] {
    let mut knots = *dims.y_markings_sorted();
    for k in &mut knots {
        *k = upright(dims, *k);
    }
    knots.sort_by(f64::total_cmp);
    knots
}
