//! Coordinate layouts and their landmark derivation.
//!
//! Map of the pitch (horizontal, `invert_y = false`):
//!
//! ```text
//! (left, top)                                                   (right, top)
//!     |---------------------------------------------------------|
//!     |                            |                            |
//!     |     ,.***,.**.             |             ,.**.***.      |
//!     |  arc*   O   (   *    (center_length,    *  )  O   *     |  width
//!     |     `*** `***'          center_width)    `***' `***'    |
//!     |                            |                            |
//!     |---------------------------------------------------------|
//! (left, bottom)                                             (right, bottom)
//!     <------------------------- length ------------------------>
//!     <-- post_distance -->
//! ```

use super::params::PhysicalParams;

/// Fixed 'fullsize' pitch: 40 m by 20 m, posts one sixth of the length from
/// each back line, origin at the bottom-left corner.
mod fullsize {
    pub const PITCH_WIDTH: f64 = 20.0;
    pub const PITCH_LENGTH: f64 = 40.0;
    pub const ASPECT: f64 = 20.0 / 40.0;
    pub const POST_DISTANCE: f64 = 6.67;
    pub const POST_LEFT: f64 = 6.67;
    pub const POST_RIGHT: f64 = 33.33;
    pub const KORF_LEFT: f64 = 6.91;
    pub const KORF_RIGHT: f64 = 33.09;
    pub const PENALTY_LEFT: f64 = 9.17;
    pub const PENALTY_RIGHT: f64 = 30.83;
    pub const PENALTY_AREA_LEFT: f64 = 4.17;
    pub const PENALTY_AREA_RIGHT: f64 = 35.83;
    pub const PENALTY_AREA_BOTTOM: f64 = 7.5;
    pub const PENALTY_AREA_TOP: f64 = 12.5;
    pub const FREEPASS_LEFT: f64 = 11.67;
    pub const FREEPASS_RIGHT: f64 = 28.33;
    pub const CENTER_WIDTH: f64 = 10.0;
    pub const CENTER_LENGTH: f64 = 20.0;
}

/// Sizes shared by every layout, in meters.
pub(crate) const KORF_OFFSET: f64 = 0.04;
pub(crate) const KORF_WIDTH: f64 = 0.4;
pub(crate) const KORF_LENGTH: f64 = 0.4;
pub(crate) const TWOFIFTY_WIDTH: f64 = 2.5;
pub(crate) const TWOFIFTY_LENGTH: f64 = 2.5;
pub(crate) const ARC_DEGREES: f64 = 90.0;

/// How a pitch type places its origin and derives its landmarks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    /// Every landmark is a literal constant.
    Fixed,
    /// Variable size, origin at the center of the pitch.
    Centered,
    /// Variable size, origin at the `(left, bottom)` corner.
    CornerOrigin,
}

/// Boundary and landmark coordinates produced by [`Layout::derive`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Derived {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
    pub width: f64,
    pub length: f64,
    pub aspect: f64,
    pub post_left: f64,
    pub post_right: f64,
    pub korf_left: f64,
    pub korf_right: f64,
    pub penalty_left: f64,
    pub penalty_right: f64,
    pub penalty_area_top: f64,
    pub penalty_area_bottom: f64,
    pub penalty_area_left: f64,
    pub penalty_area_right: f64,
    pub freepass_left: f64,
    pub freepass_right: f64,
    pub center_width: f64,
    pub center_length: f64,
}

impl Layout {
    /// Returns `true` when the origin sits at the pitch center.
    #[must_use]
    pub fn origin_center(self) -> bool {
        matches!(self, Self::Centered)
    }

    /// The physical parameters of the fixed layout.
    pub(crate) fn fixed_params() -> PhysicalParams {
        PhysicalParams {
            pitch_width: fullsize::PITCH_WIDTH,
            pitch_length: fullsize::PITCH_LENGTH,
            post_distance: fullsize::POST_DISTANCE,
            korf_offset: KORF_OFFSET,
            korf_width: KORF_WIDTH,
            korf_length: KORF_LENGTH,
            twofifty_width: TWOFIFTY_WIDTH,
            twofifty_length: TWOFIFTY_LENGTH,
            arc: Some(ARC_DEGREES),
            invert_y: false,
        }
    }

    /// Computes every boundary and landmark coordinate.
    ///
    /// Closed-form arithmetic only; the result depends on nothing but
    /// `self` and `params`.
    pub(crate) fn derive(self, params: &PhysicalParams) -> Derived {
        match self {
            Self::Fixed => fixed(),
            Self::Centered => {
                let half_length = params.pitch_length / 2.0;
                let half_width = params.pitch_width / 2.0;
                let (bottom, top) = if params.invert_y {
                    (half_width, -half_width)
                } else {
                    (-half_width, half_width)
                };
                variable(params, -half_length, half_length, bottom, top)
            }
            Self::CornerOrigin => {
                let (bottom, top) = if params.invert_y {
                    (params.pitch_width, 0.0)
                } else {
                    (0.0, params.pitch_width)
                };
                variable(params, 0.0, params.pitch_length, bottom, top)
            }
        }
    }
}

fn fixed() -> Derived {
    Derived {
        left: 0.0,
        right: fullsize::PITCH_LENGTH,
        bottom: 0.0,
        top: fullsize::PITCH_WIDTH,
        width: fullsize::PITCH_WIDTH,
        length: fullsize::PITCH_LENGTH,
        aspect: fullsize::ASPECT,
        post_left: fullsize::POST_LEFT,
        post_right: fullsize::POST_RIGHT,
        korf_left: fullsize::KORF_LEFT,
        korf_right: fullsize::KORF_RIGHT,
        penalty_left: fullsize::PENALTY_LEFT,
        penalty_right: fullsize::PENALTY_RIGHT,
        penalty_area_top: fullsize::PENALTY_AREA_TOP,
        penalty_area_bottom: fullsize::PENALTY_AREA_BOTTOM,
        penalty_area_left: fullsize::PENALTY_AREA_LEFT,
        penalty_area_right: fullsize::PENALTY_AREA_RIGHT,
        freepass_left: fullsize::FREEPASS_LEFT,
        freepass_right: fullsize::FREEPASS_RIGHT,
        center_width: fullsize::CENTER_WIDTH,
        center_length: fullsize::CENTER_LENGTH,
    }
}

/// Landmarks for the variable layouts. Right-hand landmarks mirror the
/// left-hand ones about the halfway line.
fn variable(params: &PhysicalParams, left: f64, right: f64, bottom: f64, top: f64) -> Derived {
    let mirror = |x: f64| left + right - x;

    let center_length = (left + right) / 2.0;
    let center_width = (bottom + top) / 2.0;

    let post_left = left + params.post_distance;
    let korf_left = post_left + params.korf_offset + params.korf_length / 2.0;
    let penalty_left = post_left + params.twofifty_length;
    let penalty_area_left = post_left - params.twofifty_length;
    let freepass_left = penalty_left + params.twofifty_length;

    // Under inversion the "bottom" edge of the penalty area has the larger y.
    let half_area = if params.invert_y {
        -params.twofifty_width / 2.0
    } else {
        params.twofifty_width / 2.0
    };

    Derived {
        left,
        right,
        bottom,
        top,
        width: params.pitch_width,
        length: params.pitch_length,
        aspect: params.pitch_width / params.pitch_length,
        post_left,
        post_right: mirror(post_left),
        korf_left,
        korf_right: mirror(korf_left),
        penalty_left,
        penalty_right: mirror(penalty_left),
        penalty_area_top: center_width + half_area,
        penalty_area_bottom: center_width - half_area,
        penalty_area_left,
        penalty_area_right: mirror(penalty_area_left),
        freepass_left,
        freepass_right: mirror(freepass_left),
        center_width,
        center_length,
    }
}
