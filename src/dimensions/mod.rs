//! Pitch dimension model.
//!
//! A [`PitchDims`] is built once from a pitch type (and, for size-varying
//! types, the physical width/length/post distance), never modified, and then
//! read by binning, standardization and geometry derivation.

mod layout;
mod markings;
mod params;

pub use layout::Layout;
pub use params::PhysicalParams;

use std::fmt;
use std::str::FromStr;

use crate::error::{DimensionError, Result};

/// The supported pitch types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PitchType {
    /// Fixed 40 m x 20 m pitch, origin bottom-left.
    Fullsize,
    /// Variable size, origin at the pitch center.
    Centered,
    /// Variable size, origin bottom-left.
    Custom,
}

impl PitchType {
    /// Every supported pitch type.
    pub const ALL: [Self; 3] = [Self::Fullsize, Self::Centered, Self::Custom];

    /// The identifier accepted by [`FromStr`].
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Fullsize => "fullsize",
            Self::Centered => "centered",
            Self::Custom => "custom",
        }
    }

    /// Whether the pitch width/length must be supplied.
    #[must_use]
    pub fn size_varies(self) -> bool {
        !matches!(self, Self::Fullsize)
    }

    /// The layout used to derive this pitch type's landmarks.
    #[must_use]
    pub fn layout(self) -> Layout {
        match self {
            Self::Fullsize => Layout::Fixed,
            Self::Centered => Layout::Centered,
            Self::Custom => Layout::CornerOrigin,
        }
    }
}

impl fmt::Display for PitchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for PitchType {
    type Err = DimensionError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Self::ALL.iter().map(|t| t.name()).collect();
                DimensionError::InvalidConfiguration(format!(
                    "pitch_type {s:?} is not one of {valid:?}"
                ))
            })
    }
}

/// Inputs for building a [`PitchDims`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PitchConfig {
    pub pitch_type: PitchType,
    /// Required for size-varying types, ignored otherwise.
    pub pitch_width: Option<f64>,
    /// Required for size-varying types, ignored otherwise.
    pub pitch_length: Option<f64>,
    /// Defaults to `pitch_length / 6` for size-varying types.
    pub post_distance: Option<f64>,
    /// Whether y grows downwards. Only size-varying types honor this.
    pub invert_y: bool,
}

impl Default for PitchConfig {
    fn default() -> Self {
        Self {
            pitch_type: PitchType::Fullsize,
            pitch_width: None,
            pitch_length: None,
            post_distance: None,
            invert_y: false,
        }
    }
}

impl PitchConfig {
    /// Creates a config for a size-varying pitch type.
    #[must_use]
    pub fn sized(pitch_type: PitchType, pitch_width: f64, pitch_length: f64) -> Self {
        Self {
            pitch_type,
            pitch_width: Some(pitch_width),
            pitch_length: Some(pitch_length),
            ..Self::default()
        }
    }

    /// Builds the pitch dimensions.
    ///
    /// # Errors
    ///
    /// Returns `MissingParameter` if a size-varying type lacks its width or
    /// length, and `InvalidConfiguration` for non-positive sizes or a size
    /// combination that breaks the landmark ordering.
    pub fn build(&self) -> Result<PitchDims> {
        let layout = self.pitch_type.layout();
        let params = if self.pitch_type.size_varies() {
            self.variable_params()?
        } else {
            self.warn_ignored();
            Layout::fixed_params()
        };
        tracing::debug!(pitch_type = %self.pitch_type, ?layout, "building pitch dimensions");
        PitchDims::from_layout(self.pitch_type, layout, params)
    }

    fn warn_ignored(&self) {
        if self.pitch_width.is_some() || self.pitch_length.is_some() {
            tracing::warn!(
                pitch_type = %self.pitch_type,
                "pitch_width and pitch_length are only used for size-varying pitches and will be ignored"
            );
        }
        if self.post_distance.is_some() {
            tracing::warn!(
                pitch_type = %self.pitch_type,
                "post_distance is only used for size-varying pitches and will be ignored"
            );
        }
        if self.invert_y {
            tracing::warn!(
                pitch_type = %self.pitch_type,
                "invert_y is only used for size-varying pitches and will be ignored"
            );
        }
    }

    fn variable_params(&self) -> Result<PhysicalParams> {
        let pitch_width = self
            .pitch_width
            .ok_or(DimensionError::MissingParameter("pitch_width"))?;
        let pitch_length = self
            .pitch_length
            .ok_or(DimensionError::MissingParameter("pitch_length"))?;
        positive("pitch_width", pitch_width)?;
        positive("pitch_length", pitch_length)?;

        let post_distance = self.post_distance.unwrap_or(pitch_length / 6.0);
        positive("post_distance", post_distance)?;

        Ok(PhysicalParams {
            pitch_width,
            pitch_length,
            post_distance,
            invert_y: self.invert_y,
            ..Layout::fixed_params()
        })
    }
}

fn positive(name: &str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(DimensionError::InvalidConfiguration(format!("{name} must be positive, got {value}")).into())
    }
}

/// Creates pitch dimensions for a named pitch type.
///
/// `pitch_width`, `pitch_length` and `post_distance` are only used by the
/// size-varying types; `post_distance` defaults to `pitch_length / 6`.
///
/// # Errors
///
/// Returns `InvalidConfiguration` for an unknown `pitch_type` or a
/// non-positive size, and `MissingParameter` when a size-varying type lacks
/// its width or length.
pub fn create_pitch_dims(
    pitch_type: &str,
    pitch_width: Option<f64>,
    pitch_length: Option<f64>,
    post_distance: Option<f64>,
) -> Result<PitchDims> {
    PitchConfig {
        pitch_type: pitch_type.parse()?,
        pitch_width,
        pitch_length,
        post_distance,
        invert_y: false,
    }
    .build()
}

/// The fully derived coordinate system of one pitch.
///
/// All fields are fixed at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchDims {
    pitch_type: PitchType,
    layout: Layout,
    params: PhysicalParams,
    derived: layout::Derived,
    markings: markings::Markings,
}

impl PitchDims {
    fn from_layout(pitch_type: PitchType, layout: Layout, params: PhysicalParams) -> Result<Self> {
        let derived = layout.derive(&params);
        let markings = markings::finish(&derived, params.invert_y);
        let dims = Self {
            pitch_type,
            layout,
            params,
            derived,
            markings,
        };
        dims.check_ordering()?;
        Ok(dims)
    }

    /// Verifies the goal-side ordering along the length axis, the marking
    /// order, and the penalty area straddling the center width.
    fn check_ordering(&self) -> Result<()> {
        let d = &self.derived;
        let along = [
            ("post_left", d.post_left),
            ("korf_left", d.korf_left),
            ("penalty_left", d.penalty_left),
            ("freepass_left", d.freepass_left),
            ("center_length", d.center_length),
            ("freepass_right", d.freepass_right),
            ("penalty_right", d.penalty_right),
            ("korf_right", d.korf_right),
            ("post_right", d.post_right),
        ];
        for pair in along.windows(2) {
            let ((a_name, a), (b_name, b)) = (pair[0], pair[1]);
            if a >= b {
                return Err(DimensionError::InvalidConfiguration(format!(
                    "{a_name} ({a}) must be less than {b_name} ({b}); the pitch is too short for its post distance"
                ))
                .into());
            }
        }

        if !crate::math::interp::is_strictly_increasing(&self.markings.x_sorted) {
            return Err(DimensionError::InvalidConfiguration(format!(
                "x markings must be strictly increasing, got {:?}",
                self.markings.x_sorted
            ))
            .into());
        }

        let (low, high) = if self.params.invert_y {
            (d.penalty_area_top, d.penalty_area_bottom)
        } else {
            (d.penalty_area_bottom, d.penalty_area_top)
        };
        if !(low < d.center_width && d.center_width < high) {
            return Err(DimensionError::InvalidConfiguration(
                "penalty area must straddle the center width".into(),
            )
            .into());
        }
        Ok(())
    }

    #[must_use]
    pub fn pitch_type(&self) -> PitchType {
        self.pitch_type
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        self.layout
    }

    /// The physical inputs the landmarks were derived from.
    #[must_use]
    pub fn params(&self) -> &PhysicalParams {
        &self.params
    }

    #[must_use]
    pub fn pitch_width(&self) -> f64 {
        self.params.pitch_width
    }

    #[must_use]
    pub fn pitch_length(&self) -> f64 {
        self.params.pitch_length
    }

    #[must_use]
    pub fn post_distance(&self) -> f64 {
        self.params.post_distance
    }

    #[must_use]
    pub fn korf_offset(&self) -> f64 {
        self.params.korf_offset
    }

    #[must_use]
    pub fn korf_width(&self) -> f64 {
        self.params.korf_width
    }

    #[must_use]
    pub fn korf_length(&self) -> f64 {
        self.params.korf_length
    }

    #[must_use]
    pub fn twofifty_width(&self) -> f64 {
        self.params.twofifty_width
    }

    #[must_use]
    pub fn twofifty_length(&self) -> f64 {
        self.params.twofifty_length
    }

    /// Half-angle of the arcs behind the posts, in degrees.
    #[must_use]
    pub fn arc(&self) -> Option<f64> {
        self.params.arc
    }

    #[must_use]
    pub fn invert_y(&self) -> bool {
        self.params.invert_y
    }

    #[must_use]
    pub fn origin_center(&self) -> bool {
        self.layout.origin_center()
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.derived.left
    }

    #[must_use]
    pub fn right(&self) -> f64 {
        self.derived.right
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.derived.bottom
    }

    #[must_use]
    pub fn top(&self) -> f64 {
        self.derived.top
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.derived.width
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.derived.length
    }

    /// Display aspect ratio (`width / length`).
    #[must_use]
    pub fn aspect(&self) -> f64 {
        self.derived.aspect
    }

    #[must_use]
    pub fn post_left(&self) -> f64 {
        self.derived.post_left
    }

    #[must_use]
    pub fn post_right(&self) -> f64 {
        self.derived.post_right
    }

    #[must_use]
    pub fn korf_left(&self) -> f64 {
        self.derived.korf_left
    }

    #[must_use]
    pub fn korf_right(&self) -> f64 {
        self.derived.korf_right
    }

    /// Penalty spot on the left half.
    #[must_use]
    pub fn penalty_left(&self) -> f64 {
        self.derived.penalty_left
    }

    /// Penalty spot on the right half.
    #[must_use]
    pub fn penalty_right(&self) -> f64 {
        self.derived.penalty_right
    }

    #[must_use]
    pub fn penalty_area_top(&self) -> f64 {
        self.derived.penalty_area_top
    }

    #[must_use]
    pub fn penalty_area_bottom(&self) -> f64 {
        self.derived.penalty_area_bottom
    }

    #[must_use]
    pub fn penalty_area_left(&self) -> f64 {
        self.derived.penalty_area_left
    }

    #[must_use]
    pub fn penalty_area_right(&self) -> f64 {
        self.derived.penalty_area_right
    }

    /// Far edge of the left free-pass circle.
    #[must_use]
    pub fn freepass_left(&self) -> f64 {
        self.derived.freepass_left
    }

    /// Far edge of the right free-pass circle.
    #[must_use]
    pub fn freepass_right(&self) -> f64 {
        self.derived.freepass_right
    }

    #[must_use]
    pub fn center_width(&self) -> f64 {
        self.derived.center_width
    }

    #[must_use]
    pub fn center_length(&self) -> f64 {
        self.derived.center_length
    }

    /// The 11 x-landmarks from the left back line to the right back line.
    #[must_use]
    pub fn x_markings_sorted(&self) -> &[f64; 11] {
        &self.markings.x_sorted
    }

    /// The 4 y-landmarks (edges and penalty area), ascending.
    #[must_use]
    pub fn y_markings_sorted(&self) -> &[f64; 4] {
        &self.markings.y_sorted
    }

    /// `[left, right, bottom, top]`, or `[left, right, top, bottom]` when
    /// `invert_y` is set.
    #[must_use]
    pub fn pitch_extent(&self) -> &[f64; 4] {
        &self.markings.extent
    }
}
