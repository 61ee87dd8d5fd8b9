use crate::error::{GeometryError, Result};

/// Default diameter of a post, in meters.
pub const DEFAULT_POST_DIAMETER: f64 = 0.1;

/// Ring thickness of a korf, in meters.
pub const KORF_RING_WIDTH: f64 = 0.04;

/// Appearance options for drawing a pitch.
///
/// Every option is explicit and defaulted here; nothing is read from the
/// plotting backend's global settings. Colours and line styles are opaque
/// strings handed to the backend unchanged.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchStyle {
    pub pitch_color: String,
    pub line_color: String,
    pub line_alpha: f64,
    pub linewidth: f64,
    pub linestyle: Option<String>,
    pub line_zorder: f64,
    /// Spot diameter as a fraction of the pitch length (halved). Spots are
    /// skipped when this is not positive.
    pub spot_scale: f64,
    pub korf_color: String,
    pub korf_alpha: f64,
    pub korf_linestyle: Option<String>,
    /// Defaults to the korf length of the pitch.
    pub korf_diameter: Option<f64>,
    pub post_color: String,
    pub post_alpha: f64,
    pub post_linestyle: Option<String>,
    /// Defaults to [`DEFAULT_POST_DIAMETER`].
    pub post_diameter: Option<f64>,
}

impl Default for PitchStyle {
    fn default() -> Self {
        Self {
            pitch_color: "white".to_owned(),
            line_color: "#b0b0b0".to_owned(),
            line_alpha: 1.0,
            linewidth: 2.0,
            linestyle: None,
            line_zorder: 0.9,
            spot_scale: 0.002,
            korf_color: "y".to_owned(),
            korf_alpha: 1.0,
            korf_linestyle: None,
            korf_diameter: None,
            post_color: "gray".to_owned(),
            post_alpha: 1.0,
            post_linestyle: None,
            post_diameter: None,
        }
    }
}

impl PitchStyle {
    /// Checks that every numeric option is usable.
    ///
    /// # Errors
    ///
    /// Returns `InvalidStyle` for a non-positive line width, an alpha
    /// outside `[0, 1]`, or a non-positive korf/post diameter.
    pub fn validate(&self) -> Result<()> {
        if !(self.linewidth > 0.0 && self.linewidth.is_finite()) {
            return Err(invalid(format!("linewidth must be positive, got {}", self.linewidth)));
        }
        for (name, alpha) in [
            ("line_alpha", self.line_alpha),
            ("korf_alpha", self.korf_alpha),
            ("post_alpha", self.post_alpha),
        ] {
            if !(0.0..=1.0).contains(&alpha) {
                return Err(invalid(format!("{name} must be within [0, 1], got {alpha}")));
            }
        }
        for (name, diameter) in [
            ("korf_diameter", self.korf_diameter),
            ("post_diameter", self.post_diameter),
        ] {
            if let Some(d) = diameter {
                if !(d > 0.0 && d.is_finite()) {
                    return Err(invalid(format!("{name} must be positive, got {d}")));
                }
            }
        }
        Ok(())
    }

    /// Outline stroke for lines, circles and arcs.
    #[must_use]
    pub fn markings(&self) -> LineStyle {
        LineStyle {
            color: self.line_color.clone(),
            alpha: self.line_alpha,
            linewidth: self.linewidth,
            linestyle: self.linestyle.clone(),
            zorder: self.line_zorder,
            fill: false,
        }
    }

    /// Filled dots for the centre and penalty spots.
    #[must_use]
    pub fn spots(&self) -> LineStyle {
        LineStyle {
            linestyle: None,
            fill: true,
            ..self.markings()
        }
    }

    #[must_use]
    pub fn posts(&self) -> LineStyle {
        LineStyle {
            color: self.post_color.clone(),
            alpha: self.post_alpha,
            linewidth: self.linewidth,
            linestyle: self.post_linestyle.clone(),
            zorder: self.line_zorder,
            fill: false,
        }
    }

    #[must_use]
    pub fn korfs(&self) -> LineStyle {
        LineStyle {
            color: self.korf_color.clone(),
            alpha: self.korf_alpha,
            linewidth: self.linewidth,
            linestyle: self.korf_linestyle.clone(),
            zorder: self.line_zorder,
            fill: true,
        }
    }
}

fn invalid(message: String) -> crate::error::KorfError {
    GeometryError::InvalidStyle(message).into()
}

/// Resolved drawing properties of one primitive, as passed to a backend.
#[derive(Debug, Clone, PartialEq)]
pub struct LineStyle {
    pub color: String,
    pub alpha: f64,
    pub linewidth: f64,
    pub linestyle: Option<String>,
    pub zorder: f64,
    /// Whether the shape is filled rather than outlined.
    pub fill: bool,
}
