use crate::dimensions::PitchDims;
use crate::error::Result;
use crate::math::Point2;
use crate::render::{LineStyle, PitchRenderer, PitchStyle, DEFAULT_POST_DIAMETER, KORF_RING_WIDTH};

use super::{Annulus, Arc, Ellipse, Polyline};

/// Every marking of a pitch as drawing primitives, in horizontal
/// coordinates, together with the styles they are drawn with.
#[derive(Debug, Clone, PartialEq)]
pub struct PitchGeometry {
    /// Outline plus the halfway line, as one stroke.
    pub boundary: Polyline,
    /// Left top, left bottom, right top, right bottom.
    pub penalty_lines: [Polyline; 4],
    pub freepass_circles: [Ellipse; 2],
    /// Arcs behind the posts; `None` when the pitch has no arc angle.
    pub post_arcs: Option<[Arc; 2]>,
    /// Centre spot then the left and right penalty spots.
    pub spots: Option<[Ellipse; 3]>,
    pub posts: [Ellipse; 2],
    pub korfs: [Annulus; 2],
    markings_style: LineStyle,
    spot_style: LineStyle,
    post_style: LineStyle,
    korf_style: LineStyle,
}

impl PitchGeometry {
    /// Derives every primitive from the pitch dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the style is invalid or a configured diameter
    /// gives a degenerate shape (a korf narrower than its ring, say).
    pub fn new(dims: &PitchDims, style: &PitchStyle) -> Result<Self> {
        style.validate()?;

        let cw = dims.center_width();
        let cl = dims.center_length();
        let (top, bottom) = (dims.top(), dims.bottom());
        let (left, right) = (dims.left(), dims.right());

        let boundary = Polyline::new(vec![
            Point2::new(cl, bottom),
            Point2::new(cl, top),
            Point2::new(right, top),
            Point2::new(right, bottom),
            Point2::new(left, bottom),
            Point2::new(left, top),
            Point2::new(cl, top),
        ])?;

        let (pa_top, pa_bottom) = (dims.penalty_area_top(), dims.penalty_area_bottom());
        let penalty_lines = [
            Polyline::segment(
                Point2::new(dims.post_left(), pa_top),
                Point2::new(dims.penalty_left(), pa_top),
            ),
            Polyline::segment(
                Point2::new(dims.post_left(), pa_bottom),
                Point2::new(dims.penalty_left(), pa_bottom),
            ),
            Polyline::segment(
                Point2::new(dims.penalty_right(), pa_top),
                Point2::new(dims.post_right(), pa_top),
            ),
            Polyline::segment(
                Point2::new(dims.penalty_right(), pa_bottom),
                Point2::new(dims.post_right(), pa_bottom),
            ),
        ];

        let d_length = 2.0 * dims.twofifty_length();
        let d_width = 2.0 * dims.twofifty_width();
        let freepass_circles = [
            Ellipse::new(Point2::new(dims.penalty_left(), cw), d_length, d_width)?,
            Ellipse::new(Point2::new(dims.penalty_right(), cw), d_length, d_width)?,
        ];

        let post_arcs = match dims.arc() {
            Some(arc) => Some([
                Arc::new(Point2::new(dims.post_left(), cw), d_length, d_width, arc, -arc)?,
                Arc::new(
                    Point2::new(dims.post_right(), cw),
                    d_length,
                    d_width,
                    180.0 + arc,
                    180.0 - arc,
                )?,
            ]),
            None => None,
        };

        let spots = if style.spot_scale > 0.0 {
            let d = style.spot_scale * dims.length() * 2.0;
            Some([
                Ellipse::circle(Point2::new(cl, cw), d)?,
                Ellipse::circle(Point2::new(dims.penalty_left(), cw), d)?,
                Ellipse::circle(Point2::new(dims.penalty_right(), cw), d)?,
            ])
        } else {
            None
        };

        let post_d = style.post_diameter.unwrap_or(DEFAULT_POST_DIAMETER);
        let posts = [
            Ellipse::circle(Point2::new(dims.post_left(), cw), post_d)?,
            Ellipse::circle(Point2::new(dims.post_right(), cw), post_d)?,
        ];

        let korf_d = style.korf_diameter.unwrap_or_else(|| dims.korf_length());
        let korfs = [
            Annulus::new(Point2::new(dims.korf_left(), cw), korf_d, korf_d, KORF_RING_WIDTH)?,
            Annulus::new(Point2::new(dims.korf_right(), cw), korf_d, korf_d, KORF_RING_WIDTH)?,
        ];

        Ok(Self {
            boundary,
            penalty_lines,
            freepass_circles,
            post_arcs,
            spots,
            posts,
            korfs,
            markings_style: style.markings(),
            spot_style: style.spots(),
            post_style: style.posts(),
            korf_style: style.korfs(),
        })
    }

    /// Sends every primitive to `renderer`: markings first, then the posts
    /// and korfs on top.
    pub fn draw<R: PitchRenderer>(&self, renderer: &mut R) {
        renderer.render_line(&self.boundary, &self.markings_style);
        for line in &self.penalty_lines {
            renderer.render_line(line, &self.markings_style);
        }
        for circle in &self.freepass_circles {
            renderer.render_ellipse(circle, &self.markings_style);
        }
        for arc in self.post_arcs.iter().flatten() {
            renderer.render_arc(arc, &self.markings_style);
        }
        for spot in self.spots.iter().flatten() {
            renderer.render_ellipse(spot, &self.spot_style);
        }
        for post in &self.posts {
            renderer.render_ellipse(post, &self.post_style);
        }
        for korf in &self.korfs {
            renderer.render_annulus(korf, &self.korf_style);
        }
    }
}
