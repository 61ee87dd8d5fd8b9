//! Orientation-aware drawing.
//!
//! Pitch geometry is always derived in horizontal coordinates (x along the
//! length). A [`PitchRenderer`] decides how those primitives reach the
//! plotting [`Backend`]: [`Horizontal`] passes them through unchanged,
//! [`Vertical`] reflects every primitive about the diagonal first.

mod style;

pub use style::{LineStyle, PitchStyle, DEFAULT_POST_DIAMETER, KORF_RING_WIDTH};

use nalgebra::DMatrix;

use crate::binning::BinnedStatistic;
use crate::geometry::{Annulus, Arc, Ellipse, Polyline, Transpose};

/// The plotting collaborator that actually puts shapes on a canvas.
///
/// Coordinates arrive in final display orientation.
pub trait Backend {
    fn draw_polyline(&mut self, xs: &[f64], ys: &[f64], style: &LineStyle);

    /// `width` and `height` are full diameters.
    fn draw_ellipse(&mut self, cx: f64, cy: f64, width: f64, height: f64, style: &LineStyle);

    fn draw_annulus(
        &mut self,
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        ring_width: f64,
        style: &LineStyle,
    );

    /// Counter-clockwise arc from `theta1` to `theta2`, in degrees.
    #[allow(clippy::too_many_arguments)]
    fn draw_arc(
        &mut self,
        cx: f64,
        cy: f64,
        width: f64,
        height: f64,
        theta1: f64,
        theta2: f64,
        style: &LineStyle,
    );

    /// Quad mesh with corners at `(x_grid, y_grid)` coloured by `values`.
    fn draw_mesh(&mut self, x_grid: &DMatrix<f64>, y_grid: &DMatrix<f64>, values: &DMatrix<f64>);
}

/// Renders horizontal pitch primitives in one orientation.
pub trait PitchRenderer {
    /// Maps a horizontal coordinate pair into this orientation.
    fn reverse_if_vertical(&self, x: f64, y: f64) -> (f64, f64);

    fn render_line(&mut self, line: &Polyline, style: &LineStyle);

    fn render_ellipse(&mut self, ellipse: &Ellipse, style: &LineStyle);

    fn render_annulus(&mut self, annulus: &Annulus, style: &LineStyle);

    fn render_arc(&mut self, arc: &Arc, style: &LineStyle);

    /// Draws the bins of a binned statistic as a mesh.
    fn render_heatmap(&mut self, binned: &BinnedStatistic);
}

fn line_to<B: Backend>(backend: &mut B, line: &Polyline, style: &LineStyle) {
    backend.draw_polyline(&line.xs(), &line.ys(), style);
}

fn ellipse_to<B: Backend>(backend: &mut B, ellipse: &Ellipse, style: &LineStyle) {
    let c = ellipse.center();
    backend.draw_ellipse(c.x, c.y, ellipse.width(), ellipse.height(), style);
}

fn annulus_to<B: Backend>(backend: &mut B, annulus: &Annulus, style: &LineStyle) {
    let outer = annulus.outer();
    let c = outer.center();
    backend.draw_annulus(
        c.x,
        c.y,
        outer.width(),
        outer.height(),
        annulus.ring_width(),
        style,
    );
}

fn arc_to<B: Backend>(backend: &mut B, arc: &Arc, style: &LineStyle) {
    let e = arc.ellipse();
    let c = e.center();
    backend.draw_arc(
        c.x,
        c.y,
        e.width(),
        e.height(),
        arc.theta1(),
        arc.theta2(),
        style,
    );
}

/// Pitch drawn with its length along x.
#[derive(Debug, Default)]
pub struct Horizontal<B> {
    backend: B,
}

impl<B: Backend> Horizontal<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<B: Backend> PitchRenderer for Horizontal<B> {
    fn reverse_if_vertical(&self, x: f64, y: f64) -> (f64, f64) {
        (x, y)
    }

    fn render_line(&mut self, line: &Polyline, style: &LineStyle) {
        line_to(&mut self.backend, line, style);
    }

    fn render_ellipse(&mut self, ellipse: &Ellipse, style: &LineStyle) {
        ellipse_to(&mut self.backend, ellipse, style);
    }

    fn render_annulus(&mut self, annulus: &Annulus, style: &LineStyle) {
        annulus_to(&mut self.backend, annulus, style);
    }

    fn render_arc(&mut self, arc: &Arc, style: &LineStyle) {
        arc_to(&mut self.backend, arc, style);
    }

    fn render_heatmap(&mut self, binned: &BinnedStatistic) {
        self.backend
            .draw_mesh(&binned.x_grid, &binned.y_grid, &binned.statistic);
    }
}

/// Pitch drawn with its length along y.
#[derive(Debug, Default)]
pub struct Vertical<B> {
    backend: B,
}

impl<B: Backend> Vertical<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}

impl<B: Backend> PitchRenderer for Vertical<B> {
    fn reverse_if_vertical(&self, x: f64, y: f64) -> (f64, f64) {
        (y, x)
    }

    fn render_line(&mut self, line: &Polyline, style: &LineStyle) {
        line_to(&mut self.backend, &line.transposed(), style);
    }

    fn render_ellipse(&mut self, ellipse: &Ellipse, style: &LineStyle) {
        ellipse_to(&mut self.backend, &ellipse.transposed(), style);
    }

    fn render_annulus(&mut self, annulus: &Annulus, style: &LineStyle) {
        annulus_to(&mut self.backend, &annulus.transposed(), style);
    }

    fn render_arc(&mut self, arc: &Arc, style: &LineStyle) {
        arc_to(&mut self.backend, &arc.transposed(), style);
    }

    fn render_heatmap(&mut self, binned: &BinnedStatistic) {
        self.backend
            .draw_mesh(&binned.y_grid, &binned.x_grid, &binned.statistic);
    }
}
