//! A built pitch: shared dimensions plus drawing style.

use std::sync::Arc;

use crate::binning::{BinStatistic, BinnedStatistic};
use crate::dimensions::{PitchConfig, PitchDims};
use crate::error::Result;
use crate::geometry::PitchGeometry;
use crate::render::{PitchRenderer, PitchStyle};
use crate::standardize::Standardizer;

/// A pitch ready for binning and drawing.
///
/// The dimensions are immutable and shared, so clones of a `Pitch` (and any
/// number of concurrent binning calls) read the same model.
#[derive(Debug, Clone)]
pub struct Pitch {
    dims: Arc<PitchDims>,
    style: PitchStyle,
}

impl Pitch {
    /// Builds the dimension model and checks the style.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or the style is invalid.
    pub fn new(config: &PitchConfig, style: PitchStyle) -> Result<Self> {
        style.validate()?;
        let dims = config.build()?;
        Ok(Self {
            dims: Arc::new(dims),
            style,
        })
    }

    /// A default-styled pitch of the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn from_config(config: &PitchConfig) -> Result<Self> {
        Self::new(config, PitchStyle::default())
    }

    /// Shared handle to the dimension model.
    #[must_use]
    pub fn dims(&self) -> Arc<PitchDims> {
        Arc::clone(&self.dims)
    }

    #[must_use]
    pub fn style(&self) -> &PitchStyle {
        &self.style
    }

    /// Starts a binned statistic over this pitch.
    #[must_use]
    pub fn bin_statistic<'a>(&'a self, x: &'a [f64], y: &'a [f64]) -> BinStatistic<'a> {
        BinStatistic::new(x, y).dims(&self.dims)
    }

    /// Every drawing primitive of this pitch.
    ///
    /// # Errors
    ///
    /// Returns an error if a configured diameter gives a degenerate shape.
    pub fn geometry(&self) -> Result<PitchGeometry> {
        PitchGeometry::new(&self.dims, &self.style)
    }

    /// Maps coordinates of this pitch onto `other`.
    #[must_use]
    pub fn standardizer_to(&self, other: &Pitch) -> Standardizer {
        Standardizer::new(&self.dims, &other.dims)
    }

    /// Draws the pitch markings.
    ///
    /// # Errors
    ///
    /// Returns an error if the geometry cannot be derived.
    pub fn draw<R: PitchRenderer>(&self, renderer: &mut R) -> Result<()> {
        self.geometry()?.draw(renderer);
        Ok(())
    }

    /// Draws a binned statistic as a heatmap.
    pub fn heatmap<R: PitchRenderer>(&self, binned: &BinnedStatistic, renderer: &mut R) {
        renderer.render_heatmap(binned);
    }
}
