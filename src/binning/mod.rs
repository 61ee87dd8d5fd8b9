//! Two-dimensional binned statistics over pitch coordinates.
//!
//! Points are binned over the pitch extent (or the standardized
//! 105 x 68 space), reduced per bin, and returned in display order:
//! row 0 of every grid is the top of the pitch.

mod bins;
mod statistic;

pub use bins::{BinAxis, Bins};
pub use statistic::{Reducer, Statistic};

use nalgebra::{DMatrix, Matrix2xX};

use crate::dimensions::PitchDims;
use crate::error::{BinningError, Result};

use bins::AxisEdges;

/// Length of the standardized coordinate space.
pub const STANDARDIZED_LENGTH: f64 = 105.0;

/// Width of the standardized coordinate space.
pub const STANDARDIZED_WIDTH: f64 = 68.0;

/// Result of a [`BinStatistic`] computation.
#[derive(Debug, Clone)]
pub struct BinnedStatistic {
    /// Aggregated value per bin, `ny` rows by `nx` columns, row 0 at the top.
    pub statistic: DMatrix<f64>,
    /// Bin edge x-coordinates, `(ny + 1) x (nx + 1)`.
    pub x_grid: DMatrix<f64>,
    /// Bin edge y-coordinates, `(ny + 1) x (nx + 1)`.
    pub y_grid: DMatrix<f64>,
    /// Bin center x-coordinates, `ny x nx`.
    pub cx: DMatrix<f64>,
    /// Bin center y-coordinates, `ny x nx`.
    pub cy: DMatrix<f64>,
    /// Zero-based `(x-bin, y-bin)` of every point, one column per point.
    /// The y-bin counts from the top. `-1` marks an axis the point falls
    /// outside of.
    pub binnumber: Matrix2xX<isize>,
    /// Whether each point falls inside the bin range on both axes.
    pub inside: Vec<bool>,
}

impl BinnedStatistic {
    /// Number of bins along x (columns of `statistic`).
    #[must_use]
    pub fn nx(&self) -> usize {
        self.statistic.ncols()
    }

    /// Number of bins along y (rows of `statistic`).
    #[must_use]
    pub fn ny(&self) -> usize {
        self.statistic.nrows()
    }
}

/// Computes a binned statistic over point data.
///
/// ```ignore
/// let stats = BinStatistic::new(&x, &y)
///     .dims(&dims)
///     .statistic(Statistic::Mean)
///     .values(&xg)
///     .bins(Bins::per_axis(6, 5))
///     .execute()?;
/// ```
#[derive(Debug, Clone)]
pub struct BinStatistic<'a> {
    x: &'a [f64],
    y: &'a [f64],
    values: Option<&'a [f64]>,
    dims: Option<&'a PitchDims>,
    statistic: Statistic,
    bins: Bins,
    normalize: bool,
    standardized: bool,
}

struct BinRange {
    x: (f64, f64),
    y: (f64, f64),
    /// `(top, bottom)` when y must be reflected before binning.
    reflect: Option<(f64, f64)>,
}

impl<'a> BinStatistic<'a> {
    /// Creates a new `BinStatistic` computation with the defaults:
    /// `count`, 5 x 4 bins, no normalization, pitch coordinates.
    #[must_use]
    pub fn new(x: &'a [f64], y: &'a [f64]) -> Self {
        Self {
            x,
            y,
            values: None,
            dims: None,
            statistic: Statistic::Count,
            bins: Bins::default(),
            normalize: false,
            standardized: false,
        }
    }

    /// Values to reduce. Required unless the statistic is `count`.
    #[must_use]
    pub fn values(mut self, values: &'a [f64]) -> Self {
        self.values = Some(values);
        self
    }

    /// Pitch whose extent sets the binning range.
    #[must_use]
    pub fn dims(mut self, dims: &'a PitchDims) -> Self {
        self.dims = Some(dims);
        self
    }

    #[must_use]
    pub fn statistic(mut self, statistic: Statistic) -> Self {
        self.statistic = statistic;
        self
    }

    #[must_use]
    pub fn bins(mut self, bins: impl Into<Bins>) -> Self {
        self.bins = bins.into();
        self
    }

    /// Divide every cell by the sum of all cells. NaN cells propagate.
    #[must_use]
    pub fn normalize(mut self, normalize: bool) -> Self {
        self.normalize = normalize;
        self
    }

    /// Treat the points as standardized 105 x 68 coordinates.
    #[must_use]
    pub fn standardized(mut self, standardized: bool) -> Self {
        self.standardized = standardized;
        self
    }

    /// Executes the computation.
    ///
    /// # Errors
    ///
    /// Returns `DimensionMismatch` if `x`, `y` (or `values`) differ in
    /// length, `MissingParameter` if `values` is absent for a statistic
    /// other than `count` or no pitch was given for pitch coordinates, and
    /// `InvalidBins` for an unusable bin specification.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(points = self.x.len(), statistic = %self.statistic)
    )]
    pub fn execute(&self) -> Result<BinnedStatistic> {
        let n = self.x.len();
        if self.y.len() != n {
            return Err(BinningError::DimensionMismatch {
                x_len: n,
                y_len: self.y.len(),
            }
            .into());
        }

        let values = match self.values {
            Some(values) if values.len() != n => {
                return Err(BinningError::ValuesMismatch {
                    points: n,
                    values: values.len(),
                }
                .into())
            }
            Some(values) => values,
            None if self.statistic.is_count() => self.x,
            None => {
                return Err(BinningError::MissingParameter(
                    "values on which to calculate the statistic are missing",
                )
                .into())
            }
        };

        let range = self.range()?;
        let x_axis = AxisEdges::new(&self.bins.x, range.x.0, range.x.1, "x")?;
        let y_axis = AxisEdges::new(&self.bins.y, range.y.0, range.y.1, "y")?;
        let (nx, ny) = (x_axis.len(), y_axis.len());

        // Expanded 1-based indices: 0 and n + 1 are the outlier sentinels.
        let ncells = nx.checked_mul(ny).ok_or_else(|| {
            BinningError::InvalidBins(format!("{nx} x {ny} bins is too many"))
        })?;
        let mut cells: Vec<Vec<f64>> = vec![Vec::new(); ncells];
        let mut x_bins = Vec::with_capacity(n);
        let mut y_bins = Vec::with_capacity(n);
        for i in 0..n {
            let y = match range.reflect {
                Some((top, bottom)) => top + bottom - self.y[i],
                None => self.y[i],
            };
            let bx = x_axis.locate(self.x[i]);
            let by = y_axis.locate(y);
            if (1..=nx).contains(&bx) && (1..=ny).contains(&by) {
                cells[(bx - 1) * ny + (by - 1)].push(values[i]);
            }
            x_bins.push(bx);
            y_bins.push(by);
        }

        // Row 0 is the highest y-bin.
        let mut statistic =
            DMatrix::from_fn(ny, nx, |r, c| self.statistic.reduce(&cells[c * ny + (ny - 1 - r)]));
        if self.normalize {
            let total = statistic.sum();
            statistic /= total;
        }

        let binnumber = Matrix2xX::from_fn(n, |axis, i| {
            if axis == 0 {
                zero_based(x_bins[i], nx)
            } else {
                // Flip the row index to match the statistic grid.
                zero_based(ny + 1 - y_bins[i], ny)
            }
        });
        let inside: Vec<bool> = binnumber
            .column_iter()
            .map(|col| col[0] != -1 && col[1] != -1)
            .collect();

        let invert_y = self.dims.is_some_and(PitchDims::invert_y);
        let flip_y = !invert_y || self.standardized;

        let xe = &x_axis.edges;
        let ye = &y_axis.edges;
        let xc = x_axis.centers();
        let yc = y_axis.centers();
        let x_grid = DMatrix::from_fn(ny + 1, nx + 1, |_, c| xe[c]);
        let y_grid = DMatrix::from_fn(ny + 1, nx + 1, |r, _| if flip_y { ye[ny - r] } else { ye[r] });
        let cx = DMatrix::from_fn(ny, nx, |_, c| xc[c]);
        let cy = DMatrix::from_fn(ny, nx, |r, _| if flip_y { yc[ny - 1 - r] } else { yc[r] });

        let outside = n - inside_count(&inside);
        tracing::debug!(nx, ny, outside, "binned points");

        Ok(BinnedStatistic {
            statistic,
            x_grid,
            y_grid,
            cx,
            cy,
            binnumber,
            inside,
        })
    }

    fn range(&self) -> Result<BinRange> {
        if self.standardized {
            return Ok(BinRange {
                x: (0.0, STANDARDIZED_LENGTH),
                y: (0.0, STANDARDIZED_WIDTH),
                reflect: None,
            });
        }
        let dims = self.dims.ok_or(BinningError::MissingParameter(
            "pitch dimensions are required unless the points are standardized",
        ))?;
        let x = (dims.left(), dims.right());
        if dims.invert_y() {
            Ok(BinRange {
                x,
                y: (dims.top(), dims.bottom()),
                reflect: Some((dims.top(), dims.bottom())),
            })
        } else {
            Ok(BinRange {
                x,
                y: (dims.bottom(), dims.top()),
                reflect: None,
            })
        }
    }
}

/// Maps an expanded 1-based index to zero-based, with both sentinels as -1.
fn zero_based(expanded: usize, nbins: usize) -> isize {
    if expanded == 0 || expanded == nbins + 1 {
        -1
    } else {
        isize::try_from(expanded - 1).unwrap_or(-1)
    }
}

fn inside_count(inside: &[bool]) -> usize {
    inside.iter().filter(|&&b| b).count()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dimensions::{create_pitch_dims, PitchConfig, PitchType};
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn fullsize() -> PitchDims {
        create_pitch_dims("fullsize", None, None, None).unwrap()
    }

    #[test]
    fn one_point_per_quadrant() {
        let dims = fullsize();
        let x = [10.0, 30.0, 10.0, 30.0];
        let y = [5.0, 5.0, 15.0, 15.0];
        let stats = BinStatistic::new(&x, &y)
            .dims(&dims)
            .bins(Bins::per_axis(2, 2))
            .execute()
            .unwrap();

        assert_eq!(stats.statistic, DMatrix::from_element(2, 2, 1.0));
        assert_eq!(stats.inside, vec![true; 4]);

        let cols: Vec<(isize, isize)> = stats
            .binnumber
            .column_iter()
            .map(|c| (c[0], c[1]))
            .collect();
        // y-bins count from the top: y = 5 is the bottom row.
        assert_eq!(cols, vec![(0, 1), (1, 1), (0, 0), (1, 0)]);
    }

    #[test]
    fn every_point_is_accounted_for() {
        let dims = fullsize();
        let x = [-1.0, 0.0, 3.3, 12.0, 19.9, 25.0, 39.0, 40.0, 41.0, 20.0, f64::NAN];
        let y = [5.0, 0.0, 19.0, 20.0, 8.0, -2.0, 11.0, 20.0, 3.0, 25.0, 1.0];
        let stats = BinStatistic::new(&x, &y).dims(&dims).execute().unwrap();

        let outside = stats.inside.iter().filter(|b| !**b).count();
        assert_relative_eq!(stats.statistic.sum() + outside as f64, x.len() as f64);
        assert_eq!(stats.binnumber.ncols(), x.len());
        assert_eq!(stats.inside.len(), x.len());
        assert_eq!(outside, 5);
    }

    #[test]
    fn right_and_top_edges_fall_in_last_bins() {
        let dims = fullsize();
        let x = [40.0];
        let y = [20.0];
        let stats = BinStatistic::new(&x, &y)
            .dims(&dims)
            .bins(Bins::per_axis(4, 2))
            .execute()
            .unwrap();
        assert!(stats.inside[0]);
        assert_eq!(stats.binnumber[(0, 0)], 3);
        // Top edge is row 0 from the top.
        assert_eq!(stats.binnumber[(1, 0)], 0);
        assert_abs_diff_eq!(stats.statistic[(0, 3)], 1.0);
    }

    #[test]
    fn outside_points_get_minus_one_per_axis() {
        let dims = fullsize();
        let x = [-5.0, 10.0, 50.0];
        let y = [10.0, -3.0, 30.0];
        let stats = BinStatistic::new(&x, &y).dims(&dims).execute().unwrap();
        assert_eq!(stats.binnumber[(0, 0)], -1);
        assert!(stats.binnumber[(1, 0)] >= 0);
        assert!(stats.binnumber[(0, 1)] >= 0);
        assert_eq!(stats.binnumber[(1, 1)], -1);
        assert_eq!(stats.binnumber[(0, 2)], -1);
        assert_eq!(stats.binnumber[(1, 2)], -1);
        assert_eq!(stats.inside, vec![false, false, false]);
        assert_abs_diff_eq!(stats.statistic.sum(), 0.0);
    }

    #[test]
    fn normalized_counts_sum_to_one() {
        let dims = fullsize();
        let x: Vec<f64> = (0..40).map(|i| f64::from(i) + 0.5).collect();
        let y: Vec<f64> = (0..40).map(|i| f64::from(i % 20) + 0.25).collect();
        let stats = BinStatistic::new(&x, &y)
            .dims(&dims)
            .normalize(true)
            .execute()
            .unwrap();
        assert_relative_eq!(stats.statistic.sum(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn normalize_propagates_nan() {
        let dims = fullsize();
        let x = [1.0, 39.0];
        let y = [1.0, 19.0];
        let values = [f64::NAN, 2.0];
        let stats = BinStatistic::new(&x, &y)
            .dims(&dims)
            .values(&values)
            .statistic(Statistic::Mean)
            .normalize(true)
            .execute()
            .unwrap();
        // Empty bins are NaN for mean, so the total is NaN too.
        assert!(stats.statistic.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn mean_per_bin() {
        let dims = fullsize();
        let x = [5.0, 6.0, 35.0];
        let y = [5.0, 6.0, 15.0];
        let values = [1.0, 3.0, 10.0];
        let stats = BinStatistic::new(&x, &y)
            .dims(&dims)
            .values(&values)
            .statistic(Statistic::Mean)
            .bins(Bins::per_axis(2, 2))
            .execute()
            .unwrap();
        assert_abs_diff_eq!(stats.statistic[(1, 0)], 2.0);
        assert_abs_diff_eq!(stats.statistic[(0, 1)], 10.0);
        assert!(stats.statistic[(0, 0)].is_nan());
        assert!(stats.statistic[(1, 1)].is_nan());
    }

    #[test]
    fn grids_have_edge_and_center_shapes() {
        let dims = fullsize();
        let stats = BinStatistic::new(&[1.0], &[1.0]).dims(&dims).execute().unwrap();
        assert_eq!(stats.statistic.shape(), (4, 5));
        assert_eq!(stats.x_grid.shape(), (5, 6));
        assert_eq!(stats.y_grid.shape(), (5, 6));
        assert_eq!(stats.cx.shape(), (4, 5));
        assert_eq!(stats.cy.shape(), (4, 5));
        assert_eq!((stats.nx(), stats.ny()), (5, 4));

        assert_abs_diff_eq!(stats.x_grid[(0, 0)], 0.0);
        assert_abs_diff_eq!(stats.x_grid[(3, 5)], 40.0);
        // Not inverted: the first grid row is the top edge.
        assert_abs_diff_eq!(stats.y_grid[(0, 2)], 20.0);
        assert_abs_diff_eq!(stats.y_grid[(4, 2)], 0.0);
        assert_abs_diff_eq!(stats.cx[(0, 0)], 4.0);
        assert_abs_diff_eq!(stats.cy[(0, 0)], 17.5);
        assert_abs_diff_eq!(stats.cy[(3, 0)], 2.5);
    }

    #[test]
    fn inverted_pitch_keeps_top_first() {
        let dims = PitchConfig {
            invert_y: true,
            ..PitchConfig::sized(PitchType::Custom, 20.0, 40.0)
        }
        .build()
        .unwrap();
        // y = 2 is near the top of an inverted pitch.
        let x = [5.0];
        let y = [2.0];
        let stats = BinStatistic::new(&x, &y)
            .dims(&dims)
            .bins(Bins::per_axis(2, 2))
            .execute()
            .unwrap();
        assert_eq!(stats.binnumber[(1, 0)], 0);
        assert_abs_diff_eq!(stats.statistic[(0, 0)], 1.0);
        // Grids are not flipped for inverted pitches: row 0 is y = 0 (top).
        assert_abs_diff_eq!(stats.y_grid[(0, 0)], 0.0);
        assert_abs_diff_eq!(stats.cy[(0, 0)], 5.0);
    }

    #[test]
    fn inverted_centered_pitch_reflects_within_range() {
        let dims = PitchConfig {
            invert_y: true,
            ..PitchConfig::sized(PitchType::Centered, 20.0, 40.0)
        }
        .build()
        .unwrap();
        let x = [-15.0, 15.0];
        let y = [-8.0, 8.0];
        let stats = BinStatistic::new(&x, &y)
            .dims(&dims)
            .bins(Bins::per_axis(2, 2))
            .execute()
            .unwrap();
        assert_eq!(stats.inside, vec![true, true]);
        // y = -8 is near the top of an inverted pitch.
        assert_eq!(stats.binnumber[(1, 0)], 0);
        assert_eq!(stats.binnumber[(1, 1)], 1);
    }

    #[test]
    fn standardized_uses_canonical_range() {
        let x = [0.0, 104.0, 52.5];
        let y = [0.0, 67.0, 34.0];
        let stats = BinStatistic::new(&x, &y)
            .standardized(true)
            .bins(Bins::per_axis(3, 2))
            .execute()
            .unwrap();
        assert_abs_diff_eq!(stats.x_grid[(0, 3)], 105.0);
        assert_abs_diff_eq!(stats.y_grid[(0, 0)], 68.0);
        assert_abs_diff_eq!(stats.statistic.sum(), 3.0);
        assert_eq!(stats.binnumber[(0, 0)], 0);
        assert_eq!(stats.binnumber[(1, 0)], 1);
    }

    #[test]
    fn standardized_grids_flip_even_on_an_inverted_pitch() {
        let dims = PitchConfig {
            invert_y: true,
            ..PitchConfig::sized(PitchType::Custom, 20.0, 40.0)
        }
        .build()
        .unwrap();
        let x = [10.0];
        let y = [10.0];
        let stats = BinStatistic::new(&x, &y)
            .dims(&dims)
            .standardized(true)
            .bins(Bins::per_axis(2, 2))
            .execute()
            .unwrap();
        assert_abs_diff_eq!(stats.y_grid[(0, 0)], 68.0);
        assert_abs_diff_eq!(stats.y_grid[(2, 0)], 0.0);
        assert_abs_diff_eq!(stats.cy[(0, 0)], 51.0);
        assert_abs_diff_eq!(stats.cy[(1, 0)], 17.0);
        // Standardized points are never reflected: y = 10 is the lower row.
        assert_eq!(stats.binnumber[(1, 0)], 1);
        assert_abs_diff_eq!(stats.statistic[(1, 0)], 1.0);
    }

    #[test]
    fn custom_statistic_fills_empty_bins_before_normalizing() {
        let dims = fullsize();
        let x = [10.0];
        let y = [5.0];
        let values = [3.0];
        for statistic in [
            Statistic::custom(|v| v.iter().sum()),
            Statistic::custom(|v| v.len() as f64),
        ] {
            let stats = BinStatistic::new(&x, &y)
                .dims(&dims)
                .values(&values)
                .statistic(statistic)
                .bins(Bins::per_axis(2, 2))
                .normalize(true)
                .execute()
                .unwrap();
            assert_eq!(stats.statistic, DMatrix::from_row_slice(2, 2, &[0.0, 0.0, 1.0, 0.0]));
        }
    }

    #[test]
    fn explicit_edges() {
        let dims = fullsize();
        let x = [1.0, 2.0, 25.0];
        let y = [1.0, 19.0, 10.0];
        let stats = BinStatistic::new(&x, &y)
            .dims(&dims)
            .bins((vec![0.0, 10.0, 40.0], vec![0.0, 20.0]))
            .execute()
            .unwrap();
        assert_eq!(stats.statistic.shape(), (1, 2));
        assert_abs_diff_eq!(stats.statistic[(0, 0)], 2.0);
        assert_abs_diff_eq!(stats.statistic[(0, 1)], 1.0);
    }

    #[test]
    fn mismatched_lengths() {
        let dims = fullsize();
        let x = [1.0; 5];
        let y = [1.0; 4];
        let err = BinStatistic::new(&x, &y).dims(&dims).execute().unwrap_err();
        assert!(err.is_dimension_mismatch(), "{err}");

        let values = [1.0; 3];
        let err = BinStatistic::new(&y, &y)
            .dims(&dims)
            .values(&values)
            .execute()
            .unwrap_err();
        assert!(err.is_dimension_mismatch(), "{err}");
    }

    #[test]
    fn values_required_for_named_statistics() {
        let dims = fullsize();
        let x = [1.0];
        let err = BinStatistic::new(&x, &x)
            .dims(&dims)
            .statistic(Statistic::Sum)
            .execute()
            .unwrap_err();
        assert!(err.is_missing_parameter(), "{err}");
    }

    #[test]
    fn pitch_required_unless_standardized() {
        let x = [1.0];
        let err = BinStatistic::new(&x, &x).execute().unwrap_err();
        assert!(err.is_missing_parameter(), "{err}");
    }

    #[test]
    fn zero_bins_rejected() {
        let dims = fullsize();
        let x = [1.0];
        let err = BinStatistic::new(&x, &x)
            .dims(&dims)
            .bins(Bins::per_axis(0, 3))
            .execute()
            .unwrap_err();
        assert!(err.is_invalid_configuration(), "{err}");
    }

    #[test]
    fn zero_based_recoding() {
        assert_eq!(zero_based(0, 4), -1);
        assert_eq!(zero_based(5, 4), -1);
        assert_eq!(zero_based(1, 4), 0);
        assert_eq!(zero_based(4, 4), 3);
    }
}
