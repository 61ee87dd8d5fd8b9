use crate::error::{BinningError, Result};

/// Bin specification for one axis.
#[derive(Debug, Clone, PartialEq)]
pub enum BinAxis {
    /// Number of equal-width bins spanning the binning range.
    Count(usize),
    /// Explicit, strictly increasing bin edges. The binning range is ignored.
    Edges(Vec<f64>),
}

/// Two-dimensional bin specification.
///
/// Mirrors the usual 2D histogram conventions: a single count for both
/// axes, a count per axis, one edge array for both axes, or an edge array
/// per axis (counts and edges can also be mixed per axis).
#[derive(Debug, Clone, PartialEq)]
pub struct Bins {
    pub x: BinAxis,
    pub y: BinAxis,
}

impl Bins {
    /// `n` bins along both axes.
    #[must_use]
    pub fn count(n: usize) -> Self {
        Self::per_axis(n, n)
    }

    /// `nx` bins along the length and `ny` across the width.
    #[must_use]
    pub fn per_axis(nx: usize, ny: usize) -> Self {
        Self {
            x: BinAxis::Count(nx),
            y: BinAxis::Count(ny),
        }
    }

    /// The same explicit edges on both axes.
    #[must_use]
    pub fn edges(edges: Vec<f64>) -> Self {
        Self {
            x: BinAxis::Edges(edges.clone()),
            y: BinAxis::Edges(edges),
        }
    }

    /// Explicit edges per axis.
    #[must_use]
    pub fn edges_per_axis(x_edges: Vec<f64>, y_edges: Vec<f64>) -> Self {
        Self {
            x: BinAxis::Edges(x_edges),
            y: BinAxis::Edges(y_edges),
        }
    }
}

impl Default for Bins {
    fn default() -> Self {
        Self::per_axis(5, 4)
    }
}

impl From<usize> for Bins {
    fn from(n: usize) -> Self {
        Self::count(n)
    }
}

impl From<(usize, usize)> for Bins {
    fn from((nx, ny): (usize, usize)) -> Self {
        Self::per_axis(nx, ny)
    }
}

impl From<(Vec<f64>, Vec<f64>)> for Bins {
    fn from((x_edges, y_edges): (Vec<f64>, Vec<f64>)) -> Self {
        Self::edges_per_axis(x_edges, y_edges)
    }
}

/// Edges of one axis plus the precision used for the last-edge test.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AxisEdges {
    pub edges: Vec<f64>,
    decimals: i32,
}

impl AxisEdges {
    /// Resolves an axis specification over `[lo, hi]`.
    pub fn new(axis: &BinAxis, lo: f64, hi: f64, name: &str) -> Result<Self> {
        let edges = match axis {
            BinAxis::Count(0) => {
                return Err(BinningError::InvalidBins(format!(
                    "{name} bin count must be at least 1"
                ))
                .into())
            }
            BinAxis::Count(n) => n
                .checked_add(1)
                .and_then(|num| linspace(lo, hi, num))
                .ok_or_else(|| {
                    BinningError::InvalidBins(format!("{name} bin count {n} is too large"))
                })?,
            BinAxis::Edges(edges) => edges.clone(),
        };

        if edges.len() < 2 {
            return Err(
                BinningError::InvalidBins(format!("{name} needs at least two edges")).into(),
            );
        }
        if edges.iter().any(|e| !e.is_finite()) {
            return Err(
                BinningError::InvalidBins(format!("{name} edges must be finite")).into(),
            );
        }

        let min_gap = edges
            .windows(2)
            .map(|w| w[1] - w[0])
            .fold(f64::INFINITY, f64::min);
        if min_gap <= 0.0 {
            return Err(BinningError::InvalidBins(format!(
                "{name} edges must be strictly increasing"
            ))
            .into());
        }

        // Truncation toward zero, as an integer cast of the log does.
        #[allow(clippy::cast_possible_truncation)]
        let decimals = (-min_gap.log10()) as i32 + 6;

        Ok(Self { edges, decimals })
    }

    /// Number of bins on this axis.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edges.len() - 1
    }

    /// Expanded 1-based bin index of `v`.
    ///
    /// `0` is below the first edge, `len() + 1` is at or above the last
    /// edge (and NaN). A value equal to the last edge, at the edge
    /// precision, belongs to the last bin.
    #[must_use]
    pub fn locate(&self, v: f64) -> usize {
        if v.is_nan() {
            return self.len() + 1;
        }
        let idx = self.edges.partition_point(|&e| e <= v);
        let last = self.edges[self.edges.len() - 1];
        if v >= last && round_to(v, self.decimals) == round_to(last, self.decimals) {
            idx - 1
        } else {
            idx
        }
    }

    /// Midpoint of every bin.
    #[must_use]
    pub fn centers(&self) -> Vec<f64> {
        self.edges
            .windows(2)
            .map(|w| w[0] + 0.5 * (w[1] - w[0]))
            .collect()
    }
}

/// `num` evenly spaced values from `start` to `stop` inclusive, or `None`
/// if that many values cannot be allocated.
#[allow(clippy::cast_precision_loss)]
fn linspace(start: f64, stop: f64, num: usize) -> Option<Vec<f64>> {
    let div = (num - 1) as f64;
    let step = (stop - start) / div;
    let mut values = Vec::new();
    values.try_reserve_exact(num).ok()?;
    values.extend((0..num).map(|i| start + i as f64 * step));
    if let Some(last) = values.last_mut() {
        *last = stop;
    }
    Some(values)
}

fn round_to(v: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (v * scale).round() / scale
}
