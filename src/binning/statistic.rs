use std::f64::consts::TAU;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use crate::error::BinningError;

/// User-supplied reduction over the values that fall in one bin.
pub type Reducer = Arc<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// The aggregate computed per bin.
///
/// The named statistics other than `Count` skip NaN values. `Count`
/// counts points regardless of their values.
#[derive(Clone, Default)]
pub enum Statistic {
    #[default]
    Count,
    Mean,
    /// Population standard deviation.
    Std,
    Median,
    Sum,
    Min,
    Max,
    /// Circular mean of angles in radians, in `[0, 2π)`.
    CircMean,
    /// A custom reduction. Receives every value in the bin, NaN included,
    /// and an empty slice for an empty bin.
    Custom(Reducer),
}

impl Statistic {
    /// Wraps a closure as a custom statistic.
    pub fn custom<F>(f: F) -> Self
    where
        F: Fn(&[f64]) -> f64 + Send + Sync + 'static,
    {
        Self::Custom(Arc::new(f))
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Count => "count",
            Self::Mean => "mean",
            Self::Std => "std",
            Self::Median => "median",
            Self::Sum => "sum",
            Self::Min => "min",
            Self::Max => "max",
            Self::CircMean => "circmean",
            Self::Custom(_) => "custom",
        }
    }

    #[must_use]
    pub fn is_count(&self) -> bool {
        matches!(self, Self::Count)
    }

    /// Reduces the values of one bin.
    ///
    /// Empty bins give 0 for `Count` and `Sum` and NaN for the other named
    /// statistics. A custom reducer is called with an empty slice.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn reduce(&self, values: &[f64]) -> f64 {
        match self {
            Self::Count => values.len() as f64,
            Self::Sum => values.iter().filter(|v| !v.is_nan()).sum(),
            Self::Custom(f) => f(values),
            Self::Mean => nan_aware(values, |v| mean(v)),
            Self::Std => nan_aware(values, |v| std_dev(v)),
            Self::Median => nan_aware(values, median),
            Self::Min => nan_aware(values, |v| v.iter().copied().fold(f64::INFINITY, f64::min)),
            Self::Max => nan_aware(values, |v| {
                v.iter().copied().fold(f64::NEG_INFINITY, f64::max)
            }),
            Self::CircMean => nan_aware(values, |v| circular_mean(v)),
        }
    }
}

/// Drops NaN values and reduces the rest; NaN when nothing is left.
fn nan_aware(values: &[f64], reduce: impl FnOnce(&mut [f64]) -> f64) -> f64 {
    let mut kept: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if kept.is_empty() {
        f64::NAN
    } else {
        reduce(&mut kept)
    }
}

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

#[allow(clippy::cast_precision_loss)]
fn std_dev(values: &[f64]) -> f64 {
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

fn median(values: &mut [f64]) -> f64 {
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        0.5 * (values[mid - 1] + values[mid])
    } else {
        values[mid]
    }
}

fn circular_mean(angles: &[f64]) -> f64 {
    let (sin_sum, cos_sum) = angles
        .iter()
        .fold((0.0, 0.0), |(s, c), a| (s + a.sin(), c + a.cos()));
    let res = sin_sum.atan2(cos_sum);
    if res < 0.0 {
        res + TAU
    } else {
        res
    }
}

impl fmt::Debug for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Statistic {
    type Err = BinningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "count" => Self::Count,
            "mean" => Self::Mean,
            "std" => Self::Std,
            "median" => Self::Median,
            "sum" => Self::Sum,
            "min" => Self::Min,
            "max" => Self::Max,
            "circmean" => Self::CircMean,
            _ => {
                return Err(BinningError::InvalidConfiguration(format!(
                    "unknown statistic {s:?}"
                )))
            }
        })
    }
}
