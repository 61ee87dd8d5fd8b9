use thiserror::Error;

/// Top-level error type for korfpitch.
#[derive(Debug, Error)]
pub enum KorfError {
    #[error(transparent)]
    Dimension(#[from] DimensionError),

    #[error(transparent)]
    Binning(#[from] BinningError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),
}

impl KorfError {
    /// Returns `true` for an unrecognized pitch type, a non-positive
    /// physical dimension, or an otherwise unusable configuration value.
    #[must_use]
    pub fn is_invalid_configuration(&self) -> bool {
        matches!(
            self,
            Self::Dimension(DimensionError::InvalidConfiguration(_))
                | Self::Binning(BinningError::InvalidConfiguration(_) | BinningError::InvalidBins(_))
                | Self::Geometry(GeometryError::InvalidStyle(_))
        )
    }

    /// Returns `true` when a required input was not supplied.
    #[must_use]
    pub fn is_missing_parameter(&self) -> bool {
        matches!(
            self,
            Self::Dimension(DimensionError::MissingParameter(_))
                | Self::Binning(BinningError::MissingParameter(_))
        )
    }

    /// Returns `true` when paired point arrays differ in length.
    #[must_use]
    pub fn is_dimension_mismatch(&self) -> bool {
        matches!(
            self,
            Self::Binning(
                BinningError::DimensionMismatch { .. } | BinningError::ValuesMismatch { .. }
            )
        )
    }
}

/// Errors raised while building pitch dimensions.
#[derive(Debug, Error)]
pub enum DimensionError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("missing parameter: {0} must be specified")]
    MissingParameter(&'static str),
}

/// Errors raised while binning point data.
#[derive(Debug, Error)]
pub enum BinningError {
    #[error("x and y must be the same size (x has {x_len} values, y has {y_len})")]
    DimensionMismatch { x_len: usize, y_len: usize },

    #[error("values must match the number of points ({points} points, {values} values)")]
    ValuesMismatch { points: usize, values: usize },

    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    #[error("invalid bins: {0}")]
    InvalidBins(String),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Errors related to drawing primitives.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate geometry: {0}")]
    Degenerate(String),

    #[error("invalid style: {0}")]
    InvalidStyle(String),
}

/// Convenience type alias for results using [`KorfError`].
pub type Result<T> = std::result::Result<T, KorfError>;
