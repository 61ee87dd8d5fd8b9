pub mod binning;
pub mod dimensions;
pub mod error;
pub mod geometry;
pub mod math;
pub mod pitch;
pub mod render;
pub mod standardize;

pub use binning::{BinStatistic, BinnedStatistic, Bins, Statistic};
pub use dimensions::{create_pitch_dims, PitchConfig, PitchDims, PitchType};
pub use error::{KorfError, Result};
pub use pitch::Pitch;
pub use render::{Backend, Horizontal, PitchRenderer, PitchStyle, Vertical};
pub use standardize::Standardizer;
