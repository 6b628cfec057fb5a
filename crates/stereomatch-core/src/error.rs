use thiserror::Error;

use crate::frame::Rect;

#[derive(Error, Debug)]
pub enum StereoError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image format error: {0}")]
    ImageError(#[from] image::ImageError),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    #[error("Region size mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    SizeMismatch {
        a_width: usize,
        a_height: usize,
        b_width: usize,
        b_height: usize,
    },

    #[error("Region {rect} out of bounds for {image_width}x{image_height} image")]
    OutOfBounds {
        rect: Rect,
        image_width: usize,
        image_height: usize,
    },

    #[error("Image heights differ: left {left} vs right {right}")]
    HeightMismatch { left: usize, right: usize },

    #[error("No comparable candidate found along row {row}")]
    NoComparableCandidate { row: usize },

    #[error("Displacement {dx} is outside [0, {right_width}] for mosaic composition")]
    DegenerateDisplacement { dx: i64, right_width: usize },

    #[error("Invalid ROI: {0}")]
    InvalidRoi(String),

    #[error("Invalid ROI file: {0}")]
    RoiFile(#[from] toml::de::Error),

    #[error("Failed to encode ROI list: {0}")]
    RoiEncode(#[from] toml::ser::Error),

    #[error("Pipeline error: {0}")]
    Pipeline(String),
}

pub type Result<T> = std::result::Result<T, StereoError>;
