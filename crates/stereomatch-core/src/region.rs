use ndarray::{s, Array2, ArrayView2};
use serde::{Deserialize, Serialize};

use crate::error::{Result, StereoError};
use crate::frame::{Frame, Rect};

/// How extraction treats a rectangle that extends past the image edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BoundsPolicy {
    /// Return the overlap with the image, which may be smaller than requested.
    #[default]
    Clip,
    /// Fail with `OutOfBounds` unless the whole rectangle fits.
    Reject,
}

impl std::fmt::Display for BoundsPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Clip => write!(f, "Clip"),
            Self::Reject => write!(f, "Reject"),
        }
    }
}

/// A rectangular block of pixels copied out of a frame.
///
/// `rect` is the area actually extracted, which under [`BoundsPolicy::Clip`]
/// can be smaller than what was requested.
#[derive(Clone, Debug, PartialEq)]
pub struct Region {
    pub rect: Rect,
    pub data: Array2<f32>,
}

impl Region {
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    pub fn view(&self) -> ArrayView2<'_, f32> {
        self.data.view()
    }

    pub fn same_shape(&self, other: &Region) -> bool {
        self.data.dim() == other.data.dim()
    }
}

/// Copy the pixels under `rect` out of `frame`.
///
/// Zero-area requests fail with `InvalidDimensions`. A request with no overlap
/// at all fails with `OutOfBounds` under either policy.
pub fn extract_region(frame: &Frame, rect: Rect, policy: BoundsPolicy) -> Result<Region> {
    if rect.is_empty() {
        return Err(StereoError::InvalidDimensions {
            width: rect.width,
            height: rect.height,
        });
    }

    let (w, h) = (frame.width(), frame.height());
    let out_of_bounds = || StereoError::OutOfBounds {
        rect,
        image_width: w,
        image_height: h,
    };

    let area = match policy {
        BoundsPolicy::Reject if !rect.fits_within(w, h) => return Err(out_of_bounds()),
        BoundsPolicy::Reject => rect,
        BoundsPolicy::Clip => rect.intersect(w, h).ok_or_else(out_of_bounds)?,
    };

    let data = frame
        .data
        .slice(s![area.y..area.bottom(), area.x..area.right()])
        .to_owned();

    Ok(Region { rect: area, data })
}
