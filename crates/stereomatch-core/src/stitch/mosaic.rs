//! Mosaic composition from a horizontally panned pair.
//!
//! The left view is kept whole and the right view contributes only the
//! columns it adds beyond the estimated displacement. No blending.

use ndarray::{s, Array2};
use tracing::info;

use crate::error::{Result, StereoError};
use crate::frame::Frame;

use super::displacement::{estimate_shift_with_width, Displacement};

/// Two views joined along an estimated displacement.
#[derive(Clone, Debug)]
pub struct Mosaic {
    pub frame: Frame,
    pub displacement: Displacement,
}

/// Join `left` and `right` with a hard cut at the left view's right edge.
///
/// The output is `left.width() + right.width() - dx` wide. Columns before
/// `left.width()` come from `left`; column `i` after that comes from
/// `right` column `i + dx - left.width()`. There is no blending across the
/// seam. `dx` must lie in `0..=right.width()`.
pub fn compose(left: &Frame, right: &Frame, dx: i64) -> Result<Frame> {
    if left.height() != right.height() {
        return Err(StereoError::HeightMismatch {
            left: left.height(),
            right: right.height(),
        });
    }

    let rw = right.width();
    let skip = usize::try_from(dx)
        .ok()
        .filter(|&d| d <= rw)
        .ok_or(StereoError::DegenerateDisplacement { dx, right_width: rw })?;

    let lw = left.width();
    let h = left.height();
    let mut data = Array2::<f32>::zeros((h, lw + rw - skip));

    data.slice_mut(s![.., ..lw]).assign(&left.data);
    data.slice_mut(s![.., lw..])
        .assign(&right.data.slice(s![.., skip..]));

    let bit_depth = left.original_bit_depth.max(right.original_bit_depth);
    Ok(Frame::new(data, bit_depth))
}

/// Estimate the displacement between the views and compose the mosaic.
///
/// A failed estimate aborts the stitch.
pub fn stitch(left: &Frame, right: &Frame) -> Result<Mosaic> {
    stitch_with_width(left, right, right.width().div_ceil(2))
}

/// [`stitch`] with an explicit displacement search width.
pub fn stitch_with_width(left: &Frame, right: &Frame, search_width: usize) -> Result<Mosaic> {
    let displacement = estimate_shift_with_width(left, right, search_width)?;
    let frame = compose(left, right, displacement.dx)?;

    info!(
        width = frame.width(),
        height = frame.height(),
        dx = displacement.dx,
        "Mosaic composed"
    );

    Ok(Mosaic {
        frame,
        displacement,
    })
}
