use serde::{Deserialize, Serialize};
use tracing::info;

use crate::consts::{FEATURE_SIZE, FEATURE_X_FRACTION, FEATURE_Y_FRACTION};
use crate::error::{Result, StereoError};
use crate::frame::{Frame, Rect};
use crate::region::{extract_region, BoundsPolicy};
use crate::search::best_match;

/// Horizontal shift between two views, measured with a single feature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Displacement {
    /// `feature.x - matched_x`. Positive when the scene moved left in the
    /// right view, i.e. the camera panned right.
    pub dx: i64,
    /// SSD of the feature against its match.
    pub score: f64,
    /// Feature window in the left view.
    pub feature: Rect,
    /// Column of the match in the right view.
    pub matched_x: usize,
}

/// The fixed feature window for a `width`x`height` left view.
///
/// A `FEATURE_SIZE` square whose origin is
/// `(floor(0.75 * width) - 1, floor(0.5 * height) - 1)`.
pub fn feature_window(width: usize, height: usize) -> Result<Rect> {
    let invalid = || StereoError::InvalidDimensions { width, height };

    let x = ((FEATURE_X_FRACTION * width as f64).floor() as usize)
        .checked_sub(1)
        .ok_or_else(invalid)?;
    let y = ((FEATURE_Y_FRACTION * height as f64).floor() as usize)
        .checked_sub(1)
        .ok_or_else(invalid)?;

    let rect = Rect::new(x, y, FEATURE_SIZE, FEATURE_SIZE);
    if !rect.fits_within(width, height) {
        return Err(invalid());
    }
    Ok(rect)
}

/// Estimate the horizontal shift from `left` to `right`, searching only the
/// left half (`ceil(width / 2)` columns) of `right`.
///
/// Assumes a horizontal pan with modest overlap. A single feature is used,
/// so texture-less content around the feature gives unreliable results.
pub fn estimate_shift(left: &Frame, right: &Frame) -> Result<Displacement> {
    estimate_shift_with_width(left, right, right.width().div_ceil(2))
}

/// Estimate the shift scanning candidate origins `0..search_width` of `right`.
pub fn estimate_shift_with_width(
    left: &Frame,
    right: &Frame,
    search_width: usize,
) -> Result<Displacement> {
    if left.height() != right.height() {
        return Err(StereoError::HeightMismatch {
            left: left.height(),
            right: right.height(),
        });
    }

    let window = feature_window(left.width(), left.height())?;
    let feature = extract_region(left, window, BoundsPolicy::Reject)?;

    let matched = best_match(&feature, right, window.y, search_width)?
        .ok_or(StereoError::NoComparableCandidate { row: window.y })?;

    let dx = window.x as i64 - matched.offset as i64;
    info!(
        feature = %window,
        matched_x = matched.offset,
        dx,
        score = matched.score,
        "Displacement estimated"
    );

    Ok(Displacement {
        dx,
        score: matched.score,
        feature: window,
        matched_x: matched.offset,
    })
}
