use ndarray::ArrayView2;

use crate::error::{Result, StereoError};
use crate::region::Region;

/// Sum of squared differences between two equally shaped blocks.
///
/// Differences are taken in f32 and accumulated in f64. Blocks of different
/// shape are incomparable and yield `SizeMismatch`, never a score.
pub fn sum_squared_differences(a: ArrayView2<f32>, b: ArrayView2<f32>) -> Result<f64> {
    let (ah, aw) = a.dim();
    let (bh, bw) = b.dim();
    if ah != bh || aw != bw {
        return Err(StereoError::SizeMismatch {
            a_width: aw,
            a_height: ah,
            b_width: bw,
            b_height: bh,
        });
    }

    let mut sum = 0.0f64;
    for (&pa, &pb) in a.iter().zip(b.iter()) {
        let d = (pa - pb) as f64;
        sum += d * d;
    }
    Ok(sum)
}

/// SSD score between two extracted regions.
pub fn score_regions(a: &Region, b: &Region) -> Result<f64> {
    sum_squared_differences(a.view(), b.view())
}
