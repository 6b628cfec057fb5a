#![allow(dead_code)]

use ndarray::Array2;

use stereomatch_core::frame::{Frame, Rect};

/// Build a frame of `width`x`height` from a per-pixel function `f(row, col)`.
pub fn frame_from_fn(width: usize, height: usize, f: impl Fn(usize, usize) -> f32) -> Frame {
    Frame::new(Array2::from_shape_fn((height, width), |(r, c)| f(r, c)), 16)
}

/// Deterministic texture in [0, 1) with no repeated 1-pixel-wide columns
/// along a row for widths below 1009.
pub fn texture(row: usize, col: usize) -> f32 {
    ((col * 7919 + row * 104_729) % 1009) as f32 / 1009.0
}

pub fn textured(width: usize, height: usize) -> Frame {
    frame_from_fn(width, height, texture)
}

/// The view a camera sees after panning right by `dx` columns: scene column
/// `c + dx` of `textured` lands at column `c`.
pub fn panned(width: usize, height: usize, dx: usize) -> Frame {
    frame_from_fn(width, height, |r, c| texture(r, c + dx))
}

/// All-zero frame with `rect` filled with `value`.
pub fn block_frame(width: usize, height: usize, rect: Rect, value: f32) -> Frame {
    frame_from_fn(width, height, |r, c| {
        if c >= rect.x && c < rect.right() && r >= rect.y && r < rect.bottom() {
            value
        } else {
            0.0
        }
    })
}
