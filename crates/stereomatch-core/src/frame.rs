use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// A single grayscale image.
/// Pixel values are f32, normally in [0.0, 1.0] after loading.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Pixel data, row-major, shape = (height, width)
    pub data: Array2<f32>,
    /// Original bit depth before conversion (8 or 16)
    pub original_bit_depth: u8,
}

impl Frame {
    pub fn new(data: Array2<f32>, bit_depth: u8) -> Self {
        Self {
            data,
            original_bit_depth: bit_depth,
        }
    }

    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Full-image rectangle.
    pub fn bounds(&self) -> Rect {
        Rect::new(0, 0, self.width(), self.height())
    }
}

/// A rectangle in image coordinates. `x`/`y` are the top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: usize,
    pub y: usize,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(x: usize, y: usize, width: usize, height: usize) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge, saturating at `usize::MAX`.
    pub fn right(&self) -> usize {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge, saturating at `usize::MAX`.
    pub fn bottom(&self) -> usize {
        self.y.saturating_add(self.height)
    }

    pub fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// True if the rectangle lies entirely inside a `width`x`height` image.
    pub fn fits_within(&self, width: usize, height: usize) -> bool {
        self.right() <= width && self.bottom() <= height
    }

    /// Overlap with a `width`x`height` image, or `None` if there is none.
    pub fn intersect(&self, width: usize, height: usize) -> Option<Rect> {
        if self.x >= width || self.y >= height {
            return None;
        }
        let clipped = Rect {
            x: self.x,
            y: self.y,
            width: self.right().min(width) - self.x,
            height: self.bottom().min(height) - self.y,
        };
        if clipped.is_empty() {
            None
        } else {
            Some(clipped)
        }
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{} {}x{})", self.x, self.y, self.width, self.height)
    }
}

/// Rectified left/right views of the same scene.
#[derive(Clone, Debug)]
pub struct StereoPair {
    pub left: Frame,
    pub right: Frame,
}

impl StereoPair {
    pub fn new(left: Frame, right: Frame) -> Self {
        Self { left, right }
    }

    /// Rectified views must share their row count.
    pub fn same_height(&self) -> bool {
        self.left.height() == self.right.height()
    }
}
