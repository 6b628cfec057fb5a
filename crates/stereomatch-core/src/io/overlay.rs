use std::path::Path;

use image::{ImageFormat, Rgb, RgbImage};
use ndarray::{s, Array2};

use crate::consts::{MATCH_COLOR, SELECTION_COLOR};
use crate::error::Result;
use crate::frame::{Frame, Rect, StereoPair};
use crate::search::MatchSet;

/// Outline style of an annotation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OverlayStyle {
    /// A user-selected ROI on the left view.
    Selection,
    /// The matched block on the right view.
    Match,
}

impl OverlayStyle {
    pub fn color(&self) -> [u8; 3] {
        match self {
            Self::Selection => SELECTION_COLOR,
            Self::Match => MATCH_COLOR,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Annotation {
    pub rect: Rect,
    pub style: OverlayStyle,
}

/// Render `frame` as RGB with a one-pixel outline per annotation.
/// Outlines are clipped to the image.
pub fn render_overlay(frame: &Frame, annotations: &[Annotation]) -> RgbImage {
    let (w, h) = (frame.width(), frame.height());
    let mut img = RgbImage::new(w as u32, h as u32);
    for ((row, col), &v) in frame.data.indexed_iter() {
        let g = (v.clamp(0.0, 1.0) * 255.0) as u8;
        img.put_pixel(col as u32, row as u32, Rgb([g, g, g]));
    }

    for annotation in annotations {
        draw_outline(&mut img, annotation.rect, annotation.style.color());
    }
    img
}

/// Place both views side by side and outline every ROI on the left view and
/// every successful match on the right view.
///
/// Views of different height are top-aligned; the shorter one is padded
/// with black.
pub fn render_match_overlay(pair: &StereoPair, matches: &MatchSet) -> RgbImage {
    let (lw, rw) = (pair.left.width(), pair.right.width());
    let height = pair.left.height().max(pair.right.height());

    let mut data = Array2::<f32>::zeros((height, lw + rw));
    data.slice_mut(s![..pair.left.height(), ..lw]).assign(&pair.left.data);
    data.slice_mut(s![..pair.right.height(), lw..]).assign(&pair.right.data);
    let canvas = Frame::new(data, 8);

    render_overlay(&canvas, &match_annotations(matches, lw))
}

/// Annotations for a match set; match rectangles are shifted right by
/// `right_offset` columns.
pub fn match_annotations(matches: &MatchSet, right_offset: usize) -> Vec<Annotation> {
    let mut annotations = Vec::with_capacity(matches.len() * 2);
    for entry in matches.iter() {
        annotations.push(Annotation {
            rect: entry.roi,
            style: OverlayStyle::Selection,
        });
        if let Ok(m) = &entry.outcome {
            annotations.push(Annotation {
                rect: Rect {
                    x: m.region.x + right_offset,
                    ..m.region
                },
                style: OverlayStyle::Match,
            });
        }
    }
    annotations
}

/// Save the side-by-side match overlay as PNG.
pub fn save_match_overlay(pair: &StereoPair, matches: &MatchSet, path: &Path) -> Result<()> {
    render_match_overlay(pair, matches).save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

fn draw_outline(img: &mut RgbImage, rect: Rect, color: [u8; 3]) {
    let Some(r) = rect.intersect(img.width() as usize, img.height() as usize) else {
        return;
    };
    let px = Rgb(color);
    let (x0, y0) = (r.x as u32, r.y as u32);
    let (x1, y1) = (r.right() as u32 - 1, r.bottom() as u32 - 1);

    for x in x0..=x1 {
        img.put_pixel(x, y0, px);
        img.put_pixel(x, y1, px);
    }
    for y in y0..=y1 {
        img.put_pixel(x0, y, px);
        img.put_pixel(x1, y, px);
    }
}
