use std::path::Path;

use image::{DynamicImage, GrayImage, ImageBuffer, ImageFormat, Luma};
use ndarray::Array2;
use tracing::debug;

use crate::error::{Result, StereoError};
use crate::frame::{Frame, StereoPair};

/// Save a frame as 16-bit grayscale TIFF.
pub fn save_tiff(frame: &Frame, path: &Path) -> Result<()> {
    let (w, h) = (frame.width() as u32, frame.height() as u32);
    let pixels: Vec<u16> = frame
        .data
        .iter()
        .map(|&v| (v.clamp(0.0, 1.0) * 65535.0) as u16)
        .collect();

    let img = ImageBuffer::<Luma<u16>, Vec<u16>>::from_raw(w, h, pixels).ok_or(
        StereoError::InvalidDimensions {
            width: frame.width(),
            height: frame.height(),
        },
    )?;
    img.save_with_format(path, ImageFormat::Tiff)?;
    Ok(())
}

/// Save a frame as 8-bit grayscale PNG.
pub fn save_png(frame: &Frame, path: &Path) -> Result<()> {
    let mut img = GrayImage::new(frame.width() as u32, frame.height() as u32);
    for ((row, col), &v) in frame.data.indexed_iter() {
        let val = (v.clamp(0.0, 1.0) * 255.0) as u8;
        img.put_pixel(col as u32, row as u32, Luma([val]));
    }

    img.save_with_format(path, ImageFormat::Png)?;
    Ok(())
}

/// Save frame, choosing format from file extension.
pub fn save_image(frame: &Frame, path: &Path) -> Result<()> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("tiff" | "tif") => save_tiff(frame, path),
        Some("png") => save_png(frame, path),
        _ => save_tiff(frame, path),
    }
}

/// Load an image file as a grayscale Frame with values in [0.0, 1.0].
///
/// Color images are reduced to luminance.
pub fn load_image(path: &Path) -> Result<Frame> {
    let img = image::open(path)?;
    let bit_depth = source_bit_depth(&img);
    let gray = img.to_luma16();
    let (w, h) = gray.dimensions();

    let mut data = Array2::<f32>::zeros((h as usize, w as usize));
    for (col, row, pixel) in gray.enumerate_pixels() {
        data[[row as usize, col as usize]] = pixel.0[0] as f32 / 65535.0;
    }

    debug!(path = %path.display(), width = w, height = h, bit_depth, "Image loaded");
    Ok(Frame::new(data, bit_depth))
}

/// Load the left and right views of a rectified pair.
pub fn load_pair(left: &Path, right: &Path) -> Result<StereoPair> {
    Ok(StereoPair::new(load_image(left)?, load_image(right)?))
}

fn source_bit_depth(img: &DynamicImage) -> u8 {
    let color = img.color();
    (color.bits_per_pixel() / color.channel_count() as u16) as u8
}
