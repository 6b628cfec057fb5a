use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use stereomatch_core::io::image_io::load_pair;
use stereomatch_core::stitch::feature_window;

#[derive(Args)]
pub struct InfoArgs {
    /// Left view image
    pub left: PathBuf,
    /// Right view image (rectified against the left)
    pub right: PathBuf,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let pair = load_pair(&args.left, &args.right).context("Failed to load stereo pair")?;

    println!("Left:        {}", args.left.display());
    println!(
        "             {}x{}, {}-bit",
        pair.left.width(),
        pair.left.height(),
        pair.left.original_bit_depth
    );
    println!("Right:       {}", args.right.display());
    println!(
        "             {}x{}, {}-bit",
        pair.right.width(),
        pair.right.height(),
        pair.right.original_bit_depth
    );

    if pair.same_height() {
        println!("Rows:        aligned ({} rows)", pair.left.height());
    } else {
        println!(
            "Rows:        MISMATCH ({} vs {}), stitching will fail",
            pair.left.height(),
            pair.right.height()
        );
    }

    match feature_window(pair.left.width(), pair.left.height()) {
        Ok(window) => println!("Feature:     {}", window),
        Err(e) => println!("Feature:     unavailable ({})", e),
    }
    println!("Search:      columns 0..{}", pair.right.width().div_ceil(2));

    Ok(())
}
