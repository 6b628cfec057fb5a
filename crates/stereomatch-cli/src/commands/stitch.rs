use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use stereomatch_core::io::image_io::{load_pair, save_image};
use stereomatch_core::stitch::{stitch, stitch_with_width};

#[derive(Args)]
pub struct StitchArgs {
    /// Left view image
    pub left: PathBuf,
    /// Right view image (panned rightward from the left)
    pub right: PathBuf,

    /// Candidate columns scanned in the right view (default: its left half)
    #[arg(long)]
    pub search_width: Option<usize>,

    /// Output file path
    #[arg(short, long, default_value = "mosaic.tiff")]
    pub output: PathBuf,
}

pub fn run(args: &StitchArgs) -> Result<()> {
    let pair = load_pair(&args.left, &args.right).context("Failed to load stereo pair")?;

    let mosaic = match args.search_width {
        Some(width) => stitch_with_width(&pair.left, &pair.right, width),
        None => stitch(&pair.left, &pair.right),
    }
    .context("Stitching failed")?;

    crate::summary::print_stitch_summary(&mosaic);

    save_image(&mosaic.frame, &args.output)
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Saved to {}", args.output.display());

    Ok(())
}
