use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use indicatif::{ProgressBar, ProgressStyle};
use stereomatch_core::io::image_io::load_pair;
use stereomatch_core::io::overlay::save_match_overlay;
use stereomatch_core::io::report::{save_report, MatchReport};
use stereomatch_core::io::roi_file::{load_rois, parse_roi};
use stereomatch_core::region::BoundsPolicy;
use stereomatch_core::search::match_regions_with_progress;
use tracing::debug;

#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// Clip ROIs to the image (default)
    Clip,
    /// Reject ROIs that cross the image edge
    Reject,
}

impl From<PolicyArg> for BoundsPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::Clip => BoundsPolicy::Clip,
            PolicyArg::Reject => BoundsPolicy::Reject,
        }
    }
}

#[derive(Args)]
pub struct MatchArgs {
    /// Left view image
    pub left: PathBuf,
    /// Right view image (rectified against the left)
    pub right: PathBuf,

    /// ROI on the left view as x,y,width,height (repeatable)
    #[arg(long = "roi", value_name = "X,Y,W,H")]
    pub rois: Vec<String>,

    /// TOML file with a [[rois]] list
    #[arg(long)]
    pub rois_file: Option<PathBuf>,

    /// Handling of ROIs that cross the left view's edge
    #[arg(long, value_enum, default_value = "clip")]
    pub policy: PolicyArg,

    /// Write a side-by-side PNG with selections and matches outlined
    #[arg(long)]
    pub overlay: Option<PathBuf>,

    /// Write a TOML report of every ROI's outcome
    #[arg(long)]
    pub report: Option<PathBuf>,
}

pub fn run(args: &MatchArgs) -> Result<()> {
    let mut rois = args
        .rois
        .iter()
        .map(|s| parse_roi(s))
        .collect::<std::result::Result<Vec<_>, _>>()?;
    if let Some(ref path) = args.rois_file {
        let list = load_rois(path)
            .with_context(|| format!("Failed to read ROIs from {}", path.display()))?;
        rois.extend(list.rois);
    }
    debug!(count = rois.len(), "ROIs collected");

    let pair = load_pair(&args.left, &args.right).context("Failed to load stereo pair")?;
    println!(
        "Matching {} ROI(s): left {}x{}, right {}x{}",
        rois.len(),
        pair.left.width(),
        pair.left.height(),
        pair.right.width(),
        pair.right.height()
    );

    let pb = ProgressBar::new(rois.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("Matching [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );

    let matches = match_regions_with_progress(
        &pair.left,
        &pair.right,
        &rois,
        args.policy.into(),
        |done| pb.set_position(done as u64),
    );
    pb.finish_and_clear();

    crate::summary::print_match_table(&matches);

    if let Some(ref path) = args.overlay {
        save_match_overlay(&pair, &matches, path)
            .with_context(|| format!("Failed to write overlay {}", path.display()))?;
        println!("Overlay saved to {}", path.display());
    }
    if let Some(ref path) = args.report {
        save_report(&MatchReport::from(&matches), path)
            .with_context(|| format!("Failed to write report {}", path.display()))?;
        println!("Report saved to {}", path.display());
    }

    Ok(())
}
