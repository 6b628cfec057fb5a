use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::frame::Rect;
use crate::region::BoundsPolicy;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub left: PathBuf,
    pub right: PathBuf,
    pub task: Task,
}

/// What to do with the loaded pair.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Task {
    /// Find the best match of each ROI along its row.
    Match(MatchConfig),
    /// Estimate the displacement and build a mosaic.
    Stitch(StitchConfig),
}

impl Default for Task {
    fn default() -> Self {
        Self::Match(MatchConfig::default())
    }
}

impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Match(c) => write!(f, "Match ({} ROI(s), {})", c.rois.len(), c.bounds),
            Self::Stitch(_) => write!(f, "Stitch"),
        }
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct MatchConfig {
    /// ROIs on the left view.
    #[serde(default)]
    pub rois: Vec<Rect>,
    /// Additional ROIs loaded from a TOML ROI list.
    #[serde(default)]
    pub rois_file: Option<PathBuf>,
    /// How ROIs that cross the left view's edge are extracted.
    #[serde(default)]
    pub bounds: BoundsPolicy,
    /// Side-by-side PNG with selections and matches outlined.
    #[serde(default)]
    pub overlay: Option<PathBuf>,
    /// TOML report of every ROI's outcome.
    #[serde(default)]
    pub report: Option<PathBuf>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StitchConfig {
    pub output: PathBuf,
    /// Candidate columns scanned in the right view. Defaults to its left half.
    #[serde(default)]
    pub search_width: Option<usize>,
}

impl Default for StitchConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("mosaic.tiff"),
            search_width: None,
        }
    }
}
