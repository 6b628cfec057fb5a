use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use tracing::{info, warn};

use crate::consts::PARALLEL_ROI_THRESHOLD;
use crate::error::{Result, StereoError};
use crate::frame::{Frame, Rect};
use crate::region::{extract_region, BoundsPolicy};

use super::epipolar::{best_match, MatchResult};

/// Outcome of matching one left-image ROI.
#[derive(Debug)]
pub struct RoiMatch {
    /// The ROI as supplied by the caller.
    pub roi: Rect,
    pub outcome: std::result::Result<MatchResult, StereoError>,
}

/// Per-ROI outcomes, in the same order as the input ROIs.
#[derive(Debug, Default)]
pub struct MatchSet {
    pub entries: Vec<RoiMatch>,
}

impl MatchSet {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &RoiMatch> {
        self.entries.iter()
    }

    /// Successful matches with their source ROI.
    pub fn matched(&self) -> impl Iterator<Item = (&Rect, &MatchResult)> {
        self.entries
            .iter()
            .filter_map(|e| e.outcome.as_ref().ok().map(|m| (&e.roi, m)))
    }

    /// Failed ROIs with the reason.
    pub fn failed(&self) -> impl Iterator<Item = (&Rect, &StereoError)> {
        self.entries
            .iter()
            .filter_map(|e| e.outcome.as_ref().err().map(|err| (&e.roi, err)))
    }
}

/// Match every ROI of `left` against the full width of `right` on the ROI's
/// own row.
pub fn match_regions(left: &Frame, right: &Frame, rois: &[Rect], policy: BoundsPolicy) -> MatchSet {
    match_regions_with_progress(left, right, rois, policy, |_| {})
}

/// Same as [`match_regions`], calling `on_progress(rois_done)` after each ROI.
///
/// A failure on one ROI is recorded in its entry and does not stop the others.
pub fn match_regions_with_progress(
    left: &Frame,
    right: &Frame,
    rois: &[Rect],
    policy: BoundsPolicy,
    on_progress: impl Fn(usize) + Send + Sync,
) -> MatchSet {
    info!(rois = rois.len(), policy = %policy, "Matching regions");

    let done = AtomicUsize::new(0);
    let run = |roi: &Rect| {
        let entry = RoiMatch {
            roi: *roi,
            outcome: match_one(left, right, *roi, policy),
        };
        on_progress(done.fetch_add(1, Ordering::Relaxed) + 1);
        entry
    };

    let entries: Vec<RoiMatch> = if rois.len() >= PARALLEL_ROI_THRESHOLD {
        rois.par_iter().map(run).collect()
    } else {
        rois.iter().map(run).collect()
    };

    for entry in &entries {
        match &entry.outcome {
            Ok(m) => info!(
                roi = %entry.roi,
                region = %m.region,
                score = m.score,
                "Match found"
            ),
            Err(e) => warn!(roi = %entry.roi, error = %e, "ROI not matched"),
        }
    }

    MatchSet { entries }
}

fn match_one(left: &Frame, right: &Frame, roi: Rect, policy: BoundsPolicy) -> Result<MatchResult> {
    let query = extract_region(left, roi, policy)?;
    let row = query.rect.y;
    best_match(&query, right, row, right.width())?
        .ok_or(StereoError::NoComparableCandidate { row })
}
