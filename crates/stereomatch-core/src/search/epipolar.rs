//! Epipolar block search.
//!
//! In a rectified pair a point's correspondence lies on the same row of the
//! other view, so the search slides the query along that row only and keeps
//! the candidate with the lowest sum of squared differences.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::consts::PARALLEL_CANDIDATE_THRESHOLD;
use crate::error::{Result, StereoError};
use crate::frame::{Frame, Rect};
use crate::region::{extract_region, BoundsPolicy, Region};
use crate::ssd::score_regions;

/// Best-scoring candidate of a correspondence search.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    /// Matched area in the target frame.
    pub region: Rect,
    /// SSD against the query; 0.0 is a pixel-identical match.
    pub score: f64,
    /// Candidate origin along the row.
    pub offset: usize,
}

/// Scan candidate origins `0..search_width` on `row` of `target` and return
/// the lowest-SSD block with the query's size.
///
/// Candidates clipped by the image edge no longer match the query's shape and
/// are skipped, as are NaN scores. On equal scores the earliest offset wins.
/// `Ok(None)` means no candidate was comparable.
pub fn best_match(
    query: &Region,
    target: &Frame,
    row: usize,
    search_width: usize,
) -> Result<Option<MatchResult>> {
    if row >= target.height() {
        return Err(StereoError::OutOfBounds {
            rect: Rect::new(0, row, query.width(), query.height()),
            image_width: target.width(),
            image_height: target.height(),
        });
    }

    let limit = search_width.min(target.width());
    let work = limit * query.width() * query.height();

    let (best, skipped) = if work >= PARALLEL_CANDIDATE_THRESHOLD {
        let scored: Vec<Result<Option<MatchResult>>> = (0..limit)
            .into_par_iter()
            .map(|x| score_candidate(query, target, x, row))
            .collect();
        select_best(scored)?
    } else {
        select_best((0..limit).map(|x| score_candidate(query, target, x, row)))?
    };

    debug!(
        row,
        candidates = limit,
        skipped,
        best_offset = best.as_ref().map(|m| m.offset),
        "Epipolar scan complete"
    );

    Ok(best)
}

fn score_candidate(
    query: &Region,
    target: &Frame,
    x: usize,
    row: usize,
) -> Result<Option<MatchResult>> {
    let rect = Rect::new(x, row, query.width(), query.height());
    let candidate = extract_region(target, rect, BoundsPolicy::Clip)?;

    match score_regions(query, &candidate) {
        Ok(score) if score.is_nan() => Ok(None),
        Ok(score) => Ok(Some(MatchResult {
            region: candidate.rect,
            score,
            offset: x,
        })),
        Err(StereoError::SizeMismatch { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Fold scored candidates in scan order. Returns the best match and the
/// number of skipped candidates.
fn select_best<I>(scored: I) -> Result<(Option<MatchResult>, usize)>
where
    I: IntoIterator<Item = Result<Option<MatchResult>>>,
{
    let mut best: Option<MatchResult> = None;
    let mut skipped = 0usize;

    for candidate in scored {
        match candidate? {
            Some(c) => {
                let better = match &best {
                    None => true,
                    Some(b) => c.score < b.score,
                };
                if better {
                    best = Some(c);
                }
            }
            None => skipped += 1,
        }
    }

    Ok((best, skipped))
}
