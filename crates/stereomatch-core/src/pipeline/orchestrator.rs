use std::sync::Arc;

use tracing::info;

use crate::error::Result;
use crate::frame::{Rect, StereoPair};
use crate::io::image_io::{load_image, save_image};
use crate::io::overlay::save_match_overlay;
use crate::io::report::{save_report, MatchReport};
use crate::io::roi_file::load_rois;
use crate::search::match_regions_with_progress;
use crate::stitch::{compose, estimate_shift_with_width, Mosaic};

use super::config::{MatchConfig, PipelineConfig, StitchConfig, Task};
use super::types::{NoOpReporter, PipelineOutput, PipelineStage, ProgressReporter};

/// Run the configured task with a thread-safe progress reporter.
pub fn run_pipeline_reported(
    config: &PipelineConfig,
    reporter: Arc<dyn ProgressReporter>,
) -> Result<PipelineOutput> {
    reporter.begin_stage(PipelineStage::Loading, Some(2));
    let left = load_image(&config.left)?;
    reporter.advance(1);
    let right = load_image(&config.right)?;
    reporter.advance(2);
    reporter.finish_stage();

    let pair = StereoPair::new(left, right);
    info!(
        left = %config.left.display(),
        right = %config.right.display(),
        left_size = ?(pair.left.width(), pair.left.height()),
        right_size = ?(pair.right.width(), pair.right.height()),
        task = %config.task,
        "Stereo pair loaded"
    );

    match &config.task {
        Task::Match(match_config) => run_matching(&pair, match_config, reporter.as_ref()),
        Task::Stitch(stitch_config) => run_stitching(&pair, stitch_config, reporter.as_ref()),
    }
}

/// Run the configured task.
pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineOutput> {
    run_pipeline_reported(config, Arc::new(NoOpReporter))
}

/// Inline ROIs followed by those from `rois_file`, if any.
pub fn collect_rois(config: &MatchConfig) -> Result<Vec<Rect>> {
    let mut rois = config.rois.clone();
    if let Some(ref path) = config.rois_file {
        rois.extend(load_rois(path)?.rois);
    }
    Ok(rois)
}

fn run_matching(
    pair: &StereoPair,
    config: &MatchConfig,
    reporter: &dyn ProgressReporter,
) -> Result<PipelineOutput> {
    let rois = collect_rois(config)?;

    reporter.begin_stage(PipelineStage::Matching, Some(rois.len()));
    let matches =
        match_regions_with_progress(&pair.left, &pair.right, &rois, config.bounds, |done| {
            reporter.advance(done)
        });
    reporter.finish_stage();

    info!(
        total = matches.len(),
        matched = matches.matched().count(),
        failed = matches.failed().count(),
        "Matching complete"
    );

    if config.overlay.is_some() || config.report.is_some() {
        reporter.begin_stage(PipelineStage::Writing, None);
        if let Some(ref path) = config.overlay {
            save_match_overlay(pair, &matches, path)?;
            info!(output = %path.display(), "Overlay saved");
        }
        if let Some(ref path) = config.report {
            save_report(&MatchReport::from(&matches), path)?;
            info!(output = %path.display(), "Report saved");
        }
        reporter.finish_stage();
    }

    Ok(PipelineOutput::Matches(matches))
}

fn run_stitching(
    pair: &StereoPair,
    config: &StitchConfig,
    reporter: &dyn ProgressReporter,
) -> Result<PipelineOutput> {
    let search_width = config
        .search_width
        .unwrap_or_else(|| pair.right.width().div_ceil(2));

    reporter.begin_stage(PipelineStage::Estimating, None);
    let displacement = estimate_shift_with_width(&pair.left, &pair.right, search_width)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Compositing, None);
    let frame = compose(&pair.left, &pair.right, displacement.dx)?;
    reporter.finish_stage();

    reporter.begin_stage(PipelineStage::Writing, None);
    save_image(&frame, &config.output)?;
    reporter.finish_stage();
    info!(
        output = %config.output.display(),
        width = frame.width(),
        dx = displacement.dx,
        "Mosaic saved"
    );

    Ok(PipelineOutput::Mosaic(Mosaic {
        frame,
        displacement,
    }))
}
