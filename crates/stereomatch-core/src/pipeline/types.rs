use crate::search::MatchSet;
use crate::stitch::Mosaic;

/// Pipeline processing stage, used for progress reporting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PipelineStage {
    Loading,
    Matching,
    Estimating,
    Compositing,
    Writing,
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Loading => write!(f, "Loading images"),
            Self::Matching => write!(f, "Matching regions"),
            Self::Estimating => write!(f, "Estimating displacement"),
            Self::Compositing => write!(f, "Compositing mosaic"),
            Self::Writing => write!(f, "Writing output"),
        }
    }
}

/// Result of the pipeline for the configured task.
#[derive(Debug)]
pub enum PipelineOutput {
    Matches(MatchSet),
    Mosaic(Mosaic),
}

/// Thread-safe progress reporting for the pipeline.
///
/// All methods have default no-op implementations.
pub trait ProgressReporter: Send + Sync {
    /// A new stage has started. `total_items` is the number of work items
    /// in this stage (e.g., ROI count), if known.
    fn begin_stage(&self, _stage: PipelineStage, _total_items: Option<usize>) {}

    /// `items_done` work items of the current stage have completed.
    fn advance(&self, _items_done: usize) {}

    /// The current stage is finished.
    fn finish_stage(&self) {}
}

/// No-op progress reporter, used when `run_pipeline` delegates.
pub(super) struct NoOpReporter;
impl ProgressReporter for NoOpReporter {}
