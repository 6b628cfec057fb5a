pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::{collect_rois, run_pipeline, run_pipeline_reported};
pub use types::{PipelineOutput, PipelineStage, ProgressReporter};
