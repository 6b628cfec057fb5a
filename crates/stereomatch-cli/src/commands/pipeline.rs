use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use stereomatch_core::pipeline::config::PipelineConfig;
use stereomatch_core::pipeline::{
    run_pipeline_reported, PipelineOutput, PipelineStage, ProgressReporter,
};

#[derive(Args)]
pub struct RunArgs {
    /// Pipeline config file (TOML)
    pub config: PathBuf,
}

/// Drives an indicatif bar from pipeline progress events.
struct BarReporter {
    pb: ProgressBar,
}

impl ProgressReporter for BarReporter {
    fn begin_stage(&self, stage: PipelineStage, total_items: Option<usize>) {
        self.pb.set_message(stage.to_string());
        self.pb.set_length(total_items.unwrap_or(1) as u64);
        self.pb.set_position(0);
    }

    fn advance(&self, items_done: usize) {
        self.pb.set_position(items_done as u64);
    }

    fn finish_stage(&self) {
        if let Some(len) = self.pb.length() {
            self.pb.set_position(len);
        }
    }
}

pub fn run(args: &RunArgs) -> Result<()> {
    let contents = std::fs::read_to_string(&args.config)
        .with_context(|| format!("Failed to read config {}", args.config.display()))?;
    let config: PipelineConfig = toml::from_str(&contents).context("Invalid pipeline config")?;

    crate::summary::print_pipeline_summary(&config);

    let pb = ProgressBar::new(1);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{msg:24} [{bar:40}] {pos}/{len}")?
            .progress_chars("=> "),
    );
    let reporter = Arc::new(BarReporter { pb: pb.clone() });

    let output = run_pipeline_reported(&config, reporter)?;
    pb.finish_with_message("Done");

    match output {
        PipelineOutput::Matches(matches) => crate::summary::print_match_table(&matches),
        PipelineOutput::Mosaic(mosaic) => crate::summary::print_stitch_summary(&mosaic),
    }

    Ok(())
}
