use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use stereomatch_core::frame::Rect;
use stereomatch_core::pipeline::config::{MatchConfig, PipelineConfig, StitchConfig, Task};

#[derive(Clone, Copy, ValueEnum)]
pub enum TaskArg {
    Match,
    Stitch,
}

#[derive(Args)]
pub struct ConfigArgs {
    /// Task the config should run
    #[arg(long, value_enum, default_value = "match")]
    pub task: TaskArg,

    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a default PipelineConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let task = match args.task {
        TaskArg::Match => Task::Match(MatchConfig {
            rois: vec![Rect::new(10, 10, 9, 9)],
            overlay: Some(PathBuf::from("matches.png")),
            ..Default::default()
        }),
        TaskArg::Stitch => Task::Stitch(StitchConfig::default()),
    };
    let config = PipelineConfig {
        left: PathBuf::from("left.png"),
        right: PathBuf::from("right.png"),
        task,
    };
    let toml_str = toml::to_string_pretty(&config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
