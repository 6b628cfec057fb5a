mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "stereomatch", about = "Epipolar region matching and mosaic stitching")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show dimensions of a stereo pair
    Info(commands::info::InfoArgs),
    /// Find the best match of left-view ROIs in the right view
    Match(commands::matching::MatchArgs),
    /// Estimate the horizontal shift and stitch a mosaic
    Stitch(commands::stitch::StitchArgs),
    /// Run a task from a config file
    Run(commands::pipeline::RunArgs),
    /// Print a default config as TOML
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Match(args) => commands::matching::run(args),
        Commands::Stitch(args) => commands::stitch::run(args),
        Commands::Run(args) => commands::pipeline::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
