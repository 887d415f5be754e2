use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

mod config;
use config::OrganizeConfig;

mod dataset;

mod file_ops;

mod label_parser;

mod organizer;
use organizer::DatasetOrganizer;

#[derive(Debug, Parser)]
#[command(
    name = "organize-faces-dataset",
    about = "Organize labeled face images into a stratified train/test tree"
)]
struct Args {
    /// Directory scanned recursively for `<emotion>.jpg` files.
    source_dir: PathBuf,

    /// Directory the organized train/test tree is written under.
    target_dir: PathBuf,

    /// Fraction of images assigned to the train split.
    #[arg(long, default_value_t = config::DEFAULT_TRAIN_RATIO)]
    train_ratio: f64,
}

fn main() -> anyhow::Result<()> {
    // Default log level is "info"; RUST_LOG overrides it.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    info!("Starting face dataset organizer");

    let target_dir = args.target_dir.clone();
    let mut config = OrganizeConfig::new(args.source_dir, args.target_dir);
    config.train_ratio = args.train_ratio;

    let mut organizer = DatasetOrganizer::new(config);
    let summary = organizer
        .run()
        .with_context(|| format!("failed to organize into {}", target_dir.display()))?;

    println!(
        "Preprocessing complete. {} images have been organized in: {}",
        summary.copied,
        target_dir.display()
    );

    Ok(())
}
