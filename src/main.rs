// src/main.rs
//! Track Circle - check whether a GPS track closes into a circle

use anyhow::Context;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use track_circle::{config::AnalysisConfig, export, report, Track};

#[derive(Debug, Clone, Copy, PartialEq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "track-circle", version, about = "Detect circular GPS tracks and fit their circle")]
struct Args {
    /// JSON file with the track points ([{"lat": .., "lon": ..}, ...])
    input: PathBuf,

    /// Start/end closure distance in km, also the fractional offset of the tolerance rings
    #[arg(short, long)]
    tolerance: Option<f64>,

    /// Maximum radius deviation, as a fraction of the mean radius, for a circular track
    #[arg(short = 'r', long)]
    radius_variance_threshold: Option<f64>,

    /// Config file to read defaults from (default: ~/.config/track-circle/config.json)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format for the analysis result
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write the track, fitted circle and tolerance rings as GeoJSON
    #[arg(long)]
    geojson: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn load_config(args: &Args) -> anyhow::Result<AnalysisConfig> {
    let mut config = match &args.config {
        Some(path) => AnalysisConfig::load_from(path)?,
        None => AnalysisConfig::load()?,
    };

    if let Some(tolerance) = args.tolerance {
        config.tolerance = tolerance;
    }
    if let Some(threshold) = args.radius_variance_threshold {
        config.radius_variance_threshold = threshold;
    }

    config.validate()?;
    Ok(config)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&args)?;
    tracing::info!(
        tolerance = config.tolerance,
        radius_variance_threshold = config.radius_variance_threshold,
        "Using analysis config"
    );

    let track = Track::from_json_file(&args.input)
        .with_context(|| format!("Failed to load track from {}", args.input.display()))?;

    let outcome = track.analyze(&config);

    match args.format {
        OutputFormat::Text => print!("{}", report::summary(&outcome)),
        OutputFormat::Json => println!("{}", report::to_json(&outcome)?),
    }

    if let Some(path) = &args.geojson {
        match &outcome {
            Ok(analysis) => export::write_geojson(path, track.points(), analysis)
                .with_context(|| format!("Failed to write GeoJSON to {}", path.display()))?,
            Err(e) => tracing::warn!("Skipping GeoJSON export: {}", e),
        }
    }

    Ok(())
}
