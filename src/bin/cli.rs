//! track-overlap CLI - Debug tool for point grouping and overlap detection
//!
//! Usage:
//!   track-overlap group <file.gpx> [--radius <km>]
//!   track-overlap overlaps <a.gpx> <b.gpx> [--radius <km>] [--epsilon <km>]
//!
//! Reads track points from GPX files and prints the analysis as JSON on stdout.

use clap::{Parser, Subcommand};
use log::info;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use track_overlap::gpx_input::load_track;
use track_overlap::{
    find_track_overlaps, group_points_with_config, GeoPoint, GroupSummary, GroupingConfig,
    OverlapConfig, TrackOverlap, DEFAULT_GROUPING_RADIUS_KM, DEFAULT_IDENTICAL_EPSILON_KM,
    DEFAULT_OVERLAP_RADIUS_KM,
};

#[derive(Parser)]
#[command(name = "track-overlap")]
#[command(about = "Group track points and find proximity circle overlaps", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose debug output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Partition the points of a track into location groups
    Group {
        /// GPX file to read
        file: PathBuf,

        /// Grouping radius in kilometres
        #[arg(short, long, default_value_t = DEFAULT_GROUPING_RADIUS_KM)]
        radius: f64,
    },

    /// Find where the proximity circles of two tracks cross
    Overlaps {
        /// First GPX file
        track_a: PathBuf,

        /// Second GPX file
        track_b: PathBuf,

        /// Proximity circle radius in kilometres
        #[arg(short, long, default_value_t = DEFAULT_OVERLAP_RADIUS_KM)]
        radius: f64,

        /// Distance below which two points count as identical, in kilometres
        #[arg(short, long, default_value_t = DEFAULT_IDENTICAL_EPSILON_KM)]
        epsilon: f64,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format(|buf, record| writeln!(buf, "[{:5}] {}", record.level(), record.args()))
        .init();

    let result = match cli.command {
        Commands::Group { file, radius } => run_group(&file, radius),
        Commands::Overlaps {
            track_a,
            track_b,
            radius,
            epsilon,
        } => run_overlaps(&track_a, &track_b, radius, epsilon),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_group(file: &Path, radius: f64) -> Result<(), String> {
    let config = GroupingConfig::with_radius(radius);
    config.validate().map_err(|e| e.to_string())?;

    let points = read_points(file)?;
    let groups: Vec<GroupSummary> = group_points_with_config(points, &config)
        .map(|group| group.summary())
        .collect();

    info!("{} groups at {} km", groups.len(), config.radius_km);
    print_json(&groups)
}

fn run_overlaps(track_a: &Path, track_b: &Path, radius: f64, epsilon: f64) -> Result<(), String> {
    let config = OverlapConfig {
        radius_km: radius,
        identical_epsilon_km: epsilon,
    };
    config.validate().map_err(|e| e.to_string())?;

    let points_a = read_points(track_a)?;
    let points_b = read_points(track_b)?;
    let overlaps: Vec<TrackOverlap> = find_track_overlaps(&points_a, &points_b, &config);

    info!(
        "{} overlaps between {} and {} points",
        overlaps.len(),
        points_a.len(),
        points_b.len()
    );
    print_json(&overlaps)
}

fn read_points(path: &Path) -> Result<Vec<GeoPoint>, String> {
    load_track(path).map_err(|e| format!("{}: {}", path.display(), e))
}

fn print_json<T: Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}
