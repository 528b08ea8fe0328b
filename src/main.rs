//! Survey Consolidate CLI
//!
//! Runs the consolidation engine over JSON point files.
//!
//! Usage:
//!     survey-consolidate consolidate --points points.json --boundary city.json --output merged.json
//!     survey-consolidate neighbors --points points.json
//!     survey-consolidate screen --input field.txt
//!     survey-consolidate check-boundary --boundary city.json

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use survey_consolidate::adapters::settings::{Settings, SettingsError};
use survey_consolidate::core::ConfigError;
use survey_consolidate::{Boundary, NeighborBackend, Pipeline, SurveyPoint};

/// Survey Consolidate - merge repeated measurements of survey monuments
#[derive(Parser)]
#[command(name = "survey-consolidate")]
#[command(version)]
#[command(about = "Boundary filter and duplicate merge for survey control points", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter by boundary and merge duplicate measurements
    Consolidate {
        /// JSON array of survey points
        #[arg(short, long)]
        points: String,

        /// JSON array of boundary vertices ({"x": .., "y": ..})
        #[arg(short, long)]
        boundary: Option<String>,

        /// Settings file
        #[arg(short, long)]
        settings: Option<String>,

        /// Override the neighbor index from settings
        #[arg(long, value_parser = parse_backend)]
        backend: Option<NeighborBackend>,

        /// Write the full result as JSON here
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Report nearby and mergeable points without writing anything
    Neighbors {
        /// JSON array of survey points
        #[arg(short, long)]
        points: String,

        /// Settings file
        #[arg(short, long)]
        settings: Option<String>,
    },

    /// Print the lines of a field file that pass the keyword rules
    Screen {
        /// Field file
        #[arg(short, long)]
        input: String,

        /// Settings file
        #[arg(short, long)]
        settings: Option<String>,
    },

    /// Check a boundary file is usable
    CheckBoundary {
        /// JSON array of boundary vertices
        #[arg(short, long)]
        boundary: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Settings(#[from] SettingsError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Boundary(#[from] survey_consolidate::BoundaryError),
}

fn parse_backend(s: &str) -> Result<NeighborBackend, String> {
    match s {
        "flat" => Ok(NeighborBackend::Flat),
        "tree" | "rtree" => Ok(NeighborBackend::Tree),
        other => Err(format!("unknown backend '{}', expected flat or tree", other)),
    }
}

fn expand_path(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}

fn read_text(path: &Path) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

fn read_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, CliError> {
    let path = expand_path(path);
    let text = read_text(&path)?;
    serde_json::from_str(&text).map_err(|source| CliError::Json { path, source })
}

fn load_settings(path: Option<&str>) -> Result<Settings, CliError> {
    match path {
        Some(p) => Ok(Settings::load(expand_path(p))?),
        None => Ok(Settings::default()),
    }
}

fn cmd_consolidate(
    points_path: &str,
    boundary_path: Option<&str>,
    settings_path: Option<&str>,
    backend: Option<NeighborBackend>,
    output: Option<&str>,
) -> Result<(), CliError> {
    let mut settings = load_settings(settings_path)?;
    if let Some(backend) = backend {
        settings.backend = backend;
    }

    let points: Vec<SurveyPoint> = read_json(points_path)?;
    let boundary: Option<Boundary> = boundary_path.map(read_json).transpose()?;
    log::info!("Loaded {} points from {}", points.len(), points_path);

    let total = points.len();
    let pipeline = Pipeline::from_settings(&settings, boundary)?;
    let outcome = pipeline.run(points);
    let summary = outcome.consolidation.summary();

    println!("╔══════════════════════════════════════════════════════════════════╗");
    println!("║                    CONSOLIDATION SUMMARY                         ║");
    println!("╠══════════════════════════════════════════════════════════════════╣");
    println!("║  Points loaded:     {:45} ║", total);
    println!("║  Outside boundary:  {:45} ║", outcome.outside.len());
    println!("║  Nearby groups:     {:45} ║", summary.nearby_groups);
    println!("║  Merges:            {:45} ║", summary.merges);
    println!("║  Removed:           {:45} ║", summary.removed);
    println!("║  Kept:              {:45} ║", summary.kept);
    println!("╚══════════════════════════════════════════════════════════════════╝");

    if let Some(out) = output {
        let path = expand_path(out);
        let json = serde_json::to_string_pretty(&outcome).map_err(|source| CliError::Json {
            path: path.clone(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| CliError::Write {
            path: path.clone(),
            source,
        })?;
        println!("Wrote result to {:?}", path);
    }

    Ok(())
}

fn cmd_neighbors(points_path: &str, settings_path: Option<&str>) -> Result<(), CliError> {
    let settings = load_settings(settings_path)?;
    let points: Vec<SurveyPoint> = read_json(points_path)?;

    let pipeline = Pipeline::from_settings(&settings, None)?;
    let result = pipeline.engine().consolidate(&points);

    if result.clusters.is_empty() {
        println!("No points within {} of each other.", settings.proximity_threshold);
        return Ok(());
    }

    for cluster in &result.clusters {
        let anchor = &points[cluster.anchor];
        println!("{}", anchor);
        println!("===================================================================================");
        println!("  Close points (<= {}):", settings.proximity_threshold);
        for &i in &cluster.nearby {
            println!("\t{}", points[i]);
        }
        if cluster.is_merge() {
            println!("  Merged (<= {}):", settings.merge_threshold);
            for &i in &cluster.members {
                println!("\t{}", points[i]);
            }
        }
        println!();
    }

    Ok(())
}

fn cmd_screen(input: &str, settings_path: Option<&str>) -> Result<(), CliError> {
    let settings = load_settings(settings_path)?;
    let text = read_text(&expand_path(input))?;

    let accepted = settings.keywords.screen(text.lines());
    for line in &accepted {
        println!("{}", line);
    }
    log::info!("{} of {} lines accepted", accepted.len(), text.lines().count());
    Ok(())
}

fn cmd_check_boundary(boundary_path: &str) -> Result<(), CliError> {
    let boundary: Boundary = read_json(boundary_path)?;
    boundary.validate()?;
    println!("Boundary OK: {} vertices", boundary.len());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Consolidate {
            points,
            boundary,
            settings,
            backend,
            output,
        } => cmd_consolidate(
            &points,
            boundary.as_deref(),
            settings.as_deref(),
            backend,
            output.as_deref(),
        ),
        Commands::Neighbors { points, settings } => cmd_neighbors(&points, settings.as_deref()),
        Commands::Screen { input, settings } => cmd_screen(&input, settings.as_deref()),
        Commands::CheckBoundary { boundary } => cmd_check_boundary(&boundary),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
