use std::fs;
use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trackviz_rs::cli::{Cli, OutputKind};
use trackviz_rs::config::Config;
use trackviz_rs::error::{AppError, GeocodeError};
use trackviz_rs::geocode::{cache::GeocodeCache, Geocoder};
use trackviz_rs::pipeline::{extract, filter};
use trackviz_rs::render;

const SUMMARY_FILE: &str = "general_information.txt";
const COORDINATES_FILE: &str = "coordinates.txt";
const MAP_FILE: &str = "route_map.html";
const KML_FILE: &str = "map.kml";
const SHEET_FILE: &str = "geocoded_points.csv";

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trackviz_rs=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = Config::from_env();

    if let Err(err) = run(cli, config).await {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli, config: Config) -> Result<(), AppError> {
    if !cli.file.is_file() {
        return Err(AppError::BadRequest(format!(
            "file not found: {}",
            cli.file.display()
        )));
    }
    if !is_fit_file(&cli.file) {
        return Err(AppError::BadRequest(format!(
            "not a FIT file: {}",
            cli.file.display()
        )));
    }

    tracing::info!("reading {}", cli.file.display());
    let bytes = fs::read(&cli.file)?;

    tracing::info!("decoding FIT file");
    let extraction = extract::parse(&bytes)?;
    tracing::info!("extracted {} track points", extraction.points.len());

    match &extraction.summary {
        Some(summary) => {
            tracing::info!("writing session summary to {SUMMARY_FILE}");
            fs::write(SUMMARY_FILE, render::summary::render(summary))?;
        }
        None => tracing::warn!("no session record in input, skipping {SUMMARY_FILE}"),
    }

    tracing::info!("writing coordinate dump to {COORDINATES_FILE}");
    fs::write(COORDINATES_FILE, render::coordinate_dump(&extraction.points))?;

    match cli.output {
        OutputKind::Html => {
            let displayed = filter::display_points(&extraction.points);
            tracing::info!(
                "rendering map with {} of {} points to {MAP_FILE}",
                displayed.len(),
                extraction.points.len()
            );
            fs::write(
                MAP_FILE,
                render::map::render(&extraction.points[0], &displayed),
            )?;
        }
        OutputKind::Kml => {
            tracing::info!("rendering KML to {KML_FILE}");
            fs::write(KML_FILE, render::kml::render(&extraction.points)?)?;
        }
    }

    if cli.sheet {
        let cache = GeocodeCache::open(&config.cache_path).map_err(GeocodeError::from)?;
        let geocoder = Geocoder::new(&config, cache)?;
        tracing::info!("exporting geocoded spreadsheet to {SHEET_FILE}");
        render::sheet::export(Path::new(SHEET_FILE), &extraction.points, &geocoder).await?;
    }

    tracing::info!("done");
    Ok(())
}

fn is_fit_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("fit"))
}
