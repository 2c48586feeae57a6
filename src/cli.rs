use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Debug, Parser)]
#[command(
    name = "trackviz",
    version,
    about = "Decode a FIT activity into a route map or KML file plus summary statistics"
)]
pub struct Cli {
    /// Path to the FIT activity file
    #[arg(short, long)]
    pub file: PathBuf,

    /// Kind of route output to generate
    #[arg(short = 't', long = "type", value_enum)]
    pub output: OutputKind,

    /// Also export a geocoded spreadsheet of timestamped track points
    #[arg(long)]
    pub sheet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputKind {
    /// Interactive Leaflet map
    Html,
    /// KML geo-interchange file
    Kml,
}
