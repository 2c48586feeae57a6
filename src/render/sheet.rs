use std::path::Path;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::{AppError, RenderError};
use crate::geocode::Geocoder;
use crate::types::activity::TrackPoint;
use crate::types::address::AddressFields;

const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Serialize)]
pub struct SheetRow {
    pub timestamp: String,
    pub latitude: f64,
    pub longitude: f64,
    pub road: String,
    pub city: String,
    pub postcode: String,
    pub country: String,
}

pub fn row(point: &TrackPoint, time: DateTime<Utc>, address: AddressFields) -> SheetRow {
    SheetRow {
        timestamp: time.format(TIME_FORMAT).to_string(),
        latitude: round3(point.lat),
        longitude: round3(point.lon),
        road: address.road,
        city: address.city,
        postcode: address.postcode,
        country: address.country,
    }
}

/// One row per timestamped track point, address columns resolved through
/// the geocode cache one point at a time.
pub async fn export(
    path: &Path,
    points: &[TrackPoint],
    geocoder: &Geocoder,
) -> Result<(), AppError> {
    let mut writer = csv::Writer::from_path(path).map_err(RenderError::from)?;

    for point in points {
        let Some(time) = point.time else { continue };
        let address = geocoder.resolve(point.lat, point.lon).await?;
        writer
            .serialize(row(point, time, address))
            .map_err(RenderError::from)?;
    }

    writer.flush().map_err(RenderError::from)?;
    Ok(())
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
