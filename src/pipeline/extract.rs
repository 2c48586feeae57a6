use chrono::DateTime;
use fitparser::profile::MesgNum;

use crate::error::ParseError;
use crate::types::activity::{SessionSummary, SessionSummaryBuilder, TrackPoint};

#[derive(Debug)]
pub struct Extraction {
    pub points: Vec<TrackPoint>,
    pub summary: Option<SessionSummary>,
}

/// Walks the decoded record stream once, pulling position fields from
/// `record` messages and summary fields from `session` messages. Messages
/// of any other kind, and fields with unexpected value types, are skipped.
pub fn parse(bytes: &[u8]) -> Result<Extraction, ParseError> {
    let data = fitparser::from_bytes(bytes)
        .map_err(|e| ParseError::InvalidFit(format!("Failed to parse FIT file: {}", e)))?;

    let mut points = Vec::new();
    let mut builder = SessionSummaryBuilder::default();

    for record in data {
        match record.kind() {
            MesgNum::Record => {
                let mut lat = None;
                let mut lon = None;
                let mut time = None;

                for field in record.fields() {
                    match field.name() {
                        "position_lat" => {
                            if let fitparser::Value::SInt32(val) = field.value() {
                                lat = Some(semicircles_to_degrees(*val));
                            }
                        }
                        "position_long" => {
                            if let fitparser::Value::SInt32(val) = field.value() {
                                lon = Some(semicircles_to_degrees(*val));
                            }
                        }
                        "timestamp" => {
                            if let fitparser::Value::Timestamp(val) = field.value() {
                                time = DateTime::from_timestamp(val.timestamp(), 0);
                            }
                        }
                        _ => {}
                    }
                }

                if let (Some(lat), Some(lon)) = (lat, lon) {
                    points.push(TrackPoint {
                        lat: round5(lat),
                        lon: round5(lon),
                        time,
                    });
                }
            }
            MesgNum::Session => {
                builder.mark_session();

                for field in record.fields() {
                    match field.name() {
                        "start_time" => {
                            if let fitparser::Value::Timestamp(val) = field.value() {
                                if let Some(start) = DateTime::from_timestamp(val.timestamp(), 0) {
                                    builder.set_start(start);
                                }
                            }
                        }
                        "total_elapsed_time" => {
                            if let fitparser::Value::Float64(val) = field.value() {
                                builder.set_elapsed_seconds(*val);
                            }
                        }
                        "total_distance" => {
                            if let fitparser::Value::Float64(val) = field.value() {
                                builder.set_distance_meters(*val);
                            }
                        }
                        "sport" => {
                            if let fitparser::Value::String(val) = field.value() {
                                builder.set_sport(val.clone());
                            }
                        }
                        _ => {}
                    }
                }
            }
            _ => {}
        }
    }

    if points.is_empty() {
        return Err(ParseError::EmptyFile);
    }

    Ok(Extraction {
        points,
        summary: builder.finish(),
    })
}

pub fn semicircles_to_degrees(semicircles: i32) -> f64 {
    (semicircles as f64) * (180.0 / 2_147_483_648.0)
}

pub fn round5(value: f64) -> f64 {
    (value * 100_000.0).round() / 100_000.0
}
