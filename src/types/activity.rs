use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackPoint {
    pub lat: f64,
    pub lon: f64,
    pub time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub elapsed_minutes: u64,
    pub distance_km: f64,
    pub sport: String,
}

/// Accumulates session-message fields across the record stream, last value
/// wins per field. Finalized once after the stream is fully consumed.
#[derive(Debug, Default)]
pub struct SessionSummaryBuilder {
    start: Option<DateTime<Utc>>,
    elapsed_seconds: Option<f64>,
    distance_meters: Option<f64>,
    sport: Option<String>,
    saw_session: bool,
}

impl SessionSummaryBuilder {
    pub fn mark_session(&mut self) {
        self.saw_session = true;
    }

    pub fn set_start(&mut self, start: DateTime<Utc>) {
        self.start = Some(start);
    }

    pub fn set_elapsed_seconds(&mut self, seconds: f64) {
        self.elapsed_seconds = Some(seconds);
    }

    pub fn set_distance_meters(&mut self, meters: f64) {
        self.distance_meters = Some(meters);
    }

    pub fn set_sport(&mut self, sport: String) {
        self.sport = Some(sport);
    }

    /// Returns `None` when the stream carried no usable session message.
    pub fn finish(self) -> Option<SessionSummary> {
        if !self.saw_session {
            return None;
        }
        let (start, elapsed_seconds) = match (self.start, self.elapsed_seconds) {
            (Some(start), Some(elapsed)) => (start, elapsed),
            _ => {
                tracing::warn!("session record missing start_time or total_elapsed_time");
                return None;
            }
        };

        Some(SessionSummary {
            start,
            end: start + Duration::milliseconds((elapsed_seconds * 1000.0) as i64),
            elapsed_minutes: (elapsed_seconds / 60.0) as u64,
            distance_km: self
                .distance_meters
                .map(|m| (m / 10.0).round() / 100.0)
                .unwrap_or(0.0),
            sport: self.sport.unwrap_or_else(|| "unknown".to_string()),
        })
    }
}
