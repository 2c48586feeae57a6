use crate::types::activity::TrackPoint;

const DISPLAY_EPSILON: f64 = 0.0001;

/// Reduces a track to the points worth rendering: a point is dropped only
/// when both its latitude and longitude are within `DISPLAY_EPSILON` of the
/// last kept point. Single greedy pass, no lookback beyond that point, so
/// GPS jitter collapses without smoothing the path.
pub fn display_points(points: &[TrackPoint]) -> Vec<TrackPoint> {
    let mut kept: Vec<TrackPoint> = Vec::with_capacity(points.len());

    for point in points {
        let moved = match kept.last() {
            Some(prev) => {
                (point.lat - prev.lat).abs() >= DISPLAY_EPSILON
                    || (point.lon - prev.lon).abs() >= DISPLAY_EPSILON
            }
            None => true,
        };
        if moved {
            kept.push(point.clone());
        }
    }

    kept
}
