pub mod kml;
pub mod map;
pub mod sheet;
pub mod summary;

use crate::types::activity::TrackPoint;

/// Shortest decimal form that round-trips, so 20.0 stays "20.0" and 5-dp
/// coordinates keep their precision without trailing zeros.
pub(crate) fn fmt_coord(value: f64) -> String {
    format!("{value:?}")
}

/// One `lat, lon` line per raw track point, archival order.
pub fn coordinate_dump(points: &[TrackPoint]) -> String {
    let mut out = String::new();
    for point in points {
        out.push_str(&fmt_coord(point.lat));
        out.push_str(", ");
        out.push_str(&fmt_coord(point.lon));
        out.push('\n');
    }
    out
}
